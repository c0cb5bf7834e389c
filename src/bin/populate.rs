// src/bin/populate.rs
// DOCUMENTATION: Loads venues and offers into a running server
// PURPOSE: Post every record of a seed file to the admin endpoints

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::env;
use std::fs;
use std::process;
use std::time::{Duration, Instant};

// --- ANSI terminal colors ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const DEFAULT_SEED_FILE: &str = "data/seed.json";

/// Seed file layout: records are forwarded untouched, the server validates them
#[derive(Deserialize, Debug, Default)]
struct SeedFile {
    #[serde(default)]
    venues: Vec<Value>,
    #[serde(default)]
    offers: Vec<Value>,
}

#[derive(Debug)]
struct PostResult {
    kind: &'static str,
    label: String,
    outcome: Result<i64, String>,
    duration_secs: f64,
}

struct Populator {
    base_url: String,
    admin_token: String,
    client: Client,
    results: Vec<PostResult>,
}

impl Populator {
    fn new(base_url: String, admin_token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            admin_token,
            client,
            results: Vec::new(),
        })
    }

    async fn check_service_health(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// POST one record and return the id the server assigned
    async fn post_record(&self, path: &str, record: &Value) -> Result<i64> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header("X-Admin-Token", &self.admin_token)
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            bail!("HTTP {} - {}", status, body);
        }

        let created: Value = response.json().await.context("Failed to parse response JSON")?;
        created["id"].as_i64().context("Response without id")
    }

    async fn load(&mut self, kind: &'static str, path: &str, records: &[Value]) {
        let total = records.len();

        for (i, record) in records.iter().enumerate() {
            let label = record["name"]
                .as_str()
                .or_else(|| record["title"].as_str())
                .unwrap_or("<unnamed>")
                .to_string();
            println!("{}[{}/{}] {} {}...{}", CYAN, i + 1, total, kind, label, RESET);

            let start_time = Instant::now();
            let outcome = self.post_record(path, record).await.map_err(|e| e.to_string());
            let duration_secs = start_time.elapsed().as_secs_f64();

            match &outcome {
                Ok(id) => println!("{}  created with id {}{}", GREEN, id, RESET),
                Err(e) => println!("{}  failed: {}{}", RED, e, RESET),
            }

            self.results.push(PostResult {
                kind,
                label,
                outcome,
                duration_secs,
            });
        }
    }

    async fn run(&mut self, seed: SeedFile) {
        println!("\n{}Checking service status...{}", CYAN, RESET);
        if !self.check_service_health().await {
            println!("{}Service unavailable at {}{}", RED, self.base_url, RESET);
            println!("{}Please ensure toddlespot is running (cargo run){}", YELLOW, RESET);
            process::exit(1);
        }
        println!("{}Service available{}\n", GREEN, RESET);

        println!(
            "{}Loading {} venues and {} offers{}\n",
            BOLD,
            seed.venues.len(),
            seed.offers.len(),
            RESET
        );

        self.load("venue", "/admin/venues", &seed.venues).await;
        self.load("offer", "/admin/offers", &seed.offers).await;

        self.print_summary();
    }

    fn print_summary(&self) {
        println!("\n{}Summary{}", BOLD, RESET);
        println!("──────────────────────────────────────────────────────────────────────");
        println!("{:<8} {:<44} {:>8} {:>8}", "Kind", "Record", "Id", "Time");
        println!("──────────────────────────────────────────────────────────────────────");

        let mut created = 0;
        let mut failed = 0;

        for res in &self.results {
            let id = match &res.outcome {
                Ok(id) => {
                    created += 1;
                    id.to_string()
                }
                Err(_) => {
                    failed += 1;
                    "-".to_string()
                }
            };
            println!(
                "{:<8} {:<44} {:>8} {:>7.2}s",
                res.kind, res.label, id, res.duration_secs
            );
        }

        println!("──────────────────────────────────────────────────────────────────────");
        println!("  Created: {}{}{}", GREEN, created, RESET);
        if failed > 0 {
            println!("  Failed:  {}{}{}", RED, failed, RESET);
        }
    }
}

fn read_seed_file(path: &str) -> Result<SeedFile> {
    let raw = fs::read_to_string(path).with_context(|| format!("Cannot read {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid seed file {}", path))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let admin_token = env::var("ADMIN_TOKEN").context("ADMIN_TOKEN must be set in .env")?;
    let base_url =
        env::var("TODDLESPOT_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let seed_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SEED_FILE.to_string());

    let seed = read_seed_file(&seed_path)?;

    let mut populator = Populator::new(base_url, admin_token)?;
    populator.run(seed).await;

    Ok(())
}
