// src/services/rate_limit.rs
// DOCUMENTATION: Per-user throttle for review submissions
// PURPOSE: Keep a single user from flooding a venue's ratings

use crate::errors::ToddleError;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Keyed GCRA limiter, one bucket per user id
pub struct ReviewRateLimiter {
    limiter: DefaultKeyedRateLimiter<i32>,
}

impl ReviewRateLimiter {
    /// Allow `per_minute` submissions per user per minute (bursts up to the same amount)
    pub fn per_minute(per_minute: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(per_minute).unwrap_or(NonZeroU32::MIN));
        Self {
            limiter: RateLimiter::keyed(quota),
        }
    }

    /// Consume one submission for `user_id`
    pub fn check(&self, user_id: i32) -> Result<(), ToddleError> {
        self.limiter.check_key(&user_id).map_err(|_| {
            log::warn!("Review rate limit exceeded for user {}", user_id);
            ToddleError::RateLimitExceeded
        })
    }

    /// Drop buckets that have fully replenished
    pub fn cleanup(&self) {
        let before = self.limiter.len();
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
        let after = self.limiter.len();

        if before > after {
            log::debug!("Rate limiter cleanup: removed {} idle users ({} remaining)", before - after, after);
        }
    }
}

/// Start background cleanup task
/// DOCUMENTATION: Periodically forgets users whose quota is full again
pub fn start_cleanup_task(limiter: Arc<ReviewRateLimiter>, interval_seconds: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds));

        loop {
            interval.tick().await;
            limiter.cleanup();
        }
    });
}
