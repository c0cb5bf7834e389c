// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Re-export configuration components

pub mod env;
pub mod store;

pub use env::Config;
pub use store::init_store;
