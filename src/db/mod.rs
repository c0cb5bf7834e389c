// src/db/mod.rs
// DOCUMENTATION: Data access module organization
// PURPOSE: Re-export store, seed loader and repositories

pub mod favorite_repository;
pub mod offer_repository;
pub mod review_repository;
pub mod seed;
pub mod store;
pub mod user_repository;
pub mod venue_repository;

pub use favorite_repository::*;
pub use offer_repository::*;
pub use review_repository::*;
pub use store::*;
pub use user_repository::*;
pub use venue_repository::*;
