// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod favorite_service;
pub mod offer_service;
pub mod rate_limit;
pub mod review_service;
pub mod user_service;
pub mod venue_service;

pub use favorite_service::*;
pub use offer_service::*;
pub use rate_limit::*;
pub use review_service::*;
pub use user_service::*;
pub use venue_service::*;
