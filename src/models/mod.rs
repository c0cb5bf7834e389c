// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod favorite;
pub mod offer;
pub mod rating;
pub mod review;
pub mod user;
pub mod venue;

pub use favorite::*;
pub use offer::*;
pub use rating::*;
pub use review::*;
pub use user::*;
pub use venue::*;
