// Business domains
pub mod auth;
pub mod fixtures;
pub mod roster;
