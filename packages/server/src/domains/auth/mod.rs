//! Auth domain - registration and password login
//!
//! Responsibilities:
//! - Username uniqueness on registration
//! - Argon2 password hashing and verification
//!
//! Sessions are issued by the HTTP layer once `login` succeeds.

pub mod actions;
pub mod data;
pub mod models;
pub mod password;

pub use actions::{login, register};
pub use data::Credentials;
pub use models::User;
