//! Auth domain actions - business logic functions
//!
//! Actions are async functions called directly from the HTTP handlers.

mod login;
mod register;

pub use login::login;
pub use register::register;
