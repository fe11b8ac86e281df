// Football Manager - API Core
//
// Career-mode roster management: users register and log in, then manage a
// squad of players that only they can see or change.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
