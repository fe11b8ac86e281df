// HTTP routes
pub mod auth;
pub mod error;
pub mod health;
pub mod home;
pub mod matches;
pub mod roster;

pub use auth::*;
pub use health::*;
pub use home::*;
pub use matches::*;
pub use roster::*;
