//! Roster domain actions
//!
//! Every action takes the owning `UserId` from the request's session context.

mod add_player;
mod delete_player;
mod list_players;
mod update_player;

pub use add_player::add_player;
pub use delete_player::delete_player;
pub use list_players::{list_players, roster_size};
pub use update_player::update_player;
