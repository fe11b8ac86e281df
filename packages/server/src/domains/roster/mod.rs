//! Roster domain - a manager's squad of players
//!
//! Players are always scoped by the owning user. Listing applies the
//! position-priority ordering from `ordering`.

pub mod actions;
pub mod data;
pub mod models;
pub mod ordering;

pub use actions::{add_player, delete_player, list_players, roster_size, update_player};
pub use data::{NewPlayer, PlayerForm, PlayerUpdate, PlayerUpdateForm};
pub use models::Player;
