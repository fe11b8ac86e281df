pub mod player_form;

pub use player_form::{NewPlayer, PlayerForm, PlayerUpdate, PlayerUpdateForm};
