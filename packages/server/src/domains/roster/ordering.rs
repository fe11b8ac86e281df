//! Display ordering for a roster.
//!
//! Players are grouped by position from goalkeeper forward. Codes outside the
//! table share one trailing bucket.

use std::cmp::Ordering;

use super::models::Player;

/// Priority given to any position code not listed in `POSITION_PRIORITIES`.
pub const UNKNOWN_POSITION_PRIORITY: u8 = 99;

/// Known position codes and their display priority (lowest first).
pub const POSITION_PRIORITIES: [(&str, u8); 15] = [
    ("POR", 1),
    ("LD", 2),
    ("DFC", 3),
    ("LI", 4),
    ("CAD", 5),
    ("CAI", 6),
    ("MCD", 7),
    ("MC", 8),
    ("MCO", 9),
    ("MD", 10),
    ("MI", 11),
    ("SD", 12),
    ("DC", 13),
    ("EI", 14),
    ("ED", 15),
];

/// Priority for a position code, case-insensitive and ignoring surrounding
/// whitespace.
pub fn position_priority(position: &str) -> u8 {
    let position = position.trim();
    POSITION_PRIORITIES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(position))
        .map(|(_, priority)| *priority)
        .unwrap_or(UNKNOWN_POSITION_PRIORITY)
}

/// Total order used for roster display: position priority, then name, then id.
pub fn compare_players(a: &Player, b: &Player) -> Ordering {
    position_priority(&a.position)
        .cmp(&position_priority(&b.position))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort a roster in place for display.
pub fn sort_roster(players: &mut [Player]) {
    players.sort_by(compare_players);
}
