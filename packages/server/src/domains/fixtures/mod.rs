//! Fixtures domain - upcoming matches for the matches page

pub mod provider;

pub use provider::{Fixture, FixtureProvider, Odds, PlaceholderFixtures};
