// Trait seam for the external fixtures/odds source.
//
// No real sports-data integration exists; `PlaceholderFixtures` stands in for
// it and returns the same data for every user.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::common::UserId;

/// Decimal odds for the three match outcomes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Odds {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

/// An upcoming match shown on the matches page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixture {
    pub home: String,
    pub away: String,
    pub kickoff: String,
    pub odds: Option<Odds>,
}

#[async_trait]
pub trait FixtureProvider: Send + Sync {
    /// Upcoming fixtures relevant to this user's career
    async fn upcoming_fixtures(&self, user_id: UserId) -> Result<Vec<Fixture>>;
}

/// Fixed placeholder data, no network access
#[derive(Debug, Clone, Default)]
pub struct PlaceholderFixtures;

#[async_trait]
impl FixtureProvider for PlaceholderFixtures {
    async fn upcoming_fixtures(&self, _user_id: UserId) -> Result<Vec<Fixture>> {
        Ok(vec![
            Fixture {
                home: "Mi Equipo".to_string(),
                away: "Rival FC".to_string(),
                kickoff: "Jornada 1".to_string(),
                odds: Some(Odds {
                    home: 2.10,
                    draw: 3.25,
                    away: 3.40,
                }),
            },
            Fixture {
                home: "Atlético Ejemplo".to_string(),
                away: "Mi Equipo".to_string(),
                kickoff: "Jornada 2".to_string(),
                odds: None,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_placeholder_is_fixed_and_non_empty() {
        let provider = PlaceholderFixtures;
        let first = provider.upcoming_fixtures(UserId::from(1)).await.unwrap();
        let second = provider.upcoming_fixtures(UserId::from(2)).await.unwrap();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
