use serde::Deserialize;

use crate::common::{ManagerError, ManagerResult};

/// Raw add-player form as posted by the browser. Every field arrives as text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerForm {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub grl: String,
    #[serde(default)]
    pub market_value: String,
    #[serde(default)]
    pub salary: String,
}

/// Raw edit-player form. Name and nationality are not editable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerUpdateForm {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub grl: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub market_value: String,
    #[serde(default)]
    pub salary: String,
}

/// A validated player ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub position: String,
    pub name: String,
    pub age: i64,
    pub nationality: String,
    pub grl: i64,
    pub market_value: String,
    pub salary: String,
}

/// Validated replacement values for an existing player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerUpdate {
    pub position: String,
    pub grl: i64,
    pub age: i64,
    pub market_value: String,
    pub salary: String,
}

fn parse_integer(raw: &str, field: &'static str) -> ManagerResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ManagerError::InvalidNumericField { field })
}

impl TryFrom<&PlayerForm> for NewPlayer {
    type Error = ManagerError;

    fn try_from(form: &PlayerForm) -> ManagerResult<Self> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(ManagerError::MissingField { field: "name" });
        }

        Ok(Self {
            position: form.position.trim().to_string(),
            name: name.to_string(),
            age: parse_integer(&form.age, "age")?,
            nationality: form.nationality.trim().to_string(),
            grl: parse_integer(&form.grl, "grl")?,
            market_value: form.market_value.trim().to_string(),
            salary: form.salary.trim().to_string(),
        })
    }
}

impl TryFrom<&PlayerUpdateForm> for PlayerUpdate {
    type Error = ManagerError;

    fn try_from(form: &PlayerUpdateForm) -> ManagerResult<Self> {
        Ok(Self {
            position: form.position.trim().to_string(),
            grl: parse_integer(&form.grl, "grl")?,
            age: parse_integer(&form.age, "age")?,
            market_value: form.market_value.trim().to_string(),
            salary: form.salary.trim().to_string(),
        })
    }
}
