//! Team and set data model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-stat values keyed by stat id ("hp", "atk", ...).
///
/// Values are kept as raw JSON so malformed entries survive parsing and are
/// coerced where they are checked.
pub type StatSpread = BTreeMap<String, Value>;

/// A team as submitted by a player
pub type Team = Vec<PokemonSet>;

/// One creature on a team, as built in the teambuilder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonSet {
    /// Nickname; dropped when equal to the species
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub species: String,

    /// Held item, empty for none
    #[serde(default)]
    pub item: String,

    #[serde(default)]
    pub ability: String,

    /// Gender ("M", "F"), empty for unset
    #[serde(default)]
    pub gender: String,

    #[serde(default)]
    pub moves: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,

    /// Effort values; Awakening Values in Let's Go
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evs: Option<StatSpread>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ivs: Option<StatSpread>,

    #[serde(default)]
    pub shiny: bool,
}

impl PokemonSet {
    /// Create a set with only a species
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper to set the move list
    pub fn with_moves<I, S>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moves = moves.into_iter().map(Into::into).collect();
        self
    }

    /// Get the display name (nickname if set, otherwise species)
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.species)
    }
}

/// Read a stat entry as a number, if it is one
pub fn stat_number(value: &Value) -> Option<f64> {
    value.as_f64()
}
