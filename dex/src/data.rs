//! Species, move and item records

use serde::{Deserialize, Serialize};

use crate::id::to_id;

fn default_true() -> bool {
    true
}

fn default_tier() -> String {
    "Illegal".to_string()
}

/// Species metadata (a "template")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    /// Full species name including forme, e.g. "Charizard-Mega-X"
    pub name: String,

    /// Name of the base forme ("Charizard" for "Charizard-Mega-X")
    #[serde(default)]
    pub base_species: String,

    /// Forme tag ("Mega-X", "Alola", ...), empty for the base forme
    #[serde(default)]
    pub forme: String,

    /// National dex number. Pokestar Studios entries sit at -5000 and below.
    pub num: i32,

    /// Generation the species was introduced in
    #[serde(default, rename = "gen")]
    pub generation: u8,

    #[serde(default = "default_tier")]
    pub tier: String,

    #[serde(default)]
    pub egg_groups: Vec<String>,

    /// Pre-evolution, if any
    #[serde(default)]
    pub prevo: Option<String>,

    /// Not fully evolved
    #[serde(default)]
    pub nfe: bool,

    #[serde(default)]
    pub is_nonstandard: bool,

    #[serde(default)]
    pub is_mega: bool,

    /// Forme can only be assumed during a battle
    #[serde(default)]
    pub battle_only: bool,

    /// Move the species must know (Keldeo-Resolute) or transforms with (Meloetta-Pirouette)
    #[serde(default)]
    pub required_move: Option<String>,

    #[serde(default = "default_true")]
    pub exists: bool,
}

impl Species {
    /// Create a base-forme species
    pub fn new(name: impl Into<String>, num: i32, generation: u8) -> Self {
        let name = name.into();
        Self {
            base_species: name.clone(),
            name,
            forme: String::new(),
            num,
            generation,
            tier: "OU".to_string(),
            egg_groups: Vec::new(),
            prevo: None,
            nfe: false,
            is_nonstandard: false,
            is_mega: false,
            battle_only: false,
            required_move: None,
            exists: true,
        }
    }

    /// Create a forme of `base`, named "{base}-{forme}"
    pub fn forme_of(base: &Species, forme: &str) -> Self {
        Self {
            name: format!("{}-{}", base.name, forme),
            base_species: base.name.clone(),
            forme: forme.to_string(),
            ..base.clone()
        }
    }

    /// Placeholder returned for names missing from the dex
    pub fn unknown(name: &str) -> Self {
        Self {
            tier: "Illegal".to_string(),
            exists: false,
            ..Self::new(name, 0, 0)
        }
    }

    /// Lookup id of this species
    pub fn id(&self) -> String {
        to_id(&self.name)
    }

    /// First listed egg group, if any
    pub fn primary_egg_group(&self) -> Option<&str> {
        self.egg_groups.first().map(String::as_str)
    }

    /// Has no pre-evolution and does not evolve further
    pub fn is_fully_evolved_root(&self) -> bool {
        self.prevo.is_none() && !self.nfe
    }
}

/// Move metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    /// Lookup id; filled from the name when absent
    #[serde(default)]
    pub id: String,

    pub name: String,

    /// Generation the move was introduced in
    #[serde(default, rename = "gen")]
    pub generation: u8,

    #[serde(default)]
    pub is_nonstandard: bool,

    #[serde(default = "default_true")]
    pub exists: bool,
}

impl Move {
    pub fn new(name: impl Into<String>, generation: u8) -> Self {
        let name = name.into();
        Self {
            id: to_id(&name),
            name,
            generation,
            is_nonstandard: false,
            exists: true,
        }
    }

    /// Placeholder returned for names missing from the dex
    pub fn unknown(name: &str) -> Self {
        Self {
            exists: false,
            ..Self::new(name, 0)
        }
    }
}

/// Item metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: String,

    pub name: String,

    /// Species this item mega evolves, for mega stones
    #[serde(default)]
    pub mega_evolves: Option<String>,

    #[serde(default = "default_true")]
    pub exists: bool,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: to_id(&name),
            name,
            mega_evolves: None,
            exists: true,
        }
    }

    /// Create a mega stone for `species`
    pub fn mega_stone(name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            mega_evolves: Some(species.into()),
            ..Self::new(name)
        }
    }

    /// Placeholder returned for names missing from the dex
    pub fn unknown(name: &str) -> Self {
        Self {
            exists: false,
            ..Self::new(name)
        }
    }
}
