//! The read-only lookup capability validators consult

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::{Item, Move, Species};
use crate::error::DexError;
use crate::id::to_id;

/// Species, move and item lookups for one generation.
///
/// Implementors only need the three raw lookups and `generation`; the `get_*`
/// methods fall back to placeholder records so callers never handle a miss.
/// All lookups are case and punctuation insensitive.
pub trait Dex {
    /// Generation the dex describes
    fn generation(&self) -> u8;

    fn species(&self, name: &str) -> Option<&Species>;

    fn move_data(&self, name: &str) -> Option<&Move>;

    fn item(&self, name: &str) -> Option<&Item>;

    /// Look up a species, falling back to [`Species::unknown`]
    fn get_species(&self, name: &str) -> Cow<'_, Species> {
        match self.species(name) {
            Some(species) => Cow::Borrowed(species),
            None => {
                tracing::trace!(species = name, "unknown species");
                Cow::Owned(Species::unknown(name))
            }
        }
    }

    /// Look up a move, falling back to [`Move::unknown`]
    fn get_move(&self, name: &str) -> Cow<'_, Move> {
        match self.move_data(name) {
            Some(mv) => Cow::Borrowed(mv),
            None => {
                tracing::trace!(move_name = name, "unknown move");
                Cow::Owned(Move::unknown(name))
            }
        }
    }

    /// Look up an item, falling back to [`Item::unknown`]
    fn get_item(&self, name: &str) -> Cow<'_, Item> {
        match self.item(name) {
            Some(item) => Cow::Borrowed(item),
            None => Cow::Owned(Item::unknown(name)),
        }
    }
}

/// Serialized form of a [`MemoryDex`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DexData {
    #[serde(rename = "gen")]
    pub generation: u8,

    #[serde(default)]
    pub species: Vec<Species>,

    #[serde(default)]
    pub moves: Vec<Move>,

    #[serde(default)]
    pub items: Vec<Item>,
}

/// A dex held entirely in memory, keyed by id
#[derive(Debug, Clone, Default)]
pub struct MemoryDex {
    generation: u8,
    species: HashMap<String, Species>,
    moves: HashMap<String, Move>,
    items: HashMap<String, Item>,
}

impl MemoryDex {
    /// Create an empty dex for a generation
    pub fn new(generation: u8) -> Self {
        Self {
            generation,
            ..Self::default()
        }
    }

    /// Add or replace a species. An empty base species defaults to the name.
    pub fn insert_species(&mut self, mut species: Species) -> Option<Species> {
        if species.base_species.is_empty() {
            species.base_species = species.name.clone();
        }
        self.species.insert(to_id(&species.name), species)
    }

    /// Add or replace a move. An empty id is derived from the name.
    pub fn insert_move(&mut self, mut mv: Move) -> Option<Move> {
        if mv.id.is_empty() {
            mv.id = to_id(&mv.name);
        }
        self.moves.insert(to_id(&mv.name), mv)
    }

    /// Add or replace an item. An empty id is derived from the name.
    pub fn insert_item(&mut self, mut item: Item) -> Option<Item> {
        if item.id.is_empty() {
            item.id = to_id(&item.name);
        }
        self.items.insert(to_id(&item.name), item)
    }

    /// Build a dex from its serialized form, rejecting duplicate ids
    pub fn from_data(data: DexData) -> Result<Self, DexError> {
        if data.generation == 0 {
            return Err(DexError::InvalidGeneration(data.generation));
        }

        let mut dex = Self::new(data.generation);
        for species in data.species {
            let id = to_id(&species.name);
            if dex.insert_species(species).is_some() {
                return Err(DexError::DuplicateEntry { kind: "species", id });
            }
        }
        for mv in data.moves {
            let id = to_id(&mv.name);
            if dex.insert_move(mv).is_some() {
                return Err(DexError::DuplicateEntry { kind: "move", id });
            }
        }
        for item in data.items {
            let id = to_id(&item.name);
            if dex.insert_item(item).is_some() {
                return Err(DexError::DuplicateEntry { kind: "item", id });
            }
        }

        tracing::debug!(
            generation = dex.generation,
            species = dex.species.len(),
            moves = dex.moves.len(),
            items = dex.items.len(),
            "loaded dex"
        );
        Ok(dex)
    }

    /// Parse a dex from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, DexError> {
        Self::from_data(serde_json::from_str(json)?)
    }

    /// Parse a dex from a JSON reader
    pub fn from_reader(reader: impl Read) -> Result<Self, DexError> {
        Self::from_data(serde_json::from_reader(reader)?)
    }

    /// Load a dex from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DexError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl Dex for MemoryDex {
    fn generation(&self) -> u8 {
        self.generation
    }

    fn species(&self, name: &str) -> Option<&Species> {
        self.species.get(&to_id(name))
    }

    fn move_data(&self, name: &str) -> Option<&Move> {
        self.moves.get(&to_id(name))
    }

    fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(&to_id(name))
    }
}
