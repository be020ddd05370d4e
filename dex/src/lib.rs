//! Read-only game data for Let's Go team validation.
//!
//! This crate is the lookup side of validation: species, move and item
//! records, format rule tables, and the [`Dex`] trait validators query.
//!
//! ```text
//! letsgo-dex (lookups + formats) ← THIS CRATE
//!        │
//!        ▼
//! letsgo-team (team validator + set normalizer)
//!        │
//!        ▼
//! letsgo-cli (validate team files)
//! ```
//!
//! # Example Usage
//!
//! ```ignore
//! use letsgo_dex::{Dex, Format, MemoryDex};
//!
//! let dex = MemoryDex::load("data/dex.json")?;
//! let format = Format::with_rules("[Gen 7] Let's Go OU", ["-illegal"]);
//!
//! let pikachu = dex.get_species("pikachu-starter");
//! println!("{} (#{}) from gen {}", pikachu.name, pikachu.num, pikachu.generation);
//! ```

mod data;
mod error;
mod format;
mod id;
mod lookup;

pub use data::{Item, Move, Species};
pub use error::DexError;
pub use format::{ALLOW_CAP_RULE, Format, FormatData, ILLEGAL_RULE, RuleTable};
pub use id::to_id;
pub use lookup::{Dex, DexData, MemoryDex};
