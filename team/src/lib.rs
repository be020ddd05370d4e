//! Team validation for Pokemon Showdown's Let's Go formats.
//!
//! Two entry points run before a battle starts:
//!
//! - [`validate_team`] checks team-wide constraints (roster size, starter
//!   exclusivity).
//! - [`normalize_set`] checks one set and rewrites it in place (ability,
//!   gender, duplicate moves, mega stones, battle-only formes).
//!
//! Both return human-readable problem strings; an empty list means legal.
//! Most checks only run when the format carries the `-illegal` rule.
//!
//! # Example Usage
//!
//! ```ignore
//! use letsgo_dex::{Format, MemoryDex};
//! use letsgo_team::{PokemonRule, PokemonSet, ValidatorRule};
//!
//! let dex = MemoryDex::load("data/dex.json")?;
//! let format = Format::with_rules("[Gen 7] Let's Go OU", ["-illegal"]);
//! let rule = PokemonRule::new(&dex);
//!
//! let mut team = vec![PokemonSet::new("Pikachu-Starter").with_moves(["Zippy Zap"])];
//! let mut problems = rule.on_validate_team(&team, Some(&format));
//! for set in &mut team {
//!     problems.extend(rule.on_change_set(set, Some(&format)));
//! }
//! ```

mod awakening;
mod moves;
mod normalize;
mod rule;
mod set;
mod validate;

#[cfg(test)]
mod fixtures;

pub use awakening::{AwakeningValues, awakening_values};
pub use moves::dedup_moves;
pub use normalize::{
    MAX_LEVEL, MAX_MOVES, MAX_TOTAL_AV, NO_ABILITY, POKESTAR_NUM, normalize_set,
};
pub use rule::{PokemonRule, ValidatorRule};
pub use set::{PokemonSet, StatSpread, Team, stat_number};
pub use validate::{EXCLUSIVE_STARTERS, MAX_TEAM_SIZE, validate_team};

// Re-export the lookup types callers need alongside the validator
pub use letsgo_dex::{Dex, Format, MemoryDex};
