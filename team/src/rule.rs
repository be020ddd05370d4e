use letsgo_dex::{Dex, Format};

use crate::normalize::normalize_set;
use crate::set::PokemonSet;
use crate::validate::validate_team;

/// Validation callbacks a format invokes before a battle starts.
///
/// Both methods default to accepting everything, so a rule only implements
/// the hooks it cares about.
pub trait ValidatorRule {
    /// Called once with the whole team. Returns the problems found.
    fn on_validate_team(&self, team: &[PokemonSet], format: Option<&Format>) -> Vec<String> {
        let _ = (team, format);
        Vec::new()
    }

    /// Called for each set. May rewrite the set; returns the problems found.
    fn on_change_set(&self, set: &mut PokemonSet, format: Option<&Format>) -> Vec<String> {
        let _ = (set, format);
        Vec::new()
    }
}

/// The "Pokemon" rule of the Let's Go formats, backed by a dex
pub struct PokemonRule<'a, D: Dex + ?Sized> {
    dex: &'a D,
}

impl<'a, D: Dex + ?Sized> PokemonRule<'a, D> {
    pub fn new(dex: &'a D) -> Self {
        Self { dex }
    }
}

impl<D: Dex + ?Sized> ValidatorRule for PokemonRule<'_, D> {
    fn on_validate_team(&self, team: &[PokemonSet], format: Option<&Format>) -> Vec<String> {
        validate_team(team, format)
    }

    fn on_change_set(&self, set: &mut PokemonSet, format: Option<&Format>) -> Vec<String> {
        normalize_set(self.dex, set, format)
    }
}
