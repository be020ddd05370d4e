//! Awakening Value accounting

use std::collections::BTreeMap;

use crate::set::{PokemonSet, stat_number};

/// Coerced Awakening Values of a set, keyed by stat
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AwakeningValues {
    values: BTreeMap<String, f64>,
}

impl AwakeningValues {
    /// Get the coerced value for a stat (0 when absent)
    pub fn get(&self, stat: &str) -> f64 {
        self.values.get(stat).copied().unwrap_or(0.0)
    }

    /// Sum over every stat present on the set
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read a set's Awakening Values without modifying it.
///
/// Every stat key present in `evs` is included. Non-numeric and negative
/// entries count as 0.
pub fn awakening_values(set: &PokemonSet) -> AwakeningValues {
    let values = set
        .evs
        .iter()
        .flatten()
        .map(|(stat, value)| {
            let av = stat_number(value).filter(|v| *v >= 0.0).unwrap_or(0.0);
            (stat.clone(), av)
        })
        .collect();
    AwakeningValues { values }
}
