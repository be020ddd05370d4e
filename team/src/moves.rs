//! Move list helpers

use std::collections::HashSet;

use letsgo_dex::Dex;

/// Drop repeated moves, keeping the first spelling of each.
///
/// Moves are compared by their dex id, so "Tackle" and "tackle" collide.
pub fn dedup_moves<D: Dex + ?Sized>(dex: &D, moves: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    moves
        .iter()
        .filter(|name| seen.insert(dex.get_move(name).id.clone()))
        .cloned()
        .collect()
}
