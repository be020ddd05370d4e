//! Team-level checks

use letsgo_dex::Format;

use crate::set::PokemonSet;

/// Largest team a player may bring
pub const MAX_TEAM_SIZE: usize = 6;

/// Species of which a team may carry only one
pub const EXCLUSIVE_STARTERS: [&str; 2] = ["Pikachu-Starter", "Eevee-Starter"];

/// Check team-wide constraints.
///
/// The roster size is always checked. Starter exclusivity is only checked
/// when `format` enforces legality, and stops at the first violation.
pub fn validate_team(team: &[PokemonSet], format: Option<&Format>) -> Vec<String> {
    let mut problems = Vec::new();

    if team.len() > MAX_TEAM_SIZE {
        problems.push("Your team has more than six Pokémon.".to_string());
    }

    match format {
        Some(format) if format.enforces_legality() => {
            check_starter_exclusivity(team, &mut problems);
        }
        _ => {
            tracing::debug!(
                team_size = team.len(),
                "legality enforcement off, skipping team checks"
            );
        }
    }

    problems
}

fn check_starter_exclusivity(team: &[PokemonSet], problems: &mut Vec<String>) {
    let mut starters = 0;
    for set in team {
        if !EXCLUSIVE_STARTERS.contains(&set.species.as_str()) {
            continue;
        }
        if starters >= 1 {
            problems.push(format!(
                "You can only have one of {} and {} on a team.",
                EXCLUSIVE_STARTERS[0], EXCLUSIVE_STARTERS[1]
            ));
            break;
        }
        starters += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{legal_format, open_format};

    const TOO_MANY: &str = "Your team has more than six Pokémon.";
    const ONE_STARTER: &str =
        "You can only have one of Pikachu-Starter and Eevee-Starter on a team.";

    fn team(species: &[&str]) -> Vec<PokemonSet> {
        species.iter().map(|s| PokemonSet::new(*s)).collect()
    }

    #[test]
    fn test_valid_team_no_format() {
        let team = team(&["Pikachu", "Mew", "Charizard", "Venusaur", "Mewtwo", "Raichu"]);
        assert!(validate_team(&team, None).is_empty());
    }

    #[test]
    fn test_empty_team() {
        assert!(validate_team(&[], Some(&legal_format())).is_empty());
    }

    #[test]
    fn test_seven_members_always_reported() {
        let team = team(&["Mew"; 7]);
        assert_eq!(validate_team(&team, None), vec![TOO_MANY]);
        assert_eq!(validate_team(&team, Some(&open_format())), vec![TOO_MANY]);
        assert_eq!(validate_team(&team, Some(&legal_format())), vec![TOO_MANY]);
    }

    #[test]
    fn test_starters_ignored_without_enforcement() {
        let team = team(&[
            "Pikachu-Starter",
            "Eevee-Starter",
            "Mew",
            "Mew",
            "Mew",
            "Mew",
            "Mew",
        ]);
        assert_eq!(validate_team(&team, Some(&open_format())), vec![TOO_MANY]);
        assert_eq!(validate_team(&team, None), vec![TOO_MANY]);
    }

    #[test]
    fn test_single_starter_allowed() {
        let team = team(&["Pikachu-Starter", "Mew"]);
        assert!(validate_team(&team, Some(&legal_format())).is_empty());
    }

    #[test]
    fn test_both_starters_rejected() {
        let team = team(&["Pikachu-Starter", "Mew", "Eevee-Starter"]);
        assert_eq!(validate_team(&team, Some(&legal_format())), vec![ONE_STARTER]);
    }

    #[test]
    fn test_starter_check_short_circuits() {
        let team = team(&["Pikachu-Starter", "Eevee-Starter", "Eevee-Starter", "Pikachu-Starter"]);
        assert_eq!(validate_team(&team, Some(&legal_format())), vec![ONE_STARTER]);
    }

    #[test]
    fn test_size_and_starter_problems_ordered() {
        let team = team(&[
            "Eevee-Starter",
            "Eevee-Starter",
            "Mew",
            "Mew",
            "Mew",
            "Mew",
            "Mew",
        ]);
        assert_eq!(
            validate_team(&team, Some(&legal_format())),
            vec![TOO_MANY, ONE_STARTER]
        );
    }

    #[test]
    fn test_base_forms_are_not_starters() {
        let team = team(&["Pikachu", "Eevee", "Pikachu-Starter"]);
        assert!(validate_team(&team, Some(&legal_format())).is_empty());
    }
}
