//! Per-set validation and normalization
//!
//! A set goes through two stages. [`structural_checks`] always runs and only
//! reports problems (apart from dropping a redundant nickname).
//! [`enforce_legality`] runs when the format has the `-illegal` rule; it
//! reports the remaining legality problems and rewrites the set into the
//! shape the battle engine expects.

use std::borrow::Cow;

use letsgo_dex::{Dex, Format, Species, to_id};

use crate::awakening::awakening_values;
use crate::moves::dedup_moves;
use crate::set::{PokemonSet, stat_number};

/// Ability every set is given; abilities do not exist in Let's Go
pub const NO_ABILITY: &str = "No Ability";

pub const MAX_MOVES: usize = 4;
pub const MAX_LEVEL: i64 = 100;

/// Awakening Value budget, enforced from gen 3 onwards
pub const MAX_TOTAL_AV: f64 = 1200.0;

/// Species numbers at or below this are Pokestar Studios props
pub const POKESTAR_NUM: i32 = -5000;

/// Base species outside Gen 1 that are still allowed (Meltan, Melmetal)
const ORIGIN_EXCEPTIONS: [i32; 2] = [808, 809];

/// Formes allowed regardless of their base species' origin
const ALLOWED_FORMES: [&str; 5] = ["Alola", "Mega", "Mega-X", "Mega-Y", "Starter"];

const PERFECT_IV: f64 = 31.0;
const MIN_PERFECT_IVS: usize = 3;

/// State threaded from the structural stage into the legality stage
struct Pass<'d> {
    problems: Vec<String>,
    template: Cow<'d, Species>,
    base_template: Cow<'d, Species>,
    allow_cap: bool,
    total_av: f64,
}

/// Validate a set and normalize it in place.
///
/// Returns the problems found, in check order; an empty list means the set is
/// legal. The set is rewritten whenever `format` enforces legality, whether or
/// not problems were found. A missing format disables legality enforcement.
pub fn normalize_set<D: Dex + ?Sized>(
    dex: &D,
    set: &mut PokemonSet,
    format: Option<&Format>,
) -> Vec<String> {
    let mut pass = structural_checks(dex, set, format);

    match format {
        Some(format) if format.enforces_legality() => {
            enforce_legality(dex, set, format, &mut pass);
        }
        _ => {
            tracing::debug!(species = %set.species, "legality enforcement off, set left as is");
        }
    }

    pass.problems
}

fn structural_checks<'d, D: Dex + ?Sized>(
    dex: &'d D,
    set: &mut PokemonSet,
    format: Option<&Format>,
) -> Pass<'d> {
    let template = dex.get_species(&set.species);
    let base_template = dex.get_species(&template.base_species);
    let allow_cap = format.is_some_and(Format::allows_cap);
    let mut problems = Vec::new();

    if set.name.as_deref() == Some(set.species.as_str()) {
        set.name = None;
    }

    if !(1..=151).contains(&base_template.num)
        && !ORIGIN_EXCEPTIONS.contains(&base_template.num)
        && !ALLOWED_FORMES.contains(&template.forme.as_str())
    {
        problems.push(
            "Only Pokémon whose base formes are from Gen 1, Meltan, and Melmetal can be used."
                .to_string(),
        );
        problems.push(format!(
            "({} is from Gen {}.)",
            base_template.name, base_template.generation
        ));
    }

    for name in &set.moves {
        let mv = dex.get_move(name);
        tracing::trace!(move_id = %mv.id, generation = mv.generation, "checking move");
        if mv.generation > dex.generation() {
            problems.push(format!(
                "{} does not exist in gen {}.",
                mv.name,
                dex.generation()
            ));
        } else if !allow_cap && mv.is_nonstandard {
            problems.push(format!("{} does not exist.", mv.name));
        }
    }

    if set.moves.len() > MAX_MOVES {
        problems.push(format!("{} has more than four moves.", set.display_name()));
    }

    if let Some(level) = set.level
        && level > MAX_LEVEL
    {
        problems.push(format!("{} is higher than level 100.", set.display_name()));
    }

    let cap_species = allow_cap && template.tier.starts_with("CAP");
    if !cap_species && template.is_nonstandard && template.num > POKESTAR_NUM {
        problems.push(format!("{} does not exist.", set.species));
    }

    let total_av = awakening_values(set).total();

    Pass {
        problems,
        template,
        base_template,
        allow_cap,
        total_av,
    }
}

fn enforce_legality<'d, D: Dex + ?Sized>(
    dex: &'d D,
    set: &mut PokemonSet,
    format: &Format,
    pass: &mut Pass<'d>,
) {
    let template = &pass.template;
    let problems = &mut pass.problems;

    if template.num <= POKESTAR_NUM && template.is_nonstandard {
        problems.push(format!("{} cannot be obtained by legal means.", set.species));
    }

    // Gens 1 and 2 allowed maxing out every stat
    if dex.generation() >= 3 && pass.total_av > MAX_TOTAL_AV {
        problems.push(format!(
            "{} has more than 1200 total Awakening Values.",
            set.display_name()
        ));
    }

    set.ability = NO_ABILITY.to_string();

    if !set.item.is_empty() {
        let item = dex.get_item(&set.item);
        if let Some(mega_evolves) = &item.mega_evolves
            && *mega_evolves != template.base_species
        {
            tracing::debug!(
                item = %item.name,
                species = %set.species,
                "removing mega stone for another species"
            );
            set.item.clear();
        }
    }

    set.gender.clear();

    if let Some(ivs) = &set.ivs
        && needs_perfect_ivs(dex, set, format, template, &pass.base_template)
    {
        let perfect_ivs = ivs
            .values()
            .filter_map(stat_number)
            .filter(|iv| *iv >= PERFECT_IV)
            .count();
        if perfect_ivs < MIN_PERFECT_IVS {
            let reason = if format.require_pentagon {
                format!(
                    " and this format requires gen {} Pokémon",
                    dex.generation()
                )
            } else {
                " in gen 6".to_string()
            };
            problems.push(format!(
                "{} must have at least three perfect IVs because it's a legendary{}.",
                set.display_name(),
                reason
            ));
        }
    }

    set.moves = dedup_moves(dex, &set.moves);

    if template.battle_only {
        // Mega Evolution happens in battle; the team carries the base forme
        if template.is_mega {
            set.species = template.base_species.clone();
        }
        if let Some(required) = &template.required_move
            && !knows_move(&set.moves, required)
        {
            problems.push(format!(
                "{} transforms in-battle with {}.",
                template.name, required
            ));
        }
    } else if let Some(required) = &template.required_move
        && !knows_move(&set.moves, required)
    {
        problems.push(format!(
            "{} needs to have the move {}.",
            set.display_name(),
            required
        ));
    }

    if set.species != pass.template.name {
        tracing::debug!(
            from = %pass.template.name,
            to = %set.species,
            "autofixed battle-only forme"
        );
        pass.template = dex.get_species(&set.species);
    }

    tracing::debug!(
        species = %pass.template.name,
        allow_cap = pass.allow_cap,
        problems = pass.problems.len(),
        "enforced legality"
    );
}

/// Legendaries need three perfect IVs when they come from gen 6 or later, or
/// when the format only admits current-generation Pokemon.
fn needs_perfect_ivs<D: Dex + ?Sized>(
    dex: &D,
    set: &PokemonSet,
    format: &Format,
    template: &Species,
    base_template: &Species,
) -> bool {
    let legendary =
        template.primary_egg_group() == Some("Undiscovered") || template.name == "Manaphy";
    let exempt = template.name == "Unown"
        || template.base_species == "Pikachu"
        || (template.base_species == "Diancie" && set.shiny);

    dex.generation() >= 6
        && (base_template.generation >= 6 || format.require_pentagon)
        && legendary
        && template.is_fully_evolved_root()
        && !exempt
}

fn knows_move(moves: &[String], required: &str) -> bool {
    let required = to_id(required);
    moves.iter().any(|name| to_id(name) == required)
}
