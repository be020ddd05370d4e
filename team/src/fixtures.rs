//! In-memory dex used by the unit tests

use letsgo_dex::{Format, Item, MemoryDex, Move, Species};

fn legendary(name: &str, num: i32, generation: u8) -> Species {
    Species {
        egg_groups: vec!["Undiscovered".to_string()],
        tier: "Uber".to_string(),
        ..Species::new(name, num, generation)
    }
}

/// A gen 7 dex with a handful of Let's Go species and some outsiders
pub fn letsgo_dex() -> MemoryDex {
    dex_for_generation(7)
}

/// The same species, moves and items, reporting a different generation
pub fn dex_for_generation(generation: u8) -> MemoryDex {
    let mut dex = MemoryDex::new(generation);

    let pikachu = Species {
        egg_groups: vec!["Field".to_string(), "Fairy".to_string()],
        prevo: Some("Pichu".to_string()),
        nfe: true,
        ..Species::new("Pikachu", 25, 1)
    };
    let eevee = Species {
        egg_groups: vec!["Field".to_string()],
        nfe: true,
        ..Species::new("Eevee", 133, 1)
    };
    let raichu = Species::new("Raichu", 26, 1);
    let charizard = Species::new("Charizard", 6, 1);
    let rayquaza = legendary("Rayquaza", 384, 3);
    let meloetta = legendary("Meloetta", 648, 5);

    dex.insert_species(Species::forme_of(&pikachu, "Starter"));
    dex.insert_species(Species::forme_of(&eevee, "Starter"));
    dex.insert_species(Species::forme_of(&raichu, "Alola"));
    dex.insert_species(Species {
        is_mega: true,
        battle_only: true,
        ..Species::forme_of(&charizard, "Mega-X")
    });
    dex.insert_species(Species {
        is_mega: true,
        battle_only: true,
        required_move: Some("Dragon Ascent".to_string()),
        ..Species::forme_of(&rayquaza, "Mega")
    });
    dex.insert_species(Species {
        battle_only: true,
        required_move: Some("Relic Song".to_string()),
        ..Species::forme_of(&meloetta, "Pirouette")
    });
    dex.insert_species(pikachu);
    dex.insert_species(eevee);
    dex.insert_species(raichu);
    dex.insert_species(charizard);
    dex.insert_species(rayquaza);
    dex.insert_species(meloetta);

    dex.insert_species(Species::new("Venusaur", 3, 1));
    dex.insert_species(legendary("Mew", 151, 1));
    dex.insert_species(legendary("Mewtwo", 150, 1));
    dex.insert_species(Species {
        nfe: true,
        ..legendary("Meltan", 808, 7)
    });
    dex.insert_species(Species {
        prevo: Some("Meltan".to_string()),
        ..legendary("Melmetal", 809, 7)
    });
    dex.insert_species(legendary("Unown", 201, 2));
    dex.insert_species(legendary("Diancie", 719, 6));
    dex.insert_species(Species {
        egg_groups: vec!["Water 1".to_string(), "Fairy".to_string()],
        ..Species::new("Manaphy", 490, 4)
    });
    dex.insert_species(Species::new("Chikorita", 152, 2));

    let keldeo = legendary("Keldeo", 647, 5);
    dex.insert_species(Species {
        required_move: Some("Secret Sword".to_string()),
        ..Species::forme_of(&keldeo, "Resolute")
    });
    dex.insert_species(keldeo);

    dex.insert_species(Species {
        tier: "CAP".to_string(),
        is_nonstandard: true,
        ..Species::new("Syclant", -1, 4)
    });
    dex.insert_species(Species {
        tier: "Illegal".to_string(),
        is_nonstandard: true,
        ..Species::new("Pokestar Smeargle", -5001, 5)
    });
    dex.insert_species(Species {
        tier: "Illegal".to_string(),
        is_nonstandard: true,
        ..Species::new("Missingno", 0, 1)
    });

    for (name, generation) in [
        ("Tackle", 1),
        ("Ember", 1),
        ("Psychic", 1),
        ("Thunderbolt", 1),
        ("Zippy Zap", 7),
        ("Relic Song", 5),
        ("Secret Sword", 5),
        ("Dragon Ascent", 6),
        ("Spirit Break", 8),
    ] {
        dex.insert_move(Move::new(name, generation));
    }
    dex.insert_move(Move {
        is_nonstandard: true,
        ..Move::new("Paleo Wave", 4)
    });

    dex.insert_item(Item::mega_stone("Charizardite X", "Charizard"));
    dex.insert_item(Item::mega_stone("Venusaurite", "Venusaur"));
    dex.insert_item(Item::new("Leftovers"));

    dex
}

/// A format with legality enforcement on
pub fn legal_format() -> Format {
    Format::with_rules("[Gen 7] Let's Go OU", ["-illegal"])
}

/// A format with no legality enforcement
pub fn open_format() -> Format {
    Format::with_rules("[Gen 7] Let's Go Custom Game", Vec::<String>::new())
}
