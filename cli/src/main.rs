use std::env;
use std::fs;
use std::process;

use anyhow::{Context, Result, bail};
use letsgo_dex::{Dex, Format, MemoryDex};
use letsgo_team::{PokemonRule, Team, ValidatorRule};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: letsgo-validate <dex.json> <format.json> <team.json>";

/// Outcome of running both validator callbacks over a team
#[derive(Debug)]
struct Report {
    team_problems: Vec<String>,
    /// Problems per set, labelled with the name the player gave it
    set_problems: Vec<(String, Vec<String>)>,
    /// The team after normalization
    team: Team,
}

impl Report {
    fn is_legal(&self) -> bool {
        self.team_problems.is_empty() && self.set_problems.iter().all(|(_, p)| p.is_empty())
    }
}

fn validate<D: Dex + ?Sized>(dex: &D, format: &Format, mut team: Team) -> Report {
    let rule = PokemonRule::new(dex);

    let team_problems = rule.on_validate_team(&team, Some(format));
    let set_problems = team
        .iter_mut()
        .map(|set| {
            let label = set.display_name().to_string();
            (label, rule.on_change_set(set, Some(format)))
        })
        .collect();

    Report {
        team_problems,
        set_problems,
        team,
    }
}

fn print_report(report: &Report) -> Result<()> {
    for problem in &report.team_problems {
        println!("- {}", problem);
    }
    for (label, problems) in &report.set_problems {
        for problem in problems {
            println!("- [{}] {}", label, problem);
        }
    }
    if report.is_legal() {
        println!("Team is legal.");
    }

    let normalized =
        serde_json::to_string_pretty(&report.team).context("Failed to serialize team")?;
    println!("{}", normalized);
    Ok(())
}

fn run(args: &[String]) -> Result<bool> {
    let [dex_path, format_path, team_path] = args else {
        bail!("{}", USAGE);
    };

    let dex = MemoryDex::load(dex_path)
        .with_context(|| format!("Failed to load dex from {}", dex_path))?;

    let format_json = fs::read_to_string(format_path)
        .with_context(|| format!("Failed to read format from {}", format_path))?;
    let format = Format::from_json_str(&format_json)
        .with_context(|| format!("Failed to parse format from {}", format_path))?;

    let team_json = fs::read_to_string(team_path)
        .with_context(|| format!("Failed to read team from {}", team_path))?;
    let team: Team = serde_json::from_str(&team_json)
        .with_context(|| format!("Failed to parse team from {}", team_path))?;

    tracing::info!(
        format = %format.name,
        generation = dex.generation(),
        team_size = team.len(),
        "validating team"
    );

    let report = validate(&dex, &format, team);
    print_report(&report)?;
    Ok(report.is_legal())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "letsgo_cli=info,letsgo_team=warn,letsgo_dex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}
