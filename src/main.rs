//! Applepath CLI - terminal front-end for the path game core.
//!
//! This is a demonstration front-end for the applepath library: it lists the
//! journey, plays both game modes in the terminal, and imports/exports
//! journey catalogs as JSON.

use anyhow::{Context, Result};
use applepath::prelude::*;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return Ok(());
    }

    match args[1].as_str() {
        "stations" => stations(&args[2..])?,
        "play" => play(&args[2..])?,
        "export" => {
            if args.len() < 3 {
                eprintln!("Error: Please specify an output path");
                return Ok(());
            }
            export(&args[2])?;
        }
        "help" | "--help" | "-h" => print_usage(&args[0]),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage(&args[0]);
        }
    }
    Ok(())
}

fn print_usage(program: &str) {
    println!("Usage: {program} <command> [options]");
    println!();
    println!("Commands:");
    println!("  stations            List the stations of the journey");
    println!("  play [options]      Play the game in the terminal");
    println!("  export <file>       Write the built-in journey as JSON");
    println!("  help                Show this help message");
    println!();
    println!("Play options:");
    println!("  --guided            Step-by-step walkthrough instead of path drawing");
    println!("  --name <name>       Player name for the results screen");
    println!("  --catalog <file>    Load a journey from a JSON file");
}

/// Resolve the journey to play: a JSON file if `--catalog` was given,
/// otherwise the built-in apple journey.
fn load_journey(args: &[String]) -> Result<(StationCatalog, PresentationTable)> {
    if let Some(pos) = args.iter().position(|a| a == "--catalog") {
        let path = args
            .get(pos + 1)
            .context("--catalog requires a file path")?;
        SerializedCatalog::load(path).with_context(|| format!("failed to load journey from {path}"))
    } else {
        Ok(apple_journey())
    }
}

fn stations(args: &[String]) -> Result<()> {
    let (catalog, presentation) = load_journey(args)?;

    println!("Journey stations ({} total):", catalog.station_count());
    println!();
    for station in catalog.stations_in_order() {
        let icon = presentation
            .get(station.id)
            .map(|p| p.icon.as_str())
            .unwrap_or("?");
        println!(
            "  {}. {} [{icon}] - {}",
            station.canonical_order, station.title, station.description
        );
    }
    Ok(())
}

fn export(path: &str) -> Result<()> {
    let (catalog, presentation) = apple_journey();
    let serialized =
        SerializedCatalog::from_parts(Some("Apple Journey".to_string()), &catalog, &presentation);
    serialized
        .save(path)
        .with_context(|| format!("failed to write {path}"))?;
    println!("Journey written to {path}");
    Ok(())
}

fn play(args: &[String]) -> Result<()> {
    let (catalog, presentation) = load_journey(args)?;
    let guided = args.iter().any(|a| a == "--guided");
    let name = args
        .iter()
        .position(|a| a == "--name")
        .and_then(|pos| args.get(pos + 1))
        .cloned()
        .unwrap_or_else(|| "Player".to_string());

    let summary = if guided {
        play_guided(&name, catalog, &presentation)?
    } else {
        match play_drawn(&name, catalog)? {
            Some(summary) => summary,
            None => return Ok(()),
        }
    };
    print_summary(&summary);
    Ok(())
}

fn play_guided(
    name: &str,
    catalog: StationCatalog,
    presentation: &PresentationTable,
) -> Result<GameSummary> {
    let mut walk = GuidedWalk::new(catalog);
    let stdin = io::stdin();

    println!("{name}'s journey - press Enter to complete each step");
    while let Some(station) = walk.current_station() {
        println!();
        println!(
            "Step {} of {}: {}",
            station.canonical_order,
            walk.catalog().station_count(),
            station.title
        );
        println!("  {}", station.description);
        if let Some(meta) = presentation.get(station.id) {
            for substep in &meta.substeps {
                println!("    - {substep}");
            }
        }
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;
        walk.complete_step();
    }
    println!();
    println!("Journey complete!");
    Ok(GameSummary::from_guided(name, &walk))
}

fn play_drawn(name: &str, catalog: StationCatalog) -> Result<Option<GameSummary>> {
    let mut session = PathSession::new(catalog);
    let stdin = io::stdin();

    println!("{name}'s challenge - connect the stations in the right order.");
    println!("Commands: pick <id>, check, hint, reset, stations, quit");

    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("pick") => {
                let Some(id) = parts.next().and_then(|raw| raw.parse::<u32>().ok()) else {
                    println!("Usage: pick <station id>");
                    continue;
                };
                match session.select_station(StationId::new(id)) {
                    Ok(SelectionOutcome::Selected(id)) => println!("Station {id} selected"),
                    Ok(SelectionOutcome::Deselected(id)) => println!("Station {id} deselected"),
                    Ok(SelectionOutcome::Connected(conn)) => {
                        let verdict = if conn.is_correct { "looks right" } else { "hmm..." };
                        println!(
                            "Connected {} to {} ({verdict})",
                            session.catalog().title_of(conn.from),
                            session.catalog().title_of(conn.to)
                        );
                    }
                    Err(e) => println!("Error: {e}"),
                }
            }
            Some("check") => {
                if session.connections().is_empty() {
                    println!("Draw at least one connection first.");
                    continue;
                }
                let outcome = session.check_solution();
                println!(
                    "Score: {}% (attempt {})",
                    outcome.score, outcome.attempts
                );
                if outcome.is_complete {
                    println!("Perfect! You've mastered the journey!");
                    return Ok(Some(GameSummary::from_drawn(name, &session, outcome)));
                }
            }
            Some("hint") => println!("Hint: {}", session.next_hint()),
            Some("reset") => {
                session.reset_paths();
                println!("Paths cleared.");
            }
            Some("stations") => {
                for station in session.catalog().stations_in_order() {
                    println!("  {} {}", station.id, station.title);
                }
            }
            Some("quit") => return Ok(None),
            Some(other) => println!("Unknown command: {other}"),
            None => {}
        }
    }
}

fn print_summary(summary: &GameSummary) {
    println!();
    println!("=== Results for {} ===", summary.player_name);
    println!("Mode: {}", summary.mode);
    println!("Score: {}%", summary.score);
    println!(
        "Steps completed: {}/{}",
        summary.completed_steps, summary.total_steps
    );
    println!("Time: {}s", summary.elapsed_secs);
    if let Some(attempts) = summary.attempts {
        println!("Attempts: {attempts}");
    }
    println!("{}", summary.performance_message());
    println!();
    println!("Achievements:");
    for badge in summary.achievements() {
        println!("  * {}", badge.title());
    }
}
