//! Tournament CLI
//!
//! Round-robin agents on a chosen variant and keep cumulative standings
//! in a JSON file between invocations.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use game_core::{Agent, Variant};
use tournament::{RandomAgent, Scheduler, SchedulerConfig, Standings};

const DEFAULT_STANDINGS_FILE: &str = "tournament_standings.json";

fn print_usage() {
    println!("Board-game tournament runner");
    println!();
    println!("Usage:");
    println!("  tournament run <variant> <agent> <agent> [...] [--games N] [--turns N] [--file PATH]");
    println!("  tournament standings [--file PATH]");
    println!();
    println!("Variants:");
    for variant in Variant::ALL {
        println!("  {:<14} colors: {:?}", variant.name(), variant.default_colors());
    }
    println!();
    println!("Agents are named random-move baselines; wire an external");
    println!("move proposer in through the library's Agent trait.");
    println!();
    println!("Examples:");
    println!("  tournament run tictactoe rnd1 rnd2 --games 4");
    println!("  tournament run chess alpha beta --turns 40 --file chess_standings.json");
}

fn run_tournament(args: &[String]) {
    if args.len() < 3 {
        eprintln!("Error: run requires a variant and at least two agents");
        print_usage();
        return;
    }

    let variant = match Variant::parse(&args[0]) {
        Some(v) => v,
        None => {
            eprintln!("Unknown variant: {}", args[0]);
            print_usage();
            return;
        }
    };

    let mut agent_names: Vec<String> = Vec::new();
    let mut games_per_pair: u32 = 2;
    let mut max_turns: u32 = 50;
    let mut file = PathBuf::from(DEFAULT_STANDINGS_FILE);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    games_per_pair = args[i + 1].parse().unwrap_or(2);
                    i += 1;
                }
            }
            "--turns" | "-t" => {
                if i + 1 < args.len() {
                    max_turns = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            name => agent_names.push(name.to_string()),
        }
        i += 1;
    }

    if agent_names.len() < 2 {
        eprintln!("Error: need at least two agent names");
        return;
    }

    let config = SchedulerConfig {
        max_turns,
        games_per_pair,
        pause_between_games: Duration::from_secs(1),
        ..Default::default()
    };

    println!("=== Tournament: {} ===", variant);
    println!(
        "Agents: {} | games per pair: {} | turn limit: {}",
        agent_names.join(", "),
        games_per_pair,
        max_turns
    );
    println!();

    let mut scheduler = match Scheduler::new(variant, config, file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let mut agents: Vec<Box<dyn Agent>> = agent_names
        .iter()
        .map(|name| Box::new(RandomAgent::new(name, variant)) as Box<dyn Agent>)
        .collect();

    match scheduler.run(&mut agents) {
        Ok(records) => {
            println!();
            println!("Finished {} games", records.len());
            scheduler.standings().print_report();
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn show_standings(args: &[String]) {
    let mut file = PathBuf::from(DEFAULT_STANDINGS_FILE);
    let mut i = 0;
    while i < args.len() {
        if matches!(args[i].as_str(), "--file" | "-f") && i + 1 < args.len() {
            file = PathBuf::from(&args[i + 1]);
            i += 1;
        }
        i += 1;
    }

    match Standings::load(&file) {
        Ok(standings) if standings.games_played > 0 => standings.print_report(),
        Ok(_) => println!("No tournament data found. Run some games first!"),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => run_tournament(&args[2..]),
        "standings" | "report" => show_standings(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
