//! Team balancing binary.
//!
//! Usage:
//!   cargo run --release --bin balance_teams -- [OPTIONS]
//!
//! Options:
//!   --roster <FILE>      Roster JSON file (default: random roster)
//!   --config <FILE>      Balancer configuration JSON file (optional)
//!   --mode <MODE>        sequential, pipelined or parallel
//!   --capacity <N>       Channel capacity for pipelined mode
//!   --threads <N>        Number of threads for parallel mode
//!   --seed <N>           Random seed for the generated roster
//!   --output <FILE>      Output file (default: output.json)
//!
//! Set `RUST_LOG=debug` to log every improvement.

use std::env;
use std::process;

use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use team_balancer::balance::{search_space, BalanceConfig, ExecutionMode, TeamBalancer};
use team_balancer::model::{Roster, RosterGenerator, Team};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut roster_file: Option<String> = None;
    let mut config_file: Option<String> = None;
    let mut mode: Option<ExecutionMode> = None;
    let mut capacity: Option<usize> = None;
    let mut threads: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut output_file = "output.json".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--roster" | "-r" => {
                i += 1;
                if i < args.len() {
                    roster_file = Some(args[i].clone());
                }
            }
            "--config" | "-c" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(args[i].clone());
                }
            }
            "--mode" | "-m" => {
                i += 1;
                if i < args.len() {
                    match args[i].parse() {
                        Ok(m) => mode = Some(m),
                        Err(e) => {
                            eprintln!("{}", e);
                            process::exit(2);
                        }
                    }
                }
            }
            "--capacity" => {
                i += 1;
                if i < args.len() {
                    capacity = args[i].parse().ok();
                }
            }
            "--threads" | "-t" => {
                i += 1;
                if i < args.len() {
                    threads = args[i].parse().ok();
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = args[i].clone();
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                process::exit(2);
            }
        }
        i += 1;
    }

    // Load or create configuration
    let mut config = match &config_file {
        Some(path) => match BalanceConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                process::exit(1);
            }
        },
        None => BalanceConfig::default(),
    };
    if let Some(m) = mode {
        config = config.with_mode(m);
    }
    if let Some(c) = capacity {
        config = config.with_channel_capacity(c);
    }
    if let Some(t) = threads {
        config = config.with_threads(t);
    }

    // Load or generate roster
    let roster = match &roster_file {
        Some(path) => {
            println!("Loading roster from: {}", path);
            match Roster::from_json_file(path) {
                Ok(roster) => roster,
                Err(e) => {
                    eprintln!("Error loading roster: {}", e);
                    process::exit(1);
                }
            }
        }
        None => {
            println!("Generating random roster");
            let mut generator = RosterGenerator::new();
            if let Some(s) = seed {
                generator = generator.with_seed(s);
            }
            generator.generate()
        }
    };

    let balancer = match TeamBalancer::new(config) {
        Ok(balancer) => balancer,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let total = search_space(&roster).unwrap_or(0);
    println!(
        "Players: {} | Candidates: {} | Mode: {:?}",
        roster.len(),
        total,
        balancer.config().mode
    );

    let progress = ProgressBar::new(total);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} candidates ({per_sec}) best {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let interval = (total / 100).max(1);
    let result = balancer.balance_with_callback(&roster, interval, |stats| {
        progress.set_position(stats.candidates);
        if let Some(score) = stats.best_score {
            progress.set_message(format!("{:.3}", score));
        }
    });
    progress.finish_and_clear();

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Balancing failed: {}", e);
            process::exit(1);
        }
    };

    println!();
    println!("Best score: {:.3} (candidate #{})", result.score, result.ordinal);
    println!(
        "Searched {} candidates in {:.2}s ({:.0}/s), {} wing swaps",
        result.stats.candidates,
        result.stats.elapsed_seconds,
        result.stats.candidates_per_second,
        result.stats.size_swaps
    );
    print_team("Team A", &result.pair.team_a);
    print_team("Team B", &result.pair.team_b);

    match result.pair.save_json(&output_file) {
        Ok(_) => println!("\nSaved result: {}", output_file),
        Err(e) => {
            eprintln!("Error saving result: {}", e);
            process::exit(1);
        }
    }
}

fn print_team(name: &str, team: &Team) {
    let ids = |players: &[team_balancer::Player]| -> String {
        players
            .iter()
            .map(|p| format!("{}({})", p.id, p.strength))
            .collect::<Vec<_>>()
            .join(" ")
    };

    println!("\n{} | size {} | strength {:.3}", name, team.size(), team.strength());
    println!("  goalies:  {}", ids(&team.goalies));
    println!("  centers:  {}", ids(&team.centers));
    println!("  wings:    {}", ids(&team.wings));
    println!("  forwards: {}", ids(&team.forwards));
}

fn print_help() {
    println!("Team Balancer");
    println!();
    println!("Usage: balance_teams [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -r, --roster <FILE>    Roster JSON file (default: random roster)");
    println!("  -c, --config <FILE>    Balancer configuration JSON file");
    println!("  -m, --mode <MODE>      sequential, pipelined or parallel");
    println!("      --capacity <N>     Channel capacity for pipelined mode");
    println!("  -t, --threads <N>      Number of threads for parallel mode");
    println!("  -s, --seed <N>         Random seed for the generated roster");
    println!("  -o, --output <FILE>    Output file (default: output.json)");
    println!("  -h, --help             Show this help");
}
