// Standalone replay tool for analyzing hexword decision logs
//
// Usage:
//   cargo run --bin replay -- <log_file> [options]
//
// Options:
//   --all                  Replay all entries
//   --entries <i1,i2>      Replay specific entries (comma-separated, zero-based)
//   --verbose              Show detailed output for each entry
//   --config <path>        Path to Hexword.toml (default: Hexword.toml)
//   --words <path>         Word list (default: [dictionary] path)

use std::env;
use std::process;
use std::sync::Arc;

use hexword_solver::config::Config;
use hexword_solver::dictionary;
use hexword_solver::replay::ReplayEngine;

fn print_usage() {
    eprintln!("Hexword Replay Tool");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  replay <log_file> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --all                   Replay all entries in the log");
    eprintln!("  --entries <E1,E2,...>   Replay specific entries (comma-separated, zero-based)");
    eprintln!("  --verbose               Show detailed output for each entry");
    eprintln!("  --config <path>         Path to Hexword.toml (default: Hexword.toml)");
    eprintln!("  --words <path>          Word list (default: [dictionary] path from config)");
    eprintln!("  --help                  Show this help message");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  # Replay all entries");
    eprintln!("  replay hexword_decisions.jsonl --all");
    eprintln!();
    eprintln!("  # Replay specific entries");
    eprintln!("  replay hexword_decisions.jsonl --entries 0,4,7");
}

fn parse_entries(s: &str) -> Result<Vec<usize>, String> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<usize>()
                .map_err(|e| format!("Invalid entry number '{}': {}", t, e))
        })
        .collect()
}

fn main() {
    // Initialize logger
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.contains(&"--help".to_string()) {
        print_usage();
        process::exit(if args.contains(&"--help".to_string()) {
            0
        } else {
            1
        });
    }

    let log_file = &args[1];
    let mut config_path = "Hexword.toml".to_string();
    let mut words_path: Option<String> = None;
    let mut verbose = false;
    let mut replay_all = false;
    let mut selected: Option<String> = None;

    // Parse arguments
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--all" => {
                replay_all = true;
            }
            "--entries" | "--config" | "--words" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Error: {} requires an argument", args[i]);
                    process::exit(1);
                };
                match args[i].as_str() {
                    "--entries" => selected = Some(value.clone()),
                    "--config" => config_path = value.clone(),
                    _ => words_path = Some(value.clone()),
                }
                i += 1;
            }
            "--verbose" => {
                verbose = true;
            }
            _ => {
                eprintln!("Error: Unknown option '{}'", args[i]);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if !replay_all && selected.is_none() {
        eprintln!("Error: Must specify --all or --entries");
        print_usage();
        process::exit(1);
    }

    // Load configuration
    let mut config = Config::from_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from '{}': {}", config_path, e);
        eprintln!("Using default configuration");
        Config::default_hardcoded()
    });
    if let Some(path) = words_path {
        config.dictionary.path = path;
    }

    let trie = match dictionary::load_file(&config.dictionary.path) {
        Ok(trie) => Arc::new(trie),
        Err(e) => {
            eprintln!("Error loading word list: {}", e);
            process::exit(1);
        }
    };

    println!("Loaded configuration from: {}", config_path);
    println!("Replay log file: {}", log_file);
    println!();

    // Create replay engine
    let engine = ReplayEngine::new(config, trie, verbose);

    // Load log file
    let entries = match engine.load_log_file(log_file) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error loading log file: {}", e);
            process::exit(1);
        }
    };

    if entries.is_empty() {
        eprintln!("Error: Log file is empty");
        process::exit(1);
    }

    println!("Loaded {} log entries\n", entries.len());

    let results = match selected {
        Some(list) => {
            let indices = match parse_entries(&list) {
                Ok(indices) => indices,
                Err(e) => {
                    eprintln!("Error parsing entries: {}", e);
                    process::exit(1);
                }
            };

            println!("Replaying {} specific entr(ies)...\n", indices.len());
            match engine.replay_entries(&entries, &indices) {
                Ok(results) => results,
                Err(e) => {
                    eprintln!("Error during replay: {}", e);
                    process::exit(1);
                }
            }
        }
        None => {
            println!("Replaying all {} entries...\n", entries.len());
            engine.replay_all(&entries)
        }
    };

    engine.print_report(&results);
}
