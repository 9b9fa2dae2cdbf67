// Command-line solver
//
// Usage:
//   hexword-solver <board.json|-> [options]
//
// Options:
//   --words <path>    Word list, one word per line (default: [dictionary] path)
//   --config <path>   Path to Hexword.toml (default: Hexword.toml)
//   --depth <n>       Override the configured search depth

use log::info;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;
use std::sync::Arc;

use hexword_solver::board::Board;
use hexword_solver::config::Config;
use hexword_solver::dictionary;
use hexword_solver::render::render_move;
use hexword_solver::solver::Solver;

fn print_usage() {
    eprintln!("Hexword Solver");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  hexword-solver <board.json|-> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --words <path>    Word list, one word per line");
    eprintln!("  --config <path>   Path to Hexword.toml (default: Hexword.toml)");
    eprintln!("  --depth <n>       Override the configured search depth");
    eprintln!("  --help            Show this help message");
    eprintln!();
    eprintln!("Pass '-' to read the board JSON from stdin.");
}

fn read_board_json(source: &str) -> Result<String, String> {
    if source == "-" {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .map_err(|e| format!("Failed to read board from stdin: {}", e))?;
        Ok(json)
    } else {
        fs::read_to_string(source).map_err(|e| format!("Failed to read board '{}': {}", source, e))
    }
}

fn option_value<'a>(args: &'a [String], i: usize, name: &str) -> &'a str {
    match args.get(i + 1) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: {} requires an argument", name);
            process::exit(1);
        }
    }
}

fn main() {
    // We default to 'info' level logging. But if the `RUST_LOG` environment variable is set,
    // we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

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

    let board_source = &args[1];
    let mut config_path: Option<String> = None;
    let mut words_path: Option<String> = None;
    let mut depth: Option<u8> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                config_path = Some(option_value(&args, i, "--config").to_string());
                i += 1;
            }
            "--words" => {
                words_path = Some(option_value(&args, i, "--words").to_string());
                i += 1;
            }
            "--depth" => {
                let value = option_value(&args, i, "--depth");
                depth = match value.parse::<u8>() {
                    Ok(d) => Some(d),
                    Err(e) => {
                        eprintln!("Error: Invalid depth '{}': {}", value, e);
                        process::exit(1);
                    }
                };
                i += 1;
            }
            _ => {
                eprintln!("Error: Unknown option '{}'", args[i]);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    // Load configuration once at startup
    let mut config = match &config_path {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Warning: Could not load config from '{}': {}", path, e);
            eprintln!("Using default configuration");
            Config::default_hardcoded()
        }),
        None => Config::load_or_default(),
    };
    if let Some(depth) = depth {
        config.search.depth = depth;
    }
    if let Some(path) = words_path {
        config.dictionary.path = path;
    }

    let json = match read_board_json(board_source) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let board = match Board::from_json(&json) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Error: Invalid board: {}", e);
            process::exit(1);
        }
    };

    let trie = match dictionary::load_file(&config.dictionary.path) {
        Ok(trie) => Arc::new(trie),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    info!(
        "Solving for blue (score {}-{}, depth {})",
        board.score.blue, board.score.red, config.search.depth
    );

    let solver = Solver::new(config, trie);
    let decision = match solver.best_move(&board) {
        Some(decision) => decision,
        None => {
            println!("No playable word for blue.");
            process::exit(2);
        }
    };

    println!("{}", render_move(&board, &decision.best_move));
    println!("Best move:  {}", decision.best_move.word);
    println!(
        "Score:      {:.4} (probability {:.4})",
        decision.score, decision.probability
    );
    if let Some((a, b)) = decision.root_swap {
        println!("Swap first: {} <-> {}", a, b);
    }
    let line: Vec<String> = decision
        .principal_variation
        .iter()
        .map(|m| m.to_string())
        .collect();
    println!("Expected:   {}", line.join(", "));
    println!(
        "Searched {} root(s), {} nodes, {} cutoffs",
        decision.roots_evaluated, decision.stats.nodes, decision.stats.cutoffs
    );
}
