// End-to-end tests for move selection, the decision log and replay

use std::path::PathBuf;
use std::sync::Arc;

use hexword_solver::board::Board;
use hexword_solver::config::Config;
use hexword_solver::replay::ReplayEngine;
use hexword_solver::solver::Solver;
use hexword_solver::trie::Trie;
use hexword_solver::types::{Color, Coord, Mover};

fn cat_trie() -> Arc<Trie> {
    Arc::new(Trie::from_words(["cat"]))
}

fn solver_config(depth: u8, parallel: bool) -> Config {
    let mut config = Config::default_hardcoded();
    config.search.depth = depth;
    config.search.parallel = parallel;
    config.words.explore_swaps = false;
    config
}

/// Blue's A at (2,1) touches C but not T; moving it to (1,0) completes C-A-T
fn root_swap_board() -> Board {
    let mut board = Board::uniform(b'X');
    board.set_letter(Coord::new(0, 0), b'C');
    board.set_letter(Coord::new(2, 1), b'A');
    board.set_color(Coord::new(2, 1), Color::Blue);
    board.set_letter(Coord::new(2, 0), b'T');
    board
}

/// Unique scratch path for a decision log
fn log_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "hexword_{}_{}.jsonl",
        name,
        std::process::id()
    ))
}

#[test]
fn test_root_swap_is_found() {
    let solver = Solver::new(solver_config(1, false), cat_trie());
    let board = root_swap_board();

    let decision = solver
        .best_move(&board)
        .expect("Blue should have a move after swapping");

    let expected_swap = Some((Coord::new(2, 1), Coord::new(1, 0)));
    assert_eq!(decision.root_swap, expected_swap);
    assert_eq!(decision.best_move.word.text(), "CAT");
    assert_eq!(decision.best_move.word.swapped, expected_swap);
    assert_eq!(
        decision.best_move.word.coords(),
        vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
    );
    assert_eq!(
        decision.roots_evaluated,
        1 + board.generate_swaps(Mover::Blue).len()
    );
    assert!(decision.score >= 0.0 && decision.score <= 1.0);
}

#[test]
fn test_without_root_swaps_there_is_no_move() {
    let mut config = solver_config(1, false);
    config.search.explore_root_swaps = false;
    let solver = Solver::new(config, cat_trie());

    assert!(solver.best_move(&root_swap_board()).is_none());
}

#[test]
fn test_parallel_and_sequential_roots_agree() {
    let board = root_swap_board();
    let sequential = Solver::new(solver_config(1, false), cat_trie())
        .best_move(&board)
        .expect("sequential decision");
    let parallel = Solver::new(solver_config(1, true), cat_trie())
        .best_move(&board)
        .expect("parallel decision");

    assert_eq!(sequential.score, parallel.score);
    assert_eq!(sequential.root_swap, parallel.root_swap);
    assert_eq!(
        sequential.best_move.word.coords(),
        parallel.best_move.word.coords()
    );
    assert_eq!(sequential.stats, parallel.stats);
}

#[test]
fn test_no_move_on_empty_board() {
    let solver = Solver::new(solver_config(2, true), cat_trie());
    assert!(solver.best_move(&Board::uniform(b'Q')).is_none());
}

#[test]
fn test_decision_log_replays_to_the_same_move() {
    let path = log_path("replay");
    let mut config = solver_config(1, false);
    config.debug.enabled = true;
    config.debug.log_file_path = path.display().to_string();

    let board = root_swap_board();
    let decision = {
        let solver = Solver::new(config.clone(), cat_trie());
        solver.best_move(&board).expect("decision")
    };

    let engine = ReplayEngine::new(config, cat_trie(), false);
    let entries = engine.load_log_file(&path).expect("log should load");
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry.chosen_word, "CAT");
    assert_eq!(entry.path, decision.best_move.word.coords());
    assert_eq!(entry.swapped, decision.root_swap);
    assert!((entry.score - decision.score).abs() < 1e-12);
    assert_eq!(Board::from_state(&entry.board).unwrap(), board);

    let results = engine.replay_all(&entries);
    assert_eq!(results.len(), 1);
    assert!(results[0].matches, "Replay diverged: {:?}", results[0]);

    let stats = ReplayEngine::generate_stats(&results);
    assert_eq!(stats.matches, 1);
    assert_eq!(stats.match_rate, 100.0);

    assert!(engine.replay_entries(&entries, &[3]).is_err());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_replay_never_writes_the_log() {
    let path = log_path("readonly");
    let mut config = solver_config(1, false);
    config.debug.enabled = true;
    config.debug.log_file_path = path.display().to_string();

    {
        let solver = Solver::new(config.clone(), cat_trie());
        solver.best_move(&root_swap_board()).expect("decision");
    }

    let engine = ReplayEngine::new(config, cat_trie(), true);
    let entries = engine.load_log_file(&path).expect("log should load");
    engine.replay_all(&entries);

    let reloaded = engine.load_log_file(&path).expect("log should still load");
    assert_eq!(reloaded.len(), 1);

    let _ = std::fs::remove_file(&path);
}
