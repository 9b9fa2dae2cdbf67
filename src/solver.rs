// Top-level move selection
//
// The solver searches the current board as-is and, optionally, every board
// reachable by one root swap. Each root is an independent task with its own
// board clone, so the roots fan out over the rayon pool and are merged by
// taking the best score.

use log::{debug, info};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;

use crate::board::Board;
use crate::config::Config;
use crate::debug_logger::DecisionLogger;
use crate::search::{MinimaxResult, SearchEngine, SearchStats};
use crate::trie::Trie;
use crate::types::{Coord, Mover};
use crate::word::Move;

/// The move chosen for Blue and how it was evaluated
#[derive(Debug, Clone)]
pub struct Decision {
    pub best_move: Move,
    pub score: f64,
    /// Expected line of play, starting with `best_move`
    pub principal_variation: Vec<Move>,
    pub probability: f64,
    /// Swap applied to the root before searching, if the best line came from a swapped root
    pub root_swap: Option<(Coord, Coord)>,
    pub roots_evaluated: usize,
    pub stats: SearchStats,
}

/// Result of searching one root board
struct RootEvaluation {
    index: usize,
    root_swap: Option<(Coord, Coord)>,
    result: MinimaxResult,
    stats: SearchStats,
}

/// Blue's move solver
/// Takes static configuration and a shared dictionary, and exposes a single decision entry point
pub struct Solver {
    config: Config,
    trie: Arc<Trie>,
    decision_log: DecisionLogger,
}

impl Solver {
    /// Creates a new Solver instance
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the solver's lifetime
    /// * `trie` - Dictionary shared read-only by all search workers
    pub fn new(config: Config, trie: Arc<Trie>) -> Self {
        let decision_log = DecisionLogger::new(config.debug.enabled, &config.debug.log_file_path);
        Solver {
            config,
            trie,
            decision_log,
        }
    }

    /// Computes Blue's best move on `board`
    ///
    /// Returns `None` when Blue has no legal word on the board or on any swapped root.
    pub fn best_move(&self, board: &Board) -> Option<Decision> {
        let start_time = Instant::now();

        let mut roots = vec![board.clone()];
        if self.config.search.explore_root_swaps {
            roots.extend(board.generate_swaps(Mover::Blue));
        }
        info!(
            "Evaluating {} root board(s) at depth {}",
            roots.len(),
            self.config.search.depth
        );

        let evaluations: Vec<RootEvaluation> = if self.config.search.parallel {
            roots
                .par_iter()
                .enumerate()
                .map(|(index, root)| self.evaluate_root(index, root))
                .collect()
        } else {
            roots
                .iter()
                .enumerate()
                .map(|(index, root)| self.evaluate_root(index, root))
                .collect()
        };

        let mut stats = SearchStats::default();
        for evaluation in &evaluations {
            stats.merge(&evaluation.stats);
        }

        let roots_evaluated = evaluations.len();
        let best = Self::select_best(evaluations)?;

        // Words found on a swapped root already record that swap
        let principal_variation = best.result.moves;
        let best_move = principal_variation.first()?.clone();

        let decision = Decision {
            best_move,
            score: best.result.score,
            principal_variation,
            probability: best.result.probability,
            root_swap: best.root_swap,
            roots_evaluated,
            stats,
        };

        info!(
            "Chose {} (score: {:.4}, roots: {}, nodes: {}, time: {}ms)",
            decision.best_move.word,
            decision.score,
            decision.roots_evaluated,
            decision.stats.nodes,
            start_time.elapsed().as_millis()
        );

        self.decision_log.log_decision(board, &decision);
        Some(decision)
    }

    fn evaluate_root(&self, index: usize, root: &Board) -> RootEvaluation {
        let mut engine = SearchEngine::new(&self.trie, &self.config);
        let result = engine.search_root(root);
        let root_swap = root.swapped_pair();
        debug!(
            "Root {} (swap: {:?}): score {:.4}, first move {}",
            index,
            root_swap,
            result.score,
            result
                .moves
                .first()
                .map(|m| m.word.text())
                .unwrap_or_else(|| "-".to_string())
        );
        RootEvaluation {
            index,
            root_swap,
            result,
            stats: engine.stats(),
        }
    }

    /// Highest score wins; ties go to the earlier root so the choice is deterministic
    fn select_best(evaluations: Vec<RootEvaluation>) -> Option<RootEvaluation> {
        evaluations
            .into_iter()
            .filter(|evaluation| !evaluation.result.moves.is_empty())
            .fold(None, |best: Option<RootEvaluation>, candidate| match best {
                Some(current)
                    if current.result.score > candidate.result.score
                        || (current.result.score == candidate.result.score
                            && current.index < candidate.index) =>
                {
                    Some(current)
                }
                _ => Some(candidate),
            })
    }
}
