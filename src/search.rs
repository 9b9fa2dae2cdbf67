// Probability-weighted minimax with alpha-beta pruning
//
// Blue maximizes, Red minimizes. Scores live in [0, 1] except for the -1
// sentinel, which marks branches that are too unlikely to matter or where the
// side to move has no legal word.

use log::debug;

use crate::board::{Board, NOT_TERMINAL};
use crate::config::Config;
use crate::trie::Trie;
use crate::types::Mover;
use crate::word::Move;
use crate::word_finder::find_words;

/// Outcome of searching one node
#[derive(Debug, Clone)]
pub struct MinimaxResult {
    pub score: f64,
    /// Principal variation from the searched node down to the evaluated leaf
    pub moves: Vec<Move>,
    /// Probability mass carried to that leaf
    pub probability: f64,
}

impl MinimaxResult {
    fn leaf(score: f64, probability: f64) -> Self {
        MinimaxResult {
            score,
            moves: Vec::new(),
            probability,
        }
    }

    fn sentinel(probability: f64) -> Self {
        Self::leaf(NOT_TERMINAL, probability)
    }

    /// Whether this result is the -1 "worthless branch" marker
    pub fn is_sentinel(&self) -> bool {
        self.score == NOT_TERMINAL
    }

    fn prepend(mov: Move, child: MinimaxResult) -> Self {
        let mut moves = Vec::with_capacity(child.moves.len() + 1);
        moves.push(mov);
        moves.extend(child.moves);
        MinimaxResult {
            score: child.score,
            moves,
            probability: child.probability,
        }
    }
}

/// Counters collected during one search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
    pub words_generated: u64,
}

impl SearchStats {
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
        self.words_generated += other.words_generated;
    }
}

/// Single-threaded minimax searcher over one root board
pub struct SearchEngine<'a> {
    trie: &'a Trie,
    config: &'a Config,
    stats: SearchStats,
}

impl<'a> SearchEngine<'a> {
    pub fn new(trie: &'a Trie, config: &'a Config) -> Self {
        SearchEngine {
            trie,
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches `board` from the configured root window with Blue to move
    pub fn search_root(&mut self, board: &Board) -> MinimaxResult {
        let search = &self.config.search;
        let result = self.search(
            board,
            Mover::Blue,
            search.root_alpha,
            search.root_beta,
            search.depth,
            1.0,
        );
        debug!(
            "Root search finished: score {:.4}, {} nodes, {} cutoffs",
            result.score, self.stats.nodes, self.stats.cutoffs
        );
        result
    }

    /// Alpha-beta search of `board` with `mover` to play
    pub fn search(
        &mut self,
        board: &Board,
        mover: Mover,
        mut alpha: f64,
        mut beta: f64,
        depth: u8,
        path_probability: f64,
    ) -> MinimaxResult {
        self.stats.nodes += 1;

        if path_probability <= self.config.search.min_probability {
            return MinimaxResult::sentinel(path_probability);
        }

        let terminal = board.terminal_result();
        if terminal != NOT_TERMINAL {
            self.stats.leaves += 1;
            return MinimaxResult::leaf(terminal * path_probability, path_probability);
        }

        if depth == 0 {
            self.stats.leaves += 1;
            let value = board.heuristic(&self.config.heuristic);
            return MinimaxResult::leaf(value * path_probability, path_probability);
        }

        let words = find_words(board, self.trie, mover, &self.config.words);
        self.stats.words_generated += words.len() as u64;
        if words.is_empty() {
            return MinimaxResult::sentinel(path_probability);
        }

        match mover {
            Mover::Blue => {
                let mut best = MinimaxResult::leaf(f64::NEG_INFINITY, path_probability);
                for word in words {
                    let child = self.search(
                        &word.board,
                        Mover::Red,
                        alpha,
                        beta,
                        depth - 1,
                        path_probability * word.probability,
                    );
                    if child.score > best.score {
                        best = MinimaxResult::prepend(Move { word, mover }, child);
                    }
                    alpha = alpha.max(best.score);
                    if best.score >= beta {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
                best
            }
            Mover::Red => {
                let mut best = MinimaxResult::leaf(f64::INFINITY, path_probability);
                for word in words {
                    let child = self.search(
                        &word.board,
                        Mover::Blue,
                        alpha,
                        beta,
                        depth - 1,
                        path_probability * word.probability,
                    );
                    // A sentinel child is a pruned or stuck branch, not a Red win
                    if child.score < best.score && !child.is_sentinel() {
                        best = MinimaxResult::prepend(Move { word, mover }, child);
                    }
                    beta = beta.min(best.score);
                    if best.score <= alpha {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
                if best.score == f64::INFINITY {
                    return MinimaxResult::sentinel(path_probability);
                }
                best
            }
        }
    }
}
