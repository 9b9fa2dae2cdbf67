// Replay module for analyzing logged decisions
//
// This module provides functionality to:
// 1. Parse JSONL decision logs
// 2. Re-run the solver on the logged boards
// 3. Compare logged vs replayed words
// 4. Print a summary report

use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::board::Board;
use crate::config::Config;
use crate::debug_logger::DecisionLogEntry;
use crate::solver::Solver;
use crate::trie::Trie;
use crate::types::Coord;

/// Result of replaying a single logged decision
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub entry: usize,
    pub original_word: String,
    pub replayed_word: Option<String>,
    pub original_swap: Option<(Coord, Coord)>,
    pub replayed_swap: Option<(Coord, Coord)>,
    pub matches: bool,
    pub original_score: f64,
    pub replayed_score: Option<f64>,
    pub computation_time_ms: u128,
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_entries: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: f64,
}

/// Replay engine for analyzing decision logs
pub struct ReplayEngine {
    solver: Solver,
    verbose: bool,
}

impl ReplayEngine {
    /// Creates a new replay engine; replayed decisions are never written back to the log
    pub fn new(mut config: Config, trie: Arc<Trie>, verbose: bool) -> Self {
        config.debug.enabled = false;
        ReplayEngine {
            solver: Solver::new(config, trie),
            verbose,
        }
    }

    /// Loads all entries from a JSONL decision log
    pub fn load_log_file<P: AsRef<Path>>(
        &self,
        log_path: P,
    ) -> Result<Vec<DecisionLogEntry>, String> {
        let file = File::open(log_path.as_ref())
            .map_err(|e| format!("Failed to open log file: {}", e))?;
        let entries = Self::parse_log(BufReader::new(file))?;
        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Parses JSONL decision log entries, skipping blank lines
    pub fn parse_log<R: BufRead>(reader: R) -> Result<Vec<DecisionLogEntry>, String> {
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: DecisionLogEntry = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Replays a single log entry and compares the result
    pub fn replay_entry(
        &self,
        index: usize,
        entry: &DecisionLogEntry,
    ) -> Result<ReplayResult, String> {
        if self.verbose {
            info!("Replaying entry {}...", index);
        }

        let board = Board::from_state(&entry.board).map_err(|e| e.to_string())?;

        let start_time = Instant::now();
        let decision = self.solver.best_move(&board);
        let computation_time_ms = start_time.elapsed().as_millis();

        let replayed_word = decision.as_ref().map(|d| d.best_move.word.text());
        let replayed_path = decision.as_ref().map(|d| d.best_move.word.coords());
        let replayed_swap = decision.as_ref().and_then(|d| d.best_move.word.swapped);
        let matches = replayed_path.as_deref() == Some(entry.path.as_slice())
            && replayed_swap == entry.swapped;

        let result = ReplayResult {
            entry: index,
            original_word: entry.chosen_word.clone(),
            replayed_word,
            original_swap: entry.swapped,
            replayed_swap,
            matches,
            original_score: entry.score,
            replayed_score: decision.as_ref().map(|d| d.score),
            computation_time_ms,
        };

        if self.verbose {
            if matches {
                info!(
                    "Entry {}: MATCH - {} (score: {:.4}, time: {}ms)",
                    index, result.original_word, result.original_score, computation_time_ms
                );
            } else {
                warn!(
                    "Entry {}: MISMATCH - Original: {}, Replayed: {} (score: {:?}, time: {}ms)",
                    index,
                    result.original_word,
                    result.replayed_word.as_deref().unwrap_or("<none>"),
                    result.replayed_score,
                    computation_time_ms
                );
            }
        }

        Ok(result)
    }

    /// Replays all entries in a log file
    pub fn replay_all(&self, entries: &[DecisionLogEntry]) -> Vec<ReplayResult> {
        let mut results = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            match self.replay_entry(index, entry) {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!("Failed to replay entry {}: {}", index, e);
                }
            }
        }

        results
    }

    /// Replays specific entries (zero-based line indices) from a log file
    pub fn replay_entries(
        &self,
        entries: &[DecisionLogEntry],
        indices: &[usize],
    ) -> Result<Vec<ReplayResult>, String> {
        let mut results = Vec::new();

        for &index in indices {
            let entry = entries
                .get(index)
                .ok_or_else(|| format!("Entry {} not found in log file", index))?;

            match self.replay_entry(index, entry) {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!("Failed to replay entry {}: {}", index, e);
                }
            }
        }

        Ok(results)
    }

    /// Generates statistics from replay results
    pub fn generate_stats(results: &[ReplayResult]) -> ReplayStats {
        let total_entries = results.len();
        let matches = results.iter().filter(|r| r.matches).count();
        let mismatches = total_entries - matches;
        let match_rate = if total_entries > 0 {
            (matches as f64 / total_entries as f64) * 100.0
        } else {
            0.0
        };

        ReplayStats {
            total_entries,
            matches,
            mismatches,
            match_rate,
        }
    }

    /// Prints a detailed report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = Self::generate_stats(results);

        println!("\n═══════════════════════════════════════════════════════════");
        println!("                    REPLAY REPORT");
        println!("═══════════════════════════════════════════════════════════");
        println!("Total Entries:  {}", stats.total_entries);
        println!("Matches:        {} ({:.1}%)", stats.matches, stats.match_rate);
        println!("Mismatches:     {}", stats.mismatches);
        println!("═══════════════════════════════════════════════════════════\n");

        if !results.is_empty() {
            let avg_time: f64 = results
                .iter()
                .map(|r| r.computation_time_ms as f64)
                .sum::<f64>()
                / results.len() as f64;
            println!("Average Computation Time:   {:.1}ms\n", avg_time);
        }

        let mismatches: Vec<_> = results.iter().filter(|r| !r.matches).collect();
        if !mismatches.is_empty() {
            println!("═══════════════════════════════════════════════════════════");
            println!("                  DETAILED MISMATCHES");
            println!("═══════════════════════════════════════════════════════════");

            for result in mismatches {
                println!(
                    "Entry {}: {} → {} (swap: {:?} → {:?}, score: {:.4} → {:?}, time: {}ms)",
                    result.entry,
                    result.original_word,
                    result.replayed_word.as_deref().unwrap_or("<none>"),
                    result.original_swap,
                    result.replayed_swap,
                    result.original_score,
                    result.replayed_score,
                    result.computation_time_ms
                );
            }
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn result(matches: bool) -> ReplayResult {
        ReplayResult {
            entry: 0,
            original_word: "CAT".to_string(),
            replayed_word: Some("CAT".to_string()),
            original_swap: None,
            replayed_swap: None,
            matches,
            original_score: 0.5,
            replayed_score: Some(0.5),
            computation_time_ms: 3,
        }
    }

    #[test]
    fn test_generate_stats() {
        let results = [result(true), result(true), result(false), result(true)];
        let stats = ReplayEngine::generate_stats(&results);
        assert_eq!(stats.total_entries, 4);
        assert_eq!(stats.matches, 3);
        assert_eq!(stats.mismatches, 1);
        assert_eq!(stats.match_rate, 75.0);
    }

    #[test]
    fn test_empty_stats() {
        let stats = ReplayEngine::generate_stats(&[]);
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.match_rate, 0.0);
    }

    #[test]
    fn test_parse_log_rejects_bad_json() {
        let err = ReplayEngine::parse_log(Cursor::new("\n{not json}\n")).unwrap_err();
        assert!(err.contains("line 2"), "unexpected error: {}", err);
    }

    #[test]
    fn test_parse_log_skips_blank_lines() {
        let entries = ReplayEngine::parse_log(Cursor::new("\n   \n")).unwrap();
        assert!(entries.is_empty());
    }
}
