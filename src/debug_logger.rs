// Decision log
//
// Appends one JSON line per solved position so a session can be replayed
// later with the `replay` binary. Failures are logged and otherwise ignored;
// the decision itself never depends on the log being writable.

use log::error;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Arc;

use crate::board::Board;
use crate::solver::Decision;
use crate::types::{BoardState, Coord};

/// Represents a single decision log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionLogEntry {
    pub board: BoardState,
    pub chosen_word: String,
    pub path: Vec<Coord>,
    pub swapped: Option<(Coord, Coord)>,
    pub score: f64,
    pub timestamp: String,
}

impl DecisionLogEntry {
    pub fn new(board: &Board, decision: &Decision) -> Self {
        let word = &decision.best_move.word;
        DecisionLogEntry {
            board: board.to_state(),
            chosen_word: word.text(),
            path: word.coords(),
            swapped: word.swapped,
            score: decision.score,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Shared decision logger state
/// Uses Arc<Mutex<File>> so clones handed to other threads write to the same file
#[derive(Clone)]
pub struct DecisionLogger {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl DecisionLogger {
    /// Creates a new decision logger
    /// If enabled is true, initializes the log file (truncating if it exists)
    pub fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return DecisionLogger::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
        {
            Ok(file) => {
                log::info!("Decision logging enabled: {}", log_file_path);
                DecisionLogger {
                    file: Arc::new(Mutex::new(Some(file))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!(
                    "Failed to create decision log file '{}': {}",
                    log_file_path, e
                );
                DecisionLogger::disabled()
            }
        }
    }

    /// Creates a disabled decision logger (no-op)
    pub fn disabled() -> Self {
        DecisionLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    /// Appends the decision taken on `board`
    pub fn log_decision(&self, board: &Board, decision: &Decision) {
        if !self.enabled {
            return;
        }
        self.write_entry(&DecisionLogEntry::new(board, decision));
    }

    fn write_entry(&self, entry: &DecisionLogEntry) {
        let mut file_guard = self.file.lock();
        let file = match file_guard.as_mut() {
            Some(file) => file,
            None => return,
        };

        match serde_json::to_string(entry) {
            Ok(json_line) => {
                if let Err(e) = writeln!(file, "{}", json_line) {
                    error!("Failed to write decision log entry: {}", e);
                } else if let Err(e) = file.flush() {
                    error!("Failed to flush decision log: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to serialize decision log entry: {}", e);
            }
        }
    }
}
