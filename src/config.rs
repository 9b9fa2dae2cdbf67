// Configuration module for reading Hexword.toml
// This module provides OOP-style configuration management for the solver

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::board::HeuristicWeights;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub words: WordsConfig,
    pub heuristic: HeuristicWeights,
    pub dictionary: DictionaryConfig,
    pub debug: DebugConfig,
}

/// Minimax search constants
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Plies searched from each root
    pub depth: u8,
    /// Branches whose accumulated probability is at or below this are worthless
    pub min_probability: f64,
    pub root_alpha: f64,
    pub root_beta: f64,
    /// Evaluate root boards on the rayon thread pool
    pub parallel: bool,
    /// Also search every board produced by a root swap
    pub explore_root_swaps: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            min_probability: 0.01,
            root_alpha: 0.0,
            root_beta: 1.0,
            parallel: true,
            explore_root_swaps: true,
        }
    }
}

/// Word enumeration constants
#[derive(Debug, Deserialize, Clone)]
pub struct WordsConfig {
    pub min_word_length: usize,
    /// Try the one-shot swap while extending a word
    pub explore_swaps: bool,
    /// Branch over all 26 letters on cleared cells instead of skipping them
    pub uncertain_letters: bool,
    /// Uncertain branches below this probability are not expanded
    pub min_branch_probability: f64,
}

impl Default for WordsConfig {
    fn default() -> Self {
        WordsConfig {
            min_word_length: 3,
            explore_swaps: true,
            uncertain_letters: false,
            min_branch_probability: 0.01,
        }
    }
}

/// Word list location
#[derive(Debug, Deserialize, Clone)]
pub struct DictionaryConfig {
    pub path: String,
}

/// Decision log configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Hexword.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Hexword.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Hexword.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Hexword.toml
    pub fn default_hardcoded() -> Self {
        Config {
            search: SearchConfig::default(),
            words: WordsConfig::default(),
            heuristic: HeuristicWeights::default(),
            dictionary: DictionaryConfig {
                path: "word_list.txt".to_string(),
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "hexword_decisions.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!(
                "Could not load Hexword.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}
