// Library exports for the hexword solver
// This allows the replay tool and integration tests to use the core solver logic

pub mod adjacency;
pub mod board;
pub mod config;
pub mod debug_logger;
pub mod dictionary;
pub mod error;
pub mod render;
pub mod replay;
pub mod search;
pub mod solver;
pub mod trie;
pub mod types;
pub mod word;
pub mod word_finder;
