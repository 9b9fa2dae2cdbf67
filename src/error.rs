// Error types surfaced to callers that feed external data into the solver

/// Failure while decoding a serialized board snapshot
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid board JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid color '{token}' at {row},{col}")]
    InvalidColor {
        row: usize,
        col: usize,
        token: String,
    },
    #[error("Invalid character '{value}' at {row},{col}: expected a single letter")]
    InvalidLetter {
        row: usize,
        col: usize,
        value: String,
    },
    #[error("Invalid row count: expected {expected} but got {actual}")]
    RowCount { expected: usize, actual: usize },
    #[error("Invalid length for row {row}: expected {expected} but got {actual}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Failure while loading a word list
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Failed to read word list '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}
