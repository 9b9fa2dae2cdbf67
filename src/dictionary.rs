// Word list loading
//
// A word list is plain text with one word per line. Lines that cannot be
// stored in the trie (punctuation, digits, non-ASCII letters) are skipped.

use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::DictionaryError;
use crate::trie::Trie;

/// Builds a trie from any line-oriented reader
pub fn load_words<R: BufRead>(reader: R) -> Result<Trie, DictionaryError> {
    let mut trie = Trie::new();
    let mut skipped = 0usize;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DictionaryError::Read {
            line: line_num + 1,
            source,
        })?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if !trie.insert(word) {
            skipped += 1;
        }
    }

    if skipped > 0 {
        warn!("Skipped {} dictionary entries with non-letter characters", skipped);
    }
    info!("Loaded {} dictionary words", trie.len());
    Ok(trie)
}

/// Builds a trie from a word list file
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Trie, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictionaryError::Open {
        path: path.display().to_string(),
        source,
    })?;
    load_words(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_loads_one_word_per_line() {
        let trie = load_words(Cursor::new("cat\ndog\n\n  bird  \n")).unwrap();
        assert_eq!(trie.len(), 3);
        assert!(trie.contains("BIRD"));
    }

    #[test]
    fn test_skips_unusable_lines() {
        let trie = load_words(Cursor::new("it's\nok\nx-ray\n")).unwrap();
        assert_eq!(trie.len(), 1);
        assert!(trie.contains("ok"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_file("definitely_not_here.txt");
        assert!(matches!(result, Err(DictionaryError::Open { .. })));
    }
}
