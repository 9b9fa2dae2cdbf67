// Words discovered on the board and the moves built from them

use std::fmt;

use crate::board::Board;
use crate::types::{Coord, Mover, Score};

/// One letter of a word together with the cell it was spelled from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLetter {
    pub coord: Coord,
    pub letter: u8,
    pub is_start: bool,
}

/// A legal word for one mover on one board
#[derive(Debug, Clone)]
pub struct Word {
    pub letters: Vec<WordLetter>,
    /// Confidence in (0, 1]; below 1 only when uncertain cells were spelled through
    pub probability: f64,
    /// Cells of the path that were uncolored when the word was found
    pub num_grey_nodes: usize,
    /// The swap that had to be applied for the word to be spellable
    pub swapped: Option<(Coord, Coord)>,
    /// Score change caused by playing the word
    pub score_delta: Score,
    /// Board after the word has been played
    pub board: Board,
}

impl Word {
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The spelled letters as a string
    pub fn text(&self) -> String {
        self.letters.iter().map(|l| l.letter as char).collect()
    }

    pub fn coords(&self) -> Vec<Coord> {
        self.letters.iter().map(|l| l.coord).collect()
    }

    pub fn has(&self, coord: Coord) -> bool {
        self.letters.iter().any(|l| l.coord == coord)
    }

    pub fn get(&self, coord: Coord) -> Option<&WordLetter> {
        self.letters.iter().find(|l| l.coord == coord)
    }

    /// Whether `coord` is one of the two cells touched by this word's swap
    pub fn is_swapped(&self, coord: Coord) -> bool {
        matches!(self.swapped, Some((a, b)) if a == coord || b == coord)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())?;
        if let Some((a, b)) = self.swapped {
            write!(f, " (swap {} <-> {})", a, b)?;
        }
        Ok(())
    }
}

/// A word together with the side that plays it
#[derive(Debug, Clone)]
pub struct Move {
    pub word: Word,
    pub mover: Mover,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.mover.as_str(), self.word)
    }
}
