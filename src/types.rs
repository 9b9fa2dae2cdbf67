// Hexword game types
// Colors, movers, coordinates and the JSON wire format for board snapshots

use serde::{Deserialize, Serialize};

/// Ownership state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    None,
    Red,
    Blue,
    VeryRed,
    VeryBlue,
}

impl Color {
    /// Parses a wire color token
    pub fn from_token(token: &str) -> Option<Color> {
        match token {
            "none" => Some(Color::None),
            "red" => Some(Color::Red),
            "blue" => Some(Color::Blue),
            "very_red" => Some(Color::VeryRed),
            "very_blue" => Some(Color::VeryBlue),
            _ => None,
        }
    }

    /// Converts color to its wire token
    pub fn as_token(&self) -> &'static str {
        match self {
            Color::None => "none",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::VeryRed => "very_red",
            Color::VeryBlue => "very_blue",
        }
    }

    /// True for the locked colors produced by a hexagon capture
    pub fn is_locked(&self) -> bool {
        matches!(self, Color::VeryRed | Color::VeryBlue)
    }

    pub fn is_red_family(&self) -> bool {
        matches!(self, Color::Red | Color::VeryRed)
    }

    pub fn is_blue_family(&self) -> bool {
        matches!(self, Color::Blue | Color::VeryBlue)
    }

    /// Locked variant of a drab color; locked colors map to themselves
    pub fn locked(&self) -> Color {
        match self {
            Color::Red | Color::VeryRed => Color::VeryRed,
            Color::Blue | Color::VeryBlue => Color::VeryBlue,
            Color::None => Color::None,
        }
    }
}

/// The side choosing a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mover {
    Red,
    Blue,
}

impl Mover {
    /// Drab color painted onto uncolored cells by this mover
    pub fn color(&self) -> Color {
        match self {
            Mover::Red => Color::Red,
            Mover::Blue => Color::Blue,
        }
    }

    pub fn opposite(&self) -> Mover {
        match self {
            Mover::Red => Mover::Blue,
            Mover::Blue => Mover::Red,
        }
    }

    /// Whether a word of this mover may pass through a cell of `color`
    pub fn is_matching(&self, color: Color) -> bool {
        match self {
            _ if color == Color::None => true,
            Mover::Red => color.is_red_family(),
            Mover::Blue => color.is_blue_family(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mover::Red => "red",
            Mover::Blue => "blue",
        }
    }
}

/// Row/column position of a cell on the hex board
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Captured hexagon counts per side
#[derive(Deserialize, Serialize, Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Score {
    pub red: i32,
    pub blue: i32,
}

/// A cell as it appears in a serialized board snapshot
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CellState {
    pub char: String,
    pub color: String,
}

/// Complete serialized board snapshot
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub score: Score,
    pub nodes: Vec<Vec<CellState>>,
}
