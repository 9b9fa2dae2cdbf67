// Board model and capture rules
//
// A board is a flat, copyable array of 61 cells plus the score. Every game
// transition (`play`) returns a new board; the only in-place mutation is the
// single reversible swap used while exploring words.

use serde::Deserialize;

use crate::adjacency::{self, NUM_CELLS, ROW_LENGTHS};
use crate::error::DecodeError;
use crate::types::{BoardState, CellState, Color, Coord, Mover, Score};
use crate::word::WordLetter;

/// Captured hexagons needed to win
pub const WINNING_SCORE: i32 = 16;

/// Terminal value for a Blue win
pub const BLUE_WIN: f64 = 1.0;
/// Terminal value for a Red win
pub const RED_WIN: f64 = 0.0;
/// Sentinel for "not terminal" and for worthless search branches
pub const NOT_TERMINAL: f64 = -1.0;

/// One hex cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: u8,
    pub color: Color,
    /// The cell was captured and reset; its letter is unknown
    pub cleared: bool,
    /// The cell holds contents moved here by the active swap
    pub swapped: bool,
}

impl Cell {
    pub fn new(letter: u8, color: Color) -> Self {
        Cell {
            letter,
            color,
            cleared: false,
            swapped: false,
        }
    }
}

/// Weights of the leaf evaluation
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct HeuristicWeights {
    pub weight_blue_score: f64,
    pub weight_red_score: f64,
    pub weight_blue_neighbors: f64,
    pub weight_red_neighbors: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        HeuristicWeights {
            weight_blue_score: 0.7,
            weight_red_score: 0.05,
            weight_blue_neighbors: 0.2,
            weight_red_neighbors: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
    pub score: Score,
    swap: Option<(usize, usize)>,
}

impl Board {
    /// Creates a board where every cell holds `letter` and is uncolored
    pub fn uniform(letter: u8) -> Self {
        Board {
            cells: [Cell::new(letter, Color::None); NUM_CELLS],
            score: Score::default(),
            swap: None,
        }
    }

    /// Decodes a serialized snapshot
    pub fn from_state(state: &BoardState) -> Result<Self, DecodeError> {
        if state.nodes.len() != ROW_LENGTHS.len() {
            return Err(DecodeError::RowCount {
                expected: ROW_LENGTHS.len(),
                actual: state.nodes.len(),
            });
        }

        let mut board = Board::uniform(b'A');
        board.score = state.score;
        for (row, line) in state.nodes.iter().enumerate() {
            if line.len() != ROW_LENGTHS[row] {
                return Err(DecodeError::RowLength {
                    row,
                    expected: ROW_LENGTHS[row],
                    actual: line.len(),
                });
            }
            for (col, cell) in line.iter().enumerate() {
                let letter = parse_letter(&cell.char).ok_or_else(|| DecodeError::InvalidLetter {
                    row,
                    col,
                    value: cell.char.clone(),
                })?;
                let color =
                    Color::from_token(&cell.color).ok_or_else(|| DecodeError::InvalidColor {
                        row,
                        col,
                        token: cell.color.clone(),
                    })?;
                board.cells[adjacency::row_offset(row) + col] = Cell::new(letter, color);
            }
        }
        board.initialize();
        Ok(board)
    }

    /// Decodes a snapshot from JSON text
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let state: BoardState = serde_json::from_str(json)?;
        Board::from_state(&state)
    }

    /// Encodes the board in its wire form
    pub fn to_state(&self) -> BoardState {
        let mut nodes = Vec::with_capacity(ROW_LENGTHS.len());
        let mut index = 0;
        for &len in ROW_LENGTHS.iter() {
            let row = self.cells[index..index + len]
                .iter()
                .map(|cell| CellState {
                    char: (cell.letter as char).to_string(),
                    color: cell.color.as_token().to_string(),
                })
                .collect();
            nodes.push(row);
            index += len;
        }
        BoardState {
            score: self.score,
            nodes,
        }
    }

    /// Resets per-game scratch state: cleared markers and any pending swap
    pub fn initialize(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.cleared = false;
            cell.swapped = false;
        }
        self.swap = None;
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cell_at(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// # Panics
    /// Panics if `coord` is off the board.
    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[checked_index(coord)]
    }

    pub fn set_color(&mut self, coord: Coord, color: Color) {
        self.cells[checked_index(coord)].color = color;
    }

    pub fn set_letter(&mut self, coord: Coord, letter: u8) {
        self.cells[checked_index(coord)].letter = letter.to_ascii_uppercase();
    }

    pub fn set_cleared(&mut self, coord: Coord, cleared: bool) {
        self.cells[checked_index(coord)].cleared = cleared;
    }

    /// Plays a word for `mover` and returns the resulting board
    ///
    /// # Panics
    /// Panics if any cell of the word is colored for the opposing side; the
    /// word finder never offers such a word.
    pub fn play(&self, letters: &[WordLetter], mover: Mover) -> Board {
        let mut board = self.clone();

        for letter in letters {
            let index = checked_index(letter.coord);
            let cell = &mut board.cells[index];
            if cell.color == Color::None {
                cell.color = mover.color();
                cell.letter = letter.letter;
                cell.cleared = false;
            } else if !mover.is_matching(cell.color) {
                panic!(
                    "Invalid move: {} cannot play '{}' over {:?} cell at {}",
                    mover.as_str(),
                    letter.letter as char,
                    cell.color,
                    letter.coord
                );
            }
        }

        let centers = board.detect_hexagons();
        for &(center, captured_by) in &centers {
            match captured_by {
                Mover::Red => board.score.red += 1,
                Mover::Blue => board.score.blue += 1,
            }
            log::trace!(
                "Hexagon at {} captured by {}",
                adjacency::coord_of(center),
                captured_by.as_str()
            );
        }
        for &(center, _) in &centers {
            board.capture_hexagon(center);
        }

        if !centers.is_empty() {
            let super_centers: Vec<usize> = (0..NUM_CELLS)
                .filter(|&index| board.is_super_hexagon(index))
                .collect();
            for center in super_centers {
                board.clear_super_hexagon(center);
            }
        }

        board.clear_swap_marks();
        board
    }

    /// Finds every hexagon center and the side it scores for, without mutating anything
    fn detect_hexagons(&self) -> Vec<(usize, Mover)> {
        (0..NUM_CELLS)
            .filter_map(|index| self.hexagon_owner(index).map(|owner| (index, owner)))
            .collect()
    }

    /// Side that scores a hexagon centered on `index`, if the cell is a center
    fn hexagon_owner(&self, index: usize) -> Option<Mover> {
        let center = self.cells[index].color;
        if center != Color::Red && center != Color::Blue {
            return None;
        }
        let neighbors = adjacency::neighbors(index);
        if neighbors.len() != 6 {
            return None;
        }

        let mut red = usize::from(center == Color::Red);
        let mut blue = usize::from(center == Color::Blue);
        for &n in neighbors {
            let color = self.cells[n].color;
            if color.is_red_family() {
                red += 1;
            } else if color.is_blue_family() {
                blue += 1;
            } else {
                return None;
            }
        }

        // Ties go to Blue
        if red > blue {
            Some(Mover::Red)
        } else {
            Some(Mover::Blue)
        }
    }

    fn capture_hexagon(&mut self, center: usize) {
        let cell = &mut self.cells[center];
        cell.color = cell.color.locked();
        for &n in adjacency::neighbors(center) {
            let neighbor = &mut self.cells[n];
            if neighbor.color == Color::Red || neighbor.color == Color::Blue {
                neighbor.color = Color::None;
                neighbor.cleared = true;
            }
        }
    }

    fn is_super_hexagon(&self, index: usize) -> bool {
        if !self.cells[index].color.is_locked() {
            return false;
        }
        let neighbors = adjacency::neighbors(index);
        neighbors.len() == 6 && neighbors.iter().all(|&n| self.cells[n].color.is_locked())
    }

    fn clear_super_hexagon(&mut self, center: usize) {
        for index in std::iter::once(center).chain(adjacency::neighbors(center).iter().copied()) {
            let cell = &mut self.cells[index];
            cell.color = Color::None;
            cell.cleared = true;
        }
    }

    /// 1.0 once Blue has won, 0.0 once Red has won, otherwise the -1.0 sentinel
    pub fn terminal_result(&self) -> f64 {
        if self.score.blue >= WINNING_SCORE {
            BLUE_WIN
        } else if self.score.red >= WINNING_SCORE {
            RED_WIN
        } else {
            NOT_TERMINAL
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal_result() != NOT_TERMINAL
    }

    /// Leaf evaluation in roughly [0, 1], always from Blue's point of view
    pub fn heuristic(&self, weights: &HeuristicWeights) -> f64 {
        let mut relations = 0usize;
        let mut blue_neighbors = 0usize;
        let mut red_neighbors = 0usize;
        for index in 0..NUM_CELLS {
            for &n in adjacency::neighbors(index) {
                relations += 1;
                let color = self.cells[n].color;
                if color.is_red_family() {
                    red_neighbors += 1;
                } else if color.is_blue_family() {
                    blue_neighbors += 1;
                }
            }
        }

        let winning = f64::from(WINNING_SCORE);
        let closeness_to_winning = f64::from(self.score.blue) / winning;
        let distance_from_losing = 1.0 - f64::from(self.score.red) / winning;
        let blue_ratio = blue_neighbors as f64 / relations as f64;
        let red_ratio = 1.0 - red_neighbors as f64 / relations as f64;

        closeness_to_winning * weights.weight_blue_score
            + distance_from_losing * weights.weight_red_score
            + blue_ratio * weights.weight_blue_neighbors
            + red_ratio * weights.weight_red_neighbors
    }

    pub fn has_swapped(&self) -> bool {
        self.swap.is_some()
    }

    /// The two cells exchanged by the active swap
    pub fn swapped_pair(&self) -> Option<(Coord, Coord)> {
        self.swap
            .map(|(a, b)| (adjacency::coord_of(a), adjacency::coord_of(b)))
    }

    /// Exchanges the contents of two cells
    ///
    /// # Panics
    /// Panics if a swap is already active or either cell is locked.
    pub fn swap_nodes(&mut self, a: Coord, b: Coord) {
        self.swap_indices(checked_index(a), checked_index(b));
    }

    pub(crate) fn swap_indices(&mut self, a: usize, b: usize) {
        if self.swap.is_some() {
            panic!("Cannot swap nodes after a swap has already been made");
        }
        if self.cells[a].color.is_locked() || self.cells[b].color.is_locked() {
            panic!(
                "Cannot swap captured nodes {} and {}",
                adjacency::coord_of(a),
                adjacency::coord_of(b)
            );
        }
        self.exchange(a, b);
        self.cells[a].swapped = true;
        self.cells[b].swapped = true;
        self.swap = Some((a, b));
    }

    /// Undoes the active swap
    ///
    /// # Panics
    /// Panics if no swap is active.
    pub fn reset_swap(&mut self) {
        let (a, b) = match self.swap {
            Some(pair) => pair,
            None => panic!("Cannot reset a board that has not been swapped"),
        };
        self.exchange(a, b);
        self.clear_swap_marks();
    }

    /// Forgets the active swap without undoing it, making the exchange permanent
    fn clear_swap_marks(&mut self) {
        if let Some((a, b)) = self.swap.take() {
            self.cells[a].swapped = false;
            self.cells[b].swapped = false;
        }
    }

    fn exchange(&mut self, a: usize, b: usize) {
        let first = self.cells[a];
        let second = self.cells[b];
        self.cells[a] = Cell {
            swapped: first.swapped,
            ..second
        };
        self.cells[b] = Cell {
            swapped: second.swapped,
            ..first
        };
    }

    /// One board per candidate root swap for `mover`, each with the swap already applied
    ///
    /// A candidate pairs a cell in the mover's drab color with a neighboring
    /// uncolored, uncleared cell holding a different letter.
    pub fn generate_swaps(&self, mover: Mover) -> Vec<Board> {
        let own = mover.color();
        let mut boards = Vec::new();
        if self.has_swapped() {
            return boards;
        }
        for index in 0..NUM_CELLS {
            if self.cells[index].color != own {
                continue;
            }
            for &n in adjacency::neighbors(index) {
                let neighbor = &self.cells[n];
                if neighbor.color != Color::None
                    || neighbor.cleared
                    || neighbor.letter == self.cells[index].letter
                {
                    continue;
                }
                let mut board = self.clone();
                board.swap_indices(index, n);
                boards.push(board);
            }
        }
        boards
    }
}

fn checked_index(coord: Coord) -> usize {
    match adjacency::index_of(coord) {
        Some(index) => index,
        None => panic!("Coordinate {} is off the board", coord),
    }
}

/// Accepts exactly one ASCII letter, returned uppercased
fn parse_letter(value: &str) -> Option<u8> {
    match value.as_bytes() {
        [b] if b.is_ascii_alphabetic() => Some(b.to_ascii_uppercase()),
        _ => None,
    }
}
