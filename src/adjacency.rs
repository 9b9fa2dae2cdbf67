// Hex board geometry
//
// The board is an irregular 61-cell hexagon laid out as 17 ragged rows.
// Cells are addressed either by `Coord` or by their flat index in row-major
// order; neighbor lookups work on flat indices.

use std::sync::OnceLock;

use crate::types::Coord;

/// Number of cells on the board
pub const NUM_CELLS: usize = 61;

/// Number of cells in each row, top to bottom
pub const ROW_LENGTHS: [usize; 17] = [1, 2, 3, 4, 5, 4, 5, 4, 5, 4, 5, 4, 5, 4, 3, 2, 1];

/// Neighbor coordinates per cell, in row-major cell order
static NEIGHBOR_COORDS: [&[(usize, usize)]; NUM_CELLS] = [
    // row 0
    &[(1, 0), (1, 1), (2, 1)],
    // row 1
    &[(0, 0), (2, 0), (2, 1), (3, 1)],
    &[(0, 0), (2, 1), (2, 2), (3, 2)],
    // row 2
    &[(1, 0), (3, 0), (3, 1), (4, 1)],
    &[(0, 0), (1, 0), (1, 1), (3, 1), (3, 2), (4, 2)],
    &[(1, 1), (3, 2), (3, 3), (4, 3)],
    // row 3
    &[(2, 0), (4, 0), (4, 1), (5, 0)],
    &[(1, 0), (2, 0), (2, 1), (4, 1), (4, 2), (5, 1)],
    &[(1, 1), (2, 1), (2, 2), (4, 2), (4, 3), (5, 2)],
    &[(2, 2), (4, 3), (4, 4), (5, 3)],
    // row 4
    &[(3, 0), (5, 0), (6, 0)],
    &[(2, 0), (3, 0), (3, 1), (5, 0), (5, 1), (6, 1)],
    &[(2, 1), (3, 1), (3, 2), (5, 1), (5, 2), (6, 2)],
    &[(2, 2), (3, 2), (3, 3), (5, 2), (5, 3), (6, 3)],
    &[(3, 3), (5, 3), (6, 4)],
    // row 5
    &[(3, 0), (4, 0), (4, 1), (6, 0), (6, 1), (7, 0)],
    &[(3, 1), (4, 1), (4, 2), (6, 1), (6, 2), (7, 1)],
    &[(3, 2), (4, 2), (4, 3), (6, 2), (6, 3), (7, 2)],
    &[(3, 3), (4, 3), (4, 4), (6, 3), (6, 4), (7, 3)],
    // row 6
    &[(4, 0), (5, 0), (7, 0), (8, 0)],
    &[(4, 1), (5, 0), (5, 1), (7, 0), (7, 1), (8, 1)],
    &[(4, 2), (5, 1), (5, 2), (7, 1), (7, 2), (8, 2)],
    &[(4, 3), (5, 2), (5, 3), (7, 2), (7, 3), (8, 3)],
    &[(4, 4), (5, 3), (7, 3), (8, 4)],
    // row 7
    &[(5, 0), (6, 0), (6, 1), (8, 0), (8, 1), (9, 0)],
    &[(5, 1), (6, 1), (6, 2), (8, 1), (8, 2), (9, 1)],
    &[(5, 2), (6, 2), (6, 3), (8, 2), (8, 3), (9, 2)],
    &[(5, 3), (6, 3), (6, 4), (8, 3), (8, 4), (9, 3)],
    // row 8
    &[(6, 0), (7, 0), (9, 0), (10, 0)],
    &[(6, 1), (7, 0), (7, 1), (9, 0), (9, 1), (10, 1)],
    &[(6, 2), (7, 1), (7, 2), (9, 1), (9, 2), (10, 2)],
    &[(6, 3), (7, 2), (7, 3), (9, 2), (9, 3), (10, 3)],
    &[(6, 4), (7, 3), (9, 3), (10, 4)],
    // row 9
    &[(7, 0), (8, 0), (8, 1), (10, 0), (10, 1), (11, 0)],
    &[(7, 1), (8, 1), (8, 2), (10, 1), (10, 2), (11, 1)],
    &[(7, 2), (8, 2), (8, 3), (10, 2), (10, 3), (11, 2)],
    &[(7, 3), (8, 3), (8, 4), (10, 3), (10, 4), (11, 3)],
    // row 10
    &[(8, 0), (9, 0), (11, 0), (12, 0)],
    &[(8, 1), (9, 0), (9, 1), (11, 0), (11, 1), (12, 1)],
    &[(8, 2), (9, 1), (9, 2), (11, 1), (11, 2), (12, 2)],
    &[(8, 3), (9, 2), (9, 3), (11, 2), (11, 3), (12, 3)],
    &[(8, 4), (9, 3), (11, 3), (12, 4)],
    // row 11
    &[(9, 0), (10, 0), (10, 1), (12, 0), (12, 1), (13, 0)],
    &[(9, 1), (10, 1), (10, 2), (12, 1), (12, 2), (13, 1)],
    &[(9, 2), (10, 2), (10, 3), (12, 2), (12, 3), (13, 2)],
    &[(9, 3), (10, 3), (10, 4), (12, 3), (12, 4), (13, 3)],
    // row 12
    &[(10, 0), (11, 0), (13, 0)],
    &[(10, 1), (11, 0), (11, 1), (13, 0), (13, 1), (14, 0)],
    &[(10, 2), (11, 1), (11, 2), (13, 1), (13, 2), (14, 1)],
    &[(10, 3), (11, 2), (11, 3), (13, 2), (13, 3), (14, 2)],
    &[(10, 4), (11, 3), (13, 3)],
    // row 13
    &[(11, 0), (12, 0), (12, 1), (14, 0)],
    &[(11, 1), (12, 1), (12, 2), (14, 0), (14, 1), (15, 0)],
    &[(11, 2), (12, 2), (12, 3), (14, 1), (14, 2), (15, 1)],
    &[(11, 3), (12, 3), (12, 4), (14, 2)],
    // row 14
    &[(12, 1), (13, 0), (13, 1), (15, 0)],
    &[(12, 2), (13, 1), (13, 2), (15, 0), (15, 1), (16, 0)],
    &[(12, 3), (13, 2), (13, 3), (15, 1)],
    // row 15
    &[(13, 1), (14, 0), (14, 1), (16, 0)],
    &[(13, 2), (14, 1), (14, 2), (16, 0)],
    // row 16
    &[(14, 1), (15, 0), (15, 1)],
];

/// Flat index of the first cell of each row
const ROW_OFFSETS: [usize; 17] = row_offsets();

const fn row_offsets() -> [usize; 17] {
    let mut offsets = [0; 17];
    let mut row = 1;
    while row < ROW_LENGTHS.len() {
        offsets[row] = offsets[row - 1] + ROW_LENGTHS[row - 1];
        row += 1;
    }
    offsets
}

static NEIGHBOR_INDICES: OnceLock<Vec<Vec<usize>>> = OnceLock::new();

fn neighbor_indices() -> &'static [Vec<usize>] {
    NEIGHBOR_INDICES.get_or_init(|| {
        NEIGHBOR_COORDS
            .iter()
            .map(|coords| {
                coords
                    .iter()
                    .map(|&(row, col)| ROW_OFFSETS[row] + col)
                    .collect()
            })
            .collect()
    })
}

/// Returns the flat indices of the cells adjacent to `index`
///
/// # Panics
/// Panics if `index >= NUM_CELLS`.
#[inline]
pub fn neighbors(index: usize) -> &'static [usize] {
    &neighbor_indices()[index]
}

/// Returns the coordinates adjacent to `coord`, or an empty list for an off-board coordinate
pub fn neighbor_coords(coord: Coord) -> Vec<Coord> {
    match index_of(coord) {
        Some(index) => neighbors(index).iter().map(|&n| coord_of(n)).collect(),
        None => Vec::new(),
    }
}

/// Flat index of the first cell in `row`
#[inline]
pub fn row_offset(row: usize) -> usize {
    ROW_OFFSETS[row]
}

/// Converts a coordinate to its flat index
pub fn index_of(coord: Coord) -> Option<usize> {
    let row_len = ROW_LENGTHS.get(coord.row)?;
    if coord.col >= *row_len {
        return None;
    }
    Some(ROW_OFFSETS[coord.row] + coord.col)
}

/// Converts a flat index back to its coordinate
///
/// # Panics
/// Panics if `index >= NUM_CELLS`.
pub fn coord_of(index: usize) -> Coord {
    assert!(index < NUM_CELLS, "cell index {} is off the board", index);
    let row = ROW_OFFSETS
        .iter()
        .rposition(|&offset| offset <= index)
        .unwrap_or(0);
    Coord::new(row, index - ROW_OFFSETS[row])
}

/// Whether two cells are adjacent
pub fn are_adjacent(a: usize, b: usize) -> bool {
    neighbors(a).contains(&b)
}
