// Plain-text rendering of a board
//
// Each cell is drawn as a three character slot inside the hex outline:
//   ` A `  uncolored      `rA ` / `bA `  red / blue
//   `RA ` / `BA `  locked red / blue
//   ` A?`  cleared (letter unknown)
//   `[A]`  letter of the highlighted word, `<A>` its first letter
//   `*` on the right edge marks a cell moved by the word's swap

use crate::adjacency::{self, NUM_CELLS};
use crate::board::{Board, Cell};
use crate::types::Color;
use crate::word::{Move, Word};

const LAYOUT: &str = r#"
                     ___
                 ___/ X \___
             ___/ X \___/ X \___
         ___/ X \___/ X \___/ X \___
     ___/ X \___/ X \___/ X \___/ X \___
    / X \___/ X \___/ X \___/ X \___/ X \
    \___/ X \___/ X \___/ X \___/ X \___/
    / X \___/ X \___/ X \___/ X \___/ X \
    \___/ X \___/ X \___/ X \___/ X \___/
    / X \___/ X \___/ X \___/ X \___/ X \
    \___/ X \___/ X \___/ X \___/ X \___/
    / X \___/ X \___/ X \___/ X \___/ X \
    \___/ X \___/ X \___/ X \___/ X \___/
    / X \___/ X \___/ X \___/ X \___/ X \
    \___/ X \___/ X \___/ X \___/ X \___/
        \___/ X \___/ X \___/ X \___/
            \___/ X \___/ X \___/
                \___/ X \___/
                    \___/
"#;

const SLOT: &str = " X ";

/// Renders the board without highlighting
pub fn render_board(board: &Board) -> String {
    render(board, None)
}

/// Renders the board a move was played on, with the move's word highlighted
///
/// If the word needed a swap, it is applied first so the highlighted letters
/// line up with the cells they were spelled from.
pub fn render_move(before: &Board, mov: &Move) -> String {
    let mut board = before.clone();
    if let Some((a, b)) = mov.word.swapped {
        if !board.has_swapped() {
            board.swap_nodes(a, b);
        }
    }
    render(&board, Some(&mov.word))
}

/// Renders `board`, highlighting `word` when given
pub fn render(board: &Board, word: Option<&Word>) -> String {
    let chunks: Vec<&str> = LAYOUT.split(SLOT).collect();
    debug_assert_eq!(chunks.len(), NUM_CELLS + 1);

    let mut out = String::with_capacity(LAYOUT.len() + 64);
    out.push_str(&format!(
        "Score: blue {} / red {}\n",
        board.score.blue, board.score.red
    ));
    if let Some(word) = word {
        out.push_str(&format!("Word: {}\n", word));
    }

    for (index, chunk) in chunks.iter().take(NUM_CELLS).enumerate() {
        out.push_str(chunk);
        out.push_str(&slot(index, board.cell_at(index), word));
    }
    if let Some(tail) = chunks.get(NUM_CELLS) {
        out.push_str(tail);
    }
    out
}

fn slot(index: usize, cell: &Cell, word: Option<&Word>) -> String {
    let coord = adjacency::coord_of(index);
    let swapped = word.map_or(false, |w| w.is_swapped(coord));

    if let Some(letter) = word.and_then(|w| w.get(coord)) {
        let (open, close) = if letter.is_start { ('<', '>') } else { ('[', ']') };
        let close = if swapped { '*' } else { close };
        return format!("{}{}{}", open, letter.letter as char, close);
    }

    let marker = match cell.color {
        Color::None => ' ',
        Color::Red => 'r',
        Color::Blue => 'b',
        Color::VeryRed => 'R',
        Color::VeryBlue => 'B',
    };
    let suffix = if cell.cleared {
        '?'
    } else if swapped {
        '*'
    } else {
        ' '
    };
    format!("{}{}{}", marker, cell.letter as char, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;
    use crate::word::WordLetter;

    #[test]
    fn test_layout_has_one_slot_per_cell() {
        assert_eq!(LAYOUT.matches(SLOT).count(), NUM_CELLS);
    }

    #[test]
    fn test_plain_board_shows_every_letter() {
        let board = Board::uniform(b'Q');
        let text = render_board(&board);
        assert_eq!(text.matches(" Q ").count(), NUM_CELLS);
        assert!(text.starts_with("Score: blue 0 / red 0"));
    }

    #[test]
    fn test_colors_and_cleared_cells_are_marked() {
        let mut board = Board::uniform(b'Q');
        board.set_color(Coord::new(0, 0), Color::Blue);
        board.set_color(Coord::new(16, 0), Color::VeryRed);
        board.set_cleared(Coord::new(8, 2), true);
        let text = render_board(&board);
        assert!(text.contains("bQ "));
        assert!(text.contains("RQ "));
        assert!(text.contains(" Q?"));
    }

    #[test]
    fn test_word_cells_are_highlighted() {
        let board = Board::uniform(b'Q');
        let letters = vec![
            WordLetter {
                coord: Coord::new(0, 0),
                letter: b'Q',
                is_start: true,
            },
            WordLetter {
                coord: Coord::new(1, 0),
                letter: b'Q',
                is_start: false,
            },
        ];
        let word = Word {
            board: board.play(&letters, crate::types::Mover::Blue),
            letters,
            probability: 1.0,
            num_grey_nodes: 2,
            swapped: None,
            score_delta: Default::default(),
        };
        let text = render(&board, Some(&word));
        assert_eq!(text.matches("<Q>").count(), 1);
        assert_eq!(text.matches("[Q]").count(), 1);
        assert_eq!(text.matches(" Q ").count(), NUM_CELLS - 2);
    }
}
