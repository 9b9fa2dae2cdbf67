// Integration tests for legal word enumeration
//
// Hand-built boards check exact results; seeded random boards check the
// structural properties every enumerated word must have.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hexword_solver::adjacency::{self, ROW_LENGTHS};
use hexword_solver::board::Board;
use hexword_solver::config::WordsConfig;
use hexword_solver::trie::Trie;
use hexword_solver::types::{Color, Coord, Mover};
use hexword_solver::word::Word;
use hexword_solver::word_finder::find_words;

fn no_swaps() -> WordsConfig {
    WordsConfig {
        explore_swaps: false,
        ..WordsConfig::default()
    }
}

/// Uniform 'X' board with the given letters placed
fn board_with(letters: &[(Coord, u8)]) -> Board {
    let mut board = Board::uniform(b'X');
    for &(coord, letter) in letters {
        board.set_letter(coord, letter);
    }
    board
}

/// C-A-T along (0,0) -> (1,0) -> (2,0)
fn cat_board() -> Board {
    board_with(&[
        (Coord::new(0, 0), b'C'),
        (Coord::new(1, 0), b'A'),
        (Coord::new(2, 0), b'T'),
    ])
}

#[test]
fn test_finds_single_word_on_straight_path() {
    let trie = Trie::from_words(["cat"]);
    let board = cat_board();

    let words = find_words(&board, &trie, Mover::Blue, &no_swaps());

    assert_eq!(words.len(), 1, "Expected exactly one word");
    let word = &words[0];
    assert_eq!(word.text(), "CAT");
    assert_eq!(
        word.coords(),
        vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
    );
    assert!(word.letters[0].is_start);
    assert!(word.letters[1..].iter().all(|l| !l.is_start));
    assert_eq!(word.num_grey_nodes, 3);
    assert_eq!(word.probability, 1.0);
    assert_eq!(word.swapped, None);

    for coord in word.coords() {
        assert_eq!(word.board.cell(coord).color, Color::Blue);
    }
    // The caller's board is never modified
    assert_eq!(board, cat_board());
}

#[test]
fn test_min_word_length_and_sort_order() {
    let trie = Trie::from_words(["at", "cat"]);
    let board = cat_board();

    let words = find_words(&board, &trie, Mover::Blue, &no_swaps());
    let texts: Vec<String> = words.iter().map(|w| w.text()).collect();
    assert_eq!(texts, vec!["CAT"], "Two-letter words are below the minimum");

    let config = WordsConfig {
        min_word_length: 2,
        ..no_swaps()
    };
    let words = find_words(&board, &trie, Mover::Blue, &config);
    let texts: Vec<String> = words.iter().map(|w| w.text()).collect();
    assert_eq!(texts, vec!["CAT", "AT"], "More uncolored cells sort first");
}

#[test]
fn test_opponent_cells_block_the_path() {
    let trie = Trie::from_words(["cat"]);
    let mut board = cat_board();
    board.set_color(Coord::new(1, 0), Color::Red);

    assert!(find_words(&board, &trie, Mover::Blue, &no_swaps()).is_empty());

    let red_words = find_words(&board, &trie, Mover::Red, &no_swaps());
    assert_eq!(red_words.len(), 1);
    assert_eq!(red_words[0].num_grey_nodes, 2);
}

#[test]
fn test_locked_own_cells_are_usable() {
    let trie = Trie::from_words(["cat"]);
    let mut board = cat_board();
    board.set_color(Coord::new(1, 0), Color::VeryBlue);

    let words = find_words(&board, &trie, Mover::Blue, &no_swaps());
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].board.cell(Coord::new(1, 0)).color, Color::VeryBlue);
}

#[test]
fn test_cleared_cells_are_skipped_by_default() {
    let trie = Trie::from_words(["cat"]);
    let mut board = cat_board();
    board.set_cleared(Coord::new(1, 0), true);

    assert!(find_words(&board, &trie, Mover::Blue, &no_swaps()).is_empty());
}

#[test]
fn test_uncertain_letters_branch_over_cleared_cells() {
    let trie = Trie::from_words(["cat"]);
    let mut board = cat_board();
    board.set_cleared(Coord::new(1, 0), true);

    let config = WordsConfig {
        uncertain_letters: true,
        ..no_swaps()
    };
    let words = find_words(&board, &trie, Mover::Blue, &config);

    assert_eq!(words.len(), 1);
    assert_eq!(words[0].text(), "CAT");
    assert!((words[0].probability - 1.0 / 26.0).abs() < 1e-12);

    // A floor above 1/26 prunes the branch entirely
    let strict = WordsConfig {
        min_branch_probability: 0.05,
        ..config
    };
    assert!(find_words(&board, &trie, Mover::Blue, &strict).is_empty());
}

#[test]
fn test_swap_makes_word_spellable() {
    // The A at (2,1) is adjacent to C but not to T
    let trie = Trie::from_words(["cat"]);
    let board = board_with(&[
        (Coord::new(0, 0), b'C'),
        (Coord::new(2, 1), b'A'),
        (Coord::new(2, 0), b'T'),
    ]);

    assert!(find_words(&board, &trie, Mover::Blue, &no_swaps()).is_empty());

    let words = find_words(&board, &trie, Mover::Blue, &WordsConfig::default());
    assert!(!words.is_empty());
    assert!(words.iter().all(|w| w.text() == "CAT"));
    assert!(words.iter().all(|w| w.swapped.is_some()));

    let moved_a = words
        .iter()
        .find(|w| w.swapped == Some((Coord::new(1, 0), Coord::new(2, 1))))
        .expect("Expected the A to be swapped into (1,0)");
    assert_eq!(
        moved_a.coords(),
        vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
    );
    // The swap is permanent on the resulting board
    assert_eq!(moved_a.board.cell(Coord::new(1, 0)).letter, b'A');
    assert_eq!(moved_a.board.cell(Coord::new(2, 1)).letter, b'X');
    assert_eq!(moved_a.board.cell(Coord::new(2, 1)).color, Color::None);
    assert!(!moved_a.board.has_swapped());

    // Enumeration undoes every trial swap
    assert!(!board.has_swapped());
}

#[test]
fn test_no_words_on_letterless_board() {
    let trie = Trie::from_words(["cat", "dog"]);
    let board = Board::uniform(b'Q');
    assert!(find_words(&board, &trie, Mover::Blue, &WordsConfig::default()).is_empty());
}

fn random_board(rng: &mut StdRng) -> Board {
    const LETTERS: &[u8] = b"AEISTRNO";
    let mut board = Board::uniform(b'A');
    for row in 0..ROW_LENGTHS.len() {
        for col in 0..ROW_LENGTHS[row] {
            let coord = Coord::new(row, col);
            board.set_letter(coord, LETTERS[rng.random_range(0..LETTERS.len())]);
            let color = match rng.random_range(0..10) {
                0 | 1 => Color::Red,
                2 | 3 => Color::Blue,
                4 => Color::VeryRed,
                5 => Color::VeryBlue,
                _ => Color::None,
            };
            board.set_color(coord, color);
            if color == Color::None && rng.random_range(0..8) == 0 {
                board.set_cleared(coord, true);
            }
        }
    }
    board
}

fn assert_word_is_legal(
    board: &Board,
    trie: &Trie,
    mover: Mover,
    config: &WordsConfig,
    word: &Word,
) {
    assert!(word.len() >= config.min_word_length, "{} is too short", word);
    assert!(trie.contains(&word.text()), "{} is not in the dictionary", word);

    let mut spelled_on = board.clone();
    if let Some((a, b)) = word.swapped {
        spelled_on.swap_nodes(a, b);
    }

    let coords = word.coords();
    for (i, &coord) in coords.iter().enumerate() {
        assert!(
            !coords[..i].contains(&coord),
            "{} revisits {}",
            word,
            coord
        );
        let cell = spelled_on.cell(coord);
        assert!(mover.is_matching(cell.color), "{} crosses {:?}", word, cell.color);
        assert!(!cell.cleared, "{} uses cleared cell {}", word, coord);
        assert_eq!(cell.letter, word.letters[i].letter);
        if i > 0 {
            let prev = adjacency::index_of(coords[i - 1]).unwrap();
            let here = adjacency::index_of(coord).unwrap();
            assert!(adjacency::are_adjacent(prev, here), "{} jumps to {}", word, coord);
        }
    }
}

#[test]
fn test_random_boards_only_yield_legal_words() {
    let trie = Trie::from_words([
        "ant", "ants", "art", "arts", "ate", "eat", "east", "ear", "ears", "era", "ion", "iron",
        "irons", "net", "nest", "nose", "note", "notes", "oar", "one", "ore", "rat", "rate",
        "rates", "rise", "rose", "sat", "sea", "seat", "sir", "sit", "star", "stare", "stone",
        "tan", "tea", "tear", "ten", "tin", "toe", "ton", "tone", "tones",
    ]);
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..20 {
        let board = random_board(&mut rng);
        let mover = if round % 2 == 0 { Mover::Blue } else { Mover::Red };
        let config = WordsConfig::default();

        let words = find_words(&board, &trie, mover, &config);
        for word in &words {
            assert_word_is_legal(&board, &trie, mover, &config, word);
        }
        for pair in words.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                (a.num_grey_nodes, a.len()) >= (b.num_grey_nodes, b.len()),
                "Words are not sorted: {} before {}",
                a,
                b
            );
        }
        assert!(!board.has_swapped());
    }
}
