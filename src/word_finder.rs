// Legal word enumeration
//
// Depth-first search from every cell the mover may start on, guided by the
// trie. The cells already on the current path are tracked in a bit set that
// is passed by value, so nothing has to be unwound on the way back out. The
// only shared mutable state is the working board's single swap, which is
// always undone before trying the next candidate.

use crate::adjacency::{self, NUM_CELLS};
use crate::board::Board;
use crate::config::WordsConfig;
use crate::trie::{alphabet, LetterSet, NodeId, Trie, ALPHABET_SIZE};
use crate::types::{Color, Mover, Score};
use crate::word::{Word, WordLetter};

const _: () = assert!(NUM_CELLS <= 64);

/// Cells on the path being built, one bit per cell index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PathSet(u64);

impl PathSet {
    #[inline]
    fn contains(self, index: usize) -> bool {
        self.0 & (1u64 << index) != 0
    }

    #[inline]
    fn with(self, index: usize) -> PathSet {
        PathSet(self.0 | (1u64 << index))
    }
}

#[derive(Debug, Clone, Copy)]
struct Step {
    index: usize,
    letter: u8,
    grey: bool,
}

struct Traversal<'a> {
    trie: &'a Trie,
    mover: Mover,
    config: &'a WordsConfig,
    board: Board,
    path: Vec<Step>,
    words: Vec<Word>,
}

/// Finds every word `mover` can legally play on `board`
///
/// Results are sorted by number of uncolored cells, then by length, both
/// descending. That order only exists to make alpha-beta cut earlier.
pub fn find_words(board: &Board, trie: &Trie, mover: Mover, config: &WordsConfig) -> Vec<Word> {
    let mut traversal = Traversal {
        trie,
        mover,
        config,
        board: board.clone(),
        path: Vec::with_capacity(16),
        words: Vec::new(),
    };

    for index in 0..NUM_CELLS {
        if !mover.is_matching(traversal.board.cell_at(index).color) {
            continue;
        }
        traversal.visit(index, trie.root(), PathSet::default(), 1.0);
    }

    let mut words = traversal.words;
    words.sort_by(|a, b| {
        b.num_grey_nodes
            .cmp(&a.num_grey_nodes)
            .then_with(|| b.len().cmp(&a.len()))
    });
    words
}

impl<'a> Traversal<'a> {
    /// Tries to extend the current path (ending at trie node `parent`) with the cell at `index`
    fn visit(&mut self, index: usize, parent: NodeId, path: PathSet, probability: f64) {
        let cell = *self.board.cell_at(index);
        if path.contains(index) || !self.mover.is_matching(cell.color) {
            return;
        }

        if cell.cleared {
            if !self.config.uncertain_letters {
                return;
            }
            let branch_probability = probability / ALPHABET_SIZE as f64;
            if branch_probability < self.config.min_branch_probability {
                return;
            }
            for letter in alphabet() {
                self.enter(index, letter, cell.color, parent, path, branch_probability);
            }
            return;
        }

        self.enter(index, cell.letter, cell.color, parent, path, probability);
    }

    fn enter(
        &mut self,
        index: usize,
        letter: u8,
        color: Color,
        parent: NodeId,
        path: PathSet,
        probability: f64,
    ) {
        let node = match self.trie.step(parent, letter) {
            Some(node) => node,
            None => return,
        };

        self.path.push(Step {
            index,
            letter,
            grey: color == Color::None,
        });
        self.explore(index, node, path.with(index), probability);
        self.path.pop();
    }

    fn explore(&mut self, index: usize, node: NodeId, path: PathSet, probability: f64) {
        let found = self.trie.node_result(node);
        if found.is_word && self.path.len() >= self.config.min_word_length {
            self.emit(probability);
        }
        if !found.is_prefix {
            return;
        }

        for &neighbor in adjacency::neighbors(index) {
            self.visit(neighbor, node, path, probability);

            if self.config.explore_swaps && !self.board.has_swapped() {
                self.visit_with_swaps(neighbor, node, found.next_letters, path, probability);
            }
        }
    }

    /// Extends the path into `target` after swapping in each neighbor letter the trie can use
    fn visit_with_swaps(
        &mut self,
        target: usize,
        parent: NodeId,
        next_letters: LetterSet,
        path: PathSet,
        probability: f64,
    ) {
        let target_cell = *self.board.cell_at(target);
        if path.contains(target) || target_cell.color.is_locked() {
            return;
        }

        for &source in adjacency::neighbors(target) {
            let source_cell = *self.board.cell_at(source);
            if source_cell.color != Color::None
                || source_cell.cleared
                || path.contains(source)
                || source_cell.letter == target_cell.letter
                || !next_letters.contains(source_cell.letter)
            {
                continue;
            }

            self.board.swap_indices(target, source);
            self.visit(target, parent, path, probability);
            self.board.reset_swap();
        }
    }

    fn emit(&mut self, probability: f64) {
        let letters: Vec<WordLetter> = self
            .path
            .iter()
            .enumerate()
            .map(|(position, step)| WordLetter {
                coord: adjacency::coord_of(step.index),
                letter: step.letter,
                is_start: position == 0,
            })
            .collect();

        let board = self.board.play(&letters, self.mover);
        let score_delta = Score {
            red: board.score.red - self.board.score.red,
            blue: board.score.blue - self.board.score.blue,
        };

        self.words.push(Word {
            letters,
            probability,
            num_grey_nodes: self.path.iter().filter(|step| step.grey).count(),
            swapped: self.board.swapped_pair(),
            score_delta,
            board,
        });
    }
}
