// Prefix dictionary over the uppercase A-Z alphabet
//
// Nodes live in a flat arena and refer to their children by index, so the
// trie can be shared read-only across search workers without any pointer
// chasing through boxed nodes.

/// Total characters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Arena index of a trie node
pub type NodeId = u32;

const NO_CHILD: NodeId = 0;
const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct TrieNode {
    children: [NodeId; ALPHABET_SIZE],
    is_word_end: bool,
    is_prefix: bool,
}

impl TrieNode {
    fn new() -> Self {
        TrieNode {
            children: [NO_CHILD; ALPHABET_SIZE],
            is_word_end: false,
            is_prefix: false,
        }
    }
}

/// Set of letters stored as a bit mask, bit 0 = 'A'
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn insert(&mut self, letter: u8) {
        if let Some(bit) = letter_index(letter) {
            self.0 |= 1u32 << bit;
        }
    }

    pub fn contains(&self, letter: u8) -> bool {
        letter_index(letter).map_or(false, |bit| self.0 & (1u32 << bit) != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..ALPHABET_SIZE as u8)
            .filter(move |&bit| self.0 & (1u32 << bit) != 0)
            .map(|bit| b'A' + bit)
    }
}

/// Result of looking up a letter sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindResult {
    /// The sequence is a complete dictionary word
    pub is_word: bool,
    /// Some longer dictionary word starts with the sequence
    pub is_prefix: bool,
    /// Letters that extend the sequence towards a longer word
    pub next_letters: LetterSet,
}

impl FindResult {
    const MISSING: FindResult = FindResult {
        is_word: false,
        is_prefix: false,
        next_letters: LetterSet(0),
    };
}

/// Maps an uppercase ASCII letter to its alphabet position
#[inline]
pub fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter - b'A') as usize)
    } else {
        None
    }
}

/// All alphabet letters in order
pub fn alphabet() -> impl Iterator<Item = u8> {
    b'A'..=b'Z'
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::new()],
            word_count: 0,
        }
    }

    /// Builds a trie from a sequence of words, skipping any that cannot be inserted
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Inserts a word, normalizing it to uppercase
    ///
    /// Returns false (and leaves the trie untouched) when the word is empty or
    /// contains anything other than ASCII letters.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return false;
        }

        let mut current = ROOT;
        for letter in word.bytes().map(|b| b.to_ascii_uppercase()) {
            self.nodes[current as usize].is_prefix = true;
            let slot = (letter - b'A') as usize;
            let mut next = self.nodes[current as usize].children[slot];
            if next == NO_CHILD {
                next = self.nodes.len() as NodeId;
                self.nodes.push(TrieNode::new());
                self.nodes[current as usize].children[slot] = next;
            }
            current = next;
        }

        let end = &mut self.nodes[current as usize];
        if !end.is_word_end {
            end.is_word_end = true;
            self.word_count += 1;
        }
        true
    }

    /// Number of distinct words stored
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Node for the empty sequence
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Follows one letter from `node`
    #[inline]
    pub fn step(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        let slot = letter_index(letter)?;
        match self.nodes[node as usize].children[slot] {
            NO_CHILD => None,
            child => Some(child),
        }
    }

    /// Lookup result for a node reached through `step`
    pub fn node_result(&self, node: NodeId) -> FindResult {
        let trie_node = &self.nodes[node as usize];
        let mut next_letters = LetterSet::default();
        for (slot, &child) in trie_node.children.iter().enumerate() {
            if child != NO_CHILD {
                next_letters.insert(b'A' + slot as u8);
            }
        }
        FindResult {
            is_word: trie_node.is_word_end,
            is_prefix: trie_node.is_prefix,
            next_letters,
        }
    }

    /// Looks up a sequence of uppercase letters
    pub fn find(&self, letters: &[u8]) -> FindResult {
        let mut current = ROOT;
        for &letter in letters {
            match self.step(current, letter) {
                Some(next) => current = next,
                None => return FindResult::MISSING,
            }
        }
        self.node_result(current)
    }

    /// Convenience lookup for string input, case-insensitive
    pub fn find_str(&self, word: &str) -> FindResult {
        let letters: Vec<u8> = word.bytes().map(|b| b.to_ascii_uppercase()).collect();
        self.find(&letters)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find_str(word).is_word
    }
}
