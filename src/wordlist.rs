mod load;
mod search;

pub use self::load::{OnInvalid, SkippedLine};
use crate::labelset::{IteratorLabelSet, LabelSet};
use crate::tiles::{Codec, Label, NLABELS};
use crate::tilesets::TileSet;
use crate::Error;
use std::fmt;

/// A node in the word trie. The root node (index 0) represents the empty prefix.
#[derive(Debug, Clone, Default)]
struct Node {
    /// Labels of the child nodes
    labels: LabelSet,
    /// Indices of the child nodes, ordered by label
    children: Vec<u32>,
    /// The prefix ending in this node is a word
    terminal: bool,
    /// Position weighted value of the prefix ending in this node
    prefix_score: u32,
    /// Maximum `prefix_score` of all terminal nodes in this subtree
    subtree_best: u32,
}

impl Node {
    fn new(prefix_score: u32) -> Node {
        Node {
            prefix_score,
            ..Node::default()
        }
    }
}

#[derive(Debug, Clone)]
/// A trie data structure that holds all the possible words.
///
/// The nodes are kept in an append-only arena and addressed by index.
/// Each node knows the value of the prefix it represents, and the best value of any word
/// below it. The best value is used to prune the search for the highest scoring word.
pub struct Wordlist {
    nodes: Vec<Node>,
    tileset: TileSet,
    /// Path of the wordfile used to build the wordlist.
    /// Empty if the wordlist is not build from a file.
    wordfile: String,
    word_count: usize,
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words, {} nodes from '{}'>",
            self.word_count,
            self.node_count(),
            self.wordfile
        )
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Wordlist::new(TileSet::default())
    }
}

/// Iterator over the `(label, node)` children of a node, in label order.
pub struct IteratorChildren<'a> {
    labels: IteratorLabelSet,
    children: std::slice::Iter<'a, u32>,
}

impl<'a> Iterator for IteratorChildren<'a> {
    type Item = (Label, usize);
    fn next(&mut self) -> Option<Self::Item> {
        let label = self.labels.next()?;
        let child = self.children.next()?;
        Some((label, *child as usize))
    }
}

impl Wordlist {
    /// Create an empty wordlist that scores words with the values of `tileset`.
    pub fn new(tileset: TileSet) -> Wordlist {
        Wordlist {
            nodes: vec![Node::new(0)],
            tileset,
            wordfile: String::new(),
            word_count: 0,
        }
    }

    /// Build a wordlist from a list of words.
    /// ## Errors
    /// If a word is empty or can not be encoded.
    /// ## Examples
    /// ```
    /// use rack_solver::{Error, TileSet, Wordlist};
    /// let wordlist = Wordlist::from_words(&["rust", "rest"], TileSet::default())?;
    /// assert!(wordlist.contains("rust"));
    /// assert!(!wordlist.contains("rus"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words(words: &[&str], tileset: TileSet) -> Result<Wordlist, Error> {
        let mut wordlist = Wordlist::new(tileset);
        for &word in words {
            wordlist.insert(word)?;
        }
        Ok(wordlist)
    }

    /// Insert `word`. Inserting a word that is already present has no effect.
    /// ## Errors
    /// - [`Error::InvalidSymbol`] if `word` has a symbol outside the alphabet.
    /// - [`Error::EmptyWord`] if `word` is empty.
    /// - [`Error::ValueOverflow`] if `word` is too long to score.
    pub fn insert(&mut self, word: &str) -> Result<(), Error> {
        let labels = self.tileset.codec().encode(word)?;
        self.insert_labels(&labels)
    }

    /// Insert an encoded word.
    /// ## Errors
    /// - If `labels` is empty or contains an invalid label.
    /// - [`Error::ValueOverflow`] if the word is too long to score.
    pub fn insert_labels(&mut self, labels: &[Label]) -> Result<(), Error> {
        if labels.is_empty() {
            return Err(Error::EmptyWord);
        }
        if let Some(&label) = labels.iter().find(|&&label| label as usize >= NLABELS) {
            return Err(Error::InvalidLabel(label));
        }
        // every prefix scores at most the whole word, so the nodes below can not overflow
        self.tileset.value(labels)?;
        let mut path = Vec::with_capacity(labels.len() + 1);
        let mut i = 0;
        path.push(i);
        for (depth, &label) in (1..).zip(labels) {
            i = match self.get(i, label) {
                Some(child) => child,
                None => self.add_child(i, label, depth),
            };
            path.push(i);
        }
        let node = &mut self.nodes[i];
        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
        }
        let score = node.prefix_score;
        for j in path {
            let node = &mut self.nodes[j];
            node.subtree_best = node.subtree_best.max(score);
        }
        Ok(())
    }

    /// Append a new child for `label` to node `parent` at `depth`, and return its index.
    fn add_child(&mut self, parent: usize, label: Label, depth: u32) -> usize {
        let prefix_score = self.nodes[parent].prefix_score + self.tileset.points(label) * depth;
        let child = self.nodes.len();
        self.nodes.push(Node::new(prefix_score));
        let node = &mut self.nodes[parent];
        let pos = node.labels.rank(label);
        node.labels.insert(label);
        node.children.insert(pos, child as u32);
        child
    }

    /// Returns true if `word` is in the wordlist.
    /// Words that can not be encoded are never in the wordlist.
    pub fn contains(&self, word: &str) -> bool {
        self.tileset
            .codec()
            .encode(word)
            .map_or(false, |labels| self.is_word(&labels))
    }

    /// Returns true if the encoded `word` is in the wordlist.
    pub fn is_word<K: AsRef<[Label]>>(&self, word: K) -> bool {
        self.find(word).map_or(false, |i| self.nodes[i].terminal)
    }

    /// Return the index of the node for prefix `word`, if present.
    pub fn find<K: AsRef<[Label]>>(&self, word: K) -> Option<usize> {
        word.as_ref()
            .iter()
            .try_fold(0, |i, &label| self.get(i, label))
    }

    /// Get the index of child with `label` for node `i` if present.
    pub fn get(&self, i: usize, label: Label) -> Option<usize> {
        let node = &self.nodes[i];
        node.labels
            .index_of(label)
            .map(|pos| node.children[pos] as usize)
    }

    /// Iterate over the children of node `i`.
    pub fn iter_children(&self, i: usize) -> IteratorChildren {
        let node = &self.nodes[i];
        IteratorChildren {
            labels: node.labels.iter(),
            children: node.children.iter(),
        }
    }

    /// The labels of the children of node `i`.
    pub fn child_labels(&self, i: usize) -> LabelSet {
        self.nodes[i].labels
    }

    /// The position weighted value of the prefix of node `i`.
    pub fn prefix_score(&self, i: usize) -> u32 {
        self.nodes[i].prefix_score
    }

    /// The best value of any word in the subtree of node `i`, or 0 if there is none.
    pub fn subtree_best(&self, i: usize) -> u32 {
        self.nodes[i].subtree_best
    }

    /// Returns true if the prefix of node `i` is a word.
    pub fn is_terminal(&self, i: usize) -> bool {
        self.nodes[i].terminal
    }

    /// The best value of any word in the wordlist.
    pub fn max_value(&self) -> u32 {
        self.nodes[0].subtree_best
    }

    /// The number of words in the wordlist
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes in the wordlist, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Path of the wordfile, empty if not read from a file.
    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }

    /// The tileset used to score words.
    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    /// The codec to encode words and racks.
    pub fn codec(&self) -> &Codec {
        self.tileset.codec()
    }

    /// Decode `labels` to a word. Labels are always valid for words from the trie.
    fn word_string(&self, labels: &[Label]) -> String {
        labels
            .iter()
            .map(|&label| self.tileset.symbol(label))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{value, Language};
    use proptest::prelude::*;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    fn test_wordlist() -> Wordlist {
        Wordlist::from_words(WORDS, TileSet::default()).unwrap()
    }

    /// Check the score invariants for every node below `i`, and return the best word value.
    fn check_node(wordlist: &Wordlist, i: usize, depth: u32) -> u32 {
        let mut best = 0;
        if wordlist.is_terminal(i) {
            best = wordlist.prefix_score(i);
        }
        for (label, child) in wordlist.iter_children(i) {
            let points = wordlist.tileset().points(label);
            assert_eq!(
                wordlist.prefix_score(child),
                wordlist.prefix_score(i) + points * (depth + 1)
            );
            best = best.max(check_node(wordlist, child, depth + 1));
        }
        assert_eq!(wordlist.subtree_best(i), best);
        best
    }

    #[test]
    fn test_counts() {
        let wordlist = test_wordlist();
        assert_eq!(wordlist.word_count(), 11);
        assert_eq!(wordlist.node_count(), 17);
        let root: Vec<Label> = wordlist.child_labels(0).iter().collect();
        assert_eq!(root, vec![0, 1]);
        assert_eq!(
            wordlist.to_string(),
            "<Wordlist: 11 words, 17 nodes from ''>"
        );
    }

    #[test]
    fn test_terminal() -> Result<(), Error> {
        let wordlist = test_wordlist();
        let ba = wordlist.find(wordlist.codec().encode("ba")?).unwrap();
        assert!(!wordlist.is_terminal(ba));
        let bar = wordlist.get(ba, 17).unwrap();
        assert!(wordlist.is_terminal(bar));
        assert!(!wordlist.is_terminal(0));
        Ok(())
    }

    #[test]
    fn test_contains() {
        let wordlist = test_wordlist();
        for &word in WORDS {
            assert!(wordlist.contains(word), "should contain '{}'", word);
        }
        for &word in &["", "a", "be", "belts", "ba", "bob", "Bar", "b r"] {
            assert!(!wordlist.contains(word), "should not contain '{}'", word);
        }
    }

    #[test]
    fn test_children_ordered() -> Result<(), Error> {
        let mut wordlist = Wordlist::default();
        for word in &["bz", "ba", "bm", "bc"] {
            wordlist.insert(word)?;
        }
        let b = wordlist.get(0, 1).unwrap();
        let labels: Vec<Label> = wordlist
            .iter_children(b)
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, vec![0, 2, 12, 25]);
        for (label, child) in wordlist.iter_children(b) {
            assert_eq!(wordlist.get(b, label), Some(child));
        }
        Ok(())
    }

    #[test]
    fn test_scores() -> Result<(), Error> {
        let wordlist = test_wordlist();
        check_node(&wordlist, 0, 0);
        let belt = wordlist.find(wordlist.codec().encode("belt")?).unwrap();
        assert_eq!(wordlist.prefix_score(belt), value("belt")?);
        let max = WORDS.iter().map(|w| value(w).unwrap()).max().unwrap();
        assert_eq!(wordlist.max_value(), max);
        assert_eq!(wordlist.prefix_score(0), 0);
        Ok(())
    }

    #[test]
    fn test_prefix_subtree_best() -> Result<(), Error> {
        let mut wordlist = Wordlist::default();
        wordlist.insert("zoo")?;
        wordlist.insert("zoology")?;
        let zoo = wordlist.find(wordlist.codec().encode("zoo")?).unwrap();
        assert_eq!(wordlist.prefix_score(zoo), value("zoo")?);
        assert_eq!(wordlist.subtree_best(zoo), value("zoology")?);
        assert!(wordlist.subtree_best(zoo) >= wordlist.prefix_score(zoo));
        Ok(())
    }

    #[test]
    fn test_insert_idempotent() -> Result<(), Error> {
        let mut wordlist = test_wordlist();
        let (words, nodes, max) = (
            wordlist.word_count(),
            wordlist.node_count(),
            wordlist.max_value(),
        );
        wordlist.insert("belt")?;
        wordlist.insert("bo")?;
        assert_eq!(wordlist.word_count(), words);
        assert_eq!(wordlist.node_count(), nodes);
        assert_eq!(wordlist.max_value(), max);
        Ok(())
    }

    #[test]
    fn test_insert_errors() {
        let mut wordlist = test_wordlist();
        assert!(matches!(wordlist.insert(""), Err(Error::EmptyWord)));
        assert!(matches!(
            wordlist.insert("ca-t"),
            Err(Error::InvalidSymbol { symbol: '-', .. })
        ));
        assert!(matches!(
            wordlist.insert_labels(&[2, 26]),
            Err(Error::InvalidLabel(26))
        ));
        // failed inserts leave the wordlist unchanged
        assert_eq!(wordlist.word_count(), 11);
        assert_eq!(wordlist.node_count(), 17);
        assert!(!wordlist.is_terminal(0));
    }

    #[test]
    fn test_insert_long_word() -> Result<(), Error> {
        let mut wordlist = test_wordlist();
        assert!(matches!(
            wordlist.insert(&"z".repeat(30_000)),
            Err(Error::ValueOverflow(30_000))
        ));
        assert_eq!(wordlist.node_count(), 17);
        assert_eq!(wordlist.max_value(), value("belt")?);

        let long = "e".repeat(1_000);
        wordlist.insert(&long)?;
        assert!(wordlist.contains(&long));
        assert_eq!(wordlist.max_value(), value(&long)?);
        Ok(())
    }

    #[test]
    fn test_tileset_values() -> Result<(), Error> {
        let wordlist = Wordlist::from_words(&["daily"], TileSet::new(Language::NL))?;
        assert_eq!(wordlist.max_value(), 59);
        Ok(())
    }

    proptest! {
        /// Property: every inserted word is found, and the root bound is the best value
        #[test]
        fn prop_insert_contains(words in prop::collection::vec("[a-f]{1,6}", 1..40)) {
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            let wordlist = Wordlist::from_words(&refs, TileSet::default()).unwrap();
            for word in &refs {
                prop_assert!(wordlist.contains(word));
            }
            let max = refs.iter().map(|w| value(w).unwrap()).max().unwrap();
            prop_assert_eq!(wordlist.max_value(), max);
            check_node(&wordlist, 0, 0);
        }

        /// Property: strings that were not inserted are not found
        #[test]
        fn prop_not_inserted(
            words in prop::collection::vec("[a-d]{1,5}", 0..30),
            probe in "[a-d]{0,6}",
        ) {
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            let wordlist = Wordlist::from_words(&refs, TileSet::default()).unwrap();
            prop_assert_eq!(wordlist.contains(&probe), refs.contains(&probe.as_str()));
        }
    }
}
