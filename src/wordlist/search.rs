use super::Wordlist;
use crate::tiles::{Rack, Word};
use crate::Error;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};

/// Best word found so far and its value
type Best = (Option<Word>, u32);

impl Wordlist {
    /// Return the highest scoring word that can be formed with the tiles in `rack`,
    /// and its value. Each tile can be used once. Returns `(None, 0)` if no word can be formed.
    ///
    /// If more words have the highest value, the first one in alphabet order of the trie
    /// traversal is returned.
    /// ## Examples
    /// ```
    /// use rack_solver::{Error, Rack, TileSet, Wordlist};
    /// let wordlist = Wordlist::from_words(&["foo", "bar", "baz"], TileSet::default())?;
    /// let rack: Rack = "barwxyz".parse()?;
    /// assert_eq!(wordlist.highest_value(&rack), (Some(String::from("baz")), 35));
    /// let rack: Rack = "xyz".parse()?;
    /// assert_eq!(wordlist.highest_value(&rack), (None, 0));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn highest_value(&self, rack: &Rack) -> (Option<String>, u32) {
        let mut rack = *rack;
        let mut path = Word::new();
        let (word, score) = self.search(0, &mut rack, &mut path, (None, 0), None);
        (word.map(|word| self.word_string(&word)), score)
    }

    /// Parse `rack` with the codec of the wordlist, and return the highest scoring word.
    /// ## Errors
    /// If the rack can not be parsed.
    pub fn highest_value_str(&self, rack: &str) -> Result<(Option<String>, u32), Error> {
        let rack = Rack::parse(rack, self.codec())?;
        Ok(self.highest_value(&rack))
    }

    /// Depth first search below `node`, pruning children whose best word can not
    /// beat the best value found so far. `rack` and `path` are restored before returning.
    ///
    /// With a `shared` bound the children are also pruned against the best value
    /// found by other workers.
    fn search(
        &self,
        node: usize,
        rack: &mut Rack,
        path: &mut Word,
        mut best: Best,
        shared: Option<&AtomicU32>,
    ) -> Best {
        let n = &self.nodes[node];
        if n.terminal && n.prefix_score > best.1 {
            best = (Some(*path), n.prefix_score);
            if let Some(bound) = shared {
                bound.fetch_max(n.prefix_score, Ordering::Relaxed);
            }
        }
        for label in (n.labels & rack.labels()).iter() {
            let child = n.children[n.labels.rank(label)] as usize;
            let floor = shared.map_or(best.1, |bound| {
                best.1.max(bound.load(Ordering::Relaxed))
            });
            if self.nodes[child].subtree_best <= floor {
                continue;
            }
            rack.take(label);
            path.push(label);
            best = self.search(child, rack, path, best, shared);
            path.pop();
            rack.put(label);
        }
        best
    }

    /// Return all words that can be formed with the tiles in `rack`, with their values.
    ///
    /// The words are returned in the order of the trie traversal. Nothing is pruned.
    /// ## Examples
    /// ```
    /// use rack_solver::{Error, Rack, TileSet, Wordlist};
    /// let wordlist = Wordlist::from_words(&["foo", "bar", "baz"], TileSet::default())?;
    /// let rack: Rack = "barwxyz".parse()?;
    /// let words = wordlist.formable_words(&rack);
    /// assert_eq!(words, vec![(String::from("bar"), 8), (String::from("baz"), 35)]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn formable_words(&self, rack: &Rack) -> Vec<(String, u32)> {
        let mut words = Vec::new();
        let mut rack = *rack;
        let mut path = Word::new();
        self.collect_words(0, &mut rack, &mut path, &mut words);
        words
    }

    fn collect_words(
        &self,
        node: usize,
        rack: &mut Rack,
        path: &mut Word,
        words: &mut Vec<(String, u32)>,
    ) {
        let n = &self.nodes[node];
        if n.terminal {
            words.push((self.word_string(path), n.prefix_score));
        }
        for label in (n.labels & rack.labels()).iter() {
            let child = n.children[n.labels.rank(label)] as usize;
            rack.take(label);
            path.push(label);
            self.collect_words(child, rack, path, words);
            path.pop();
            rack.put(label);
        }
    }

    /// Return the highest scoring word for each rack in `racks`, in the same order.
    #[cfg(not(feature = "rayon"))]
    pub fn highest_values(&self, racks: &[Rack]) -> Vec<(Option<String>, u32)> {
        racks.iter().map(|rack| self.highest_value(rack)).collect()
    }

    /// Return the highest scoring word for each rack in `racks`, in the same order.
    /// The racks are evaluated in parallel.
    #[cfg(feature = "rayon")]
    pub fn highest_values(&self, racks: &[Rack]) -> Vec<(Option<String>, u32)> {
        racks
            .par_iter()
            .map(|rack| self.highest_value(rack))
            .collect()
    }

    /// Like [`highest_value`](Wordlist::highest_value), but the first letters of the word are
    /// searched in parallel. The workers share the best value found so far to prune their
    /// subtrees.
    ///
    /// The value is always the same as from `highest_value`. If more words have the highest
    /// value, the returned word may differ.
    #[cfg(feature = "rayon")]
    pub fn highest_value_par(&self, rack: &Rack) -> (Option<String>, u32) {
        let bound = AtomicU32::new(0);
        let first: Vec<(crate::Label, usize)> = self
            .iter_children(0)
            .filter(|&(label, _)| rack.count(label) > 0)
            .collect();
        let best = first
            .into_par_iter()
            .map(|(label, child)| {
                let mut rack = *rack;
                rack.take(label);
                let mut path = Word::new();
                path.push(label);
                self.search(child, &mut rack, &mut path, (None, 0), Some(&bound))
            })
            .reduce_with(|a, b| if b.1 > a.1 { b } else { a });
        match best {
            Some((Some(word), score)) => (Some(self.word_string(&word)), score),
            _ => (None, 0),
        }
    }
}
