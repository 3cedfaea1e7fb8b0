use super::codec::Codec;
use super::codes::{Label, NLABELS};
use super::DIM;
use crate::error::Error;
use crate::labelset::LabelSet;
use std::fmt;
use std::str::FromStr;

/// A multiset of tiles, represented by a count for each label.
///
/// A rack holds at most [`DIM`](crate::DIM) tiles.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rack {
    counts: [u8; NLABELS],
    len: usize,
}

impl Rack {
    /// An empty rack
    pub fn new() -> Rack {
        Rack::default()
    }

    /// Create a rack from a list of labels.
    /// ## Errors
    /// If a label is not valid, or there are more than [`DIM`](crate::DIM) labels.
    pub fn from_labels(labels: &[Label]) -> Result<Rack, Error> {
        if labels.len() > DIM {
            return Err(Error::RackTooLong(labels.len()));
        }
        let mut rack = Rack::new();
        for &label in labels {
            if label as usize >= NLABELS {
                return Err(Error::InvalidLabel(label));
            }
            rack.put(label);
        }
        Ok(rack)
    }

    /// Parse a rack from a string of tile symbols, for example `"iogsvooely"`.
    /// ## Errors
    /// If a symbol can not be encoded with `codec`, or the rack is too long.
    /// ## Examples
    /// ```
    /// use rack_solver::{Codec, Error, Rack};
    /// let rack = Rack::parse("hello", &Codec::default())?;
    /// assert_eq!(rack.len(), 5);
    /// assert_eq!(rack.count(11), 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn parse(tiles: &str, codec: &Codec) -> Result<Rack, Error> {
        Rack::from_labels(&codec.encode(tiles)?)
    }

    /// Number of tiles with `label` in the rack
    pub fn count(&self, label: Label) -> u8 {
        self.counts.get(label as usize).copied().unwrap_or(0)
    }

    /// Tile count for each label
    pub fn counts(&self) -> &[u8; NLABELS] {
        &self.counts
    }

    /// Total number of tiles
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The set of labels that are available (count > 0)
    pub fn labels(&self) -> LabelSet {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(label, _)| label as Label)
            .collect()
    }

    /// Iterate over the tiles in label order, repeating labels by their count.
    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        self.counts
            .iter()
            .enumerate()
            .flat_map(|(label, &count)| std::iter::repeat(label as Label).take(count as usize))
    }

    /// Remove one tile with `label`. Returns false if there is none.
    pub(crate) fn take(&mut self, label: Label) -> bool {
        match self.counts.get_mut(label as usize) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Return a tile with `label` to the rack.
    pub(crate) fn put(&mut self, label: Label) {
        self.counts[label as usize] += 1;
        self.len += 1;
    }
}

impl FromStr for Rack {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rack::parse(s, &Codec::default())
    }
}

/// Display the tiles in alphabet order.
impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let codec = Codec::default();
        let s: String = self.iter().filter_map(|label| codec.symbol(label)).collect();
        write!(f, "{}", s)
    }
}
