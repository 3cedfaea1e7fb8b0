#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
use crate::tiles::{Label, NLABELS};
use std::fmt;
use std::iter::FromIterator;
use std::ops::BitAnd;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n.bzhi(v)
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n & ((1 << v) - 1)
}

/// A bitset of labels, used for the children of a `wordlist` node
/// and for the available tiles in a rack.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelSet(u32);

impl LabelSet {
    pub fn new() -> LabelSet {
        LabelSet(0)
    }

    pub fn contains(&self, label: Label) -> bool {
        (label as usize) < NLABELS && self.0 & (1 << label) != 0
    }

    /// Insert `label`, and return true if it was already present.
    pub fn insert(&mut self, label: Label) -> bool {
        assert!((label as usize) < NLABELS);
        let r = (self.0 & (1 << label)) != 0;
        self.0 |= 1 << label;
        r
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over the labels in ascending order.
    pub fn iter(&self) -> IteratorLabelSet {
        IteratorLabelSet::new(self.0)
    }

    /// Return the number of labels in the set below `label`, if `label` is present.
    pub fn index_of(&self, label: Label) -> Option<usize> {
        if !self.contains(label) {
            return None;
        }
        Some(count_ones(zero_highbits(self.0, label as u32)) as usize)
    }

    /// Return the number of labels in the set below `label`, whether or not `label` is present.
    /// This is the position where `label` would be inserted.
    pub fn rank(&self, label: Label) -> usize {
        count_ones(zero_highbits(self.0, label as u32)) as usize
    }

    pub fn intersection(&self, other: LabelSet) -> LabelSet {
        LabelSet(self.0 & other.0)
    }
}

impl BitAnd for LabelSet {
    type Output = LabelSet;
    fn bitand(self, rhs: LabelSet) -> LabelSet {
        self.intersection(rhs)
    }
}

impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .iter()
            .map(|label| format!("{}", label))
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorLabelSet {
    value: u32,
}

impl IteratorLabelSet {
    pub fn new(value: u32) -> IteratorLabelSet {
        IteratorLabelSet { value }
    }
}

impl Iterator for IteratorLabelSet {
    type Item = Label;
    fn next(&mut self) -> Option<Label> {
        if self.value == 0 {
            return None;
        }
        let i = self.value.trailing_zeros();
        // clear lowest set bit
        self.value &= self.value - 1;
        Some(i as Label)
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut c = LabelSet::new();
        for i in iter {
            c.insert(i);
        }
        c
    }
}

impl From<Vec<Label>> for LabelSet {
    fn from(v: Vec<Label>) -> Self {
        v.into_iter().collect()
    }
}
