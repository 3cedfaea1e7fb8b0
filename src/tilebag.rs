use crate::tiles::{Label, Rack, DIM, NLABELS};
use crate::{Error, TileSet};
use multiset::HashMultiSet;
use rand::{seq::IteratorRandom, Rng};
use std::ops::Deref;

/// A bag with the tiles of a tileset, to draw random racks from.
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Label>);

impl Deref for TileBag {
    type Target = HashMultiSet<Label>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TileBag {
    /// A bag with the full tile distribution of `tileset`.
    pub fn from_tileset(tileset: &TileSet) -> Self {
        let mut bag = HashMultiSet::new();
        for label in 0..NLABELS as Label {
            let count = tileset.count(label);
            if count > 0 {
                bag.insert_times(label, count as usize);
            }
        }
        Self(bag)
    }

    /// Remove the tiles in `rack` from the bag, as far as present.
    pub fn remove_rack(&mut self, rack: &Rack) {
        for label in rack.iter() {
            self.0.remove(&label);
        }
    }

    /// Draw `n` random tiles from the bag. The bag itself is not changed.
    /// ## Errors
    /// If `n` is more than the number of tiles in the bag, or more than fit in a rack.
    pub fn draw<R: Rng>(&self, n: usize, rng: &mut R) -> Result<Rack, Error> {
        if n > self.0.len() {
            return Err(Error::NotEnoughTiles {
                wanted: n,
                available: self.0.len(),
            });
        }
        if n > DIM {
            return Err(Error::RackTooLong(n));
        }
        // sort first, the iteration order of the multiset is not reproducible
        let mut all: Vec<Label> = self.0.iter().copied().collect();
        all.sort_unstable();
        let mut tiles = all.into_iter().choose_multiple(rng, n);
        tiles.sort_unstable();
        Rack::from_labels(&tiles)
    }
}

impl From<&TileSet> for TileBag {
    fn from(tileset: &TileSet) -> Self {
        TileBag::from_tileset(tileset)
    }
}
