use crate::error::Error;
use crate::tiles::{Codec, Label, NLABELS};

/// These languages are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// English
    EN,
    /// Dutch
    NL,
}

impl Default for Language {
    fn default() -> Self {
        Language::EN
    }
}

/// symbol, count, points
type TileInfo = (char, u32, u32);

#[rustfmt::skip]
const EN: [TileInfo; NLABELS] = [
    ('a', 9, 1), ('b', 2, 3), ('c', 2, 3), ('d', 4, 2), ('e', 12, 1), ('f', 2, 4),
    ('g', 3, 2), ('h', 2, 4), ('i', 9, 1), ('j', 1, 8), ('k', 1, 5), ('l', 4, 1),
    ('m', 2, 3), ('n', 6, 1), ('o', 8, 1), ('p', 2, 3), ('q', 1, 10), ('r', 6, 1),
    ('s', 4, 1), ('t', 6, 1), ('u', 4, 1), ('v', 2, 4), ('w', 2, 4), ('x', 1, 8),
    ('y', 2, 4), ('z', 1, 10),
];

#[rustfmt::skip]
const NL: [TileInfo; NLABELS] = [
    ('a', 6, 1), ('b', 2, 3), ('c', 2, 5), ('d', 5, 2), ('e', 18, 1), ('f', 2, 4),
    ('g', 3, 3), ('h', 2, 4), ('i', 4, 1), ('j', 2, 4), ('k', 3, 3), ('l', 3, 3),
    ('m', 3, 3), ('n', 10, 1), ('o', 6, 1), ('p', 2, 3), ('q', 1, 10), ('r', 5, 2),
    ('s', 5, 2), ('t', 5, 2), ('u', 3, 4), ('v', 2, 4), ('w', 2, 5), ('x', 1, 8),
    ('y', 1, 8), ('z', 2, 4),
];

/// A tileset with the tile distribution and tile values for a supported language,
/// and a codec to translate between words and labels.
/// Blank tiles are not part of the tileset.
#[derive(Debug, Clone)]
pub struct TileSet {
    language: Language,
    tiles: &'static [TileInfo; NLABELS],
    codec: Codec,
}

impl Default for TileSet {
    fn default() -> Self {
        TileSet::new(Language::default())
    }
}

impl TileSet {
    /// Return a new `TileSet` for language.
    pub fn new(language: Language) -> TileSet {
        let tiles = match language {
            Language::EN => &EN,
            Language::NL => &NL,
        };
        TileSet {
            language,
            tiles,
            codec: Codec::default(),
        }
    }

    /// Return the points for the tile with `label`, or 0 if not found
    pub fn points(&self, label: Label) -> u32 {
        self.tiles.get(label as usize).map_or(0, |tile| tile.2)
    }

    /// Return the number of tiles with `label` in the tileset, or 0 if not found
    pub fn count(&self, label: Label) -> u32 {
        self.tiles.get(label as usize).map_or(0, |tile| tile.1)
    }

    /// Return the symbol for `label`, or ' ' if not found
    pub fn symbol(&self, label: Label) -> char {
        self.tiles.get(label as usize).map_or(' ', |tile| tile.0)
    }

    /// The position weighted value of a list of labels:
    /// the k-th letter (starting at 1) is worth k times its points.
    /// ## Errors
    /// [`Error::ValueOverflow`] if the value does not fit in a `u32`.
    pub fn value(&self, labels: &[Label]) -> Result<u32, Error> {
        labels
            .iter()
            .zip(1u32..)
            .try_fold(0u32, |total, (&label, position)| {
                self.points(label)
                    .checked_mul(position)
                    .and_then(|points| total.checked_add(points))
            })
            .ok_or(Error::ValueOverflow(labels.len()))
    }

    /// Return the language of this tileset
    pub fn language(&self) -> Language {
        self.language
    }

    /// Return the codec for this tileset
    pub fn codec(&self) -> &Codec {
        &self.codec
    }
}
