//! Position weighted scoring of words.
use crate::error::Error;
use crate::tilesets::TileSet;

/// Return the position weighted value of `word` with the english tile values.
///
/// The k-th letter of the word (starting at 1) is worth k times its tile value.
/// ## Errors
/// - [`Error::InvalidSymbol`] if `word` contains a symbol outside `a..z`.
/// - [`Error::ValueOverflow`] if the value of `word` does not fit in a `u32`.
/// ## Examples
/// ```
/// use rack_solver::{value, Error};
/// assert_eq!(value("daily")?, 31);
/// assert_eq!(value("oology")?, 44);
/// # Ok::<(), Error>(())
/// ```
pub fn value(word: &str) -> Result<u32, Error> {
    value_with(&TileSet::default(), word)
}

/// Return the position weighted value of `word` with the tile values of `tileset`.
/// ## Errors
/// If `word` can not be encoded, or its value does not fit in a `u32`.
pub fn value_with(tileset: &TileSet, word: &str) -> Result<u32, Error> {
    let labels = tileset.codec().encode(word)?;
    tileset.value(&labels)
}
