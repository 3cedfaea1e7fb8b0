//! A rack solver library for Rust.
//! <br>
//! This crate finds the highest scoring word that can be formed from a rack of letter tiles.
//! A word is scored by position: the k-th letter placed is worth k times its tile value.
//! It answers the [rack management](https://www.reddit.com/r/dailyprogrammer/comments/5h40ml/20161207_challenge_294_intermediate_rack/)
//! puzzle, for a wordlist in the order of 100,000 words and racks of up to 16 tiles.
//!
//! # How to use `rack_solver`
//! Start by building a [`Wordlist`](crate::Wordlist), from a file or from a list of words.
//! The wordlist must be in utf-8 and contain one lower case word per line.
//! Each word is stored in a trie, together with its value and the best value of all words
//! that start with the same prefix. The search for the best word uses these values to skip
//! all prefixes that can not beat the best word found so far.
//!
//! The wordlist is not changed by a search, and can be shared by many threads.
//! It can use the `rayon` crate to evaluate racks in parallel.
//!
//! # Basic usage
//!  ```
//! # use rack_solver::{value, Error, Rack, TileSet, Wordlist};
//! let wordlist = Wordlist::from_words(&["oology", "logo", "goose"], TileSet::default())?;
//! let rack: Rack = "iogsvooely".parse()?;
//! let (word, score) = wordlist.highest_value(&rack);
//! assert_eq!(word.as_deref(), Some("oology"));
//! assert_eq!(score, value("oology")?);
//! # Ok::<(), Error>(())
//! ```
mod error;
mod labelset;
mod score;
mod tilebag;
mod tiles;
mod tilesets;
mod wordlist;

pub use crate::error::Error;
pub use crate::labelset::LabelSet;
pub use crate::score::{value, value_with};
pub use crate::tilebag::TileBag;
pub use crate::tiles::{Codec, Label, Rack, Word, DIM, NLABELS};
pub use crate::tilesets::{Language, TileSet};
pub use crate::wordlist::{OnInvalid, SkippedLine, Wordlist};
