use super::codes::{Label, NLABELS};
use crate::error::Error;
use std::collections::HashMap;

const ASCII_LC: &str = "abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone)]
struct CodeSet {
    encoder: HashMap<char, Label>,
    decoder: Vec<char>,
}

impl CodeSet {
    fn new() -> CodeSet {
        let mut encoder = HashMap::with_capacity(NLABELS);
        let mut decoder = Vec::with_capacity(NLABELS);
        for (i, ch) in ASCII_LC.chars().enumerate() {
            encoder.insert(ch, i as Label);
            decoder.push(ch);
        }
        CodeSet { encoder, decoder }
    }
}

#[derive(Debug, Clone)]
/// Translate from string to labels and vice versa.
/// Each tile symbol `a` .. `z` is translated to a label `0` .. `25`.
/// Other characters, upper case letters included, can not be encoded.
pub struct Codec {
    codeset: CodeSet,
}

impl Default for Codec {
    fn default() -> Codec {
        Codec::new()
    }
}

impl Codec {
    /// Return a new `Codec` for "a".."z".
    pub fn new() -> Codec {
        Codec {
            codeset: CodeSet::new(),
        }
    }

    /// Encode a single symbol.
    /// ## Errors
    /// If `symbol` is not in the alphabet. `word` is only used in the error.
    pub fn encode_symbol(&self, symbol: char, word: &str) -> Result<Label, Error> {
        self.codeset
            .encoder
            .get(&symbol)
            .copied()
            .ok_or_else(|| Error::InvalidSymbol {
                symbol,
                word: String::from(word),
            })
    }

    /// Encode string, and return a list of labels.
    /// ## Errors
    /// An error is returned if the string contains a symbol outside the alphabet.
    /// ## Examples
    /// ```
    /// use rack_solver::{Codec, Error};
    /// let codec = Codec::default();
    /// let labels = codec.encode("daily")?;
    /// assert_eq!(labels, vec![3, 0, 8, 11, 24]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn encode(&self, word: &str) -> Result<Vec<Label>, Error> {
        word.chars()
            .map(|symbol| self.encode_symbol(symbol, word))
            .collect()
    }

    /// Decode labels, and return the word as `String`.
    /// ## Errors
    /// If one of the labels is not valid.
    /// ## Examples
    /// ```
    /// use rack_solver::{Codec, Error};
    /// let codec = Codec::default();
    /// assert_eq!(codec.decode(&[3, 0, 8, 11, 24])?, "daily");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn decode(&self, labels: &[Label]) -> Result<String, Error> {
        labels
            .iter()
            .map(|&label| {
                self.codeset
                    .decoder
                    .get(label as usize)
                    .copied()
                    .ok_or(Error::InvalidLabel(label))
            })
            .collect()
    }

    /// Return the symbol for `label`
    pub fn symbol(&self, label: Label) -> Option<char> {
        self.codeset.decoder.get(label as usize).copied()
    }
}
