use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// A line in a wordfile that is not valid utf-8
    #[error("Invalid utf-8 in {0:?}")]
    InvalidUtf8(String),

    /// Character outside of the alphabet `a..z`
    #[error("Invalid symbol '{symbol}' in \"{word}\"")]
    InvalidSymbol { symbol: char, word: String },

    /// The empty string can not be inserted as a word
    #[error("Empty word")]
    EmptyWord,

    /// Label is not in `0..26`
    #[error("Invalid label {0}")]
    InvalidLabel(u8),

    /// The position weighted value of a word does not fit in a `u32`
    #[error("Word of {0} letters is too long to score")]
    ValueOverflow(usize),

    /// A rack holds at most 16 tiles
    #[error("Rack has {0} tiles, at most 16 allowed")]
    RackTooLong(usize),

    /// Attempt to draw more tiles than left in the bag
    #[error("Can not draw {wanted} tiles from a bag with {available} tiles")]
    NotEnoughTiles { wanted: usize, available: usize },

    /// Invalid line in a wordfile, when loading with [`OnInvalid::Abort`](crate::OnInvalid)
    #[error("Invalid word on line {line}")]
    InvalidLine {
        line: usize,
        #[source]
        source: Box<Error>,
    },
}
