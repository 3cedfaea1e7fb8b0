//! Basic types for working with letter tiles.
mod codec;
mod codes;
mod rack;

/// Maximum number of tiles in a rack
pub const DIM: usize = 16;
pub use codec::Codec;
pub use codes::{Label, NLABELS};
pub use rack::Rack;

/// A list of labels, as formed from the tiles of a rack
pub type Word = tinyvec::ArrayVec<[Label; DIM]>;
