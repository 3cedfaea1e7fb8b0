/// Code 0..26 for a letter `a..z`
pub type Label = u8;

/// The number of letters in the alphabet
pub const NLABELS: usize = 26;
