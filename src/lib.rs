//! Minimum-redundancy prefix codes built from observed symbol frequencies.
//!
//! The pipeline is pure and strictly linear: count symbol frequencies,
//! greedily merge the two lightest nodes until a single tree remains, then
//! walk the tree to read off each symbol's bit string.

use std::hash::Hash;

use thiserror::Error;

pub use crate::code::Code;
pub use crate::code::CodeBook;
pub use crate::freq::FrequencyTable;
pub use crate::tree::Node;

pub mod code;
pub mod freq;
pub mod tree;

/// There are no symbols to build a code from.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, Ord, PartialEq, PartialOrd)]
#[error("empty input: no symbols to build a code from")]
pub struct EmptyInput;

/// Computes the prefix code for a sequence of symbols.
///
/// The result holds exactly one non-empty code per distinct symbol and the
/// codes are mutually prefix-free. A symbol that occurs strictly more often
/// than another never gets a longer code. The mapping is a deterministic
/// function of the input sequence.
///
/// An empty input fails with [`EmptyInput`].
pub fn codebook<S, I>(symbols: I) -> Result<CodeBook<S>, EmptyInput>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
{
    let frequencies = FrequencyTable::from_symbols(symbols);
    let root = Node::build(&frequencies)?;
    Ok(CodeBook::from_tree(&root))
}

/// Computes the prefix code for the characters of `text`.
pub fn codebook_str(text: &str) -> Result<CodeBook<char>, EmptyInput> {
    codebook(text.chars())
}

/// Computes the prefix code for the bytes of `bytes`.
pub fn codebook_bytes(bytes: &[u8]) -> Result<CodeBook<u8>, EmptyInput> {
    codebook(bytes.iter().cloned())
}
