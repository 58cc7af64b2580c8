//! The common interface of the signature analyzer variants.

use crate::util::SigError;

/// A signature analyzer compacts a bit sequence into an output chain.
///
/// Implementations reset their registers before every chain so that two
/// calls with the same input always return the same chain, no matter what
/// was analyzed before.
pub trait Signature {
    /// Computes the output chain for `input` from zeroed registers.
    fn signature_chain(&mut self, input: &[u8]) -> Result<Vec<u8>, SigError>;

    /// Register width of the analyzer.
    fn width(&self) -> usize;
}
