//! Dual register signature analyzer.
//!
//! Two shift registers built from the same feedback polynomial take turns
//! consuming the input: even-indexed bits go to the first register and
//! odd-indexed bits to the second. Each register emits its last element for
//! every bit it consumes, so the output is as long as the consumed input.

use std::collections::VecDeque;

use log::debug;

use crate::polynomial::Polynomial;
use crate::signature::Signature;
use crate::util::bits::check_bits;
use crate::util::SigError;

/// One of the two registers of a `DualSignatureAnalyzer`.
#[derive(Clone, Debug)]
struct Register {
    cells: VecDeque<u8>,
}

impl Register {
    fn new(width: usize) -> Register {
        Register {
            cells: vec![0; width].into_iter().collect(),
        }
    }

    /// Folds `bit` with the tapped cells, emits the last cell and shifts the
    /// folded value in at the front.
    fn clock(&mut self, bit: u8, taps: &[usize]) -> u8 {
        let new_val = taps.iter().fold(bit, |acc, &d| acc ^ self.cells[d - 1]);
        let out = self.cells.pop_back().unwrap_or(0);
        self.cells.push_front(new_val);
        out
    }

    fn reset(&mut self) {
        for c in self.cells.iter_mut() {
            *c = 0;
        }
    }
}

/// Implementation of the dual register analyzer.
#[derive(Clone, Debug)]
pub struct DualSignatureAnalyzer {
    poly: Polynomial,
    taps: Vec<usize>,
    first: Register,
    second: Register,
}

impl DualSignatureAnalyzer {
    /// Creates a new `DualSignatureAnalyzer` with both registers zeroed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bist_rs::dual::DualSignatureAnalyzer;
    /// use bist_rs::polynomial::Polynomial;
    /// use bist_rs::signature::Signature;
    ///
    /// let poly = Polynomial::new(&[1, 0, 1, 0, 0, 1, 1, 0]).unwrap();
    /// let mut sa = DualSignatureAnalyzer::new(poly);
    /// let chain = sa.signature_chain(&[1, 0, 1, 1, 0]).unwrap();
    /// assert_eq!(chain, vec![0, 0, 0, 0]);
    /// ```
    pub fn new(poly: Polynomial) -> DualSignatureAnalyzer {
        let taps = poly.tap_distances();
        let width = poly.width();
        DualSignatureAnalyzer {
            poly,
            taps,
            first: Register::new(width),
            second: Register::new(width),
        }
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.poly
    }

    /// Copies of both registers, front to back.
    pub fn registers(&self) -> (Vec<u8>, Vec<u8>) {
        (
            self.first.cells.iter().cloned().collect(),
            self.second.cells.iter().cloned().collect(),
        )
    }

    /// Zeroes both registers.
    pub fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }
}

impl Signature for DualSignatureAnalyzer {
    /// Resets both registers and compacts `input` pairwise.
    ///
    /// Only the first `2 * (input.len() / 2)` bits are consumed: an odd
    /// trailing bit has no partner and is ignored. The returned chain
    /// interleaves the two registers' outputs, first register first.
    fn signature_chain(&mut self, input: &[u8]) -> Result<Vec<u8>, SigError> {
        check_bits(input)?;
        self.reset();
        let mut output = Vec::with_capacity(input.len() & !1);
        for pair in input.chunks_exact(2) {
            output.push(self.first.clock(pair[0], &self.taps));
            output.push(self.second.clock(pair[1], &self.taps));
        }
        if input.len() % 2 == 1 {
            debug!("Dropping unpaired trailing bit of a {} bit input", input.len());
        }
        debug!(
            "Dual register chain over {} bits with {}",
            output.len(),
            self.poly
        );
        Ok(output)
    }

    fn width(&self) -> usize {
        self.poly.width()
    }
}

#[cfg(test)]
mod test {
    use crate::dual::*;
    use crate::util::ErrorKind;

    fn analyzer() -> DualSignatureAnalyzer {
        DualSignatureAnalyzer::new(Polynomial::new(&[1, 0, 1, 0, 0, 1, 1, 0]).unwrap())
    }

    #[test]
    fn test_register_contents() {
        let mut sa = analyzer();
        let chain = sa.signature_chain(&[1, 0, 1, 1, 0, 0, 1, 0]).unwrap();
        assert_eq!(chain, vec![0; 8]);
        let (first, second) = sa.registers();
        assert_eq!(first, vec![1, 1, 1, 1, 0, 0, 0, 0]);
        assert_eq!(second, vec![1, 0, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_chain_with_feedback() {
        let mut sa = analyzer();
        let mut expected = vec![0; 16];
        expected.extend_from_slice(&[1, 1, 1, 1]);
        assert_eq!(sa.signature_chain(&[1; 20]).unwrap(), expected);
        let (first, second) = sa.registers();
        assert_eq!(first, vec![0, 1, 0, 1, 0, 0, 1, 0]);
        assert_eq!(first, second);
        assert_eq!(sa.width(), sa.polynomial().width());
    }

    #[test]
    fn test_odd_trailing_bit_is_ignored() {
        let mut sa = analyzer();
        let even = sa.signature_chain(&[1; 20]).unwrap();
        let odd = sa.signature_chain(&[1; 21]).unwrap();
        assert_eq!(odd.len(), 20);
        assert_eq!(even, odd);
        assert!(sa.signature_chain(&[1]).unwrap().is_empty());
        assert!(sa.signature_chain(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_each_call_starts_from_zero() {
        let input = [0, 1, 1, 1, 0, 1, 0, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 1, 0, 1, 1, 0];
        let mut sa = analyzer();
        let first = sa.signature_chain(&input).unwrap();
        sa.signature_chain(&[1; 30]).unwrap();
        assert_eq!(sa.signature_chain(&input).unwrap(), first);
        sa.reset();
        assert_eq!(sa.registers(), (vec![0; 8], vec![0; 8]));
    }

    #[test]
    fn test_invalid_input() {
        let mut sa = analyzer();
        let err = sa.signature_chain(&[0, 1, 2, 1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
