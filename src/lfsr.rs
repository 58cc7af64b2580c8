//! Single register signature analyzer.
//!
//! This analyzer drives one linear-feedback shift register (LFSR) with one
//! input bit per step. On every step the register rotates by one position,
//! the head wrapping round to the tail, and the tail is then overwritten
//! with the parity of the tapped pre-step contents XORed with the input bit.
//! The head of the register is what a hardware implementation would wire
//! out, so the output chain is the head of every state snapshot.
//!
//! As with any compactor, two different inputs can end up with the same
//! chain. How often that happens for errors near the end of a test vector
//! is what `crate::tester` measures.

use log::debug;

use crate::polynomial::Polynomial;
use crate::signature::Signature;
use crate::util::bits::{check_bit, check_bits};
use crate::util::SigError;

/// Implementation of the single register analyzer.
///
/// The register contents are called the trigger vector. They always have
/// exactly as many elements as the polynomial mask.
#[derive(Clone, Debug)]
pub struct SignatureAnalyzer {
    poly: Polynomial,
    triggers: Vec<u8>,
}

impl SignatureAnalyzer {
    /// Creates a new `SignatureAnalyzer` with a zeroed trigger vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use bist_rs::lfsr::SignatureAnalyzer;
    /// use bist_rs::polynomial::Polynomial;
    ///
    /// let poly = Polynomial::new(&[1, 0, 1, 0, 0, 1, 1, 0]).unwrap();
    /// let sa = SignatureAnalyzer::new(poly);
    /// assert_eq!(sa.triggers(), vec![0; 8]);
    /// ```
    pub fn new(poly: Polynomial) -> SignatureAnalyzer {
        let triggers = vec![0; poly.width()];
        SignatureAnalyzer { poly, triggers }
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.poly
    }

    /// A copy of the current trigger vector.
    pub fn triggers(&self) -> Vec<u8> {
        self.triggers.clone()
    }

    /// Feeds a single bit into the register and returns the updated trigger
    /// vector.
    ///
    /// Fails with `InvalidBit` for anything but 0 or 1, leaving the
    /// register untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bist_rs::lfsr::SignatureAnalyzer;
    /// use bist_rs::polynomial::Polynomial;
    ///
    /// let poly = Polynomial::new(&[1, 0, 1, 0, 0, 1, 1, 0]).unwrap();
    /// let mut sa = SignatureAnalyzer::new(poly);
    /// assert_eq!(sa.advance(1).unwrap(), vec![0, 0, 0, 0, 0, 0, 0, 1]);
    /// assert!(sa.advance(2).is_err());
    /// ```
    pub fn advance(&mut self, bit: i64) -> Result<Vec<u8>, SigError> {
        let bit = check_bit(bit)?;
        self.step(bit);
        Ok(self.triggers())
    }

    /// Runs a whole sequence through the register.
    ///
    /// Returns the state before the run followed by the state after each
    /// input bit, so the result always holds `input.len() + 1` snapshots.
    /// The sequence is validated up front; on error no bit is consumed.
    pub fn run(&mut self, input: &[u8]) -> Result<Vec<Vec<u8>>, SigError> {
        check_bits(input)?;
        let mut states = Vec::with_capacity(input.len() + 1);
        states.push(self.triggers());
        for &bit in input {
            self.step(bit);
            states.push(self.triggers());
        }
        Ok(states)
    }

    /// Zeroes the trigger vector.
    pub fn reset(&mut self) {
        for t in self.triggers.iter_mut() {
            *t = 0;
        }
    }

    /// The final trigger vector after running `input` from a zeroed
    /// register.
    pub fn signature(&mut self, input: &[u8]) -> Result<Vec<u8>, SigError> {
        check_bits(input)?;
        self.reset();
        for &bit in input {
            self.step(bit);
        }
        Ok(self.triggers())
    }

    fn step(&mut self, bit: u8) {
        let feedback = self
            .triggers
            .iter()
            .zip(self.poly.taps())
            .fold(bit, |acc, (t, p)| acc ^ (t & p));
        self.triggers.rotate_left(1);
        if let Some(last) = self.triggers.last_mut() {
            *last = feedback;
        }
    }
}

impl Signature for SignatureAnalyzer {
    /// Resets the register, runs `input` and returns the head of every
    /// snapshot, `input.len() + 1` bits in all.
    fn signature_chain(&mut self, input: &[u8]) -> Result<Vec<u8>, SigError> {
        self.reset();
        let chain: Vec<u8> = self.run(input)?.iter().map(|state| state[0]).collect();
        debug!(
            "Single register chain over {} bits with {}",
            input.len(),
            self.poly
        );
        Ok(chain)
    }

    fn width(&self) -> usize {
        self.poly.width()
    }
}
