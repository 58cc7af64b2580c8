//! Exhaustive aliasing tester.
//!
//! The tester holds one reference test vector for a whole session. For a
//! channel mode and an error count it computes the reference output chain,
//! generates every corruption of the reference's trailing window and keeps
//! the corruptions whose chain is identical to the reference chain. Those are
//! the faults the signature analyzer would let through.
//!
//! Chains are compared whole, so a candidate only aliases if every bit the
//! analyzer emitted along the way matches, not just the final one.

use log::{debug, info, trace};

use crate::dual::DualSignatureAnalyzer;
use crate::lfsr::SignatureAnalyzer;
use crate::masks::{noised_sequences, ChannelMode, MAX_ERRORS};
use crate::polynomial::Polynomial;
use crate::signature::Signature;
use crate::util::bits::{check_bits, to_bit_string};
use crate::util::rand_bits::reference_bits;
use crate::util::SigError;

/// Default register polynomial, `x^8 + x^6 + x^3 + x^2 + 1`.
pub const DEFAULT_POLYNOMIAL: [u8; 8] = [1, 0, 1, 0, 0, 1, 1, 0];

/// Default reference vector length.
pub const DEFAULT_LENGTH: usize = 40;

/// Parameters of an aliasing session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TesterConfig {
    /// Polynomial tap mask shared by both analyzers.
    pub polynomial: Vec<u8>,
    /// Length of the random reference vector.
    pub length: usize,
    /// Seed for the reference vector, drawn from entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for TesterConfig {
    fn default() -> Self {
        TesterConfig {
            polynomial: DEFAULT_POLYNOMIAL.to_vec(),
            length: DEFAULT_LENGTH,
            seed: None,
        }
    }
}

/// Outcome of one `(mode, errors)` run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasReport {
    pub mode: ChannelMode,
    pub errors: usize,
    /// Number of corrupted sequences that were tried.
    pub candidates: usize,
    /// Corrupted sequences whose chain matched the reference chain.
    pub aliases: Vec<Vec<u8>>,
}

impl AliasReport {
    /// Fraction of tried corruptions that escaped detection.
    pub fn escape_rate(&self) -> f64 {
        if self.candidates == 0 {
            0.0
        } else {
            self.aliases.len() as f64 / self.candidates as f64
        }
    }
}

/// Runs aliasing experiments against a fixed reference vector.
pub struct AliasTester {
    poly: Polynomial,
    reference: Vec<u8>,
}

impl AliasTester {
    /// Creates a new `AliasTester` for a given polynomial and reference
    /// vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use bist_rs::masks::ChannelMode;
    /// use bist_rs::polynomial::Polynomial;
    /// use bist_rs::tester::AliasTester;
    ///
    /// let poly = Polynomial::new(&[1, 0, 1, 0, 0, 1, 1, 0]).unwrap();
    /// let tester = AliasTester::new(poly, vec![0; 40]).unwrap();
    /// let aliases = tester.compute_aliases(ChannelMode::Single, 0).unwrap();
    /// assert_eq!(aliases, vec![vec![0; 40]]);
    /// ```
    pub fn new(poly: Polynomial, reference: Vec<u8>) -> Result<AliasTester, SigError> {
        check_bits(&reference)?;
        Ok(AliasTester { poly, reference })
    }

    /// Builds a tester with a freshly generated reference vector.
    pub fn from_config(config: &TesterConfig) -> Result<AliasTester, SigError> {
        let poly = Polynomial::new(&config.polynomial)?;
        let reference = reference_bits(config.length, config.seed);
        info!(
            "Reference vector of {} bits for {}: {}",
            reference.len(),
            poly,
            to_bit_string(&reference)
        );
        AliasTester::new(poly, reference)
    }

    /// The reference test vector.
    pub fn reference(&self) -> &[u8] {
        &self.reference
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.poly
    }

    fn analyzer(&self, mode: ChannelMode) -> Box<dyn Signature> {
        match mode {
            ChannelMode::Single => Box::new(SignatureAnalyzer::new(self.poly.clone())),
            ChannelMode::Dual => Box::new(DualSignatureAnalyzer::new(self.poly.clone())),
        }
    }

    /// Returns every corruption with exactly `errors` flipped bits in the
    /// window of `mode` whose output chain equals the reference chain, in
    /// generation order.
    ///
    /// Fails with `InvalidErrorCount` when `errors` is above four and with
    /// `ShortReference` when the reference is shorter than the window.
    pub fn compute_aliases(
        &self,
        mode: ChannelMode,
        errors: usize,
    ) -> Result<Vec<Vec<u8>>, SigError> {
        Ok(self.report(mode, errors)?.aliases)
    }

    /// Same as `compute_aliases`, also recording how many candidates were
    /// tried.
    pub fn report(&self, mode: ChannelMode, errors: usize) -> Result<AliasReport, SigError> {
        let candidates = noised_sequences(&self.reference, errors, mode)?;
        let mut sa = self.analyzer(mode);
        let etalon = sa.signature_chain(&self.reference)?;
        debug!(
            "Reference chain for {} ({} bit registers): {}",
            mode,
            sa.width(),
            to_bit_string(&etalon)
        );

        let mut aliases = Vec::new();
        for candidate in candidates.iter() {
            // signature_chain resets the registers, so every candidate
            // starts from the same state as the reference did.
            if sa.signature_chain(candidate)? == etalon {
                trace!("Alias: {}", to_bit_string(candidate));
                aliases.push(candidate.clone());
            }
        }

        let report = AliasReport {
            mode,
            errors,
            candidates: candidates.len(),
            aliases,
        };
        info!(
            "{} with {} errors: {} of {} candidates alias",
            mode,
            errors,
            report.aliases.len(),
            report.candidates
        );
        Ok(report)
    }

    /// Runs every error count from 1 to 4 in both channel modes, single
    /// channel first for each count.
    pub fn sweep(&self) -> Result<Vec<AliasReport>, SigError> {
        let mut reports = Vec::with_capacity(MAX_ERRORS * 2);
        for errors in 1..=MAX_ERRORS {
            for &mode in &[ChannelMode::Single, ChannelMode::Dual] {
                reports.push(self.report(mode, errors)?);
            }
        }
        Ok(reports)
    }
}
