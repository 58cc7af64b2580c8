//! Feedback polynomial shared by both signature analyzer variants.
//!
//! The polynomial is stored as a tap mask, one element per register
//! position. A 1 at index `i` means register position `i` feeds the XOR
//! network, which corresponds to the term `x^(n - i)` of the characteristic
//! polynomial for an `n` bit register. The constant term is implicit, so the
//! mask `[1, 0, 1, 0, 0, 1, 1, 0]` describes `x^8 + x^6 + x^3 + x^2 + 1`.

use std::fmt;

use num_traits::PrimInt;

use crate::util::bits::check_bits;
use crate::util::SigError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    taps: Vec<u8>,
}

impl Polynomial {
    /// Creates a new `Polynomial` from a tap mask.
    ///
    /// Only the shape of the mask is checked: it must be non-empty and
    /// contain nothing but bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bist_rs::polynomial::Polynomial;
    ///
    /// let poly = Polynomial::new(&[1, 0, 1, 0, 0, 1, 1, 0]).unwrap();
    /// assert_eq!(poly.width(), 8);
    /// assert_eq!(poly.to_string(), "x^8 + x^6 + x^3 + x^2 + 1");
    /// ```
    pub fn new(taps: &[u8]) -> Result<Polynomial, SigError> {
        if taps.is_empty() {
            return Err(SigError::EmptyPolynomial);
        }
        check_bits(taps)?;
        Ok(Polynomial {
            taps: taps.to_vec(),
        })
    }

    /// Creates a `Polynomial` from the low `width` bits of an integer word,
    /// most significant bit first, so `0xA6_u8` with width 8 gives the same
    /// mask as `[1, 0, 1, 0, 0, 1, 1, 0]`.
    pub fn from_word<T: PrimInt>(word: T, width: usize) -> Result<Polynomial, SigError> {
        let bits = T::zero().count_zeros() as usize;
        let width = width.min(bits);
        let taps: Vec<u8> = (0..width)
            .rev()
            .map(|shift| ((word >> shift) & T::one()).to_u8().unwrap_or(0))
            .collect();
        Polynomial::new(&taps)
    }

    /// Register width in bits.
    pub fn width(&self) -> usize {
        self.taps.len()
    }

    /// The tap mask.
    pub fn taps(&self) -> &[u8] {
        &self.taps
    }

    /// 1-based distances from the far end of the register for every tap,
    /// in mask order. These double as the exponents of the polynomial.
    pub fn tap_distances(&self) -> Vec<usize> {
        let n = self.width();
        self.taps
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t > 0)
            .map(|(i, _)| n - i)
            .collect()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for pow in self.tap_distances() {
            if pow == 1 {
                write!(f, "x + ")?;
            } else {
                write!(f, "x^{} + ", pow)?;
            }
        }
        write!(f, "1")
    }
}
