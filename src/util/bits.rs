//! Small helpers for working with bit sequences stored one bit per `u8`.

use num_traits::PrimInt;

use crate::util::SigError;

/// Checks that a single value is a bit.
///
/// Signed so that callers handing in arbitrary integers (for example `-1`)
/// get an `InvalidBit` instead of a silent wrap.
pub fn check_bit(value: i64) -> Result<u8, SigError> {
    match value {
        0 => Ok(0),
        1 => Ok(1),
        _ => Err(SigError::InvalidBit { value }),
    }
}

/// Checks that every element of `seq` is a bit, reporting the first offender.
pub fn check_bits(seq: &[u8]) -> Result<(), SigError> {
    match seq.iter().position(|&b| b > 1) {
        Some(index) => Err(SigError::InvalidSequence {
            index,
            value: seq[index],
        }),
        None => Ok(()),
    }
}

/// Flips a bit. `x` must be 0 or 1.
///
/// # Examples
///
/// ```
/// use bist_rs::util::bits::invert_bit;
///
/// assert_eq!(invert_bit(0), 1);
/// assert_eq!(invert_bit(1), 0);
/// ```
pub fn invert_bit(x: u8) -> u8 {
    debug_assert!(x <= 1, "invert_bit called with {}", x);
    1 - x
}

/// Number of positions in which two equal-length sequences differ.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> usize {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}

/// Renders a bit sequence as a string of `0` and `1` characters.
pub fn to_bit_string(seq: &[u8]) -> String {
    seq.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}

/// Packs a bit sequence into an integer word, first element most
/// significant. Returns `None` if the sequence doesn't fit in `T`.
///
/// # Examples
///
/// ```
/// use bist_rs::util::bits::pack_bits;
///
/// let word: Option<u8> = pack_bits(&[1, 0, 1, 0, 0, 1, 1, 0]);
/// assert_eq!(word, Some(0xA6));
/// ```
pub fn pack_bits<T: PrimInt>(seq: &[u8]) -> Option<T> {
    if seq.len() > T::zero().count_zeros() as usize {
        return None;
    }
    Some(seq.iter().fold(T::zero(), |acc, &b| {
        let bit = if b == 0 { T::zero() } else { T::one() };
        (acc << 1) | bit
    }))
}
