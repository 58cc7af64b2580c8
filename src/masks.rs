//! Error mask generation.
//!
//! The aliasing tester only ever corrupts the tail of a reference vector:
//! the last 8 bits for the single register analyzer and the last 16 for the
//! dual register one. For an error count `k` every way of flipping exactly
//! `k` bits in that window is produced, so there are `C(window, k)`
//! candidates and no two of them are the same.

use std::fmt;

use log::debug;
use num::integer::binomial;

use crate::util::bits::{check_bits, invert_bit};
use crate::util::SigError;

/// Largest error count the generator accepts.
pub const MAX_ERRORS: usize = 4;

/// Window width of the single register analyzer.
pub const SINGLE_CHANNEL_WINDOW: usize = 8;

/// Window width of the dual register analyzer.
pub const DUAL_CHANNEL_WINDOW: usize = 16;

/// Selects the analyzer variant, and with it the width of the mutable window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelMode {
    Single,
    Dual,
}

impl ChannelMode {
    /// Number of trailing bits error masks are applied to.
    pub fn window(self) -> usize {
        match self {
            ChannelMode::Single => SINGLE_CHANNEL_WINDOW,
            ChannelMode::Dual => DUAL_CHANNEL_WINDOW,
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChannelMode::Single => write!(f, "one channel"),
            ChannelMode::Dual => write!(f, "two channel"),
        }
    }
}

/// Iterator over the `k` element subsets of `0..n` in lexicographic order.
///
/// # Examples
///
/// ```
/// use bist_rs::masks::Combinations;
///
/// let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(all[0], vec![0, 1]);
/// assert_eq!(all[5], vec![2, 3]);
/// assert_eq!(all.len(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Combinations {
        Combinations {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Find the rightmost index that can still move right, bump it and
        // pack everything after it directly behind.
        let k = self.indices.len();
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(current)
    }
}

fn check_error_count(errors: usize) -> Result<(), SigError> {
    if errors > MAX_ERRORS {
        return Err(SigError::InvalidErrorCount(errors));
    }
    Ok(())
}

/// Number of candidates produced for a window width and error count.
pub fn candidate_count(window: usize, errors: usize) -> usize {
    if errors > window {
        0
    } else {
        binomial(window, errors)
    }
}

/// Every `window` bit mask with exactly `errors` ones, in lexicographic
/// order of the set positions.
///
/// # Examples
///
/// ```
/// use bist_rs::masks::error_masks;
///
/// let masks = error_masks(3, 1).unwrap();
/// assert_eq!(masks, vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]);
/// assert!(error_masks(8, 5).is_err());
/// ```
pub fn error_masks(window: usize, errors: usize) -> Result<Vec<Vec<u8>>, SigError> {
    check_error_count(errors)?;
    let masks = Combinations::new(window, errors)
        .map(|positions| {
            let mut mask = vec![0; window];
            for p in positions {
                mask[p] = 1;
            }
            mask
        })
        .collect();
    Ok(masks)
}

/// Applies `mask` to the tail of `reference`: a 1 flips the bit, a 0 keeps
/// it. The mask must not be longer than the reference.
pub fn apply_mask(reference: &[u8], mask: &[u8]) -> Vec<u8> {
    let split = reference.len() - mask.len();
    let (prefix, suffix) = reference.split_at(split);
    let mut noised = prefix.to_vec();
    noised.extend(
        suffix
            .iter()
            .zip(mask)
            .map(|(&x, &m)| if m == 1 { invert_bit(x) } else { x }),
    );
    noised
}

/// Produces every corruption of `reference` with exactly `errors` flipped
/// bits inside the trailing window of `mode`.
///
/// The prefix in front of the window is never touched. Fails with
/// `InvalidErrorCount` for more than four errors and with `ShortReference`
/// when the reference is shorter than the window.
pub fn noised_sequences(
    reference: &[u8],
    errors: usize,
    mode: ChannelMode,
) -> Result<Vec<Vec<u8>>, SigError> {
    check_error_count(errors)?;
    check_bits(reference)?;
    let window = mode.window();
    if reference.len() < window {
        return Err(SigError::ShortReference {
            len: reference.len(),
            window,
        });
    }
    let noised: Vec<Vec<u8>> = error_masks(window, errors)?
        .iter()
        .map(|mask| apply_mask(reference, mask))
        .collect();
    debug!(
        "Generated {} {} candidates with {} errors",
        noised.len(),
        mode,
        errors
    );
    Ok(noised)
}

#[cfg(test)]
mod test {
    use crate::masks::*;
    use crate::util::bits::hamming_distance;
    use crate::util::ErrorKind;
    use hashbrown::HashSet;

    #[test]
    fn test_combination_counts() {
        for n in 0..=16 {
            for k in 0..=4 {
                assert_eq!(Combinations::new(n, k).count(), candidate_count(n, k));
            }
        }
        assert_eq!(candidate_count(16, 4), 1820);
        assert_eq!(candidate_count(8, 0), 1);
        assert_eq!(Combinations::new(3, 0).collect::<Vec<_>>(), vec![vec![]]);
    }

    #[test]
    fn test_masks_are_distinct_and_weighted() {
        for &window in &[SINGLE_CHANNEL_WINDOW, DUAL_CHANNEL_WINDOW] {
            for errors in 0..=MAX_ERRORS {
                let masks = error_masks(window, errors).unwrap();
                let unique: HashSet<Vec<u8>> = masks.iter().cloned().collect();
                assert_eq!(unique.len(), binomial(window, errors));
                assert_eq!(masks.len(), unique.len());
                for mask in masks {
                    assert_eq!(mask.len(), window);
                    assert_eq!(mask.iter().filter(|&&b| b == 1).count(), errors);
                }
            }
        }
    }

    #[test]
    fn test_error_count_bounds() {
        let reference = vec![0; 40];
        for errors in 0..=4 {
            assert!(noised_sequences(&reference, errors, ChannelMode::Single).is_ok());
        }
        for &errors in &[5, 6, 100] {
            let err = noised_sequences(&reference, errors, ChannelMode::Dual).unwrap_err();
            assert_eq!(err, SigError::InvalidErrorCount(errors));
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_mutations_stay_in_window() {
        let reference: Vec<u8> = (0..40).map(|i| ((i * 7 + 3) % 5 % 2) as u8).collect();
        for &mode in &[ChannelMode::Single, ChannelMode::Dual] {
            let window = mode.window();
            for errors in 0..=MAX_ERRORS {
                let noised = noised_sequences(&reference, errors, mode).unwrap();
                let unique: HashSet<Vec<u8>> = noised.iter().cloned().collect();
                assert_eq!(unique.len(), candidate_count(window, errors));
                for seq in &noised {
                    assert_eq!(seq.len(), reference.len());
                    assert_eq!(hamming_distance(seq, &reference), errors);
                    assert_eq!(seq[..40 - window], reference[..40 - window]);
                }
            }
        }
    }

    #[test]
    fn test_zero_errors_is_identity() {
        let reference = vec![1, 0, 1, 1, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0];
        let noised = noised_sequences(&reference, 0, ChannelMode::Dual).unwrap();
        assert_eq!(noised, vec![reference]);
    }

    #[test]
    fn test_window_equals_reference() {
        let reference = vec![0; 8];
        let noised = noised_sequences(&reference, 1, ChannelMode::Single).unwrap();
        assert_eq!(noised[0], vec![1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(noised[7], vec![0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_short_reference() {
        let err = noised_sequences(&[0; 10], 1, ChannelMode::Dual).unwrap_err();
        assert_eq!(err, SigError::ShortReference { len: 10, window: 16 });
        assert!(noised_sequences(&[0; 10], 1, ChannelMode::Single).is_ok());
    }

    #[test]
    fn test_invalid_reference() {
        let mut reference = vec![0; 20];
        reference[3] = 9;
        let err = noised_sequences(&reference, 1, ChannelMode::Single).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
