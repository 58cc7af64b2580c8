//! Random reference vectors for aliasing sessions.

use byteorder::{ByteOrder, LittleEndian};
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{FromEntropy, Rng, SeedableRng};

/// Draws `len` uniformly distributed bits from `rng`.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::FromEntropy;
/// use bist_rs::util::rand_bits::uniform_bits;
///
/// let mut rng = StdRng::from_entropy();
/// let bits = uniform_bits(&mut rng, 40);
/// assert_eq!(bits.len(), 40);
/// ```
pub fn uniform_bits<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    let dist = Uniform::new(0u8, 2u8);
    (0..len).map(|_| rng.sample(&dist)).collect()
}

/// Builds a `StdRng` from a 64 bit seed so that sessions can be replayed.
pub fn seeded_rng(seed: u64) -> StdRng {
    let mut bytes = [0u8; 32];
    for chunk in bytes.chunks_mut(8) {
        LittleEndian::write_u64(chunk, seed);
    }
    StdRng::from_seed(bytes)
}

/// Generates a reference vector of `len` bits, from entropy unless a seed is
/// given.
pub fn reference_bits(len: usize, seed: Option<u64>) -> Vec<u8> {
    match seed {
        Some(seed) => uniform_bits(&mut seeded_rng(seed), len),
        None => uniform_bits(&mut StdRng::from_entropy(), len),
    }
}
