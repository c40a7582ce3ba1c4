//! Random integers, from a generator the caller passes in.
//!
//! There is no global generator state. [`Lcg`] reproduces the byte stream the
//! benchmark firmware feeds its post-quantum schemes with, so inputs can be
//! regenerated bit-for-bit; it is **not** a cryptographic generator.

use rand_core::{impls, Error, RngCore};

use crate::{Modulus, Unsigned};
use crate::digit::{Digit, DIGIT_BYTES};
use crate::numbers::Bits;

/// Linear congruential generator, `state = 1664525 * state + 1013904223 (mod 2^32)`.
///
/// Each step emits the top byte of the new state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub const DEFAULT_SEED: u32 = 0x1234_5678;

    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    #[inline]
    fn next_byte(&mut self) -> u8 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (self.state >> 24) as u8
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.next_byte();
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<const L: usize> Unsigned<L> {
    /// Uniformly random over the full width.
    pub fn random(mut rng: impl RngCore) -> Self {
        let mut x = Self::zero();
        let mut bytes = [0u8; DIGIT_BYTES];
        for digit in x.0.iter_mut() {
            rng.fill_bytes(&mut bytes);
            *digit = Digit::from_le_bytes(bytes);
        }
        x
    }
}

impl<const L: usize> Modulus<L> {
    /// Uniformly random residue, `0 <= x < n`.
    ///
    /// Rejection sampling on `n.bits()` bits, so on average fewer than two draws.
    pub fn random_residue(&self, mut rng: impl RngCore) -> Unsigned<L> {
        let bits = self.bits();
        debug_assert!(bits <= <Unsigned<L> as Bits>::BITS);
        loop {
            let mut x = Unsigned::random(&mut rng);
            x.truncate_bits(bits);
            if x < *self {
                return x;
            }
        }
    }
}
