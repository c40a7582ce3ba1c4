use zeroize::Zeroize;

use crate::{Digit, Error, Result};
use crate::digit::{DIGIT_BITS, DIGIT_BYTES};

mod trait_implementations;

/// Fixed sizes of a type, in bits and bytes.
pub trait Bits {
    const BITS: usize;
    const BYTES: usize = Self::BITS / 8;
}

pub trait One: Sized + PartialEq {
    fn one() -> Self;

    fn is_one(&self) -> bool { *self == Self::one() }
    fn set_one(&mut self) { *self = Self::one(); }
}

pub trait Zero: Sized + PartialEq {
    fn zero() -> Self;

    fn is_zero(&self) -> bool { *self == Self::zero() }
    fn set_zero(&mut self) { *self = Self::zero(); }
}

/// Unsigned integer with `L` digits (L for length).
///
/// Internal representation as little-endian: `self.0[0]` is the least significant digit.
///
/// The width `L * Digit::BITS` is fixed by the type, there is no growth.
/// All arithmetic is between integers of the same width; where the result does not
/// fit, the operation is either explicitly wrapping, checked or reports the carry.
#[derive(Clone, Copy, Eq, Hash, PartialEq, Zeroize)]
pub struct Unsigned<const L: usize>(pub(crate) [Digit; L]);

impl<const L: usize> Bits for Unsigned<L> {
    const BITS: usize = L * DIGIT_BITS;
    const BYTES: usize = L * DIGIT_BYTES;
}

impl<const L: usize> Zero for Unsigned<L> {
    fn zero() -> Self {
        Self([0; L])
    }

    /// Looks at all digits, regardless of where the leading one is.
    fn is_zero(&self) -> bool {
        self.0.iter().fold(0, |acc, digit| acc | digit) == 0
    }
}

/// Fails for L = 0, bound not expressable.
impl<const L: usize> One for Unsigned<L> {
    fn one() -> Self {
        Self::from_digit(1)
    }
}

/// Representation of Unsigned<L> as big-endian bytes.
pub struct BigEndian<const L: usize>([Digit; L]);

impl<const L: usize> BigEndian<L> {
    pub fn as_bytes(&self) -> &[u8] {
        // `[Digit; L]` is `L * DIGIT_BYTES` initialized bytes, and `u8` has no alignment requirement.
        unsafe { core::slice::from_raw_parts(self.0.as_ptr() as *const u8, L * DIGIT_BYTES) }
    }
}

// c'tors and such
impl<const L: usize> Unsigned<L> {
    pub const fn from_digits(digits: [Digit; L]) -> Self {
        Self(digits)
    }

    /// Fails for L = 0.
    pub const fn from_digit(digit: Digit) -> Self {
        let mut digits = [0; L];
        digits[0] = digit;
        Self(digits)
    }

    pub const fn from_u32(value: u32) -> Self {
        Self::from_digit(value as Digit)
    }

    /// Interprets `bytes` as big-endian, padding with zeros in the high digits.
    ///
    /// Fails: iff there are more bytes than fit in `L` digits. Leading zero bytes count too,
    /// we never truncate silently.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > <Self as Bits>::BYTES {
            return Err(Error::InvalidLength);
        }

        let mut x = Self::zero();
        for (i, byte) in bytes.iter().rev().enumerate() {
            x.0[i / DIGIT_BYTES] |= (*byte as Digit) << (8 * (i % DIGIT_BYTES));
        }
        Ok(x)
    }

    /// Writes exactly `buffer.len()` big-endian bytes.
    ///
    /// A buffer longer than the width gets leading zeros, a shorter one receives
    /// only the low-order bytes.
    pub fn write_be_bytes(&self, buffer: &mut [u8]) {
        for (i, byte) in buffer.iter_mut().rev().enumerate() {
            *byte = if i < <Self as Bits>::BYTES {
                (self.0[i / DIGIT_BYTES] >> (8 * (i % DIGIT_BYTES))) as u8
            } else {
                0
            };
        }
    }

    /// The full width as big-endian bytes.
    pub fn to_be_bytes(&self) -> BigEndian<L> {
        let mut big_endian = BigEndian([0; L]);
        // we need to store word such that it bytes are big-endian, whatever
        // the native architecture (although PC/Cortex are both little-endian).
        for i in 0..L {
            // "On big endian this is a no-op. On little endian the bytes are swapped."
            big_endian.0[L - i - 1] = self.0[i].to_be();
        }
        big_endian
    }

    pub fn digits(&self) -> &[Digit; L] {
        &self.0
    }

    pub fn zero() -> Self {
        Zero::zero()
    }

    pub fn one() -> Self {
        One::one()
    }

    pub fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    /// Bit `i`, counting from the least significant bit.
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        (self.0[i / DIGIT_BITS] >> (i % DIGIT_BITS)) & 1 == 1
    }

    /// 0 if zero, else index + 1 of last non-zero digit
    pub fn significant_digits(&self) -> usize {
        self.0.iter()
            .enumerate().rev()
            .find(|(_, &x)| x != 0)
            .map(|(i, _)| i + 1)
            .unwrap_or(0)
    }

    /// 0 if zero, else index + 1 of the highest set bit
    pub fn bits(&self) -> usize {
        match self.significant_digits() {
            0 => 0,
            l => l * DIGIT_BITS - self.0[l - 1].leading_zeros() as usize,
        }
    }

    /// Clears all bits from position `bits` upwards.
    pub(crate) fn truncate_bits(&mut self, bits: usize) {
        for (i, digit) in self.0.iter_mut().enumerate() {
            let low = i * DIGIT_BITS;
            if bits <= low {
                *digit = 0;
            } else if bits - low < DIGIT_BITS {
                *digit &= (1 << (bits - low)) - 1;
            }
        }
    }
}

/// Unsigned integer that is non-zero.
///
/// These are used as moduli, the check happens once, at construction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Zeroize)]
pub struct Modulus<const L: usize>(Unsigned<L>);

impl<const L: usize> Modulus<L> {
    pub fn new(n: Unsigned<L>) -> Result<Self> {
        use core::convert::TryFrom;
        Self::try_from(n)
    }

    pub fn as_unsigned(&self) -> &Unsigned<L> {
        &self.0
    }
}
