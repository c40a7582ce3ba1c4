use core::ops::{Add, AddAssign};

use ref_cast::RefCast;

use crate::{Unsigned, Wrapping};
use crate::digit::{Digit, DoubleDigit, DIGIT_BITS};

//
// from num-bigint
//

// Add with carry:
#[inline]
pub fn adc(a: Digit, b: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += b as DoubleDigit;
    let lo = *acc as Digit;
    *acc >>= DIGIT_BITS;
    lo
}

/// Two argument addition of raw slices of equal length:
/// a += b
///
/// Returns the carry out of the most significant digit (0 or 1).
///
/// Unlike `num-bigint`, the carry is propagated through every digit, there is no early
/// exit once it is zero: the digit operations performed depend only on the length.
#[inline]
pub(crate) fn add_assign_carry(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert_eq!(a.len(), b.len());

    let mut carry = 0;
    for (a, b) in a.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    carry as Digit
}

// Addition in Unsigned / 2^M

impl<const L: usize> AddAssign<&Self> for Wrapping<Unsigned<L>> {
    fn add_assign(&mut self, summand: &Self) {
        add_assign_carry(&mut self.0, &summand.0);
    }
}

impl<const L: usize> Add for &Wrapping<Unsigned<L>> {
    type Output = Wrapping<Unsigned<L>>;

    fn add(self, summand: Self) -> Self::Output {
        let mut sum = *self;
        sum += summand;
        sum
    }
}

impl<const L: usize> Unsigned<L> {
    /// The sum and whether it overflowed the width.
    pub fn overflowing_add(&self, summand: &Self) -> (Self, bool) {
        let mut sum = *self;
        let carry = add_assign_carry(&mut sum, summand);
        (sum, carry != 0)
    }

    pub fn checked_add(&self, summand: &Self) -> Option<Self> {
        let (sum, carry) = self.overflowing_add(summand);
        (!carry).then(|| sum)
    }

    /// Addition modulo $2^{L \cdot \text{BITS}}$, the carry is dropped.
    pub fn wrapping_add_assign(&mut self, summand: &Self) {
        *Wrapping::ref_cast_mut(self) += Wrapping::ref_cast(summand);
    }

    pub fn wrapping_add(&self, summand: &Self) -> Self {
        (Wrapping::ref_cast(self) + Wrapping::ref_cast(summand)).0
    }
}
