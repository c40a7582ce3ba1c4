use core::ops::{Neg, Sub, SubAssign};

use ref_cast::RefCast;

use crate::{Unsigned, Wrapping};
use crate::digit::{Digit, SignedDoubleDigit, DIGIT_BITS};


/// Subtract with borrow:
#[inline]
pub fn sbb(a: Digit, b: Digit, acc: &mut SignedDoubleDigit) -> Digit {
    *acc += a as SignedDoubleDigit;
    *acc -= b as SignedDoubleDigit;
    let lo = *acc as Digit;
    *acc >>= DIGIT_BITS;
    lo
}

// A non-zero borrow (if a.len() == b.len()) is -1, which as unsigned is
// the same as "all bits set", i.e., 0xFFFF_FFFF for Digit = u32
//
// As with addition, every digit is visited.
pub(crate) fn sub_assign_borrow(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert_eq!(a.len(), b.len());
    let mut borrow = 0;

    for (a, b) in a.iter_mut().zip(b) {
        *a = sbb(*a, *b, &mut borrow);
    }

    borrow as Digit
}

// Subtraction in Unsigned / 2^M -- can forget borrows

impl<const L: usize> SubAssign<&Self> for Wrapping<Unsigned<L>> {
    fn sub_assign(&mut self, subtrahend: &Self) {
        sub_assign_borrow(&mut self.0, &subtrahend.0);
    }
}

impl<const L: usize> Sub for &Wrapping<Unsigned<L>> {
    type Output = Wrapping<Unsigned<L>>;

    fn sub(self, subtrahend: Self) -> Self::Output {
        let mut difference = *self;
        difference -= subtrahend;
        difference
    }
}

impl<const L: usize> Neg for &Wrapping<Unsigned<L>> {
    type Output = Wrapping<Unsigned<L>>;

    fn neg(self) -> Self::Output {
        &Wrapping(Unsigned::zero()) - self
    }
}

impl<const L: usize> Unsigned<L> {
    /// The difference and the borrow, which is set iff `self < subtrahend`.
    ///
    /// With the borrow set, the difference has wrapped around $2^{L \cdot \text{BITS}}$.
    pub fn overflowing_sub(&self, subtrahend: &Self) -> (Self, bool) {
        let mut difference = *self;
        let borrow = sub_assign_borrow(&mut difference, subtrahend);
        (difference, borrow != 0)
    }

    pub fn checked_sub(&self, subtrahend: &Self) -> Option<Self> {
        let (difference, borrow) = self.overflowing_sub(subtrahend);
        (!borrow).then(|| difference)
    }

    pub fn wrapping_sub_assign(&mut self, subtrahend: &Self) {
        *Wrapping::ref_cast_mut(self) -= Wrapping::ref_cast(subtrahend);
    }

    pub fn wrapping_sub(&self, subtrahend: &Self) -> Self {
        (Wrapping::ref_cast(self) - Wrapping::ref_cast(subtrahend)).0
    }

    /// $2^{L \cdot \text{BITS}} - x$, and zero for zero.
    pub fn wrapping_neg(&self) -> Self {
        (-Wrapping::ref_cast(self)).0
    }
}
