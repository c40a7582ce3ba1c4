use core::ops::{Mul, MulAssign};

use super::add::add_assign_carry;
use super::subtract::sub_assign_borrow;
use crate::{Digit, Modular, Modulus, Unsigned};
use crate::numbers::Bits;

/// Brings `t` (plus `carry` times $2^{L \cdot \text{BITS}}$) back below `n`.
///
/// A carry means the true value exceeds the width, hence `n`: the first
/// subtraction then borrows, and the borrow cancels the carry.
///
/// Repeated trial subtraction: the number of iterations depends on the values.
#[inline]
fn trial_subtract<const L: usize>(t: &mut Unsigned<L>, carry: Digit, n: &Modulus<L>) {
    if carry != 0 {
        let borrow = sub_assign_borrow(t, n);
        debug_assert!(borrow != 0);
    }
    while *t >= *n {
        sub_assign_borrow(t, n);
    }
}

/// $a \cdot b \text{ mod } n$, scanning all bits of `b` from the top.
///
/// Per bit: $t \leftarrow 2t$, then $t \leftarrow t + a$ if the bit is set, each step
/// followed by trial subtraction. With `a < n`, each step needs at most one subtraction;
/// otherwise the loop in `trial_subtract` runs as long as it takes.
///
/// `b` may be of any width, which gives reduction for free (`a = 1`).
pub(crate) fn double_and_add<const L: usize, const F: usize>(
    a: &Unsigned<L>,
    b: &Unsigned<F>,
    n: &Modulus<L>,
) -> Unsigned<L> {
    let mut t = Unsigned::<L>::zero();

    for i in (0..<Unsigned<F> as Bits>::BITS).rev() {
        // double
        let doubled = t;
        let carry = add_assign_carry(&mut t, &doubled);
        trial_subtract(&mut t, carry, n);

        // add
        if b.bit(i) {
            let carry = add_assign_carry(&mut t, a);
            trial_subtract(&mut t, carry, n);
        }
    }
    t
}

/// Currently see no way of ensuring that both factors have the same modulus
/// on a type level; hence a runtime debug_assert instead.
impl<'l, 'n, const L: usize> Mul for &'l Modular<'n, L> {
    type Output = Modular<'n, L>;

    fn mul(self, other: Self) -> Self::Output {
        debug_assert_eq!(self.n, other.n);

        Modular { x: double_and_add(&self.x, &other.x, self.n), n: self.n }
    }
}

impl<'l, 'n, const L: usize> MulAssign<&'l Self> for Modular<'n, L> {
    fn mul_assign(&mut self, other: &'l Self) {
        *self = &*self * other;
    }
}
