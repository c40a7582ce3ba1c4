//! Modular arithmetic (for arbitrary non-zero moduli) and wrapping arithmetic.
//!
//! For `Modular`, the residue is always completely reduced, `0 <= x < n`.
//! Multiplication is schoolbook double-and-add with trial subtraction, no Montgomery
//! representation: this engine is the baseline that faster ones are compared against.
//!
//! For `Wrapping<Unsigned>`, we implement operations "$\text{mod } 2^{L \cdot \text{BITS}}$",
//! that is, dropping all carries and borrows.
//!
//! Nothing here is constant-time. The number of trial subtractions depends on the
//! operands; feature `ct-maybe` only removes the branch on exponent bits.

use ref_cast::RefCast;
#[cfg(feature = "ct-maybe")]
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

use crate::{Modulus, Result, Unsigned};
use crate::numbers::Bits;

mod add;
mod subtract;
mod multiply;

/// Modular integer, corresponds to the residue class "modulo modulus".
///
/// For fixed modulus, this is a ring. If the modulus is prime, this is a field.
///
/// All constructors must enforce that `x < n` is the canonical residue class representative.
#[derive(Clone, Copy, Debug)]
pub struct Modular<'n, const L: usize> {
    x: Unsigned<L>,
    n: &'n Modulus<L>,
}

impl<const L: usize> Zeroize for Modular<'_, L> {
    fn zeroize(&mut self) {
        self.x.zeroize();
    }
}

#[cfg(feature = "ct-maybe")]
impl<const L: usize> ConditionallySelectable for Modular<'_, L> {
    fn conditional_select(a: &Self, b: &Self, c: Choice) -> Self {
        debug_assert_eq!(a.n, b.n);

        Self {
            x: Unsigned::conditional_select(&a.x, &b.x, c),
            n: a.n,
        }
    }
}

/// ## Reduction of unsigned integers
impl<const F: usize> Unsigned<F> {
    /// The associated residue class modulo n.
    ///
    /// Note that storage requirements of the residue class are the same
    /// as the modulus (+ reference to it), not the original integer.
    pub fn modulo<'n, const L: usize>(&self, n: &'n Modulus<L>) -> Modular<'n, L> {
        Modular { x: self.reduce(n), n }
    }

    /// The canonical (completely) reduced representative of the associated residue class modulo $n$.
    ///
    /// Bit-serial: shift in the bits of `self` from the top, subtracting `n` whenever possible.
    pub fn reduce<const L: usize>(&self, n: &Modulus<L>) -> Unsigned<L> {
        multiply::double_and_add(&Unsigned::one(), self, n)
    }

    /// $a \cdot b \text{ mod } m$, by double-and-add with trial subtraction.
    ///
    /// Operands need not be reduced. Fails: iff `m` is zero.
    pub fn mod_mul(&self, b: &Self, m: &Self) -> Result<Self> {
        let m = Modulus::new(*m)?;
        Ok((&self.modulo(&m) * &b.modulo(&m)).residue())
    }

    /// $\text{base}^e \text{ mod } m$, by square-and-multiply over all bits of `e`.
    ///
    /// Fails: iff `m` is zero.
    pub fn mod_exp<const K: usize>(&self, e: &Unsigned<K>, m: &Self) -> Result<Self> {
        let m = Modulus::new(*m)?;
        Ok(self.modulo(&m).power(e).residue())
    }
}

impl<'n, const L: usize> Modular<'n, L> {
    pub fn zero(n: &'n Modulus<L>) -> Self {
        Self { x: Unsigned::zero(), n }
    }

    /// `1 mod n`, which is zero for `n = 1`.
    pub fn one(n: &'n Modulus<L>) -> Self {
        Unsigned::<L>::one().modulo(n)
    }

    /// The canonical representative of this residue class.
    ///
    /// This is like [`lift`][lift] in GP/PARI
    ///
    /// [lift]: https://pari.math.u-bordeaux.fr/dochtml/html/Conversions_and_similar_elementary_functions_or_commands.html#se:lift
    pub fn residue(&self) -> Unsigned<L> {
        self.x
    }

    pub fn modulus(&self) -> &'n Modulus<L> {
        self.n
    }

    /// Left-to-right binary exponentiation.
    ///
    /// All `F * Digit::BITS` bits of the exponent are scanned, leading zeros included,
    /// so the number of squarings depends only on the width of the exponent.
    pub fn power<const F: usize>(&self, exponent: &Unsigned<F>) -> Self {
        let mut x = Self::one(self.n);

        for i in (0..<Unsigned<F> as Bits>::BITS).rev() {
            x = &x * &x;

            #[cfg(not(feature = "ct-maybe"))] {
                if exponent.bit(i) {
                    x *= self;
                }
            }

            #[cfg(feature = "ct-maybe")] {
                x = Self::conditional_select(
                    &x,
                    &(&x * self),
                    Choice::from(exponent.bit(i) as u8),
                )
            }
        }
        x
    }
}

impl<const L: usize> From<Modular<'_, L>> for Unsigned<L> {
    fn from(class: Modular<'_, L>) -> Self {
        class.residue()
    }
}

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, RefCast)]
/// Intentionally-wrapped arithmetic.
///
/// We can't use `core::num::Wrapping` due to type coherence clashing
/// with our usage requirements.
///
/// The idea is that `T` is [`Unsigned`], and we wrap around $2^N$ where `N = T::BITS`.
pub struct Wrapping<T>(pub T);
