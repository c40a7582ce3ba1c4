use core::{cmp::Ordering, convert::TryFrom, fmt, ops::{Deref, DerefMut}};

use super::{Modulus, Unsigned};
use crate::{Digit, Error, Result};


impl<const L: usize> Deref for Unsigned<L> {
    type Target = [Digit];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const L: usize> DerefMut for Unsigned<L> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// No DerefMut, that would allow setting the modulus to zero.
impl<const L: usize> Deref for Modulus<L> {
    type Target = Unsigned<L>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const L: usize> TryFrom<Unsigned<L>> for Modulus<L> {
    type Error = Error;
    fn try_from(unsigned: Unsigned<L>) -> Result<Self> {
        if unsigned.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(Self(unsigned))
    }
}

impl<const L: usize> From<Modulus<L>> for Unsigned<L> {
    fn from(modulus: Modulus<L>) -> Self {
        modulus.0
    }
}

impl<const L: usize> From<u32> for Unsigned<L> {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

// Since we store little-endian, comparison needs to start at the last
// digit, instead of at the first as the derived / default implementation would.
impl<const L: usize> Ord for Unsigned<L> {
    /// This is *little endian* ordering, as opposed to the default
    /// ordering on arrays and slices!
    ///
    /// All `L` digits take part, leading zero digits are not skipped.
    fn cmp(&self, other: &Self) -> Ordering {
        for (m, n) in self.0.iter().zip(other.0.iter()).rev() {
            match m.cmp(n) {
                Ordering::Equal => (),
                not_equal => return not_equal,
            }
        }
        Ordering::Equal
    }
}

impl<const L: usize> PartialOrd for Unsigned<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const L: usize> PartialEq<Modulus<L>> for Unsigned<L> {
    fn eq(&self, other: &Modulus<L>) -> bool {
        *self == other.0
    }
}

impl<const L: usize> PartialOrd<Modulus<L>> for Unsigned<L> {
    fn partial_cmp(&self, other: &Modulus<L>) -> Option<Ordering> {
        self.partial_cmp(&other.0)
    }
}

impl<const L: usize> Default for Unsigned<L> {
    fn default() -> Self {
        Self([0; L])
    }
}

impl<const L: usize> fmt::Debug for Unsigned<L> {
    /// Big-endian bytes, whatever the digit size.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(not(feature = "hex-debug"))]
        return fmt::Debug::fmt(self.to_be_bytes().as_bytes(), f);

        #[cfg(feature = "hex-debug")]
        return write!(f, "{}", delog::hex_str!(self.to_be_bytes().as_bytes()));
    }
}

#[cfg(feature = "ct-maybe")]
impl<const L: usize> subtle::ConditionallySelectable for Unsigned<L> {
    fn conditional_select(a: &Self, b: &Self, choice: subtle::Choice) -> Self {
        let mut selected = Self::zero();
        for (s, (a, b)) in selected.0.iter_mut().zip(a.0.iter().zip(b.0.iter())) {
            *s = Digit::conditional_select(a, b, choice);
        }
        selected
    }
}

#[cfg(test)]
mod test {
    use core::cmp::Ordering;
    use core::convert::TryInto;

    use crate::fixtures::*;
    use crate::{Error, Modulus, Unsigned};

    #[test]
    fn compare_is_a_total_order() {
        let values = [Unsigned256::zero(), Unsigned256::one(), a256(), b256(), m256(), Unsigned256::from_bytes(&[0xFF; 32]).unwrap()];
        for x in values.iter() {
            assert_eq!(x.cmp(x), Ordering::Equal);
            for y in values.iter() {
                let forward = x.cmp(y);
                assert_eq!(forward.reverse(), y.cmp(x));
                assert_eq!(forward == Ordering::Equal, x == y);
            }
        }
        assert!(b256() < a256());
        assert!(a256() < m256());
    }

    #[test]
    fn compare_most_significant_digit_first() {
        // low digit says "greater", high digit decides "less"
        let mut x = Unsigned::<3>::zero();
        let mut y = Unsigned::<3>::zero();
        x[0] = 5;
        y[0] = 1;
        y[2] = 1;
        assert_eq!(x.cmp(&y), Ordering::Less);
        assert!(y > x);
    }

    #[test]
    fn modulus_comparisons() {
        let n = Modulus::new(m256()).unwrap();
        assert!(a256() < n);
        assert!(m256() == n);

        let zero: Result<Modulus<4>, Error> = Unsigned::<4>::zero().try_into();
        assert_eq!(zero, Err(Error::DivideByZero));
    }
}
