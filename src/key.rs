//! RSA public keys and the raw public operation.
//!
//! Only the "textbook" primitives of [RFC 8017][rfc8017] live here, no padding.
//! There is no private key: the same [`Modular::power`][crate::Modular::power]
//! would serve a private exponent, but CRT decryption is not implemented.
//!
//! [rfc8017]: https://tools.ietf.org/html/rfc8017

use zeroize::Zeroize;

use crate::{Error, Modulus, Result, Unsigned};
use crate::numbers::Bits;

/// RSA public key.
///
/// The exponent `e` is a single digit, typically [`E`][crate::E] = 65537;
/// all of its bits are scanned during exponentiation.
#[derive(Clone, Debug, Eq, PartialEq, Zeroize)]
pub struct PublicKey<const L: usize> {
    n: Modulus<L>,
    e: Unsigned<1>,
}

impl<const L: usize> Bits for PublicKey<L> {
    const BITS: usize = <Unsigned<L> as Bits>::BITS;
}

impl<const L: usize> PublicKey<L> {
    /// Fails: iff `n` is zero.
    pub fn new(n: Unsigned<L>, e: u32) -> Result<Self> {
        Ok(Self { n: Modulus::new(n)?, e: Unsigned::from_u32(e) })
    }

    /// The public exponent is [`E`][crate::E].
    pub fn with_f4(n: Unsigned<L>) -> Result<Self> {
        Self::new(n, crate::E)
    }

    /// Modulus given as big-endian bytes.
    pub fn from_bytes(n: &[u8], e: u32) -> Result<Self> {
        Self::new(Unsigned::from_bytes(n)?, e)
    }

    pub fn modulus(&self) -> &Modulus<L> {
        &self.n
    }

    pub fn exponent(&self) -> &Unsigned<1> {
        &self.e
    }

    /// $m^e \text{ mod } n$, for any `m` of the key's width.
    pub fn public_operation(&self, m: &Unsigned<L>) -> Unsigned<L> {
        m.modulo(&self.n).power(&self.e).residue()
    }

    /// [RSAEP][rsaep]
    ///
    /// [rsaep]: https://tools.ietf.org/html/rfc8017#section-5.1.1
    pub fn encryption_primitive(&self, msg: &[u8]) -> Result<Unsigned<L>> {
        // 1.
        if msg.len() > Self::BYTES {
            return Err(Error::InvalidLength);
        }
        let m = Unsigned::<L>::from_bytes(msg)?;

        if m >= self.n {
            return Err(Error::MessageOutOfRange);
        }

        // 2.
        Ok(self.public_operation(&m))
    }

    /// [RSAVP1][rsavp]
    ///
    /// [rsavp]: https://tools.ietf.org/html/rfc8017#section-5.2.2
    pub fn verification_primitive(&self, signature: &[u8]) -> Result<Unsigned<L>> {
        self.encryption_primitive(signature)
    }
}
