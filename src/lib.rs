//! Fixed-width unsigned integers and the raw RSA public operation.
//!
//! Everything is `no_std`, allocation-free and sized at compile time: an
//! [`Unsigned<L>`] is `L` [`Digit`]s on the stack, and so is every intermediate.
//!
//! ```ignore
//! let key = Rsa2k::with_f4(Unsigned2048::from_bytes(&n)?)?;
//! let c = key.encryption_primitive(&m)?;
//! ```
//!
//! The arithmetic is a deliberately plain baseline (double-and-add with trial subtraction,
//! square-and-multiply), it is not constant-time.
#![cfg_attr(not(test), no_std)]

mod aliases;
pub use aliases::*;
mod arithmetic;
pub use arithmetic::{Modular, Wrapping};
mod digit;
pub use digit::Digit;
mod error;
pub use error::{Error, Result};
mod key;
pub use key::PublicKey;
mod numbers;
pub use numbers::{BigEndian, Bits, Modulus, One, Unsigned, Zero};
mod random;
pub use random::Lcg;

#[cfg(test)]
mod fixtures;

/// The usual RSA public exponent, the fourth Fermat prime $F_4 = 2^{16} + 1$.
///
/// An example recommendation is RFC 4871:
/// https://www.ietf.org/rfc/rfc4871.txt
pub const E: u32 = 0x10001;
