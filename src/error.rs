use core::fmt;

/// Ways in which the engine refuses its inputs.
///
/// Wraparound of `wrapping_*` arithmetic is intentional and never an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// More bytes than fit in the fixed width.
    InvalidLength,
    /// The modulus is zero.
    DivideByZero,
    /// RSA input is not below the modulus.
    MessageOutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidLength => "input does not fit in the fixed width",
            Error::DivideByZero => "modulus is zero",
            Error::MessageOutOfRange => "message is not below the modulus",
        })
    }
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
