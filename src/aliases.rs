//! Type aliases by bit-size, independent of architecture/features.

use crate::{PublicKey, Unsigned};
pub use aliases::*;

// 32-bit
#[cfg(feature = "u32")]
mod aliases {
    use super::*;

    pub type Unsigned32 = Unsigned<1>;
    pub type Unsigned64 = Unsigned<2>;
    pub type Unsigned128 = Unsigned<4>;
    pub type Unsigned256 = Unsigned<8>;
    pub type Unsigned512 = Unsigned<16>;
    pub type Unsigned1024 = Unsigned<32>;
    pub type Unsigned1536 = Unsigned<48>;
    pub type Unsigned2048 = Unsigned<64>;
    pub type Unsigned3072 = Unsigned<96>;
    pub type Unsigned4096 = Unsigned<128>;

    pub type Rsa1k = PublicKey<32>;
    pub type Rsa2k = PublicKey<64>;
    pub type Rsa3k = PublicKey<96>;
    pub type Rsa4k = PublicKey<128>;
}

// 64-bit
#[cfg(feature = "u64")]
mod aliases {
    use super::*;

    pub type Unsigned64 = Unsigned<1>;
    pub type Unsigned128 = Unsigned<2>;
    pub type Unsigned256 = Unsigned<4>;
    pub type Unsigned512 = Unsigned<8>;
    pub type Unsigned1024 = Unsigned<16>;
    pub type Unsigned1536 = Unsigned<24>;
    pub type Unsigned2048 = Unsigned<32>;
    pub type Unsigned3072 = Unsigned<48>;
    pub type Unsigned4096 = Unsigned<64>;

    pub type Rsa1k = PublicKey<16>;
    pub type Rsa2k = PublicKey<32>;
    pub type Rsa3k = PublicKey<48>;
    pub type Rsa4k = PublicKey<64>;
}
