//! Known values, cross-checked with Python's arbitrary precision `pow`.

use hex_literal::hex;

pub use crate::aliases::*;
use crate::Unsigned;

/// Odd, top bit set.
pub const M256: [u8; 32] = hex!("e46893867c089f4e1f1d1f01a9d9a5102ec746997017125e07c3e62447ce57e9");
pub const A256: [u8; 32] = hex!("2f6f4ce7b583d83d2dac5231161dca46903e33c18cc9c5bc6598d69183535922");
pub const B256: [u8; 32] = hex!("22f412cb909429dbc3774faa730ef045e7849b9950a04f7e40b8106029e0ddab");
/// Used as a full-width exponent.
pub const C256: [u8; 32] = hex!("03332693cc80b94c2d99c8c3fa1ed6cf53ade73a011c4bf8d971395eb58fe03f");

pub const A_PLUS_B_256: [u8; 32] = hex!("52635fb346180218f123a1db892cba8c77c2cf5add6a153aa650e6f1ad3436cd");
pub const A_MINUS_B_256: [u8; 32] = hex!("0c7b3a1c24efae616a350286a30eda00a8b998283c29763e24e0c63159727b77");
/// Wrapped around 2^256.
pub const B_MINUS_A_256: [u8; 32] = hex!("f384c5e3db10519e95cafd795cf125ff574667d7c3d689c1db1f39cea68d8489");
pub const A_TIMES_B_256: [u8; 32] = hex!("937dd1db60a2c053daf252d688da19e1d4707257f22f3e25df51cbf0f64d9eb5");
pub const A_SQUARED_256: [u8; 32] = hex!("638e47840ae9561b8e41c5dc525f8794abcdcedc5f8ed97414bc105fe47dfb58");
pub const A_37_256: [u8; 32] = hex!("9cce3cf5009378a51c1446cc6a6dd4327f4ea46b945eafec4a2d239ad4aef24d");
pub const A_F4_256: [u8; 32] = hex!("0784fcc8210fc7ec10c11f7cb017911c28ba308513d343ac54f02cb681a4f5cf");
pub const A_C_256: [u8; 32] = hex!("7d4ae2c1263bc51bc5cf035720cff65471a08a308d4c54b7f17e8b60c3537adf");

/// Product of two 512-bit primes.
pub const N1024: [u8; 128] = hex!("e8209e25b11593a01a7de167244256398851139e956db9e5e149aa4aa1c7456a6d85c87976e164c551665b140dcbecdc25848349aece6ef4101bcc349788d77320fcc9b542a5bc9caa1f32fc26341905800701b0d6d842e81e81ae533cfb9649cd5f8da096b67a79626a71f59a7f154a76281ad7487138befb198e7b044cd051");
pub const MSG1024: [u8; 128] = hex!("d3c40ed3c062e934c00769fe4b30e7e2abc828463c84f97d119d569f52b31e3af772f9dc24b968f3fd9371a9d410963f1226be792426c4b23b1d735fe5eb11e2bf5d3c25f836a58db2a270c85fa51bd598da17b2eaf3efaca1f6203a0680055c85499700ea7e62efb1a400ec78af7e8123c45cdd9728a64d9ff35c81a1e7e232");
/// `pow(MSG1024, 65537, N1024)`
pub const CT1024: [u8; 128] = hex!("4f08068c5fbd3123b4b3cea0cf936fe679939f5cf5188186bc721d707f52de673916a2ef5142db90854cf273eb8665c2e02d8b5d30f2a0c878fde3d04ddfe97255751680fe41666718d7d351c18a3b6785e74231c69059f8b5e05bed561fef570d34085ba4d2f7bbea1b04e917ee6213aac43f39b89e22df363f2febe330b180");

/// Product of two 1024-bit primes.
pub const N2048: [u8; 256] = hex!("b61e7cad41a994c658b5eabd87d1dec4666b4314ed7d760414e48c002098dfc6f9c1000fb85360b84347d2889e4bf6bdba42ffb7ff8b0ef8528d50f57499567d59b13e9298d233f34dabe3752e3054cb971d3b3e4ae3fca282a3a806a6b78026e16f79d200a13d7a44c4c2c1b3ef1a2456bb2b5d55a30aab1d18681236e3a1d68fc7fc4b4481eb04132bde1b16ab22942706a3c278bc88fc9f00e376a0d04a5402dbab7a15e38147f8df62c2bda4fb0fff74c1a24496cd0708b63c74c50c6df0e07cd3ee385f59359cd651dbb975bf8fcca9225bcee05450050515442059bf0d91a6bf19004ba7b1dde599a7da972244769f6526b1f3793d0b2e9a263e0996d1");
pub const MSG2048: [u8; 256] = hex!("7fbc47eb59645c439b3ec348507f33823b76b9690ebbdbb27f14ba5ce96faed1d9a84d5b60066bbde7a50c80b4f0ac5f56ba7b626c24d05faf5f886b17ae05d49bea0474a35a630a59781052741a8f199c989a498a043460ffe3c1d3e730e960d47f1c983fc07194feb33f0f0dfef0658d5b8129f6d5332ee1edb02e3ae90c757829449d196bfe998f7f19b9147165e44757edbefd8c618bc603d967b68da457b067569b1141482769328ac494a1d678a97451c033ea15c048d2e8f4c3837f04403579ce0ad82441b24ab65fcf283e107414062b11313f2e3a3dd6002471eb2b81cb07346f834cc5c9586ca723f0c6a61e99c8751f2f7f50a634ca82eb7b9427");
/// `pow(MSG2048, 65537, N2048)`
pub const CT2048: [u8; 256] = hex!("b3951569faa56e5f438896e93c1de5558b7aefd24fe68fa6202b9e2330e210d0e1cc091ef44e569e6cd08ae355d9fd2595535cf5b82aefe509020cb4d4b54b29face4e3aafb5b60553ef13d1fb25b7c475c247ec0a42d77dd1125e2947aaa4996451432d415496f47c0913270856aa27a4d816e7aeab80f17b0f743a3a23b3729c7e3b2c95af29ce23b4da4b87e17ede1e4ad97f6179a296067c4e1b7bc4b5359e12f614da6cc78e26b74c8f48a8cbfd7ffb4c4e2ebb0806bf7c324485f09e6be9c00d007e4bf722c625bf1ac3e2f82bfa5f613a095f675fbce7bc5cbb37e863c3db68a800b4444bc463f9ac72b1aee9c8cc9802ec21c3e9188bdd76845895cb");

pub fn m256() -> Unsigned256 {
    Unsigned256::from_bytes(&M256).unwrap()
}

pub fn a256() -> Unsigned256 {
    Unsigned256::from_bytes(&A256).unwrap()
}

pub fn b256() -> Unsigned256 {
    Unsigned256::from_bytes(&B256).unwrap()
}

pub fn c256() -> Unsigned256 {
    Unsigned256::from_bytes(&C256).unwrap()
}

pub fn u64_to_unsigned<const L: usize>(x: u64) -> Unsigned<L> {
    Unsigned::from_bytes(&x.to_be_bytes()).unwrap()
}

/// Low 64 bits.
pub fn unsigned_to_u64<const L: usize>(x: &Unsigned<L>) -> u64 {
    let mut bytes = [0u8; 8];
    x.write_be_bytes(&mut bytes);
    u64::from_be_bytes(bytes)
}

/// Big-endian bytes modulo a native modulus, by Horner's rule.
pub fn native_mod(bytes: &[u8], m: u64) -> u64 {
    bytes.iter().fold(0u128, |acc, &byte| ((acc << 8) | byte as u128) % m as u128) as u64
}

pub fn native_pow(base: u64, mut e: u64, m: u64) -> u64 {
    let m = m as u128;
    let mut base = base as u128 % m;
    let mut result = 1 % m;
    while e > 0 {
        if e & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        e >>= 1;
    }
    result as u64
}
