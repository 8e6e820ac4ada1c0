//! Constants for the NIST prime-field curves (FIPS 186-4, SEC 2)
//!
//! Every curve module exposes the same six byte strings, stored
//! least-significant byte first: `MODULUS`, `MODULUS_BARRETT`, `ORDER`,
//! `ORDER_BARRETT`, `BASE_POINT_X`, `BASE_POINT_Y`. The Barrett constants are
//! `floor(2^(2 * bits) / m)` where `bits` is the curve bit size.

pub mod p192;
pub mod p224;
pub mod p256;
pub mod p384;
pub mod p521;

/// Bit size of the P-192 field
pub const P192_BIT_SIZE: usize = 192;

/// Bit size of the P-224 field
pub const P224_BIT_SIZE: usize = 224;

/// Bit size of the P-256 field
pub const P256_BIT_SIZE: usize = 256;

/// Bit size of the P-384 field
pub const P384_BIT_SIZE: usize = 384;

/// Bit size of the P-521 field
pub const P521_BIT_SIZE: usize = 521;

/// Byte size of a P-192 field element
pub const P192_BYTE_SIZE: usize = 24;

/// Byte size of a P-224 field element
pub const P224_BYTE_SIZE: usize = 28;

/// Byte size of a P-256 field element
pub const P256_BYTE_SIZE: usize = 32;

/// Byte size of a P-384 field element
pub const P384_BYTE_SIZE: usize = 48;

/// Byte size of a P-521 field element (521 bits rounded up)
pub const P521_BYTE_SIZE: usize = 66;

/// Largest byte size of any supported curve; sizes stack buffers
pub const MAX_BYTE_SIZE: usize = P521_BYTE_SIZE;
