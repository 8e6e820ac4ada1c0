//! NIST P-521 (secp521r1) domain parameters
//!
//! The 521-bit values occupy 66 bytes; only the low bit of byte 65 is set in
//! p. Both Barrett constants fit in 66 bytes as well, since
//! floor(2^1042 / m) is at most 522 bits wide.

use super::{P521_BIT_SIZE, P521_BYTE_SIZE};

/// Size of the Barrett constants in bytes
pub const BARRETT_SIZE: usize = P521_BYTE_SIZE;

/// Field prime p, little-endian
///
/// `1FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF`
pub const MODULUS: [u8; P521_BYTE_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0x01,
];

/// Barrett constant for p, little-endian
///
/// `20000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001`
pub const MODULUS_BARRETT: [u8; BARRETT_SIZE] = [
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x02,
];

/// Order n of the base point, little-endian
///
/// `1FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFA51868783BF2F966B7FCC0148F709A5D03BB5C9B8899C47AEBB6FB71E91386409`
pub const ORDER: [u8; P521_BYTE_SIZE] = [
    0x09, 0x64, 0x38, 0x91, 0x1E, 0xB7, 0x6F, 0xBB,
    0xAE, 0x47, 0x9C, 0x89, 0xB8, 0xC9, 0xB5, 0x3B,
    0xD0, 0xA5, 0x09, 0xF7, 0x48, 0x01, 0xCC, 0x7F,
    0x6B, 0x96, 0x2F, 0xBF, 0x83, 0x87, 0x86, 0x51,
    0xFA, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0x01,
];

/// Barrett constant for n, little-endian
///
/// `2000000000000000000000000000000000000000000000000000000000000000005AE79787C40D069948033FEB708F65A2FC44A36477663B851449048E16EC79BF7`
pub const ORDER_BARRETT: [u8; BARRETT_SIZE] = [
    0xF7, 0x9B, 0xC7, 0x6E, 0xE1, 0x48, 0x90, 0x44,
    0x51, 0xB8, 0x63, 0x76, 0x47, 0x36, 0x4A, 0xC4,
    0x2F, 0x5A, 0xF6, 0x08, 0xB7, 0xFE, 0x33, 0x80,
    0x94, 0x69, 0xD0, 0x40, 0x7C, 0x78, 0x79, 0xAE,
    0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x02,
];

/// Base point x-coordinate, little-endian
///
/// `C6858E06B70404E9CD9E3ECB662395B4429C648139053FB521F828AF606B4D3DBAA14B5E77EFE75928FE1DC127A2FFA8DE3348B3C1856A429BF97E7E31C2E5BD66`
pub const BASE_POINT_X: [u8; P521_BYTE_SIZE] = [
    0x66, 0xBD, 0xE5, 0xC2, 0x31, 0x7E, 0x7E, 0xF9,
    0x9B, 0x42, 0x6A, 0x85, 0xC1, 0xB3, 0x48, 0x33,
    0xDE, 0xA8, 0xFF, 0xA2, 0x27, 0xC1, 0x1D, 0xFE,
    0x28, 0x59, 0xE7, 0xEF, 0x77, 0x5E, 0x4B, 0xA1,
    0xBA, 0x3D, 0x4D, 0x6B, 0x60, 0xAF, 0x28, 0xF8,
    0x21, 0xB5, 0x3F, 0x05, 0x39, 0x81, 0x64, 0x9C,
    0x42, 0xB4, 0x95, 0x23, 0x66, 0xCB, 0x3E, 0x9E,
    0xCD, 0xE9, 0x04, 0x04, 0xB7, 0x06, 0x8E, 0x85,
    0xC6, 0x00,
];

/// Base point y-coordinate, little-endian
///
/// `11839296A789A3BC0045C8A5FB42C7D1BD998F54449579B446817AFBD17273E662C97EE72995EF42640C550B9013FAD0761353C7086A272C24088BE94769FD16650`
pub const BASE_POINT_Y: [u8; P521_BYTE_SIZE] = [
    0x50, 0x66, 0xD1, 0x9F, 0x76, 0x94, 0xBE, 0x88,
    0x40, 0xC2, 0x72, 0xA2, 0x86, 0x70, 0x3C, 0x35,
    0x61, 0x07, 0xAD, 0x3F, 0x01, 0xB9, 0x50, 0xC5,
    0x40, 0x26, 0xF4, 0x5E, 0x99, 0x72, 0xEE, 0x97,
    0x2C, 0x66, 0x3E, 0x27, 0x17, 0xBD, 0xAF, 0x17,
    0x68, 0x44, 0x9B, 0x57, 0x49, 0x44, 0xF5, 0x98,
    0xD9, 0x1B, 0x7D, 0x2C, 0xB4, 0x5F, 0x8A, 0x5C,
    0x04, 0xC0, 0x3B, 0x9A, 0x78, 0x6A, 0x29, 0x39,
    0x18, 0x01,
];

const _: () = assert!(P521_BIT_SIZE.div_ceil(8) == P521_BYTE_SIZE);
