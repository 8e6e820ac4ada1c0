//! NIST P-192 (secp192r1) domain parameters
//!
//! p = 2^192 - 2^64 - 1. The prime admits the fast curve-specific reduction.

use super::{P192_BIT_SIZE, P192_BYTE_SIZE};

/// Size of the Barrett constants in bytes
pub const BARRETT_SIZE: usize = P192_BYTE_SIZE + 1;

/// Field prime p, little-endian
///
/// `FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF`
pub const MODULUS: [u8; P192_BYTE_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Barrett constant for p, little-endian
///
/// `1000000000000000000000000000000010000000000000001`
pub const MODULUS_BARRETT: [u8; BARRETT_SIZE] = [
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01,
];

/// Order n of the base point, little-endian
///
/// `FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831`
pub const ORDER: [u8; P192_BYTE_SIZE] = [
    0x31, 0x28, 0xD2, 0xB4, 0xB1, 0xC9, 0x6B, 0x14,
    0x36, 0xF8, 0xDE, 0x99, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Barrett constant for n, little-endian
///
/// `1000000000000000000000000662107C9EB94364E4B2DD7CF`
pub const ORDER_BARRETT: [u8; BARRETT_SIZE] = [
    0xCF, 0xD7, 0x2D, 0x4B, 0x4E, 0x36, 0x94, 0xEB,
    0xC9, 0x07, 0x21, 0x66, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01,
];

/// Base point x-coordinate, little-endian
///
/// `188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012`
pub const BASE_POINT_X: [u8; P192_BYTE_SIZE] = [
    0x12, 0x10, 0xFF, 0x82, 0xFD, 0x0A, 0xFF, 0xF4,
    0x00, 0x88, 0xA1, 0x43, 0xEB, 0x20, 0xBF, 0x7C,
    0xF6, 0x90, 0x30, 0xB0, 0x0E, 0xA8, 0x8D, 0x18,
];

/// Base point y-coordinate, little-endian
///
/// `7192B95FFC8DA78631011ED6B24CDD573F977A11E794811`
pub const BASE_POINT_Y: [u8; P192_BYTE_SIZE] = [
    0x11, 0x48, 0x79, 0x1E, 0xA1, 0x77, 0xF9, 0x73,
    0xD5, 0xCD, 0x24, 0x6B, 0xED, 0x11, 0x10, 0x63,
    0x78, 0xDA, 0xC8, 0xFF, 0x95, 0x2B, 0x19, 0x07,
];

const _: () = assert!(P192_BIT_SIZE.div_ceil(8) == P192_BYTE_SIZE);
