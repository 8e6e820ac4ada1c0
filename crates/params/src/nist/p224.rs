//! NIST P-224 (secp224r1) domain parameters

use super::{P224_BIT_SIZE, P224_BYTE_SIZE};

/// Size of the Barrett constants in bytes
pub const BARRETT_SIZE: usize = P224_BYTE_SIZE + 1;

/// Field prime p, little-endian
///
/// `FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001`
pub const MODULUS: [u8; P224_BYTE_SIZE] = [
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF,
];

/// Barrett constant for p, little-endian
///
/// `100000000000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF`
pub const MODULUS_BARRETT: [u8; BARRETT_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x01,
];

/// Order n of the base point, little-endian
///
/// `FFFFFFFFFFFFFFFFFFFFFFFFFFFF16A2E0B8F03E13DD29455C5C2A3D`
pub const ORDER: [u8; P224_BYTE_SIZE] = [
    0x3D, 0x2A, 0x5C, 0x5C, 0x45, 0x29, 0xDD, 0x13,
    0x3E, 0xF0, 0xB8, 0xE0, 0xA2, 0x16, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF,
];

/// Barrett constant for n, little-endian
///
/// `10000000000000000000000000000E95D1F470FC1EC22D6BAA3A3D5C3`
pub const ORDER_BARRETT: [u8; BARRETT_SIZE] = [
    0xC3, 0xD5, 0xA3, 0xA3, 0xBA, 0xD6, 0x22, 0xEC,
    0xC1, 0x0F, 0x47, 0x1F, 0x5D, 0xE9, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x01,
];

/// Base point x-coordinate, little-endian
///
/// `B70E0CBD6BB4BF7F321390B94A03C1D356C21122343280D6115C1D21`
pub const BASE_POINT_X: [u8; P224_BYTE_SIZE] = [
    0x21, 0x1D, 0x5C, 0x11, 0xD6, 0x80, 0x32, 0x34,
    0x22, 0x11, 0xC2, 0x56, 0xD3, 0xC1, 0x03, 0x4A,
    0xB9, 0x90, 0x13, 0x32, 0x7F, 0xBF, 0xB4, 0x6B,
    0xBD, 0x0C, 0x0E, 0xB7,
];

/// Base point y-coordinate, little-endian
///
/// `BD376388B5F723FB4C22DFE6CD4375A05A07476444D5819985007E34`
pub const BASE_POINT_Y: [u8; P224_BYTE_SIZE] = [
    0x34, 0x7E, 0x00, 0x85, 0x99, 0x81, 0xD5, 0x44,
    0x64, 0x47, 0x07, 0x5A, 0xA0, 0x75, 0x43, 0xCD,
    0xE6, 0xDF, 0x22, 0x4C, 0xFB, 0x23, 0xF7, 0xB5,
    0x88, 0x63, 0x37, 0xBD,
];

const _: () = assert!(P224_BIT_SIZE.div_ceil(8) == P224_BYTE_SIZE);
