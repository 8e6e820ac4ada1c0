//! NIST P-384 (secp384r1) domain parameters

use super::{P384_BIT_SIZE, P384_BYTE_SIZE};

/// Size of the Barrett constants in bytes
pub const BARRETT_SIZE: usize = P384_BYTE_SIZE + 1;

/// Field prime p, little-endian
///
/// `FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFF`
pub const MODULUS: [u8; P384_BYTE_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Barrett constant for p, little-endian
///
/// `1000000000000000000000000000000000000000000000000000000000000000100000000FFFFFFFFFFFFFFFF00000001`
pub const MODULUS_BARRETT: [u8; BARRETT_SIZE] = [
    0x01, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01,
];

/// Order n of the base point, little-endian
///
/// `FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF581A0DB248B0A77AECEC196ACCC52973`
pub const ORDER: [u8; P384_BYTE_SIZE] = [
    0x73, 0x29, 0xC5, 0xCC, 0x6A, 0x19, 0xEC, 0xEC,
    0x7A, 0xA7, 0xB0, 0x48, 0xB2, 0x0D, 0x1A, 0x58,
    0xDF, 0x2D, 0x37, 0xF4, 0x81, 0x4D, 0x63, 0xC7,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Barrett constant for n, little-endian
///
/// `1000000000000000000000000000000000000000000000000389CB27E0BC8D220A7E5F24DB74F58851313E695333AD68D`
pub const ORDER_BARRETT: [u8; BARRETT_SIZE] = [
    0x8D, 0xD6, 0x3A, 0x33, 0x95, 0xE6, 0x13, 0x13,
    0x85, 0x58, 0x4F, 0xB7, 0x4D, 0xF2, 0xE5, 0xA7,
    0x20, 0xD2, 0xC8, 0x0B, 0x7E, 0xB2, 0x9C, 0x38,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01,
];

/// Base point x-coordinate, little-endian
///
/// `AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A385502F25DBF55296C3A545E3872760AB7`
pub const BASE_POINT_X: [u8; P384_BYTE_SIZE] = [
    0xB7, 0x0A, 0x76, 0x72, 0x38, 0x5E, 0x54, 0x3A,
    0x6C, 0x29, 0x55, 0xBF, 0x5D, 0xF2, 0x02, 0x55,
    0x38, 0x2A, 0x54, 0x82, 0xE0, 0x41, 0xF7, 0x59,
    0x98, 0x9B, 0xA7, 0x8B, 0x62, 0x3B, 0x1D, 0x6E,
    0x74, 0xAD, 0x20, 0xF3, 0x1E, 0xC7, 0xB1, 0x8E,
    0x37, 0x05, 0x8B, 0xBE, 0x22, 0xCA, 0x87, 0xAA,
];

/// Base point y-coordinate, little-endian
///
/// `3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147CE9DA3113B5F0B8C00A60B1CE1D7E819D7A431D7C90EA0E5F`
pub const BASE_POINT_Y: [u8; P384_BYTE_SIZE] = [
    0x5F, 0x0E, 0xEA, 0x90, 0x7C, 0x1D, 0x43, 0x7A,
    0x9D, 0x81, 0x7E, 0x1D, 0xCE, 0xB1, 0x60, 0x0A,
    0xC0, 0xB8, 0xF0, 0xB5, 0x13, 0x31, 0xDA, 0xE9,
    0x7C, 0x14, 0x9A, 0x28, 0xBD, 0x1D, 0xF4, 0xF8,
    0x29, 0xDC, 0x92, 0x92, 0xBF, 0x98, 0x9E, 0x5D,
    0x6F, 0x2C, 0x26, 0x96, 0x4A, 0xDE, 0x17, 0x36,
];

const _: () = assert!(P384_BIT_SIZE.div_ceil(8) == P384_BYTE_SIZE);
