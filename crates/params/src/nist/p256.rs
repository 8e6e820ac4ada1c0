//! NIST P-256 (secp256r1 / prime256v1) domain parameters
//!
//! p = 2^256 - 2^224 + 2^192 + 2^96 - 1

use super::{P256_BIT_SIZE, P256_BYTE_SIZE};

/// Size of the Barrett constants in bytes
pub const BARRETT_SIZE: usize = P256_BYTE_SIZE + 1;

/// Field prime p, little-endian
///
/// `FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF`
pub const MODULUS: [u8; P256_BYTE_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Barrett constant for p, little-endian
///
/// `100000000FFFFFFFFFFFFFFFEFFFFFFFEFFFFFFFEFFFFFFFF0000000000000003`
pub const MODULUS_BARRETT: [u8; BARRETT_SIZE] = [
    0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF,
    0xFE, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
    0x01,
];

/// Order n of the base point, little-endian
///
/// `FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551`
pub const ORDER: [u8; P256_BYTE_SIZE] = [
    0x51, 0x25, 0x63, 0xFC, 0xC2, 0xCA, 0xB9, 0xF3,
    0x84, 0x9E, 0x17, 0xA7, 0xAD, 0xFA, 0xE6, 0xBC,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Barrett constant for n, little-endian
///
/// `100000000FFFFFFFFFFFFFFFEFFFFFFFF43190552DF1A6C21012FFD85EEDF9BFE`
pub const ORDER_BARRETT: [u8; BARRETT_SIZE] = [
    0xFE, 0x9B, 0xDF, 0xEE, 0x85, 0xFD, 0x2F, 0x01,
    0x21, 0x6C, 0x1A, 0xDF, 0x52, 0x05, 0x19, 0x43,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
    0x01,
];

/// Base point x-coordinate, little-endian
///
/// `6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296`
pub const BASE_POINT_X: [u8; P256_BYTE_SIZE] = [
    0x96, 0xC2, 0x98, 0xD8, 0x45, 0x39, 0xA1, 0xF4,
    0xA0, 0x33, 0xEB, 0x2D, 0x81, 0x7D, 0x03, 0x77,
    0xF2, 0x40, 0xA4, 0x63, 0xE5, 0xE6, 0xBC, 0xF8,
    0x47, 0x42, 0x2C, 0xE1, 0xF2, 0xD1, 0x17, 0x6B,
];

/// Base point y-coordinate, little-endian
///
/// `4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5`
pub const BASE_POINT_Y: [u8; P256_BYTE_SIZE] = [
    0xF5, 0x51, 0xBF, 0x37, 0x68, 0x40, 0xB6, 0xCB,
    0xCE, 0x5E, 0x31, 0x6B, 0x57, 0x33, 0xCE, 0x2B,
    0x16, 0x9E, 0x0F, 0x7C, 0x4A, 0xEB, 0xE7, 0x8E,
    0x9B, 0x7F, 0x1A, 0xFE, 0xE2, 0x42, 0xE3, 0x4F,
];

const _: () = assert!(P256_BIT_SIZE.div_ceil(8) == P256_BYTE_SIZE);
