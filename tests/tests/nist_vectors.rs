//! Byte-exact comparison of the registry against the published NIST constants

use ecdp_params::{get_curve_params, iter_curve_params, CurveId, DomainParameters, ParamField};
use ecdp_tests::vectors::{NistCurve, NIST_CURVES, NIST_P256};
use ecdp_tests::{hex_to_biguint, le_to_biguint};

fn be_hex_to_le(hex_str: &str) -> Vec<u8> {
    let mut bytes = hex::decode(hex_str).unwrap();
    bytes.reverse();
    bytes
}

fn reference_for(params: &DomainParameters) -> &'static NistCurve {
    NIST_CURVES
        .iter()
        .find(|c| c.name == params.name())
        .copied()
        .unwrap()
}

#[test]
fn test_table_covers_every_reference_curve() {
    let names: Vec<&str> = iter_curve_params().map(|p| p.name()).collect();
    let expected: Vec<&str> = NIST_CURVES.iter().map(|c| c.name).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_fields_are_byte_exact() {
    for params in iter_curve_params() {
        let nist = reference_for(params);
        assert_eq!(params.bit_size(), nist.bits);
        assert_eq!(params.modulus(), be_hex_to_le(nist.p).as_slice(), "{} p", nist.name);
        assert_eq!(params.order(), be_hex_to_le(nist.n).as_slice(), "{} n", nist.name);
        assert_eq!(params.base_point_x(), be_hex_to_le(nist.gx).as_slice(), "{} Gx", nist.name);
        assert_eq!(params.base_point_y(), be_hex_to_le(nist.gy).as_slice(), "{} Gy", nist.name);
    }
}

#[test]
fn test_fields_are_little_endian() {
    for params in iter_curve_params() {
        let nist = reference_for(params);
        assert_eq!(le_to_biguint(params.modulus()), hex_to_biguint(nist.p));
        assert_eq!(le_to_biguint(params.order()), hex_to_biguint(nist.n));
        // Reading the bytes the other way round must not give the prime
        assert_ne!(
            num_bigint::BigUint::from_bytes_be(params.modulus()),
            hex_to_biguint(nist.p),
            "{} modulus must not be stored big-endian",
            nist.name
        );
    }
}

#[test]
fn test_p256_modulus_spot_check() {
    let params = get_curve_params(CurveId::P256).unwrap();
    assert_eq!(
        le_to_biguint(params.modulus()),
        hex_to_biguint("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF")
    );
    assert_eq!(params.modulus()[0], 0xFF);
    assert_eq!(params.modulus()[12], 0x00);
    assert_eq!(params.modulus()[24], 0x01);
    assert_eq!(params.modulus()[31], 0xFF);
}

#[test]
fn test_hex_export_matches_reference() {
    let params = get_curve_params(CurveId::P256).unwrap();
    assert_eq!(params.to_be_hex(ParamField::Modulus), NIST_P256.p);
    assert_eq!(params.to_be_hex(ParamField::Order), NIST_P256.n);
    assert_eq!(params.to_be_hex(ParamField::BasePointX), NIST_P256.gx);
    assert_eq!(params.to_be_hex(ParamField::BasePointY), NIST_P256.gy);
}

#[test]
fn test_write_be_matches_reference() {
    for params in iter_curve_params() {
        let nist = reference_for(params);
        let mut out = vec![0u8; params.byte_size()];
        params.write_be(ParamField::Order, &mut out).unwrap();
        assert_eq!(out, hex::decode(nist.n).unwrap(), "{}", nist.name);
    }
}
