//! The stored Barrett constants must equal floor(2^(2 * bits) / m)

use ecdp_params::{get_curve_params, iter_curve_params, CurveId};
use ecdp_tests::{barrett_constant, le_to_biguint};
use num_bigint::BigUint;

#[test]
fn test_modulus_barrett_constants() {
    for params in iter_curve_params() {
        let p = le_to_biguint(params.modulus());
        assert_eq!(
            le_to_biguint(params.modulus_barrett()),
            barrett_constant(&p, params.bit_size()),
            "{}",
            params.name()
        );
    }
}

#[test]
fn test_order_barrett_constants() {
    for params in iter_curve_params() {
        let n = le_to_biguint(params.order());
        assert_eq!(
            le_to_biguint(params.order_barrett()),
            barrett_constant(&n, params.bit_size()),
            "{}",
            params.name()
        );
    }
}

#[test]
fn test_byte_exponent_matches_bit_exponent_for_byte_aligned_curves() {
    for params in iter_curve_params().filter(|p| p.bit_size() % 8 == 0) {
        let p = le_to_biguint(params.modulus());
        let by_bytes = (BigUint::from(1u8) << (16 * params.byte_size())) / &p;
        assert_eq!(le_to_biguint(params.modulus_barrett()), by_bytes, "{}", params.name());
    }
}

#[test]
fn test_p521_barrett_fits_field_width() {
    let params = get_curve_params(CurveId::P521).unwrap();
    // 2^1042 / (2^521 - 1) = 2^521 + 1
    let expected = (BigUint::from(1u8) << 521u32) + 1u8;
    assert_eq!(le_to_biguint(params.modulus_barrett()), expected);
    assert_eq!(params.modulus_barrett().len(), params.byte_size());
    assert!(le_to_biguint(params.order_barrett()).bits() <= 8 * params.byte_size() as u64);
}

#[test]
fn test_barrett_constants_exceed_field() {
    for params in iter_curve_params() {
        let mu = le_to_biguint(params.modulus_barrett());
        assert_eq!(mu.bits(), params.bit_size() as u64 + 1, "{}", params.name());
    }
}
