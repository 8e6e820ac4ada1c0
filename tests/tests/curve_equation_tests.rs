//! Base points satisfy y^2 = x^3 - 3x + b (mod p)

use ecdp_params::iter_curve_params;
use ecdp_tests::vectors::NIST_CURVES;
use ecdp_tests::{hex_to_biguint, le_to_biguint, on_short_weierstrass_a3};
use num_bigint::BigUint;

#[test]
fn test_base_points_on_curve() {
    for (params, nist) in iter_curve_params().zip(NIST_CURVES.iter()) {
        assert_eq!(params.name(), nist.name);
        let p = le_to_biguint(params.modulus());
        let x = le_to_biguint(params.base_point_x());
        let y = le_to_biguint(params.base_point_y());
        let b = hex_to_biguint(nist.b);
        assert!(x < p && y < p, "{} base point not reduced", nist.name);
        assert!(on_short_weierstrass_a3(&x, &y, &b, &p), "{}", nist.name);
    }
}

#[test]
fn test_perturbed_base_point_is_rejected() {
    for (params, nist) in iter_curve_params().zip(NIST_CURVES.iter()) {
        let p = le_to_biguint(params.modulus());
        let x = le_to_biguint(params.base_point_x());
        // A single flipped byte must break the relation
        let mut y_bytes = params.base_point_y().to_vec();
        y_bytes[0] ^= 0x01;
        let y = BigUint::from_bytes_le(&y_bytes);
        let b = hex_to_biguint(nist.b);
        assert!(!on_short_weierstrass_a3(&x, &y, &b, &p), "{}", nist.name);
    }
}

#[test]
fn test_order_is_below_modulus_bound() {
    // Hasse: |n - (p + 1)| <= 2 sqrt(p); for cofactor 1 the order shares the bit length of p
    for params in iter_curve_params() {
        let p = le_to_biguint(params.modulus());
        let n = le_to_biguint(params.order());
        assert_eq!(p.bits(), n.bits(), "{}", params.name());
        assert_ne!(p, n);
    }
}
