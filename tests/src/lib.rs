//! Testing utilities and benchmarks for the ecdp crates

use num_bigint::BigUint;
use num_traits::Num;

/// Interpret a little-endian byte string as an unsigned integer
pub fn le_to_biguint(le: &[u8]) -> BigUint {
    BigUint::from_bytes_le(le)
}

/// Parse a big-endian hex constant from [`vectors`]
pub fn hex_to_biguint(hex: &str) -> BigUint {
    BigUint::from_str_radix(hex, 16).expect("reference vectors are valid hex")
}

/// floor(2^(2 * bits) / m), the Barrett constant for a `bits`-bit modulus
pub fn barrett_constant(m: &BigUint, bits: usize) -> BigUint {
    (BigUint::from(1u8) << (2 * bits)) / m
}

/// Check y^2 = x^3 - 3x + b (mod p)
pub fn on_short_weierstrass_a3(x: &BigUint, y: &BigUint, b: &BigUint, p: &BigUint) -> bool {
    let lhs = (y * y) % p;
    let three_x = (BigUint::from(3u8) * x) % p;
    // add p before subtracting to stay non-negative
    let rhs = ((x * x * x) % p + p - three_x + b) % p;
    lhs == rhs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barrett_constant_small() {
        // floor(2^16 / 251) = 261
        assert_eq!(barrett_constant(&BigUint::from(251u32), 8), BigUint::from(261u32));
    }

    #[test]
    fn test_curve_check_small_field() {
        // y^2 = x^3 - 3x + 3 over F_7: (1, 1) gives 1 == 1
        let p = BigUint::from(7u8);
        let b = BigUint::from(3u8);
        assert!(on_short_weierstrass_a3(&BigUint::from(1u8), &BigUint::from(1u8), &b, &p));
        assert!(!on_short_weierstrass_a3(&BigUint::from(1u8), &BigUint::from(2u8), &b, &p));
    }

    #[test]
    fn test_le_and_hex_agree() {
        assert_eq!(le_to_biguint(&[0x34, 0x12]), hex_to_biguint("1234"));
    }
}
