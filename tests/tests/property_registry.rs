//! Property-based tests for the lookup contract

use ecdp_api::Error;
use ecdp_params::{
    find_curve_by_modulus, get_curve_params_by_name, get_curve_params_by_ordinal, CurveId,
    ParamField, CURVES_COUNT, VALID_CURVE_ORDINALS,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn lookup_is_total_over_u32(ordinal in any::<u32>()) {
        match get_curve_params_by_ordinal(ordinal) {
            Some(params) => {
                prop_assert!(VALID_CURVE_ORDINALS.contains(&ordinal));
                prop_assert_eq!(params.id().ordinal(), ordinal);
            }
            None => prop_assert!(ordinal == 0 || ordinal >= CURVES_COUNT),
        }
    }

    #[test]
    fn try_from_agrees_with_lookup(ordinal in any::<u32>()) {
        let decoded = CurveId::try_from(ordinal);
        match get_curve_params_by_ordinal(ordinal) {
            Some(params) => prop_assert_eq!(decoded, Ok(params.id())),
            None => prop_assert_eq!(decoded, Err(Error::UnsupportedCurve { ordinal })),
        }
    }

    #[test]
    fn wide_ordinals_never_alias(high in 1u32..=0x00FF_FFFF, low in 0u8..=255) {
        // A valid low byte under nonzero high bits must stay absent
        let ordinal = (high << 8) | u32::from(low);
        prop_assert!(get_curve_params_by_ordinal(ordinal).is_none());
    }

    #[test]
    fn unknown_names_are_rejected(name in "[a-z]{1,12}") {
        let known = ["p192", "p224", "p256", "p384", "p521", "secp192r1", "secp224r1",
            "secp256r1", "secp384r1", "secp521r1", "prime192v1", "prime256v1"];
        prop_assume!(!known.contains(&name.as_str()));
        prop_assert!(get_curve_params_by_name(&name).is_none());
    }

    #[test]
    fn name_lookup_ignores_case(upper in proptest::bool::ANY, index in 0usize..5) {
        let id = CurveId::supported().nth(index).unwrap();
        let label = id.params().unwrap().name();
        let name = if upper { label.to_ascii_uppercase() } else { label.to_ascii_lowercase() };
        prop_assert_eq!(CurveId::from_name(&name), Some(id));
    }

    #[test]
    fn random_moduli_are_not_identified(bytes in prop::collection::vec(any::<u8>(), 0..=67)) {
        let matched = find_curve_by_modulus(&bytes);
        if let Some(id) = matched {
            prop_assert_eq!(id.params().unwrap().modulus(), bytes.as_slice());
        }
    }

    #[test]
    fn write_be_accepts_any_large_enough_buffer(index in 0usize..5, extra in 0usize..16) {
        let params = CurveId::supported().nth(index).unwrap().params().unwrap();
        for field in ParamField::ALL {
            let len = params.field(field).len();
            let mut out = vec![0xAAu8; len + extra];
            prop_assert_eq!(params.write_be(field, &mut out), Ok(len));
            prop_assert!(out[..extra].iter().all(|&b| b == 0));
            let mut back: Vec<u8> = out[extra..].to_vec();
            back.reverse();
            prop_assert_eq!(back.as_slice(), params.field(field));
        }
    }
}
