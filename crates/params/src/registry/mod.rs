//! Curve parameter registry
//!
//! A fixed table of [`DomainParameters`] indexed by [`CurveId`] ordinal. The
//! table is a `static`, so lookups are a bounds comparison plus an index and
//! are safe from any number of threads.

use ecdp_api::{Error, Result};
use ecdp_internal::constant_time::ct_eq;
use ecdp_internal::endian::be_to_le_into;

use crate::curve::{CurveId, DomainParameters, ReductionMode, CURVES_COUNT, VALID_CURVE_ORDINALS};
use crate::nist::{
    p192, p224, p256, p384, p521, MAX_BYTE_SIZE, P192_BIT_SIZE, P192_BYTE_SIZE, P224_BIT_SIZE,
    P224_BYTE_SIZE, P256_BIT_SIZE, P256_BYTE_SIZE, P384_BIT_SIZE, P384_BYTE_SIZE, P521_BIT_SIZE,
    P521_BYTE_SIZE,
};

const EMPTY: &[u8] = &[];

const TABLE: [DomainParameters; CURVES_COUNT as usize] = [
    // Index 0 keeps the `None` ordinal reserved; lookups never return it.
    DomainParameters {
        id: CurveId::None,
        byte_size: 0,
        bit_size: 0,
        name: "",
        reduction_mode: ReductionMode::CurveSpecific,
        modulus: EMPTY,
        modulus_barrett: EMPTY,
        order: EMPTY,
        order_barrett: EMPTY,
        base_point_x: EMPTY,
        base_point_y: EMPTY,
    },
    DomainParameters {
        id: CurveId::P192,
        byte_size: P192_BYTE_SIZE,
        bit_size: P192_BIT_SIZE,
        name: "NIST P-192",
        reduction_mode: ReductionMode::CurveSpecific,
        modulus: &p192::MODULUS,
        modulus_barrett: &p192::MODULUS_BARRETT,
        order: &p192::ORDER,
        order_barrett: &p192::ORDER_BARRETT,
        base_point_x: &p192::BASE_POINT_X,
        base_point_y: &p192::BASE_POINT_Y,
    },
    DomainParameters {
        id: CurveId::P224,
        byte_size: P224_BYTE_SIZE,
        bit_size: P224_BIT_SIZE,
        name: "NIST P-224",
        reduction_mode: ReductionMode::CurveSpecific,
        modulus: &p224::MODULUS,
        modulus_barrett: &p224::MODULUS_BARRETT,
        order: &p224::ORDER,
        order_barrett: &p224::ORDER_BARRETT,
        base_point_x: &p224::BASE_POINT_X,
        base_point_y: &p224::BASE_POINT_Y,
    },
    DomainParameters {
        id: CurveId::P256,
        byte_size: P256_BYTE_SIZE,
        bit_size: P256_BIT_SIZE,
        name: "NIST P-256",
        reduction_mode: ReductionMode::Barrett,
        modulus: &p256::MODULUS,
        modulus_barrett: &p256::MODULUS_BARRETT,
        order: &p256::ORDER,
        order_barrett: &p256::ORDER_BARRETT,
        base_point_x: &p256::BASE_POINT_X,
        base_point_y: &p256::BASE_POINT_Y,
    },
    DomainParameters {
        id: CurveId::P384,
        byte_size: P384_BYTE_SIZE,
        bit_size: P384_BIT_SIZE,
        name: "NIST P-384",
        reduction_mode: ReductionMode::Barrett,
        modulus: &p384::MODULUS,
        modulus_barrett: &p384::MODULUS_BARRETT,
        order: &p384::ORDER,
        order_barrett: &p384::ORDER_BARRETT,
        base_point_x: &p384::BASE_POINT_X,
        base_point_y: &p384::BASE_POINT_Y,
    },
    DomainParameters {
        id: CurveId::P521,
        byte_size: P521_BYTE_SIZE,
        bit_size: P521_BIT_SIZE,
        name: "NIST P-521",
        // The prime is a Mersenne number, but the arithmetic engine only
        // implements Barrett reduction for it.
        reduction_mode: ReductionMode::Barrett,
        modulus: &p521::MODULUS,
        modulus_barrett: &p521::MODULUS_BARRETT,
        order: &p521::ORDER,
        order_barrett: &p521::ORDER_BARRETT,
        base_point_x: &p521::BASE_POINT_X,
        base_point_y: &p521::BASE_POINT_Y,
    },
];

// Row i must describe ordinal i, and the fixed-width fields must match the
// declared byte size.
const _: () = {
    let mut i = 0;
    while i < TABLE.len() {
        let row = &TABLE[i];
        assert!(row.id as usize == i);
        assert!(row.modulus.len() == row.byte_size);
        assert!(row.order.len() == row.byte_size);
        assert!(row.base_point_x.len() == row.byte_size);
        assert!(row.base_point_y.len() == row.byte_size);
        i += 1;
    }
};

/// The process-wide parameter table, indexed by [`CurveId`] ordinal
pub static DOMAIN_PARAMS: [DomainParameters; CURVES_COUNT as usize] = TABLE;

/// Look up the parameters of `id`.
///
/// Returns `None` for [`CurveId::None`]; every other identifier resolves.
#[inline]
pub fn get_curve_params(id: CurveId) -> Option<&'static DomainParameters> {
    get_curve_params_by_ordinal(id.ordinal())
}

/// Look up parameters by raw ordinal, e.g. one decoded from a key blob.
///
/// Anything outside `(None, CURVES_COUNT)` yields `None`.
#[inline]
pub fn get_curve_params_by_ordinal(ordinal: u32) -> Option<&'static DomainParameters> {
    if !VALID_CURVE_ORDINALS.contains(&ordinal) {
        return None;
    }
    DOMAIN_PARAMS.get(ordinal as usize)
}

/// Like [`get_curve_params`], but reports absence as
/// [`Error::UnsupportedCurve`] so callers can propagate with `?`.
pub fn require_curve_params(id: CurveId) -> Result<&'static DomainParameters> {
    get_curve_params(id).ok_or_else(|| {
        log_unsupported!("rejecting request for unsupported curve {}", id);
        Error::unsupported(id.ordinal())
    })
}

/// Look up parameters by any name accepted by [`CurveId::from_name`]
pub fn get_curve_params_by_name(name: &str) -> Option<&'static DomainParameters> {
    CurveId::from_name(name).and_then(get_curve_params)
}

/// Every supported record, in ordinal order
pub fn iter_curve_params() -> impl Iterator<Item = &'static DomainParameters> {
    DOMAIN_PARAMS[VALID_CURVE_ORDINALS.start as usize..VALID_CURVE_ORDINALS.end as usize].iter()
}

/// Identify a curve from its little-endian field prime.
///
/// The candidate is compared against every table entry in constant time.
pub fn find_curve_by_modulus(modulus_le: &[u8]) -> Option<CurveId> {
    let mut found = None;
    for params in iter_curve_params() {
        if ct_eq(params.modulus, modulus_le) {
            found = Some(params.id);
        }
    }
    found
}

/// Identify a curve from its big-endian field prime.
pub fn find_curve_by_modulus_be(modulus_be: &[u8]) -> Option<CurveId> {
    let mut le = [0u8; MAX_BYTE_SIZE];
    let len = be_to_le_into(modulus_be, &mut le)?;
    find_curve_by_modulus(&le[..len])
}

impl CurveId {
    /// Shorthand for [`get_curve_params`]
    #[inline]
    pub fn params(self) -> Option<&'static DomainParameters> {
        get_curve_params(self)
    }
}
