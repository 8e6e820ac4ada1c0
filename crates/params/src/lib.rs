//! Domain parameters for the NIST prime-field curves P-192, P-224, P-256,
//! P-384 and P-521.
//!
//! The data is a compiled-in table consumed by an elliptic-curve arithmetic
//! engine: field prime, group order, base point and the Barrett reduction
//! constants for both moduli, all stored little-endian.
//!
//! ```
//! use ecdp_params::{get_curve_params, CurveId, ReductionMode};
//!
//! let p256 = get_curve_params(CurveId::P256).unwrap();
//! assert_eq!(p256.name(), "NIST P-256");
//! assert_eq!(p256.byte_size(), 32);
//! assert_eq!(p256.reduction_mode(), ReductionMode::Barrett);
//!
//! assert!(get_curve_params(CurveId::None).is_none());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Debug record for rejected lookups; compiled out without the `log` feature.
macro_rules! log_unsupported {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        {
            log::debug!($($arg)*);
        }
    };
}

pub mod curve;
pub mod nist;
pub mod registry;

pub use curve::{
    CurveId, DomainParameters, ParamField, ReductionMode, CURVES_COUNT, VALID_CURVE_ORDINALS,
};
pub use registry::{
    find_curve_by_modulus, find_curve_by_modulus_be, get_curve_params,
    get_curve_params_by_name, get_curve_params_by_ordinal, iter_curve_params,
    require_curve_params, DOMAIN_PARAMS,
};
