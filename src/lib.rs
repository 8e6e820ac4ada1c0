//! # ecdp
//!
//! Immutable domain parameters for the NIST prime-field elliptic curves
//! P-192, P-224, P-256, P-384 and P-521, for use by an elliptic-curve
//! arithmetic engine.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecdp = "0.3"
//! ```
//!
//! ```
//! use ecdp::prelude::*;
//!
//! let params = require_curve_params(CurveId::P384)?;
//! assert_eq!(params.byte_size(), 48);
//! assert_eq!(params.order_barrett().len(), 49);
//! # Ok::<(), ecdp::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for the error type; implies `alloc`
//! - `alloc`: hex export of parameter fields
//! - `log`: debug records for rejected curve lookups
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecdp-api`]: Error type and result alias
//! - [`ecdp-internal`]: Byte-order and constant-time helpers
//! - [`ecdp-params`]: The curve parameter registry

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use ecdp_api as api;
pub use ecdp_internal as internal;
pub use ecdp_params as params;

pub use ecdp_api::{Error, Result};
pub use ecdp_params::{get_curve_params, CurveId, DomainParameters, ReductionMode};

/// Common imports for ecdp users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export the registry surface
    pub use crate::params::{
        find_curve_by_modulus, get_curve_params, get_curve_params_by_name,
        get_curve_params_by_ordinal, iter_curve_params, require_curve_params, CurveId,
        DomainParameters, ParamField, ReductionMode, CURVES_COUNT,
    };
}
