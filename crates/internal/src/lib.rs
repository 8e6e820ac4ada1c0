//! Internal utilities for the ecdp crates
//!
//! Not part of the public API contract; items here may change between minor
//! versions.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_eq, ct_eq_choice};
