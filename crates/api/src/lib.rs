//! Public error surface for the ecdp crates
//!
//! This crate holds the error type returned by every fallible operation in the
//! ecdp ecosystem. It is `no_std` compatible; with the `std` feature the error
//! implements `std::error::Error` through `thiserror`.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
