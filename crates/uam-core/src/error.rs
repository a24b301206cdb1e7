//! Core error type.
//!
//! Returned by the `FromStr` impls on core types.  Configuration files go
//! through serde instead, so sub-crates report their own errors and never
//! see this one.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown transport mode {0:?}")]
    UnknownMode(String),
}
