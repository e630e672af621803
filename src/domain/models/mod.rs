pub mod account;
pub mod appointment;
pub mod auth;
pub mod business;
pub mod professional;

use thiserror::Error;

/// Raised when a stored or submitted label does not name a known variant.
#[derive(Debug, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
