//! Error types for the analysis client.
//!
//! # Design
//! Only pre-flight validation can fail a dispatched call: an (operation,
//! flavor) pair missing from the routing table, or a targeted-sentiment call
//! without a target. Transport failures are deliberately not represented
//! here — the client folds them into a fixed JSON error body so callers of a
//! dispatched call always receive a structured value.

use std::fmt;

use crate::endpoints::Flavor;

/// Errors raised before any network activity takes place.
#[derive(Debug)]
pub enum ApiError {
    /// The requested flavor is not registered for this operation.
    FlavorNotSupported {
        /// Human label of the rejected operation.
        operation: &'static str,
        flavor: Flavor,
    },

    /// Targeted sentiment was called without a non-empty target.
    MissingTarget,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::FlavorNotSupported { operation, flavor } => {
                write!(f, "{operation} for {flavor} not available")
            }
            ApiError::MissingTarget => {
                write!(f, "targeted sentiment requires a non-empty target")
            }
        }
    }
}

impl std::error::Error for ApiError {}
