//! Error types for plan computation.
//!
//! Invalid input is the only failure mode: every derivation past the
//! `compute_dimensions` boundary is deterministic arithmetic over validated
//! values. Geometry degeneracies (a corner radius larger than its incident
//! edges allow) are clamped, not reported.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Scale length must be a finite value between 26 and 70 cm.
    #[error("invalid scale length {0} cm (expected a finite value in 26..=70)")]
    InvalidScaleLength(f64),

    /// At least one string is required.
    #[error("invalid string count {0} (expected at least 1)")]
    InvalidStringCount(u32),

    /// Serializing a computed plan to JSON failed.
    #[error("json serialization error: {0}")]
    Serialize(String),
}
