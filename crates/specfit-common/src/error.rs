//! Unified error types for the specfit workspace.
//!
//! Adjustment application is total over well-formed input today, so the
//! variants here exist for the validation surface callers are promised in
//! the `Result` signatures of the generator crate.

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum SpecfitError {
    /// An adjustment failed validation against the target spec.
    ///
    /// Not produced yet: adjustment application is currently total, and
    /// this variant is what a validation pass (mutually exclusive
    /// fields, runaway limits) will surface through the existing
    /// `Result` signatures.
    #[error("invalid adjustment: {message}")]
    InvalidAdjustment {
        /// Description of the rejected adjustment.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SpecfitError>;
