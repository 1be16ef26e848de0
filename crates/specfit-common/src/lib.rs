//! # specfit-common
//!
//! Shared error definitions used across the specfit workspace.
//!
//! This crate is the leaf of the dependency graph — it depends on no other
//! internal crate and provides the error primitives that the model and
//! generator crates build upon.

pub mod error;

pub use error::{Result, SpecfitError};
