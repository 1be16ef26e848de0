//! # specfit-generate
//!
//! Merges sparse plugin adjustments into a container runtime spec.
//!
//! [`SpecGenerator`] wraps a mutable runtime spec and guarantees that the
//! nested section path down to any touched leaf exists before the leaf is
//! written. On top of the per-field setters it provides
//! [`SpecGenerator::adjust`], the entry point through which a plugin's
//! [`ContainerAdjustment`](specfit_api::ContainerAdjustment) is applied:
//! fields present in the adjustment overwrite the spec, fields absent
//! from it are left exactly as the external spec generator produced them.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod adjust;
pub mod generator;

pub use generator::SpecGenerator;
