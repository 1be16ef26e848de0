//! # specfit-oci
//!
//! Typed model of the OCI runtime specification subtree that specfit
//! reads and mutates.
//!
//! The model covers the resource-limit subtree (`linux.resources` with
//! its `memory` and `cpu` groups) plus the immediate neighbors a real
//! runtime config carries. Every adjustable field is an `Option<T>` so
//! that "absent" and "present with zero value" stay distinct types of
//! input — the spec generator relies on this to merge sparse overrides
//! without clobbering untouched fields.
//!
//! Field names serialize to the OCI runtime-spec JSON wire names, with
//! absent fields omitted entirely.

pub mod spec;

pub use spec::{Linux, LinuxCpu, LinuxMemory, LinuxPids, LinuxResources, Process, Root, Spec};
