//! # specfit-api
//!
//! Message types through which out-of-process plugins request changes to
//! a container about to be created.
//!
//! An adjustment is a sparse mirror of the runtime config subtree it may
//! affect: every level is optional, and every leaf is an `Option<T>` so
//! that a plugin can express "set this field to zero" and "leave this
//! field alone" as two different messages. Plugins build adjustments
//! through the setter helpers on [`ContainerAdjustment`], which allocate
//! the nested structure on demand.

pub mod adjustment;

pub use adjustment::{
    ContainerAdjustment, CpuAdjustment, LinuxAdjustment, MemoryAdjustment, ResourceAdjustment,
};
