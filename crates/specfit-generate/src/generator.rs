//! Lazy-allocating builder over a mutable runtime spec.
//!
//! The external spec generator may hand over a config whose `linux`,
//! `resources`, or group sections are still absent. Every accessor here
//! allocates missing ancestors on first touch and never replaces a
//! section that already exists, so sibling fields survive any write.

use specfit_oci::{Linux, LinuxCpu, LinuxMemory, LinuxResources, Spec};

/// Builder over a mutable runtime spec.
///
/// Holds the exclusive borrow for the duration of an adjustment, which is
/// what makes a sequence of merges safe without any internal locking.
#[derive(Debug)]
pub struct SpecGenerator<'a> {
    spec: &'a mut Spec,
}

impl<'a> SpecGenerator<'a> {
    /// Wraps the given spec for adjustment.
    #[must_use]
    pub fn new(spec: &'a mut Spec) -> Self {
        Self { spec }
    }

    /// Read access to the wrapped spec.
    #[must_use]
    pub fn spec(&self) -> &Spec {
        self.spec
    }

    /// Linux section, allocated on first touch.
    pub fn linux(&mut self) -> &mut Linux {
        self.spec.linux.get_or_insert_with(Linux::default)
    }

    /// Cgroup resources section, allocated on first touch.
    pub fn linux_resources(&mut self) -> &mut LinuxResources {
        self.linux().resources.get_or_insert_with(LinuxResources::default)
    }

    /// Memory limit group, allocated on first touch.
    pub fn linux_resources_memory(&mut self) -> &mut LinuxMemory {
        self.linux_resources()
            .memory
            .get_or_insert_with(LinuxMemory::default)
    }

    /// CPU limit group, allocated on first touch.
    pub fn linux_resources_cpu(&mut self) -> &mut LinuxCpu {
        self.linux_resources()
            .cpu
            .get_or_insert_with(LinuxCpu::default)
    }

    /// Sets the hard memory limit in bytes.
    pub fn set_linux_resources_memory_limit(&mut self, limit: i64) {
        self.linux_resources_memory().limit = Some(limit);
    }

    /// Sets the combined memory plus swap limit in bytes.
    pub fn set_linux_resources_memory_swap(&mut self, swap: i64) {
        self.linux_resources_memory().swap = Some(swap);
    }

    /// Sets the relative CPU weight.
    pub fn set_linux_resources_cpu_shares(&mut self, shares: u64) {
        self.linux_resources_cpu().shares = Some(shares);
    }

    /// Sets the hardcap CPU time in microseconds per period.
    pub fn set_linux_resources_cpu_quota(&mut self, quota: i64) {
        self.linux_resources_cpu().quota = Some(quota);
    }

    /// Sets the hardcap period length in microseconds.
    pub fn set_linux_resources_cpu_period(&mut self, period: u64) {
        self.linux_resources_cpu().period = Some(period);
    }

    /// Sets the cpuset CPU list.
    pub fn set_linux_resources_cpu_cpus(&mut self, cpus: impl Into<String>) {
        self.linux_resources_cpu().cpus = Some(cpus.into());
    }

    /// Sets the cpuset NUMA memory node list.
    pub fn set_linux_resources_cpu_mems(&mut self, mems: impl Into<String>) {
        self.linux_resources_cpu().mems = Some(mems.into());
    }
}
