//! Container adjustment message types.
//!
//! The nesting mirrors the runtime config: `ContainerAdjustment` →
//! `LinuxAdjustment` → `ResourceAdjustment` → memory and CPU groups.
//! Absent levels and absent leaves mean "no change requested".

use serde::{Deserialize, Serialize};

/// Changes a plugin requests for a single container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerAdjustment {
    /// Linux platform-specific changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linux: Option<LinuxAdjustment>,
}

/// Linux platform-specific changes for a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinuxAdjustment {
    /// Requested cgroup resource limit changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceAdjustment>,
}

/// Requested changes to a container's cgroup resource limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAdjustment {
    /// Memory limit changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryAdjustment>,
    /// CPU limit changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<CpuAdjustment>,
}

/// Requested changes to the memory limit group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryAdjustment {
    /// New hard memory limit in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Requested changes to the CPU limit group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuAdjustment {
    /// New relative CPU weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares: Option<u64>,
    /// New hardcap CPU time in microseconds per period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<i64>,
    /// New hardcap period length in microseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u64>,
    /// New cpuset CPU list, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpus: Option<String>,
    /// New cpuset NUMA memory node list, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mems: Option<String>,
}

impl ContainerAdjustment {
    /// Requests a new hard memory limit in bytes.
    pub fn set_linux_memory_limit(&mut self, limit: i64) {
        self.linux_resources_memory().limit = Some(limit);
    }

    /// Requests a new relative CPU weight.
    pub fn set_linux_cpu_shares(&mut self, shares: u64) {
        self.linux_resources_cpu().shares = Some(shares);
    }

    /// Requests a new CPU hardcap quota in microseconds per period.
    pub fn set_linux_cpu_quota(&mut self, quota: i64) {
        self.linux_resources_cpu().quota = Some(quota);
    }

    /// Requests a new CPU hardcap period length in microseconds.
    pub fn set_linux_cpu_period(&mut self, period: u64) {
        self.linux_resources_cpu().period = Some(period);
    }

    /// Requests a new cpuset CPU list, e.g. `"0-3,7"`.
    pub fn set_linux_cpuset_cpus(&mut self, cpus: impl Into<String>) {
        self.linux_resources_cpu().cpus = Some(cpus.into());
    }

    /// Requests a new cpuset NUMA memory node list, e.g. `"0-1"`.
    pub fn set_linux_cpuset_mems(&mut self, mems: impl Into<String>) {
        self.linux_resources_cpu().mems = Some(mems.into());
    }

    fn linux(&mut self) -> &mut LinuxAdjustment {
        self.linux.get_or_insert_with(LinuxAdjustment::default)
    }

    fn linux_resources(&mut self) -> &mut ResourceAdjustment {
        self.linux()
            .resources
            .get_or_insert_with(ResourceAdjustment::default)
    }

    fn linux_resources_memory(&mut self) -> &mut MemoryAdjustment {
        self.linux_resources()
            .memory
            .get_or_insert_with(MemoryAdjustment::default)
    }

    fn linux_resources_cpu(&mut self) -> &mut CpuAdjustment {
        self.linux_resources()
            .cpu
            .get_or_insert_with(CpuAdjustment::default)
    }
}
