//! Runtime spec data model.
//!
//! Struct-per-section mirror of the OCI runtime config subtree that the
//! generator crate walks. Sections are `Option`al at every level so a
//! partially populated config deserializes and merges without dummy
//! placeholder values.

use serde::{Deserialize, Serialize};

/// Root of a container runtime configuration.
///
/// Produced by an external spec generator, mutated in place by the
/// adjustment machinery, and eventually serialized to the runtime's
/// `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spec {
    /// OCI runtime spec version this config conforms to.
    #[serde(rename = "ociVersion", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Container process description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<Process>,
    /// Root filesystem for the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<Root>,
    /// Hostname inside the container's UTS namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Linux platform-specific configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linux: Option<Linux>,
}

/// Process to run inside the container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Command and arguments executed as the container entrypoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    /// Environment variables in `KEY=value` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<String>>,
    /// Working directory of the entrypoint, absolute inside the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
}

/// Root filesystem configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    /// Path to the root filesystem on the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Whether the root filesystem is mounted read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
}

/// Linux platform section of the runtime config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Linux {
    /// Cgroup resource limits for the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<LinuxResources>,
    /// Path of the container's cgroup, relative to the cgroup mount.
    #[serde(rename = "cgroupsPath", skip_serializing_if = "Option::is_none")]
    pub cgroups_path: Option<String>,
}

/// Cgroup resource limit groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinuxResources {
    /// Memory limit group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<LinuxMemory>,
    /// CPU limit group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<LinuxCpu>,
    /// Task count limit group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pids: Option<LinuxPids>,
}

/// Memory limit group of the cgroup resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinuxMemory {
    /// Hard memory limit in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Soft memory limit (reservation) in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<i64>,
    /// Combined memory plus swap limit in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap: Option<i64>,
    /// Swappiness hint for the kernel, 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swappiness: Option<u64>,
    /// Whether the OOM killer is disabled for this container.
    #[serde(rename = "disableOOMKiller", skip_serializing_if = "Option::is_none")]
    pub disable_oom_killer: Option<bool>,
}

/// CPU limit group of the cgroup resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinuxCpu {
    /// Relative CPU weight versus other cgroups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares: Option<u64>,
    /// Hardcap CPU time in microseconds allowed per period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<i64>,
    /// Length of the hardcap period in microseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u64>,
    /// Cpuset list of CPUs the container may run on, e.g. `"0-3,7"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpus: Option<String>,
    /// Cpuset list of NUMA memory nodes, e.g. `"0-1"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mems: Option<String>,
}

/// Task count limit group of the cgroup resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinuxPids {
    /// Maximum number of tasks in the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn deserialize_oci_wire_names() {
        let json = r#"{
            "ociVersion": "1.1.0",
            "linux": {
                "cgroupsPath": "/kubepods/burstable/c1",
                "resources": {
                    "memory": { "limit": 536870912, "disableOOMKiller": true },
                    "cpu": { "shares": 1024, "cpus": "0-3" }
                }
            }
        }"#;

        let spec: Spec = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(spec.version.as_deref(), Some("1.1.0"));

        let linux = spec.linux.expect("linux section");
        assert_eq!(linux.cgroups_path.as_deref(), Some("/kubepods/burstable/c1"));

        let resources = linux.resources.expect("resources section");
        let memory = resources.memory.expect("memory group");
        assert_eq!(memory.limit, Some(536_870_912));
        assert_eq!(memory.disable_oom_killer, Some(true));
        assert_eq!(memory.swap, None);

        let cpu = resources.cpu.expect("cpu group");
        assert_eq!(cpu.shares, Some(1024));
        assert_eq!(cpu.cpus.as_deref(), Some("0-3"));
        assert_eq!(cpu.quota, None);
    }

    #[test]
    fn serialize_omits_absent_fields() {
        let spec = Spec {
            linux: Some(Linux {
                resources: Some(LinuxResources {
                    memory: Some(LinuxMemory {
                        limit: Some(0),
                        ..LinuxMemory::default()
                    }),
                    ..LinuxResources::default()
                }),
                ..Linux::default()
            }),
            ..Spec::default()
        };

        let json = serde_json::to_string(&spec).expect("should serialize");
        assert_eq!(json, r#"{"linux":{"resources":{"memory":{"limit":0}}}}"#);
    }
}
