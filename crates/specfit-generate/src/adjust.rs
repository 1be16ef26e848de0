//! Application of plugin adjustments to the wrapped spec.
//!
//! Merge rule, uniform across every field: present in the adjustment
//! means overwrite, absent means leave the spec's value alone. `Some(0)`
//! is present.

use specfit_api::{ContainerAdjustment, ResourceAdjustment};
use specfit_common::Result;

use crate::generator::SpecGenerator;

impl SpecGenerator<'_> {
    /// Applies a plugin's adjustment to the wrapped spec.
    ///
    /// A `None` adjustment, or one without a Linux section, succeeds
    /// without touching the spec.
    ///
    /// # Errors
    ///
    /// Cannot fail today; the `Result` carries future adjustment
    /// validation to the caller unmodified.
    pub fn adjust(&mut self, adjustment: Option<&ContainerAdjustment>) -> Result<()> {
        let Some(adjustment) = adjustment else {
            return Ok(());
        };
        let Some(linux) = adjustment.linux.as_ref() else {
            return Ok(());
        };
        self.adjust_resources(linux.resources.as_ref())
    }

    /// Merges requested resource limit changes into the spec.
    ///
    /// CPU fields are merged first, then memory. A merged memory limit
    /// pins the swap limit to the same value.
    ///
    /// # Errors
    ///
    /// Cannot fail today; the `Result` carries future adjustment
    /// validation to the caller unmodified.
    pub fn adjust_resources(&mut self, resources: Option<&ResourceAdjustment>) -> Result<()> {
        let Some(resources) = resources else {
            return Ok(());
        };

        if let Some(cpu) = resources.cpu.as_ref() {
            if let Some(shares) = cpu.shares {
                self.set_linux_resources_cpu_shares(shares);
            }
            if let Some(quota) = cpu.quota {
                self.set_linux_resources_cpu_quota(quota);
            }
            if let Some(period) = cpu.period {
                self.set_linux_resources_cpu_period(period);
            }
            if let Some(cpus) = cpu.cpus.as_deref() {
                self.set_linux_resources_cpu_cpus(cpus);
            }
            if let Some(mems) = cpu.mems.as_deref() {
                self.set_linux_resources_cpu_mems(mems);
            }
            tracing::debug!("cpu limits adjusted");
        }

        if let Some(memory) = resources.memory.as_ref() {
            if let Some(limit) = memory.limit {
                self.apply_memory_limit(limit);
            }
        }

        Ok(())
    }

    /// Applies a new hard memory limit together with its derived swap
    /// limit.
    ///
    /// The cgroup layer rejects a swap ceiling below the hard limit, so
    /// both fields move as one pair: swap always takes the value just
    /// written to the limit, whatever it held before.
    fn apply_memory_limit(&mut self, limit: i64) {
        self.set_linux_resources_memory_limit(limit);
        self.set_linux_resources_memory_swap(limit);
        tracing::debug!(limit, "memory limit adjusted, swap pinned to limit");
    }
}

#[cfg(test)]
mod tests {
    use specfit_api::{CpuAdjustment, LinuxAdjustment, MemoryAdjustment};
    use specfit_oci::Spec;

    use super::*;

    #[test]
    fn resources_absent_is_a_noop() {
        let mut spec = Spec::default();
        SpecGenerator::new(&mut spec)
            .adjust_resources(None)
            .expect("should apply");
        assert_eq!(spec, Spec::default());
    }

    #[test]
    fn empty_groups_allocate_nothing() {
        let mut spec = Spec::default();
        let resources = ResourceAdjustment {
            memory: Some(MemoryAdjustment::default()),
            cpu: None,
        };
        SpecGenerator::new(&mut spec)
            .adjust_resources(Some(&resources))
            .expect("should apply");
        assert_eq!(spec, Spec::default());
    }

    #[test]
    fn cpu_group_merges_without_memory_group() {
        let mut spec = Spec::default();
        let adjustment = ContainerAdjustment {
            linux: Some(LinuxAdjustment {
                resources: Some(ResourceAdjustment {
                    memory: None,
                    cpu: Some(CpuAdjustment {
                        period: Some(0),
                        ..CpuAdjustment::default()
                    }),
                }),
            }),
        };

        SpecGenerator::new(&mut spec)
            .adjust(Some(&adjustment))
            .expect("should apply");

        let resources = spec
            .linux
            .and_then(|l| l.resources)
            .expect("resources allocated");
        assert_eq!(
            resources.cpu.as_ref().and_then(|c| c.period),
            Some(0),
            "explicit zero period must be applied"
        );
        assert_eq!(resources.memory, None, "memory group must stay absent");
    }
}
