use crate::domain::{DeviceId, PolicyId};
use std::collections::BTreeSet;

/// A policy reduced to the parts that decide which devices it targets.
#[derive(PartialEq, Debug, Clone)]
pub struct Policy {
    pub id: PolicyId,
    pub name: String,
    pub applies_to_all_devices: bool,
    /// Parsed from `scope.computers`, not consulted when deciding applicability.
    #[allow(dead_code)]
    pub scoped_device_ids: BTreeSet<DeviceId>,
    pub scoped_group_names: BTreeSet<String>,
}

#[cfg(test)]
impl Policy {
    pub fn for_all(id: PolicyId, name: &str) -> Self {
        Policy {
            id,
            name: name.to_string(),
            applies_to_all_devices: true,
            scoped_device_ids: BTreeSet::new(),
            scoped_group_names: BTreeSet::new(),
        }
    }

    pub fn for_groups(id: PolicyId, name: &str, groups: &[&str]) -> Self {
        Policy {
            id,
            name: name.to_string(),
            applies_to_all_devices: false,
            scoped_device_ids: BTreeSet::new(),
            scoped_group_names: groups.iter().map(|g| g.to_string()).collect(),
        }
    }
}
