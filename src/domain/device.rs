use crate::domain::{DeviceId, InventoryFields, ProfileId};

/// A device as read from the JSS, before any aggregation.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct DeviceRecord {
    pub id: DeviceId,
    pub name: String,
    pub owner: String,
    pub last_checkin: Option<String>,
    pub last_inventory: Option<String>,
    pub inventory: InventoryFields,
    pub printers: Vec<String>,
    pub groups: Vec<String>,
    pub profile_ids: Vec<ProfileId>,
    pub extension_attributes: Vec<ExtensionAttribute>,
    pub installed_by_installer: Vec<String>,
    pub installed_by_management_tool: Vec<String>,
}

#[derive(PartialEq, Debug, Clone)]
pub struct ExtensionAttribute {
    pub name: String,
    pub value: String,
}

impl ExtensionAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        ExtensionAttribute {
            name: name.into(),
            value: value.into(),
        }
    }
}
