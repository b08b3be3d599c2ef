pub mod device;
pub mod inventory;
pub mod policy;
pub mod profile_table;
pub mod search_match;
pub mod summary;

pub type DeviceId = i64;
pub type PolicyId = i64;
pub type ProfileId = i64;

pub use device::{DeviceRecord, ExtensionAttribute};
pub use inventory::InventoryFields;
pub use policy::Policy;
pub use profile_table::ProfileTable;
pub use search_match::{SearchMatch, UNNAMED_DEVICE};
pub use summary::{AttributeValue, DeviceSummary, ExtensionAttributeEntry, InstallSource, SoftwareEntry};
