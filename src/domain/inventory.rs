use serde::Serialize;

/// The editable general and location fields of a device, as currently stored in the JSS.
#[derive(PartialEq, Debug, Clone, Default, Serialize)]
pub struct InventoryFields {
    pub asset_tag: String,
    pub barcode: String,
    pub platform: String,
    /// `None` when the JSS does not report a management state.
    pub managed: Option<bool>,
    pub username: String,
    pub email_address: String,
    pub real_name: String,
    pub phone: String,
    pub building: String,
    pub room: String,
    pub position: String,
    pub department: String,
}

impl InventoryFields {
    /// Label and value pairs in display order.
    pub fn labelled(&self) -> [(&'static str, &str); 11] {
        [
            ("Asset tag", &self.asset_tag),
            ("Barcode", &self.barcode),
            ("Platform", &self.platform),
            ("Username", &self.username),
            ("Email", &self.email_address),
            ("Full name", &self.real_name),
            ("Phone", &self.phone),
            ("Building", &self.building),
            ("Room", &self.room),
            ("Position", &self.position),
            ("Department", &self.department),
        ]
    }
}
