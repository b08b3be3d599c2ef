use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ComputerResponse {
    pub computer: ComputerGet,
}

#[derive(Debug, Deserialize)]
pub struct ComputerGet {
    pub general: General,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub hardware: Hardware,
    #[serde(default)]
    pub groups_accounts: GroupsAccounts,
    #[serde(default)]
    pub extension_attributes: Vec<ExtensionAttributeGet>,
    #[serde(default)]
    pub configuration_profiles: Vec<ProfileRef>,
    #[serde(default)]
    pub software: Software,
}

#[derive(Debug, Deserialize)]
pub struct General {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_contact_time: Option<String>,
    #[serde(default)]
    pub report_date: Option<String>,
    #[serde(default)]
    pub asset_tag: String,
    #[serde(default)]
    pub barcode_1: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub remote_management: RemoteManagement,
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoteManagement {
    #[serde(default)]
    pub managed: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Location {
    pub username: String,
    pub email_address: String,
    pub real_name: String,
    pub phone: String,
    pub building: String,
    pub room: String,
    pub position: String,
    pub department: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Hardware {
    #[serde(default)]
    pub mapped_printers: Vec<MappedPrinter>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct MappedPrinter {
    pub name: String,
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GroupsAccounts {
    #[serde(default)]
    pub computer_group_memberships: Vec<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct ExtensionAttributeGet {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct ProfileRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Software {
    #[serde(default)]
    pub installed_by_casper: Vec<String>,
    #[serde(default)]
    pub installed_by_installer_swu: Vec<String>,
}
