use crate::domain::{DeviceId, InventoryFields};
use serde::Serialize;

/// Everything shown for a single device, already in display order.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct DeviceSummary {
    pub id: DeviceId,
    pub name: String,
    pub owner: String,
    pub last_checkin: Option<String>,
    pub last_inventory: Option<String>,
    pub inventory: InventoryFields,
    pub printers: Vec<String>,
    pub groups: Vec<String>,
    pub extension_attributes: Vec<ExtensionAttributeEntry>,
    pub profiles: Vec<String>,
    pub software: Vec<SoftwareEntry>,
    pub policies: Vec<String>,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct ExtensionAttributeEntry {
    pub name: String,
    pub value: AttributeValue,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum AttributeValue {
    Empty,
    Single(String),
    /// Rendered verbatim, the value carries its own line breaks.
    MultiLine(String),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        if value.contains('\n') {
            AttributeValue::MultiLine(value.to_string())
        } else if value.is_empty() {
            AttributeValue::Empty
        } else {
            AttributeValue::Single(value.to_string())
        }
    }
}

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct SoftwareEntry {
    pub source: InstallSource,
    pub name: String,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallSource {
    ManagementTool,
    Installer,
}

impl InstallSource {
    pub fn label(&self) -> &'static str {
        match self {
            InstallSource::ManagementTool => "Casper",
            InstallSource::Installer => "Installer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", AttributeValue::Empty)]
    #[case("10.15.7", AttributeValue::Single("10.15.7".to_string()))]
    #[case("line 1\nline 2", AttributeValue::MultiLine("line 1\nline 2".to_string()))]
    #[case("\n", AttributeValue::MultiLine("\n".to_string()))]
    fn attribute_value_from_str(#[case] input: &str, #[case] expected: AttributeValue) {
        assert_eq!(AttributeValue::from(input), expected);
    }
}
