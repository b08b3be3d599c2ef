use serde::Deserialize;

/// `buildings` and `departments` share a shape, only the top-level key differs.
#[derive(Debug, Deserialize)]
pub struct NamedListResponse {
    #[serde(alias = "buildings", alias = "departments")]
    pub items: Vec<NamedRef>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtensionAttributeResponse {
    pub computer_extension_attribute: ExtensionAttributeDefinition,
}

#[derive(Debug, Deserialize)]
pub struct ExtensionAttributeDefinition {
    pub input_type: InputType,
}

#[derive(Debug, Deserialize)]
pub struct InputType {
    #[serde(default)]
    pub popup_choices: Vec<String>,
}
