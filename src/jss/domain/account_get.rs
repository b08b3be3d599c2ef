use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AccountResponse {
    pub account: AccountGet,
}

#[derive(Debug, Deserialize)]
pub struct AccountGet {
    pub privileges: Privileges,
}

#[derive(Debug, Deserialize)]
pub struct Privileges {
    #[serde(default)]
    pub jss_objects: Vec<String>,
}
