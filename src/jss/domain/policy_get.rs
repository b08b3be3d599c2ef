use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PoliciesResponse {
    pub policies: Vec<PolicyRef>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct PolicyRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// `policies/id/{id}/subset/general&scope`
#[derive(Debug, Deserialize)]
pub struct PolicyResponse {
    pub policy: PolicyGet,
}

#[derive(Debug, Deserialize)]
pub struct PolicyGet {
    pub general: PolicyGeneral,
    pub scope: PolicyScope,
}

#[derive(Debug, Deserialize)]
pub struct PolicyGeneral {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PolicyScope {
    #[serde(default)]
    pub all_computers: bool,
    #[serde(default)]
    pub computers: Vec<ScopedComputer>,
    #[serde(default)]
    pub computer_groups: Vec<ScopedGroup>,
}

#[derive(Debug, Deserialize)]
pub struct ScopedComputer {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ScopedGroup {
    pub name: String,
}
