use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProfilesResponse {
    pub os_x_configuration_profiles: Vec<ProfileGet>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileGet {
    pub id: i64,
    pub name: String,
}
