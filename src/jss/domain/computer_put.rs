use serde::Serialize;

/// Body of `PUT computers/id/{id}`, serialized under a `<computer>` root. Absent fields are left
/// out so the JSS keeps their current value.
#[derive(Debug, Default, Serialize)]
pub struct ComputerPut {
    #[serde(skip_serializing_if = "GeneralPut::is_empty")]
    pub general: GeneralPut,
    #[serde(skip_serializing_if = "LocationPut::is_empty")]
    pub location: LocationPut,
}

#[derive(Debug, Default, Serialize)]
pub struct GeneralPut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode_1: Option<String>,
}

impl GeneralPut {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.asset_tag.is_none() && self.barcode_1.is_none()
    }
}

#[derive(Debug, Default, Serialize)]
pub struct LocationPut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl LocationPut {
    fn is_empty(&self) -> bool {
        [
            &self.username,
            &self.email_address,
            &self.real_name,
            &self.phone,
            &self.building,
            &self.room,
            &self.position,
            &self.department,
        ]
        .iter()
        .all(|field| field.is_none())
    }
}

impl ComputerPut {
    pub fn is_empty(&self) -> bool {
        self.general.is_empty() && self.location.is_empty()
    }
}
