use crate::domain::ProfileId;
use std::collections::HashMap;
use thiserror::Error;

/// Configuration profile names by id. Devices only reference profiles by id.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProfileTable {
    names: HashMap<ProfileId, String>,
}

impl ProfileTable {
    pub fn resolve(&self, id: ProfileId) -> Result<&str, LookupMiss> {
        self.names.get(&id).map(String::as_str).ok_or(LookupMiss::Profile { id })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl FromIterator<(ProfileId, String)> for ProfileTable {
    fn from_iter<T: IntoIterator<Item = (ProfileId, String)>>(iter: T) -> Self {
        ProfileTable {
            names: iter.into_iter().collect(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum LookupMiss {
    #[error("unknown profile '{id}'")]
    Profile { id: ProfileId },
}
