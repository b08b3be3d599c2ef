use crate::domain::DeviceId;
use std::cmp::Ordering;
use std::fmt;

pub const UNNAMED_DEVICE: &str = "Not named.";

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SearchMatch {
    /// Ordering key only, never displayed.
    pub sort_key: String,
    pub name: String,
    pub id: DeviceId,
}

impl SearchMatch {
    pub fn display_order(&self, other: &Self) -> Ordering {
        self.sort_key
            .cmp(&other.sort_key)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl fmt::Display for SearchMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
