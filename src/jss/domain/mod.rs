mod account_get;
mod computer_get;
mod computer_put;
mod policy_get;
mod profile_get;
mod reference_get;
mod search_get;

pub use account_get::AccountResponse;
pub use computer_get::{ComputerGet, ComputerResponse};
pub use computer_put::{ComputerPut, GeneralPut, LocationPut};
pub use policy_get::{PoliciesResponse, PolicyGet, PolicyResponse};
pub use profile_get::ProfilesResponse;
pub use reference_get::{ExtensionAttributeResponse, NamedListResponse};
pub use search_get::{SearchEntry, SearchResponse, SearchXmlResponse};
