use crate::jss::client::JssClient;
use crate::jss::domain::{ExtensionAttributeResponse, NamedListResponse};
use crate::jss::error::JssError;
use tracing::{info, instrument};

/// First entry of every choice list, selecting it clears the field.
pub const NO_CHOICE: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceList {
    Buildings,
    Departments,
}

impl ReferenceList {
    fn resource(&self) -> &'static str {
        match self {
            ReferenceList::Buildings => "buildings",
            ReferenceList::Departments => "departments",
        }
    }
}

#[instrument(skip(client))]
pub async fn fetch_choices(client: &JssClient, list: ReferenceList) -> Result<Vec<String>, JssError> {
    info!("Retrieving {}...", list.resource());
    let response = client.get_json::<NamedListResponse>(list.resource()).await?;
    info!("Retrieving {}... OK, {} found", list.resource(), response.items.len());

    Ok(with_no_choice(response.items.into_iter().map(|item| item.name)))
}

/// Pop-up menu values of a computer extension attribute.
#[instrument(skip(client))]
pub async fn fetch_extension_attribute_choices(client: &JssClient, id: i64) -> Result<Vec<String>, JssError> {
    info!("Retrieving extension attribute choices...");
    let response = client
        .get_json::<ExtensionAttributeResponse>(&format!("computerextensionattributes/id/{}", id))
        .await?;
    let choices = response.computer_extension_attribute.input_type.popup_choices;
    info!("Retrieving extension attribute choices... OK, {} found", choices.len());

    Ok(with_no_choice(choices))
}

fn with_no_choice(choices: impl IntoIterator<Item = String>) -> Vec<String> {
    std::iter::once(NO_CHOICE.to_string()).chain(choices).collect()
}
