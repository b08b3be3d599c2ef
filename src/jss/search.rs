use crate::domain::{SearchMatch, UNNAMED_DEVICE};
use crate::jss::client::JssClient;
use crate::jss::domain::{SearchEntry, SearchResponse, SearchXmlResponse};
use crate::jss::error::JssError;
use crate::jss::path_segment;
use crate::name_sort::sort_key;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFormat {
    Json,
    Xml,
}

/// Finds devices whose name, serial, user etc. contain `query`, ordered by [`sort_key`].
#[instrument(skip(client))]
pub async fn search(client: &JssClient, query: &str, format: SearchFormat) -> Result<Vec<SearchMatch>, SearchError> {
    if query.trim().is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    info!("Searching devices...");
    let path = format!("computers/match/{}", path_segment(&format!("*{}*", query)));
    let entries = match format {
        SearchFormat::Json => client.get_json::<SearchResponse>(&path).await?.computers,
        SearchFormat::Xml => client.get_xml::<SearchXmlResponse>(&path).await?.computers,
    };
    info!("Searching devices... OK, {} matches returned", entries.len());

    Ok(order_matches(entries))
}

fn order_matches(entries: Vec<SearchEntry>) -> Vec<SearchMatch> {
    let mut matches = entries
        .into_iter()
        .map(|entry| {
            let name = entry.name.filter(|name| !name.is_empty()).unwrap_or_else(|| UNNAMED_DEVICE.to_string());
            SearchMatch {
                sort_key: sort_key(&name),
                name,
                id: entry.id,
            }
        })
        .collect::<Vec<_>>();
    matches.sort_by(SearchMatch::display_order);
    matches
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("No search string")]
    EmptyQuery,
    #[error(transparent)]
    Jss(#[from] JssError),
}
