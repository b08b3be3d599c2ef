use serde::Deserialize;

/// JSON form of `computers/match/{pattern}`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub computers: Vec<SearchEntry>,
}

/// XML form of `computers/match/{pattern}`:
/// `<computers><size>n</size><computer>...</computer>...</computers>`.
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct SearchXmlResponse {
    pub size: usize,
    #[serde(rename = "computer", default)]
    pub computers: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SearchEntry {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}
