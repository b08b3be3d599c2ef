use crate::app_config::AppConfig;
use crate::jss::error::JssError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{self, HeaderValue};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Authenticated access to the JSS Classic API (`{url}/JSSResource/...`).
///
/// Cloning is cheap: the connection pool and server context are shared, so a clone can be
/// handed to every worker of a concurrent fetch.
#[derive(Debug, Clone)]
pub struct JssClient {
    http: Client,
    context: Arc<Context>,
}

#[derive(Debug)]
struct Context {
    base_url: String,
    username: String,
}

pub fn new_client(config: &AppConfig) -> Result<JssClient, JssError> {
    let credentials = STANDARD.encode(format!("{}:{}", config.jss().username(), config.jss().password()));
    let mut authorization_value = HeaderValue::from_str(&format!("Basic {}", credentials))?;
    authorization_value.set_sensitive(true);

    let mut headers = header::HeaderMap::new();
    headers.insert(header::AUTHORIZATION, authorization_value);
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let http = Client::builder()
        .danger_accept_invalid_certs(config.jss().accept_invalid_certs())
        .timeout(config.jss().timeout())
        .default_headers(headers)
        .build()
        .map_err(JssError::Transport)?;

    Ok(JssClient {
        http,
        context: Arc::new(Context {
            base_url: config.jss().url().to_string(),
            username: config.jss().username().to_string(),
        }),
    })
}

impl JssClient {
    pub fn username(&self) -> &str {
        &self.context.username
    }

    /// `GET` a resource and deserialize its JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, JssError> {
        let text = self.request(Method::GET, path, None).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// `GET` a resource from one of the endpoints that is consumed as XML.
    pub async fn get_xml<T: DeserializeOwned>(&self, path: &str) -> Result<T, JssError> {
        let text = self.send(Method::GET, path, None, Some("application/xml")).await?;
        Ok(quick_xml::de::from_str(&text)?)
    }

    /// `PUT` an XML document, returning the raw response body.
    pub async fn put_xml(&self, path: &str, body: String) -> Result<String, JssError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    #[instrument(skip(self, body))]
    pub async fn request(&self, method: Method, path: &str, body: Option<String>) -> Result<String, JssError> {
        self.send(method, path, body, None).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>, accept: Option<&'static str>) -> Result<String, JssError> {
        let url = self.url(path);
        debug!(url = url, "Calling JSS...");

        let mut request = self.http.request(method, &url);
        if let Some(accept) = accept {
            request = request.header(header::ACCEPT, accept);
        }
        if let Some(body) = body {
            request = request.header(header::CONTENT_TYPE, "text/xml").body(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(url = url, "⚠️ Unable to reach the JSS: {}", e);
            JssError::Transport(e)
        })?;

        read_body(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/JSSResource/{}", self.context.base_url, path.trim_start_matches('/'))
    }
}

async fn read_body(response: Response) -> Result<String, JssError> {
    let status = response.status();
    let body = response.text().await.map_err(JssError::Transport)?;

    if status.is_success() {
        debug!(status_code = %status, "Calling JSS... OK");
        Ok(body)
    } else {
        let error = JssError::from_status(status, &body);
        warn!(status_code = %status, "⚠️ JSS request failed: {}", error);
        Err(error)
    }
}
