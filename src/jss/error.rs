use regex::Regex;
use reqwest::StatusCode;
use reqwest::header::InvalidHeaderValue;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static CONFLICT_DETAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Error: (.*)<").expect("valid regex"));

#[derive(Error, Debug)]
pub enum JssError {
    #[error("Error contacting JSS. {0}")]
    Transport(#[source] reqwest::Error),
    #[error("HTTP code {code}: {kind}")]
    HttpStatus { code: u16, kind: HttpErrorKind },
    #[error("Error querying Jamf. [{0}]")]
    Payload(String),
    #[error("JSS client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpErrorKind {
    Request,
    Authorization,
    Permissions,
    NotFound,
    Conflict(String),
    Generic,
}

impl fmt::Display for HttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpErrorKind::Request => write!(f, "Request error."),
            HttpErrorKind::Authorization => write!(f, "Authorization error."),
            HttpErrorKind::Permissions => write!(f, "Permissions error."),
            HttpErrorKind::NotFound => write!(f, "Resource not found."),
            HttpErrorKind::Conflict(detail) => write!(f, "Resource conflict. {}", detail),
            HttpErrorKind::Generic => write!(f, "Generic error."),
        }
    }
}

impl JssError {
    /// Classifies a non-success response. `body` is only consulted for 409, where JSS
    /// puts the reason in an HTML error page.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let kind = match status.as_u16() {
            400 => HttpErrorKind::Request,
            401 => HttpErrorKind::Authorization,
            403 => HttpErrorKind::Permissions,
            404 => HttpErrorKind::NotFound,
            409 => HttpErrorKind::Conflict(conflict_detail(body)),
            _ => HttpErrorKind::Generic,
        };

        JssError::HttpStatus { code: status.as_u16(), kind }
    }
}

impl From<serde_json::Error> for JssError {
    fn from(error: serde_json::Error) -> Self {
        JssError::Payload(error.to_string())
    }
}

impl From<quick_xml::DeError> for JssError {
    fn from(error: quick_xml::DeError) -> Self {
        JssError::Payload(error.to_string())
    }
}

fn conflict_detail(body: &str) -> String {
    CONFLICT_DETAIL
        .captures(body)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
