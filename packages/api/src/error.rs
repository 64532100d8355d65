use serde::Deserialize;
use thiserror::Error;

/// Failures of a storefront API call.
///
/// [`ApiError::Api`] is the "expected" category: the backend answered with an
/// error status and a message meant for the user. Every other variant is an
/// unexpected transport or decoding failure.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("not signed in")]
    NotAuthenticated,

    #[error("request error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// The backend-provided message, if the backend produced one.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Whether the backend rejected the bearer token (or none was available).
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Api { status: 401, .. } | ApiError::NotAuthenticated
        )
    }

    /// Text for an inline error line: the backend message when there is one,
    /// `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self.api_message() {
            Some(message) => format!("Error: {message}"),
            None => fallback.to_string(),
        }
    }

    /// Build an [`ApiError::Api`] from an error response body.
    ///
    /// The backend sends `{"message": "..."}` or, for validation failures,
    /// `{"message": ["...", "..."]}`. Anything else falls back to the raw body
    /// or the status line.
    pub(crate) fn from_body(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<serde_json::Value>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .and_then(|m| match m {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Array(items) => Some(
                    items
                        .iter()
                        .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            })
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("HTTP {status}")
                } else {
                    body.trim().to_string()
                }
            });

        ApiError::Api { status, message }
    }
}
