//! Error types for the Stripe SDK

use serde::{Deserialize, Serialize};

/// Category reported in the `type` field of an API error
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    ApiError,
    AuthenticationError,
    CardError,
    IdempotencyError,
    InvalidRequestError,
    RateLimitError,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Body of the `{"error": {...}}` envelope returned on non-2xx responses
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    #[serde(rename = "type")]
    pub kind: ErrorType,
    pub code: Option<String>,
    pub decline_code: Option<String>,
    pub doc_url: Option<String>,
    pub message: String,
    pub param: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

/// Error type for all Stripe SDK operations
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    #[error("API error (status {status}): {}", .error.message)]
    Api {
        status: u16,
        request_id: Option<String>,
        error: ApiErrorBody,
    },

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("form encoding error: {0}")]
    Form(#[from] serde_urlencoded::ser::Error),
}

impl StripeError {
    /// HTTP status of the failed response, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            StripeError::Api { status, .. } | StripeError::RequestFailed { status, .. } => {
                Some(*status)
            }
            StripeError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The parsed API error body, when the server returned one
    pub fn api_error(&self) -> Option<&ApiErrorBody> {
        match self {
            StripeError::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StripeError>;
