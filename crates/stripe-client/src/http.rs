//! HTTP backend built on reqwest
//!
//! Sends every call with bearer authentication and the pinned API version.
//! GET and DELETE carry their form as a query string, everything else as an
//! `application/x-www-form-urlencoded` body.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Method, Response, StatusCode};
use tracing::{Level, debug, error, warn};

use crate::{
    backend::{Backend, StripeRequest},
    error::{ErrorEnvelope, Result, StripeError},
};

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";
pub const API_VERSION: &str = "2019-02-19";

const REQUEST_ID_HEADER: &str = "Request-Id";

/// Configuration for the HTTP backend
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// Base URL the API paths are appended to
    pub api_base: String,
    /// Value of the `Stripe-Version` header, omitted when `None`
    pub api_version: Option<String>,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Total request timeout in milliseconds
    pub read_timeout_ms: u64,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: Some(API_VERSION.to_string()),
            connect_timeout_ms: 30000,
            read_timeout_ms: 80000,
            user_agent: format!("Stripe/v1 RustBindings/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a config pointing at the given API base
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.to_string(),
            ..Default::default()
        }
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.to_string();
        self
    }

    pub fn with_api_version(mut self, version: Option<&str>) -> Self {
        self.api_version = version.map(str::to_string);
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}

/// reqwest implementation of [`Backend`]
#[derive(Clone, Debug)]
pub struct StripeHttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl StripeHttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base.trim_end_matches('/'), path)
    }

    async fn send(&self, request: &StripeRequest) -> Result<Response> {
        let url = self.build_url(&request.path);
        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .bearer_auth(&request.key);

        if let Some(version) = &self.config.api_version {
            builder = builder.header("Stripe-Version", version);
        }
        if let Some(key) = &request.idempotency_key {
            builder = builder.header("Idempotency-Key", key);
        }
        if let Some(account) = &request.stripe_account {
            builder = builder.header("Stripe-Account", account);
        }

        builder = if request.method == Method::GET || request.method == Method::DELETE {
            builder.query(request.form.pairs())
        } else {
            builder.form(request.form.pairs())
        };

        debug!("Requesting {} {}", request.method, request.path);
        Ok(builder.send().await?)
    }

    async fn handle_response(&self, response: Response) -> Result<Bytes> {
        let status = response.status();
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(body);
        }

        match serde_json::from_slice::<ErrorEnvelope>(&body) {
            Ok(envelope) => {
                log_failure(
                    status,
                    &format!(
                        "Request {} failed with status {}: {}",
                        request_id.as_deref().unwrap_or("-"),
                        status,
                        envelope.error.message
                    ),
                );
                Err(StripeError::Api {
                    status: status.as_u16(),
                    request_id,
                    error: envelope.error,
                })
            }
            Err(_) => {
                let body = String::from_utf8_lossy(&body).into_owned();
                log_failure(status, &format!("Request failed with status {}: {}", status, body));
                Err(StripeError::RequestFailed {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}

// 4xx at warn, everything else at error
fn failure_level(status: StatusCode) -> Level {
    if status.is_client_error() {
        Level::WARN
    } else {
        Level::ERROR
    }
}

fn log_failure(status: StatusCode, message: &str) {
    if failure_level(status) == Level::WARN {
        warn!("{}", message);
    } else {
        error!("{}", message);
    }
}

#[async_trait]
impl Backend for StripeHttpClient {
    async fn call_raw(&self, request: StripeRequest) -> Result<Bytes> {
        let response = self.send(&request).await?;
        self.handle_response(response).await
    }
}
