// StripeClient - facade handing out the resource clients

use std::sync::Arc;

use stripe_client::{Backend, BackendClient, HttpClientConfig, Result, StripeHttpClient};
use tracing::debug;

use crate::{
    config::StripeClientConfig, person::PersonClient, webhook_endpoint::WebhookEndpointClient,
};

/// Stripe API client bound to one secret key
///
/// Cloning is cheap; all clones share the same backend.
#[derive(Clone, Debug)]
pub struct StripeClient {
    backend: BackendClient,
}

impl StripeClient {
    /// Create a new StripeClient talking HTTP with the given configuration
    pub fn new(config: StripeClientConfig) -> Result<Self> {
        let http_config = HttpClientConfig::new(&config.api_base)
            .with_api_version(config.api_version.as_deref())
            .with_timeouts(config.connect_timeout_ms, config.read_timeout_ms);

        debug!(api_base = %http_config.api_base, "Creating Stripe HTTP client");
        let http_client = StripeHttpClient::new(http_config)?;
        Ok(Self::with_backend(Arc::new(http_client), config.secret_key))
    }

    /// Create a new StripeClient from the `STRIPE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(StripeClientConfig::from_env()?)
    }

    /// Create a new StripeClient on top of any [`Backend`]
    pub fn with_backend(backend: Arc<dyn Backend>, key: impl Into<String>) -> Self {
        Self {
            backend: BackendClient::new(backend, key),
        }
    }

    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    pub fn persons(&self) -> PersonClient {
        PersonClient::new(self.backend.clone())
    }

    pub fn webhook_endpoints(&self) -> WebhookEndpointClient {
        WebhookEndpointClient::new(self.backend.clone())
    }
}
