//! Client for the `/v1/webhook_endpoints` APIs

use stripe_client::{BackendClient, ListIter, Method, Result, format_url_path};

use crate::{
    constants::api_path,
    model::{WebhookEndpoint, WebhookEndpointListParams, WebhookEndpointParams},
};

#[derive(Clone, Debug)]
pub struct WebhookEndpointClient {
    backend: BackendClient,
}

impl WebhookEndpointClient {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    /// Create a new webhook endpoint
    pub async fn create(&self, params: &WebhookEndpointParams) -> Result<WebhookEndpoint> {
        self.backend
            .call(Method::POST, api_path::WEBHOOK_ENDPOINTS, params)
            .await
    }

    /// Get the details of a webhook endpoint
    pub async fn get(&self, id: &str, params: &WebhookEndpointParams) -> Result<WebhookEndpoint> {
        let path = format_url_path(api_path::WEBHOOK_ENDPOINT, &[id]);
        self.backend.call(Method::GET, &path, params).await
    }

    /// Update a webhook endpoint's properties
    pub async fn update(
        &self,
        id: &str,
        params: &WebhookEndpointParams,
    ) -> Result<WebhookEndpoint> {
        let path = format_url_path(api_path::WEBHOOK_ENDPOINT, &[id]);
        self.backend.call(Method::POST, &path, params).await
    }

    /// Remove a webhook endpoint; the result has `deleted` set
    pub async fn delete(
        &self,
        id: &str,
        params: &WebhookEndpointParams,
    ) -> Result<WebhookEndpoint> {
        let path = format_url_path(api_path::WEBHOOK_ENDPOINT, &[id]);
        self.backend.call(Method::DELETE, &path, params).await
    }

    /// Iterate over all webhook endpoints
    pub fn list(&self, params: &WebhookEndpointListParams) -> Result<ListIter<WebhookEndpoint>> {
        self.backend.list(api_path::WEBHOOK_ENDPOINTS, params)
    }
}
