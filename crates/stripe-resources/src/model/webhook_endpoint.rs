// Webhook endpoint model types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stripe_client::{
    ListParams, ListParamsContainer, Object, Params, ParamsContainer, RangeQuery,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookEndpointStatus {
    #[default]
    Enabled,
    Disabled,
    /// Any status this version does not know about
    #[serde(other)]
    Unknown,
}

/// A registered callback URL and the events delivered to it.
///
/// May arrive as a bare id when not expanded; only `id` is set then.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", default)]
pub struct WebhookEndpoint {
    pub id: String,
    pub object: String,
    pub api_version: Option<String>,
    pub application: Option<String>,
    pub connect: bool,
    pub created: i64,
    /// Only set on the response to a delete
    pub deleted: bool,
    pub description: Option<String>,
    pub enabled_events: Vec<String>,
    pub livemode: bool,
    pub metadata: BTreeMap<String, String>,
    /// Signing secret, only returned on create
    pub secret: Option<String>,
    pub status: Option<WebhookEndpointStatus>,
    pub url: String,
}

stripe_client::impl_expandable!(WebhookEndpoint);

impl Object for WebhookEndpoint {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Parameters for creating or updating a webhook endpoint
#[derive(Clone, Debug, Default, Serialize)]
pub struct WebhookEndpointParams {
    #[serde(flatten)]
    pub params: Params,
    /// Pins the API version of events sent to this endpoint; create only
    pub api_version: Option<String>,
    /// Receive events from connected accounts; create only
    pub connect: Option<bool>,
    pub description: Option<String>,
    /// Update only
    pub disabled: Option<bool>,
    pub enabled_events: Vec<String>,
    pub url: Option<String>,
}

impl ParamsContainer for WebhookEndpointParams {
    fn params(&self) -> &Params {
        &self.params
    }
}

/// Parameters for listing webhook endpoints
#[derive(Clone, Debug, Default, Serialize)]
pub struct WebhookEndpointListParams {
    #[serde(flatten)]
    pub list_params: ListParams,
    pub created: Option<RangeQuery>,
}

impl ListParamsContainer for WebhookEndpointListParams {
    fn list_params(&self) -> &ListParams {
        &self.list_params
    }
}
