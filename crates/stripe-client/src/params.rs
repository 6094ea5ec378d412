//! Common request parameters
//!
//! Resource params embed [`Params`] (or [`ListParams`] for list calls) with
//! `#[serde(flatten)]` and expose it through [`ParamsContainer`] /
//! [`ListParamsContainer`] so the backend can pick up headers and extra
//! form values.

use std::collections::BTreeMap;

use serde::Serialize;

/// Parameters accepted by every non-list call
#[derive(Clone, Debug, Default, Serialize)]
pub struct Params {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    /// Raw form pairs appended after the typed fields
    #[serde(skip)]
    pub extra: Vec<(String, String)>,
    /// Sent as the `Idempotency-Key` header
    #[serde(skip)]
    pub idempotency_key: Option<String>,
    /// Sent as the `Stripe-Account` header
    #[serde(skip)]
    pub stripe_account: Option<String>,
}

impl Params {
    pub fn add_expand(&mut self, field: &str) {
        self.expand.push(field.to_string());
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.to_string());
    }

    pub fn add_extra(&mut self, key: &str, value: &str) {
        self.extra.push((key.to_string(), value.to_string()));
    }

    pub fn set_idempotency_key(&mut self, key: &str) {
        self.idempotency_key = Some(key.to_string());
    }

    pub fn set_stripe_account(&mut self, account: &str) {
        self.stripe_account = Some(account.to_string());
    }
}

/// Access to the embedded [`Params`] of a resource params struct
pub trait ParamsContainer {
    fn params(&self) -> &Params;
}

impl ParamsContainer for Params {
    fn params(&self) -> &Params {
        self
    }
}

/// Parameters accepted by every list call
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    /// Raw filter pairs appended after the typed fields
    #[serde(skip)]
    pub filters: Vec<(String, String)>,
    /// Fetch only the first page instead of following cursors
    #[serde(skip)]
    pub single: bool,
    /// Sent as the `Stripe-Account` header
    #[serde(skip)]
    pub stripe_account: Option<String>,
}

impl ListParams {
    pub fn add_expand(&mut self, field: &str) {
        self.expand.push(field.to_string());
    }

    pub fn add_filter(&mut self, key: &str, value: &str) {
        self.filters.push((key.to_string(), value.to_string()));
    }

    pub fn set_stripe_account(&mut self, account: &str) {
        self.stripe_account = Some(account.to_string());
    }
}

/// Access to the embedded [`ListParams`] of a resource list params struct
pub trait ListParamsContainer {
    fn list_params(&self) -> &ListParams;
}

impl ListParamsContainer for ListParams {
    fn list_params(&self) -> &ListParams {
        self
    }
}

/// Range filter such as `created[gte]=...`
#[derive(Clone, Debug, Default, Serialize)]
pub struct RangeQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<i64>,
}

/// A filter that is either an exact value (`created=...`) or a range
/// (`created[gte]=...`)
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum RangeQuery {
    Exact(i64),
    Range(RangeQueryParams),
}
