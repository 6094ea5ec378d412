//! Backend abstraction shared by every resource client
//!
//! [`Backend`] is the transport seam: it takes a fully built
//! [`StripeRequest`] and returns the raw response body. [`BackendClient`]
//! binds a backend to an API key and adds typed encode/decode on top.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    error::Result,
    form::FormValues,
    list::{ListIter, Object},
    params::{ListParamsContainer, ParamsContainer},
};

/// A single API call as handed to a [`Backend`]
#[derive(Clone)]
pub struct StripeRequest {
    pub method: Method,
    pub path: String,
    pub key: String,
    pub form: FormValues,
    pub idempotency_key: Option<String>,
    pub stripe_account: Option<String>,
}

impl StripeRequest {
    pub fn new(method: Method, path: &str, key: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            key: key.to_string(),
            form: FormValues::new(),
            idempotency_key: None,
            stripe_account: None,
        }
    }
}

impl fmt::Debug for StripeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeRequest")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("key", &redact(&self.key))
            .field("form", &self.form)
            .field("idempotency_key", &self.idempotency_key)
            .field("stripe_account", &self.stripe_account)
            .finish()
    }
}

/// Transport used by resource clients
#[async_trait]
pub trait Backend: Send + Sync {
    /// Perform the request and return the body of a successful response
    async fn call_raw(&self, request: StripeRequest) -> Result<Bytes>;
}

/// A backend bound to the API key used for every call
#[derive(Clone)]
pub struct BackendClient {
    backend: Arc<dyn Backend>,
    key: String,
}

impl fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendClient")
            .field("key", &redact(&self.key))
            .finish_non_exhaustive()
    }
}

impl BackendClient {
    pub fn new(backend: Arc<dyn Backend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Encode `params`, issue the call and decode the JSON response
    pub async fn call<T, P>(&self, method: Method, path: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ParamsContainer + ?Sized,
    {
        let common = params.params();
        let mut form = FormValues::from_params(params)?;
        form.extend(common.extra.iter().cloned());

        let request = StripeRequest {
            form,
            idempotency_key: common.idempotency_key.clone(),
            stripe_account: common.stripe_account.clone(),
            ..StripeRequest::new(method, path, &self.key)
        };
        self.send(request).await
    }

    /// Build a lazy iterator over a list endpoint
    pub fn list<T, P>(&self, path: &str, params: &P) -> Result<ListIter<T>>
    where
        T: DeserializeOwned + Object + Send,
        P: Serialize + ListParamsContainer + ?Sized,
    {
        let list_params = params.list_params();
        let mut form = FormValues::from_params(params)?;
        form.extend(list_params.filters.iter().cloned());

        Ok(ListIter::new(self.clone(), path, form, list_params))
    }

    pub(crate) async fn send<T: DeserializeOwned>(&self, request: StripeRequest) -> Result<T> {
        let body = self.backend.call_raw(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn redact(key: &str) -> String {
    let visible: String = key.chars().take(8).collect();
    format!("{}****", visible)
}

/// Substitute each `{}` in `template` with the next percent-escaped segment
pub fn format_url_path(template: &str, segments: &[&str]) -> String {
    let mut path = String::with_capacity(template.len() + 32);
    let mut segments = segments.iter();
    let mut parts = template.split("{}");

    if let Some(first) = parts.next() {
        path.push_str(first);
    }
    for part in parts {
        if let Some(segment) = segments.next() {
            path.extend(url::form_urlencoded::byte_serialize(segment.as_bytes()));
        }
        path.push_str(part);
    }
    path
}
