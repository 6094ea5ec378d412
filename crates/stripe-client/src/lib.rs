//! Stripe Client - shared plumbing for the Stripe Rust SDK
//!
//! This crate provides:
//! - The `Backend` transport trait and its reqwest implementation
//! - Common params and bracket-style form encoding
//! - Lazy cursor pagination over list endpoints
//! - The bare-id / expanded-object decode rule for expandable resources

pub mod backend;
pub mod error;
pub mod expand;
pub mod form;
pub mod http;
pub mod list;
pub mod params;

pub use backend::{Backend, BackendClient, StripeRequest, format_url_path};
pub use error::{ApiErrorBody, ErrorType, Result, StripeError};
pub use form::FormValues;
pub use http::{API_VERSION, DEFAULT_API_BASE, HttpClientConfig, StripeHttpClient};
pub use list::{List, ListIter, ListMeta, Object};
pub use params::{
    ListParams, ListParamsContainer, Params, ParamsContainer, RangeQuery,
    RangeQueryParams,
};

pub use reqwest::Method;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
