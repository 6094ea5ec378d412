// stripe-resources: typed Stripe resources and their API clients

pub mod client;
pub mod config;
pub mod constants;
pub mod model;
pub mod person;
pub mod webhook_endpoint;

pub use client::StripeClient;
pub use config::StripeClientConfig;
pub use person::PersonClient;
pub use webhook_endpoint::WebhookEndpointClient;

pub use stripe_client::{
    ApiErrorBody, ErrorType, List, ListIter, ListMeta, ListParams, Params, RangeQuery,
    RangeQueryParams, Result, StripeError,
};
