//! Client for the `/v1/accounts/{account}/persons` APIs
//!
//! Every call is scoped to the account named in the params; a call without
//! one fails before any request is made.

use stripe_client::{BackendClient, ListIter, Method, Result, StripeError, format_url_path};

use crate::{
    constants::api_path,
    model::{Person, PersonListParams, PersonParams},
};

#[derive(Clone, Debug)]
pub struct PersonClient {
    backend: BackendClient,
}

fn require_account(account: &Option<String>) -> Result<&str> {
    account
        .as_deref()
        .ok_or_else(|| StripeError::InvalidParams("params.account must be set".to_string()))
}

impl PersonClient {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    /// Create a new person on the account
    pub async fn create(&self, params: &PersonParams) -> Result<Person> {
        let account = require_account(&params.account)?;
        let path = format_url_path(api_path::PERSONS, &[account]);
        self.backend.call(Method::POST, &path, params).await
    }

    /// Get the details of a person
    pub async fn get(&self, id: &str, params: &PersonParams) -> Result<Person> {
        let account = require_account(&params.account)?;
        let path = format_url_path(api_path::PERSON, &[account, id]);
        self.backend.call(Method::GET, &path, params).await
    }

    /// Update a person's properties
    pub async fn update(&self, id: &str, params: &PersonParams) -> Result<Person> {
        let account = require_account(&params.account)?;
        let path = format_url_path(api_path::PERSON, &[account, id]);
        self.backend.call(Method::POST, &path, params).await
    }

    /// Remove a person; the result has `deleted` set
    pub async fn delete(&self, id: &str, params: &PersonParams) -> Result<Person> {
        let account = require_account(&params.account)?;
        let path = format_url_path(api_path::PERSON, &[account, id]);
        self.backend.call(Method::DELETE, &path, params).await
    }

    /// Iterate over the persons of an account
    pub fn list(&self, params: &PersonListParams) -> Result<ListIter<Person>> {
        let account = require_account(&params.account)?;
        let path = format_url_path(api_path::PERSONS, &[account]);
        self.backend.list(&path, params)
    }
}
