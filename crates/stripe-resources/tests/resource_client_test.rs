//! Resource client tests against an in-memory backend
//!
//! Every operation is checked for the verb and path it produces, without
//! going through HTTP.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::json;
use stripe_client::{Backend, Method, StripeRequest};
use stripe_resources::{
    ListParams, StripeClient, StripeError,
    model::{PersonListParams, PersonParams, WebhookEndpointListParams, WebhookEndpointParams},
};

/// Records every request and answers with queued bodies
#[derive(Default)]
struct RecordingBackend {
    requests: Mutex<Vec<StripeRequest>>,
    responses: Mutex<VecDeque<serde_json::Value>>,
}

impl RecordingBackend {
    fn with_responses(responses: Vec<serde_json::Value>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        })
    }

    fn requests(&self) -> Vec<StripeRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn last(&self) -> (Method, String) {
        let requests = self.requests.lock().unwrap();
        let last = requests.last().expect("no request recorded");
        (last.method.clone(), last.path.clone())
    }
}

#[async_trait]
impl Backend for RecordingBackend {
    async fn call_raw(&self, request: StripeRequest) -> stripe_client::Result<Bytes> {
        self.requests.lock().unwrap().push(request);
        let body = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| json!({"id": "obj_default"}));
        Ok(Bytes::from(serde_json::to_vec(&body).unwrap()))
    }
}

fn client(backend: &Arc<RecordingBackend>) -> StripeClient {
    StripeClient::with_backend(backend.clone(), "sk_test_123")
}

fn page(ids: &[&str], has_more: bool) -> serde_json::Value {
    json!({
        "object": "list",
        "has_more": has_more,
        "data": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>(),
    })
}

#[tokio::test]
async fn test_webhook_endpoint_operations() -> anyhow::Result<()> {
    let backend = RecordingBackend::with_responses(vec![
        json!({"id": "we_123", "url": "https://example.com/hook"}),
        json!({"id": "we_123"}),
        json!({"id": "we_123", "disabled": true}),
        json!({"id": "we_123", "deleted": true}),
        page(&["we_123"], false),
    ]);
    let endpoints = client(&backend).webhook_endpoints();

    let params = WebhookEndpointParams {
        url: Some("https://example.com/hook".to_string()),
        enabled_events: vec!["charge.succeeded".to_string()],
        ..Default::default()
    };
    let created = endpoints.create(&params).await?;
    assert_eq!(created.id, "we_123");
    assert_eq!(created.url, "https://example.com/hook");
    assert_eq!(backend.last(), (Method::POST, "/v1/webhook_endpoints".to_string()));

    endpoints.get("we_123", &WebhookEndpointParams::default()).await?;
    assert_eq!(
        backend.last(),
        (Method::GET, "/v1/webhook_endpoints/we_123".to_string())
    );

    let update = WebhookEndpointParams {
        disabled: Some(true),
        ..Default::default()
    };
    endpoints.update("we_123", &update).await?;
    assert_eq!(
        backend.last(),
        (Method::POST, "/v1/webhook_endpoints/we_123".to_string())
    );
    assert_eq!(
        backend.requests()[2].form.get("disabled"),
        Some("true")
    );

    let deleted = endpoints
        .delete("we_123", &WebhookEndpointParams::default())
        .await?;
    assert!(deleted.deleted);
    assert_eq!(
        backend.last(),
        (Method::DELETE, "/v1/webhook_endpoints/we_123".to_string())
    );

    let all = endpoints
        .list(&WebhookEndpointListParams::default())?
        .collect_all()
        .await?;
    assert_eq!(all.len(), 1);
    assert_eq!(backend.last(), (Method::GET, "/v1/webhook_endpoints".to_string()));

    assert_eq!(backend.requests().len(), 5);
    Ok(())
}

#[tokio::test]
async fn test_person_operations() -> anyhow::Result<()> {
    let backend = RecordingBackend::with_responses(vec![
        json!({"id": "person_1", "account": "acct_1"}),
        json!({"id": "person_1"}),
        json!({"id": "person_1"}),
        json!({"id": "person_1", "deleted": true}),
        page(&["person_1", "person_2"], false),
    ]);
    let persons = client(&backend).persons();

    let mut params = PersonParams::for_account("acct_1");
    params.first_name = Some("Jenny".to_string());
    let created = persons.create(&params).await?;
    assert_eq!(created.account, "acct_1");
    assert_eq!(
        backend.last(),
        (Method::POST, "/v1/accounts/acct_1/persons".to_string())
    );
    // the account goes in the path, never in the form
    let form = &backend.requests()[0].form;
    assert_eq!(form.get("first_name"), Some("Jenny"));
    assert_eq!(form.get("account"), None);

    let params = PersonParams::for_account("acct_1");
    persons.get("person_1", &params).await?;
    assert_eq!(
        backend.last(),
        (Method::GET, "/v1/accounts/acct_1/persons/person_1".to_string())
    );

    persons.update("person_1", &params).await?;
    assert_eq!(
        backend.last(),
        (Method::POST, "/v1/accounts/acct_1/persons/person_1".to_string())
    );

    let deleted = persons.delete("person_1", &params).await?;
    assert!(deleted.deleted);
    assert_eq!(
        backend.last(),
        (Method::DELETE, "/v1/accounts/acct_1/persons/person_1".to_string())
    );

    let all = persons
        .list(&PersonListParams::for_account("acct_1"))?
        .collect_all()
        .await?;
    let ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["person_1", "person_2"]);
    assert_eq!(
        backend.last(),
        (Method::GET, "/v1/accounts/acct_1/persons".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn test_person_operations_require_account() {
    let backend = RecordingBackend::with_responses(Vec::new());
    let persons = client(&backend).persons();
    let params = PersonParams::default();

    let results = [
        persons.create(&params).await.map(|_| ()),
        persons.get("person_1", &params).await.map(|_| ()),
        persons.update("person_1", &params).await.map(|_| ()),
        persons.delete("person_1", &params).await.map(|_| ()),
        persons.list(&PersonListParams::default()).map(|_| ()),
    ];
    for result in results {
        match result {
            Err(StripeError::InvalidParams(msg)) => assert!(msg.contains("account")),
            other => panic!("expected InvalidParams, got {:?}", other),
        }
    }
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_path_segments_are_escaped() -> anyhow::Result<()> {
    let backend = RecordingBackend::with_responses(Vec::new());
    let endpoints = client(&backend).webhook_endpoints();

    endpoints
        .get("we/../x", &WebhookEndpointParams::default())
        .await?;
    let (_, path) = backend.last();
    assert!(path.starts_with("/v1/webhook_endpoints/"));
    assert!(!path.contains("/../"));
    Ok(())
}

#[tokio::test]
async fn test_list_follows_cursor_and_headers() -> anyhow::Result<()> {
    let backend = RecordingBackend::with_responses(vec![
        page(&["we_1", "we_2"], true),
        page(&["we_3"], false),
    ]);
    let endpoints = client(&backend).webhook_endpoints();

    let mut params = WebhookEndpointListParams {
        list_params: ListParams {
            limit: Some(2),
            ..Default::default()
        },
        ..Default::default()
    };
    params.list_params.set_stripe_account("acct_connected");

    let all = endpoints.list(&params)?.collect_all().await?;
    assert_eq!(all.len(), 3);

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].form.get("starting_after"), None);
    assert_eq!(requests[1].form.get("starting_after"), Some("we_2"));
    assert_eq!(requests[1].form.get("limit"), Some("2"));
    for request in &requests {
        assert_eq!(request.stripe_account.as_deref(), Some("acct_connected"));
        assert_eq!(request.key, "sk_test_123");
    }
    Ok(())
}

#[tokio::test]
async fn test_list_is_lazy() -> anyhow::Result<()> {
    let backend = RecordingBackend::with_responses(vec![page(&["we_1"], false)]);
    let endpoints = client(&backend).webhook_endpoints();

    let mut iter = endpoints.list(&WebhookEndpointListParams::default())?;
    assert!(backend.requests().is_empty());

    assert_eq!(iter.next().await.transpose()?.map(|e| e.id), Some("we_1".to_string()));
    assert!(iter.next().await.is_none());
    assert_eq!(backend.requests().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_call_params_headers() -> anyhow::Result<()> {
    let backend = RecordingBackend::with_responses(Vec::new());
    let endpoints = client(&backend).webhook_endpoints();

    let mut params = WebhookEndpointParams {
        url: Some("https://example.com/hook".to_string()),
        ..Default::default()
    };
    params.params.set_idempotency_key("idem-1");
    params.params.add_metadata("team", "billing");
    params.params.add_extra("beta_flag", "on");
    endpoints.create(&params).await?;

    let request = &backend.requests()[0];
    assert_eq!(request.idempotency_key.as_deref(), Some("idem-1"));
    assert_eq!(request.form.get("metadata[team]"), Some("billing"));
    assert_eq!(request.form.get("beta_flag"), Some("on"));
    Ok(())
}
