// API path constants; `{}` marks a path segment filled by format_url_path

pub mod api_path {
    // Webhook endpoints
    pub const WEBHOOK_ENDPOINTS: &str = "/v1/webhook_endpoints";
    pub const WEBHOOK_ENDPOINT: &str = "/v1/webhook_endpoints/{}";

    // Persons (nested under a connected account)
    pub const PERSONS: &str = "/v1/accounts/{}/persons";
    pub const PERSON: &str = "/v1/accounts/{}/persons/{}";
}
