// Model types for Stripe resources and their request params

pub mod account;
pub mod person;
pub mod webhook_endpoint;

pub use account::{
    AccountAddress, AccountAddressParams, Dob, DobParams, IdentityVerification,
    IdentityVerificationDocument, IdentityVerificationDocumentParams, IdentityVerificationParams,
    IdentityVerificationStatus,
};
pub use person::{
    Person, PersonListParams, PersonParams, Relationship, RelationshipParams, Requirements,
};
pub use webhook_endpoint::{
    WebhookEndpoint, WebhookEndpointListParams, WebhookEndpointParams, WebhookEndpointStatus,
};
