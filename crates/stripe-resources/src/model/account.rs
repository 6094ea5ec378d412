// Account-owned value objects embedded in a person

use serde::{Deserialize, Serialize};

/// Postal address
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountAddress {
    pub city: Option<String>,
    pub country: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    /// Only used for Japanese (kana/kanji) addresses
    pub town: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct AccountAddressParams {
    pub city: Option<String>,
    pub country: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub town: Option<String>,
}

/// Date of birth
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dob {
    pub day: Option<i64>,
    pub month: Option<i64>,
    pub year: Option<i64>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct DobParams {
    pub day: Option<i64>,
    pub month: Option<i64>,
    pub year: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityVerificationStatus {
    Pending,
    #[default]
    Unverified,
    Verified,
    #[serde(other)]
    Unknown,
}

/// Identity document uploaded for verification; `back`/`front` are file ids
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityVerificationDocument {
    pub back: Option<String>,
    pub details: Option<String>,
    pub details_code: Option<String>,
    pub front: Option<String>,
}

/// Verification state of a person
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityVerification {
    pub details: Option<String>,
    pub details_code: Option<String>,
    pub document: Option<IdentityVerificationDocument>,
    pub status: IdentityVerificationStatus,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct IdentityVerificationDocumentParams {
    pub back: Option<String>,
    pub front: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct IdentityVerificationParams {
    pub document: Option<IdentityVerificationDocumentParams>,
}
