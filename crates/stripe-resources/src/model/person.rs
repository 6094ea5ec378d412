// Person model types
//
// `None` param fields are left out of the request form entirely.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stripe_client::{ListParams, ListParamsContainer, Object, Params, ParamsContainer};

use super::account::{
    AccountAddress, AccountAddressParams, Dob, DobParams, IdentityVerification,
    IdentityVerificationParams,
};

/// Role of a person in the business behind an account
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    pub controller: Option<bool>,
    pub director: Option<bool>,
    pub email: Option<String>,
    pub executive: Option<bool>,
    pub owner: Option<bool>,
    pub percent_ownership: Option<f64>,
    pub phone: Option<String>,
    pub representative: Option<bool>,
    pub title: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RelationshipParams {
    pub controller: Option<bool>,
    pub director: Option<bool>,
    pub email: Option<String>,
    pub executive: Option<bool>,
    pub owner: Option<bool>,
    pub percent_ownership: Option<f64>,
    pub phone: Option<String>,
    pub representative: Option<bool>,
    pub title: Option<String>,
}

/// Verification fields still outstanding for a person
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    pub currently_due: Vec<String>,
    pub eventually_due: Vec<String>,
    pub past_due: Vec<String>,
}

/// An individual associated with a connected account.
///
/// May arrive as a bare id when not expanded; only `id` is set then.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", default)]
pub struct Person {
    pub id: String,
    pub object: String,
    pub account: String,
    pub address: Option<AccountAddress>,
    pub address_kana: Option<AccountAddress>,
    pub address_kanji: Option<AccountAddress>,
    pub created: i64,
    /// Only set on the response to a delete
    pub deleted: bool,
    pub dob: Option<Dob>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub first_name_kana: Option<String>,
    pub first_name_kanji: Option<String>,
    pub gender: Option<String>,
    pub id_number_provided: bool,
    pub last_name: Option<String>,
    pub last_name_kana: Option<String>,
    pub last_name_kanji: Option<String>,
    pub maiden_name: Option<String>,
    pub metadata: BTreeMap<String, String>,
    pub phone: Option<String>,
    pub relationship: Option<Relationship>,
    pub requirements: Option<Requirements>,
    pub ssn_last_4_provided: bool,
    pub verification: Option<IdentityVerification>,
}

stripe_client::impl_expandable!(Person);

impl Object for Person {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Parameters for creating or updating a person
#[derive(Clone, Debug, Default, Serialize)]
pub struct PersonParams {
    #[serde(flatten)]
    pub params: Params,
    /// Owning account; goes into the URL, never into the form
    #[serde(skip)]
    pub account: Option<String>,
    pub address: Option<AccountAddressParams>,
    pub address_kana: Option<AccountAddressParams>,
    pub address_kanji: Option<AccountAddressParams>,
    pub dob: Option<DobParams>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub first_name_kana: Option<String>,
    pub first_name_kanji: Option<String>,
    pub gender: Option<String>,
    pub id_number: Option<String>,
    pub last_name: Option<String>,
    pub last_name_kana: Option<String>,
    pub last_name_kanji: Option<String>,
    pub maiden_name: Option<String>,
    pub personal_id_number: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<RelationshipParams>,
    pub ssn_last_4: Option<String>,
    pub verification: Option<IdentityVerificationParams>,
}

impl PersonParams {
    pub fn for_account(account: &str) -> Self {
        Self {
            account: Some(account.to_string()),
            ..Default::default()
        }
    }
}

impl ParamsContainer for PersonParams {
    fn params(&self) -> &Params {
        &self.params
    }
}

/// Parameters for listing the persons of an account
#[derive(Clone, Debug, Default, Serialize)]
pub struct PersonListParams {
    #[serde(flatten)]
    pub list_params: ListParams,
    #[serde(skip)]
    pub account: Option<String>,
    pub director: Option<bool>,
    pub executive: Option<bool>,
    pub owner: Option<bool>,
}

impl PersonListParams {
    pub fn for_account(account: &str) -> Self {
        Self {
            account: Some(account.to_string()),
            ..Default::default()
        }
    }
}

impl ListParamsContainer for PersonListParams {
    fn list_params(&self) -> &ListParams {
        &self.list_params
    }
}
