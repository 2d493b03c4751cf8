use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type CampaignId = TypedId<Campaign>;

// Documents are schemaless: the only extracted field is the one the
// owner-scoped operations filter on. Everything else rides in `fields`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Campaign {
    #[serde(rename = "_id")]
    pub id: CampaignId,
    #[serde(rename = "creatorEmail", default, skip_serializing_if = "Option::is_none")]
    pub creator_email: Option<String>,
    #[serde(flatten)]
    pub fields: Document,
}

impl TypedIdMarker for Campaign {
    fn tag() -> &'static str {
        "CMP"
    }
}

// The named fields the update operation is allowed to overwrite; absent
// fields are left untouched. `amount` and `date` arrive in whatever shape
// the client stored them.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Bson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Bson>,
}

impl CampaignFields {
    pub fn is_empty(&self) -> bool {
        self.photo_url.is_none()
            && self.title_name.is_none()
            && self.name.is_none()
            && self.campaign_type.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.date.is_none()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CampaignUpsert {
    pub matched_count: u64,
    pub modified_count: u64,
    pub created: bool,
}
