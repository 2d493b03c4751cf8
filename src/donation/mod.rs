use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type DonationId = TypedId<Donation>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Donation {
    #[serde(rename = "_id")]
    pub id: DonationId,
    #[serde(flatten)]
    pub fields: Document,
}

impl TypedIdMarker for Donation {
    fn tag() -> &'static str {
        "DON"
    }
}
