use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type UserId = TypedId<User>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    #[serde(flatten)]
    pub fields: Document,
}

impl TypedIdMarker for User {
    fn tag() -> &'static str {
        "USR"
    }
}
