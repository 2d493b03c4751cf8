use actix_web::web::{Data, Json};
use actix_web::{get, post};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;

use super::{manager, Donation, DonationId};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DonationBody {
    pub id: DonationId,
    #[serde(flatten)]
    pub fields: Document,
}

impl DonationBody {
    pub fn render(donation: Donation) -> DonationBody {
        DonationBody {
            id: donation.id,
            fields: donation.fields,
        }
    }
}

#[post("/donations")]
#[tracing::instrument(skip(db))]
pub async fn create_donation(
    db: Data<Box<dyn Database>>,
    body: Json<Document>,
) -> Result<Json<DonationBody>, Error> {
    let donation = manager::create_donation(&***db, body.into_inner()).await?;

    Ok(Json(DonationBody::render(donation)))
}

#[get("/donations")]
#[tracing::instrument(skip(db))]
pub async fn get_donations(db: Data<Box<dyn Database>>) -> Result<Json<Vec<DonationBody>>, Error> {
    let donations = manager::list_donations(&***db).await?;

    let body = donations.into_iter().map(DonationBody::render).collect();

    Ok(Json(body))
}
