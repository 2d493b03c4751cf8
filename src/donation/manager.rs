use mongodb::bson::Document;

use crate::database::Database;
use crate::error::Error;

use super::{Donation, DonationId};

#[tracing::instrument(skip(db))]
pub async fn create_donation(db: &dyn Database, mut fields: Document) -> Result<Donation, Error> {
    fields.remove("_id");

    let donation = Donation {
        id: DonationId::new(),
        fields,
    };

    db.donations().insert_donation(&donation).await?;

    Ok(donation)
}

#[tracing::instrument(skip(db))]
pub async fn list_donations(db: &dyn Database) -> Result<Vec<Donation>, Error> {
    let donations = db.donations().fetch_donations().await?;

    Ok(donations)
}
