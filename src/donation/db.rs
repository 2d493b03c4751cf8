use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;

use crate::database::MongoDonationStore;
use crate::error::Error;

use super::Donation;

#[async_trait]
pub trait DonationStore: Send + Sync {
    async fn insert_donation(&self, donation: &Donation) -> Result<(), Error>;

    async fn fetch_donations(&self) -> Result<Vec<Donation>, Error>;
}

#[async_trait]
impl DonationStore for MongoDonationStore {
    #[tracing::instrument(skip(self))]
    async fn insert_donation(&self, donation: &Donation) -> Result<(), Error> {
        self.insert_one(donation, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_donations(&self) -> Result<Vec<Donation>, Error> {
        let donations: Vec<Donation> = self
            .find(bson::doc! {}, None)
            .await?
            .try_collect()
            .await?;

        Ok(donations)
    }
}
