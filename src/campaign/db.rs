use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;
use mongodb::options::{FindOptions, UpdateOptions};

use crate::database::MongoCampaignStore;
use crate::error::Error;

use super::{Campaign, CampaignFields, CampaignId, CampaignUpsert};

#[async_trait]
pub trait CampaignStore: Send + Sync {
    async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error>;

    async fn fetch_campaigns(&self, limit: i64) -> Result<Vec<Campaign>, Error>;

    async fn fetch_campaigns_by_creator(
        &self,
        creator_email: &str,
    ) -> Result<Vec<Campaign>, Error>;

    async fn fetch_campaign_by_id(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Option<Campaign>, Error>;

    async fn upsert_campaign(
        &self,
        campaign_id: CampaignId,
        fields: &CampaignFields,
    ) -> Result<CampaignUpsert, Error>;

    async fn delete_campaign(
        &self,
        campaign_id: CampaignId,
        creator_email: &str,
    ) -> Result<u64, Error>;
}

#[async_trait]
impl CampaignStore for MongoCampaignStore {
    #[tracing::instrument(skip(self))]
    async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
        self.insert_one(campaign, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaigns(&self, limit: i64) -> Result<Vec<Campaign>, Error> {
        let options = FindOptions::builder().limit(limit).build();
        let campaigns: Vec<Campaign> = self
            .find(bson::doc! {}, options)
            .await?
            .try_collect()
            .await?;

        Ok(campaigns)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaigns_by_creator(
        &self,
        creator_email: &str,
    ) -> Result<Vec<Campaign>, Error> {
        let campaigns: Vec<Campaign> = self
            .find(bson::doc! { "creatorEmail": creator_email }, None)
            .await?
            .try_collect()
            .await?;

        Ok(campaigns)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaign_by_id(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Option<Campaign>, Error> {
        let campaign: Option<Campaign> =
            self.find_one(bson::doc! { "_id": campaign_id }, None).await?;

        Ok(campaign)
    }

    #[tracing::instrument(skip(self))]
    async fn upsert_campaign(
        &self,
        campaign_id: CampaignId,
        fields: &CampaignFields,
    ) -> Result<CampaignUpsert, Error> {
        // absent fields are skipped during serialization, so only the named
        // fields the caller provided end up in $set
        let update = bson::to_document(fields)?;
        let options = UpdateOptions::builder().upsert(true).build();
        let result = self
            .update_one(
                bson::doc! { "_id": campaign_id },
                bson::doc! { "$set": update },
                options,
            )
            .await?;

        Ok(CampaignUpsert {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            created: result.upserted_id.is_some(),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn delete_campaign(
        &self,
        campaign_id: CampaignId,
        creator_email: &str,
    ) -> Result<u64, Error> {
        let result = self
            .delete_one(
                bson::doc! { "_id": campaign_id, "creatorEmail": creator_email },
                None,
            )
            .await?;

        Ok(result.deleted_count)
    }
}
