use mongodb::bson::Document;

use crate::database::Database;
use crate::error::Error;

use super::{Campaign, CampaignFields, CampaignId, CampaignUpsert};

// Keys the server controls; client bodies cannot set them.
const RESERVED_KEYS: [&str; 2] = ["_id", "creatorEmail"];

#[tracing::instrument(skip(db))]
pub async fn create_campaign(
    db: &dyn Database,
    creator_email: String,
    mut fields: Document,
) -> Result<Campaign, Error> {
    for key in RESERVED_KEYS {
        fields.remove(key);
    }

    let campaign = Campaign {
        id: CampaignId::new(),
        creator_email: Some(creator_email),
        fields,
    };

    db.campaigns().insert_campaign(&campaign).await?;

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn list_campaigns(
    db: &dyn Database,
    limit: i64,
    minimum: usize,
) -> Result<Vec<Campaign>, Error> {
    let campaigns = db.campaigns().fetch_campaigns(limit).await?;

    if campaigns.len() < minimum {
        return Err(Error::NotEnoughCampaigns {
            available: campaigns.len(),
            minimum,
        });
    }

    Ok(campaigns)
}

#[tracing::instrument(skip(db))]
pub async fn list_campaigns_by_creator(
    db: &dyn Database,
    creator_email: &str,
) -> Result<Vec<Campaign>, Error> {
    let campaigns = db
        .campaigns()
        .fetch_campaigns_by_creator(creator_email)
        .await?;

    Ok(campaigns)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaign_by_id(
    db: &dyn Database,
    campaign_id: CampaignId,
) -> Result<Campaign, Error> {
    let campaign = db
        .campaigns()
        .fetch_campaign_by_id(campaign_id)
        .await?
        .ok_or(Error::CampaignDoesNotExist { campaign_id })?;

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn update_campaign(
    db: &dyn Database,
    campaign_id: CampaignId,
    fields: CampaignFields,
) -> Result<CampaignUpsert, Error> {
    if fields.is_empty() {
        return Err(Error::UpdateHasNoFields);
    }

    let result = db.campaigns().upsert_campaign(campaign_id, &fields).await?;

    Ok(result)
}

#[tracing::instrument(skip(db))]
pub async fn delete_campaign(
    db: &dyn Database,
    campaign_id: CampaignId,
    creator_email: &str,
) -> Result<(), Error> {
    let deleted = db
        .campaigns()
        .delete_campaign(campaign_id, creator_email)
        .await?;

    if deleted == 0 {
        return Err(Error::CampaignDoesNotExist { campaign_id });
    }

    Ok(())
}
