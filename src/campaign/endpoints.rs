use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, put, HttpRequest};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::auth::{self, Authenticator};
use crate::config::Config;
use crate::database::Database;
use crate::error::Error;

use super::{manager, Campaign, CampaignFields, CampaignId, CampaignUpsert};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignBody {
    pub id: CampaignId,
    #[serde(rename = "creatorEmail", default, skip_serializing_if = "Option::is_none")]
    pub creator_email: Option<String>,
    #[serde(flatten)]
    pub fields: Document,
}

impl CampaignBody {
    pub fn render(campaign: Campaign) -> CampaignBody {
        CampaignBody {
            id: campaign.id,
            creator_email: campaign.creator_email,
            fields: campaign.fields,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateCampaignBody {
    pub matched_count: u64,
    pub modified_count: u64,
    pub created: bool,
}

impl UpdateCampaignBody {
    pub fn render(upsert: CampaignUpsert) -> UpdateCampaignBody {
        UpdateCampaignBody {
            matched_count: upsert.matched_count,
            modified_count: upsert.modified_count,
            created: upsert.created,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteCampaignBody {
    pub campaign_id: CampaignId,
}

#[post("/campaigns")]
#[tracing::instrument(skip(db, auth))]
pub async fn create_campaign(
    db: Data<Box<dyn Database>>,
    auth: Data<Box<dyn Authenticator>>,
    req: HttpRequest,
    body: Json<Document>,
) -> Result<Json<CampaignBody>, Error> {
    let identity = auth::caller_identity(&***auth, &req).await?;
    let campaign = manager::create_campaign(&***db, identity.email, body.into_inner()).await?;

    Ok(Json(CampaignBody::render(campaign)))
}

#[get("/campaigns")]
#[tracing::instrument(skip(db, config))]
pub async fn get_campaigns(
    db: Data<Box<dyn Database>>,
    config: Data<Config>,
) -> Result<Json<Vec<CampaignBody>>, Error> {
    let campaigns = manager::list_campaigns(
        &***db,
        config.campaign_list_limit,
        config.campaign_list_minimum,
    )
    .await?;

    let body = campaigns.into_iter().map(CampaignBody::render).collect();

    Ok(Json(body))
}

// registered before get_campaign_by_id so the literal segment is not parsed as an id
#[get("/campaigns/mine")]
#[tracing::instrument(skip(db, auth))]
pub async fn get_own_campaigns(
    db: Data<Box<dyn Database>>,
    auth: Data<Box<dyn Authenticator>>,
    req: HttpRequest,
) -> Result<Json<Vec<CampaignBody>>, Error> {
    let identity = auth::caller_identity(&***auth, &req).await?;
    let campaigns = manager::list_campaigns_by_creator(&***db, &identity.email).await?;

    let body = campaigns.into_iter().map(CampaignBody::render).collect();

    Ok(Json(body))
}

#[get("/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db))]
pub async fn get_campaign_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<Json<CampaignBody>, Error> {
    let campaign_id = params.into_inner();
    let campaign = manager::get_campaign_by_id(&***db, campaign_id).await?;

    Ok(Json(CampaignBody::render(campaign)))
}

#[put("/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db))]
pub async fn update_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
    body: Json<CampaignFields>,
) -> Result<Json<UpdateCampaignBody>, Error> {
    let campaign_id = params.into_inner();
    let result = manager::update_campaign(&***db, campaign_id, body.into_inner()).await?;

    Ok(Json(UpdateCampaignBody::render(result)))
}

#[delete("/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db, auth))]
pub async fn delete_campaign(
    db: Data<Box<dyn Database>>,
    auth: Data<Box<dyn Authenticator>>,
    req: HttpRequest,
    params: Path<CampaignId>,
) -> Result<Json<DeleteCampaignBody>, Error> {
    let campaign_id = params.into_inner();
    let identity = auth::caller_identity(&***auth, &req).await?;
    manager::delete_campaign(&***db, campaign_id, &identity.email).await?;

    Ok(Json(DeleteCampaignBody { campaign_id }))
}
