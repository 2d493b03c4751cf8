use actix_web::web::{self, Data, JsonConfig, PathConfig};
use actix_web::{get, App, HttpServer, ResponseError};
use mongodb::Client;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub mod auth;
pub mod campaign;
pub mod config;
pub mod database;
pub mod donation;
pub mod error;
pub mod typedid;
pub mod user;

pub use crate::campaign::{CampaignBody, DeleteCampaignBody, UpdateCampaignBody};
pub use crate::config::Config;
pub use crate::donation::DonationBody;
pub use crate::error::Error;
pub use crate::user::UserBody;

use crate::auth::{Authenticator, TokenAuthenticator};
use crate::database::{Database, MongoDatabase};

#[get("/")]
pub async fn liveness() -> &'static str {
    "Crowdfunding server is running"
}

pub async fn serve(config: Config) -> Result<(), Error> {
    info!("connecting to db: {}", config.database_uri);
    let db = Client::with_uri_str(&config.database_uri)
        .await?
        .database(&config.database_name);
    let db = MongoDatabase::initialize(db).await?;
    info!("connected to db");

    let auth = TokenAuthenticator::new(config.auth_tokens.clone());
    let address = (config.host.clone(), config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(JsonConfig::default().error_handler(|err, _req| {
                // format json errors with custom format
                Error::InvalidJson(err).into()
            }))
            .app_data(PathConfig::default().error_handler(|err, _req| {
                // format path errors with custom format
                Error::InvalidPath(err).into()
            }))
            .app_data(Data::new(Box::new(db.clone()) as Box<dyn Database>))
            .app_data(Data::new(Box::new(auth.clone()) as Box<dyn Authenticator>))
            .app_data(Data::new(config.clone()))
            .wrap(TracingLogger::default())
            .service(liveness)
            .service(campaign::endpoints::create_campaign)
            .service(campaign::endpoints::get_campaigns)
            .service(campaign::endpoints::get_own_campaigns)
            .service(campaign::endpoints::get_campaign_by_id)
            .service(campaign::endpoints::update_campaign)
            .service(campaign::endpoints::delete_campaign)
            .service(donation::endpoints::create_donation)
            .service(donation::endpoints::get_donations)
            .service(user::endpoints::create_user)
            .service(user::endpoints::get_users)
            .default_service(web::to(|| async { Error::PathDoesNotExist.error_response() }))
    })
    .bind(address)?
    .run()
    .await?;

    Ok(())
}

pub fn run(config: Config) -> Result<(), Error> {
    actix_web::rt::System::new().block_on(serve(config))
}
