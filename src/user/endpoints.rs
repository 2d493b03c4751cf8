use actix_web::web::{Data, Json};
use actix_web::{get, post};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;

use super::{manager, User, UserId};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserBody {
    pub id: UserId,
    #[serde(flatten)]
    pub fields: Document,
}

impl UserBody {
    pub fn render(user: User) -> UserBody {
        UserBody {
            id: user.id,
            fields: user.fields,
        }
    }
}

#[post("/users")]
#[tracing::instrument(skip(db))]
pub async fn create_user(
    db: Data<Box<dyn Database>>,
    body: Json<Document>,
) -> Result<Json<UserBody>, Error> {
    let user = manager::create_user(&***db, body.into_inner()).await?;

    Ok(Json(UserBody::render(user)))
}

#[get("/users")]
#[tracing::instrument(skip(db))]
pub async fn get_users(db: Data<Box<dyn Database>>) -> Result<Json<Vec<UserBody>>, Error> {
    let users = manager::list_users(&***db).await?;

    let body = users.into_iter().map(UserBody::render).collect();

    Ok(Json(body))
}
