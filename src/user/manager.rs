use mongodb::bson::Document;

use crate::database::Database;
use crate::error::Error;

use super::{User, UserId};

#[tracing::instrument(skip(db))]
pub async fn create_user(db: &dyn Database, mut fields: Document) -> Result<User, Error> {
    fields.remove("_id");

    let user = User {
        id: UserId::new(),
        fields,
    };

    db.users().insert_user(&user).await?;

    Ok(user)
}

#[tracing::instrument(skip(db))]
pub async fn list_users(db: &dyn Database) -> Result<Vec<User>, Error> {
    let users = db.users().fetch_users().await?;

    Ok(users)
}
