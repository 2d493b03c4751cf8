use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;

use crate::database::MongoUserStore;
use crate::error::Error;

use super::User;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, user: &User) -> Result<(), Error>;

    async fn fetch_users(&self) -> Result<Vec<User>, Error>;
}

#[async_trait]
impl UserStore for MongoUserStore {
    #[tracing::instrument(skip(self))]
    async fn insert_user(&self, user: &User) -> Result<(), Error> {
        self.insert_one(user, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_users(&self) -> Result<Vec<User>, Error> {
        let users: Vec<User> = self
            .find(bson::doc! {}, None)
            .await?
            .try_collect()
            .await?;

        Ok(users)
    }
}
