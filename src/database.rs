use mongodb::{bson, Collection};

use crate::campaign::db::CampaignStore;
use crate::campaign::Campaign;
use crate::donation::db::DonationStore;
use crate::donation::Donation;
use crate::error::Error;
use crate::user::db::UserStore;
use crate::user::User;

pub type MongoCampaignStore = Collection<Campaign>;
pub type MongoDonationStore = Collection<Donation>;
pub type MongoUserStore = Collection<User>;

pub trait Database: Send + Sync {
    fn campaigns(&self) -> &dyn CampaignStore;
    fn donations(&self) -> &dyn DonationStore;
    fn users(&self) -> &dyn UserStore;
}

#[derive(Clone)]
pub struct MongoDatabase {
    campaigns: MongoCampaignStore,
    donations: MongoDonationStore,
    users: MongoUserStore,
}

impl MongoDatabase {
    pub async fn initialize(db: mongodb::Database) -> Result<MongoDatabase, Error> {
        // confirm connectivity before accepting requests
        db.run_command(bson::doc! { "ping": 1 }, None).await?;

        Ok(MongoDatabase {
            campaigns: db.collection("campaigns"),
            donations: db.collection("donations"),
            users: db.collection("users"),
        })
    }
}

impl Database for MongoDatabase {
    fn campaigns(&self) -> &dyn CampaignStore {
        &self.campaigns
    }

    fn donations(&self) -> &dyn DonationStore {
        &self.donations
    }

    fn users(&self) -> &dyn UserStore {
        &self.users
    }
}

#[cfg(test)]
pub mod test {
    use async_trait::async_trait;

    use crate::campaign::db::CampaignStore;
    use crate::campaign::{Campaign, CampaignFields, CampaignId, CampaignUpsert};
    use crate::donation::db::DonationStore;
    use crate::donation::Donation;
    use crate::error::Error;
    use crate::user::db::UserStore;
    use crate::user::User;

    use super::Database;

    pub struct MockDatabase {
        pub campaigns: MockCampaignStore,
        pub donations: MockDonationStore,
        pub users: MockUserStore,
    }

    impl MockDatabase {
        pub fn new() -> MockDatabase {
            MockDatabase {
                campaigns: MockCampaignStore::new(),
                donations: MockDonationStore::new(),
                users: MockUserStore::new(),
            }
        }
    }

    impl Database for MockDatabase {
        fn campaigns(&self) -> &dyn CampaignStore {
            &self.campaigns
        }

        fn donations(&self) -> &dyn DonationStore {
            &self.donations
        }

        fn users(&self) -> &dyn UserStore {
            &self.users
        }
    }

    pub struct MockCampaignStore {
        pub on_insert_campaign: Box<dyn Fn(&Campaign) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_campaigns: Box<dyn Fn(i64) -> Result<Vec<Campaign>, Error> + Send + Sync>,
        pub on_fetch_campaigns_by_creator:
            Box<dyn Fn(&str) -> Result<Vec<Campaign>, Error> + Send + Sync>,
        pub on_fetch_campaign_by_id:
            Box<dyn Fn(CampaignId) -> Result<Option<Campaign>, Error> + Send + Sync>,
        pub on_upsert_campaign: Box<
            dyn Fn(CampaignId, &CampaignFields) -> Result<CampaignUpsert, Error> + Send + Sync,
        >,
        pub on_delete_campaign: Box<dyn Fn(CampaignId, &str) -> Result<u64, Error> + Send + Sync>,
    }

    impl MockCampaignStore {
        pub fn new() -> MockCampaignStore {
            MockCampaignStore {
                on_insert_campaign: Box::new(|_| panic!("unexpected call to insert_campaign")),
                on_fetch_campaigns: Box::new(|_| panic!("unexpected call to fetch_campaigns")),
                on_fetch_campaigns_by_creator: Box::new(|_| {
                    panic!("unexpected call to fetch_campaigns_by_creator")
                }),
                on_fetch_campaign_by_id: Box::new(|_| {
                    panic!("unexpected call to fetch_campaign_by_id")
                }),
                on_upsert_campaign: Box::new(|_, _| panic!("unexpected call to upsert_campaign")),
                on_delete_campaign: Box::new(|_, _| panic!("unexpected call to delete_campaign")),
            }
        }
    }

    #[async_trait]
    impl CampaignStore for MockCampaignStore {
        async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
            (self.on_insert_campaign)(campaign)
        }

        async fn fetch_campaigns(&self, limit: i64) -> Result<Vec<Campaign>, Error> {
            (self.on_fetch_campaigns)(limit)
        }

        async fn fetch_campaigns_by_creator(
            &self,
            creator_email: &str,
        ) -> Result<Vec<Campaign>, Error> {
            (self.on_fetch_campaigns_by_creator)(creator_email)
        }

        async fn fetch_campaign_by_id(
            &self,
            campaign_id: CampaignId,
        ) -> Result<Option<Campaign>, Error> {
            (self.on_fetch_campaign_by_id)(campaign_id)
        }

        async fn upsert_campaign(
            &self,
            campaign_id: CampaignId,
            fields: &CampaignFields,
        ) -> Result<CampaignUpsert, Error> {
            (self.on_upsert_campaign)(campaign_id, fields)
        }

        async fn delete_campaign(
            &self,
            campaign_id: CampaignId,
            creator_email: &str,
        ) -> Result<u64, Error> {
            (self.on_delete_campaign)(campaign_id, creator_email)
        }
    }

    pub struct MockDonationStore {
        pub on_insert_donation: Box<dyn Fn(&Donation) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_donations: Box<dyn Fn() -> Result<Vec<Donation>, Error> + Send + Sync>,
    }

    impl MockDonationStore {
        pub fn new() -> MockDonationStore {
            MockDonationStore {
                on_insert_donation: Box::new(|_| panic!("unexpected call to insert_donation")),
                on_fetch_donations: Box::new(|| panic!("unexpected call to fetch_donations")),
            }
        }
    }

    #[async_trait]
    impl DonationStore for MockDonationStore {
        async fn insert_donation(&self, donation: &Donation) -> Result<(), Error> {
            (self.on_insert_donation)(donation)
        }

        async fn fetch_donations(&self) -> Result<Vec<Donation>, Error> {
            (self.on_fetch_donations)()
        }
    }

    pub struct MockUserStore {
        pub on_insert_user: Box<dyn Fn(&User) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_users: Box<dyn Fn() -> Result<Vec<User>, Error> + Send + Sync>,
    }

    impl MockUserStore {
        pub fn new() -> MockUserStore {
            MockUserStore {
                on_insert_user: Box::new(|_| panic!("unexpected call to insert_user")),
                on_fetch_users: Box::new(|| panic!("unexpected call to fetch_users")),
            }
        }
    }

    #[async_trait]
    impl UserStore for MockUserStore {
        async fn insert_user(&self, user: &User) -> Result<(), Error> {
            (self.on_insert_user)(user)
        }

        async fn fetch_users(&self) -> Result<Vec<User>, Error> {
            (self.on_fetch_users)()
        }
    }
}
