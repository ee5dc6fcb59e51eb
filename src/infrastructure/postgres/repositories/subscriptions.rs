use anyhow::Result;
use async_trait::async_trait;
use diesel::{insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    entities::subscriptions::{InsertSubscriptionEntity, SubscriptionEntity},
    repositories::subscriptions::SubscriptionRepository,
};
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::subscriptions};

pub struct SubscriptionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SubscriptionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionPostgres {
    async fn subscribe(&self, insert_subscription_entity: InsertSubscriptionEntity) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(subscriptions::table)
            .values(&insert_subscription_entity)
            .returning(subscriptions::id)
            .get_result::<i64>(&mut conn)?;

        Ok(result)
    }

    async fn find_latest_active_by_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<Option<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = subscriptions::table
            .filter(subscriptions::profile_id.eq(profile_id))
            .filter(subscriptions::is_active.eq(true))
            .order(subscriptions::created_at.desc())
            .select(SubscriptionEntity::as_select())
            .first::<SubscriptionEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn deactivate(&self, subscription_id: i64) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(subscriptions::table)
            .filter(subscriptions::id.eq(subscription_id))
            .set(subscriptions::is_active.eq(false))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn deactivate_all_for_profile(&self, profile_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(subscriptions::table)
            .filter(subscriptions::profile_id.eq(profile_id))
            .filter(subscriptions::is_active.eq(true))
            .set(subscriptions::is_active.eq(false))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
