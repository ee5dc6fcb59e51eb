use anyhow::Result;
use axum::async_trait;
use uuid::Uuid;

use crate::domain::entities::subscriptions::{InsertSubscriptionEntity, SubscriptionEntity};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionRepository {
    async fn subscribe(&self, insert_subscription_entity: InsertSubscriptionEntity) -> Result<i64>;
    async fn find_latest_active_by_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<Option<SubscriptionEntity>>;
    async fn deactivate(&self, subscription_id: i64) -> Result<()>;
    /// Returns how many rows were flipped off.
    async fn deactivate_all_for_profile(&self, profile_id: Uuid) -> Result<usize>;
}
