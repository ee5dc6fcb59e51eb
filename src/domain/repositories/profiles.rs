use anyhow::Result;
use axum::async_trait;
use uuid::Uuid;

use crate::domain::entities::profiles::{ProfileEntity, RegisterProfileEntity};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository {
    async fn register(&self, register_profile_entity: RegisterProfileEntity) -> Result<Uuid>;
    async fn find_by_id(&self, profile_id: Uuid) -> Result<Option<ProfileEntity>>;
    async fn find_by_email(&self, email: String) -> Result<Option<ProfileEntity>>;
    async fn exists_by_email(&self, email: String) -> Result<bool>;
    async fn exists_by_mac_address(&self, mac_address: String) -> Result<bool>;
    /// Bumps lifetime spend and loyalty balance in one statement.
    async fn add_spend(&self, profile_id: Uuid, amount_ugx: i64, points: i32) -> Result<()>;
}
