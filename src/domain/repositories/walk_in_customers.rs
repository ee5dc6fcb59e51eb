use anyhow::Result;
use axum::async_trait;

use crate::domain::entities::walk_in_customers::{
    RegisterWalkInCustomerEntity, WalkInCustomerEntity,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalkInCustomerRepository {
    async fn register(
        &self,
        register_walk_in_customer_entity: RegisterWalkInCustomerEntity,
    ) -> Result<WalkInCustomerEntity>;
    async fn exists_by_mac_address(&self, mac_address: String) -> Result<bool>;
    /// Case-insensitive substring match on name or MAC address when a search
    /// term is given, newest first.
    async fn list(&self, search: Option<String>) -> Result<Vec<WalkInCustomerEntity>>;
    /// Returns how many rows were removed (0 or 1).
    async fn delete(&self, customer_id: i64) -> Result<usize>;
}
