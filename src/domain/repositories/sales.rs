use anyhow::Result;
use axum::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::sales::InsertSaleEntity;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SaleRepository {
    async fn record_sale(&self, insert_sale_entity: InsertSaleEntity) -> Result<i64>;
    async fn revenue_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<i64>;
    async fn count_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<i64>;
    async fn count_by_plan_code_between(
        &self,
        plan_code: String,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<i64>;
}
