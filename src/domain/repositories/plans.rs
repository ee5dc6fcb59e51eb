use anyhow::Result;
use axum::async_trait;

use crate::domain::entities::plans::PlanEntity;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanRepository {
    /// Active plans ordered by ascending duration.
    async fn list_active_plans(&self) -> Result<Vec<PlanEntity>>;
    async fn find_active_plan_by_id(&self, plan_id: i64) -> Result<Option<PlanEntity>>;
    /// Lookup without the active filter, for displaying historical
    /// subscriptions whose plan has since been retired.
    async fn find_plan_by_id(&self, plan_id: i64) -> Result<Option<PlanEntity>>;
}
