use std::sync::Arc;

use anyhow::{Context, anyhow};
use chrono::{Duration, Utc};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::subscriptions::InsertSubscriptionEntity,
    repositories::{
        plans::PlanRepository, profiles::ProfileRepository,
        subscriptions::SubscriptionRepository,
    },
    value_objects::{
        loyalty,
        plans::PlanModel,
        subscriptions::{CurrentSubscriptionModel, RemainingTime},
    },
};

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("plan not found")]
    PlanNotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SubscriptionError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            SubscriptionError::PlanNotFound => StatusCode::NOT_FOUND,
            SubscriptionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type SubscriptionResult<T> = std::result::Result<T, SubscriptionError>;

pub struct SubscriptionUseCase<Plan, Sub, Prof>
where
    Plan: PlanRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
    Prof: ProfileRepository + Send + Sync + 'static,
{
    plan_repo: Arc<Plan>,
    subscription_repo: Arc<Sub>,
    profile_repo: Arc<Prof>,
}

impl<Plan, Sub, Prof> SubscriptionUseCase<Plan, Sub, Prof>
where
    Plan: PlanRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
    Prof: ProfileRepository + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<Plan>, subscription_repo: Arc<Sub>, profile_repo: Arc<Prof>) -> Self {
        Self {
            plan_repo,
            subscription_repo,
            profile_repo,
        }
    }

    pub async fn list_plans(&self) -> SubscriptionResult<Vec<PlanModel>> {
        info!("subscriptions: listing active plans");
        let plans = self.plan_repo.list_active_plans().await.map_err(|err| {
            error!(db_error = ?err, "subscriptions: failed to list active plans");
            SubscriptionError::Internal(err)
        })?;

        let plan_count = plans.len();
        info!(plan_count, "subscriptions: active plans loaded");
        Ok(plans.into_iter().map(PlanModel::from).collect())
    }

    /// The profile's latest active subscription with its plan and the time
    /// left on it. A subscription whose end has passed is reported expired
    /// and flipped inactive on the way out.
    pub async fn current_subscription(
        &self,
        profile_id: Uuid,
    ) -> SubscriptionResult<Option<CurrentSubscriptionModel>> {
        let subscription = match self
            .subscription_repo
            .find_latest_active_by_profile(profile_id)
            .await
            .map_err(|err| {
                error!(
                    %profile_id,
                    db_error = ?err,
                    "subscriptions: failed to load current subscription"
                );
                SubscriptionError::Internal(err)
            })? {
            Some(subscription) => subscription,
            None => {
                info!(%profile_id, "subscriptions: no active subscription");
                return Ok(None);
            }
        };

        let plan = self
            .plan_repo
            .find_plan_by_id(subscription.plan_id)
            .await
            .map_err(|err| {
                error!(
                    %profile_id,
                    plan_id = subscription.plan_id,
                    db_error = ?err,
                    "subscriptions: failed to load plan for subscription"
                );
                SubscriptionError::Internal(err)
            })?
            .ok_or_else(|| {
                SubscriptionError::Internal(anyhow!(
                    "subscription {} references missing plan {}",
                    subscription.id,
                    subscription.plan_id
                ))
            })?;

        let remaining = RemainingTime::until(subscription.ends_at, Utc::now());
        if remaining.expired {
            info!(
                %profile_id,
                subscription_id = subscription.id,
                "subscriptions: subscription has lapsed, deactivating"
            );
            self.subscription_repo
                .deactivate(subscription.id)
                .await
                .map_err(|err| {
                    error!(
                        %profile_id,
                        subscription_id = subscription.id,
                        db_error = ?err,
                        "subscriptions: failed to deactivate lapsed subscription"
                    );
                    SubscriptionError::Internal(err)
                })?;
        }

        Ok(Some(CurrentSubscriptionModel {
            subscription_id: subscription.id,
            plan: PlanModel::from(plan),
            starts_at: subscription.starts_at,
            ends_at: subscription.ends_at,
            remaining,
        }))
    }

    /// Starts a new subscription immediately. Any previously active
    /// subscription is deactivated first so at most one stays active per
    /// profile. Spend and loyalty points accrue on the discounted price.
    pub async fn subscribe(
        &self,
        profile_id: Uuid,
        plan_id: i64,
    ) -> SubscriptionResult<CurrentSubscriptionModel> {
        info!(%profile_id, plan_id, "subscriptions: subscribe requested");

        let plan = self
            .plan_repo
            .find_active_plan_by_id(plan_id)
            .await
            .map_err(|err| {
                error!(
                    %profile_id,
                    plan_id,
                    db_error = ?err,
                    "subscriptions: failed to load plan for subscribe"
                );
                SubscriptionError::Internal(err)
            })?
            .ok_or_else(|| {
                let err = SubscriptionError::PlanNotFound;
                warn!(
                    %profile_id,
                    plan_id,
                    status = err.status_code().as_u16(),
                    "subscriptions: subscribe rejected, plan not found"
                );
                err
            })?;

        let deactivated = self
            .subscription_repo
            .deactivate_all_for_profile(profile_id)
            .await
            .map_err(|err| {
                error!(
                    %profile_id,
                    db_error = ?err,
                    "subscriptions: failed to deactivate previous subscriptions"
                );
                SubscriptionError::Internal(err)
            })?;
        if deactivated > 0 {
            info!(
                %profile_id,
                deactivated,
                "subscriptions: previous subscriptions deactivated"
            );
        }

        let starts_at = Utc::now();
        let ends_at = starts_at
            .checked_add_signed(Duration::days(plan.duration_days.into()))
            .context("failed to compute subscription end date")?;

        let subscription_id = self
            .subscription_repo
            .subscribe(InsertSubscriptionEntity {
                profile_id,
                plan_id: plan.id,
                starts_at,
                ends_at,
                is_active: true,
            })
            .await
            .map_err(|err| {
                error!(
                    %profile_id,
                    plan_id,
                    db_error = ?err,
                    "subscriptions: failed to insert subscription"
                );
                SubscriptionError::Internal(err)
            })?;

        let points = loyalty::points_for_amount(plan.final_price_ugx);
        self.profile_repo
            .add_spend(profile_id, plan.final_price_ugx.into(), points)
            .await
            .map_err(|err| {
                error!(
                    %profile_id,
                    subscription_id,
                    db_error = ?err,
                    "subscriptions: failed to accrue spend and loyalty points"
                );
                SubscriptionError::Internal(err)
            })?;

        info!(
            %profile_id,
            subscription_id,
            plan_id,
            points,
            "subscriptions: subscription created"
        );

        Ok(CurrentSubscriptionModel {
            subscription_id,
            plan: PlanModel::from(plan),
            starts_at,
            ends_at,
            remaining: RemainingTime::until(ends_at, starts_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{plans::PlanEntity, subscriptions::SubscriptionEntity},
        repositories::{
            plans::MockPlanRepository, profiles::MockProfileRepository,
            subscriptions::MockSubscriptionRepository,
        },
    };
    use mockall::predicate::eq;

    fn monthly_plan() -> PlanEntity {
        PlanEntity {
            id: 3,
            name: "Monthly Internet Plan".to_string(),
            duration_days: 30,
            price_ugx: 30_000,
            final_price_ugx: 27_000,
            discount_percent: 10,
            is_active: true,
        }
    }

    fn active_subscription(profile_id: Uuid, ends_in: Duration) -> SubscriptionEntity {
        let now = Utc::now();
        SubscriptionEntity {
            id: 42,
            profile_id,
            plan_id: 3,
            starts_at: now - Duration::days(1),
            ends_at: now + ends_in,
            is_active: true,
            created_at: now - Duration::days(1),
        }
    }

    #[tokio::test]
    async fn subscribe_deactivates_previous_and_accrues_points() {
        let profile_id = Uuid::new_v4();

        let mut plan_repo = MockPlanRepository::new();
        let mut subscription_repo = MockSubscriptionRepository::new();
        let mut profile_repo = MockProfileRepository::new();

        plan_repo
            .expect_find_active_plan_by_id()
            .with(eq(3i64))
            .returning(|_| Ok(Some(monthly_plan())));
        subscription_repo
            .expect_deactivate_all_for_profile()
            .with(eq(profile_id))
            .times(1)
            .returning(|_| Ok(1));
        subscription_repo
            .expect_subscribe()
            .withf(move |entity| {
                entity.profile_id == profile_id && entity.plan_id == 3 && entity.is_active
            })
            .returning(|_| Ok(7));
        profile_repo
            .expect_add_spend()
            .with(eq(profile_id), eq(27_000i64), eq(27))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let usecase = SubscriptionUseCase::new(
            Arc::new(plan_repo),
            Arc::new(subscription_repo),
            Arc::new(profile_repo),
        );

        let current = usecase.subscribe(profile_id, 3).await.unwrap();
        assert_eq!(current.subscription_id, 7);
        assert_eq!(current.plan.final_price_ugx, 27_000);
        assert!(!current.remaining.expired);
        assert_eq!(current.remaining.days, 30);
    }

    #[tokio::test]
    async fn subscribe_rejects_unknown_plan() {
        let profile_id = Uuid::new_v4();

        let mut plan_repo = MockPlanRepository::new();
        let mut subscription_repo = MockSubscriptionRepository::new();
        let profile_repo = MockProfileRepository::new();

        plan_repo
            .expect_find_active_plan_by_id()
            .returning(|_| Ok(None));
        subscription_repo.expect_subscribe().never();

        let usecase = SubscriptionUseCase::new(
            Arc::new(plan_repo),
            Arc::new(subscription_repo),
            Arc::new(profile_repo),
        );

        let err = usecase.subscribe(profile_id, 99).await.unwrap_err();
        assert!(matches!(err, SubscriptionError::PlanNotFound));
    }

    #[tokio::test]
    async fn current_subscription_reports_remaining_time() {
        let profile_id = Uuid::new_v4();

        let mut plan_repo = MockPlanRepository::new();
        let mut subscription_repo = MockSubscriptionRepository::new();
        let profile_repo = MockProfileRepository::new();

        subscription_repo
            .expect_find_latest_active_by_profile()
            .with(eq(profile_id))
            .returning(move |_| {
                Ok(Some(active_subscription(
                    profile_id,
                    Duration::days(2) + Duration::hours(5) + Duration::minutes(30),
                )))
            });
        plan_repo
            .expect_find_plan_by_id()
            .with(eq(3i64))
            .returning(|_| Ok(Some(monthly_plan())));
        subscription_repo.expect_deactivate().never();

        let usecase = SubscriptionUseCase::new(
            Arc::new(plan_repo),
            Arc::new(subscription_repo),
            Arc::new(profile_repo),
        );

        let current = usecase
            .current_subscription(profile_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current.remaining.days, 2);
        assert_eq!(current.remaining.hours, 5);
        assert!(!current.remaining.expired);
    }

    #[tokio::test]
    async fn lapsed_subscription_is_deactivated_and_reported_expired() {
        let profile_id = Uuid::new_v4();

        let mut plan_repo = MockPlanRepository::new();
        let mut subscription_repo = MockSubscriptionRepository::new();
        let profile_repo = MockProfileRepository::new();

        subscription_repo
            .expect_find_latest_active_by_profile()
            .returning(move |_| {
                Ok(Some(active_subscription(profile_id, Duration::hours(-1))))
            });
        plan_repo
            .expect_find_plan_by_id()
            .returning(|_| Ok(Some(monthly_plan())));
        subscription_repo
            .expect_deactivate()
            .with(eq(42i64))
            .times(1)
            .returning(|_| Ok(()));

        let usecase = SubscriptionUseCase::new(
            Arc::new(plan_repo),
            Arc::new(subscription_repo),
            Arc::new(profile_repo),
        );

        let current = usecase
            .current_subscription(profile_id)
            .await
            .unwrap()
            .unwrap();
        assert!(current.remaining.expired);
    }

    #[tokio::test]
    async fn no_subscription_yields_none() {
        let profile_id = Uuid::new_v4();

        let plan_repo = MockPlanRepository::new();
        let mut subscription_repo = MockSubscriptionRepository::new();
        let profile_repo = MockProfileRepository::new();

        subscription_repo
            .expect_find_latest_active_by_profile()
            .returning(|_| Ok(None));

        let usecase = SubscriptionUseCase::new(
            Arc::new(plan_repo),
            Arc::new(subscription_repo),
            Arc::new(profile_repo),
        );

        assert!(usecase
            .current_subscription(profile_id)
            .await
            .unwrap()
            .is_none());
    }
}
