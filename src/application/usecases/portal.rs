use std::sync::Arc;

use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    repositories::profiles::ProfileRepository,
    value_objects::profiles::{LoyaltySnapshotModel, ProfileModel},
};

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("profile not found")]
    ProfileNotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PortalError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            PortalError::ProfileNotFound => StatusCode::NOT_FOUND,
            PortalError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type PortalResult<T> = std::result::Result<T, PortalError>;

/// Self-service views for a signed-in subscriber.
pub struct PortalUseCase<P>
where
    P: ProfileRepository + Send + Sync + 'static,
{
    profile_repo: Arc<P>,
}

impl<P> PortalUseCase<P>
where
    P: ProfileRepository + Send + Sync + 'static,
{
    pub fn new(profile_repo: Arc<P>) -> Self {
        Self { profile_repo }
    }

    pub async fn profile(&self, profile_id: Uuid) -> PortalResult<ProfileModel> {
        let profile = self
            .profile_repo
            .find_by_id(profile_id)
            .await
            .map_err(|err| {
                error!(%profile_id, db_error = ?err, "portal: failed to load profile");
                PortalError::Internal(err)
            })?
            .ok_or(PortalError::ProfileNotFound)?;

        Ok(ProfileModel::from(profile))
    }

    pub async fn loyalty(&self, profile_id: Uuid) -> PortalResult<LoyaltySnapshotModel> {
        let profile = self
            .profile_repo
            .find_by_id(profile_id)
            .await
            .map_err(|err| {
                error!(%profile_id, db_error = ?err, "portal: failed to load loyalty balance");
                PortalError::Internal(err)
            })?
            .ok_or(PortalError::ProfileNotFound)?;

        Ok(LoyaltySnapshotModel::for_points(
            profile.loyalty_points,
            profile.total_spent_ugx,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::profiles::ProfileEntity, repositories::profiles::MockProfileRepository,
    };
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_profile(id: Uuid, loyalty_points: i32, total_spent_ugx: i64) -> ProfileEntity {
        let now = Utc::now();
        ProfileEntity {
            id,
            first_name: "Amina".to_string(),
            last_name: "Okello".to_string(),
            email: "amina@example.com".to_string(),
            phone_number: "+256701234567".to_string(),
            mac_address: "AA:BB:CC:DD:EE:FF".to_string(),
            password_hash: "hash".to_string(),
            role: "customer".to_string(),
            loyalty_points,
            total_spent_ugx,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn profile_is_returned_without_the_password_hash() {
        let profile_id = Uuid::new_v4();
        let mut profile_repo = MockProfileRepository::new();
        profile_repo
            .expect_find_by_id()
            .with(eq(profile_id))
            .returning(move |id| Ok(Some(sample_profile(id, 54, 54_000))));

        let usecase = PortalUseCase::new(Arc::new(profile_repo));

        let profile = usecase.profile(profile_id).await.unwrap();
        assert_eq!(profile.id, profile_id);
        assert_eq!(profile.loyalty_points, 54);
        assert_eq!(profile.total_spent_ugx, 54_000);
    }

    #[tokio::test]
    async fn unknown_profile_is_not_found() {
        let mut profile_repo = MockProfileRepository::new();
        profile_repo.expect_find_by_id().returning(|_| Ok(None));

        let usecase = PortalUseCase::new(Arc::new(profile_repo));

        let err = usecase.profile(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, PortalError::ProfileNotFound));
    }

    #[tokio::test]
    async fn loyalty_snapshot_points_at_the_next_milestone() {
        let profile_id = Uuid::new_v4();
        let mut profile_repo = MockProfileRepository::new();
        profile_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(sample_profile(id, 1_500, 1_500_000))));

        let usecase = PortalUseCase::new(Arc::new(profile_repo));

        let snapshot = usecase.loyalty(profile_id).await.unwrap();
        assert_eq!(snapshot.loyalty_points, 1_500);
        let next = snapshot.next_reward.unwrap();
        assert_eq!(next.milestone_points, 3_000);
        assert_eq!(next.points_to_go, 1_500);
        assert_eq!(snapshot.progress_percent, 50.0);
    }

    #[tokio::test]
    async fn loyalty_snapshot_past_the_top_rung_has_no_next_reward() {
        let mut profile_repo = MockProfileRepository::new();
        profile_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(sample_profile(id, 12_000, 12_000_000))));

        let usecase = PortalUseCase::new(Arc::new(profile_repo));

        let snapshot = usecase.loyalty(Uuid::new_v4()).await.unwrap();
        assert!(snapshot.next_reward.is_none());
    }
}
