use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::info;

use crate::{
    application::usecases::{portal::PortalUseCase, subscriptions::SubscriptionUseCase},
    auth::AuthUser,
    domain::{
        repositories::{
            plans::PlanRepository, profiles::ProfileRepository,
            subscriptions::SubscriptionRepository,
        },
        value_objects::subscriptions::SubscribeModel,
    },
    infrastructure::{
        axum_http::error_responses::error_response,
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                plans::PlanPostgres, profiles::ProfilePostgres,
                subscriptions::SubscriptionPostgres,
            },
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let profile_repository = Arc::new(ProfilePostgres::new(Arc::clone(&db_pool)));
    let plan_repository = Arc::new(PlanPostgres::new(Arc::clone(&db_pool)));
    let subscription_repository = Arc::new(SubscriptionPostgres::new(Arc::clone(&db_pool)));

    let portal_usecase = PortalUseCase::new(Arc::clone(&profile_repository));
    let subscription_usecase = SubscriptionUseCase::new(
        plan_repository,
        subscription_repository,
        profile_repository,
    );

    let profile_routes = Router::new()
        .route("/me", get(profile))
        .route("/loyalty", get(loyalty))
        .with_state(Arc::new(portal_usecase));

    let subscription_routes = Router::new()
        .route("/plans", get(list_plans))
        .route("/subscription", get(current_subscription))
        .route("/subscribe", post(subscribe))
        .with_state(Arc::new(subscription_usecase));

    profile_routes.merge(subscription_routes)
}

pub async fn profile<P>(
    State(portal_usecase): State<Arc<PortalUseCase<P>>>,
    AuthUser { profile_id, .. }: AuthUser,
) -> impl IntoResponse
where
    P: ProfileRepository + Send + Sync + 'static,
{
    match portal_usecase.profile(profile_id).await {
        Ok(profile) => Json(profile).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

pub async fn loyalty<P>(
    State(portal_usecase): State<Arc<PortalUseCase<P>>>,
    AuthUser { profile_id, .. }: AuthUser,
) -> impl IntoResponse
where
    P: ProfileRepository + Send + Sync + 'static,
{
    match portal_usecase.loyalty(profile_id).await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

pub async fn list_plans<Plan, Sub, Prof>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<Plan, Sub, Prof>>>,
) -> impl IntoResponse
where
    Plan: PlanRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
    Prof: ProfileRepository + Send + Sync + 'static,
{
    match subscription_usecase.list_plans().await {
        Ok(plans) => Json(plans).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

pub async fn current_subscription<Plan, Sub, Prof>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<Plan, Sub, Prof>>>,
    AuthUser { profile_id, .. }: AuthUser,
) -> impl IntoResponse
where
    Plan: PlanRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
    Prof: ProfileRepository + Send + Sync + 'static,
{
    match subscription_usecase.current_subscription(profile_id).await {
        Ok(current) => Json(current).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

pub async fn subscribe<Plan, Sub, Prof>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<Plan, Sub, Prof>>>,
    AuthUser { profile_id, .. }: AuthUser,
    Json(subscribe_model): Json<SubscribeModel>,
) -> impl IntoResponse
where
    Plan: PlanRepository + Send + Sync + 'static,
    Sub: SubscriptionRepository + Send + Sync + 'static,
    Prof: ProfileRepository + Send + Sync + 'static,
{
    info!(%profile_id, plan_id = subscribe_model.plan_id, "portal: subscribe request received");
    match subscription_usecase
        .subscribe(profile_id, subscribe_model.plan_id)
        .await
    {
        Ok(current) => (StatusCode::CREATED, Json(current)).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}
