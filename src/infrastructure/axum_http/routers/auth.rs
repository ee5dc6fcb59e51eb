use std::sync::Arc;

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use tracing::info;

use crate::{
    application::usecases::authentication::AuthUseCase,
    domain::{
        repositories::profiles::ProfileRepository,
        value_objects::profiles::{SignInModel, SignUpModel},
    },
    infrastructure::{
        axum_http::error_responses::error_response,
        postgres::{postgres_connection::PgPoolSquad, repositories::profiles::ProfilePostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let profile_repository = ProfilePostgres::new(Arc::clone(&db_pool));
    let auth_usecase = AuthUseCase::new(Arc::new(profile_repository));

    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
        .with_state(Arc::new(auth_usecase))
}

pub async fn sign_up<P>(
    State(auth_usecase): State<Arc<AuthUseCase<P>>>,
    Json(sign_up_model): Json<SignUpModel>,
) -> impl IntoResponse
where
    P: ProfileRepository + Send + Sync + 'static,
{
    info!("auth: sign-up request received");
    match auth_usecase.sign_up(sign_up_model).await {
        Ok(token) => (StatusCode::CREATED, Json(token)).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

pub async fn sign_in<P>(
    State(auth_usecase): State<Arc<AuthUseCase<P>>>,
    Json(sign_in_model): Json<SignInModel>,
) -> impl IntoResponse
where
    P: ProfileRepository + Send + Sync + 'static,
{
    match auth_usecase.sign_in(sign_in_model).await {
        Ok(token) => Json(token).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}
