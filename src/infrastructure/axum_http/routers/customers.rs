use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use serde::Deserialize;
use tracing::info;

use crate::{
    application::usecases::customers::CustomerUseCase,
    auth::AuthAttendant,
    domain::{
        repositories::walk_in_customers::WalkInCustomerRepository,
        value_objects::customers::RegisterWalkInCustomerModel,
    },
    infrastructure::{
        axum_http::error_responses::error_response,
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::walk_in_customers::WalkInCustomerPostgres,
        },
    },
};

#[derive(Debug, Deserialize)]
pub struct ListCustomersQuery {
    search: Option<String>,
}

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let customer_repository = WalkInCustomerPostgres::new(Arc::clone(&db_pool));
    let customer_usecase = CustomerUseCase::new(Arc::new(customer_repository));

    Router::new()
        .route("/", get(list_customers).post(register_customer))
        .route("/:id", delete(delete_customer))
        .with_state(Arc::new(customer_usecase))
}

pub async fn register_customer<C>(
    State(customer_usecase): State<Arc<CustomerUseCase<C>>>,
    AuthAttendant(attendant): AuthAttendant,
    Json(register_model): Json<RegisterWalkInCustomerModel>,
) -> impl IntoResponse
where
    C: WalkInCustomerRepository + Send + Sync + 'static,
{
    info!(
        attendant_id = %attendant.profile_id,
        "customers: register request received"
    );
    match customer_usecase.register(register_model).await {
        Ok(customer) => (StatusCode::CREATED, Json(customer)).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

pub async fn list_customers<C>(
    State(customer_usecase): State<Arc<CustomerUseCase<C>>>,
    AuthAttendant(_attendant): AuthAttendant,
    Query(query): Query<ListCustomersQuery>,
) -> impl IntoResponse
where
    C: WalkInCustomerRepository + Send + Sync + 'static,
{
    match customer_usecase.list(query.search).await {
        Ok(customers) => Json(customers).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

pub async fn delete_customer<C>(
    State(customer_usecase): State<Arc<CustomerUseCase<C>>>,
    AuthAttendant(attendant): AuthAttendant,
    Path(customer_id): Path<i64>,
) -> impl IntoResponse
where
    C: WalkInCustomerRepository + Send + Sync + 'static,
{
    info!(
        attendant_id = %attendant.profile_id,
        customer_id,
        "customers: delete request received"
    );
    match customer_usecase.delete(customer_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}
