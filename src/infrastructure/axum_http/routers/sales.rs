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
    application::usecases::sales::SalesUseCase,
    auth::AuthAttendant,
    domain::{
        repositories::sales::SaleRepository,
        value_objects::sales::{QuoteRequestModel, SaleRequestModel},
    },
    infrastructure::{
        axum_http::error_responses::error_response,
        postgres::{postgres_connection::PgPoolSquad, repositories::sales::SalePostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let sale_repository = SalePostgres::new(Arc::clone(&db_pool));
    let sales_usecase = SalesUseCase::new(Arc::new(sale_repository));

    Router::new()
        .route("/", post(process_sale))
        .route("/quote", post(quote))
        .route("/summary", get(dashboard_summary))
        .with_state(Arc::new(sales_usecase))
}

pub async fn quote<S>(
    State(sales_usecase): State<Arc<SalesUseCase<S>>>,
    AuthAttendant(_attendant): AuthAttendant,
    Json(quote_request): Json<QuoteRequestModel>,
) -> impl IntoResponse
where
    S: SaleRepository + Send + Sync + 'static,
{
    Json(sales_usecase.quote(quote_request)).into_response()
}

pub async fn process_sale<S>(
    State(sales_usecase): State<Arc<SalesUseCase<S>>>,
    AuthAttendant(attendant): AuthAttendant,
    Json(sale_request): Json<SaleRequestModel>,
) -> impl IntoResponse
where
    S: SaleRepository + Send + Sync + 'static,
{
    info!(
        attendant_id = %attendant.profile_id,
        plan_code = %sale_request.plan_code,
        "sales: sale request received"
    );
    match sales_usecase.process_sale(sale_request).await {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}

pub async fn dashboard_summary<S>(
    State(sales_usecase): State<Arc<SalesUseCase<S>>>,
    AuthAttendant(_attendant): AuthAttendant,
) -> impl IntoResponse
where
    S: SaleRepository + Send + Sync + 'static,
{
    match sales_usecase.dashboard_summary().await {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => error_response(err.status_code(), err.to_string()),
    }
}
