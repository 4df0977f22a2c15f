use crate::{
    axum_http::error_responses::error_response, usecases::plan_catalog::PlanCatalogUseCase,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use crates::{domain::gateways::plans::PlanGateway, infra::node_api::client::NodeApiClient};
use std::sync::Arc;
use tracing::error;

/// Public plan catalog consumed by the pricing page; no auth required.
pub fn routes(node_api: Arc<NodeApiClient>) -> Router {
    let usecase = PlanCatalogUseCase::new(Arc::clone(&node_api));

    Router::new()
        .route("/", get(list_plans::<NodeApiClient>))
        .route("/:plan_id", get(get_plan::<NodeApiClient>))
        .with_state(Arc::new(usecase))
}

pub async fn list_plans<G>(
    State(usecase): State<Arc<PlanCatalogUseCase<G>>>,
) -> impl IntoResponse
where
    G: PlanGateway + Send + Sync + 'static,
{
    match usecase.list_active_plans().await {
        Ok(plans) => (StatusCode::OK, Json(plans)).into_response(),
        Err(err) => {
            error!(error = %err, "plans: failed to list plans");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

pub async fn get_plan<G>(
    State(usecase): State<Arc<PlanCatalogUseCase<G>>>,
    Path(plan_id): Path<i64>,
) -> impl IntoResponse
where
    G: PlanGateway + Send + Sync + 'static,
{
    match usecase.get_plan(plan_id).await {
        Ok(Some(plan)) => (StatusCode::OK, Json(plan)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Plan not found"),
        Err(err) => {
            let message = err.to_string();
            let status = if message.contains("not available") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };

            if status.is_server_error() {
                error!(plan_id, error = %message, "plans: failed to fetch plan");
            }

            error_response(status, message)
        }
    }
}
