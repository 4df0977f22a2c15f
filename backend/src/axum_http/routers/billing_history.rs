use crate::{
    auth::AuthUser, axum_http::error_responses::error_response,
    usecases::billing_history::BillingHistoryUseCase,
};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use crates::{
    domain::{gateways::invoices::InvoiceGateway, value_objects::invoices::InvoiceFilter},
    infra::node_api::client::NodeApiClient,
};
use std::sync::Arc;
use tracing::error;

pub fn routes(node_api: Arc<NodeApiClient>) -> Router {
    let usecase = BillingHistoryUseCase::new(Arc::clone(&node_api));

    Router::new()
        .route("/", get(user_history::<NodeApiClient>))
        .with_state(Arc::new(usecase))
}

pub async fn user_history<G>(
    State(usecase): State<Arc<BillingHistoryUseCase<G>>>,
    AuthUser { user_id, .. }: AuthUser,
    Query(filter): Query<InvoiceFilter>,
) -> impl IntoResponse
where
    G: InvoiceGateway + Send + Sync + 'static,
{
    match usecase.user_history(user_id, &filter).await {
        Ok(invoices) => (StatusCode::OK, Json(invoices)).into_response(),
        Err(err) => {
            error!(%user_id, error = %err, "billing_history: failed to load invoices");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}
