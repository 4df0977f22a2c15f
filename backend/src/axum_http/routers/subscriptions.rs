use crate::{
    auth::AuthUser, axum_http::error_responses::error_response,
    usecases::subscriptions::SubscriptionUseCase,
};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use crates::{
    domain::{
        gateways::subscriptions::SubscriptionGateway,
        value_objects::enums::billing_cycles::BillingCycle,
    },
    infra::node_api::client::NodeApiClient,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

pub fn routes(node_api: Arc<NodeApiClient>) -> Router {
    let usecase = SubscriptionUseCase::new(Arc::clone(&node_api));

    Router::new()
        .route("/current", get(current_plan::<NodeApiClient>))
        .route("/cancel", post(cancel_subscription::<NodeApiClient>))
        .route("/checkout", post(start_checkout::<NodeApiClient>))
        .with_state(Arc::new(usecase))
}

#[derive(Debug, Deserialize)]
pub struct CancelBody {
    pub plan_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBody {
    pub plan_id: i64,
    pub billing_cycle: String,
}

pub async fn current_plan<G>(
    State(usecase): State<Arc<SubscriptionUseCase<G>>>,
    AuthUser { user_id, .. }: AuthUser,
) -> impl IntoResponse
where
    G: SubscriptionGateway + Send + Sync + 'static,
{
    match usecase.current_plan(user_id).await {
        Ok(details) => (StatusCode::OK, Json(details)).into_response(),
        Err(err) => {
            if err.status_code().is_server_error() {
                error!(%user_id, error = %err, "subscriptions: failed to load current plan");
            }
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn cancel_subscription<G>(
    State(usecase): State<Arc<SubscriptionUseCase<G>>>,
    AuthUser { user_id, .. }: AuthUser,
    Json(body): Json<CancelBody>,
) -> impl IntoResponse
where
    G: SubscriptionGateway + Send + Sync + 'static,
{
    match usecase.cancel(user_id, body.plan_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Your subscription has been cancelled."})),
        )
            .into_response(),
        Err(err) => {
            if err.status_code().is_server_error() {
                error!(%user_id, plan_id = body.plan_id, error = %err, "subscriptions: cancel failed");
            }
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn start_checkout<G>(
    State(usecase): State<Arc<SubscriptionUseCase<G>>>,
    AuthUser { user_id, .. }: AuthUser,
    Json(body): Json<CheckoutBody>,
) -> impl IntoResponse
where
    G: SubscriptionGateway + Send + Sync + 'static,
{
    let billing_cycle = match BillingCycle::from_str(&body.billing_cycle) {
        Some(cycle) => cycle,
        None => {
            return error_response(StatusCode::BAD_REQUEST, "Invalid billing cycle");
        }
    };

    match usecase
        .start_checkout(user_id, body.plan_id, billing_cycle)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => {
            if err.status_code().is_server_error() {
                error!(%user_id, plan_id = body.plan_id, error = %err, "subscriptions: checkout failed");
            }
            error_response(err.status_code(), err.to_string())
        }
    }
}
