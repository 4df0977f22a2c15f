use crate::{
    auth::AuthUser, axum_http::error_responses::error_response,
    usecases::payment_methods::PaymentMethodsUseCase,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use crates::{
    domain::gateways::payment_methods::PaymentMethodGateway,
    infra::node_api::client::NodeApiClient,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

pub fn routes(node_api: Arc<NodeApiClient>) -> Router {
    let usecase = PaymentMethodsUseCase::new(Arc::clone(&node_api));

    Router::new()
        .route("/", get(wallet::<NodeApiClient>))
        .route("/default", post(set_default::<NodeApiClient>))
        .route(
            "/:payment_method_id",
            delete(remove_card::<NodeApiClient>),
        )
        .with_state(Arc::new(usecase))
}

#[derive(Debug, Deserialize)]
pub struct DefaultCardBody {
    pub payment_method_id: String,
}

pub async fn wallet<G>(
    State(usecase): State<Arc<PaymentMethodsUseCase<G>>>,
    AuthUser { user_id, .. }: AuthUser,
) -> impl IntoResponse
where
    G: PaymentMethodGateway + Send + Sync + 'static,
{
    match usecase.wallet(user_id).await {
        Ok(wallet) => (StatusCode::OK, Json(wallet)).into_response(),
        Err(err) => {
            error!(%user_id, error = %err, "payment_methods: failed to load wallet");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

pub async fn set_default<G>(
    State(usecase): State<Arc<PaymentMethodsUseCase<G>>>,
    AuthUser { user_id, .. }: AuthUser,
    Json(body): Json<DefaultCardBody>,
) -> impl IntoResponse
where
    G: PaymentMethodGateway + Send + Sync + 'static,
{
    match usecase.set_default(user_id, &body.payment_method_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Default payment method updated."})),
        )
            .into_response(),
        Err(err) => {
            error!(%user_id, error = %err, "payment_methods: failed to set default card");
            error_response(StatusCode::BAD_GATEWAY, err.to_string())
        }
    }
}

pub async fn remove_card<G>(
    State(usecase): State<Arc<PaymentMethodsUseCase<G>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(payment_method_id): Path<String>,
) -> impl IntoResponse
where
    G: PaymentMethodGateway + Send + Sync + 'static,
{
    match usecase.remove_card(user_id, &payment_method_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Payment method removed."})),
        )
            .into_response(),
        Err(err) => {
            error!(%user_id, error = %err, "payment_methods: failed to remove card");
            error_response(StatusCode::BAD_GATEWAY, err.to_string())
        }
    }
}
