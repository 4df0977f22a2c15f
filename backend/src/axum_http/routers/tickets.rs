use crate::{
    auth::{AdminUser, AuthUser},
    axum_http::error_responses::error_response,
    usecases::support_tickets::{SupportTicketUseCase, TicketError},
};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use crates::{
    domain::{
        gateways::tickets::TicketGateway,
        value_objects::tickets::{TicketDraft, TicketFilter, TicketFormErrors},
    },
    infra::node_api::client::NodeApiClient,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::error;

pub fn routes(node_api: Arc<NodeApiClient>) -> Router {
    let usecase = SupportTicketUseCase::new(Arc::clone(&node_api));

    Router::new()
        .route("/", post(submit_ticket::<NodeApiClient>))
        .with_state(Arc::new(usecase))
}

/// Ticket triage listing for the admin dashboard.
pub fn admin_routes(node_api: Arc<NodeApiClient>) -> Router {
    let usecase = SupportTicketUseCase::new(Arc::clone(&node_api));

    Router::new()
        .route("/", get(list_tickets::<NodeApiClient>))
        .with_state(Arc::new(usecase))
}

#[derive(Debug, Deserialize)]
pub struct TicketListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ticket_id: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

pub async fn submit_ticket<G>(
    State(usecase): State<Arc<SupportTicketUseCase<G>>>,
    AuthUser { user_id, .. }: AuthUser,
    Json(draft): Json<TicketDraft>,
) -> impl IntoResponse
where
    G: TicketGateway + Send + Sync + 'static,
{
    match usecase.submit(user_id, draft).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({"message": "Your ticket has been submitted."})),
        )
            .into_response(),
        Err(TicketError::Validation(errors)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "code": StatusCode::BAD_REQUEST.as_u16(),
                "errors": field_messages(&errors),
            })),
        )
            .into_response(),
        Err(err) => {
            error!(%user_id, error = %err, "tickets: submit failed");
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn list_tickets<G>(
    State(usecase): State<Arc<SupportTicketUseCase<G>>>,
    _admin: AdminUser,
    Query(query): Query<TicketListQuery>,
) -> impl IntoResponse
where
    G: TicketGateway + Send + Sync + 'static,
{
    let filter = TicketFilter {
        search: query.search,
        title: query.title,
        ticket_id: query.ticket_id,
    };
    let page = query.page.unwrap_or(1);

    match usecase.list_tickets(&filter, page).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(err) => {
            error!(error = %err, "tickets: listing failed");
            error_response(err.status_code(), err.to_string())
        }
    }
}

fn field_messages(errors: &TicketFormErrors) -> Value {
    json!({
        "subject": errors.subject.map(|e| e.to_string()),
        "category": errors.category.map(|e| e.to_string()),
        "message": errors.message.map(|e| e.to_string()),
    })
}
