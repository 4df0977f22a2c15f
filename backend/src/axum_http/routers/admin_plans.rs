use crate::{
    auth::AdminUser,
    axum_http::error_responses::error_response,
    usecases::{
        plan_admin::{PlanAdminError, PlanAdminUseCase},
        plan_editor::{PlanEditorError, PlanEditorUseCase},
    },
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use crates::{
    domain::{
        gateways::plans::PlanGateway,
        value_objects::plan_form::{PlanFormData, PlanFormErrors},
    },
    infra::node_api::client::NodeApiClient,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::error;

/// Product-manager surface: plan editor plus catalog management. Every
/// route requires the admin role.
pub fn routes(node_api: Arc<NodeApiClient>) -> Router {
    let editor_usecase = PlanEditorUseCase::new(Arc::clone(&node_api));
    let admin_usecase = PlanAdminUseCase::new(Arc::clone(&node_api));

    let editor_routes = Router::new()
        .route("/:plan_id/edit", get(load_plan::<NodeApiClient>))
        .route("/save", post(save_plan::<NodeApiClient>))
        .with_state(Arc::new(editor_usecase));

    let admin_routes = Router::new()
        .route("/", get(list_plans::<NodeApiClient>))
        .route("/:plan_id", delete(delete_plan::<NodeApiClient>))
        .route("/:plan_id/status", post(set_plan_status::<NodeApiClient>))
        .with_state(Arc::new(admin_usecase));

    Router::new().merge(editor_routes).merge(admin_routes)
}

#[derive(Debug, Deserialize)]
pub struct SavePlanBody {
    pub plan_id: Option<i64>,
    #[serde(flatten)]
    pub form: PlanFormData,
}

#[derive(Debug, Deserialize)]
pub struct PlanStatusBody {
    pub is_active: bool,
}

pub async fn load_plan<G>(
    State(usecase): State<Arc<PlanEditorUseCase<G>>>,
    _admin: AdminUser,
    Path(plan_id): Path<i64>,
) -> impl IntoResponse
where
    G: PlanGateway + Send + Sync + 'static,
{
    match usecase.load_plan(plan_id).await {
        Ok(form) => (StatusCode::OK, Json(form)).into_response(),
        Err(err) => {
            if err.status_code().is_server_error() {
                error!(plan_id, error = %err, "admin_plans: failed to load plan");
            }
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn save_plan<G>(
    State(usecase): State<Arc<PlanEditorUseCase<G>>>,
    _admin: AdminUser,
    Json(body): Json<SavePlanBody>,
) -> impl IntoResponse
where
    G: PlanGateway + Send + Sync + 'static,
{
    match usecase.save_plan(body.plan_id, &body.form).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(PlanEditorError::Validation(errors)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "code": StatusCode::BAD_REQUEST.as_u16(),
                "errors": field_messages(&errors),
            })),
        )
            .into_response(),
        Err(err) => {
            if err.status_code().is_server_error() {
                error!(plan_id = ?body.plan_id, error = %err, "admin_plans: plan save failed");
            }
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn list_plans<G>(
    State(usecase): State<Arc<PlanAdminUseCase<G>>>,
    _admin: AdminUser,
) -> impl IntoResponse
where
    G: PlanGateway + Send + Sync + 'static,
{
    match usecase.list_plans().await {
        Ok(plans) => (StatusCode::OK, Json(plans)).into_response(),
        Err(err) => {
            error!(error = %err, "admin_plans: failed to list plans");
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn delete_plan<G>(
    State(usecase): State<Arc<PlanAdminUseCase<G>>>,
    _admin: AdminUser,
    Path(plan_id): Path<i64>,
) -> impl IntoResponse
where
    G: PlanGateway + Send + Sync + 'static,
{
    match usecase.delete_plan(plan_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Plan deleted successfully."})),
        )
            .into_response(),
        Err(err @ PlanAdminError::PlanHasSubscribers(_)) => {
            error_response(err.status_code(), err.to_string())
        }
        Err(err) => {
            error!(plan_id, error = %err, "admin_plans: failed to delete plan");
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn set_plan_status<G>(
    State(usecase): State<Arc<PlanAdminUseCase<G>>>,
    _admin: AdminUser,
    Path(plan_id): Path<i64>,
    Json(body): Json<PlanStatusBody>,
) -> impl IntoResponse
where
    G: PlanGateway + Send + Sync + 'static,
{
    match usecase.set_plan_status(plan_id, body.is_active).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Plan status updated."})),
        )
            .into_response(),
        Err(err) => {
            error!(plan_id, error = %err, "admin_plans: failed to update plan status");
            error_response(err.status_code(), err.to_string())
        }
    }
}

fn field_messages(errors: &PlanFormErrors) -> Value {
    json!({
        "name": errors.name.map(|e| e.to_string()),
        "subtitle": errors.subtitle.map(|e| e.to_string()),
        "description": errors.description.map(|e| e.to_string()),
        "monthly_price": errors.monthly_price.map(|e| e.to_string()),
        "annual_price": errors.annual_price.map(|e| e.to_string()),
    })
}
