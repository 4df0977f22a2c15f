use std::sync::Arc;

use crates::domain::{
    gateways::plans::PlanGateway,
    value_objects::{
        feature_diff::categorize_features,
        plan_form::{PlanFormData, PlanFormErrors},
        plans::{SavePlanRequest, parse_plan_from_api},
    },
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum PlanEditorError {
    #[error("plan validation failed")]
    Validation(PlanFormErrors),
    #[error("plan not found")]
    PlanNotFound,
    #[error("Failed to save plan: {0}")]
    SaveFailed(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PlanEditorError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            PlanEditorError::Validation(_) => StatusCode::BAD_REQUEST,
            PlanEditorError::PlanNotFound => StatusCode::NOT_FOUND,
            PlanEditorError::SaveFailed(_) => StatusCode::BAD_GATEWAY,
            PlanEditorError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type EditorResult<T> = std::result::Result<T, PlanEditorError>;

/// Outcome of a completed save, phrased for the editor UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveOutcome {
    pub created: bool,
    pub message: String,
}

/// Drives one plan-editing session: loads a plan into its working form,
/// and turns the edited form into the all-or-nothing save call.
pub struct PlanEditorUseCase<G>
where
    G: PlanGateway + Send + Sync + 'static,
{
    plan_gateway: Arc<G>,
}

impl<G> PlanEditorUseCase<G>
where
    G: PlanGateway + Send + Sync + 'static,
{
    pub fn new(plan_gateway: Arc<G>) -> Self {
        Self { plan_gateway }
    }

    pub async fn load_plan(&self, plan_id: i64) -> EditorResult<PlanFormData> {
        info!(plan_id, "plan_editor: loading plan for editing");

        let raw = self.plan_gateway.fetch_plan(plan_id).await.map_err(|err| {
            error!(plan_id, error = ?err, "plan_editor: failed to fetch plan");
            PlanEditorError::Internal(err)
        })?;

        let raw = raw.ok_or_else(|| {
            warn!(plan_id, "plan_editor: plan not found");
            PlanEditorError::PlanNotFound
        })?;

        Ok(PlanFormData::from(parse_plan_from_api(&raw)))
    }

    /// Validates, categorizes and saves in one step. `existing_plan_id` is
    /// `None` when creating a new plan. Validation failure surfaces every
    /// field error at once and performs no network call; the backend's own
    /// failure message is passed through verbatim.
    pub async fn save_plan(
        &self,
        existing_plan_id: Option<i64>,
        form: &PlanFormData,
    ) -> EditorResult<SaveOutcome> {
        let errors = form.validate();
        if !errors.is_empty() {
            warn!(
                ?existing_plan_id,
                status = PlanEditorError::Validation(errors.clone()).status_code().as_u16(),
                "plan_editor: form rejected by validation"
            );
            return Err(PlanEditorError::Validation(errors));
        }

        let diff = categorize_features(&form.features);
        let payload = SavePlanRequest::assemble(existing_plan_id, form, &diff);

        info!(
            plan_id = payload.plan_id,
            added = payload.added_features.len(),
            deleted = payload.deleted_feature_ids.len(),
            updated = payload.updated_features.len(),
            "plan_editor: submitting plan save"
        );

        self.plan_gateway.save_plan(payload).await.map_err(|err| {
            error!(
                ?existing_plan_id,
                error = ?err,
                "plan_editor: plan save rejected by billing api"
            );
            PlanEditorError::SaveFailed(err.to_string())
        })?;

        let created = existing_plan_id.is_none();
        let message = if created {
            "Plan created successfully!"
        } else {
            "Plan updated successfully!"
        };

        info!(?existing_plan_id, created, "plan_editor: plan save completed");

        Ok(SaveOutcome {
            created,
            message: message.to_string(),
        })
    }
}
