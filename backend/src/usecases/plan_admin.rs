use std::sync::Arc;

use crates::domain::{
    gateways::plans::PlanGateway,
    value_objects::plans::{PlanModel, parse_plan_from_api},
};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum PlanAdminError {
    #[error("plan has {0} active subscribers and cannot be deleted")]
    PlanHasSubscribers(i64),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PlanAdminError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            PlanAdminError::PlanHasSubscribers(_) => StatusCode::CONFLICT,
            PlanAdminError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AdminResult<T> = std::result::Result<T, PlanAdminError>;

/// Product-manager operations on the plan catalog: listing, activation
/// toggles and guarded deletion.
pub struct PlanAdminUseCase<G>
where
    G: PlanGateway + Send + Sync + 'static,
{
    plan_gateway: Arc<G>,
}

impl<G> PlanAdminUseCase<G>
where
    G: PlanGateway + Send + Sync + 'static,
{
    pub fn new(plan_gateway: Arc<G>) -> Self {
        Self { plan_gateway }
    }

    pub async fn list_plans(&self) -> AdminResult<Vec<PlanModel>> {
        info!("plan_admin: listing all plans");

        let raw = self.plan_gateway.list_plans().await.map_err(|err| {
            error!(error = ?err, "plan_admin: failed to list plans");
            PlanAdminError::Internal(err)
        })?;

        let plans: Vec<PlanModel> = raw.iter().map(parse_plan_from_api).collect();
        info!(plan_count = plans.len(), "plan_admin: plans loaded");

        Ok(plans)
    }

    /// A plan with live subscribers must not disappear from under them;
    /// the subscriber check runs before every delete.
    pub async fn delete_plan(&self, plan_id: i64) -> AdminResult<()> {
        let subscribers = self
            .plan_gateway
            .count_plan_subscribers(plan_id)
            .await
            .map_err(|err| {
                error!(plan_id, error = ?err, "plan_admin: subscriber check failed");
                PlanAdminError::Internal(err)
            })?;

        if subscribers > 0 {
            let err = PlanAdminError::PlanHasSubscribers(subscribers);
            warn!(
                plan_id,
                subscribers,
                status = err.status_code().as_u16(),
                "plan_admin: delete blocked by active subscribers"
            );
            return Err(err);
        }

        self.plan_gateway.delete_plan(plan_id).await.map_err(|err| {
            error!(plan_id, error = ?err, "plan_admin: delete failed");
            PlanAdminError::Internal(err)
        })?;

        info!(plan_id, "plan_admin: plan deleted");

        Ok(())
    }

    pub async fn set_plan_status(&self, plan_id: i64, is_active: bool) -> AdminResult<()> {
        self.plan_gateway
            .update_plan_status(plan_id, is_active)
            .await
            .map_err(|err| {
                error!(plan_id, is_active, error = ?err, "plan_admin: status update failed");
                PlanAdminError::Internal(err)
            })?;

        info!(plan_id, is_active, "plan_admin: plan status updated");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::gateways::plans::MockPlanGateway;
    use mockall::predicate::eq;
    use serde_json::json;

    #[tokio::test]
    async fn delete_is_blocked_while_plan_has_subscribers() {
        let mut plan_gateway = MockPlanGateway::new();
        plan_gateway
            .expect_count_plan_subscribers()
            .with(eq(3))
            .returning(|_| Box::pin(async { Ok(12) }));
        // delete_plan must not be called

        let usecase = PlanAdminUseCase::new(Arc::new(plan_gateway));
        let err = usecase.delete_plan(3).await.unwrap_err();

        match err {
            PlanAdminError::PlanHasSubscribers(count) => assert_eq!(count, 12),
            other => panic!("expected subscriber guard, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_proceeds_when_no_subscribers_remain() {
        let mut plan_gateway = MockPlanGateway::new();
        plan_gateway
            .expect_count_plan_subscribers()
            .returning(|_| Box::pin(async { Ok(0) }));
        plan_gateway
            .expect_delete_plan()
            .with(eq(3))
            .returning(|_| Box::pin(async { Ok(()) }));

        let usecase = PlanAdminUseCase::new(Arc::new(plan_gateway));
        usecase.delete_plan(3).await.unwrap();
    }

    #[tokio::test]
    async fn list_plans_adapts_every_row() {
        let mut plan_gateway = MockPlanGateway::new();
        plan_gateway.expect_list_plans().returning(|| {
            Box::pin(async {
                Ok(vec![
                    json!({"id": 1, "name": "Lite", "monthlyPrice": 9.99}),
                    json!({"id": 2, "PlanTitle": "Pro", "AmountPerMonth": 29.99, "isActive": false}),
                ])
            })
        });

        let usecase = PlanAdminUseCase::new(Arc::new(plan_gateway));
        let plans = usecase.list_plans().await.unwrap();

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].name, "Lite");
        assert_eq!(plans[1].name, "Pro");
        assert!(!plans[1].is_active);
    }
}
