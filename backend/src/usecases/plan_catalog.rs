use std::sync::Arc;

use anyhow::{Result, anyhow};
use crates::domain::{
    gateways::plans::PlanGateway,
    value_objects::plans::{PlanModel, parse_plan_from_api},
};
use tracing::{debug, info};

/// Customer-facing plan catalog: only active plans are offered.
pub struct PlanCatalogUseCase<G>
where
    G: PlanGateway + Send + Sync + 'static,
{
    plan_gateway: Arc<G>,
}

impl<G> PlanCatalogUseCase<G>
where
    G: PlanGateway + Send + Sync + 'static,
{
    pub fn new(plan_gateway: Arc<G>) -> Self {
        Self { plan_gateway }
    }

    pub async fn list_active_plans(&self) -> Result<Vec<PlanModel>> {
        let raw = self.plan_gateway.list_plans().await?;

        let plans: Vec<PlanModel> = raw
            .iter()
            .map(parse_plan_from_api)
            .filter(|plan| plan.is_active)
            .collect();

        info!(plan_count = plans.len(), "plan_catalog: active plans loaded");

        Ok(plans)
    }

    pub async fn get_plan(&self, plan_id: i64) -> Result<Option<PlanModel>> {
        let raw = self.plan_gateway.fetch_plan(plan_id).await?;

        match raw.as_ref().map(parse_plan_from_api) {
            Some(plan) if plan.is_active => Ok(Some(plan)),
            Some(_) => Err(anyhow!("Plan is not available")),
            None => {
                debug!(plan_id, "plan_catalog: plan not found");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::gateways::plans::MockPlanGateway;
    use serde_json::json;

    #[tokio::test]
    async fn inactive_plans_are_hidden_from_the_catalog() {
        let mut plan_gateway = MockPlanGateway::new();
        plan_gateway.expect_list_plans().returning(|| {
            Box::pin(async {
                Ok(vec![
                    json!({"id": 1, "name": "Lite"}),
                    json!({"id": 2, "name": "Legacy", "isActive": false}),
                ])
            })
        });

        let usecase = PlanCatalogUseCase::new(Arc::new(plan_gateway));
        let plans = usecase.list_active_plans().await.unwrap();

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].name, "Lite");
    }

    #[tokio::test]
    async fn fetching_an_inactive_plan_is_an_error() {
        let mut plan_gateway = MockPlanGateway::new();
        plan_gateway.expect_fetch_plan().returning(|_| {
            Box::pin(async { Ok(Some(json!({"id": 2, "name": "Legacy", "isActive": false}))) })
        });

        let usecase = PlanCatalogUseCase::new(Arc::new(plan_gateway));
        assert!(usecase.get_plan(2).await.is_err());
    }

    #[tokio::test]
    async fn missing_plan_is_none() {
        let mut plan_gateway = MockPlanGateway::new();
        plan_gateway
            .expect_fetch_plan()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = PlanCatalogUseCase::new(Arc::new(plan_gateway));
        assert!(usecase.get_plan(9).await.unwrap().is_none());
    }
}
