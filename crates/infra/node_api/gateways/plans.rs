use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Value, json};

use crate::{
    domain::{gateways::plans::PlanGateway, value_objects::plans::SavePlanRequest},
    infra::node_api::client::NodeApiClient,
};

#[async_trait]
impl PlanGateway for NodeApiClient {
    async fn fetch_plan(&self, plan_id: i64) -> Result<Option<Value>> {
        let resp = self.get(&format!("plan/{plan_id}")).await?;
        let result = NodeApiClient::read_json(
            resp,
            "fetch plan",
            "Unable to load plan information. Please try refreshing the page.",
        )
        .await?;

        // Both {"plan": {...}} and a bare plan object have shipped.
        let plan = match &result {
            Value::Null => None,
            Value::Object(map) => match map.get("plan") {
                Some(Value::Null) => None,
                Some(plan) => Some(plan.clone()),
                None => Some(result.clone()),
            },
            _ => None,
        };

        Ok(plan)
    }

    async fn list_plans(&self) -> Result<Vec<Value>> {
        let resp = self.get("plans").await?;
        let result = NodeApiClient::read_json(
            resp,
            "list plans",
            "Unable to load available plans. Please try refreshing the page.",
        )
        .await?;

        let plans = result
            .get("plans")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(plans)
    }

    async fn save_plan(&self, request: SavePlanRequest) -> Result<()> {
        let resp = self.post_json("saveplan", &request).await?;
        NodeApiClient::read_json(resp, "save plan", "Failed to save plan. Please try again.")
            .await?;

        Ok(())
    }

    async fn delete_plan(&self, plan_id: i64) -> Result<()> {
        let resp = self
            .post_json("deleteplan", &json!({ "planId": plan_id }))
            .await?;
        NodeApiClient::read_json(
            resp,
            "delete plan",
            "Failed to delete plan. Please try again.",
        )
        .await?;

        Ok(())
    }

    async fn update_plan_status(&self, plan_id: i64, is_active: bool) -> Result<()> {
        let resp = self
            .post_json(
                "updateplanstatus",
                &json!({ "planId": plan_id, "isActive": is_active }),
            )
            .await?;
        NodeApiClient::read_json(
            resp,
            "update plan status",
            "Failed to update plan status. Please try again.",
        )
        .await?;

        Ok(())
    }

    async fn count_plan_subscribers(&self, plan_id: i64) -> Result<i64> {
        let resp = self.get(&format!("plansubscribers/{plan_id}")).await?;
        let result = NodeApiClient::read_json(
            resp,
            "count plan subscribers",
            "Unable to check plan subscribers. Please try again.",
        )
        .await?;

        Ok(result
            .get("subscribers")
            .and_then(Value::as_i64)
            .unwrap_or(0))
    }
}
