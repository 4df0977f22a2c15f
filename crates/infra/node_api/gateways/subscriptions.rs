use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    domain::{
        gateways::subscriptions::SubscriptionGateway,
        value_objects::subscriptions::{CheckoutRequest, UserPlanDetails},
    },
    infra::node_api::client::NodeApiClient,
};

#[async_trait]
impl SubscriptionGateway for NodeApiClient {
    async fn user_plan_details(&self, user_id: Uuid) -> Result<Option<UserPlanDetails>> {
        let resp = self.get(&format!("userplan/{user_id}")).await?;
        let result = NodeApiClient::read_json(
            resp,
            "user plan details",
            "Unable to load your plan details. Please try refreshing the page.",
        )
        .await?;

        let details = result
            .get("userplan")
            .and_then(|plan| serde_json::from_value(plan.clone()).ok());

        Ok(details)
    }

    async fn cancel_subscription(&self, user_id: Uuid, plan_id: i64) -> Result<bool> {
        let body = json!({
            "userId": user_id,
            "planId": plan_id,
        });

        let resp = self.post_json("cancel-subscription", &body).await?;
        let result = NodeApiClient::read_json(
            resp,
            "cancel subscription",
            "We encountered an issue while cancelling your subscription. Please try again or contact support.",
        )
        .await?;

        Ok(result
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false))
    }

    async fn start_checkout(&self, request: CheckoutRequest) -> Result<Value> {
        let resp = self.post_json("createplan", &request).await?;
        let result = NodeApiClient::read_json(
            resp,
            "start checkout",
            "We encountered an issue while creating your plan. Please try again or contact our support team for assistance.",
        )
        .await?;

        Ok(result)
    }
}
