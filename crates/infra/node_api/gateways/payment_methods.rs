use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    domain::{
        gateways::payment_methods::PaymentMethodGateway,
        value_objects::payment_methods::PaymentMethodModel,
    },
    infra::node_api::client::NodeApiClient,
};

#[async_trait]
impl PaymentMethodGateway for NodeApiClient {
    async fn list_cards(&self, user_id: Uuid) -> Result<Vec<PaymentMethodModel>> {
        let resp = self.get(&format!("cards/{user_id}")).await?;
        let result = NodeApiClient::read_json(
            resp,
            "list cards",
            "Error fetching payment methods. Please try again.",
        )
        .await?;

        // This endpoint returns the array directly, not wrapped.
        let cards = result
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();

        Ok(cards)
    }

    async fn default_card_id(&self, user_id: Uuid) -> Result<Option<String>> {
        let resp = self.get(&format!("defaultcard/{user_id}")).await?;
        if !resp.status().is_success() {
            return Ok(None);
        }

        let result = resp.json::<Value>().await.unwrap_or(Value::Null);
        Ok(result
            .get("paymentMethodId")
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    async fn set_default_card(&self, user_id: Uuid, payment_method_id: &str) -> Result<()> {
        let body = json!({
            "userId": user_id,
            "paymentMethodId": payment_method_id,
        });

        let resp = self.post_json("setdefaultcard", &body).await?;
        NodeApiClient::read_json(
            resp,
            "set default card",
            "Failed to set default payment method. Please try again.",
        )
        .await?;

        Ok(())
    }

    async fn delete_card(&self, user_id: Uuid, payment_method_id: &str) -> Result<()> {
        let resp = self
            .delete(&format!("card/{user_id}/{payment_method_id}"))
            .await?;
        NodeApiClient::read_json(resp, "delete card", "Failed to delete payment method.").await?;

        Ok(())
    }
}
