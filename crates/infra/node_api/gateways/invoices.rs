use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    domain::{gateways::invoices::InvoiceGateway, value_objects::invoices::InvoiceModel},
    infra::node_api::client::NodeApiClient,
};

#[async_trait]
impl InvoiceGateway for NodeApiClient {
    async fn user_invoice_history(&self, user_id: Uuid) -> Result<Vec<InvoiceModel>> {
        let resp = self.get(&format!("userinvoicehistory/{user_id}")).await?;
        let result = NodeApiClient::read_json(
            resp,
            "user invoice history",
            "Unable to load your billing history. Please try refreshing the page.",
        )
        .await?;

        let invoices = result
            .get("invoices")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();

        Ok(invoices)
    }
}
