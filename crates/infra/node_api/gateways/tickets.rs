use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    domain::{gateways::tickets::TicketGateway, value_objects::tickets::TicketDraft},
    infra::node_api::client::NodeApiClient,
};

#[async_trait]
impl TicketGateway for NodeApiClient {
    async fn list_tickets(&self) -> Result<Vec<Value>> {
        let resp = self.get("allticket").await?;
        let result = NodeApiClient::read_json(
            resp,
            "list tickets",
            "Unable to load support tickets. Please try again.",
        )
        .await?;

        let tickets = result
            .get("ticketdetails")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(tickets)
    }

    async fn submit_ticket(&self, user_id: Uuid, draft: TicketDraft) -> Result<()> {
        let body = json!({
            "userId": user_id,
            "title": draft.subject,
            "category": draft.category,
            "description": draft.message,
            "priority": draft.priority.to_string(),
        });

        let resp = self.post_json("ticket", &body).await?;
        NodeApiClient::read_json(
            resp,
            "submit ticket",
            "Failed to submit your ticket. Please try again.",
        )
        .await?;

        Ok(())
    }
}
