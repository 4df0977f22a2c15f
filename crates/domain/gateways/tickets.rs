use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::value_objects::tickets::TicketDraft;

#[async_trait]
#[automock]
pub trait TicketGateway {
    async fn list_tickets(&self) -> Result<Vec<Value>>;
    async fn submit_ticket(&self, user_id: Uuid, draft: TicketDraft) -> Result<()>;
}
