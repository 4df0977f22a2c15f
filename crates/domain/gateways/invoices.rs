use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::value_objects::invoices::InvoiceModel;

#[async_trait]
#[automock]
pub trait InvoiceGateway {
    async fn user_invoice_history(&self, user_id: Uuid) -> Result<Vec<InvoiceModel>>;
}
