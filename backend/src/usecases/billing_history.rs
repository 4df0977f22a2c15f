use std::sync::Arc;

use anyhow::Result;
use crates::domain::{
    gateways::invoices::InvoiceGateway,
    value_objects::invoices::{InvoiceFilter, InvoiceModel, filter_invoices, sort_invoices_newest_first},
};
use tracing::info;
use uuid::Uuid;

/// Serves a user's billing history, newest invoice first, narrowed by the
/// caller's search and status filter.
pub struct BillingHistoryUseCase<G>
where
    G: InvoiceGateway + Send + Sync + 'static,
{
    invoice_gateway: Arc<G>,
}

impl<G> BillingHistoryUseCase<G>
where
    G: InvoiceGateway + Send + Sync + 'static,
{
    pub fn new(invoice_gateway: Arc<G>) -> Self {
        Self { invoice_gateway }
    }

    pub async fn user_history(
        &self,
        user_id: Uuid,
        filter: &InvoiceFilter,
    ) -> Result<Vec<InvoiceModel>> {
        let mut invoices = self.invoice_gateway.user_invoice_history(user_id).await?;

        info!(
            %user_id,
            invoice_count = invoices.len(),
            "billing_history: invoices loaded"
        );

        sort_invoices_newest_first(&mut invoices);
        Ok(filter_invoices(&invoices, filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::{
        gateways::invoices::MockInvoiceGateway,
        value_objects::enums::invoice_statuses::InvoiceStatus,
    };
    use mockall::predicate::eq;

    fn invoice(number: &str, plan: &str, date: &str, status: &str) -> InvoiceModel {
        InvoiceModel {
            id: format!("inv_{number}"),
            number: number.to_string(),
            date: date.to_string(),
            plan: plan.to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn history_is_sorted_and_filtered() {
        let user_id = Uuid::new_v4();

        let mut invoice_gateway = MockInvoiceGateway::new();
        invoice_gateway
            .expect_user_invoice_history()
            .with(eq(user_id))
            .returning(|_| {
                Box::pin(async {
                    Ok(vec![
                        invoice("INV-001", "PRO Plan", "May 11, 2025", "paid"),
                        invoice("INV-003", "PRO Plan", "Jul 11, 2025", "paid"),
                        invoice("INV-002", "LITE Plan", "Jun 11, 2025", "failed"),
                    ])
                })
            });

        let usecase = BillingHistoryUseCase::new(Arc::new(invoice_gateway));

        let filter = InvoiceFilter {
            search: Some("pro".to_string()),
            status: Some(InvoiceStatus::Paid),
        };
        let rows = usecase.user_history(user_id, &filter).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, "INV-003");
        assert_eq!(rows[1].number, "INV-001");
    }
}
