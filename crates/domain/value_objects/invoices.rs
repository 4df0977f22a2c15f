use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::invoice_statuses::InvoiceStatus;

/// One row of a user's billing history, as delivered by the invoice-history
/// endpoint. Dates arrive preformatted ("Jul 11, 2025").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceModel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub status: String,
}

impl InvoiceModel {
    pub fn status(&self) -> InvoiceStatus {
        InvoiceStatus::from_str(&self.status)
    }

    /// Parses the display date back into a calendar date for sorting.
    pub fn issued_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%b %d, %Y").ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InvoiceFilter {
    pub search: Option<String>,
    pub status: Option<InvoiceStatus>,
}

/// Case-insensitive search over invoice number and plan name, optionally
/// narrowed by status. Both conditions must hold.
pub fn filter_invoices(invoices: &[InvoiceModel], filter: &InvoiceFilter) -> Vec<InvoiceModel> {
    invoices
        .iter()
        .filter(|invoice| {
            let matches_search = match filter.search.as_deref() {
                Some(term) if !term.is_empty() => {
                    let term = term.to_lowercase();
                    invoice.number.to_lowercase().contains(&term)
                        || invoice.plan.to_lowercase().contains(&term)
                }
                _ => true,
            };

            let matches_status = match filter.status {
                Some(status) => invoice.status() == status,
                None => true,
            };

            matches_search && matches_status
        })
        .cloned()
        .collect()
}

/// Orders rows newest first; rows with unparseable dates sink to the end in
/// their original order.
pub fn sort_invoices_newest_first(invoices: &mut [InvoiceModel]) {
    invoices.sort_by(|a, b| match (a.issued_on(), b.issued_on()) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
