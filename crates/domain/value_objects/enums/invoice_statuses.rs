use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Failed,
    #[default]
    Unknown,
}

impl Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Failed => "failed",
            InvoiceStatus::Unknown => "unknown",
        };
        write!(f, "{}", status)
    }
}

impl InvoiceStatus {
    pub fn from_str(value: &str) -> Self {
        match value {
            "paid" => InvoiceStatus::Paid,
            "pending" => InvoiceStatus::Pending,
            "failed" => InvoiceStatus::Failed,
            _ => InvoiceStatus::Unknown,
        }
    }
}
