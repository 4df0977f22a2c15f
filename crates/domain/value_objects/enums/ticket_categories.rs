use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Billing,
    Technical,
    Account,
    General,
    Feature,
    Bug,
}

impl Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let category = match self {
            TicketCategory::Billing => "billing",
            TicketCategory::Technical => "technical",
            TicketCategory::Account => "account",
            TicketCategory::General => "general",
            TicketCategory::Feature => "feature",
            TicketCategory::Bug => "bug",
        };
        write!(f, "{}", category)
    }
}

impl TicketCategory {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "billing" => Some(TicketCategory::Billing),
            "technical" => Some(TicketCategory::Technical),
            "account" => Some(TicketCategory::Account),
            "general" => Some(TicketCategory::General),
            "feature" => Some(TicketCategory::Feature),
            "bug" => Some(TicketCategory::Bug),
            _ => None,
        }
    }
}
