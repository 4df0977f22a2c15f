use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum BillingCycle {
    Monthly,
    Annual,
}

impl Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cycle = match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Annual => "annual",
        };
        write!(f, "{}", cycle)
    }
}

impl BillingCycle {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "monthly" => Some(BillingCycle::Monthly),
            "annual" | "yearly" => Some(BillingCycle::Annual),
            _ => None,
        }
    }
}
