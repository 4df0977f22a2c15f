use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::billing_cycles::BillingCycle;

/// The user's current plan as reported by the user-plan endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPlanDetails {
    #[serde(default)]
    pub plan_id: i64,
    #[serde(default)]
    pub plan_name: String,
    #[serde(default)]
    pub plan_price: String,
    #[serde(default)]
    pub plan_status: String,
    #[serde(default)]
    pub next_billing_date: String,
    #[serde(default)]
    pub last_four_digits: String,
    #[serde(default)]
    pub expiry_date: String,
    #[serde(default)]
    pub name_on_card: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub billing_cycle: Option<String>,
    #[serde(default)]
    pub plan_subtitle: Option<String>,
}

impl UserPlanDetails {
    pub fn billing_cycle(&self) -> Option<BillingCycle> {
        self.billing_cycle
            .as_deref()
            .and_then(BillingCycle::from_str)
    }
}

/// Checkout initiation payload sent to the backend's plan-creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutRequest {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "planId")]
    pub plan_id: String,
    #[serde(rename = "billingCycle")]
    pub billing_cycle: String,
}

impl CheckoutRequest {
    /// The backend expects the plan id as a string on this endpoint.
    pub fn new(user_id: Uuid, plan_id: i64, billing_cycle: BillingCycle) -> Self {
        Self {
            user_id,
            plan_id: plan_id.to_string(),
            billing_cycle: billing_cycle.to_string(),
        }
    }
}
