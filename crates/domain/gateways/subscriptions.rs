use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::value_objects::subscriptions::{CheckoutRequest, UserPlanDetails};

#[async_trait]
#[automock]
pub trait SubscriptionGateway {
    async fn user_plan_details(&self, user_id: Uuid) -> Result<Option<UserPlanDetails>>;
    async fn cancel_subscription(&self, user_id: Uuid, plan_id: i64) -> Result<bool>;

    /// Hands checkout off to the backend's Stripe proxy; the response is
    /// passed through untouched.
    async fn start_checkout(&self, request: CheckoutRequest) -> Result<Value>;
}
