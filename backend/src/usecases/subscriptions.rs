use std::sync::Arc;

use crates::domain::{
    gateways::subscriptions::SubscriptionGateway,
    value_objects::{
        enums::billing_cycles::BillingCycle,
        subscriptions::{CheckoutRequest, UserPlanDetails},
    },
};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("no subscription details found")]
    SubscriptionNotFound,
    #[error(
        "We encountered an issue while cancelling your subscription. Please try again or contact support."
    )]
    CancelRejected,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SubscriptionError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            SubscriptionError::SubscriptionNotFound => StatusCode::NOT_FOUND,
            SubscriptionError::CancelRejected => StatusCode::BAD_GATEWAY,
            SubscriptionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type SubscriptionResult<T> = std::result::Result<T, SubscriptionError>;

/// The customer's view of their own subscription: current plan details,
/// cancellation, and checkout hand-off to the backend's Stripe proxy.
pub struct SubscriptionUseCase<G>
where
    G: SubscriptionGateway + Send + Sync + 'static,
{
    subscription_gateway: Arc<G>,
}

impl<G> SubscriptionUseCase<G>
where
    G: SubscriptionGateway + Send + Sync + 'static,
{
    pub fn new(subscription_gateway: Arc<G>) -> Self {
        Self {
            subscription_gateway,
        }
    }

    pub async fn current_plan(&self, user_id: Uuid) -> SubscriptionResult<UserPlanDetails> {
        info!(%user_id, "subscriptions: loading current plan details");

        let details = self
            .subscription_gateway
            .user_plan_details(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, error = ?err, "subscriptions: failed to load plan details");
                SubscriptionError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%user_id, "subscriptions: no plan details for user");
                SubscriptionError::SubscriptionNotFound
            })?;

        Ok(details)
    }

    pub async fn cancel(&self, user_id: Uuid, plan_id: i64) -> SubscriptionResult<()> {
        info!(%user_id, plan_id, "subscriptions: cancel requested");

        let cancelled = self
            .subscription_gateway
            .cancel_subscription(user_id, plan_id)
            .await
            .map_err(|err| {
                error!(%user_id, plan_id, error = ?err, "subscriptions: cancel failed");
                SubscriptionError::Internal(err)
            })?;

        if !cancelled {
            let err = SubscriptionError::CancelRejected;
            warn!(
                %user_id,
                plan_id,
                status = err.status_code().as_u16(),
                "subscriptions: backend declined cancellation"
            );
            return Err(err);
        }

        info!(%user_id, plan_id, "subscriptions: subscription cancelled");

        Ok(())
    }

    /// Kicks off checkout at the backend; the response (session/client
    /// details for the hosted payment page) is passed through untouched.
    pub async fn start_checkout(
        &self,
        user_id: Uuid,
        plan_id: i64,
        billing_cycle: BillingCycle,
    ) -> SubscriptionResult<Value> {
        info!(
            %user_id,
            plan_id,
            billing_cycle = %billing_cycle,
            "subscriptions: starting checkout"
        );

        let request = CheckoutRequest::new(user_id, plan_id, billing_cycle);
        let result = self
            .subscription_gateway
            .start_checkout(request)
            .await
            .map_err(|err| {
                error!(%user_id, plan_id, error = ?err, "subscriptions: checkout failed");
                SubscriptionError::Internal(err)
            })?;

        Ok(result)
    }
}
