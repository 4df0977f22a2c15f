use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::value_objects::payment_methods::PaymentMethodModel;

#[async_trait]
#[automock]
pub trait PaymentMethodGateway {
    async fn list_cards(&self, user_id: Uuid) -> Result<Vec<PaymentMethodModel>>;

    /// `None` when the user has no default card; lookup failures also
    /// resolve to `None` rather than an error.
    async fn default_card_id(&self, user_id: Uuid) -> Result<Option<String>>;

    async fn set_default_card(&self, user_id: Uuid, payment_method_id: &str) -> Result<()>;
    async fn delete_card(&self, user_id: Uuid, payment_method_id: &str) -> Result<()>;
}
