use std::sync::Arc;

use anyhow::Result;
use crates::domain::{
    gateways::payment_methods::PaymentMethodGateway,
    value_objects::payment_methods::WalletView,
};
use tracing::info;
use uuid::Uuid;

/// Card management for a user: the stored cards, which one is the default,
/// and the default/delete actions. All state lives behind the billing API.
pub struct PaymentMethodsUseCase<G>
where
    G: PaymentMethodGateway + Send + Sync + 'static,
{
    payment_method_gateway: Arc<G>,
}

impl<G> PaymentMethodsUseCase<G>
where
    G: PaymentMethodGateway + Send + Sync + 'static,
{
    pub fn new(payment_method_gateway: Arc<G>) -> Self {
        Self {
            payment_method_gateway,
        }
    }

    pub async fn wallet(&self, user_id: Uuid) -> Result<WalletView> {
        let cards = self.payment_method_gateway.list_cards(user_id).await?;
        let default_card_id = self
            .payment_method_gateway
            .default_card_id(user_id)
            .await?;

        info!(
            %user_id,
            card_count = cards.len(),
            has_default = default_card_id.is_some(),
            "payment_methods: wallet loaded"
        );

        Ok(WalletView {
            cards,
            default_card_id,
        })
    }

    pub async fn set_default(&self, user_id: Uuid, payment_method_id: &str) -> Result<()> {
        self.payment_method_gateway
            .set_default_card(user_id, payment_method_id)
            .await?;

        info!(%user_id, payment_method_id, "payment_methods: default card updated");

        Ok(())
    }

    pub async fn remove_card(&self, user_id: Uuid, payment_method_id: &str) -> Result<()> {
        self.payment_method_gateway
            .delete_card(user_id, payment_method_id)
            .await?;

        info!(%user_id, payment_method_id, "payment_methods: card removed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::{
        gateways::payment_methods::MockPaymentMethodGateway,
        value_objects::payment_methods::PaymentMethodModel,
    };
    use mockall::predicate::eq;

    #[tokio::test]
    async fn wallet_combines_cards_with_default_flag() {
        let user_id = Uuid::new_v4();

        let mut gateway = MockPaymentMethodGateway::new();
        gateway
            .expect_list_cards()
            .with(eq(user_id))
            .returning(|_| {
                Box::pin(async {
                    Ok(vec![
                        PaymentMethodModel {
                            id: "pm_1".to_string(),
                            brand: "visa".to_string(),
                            last4: "4242".to_string(),
                            ..Default::default()
                        },
                        PaymentMethodModel {
                            id: "pm_2".to_string(),
                            brand: "mastercard".to_string(),
                            last4: "4444".to_string(),
                            ..Default::default()
                        },
                    ])
                })
            });
        gateway
            .expect_default_card_id()
            .with(eq(user_id))
            .returning(|_| Box::pin(async { Ok(Some("pm_2".to_string())) }));

        let usecase = PaymentMethodsUseCase::new(Arc::new(gateway));
        let wallet = usecase.wallet(user_id).await.unwrap();

        assert_eq!(wallet.cards.len(), 2);
        assert!(!wallet.is_default(&wallet.cards[0]));
        assert!(wallet.is_default(&wallet.cards[1]));
    }

    #[tokio::test]
    async fn missing_default_card_is_not_an_error() {
        let user_id = Uuid::new_v4();

        let mut gateway = MockPaymentMethodGateway::new();
        gateway
            .expect_list_cards()
            .returning(|_| Box::pin(async { Ok(vec![]) }));
        gateway
            .expect_default_card_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = PaymentMethodsUseCase::new(Arc::new(gateway));
        let wallet = usecase.wallet(user_id).await.unwrap();

        assert!(wallet.cards.is_empty());
        assert!(wallet.default_card_id.is_none());
    }
}
