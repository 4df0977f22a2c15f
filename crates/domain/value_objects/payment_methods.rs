use serde::{Deserialize, Serialize};

/// A stored card as returned by the payment-methods endpoint. The endpoint
/// returns a bare array; the default flag is resolved separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodModel {
    #[serde(default, alias = "paymentMethodId")]
    pub id: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default, alias = "lastFourDigits")]
    pub last4: String,
    #[serde(default, alias = "expMonth")]
    pub exp_month: String,
    #[serde(default, alias = "expYear")]
    pub exp_year: String,
    #[serde(default, alias = "nameOnCard")]
    pub name_on_card: String,
}

impl PaymentMethodModel {
    pub fn expiry(&self) -> String {
        format!("{}/{}", self.exp_month, self.exp_year)
    }
}

/// A card list decorated with the user's default card id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WalletView {
    pub cards: Vec<PaymentMethodModel>,
    pub default_card_id: Option<String>,
}

impl WalletView {
    pub fn is_default(&self, card: &PaymentMethodModel) -> bool {
        self.default_card_id.as_deref() == Some(card.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_field_name_variants() {
        let card: PaymentMethodModel = serde_json::from_value(serde_json::json!({
            "paymentMethodId": "pm_123",
            "brand": "visa",
            "lastFourDigits": "4242",
            "expMonth": "12",
            "expYear": "2027",
            "nameOnCard": "A. Customer",
        }))
        .unwrap();

        assert_eq!(card.id, "pm_123");
        assert_eq!(card.last4, "4242");
        assert_eq!(card.expiry(), "12/2027");
    }

    #[test]
    fn default_flag_comes_from_wallet() {
        let card = PaymentMethodModel {
            id: "pm_1".to_string(),
            ..Default::default()
        };
        let wallet = WalletView {
            cards: vec![card.clone()],
            default_card_id: Some("pm_1".to_string()),
        };

        assert!(wallet.is_default(&card));

        let other = PaymentMethodModel {
            id: "pm_2".to_string(),
            ..Default::default()
        };
        assert!(!wallet.is_default(&other));
    }
}
