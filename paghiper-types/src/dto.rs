//! Request DTOs sent to the PagHiper API.

use serde::{Deserialize, Serialize};

use crate::domain::{Item, Payer, PaymentRequest};
use crate::error::ValidationError;
use crate::payload::Payload;
use crate::ports::{FormatTaxIdValidator, TaxIdValidator};

#[derive(Serialize)]
struct ItemList<'a> {
    items: &'a [Item],
}

fn validate_items(items: &[Item]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::NoItems);
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// PIX
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a PIX charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixRequest {
    pub payment: PaymentRequest,
    pub payer: Payer,
    pub items: Vec<Item>,
}

impl PixRequest {
    pub fn new(payment: PaymentRequest, payer: Payer, items: Vec<Item>) -> Self {
        Self {
            payment,
            payer,
            items,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_with(&FormatTaxIdValidator)
    }

    /// Runs payment, payer and item checks in that order, stopping at the
    /// first failure.
    pub fn validate_with(&self, tax_ids: &dyn TaxIdValidator) -> Result<(), ValidationError> {
        self.payment.validate()?;
        self.payer.validate_with(tax_ids)?;
        validate_items(&self.items)
    }

    /// Flattens payment, payer and items into the single object the API
    /// expects.
    pub fn to_payload(&self) -> Result<Payload, serde_json::Error> {
        Payload::new()
            .merge(&self.payment)?
            .merge(&self.payer)?
            .merge(&ItemList { items: &self.items })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Boleto
// ─────────────────────────────────────────────────────────────────────────────

/// Print layout of a bank slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BankSlipType {
    #[serde(rename = "boletoA4")]
    A4,
    #[serde(rename = "boletoCarne")]
    Carne,
}

/// Boleto-only settings layered on top of the base payment fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoletoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_bank_slip: Option<BankSlipType>,
    /// Fine charged after the due date, in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_payment_fine: Option<u8>,
    /// Charge pro-rata interest per day late
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_day_interest: Option<bool>,
    /// Days the slip stays payable after the due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_after_day_due: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_payment_discounts_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_payment_discounts_cents: Option<i64>,
}

/// Request to create a boleto (bank slip).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoletoRequest {
    pub payment: PaymentRequest,
    pub payer: Payer,
    pub items: Vec<Item>,
    pub options: BoletoOptions,
}

impl BoletoRequest {
    pub fn new(payment: PaymentRequest, payer: Payer, items: Vec<Item>) -> Self {
        Self {
            payment,
            payer,
            items,
            options: BoletoOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BoletoOptions) -> Self {
        self.options = options;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_with(&FormatTaxIdValidator)
    }

    pub fn validate_with(&self, tax_ids: &dyn TaxIdValidator) -> Result<(), ValidationError> {
        self.payment.validate()?;
        self.payer.validate_with(tax_ids)?;
        validate_items(&self.items)
    }

    pub fn to_payload(&self) -> Result<Payload, serde_json::Error> {
        Payload::new()
            .merge(&self.payment)?
            .merge(&self.options)?
            .merge(&self.payer)?
            .merge(&ItemList { items: &self.items })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────────────────────────

/// Lookup of the transaction a webhook notification refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    pub token: String,
    pub transaction_id: String,
    pub notification_id: String,
}

impl NotificationRequest {
    pub fn new(
        api_key: impl Into<String>,
        token: impl Into<String>,
        transaction_id: impl Into<String>,
        notification_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            token: token.into(),
            transaction_id: transaction_id.into(),
            notification_id: notification_id.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("ApiKey", &self.api_key),
            ("Token", &self.token),
            ("TransactionID", &self.transaction_id),
            ("NotificationID", &self.notification_id),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ValidationError::Required(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn pix() -> PixRequest {
        PixRequest::new(
            PaymentRequest::new("abc123", "order-1", 5, "https://shop.example/hook"),
            Payer::new("Maria Silva", "maria@example.com", "529.982.247-25"),
            vec![Item::new("1", "Widget", 1, 1000)],
        )
    }

    fn keys(value: &serde_json::Value) -> BTreeSet<String> {
        value.as_object().unwrap().keys().cloned().collect()
    }

    #[test]
    fn test_valid_pix_request() {
        assert!(pix().validate().is_ok());
    }

    #[test]
    fn test_empty_items_rejected() {
        let req = PixRequest {
            items: vec![],
            ..pix()
        };
        assert_eq!(req.validate(), Err(ValidationError::NoItems));
    }

    #[test]
    fn test_payment_checked_before_payer() {
        let mut req = pix();
        req.payment.order_id.clear();
        req.payer.email = "broken".into();
        req.items.clear();
        assert_eq!(req.validate(), Err(ValidationError::Required("OrderID")));
    }

    #[test]
    fn test_payer_checked_before_items() {
        let mut req = pix();
        req.payer.cpf_cnpj = "12345".into();
        req.items.clear();
        assert_eq!(req.validate(), Err(ValidationError::Invalid("CpfCnpj")));
    }

    #[test]
    fn test_pix_payload_is_flat_union() {
        let req = pix();
        let payload = serde_json::to_value(req.to_payload().unwrap()).unwrap();

        let mut expected = keys(&serde_json::to_value(&req.payment).unwrap());
        expected.extend(keys(&serde_json::to_value(&req.payer).unwrap()));
        expected.insert("items".to_string());

        assert_eq!(keys(&payload), expected);
        assert_eq!(payload["payer_name"], "Maria Silva");
        assert_eq!(payload["items"][0]["price_cents"], "1000");
        assert!(payload.get("payment").is_none());
        assert!(payload.get("payer").is_none());
    }

    #[test]
    fn test_boleto_payload_includes_options() {
        let req = BoletoRequest::new(pix().payment, pix().payer, pix().items).with_options(
            BoletoOptions {
                type_bank_slip: Some(BankSlipType::A4),
                late_payment_fine: Some(2),
                ..BoletoOptions::default()
            },
        );
        let payload = req.to_payload().unwrap();
        assert_eq!(
            payload.get("type_bank_slip"),
            Some(&serde_json::json!("boletoA4"))
        );
        assert_eq!(payload.get("late_payment_fine"), Some(&serde_json::json!(2)));
        assert!(payload.get("per_day_interest").is_none());
        assert_eq!(payload.get("order_id"), Some(&serde_json::json!("order-1")));
    }

    #[test]
    fn test_notification_validation() {
        let ok = NotificationRequest::new("abc123", "tok", "TX1", "N1");
        assert!(ok.validate().is_ok());

        let missing_token = NotificationRequest::new("abc123", " ", "TX1", "N1");
        assert_eq!(
            missing_token.validate(),
            Err(ValidationError::Required("Token"))
        );
    }

    #[test]
    fn test_notification_wire_shape() {
        let json = serde_json::to_value(NotificationRequest::new("k", "t", "tx", "n")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "apiKey": "k",
                "token": "t",
                "transaction_id": "tx",
                "notification_id": "n"
            })
        );
    }
}
