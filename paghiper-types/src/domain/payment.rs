//! Base payment request shared by every payment type.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Seller and order fields common to PIX and boleto requests.
///
/// Serializes to the provider's flat keys; optional fields are left out of
/// the JSON when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Identifies the seller account
    #[serde(rename = "apiKey")]
    pub api_key: String,
    /// Calendar days until the charge expires
    pub days_due_date: i32,
    /// Address PagHiper POSTs transaction updates to
    pub notification_url: String,
    /// Caller's reference for this payment
    pub order_id: String,
    /// Total purchase discount in cents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_cents: Option<i64>,
    /// Show the phrase pre-configured on the PagHiper panel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_description: Option<bool>,
    /// Invoice (nota fiscal) number displayed on the charge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_ntfiscal: Option<i64>,
    /// Per-transaction text shown to the customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_price_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_methods: Option<String>,
    /// Partner integration identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partners_id: Option<String>,
}

impl PaymentRequest {
    /// Creates a request with the four required fields set.
    pub fn new(
        api_key: impl Into<String>,
        order_id: impl Into<String>,
        days_due_date: i32,
        notification_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            days_due_date,
            notification_url: notification_url.into(),
            order_id: order_id.into(),
            ..Self::default()
        }
    }

    pub fn with_discount_cents(mut self, cents: i64) -> Self {
        self.discount_cents = Some(cents);
        self
    }

    pub fn with_shipping(mut self, price_cents: i64, method: impl Into<String>) -> Self {
        self.shipping_price_cents = Some(price_cents);
        self.shipping_methods = Some(method.into());
        self
    }

    pub fn with_seller_description(mut self, description: impl Into<String>) -> Self {
        self.seller_description = Some(description.into());
        self
    }

    /// Checks the required fields in order: API key, due-date offset,
    /// notification URL, order ID.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.trim().is_empty() {
            return Err(ValidationError::Required("ApiKey"));
        }
        if self.days_due_date <= 0 {
            return Err(ValidationError::NonPositive("DaysDueDate"));
        }
        if self.notification_url.trim().is_empty() {
            return Err(ValidationError::Required("NotificationURL"));
        }
        if self.order_id.trim().is_empty() {
            return Err(ValidationError::Required("OrderID"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> PaymentRequest {
        PaymentRequest::new("abc123", "order-1", 5, "https://shop.example/hook")
    }

    #[test]
    fn test_valid_request() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_empty_api_key() {
        let req = PaymentRequest {
            api_key: String::new(),
            ..valid()
        };
        assert_eq!(req.validate(), Err(ValidationError::Required("ApiKey")));
    }

    #[test]
    fn test_non_positive_due_date() {
        for days in [0, -3] {
            let req = PaymentRequest {
                days_due_date: days,
                ..valid()
            };
            assert_eq!(
                req.validate(),
                Err(ValidationError::NonPositive("DaysDueDate"))
            );
        }
    }

    #[test]
    fn test_blank_notification_url() {
        let req = PaymentRequest {
            notification_url: "   ".into(),
            ..valid()
        };
        assert_eq!(
            req.validate(),
            Err(ValidationError::Required("NotificationURL"))
        );
    }

    #[test]
    fn test_empty_order_id() {
        let req = PaymentRequest {
            order_id: String::new(),
            ..valid()
        };
        assert_eq!(req.validate(), Err(ValidationError::Required("OrderID")));
    }

    #[test]
    fn test_first_failure_wins() {
        let req = PaymentRequest::default();
        assert_eq!(req.validate(), Err(ValidationError::Required("ApiKey")));
    }

    #[test]
    fn test_wire_keys() {
        let json = serde_json::to_value(valid().with_discount_cents(100)).unwrap();
        assert_eq!(json["apiKey"], "abc123");
        assert_eq!(json["days_due_date"], 5);
        assert_eq!(json["discount_cents"], 100);
        assert!(json.get("shipping_methods").is_none());
    }
}
