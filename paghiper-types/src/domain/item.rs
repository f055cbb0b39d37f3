//! Line item domain model.

use serde::{Deserialize, Serialize};

/// A single purchased item included in a payment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub description: String,
    pub quantity: u32,
    pub item_id: String,
    /// Unit price in cents. The API expects it as a string.
    pub price_cents: String,
}

impl Item {
    pub fn new(
        item_id: impl Into<String>,
        description: impl Into<String>,
        quantity: u32,
        price_cents: u64,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            item_id: item_id.into(),
            price_cents: price_cents.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_wire_shape() {
        let item = Item::new("sku-1", "Widget", 1, 1000);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "Widget",
                "quantity": 1,
                "item_id": "sku-1",
                "price_cents": "1000"
            })
        );
    }
}
