use serde::{Deserialize, Serialize};

use super::quotes::LineItemInput;

/// Sale lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Pending,
    Paid,
    Cancelled,
}

impl SaleStatus {
    pub const ALL: [SaleStatus; 3] = [SaleStatus::Pending, SaleStatus::Paid, SaleStatus::Cancelled];

    pub fn label(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "Pending",
            SaleStatus::Paid => "Paid",
            SaleStatus::Cancelled => "Cancelled",
        }
    }

    pub fn as_query(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "pending",
            SaleStatus::Paid => "paid",
            SaleStatus::Cancelled => "cancelled",
        }
    }
}

/// Payment method recorded on a sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
    Other,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::Transfer,
        PaymentMethod::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Transfer => "Transfer",
            PaymentMethod::Other => "Other",
        }
    }
}

/// Sale line item, same frozen-price shape as a quote item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaleItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

/// Sale record. `quote_id` is set when the sale came from a converted quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sale {
    pub id: i64,
    pub company_id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub seller_id: Option<i64>,
    pub quote_id: Option<i64>,
    pub status: SaleStatus,
    pub payment_method: Option<PaymentMethod>,
    pub items: Vec<SaleItem>,
    pub subtotal_cents: i64,
    pub discount_bps: u32,
    pub discount_cents: i64,
    pub tax_bps: u32,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Sale create payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaleRequest {
    pub customer_id: i64,
    pub seller_id: Option<i64>,
    pub payment_method: Option<PaymentMethod>,
    pub items: Vec<LineItemInput>,
    pub discount_bps: u32,
    pub tax_bps: u32,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_status_wire_encoding() {
        for status in SaleStatus::ALL {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status.as_query()));
        }
    }

    #[test]
    fn test_sale_deserializes_converted_quote_linkage() {
        let json = r#"{
            "id": 44,
            "company_id": 3,
            "customer_id": 9,
            "customer_name": "Acme Corp",
            "seller_id": 2,
            "quote_id": 17,
            "status": "pending",
            "payment_method": "card",
            "items": [{
                "product_id": 12,
                "product_name": "Thermal paper roll",
                "quantity": 3,
                "unit_price_cents": 459,
                "line_total_cents": 1377
            }],
            "subtotal_cents": 1377,
            "discount_bps": 0,
            "discount_cents": 0,
            "tax_bps": 825,
            "tax_cents": 114,
            "total_cents": 1491,
            "notes": null,
            "created_at": "2024-06-01T12:00:00Z",
            "updated_at": "2024-06-01T12:00:00Z"
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.quote_id, Some(17));
        assert_eq!(sale.payment_method, Some(PaymentMethod::Card));
        assert_eq!(sale.items.len(), 1);
        assert_eq!(sale.items[0].line_total_cents, 1377);
    }
}
