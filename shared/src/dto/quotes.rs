use serde::{Deserialize, Serialize};

/// Quote lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    Draft,
    Sent,
    Approved,
    Rejected,
    Converted,
}

impl QuoteStatus {
    pub const ALL: [QuoteStatus; 5] = [
        QuoteStatus::Draft,
        QuoteStatus::Sent,
        QuoteStatus::Approved,
        QuoteStatus::Rejected,
        QuoteStatus::Converted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "Draft",
            QuoteStatus::Sent => "Sent",
            QuoteStatus::Approved => "Approved",
            QuoteStatus::Rejected => "Rejected",
            QuoteStatus::Converted => "Converted",
        }
    }

    /// Lowercase form used in query strings, matching the wire encoding.
    pub fn as_query(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "draft",
            QuoteStatus::Sent => "sent",
            QuoteStatus::Approved => "approved",
            QuoteStatus::Rejected => "rejected",
            QuoteStatus::Converted => "converted",
        }
    }
}

/// Quote line item as stored by the backend. The unit price is frozen at the
/// moment the line was added, so later catalog price changes never move an
/// issued quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

/// Line item as submitted; the backend recomputes line and document totals
/// from these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItemInput {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

/// Quote record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub id: i64,
    pub company_id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub seller_id: Option<i64>,
    pub status: QuoteStatus,
    pub items: Vec<QuoteItem>,
    pub subtotal_cents: i64,
    pub discount_bps: u32,
    pub discount_cents: i64,
    pub tax_bps: u32,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub valid_until: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Quote {
    /// True when `valid_until` has passed. The quote stays valid through the
    /// stated day; unparseable or absent dates are treated as not expired.
    pub fn is_expired(&self) -> bool {
        let Some(valid_until) = &self.valid_until else {
            return false;
        };
        match chrono::NaiveDate::parse_from_str(valid_until, "%Y-%m-%d") {
            Ok(deadline) => deadline < chrono::Utc::now().date_naive(),
            Err(_) => false,
        }
    }
}

/// Quote create/update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteRequest {
    pub customer_id: i64,
    pub seller_id: Option<i64>,
    pub items: Vec<LineItemInput>,
    pub discount_bps: u32,
    pub tax_bps: u32,
    pub valid_until: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&QuoteStatus::Draft).unwrap(),
            "\"draft\""
        );
        let status: QuoteStatus = serde_json::from_str("\"converted\"").unwrap();
        assert_eq!(status, QuoteStatus::Converted);
    }

    #[test]
    fn test_status_query_matches_wire_encoding() {
        for status in QuoteStatus::ALL {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status.as_query()));
        }
    }

    fn quote_with_validity(valid_until: Option<&str>) -> Quote {
        Quote {
            id: 1,
            company_id: 1,
            customer_id: 1,
            customer_name: "Acme".to_string(),
            seller_id: None,
            status: QuoteStatus::Sent,
            items: vec![],
            subtotal_cents: 0,
            discount_bps: 0,
            discount_cents: 0,
            tax_bps: 0,
            tax_cents: 0,
            total_cents: 0,
            valid_until: valid_until.map(str::to_string),
            notes: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_expiry() {
        assert!(quote_with_validity(Some("2020-01-01")).is_expired());
        assert!(!quote_with_validity(Some("2099-12-31")).is_expired());
        assert!(!quote_with_validity(None).is_expired());
        assert!(!quote_with_validity(Some("not a date")).is_expired());
    }
}
