use serde::{Deserialize, Serialize};

/// Offline-sync summary the backend can return. No sync engine consumes this
/// yet; the type only pins the wire shape for clients that will.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncResponse {
    pub server_time: String,
    pub products_changed: i64,
    pub customers_changed: i64,
    pub sales_changed: i64,
    pub quotes_changed: i64,
    pub sellers_changed: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_response_wire_shape() {
        let json = r#"{
            "server_time": "2024-06-01T12:00:00Z",
            "products_changed": 4,
            "customers_changed": 0,
            "sales_changed": 12,
            "quotes_changed": 1,
            "sellers_changed": 0
        }"#;
        let response: SyncResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.sales_changed, 12);
        assert_eq!(response.server_time, "2024-06-01T12:00:00Z");
    }
}
