use serde::{Deserialize, Serialize};

use super::sales::SaleStatus;

/// Server-side dashboard aggregates, displayed read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub total_products: i64,
    pub total_customers: i64,
    pub total_sales: i64,
    pub total_quotes: i64,
    pub revenue_cents: i64,
    pub pending_sales: i64,
    pub low_stock_products: i64,
    pub recent_sales: Vec<RecentSale>,
}

/// Compact sale row shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentSale {
    pub id: i64,
    pub customer_name: String,
    pub total_cents: i64,
    pub status: SaleStatus,
    pub created_at: String,
}
