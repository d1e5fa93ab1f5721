use serde::{Deserialize, Serialize};

/// Seller record. Commission travels as basis points (250 = 2.5%).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seller {
    pub id: i64,
    pub company_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub commission_bps: u32,
    pub active: bool,
    pub created_at: String,
}

/// Seller create/update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SellerRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub commission_bps: u32,
    pub active: bool,
}

impl SellerRequest {
    pub fn from_seller(seller: &Seller) -> Self {
        SellerRequest {
            name: seller.name.clone(),
            email: seller.email.clone(),
            phone: seller.phone.clone(),
            commission_bps: seller.commission_bps,
            active: seller.active,
        }
    }
}
