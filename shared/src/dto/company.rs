use serde::{Deserialize, Serialize};

/// Company profile record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub trade_name: Option<String>,
    pub tax_id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub created_at: String,
}

/// Company profile update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyRequest {
    pub name: String,
    pub trade_name: Option<String>,
    pub tax_id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

impl CompanyRequest {
    /// Prefill an edit form from the current record.
    pub fn from_company(company: &Company) -> Self {
        CompanyRequest {
            name: company.name.clone(),
            trade_name: company.trade_name.clone(),
            tax_id: company.tax_id.clone(),
            email: company.email.clone(),
            phone: company.phone.clone(),
            address: company.address.clone(),
            city: company.city.clone(),
            state: company.state.clone(),
            postal_code: company.postal_code.clone(),
        }
    }
}
