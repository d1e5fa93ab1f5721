use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request, submitted once at the end of the signup wizard.
/// Account, company, and contact fields travel together; the backend creates
/// the user and its company in one call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub company_name: String,
    pub company_trade_name: Option<String>,
    pub company_tax_id: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

/// Authentication response (login/register success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: UserInfo,
    pub token: String,
    pub message: String,
}

/// User information (public, safe to send to client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub company_id: i64,
    pub created_at: String,
}

/// Password reset, step one: ask the backend to mail a code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Password reset, step two: code plus the replacement password
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordResetConfirm {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// Error response body shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_shape() {
        let request = LoginRequest {
            email: "owner@acme.test".to_string(),
            password: "hunter22".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["email"], "owner@acme.test");
        assert_eq!(json["password"], "hunter22");
    }

    #[test]
    fn test_auth_response_round_trip() {
        let json = r#"{
            "user": {
                "id": 7,
                "name": "Alice",
                "email": "alice@acme.test",
                "role": "owner",
                "company_id": 3,
                "created_at": "2024-01-01T00:00:00Z"
            },
            "token": "jwt-token",
            "message": "Login successful"
        }"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user.id, 7);
        assert_eq!(response.user.company_id, 3);
        assert_eq!(response.token, "jwt-token");
    }

    #[test]
    fn test_register_request_optional_fields_serialize_null() {
        let request = RegisterRequest {
            name: "Alice".to_string(),
            email: "alice@acme.test".to_string(),
            password: "longenough".to_string(),
            company_name: "Acme".to_string(),
            company_tax_id: "12-3456789".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["company_trade_name"].is_null());
        assert_eq!(json["company_name"], "Acme");
    }
}
