/// Validation utilities for user input

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert to a `Result` so callers can chain checks with `?`.
    pub fn into_result(self) -> Result<(), String> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.error.unwrap_or_else(|| "Invalid input".to_string()))
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    if !email.contains('@') {
        return ValidationResult::err("Invalid email format");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate password length. The backend enforces the rest of its policy;
/// the client only pre-checks what it can know.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.len() < 8 {
        return ValidationResult::err("Password must be at least 8 characters");
    }

    ValidationResult::ok()
}

/// Validate a required text field
pub fn validate_required(value: &str, field: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", field));
    }
    ValidationResult::ok()
}

/// Validate a line-item quantity string: a whole number of at least 1
pub fn validate_quantity(value: &str) -> ValidationResult {
    match value.trim().parse::<i64>() {
        Ok(quantity) if quantity >= 1 => ValidationResult::ok(),
        Ok(_) => ValidationResult::err("Quantity must be at least 1"),
        Err(_) => ValidationResult::err("Quantity must be a whole number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
        assert!(!validate_email("a@b@c.com").is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("longenough").is_valid);
        assert!(validate_password("exactly8!").is_valid);
        assert!(!validate_password("short").is_valid);
        assert!(!validate_password("").is_valid);
    }

    #[test]
    fn test_required_validation() {
        assert!(validate_required("Acme", "Name").is_valid);
        assert!(!validate_required("", "Name").is_valid);
        assert!(!validate_required("   ", "Name").is_valid);
        assert_eq!(
            validate_required("", "Company name").error.unwrap(),
            "Company name is required"
        );
    }

    #[test]
    fn test_quantity_validation() {
        assert!(validate_quantity("1").is_valid);
        assert!(validate_quantity(" 42 ").is_valid);
        assert!(!validate_quantity("0").is_valid);
        assert!(!validate_quantity("-3").is_valid);
        assert!(!validate_quantity("2.5").is_valid);
        assert!(!validate_quantity("abc").is_valid);
    }
}
