//! # Authentication Endpoints
//!
//! Login, registration, logout, and the password-reset pair.
//!
//! These endpoints are unauthenticated (except logout), so they parse error
//! bodies themselves instead of going through the bearer-aware helpers in
//! [`super::client`]: a 401 here means bad credentials, not an expired
//! session.

use shared::{AuthResponse, ErrorResponse, LoginRequest, PasswordResetConfirm, PasswordResetRequest, RegisterRequest};

use super::client::{self, ApiClient};

/// Login with email and password.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(
    client: &ApiClient,
    email: String,
    password: String,
) -> Result<AuthResponse, String> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { email, password };

    let response = client
        .client
        .post(format!("{}/api/auth/login", ApiClient::base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let result = response.json::<AuthResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "Login response parse error");
            format!("Failed to parse response: {}", e)
        });

        if result.is_ok() {
            tracing::info!(duration_ms = duration.as_millis(), "Login successful");
        }
        result
    } else {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|e| format!("Failed to parse error: {}", e))?;

        tracing::warn!(
            status = status.as_u16(),
            error = %error.error,
            duration_ms = duration.as_millis(),
            "Login failed"
        );
        Err(error.error)
    }
}

/// Register a new account. The wizard submits everything in one payload;
/// the backend creates the user and its company together.
#[tracing::instrument(skip(client, request), fields(email = %request.email, company = %request.company_name))]
pub async fn register(client: &ApiClient, request: RegisterRequest) -> Result<AuthResponse, String> {
    tracing::info!("Attempting registration");
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(format!("{}/api/auth/register", ApiClient::base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Registration network error");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let result = response.json::<AuthResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "Registration response parse error");
            format!("Failed to parse response: {}", e)
        });

        if result.is_ok() {
            tracing::info!(duration_ms = duration.as_millis(), "Registration successful");
        }
        result
    } else {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|e| format!("Failed to parse error: {}", e))?;

        tracing::warn!(
            status = status.as_u16(),
            error = %error.error,
            duration_ms = duration.as_millis(),
            "Registration failed"
        );
        Err(error.error)
    }
}

/// Invalidate the token server-side. Best effort; local state is cleared
/// regardless of the outcome.
pub async fn logout(client: &ApiClient, token: &str) -> Result<(), String> {
    let response = client::with_bearer(
        client
            .client
            .post(format!("{}/api/auth/logout", ApiClient::base_url())),
        token,
    )
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    client::parse_unit(response).await
}

/// Ask the backend to mail a reset code to `email`.
pub async fn request_password_reset(client: &ApiClient, email: String) -> Result<(), String> {
    let request = PasswordResetRequest { email };

    let response = client
        .client
        .post(format!(
            "{}/api/auth/password-reset/request",
            ApiClient::base_url()
        ))
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        Ok(())
    } else {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|e| format!("Failed to parse error: {}", e))?;
        Err(error.error)
    }
}

/// Submit the mailed code and the replacement password.
pub async fn confirm_password_reset(
    client: &ApiClient,
    request: PasswordResetConfirm,
) -> Result<(), String> {
    let response = client
        .client
        .post(format!(
            "{}/api/auth/password-reset/confirm",
            ApiClient::base_url()
        ))
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        Ok(())
    } else {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|e| format!("Failed to parse error: {}", e))?;
        Err(error.error)
    }
}
