//! Session Endpoints
//!
//! Token validation, login, logout and account registration.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::models::User;

#[derive(Deserialize)]
struct ValidateResponse {
    valid: bool,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct RegisterResponse {
    data: Vec<User>,
}

impl ApiClient {
    /// Ask the backend whether the stored token still names a live session.
    ///
    /// Fails closed: no stored token, a non-success status, a transport
    /// failure or an unreadable body all count as "not authenticated".
    pub async fn validate(&self) -> bool {
        if self.token().is_none() {
            return false;
        }
        match self.post_validate().await {
            Ok(valid) => valid,
            Err(err) => {
                log::warn!("session validation failed: {err}");
                false
            }
        }
    }

    async fn post_validate(&self) -> Result<bool, ApiError> {
        let response = self.post("validate").send().await?;
        let body: ValidateResponse = Self::decode(response).await?;
        Ok(body.valid)
    }

    /// Exchange credentials for a bearer token. On success the token is
    /// persisted into the store before returning.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .post("login")
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let body: LoginResponse = Self::decode(response).await?;
        self.tokens.set(&body.token);
        Ok(body.token)
    }

    /// Drop the stored session token.
    pub fn logout(&self) {
        self.tokens.clear();
    }

    /// Create an account; the backend echoes the created user as the first
    /// element of a `data` array.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let response = self
            .post("users")
            .json(&RegisterRequest {
                username,
                email,
                password,
            })
            .send()
            .await?;
        let body: RegisterResponse = Self::decode(response).await?;
        body.data.into_iter().next().ok_or(ApiError::EmptyData)
    }
}
