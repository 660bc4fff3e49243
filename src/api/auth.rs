//! Authentication endpoints.

use super::{ApiClient, ApiError, AuthResponse, Gender, LoginRequest, RegisterRequest, User};

impl ApiClient {
    /// Exchange credentials for a bearer token
    pub fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send("POST", "/api/auth/login-json", &body)
    }

    /// Create an account (does not log in)
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        gender: Gender,
    ) -> Result<User, ApiError> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            gender,
        };
        self.send("POST", "/api/auth/register", &body)
    }

    /// User behind the current token
    pub fn current_user(&self) -> Result<User, ApiError> {
        self.require_token()?;
        self.get("/api/auth/me")
    }
}
