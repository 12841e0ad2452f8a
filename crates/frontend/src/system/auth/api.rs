use contracts::system::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

use crate::shared::api::{post_json_public, ApiError};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    post_json_public("/api/auth/login", &request).await
}

/// Register a new admin account
pub async fn register(username: String, password: String) -> Result<RegisterResponse, ApiError> {
    let request = RegisterRequest { username, password };
    post_json_public("/api/auth/register", &request).await
}
