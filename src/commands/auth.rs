//! Auth Calls

use findit_core::api::{LoginPayload, LoginRequest, MessagePayload, RegisterRequest};
use findit_core::{ApiError, UserSession};

use super::post;

pub async fn login(email: &str, password: &str) -> Result<UserSession, ApiError> {
    let payload: LoginPayload = post("login", &LoginRequest { email, password }).await?;
    Ok(payload.user)
}

pub async fn register(request: &RegisterRequest<'_>) -> Result<MessagePayload, ApiError> {
    post("register", request).await
}
