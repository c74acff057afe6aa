//! API Envelope
//!
//! Every backend response is `{success, ...}`. `parse_envelope` checks the flag
//! and decodes the rest of the object into a typed payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::{Item, Notification, UserStats};
use crate::session::UserSession;

/// Shown when the request never got a response
pub const NETWORK_ERROR: &str = "Network error. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failed (fetch rejected)
    #[error("network error: {0}")]
    Network(String),
    /// `success: false`, with the server's `error` text if it sent one
    #[error("request failed: {}", .0.as_deref().unwrap_or("no message"))]
    Application(Option<String>),
    /// Response body wasn't the shape we expected
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Toast text: server message verbatim when present, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Network(_) => NETWORK_ERROR.to_string(),
            ApiError::Application(Some(msg)) if !msg.trim().is_empty() => msg.clone(),
            ApiError::Application(_) | ApiError::Decode(_) => fallback.to_string(),
        }
    }
}

/// Check `success` and decode the payload fields
pub fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let success = value.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !success {
        let message = value.get("error").and_then(Value::as_str).map(str::to_string);
        return Err(ApiError::Application(message));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Body of a fire-and-forget ack.
///
/// Any completed response counts as the ack. The message is kept when the body
/// happens to be a `{success: true, message}` envelope.
pub fn parse_ack(body: &str) -> MessagePayload {
    match parse_envelope::<MessagePayload>(body) {
        Ok(payload) => payload,
        Err(e) => {
            log::debug!("[Api] ack body ignored: {}", e);
            MessagePayload::default()
        }
    }
}

// ========================
// Payloads
// ========================

#[derive(Debug, Clone, Deserialize)]
pub struct ItemsPayload {
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemPayload {
    pub item: Item,
}

/// Ack for mutating calls
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    pub user: UserSession,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsPayload {
    pub stats: UserStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsPayload {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

// ========================
// Request bodies
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClaimRequest<'a> {
    pub description: &'a str,
    pub email: &'a str,
    pub name: &'a str,
    pub phone: &'a str,
}

impl<'a> ClaimRequest<'a> {
    /// Claimant identity comes from the session when there is one
    pub fn new(description: &'a str, email: &'a str, user: Option<&'a UserSession>) -> Self {
        Self {
            description,
            email,
            name: user.map_or("Anonymous", |u| u.name.as_str()),
            phone: user.and_then(|u| u.phone.as_deref()).unwrap_or(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_payload_decodes() {
        let body = r#"{"success":true,"count":1,"items":[{"id":1,"title":"Wallet","status":"found","category":"bags"}]}"#;
        let payload: ItemsPayload = parse_envelope(body).unwrap();
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.items[0].title, "Wallet");
    }

    #[test]
    fn test_failure_carries_server_error() {
        let body = r#"{"success":false,"error":"Invalid email or password"}"#;
        let err = parse_envelope::<LoginPayload>(body).unwrap_err();
        assert_eq!(err, ApiError::Application(Some("Invalid email or password".into())));
        assert_eq!(err.user_message("Login failed"), "Invalid email or password");
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let err = parse_envelope::<MessagePayload>(r#"{"success":false}"#).unwrap_err();
        assert_eq!(err.user_message("Failed to delete item"), "Failed to delete item");

        let err = parse_envelope::<MessagePayload>(r#"{"success":false,"error":"  "}"#).unwrap_err();
        assert_eq!(err.user_message("Failed"), "Failed");
    }

    #[test]
    fn test_missing_success_flag_is_failure() {
        let err = parse_envelope::<MessagePayload>(r#"{"message":"ok"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Application(None)));
    }

    #[test]
    fn test_bad_body_is_decode_error() {
        let err = parse_envelope::<MessagePayload>("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        let err = parse_envelope::<StatsPayload>(r#"{"success":true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_any_completed_response_is_an_ack() {
        for body in ["", "{}", r#"{"ok":true}"#, r#"{"success":false}"#, "OK"] {
            assert_eq!(parse_ack(body).message, None, "body {:?}", body);
        }
        let ack = parse_ack(r#"{"success":true,"message":"Marked as read"}"#);
        assert_eq!(ack.message.as_deref(), Some("Marked as read"));
    }

    #[test]
    fn test_network_error_message() {
        let err = ApiError::Network("fetch failed".into());
        assert_eq!(err.user_message("ignored"), NETWORK_ERROR);
    }

    #[test]
    fn test_claim_identity_defaults() {
        let anon = ClaimRequest::new("mine", "me@x.com", None);
        assert_eq!(anon.name, "Anonymous");
        assert_eq!(anon.phone, "");

        let user = UserSession { name: "Jane".into(), phone: Some("555".into()), ..Default::default() };
        let claim = ClaimRequest::new("mine", "me@x.com", Some(&user));
        assert_eq!(claim.name, "Jane");
        assert_eq!(claim.phone, "555");
    }

    #[test]
    fn test_notifications_payload() {
        let body = r#"{"success":true,"notifications":[{"id":5,"type":"claim","title":"New Claim Received","message":"m","read":false,"created_at":"2024-01-01T00:00:00","item_id":null}]}"#;
        let payload: NotificationsPayload = parse_envelope(body).unwrap();
        assert_eq!(payload.notifications[0].id, 5);
    }
}
