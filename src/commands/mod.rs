//! Backend API Wrappers
//!
//! One async function per REST call, organized by domain. Every call is a single
//! attempt: errors come back as `ApiError` and the caller decides what to show.

mod item;
mod report;
mod auth;
mod user;
mod notification;

use findit_core::api::{parse_ack, parse_envelope, MessagePayload};
use findit_core::ApiError;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::config;

// Re-export all public items
pub use item::*;
pub use report::*;
pub use auth::*;
pub use user::*;
pub use notification::*;

// ========================
// Request helpers
// ========================

async fn send<T: DeserializeOwned>(method: &str, url: String, request: RequestBuilder) -> Result<T, ApiError> {
    log::debug!("[Api] {} {}", method, url);
    let response = request.send().await.map_err(|e| {
        log::error!("[Api] {} {} failed: {}", method, url, e);
        ApiError::Network(e.to_string())
    })?;
    let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    parse_envelope(&body).map_err(|e| {
        log::warn!("[Api] {} {}: {}", method, url, e);
        e
    })
}

/// Only a transport failure is an error; whatever body comes back is the ack
async fn send_ack(method: &str, url: String, request: RequestBuilder) -> Result<MessagePayload, ApiError> {
    log::debug!("[Api] {} {}", method, url);
    let response = request.send().await.map_err(|e| {
        log::error!("[Api] {} {} failed: {}", method, url, e);
        ApiError::Network(e.to_string())
    })?;
    let body = response.text().await.unwrap_or_default();
    Ok(parse_ack(&body))
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = config().api_url(path);
    send("GET", url.clone(), Client::new().get(url)).await
}

async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = config().api_url(path);
    send("POST", url.clone(), Client::new().post(url).json(body)).await
}

async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = config().api_url(path);
    send("POST", url.clone(), Client::new().post(url)).await
}

async fn post_ack(path: &str) -> Result<MessagePayload, ApiError> {
    let url = config().api_url(path);
    send_ack("POST", url.clone(), Client::new().post(url)).await
}

async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = config().api_url(path);
    send("PUT", url.clone(), Client::new().put(url).json(body)).await
}

async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = config().api_url(path);
    send("DELETE", url.clone(), Client::new().delete(url)).await
}
