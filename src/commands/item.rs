//! Item Calls

use findit_core::api::{ClaimRequest, ItemPayload, ItemsPayload, MessagePayload};
use findit_core::{ApiError, Item};

use super::{delete, get, post, post_empty};

pub async fn list_items() -> Result<Vec<Item>, ApiError> {
    let payload: ItemsPayload = get("items").await?;
    log::info!("[Api] loaded {} items", payload.items.len());
    Ok(payload.items)
}

/// Items reported by one user
pub async fn list_user_items(user_id: u32) -> Result<Vec<Item>, ApiError> {
    let payload: ItemsPayload = get(&format!("items?user_id={}", user_id)).await?;
    Ok(payload.items)
}

pub async fn get_item(id: u32) -> Result<Item, ApiError> {
    let payload: ItemPayload = get(&format!("items/{}", id)).await?;
    Ok(payload.item)
}

pub async fn claim_item(id: u32, claim: &ClaimRequest<'_>) -> Result<MessagePayload, ApiError> {
    post(&format!("items/{}/claim", id), claim).await
}

pub async fn delete_item(id: u32) -> Result<MessagePayload, ApiError> {
    delete(&format!("items/{}", id)).await
}

pub async fn recover_item(id: u32) -> Result<MessagePayload, ApiError> {
    post_empty(&format!("items/{}/recover", id)).await
}
