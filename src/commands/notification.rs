//! Notification Calls

use findit_core::api::{MessagePayload, NotificationsPayload};
use findit_core::{ApiError, Notification};

use super::{get, post_ack};

pub async fn list_notifications(user_id: u32) -> Result<Vec<Notification>, ApiError> {
    let payload: NotificationsPayload = get(&format!("notifications?user_id={}", user_id)).await?;
    Ok(payload.notifications)
}

/// Any completed response marks it read; only transport errors fail
pub async fn mark_notification_read(id: u64) -> Result<MessagePayload, ApiError> {
    post_ack(&format!("notifications/{}/read", id)).await
}
