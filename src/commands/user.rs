//! User Calls

use findit_core::api::{MessagePayload, StatsPayload};
use findit_core::session::ProfileUpdate;
use findit_core::{ApiError, UserStats};

use super::{get, put};

pub async fn update_profile(user_id: u32, update: &ProfileUpdate) -> Result<MessagePayload, ApiError> {
    put(&format!("users/{}", user_id), update).await
}

pub async fn user_stats(user_id: u32) -> Result<UserStats, ApiError> {
    let payload: StatsPayload = get(&format!("users/{}/stats", user_id)).await?;
    Ok(payload.stats)
}
