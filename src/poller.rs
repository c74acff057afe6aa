//! Notification Poller
//!
//! Polls once when a session starts and then every 30 s, diffing each batch
//! against the persisted watermark.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use findit_core::notify::{batch_is_current, Watermark, POLL_INTERVAL_SECS};
use findit_core::Toast;

use crate::commands;
use crate::context::AppContext;
use crate::storage::session_store;
use crate::store::{AppStore, AppStateStoreFields};

/// Start polling whenever a (different) user logs in; stop on logout
pub fn start_notification_poller(store: AppStore, ctx: AppContext) {
    let interval = StoredValue::new_local(None::<Interval>);
    let user_id = Memo::new(move |_| store.user().with(|u| u.as_ref().map(|u| u.id)));

    Effect::new(move |_| {
        // Drop the previous interval first
        interval.set_value(None);
        let Some(user_id) = user_id.get() else {
            return;
        };

        log::info!("[Poller] polling notifications for user {}", user_id);
        poll_once(user_id, store, ctx);
        let handle = Interval::new(POLL_INTERVAL_SECS as u32 * 1_000, move || {
            poll_once(user_id, store, ctx)
        });
        interval.set_value(Some(handle));
    });
}

fn poll_once(user_id: u32, store: AppStore, ctx: AppContext) {
    spawn_local(async move {
        let batch = match commands::list_notifications(user_id).await {
            Ok(batch) => batch,
            Err(e) => {
                log::warn!("[Poller] poll failed: {}", e);
                return;
            }
        };

        let signed_in = store.user().with_untracked(|u| u.as_ref().map(|u| u.id));
        if !batch_is_current(user_id, signed_in) {
            log::debug!("[Poller] dropping batch for user {}, session changed", user_id);
            return;
        }

        let session = session_store();
        let previous = session.last_seen_notification();
        let mut watermark = Watermark(previous);
        let Some(outcome) = watermark.observe(&batch) else {
            return;
        };

        store.unread().set(outcome.unread);
        store.notifications().set(batch);
        if let Some(newest) = &outcome.toast {
            ctx.toast(Toast::info(newest.message.clone()));
        }
        if outcome.advanced(previous) {
            if let Err(e) = session.set_last_seen_notification(outcome.watermark) {
                log::warn!("[Poller] watermark not saved: {}", e);
            }
        }
    });
}
