//! Notification Watermark
//!
//! Diffs each polled batch against the highest id already surfaced.

use crate::models::Notification;

/// Seconds between notification polls
pub const POLL_INTERVAL_SECS: u64 = 30;

/// Badge shows "9+" above this
pub const BADGE_CAP: usize = 9;

/// Result of looking at one polled batch
#[derive(Debug, Clone, PartialEq)]
pub struct PollOutcome {
    /// Count of `read = false` in the batch
    pub unread: usize,
    /// Most recent notification above the old watermark, if any
    pub toast: Option<Notification>,
    /// Watermark to persist
    pub watermark: u64,
}

impl PollOutcome {
    pub fn advanced(&self, previous: u64) -> bool {
        self.watermark > previous
    }
}

/// Highest notification id the user has already been shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Watermark(pub u64);

impl Watermark {
    /// Fold a polled batch into the watermark.
    ///
    /// Returns `None` for an empty batch: badge and watermark stay as they are.
    pub fn observe(&mut self, batch: &[Notification]) -> Option<PollOutcome> {
        let newest = batch.iter().max_by_key(|n| n.id)?;
        let unread = batch.iter().filter(|n| !n.read).count();

        let toast = if newest.id > self.0 {
            log::info!("[Poller] watermark {} -> {}", self.0, newest.id);
            self.0 = newest.id;
            Some(newest.clone())
        } else {
            None
        };

        Some(PollOutcome { unread, toast, watermark: self.0 })
    }
}

/// A batch fetched for `polled_for` only applies while that user is still signed in
pub fn batch_is_current(polled_for: u32, signed_in: Option<u32>) -> bool {
    signed_in == Some(polled_for)
}

/// Badge text, or `None` when the badge should be hidden
pub fn badge_text(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{}+", BADGE_CAP)),
        n => Some(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notif(id: u64, read: bool) -> Notification {
        Notification {
            id,
            kind: "claim".into(),
            title: format!("Notification {}", id),
            message: format!("Message {}", id),
            read,
            created_at: "2024-01-01T00:00:00".into(),
            item_id: None,
        }
    }

    #[test]
    fn test_new_notification_toasts_newest_only() {
        let mut mark = Watermark(3);
        let outcome = mark.observe(&[notif(5, false), notif(3, true)]).unwrap();

        assert_eq!(outcome.toast.map(|n| n.id), Some(5));
        assert_eq!(outcome.unread, 1);
        assert_eq!(badge_text(outcome.unread).as_deref(), Some("1"));
        assert_eq!(outcome.watermark, 5);
        assert_eq!(mark, Watermark(5));
    }

    #[test]
    fn test_skipped_ids_only_count_toward_badge() {
        let mut mark = Watermark(1);
        let outcome = mark.observe(&[notif(4, false), notif(3, false), notif(2, false)]).unwrap();
        assert_eq!(outcome.toast.map(|n| n.id), Some(4));
        assert_eq!(outcome.unread, 3);
    }

    #[test]
    fn test_newest_is_max_id_regardless_of_order() {
        let mut mark = Watermark(0);
        let outcome = mark.observe(&[notif(2, true), notif(9, true), notif(4, false)]).unwrap();
        assert_eq!(outcome.toast.map(|n| n.id), Some(9));
        assert_eq!(outcome.watermark, 9);
    }

    #[test]
    fn test_repeat_poll_is_quiet() {
        let mut mark = Watermark(5);
        let outcome = mark.observe(&[notif(5, false)]).unwrap();
        assert!(outcome.toast.is_none());
        assert!(!outcome.advanced(5));
        assert_eq!(outcome.unread, 1);
    }

    #[test]
    fn test_empty_batch_changes_nothing() {
        let mut mark = Watermark(2);
        assert!(mark.observe(&[]).is_none());
        assert_eq!(mark, Watermark(2));
    }

    #[test]
    fn test_late_batch_for_previous_user_is_dropped() {
        assert!(batch_is_current(7, Some(7)));
        assert!(!batch_is_current(7, None));
        assert!(!batch_is_current(7, Some(8)));
    }

    #[test]
    fn test_badge_text_caps() {
        assert_eq!(badge_text(0), None);
        assert_eq!(badge_text(9).as_deref(), Some("9"));
        assert_eq!(badge_text(10).as_deref(), Some("9+"));
    }
}
