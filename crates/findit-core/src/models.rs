//! Domain Models
//!
//! Data structures matching the backend JSON payloads.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a listed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Lost,
    Found,
    Recovered,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [ItemStatus::Lost, ItemStatus::Found, ItemStatus::Recovered];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Lost => "lost",
            ItemStatus::Found => "found",
            ItemStatus::Recovered => "recovered",
        }
    }

    /// Parse a form value; empty or unknown values mean "no status"
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "lost" => Some(ItemStatus::Lost),
            "found" => Some(ItemStatus::Found),
            "recovered" => Some(ItemStatus::Recovered),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Lost => "Lost",
            ItemStatus::Found => "Found",
            ItemStatus::Recovered => "Recovered",
        }
    }
}

/// Item category; anything the backend sends that we don't know lands in `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Accessories,
    Bags,
    Documents,
    Jewelry,
    Clothing,
    #[serde(other)]
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Accessories,
        Category::Bags,
        Category::Documents,
        Category::Jewelry,
        Category::Clothing,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Accessories => "accessories",
            Category::Bags => "bags",
            Category::Documents => "documents",
            Category::Jewelry => "jewelry",
            Category::Clothing => "clothing",
            Category::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s.trim())
    }

    /// Fallback glyph when an item carries neither emoji nor upload
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Electronics => "📱",
            Category::Accessories => "👓",
            Category::Bags => "🎒",
            Category::Documents => "🆔",
            Category::Jewelry => "💍",
            Category::Clothing => "👕",
            Category::Other => "📦",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Accessories => "Accessories",
            Category::Bags => "Bags & Luggage",
            Category::Documents => "Documents",
            Category::Jewelry => "Jewelry",
            Category::Clothing => "Clothing",
            Category::Other => "Other",
        }
    }
}

/// What to show in an item's image slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemImage {
    /// Server-relative upload path, resolved against `/uploads/`
    Upload(String),
    Glyph(String),
}

/// Lost/found/recovered record (matches backend).
///
/// Hashes on every field so a list keyed by the whole record re-renders edited cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: ItemStatus,
    pub category: Category,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub reward: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub posted_by: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub views: Option<u32>,
    #[serde(default)]
    pub user_id: Option<u32>,
    #[serde(default)]
    pub date_reported: Option<String>,
}

impl Item {
    /// Combined `date` + `time`, used as the sort key.
    ///
    /// Falls back to `date_reported` when `date` doesn't parse.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_date_time(&self.date, self.time.as_deref()).or_else(|| {
            self.date_reported
                .as_deref()
                .and_then(parse_iso_timestamp)
        })
    }

    pub fn display_image(&self) -> ItemImage {
        if let Some(path) = non_empty(self.image_path.as_deref()) {
            return ItemImage::Upload(path.to_string());
        }
        match non_empty(self.image.as_deref()) {
            Some(glyph) => ItemImage::Glyph(glyph.to_string()),
            None => ItemImage::Glyph(self.category.glyph().to_string()),
        }
    }

    pub fn reward(&self) -> Option<&str> {
        non_empty(self.reward.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse `YYYY-MM-DD` plus an optional `HH:MM[:SS]`
pub fn parse_date_time(date: &str, time: Option<&str>) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let time = non_empty(time)
        .and_then(|t| {
            NaiveTime::parse_from_str(t, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
                .ok()
        })
        .unwrap_or_default();
    Some(date.and_time(time))
}

/// Parse an ISO-8601 timestamp, with or without offset
pub fn parse_iso_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").ok())
}

/// Notification entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub item_id: Option<u32>,
}

impl Notification {
    pub fn is_claim(&self) -> bool {
        self.kind == "claim"
    }

    /// Font Awesome icon class for the notification type
    pub fn icon(&self) -> &'static str {
        match self.kind.as_str() {
            "claim" => "fa-hand-paper",
            "message" => "fa-envelope",
            "system" => "fa-info-circle",
            _ => "fa-bell",
        }
    }
}

/// Per-user item counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total: u32,
    pub lost: u32,
    pub found: u32,
    pub recovered: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_json(extra: &str) -> String {
        format!(
            r#"{{"id":1,"title":"Silver Watch","description":"d","status":"lost","category":"accessories","location":"Park","date":"2024-03-01","time":"08:15"{}}}"#,
            extra
        )
    }

    #[test]
    fn test_unknown_category_becomes_other() {
        let json = r#"{"id":2,"title":"x","status":"found","category":"furniture"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, Category::Other);
        assert_eq!(item.location, "");
    }

    #[test]
    fn test_timestamp_combines_date_and_time() {
        let item: Item = serde_json::from_str(&item_json("")).unwrap();
        let ts = item.timestamp().unwrap();
        assert_eq!(ts.to_string(), "2024-03-01 08:15:00");
    }

    #[test]
    fn test_timestamp_falls_back_to_date_reported() {
        let mut item: Item = serde_json::from_str(&item_json("")).unwrap();
        item.date = "2 hours ago".into();
        assert!(item.timestamp().is_none());
        item.date_reported = Some("2024-05-02T10:00:00+00:00".into());
        assert_eq!(item.timestamp().unwrap().to_string(), "2024-05-02 10:00:00");
    }

    #[test]
    fn test_display_image_prefers_upload() {
        let item: Item = serde_json::from_str(&item_json(r#","image":"⌚","image_path":"a.png""#)).unwrap();
        assert_eq!(item.display_image(), ItemImage::Upload("a.png".into()));

        let item: Item = serde_json::from_str(&item_json(r#","image":"⌚","image_path":"""#)).unwrap();
        assert_eq!(item.display_image(), ItemImage::Glyph("⌚".into()));

        let item: Item = serde_json::from_str(&item_json("")).unwrap();
        assert_eq!(item.display_image(), ItemImage::Glyph("👓".into()));
    }

    #[test]
    fn test_reloaded_item_with_same_id_is_a_new_key() {
        use std::collections::HashSet;

        let before: Item = serde_json::from_str(&item_json("")).unwrap();
        let mut after = before.clone();
        after.status = ItemStatus::Recovered;
        let mut retitled = before.clone();
        retitled.title = "Gold Watch".into();

        let keys: HashSet<Item> = [before.clone(), after, retitled, before].into_iter().collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_notification_type_field() {
        let json = r#"{"id":5,"type":"claim","title":"t","message":"m","read":false,"created_at":"2024-01-01T00:00:00","item_id":3}"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert!(n.is_claim());
        assert_eq!(n.icon(), "fa-hand-paper");
        assert_eq!(n.item_id, Some(3));
    }

    #[test]
    fn test_status_and_category_parse() {
        assert_eq!(ItemStatus::parse(""), None);
        assert_eq!(ItemStatus::parse("found"), Some(ItemStatus::Found));
        assert_eq!(Category::parse("bags"), Some(Category::Bags));
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::Bags.label(), "Bags & Luggage");
    }
}
