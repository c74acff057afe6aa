//! Item List Pipeline
//!
//! Filter -> sort -> paginate over an item collection that is already in memory.
//! `ListState` owns the collection and the derived views. Every filter change
//! recomputes the ordered subsequence and resets to page 1. "Load more" only
//! widens the displayed prefix.

use std::cmp::Ordering;

use crate::models::{Category, Item, ItemStatus};

/// Page size for the browse grid
pub const ITEMS_PER_PAGE: usize = 6;

/// Number of cards in the home page "recent items" strip
pub const RECENT_ITEMS: usize = 4;

/// Sort order selected in the sort dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Location,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Newest, SortKey::Oldest, SortKey::Location];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Location => "location",
        }
    }

    /// Unknown values fall back to `Newest`
    pub fn parse(s: &str) -> Self {
        match s {
            "oldest" => SortKey::Oldest,
            "location" => SortKey::Location,
            _ => SortKey::Newest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
            SortKey::Location => "By Location",
        }
    }
}

/// Current values of the filter controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub status: Option<ItemStatus>,
    pub category: Option<Category>,
    pub location_term: String,
    pub sort: SortKey,
}

impl FilterState {
    /// Conjunction of all active predicates; empty values always match
    pub fn matches(&self, item: &Item) -> bool {
        let search = self.search_term.trim().to_lowercase();
        let location = self.location_term.trim().to_lowercase();

        let matches_search = search.is_empty()
            || item.title.to_lowercase().contains(&search)
            || item.description.to_lowercase().contains(&search);
        let matches_status = self.status.map_or(true, |s| item.status == s);
        let matches_category = self.category.map_or(true, |c| item.category == c);
        let matches_location = location.is_empty() || item.location.to_lowercase().contains(&location);

        matches_search && matches_status && matches_category && matches_location
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }

    /// "Clear filters": every control emptied, sort back to newest
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }
}

/// Keep the items matching `filter`, preserving input order
pub fn filter_items(items: &[Item], filter: &FilterState) -> Vec<Item> {
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

/// Stable in-place sort.
///
/// Items without a parseable date sort as the oldest.
pub fn sort_items(items: &mut [Item], key: SortKey) {
    match key {
        SortKey::Newest => items.sort_by(|a, b| b.timestamp().cmp(&a.timestamp())),
        SortKey::Oldest => items.sort_by(|a, b| a.timestamp().cmp(&b.timestamp())),
        SortKey::Location => items.sort_by(|a, b| compare_locations(&a.location, &b.location)),
    }
}

/// Case-folded comparison first, raw text as the tiebreak
fn compare_locations(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// List pipeline state
#[derive(Debug, Clone)]
pub struct ListState {
    all: Vec<Item>,
    filter: FilterState,
    filtered: Vec<Item>,
    current_page: usize,
    page_size: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl ListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            all: Vec::new(),
            filter: FilterState::default(),
            filtered: Vec::new(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replace the whole collection (a fresh fetch) and rerun the pipeline
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.all = items;
        self.run();
    }

    /// New control values: recompute filter + sort, back to page 1
    pub fn apply_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.run();
    }

    /// Append the next page to the displayed prefix.
    ///
    /// Returns `false` when everything is already displayed.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.current_page += 1;
        log::debug!("[ItemList] page {} ({} of {})", self.current_page, self.displayed_count(), self.filtered.len());
        true
    }

    fn run(&mut self) {
        let mut filtered = filter_items(&self.all, &self.filter);
        sort_items(&mut filtered, self.filter.sort);
        self.filtered = filtered;
        self.current_page = 1;
        log::debug!("[ItemList] {} of {} items match", self.filtered.len(), self.all.len());
    }

    pub fn displayed(&self) -> &[Item] {
        &self.filtered[..self.displayed_count()]
    }

    pub fn displayed_count(&self) -> usize {
        (self.current_page * self.page_size).min(self.filtered.len())
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_count(&self) -> usize {
        self.all.len()
    }

    /// Load-more is offered exactly while part of the filtered set is hidden
    pub fn has_more(&self) -> bool {
        self.displayed_count() < self.filtered.len()
    }

    /// Nothing to show: render the "no results" placeholder
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn results_label(&self) -> String {
        format!("Showing {} of {} items", self.displayed_count(), self.filtered.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, title: &str, status: ItemStatus, location: &str, date: &str) -> Item {
        Item {
            id,
            title: title.to_string(),
            description: format!("Description of {}", title),
            status,
            category: Category::Other,
            location: location.to_string(),
            date: date.to_string(),
            time: None,
            reward: None,
            image: None,
            image_path: None,
            posted_by: "tester".to_string(),
            contact: "tester@example.com".to_string(),
            additional_info: None,
            views: None,
            user_id: None,
            date_reported: None,
        }
    }

    fn numbered(n: u32) -> Vec<Item> {
        (1..=n)
            .map(|i| make_item(i, &format!("Item {}", i), ItemStatus::Lost, "Park", &format!("2024-01-{:02}", i)))
            .collect()
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_search_matches_title_case_insensitive() {
        let items = vec![
            make_item(1, "Brown Leather Wallet", ItemStatus::Found, "Times Square Station", "2024-01-02"),
            make_item(2, "iPhone 13 Pro", ItemStatus::Lost, "Central Park, NYC", "2024-01-01"),
        ];
        let filter = FilterState { search_term: "wallet".into(), ..Default::default() };
        assert_eq!(ids(&filter_items(&items, &filter)), vec![1]);
    }

    #[test]
    fn test_search_matches_description() {
        let mut item = make_item(1, "Blue Backpack", ItemStatus::Found, "Village", "2024-01-01");
        item.description = "Contains TEXTBOOKS".into();
        let filter = FilterState { search_term: "  textbooks ".into(), ..Default::default() };
        assert!(filter.matches(&item));
    }

    #[test]
    fn test_all_predicates_are_conjunctive() {
        let mut items = vec![
            make_item(1, "Watch", ItemStatus::Lost, "Brooklyn Bridge", "2024-01-01"),
            make_item(2, "Watch", ItemStatus::Found, "Brooklyn Bridge", "2024-01-02"),
            make_item(3, "Watch", ItemStatus::Lost, "Queens", "2024-01-03"),
            make_item(4, "Phone", ItemStatus::Lost, "Brooklyn", "2024-01-04"),
        ];
        items[0].category = Category::Accessories;
        items[1].category = Category::Accessories;
        items[2].category = Category::Accessories;
        items[3].category = Category::Accessories;

        let filter = FilterState {
            search_term: "watch".into(),
            status: Some(ItemStatus::Lost),
            category: Some(Category::Accessories),
            location_term: "brooklyn".into(),
            sort: SortKey::Newest,
        };
        let result = filter_items(&items, &filter);
        assert_eq!(ids(&result), vec![1]);
        assert!(result.iter().all(|i| filter.matches(i)));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let items = numbered(5);
        assert!(FilterState::default().is_empty());
        assert_eq!(filter_items(&items, &FilterState::default()).len(), 5);
    }

    #[test]
    fn test_sort_newest_and_oldest_are_reverses() {
        let mut newest = vec![
            make_item(1, "a", ItemStatus::Lost, "x", "2024-02-10"),
            make_item(2, "b", ItemStatus::Lost, "x", "2024-03-01"),
            make_item(3, "c", ItemStatus::Lost, "x", "2023-12-31"),
        ];
        let mut oldest = newest.clone();
        sort_items(&mut newest, SortKey::Newest);
        sort_items(&mut oldest, SortKey::Oldest);

        assert_eq!(ids(&newest), vec![2, 1, 3]);
        let mut reversed = ids(&oldest);
        reversed.reverse();
        assert_eq!(ids(&newest), reversed);
    }

    #[test]
    fn test_sort_uses_time_within_a_day() {
        let mut items = vec![
            make_item(1, "a", ItemStatus::Lost, "x", "2024-02-10"),
            make_item(2, "b", ItemStatus::Lost, "x", "2024-02-10"),
        ];
        items[0].time = Some("09:00".into());
        items[1].time = Some("17:30".into());
        sort_items(&mut items, SortKey::Newest);
        assert_eq!(ids(&items), vec![2, 1]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut items = vec![
            make_item(1, "a", ItemStatus::Lost, "x", "2024-02-10"),
            make_item(2, "b", ItemStatus::Lost, "x", "2024-02-10"),
            make_item(3, "c", ItemStatus::Lost, "x", "2024-02-11"),
            make_item(4, "d", ItemStatus::Lost, "x", "2024-02-10"),
        ];
        sort_items(&mut items, SortKey::Newest);
        assert_eq!(ids(&items), vec![3, 1, 2, 4]);

        sort_items(&mut items, SortKey::Oldest);
        assert_eq!(ids(&items), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_unparseable_dates_sort_last_when_newest() {
        let mut items = vec![
            make_item(1, "a", ItemStatus::Lost, "x", "yesterday"),
            make_item(2, "b", ItemStatus::Lost, "x", "2024-02-10"),
        ];
        sort_items(&mut items, SortKey::Newest);
        assert_eq!(ids(&items), vec![2, 1]);
    }

    #[test]
    fn test_sort_by_location_ignores_case() {
        let mut items = vec![
            make_item(1, "a", ItemStatus::Lost, "times Square", "2024-01-01"),
            make_item(2, "b", ItemStatus::Lost, "Brooklyn Bridge", "2024-01-01"),
            make_item(3, "c", ItemStatus::Lost, "central Park", "2024-01-01"),
        ];
        sort_items(&mut items, SortKey::Location);
        assert_eq!(ids(&items), vec![2, 3, 1]);
    }

    #[test]
    fn test_eight_items_paginate_six_then_eight() {
        let mut state = ListState::default();
        state.set_items(numbered(8));

        assert_eq!(state.displayed().len(), 6);
        assert!(state.has_more());
        assert_eq!(state.results_label(), "Showing 6 of 8 items");

        assert!(state.load_more());
        assert_eq!(state.displayed().len(), 8);
        assert!(!state.has_more());
        assert!(!state.load_more());
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_displayed_len_follows_page_invariant() {
        let mut state = ListState::default();
        state.set_items(numbered(20));
        for k in 0..5usize {
            assert_eq!(state.displayed_count(), (ITEMS_PER_PAGE * (k + 1)).min(20));
            assert_eq!(state.has_more(), state.displayed_count() < 20);
            state.load_more();
        }
        assert_eq!(state.displayed_count(), 20);
    }

    #[test]
    fn test_displayed_is_prefix_of_filtered_order() {
        let mut state = ListState::default();
        state.set_items(numbered(10));
        let first_page = ids(state.displayed());
        state.load_more();
        let second = ids(state.displayed());
        assert_eq!(&second[..first_page.len()], first_page.as_slice());
        // newest first
        assert_eq!(second[0], 10);
    }

    #[test]
    fn test_filter_change_resets_to_first_page() {
        let mut state = ListState::default();
        state.set_items(numbered(15));
        state.load_more();
        assert_eq!(state.displayed_count(), 12);

        state.apply_filter(FilterState { sort: SortKey::Oldest, ..Default::default() });
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.displayed_count(), 6);
        assert_eq!(state.displayed()[0].id, 1);
        assert!(state.has_more());
    }

    #[test]
    fn test_clear_resets_every_control() {
        let mut filter = FilterState {
            search_term: "wallet".into(),
            status: Some(ItemStatus::Found),
            category: Some(Category::Bags),
            location_term: "park".into(),
            sort: SortKey::Location,
        };
        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter.sort, SortKey::Newest);
        assert!(filter.search_term.is_empty() && filter.location_term.is_empty());
    }

    #[test]
    fn test_clear_reruns_pipeline_from_first_page() {
        let mut state = ListState::default();
        state.set_items(numbered(9));
        state.apply_filter(FilterState { sort: SortKey::Oldest, search_term: "Item 1".into(), ..Default::default() });
        assert_eq!(state.filtered_count(), 1);

        let mut filter = state.filter().clone();
        filter.clear();
        state.apply_filter(filter);
        assert_eq!(state.filtered_count(), 9);
        assert_eq!(state.displayed_count(), 6);
        assert_eq!(state.displayed()[0].id, 9);
    }

    #[test]
    fn test_empty_result_hides_load_more() {
        let mut state = ListState::default();
        state.set_items(numbered(8));
        state.apply_filter(FilterState { search_term: "nothing like this".into(), ..Default::default() });

        assert!(state.is_empty());
        assert!(state.displayed().is_empty());
        assert!(!state.has_more());
        assert_eq!(state.results_label(), "Showing 0 of 0 items");
    }

    #[test]
    fn test_new_collection_keeps_filter() {
        let mut state = ListState::default();
        state.apply_filter(FilterState { status: Some(ItemStatus::Found), ..Default::default() });
        let mut items = numbered(3);
        items[1].status = ItemStatus::Found;
        state.set_items(items);
        assert_eq!(ids(state.displayed()), vec![2]);
        assert_eq!(state.total_count(), 3);
    }

    #[test]
    fn test_recent_strip_shows_newest_four() {
        let mut state = ListState::new(RECENT_ITEMS);
        state.set_items(numbered(7));
        assert_eq!(ids(state.displayed()), vec![7, 6, 5, 4]);
    }

    #[test]
    fn test_sort_key_parse_defaults_to_newest() {
        assert_eq!(SortKey::parse(""), SortKey::Newest);
        assert_eq!(SortKey::parse("location"), SortKey::Location);
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
    }
}
