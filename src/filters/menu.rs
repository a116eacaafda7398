//! Filter bar state: which panel is open and the draft/active filter copies
//!
//! The draft is global across categories. Switching categories only changes
//! which panel renders; confirm and cancel are the only operations that move
//! values between the draft and the active copy.

use tracing::{debug, info};

use super::state::FilterState;

/// Filter categories with an editing panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    Tags,
    Calendar,
    People,
    Location,
}

impl FilterCategory {
    pub fn label(self) -> &'static str {
        match self {
            FilterCategory::Tags => "Tags",
            FilterCategory::Calendar => "Time & Date",
            FilterCategory::People => "People",
            FilterCategory::Location => "Location",
        }
    }
}

/// Icons in the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterIcon {
    Category(FilterCategory),
    Search,
}

impl FilterIcon {
    pub const ALL: [FilterIcon; 5] = [
        FilterIcon::Category(FilterCategory::Tags),
        FilterIcon::Category(FilterCategory::Calendar),
        FilterIcon::Category(FilterCategory::People),
        FilterIcon::Category(FilterCategory::Location),
        FilterIcon::Search,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterIcon::Category(category) => category.label(),
            FilterIcon::Search => "Search",
        }
    }
}

/// What the filter bar currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuPanel {
    #[default]
    Idle,
    Category(FilterCategory),
    Search,
}

#[derive(Debug, Default)]
pub struct FilterStore {
    active: FilterState,
    draft: FilterState,
    panel: MenuPanel,
    query: String,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last confirmed filters
    pub fn active(&self) -> &FilterState {
        &self.active
    }

    pub fn draft(&self) -> &FilterState {
        &self.draft
    }

    /// Mutable access to the draft for panel editors
    pub fn draft_mut(&mut self) -> &mut FilterState {
        &mut self.draft
    }

    pub fn panel(&self) -> MenuPanel {
        self.panel
    }

    pub fn is_search_expanded(&self) -> bool {
        self.panel == MenuPanel::Search
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the transient search text. Not part of the filter state.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Handle a tap on a filter bar icon.
    ///
    /// Search expands the search field and closes any category panel. A
    /// category collapses search first, then opens its panel, or closes it if
    /// it is already the open one. The draft is untouched either way.
    pub fn select_icon(&mut self, icon: FilterIcon) {
        let previous = self.panel;
        self.panel = match (icon, self.panel) {
            (FilterIcon::Search, _) => MenuPanel::Search,
            (FilterIcon::Category(category), MenuPanel::Category(open)) if open == category => MenuPanel::Idle,
            (FilterIcon::Category(category), _) => MenuPanel::Category(category),
        };
        debug!(?icon, from = ?previous, to = ?self.panel, "Filter panel changed");
    }

    /// Collapse the search field. No-op unless search is expanded.
    pub fn collapse_search(&mut self) {
        if self.panel == MenuPanel::Search {
            self.panel = MenuPanel::Idle;
            debug!("Search collapsed");
        }
    }

    /// Commit the draft and close the panel
    pub fn confirm(&mut self) {
        self.active = self.draft.clone();
        self.panel = MenuPanel::Idle;
        info!(
            tags = ?self.active.tags,
            people = self.active.people,
            locations = ?self.active.locations,
            active = self.active.active_count(),
            "Filters confirmed"
        );
    }

    /// Discard draft edits and close the panel
    pub fn cancel(&mut self) {
        self.draft = self.active.clone();
        self.panel = MenuPanel::Idle;
        info!("Filter edits discarded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::state::Endpoint;

    const TAGS: FilterIcon = FilterIcon::Category(FilterCategory::Tags);
    const PEOPLE: FilterIcon = FilterIcon::Category(FilterCategory::People);
    const LOCATION: FilterIcon = FilterIcon::Category(FilterCategory::Location);

    #[test]
    fn test_initial_state_is_idle() {
        let store = FilterStore::new();
        assert_eq!(store.panel(), MenuPanel::Idle);
        assert_eq!(store.active(), &FilterState::default());
        assert_eq!(store.draft(), &FilterState::default());
    }

    #[test]
    fn test_switching_categories_preserves_draft_then_confirm() {
        let mut store = FilterStore::new();
        store.select_icon(TAGS);
        store.draft_mut().toggle_tag("Dinner");
        store.select_icon(PEOPLE);
        assert_eq!(store.panel(), MenuPanel::Category(FilterCategory::People));
        store.draft_mut().set_people(4);
        store.select_icon(TAGS);
        assert_eq!(store.draft().tags, vec!["Dinner"]);

        store.confirm();
        let expected = FilterState {
            tags: vec!["Dinner".to_string()],
            people: 4,
            ..FilterState::default()
        };
        assert_eq!(store.active(), &expected);
        assert_eq!(store.panel(), MenuPanel::Idle);
    }

    #[test]
    fn test_cancel_restores_last_confirmed() {
        let mut store = FilterStore::new();
        store.select_icon(TAGS);
        store.draft_mut().toggle_tag("Sports");
        store.confirm();
        let confirmed = store.active().clone();

        store.select_icon(TAGS);
        store.draft_mut().toggle_tag("Walk");
        store.select_icon(PEOPLE);
        store.draft_mut().set_people(9);
        store.select_icon(LOCATION);
        store.draft_mut().toggle_location("Changshu");
        store.select_icon(FilterIcon::Category(FilterCategory::Calendar));
        store.draft_mut().date.set(Endpoint::Start, chrono::NaiveDate::from_ymd_opt(2024, 5, 25).unwrap());

        store.cancel();
        assert_eq!(store.draft(), &confirmed);
        assert_eq!(store.active(), &confirmed);
        assert_eq!(store.panel(), MenuPanel::Idle);
    }

    #[test]
    fn test_draft_edits_do_not_touch_active() {
        let mut store = FilterStore::new();
        store.select_icon(PEOPLE);
        store.draft_mut().set_people(7);
        assert_eq!(store.active().people, 2);
        assert_eq!(store.draft().people, 7);
    }

    #[test]
    fn test_tapping_open_category_closes_without_commit() {
        let mut store = FilterStore::new();
        store.select_icon(TAGS);
        store.draft_mut().toggle_tag("Cinema");
        store.select_icon(TAGS);
        assert_eq!(store.panel(), MenuPanel::Idle);
        assert!(store.active().tags.is_empty());
        assert_eq!(store.draft().tags, vec!["Cinema"]);
    }

    #[test]
    fn test_search_and_category_are_exclusive() {
        let mut store = FilterStore::new();
        store.select_icon(LOCATION);
        store.select_icon(FilterIcon::Search);
        assert!(store.is_search_expanded());

        store.select_icon(TAGS);
        assert_eq!(store.panel(), MenuPanel::Category(FilterCategory::Tags));
        assert!(!store.is_search_expanded());
    }

    #[test]
    fn test_collapse_search_only_affects_search() {
        let mut store = FilterStore::new();
        store.select_icon(PEOPLE);
        store.collapse_search();
        assert_eq!(store.panel(), MenuPanel::Category(FilterCategory::People));

        store.select_icon(FilterIcon::Search);
        store.set_query("movie");
        store.collapse_search();
        assert_eq!(store.panel(), MenuPanel::Idle);
        assert_eq!(store.query(), "movie");
        assert_eq!(store.active(), &FilterState::default());
    }
}
