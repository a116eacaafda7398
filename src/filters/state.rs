use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::constants::filters::{DEFAULT_PEOPLE, MAX_PEOPLE, MIN_PEOPLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionKind {
    #[default]
    Specific,
    Range,
}

/// Which endpoint of a selection a picker edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

/// A single value or a range; either endpoint may be unset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSelection<T> {
    pub kind: SelectionKind,
    pub start: Option<T>,
    pub end: Option<T>,
}

impl<T> Default for TimeSelection<T> {
    fn default() -> Self {
        Self { kind: SelectionKind::Specific, start: None, end: None }
    }
}

impl<T> TimeSelection<T> {
    /// Switching to `Specific` keeps the start and drops the end
    pub fn set_kind(&mut self, kind: SelectionKind) {
        self.kind = kind;
        if kind == SelectionKind::Specific {
            self.end = None;
        }
    }

    /// Setting `End` on a specific selection is ignored
    pub fn set(&mut self, endpoint: Endpoint, value: T) {
        match endpoint {
            Endpoint::Start => self.start = Some(value),
            Endpoint::End if self.kind == SelectionKind::Range => self.end = Some(value),
            Endpoint::End => {}
        }
    }
}

/// Complete filter selection. Active and draft copies are separate values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub tags: Vec<String>,
    pub date: TimeSelection<NaiveDate>,
    pub time: TimeSelection<NaiveTime>,
    pub people: u8,
    pub locations: Vec<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            date: TimeSelection::default(),
            time: TimeSelection::default(),
            people: DEFAULT_PEOPLE,
            locations: Vec::new(),
        }
    }
}

impl FilterState {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.tags, tag);
    }

    pub fn has_location(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l == location)
    }

    pub fn toggle_location(&mut self, location: &str) {
        toggle(&mut self.locations, location);
    }

    /// Clamped to the selectable range
    pub fn set_people(&mut self, people: u8) {
        self.people = people.clamp(MIN_PEOPLE, MAX_PEOPLE);
    }

    /// Number of filters that differ from the defaults, for badge display
    pub fn active_count(&self) -> usize {
        let defaults = FilterState::default();
        [
            !self.tags.is_empty(),
            self.date != defaults.date,
            self.time != defaults.time,
            self.people != defaults.people,
            !self.locations.is_empty(),
        ]
        .into_iter()
        .filter(|&changed| changed)
        .count()
    }
}

fn toggle(items: &mut Vec<String>, item: &str) {
    if let Some(pos) = items.iter().position(|existing| existing == item) {
        items.remove(pos);
    } else {
        items.push(item.to_string());
    }
}
