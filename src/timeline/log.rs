//! Append-only, newest-first timeline

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::timeline::event::{Category, TimelineEvent};

/// Category selector for display. Persisted with the game so it survives
/// a reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    News,
    Sns,
    Friend,
    Action,
    System,
}

impl Filter {
    pub fn category(&self) -> Option<Category> {
        match self {
            Filter::All => None,
            Filter::News => Some(Category::News),
            Filter::Sns => Some(Category::Sns),
            Filter::Friend => Some(Category::Friend),
            Filter::Action => Some(Category::Action),
            Filter::System => Some(Category::System),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        self.category().map_or(true, |c| c == category)
    }
}

/// The player-visible audit trail. The front is the newest entry, and the
/// serialized form keeps that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    events: VecDeque<TimelineEvent>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry
    pub fn push(&mut self, event: TimelineEvent) {
        self.events.push_front(event);
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &TimelineEvent> {
        self.events.iter()
    }

    pub fn newest(&self) -> Option<&TimelineEvent> {
        self.events.front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Entries matching `filter`, newest first
    pub fn filtered(&self, filter: Filter) -> impl Iterator<Item = &TimelineEvent> {
        self.events.iter().filter(move |e| filter.matches(e.category))
    }

    /// The `n` most recent entries, newest first
    pub fn latest(&self, n: usize) -> impl Iterator<Item = &TimelineEvent> {
        self.events.iter().take(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::event::Impact;

    fn entry(category: Category, title: &str) -> TimelineEvent {
        TimelineEvent::new("Y1 M1 D1", category, title, Impact::Neutral)
    }

    #[test]
    fn test_push_is_newest_first() {
        let mut log = Timeline::new();
        log.push(entry(Category::System, "first"));
        log.push(entry(Category::News, "second"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.newest().unwrap().title, "second");
        let titles: Vec<_> = log.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["second", "first"]);
    }

    #[test]
    fn test_filtered() {
        let mut log = Timeline::new();
        log.push(entry(Category::System, "a"));
        log.push(entry(Category::News, "b"));
        log.push(entry(Category::News, "c"));

        assert_eq!(log.filtered(Filter::All).count(), 3);
        let news: Vec<_> = log.filtered(Filter::News).map(|e| e.title.as_str()).collect();
        assert_eq!(news, ["c", "b"]);
        assert_eq!(log.filtered(Filter::Sns).count(), 0);
    }

    #[test]
    fn test_long_log_keeps_newest_first_when_serialized() {
        let mut log = Timeline::new();
        for i in 0..500 {
            log.push(entry(Category::System, &i.to_string()));
        }

        let latest: Vec<_> = log.latest(3).map(|e| e.title.as_str()).collect();
        assert_eq!(latest, ["499", "498", "497"]);

        let json = serde_json::to_value(&log).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 500);
        assert_eq!(array[0]["title"], "499");
        assert_eq!(array[499]["title"], "0");

        let back: Timeline = serde_json::from_value(json).unwrap();
        assert_eq!(back, log);
    }

    #[test]
    fn test_latest_caps_at_len() {
        let mut log = Timeline::new();
        log.push(entry(Category::System, "only"));
        assert_eq!(log.latest(5).count(), 1);
    }
}
