//! Timeline entries

use serde::{Deserialize, Serialize};

use crate::core::types::EventId;
use crate::model::opinion::OpinionShift;

/// Where an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    News,
    Sns,
    Friend,
    Action,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Good,
    Bad,
    Neutral,
}

/// Badge values shown next to an entry. Absent fields did not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cons: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lib: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<i64>,
}

impl Delta {
    /// Delta mirroring an opinion shift. Zero axes are left out.
    pub fn from_shift(shift: OpinionShift) -> Self {
        let present = |v: f64| if v != 0.0 { Some(v) } else { None };
        Self {
            cons: present(shift.conservative),
            lib: present(shift.liberal),
            apa: present(shift.apathetic),
            followers: None,
        }
    }

    pub fn followers(delta: i64) -> Self {
        Self {
            followers: Some(delta),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cons.is_none() && self.lib.is_none() && self.apa.is_none() && self.followers.is_none()
    }
}

/// One immutable log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: EventId,
    pub date: String,
    pub category: Category,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub impact: Impact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<Delta>,
}

impl TimelineEvent {
    pub fn new(date: impl Into<String>, category: Category, title: impl Into<String>, impact: Impact) -> Self {
        Self {
            id: EventId::new(),
            date: date.into(),
            category,
            title: title.into(),
            description: None,
            impact,
            delta: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_delta(mut self, delta: Delta) -> Self {
        self.delta = Some(delta);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_from_shift_skips_zero_axes() {
        let delta = Delta::from_shift(OpinionShift::new(0.0, 1.0, -2.0));
        assert_eq!(delta.cons, None);
        assert_eq!(delta.lib, Some(1.0));
        assert_eq!(delta.apa, Some(-2.0));
        assert!(!delta.is_empty());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Sns).unwrap();
        assert_eq!(json, "\"sns\"");
    }

    #[test]
    fn test_event_omits_empty_optionals() {
        let ev = TimelineEvent::new("Y1 M1 D1", Category::System, "Hello", Impact::Neutral);
        let json = serde_json::to_value(&ev).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("delta").is_none());
    }
}
