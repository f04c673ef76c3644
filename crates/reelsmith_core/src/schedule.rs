//! Publishing slots and engagement follow-ups.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::Serialize;

/// A publishing slot with its reminder.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ScheduleItem {
    /// Normalized platform key.
    platform: String,
    /// When to publish.
    publish_at: NaiveDateTime,
    /// When to remind the publisher.
    reminder_at: NaiveDateTime,
    /// Free-text note.
    notes: String,
}

impl ScheduleItem {
    /// Create a schedule item.
    pub fn new(
        platform: impl Into<String>,
        publish_at: NaiveDateTime,
        reminder_at: NaiveDateTime,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            publish_at,
            reminder_at,
            notes: notes.into(),
        }
    }
}

/// Follow-up action after a post goes live.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct EngagementTask {
    /// Normalized platform key.
    platform: String,
    /// What to do.
    action: String,
    /// When to do it.
    scheduled_for: NaiveDateTime,
}

impl EngagementTask {
    /// Create an engagement task.
    pub fn new(
        platform: impl Into<String>,
        action: impl Into<String>,
        scheduled_for: NaiveDateTime,
    ) -> Self {
        Self {
            platform: platform.into(),
            action: action.into(),
            scheduled_for,
        }
    }
}
