//! Unified timeline model
//!
//! The reconciliation engine collapses both source vocabularies (schedule
//! items and calendar events) onto these closed enums. Wire serialization is
//! camelCase to match the presentation contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{CALENDAR_ID_PREFIX, SCHEDULE_ID_PREFIX};

/// What a timeline item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Lesson,
    Quiz,
    Deadline,
    Reminder,
    Milestone,
    Course,
}

/// Temporal status of a timeline item.
///
/// `Completed` and `Skipped` are terminal and externally sourced; `Overdue`
/// and the live states are derived from wall-clock time at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemStatus {
    Upcoming,
    InProgress,
    Completed,
    Overdue,
    Skipped,
}

impl ItemStatus {
    /// Terminal statuses come from the source of truth and must never be
    /// rewritten by the status finalization pass.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Skipped)
    }
}

/// Schedule-item priority; only schedule-sourced items carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Which source produced an item; retained for traceability and for
/// deterministic sort tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSource {
    Schedule,
    Calendar,
}

impl ItemSource {
    /// Prefix applied to the source-native id so the two id spaces stay
    /// disjoint after merging.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Schedule => SCHEDULE_ID_PREFIX,
            Self::Calendar => CALENDAR_ID_PREFIX,
        }
    }

    /// Build the globally unique timeline id for a native id.
    pub fn tag_id(self, native_id: &str) -> String {
        format!("{}{}", self.id_prefix(), native_id)
    }
}

/// Course a timeline item belongs to.
///
/// Absent only for platform-wide items (e.g. general announcements).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    pub course_id: String,
    pub title: String,
}

/// Where the presentation layer should route when an item is activated.
///
/// Never drives engine logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "camelCase")]
pub enum NavigationTarget {
    Lesson { lesson_id: String },
    Quiz { quiz_id: String },
    Course { course_slug: String },
}

/// One entry on the unified learner timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: ItemKind,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub status: ItemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    pub source: ItemSource,
}

impl TimelineItem {
    /// Instant at which the item's time window has fully elapsed.
    pub fn window_end(&self) -> DateTime<Utc> {
        self.scheduled_at + chrono::Duration::minutes(i64::from(self.duration_minutes))
    }
}

/// Output of one reconciliation run.
///
/// Rebuilt from scratch on every query; there is no persistent identity
/// across requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciledTimeline {
    pub items: Vec<TimelineItem>,
    /// True when the calendar source failed and the result is schedule-only.
    pub partial: bool,
    /// Count of malformed source items dropped during normalization.
    pub dropped: u32,
}
