//! Calendar source native types
//!
//! Platform calendar events before normalization. `event_type` is a free
//! string for the same reason as the schedule vocabulary fields; unknown
//! values fall back to the documented default during normalization.

use serde::{Deserialize, Serialize};

/// Course reference embedded in a calendar event. Title/slug may be absent;
/// the service resolves them through the course catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCourse {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// A platform-wide or course-wide temporal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub event_type: String,
    /// RFC 3339 instants; events with unparsable dates are dropped during
    /// normalization.
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(default)]
    pub course: Option<EventCourse>,
}
