//! Schedule source native types
//!
//! Shapes as delivered by the course-progress service, before normalization.
//! Vocabulary fields (`item_type`, `status`, `priority`) stay as free strings
//! because the source vocabulary evolves independently of this engine; the
//! normalizer owns the mapping onto the closed enums.

use serde::{Deserialize, Serialize};

/// One per-enrollment unit of work as reported by the course-progress
/// service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// RFC 3339 instant; parsed during normalization, items with unparsable
    /// dates are dropped.
    pub scheduled_date: String,
    #[serde(default)]
    pub duration_minutes: u32,
    #[serde(default)]
    pub priority: Option<String>,
    pub status: String,
    #[serde(default)]
    pub lesson_id: Option<String>,
    #[serde(default)]
    pub quiz_id: Option<String>,
    #[serde(default)]
    pub module_id: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// A learner's schedule for one enrolled course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSchedule {
    pub enrollment_id: String,
    pub course_id: String,
    #[serde(default)]
    pub items: Vec<ScheduleItem>,
}

impl CourseSchedule {
    /// Empty schedule for a course with no generated schedule yet (the
    /// adapter maps a not-found response onto this).
    pub fn empty(course_id: &str) -> Self {
        Self { enrollment_id: String::new(), course_id: course_id.to_string(), items: Vec::new() }
    }
}
