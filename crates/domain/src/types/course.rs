//! Course types from the enrollment and catalog services

use serde::{Deserialize, Serialize};

/// One course a learner is enrolled in, as reported by the enrollment
/// service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledCourse {
    pub course_id: String,
    pub title: String,
    pub slug: String,
}

/// Catalog lookup result, used to resolve course titles referenced but not
/// embedded by calendar events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub title: String,
    pub slug: String,
}
