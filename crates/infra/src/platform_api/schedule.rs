//! Schedule source adapter
//!
//! A 404 from the course-progress service means no schedule has been
//! generated for this enrollment yet; that is an empty contribution, not a
//! failure, and must never abort the learner-wide aggregation.

use async_trait::async_trait;
use studyline_core::ScheduleSource;
use studyline_domain::{CourseSchedule, Result, StudylineError};
use tracing::debug;

use super::client::PlatformApiClient;

/// HTTP-backed schedule source.
pub struct HttpScheduleSource {
    api: PlatformApiClient,
}

impl HttpScheduleSource {
    pub fn new(api: PlatformApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ScheduleSource for HttpScheduleSource {
    async fn course_schedule(&self, course_id: &str) -> Result<CourseSchedule> {
        match self.api.get(&format!("/courses/{course_id}/schedule"), &[]).await {
            Ok(schedule) => Ok(schedule),
            Err(StudylineError::NotFound(_)) => {
                debug!(course_id, "no schedule generated yet, treating as empty");
                Ok(CourseSchedule::empty(course_id))
            }
            Err(e) => Err(e),
        }
    }
}
