//! Timeline port interfaces
//!
//! Read-only collaborator interfaces implemented by the infrastructure
//! layer. All operations are idempotent; the engine holds no state between
//! calls.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use studyline_domain::{CalendarEvent, CourseSchedule, CourseSummary, EnrolledCourse, Result};

/// Enrollment service: which courses does a learner belong to.
///
/// This is the only collaborator whose failure is fatal to a timeline query;
/// without the enrollment list there is nothing to ask the other sources
/// about.
#[async_trait]
pub trait EnrollmentDirectory: Send + Sync {
    async fn enrolled_courses(&self, learner_id: &str) -> Result<Vec<EnrolledCourse>>;
}

/// Course-progress service: the per-enrollment schedule of one course.
///
/// Implementations must map a not-found response (no schedule generated yet
/// for this enrollment) to [`CourseSchedule::empty`], not an error. Any other
/// failure propagates; the service drops that course's contribution and
/// continues with the rest.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    async fn course_schedule(&self, course_id: &str) -> Result<CourseSchedule>;
}

/// Platform calendar service: events within a date range.
///
/// Callers guarantee `start <= end`. A failure here is a hard failure for
/// the adapter call, but the reconciliation degrades to a schedule-only
/// `partial` result instead of aborting.
#[async_trait]
pub trait CalendarSource: Send + Sync {
    async fn events_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        event_type: Option<&str>,
    ) -> Result<Vec<CalendarEvent>>;
}

/// Course catalog: resolve title/slug for a course id referenced by a
/// calendar event that does not embed them.
#[async_trait]
pub trait CourseCatalog: Send + Sync {
    async fn course_by_id(&self, course_id: &str) -> Result<CourseSummary>;
}
