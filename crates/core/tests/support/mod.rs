//! In-memory mock ports for timeline service tests.
//!
//! Each mock stores a fixed data set and mirrors the failure policy the real
//! adapters implement (e.g. a missing schedule reads as empty, not as an
//! error). Designed for deterministic reconciliation tests with a fixed
//! "now".

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use studyline_core::{CalendarSource, CourseCatalog, EnrollmentDirectory, ScheduleSource};
use studyline_domain::{
    CalendarEvent, CourseSchedule, CourseSummary, EnrolledCourse, Result as DomainResult,
    ScheduleItem, StudylineError,
};

/// Mock enrollment service backed by a fixed course list.
#[derive(Default)]
pub struct MockEnrollmentDirectory {
    courses: Vec<EnrolledCourse>,
    fail: bool,
}

impl MockEnrollmentDirectory {
    pub fn new(courses: Vec<EnrolledCourse>) -> Self {
        Self { courses, fail: false }
    }

    pub fn failing() -> Self {
        Self { courses: Vec::new(), fail: true }
    }
}

#[async_trait]
impl EnrollmentDirectory for MockEnrollmentDirectory {
    async fn enrolled_courses(&self, _learner_id: &str) -> DomainResult<Vec<EnrolledCourse>> {
        if self.fail {
            return Err(StudylineError::Network("enrollment service unreachable".into()));
        }
        Ok(self.courses.clone())
    }
}

/// Mock schedule source. Courses in `failing` error out; courses without a
/// seeded schedule return an empty one, matching the adapter's
/// 404-as-empty policy.
#[derive(Default)]
pub struct MockScheduleSource {
    schedules: HashMap<String, CourseSchedule>,
    failing: HashSet<String>,
}

impl MockScheduleSource {
    pub fn with_schedule(mut self, course_id: &str, items: Vec<ScheduleItem>) -> Self {
        self.schedules.insert(
            course_id.to_string(),
            CourseSchedule {
                enrollment_id: format!("enr-{course_id}"),
                course_id: course_id.to_string(),
                items,
            },
        );
        self
    }

    pub fn with_failing_course(mut self, course_id: &str) -> Self {
        self.failing.insert(course_id.to_string());
        self
    }
}

#[async_trait]
impl ScheduleSource for MockScheduleSource {
    async fn course_schedule(&self, course_id: &str) -> DomainResult<CourseSchedule> {
        if self.failing.contains(course_id) {
            return Err(StudylineError::Network(format!(
                "schedule fetch failed for {course_id}"
            )));
        }
        Ok(self
            .schedules
            .get(course_id)
            .cloned()
            .unwrap_or_else(|| CourseSchedule::empty(course_id)))
    }
}

/// Mock calendar source backed by a fixed event list.
#[derive(Default)]
pub struct MockCalendarSource {
    events: Vec<CalendarEvent>,
    fail: bool,
}

impl MockCalendarSource {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self { events, fail: false }
    }

    pub fn failing() -> Self {
        Self { events: Vec::new(), fail: true }
    }
}

#[async_trait]
impl CalendarSource for MockCalendarSource {
    async fn events_in_range(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
        _event_type: Option<&str>,
    ) -> DomainResult<Vec<CalendarEvent>> {
        if self.fail {
            return Err(StudylineError::Network("calendar service unreachable".into()));
        }
        Ok(self.events.clone())
    }
}

/// Mock course catalog; unknown ids answer not-found.
#[derive(Default)]
pub struct MockCourseCatalog {
    courses: HashMap<String, CourseSummary>,
}

impl MockCourseCatalog {
    pub fn with_course(mut self, course_id: &str, title: &str, slug: &str) -> Self {
        self.courses.insert(
            course_id.to_string(),
            CourseSummary { title: title.to_string(), slug: slug.to_string() },
        );
        self
    }
}

#[async_trait]
impl CourseCatalog for MockCourseCatalog {
    async fn course_by_id(&self, course_id: &str) -> DomainResult<CourseSummary> {
        self.courses
            .get(course_id)
            .cloned()
            .ok_or_else(|| StudylineError::NotFound(format!("course {course_id}")))
    }
}
