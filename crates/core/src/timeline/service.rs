//! Timeline service - orchestrates one learner query
//!
//! Resolves the enrollment list, fans out the per-course schedule fetches
//! concurrently with the single calendar fetch, normalizes both sources, and
//! reconciles them into one collection served through the query views.
//!
//! Failure policy: only enrollment resolution is fatal. A per-course
//! schedule failure drops that course's contribution; a calendar failure
//! degrades the result to schedule-only with `partial = true`.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use futures::future;
use studyline_domain::{
    CalendarWindowConfig, CourseSummary, ReconciledTimeline, Result, TimelineItem,
};
use tracing::{debug, instrument, warn};

use super::normalize::{normalize_calendar_event, normalize_schedule_item, NormalizeStats};
use super::ports::{CalendarSource, CourseCatalog, EnrollmentDirectory, ScheduleSource};
use super::reconcile;
use super::views::{self, MonthGrid, TimelineSlice};

/// Stateless reconciliation service; everything is rebuilt per query from a
/// fresh snapshot of source data.
pub struct TimelineService {
    enrollments: Arc<dyn EnrollmentDirectory>,
    schedules: Arc<dyn ScheduleSource>,
    calendar: Arc<dyn CalendarSource>,
    catalog: Arc<dyn CourseCatalog>,
    window: CalendarWindowConfig,
}

impl TimelineService {
    /// Create a new timeline service over the given ports.
    pub fn new(
        enrollments: Arc<dyn EnrollmentDirectory>,
        schedules: Arc<dyn ScheduleSource>,
        calendar: Arc<dyn CalendarSource>,
        catalog: Arc<dyn CourseCatalog>,
    ) -> Self {
        Self {
            enrollments,
            schedules,
            calendar,
            catalog,
            window: CalendarWindowConfig::default(),
        }
    }

    /// Override the calendar fetch window used for upcoming/overdue queries.
    pub fn with_window(mut self, window: CalendarWindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Build the reconciled timeline for one learner over one date range.
    ///
    /// "now" is an explicit parameter so status derivation stays a pure
    /// function of its inputs.
    #[instrument(skip(self))]
    pub async fn build_timeline(
        &self,
        learner_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<ReconciledTimeline> {
        // The only fatal failure: without the enrollment list nothing can be
        // shown.
        let enrolled = self.enrollments.enrolled_courses(learner_id).await?;
        debug!(courses = enrolled.len(), "resolved enrollments");

        // Independent read-only fetches, dispatched concurrently and merged
        // only after all have settled.
        let schedule_fetches = enrolled.iter().map(|course| {
            let schedules = Arc::clone(&self.schedules);
            async move { (course, schedules.course_schedule(&course.course_id).await) }
        });
        let (schedule_results, calendar_result) = tokio::join!(
            future::join_all(schedule_fetches),
            self.calendar.events_in_range(start, end, None),
        );

        let mut stats = NormalizeStats::default();
        let mut schedule_items: Vec<TimelineItem> = Vec::new();
        for (course, result) in schedule_results {
            match result {
                Ok(schedule) => {
                    schedule_items.extend(
                        schedule
                            .items
                            .iter()
                            .filter_map(|item| normalize_schedule_item(course, item, &mut stats)),
                    );
                }
                Err(e) => {
                    warn!(course_id = %course.course_id, error = %e,
                        "schedule fetch failed, omitting course from timeline");
                }
            }
        }

        let (events, partial) = match calendar_result {
            Ok(events) => (events, false),
            Err(e) => {
                warn!(error = %e, "calendar fetch failed, serving schedule-only partial result");
                (Vec::new(), true)
            }
        };

        let courses = self.resolve_event_courses(&enrolled, &events).await;
        let calendar_items: Vec<TimelineItem> = events
            .iter()
            .filter_map(|event| normalize_calendar_event(event, &courses, now, &mut stats))
            .collect();

        Ok(reconcile::reconcile(schedule_items, calendar_items, now, partial, stats.dropped))
    }

    /// Month-grid view for one calendar month.
    pub async fn month_view(
        &self,
        learner_id: &str,
        year: i32,
        month: u32,
        now: DateTime<Utc>,
    ) -> Result<MonthGrid> {
        let (start, end) = views::month_bounds(year, month)?;
        let timeline = self.build_timeline(learner_id, start, end, now).await?;
        views::month_grid(&timeline, year, month)
    }

    /// Upcoming-N view around "now".
    pub async fn upcoming(
        &self,
        learner_id: &str,
        now: DateTime<Utc>,
        limit: Option<usize>,
    ) -> Result<TimelineSlice> {
        let timeline = self.windowed_timeline(learner_id, now).await?;
        Ok(views::upcoming(&timeline, now, limit))
    }

    /// Overdue-all view around "now".
    pub async fn overdue(&self, learner_id: &str, now: DateTime<Utc>) -> Result<TimelineSlice> {
        let timeline = self.windowed_timeline(learner_id, now).await?;
        Ok(views::overdue(&timeline))
    }

    async fn windowed_timeline(
        &self,
        learner_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ReconciledTimeline> {
        let start = now - Duration::hours(i64::from(self.window.lookback_hours));
        let end = now + Duration::hours(i64::from(self.window.lookahead_hours));
        self.build_timeline(learner_id, start, end, now).await
    }

    /// Resolve title/slug for course ids referenced by calendar events.
    ///
    /// Enrollment data already carries both, so the catalog is only
    /// consulted for ids outside the learner's enrollment set whose events
    /// embed neither. Lookup failures are tolerated; normalization falls
    /// back to the raw id as display title.
    async fn resolve_event_courses(
        &self,
        enrolled: &[studyline_domain::EnrolledCourse],
        events: &[studyline_domain::CalendarEvent],
    ) -> HashMap<String, CourseSummary> {
        let mut courses: HashMap<String, CourseSummary> = enrolled
            .iter()
            .map(|c| {
                (c.course_id.clone(), CourseSummary { title: c.title.clone(), slug: c.slug.clone() })
            })
            .collect();

        let unresolved: BTreeSet<&str> = events
            .iter()
            .filter_map(|event| event.course.as_ref())
            .filter(|course| course.title.is_none() || course.slug.is_none())
            .filter(|course| !courses.contains_key(&course.id))
            .map(|course| course.id.as_str())
            .collect();

        let lookups = unresolved.iter().map(|id| {
            let catalog = Arc::clone(&self.catalog);
            async move { (*id, catalog.course_by_id(id).await) }
        });
        for (id, result) in future::join_all(lookups).await {
            match result {
                Ok(summary) => {
                    courses.insert(id.to_string(), summary);
                }
                Err(e) => {
                    warn!(course_id = id, error = %e, "catalog lookup failed for calendar event course");
                }
            }
        }

        courses
    }
}
