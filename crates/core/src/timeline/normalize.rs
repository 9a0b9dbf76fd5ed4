//! Type/status normalizer
//!
//! Pure mapping functions from each source's native vocabulary onto the
//! unified [`ItemKind`]/[`ItemStatus`] enums. Every unmapped input value
//! routes through one explicit default branch per enum and is logged, so new
//! source values fail loud in logs rather than silently misclassifying.
//!
//! Malformed items (unparsable date, empty id, unmapped closed-vocabulary
//! kind) are dropped and counted; they never abort the batch.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use studyline_domain::{
    CalendarEvent, CourseRef, CourseSummary, EnrolledCourse, ItemKind, ItemSource, ItemStatus,
    NavigationTarget, Priority, ScheduleItem, TimelineItem,
};
use tracing::warn;

/// Counters accumulated across one normalization run, surfaced on the
/// reconciled timeline so consumers can distinguish "no items" from "items
/// were silently dropped".
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizeStats {
    pub dropped: u32,
}

impl NormalizeStats {
    fn drop_item(&mut self, source: ItemSource, id: &str, reason: &str) {
        self.dropped += 1;
        warn!(?source, id, reason, "dropping malformed source item");
    }
}

/// Schedule vocabulary is closed: the five known kinds map 1:1 and anything
/// else marks the item malformed.
pub fn map_schedule_kind(raw: &str) -> Option<ItemKind> {
    match raw {
        "lesson" => Some(ItemKind::Lesson),
        "quiz" => Some(ItemKind::Quiz),
        "deadline" => Some(ItemKind::Deadline),
        "reminder" => Some(ItemKind::Reminder),
        "milestone" => Some(ItemKind::Milestone),
        _ => None,
    }
}

/// Schedule status maps 1:1; an unrecognized value falls back to `Upcoming`,
/// which the finalization pass will re-derive against the clock anyway.
pub fn map_schedule_status(raw: &str, item_id: &str) -> ItemStatus {
    match raw {
        "pending" => ItemStatus::Upcoming,
        "in_progress" => ItemStatus::InProgress,
        "completed" => ItemStatus::Completed,
        "overdue" => ItemStatus::Overdue,
        "skipped" => ItemStatus::Skipped,
        other => {
            warn!(item_id, status = other, "unknown schedule status, defaulting to upcoming");
            ItemStatus::Upcoming
        }
    }
}

/// Priority is optional metadata; an unrecognized value is logged and
/// treated as absent.
pub fn map_priority(raw: &str, item_id: &str) -> Option<Priority> {
    match raw {
        "low" => Some(Priority::Low),
        "medium" => Some(Priority::Medium),
        "high" => Some(Priority::High),
        "urgent" => Some(Priority::Urgent),
        other => {
            warn!(item_id, priority = other, "unknown schedule priority, ignoring");
            None
        }
    }
}

/// Calendar vocabulary is open-ended; unknown event types default to
/// `Course` so the event still renders somewhere sensible.
pub fn map_calendar_kind(raw: &str, event_id: &str) -> ItemKind {
    match raw {
        "course_start" => ItemKind::Course,
        "quiz_scheduled" => ItemKind::Quiz,
        "deadline" => ItemKind::Deadline,
        "announcement" => ItemKind::Reminder,
        "milestone" => ItemKind::Milestone,
        other => {
            warn!(event_id, event_type = other, "unknown calendar event type, defaulting to course");
            ItemKind::Course
        }
    }
}

/// Calendar events carry no status of their own; it is derived from the
/// event window versus the query's "now". An event passively concludes, it
/// never becomes overdue or skipped.
pub fn derive_calendar_status(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> ItemStatus {
    if now > end {
        ItemStatus::Completed
    } else if now >= start {
        ItemStatus::InProgress
    } else {
        ItemStatus::Upcoming
    }
}

/// Parse an instant as the sources emit them: RFC 3339, or a naive
/// `YYYY-MM-DDTHH:MM[:SS]` timestamp treated as UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Normalize one schedule item into the unified model.
///
/// Returns `None` (and counts the drop) for malformed items.
pub fn normalize_schedule_item(
    course: &EnrolledCourse,
    item: &ScheduleItem,
    stats: &mut NormalizeStats,
) -> Option<TimelineItem> {
    if item.id.trim().is_empty() {
        stats.drop_item(ItemSource::Schedule, &item.id, "empty id");
        return None;
    }

    let Some(kind) = map_schedule_kind(&item.item_type) else {
        stats.drop_item(ItemSource::Schedule, &item.id, "unmapped item type");
        return None;
    };

    let Some(scheduled_at) = parse_instant(&item.scheduled_date) else {
        stats.drop_item(ItemSource::Schedule, &item.id, "unparsable scheduled date");
        return None;
    };

    let navigation = if let Some(lesson_id) = item.lesson_id.clone() {
        Some(NavigationTarget::Lesson { lesson_id })
    } else if let Some(quiz_id) = item.quiz_id.clone() {
        Some(NavigationTarget::Quiz { quiz_id })
    } else {
        Some(NavigationTarget::Course { course_slug: course.slug.clone() })
    };

    Some(TimelineItem {
        id: ItemSource::Schedule.tag_id(&item.id),
        title: item.title.clone(),
        description: item.description.clone(),
        kind,
        scheduled_at,
        duration_minutes: item.duration_minutes,
        status: map_schedule_status(&item.status, &item.id),
        course: Some(CourseRef { course_id: course.course_id.clone(), title: course.title.clone() }),
        navigation,
        priority: item.priority.as_deref().and_then(|p| map_priority(p, &item.id)),
        source: ItemSource::Schedule,
    })
}

/// Normalize one calendar event into the unified model.
///
/// `courses` holds catalog resolutions for course ids the events reference;
/// an id with no resolution falls back to the id itself as display title so
/// the course attribution is never silently lost.
pub fn normalize_calendar_event(
    event: &CalendarEvent,
    courses: &HashMap<String, CourseSummary>,
    now: DateTime<Utc>,
    stats: &mut NormalizeStats,
) -> Option<TimelineItem> {
    if event.id.trim().is_empty() {
        stats.drop_item(ItemSource::Calendar, &event.id, "empty id");
        return None;
    }

    let Some(start) = parse_instant(&event.start_date) else {
        stats.drop_item(ItemSource::Calendar, &event.id, "unparsable start date");
        return None;
    };
    let Some(end) = parse_instant(&event.end_date) else {
        stats.drop_item(ItemSource::Calendar, &event.id, "unparsable end date");
        return None;
    };

    let duration_minutes = (end - start).num_minutes().max(0) as u32;

    let (course, navigation) = match &event.course {
        Some(event_course) => {
            let resolved = courses.get(&event_course.id);
            let title = event_course
                .title
                .clone()
                .or_else(|| resolved.map(|c| c.title.clone()))
                .unwrap_or_else(|| event_course.id.clone());
            let slug = event_course.slug.clone().or_else(|| resolved.map(|c| c.slug.clone()));
            (
                Some(CourseRef { course_id: event_course.id.clone(), title }),
                slug.map(|course_slug| NavigationTarget::Course { course_slug }),
            )
        }
        // Platform-wide item (e.g. a general announcement): the one legal
        // case of an absent course reference.
        None => (None, None),
    };

    Some(TimelineItem {
        id: ItemSource::Calendar.tag_id(&event.id),
        title: event.title.clone(),
        description: event.description.clone(),
        kind: map_calendar_kind(&event.event_type, &event.id),
        scheduled_at: start,
        duration_minutes,
        status: derive_calendar_status(start, end, now),
        course,
        navigation,
        priority: None,
        source: ItemSource::Calendar,
    })
}
