//! Query views over a reconciled timeline
//!
//! Three read shapes over the same merged collection, all pure functions:
//! month grid, upcoming-N, and overdue-all, plus a per-day lookup. Each view
//! carries the timeline's `partial`/`dropped` signals through so the
//! presentation layer can distinguish "no items" from degraded data.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use studyline_domain::{
    ItemStatus, ReconciledTimeline, Result, StudylineError, TimelineItem, DEFAULT_UPCOMING_LIMIT,
};

/// A filtered slice of the timeline (upcoming or overdue views).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSlice {
    pub items: Vec<TimelineItem>,
    pub partial: bool,
    pub dropped: u32,
}

/// One month of the timeline, bucketed by calendar day.
///
/// Every day of the month is present, empty buckets included, and the
/// leading/trailing blank counts let the renderer lay out a full week grid
/// (weeks start on Monday).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub leading_blanks: u32,
    pub days: BTreeMap<u32, Vec<TimelineItem>>,
    pub trailing_blanks: u32,
    pub partial: bool,
    pub dropped: u32,
}

/// First and one-past-last instants of a calendar month.
pub fn month_bounds(year: i32, month: u32) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| StudylineError::InvalidInput(format!("invalid month {year}-{month}")))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| StudylineError::Internal("month arithmetic overflow".into()))?;

    Ok((
        first.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc(),
        next.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc(),
    ))
}

/// Bucket every item falling inside the given month into its calendar day.
pub fn month_grid(timeline: &ReconciledTimeline, year: i32, month: u32) -> Result<MonthGrid> {
    let (start, end) = month_bounds(year, month)?;
    let first = start.date_naive();
    let day_count = (end.date_naive() - first).num_days() as u32;

    let mut days: BTreeMap<u32, Vec<TimelineItem>> =
        (1..=day_count).map(|day| (day, Vec::new())).collect();

    for item in &timeline.items {
        if item.scheduled_at >= start && item.scheduled_at < end {
            let day = item.scheduled_at.day();
            days.entry(day).or_default().push(item.clone());
        }
    }

    let leading_blanks = first.weekday().num_days_from_monday();
    let trailing_blanks = (7 - (leading_blanks + day_count) % 7) % 7;

    Ok(MonthGrid {
        year,
        month,
        leading_blanks,
        days,
        trailing_blanks,
        partial: timeline.partial,
        dropped: timeline.dropped,
    })
}

/// Items still ahead of "now" that a learner can act on, oldest first,
/// capped at `limit` (default 5).
pub fn upcoming(
    timeline: &ReconciledTimeline,
    now: DateTime<Utc>,
    limit: Option<usize>,
) -> TimelineSlice {
    let limit = limit.unwrap_or(DEFAULT_UPCOMING_LIMIT);
    let items = timeline
        .items
        .iter()
        .filter(|item| {
            matches!(item.status, ItemStatus::Upcoming | ItemStatus::InProgress)
                && item.scheduled_at >= now
        })
        .take(limit)
        .cloned()
        .collect();

    TimelineSlice { items, partial: timeline.partial, dropped: timeline.dropped }
}

/// All overdue items, oldest first — the most urgent to surface.
pub fn overdue(timeline: &ReconciledTimeline) -> TimelineSlice {
    let items = timeline
        .items
        .iter()
        .filter(|item| item.status == ItemStatus::Overdue)
        .cloned()
        .collect();

    TimelineSlice { items, partial: timeline.partial, dropped: timeline.dropped }
}

/// Items anchored on one calendar day.
pub fn items_on_day(timeline: &ReconciledTimeline, date: NaiveDate) -> Vec<TimelineItem> {
    timeline
        .items
        .iter()
        .filter(|item| item.scheduled_at.date_naive() == date)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use studyline_domain::{ItemKind, ItemSource};

    fn item(id: &str, status: ItemStatus, day: u32, hour: u32) -> TimelineItem {
        TimelineItem {
            id: id.into(),
            title: "x".into(),
            description: None,
            kind: ItemKind::Lesson,
            scheduled_at: Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap(),
            duration_minutes: 0,
            status,
            course: None,
            navigation: None,
            priority: None,
            source: ItemSource::Schedule,
        }
    }

    fn timeline(items: Vec<TimelineItem>) -> ReconciledTimeline {
        ReconciledTimeline { items, partial: false, dropped: 0 }
    }

    #[test]
    fn month_grid_includes_empty_buckets() {
        let grid = month_grid(&timeline(vec![item("schedule-1", ItemStatus::Upcoming, 10, 9)]), 2025, 3)
            .unwrap();
        assert_eq!(grid.days.len(), 31);
        assert_eq!(grid.days[&10].len(), 1);
        assert!(grid.days[&11].is_empty());
        // March 2025 starts on a Saturday.
        assert_eq!(grid.leading_blanks, 5);
        assert_eq!(grid.trailing_blanks, (7 - (5 + 31) % 7) % 7);
    }

    #[test]
    fn month_grid_rejects_invalid_month() {
        assert!(month_grid(&timeline(vec![]), 2025, 13).is_err());
        assert!(month_grid(&timeline(vec![]), 2025, 0).is_err());
    }

    #[test]
    fn month_grid_excludes_out_of_month_items() {
        let april = TimelineItem {
            scheduled_at: Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
            ..item("schedule-2", ItemStatus::Upcoming, 1, 0)
        };
        let grid = month_grid(&timeline(vec![april]), 2025, 3).unwrap();
        assert!(grid.days.values().all(Vec::is_empty));
    }

    #[test]
    fn upcoming_filters_status_and_horizon() {
        let now = Utc.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap();
        let tl = timeline(vec![
            item("schedule-1", ItemStatus::Upcoming, 1, 9),   // past: excluded
            item("schedule-2", ItemStatus::Overdue, 6, 9),    // wrong status
            item("schedule-3", ItemStatus::InProgress, 6, 10),
            item("schedule-4", ItemStatus::Upcoming, 7, 9),
            item("schedule-5", ItemStatus::Completed, 8, 9),  // wrong status
        ]);
        let slice = upcoming(&tl, now, None);
        let ids: Vec<&str> = slice.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["schedule-3", "schedule-4"]);
    }

    #[test]
    fn upcoming_respects_limit() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let tl = timeline(
            (1..=9).map(|d| item(&format!("schedule-{d}"), ItemStatus::Upcoming, d, 9)).collect(),
        );
        assert_eq!(upcoming(&tl, now, None).items.len(), 5);
        assert_eq!(upcoming(&tl, now, Some(2)).items.len(), 2);
    }

    #[test]
    fn overdue_keeps_oldest_first() {
        let tl = timeline(vec![
            item("schedule-1", ItemStatus::Overdue, 2, 9),
            item("schedule-2", ItemStatus::Upcoming, 3, 9),
            item("schedule-3", ItemStatus::Overdue, 4, 9),
        ]);
        let view = overdue(&tl);
        let ids: Vec<&str> = view.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["schedule-1", "schedule-3"]);
    }

    #[test]
    fn per_day_lookup_matches_calendar_day() {
        let tl = timeline(vec![
            item("schedule-1", ItemStatus::Upcoming, 2, 9),
            item("schedule-2", ItemStatus::Upcoming, 2, 20),
            item("schedule-3", ItemStatus::Upcoming, 3, 9),
        ]);
        let date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(items_on_day(&tl, date).len(), 2);
    }
}
