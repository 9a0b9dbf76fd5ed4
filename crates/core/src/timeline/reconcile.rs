//! Reconciliation pass
//!
//! Merges the two normalized item lists into one ordered collection and
//! finalizes live status against an explicit "now". The pass is idempotent:
//! re-running it over an already-finalized collection with the same "now"
//! changes nothing.

use chrono::{DateTime, Utc};
use studyline_domain::{ItemSource, ItemStatus, ReconciledTimeline, TimelineItem};
use tracing::debug;

/// Merge normalized schedule and calendar items into a reconciled timeline.
///
/// No cross-source deduplication is attempted: the two id spaces are
/// disjoint by construction, and a course-start event may legitimately
/// coexist with a topically related lesson item.
pub fn reconcile(
    schedule_items: Vec<TimelineItem>,
    calendar_items: Vec<TimelineItem>,
    now: DateTime<Utc>,
    partial: bool,
    dropped: u32,
) -> ReconciledTimeline {
    let mut items = schedule_items;
    items.extend(calendar_items);

    finalize_status(&mut items, now);
    sort_items(&mut items);

    debug!(count = items.len(), partial, dropped, "reconciled timeline");
    ReconciledTimeline { items, partial, dropped }
}

/// Promote elapsed schedule-sourced items to overdue.
///
/// `Completed`/`Skipped` are authoritative (externally reported) and are
/// never rewritten. Calendar-sourced items never become overdue; an event
/// passively concludes instead of missing a deadline, which the calendar
/// status derivation already encodes.
pub fn finalize_status(items: &mut [TimelineItem], now: DateTime<Utc>) {
    for item in items {
        if item.status.is_terminal() || item.source != ItemSource::Schedule {
            continue;
        }
        if matches!(item.status, ItemStatus::Upcoming | ItemStatus::InProgress)
            && item.window_end() < now
        {
            item.status = ItemStatus::Overdue;
        }
    }
}

/// Ascending by scheduled instant; ties break schedule-before-calendar, then
/// lexicographically by id, so repeated calls with identical inputs produce
/// an identical order regardless of fetch completion order.
pub fn sort_items(items: &mut [TimelineItem]) {
    items.sort_by(|a, b| {
        a.scheduled_at
            .cmp(&b.scheduled_at)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.id.cmp(&b.id))
    });
}
