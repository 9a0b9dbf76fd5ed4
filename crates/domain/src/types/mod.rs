//! Domain types and models

pub mod calendar;
pub mod course;
pub mod schedule;
pub mod timeline;

pub use calendar::{CalendarEvent, EventCourse};
pub use course::{CourseSummary, EnrolledCourse};
pub use schedule::{CourseSchedule, ScheduleItem};
pub use timeline::{
    CourseRef, ItemKind, ItemSource, ItemStatus, NavigationTarget, Priority, ReconciledTimeline,
    TimelineItem,
};
