//! # Studyline Core
//!
//! Core business logic of the timeline engine: port interfaces, the
//! type/status normalizer, the reconciliation pass, the query views, and the
//! orchestrating [`TimelineService`].
//!
//! ## Architecture
//! - Depends only on `studyline-domain`
//! - Defines the port traits implemented by `studyline-infra`
//! - All reconciliation logic is pure: "now" is an explicit parameter, never
//!   an ambient clock read

pub mod timeline;

// Re-export commonly used items
pub use timeline::ports::{CalendarSource, CourseCatalog, EnrollmentDirectory, ScheduleSource};
pub use timeline::service::TimelineService;
pub use timeline::views::{MonthGrid, TimelineSlice};
