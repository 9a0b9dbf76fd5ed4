//! Platform API adapters
//!
//! One adapter per core port, all speaking camelCase JSON to the Studyline
//! platform API through the shared [`PlatformApiClient`].

mod calendar;
mod client;
mod courses;
mod enrollment;
mod schedule;

pub use calendar::HttpCalendarSource;
pub use client::PlatformApiClient;
pub use courses::HttpCourseCatalog;
pub use enrollment::HttpEnrollmentDirectory;
pub use schedule::HttpScheduleSource;
