//! Application constants
//!
//! Centralized location for domain-level constants used throughout the
//! timeline engine.

/// Default number of items returned by the upcoming view.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// Hard cap on the upcoming view limit accepted from callers.
pub const MAX_UPCOMING_LIMIT: usize = 50;

/// Id prefix for schedule-sourced timeline items.
pub const SCHEDULE_ID_PREFIX: &str = "schedule-";

/// Id prefix for calendar-sourced timeline items.
pub const CALENDAR_ID_PREFIX: &str = "calendar-";

// Default calendar window for non-month queries (upcoming/overdue), relative
// to "now".
pub const DEFAULT_LOOKBACK_HOURS: u32 = 24 * 30;
pub const DEFAULT_LOOKAHEAD_HOURS: u32 = 24 * 60;

// HTTP defaults for the platform API client.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HTTP_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_HTTP_BACKOFF_MS: u64 = 200;

/// Default bind address for the API facade.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8210";
