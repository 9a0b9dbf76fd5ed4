//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use studyline_core::TimelineService;
use studyline_domain::{Config, Result};
use studyline_infra::{
    HttpCalendarSource, HttpClient, HttpCourseCatalog, HttpEnrollmentDirectory, HttpScheduleSource,
    PlatformApiClient,
};

/// Application context - wires config through the HTTP client and adapters
/// into the timeline service.
pub struct AppContext {
    pub config: Config,
    pub timeline: Arc<TimelineService>,
}

impl AppContext {
    /// Build the full adapter stack from configuration.
    pub fn new(config: Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .max_attempts(config.http.max_attempts)
            .base_backoff(Duration::from_millis(config.http.base_backoff_ms))
            .user_agent(concat!("studyline-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let api = PlatformApiClient::new(
            http,
            config.platform.base_url.clone(),
            config.platform.token.clone(),
        );

        let timeline = TimelineService::new(
            Arc::new(HttpEnrollmentDirectory::new(api.clone())),
            Arc::new(HttpScheduleSource::new(api.clone())),
            Arc::new(HttpCalendarSource::new(api.clone())),
            Arc::new(HttpCourseCatalog::new(api)),
        )
        .with_window(config.calendar_window.clone());

        Ok(Self { config, timeline: Arc::new(timeline) })
    }
}
