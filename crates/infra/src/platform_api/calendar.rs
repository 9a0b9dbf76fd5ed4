//! Calendar source adapter

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use studyline_core::CalendarSource;
use studyline_domain::{CalendarEvent, Result};

use super::client::PlatformApiClient;

/// HTTP-backed platform calendar source.
pub struct HttpCalendarSource {
    api: PlatformApiClient,
}

impl HttpCalendarSource {
    pub fn new(api: PlatformApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CalendarSource for HttpCalendarSource {
    async fn events_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        event_type: Option<&str>,
    ) -> Result<Vec<CalendarEvent>> {
        let mut query = vec![
            ("start", start.to_rfc3339_opts(SecondsFormat::Secs, true)),
            ("end", end.to_rfc3339_opts(SecondsFormat::Secs, true)),
        ];
        if let Some(kind) = event_type {
            query.push(("type", kind.to_string()));
        }

        self.api.get("/calendar/events", &query).await
    }
}
