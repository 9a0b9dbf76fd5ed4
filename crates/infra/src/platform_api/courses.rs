//! Course catalog adapter

use async_trait::async_trait;
use studyline_core::CourseCatalog;
use studyline_domain::{CourseSummary, Result};

use super::client::PlatformApiClient;

/// HTTP-backed course catalog.
pub struct HttpCourseCatalog {
    api: PlatformApiClient,
}

impl HttpCourseCatalog {
    pub fn new(api: PlatformApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CourseCatalog for HttpCourseCatalog {
    async fn course_by_id(&self, course_id: &str) -> Result<CourseSummary> {
        self.api.get(&format!("/courses/{course_id}"), &[]).await
    }
}
