//! Enrollment service adapter

use async_trait::async_trait;
use studyline_core::EnrollmentDirectory;
use studyline_domain::{EnrolledCourse, Result};

use super::client::PlatformApiClient;

/// HTTP-backed enrollment directory.
pub struct HttpEnrollmentDirectory {
    api: PlatformApiClient,
}

impl HttpEnrollmentDirectory {
    pub fn new(api: PlatformApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl EnrollmentDirectory for HttpEnrollmentDirectory {
    async fn enrolled_courses(&self, learner_id: &str) -> Result<Vec<EnrolledCourse>> {
        self.api.get(&format!("/learners/{learner_id}/courses"), &[]).await
    }
}
