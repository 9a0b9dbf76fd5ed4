//! Shared client for the Studyline platform API
//!
//! Wraps the retrying [`HttpClient`] with base-URL joining, optional bearer
//! authentication, and uniform status/decode error mapping. Individual
//! adapters layer their own policy on top (e.g. the schedule adapter maps
//! not-found onto an empty schedule).

use reqwest::Method;
use serde::de::DeserializeOwned;
use studyline_domain::{Result, StudylineError};
use tracing::debug;

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Thin REST client for the platform API.
#[derive(Clone)]
pub struct PlatformApiClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl PlatformApiClient {
    /// Create a client for the given base URL (e.g.
    /// "https://api.studyline.io/v1").
    pub fn new(http: HttpClient, base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url, token }
    }

    /// Execute a GET request and deserialize the JSON response.
    ///
    /// Status mapping: 404 becomes [`StudylineError::NotFound`], any other
    /// non-success status becomes [`StudylineError::Network`], and an
    /// undecodable body becomes [`StudylineError::InvalidInput`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "platform API GET");

        let mut request = self.http.request(Method::GET, &url).query(query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = self.http.send(request).await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StudylineError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StudylineError::Network(format!(
                "platform API error ({status}) on {path}: {body}"
            )));
        }

        response.json::<T>().await.map_err(|err| {
            let infra: InfraError = err.into();
            StudylineError::from(infra)
        })
    }
}
