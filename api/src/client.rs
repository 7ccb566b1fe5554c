use reqwest::Url;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::{CheckAuthResponse, ProgressResponse, User};

/// Calls the navigation bar makes against the backend.
///
/// `check_auth` resolves to `Ok(None)` when the server answers 2xx without a
/// user record. Implementors never retry.
#[allow(async_fn_in_trait)]
pub trait NavbarApi {
    async fn check_auth(&self) -> Result<Option<User>, ApiError>;
    async fn streak_count(&self, user_id: &str) -> Result<u32, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.base_url)
            .map_err(|_| ApiError::InvalidBaseUrl(config.base_url.clone()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(config.base_url.clone()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&ApiConfig::from_env())
    }

    pub fn check_auth_url(&self) -> Result<Url, ApiError> {
        self.endpoint(&["api", "check-auth"])
    }

    /// The user id is pushed as one path segment, so it is percent-encoded.
    pub fn progress_url(&self, user_id: &str) -> Result<Url, ApiError> {
        self.endpoint(&["api", "progress", user_id])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_body(&self, url: Url) -> Result<String, ApiError> {
        debug!(%url, "GET");
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }
        Ok(resp.text().await?)
    }
}

impl NavbarApi for ApiClient {
    async fn check_auth(&self) -> Result<Option<User>, ApiError> {
        let body = self.get_body(self.check_auth_url()?).await?;
        let parsed: CheckAuthResponse = serde_json::from_str(&body)?;
        Ok(parsed.user)
    }

    async fn streak_count(&self, user_id: &str) -> Result<u32, ApiError> {
        let body = self.get_body(self.progress_url(user_id)?).await?;
        let parsed: ProgressResponse = serde_json::from_str(&body)?;
        Ok(parsed.progress.streak_count)
    }
}
