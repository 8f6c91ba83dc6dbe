use std::time::Duration;

use futures_util::StreamExt;
use hn_core::{Story, StoryId, StoryType};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{FailureKind, FetchError};

pub const DEFAULT_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 1024 * 1024,
        }
    }
}

/// Read-only view of the Hacker News API.
#[async_trait::async_trait]
pub trait HnApi: Send + Sync {
    /// Ranked ids for the given list.
    async fn story_ids(&self, story_type: StoryType) -> Result<Vec<StoryId>, FetchError>;

    /// One item. `Ok(None)` when the API answers `null` (unknown or deleted id).
    async fn item(&self, id: StoryId) -> Result<Option<Story>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestHnApi {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestHnApi {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        let raw = format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Malformed, err.to_string()))
    }
}

#[async_trait::async_trait]
impl HnApi for ReqwestHnApi {
    async fn story_ids(&self, story_type: StoryType) -> Result<Vec<StoryId>, FetchError> {
        self.get_json(feed_path(story_type)).await
    }

    async fn item(&self, id: StoryId) -> Result<Option<Story>, FetchError> {
        self.get_json(&format!("item/{id}.json")).await
    }
}

pub fn feed_path(story_type: StoryType) -> &'static str {
    match story_type {
        StoryType::Top => "topstories.json",
        StoryType::New => "newstories.json",
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
