use std::sync::Arc;

use futures_util::future::join_all;
use hn_core::{Story, StoryId, StoryType};
use hn_logging::{hn_debug, hn_error, hn_warn};

use crate::HnApi;

/// Failure-free front of [`HnApi`]: every error is logged and turned into an
/// empty or absent result.
#[derive(Clone)]
pub struct StoryAccessor {
    api: Arc<dyn HnApi>,
}

impl StoryAccessor {
    pub fn new(api: Arc<dyn HnApi>) -> Self {
        Self { api }
    }

    pub async fn fetch_id_list(&self, story_type: StoryType) -> Vec<StoryId> {
        match self.api.story_ids(story_type).await {
            Ok(ids) => ids,
            Err(err) => {
                hn_error!("Failed to fetch {} story ids: {}", story_type, err);
                Vec::new()
            }
        }
    }

    pub async fn fetch_story(&self, id: StoryId) -> Option<Story> {
        match self.api.item(id).await {
            Ok(Some(story)) => Some(story),
            Ok(None) => {
                hn_warn!("Story {} does not exist", id);
                None
            }
            Err(err) => {
                hn_error!("Failed to fetch story {}: {}", id, err);
                None
            }
        }
    }

    /// Fetches all ids concurrently and keeps the ones that resolved, in request order.
    pub async fn fetch_stories(&self, ids: &[StoryId]) -> Vec<Story> {
        if ids.is_empty() {
            return Vec::new();
        }
        let results = join_all(ids.iter().map(|id| self.fetch_story(*id))).await;
        let stories: Vec<Story> = results.into_iter().flatten().collect();
        if stories.len() < ids.len() {
            hn_debug!(
                "Dropped {} of {} stories that failed to load",
                ids.len() - stories.len(),
                ids.len()
            );
        }
        stories
    }
}
