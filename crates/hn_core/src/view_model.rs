use crate::{pagination, Story, StoryType, ViewMode};

/// Placeholder rows shown while a page is loading.
pub const SKELETON_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageViewModel {
    pub stories: Vec<Story>,
    pub story_type: StoryType,
    pub view_mode: ViewMode,
    pub current_page: usize,
    pub page_size: usize,
    pub total_stories: usize,
    pub max_pages: usize,
    pub is_loading: bool,
    pub loading_complete: bool,
    pub dirty: bool,
}

impl PageViewModel {
    pub fn can_go_next(&self) -> bool {
        pagination::has_next_page(self.current_page, self.page_size, self.total_stories)
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 0
    }

    pub fn skeleton_rows(&self) -> usize {
        if self.is_loading && self.stories.is_empty() {
            SKELETON_ROWS
        } else {
            0
        }
    }

    /// Loading finished and there is nothing to show.
    pub fn is_empty_result(&self) -> bool {
        self.loading_complete && !self.is_loading && self.stories.is_empty()
    }
}
