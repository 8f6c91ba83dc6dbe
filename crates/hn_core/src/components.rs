//! Validation and derived values for the navbar, story list and pagination bar.
//!
//! Each component checks its own inputs and falls back to a renderable value
//! instead of failing, then turns clicks into [`Msg`]s only when the matching
//! boundary check passes.
use hn_logging::hn_warn;

use crate::format::{extract_domain, relative_time_at, story_link};
use crate::layout::DEFAULT_PAGE_SIZE;
use crate::{pagination, Msg, Story, StoryId, StoryType, ViewMode};

/// Display values for one story, computed once per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryCard {
    pub id: Option<StoryId>,
    pub title: String,
    pub author: String,
    pub score: i64,
    pub comment_count: u32,
    pub link: String,
    pub domain: String,
    pub time_ago: String,
}

impl StoryCard {
    pub fn new(story: Option<&Story>, now: i64) -> Self {
        match story {
            Some(story) => Self {
                id: Some(story.id),
                title: story.title.clone(),
                author: story.by.clone(),
                score: story.score,
                comment_count: story.descendants.unwrap_or(0),
                link: story_link(Some(story)),
                domain: extract_domain(Some(story)),
                time_ago: relative_time_at(story.time, now),
            },
            None => Self {
                id: None,
                title: String::new(),
                author: String::new(),
                score: 0,
                comment_count: 0,
                link: story_link(None),
                domain: String::new(),
                time_ago: String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryListView {
    pub cards: Vec<StoryCard>,
    pub view_mode: ViewMode,
}

impl StoryListView {
    /// Builds the cards for a page, skipping absent entries.
    pub fn build<'a>(
        entries: impl IntoIterator<Item = Option<&'a Story>>,
        view_mode: ViewMode,
        now: i64,
    ) -> Self {
        let cards = entries
            .into_iter()
            .flatten()
            .map(|story| StoryCard::new(Some(story), now))
            .collect();
        Self { cards, view_mode }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navbar {
    pub view_mode: ViewMode,
    pub story_type: StoryType,
}

impl Navbar {
    pub fn new(view_mode: ViewMode, story_type: StoryType) -> Self {
        Self {
            view_mode,
            story_type,
        }
    }

    /// Emits a layout change only when it differs from the current one.
    pub fn change_view(&self, mode: ViewMode) -> Option<Msg> {
        (self.view_mode != mode).then_some(Msg::ViewModeSelected(mode))
    }

    pub fn toggle_story_type(&self, story_type: StoryType) -> Msg {
        Msg::StoryTypeSelected(story_type)
    }

    /// Validates a raw toggle value, e.g. from a keyboard binding table.
    pub fn toggle_story_type_raw(&self, raw: &str) -> Option<Msg> {
        match raw.parse::<StoryType>() {
            Ok(story_type) => Some(self.toggle_story_type(story_type)),
            Err(err) => {
                hn_warn!("Ignoring story type toggle: {}", err);
                None
            }
        }
    }

    pub fn change_view_raw(&self, raw: &str) -> Option<Msg> {
        match raw.parse::<ViewMode>() {
            Ok(mode) => self.change_view(mode),
            Err(err) => {
                hn_warn!("Ignoring view mode change: {}", err);
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationBar {
    pub current_page: usize,
    pub page_size: usize,
    pub total_stories: usize,
    pub max_pages: usize,
}

impl PaginationBar {
    /// Clamps out-of-range inputs: negative page or total to 0, non-positive page size to 10.
    pub fn new(current_page: i64, page_size: i64, total_stories: i64) -> Self {
        let current_page = usize::try_from(current_page).unwrap_or_else(|_| {
            hn_warn!("Invalid current page {}", current_page);
            0
        });
        let page_size = match usize::try_from(page_size) {
            Ok(size) if size > 0 => size,
            _ => {
                hn_warn!("Invalid page size {}", page_size);
                DEFAULT_PAGE_SIZE
            }
        };
        let total_stories = usize::try_from(total_stories).unwrap_or_else(|_| {
            hn_warn!("Invalid total stories {}", total_stories);
            0
        });
        Self {
            current_page,
            page_size,
            total_stories,
            max_pages: pagination::max_pages(total_stories, page_size),
        }
    }

    pub fn can_go_next(&self) -> bool {
        pagination::has_next_page(self.current_page, self.page_size, self.total_stories)
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 0
    }

    pub fn handle_next(&self) -> Option<Msg> {
        if self.can_go_next() {
            Some(Msg::NextClicked)
        } else {
            hn_warn!("Next page is not available");
            None
        }
    }

    pub fn handle_prev(&self) -> Option<Msg> {
        if self.can_go_prev() {
            Some(Msg::PrevClicked)
        } else {
            hn_warn!("Already at the first page");
            None
        }
    }

    pub fn handle_go_to_start(&self) -> Option<Msg> {
        self.can_go_prev().then_some(Msg::GoToStartClicked)
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page + 1, self.max_pages.max(1))
    }
}
