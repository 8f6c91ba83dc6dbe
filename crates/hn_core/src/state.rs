use hn_logging::{hn_debug, hn_info, hn_warn};

use crate::layout::{self, DEFAULT_PAGE_SIZE};
use crate::pagination;
use crate::view_model::PageViewModel;
use crate::{Story, StoryId, StoryType, ViewMode};

/// Sequence number tagging a load; results carrying an older number are stale.
pub type Generation = u64;

/// Page size in force when the current page was last positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingResize {
    loaded_page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PageLoadPlan {
    Fetch {
        generation: Generation,
        ids: Vec<StoryId>,
    },
    Empty {
        superseded: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdListOutcome {
    Stale,
    Empty { superseded: bool },
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    initialized: bool,
    viewport_width: u32,
    story_type: StoryType,
    view_mode: ViewMode,
    current_page: usize,
    page_size: usize,
    story_ids: Vec<StoryId>,
    stories: Vec<Story>,
    pending_resize: Option<PendingResize>,
    id_list_generation: Generation,
    page_generation: Generation,
    id_list_in_flight: bool,
    page_in_flight: bool,
    loading_complete: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            initialized: false,
            viewport_width: 0,
            story_type: StoryType::Top,
            view_mode: ViewMode::List,
            current_page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            story_ids: Vec::new(),
            stories: Vec::new(),
            pending_resize: None,
            id_list_generation: 0,
            page_generation: 0,
            id_list_in_flight: false,
            page_in_flight: false,
            loading_complete: false,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a persisted layout preference instead of the list default.
    pub fn with_view_mode(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Self::default()
        }
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel {
            stories: self.stories.clone(),
            story_type: self.story_type,
            view_mode: self.view_mode,
            current_page: self.effective_page(),
            page_size: self.page_size,
            total_stories: self.story_ids.len(),
            max_pages: pagination::max_pages(self.story_ids.len(), self.page_size),
            is_loading: self.id_list_in_flight || self.page_in_flight,
            loading_complete: self.loading_complete,
            dirty: self.dirty,
        }
    }

    /// The page the next navigation starts from: the current page with any
    /// pending correction applied, without consuming it.
    fn effective_page(&self) -> usize {
        match &self.pending_resize {
            Some(pending) => pagination::corrected_page(
                self.current_page,
                pending.loaded_page_size,
                self.page_size,
            ),
            None => self.current_page,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn story_ids(&self) -> &[StoryId] {
        &self.story_ids
    }

    pub fn has_pending_resize(&self) -> bool {
        self.pending_resize.is_some()
    }

    /// Re-positions the current page after a page-size change so the same
    /// offset into the ID list stays visible. Returns whether a correction ran.
    pub fn apply_pending_resize(&mut self) -> bool {
        let Some(pending) = self.pending_resize.take() else {
            return false;
        };
        let corrected =
            pagination::corrected_page(self.current_page, pending.loaded_page_size, self.page_size);
        hn_debug!(
            "Page size {} -> {}: page {} -> {}",
            pending.loaded_page_size,
            self.page_size,
            self.current_page,
            corrected
        );
        self.current_page = corrected;
        self.mark_dirty();
        true
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn initialize(&mut self, viewport_width: u32) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.viewport_width = viewport_width;
        self.page_size = layout::page_size_for_width(viewport_width);
        self.story_type = StoryType::Top;
        self.mark_dirty();
        true
    }

    pub(crate) fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub(crate) fn set_view_mode(&mut self, view_mode: ViewMode) -> bool {
        if self.view_mode == view_mode {
            return false;
        }
        self.view_mode = view_mode;
        self.mark_dirty();
        true
    }

    /// Records the new width and page size. Returns whether the page size changed.
    pub(crate) fn resize(&mut self, width: u32) -> bool {
        self.viewport_width = width;
        let previous = self.page_size;
        let next = layout::page_size_for_width(width);
        if next == previous {
            return false;
        }
        self.page_size = next;
        if self.pending_resize.is_none() {
            self.pending_resize = Some(PendingResize {
                loaded_page_size: previous,
            });
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn step_next(&mut self) -> bool {
        if !pagination::has_next_page(self.current_page, self.page_size, self.story_ids.len()) {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub(crate) fn step_prev(&mut self) -> bool {
        if self.current_page == 0 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    pub(crate) fn rewind(&mut self) -> bool {
        if self.current_page == 0 {
            return false;
        }
        self.current_page = 0;
        true
    }

    pub(crate) fn begin_id_list_load(&mut self, story_type: StoryType) -> Generation {
        self.story_type = story_type;
        self.id_list_generation += 1;
        self.id_list_in_flight = true;
        self.loading_complete = false;
        self.mark_dirty();
        hn_info!(
            "Loading {} story ids (generation {})",
            story_type,
            self.id_list_generation
        );
        self.id_list_generation
    }

    pub(crate) fn apply_id_list(
        &mut self,
        generation: Generation,
        story_type: StoryType,
        ids: Vec<StoryId>,
    ) -> IdListOutcome {
        if generation != self.id_list_generation || story_type != self.story_type {
            hn_debug!(
                "Discarding stale {} id list (generation {}, current {})",
                story_type,
                generation,
                self.id_list_generation
            );
            return IdListOutcome::Stale;
        }
        self.id_list_in_flight = false;
        self.current_page = 0;
        self.pending_resize = None;
        self.mark_dirty();

        if ids.is_empty() {
            hn_warn!("No {} story ids available", story_type);
            let superseded = std::mem::take(&mut self.page_in_flight);
            self.page_generation += 1;
            self.story_ids.clear();
            self.stories.clear();
            self.loading_complete = true;
            return IdListOutcome::Empty { superseded };
        }

        hn_info!("Loaded {} {} story ids", ids.len(), story_type);
        self.story_ids = ids;
        IdListOutcome::Loaded
    }

    /// Supersedes any outstanding page load and plans the next one.
    pub(crate) fn begin_page_load(&mut self) -> PageLoadPlan {
        let superseded = self.page_in_flight;
        self.page_generation += 1;
        self.stories.clear();
        self.loading_complete = false;
        self.mark_dirty();

        let window =
            pagination::page_window(self.current_page, self.page_size, self.story_ids.len());
        if window.is_empty() {
            hn_warn!("No story ids to load for page {}", self.current_page);
            self.page_in_flight = false;
            self.loading_complete = true;
            return PageLoadPlan::Empty { superseded };
        }

        self.page_in_flight = true;
        PageLoadPlan::Fetch {
            generation: self.page_generation,
            ids: self.story_ids[window].to_vec(),
        }
    }

    pub(crate) fn apply_page(&mut self, generation: Generation, stories: Vec<Story>) -> bool {
        if generation != self.page_generation || !self.page_in_flight {
            hn_debug!(
                "Discarding stale page (generation {}, current {})",
                generation,
                self.page_generation
            );
            return false;
        }
        hn_debug!(
            "Presenting {} stories for page {}",
            stories.len(),
            self.current_page
        );
        self.stories = stories;
        self.page_in_flight = false;
        self.loading_complete = true;
        self.mark_dirty();
        true
    }
}
