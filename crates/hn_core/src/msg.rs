use crate::{Generation, Story, StoryId, StoryType, ViewMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// First frame: the shell reports the initial viewport width.
    Init { viewport_width: u32 },
    /// The viewport width changed.
    ViewportResized { width: u32 },
    /// User toggled between top and new stories (also used to refresh).
    StoryTypeSelected(StoryType),
    /// User picked grid or list layout.
    ViewModeSelected(ViewMode),
    /// User clicked Next.
    NextClicked,
    /// User clicked Prev.
    PrevClicked,
    /// User clicked Start.
    GoToStartClicked,
    /// Engine finished an ID-list load. An empty list covers failures.
    IdListLoaded {
        generation: Generation,
        story_type: StoryType,
        ids: Vec<StoryId>,
    },
    /// Engine finished a page load. Stories that failed to load are absent.
    PageLoaded {
        generation: Generation,
        stories: Vec<Story>,
    },
}
