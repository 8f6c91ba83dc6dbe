use crate::{Generation, StoryId, StoryType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadIdList {
        generation: Generation,
        story_type: StoryType,
    },
    /// Fetch the stories of one page window. Supersedes any earlier page load.
    LoadPage {
        generation: Generation,
        ids: Vec<StoryId>,
    },
    /// Drop the outstanding page load without starting another.
    CancelPageLoad,
    ScrollToTop,
}
