//! Pager core: pure state machine, pagination math and display helpers.
mod components;
mod effect;
pub mod format;
pub mod layout;
mod msg;
pub mod pagination;
mod state;
mod story;
mod update;
mod view_model;

pub use components::{Navbar, PaginationBar, StoryCard, StoryListView};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, Generation};
pub use story::{ParseError, Story, StoryId, StoryType, ViewMode};
pub use update::update;
pub use view_model::{PageViewModel, SKELETON_ROWS};
