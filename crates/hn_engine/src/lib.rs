//! Pager engine: Hacker News API access and background load execution.
mod accessor;
mod engine;
mod fetch;
mod types;

pub use accessor::StoryAccessor;
pub use engine::EngineHandle;
pub use fetch::{feed_path, FetchSettings, HnApi, ReqwestHnApi, DEFAULT_API_BASE};
pub use types::{EngineEvent, FailureKind, FetchError};
