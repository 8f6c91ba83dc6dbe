use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub type StoryId = u64;

/// A single Hacker News submission as returned by `/item/{id}.json`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub by: String,
    /// Submission time in Unix seconds.
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descendants: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid story type '{0}' (expected 'top' or 'new')")]
    StoryType(String),
    #[error("invalid view mode '{0}' (expected 'grid' or 'list')")]
    ViewMode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StoryType {
    #[default]
    Top,
    New,
}

impl StoryType {
    pub fn as_str(self) -> &'static str {
        match self {
            StoryType::Top => "top",
            StoryType::New => "new",
        }
    }
}

impl FromStr for StoryType {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "top" => Ok(StoryType::Top),
            "new" => Ok(StoryType::New),
            other => Err(ParseError::StoryType(other.to_string())),
        }
    }
}

impl fmt::Display for StoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    Grid,
    #[default]
    List,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    /// Lenient parse for presentational inputs: anything unknown renders as a grid.
    pub fn parse_or_grid(raw: &str) -> Self {
        match raw.parse() {
            Ok(mode) => mode,
            Err(err) => {
                hn_logging::hn_warn!("{}; falling back to grid", err);
                ViewMode::Grid
            }
        }
    }
}

impl FromStr for ViewMode {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(ParseError::ViewMode(other.to_string())),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
