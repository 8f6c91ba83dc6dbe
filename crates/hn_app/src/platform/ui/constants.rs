pub const APP_TITLE: &str = "HN Pager";
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 860.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [360.0, 480.0];

/// eframe storage key for the last chosen layout.
pub const VIEW_MODE_KEY: &str = "view_mode";

pub const CARD_MIN_WIDTH: f32 = 300.0;
pub const CARD_SPACING: f32 = 8.0;
pub const CARD_CORNER_RADIUS: u8 = 6;
pub const TITLE_SIZE: f32 = 16.0;
pub const SKELETON_HEIGHT: f32 = 56.0;

pub const STORIES_SCROLL_ID: &str = "stories_scroll_area";
