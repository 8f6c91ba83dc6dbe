//! Display helpers that turn raw story fields into card text.
use url::Url;

use crate::Story;

pub const HN_DOMAIN: &str = "news.ycombinator.com";
const HN_ITEM_URL: &str = "https://news.ycombinator.com/item?id=";
const JUST_NOW_SECS: i64 = 5;

const TIME_UNITS: [(char, i64); 4] = [('d', 86_400), ('h', 3_600), ('m', 60), ('s', 1)];

/// Relative age of a Unix timestamp measured against the wall clock.
pub fn relative_time(unix_time: i64) -> String {
    relative_time_at(unix_time, chrono::Utc::now().timestamp())
}

/// Relative age of `unix_time` as seen at `now`, e.g. `"3h ago"`.
///
/// Only the largest whole unit is shown. Future timestamps clamp to zero
/// elapsed seconds and read as "just now".
pub fn relative_time_at(unix_time: i64, now: i64) -> String {
    if unix_time <= 0 {
        return "unknown".to_string();
    }

    let elapsed = now.saturating_sub(unix_time).max(0);
    if elapsed < JUST_NOW_SECS {
        return "just now".to_string();
    }

    TIME_UNITS
        .iter()
        .find(|(_, unit_secs)| elapsed >= *unit_secs)
        .map(|(letter, unit_secs)| format!("{}{letter} ago", elapsed / unit_secs))
        .unwrap_or_else(|| "just now".to_string())
}

/// Link a story title should open: the submitted URL, or the HN discussion page.
pub fn story_link(story: Option<&Story>) -> String {
    let Some(story) = story else {
        return "#".to_string();
    };
    match story.url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => format!("{HN_ITEM_URL}{}", story.id),
    }
}

/// Bare host of the story URL with one leading `www.` removed.
pub fn extract_domain(story: Option<&Story>) -> String {
    let Some(raw) = story
        .and_then(|story| story.url.as_deref())
        .filter(|url| !url.is_empty())
    else {
        return HN_DOMAIN.to_string();
    };

    match Url::parse(raw) {
        Ok(url) => match url.host_str() {
            Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
            None => HN_DOMAIN.to_string(),
        },
        Err(err) => {
            hn_logging::hn_warn!("Failed to parse domain from url {:?}: {}", raw, err);
            HN_DOMAIN.to_string()
        }
    }
}
