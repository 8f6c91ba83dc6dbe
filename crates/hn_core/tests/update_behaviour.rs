use std::sync::Once;

use hn_core::{update, AppState, Effect, Msg, StoryType, ViewMode};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(hn_logging::initialize_for_tests);
}

fn ids(count: u64) -> Vec<u64> {
    (1..=count).collect()
}

/// Initializes at `width` and delivers `count` top story ids.
fn loaded_state(width: u32, count: u64) -> (AppState, Vec<Effect>) {
    let (state, _) = update(AppState::new(), Msg::Init { viewport_width: width });
    update(
        state,
        Msg::IdListLoaded {
            generation: 1,
            story_type: StoryType::Top,
            ids: ids(count),
        },
    )
}

#[test]
fn init_picks_page_size_and_loads_top_ids() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::Init { viewport_width: 1024 });
    let view = state.view();

    assert_eq!(view.page_size, 18);
    assert_eq!(view.story_type, StoryType::Top);
    assert_eq!(view.view_mode, ViewMode::List);
    assert!(view.is_loading);
    assert!(!view.loading_complete);
    assert_eq!(
        effects,
        vec![Effect::LoadIdList {
            generation: 1,
            story_type: StoryType::Top,
        }]
    );
    assert!(state.consume_dirty());
}

#[test]
fn second_init_is_ignored() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Init { viewport_width: 1920 });
    let (state, effects) = update(state, Msg::Init { viewport_width: 800 });

    assert!(effects.is_empty());
    assert_eq!(state.page_size(), 36);
}

#[test]
fn narrow_init_forces_list_over_persisted_grid() {
    init_logging();
    let state = AppState::with_view_mode(ViewMode::Grid);
    let (state, _) = update(state, Msg::Init { viewport_width: 699 });

    assert_eq!(state.view().view_mode, ViewMode::List);
    assert_eq!(state.page_size(), 10);
}

#[test]
fn wide_init_keeps_persisted_grid() {
    init_logging();
    let state = AppState::with_view_mode(ViewMode::Grid);
    let (state, _) = update(state, Msg::Init { viewport_width: 1440 });

    assert_eq!(state.view().view_mode, ViewMode::Grid);
    assert_eq!(state.page_size(), 30);
}

#[test]
fn view_mode_change_reloads_current_page() {
    init_logging();
    let (state, _) = loaded_state(1200, 100);
    let (state, _) = update(state, Msg::NextClicked);

    let (state, effects) = update(state, Msg::ViewModeSelected(ViewMode::Grid));

    assert_eq!(state.view().view_mode, ViewMode::Grid);
    assert_eq!(state.current_page(), 1);
    assert_eq!(
        effects,
        vec![
            Effect::ScrollToTop,
            Effect::LoadPage {
                generation: 3,
                ids: (25..=48).collect(),
            },
        ]
    );
}

#[test]
fn unchanged_view_mode_is_noop() {
    init_logging();
    let (state, _) = loaded_state(1200, 100);
    let before = state.view();

    let (state, effects) = update(state, Msg::ViewModeSelected(ViewMode::List));

    assert!(effects.is_empty());
    assert_eq!(state.view(), before);
}

#[test]
fn story_type_toggle_reloads_ids_and_resets_page() {
    init_logging();
    let (state, _) = loaded_state(1200, 100);
    let (state, _) = update(state, Msg::NextClicked);
    assert_eq!(state.current_page(), 1);

    let (state, effects) = update(state, Msg::StoryTypeSelected(StoryType::New));
    assert_eq!(
        effects,
        vec![Effect::LoadIdList {
            generation: 2,
            story_type: StoryType::New,
        }]
    );
    assert_eq!(state.view().story_type, StoryType::New);

    let (state, effects) = update(
        state,
        Msg::IdListLoaded {
            generation: 2,
            story_type: StoryType::New,
            ids: (500..530).collect(),
        },
    );
    assert_eq!(state.current_page(), 0);
    assert_eq!(state.story_ids().len(), 30);
    assert_eq!(
        effects,
        vec![
            Effect::ScrollToTop,
            Effect::LoadPage {
                generation: 3,
                ids: (500..524).collect(),
            },
        ]
    );
}

#[test]
fn stale_id_list_is_discarded() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Init { viewport_width: 1200 });
    let (state, _) = update(state, Msg::StoryTypeSelected(StoryType::New));

    let (state, effects) = update(
        state,
        Msg::IdListLoaded {
            generation: 1,
            story_type: StoryType::Top,
            ids: ids(50),
        },
    );

    assert!(effects.is_empty());
    assert!(state.story_ids().is_empty());
    assert!(state.view().is_loading);
}

#[test]
fn failed_id_list_shows_empty_result() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Init { viewport_width: 1200 });
    let (state, effects) = update(
        state,
        Msg::IdListLoaded {
            generation: 1,
            story_type: StoryType::Top,
            ids: Vec::new(),
        },
    );

    let view = state.view();
    assert!(effects.is_empty());
    assert!(view.loading_complete);
    assert!(!view.is_loading);
    assert!(view.is_empty_result());
    assert_eq!(view.max_pages, 0);
}

#[test]
fn resize_marks_pending_without_reloading() {
    init_logging();
    let (state, _) = loaded_state(1200, 100);

    let (state, effects) = update(state, Msg::ViewportResized { width: 800 });

    assert!(effects.is_empty());
    assert!(state.has_pending_resize());
    assert_eq!(state.page_size(), 12);
}

#[test]
fn resize_within_same_breakpoint_is_not_pending() {
    init_logging();
    let (state, _) = loaded_state(500, 100);

    let (state, effects) = update(state, Msg::ViewportResized { width: 600 });

    assert!(effects.is_empty());
    assert!(!state.has_pending_resize());
    assert_eq!(state.page_size(), 10);
}

#[test]
fn narrow_resize_forces_list_and_reloads() {
    init_logging();
    let (state, _) = loaded_state(1200, 100);
    let (state, _) = update(state, Msg::ViewModeSelected(ViewMode::Grid));

    let (state, effects) = update(state, Msg::ViewportResized { width: 600 });

    assert_eq!(state.view().view_mode, ViewMode::List);
    assert_eq!(state.page_size(), 10);
    assert!(matches!(effects.last(), Some(Effect::LoadPage { ids, .. }) if ids.len() == 10));
}

#[test]
fn forced_list_reload_keeps_the_loaded_offset() {
    init_logging();
    // 1200px -> 24 per page; page 2 covers ids 49..=72.
    let (state, _) = loaded_state(1200, 100);
    let (state, _) = update(state, Msg::ViewModeSelected(ViewMode::Grid));
    let (state, _) = update(state, Msg::NextClicked);
    let (state, _) = update(state, Msg::NextClicked);
    assert_eq!(state.current_page(), 2);

    // 600px -> 10 per page and list only; offset 48 -> page 4.
    let (state, effects) = update(state, Msg::ViewportResized { width: 600 });

    assert_eq!(state.view().view_mode, ViewMode::List);
    assert_eq!(state.current_page(), 4);
    assert!(!state.has_pending_resize());
    assert!(matches!(
        effects.last(),
        Some(Effect::LoadPage { ids, .. }) if *ids == (41..=50).collect::<Vec<u64>>()
    ));
}
