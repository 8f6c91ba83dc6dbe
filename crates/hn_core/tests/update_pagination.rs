use std::sync::Once;

use hn_core::{update, AppState, Effect, Msg, PaginationBar, StoryType};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(hn_logging::initialize_for_tests);
}

fn loaded_state(width: u32, count: u64) -> AppState {
    let (state, _) = update(AppState::new(), Msg::Init { viewport_width: width });
    let (state, _) = update(
        state,
        Msg::IdListLoaded {
            generation: 1,
            story_type: StoryType::Top,
            ids: (1..=count).collect(),
        },
    );
    state
}

fn click(state: AppState, msg: Msg, times: usize) -> AppState {
    (0..times).fold(state, |state, _| update(state, msg.clone()).0)
}

fn loaded_page_ids(effects: &[Effect]) -> Option<Vec<u64>> {
    effects.iter().find_map(|effect| match effect {
        Effect::LoadPage { ids, .. } => Some(ids.clone()),
        _ => None,
    })
}

#[test]
fn next_advances_until_last_page() {
    init_logging();
    // 500px -> page size 10, 50 ids -> pages 0..=4.
    let state = loaded_state(500, 50);
    let state = click(state, Msg::NextClicked, 4);
    assert_eq!(state.current_page(), 4);

    let before = state.view();
    let (state, effects) = update(state, Msg::NextClicked);
    assert!(effects.is_empty());
    assert_eq!(state.current_page(), 4);
    assert_eq!(state.view(), before);
}

#[test]
fn next_loads_following_window() {
    init_logging();
    let state = loaded_state(500, 100);
    let (state, effects) = update(state, Msg::NextClicked);

    assert_eq!(state.current_page(), 1);
    assert_eq!(loaded_page_ids(&effects), Some((11..=20).collect()));
}

#[test]
fn last_page_window_is_partial() {
    init_logging();
    let state = loaded_state(500, 95);
    let state = click(state, Msg::NextClicked, 8);
    let (state, effects) = update(state, Msg::NextClicked);

    assert_eq!(state.current_page(), 9);
    assert_eq!(loaded_page_ids(&effects), Some((91..=95).collect()));
    assert!(!state.view().can_go_next());
}

#[test]
fn prev_and_start_are_noops_on_first_page() {
    init_logging();
    let state = loaded_state(500, 100);

    let (state, effects) = update(state, Msg::PrevClicked);
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::GoToStartClicked);
    assert!(effects.is_empty());
    assert_eq!(state.current_page(), 0);
}

#[test]
fn prev_steps_back_one_page() {
    init_logging();
    let state = click(loaded_state(500, 100), Msg::NextClicked, 3);
    let (state, effects) = update(state, Msg::PrevClicked);

    assert_eq!(state.current_page(), 2);
    assert_eq!(loaded_page_ids(&effects), Some((21..=30).collect()));
}

#[test]
fn go_to_start_rewinds_to_first_page() {
    init_logging();
    let state = click(loaded_state(500, 100), Msg::NextClicked, 3);
    let (state, effects) = update(state, Msg::GoToStartClicked);

    assert_eq!(state.current_page(), 0);
    assert_eq!(loaded_page_ids(&effects), Some((1..=10).collect()));
}

#[test]
fn pending_correction_preserves_offset() {
    init_logging();
    // 1200px -> page size 24.
    let state = click(loaded_state(1200, 100), Msg::NextClicked, 2);
    assert_eq!(state.current_page(), 2);

    // 800px -> page size 12.
    let (mut state, _) = update(state, Msg::ViewportResized { width: 800 });
    assert_eq!(state.current_page(), 2);
    assert!(state.has_pending_resize());

    assert!(state.apply_pending_resize());
    assert_eq!(state.current_page(), 4);
    assert!(!state.has_pending_resize());
    assert!(!state.apply_pending_resize());
}

#[test]
fn navigation_applies_pending_correction_first() {
    init_logging();
    let state = click(loaded_state(1200, 100), Msg::NextClicked, 2);
    let (state, _) = update(state, Msg::ViewportResized { width: 800 });

    // Corrected to page 4 (offset 48), then next -> page 5 = ids 61..=72.
    let (state, effects) = update(state, Msg::NextClicked);
    assert_eq!(state.current_page(), 5);
    assert_eq!(loaded_page_ids(&effects), Some((61..=72).collect()));
    assert!(!state.has_pending_resize());
}

#[test]
fn rapid_resizes_correct_from_the_loaded_page_size() {
    init_logging();
    let state = click(loaded_state(1200, 100), Msg::NextClicked, 2);
    let (state, _) = update(state, Msg::ViewportResized { width: 1920 });
    let (state, _) = update(state, Msg::ViewportResized { width: 1024 });
    let (state, _) = update(state, Msg::ViewportResized { width: 800 });

    // Offset 48 from the 24-per-page layout, not from any intermediate size.
    let (state, effects) = update(state, Msg::PrevClicked);
    assert_eq!(state.current_page(), 3);
    assert_eq!(loaded_page_ids(&effects), Some((37..=48).collect()));
}

#[test]
fn correction_can_turn_next_into_noop() {
    init_logging();
    // 500px -> 10 per page; page 4 covers ids 41..=50 of 55.
    let state = click(loaded_state(500, 55), Msg::NextClicked, 4);
    assert_eq!(state.current_page(), 4);

    // 1440px -> 30 per page; offset 40 -> page 1, which is the last page.
    let (state, _) = update(state, Msg::ViewportResized { width: 1440 });
    let (state, effects) = update(state, Msg::NextClicked);
    assert!(effects.is_empty());
    assert_eq!(state.current_page(), 1);
}

#[test]
fn view_reports_corrected_page_while_pending() {
    init_logging();
    // 500px -> 10 per page; page 4 covers ids 41..=50 of 100.
    let state = click(loaded_state(500, 100), Msg::NextClicked, 4);

    // 1440px -> 30 per page; offset 40 -> page 1 of 4.
    let (state, _) = update(state, Msg::ViewportResized { width: 1440 });
    assert!(state.has_pending_resize());
    assert_eq!(state.current_page(), 4);

    let view = state.view();
    assert_eq!(view.current_page, 1);
    assert_eq!(view.page_size, 30);
    assert_eq!(view.max_pages, 4);
    assert!(view.can_go_next());

    let bar = PaginationBar::new(
        view.current_page as i64,
        view.page_size as i64,
        view.total_stories as i64,
    );
    assert_eq!(bar.page_label(), "Page 2 of 4");
    assert_eq!(bar.handle_next(), Some(Msg::NextClicked));

    // The coordinator agrees with what the bar offered.
    let (state, effects) = update(state, Msg::NextClicked);
    assert_eq!(state.current_page(), 2);
    assert_eq!(state.view().current_page, 2);
    assert_eq!(loaded_page_ids(&effects), Some((61..=90).collect()));
}

#[test]
fn max_pages_follows_page_size() {
    init_logging();
    let state = loaded_state(1200, 85);
    assert_eq!(state.view().max_pages, 4);

    let (state, _) = update(state, Msg::ViewportResized { width: 500 });
    assert_eq!(state.view().max_pages, 9);
}
