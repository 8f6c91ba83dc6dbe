use hn_logging::hn_info;

use crate::layout;
use crate::state::{IdListOutcome, PageLoadPlan};
use crate::{AppState, Effect, Msg, StoryType, ViewMode};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Init { viewport_width } => {
            if !state.initialize(viewport_width) {
                return (state, Vec::new());
            }
            if layout::forces_list_mode(viewport_width) {
                state.set_view_mode(ViewMode::List);
            }
            load_id_list(&mut state, StoryType::Top)
        }
        Msg::ViewportResized { width } => on_resize(&mut state, width),
        Msg::StoryTypeSelected(story_type) => load_id_list(&mut state, story_type),
        Msg::ViewModeSelected(view_mode) => set_view_mode(&mut state, view_mode),
        Msg::NextClicked => {
            state.apply_pending_resize();
            if state.step_next() {
                load_page(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::PrevClicked => {
            state.apply_pending_resize();
            if state.step_prev() {
                load_page(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::GoToStartClicked => {
            state.apply_pending_resize();
            if state.rewind() {
                load_page(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::IdListLoaded {
            generation,
            story_type,
            ids,
        } => match state.apply_id_list(generation, story_type, ids) {
            IdListOutcome::Loaded => load_page(&mut state),
            IdListOutcome::Empty { superseded: true } => vec![Effect::CancelPageLoad],
            IdListOutcome::Empty { superseded: false } | IdListOutcome::Stale => Vec::new(),
        },
        Msg::PageLoaded {
            generation,
            stories,
        } => {
            state.apply_page(generation, stories);
            Vec::new()
        }
    };

    (state, effects)
}

fn load_id_list(state: &mut AppState, story_type: StoryType) -> Vec<Effect> {
    let generation = state.begin_id_list_load(story_type);
    vec![Effect::LoadIdList {
        generation,
        story_type,
    }]
}

fn load_page(state: &mut AppState) -> Vec<Effect> {
    match state.begin_page_load() {
        PageLoadPlan::Fetch { generation, ids } => vec![
            Effect::ScrollToTop,
            Effect::LoadPage { generation, ids },
        ],
        PageLoadPlan::Empty { superseded } => {
            let mut effects = vec![Effect::ScrollToTop];
            if superseded {
                effects.push(Effect::CancelPageLoad);
            }
            effects
        }
    }
}

fn set_view_mode(state: &mut AppState, view_mode: ViewMode) -> Vec<Effect> {
    if !state.set_view_mode(view_mode) {
        return Vec::new();
    }
    // The reload is a refresh of the same window; re-position first so the
    // window matches the current page size.
    state.apply_pending_resize();
    load_page(state)
}

fn on_resize(state: &mut AppState, width: u32) -> Vec<Effect> {
    if !state.is_initialized() {
        return Vec::new();
    }
    state.resize(width);
    if layout::forces_list_mode(width) && state.view_mode() != ViewMode::List {
        hn_info!("Viewport {}px is too narrow for grid; switching to list", width);
        return set_view_mode(state, ViewMode::List);
    }
    Vec::new()
}
