//! Keyboard shortcuts for the pager.

use egui::Key;
use hn_core::{Msg, Navbar, PageViewModel, PaginationBar};

#[derive(Debug, Clone, Copy)]
enum Binding {
    Next,
    Prev,
    Start,
    ViewMode(&'static str),
    StoryType(&'static str),
}

const BINDINGS: &[(Key, Binding)] = &[
    (Key::ArrowRight, Binding::Next),
    (Key::ArrowLeft, Binding::Prev),
    (Key::Home, Binding::Start),
    (Key::G, Binding::ViewMode("grid")),
    (Key::L, Binding::ViewMode("list")),
    (Key::T, Binding::StoryType("top")),
    (Key::N, Binding::StoryType("new")),
];

/// Keys pressed this frame, in binding order.
pub fn pressed_keys(ctx: &egui::Context) -> Vec<Key> {
    ctx.input(|input| {
        BINDINGS
            .iter()
            .map(|(key, _)| *key)
            .filter(|key| input.key_pressed(*key))
            .collect()
    })
}

/// Translates pressed keys into messages, honouring the same boundary checks
/// as the on-screen buttons.
pub fn messages_for(keys: &[Key], view: &PageViewModel) -> Vec<Msg> {
    let navbar = Navbar::new(view.view_mode, view.story_type);
    let pagination = PaginationBar::new(
        view.current_page as i64,
        view.page_size as i64,
        view.total_stories as i64,
    );

    keys.iter()
        .filter_map(|key| {
            let (_, binding) = BINDINGS.iter().find(|(bound, _)| bound == key)?;
            match binding {
                Binding::Next => pagination.handle_next(),
                Binding::Prev => pagination.handle_prev(),
                Binding::Start => pagination.handle_go_to_start(),
                Binding::ViewMode(raw) => navbar.change_view_raw(raw),
                Binding::StoryType(raw) => navbar.toggle_story_type_raw(raw),
            }
        })
        .collect()
}
