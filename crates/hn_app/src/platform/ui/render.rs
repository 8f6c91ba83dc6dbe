use egui::{CornerRadius, CursorIcon, RichText, Sense, Ui};
use hn_core::{
    Navbar, PageViewModel, PaginationBar, StoryCard, StoryListView, StoryType, ViewMode,
};

use super::constants::*;
use super::UiAction;

pub fn navbar(ui: &mut Ui, view: &PageViewModel, actions: &mut Vec<UiAction>) {
    let navbar = Navbar::new(view.view_mode, view.story_type);

    ui.horizontal(|ui| {
        ui.heading(APP_TITLE);
        ui.separator();

        for story_type in [StoryType::Top, StoryType::New] {
            let label = match story_type {
                StoryType::Top => "Top",
                StoryType::New => "New",
            };
            if ui
                .selectable_label(navbar.story_type == story_type, label)
                .clicked()
            {
                actions.push(UiAction::Dispatch(navbar.toggle_story_type(story_type)));
            }
        }

        ui.separator();

        for mode in [ViewMode::Grid, ViewMode::List] {
            let label = match mode {
                ViewMode::Grid => "Grid",
                ViewMode::List => "List",
            };
            if ui.selectable_label(navbar.view_mode == mode, label).clicked() {
                if let Some(msg) = navbar.change_view(mode) {
                    actions.push(UiAction::Dispatch(msg));
                }
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("↻").on_hover_text("Refresh").clicked() {
                actions.push(UiAction::Dispatch(
                    navbar.toggle_story_type(navbar.story_type),
                ));
            }
            if view.is_loading {
                ui.spinner();
            }
        });
    });
}

pub fn pagination(ui: &mut Ui, view: &PageViewModel, actions: &mut Vec<UiAction>) {
    let bar = PaginationBar::new(
        view.current_page as i64,
        view.page_size as i64,
        view.total_stories as i64,
    );

    ui.horizontal(|ui| {
        if ui
            .add_enabled(bar.can_go_prev(), egui::Button::new("« Start"))
            .clicked()
        {
            actions.extend(bar.handle_go_to_start().map(UiAction::Dispatch));
        }
        if ui
            .add_enabled(bar.can_go_prev(), egui::Button::new("← Prev"))
            .clicked()
        {
            actions.extend(bar.handle_prev().map(UiAction::Dispatch));
        }

        ui.label(bar.page_label());

        if ui
            .add_enabled(bar.can_go_next(), egui::Button::new("Next →"))
            .clicked()
        {
            actions.extend(bar.handle_next().map(UiAction::Dispatch));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("{} stories", bar.total_stories));
        });
    });
}

pub fn stories(ui: &mut Ui, view: &PageViewModel, now: i64, actions: &mut Vec<UiAction>) {
    let skeletons = view.skeleton_rows();
    if skeletons > 0 {
        for _ in 0..skeletons {
            skeleton_row(ui);
        }
        return;
    }

    if view.is_empty_result() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("No stories found.").size(TITLE_SIZE));
        });
        return;
    }

    let list = StoryListView::build(view.stories.iter().map(Some), view.view_mode, now);
    match list.view_mode {
        ViewMode::List => {
            for card in &list.cards {
                story_card(ui, card, actions);
                ui.add_space(CARD_SPACING);
            }
        }
        ViewMode::Grid => {
            let columns = grid_columns(ui.available_width());
            for row in list.cards.chunks(columns) {
                ui.columns(columns, |cells| {
                    for (cell, card) in cells.iter_mut().zip(row) {
                        story_card(cell, card, actions);
                    }
                });
                ui.add_space(CARD_SPACING);
            }
        }
    }
}

fn grid_columns(available_width: f32) -> usize {
    ((available_width / CARD_MIN_WIDTH).floor() as usize).max(1)
}

fn story_card(ui: &mut Ui, card: &StoryCard, actions: &mut Vec<UiAction>) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(CornerRadius::same(CARD_CORNER_RADIUS))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            let title = ui
                .add(
                    egui::Label::new(RichText::new(&card.title).strong().size(TITLE_SIZE))
                        .sense(Sense::click()),
                )
                .on_hover_cursor(CursorIcon::PointingHand)
                .on_hover_text(&card.link);
            if title.clicked() {
                actions.push(UiAction::OpenLink(card.link.clone()));
            }

            ui.horizontal_wrapped(|ui| {
                ui.label(format!("{} points", card.score));
                ui.weak("|");
                ui.label(RichText::new(&card.domain).italics());
                ui.weak("|");
                ui.label(format!("by {}", card.author));
                ui.weak("|");
                ui.label(&card.time_ago);
                ui.weak("|");
                ui.label(format!("{} comments", card.comment_count));
            });
        });
}

fn skeleton_row(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), SKELETON_HEIGHT),
        Sense::hover(),
    );
    ui.painter().rect_filled(
        rect,
        CornerRadius::same(CARD_CORNER_RADIUS),
        ui.visuals().faint_bg_color,
    );
    ui.add_space(CARD_SPACING);
}
