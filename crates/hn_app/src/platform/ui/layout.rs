use hn_core::PageViewModel;

use super::constants::STORIES_SCROLL_ID;
use super::{render, UiAction};

/// Draws one frame: navbar on top, pagination at the bottom, stories between.
pub fn show(
    ctx: &egui::Context,
    view: &PageViewModel,
    scroll_to_top: bool,
    now: i64,
) -> Vec<UiAction> {
    let mut actions = Vec::new();

    egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
        ui.add_space(4.0);
        render::navbar(ui, view, &mut actions);
        ui.add_space(4.0);
    });

    egui::TopBottomPanel::bottom("pagination").show(ctx, |ui| {
        ui.add_space(4.0);
        render::pagination(ui, view, &mut actions);
        ui.add_space(4.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        let mut area = egui::ScrollArea::vertical()
            .id_salt(STORIES_SCROLL_ID)
            .auto_shrink([false, false]);
        if scroll_to_top {
            area = area.vertical_scroll_offset(0.0);
        }
        area.show(ui, |ui| {
            render::stories(ui, view, now, &mut actions);
        });
    });

    actions
}
