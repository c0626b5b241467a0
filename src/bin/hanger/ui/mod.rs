mod info;
mod overlay;
mod previews;

use info::render_info;
use overlay::render_overlay;
use previews::render_preview;

use crate::model::Model;

pub const SPACING_AMOUNT: f32 = 16.0;
pub const PREVIEW_WIDTH: f32 = 160.0;

pub fn render_ui(ctx: &egui::Context, model: &mut Model) {
    egui::SidePanel::left("previous_shirt")
        .resizable(false)
        .exact_width(PREVIEW_WIDTH + SPACING_AMOUNT)
        .show(ctx, |ui| {
            ui.add_space(SPACING_AMOUNT);
            let index = model.session.wardrobe().previous_index();
            render_preview(model, ui, "Previous", index);
        });

    egui::SidePanel::right("next_shirt")
        .resizable(false)
        .exact_width(PREVIEW_WIDTH + SPACING_AMOUNT)
        .show(ctx, |ui| {
            ui.add_space(SPACING_AMOUNT);
            let index = model.session.wardrobe().next_index();
            render_preview(model, ui, "Next", index);
        });

    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        render_info(model, ui);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        render_overlay(model, ui);
    });
}
