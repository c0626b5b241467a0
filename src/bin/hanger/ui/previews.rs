use egui::{vec2, Ui};

use crate::model::Model;

use super::PREVIEW_WIDTH;

pub fn render_preview(model: &Model, ui: &mut Ui, label: &str, index: usize) {
    ui.vertical_centered(|ui| {
        ui.heading(label);
        if let Some(texture) = model.shirt_texture(index) {
            let size = texture.size_vec2();
            let scale = PREVIEW_WIDTH / size.x.max(1.0);
            ui.image(texture.id(), vec2(PREVIEW_WIDTH, size.y * scale));
        }
        if let Some(name) = model.session.wardrobe().names().get(index) {
            ui.label(name);
        }
    });
}
