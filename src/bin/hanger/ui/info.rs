use egui::{Color32, RichText, Ui};
use hanger::voice::VoiceCommand;

use crate::model::Model;

pub fn render_info(model: &mut Model, ui: &mut Ui) {
    ui.horizontal(|ui| {
        if ui.button("◀ Previous").clicked() {
            model.command(VoiceCommand::Previous);
        }

        let wardrobe = model.session.wardrobe();
        ui.label(
            RichText::new(format!(
                "{} ({}/{})",
                wardrobe.current_name(),
                wardrobe.current_index() + 1,
                wardrobe.len()
            ))
            .size(16.0),
        );

        if ui.button("Next ▶").clicked() {
            model.command(VoiceCommand::Next);
        }

        ui.separator();

        let mut debug = model.session.debug();
        if ui.checkbox(&mut debug, "Debug overlay").changed() {
            model.command(VoiceCommand::ToggleDebug);
        }

        ui.separator();

        match model.sensor_name() {
            Some(name) => {
                ui.label(format!(
                    "Sensor: {} ({} frames)",
                    name,
                    model.session.frames_processed()
                ));
            }
            None => {
                ui.label(RichText::new("No sensor").color(Color32::LIGHT_RED));
            }
        }

        ui.separator();

        if ui.button("Save settings 🖴").clicked() {
            model.save_config();
        }
    });
}
