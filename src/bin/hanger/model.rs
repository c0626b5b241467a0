use std::sync::mpsc::Receiver;

use anyhow::Result;
use egui::{Color32, ColorImage, Stroke, TextureHandle, TextureOptions};
use indexmap::IndexMap;
use log::{error, info};

use hanger::{
    config::{parse_colour, HangerConfig},
    mapping::ColorCameraMapper,
    session::OverlaySession,
    shirts::ShirtCatalogue,
    skeleton::SkeletonFrame,
    sources::sensor::{RecordedSensor, SkeletonSensor},
    voice::{RecognitionEvent, VoiceCommand},
};

use crate::ui::render_ui;

pub struct OverlayColours {
    pub tracked_joint: Color32,
    pub inferred_joint: Color32,
    pub tracked_bone: Stroke,
    pub inferred_bone: Stroke,
    pub joint_radius: f32,
}

fn colour(hex: &str) -> Result<Color32> {
    let [r, g, b] = parse_colour(hex)?;
    Ok(Color32::from_rgb(r, g, b))
}

impl OverlayColours {
    pub fn from_config(config: &HangerConfig) -> Result<Self> {
        Ok(OverlayColours {
            tracked_joint: colour(&config.tracked_joint_colour)?,
            inferred_joint: colour(&config.inferred_joint_colour)?,
            tracked_bone: Stroke::new(
                config.tracked_bone_width,
                colour(&config.tracked_bone_colour)?,
            ),
            inferred_bone: Stroke::new(
                config.inferred_bone_width,
                colour(&config.inferred_bone_colour)?,
            ),
            joint_radius: config.joint_radius,
        })
    }
}

/// Where frames and speech come from; all produced on background threads
pub struct Inputs {
    pub frames: Receiver<SkeletonFrame>,
    pub speech: Receiver<RecognitionEvent>,
    pub sensor: Option<RecordedSensor>,
}

pub struct Model {
    pub config: HangerConfig,
    pub config_path: String,
    pub colours: OverlayColours,
    pub session: OverlaySession,
    pub mapper: ColorCameraMapper,
    /// Same order as the session's wardrobe
    pub shirt_textures: IndexMap<String, TextureHandle>,
    pub inputs: Inputs,
    /// Most recent frame, kept for the debug skeleton overlay
    pub latest_frame: Option<SkeletonFrame>,
}

impl Model {
    pub fn new(
        ctx: &egui::Context,
        config: HangerConfig,
        config_path: String,
        colours: OverlayColours,
        session: OverlaySession,
        catalogue: &ShirtCatalogue,
        inputs: Inputs,
    ) -> Self {
        let shirt_textures = catalogue
            .iter()
            .map(|(name, image)| {
                let pixels = ColorImage::from_rgba_unmultiplied(
                    [image.width as usize, image.height as usize],
                    &image.rgba,
                );
                let texture = ctx.load_texture(name.as_str(), pixels, TextureOptions::LINEAR);
                (name.clone(), texture)
            })
            .collect();

        if inputs.sensor.is_none() {
            info!("Hanger started without a sensor; shirts can still be browsed");
        } else {
            info!("Hanger started OK");
        }

        Model {
            mapper: config.coordinate_mapper(),
            config,
            config_path,
            colours,
            session,
            shirt_textures,
            inputs,
            latest_frame: None,
        }
    }

    /// Apply everything the background threads produced since the last repaint
    pub fn drain_inputs(&mut self) {
        while let Ok(event) = self.inputs.speech.try_recv() {
            self.session.handle_recognition(event);
        }
        while let Ok(frame) = self.inputs.frames.try_recv() {
            self.session.process_frame(&frame, &self.mapper);
            self.latest_frame = Some(frame);
        }
    }

    pub fn command(&mut self, command: VoiceCommand) {
        self.session.apply_command(command);
    }

    pub fn shirt_texture(&self, index: usize) -> Option<&TextureHandle> {
        self.shirt_textures.get_index(index).map(|(_name, t)| t)
    }

    pub fn sensor_name(&self) -> Option<&str> {
        self.inputs.sensor.as_ref().map(|s| s.name())
    }

    pub fn save_config(&mut self) {
        self.config.debug_overlay = self.session.debug();
        if let Err(e) = self.config.write_config_to_file(&self.config_path) {
            error!("Could not save settings: {:#}", e);
        }
    }
}

impl eframe::App for Model {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_inputs();
        render_ui(ctx, self);
        ctx.request_repaint();
    }

    fn on_close_event(&mut self) -> bool {
        if let Some(sensor) = self.inputs.sensor.as_mut() {
            info!("Stopping sensor \"{}\"", sensor.name());
            sensor.stop();
        }
        true
    }
}
