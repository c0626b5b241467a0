use std::{fs, io::ErrorKind};

use anyhow::{anyhow, Context, Result};
use colorsys::Rgb;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use crate::mapping::{ColorCameraMapper, NOMINAL_COLOR_FOCAL_LENGTH};
use crate::systems::{jitter::DEFAULT_JITTER_THRESHOLD, placement::PlacementSettings};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HangerConfig {
    /// Where to find the shirt images (png, jpg or bmp)
    pub shirts_dir: String,

    // -------- PLACEMENT SETTINGS
    /// Shirt width, as a multiple of the distance between the shoulders
    pub width_scale: f32,

    /// Shirt height, as a multiple of the distance between head and hip centre
    pub height_scale: f32,

    /// How far (px) above the centre shoulder the top edge of the shirt sits
    pub top_offset: f32,

    /// Minimum movement (px) of the centre shoulder before the shirt is redrawn
    pub jitter_threshold: f32,

    // -------- COLOUR CAMERA SETTINGS
    pub color_frame_width: u32,
    pub color_frame_height: u32,
    pub focal_length: f32,

    // -------- DEBUG OVERLAY
    /// Start with the skeleton overlay (and recognised speech) visible
    pub debug_overlay: bool,
    pub tracked_joint_colour: String,
    pub inferred_joint_colour: String,
    pub tracked_bone_colour: String,
    pub inferred_bone_colour: String,
    pub joint_radius: f32,
    pub tracked_bone_width: f32,
    pub inferred_bone_width: f32,
}

impl Default for HangerConfig {
    fn default() -> Self {
        HangerConfig {
            shirts_dir: String::from("./shirts"),
            width_scale: 1.75,
            height_scale: 1.25,
            top_offset: 10.,
            jitter_threshold: DEFAULT_JITTER_THRESHOLD,
            color_frame_width: 640,
            color_frame_height: 480,
            focal_length: NOMINAL_COLOR_FOCAL_LENGTH,
            debug_overlay: false,
            tracked_joint_colour: String::from("#44c044"),
            inferred_joint_colour: String::from("#ffff00"),
            tracked_bone_colour: String::from("#008000"),
            inferred_bone_colour: String::from("#808080"),
            joint_radius: 3.,
            tracked_bone_width: 6.,
            inferred_bone_width: 1.,
        }
    }
}

impl HangerConfig {
    pub fn placement_settings(&self) -> PlacementSettings {
        PlacementSettings {
            width_scale: self.width_scale,
            height_scale: self.height_scale,
            top_offset: self.top_offset,
        }
    }

    pub fn coordinate_mapper(&self) -> ColorCameraMapper {
        ColorCameraMapper::new(
            (self.color_frame_width, self.color_frame_height),
            self.focal_length,
        )
    }

    pub fn write_config_to_file(&self, config_file_path: &str) -> Result<()> {
        debug!("Current state of config: {:?}", self);
        let text = serde_json::to_string_pretty(self)?;
        match fs::write(config_file_path, text) {
            Ok(()) => {
                info!("Wrote config to file: {:?}", config_file_path);
                Ok(())
            }
            Err(e) => {
                error!("Error writing config to file: {:?}", e);
                Err(anyhow!("failed to write config to {}: {}", config_file_path, e))
            }
        }
    }
}

pub fn load_config_from_file(config_file_path: &str) -> Result<HangerConfig> {
    match fs::read_to_string(config_file_path) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "Config file not found at {}, will use defaults",
                &config_file_path
            );
            Ok(HangerConfig::default())
        }
        Err(e) => Err(e).with_context(|| format!("failed to read config {}", config_file_path)),
        Ok(s) => {
            info!("Loaded config OK from \"{}\"", config_file_path);
            match serde_json::from_str::<HangerConfig>(&s) {
                Ok(loaded_config) => {
                    debug!("Config parsed data from file: {:?}", &loaded_config);
                    Ok(loaded_config)
                }
                Err(e) => Err(anyhow!("Failed to parse config data: {}", e)),
            }
        }
    }
}

/// Parse a "#rrggbb" string into RGB bytes
pub fn parse_colour(hex: &str) -> Result<[u8; 3]> {
    let rgb = Rgb::from_hex_str(hex).map_err(|_| anyhow!("invalid colour \"{}\"", hex))?;
    Ok(rgb.into())
}
