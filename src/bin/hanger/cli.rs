use std::path::PathBuf;

use clap::{command, Parser};

const CONFIG_FILE_PATH: &str = "./hanger.json";
const PLAYBACK_FPS: f32 = 30.;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where to load (and save) Hanger config
    #[arg(long = "config", default_value_t = String::from(CONFIG_FILE_PATH))]
    pub config_path: String,

    /// Recorded skeleton frames to play back (.json lines or .msgpack)
    #[arg(long = "recording")]
    pub recording: Option<PathBuf>,

    /// Override the shirts directory from the config file
    #[arg(long = "shirts")]
    pub shirts_dir: Option<PathBuf>,

    #[arg(long = "fps", default_value_t = PLAYBACK_FPS)]
    pub fps: f32,

    /// Start the recording again when it ends
    #[arg(long = "loop")]
    pub looping: bool,

    /// Show the skeleton overlay from the start, regardless of config
    #[arg(long = "debug")]
    pub debug: bool,

    /// Don't listen for voice commands on stdin
    #[arg(long = "noVoice")]
    pub no_voice: bool,

    #[arg(long = "loglevel", default_value_t = String::from("info"))]
    pub log_level: String,
}
