use std::path::PathBuf;

use clap::{command, Parser};

// Some defaults; some of which can be overriden via CLI args
const CONFIG_FILE_PATH: &str = "./hanger.json";
const PLAYBACK_FPS: f32 = 30.;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where to load Hanger config
    #[arg(long = "config", default_value_t = String::from(CONFIG_FILE_PATH))]
    pub config_path: String,

    /// Recorded skeleton frames to play back (.json lines or .msgpack)
    #[arg(long = "recording")]
    pub recording: Option<PathBuf>,

    /// Override the shirts directory from the config file
    #[arg(long = "shirts")]
    pub shirts_dir: Option<PathBuf>,

    /// Playback rate of the recording
    #[arg(long = "fps", default_value_t = PLAYBACK_FPS)]
    pub fps: f32,

    /// Start the recording again when it ends
    #[arg(long = "loop")]
    pub looping: bool,

    /// Don't listen for voice commands on stdin
    #[arg(long = "noVoice")]
    pub no_voice: bool,

    #[arg(long = "loglevel", default_value_t = String::from("info"))]
    pub log_level: String,
}
