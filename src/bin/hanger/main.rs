//! # Hanger
//!
//! Desktop overlay: draws the selected shirt over whoever the skeleton sensor is
//! tracking. Say (or type, one line per utterance) "next", "back"/"previous" to
//! change shirts and "debug" to toggle the skeleton overlay.
//!
use std::{
    io::{self, BufReader},
    path::PathBuf,
    sync::mpsc::channel,
};

use anyhow::{anyhow, Result};
use clap::Parser;
use env_logger::Env;
use log::debug;

use hanger::{
    config::load_config_from_file,
    session::OverlaySession,
    shirts::load_shirts,
    sources::{
        sensor::{find_sensor, start_sensor},
        speech::spawn_line_recognizer,
    },
    systems::Systems,
};
use model::{Inputs, Model, OverlayColours};

mod cli;
mod model;
mod ui;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level))
        .filter_module("winit", log::LevelFilter::Warn)
        .filter_module("eframe", log::LevelFilter::Warn)
        .init();

    debug!("Started; args: {:?}", cli);

    let config = load_config_from_file(&cli.config_path)?;
    let colours = OverlayColours::from_config(&config)?;

    let shirts_dir = cli
        .shirts_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.shirts_dir));
    let catalogue = load_shirts(&shirts_dir)?;

    let systems = Systems::new(&config, catalogue.keys().cloned().collect())?;
    let session = OverlaySession::new(systems, cli.debug || config.debug_overlay);

    let (frames_tx, frames_rx) = channel();
    let sensor = start_sensor(
        find_sensor(cli.recording.as_deref(), cli.fps, cli.looping),
        frames_tx,
    );

    let (speech_tx, speech_rx) = channel();
    if !cli.no_voice {
        spawn_line_recognizer(BufReader::new(io::stdin()), speech_tx);
    }

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1280.0, 720.0)),
        ..Default::default()
    };
    let config_path = cli.config_path.clone();
    eframe::run_native(
        "Hanger",
        options,
        Box::new(move |cc| {
            Box::new(Model::new(
                &cc.egui_ctx,
                config,
                config_path,
                colours,
                session,
                &catalogue,
                Inputs {
                    frames: frames_rx,
                    speech: speech_rx,
                    sensor,
                },
            ))
        }),
    )
    .map_err(|e| anyhow!("failed to run window: {:?}", e))
}
