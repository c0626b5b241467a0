//! Replays skeleton frames through the overlay logic without a window, writing
//! every accepted shirt placement to stdout as a JSON line. Voice commands are
//! read from stdin, one utterance per line.

use std::{
    io::{self, BufReader, Write},
    path::PathBuf,
    sync::mpsc::{channel, RecvTimeoutError},
    time::Duration,
};

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{debug, info, warn};
use serde::Serialize;

use hanger::{
    config::load_config_from_file,
    session::OverlaySession,
    shirts::load_shirts,
    sources::{
        sensor::{find_sensor, start_sensor},
        speech::spawn_line_recognizer,
    },
    systems::{placement::Placement, Systems},
};

mod cli;
use cli::Cli;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlacementOutput<'a> {
    frame_number: u64,
    shirt: &'a str,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();

    debug!("Started; args: {:?}", cli);

    let config = load_config_from_file(&cli.config_path)?;
    let shirts_dir = cli
        .shirts_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.shirts_dir));
    let shirt_names = load_shirts(&shirts_dir)?.keys().cloned().collect();

    let systems = Systems::new(&config, shirt_names)?;
    let mut session = OverlaySession::new(systems, config.debug_overlay);
    let mapper = config.coordinate_mapper();

    let (frames_tx, frames_rx) = channel();
    let sensor = start_sensor(
        find_sensor(cli.recording.as_deref(), cli.fps, cli.looping),
        frames_tx,
    );
    if sensor.is_none() {
        warn!("No sensor running; nothing to do");
        return Ok(());
    }

    let (speech_tx, speech_rx) = channel();
    if !cli.no_voice {
        spawn_line_recognizer(BufReader::new(io::stdin()), speech_tx);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    loop {
        while let Ok(event) = speech_rx.try_recv() {
            session.handle_recognition(event);
        }

        match frames_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(frame) => {
                if let Some(placement) = session.process_frame(&frame, &mapper) {
                    write_placement(
                        &mut out,
                        frame.frame_number,
                        session.wardrobe().current_name(),
                        &placement,
                    )?;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    info!(
        "Recording finished after {} frames",
        session.frames_processed()
    );
    Ok(())
}

fn write_placement(
    out: &mut impl Write,
    frame_number: u64,
    shirt: &str,
    placement: &Placement,
) -> Result<()> {
    let (left, top, width, height) = placement.rect();
    let line = serde_json::to_string(&PlacementOutput {
        frame_number,
        shirt,
        left,
        top,
        width,
        height,
    })?;
    writeln!(out, "{}", line)?;
    Ok(())
}
