use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};

use crate::skeleton::SkeletonFrame;

/// A source of skeleton frames. Frames are delivered on a background thread.
pub trait SkeletonSensor {
    fn name(&self) -> &str;

    fn start(&mut self, frames: Sender<SkeletonFrame>) -> Result<()>;

    fn stop(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingFormat {
    /// One JSON-encoded frame per line
    JsonLines,
    /// A single MessagePack array of frames
    MessagePack,
}

impl RecordingFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") | Some("jsonl") => Some(RecordingFormat::JsonLines),
            Some("msgpack") | Some("mp") => Some(RecordingFormat::MessagePack),
            _ => None,
        }
    }
}

pub fn parse_recording(bytes: &[u8], format: RecordingFormat) -> Result<Vec<SkeletonFrame>> {
    match format {
        RecordingFormat::JsonLines => {
            let text = std::str::from_utf8(bytes)?;
            text.lines()
                .enumerate()
                .filter(|(_i, line)| !line.trim().is_empty())
                .map(|(i, line)| {
                    serde_json::from_str::<SkeletonFrame>(line)
                        .with_context(|| format!("bad frame on line {}", i + 1))
                })
                .collect()
        }
        RecordingFormat::MessagePack => Ok(rmp_serde::from_slice::<Vec<SkeletonFrame>>(bytes)?),
    }
}

/// Plays back previously recorded skeleton frames at a fixed rate, standing in for a
/// live depth sensor.
pub struct RecordedSensor {
    path: PathBuf,
    format: RecordingFormat,
    frame_interval: Duration,
    looping: bool,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl RecordedSensor {
    pub fn new(path: &Path, fps: f32, looping: bool) -> Result<Self> {
        let format = RecordingFormat::from_path(path)
            .ok_or_else(|| anyhow!("unknown recording format for {:?}", path))?;
        if !(fps.is_finite() && fps > 0.) {
            return Err(anyhow!("frame rate must be above 0, got {}", fps));
        }
        let frame_interval = Duration::try_from_secs_f32(1. / fps)
            .map_err(|e| anyhow!("unusable frame rate {}: {}", fps, e))?;
        Ok(RecordedSensor {
            path: PathBuf::from(path),
            format,
            frame_interval,
            looping,
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl SkeletonSensor for RecordedSensor {
    fn name(&self) -> &str {
        self.path.to_str().unwrap_or("recording")
    }

    fn start(&mut self, frames: Sender<SkeletonFrame>) -> Result<()> {
        let bytes = fs::read(&self.path)
            .with_context(|| format!("failed to read recording {:?}", self.path))?;
        let recording = parse_recording(&bytes, self.format)?;
        info!(
            "Loaded {} frames from {:?}; playing back at {:.1} fps",
            recording.len(),
            self.path,
            1. / self.frame_interval.as_secs_f32()
        );

        let running = self.running.clone();
        running.store(true, Ordering::SeqCst);
        let interval = self.frame_interval;
        let looping = self.looping;

        self.handle = Some(thread::spawn(move || {
            'playback: loop {
                for frame in recording.iter() {
                    if !running.load(Ordering::SeqCst) {
                        break 'playback;
                    }
                    if frames.send(frame.clone()).is_err() {
                        debug!("Frame receiver dropped; stop playback");
                        break 'playback;
                    }
                    thread::sleep(interval);
                }
                if !looping || recording.is_empty() {
                    break;
                }
            }
            running.store(false, Ordering::SeqCst);
            debug!("Playback finished");
        }));
        Ok(())
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Playback thread panicked");
            }
        }
    }
}

impl Drop for RecordedSensor {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Look for a usable sensor. `None` means the overlay is simply disabled.
pub fn find_sensor(recording: Option<&Path>, fps: f32, looping: bool) -> Option<RecordedSensor> {
    let path = match recording {
        Some(path) => path,
        None => {
            warn!("No skeleton recording given; overlay disabled");
            return None;
        }
    };
    if !path.exists() {
        warn!("Skeleton recording {:?} not found; overlay disabled", path);
        return None;
    }
    match RecordedSensor::new(path, fps, looping) {
        Ok(sensor) => Some(sensor),
        Err(e) => {
            warn!("Cannot use {:?}: {}; overlay disabled", path, e);
            None
        }
    }
}

/// Start the sensor if there is one; a sensor that fails to start is dropped.
pub fn start_sensor<S: SkeletonSensor>(
    sensor: Option<S>,
    frames: Sender<SkeletonFrame>,
) -> Option<S> {
    let mut sensor = sensor?;
    match sensor.start(frames) {
        Ok(()) => {
            info!("Sensor \"{}\" started", sensor.name());
            Some(sensor)
        }
        Err(e) => {
            warn!("Sensor \"{}\" failed to start: {:#}", sensor.name(), e);
            None
        }
    }
}
