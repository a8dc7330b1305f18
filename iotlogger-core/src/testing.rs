//! Mock capabilities for unit tests

use std::collections::VecDeque;

use crate::registry::ViewId;
use crate::traits::{
    Board, BrightnessSink, CapabilityError, FeedId, FeedUploader, LightSource, Peripherals,
    SensorError, SoundCue, SoundSink, Surface, TemperatureSensor, TextRenderer, TouchSample,
    TouchSource, UploadError, WrappedLine, WrappedLines,
};

pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Currently shown views
    pub shown: Vec<ViewId>,
    pub mounts: usize,
    pub unmounts: usize,
}

impl Surface for RecordingSurface {
    fn mount(&mut self, view: ViewId) {
        self.mounts += 1;
        self.shown.push(view);
    }

    fn unmount(&mut self, view: ViewId) {
        self.unmounts += 1;
        self.shown.retain(|v| *v != view);
    }
}

#[derive(Debug, Default)]
pub struct RecordingBrightness {
    pub writes: Vec<f32>,
}

impl BrightnessSink for RecordingBrightness {
    fn set(&mut self, level: f32) {
        self.writes.push(level);
    }
}

#[derive(Debug, Default)]
pub struct RecordingSound {
    pub played: Vec<SoundCue>,
}

impl SoundSink for RecordingSound {
    fn play(&mut self, cue: SoundCue) -> Result<(), CapabilityError> {
        self.played.push(cue);
        Ok(())
    }
}

/// Replays queued samples, then reports no contact
#[derive(Debug, Default)]
pub struct ScriptedTouch {
    pub samples: VecDeque<TouchSample>,
}

impl TouchSource for ScriptedTouch {
    fn sample(&mut self) -> TouchSample {
        self.samples.pop_front().unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct FixedLight {
    pub level: u16,
}

impl LightSource for FixedLight {
    fn sample(&mut self) -> u16 {
        self.level
    }
}

#[derive(Debug)]
pub struct FixedTemperature {
    pub reading: Result<f32, SensorError>,
}

impl TemperatureSensor for FixedTemperature {
    fn read_celsius(&mut self) -> Result<f32, SensorError> {
        self.reading
    }
}

#[derive(Debug, Default)]
pub struct RecordingUploader {
    pub published: Vec<(FeedId, f32)>,
    pub offline: bool,
}

impl FeedUploader for RecordingUploader {
    fn publish(&mut self, feed: FeedId, value: f32) -> Result<(), UploadError> {
        if self.offline {
            return Err(UploadError::NotConnected);
        }
        self.published.push((feed, value));
        Ok(())
    }
}

/// Splits into fixed-width chunks
#[derive(Debug, Default)]
pub struct ChunkRenderer;

impl TextRenderer for ChunkRenderer {
    fn wrap(&self, text: &str, max_chars: usize) -> WrappedLines {
        let mut lines = WrappedLines::new();
        for segment in text.split('\n') {
            let chars: Vec<char> = segment.chars().collect();
            for chunk in chars.chunks(max_chars.max(1)) {
                let mut line = WrappedLine::new();
                for c in chunk {
                    let _ = line.push(*c);
                }
                let _ = lines.push(line);
            }
        }
        lines
    }
}

pub struct MockBoard;

impl Board for MockBoard {
    type Surface = RecordingSurface;
    type Touch = ScriptedTouch;
    type Light = FixedLight;
    type Brightness = RecordingBrightness;
    type Sound = RecordingSound;
    type Text = ChunkRenderer;
    type Temperature = FixedTemperature;
    type Uploader = RecordingUploader;
}

/// Every capability fitted
pub fn full_peripherals() -> Peripherals<MockBoard> {
    Peripherals {
        surface: Some(RecordingSurface::default()),
        touch: Some(ScriptedTouch::default()),
        light: Some(FixedLight { level: 10_000 }),
        brightness: Some(RecordingBrightness::default()),
        sound: Some(RecordingSound::default()),
        text: Some(ChunkRenderer),
        temperature: Some(FixedTemperature { reading: Ok(21.5) }),
        uploader: Some(RecordingUploader::default()),
    }
}
