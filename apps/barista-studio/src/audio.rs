//! # Audio
//!
//! Turns [`SoundCue`] tags into tones and hands them to an [`AudioSink`].
//! Playback is simulated: the default sink logs what would be played.
//!
//! ## Tone Table
//! ```text
//! ┌──────────┬──────────┬───────────┬──────┬──────────┐
//! │ cue      │ waveform │ frequency │ gain │ duration │
//! ├──────────┼──────────┼───────────┼──────┼──────────┤
//! │ click    │ sine     │ 800 Hz    │ 0.10 │ 100 ms   │
//! │ add      │ sine     │ 600 Hz    │ 0.20 │ 100 ms   │
//! │ remove   │ sine     │ 400 Hz    │ 0.20 │ 100 ms   │
//! │ error    │ square   │ 200 Hz    │ 0.30 │ 300 ms   │
//! │ select   │ sine     │ 700 Hz    │ 0.20 │ 100 ms   │
//! │ pour     │ sine     │ 300 Hz    │ 0.15 │ 100 ms   │
//! └──────────┴──────────┴───────────┴──────┴──────────┘
//! effective gain = gain × settings.volume
//! ```

use std::time::Duration;

use barista_core::SoundCue;
use serde::Serialize;
use tracing::info;

use crate::state::SoundSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Square,
}

/// A synthesized beep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tone {
    pub waveform: Waveform,
    pub frequency_hz: u32,
    pub gain: f32,
    pub duration: Duration,
}

impl Tone {
    /// Tone for a cue at full volume.
    pub fn for_cue(cue: SoundCue) -> Tone {
        let (waveform, frequency_hz, gain) = match cue {
            SoundCue::Click => (Waveform::Sine, 800, 0.1),
            SoundCue::Add => (Waveform::Sine, 600, 0.2),
            SoundCue::Remove => (Waveform::Sine, 400, 0.2),
            SoundCue::Error => (Waveform::Square, 200, 0.3),
            SoundCue::Select => (Waveform::Sine, 700, 0.2),
            SoundCue::Pour => (Waveform::Sine, 300, 0.15),
        };
        let duration = match cue {
            SoundCue::Error => Duration::from_millis(300),
            _ => Duration::from_millis(100),
        };

        Tone {
            waveform,
            frequency_hz,
            gain,
            duration,
        }
    }

    /// The same tone scaled by a playback volume.
    pub fn at_volume(self, volume: f32) -> Tone {
        Tone {
            gain: self.gain * volume,
            ..self
        }
    }
}

/// Destination for synthesized tones.
pub trait AudioSink: Send + Sync {
    fn emit(&self, cue: SoundCue, tone: &Tone);
}

/// Simulated output: logs each tone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn emit(&self, cue: SoundCue, tone: &Tone) {
        info!(
            cue = %cue,
            waveform = ?tone.waveform,
            frequency_hz = tone.frequency_hz,
            gain = tone.gain,
            duration_ms = tone.duration.as_millis() as u64,
            "Playing sound"
        );
    }
}

/// Plays cues according to the current sound settings.
#[derive(Debug)]
pub struct AudioPlayer<S: AudioSink = LogSink> {
    sink: S,
}

impl<S: AudioSink> AudioPlayer<S> {
    pub fn new(sink: S) -> Self {
        AudioPlayer { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Plays one cue. Returns the tone played, or `None` when muted.
    pub fn play(&self, cue: SoundCue, settings: &SoundSettings) -> Option<Tone> {
        if !settings.enabled {
            return None;
        }
        let tone = Tone::for_cue(cue).at_volume(settings.volume);
        self.sink.emit(cue, &tone);
        Some(tone)
    }

    /// Plays cues in order.
    pub fn play_all(&self, cues: &[SoundCue], settings: &SoundSettings) {
        for cue in cues {
            self.play(*cue, settings);
        }
    }
}
