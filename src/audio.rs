//! Audio feedback cues
//!
//! Maps session events to the sound cues the game plays. Synthesis is someone else's
//! job: an [`AudioSink`] receives a [`CuePlayback`] and may fail, and
//! [`AudioFeedback`] logs and drops those failures so they never reach the game.

use crate::core::LetterVerdict;
use crate::session::{SessionEvent, SessionObserver};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use thiserror::Error;

/// Notes a keypress picks from at random
const KEYPRESS_SCALE: &[&str] = &["D5", "E5", "F#5", "A5", "B5"];

/// Something worth a sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Keypress,
    Backspace,
    Submit,
    /// Rejected input (incomplete or invalid word)
    Error,
    Success,
    Failure,
    ThemeChange,
    TileCorrect,
    TileIncorrect,
}

/// Instrument family a cue is voiced on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Voice {
    /// Clean FM tone
    Fm,
    /// Short percussive membrane
    Membrane,
    /// Metallic strike
    Metal,
    /// Sine pad chord
    PolySine,
    /// Dissonant AM chord
    PolyAm,
    /// Atmospheric FM pad
    PolyFm,
}

/// Note length in musical terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValue {
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
}

impl fmt::Display for NoteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Quarter => "4n",
            Self::Eighth => "8n",
            Self::Sixteenth => "16n",
            Self::ThirtySecond => "32n",
        };
        f.write_str(text)
    }
}

impl AudioCue {
    #[must_use]
    pub const fn voice(self) -> Voice {
        match self {
            Self::Keypress => Voice::Fm,
            Self::Backspace | Self::TileIncorrect => Voice::Membrane,
            Self::Submit => Voice::Metal,
            Self::Success | Self::TileCorrect => Voice::PolySine,
            Self::Error | Self::Failure => Voice::PolyAm,
            Self::ThemeChange => Voice::PolyFm,
        }
    }

    /// Notes sounded together for this cue
    ///
    /// For `Keypress` this is the whole scale; one note is picked per press.
    #[must_use]
    pub const fn notes(self) -> &'static [&'static str] {
        match self {
            Self::Keypress => KEYPRESS_SCALE,
            Self::Backspace | Self::TileIncorrect => &["D3"],
            Self::Submit => &["A4"],
            Self::Error => &["D3", "Ab3"],
            Self::Success => &["D4", "F#4", "A4", "C#5"],
            Self::Failure => &["C3", "Eb3", "Gb3"],
            Self::ThemeChange => &["D3", "F#3", "A3", "C#4", "E4"],
            Self::TileCorrect => &["A5"],
        }
    }

    #[must_use]
    pub const fn duration(self) -> NoteValue {
        match self {
            Self::Keypress | Self::Backspace | Self::TileCorrect | Self::TileIncorrect => {
                NoteValue::ThirtySecond
            }
            Self::Submit | Self::Success => NoteValue::Eighth,
            Self::Error | Self::Failure => NoteValue::Sixteenth,
            Self::ThemeChange => NoteValue::Quarter,
        }
    }

    /// Resolve into something a sink can play
    pub fn playback<R: Rng + ?Sized>(self, rng: &mut R) -> CuePlayback {
        let notes = match self {
            Self::Keypress => KEYPRESS_SCALE
                .choose(rng)
                .map_or_else(Vec::new, |&note| vec![note]),
            other => other.notes().to_vec(),
        };
        CuePlayback {
            cue: self,
            voice: self.voice(),
            notes,
            duration: self.duration(),
        }
    }

    /// Cue for a session event
    #[must_use]
    pub fn from_event(event: &SessionEvent) -> Self {
        match event {
            SessionEvent::LetterEntered { .. } => Self::Keypress,
            SessionEvent::LetterDeleted { .. } => Self::Backspace,
            SessionEvent::GuessSubmitted(_) => Self::Submit,
            SessionEvent::TileRevealed {
                verdict: LetterVerdict::Correct,
                ..
            } => Self::TileCorrect,
            SessionEvent::TileRevealed { .. } => Self::TileIncorrect,
            SessionEvent::GuessRejected(_) => Self::Error,
            SessionEvent::GameWon { .. } => Self::Success,
            SessionEvent::GameLost { .. } => Self::Failure,
        }
    }
}

/// A cue resolved to concrete notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuePlayback {
    pub cue: AudioCue,
    pub voice: Voice,
    pub notes: Vec<&'static str>,
    pub duration: NoteValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("Audio output unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to play {cue:?}: {message}")]
    Playback { cue: AudioCue, message: String },
}

/// Sound backend
pub trait AudioSink {
    /// Play a cue
    ///
    /// # Errors
    /// Backend-specific; callers treat every error as non-fatal.
    fn play(&mut self, playback: &CuePlayback) -> Result<(), AudioError>;
}

/// Sink that only logs what would have played
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, playback: &CuePlayback) -> Result<(), AudioError> {
        log::debug!(
            "audio: {:?} on {:?} [{}] {}",
            playback.cue,
            playback.voice,
            playback.notes.join(" "),
            playback.duration
        );
        Ok(())
    }
}

/// Session observer that turns events into sounds
#[derive(Debug)]
pub struct AudioFeedback<S> {
    sink: S,
}

impl<S: AudioSink> AudioFeedback<S> {
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Play a cue directly (e.g. theme changes, which are not session events)
    ///
    /// Failures are logged and dropped.
    pub fn play(&mut self, cue: AudioCue) {
        let playback = cue.playback(&mut rand::rng());
        if let Err(err) = self.sink.play(&playback) {
            log::warn!("Error playing {cue:?} sound: {err}");
        }
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: AudioSink> SessionObserver for AudioFeedback<S> {
    fn on_event(&mut self, event: &SessionEvent) {
        self.play(AudioCue::from_event(event));
    }
}
