//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Fixed timestep interval for the game loop (milliseconds).
pub const TICK_MS: u32 = 16;

/// Baseline guess window at difficulty 1 (milliseconds).
pub const BASE_GUESS_WINDOW_MS: u32 = 1000;

/// Baseline tour duration at difficulty 1 (seconds).
pub const BASE_TOUR_SECS: u32 = 60;

/// Grace added to the guess window before an incomplete pair is aborted.
pub const GUESS_GRACE_MS: u32 = 200;

/// Delay before an aborted pick is hidden again.
pub const ABORT_HIDE_DELAY_MS: u32 = 200;

/// The countdown warns once it drops below this many remaining seconds.
pub const LOW_TIME_WARN_SECS: u32 = 10;

/// Identity of a token within its deck (stable for the whole round).
pub type TokenId = usize;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    TimeOver,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::TimeOver => "time over",
        }
    }
}

/// Sound cues the presentation layer may play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// A pair was found.
    Found,
    /// A guess did not match.
    Fail,
    /// Per-second warning while the countdown runs low.
    Bip,
}

/// Notifications emitted by the round for presentation to consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The score changed to the given value.
    ScoreChanged(u32),
    /// A token's visible state (peeking/revealed/matched) changed.
    TokenChanged(TokenId),
    /// A whole-second countdown boundary was crossed.
    Tick {
        remaining_secs: u32,
        split: String,
    },
    /// A sound cue, already gated on the round's sound flag.
    Sound(SoundCue),
    /// The round reached a terminal state. Emitted exactly once.
    RoundEnded(Outcome),
}
