//! Round controller
//!
//! Owns the deck, the countdown and the guess session, derives timing rules
//! from the difficulty factor, tracks the score and the terminal state, and
//! queues events for the presentation layer.

use std::collections::VecDeque;
use std::fmt;

use crate::core::content::{ContentError, ContentSource};
use crate::core::countdown::Countdown;
use crate::core::deck::TokenDeck;
use crate::core::rng::SimpleRng;
use crate::core::session::{GuessSession, SelectOutcome, SessionEvent};
use crate::types::{
    GameEvent, Outcome, SoundCue, TokenId, BASE_GUESS_WINDOW_MS, BASE_TOUR_SECS,
    LOW_TIME_WARN_SECS,
};

/// Timing rules derived from the difficulty factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub guess_window_ms: u32,
    pub tour_secs: u32,
}

impl Rules {
    /// Both windows shrink as difficulty grows. Factors below 1 would make
    /// the game easier than the baseline and are rejected up front, as are
    /// factors so large the tour floors to zero seconds.
    pub fn for_difficulty(difficulty: f64) -> Result<Self, SetupError> {
        if !difficulty.is_finite() || difficulty < 1.0 {
            return Err(SetupError::InvalidDifficulty(difficulty));
        }
        let rules = Self {
            guess_window_ms: (f64::from(BASE_GUESS_WINDOW_MS) / difficulty) as u32,
            tour_secs: (f64::from(BASE_TOUR_SECS) / difficulty) as u32,
        };
        // A zero-second tour would never arm the countdown and the round
        // could only end in a win.
        if rules.tour_secs == 0 {
            return Err(SetupError::InvalidDifficulty(difficulty));
        }
        Ok(rules)
    }
}

/// Failures surfaced before any timing starts.
#[derive(Debug)]
pub enum SetupError {
    InvalidDifficulty(f64),
    NoPairs,
    Content(ContentError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::InvalidDifficulty(d) => {
                write!(f, "difficulty must be a finite number from 1 to 60, got {}", d)
            }
            SetupError::NoPairs => write!(f, "a round needs at least one pair"),
            SetupError::Content(e) => write!(f, "content setup failed: {}", e),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Content(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContentError> for SetupError {
    fn from(e: ContentError) -> Self {
        SetupError::Content(e)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RoundConfig {
    pub difficulty: f64,
    pub pair_count: usize,
    pub seed: u32,
    pub sound_enabled: bool,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            difficulty: 1.0,
            pair_count: 8,
            seed: 1,
            sound_enabled: true,
        }
    }
}

pub struct Round {
    deck: TokenDeck,
    countdown: Countdown,
    session: GuessSession,
    rules: Rules,
    score: u32,
    win: bool,
    time_over: bool,
    sound_enabled: bool,
    started: bool,
    events: VecDeque<GameEvent>,
}

impl Round {
    pub fn new(config: RoundConfig, source: Box<dyn ContentSource>) -> Result<Self, SetupError> {
        let rules = Rules::for_difficulty(config.difficulty)?;
        if config.pair_count == 0 {
            return Err(SetupError::NoPairs);
        }
        let mut rng = SimpleRng::new(config.seed);
        let deck = TokenDeck::generate(source, config.pair_count, &mut rng)?;
        Ok(Self {
            deck,
            countdown: Countdown::new(),
            session: GuessSession::new(),
            rules,
            score: 0,
            win: false,
            time_over: false,
            sound_enabled: config.sound_enabled,
            started: false,
            events: VecDeque::new(),
        })
    }

    /// Arms the countdown for the first tour. Idempotent.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.countdown.start(self.rules.tour_secs);
        self.push_tick_event();
    }

    /// The single play input. Invalid selections are silently ignored.
    pub fn handle_select(&mut self, id: TokenId) {
        if !self.started || self.is_terminal() {
            return;
        }
        match self
            .session
            .select(&mut self.deck, id, self.rules.guess_window_ms)
        {
            SelectOutcome::Rejected => {}
            SelectOutcome::FirstPick(id) => {
                self.events.push_back(GameEvent::TokenChanged(id));
            }
            SelectOutcome::Matched(a, b) => {
                self.events.push_back(GameEvent::TokenChanged(a));
                self.events.push_back(GameEvent::TokenChanged(b));
                self.score += 1;
                self.events.push_back(GameEvent::ScoreChanged(self.score));
                self.push_sound(SoundCue::Found);
                // A fresh tour for every pair found.
                self.countdown.stop();
                self.countdown.start(self.rules.tour_secs);
                self.push_tick_event();
                if self.deck.is_complete() {
                    self.finish(Outcome::Win);
                }
            }
            SelectOutcome::Mismatched(a, b) => {
                self.events.push_back(GameEvent::TokenChanged(a));
                self.events.push_back(GameEvent::TokenChanged(b));
                self.push_sound(SoundCue::Fail);
            }
        }
    }

    /// Advances the countdown, then the guess timers. No-op once terminal.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.started || self.is_terminal() {
            return;
        }
        let crossings = self.countdown.tick(elapsed_ms);
        if crossings > 0 {
            self.push_tick_event();
            let remaining = self.countdown.remaining_seconds();
            if remaining > 0 && remaining < LOW_TIME_WARN_SECS {
                self.push_sound(SoundCue::Bip);
            }
        }
        if self.countdown.finished() {
            self.finish(Outcome::TimeOver);
            return;
        }
        let terminal = self.is_terminal();
        for event in self.session.tick(&mut self.deck, elapsed_ms, terminal) {
            match event {
                SessionEvent::TimedOut(id) | SessionEvent::Hidden(id) => {
                    self.events.push_back(GameEvent::TokenChanged(id));
                }
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        if self.is_terminal() {
            return;
        }
        match outcome {
            Outcome::Win => self.win = true,
            Outcome::TimeOver => self.time_over = true,
        }
        self.countdown.stop();
        self.session.cancel(&mut self.deck);
        self.deck.reveal_all();
        self.events.push_back(GameEvent::RoundEnded(outcome));
    }

    fn push_tick_event(&mut self) {
        self.events.push_back(GameEvent::Tick {
            remaining_secs: self.countdown.remaining_seconds(),
            split: self.countdown.elapsed_split(),
        });
    }

    fn push_sound(&mut self, cue: SoundCue) {
        if self.sound_enabled {
            self.events.push_back(GameEvent::Sound(cue));
        }
    }

    pub fn take_event(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_terminal(&self) -> bool {
        self.win || self.time_over
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.win {
            Some(Outcome::Win)
        } else if self.time_over {
            Some(Outcome::TimeOver)
        } else {
            None
        }
    }

    pub fn deck(&self) -> &TokenDeck {
        &self.deck
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining_seconds()
    }

    pub fn elapsed_split(&self) -> String {
        self.countdown.elapsed_split()
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Presentation passthrough, no effect on play state.
    pub fn set_muted(&mut self, muted: bool) {
        self.sound_enabled = !muted;
    }
}
