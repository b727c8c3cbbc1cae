//! Pure game logic. No I/O, no wall clock; everything is driven by
//! `tick(elapsed_ms)` and a seeded RNG so play is reproducible.

pub mod content;
pub mod countdown;
pub mod deck;
pub mod rng;
pub mod round;
pub mod session;

pub use content::{ColorSource, ContentError, ContentSource, NumberSource, WordSource};
pub use countdown::Countdown;
pub use deck::{Token, TokenDeck};
pub use rng::SimpleRng;
pub use round::{Round, RoundConfig, Rules, SetupError};
pub use session::{GuessSession, SelectOutcome, SessionEvent};
