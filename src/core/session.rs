//! Guess lifecycle
//!
//! Tracks the 0/1/2 selected tokens of the current guess, the timeout that
//! aborts an incomplete pair, and the deferred hides that flip mismatched or
//! abandoned tokens face down again. All timers are millisecond countdown
//! fields advanced by `tick`; cancellation is clearing the field.

use arrayvec::ArrayVec;

use crate::core::deck::TokenDeck;
use crate::types::{TokenId, ABORT_HIDE_DELAY_MS, GUESS_GRACE_MS};

/// Result of offering a token to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Token already matched, already peeking, unknown, or two picked.
    Rejected,
    /// First token of a new couple.
    FirstPick(TokenId),
    /// Second token completed the couple and it matched.
    Matched(TokenId, TokenId),
    /// Second token completed the couple and it did not match.
    Mismatched(TokenId, TokenId),
}

/// Deferred effects fired by `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// An incomplete couple ran out of time and was abandoned.
    TimedOut(TokenId),
    /// A token was flipped face down again.
    Hidden(TokenId),
}

#[derive(Debug, Clone, Copy)]
struct PendingHide {
    id: TokenId,
    delay_ms: u32,
}

#[derive(Debug, Default)]
pub struct GuessSession {
    picks: ArrayVec<TokenId, 2>,
    /// Armed while exactly one token is picked.
    wait_ms: Option<u32>,
    pending_hides: Vec<PendingHide>,
}

impl GuessSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn picks(&self) -> &[TokenId] {
        &self.picks
    }

    /// Offers a token. On the first pick a timeout of the guess window plus
    /// grace is armed; the second pick disarms it synchronously and resolves
    /// the couple on the spot.
    pub fn select(
        &mut self,
        deck: &mut TokenDeck,
        id: TokenId,
        guess_window_ms: u32,
    ) -> SelectOutcome {
        if self.picks.is_full() {
            return SelectOutcome::Rejected;
        }
        let accepted = match deck.token_mut(id) {
            Some(token) if !token.matched && !token.peeking => {
                token.peeking = true;
                token.revealed = true;
                true
            }
            _ => false,
        };
        if !accepted {
            return SelectOutcome::Rejected;
        }
        self.picks.push(id);

        if self.picks.len() == 1 {
            self.wait_ms = Some(guess_window_ms + GUESS_GRACE_MS);
            return SelectOutcome::FirstPick(id);
        }

        // Couple complete. The armed timeout must never fire for it.
        self.wait_ms = None;
        let (first, second) = (self.picks[0], self.picks[1]);
        self.picks.clear();

        if deck.matches(first, second) {
            for id in [first, second] {
                if let Some(token) = deck.token_mut(id) {
                    token.matched = true;
                    token.peeking = false;
                }
            }
            SelectOutcome::Matched(first, second)
        } else {
            for id in [first, second] {
                if let Some(token) = deck.token_mut(id) {
                    token.peeking = false;
                }
                self.pending_hides.push(PendingHide {
                    id,
                    delay_ms: guess_window_ms,
                });
            }
            SelectOutcome::Mismatched(first, second)
        }
    }

    /// Advances the deferred hides and the wait timeout. `terminal` suppresses
    /// hides that would fire after the round ended.
    pub fn tick(&mut self, deck: &mut TokenDeck, elapsed_ms: u32, terminal: bool) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        let mut remaining = Vec::with_capacity(self.pending_hides.len());
        for mut hide in self.pending_hides.drain(..) {
            hide.delay_ms = hide.delay_ms.saturating_sub(elapsed_ms);
            if hide.delay_ms > 0 {
                remaining.push(hide);
            } else if let Some(event) = fire_hide(deck, hide.id, terminal) {
                events.push(event);
            }
        }
        self.pending_hides = remaining;

        if let Some(wait) = self.wait_ms {
            if elapsed_ms < wait {
                self.wait_ms = Some(wait - elapsed_ms);
            } else {
                // The hide only absorbs the part of this tick past the timeout.
                let overshoot = elapsed_ms - wait;
                self.wait_ms = None;
                // Exactly one pick by construction.
                if let Some(&id) = self.picks.first() {
                    if let Some(token) = deck.token_mut(id) {
                        token.peeking = false;
                    }
                    events.push(SessionEvent::TimedOut(id));
                    let delay_ms = ABORT_HIDE_DELAY_MS.saturating_sub(overshoot);
                    if delay_ms > 0 {
                        self.pending_hides.push(PendingHide { id, delay_ms });
                    } else if let Some(event) = fire_hide(deck, id, terminal) {
                        events.push(event);
                    }
                }
                self.picks.clear();
            }
        }

        events
    }

    /// Drops the current couple and every outstanding timer. Picked tokens
    /// stop peeking but stay revealed.
    pub fn cancel(&mut self, deck: &mut TokenDeck) {
        for &id in &self.picks {
            if let Some(token) = deck.token_mut(id) {
                token.peeking = false;
            }
        }
        self.picks.clear();
        self.wait_ms = None;
        self.pending_hides.clear();
    }
}

/// A due hide is a no-op once the round ended or the token was resolved
/// while it was pending.
fn fire_hide(deck: &mut TokenDeck, id: TokenId, terminal: bool) -> Option<SessionEvent> {
    if terminal {
        return None;
    }
    let token = deck.token_mut(id)?;
    if token.matched || token.peeking {
        return None;
    }
    token.revealed = false;
    Some(SessionEvent::Hidden(id))
}
