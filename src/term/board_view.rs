//! Pure mapping of a round to a framebuffer.
//!
//! Owns the card grid geometry so mouse clicks can be hit-tested against the
//! same layout that was drawn.

use crate::core::round::Round;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Outcome, TokenId, LOW_TIME_WARN_SECS};

const CARD_W: u16 = 8;
const CARD_H: u16 = 3;
const GAP: u16 = 1;
/// Rows reserved above the grid for the HUD.
const HUD_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Grid geometry for a deck of `n` cards inside a viewport.
#[derive(Debug, Clone, Copy)]
pub struct BoardLayout {
    cols: u16,
    rows: u16,
    origin_x: u16,
    origin_y: u16,
    card_count: usize,
}

impl BoardLayout {
    pub fn new(card_count: usize, viewport: Viewport) -> Self {
        // Near-square grid, wider than tall.
        let mut cols = 1u16;
        while (cols as usize) * (cols as usize) < card_count {
            cols += 1;
        }
        let rows = (card_count as u16 + cols - 1) / cols.max(1);

        let grid_w = cols * CARD_W + cols.saturating_sub(1) * GAP;
        let grid_h = rows * CARD_H + rows.saturating_sub(1) * GAP;
        let origin_x = viewport.width.saturating_sub(grid_w) / 2;
        let origin_y = HUD_ROWS + viewport.height.saturating_sub(HUD_ROWS + grid_h) / 2;

        Self {
            cols,
            rows,
            origin_x,
            origin_y,
            card_count,
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Top-left corner of card `id`, in framebuffer coordinates.
    pub fn card_rect(&self, id: TokenId) -> (u16, u16, u16, u16) {
        let col = (id as u16) % self.cols;
        let row = (id as u16) / self.cols;
        let x = self.origin_x + col * (CARD_W + GAP);
        let y = self.origin_y + row * (CARD_H + GAP);
        (x, y, CARD_W, CARD_H)
    }

    /// Maps a terminal cell back to the card drawn there.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<TokenId> {
        for id in 0..self.card_count {
            let (x, y, w, h) = self.card_rect(id);
            if column >= x && column < x + w && row >= y && row < y + h {
                return Some(id);
            }
        }
        None
    }
}

const FACE_DOWN: CellStyle = CellStyle::new(Rgb::new(90, 90, 110), Rgb::new(30, 30, 45));
const PEEKING: CellStyle = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(230, 210, 120));
const REVEALED: CellStyle = CellStyle::new(Rgb::new(210, 210, 210), Rgb::new(55, 55, 75));
const MATCHED: CellStyle = CellStyle::new(Rgb::new(20, 40, 20), Rgb::new(110, 200, 120));
const HUD: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const HUD_WARN: CellStyle = CellStyle::new(Rgb::new(240, 90, 80), Rgb::new(0, 0, 0));
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(250, 250, 250), Rgb::new(40, 40, 60));

pub struct BoardView;

impl BoardView {
    /// Renders the whole scene. `cursor` is the keyboard-selected card.
    pub fn render(round: &Round, viewport: Viewport, cursor: TokenId) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let layout = BoardLayout::new(round.deck().len(), viewport);

        Self::draw_hud(&mut fb, round);
        for (id, token) in round.deck().tokens().iter().enumerate() {
            let (x, y, w, h) = layout.card_rect(id);
            let style = if token.matched {
                MATCHED
            } else if token.peeking {
                PEEKING
            } else if token.revealed {
                REVEALED
            } else {
                FACE_DOWN
            };
            fb.fill_rect(x, y, w, h, ' ', style);
            let label = if token.revealed {
                token.content.as_str()
            } else {
                "?"
            };
            let lx = x + (w.saturating_sub(label.len() as u16)) / 2;
            fb.put_str(lx, y + h / 2, label, style);

            if id == cursor && !round.is_terminal() {
                let marker = style.bold();
                fb.put_char(x, y, '[', marker);
                fb.put_char(x + w - 1, y, ']', marker);
            }
        }

        if let Some(outcome) = round.outcome() {
            Self::draw_overlay(&mut fb, round, outcome);
        }
        fb
    }

    pub fn layout(round: &Round, viewport: Viewport) -> BoardLayout {
        BoardLayout::new(round.deck().len(), viewport)
    }

    fn draw_hud(fb: &mut FrameBuffer, round: &Round) {
        let score = format!(
            "pairs {:>2}/{:<2}",
            round.score(),
            round.deck().pair_count()
        );
        fb.put_str(1, 0, &score, HUD.bold());

        let remaining = round.remaining_seconds();
        let timer_style = if remaining < LOW_TIME_WARN_SECS && !round.is_terminal() {
            HUD_WARN.bold()
        } else {
            HUD
        };
        let timer = format!("{:>3}s", remaining);
        let tx = fb.width().saturating_sub(timer.len() as u16 + 1);
        fb.put_str(tx, 0, &timer, timer_style);

        let split = format!("elapsed {}", round.elapsed_split());
        fb.put_str(1, 1, &split, HUD);

        let sound = if round.sound_enabled() {
            "sound on "
        } else {
            "sound off"
        };
        let sx = fb.width().saturating_sub(sound.len() as u16 + 1);
        fb.put_str(sx, 1, sound, HUD);
    }

    fn draw_overlay(fb: &mut FrameBuffer, round: &Round, outcome: Outcome) {
        let line1 = match outcome {
            Outcome::Win => "YOU WIN!".to_string(),
            Outcome::TimeOver => "TIME OVER".to_string(),
        };
        let line2 = format!("{} pairs in {}", round.score(), round.elapsed_split());
        let line3 = "R: new round   Q: quit";

        let w = (line3.len() as u16 + 4).max(line1.len() as u16 + 4);
        let h = 5;
        let x = fb.width().saturating_sub(w) / 2;
        let y = fb.height().saturating_sub(h) / 2;
        fb.fill_rect(x, y, w, h, ' ', OVERLAY);
        fb.put_str(x + (w - line1.len() as u16) / 2, y + 1, &line1, OVERLAY.bold());
        fb.put_str(x + (w - line2.len() as u16) / 2, y + 2, &line2, OVERLAY);
        fb.put_str(x + (w - line3.len() as u16) / 2, y + 3, line3, OVERLAY);
    }
}
