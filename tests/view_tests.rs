//! Board view rendering tests

use tui_pairs::core::{NumberSource, Round, RoundConfig};
use tui_pairs::term::{BoardView, FrameBuffer, Viewport};

fn round(pair_count: usize) -> Round {
    let config = RoundConfig {
        pair_count,
        ..RoundConfig::default()
    };
    let mut round = Round::new(config, Box::new(NumberSource::new(1))).unwrap();
    round.start();
    round
}

fn frame_text(fb: &FrameBuffer) -> String {
    let mut out = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            out.push(fb.get(x, y).unwrap().ch);
        }
        out.push('\n');
    }
    out
}

#[test]
fn render_fills_the_viewport() {
    let round = round(8);
    let vp = Viewport::new(80, 24);
    let fb = BoardView::render(&round, vp, 0);
    assert_eq!(fb.width(), 80);
    assert_eq!(fb.height(), 24);
}

#[test]
fn face_down_cards_show_a_placeholder() {
    let round = round(8);
    let fb = BoardView::render(&round, Viewport::new(80, 24), 0);
    let text = frame_text(&fb);
    assert_eq!(text.matches('?').count(), 16);
}

#[test]
fn hud_shows_score_and_timer() {
    let round = round(8);
    let fb = BoardView::render(&round, Viewport::new(80, 24), 0);
    let text = frame_text(&fb);
    assert!(text.contains("pairs  0/8"));
    assert!(text.contains("60s"));
    assert!(text.contains("elapsed 00:00"));
}

#[test]
fn revealed_card_shows_its_content() {
    let mut round = round(8);
    round.handle_select(0);
    let content = round.deck().token(0).unwrap().content.clone();
    let fb = BoardView::render(&round, Viewport::new(80, 24), 0);
    assert!(frame_text(&fb).contains(&content));
}

#[test]
fn terminal_round_draws_the_overlay() {
    let mut round = round(2);
    round.tick(60_000);
    let fb = BoardView::render(&round, Viewport::new(80, 24), 0);
    let text = frame_text(&fb);
    assert!(text.contains("TIME OVER"));
    assert!(text.contains("R: new round"));
}

#[test]
fn hit_test_matches_rendered_layout() {
    let round = round(8);
    let vp = Viewport::new(80, 24);
    let layout = BoardView::layout(&round, vp);
    for id in 0..round.deck().len() {
        let (x, y, _, _) = layout.card_rect(id);
        assert_eq!(layout.hit_test(x, y), Some(id));
    }
    assert_eq!(layout.hit_test(0, 0), None);
}

#[test]
fn small_viewport_still_renders() {
    let round = round(5);
    let fb = BoardView::render(&round, Viewport::new(40, 14), 0);
    assert_eq!(frame_text(&fb).matches('?').count(), 10);
}
