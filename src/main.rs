//! Binary entry point: argument parsing, terminal setup, fixed-timestep loop.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use tui_pairs::core::{
    ColorSource, ContentSource, NumberSource, Round, RoundConfig, WordSource,
};
use tui_pairs::input::{map_key, map_mouse, UiEvent};
use tui_pairs::term::{BoardView, TerminalRenderer, Viewport};
use tui_pairs::types::{GameEvent, TICK_MS};

struct Options {
    difficulty: f64,
    seed: Option<u32>,
}

fn parse_args() -> Result<Options> {
    let mut args = std::env::args().skip(1);
    let mut options = Options {
        difficulty: 1.0,
        seed: None,
    };
    if let Some(arg) = args.next() {
        if arg == "-h" || arg == "--help" {
            println!("usage: tui-pairs [difficulty 1-60] [seed]");
            std::process::exit(0);
        }
        options.difficulty = arg
            .parse()
            .with_context(|| format!("invalid difficulty {:?}", arg))?;
    }
    if let Some(arg) = args.next() {
        options.seed = Some(
            arg.parse()
                .with_context(|| format!("invalid seed {:?}", arg))?,
        );
    }
    if args.next().is_some() {
        bail!("too many arguments, usage: tui-pairs [difficulty] [seed]");
    }
    Ok(options)
}

fn random_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

/// Smaller terminals get a lighter deck.
fn pair_count_for_viewport(viewport: Viewport) -> usize {
    if viewport.width < 70 || viewport.height < 22 {
        5
    } else {
        8
    }
}

/// Rotates through the content kinds so consecutive rounds feel different.
fn source_for_seed(seed: u32) -> Box<dyn ContentSource> {
    match seed % 3 {
        0 => Box::new(NumberSource::new(seed)),
        1 => Box::new(WordSource::new(seed)),
        _ => Box::new(ColorSource::new(seed)),
    }
}

fn new_round(difficulty: f64, seed: u32, sound_enabled: bool, viewport: Viewport) -> Result<Round> {
    let config = RoundConfig {
        difficulty,
        pair_count: pair_count_for_viewport(viewport),
        seed,
        sound_enabled,
    };
    let mut round = Round::new(config, source_for_seed(seed))?;
    round.start();
    Ok(round)
}

fn main() -> Result<()> {
    let options = parse_args()?;

    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;
    let result = run(&mut renderer, &options);
    let _ = renderer.exit();
    result
}

fn run(renderer: &mut TerminalRenderer, options: &Options) -> Result<()> {
    let (width, height) = terminal::size()?;
    let mut viewport = Viewport::new(width, height);

    let mut seed = options.seed.unwrap_or_else(random_seed);
    let mut sound_enabled = true;
    let mut round = new_round(options.difficulty, seed, sound_enabled, viewport)?;
    let mut cursor: usize = 0;
    let mut dirty = true;

    let tick = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(ui) = map_key(key) {
                        match ui {
                            UiEvent::Quit => return Ok(()),
                            UiEvent::NewRound => {
                                seed = match options.seed {
                                    Some(_) => seed.wrapping_add(1),
                                    None => random_seed(),
                                };
                                sound_enabled = round.sound_enabled();
                                round =
                                    new_round(options.difficulty, seed, sound_enabled, viewport)?;
                                cursor = 0;
                                dirty = true;
                            }
                            UiEvent::ToggleSound => {
                                sound_enabled = !round.sound_enabled();
                                round.set_muted(!sound_enabled);
                                dirty = true;
                            }
                            UiEvent::Activate => {
                                round.handle_select(cursor);
                            }
                            UiEvent::ClickAt { .. } => {}
                            direction => {
                                cursor = move_cursor(&round, viewport, cursor, direction);
                                dirty = true;
                            }
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(UiEvent::ClickAt { column, row }) = map_mouse(mouse) {
                        let layout = BoardView::layout(&round, viewport);
                        if let Some(id) = layout.hit_test(column, row) {
                            cursor = id;
                            round.handle_select(id);
                            dirty = true;
                        }
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    dirty = true;
                }
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            round.tick(elapsed.as_millis() as u32);
        }

        while let Some(game_event) = round.take_event() {
            if let GameEvent::Sound(_) = game_event {
                renderer.bell()?;
            }
            dirty = true;
        }

        if dirty {
            let frame = BoardView::render(&round, viewport, cursor);
            renderer.draw(&frame)?;
            dirty = false;
        }
    }
}

fn move_cursor(round: &Round, viewport: Viewport, cursor: usize, direction: UiEvent) -> usize {
    let layout = BoardView::layout(round, viewport);
    let cols = layout.cols() as usize;
    let count = round.deck().len();
    let next = match direction {
        UiEvent::CursorLeft => cursor.checked_sub(1),
        UiEvent::CursorRight => Some(cursor + 1),
        UiEvent::CursorUp => cursor.checked_sub(cols),
        UiEvent::CursorDown => Some(cursor + cols),
        _ => Some(cursor),
    };
    match next {
        Some(n) if n < count => n,
        _ => cursor,
    }
}
