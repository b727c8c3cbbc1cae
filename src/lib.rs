//! tui-pairs: a timed pair-matching memory game for the terminal.
//!
//! The `core` module is pure and deterministic; `term` renders a round into
//! a framebuffer and flushes it with crossterm; `input` maps terminal events
//! to UI intents. The binary wires them together in a fixed-timestep loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
