//! Terminal presentation: framebuffer, renderer, and the board view.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use board_view::{BoardLayout, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
