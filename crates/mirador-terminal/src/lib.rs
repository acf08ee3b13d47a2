//! Terminal backend for Mirador.
//!
//! Bridges the pure `mirador_core` engines to a real terminal with
//! `crossterm`: a cell buffer, a differential renderer that emits only
//! dirty cells, painters for each widget kind, and the interactive
//! application loop that drives the carousel.

mod app;
mod buffer;
mod color;
mod draw;
mod error;
mod input;
mod layout;
mod render;
pub mod widgets;

pub use app::App;
pub use buffer::{Cell, CellBuffer};
pub use color::{to_crossterm, ColorMode};
pub use draw::draw_dashboard;
pub use error::TuiError;
pub use input::{action_for, Action};
pub use layout::{span_rect, tracks, Rect};
pub use render::DiffRenderer;
