//! Widget painters: pure functions from render instructions to cells.

pub mod border;
pub mod digits;
pub mod progress;
pub mod sparkline;
pub mod text;

pub use border::draw_border;
pub use digits::draw_digits;
pub use progress::draw_progress;
pub use sparkline::draw_sparkline;
pub use text::{draw_text_centered, fit};
