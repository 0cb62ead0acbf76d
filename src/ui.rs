//! Rendering helpers for the dashboard.
//!
//! Everything here is a pure function of its inputs and paints straight into
//! a `ratatui` [`Buffer`](ratatui::buffer::Buffer); the runtime decides when
//! and under which lock a frame is presented.

mod display;
mod progress;
mod time;

pub use display::*;
pub use progress::*;
pub use time::*;
