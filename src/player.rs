//! Talking to the external media player.
//!
//! The player is driven purely through shell commands: one prints the
//! current track as a delimiter-separated record, two others skip tracks.

mod capture;
mod client;
mod record;
mod types;

pub use capture::*;
pub use client::*;
pub use record::*;
pub use types::*;

#[cfg(test)]
mod tests;
