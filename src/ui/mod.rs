//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`render`]: Pane layout and drawing
//! - [`style`]: Preview colors for style codes

pub mod style;

mod overlays;
mod render;
mod status;

pub use render::{preview_caret_position, preview_lines, printable_markdown, render, split_rows};

/// Most rows the text input grows to before scrolling.
pub const INPUT_MAX_ROWS: u16 = 5;
/// Palette legend: one row per group plus borders.
pub const PALETTE_HEIGHT: u16 = 5;

#[cfg(test)]
mod tests;
