// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. markup::StyleCode)
    clippy::module_name_repetitions
)]

//! # Discolor
//!
//! Tag text with Discord ANSI colors and export it as Discord markdown.
//!
//! The text being styled is a flat string with embedded markers
//! (`<span class='ansi-31'>red</span>`). Styling a selection wraps its first
//! occurrence in a marker; conversion rewrites markers into Discord's
//! ```` ```ansi ```` blocks, `**bold**` and `__underline__`.
//!
//! ## Architecture
//!
//! The terminal front end uses The Elm Architecture (TEA):
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`markup`]: Style codes, palette and marker scanning
//! - [`session`]: Applying styles, undo and reset
//! - [`convert`]: Discord markdown and plain-text output
//! - [`editor`]: Raw text input buffer
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved default flags

pub mod app;
pub mod config;
pub mod convert;
pub mod editor;
pub mod markup;
pub mod session;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::convert::{strip_markup, to_discord_markdown};
    pub use crate::markup::{PALETTE, StyleCode, StyleEffect};
    pub use crate::session::{Session, apply_style};
}
