//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use input::palette_key;
pub use model::{Focus, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::PaletteMode;
use crate::session::Session;

/// Default text shown when nothing else is given.
pub const DEFAULT_TEXT: &str = "Welcome to Discord Colored Text Generator!";

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    initial_text: String,
    session: Option<Session>,
    focus_preview: bool,
    markdown_visible: bool,
    palette_mode: PaletteMode,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
    startup_notice: Option<String>,
}

impl App {
    /// Create a new application editing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            initial_text: text.into(),
            session: None,
            focus_preview: false,
            markdown_visible: true,
            palette_mode: PaletteMode::default(),
            config_global_path: None,
            config_local_path: None,
            startup_notice: None,
        }
    }

    /// Start from an existing session, keeping its styles and history.
    pub fn with_session(mut self, session: Session) -> Self {
        self.initial_text = session.source_text().to_string();
        self.session = Some(session);
        self
    }

    /// Start with the preview focused instead of the text input.
    pub const fn with_focus_preview(mut self, enabled: bool) -> Self {
        self.focus_preview = enabled;
        self
    }

    /// Set initial Discord markdown pane visibility.
    pub const fn with_markdown_visible(mut self, visible: bool) -> Self {
        self.markdown_visible = visible;
        self
    }

    pub const fn with_palette_mode(mut self, mode: PaletteMode) -> Self {
        self.palette_mode = mode;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }

    /// Warning toast shown on the first frame.
    pub fn with_startup_notice(mut self, notice: Option<String>) -> Self {
        self.startup_notice = notice;
        self
    }
}
