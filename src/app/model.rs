use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::PaletteMode;
use crate::editor::{Direction, InputBuffer};
use crate::markup::visible_text;
use crate::session::Session;

const TOAST_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Which pane receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Raw text input; keys edit the text.
    #[default]
    Input,
    /// Rendered preview; keys move the caret, select and apply styles.
    Preview,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Raw text being typed
    pub input: InputBuffer,
    /// Annotated buffer and its history
    pub session: Session,
    pub focus: Focus,
    /// Caret in the preview, as a char index into the visible text
    pub preview_cursor: usize,
    /// Other end of the preview selection, when one is active
    pub selection_anchor: Option<usize>,
    /// Whether the Discord markdown pane is shown
    pub markdown_visible: bool,
    /// First markdown line shown in its pane
    pub markdown_scroll: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
    pub palette_mode: PaletteMode,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    /// Create a model whose input and session both start from `text`.
    pub fn new(text: &str) -> Self {
        Self {
            input: InputBuffer::from_text(text),
            session: Session::new(text),
            markdown_visible: true,
            ..Self::default()
        }
    }

    /// Text as rendered in the preview, markup resolved.
    pub fn preview_text(&self) -> String {
        visible_text(self.session.buffer())
    }

    /// Ordered char range of the active selection, if it is non-empty.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        let anchor = self.selection_anchor?;
        let (start, end) = if anchor <= self.preview_cursor {
            (anchor, self.preview_cursor)
        } else {
            (self.preview_cursor, anchor)
        };
        (start < end).then_some((start, end))
    }

    /// The selected substring of the rendered preview text.
    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.selection_range()?;
        Some(
            self.preview_text()
                .chars()
                .skip(start)
                .take(end - start)
                .collect(),
        )
    }

    pub const fn clear_selection(&mut self) {
        self.selection_anchor = None;
    }

    /// Take the raw text from the input pane, resetting all annotations.
    pub(super) fn sync_session_from_input(&mut self) {
        self.session.set_text(self.input.text());
        self.clear_selection();
        self.clamp_preview_cursor();
        self.scroll_markdown(0);
    }

    /// Keep the caret within the visible text after the buffer changed.
    pub(super) fn clamp_preview_cursor(&mut self) {
        let len = self.preview_text().chars().count();
        self.preview_cursor = self.preview_cursor.min(len);
        if let Some(anchor) = self.selection_anchor {
            self.selection_anchor = Some(anchor.min(len));
        }
    }

    /// Move the preview caret, extending the selection when `extend` is set.
    pub(super) fn move_preview_cursor(&mut self, target: usize, extend: bool) {
        if extend {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.preview_cursor);
            }
        } else {
            self.selection_anchor = None;
        }
        self.preview_cursor = target;
    }

    /// Where the caret lands after one step in `direction`.
    pub(super) fn preview_target(&self, direction: Direction) -> usize {
        let text = self.preview_text();
        let chars: Vec<char> = text.chars().collect();
        let cursor = self.preview_cursor.min(chars.len());
        match direction {
            Direction::Left => cursor.saturating_sub(1),
            Direction::Right => (cursor + 1).min(chars.len()),
            Direction::Up | Direction::Down => {
                let starts = line_starts(&chars);
                let line = starts
                    .iter()
                    .rposition(|&start| start <= cursor)
                    .unwrap_or(0);
                let col = cursor - starts[line];
                let target_line = match direction {
                    Direction::Up if line > 0 => line - 1,
                    Direction::Down if line + 1 < starts.len() => line + 1,
                    _ => return cursor,
                };
                let line_start = starts[target_line];
                let line_end = starts
                    .get(target_line + 1)
                    .map_or(chars.len(), |next| next - 1);
                (line_start + col).min(line_end)
            }
        }
    }

    /// Scroll the markdown pane, keeping at least its last line in view.
    pub(super) fn scroll_markdown(&mut self, delta: isize) {
        let max = self
            .session
            .discord_markdown()
            .lines()
            .count()
            .saturating_sub(1);
        self.markdown_scroll = self.markdown_scroll.saturating_add_signed(delta).min(max);
    }

    /// Start and end (exclusive of newline) of the caret's line.
    pub(super) fn preview_line_bounds(&self) -> (usize, usize) {
        let chars: Vec<char> = self.preview_text().chars().collect();
        let cursor = self.preview_cursor.min(chars.len());
        let start = chars[..cursor]
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |idx| idx + 1);
        let end = chars[cursor..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(chars.len(), |idx| cursor + idx);
        (start, end)
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    /// Drop the toast once it has expired. Returns `true` if one was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|toast| now >= toast.expires_at) {
            self.toast = None;
            return true;
        }
        false
    }
}

fn line_starts(chars: &[char]) -> Vec<usize> {
    std::iter::once(0)
        .chain(
            chars
                .iter()
                .enumerate()
                .filter(|&(_, &c)| c == '\n')
                .map(|(idx, _)| idx + 1),
        )
        .collect()
}
