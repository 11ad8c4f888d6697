//! Annotated buffer state and its linear history.
//!
//! A [`Session`] owns the text the user typed, the current annotated buffer,
//! and the buffer snapshots that undo steps back through. All transitions are
//! synchronous and total: no-ops are reported through return values, never
//! through errors.

use crate::convert::{strip_markup, to_discord_markdown};
use crate::markup::{StyleCode, wrap};

/// Wrap the first literal occurrence of `selection` in `buffer` with `code`.
///
/// Returns `None` when nothing changes: the selection is empty or does not
/// occur in the buffer. Matching is exact, so a selection copied from the
/// rendered view that spans part of a marker simply fails to match, while one
/// that happens to contain markup text wraps it as-is.
pub fn apply_style(buffer: &str, selection: &str, code: StyleCode) -> Option<String> {
    if selection.is_empty() {
        return None;
    }
    let start = buffer.find(selection)?;
    let end = start + selection.len();

    let mut out = String::with_capacity(buffer.len() + selection.len() + 32);
    out.push_str(&buffer[..start]);
    out.push_str(&wrap(code, selection));
    out.push_str(&buffer[end..]);
    Some(out)
}

/// Current buffer plus history for one editing session.
///
/// History is `past` followed by `buffer`, so it always has at least one
/// entry and the current buffer is always its last element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Last raw text entered; what reset returns to.
    source: String,
    buffer: String,
    past: Vec<String>,
}

impl Session {
    /// Start a session whose buffer and single history entry are `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let source = text.into();
        Self {
            buffer: source.clone(),
            source,
            past: Vec::new(),
        }
    }

    /// The current annotated buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The raw text of the most recent edit.
    pub fn source_text(&self) -> &str {
        &self.source
    }

    pub fn history_len(&self) -> usize {
        self.past.len() + 1
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// History snapshots, oldest first. The last one is [`Self::buffer`].
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.past
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.buffer.as_str()))
    }

    /// Replace the raw text, discarding all annotations and history.
    pub fn set_text(&mut self, text: impl Into<String>) {
        *self = Self::new(text);
        tracing::debug!(len = self.source.len(), "session text replaced");
    }

    /// Tag the first occurrence of `selection` and record the new buffer.
    ///
    /// Returns `false` without touching history when nothing matched.
    pub fn apply_style(&mut self, selection: &str, code: StyleCode) -> bool {
        let Some(next) = apply_style(&self.buffer, selection, code) else {
            tracing::debug!(%code, selection_len = selection.len(), "style not applied");
            return false;
        };
        let previous = std::mem::replace(&mut self.buffer, next);
        self.past.push(previous);
        tracing::debug!(%code, history = self.history_len(), "style applied");
        true
    }

    /// Drop the newest snapshot and return to the one before it.
    ///
    /// The dropped snapshot is gone for good; there is no redo. Returns
    /// `false` when only one entry remains.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        self.buffer = previous;
        tracing::debug!(history = self.history_len(), "undo");
        true
    }

    /// Discard every annotation and return to the last raw text.
    pub fn reset_all(&mut self) {
        self.buffer.clone_from(&self.source);
        self.past.clear();
        tracing::debug!("session reset");
    }

    /// Discord markdown for the current buffer.
    pub fn discord_markdown(&self) -> String {
        to_discord_markdown(&self.buffer)
    }

    /// Current buffer with every tag removed.
    pub fn plain_text(&self) -> String {
        strip_markup(&self.buffer)
    }
}
