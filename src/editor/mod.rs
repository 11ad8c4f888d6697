//! Raw text input.
//!
//! Provides a rope-backed buffer with a char-index cursor for the input
//! pane. Every edit replaces the session text, so this buffer never holds
//! markers the user did not type.

mod buffer;

pub use buffer::{Direction, InputBuffer};
