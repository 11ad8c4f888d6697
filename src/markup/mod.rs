//! Style markers embedded in a flat text buffer.
//!
//! A marker tags a substring with one [`StyleCode`]:
//!
//! ```text
//! <span class='ansi-31'>Hello</span>
//! ```
//!
//! Buffers are plain strings. Markers are never parsed into a tree for
//! storage; this module only scans them on demand:
//! - [`tokenize`]: flat token stream used by the converter
//! - [`styled_segments`]: fully resolved runs used by the preview

mod code;
mod scanner;
mod styled;

pub use code::{PALETTE, PaletteEntry, PaletteGroup, ParseStyleError, StyleCode, StyleEffect};
pub use scanner::{CLOSE_TAG, Token, TokenKind, open_tag, pair_markers, tokenize, wrap};
pub use styled::{StyledSegment, styled_segments, visible_text};

pub(crate) use scanner::TAG_RE;
