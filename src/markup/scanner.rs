use once_cell::sync::Lazy;
use regex::Regex;

use super::StyleCode;

/// Any `<...>` run. Everything matched here is markup, never visible text.
pub(crate) static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

static OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<span class='ansi-(\d+)'>$").expect("open pattern is valid"));

pub const CLOSE_TAG: &str = "</span>";

/// Kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Visible text between tags.
    Text,
    /// Opening marker. `None` when the digits overflow a `u32`.
    Open(Option<StyleCode>),
    /// `</span>`.
    Close,
    /// Any other `<...>` tag.
    OtherTag,
}

/// A slice of the buffer with its classification.
///
/// Concatenating `text` over all tokens of a buffer reproduces it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of `text` in the scanned buffer.
    pub start: usize,
}

impl Token<'_> {
    pub const fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Format the opening marker for `code`.
pub fn open_tag(code: StyleCode) -> String {
    format!("<span class='ansi-{code}'>")
}

/// Wrap `content` in a marker for `code`.
pub fn wrap(code: StyleCode, content: &str) -> String {
    format!("{}{content}{CLOSE_TAG}", open_tag(code))
}

/// Split `buffer` into text and tag tokens, left to right.
pub fn tokenize(buffer: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for m in TAG_RE.find_iter(buffer) {
        if m.start() > last {
            tokens.push(Token {
                kind: TokenKind::Text,
                text: &buffer[last..m.start()],
                start: last,
            });
        }
        tokens.push(Token {
            kind: classify_tag(m.as_str()),
            text: m.as_str(),
            start: m.start(),
        });
        last = m.end();
    }
    if last < buffer.len() {
        tokens.push(Token {
            kind: TokenKind::Text,
            text: &buffer[last..],
            start: last,
        });
    }
    tokens
}

fn classify_tag(tag: &str) -> TokenKind {
    if tag == CLOSE_TAG {
        return TokenKind::Close;
    }
    OPEN_RE.captures(tag).map_or(TokenKind::OtherTag, |caps| {
        TokenKind::Open(caps[1].parse::<u32>().ok().map(StyleCode::new))
    })
}

/// For each token, the index of the `Close` that balances it.
///
/// Only `Open` tokens with a balancing close get `Some`. Opens nested inside
/// a marker's content pair with their own closes, so an outer open pairs
/// with the close that ends it, not the first close after it. Stray closes
/// and unclosed opens stay `None`.
pub fn pair_markers(tokens: &[Token<'_>]) -> Vec<Option<usize>> {
    let mut pairs = vec![None; tokens.len()];
    let mut open = Vec::new();
    for (idx, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Open(_) => open.push(idx),
            TokenKind::Close => {
                if let Some(open_idx) = open.pop() {
                    pairs[open_idx] = Some(idx);
                }
            }
            TokenKind::Text | TokenKind::OtherTag => {}
        }
    }
    pairs
}
