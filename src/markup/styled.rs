use super::StyleCode;
use super::scanner::{TokenKind, tokenize};

/// A run of visible text and the markers active over it, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment {
    pub text: String,
    pub styles: Vec<StyleCode>,
}

/// Resolve `buffer` into visible text runs for display.
///
/// Unlike the Discord conversion this walks every nesting level, the way a
/// browser would render the spans. Tags that are not markers are hidden and
/// a close without an open marker is ignored. Adjacent runs with the same
/// styles are merged.
pub fn styled_segments(buffer: &str) -> Vec<StyledSegment> {
    let mut segments: Vec<StyledSegment> = Vec::new();
    // Overflowing codes still occupy a stack slot so closes stay balanced.
    let mut stack: Vec<Option<StyleCode>> = Vec::new();

    for token in tokenize(buffer) {
        match token.kind {
            TokenKind::Open(code) => stack.push(code),
            TokenKind::Close => {
                stack.pop();
            }
            TokenKind::OtherTag => {}
            TokenKind::Text => {
                let styles: Vec<StyleCode> = stack.iter().flatten().copied().collect();
                match segments.last_mut() {
                    Some(last) if last.styles == styles => last.text.push_str(token.text),
                    _ => segments.push(StyledSegment {
                        text: token.text.to_string(),
                        styles,
                    }),
                }
            }
        }
    }
    segments
}

/// The text a reader sees once markup is resolved.
pub fn visible_text(buffer: &str) -> String {
    styled_segments(buffer)
        .into_iter()
        .map(|segment| segment.text)
        .collect()
}
