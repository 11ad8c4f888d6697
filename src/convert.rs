//! Discord markdown conversion and plain-text extraction.
//!
//! [`to_discord_markdown`] rewrites markers in a single left-to-right pass.
//! Only the outermost layer is converted: an inner marker inside converted
//! content is copied through verbatim, so converting twice is not idempotent
//! on nested markers.

use crate::markup::{StyleCode, StyleEffect, TAG_RE, TokenKind, pair_markers, tokenize};

const FENCE_OPEN: &str = "```ansi\n";
const FENCE_CLOSE: &str = "```";
const ESC: char = '\u{1b}';

/// Rewrite every top-level marker in `buffer` as Discord markdown.
///
/// | code | output |
/// |---|---|
/// | 30-37, 40-44, 47 | ```` ```ansi\n ESC[<code>m content ESC[0m ``` ```` |
/// | 1 | `**content**` |
/// | 4 | `__content__` |
/// | 0 or unrecognized | `content` |
///
/// An opening marker without a balancing close, a stray close, and any other
/// tag are copied through literally. An empty result yields `buffer` itself.
pub fn to_discord_markdown(buffer: &str) -> String {
    let tokens = tokenize(buffer);
    let pairs = pair_markers(&tokens);
    let mut out = String::with_capacity(buffer.len());
    let mut idx = 0;

    while idx < tokens.len() {
        let token = tokens[idx];
        if let TokenKind::Open(code) = token.kind
            && let Some(close_idx) = pairs[idx]
        {
            let content = &buffer[token.end()..tokens[close_idx].start];
            render_marker(&mut out, code, content);
            idx = close_idx + 1;
            continue;
        }
        out.push_str(token.text);
        idx += 1;
    }

    if out.is_empty() {
        return buffer.to_string();
    }
    out
}

fn render_marker(out: &mut String, code: Option<StyleCode>, content: &str) {
    let Some(code) = code else {
        out.push_str(content);
        return;
    };
    match code.effect() {
        StyleEffect::Foreground | StyleEffect::Background => {
            out.push_str(FENCE_OPEN);
            out.push_str(&sgr(code));
            out.push_str(content);
            out.push_str(&sgr(StyleCode::RESET));
            out.push_str(FENCE_CLOSE);
        }
        StyleEffect::Bold => {
            out.push_str("**");
            out.push_str(content);
            out.push_str("**");
        }
        StyleEffect::Underline => {
            out.push_str("__");
            out.push_str(content);
            out.push_str("__");
        }
        StyleEffect::Reset | StyleEffect::Unrecognized => out.push_str(content),
    }
}

fn sgr(code: StyleCode) -> String {
    format!("{ESC}[{code}m")
}

/// Remove every `<...>` tag, keeping the text inside markers.
///
/// No entity escaping or unescaping is performed.
pub fn strip_markup(buffer: &str) -> String {
    TAG_RE.replace_all(buffer, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::wrap;

    fn fenced(code: u32, content: &str) -> String {
        format!("```ansi\n\u{1b}[{code}m{content}\u{1b}[0m```")
    }

    #[test]
    fn test_plain_text_is_identity() {
        assert_eq!(to_discord_markdown("Hello world"), "Hello world");
        assert_eq!(to_discord_markdown(""), "");
    }

    #[test]
    fn test_foreground_marker_becomes_fenced_block() {
        let buffer = wrap(StyleCode::new(31), "Hello");
        assert_eq!(
            to_discord_markdown(&buffer),
            "```ansi\n\u{1b}[31mHello\u{1b}[0m```"
        );
    }

    #[test]
    fn test_every_color_code_uses_fenced_template() {
        for code in (30..=37).chain([40, 41, 42, 43, 44, 47]) {
            let buffer = wrap(StyleCode::new(code), "x");
            assert_eq!(to_discord_markdown(&buffer), fenced(code, "x"), "code {code}");
        }
    }

    #[test]
    fn test_formatting_codes() {
        assert_eq!(to_discord_markdown(&wrap(StyleCode::BOLD, "Hi")), "**Hi**");
        assert_eq!(to_discord_markdown(&wrap(StyleCode::UNDERLINE, "Hi")), "__Hi__");
        assert_eq!(to_discord_markdown(&wrap(StyleCode::RESET, "Hi")), "Hi");
    }

    #[test]
    fn test_unrecognized_code_passes_content_through() {
        assert_eq!(to_discord_markdown(&wrap(StyleCode::new(45), "Hi")), "Hi");
        assert_eq!(
            to_discord_markdown("<span class='ansi-99999999999'>Hi</span>"),
            "Hi"
        );
    }

    #[test]
    fn test_markers_converted_in_place_among_text() {
        let buffer = format!(
            "Say {} and {}!",
            wrap(StyleCode::BOLD, "hi"),
            wrap(StyleCode::new(32), "bye")
        );
        assert_eq!(
            to_discord_markdown(&buffer),
            format!("Say **hi** and {}!", fenced(32, "bye"))
        );
    }

    #[test]
    fn test_nested_marker_converts_outer_layer_only() {
        let inner = wrap(StyleCode::new(31), "Hi");
        let buffer = wrap(StyleCode::BOLD, &inner);
        let once = to_discord_markdown(&buffer);
        assert_eq!(once, format!("**{inner}**"));

        let twice = to_discord_markdown(&once);
        assert_eq!(twice, format!("**{}**", fenced(31, "Hi")));
        assert_ne!(once, twice);
    }

    #[test]
    fn test_unbalanced_open_is_kept_literally() {
        let buffer = "<span class='ansi-1'>a <span class='ansi-4'>b</span>";
        assert_eq!(
            to_discord_markdown(buffer),
            "<span class='ansi-1'>a __b__"
        );
    }

    #[test]
    fn test_many_unclosed_opens_keep_only_innermost_pair() {
        let opens = "<span class='ansi-1'>".repeat(3000);
        let buffer = format!("{opens}x</span>");
        let expected = format!("{}**x**", "<span class='ansi-1'>".repeat(2999));
        assert_eq!(to_discord_markdown(&buffer), expected);
    }

    #[test]
    fn test_stray_close_and_other_tags_are_kept() {
        assert_eq!(to_discord_markdown("a</span><br>b"), "a</span><br>b");
    }

    #[test]
    fn test_empty_conversion_returns_input() {
        let buffer = wrap(StyleCode::RESET, "");
        assert_eq!(to_discord_markdown(&buffer), buffer);
    }

    #[test]
    fn test_multiline_content_is_converted() {
        let buffer = wrap(StyleCode::new(34), "one\ntwo");
        assert_eq!(to_discord_markdown(&buffer), fenced(34, "one\ntwo"));
    }

    #[test]
    fn test_strip_markup_removes_all_tags() {
        let buffer = format!("A {} <b>c</b>", wrap(StyleCode::new(31), "red"));
        assert_eq!(strip_markup(&buffer), "A red c");
        assert_eq!(strip_markup("no tags"), "no tags");
        assert_eq!(strip_markup("a < b"), "a < b");
        assert_eq!(strip_markup("&lt;x&gt;"), "&lt;x&gt;");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn strip_markup_undoes_a_single_wrap(
                text in "[a-zA-Z0-9 .,!?\n]{1,40}",
                code in 0..100u32,
            ) {
                let buffer = wrap(StyleCode::new(code), &text);
                prop_assert_eq!(strip_markup(&buffer), text);
            }

            #[test]
            fn text_without_markup_converts_to_itself(text in "[^<>]{0,60}") {
                prop_assert_eq!(to_discord_markdown(&text), text);
            }

            #[test]
            fn conversion_is_deterministic(text in "[a-z<>/' =-]{0,60}") {
                prop_assert_eq!(to_discord_markdown(&text), to_discord_markdown(&text));
            }
        }
    }
}
