//! End-to-end styling flows through the public API.

use discolor::prelude::*;

const ESC: char = '\u{1b}';

#[test]
fn test_red_hello_converts_to_fenced_ansi_block() {
    let mut session = Session::new("Hello");
    assert!(session.apply_style("Hello", StyleCode::new(31)));
    assert_eq!(session.buffer(), "<span class='ansi-31'>Hello</span>");

    let markdown = session.discord_markdown();
    assert_eq!(markdown, format!("```ansi\n{ESC}[31mHello{ESC}[0m```"));
}

#[test]
fn test_bold_converts_to_double_asterisks() {
    let buffer = apply_style("Hi", "Hi", StyleCode::BOLD).unwrap();
    assert_eq!(to_discord_markdown(&buffer), "**Hi**");
}

#[test]
fn test_underline_converts_to_double_underscores() {
    let buffer = apply_style("Hi", "Hi", StyleCode::UNDERLINE).unwrap();
    assert_eq!(to_discord_markdown(&buffer), "__Hi__");
}

#[test]
fn test_reset_converts_back_to_plain_content() {
    let buffer = apply_style("say Hi", "Hi", StyleCode::RESET).unwrap();
    assert_eq!(buffer, "say <span class='ansi-0'>Hi</span>");
    assert_eq!(to_discord_markdown(&buffer), "say Hi");
}

#[test]
fn test_strip_markup_recovers_original_text() {
    let buffer = apply_style("Hello world", "world", StyleCode::new(44)).unwrap();
    assert_eq!(strip_markup(&buffer), "Hello world");
}

#[test]
fn test_every_palette_code_converts_selection() {
    for entry in &PALETTE {
        let buffer = apply_style("a b c", "b", entry.code).unwrap();
        let markdown = to_discord_markdown(&buffer);
        let expected = match entry.code.effect() {
            StyleEffect::Foreground | StyleEffect::Background => {
                format!("```ansi\n{ESC}[{}mb{ESC}[0m```", entry.code)
            }
            StyleEffect::Bold => "**b**".to_string(),
            StyleEffect::Underline => "__b__".to_string(),
            StyleEffect::Reset | StyleEffect::Unrecognized => "b".to_string(),
        };
        assert_eq!(markdown, format!("a {expected} c"), "{}", entry.description);
    }
}

#[test]
fn test_undo_after_fresh_session_is_noop() {
    let mut session = Session::new("t");
    assert!(!session.undo());
    assert_eq!(session.buffer(), "t");
    assert_eq!(session.history_len(), 1);
}

#[test]
fn test_full_editing_flow() {
    let mut session = Session::new("Welcome to Discord Colored Text Generator!");
    session.apply_style("Discord", StyleCode::new(34));
    session.apply_style("Colored", StyleCode::BOLD);
    assert_eq!(session.history_len(), 3);
    assert_eq!(
        session.discord_markdown(),
        format!("Welcome to ```ansi\n{ESC}[34mDiscord{ESC}[0m``` **Colored** Text Generator!")
    );

    session.undo();
    assert_eq!(session.history_len(), 2);
    assert!(!session.discord_markdown().contains("**"));

    session.set_text("New text");
    session.apply_style("text", StyleCode::new(32));
    session.reset_all();
    assert_eq!(session.buffer(), "New text");
    assert_eq!(session.plain_text(), "New text");
}

#[test]
fn test_restyling_a_tagged_word_wraps_the_marker() {
    let mut session = Session::new("Hi");
    session.apply_style("Hi", StyleCode::new(31));
    let tagged = session.buffer().to_string();
    session.apply_style(&tagged, StyleCode::BOLD);

    let once = session.discord_markdown();
    assert_eq!(once, format!("**{tagged}**"));
    assert_eq!(
        to_discord_markdown(&once),
        format!("**```ansi\n{ESC}[31mHi{ESC}[0m```**")
    );
}
