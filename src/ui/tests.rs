use super::*;
use crate::app::{Focus, Model, ToastLevel};
use crate::config::PaletteMode;
use crate::markup::StyleCode;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::{Color, Modifier};

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 30);
    Terminal::new(backend).unwrap()
}

fn render_to_string(model: &Model) -> String {
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(model, frame)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|c| c.symbol()).collect()
}

fn red_hello_model() -> Model {
    let mut model = Model::new("Hello");
    model.session.apply_style("Hello", StyleCode::new(31));
    model
}

#[test]
fn test_render_shows_all_panes() {
    let content = render_to_string(&Model::new("Hello world"));
    assert!(content.contains("Text"));
    assert!(content.contains("Styles"));
    assert!(content.contains("Preview"));
    assert!(content.contains("Discord Markdown"));
    assert!(content.contains("Hello world"));
    assert!(content.contains("history 1"));
}

#[test]
fn test_render_palette_lists_groups_and_keys() {
    let content = render_to_string(&Model::new(""));
    assert!(content.contains("Text Colors:"));
    assert!(content.contains("Background Colors:"));
    assert!(content.contains("Text Formatting:"));
    assert!(content.contains("2 Red"));
    assert!(content.contains("b Bold"));
}

#[test]
fn test_render_markdown_pane_shows_fenced_block() {
    let content = render_to_string(&red_hello_model());
    assert!(content.contains("```ansi"));
    assert!(content.contains("\u{241b}[31mHello\u{241b}[0m```"));
    assert!(!content.contains('\u{1b}'), "raw escapes must not reach the terminal");
}

#[test]
fn test_hidden_markdown_pane_is_not_rendered() {
    let mut model = red_hello_model();
    model.markdown_visible = false;
    let content = render_to_string(&model);
    assert!(!content.contains("Discord Markdown"));
    assert!(!content.contains("```ansi"));
}

#[test]
fn test_split_rows_tracks_markdown_visibility() {
    let area = ratatui::layout::Rect::new(0, 0, 80, 30);
    let mut model = Model::new("x");
    assert_eq!(split_rows(area, &model).len(), 5);
    model.markdown_visible = false;
    assert_eq!(split_rows(area, &model).len(), 4);
}

#[test]
fn test_preview_lines_apply_marker_colors() {
    let model = red_hello_model();
    let lines = preview_lines(&model);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].spans[0].content, "Hello");
    assert_eq!(lines[0].spans[0].style.fg, Some(Color::Rgb(0xdc, 0x32, 0x2f)));
}

#[test]
fn test_preview_lines_use_terminal_palette() {
    let mut model = red_hello_model();
    model.palette_mode = PaletteMode::Terminal;
    let lines = preview_lines(&model);
    assert_eq!(lines[0].spans[0].style.fg, Some(Color::Red));
}

#[test]
fn test_preview_lines_highlight_selection() {
    let mut model = Model::new("Hello world");
    model.focus = Focus::Preview;
    model.selection_anchor = Some(0);
    model.preview_cursor = 5;
    let lines = preview_lines(&model);
    let spans = &lines[0].spans;
    assert_eq!(spans[0].content, "Hello");
    assert!(spans[0].style.add_modifier.contains(Modifier::REVERSED));
    assert_eq!(spans[1].content, " world");
    assert!(!spans[1].style.add_modifier.contains(Modifier::REVERSED));
}

#[test]
fn test_preview_lines_show_caret_at_end() {
    let mut model = Model::new("Hi");
    model.focus = Focus::Preview;
    model.preview_cursor = 2;
    let lines = preview_lines(&model);
    let last = lines[0].spans.last().unwrap();
    assert_eq!(last.content, " ");
    assert!(last.style.add_modifier.contains(Modifier::REVERSED));
}

#[test]
fn test_preview_lines_split_on_newlines() {
    let model = Model::new("one\ntwo");
    let lines = preview_lines(&model);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].spans[0].content, "two");
}

#[test]
fn test_render_help_overlay() {
    let mut model = Model::new("x");
    model.help_visible = true;
    let content = render_to_string(&model);
    assert!(content.contains("Help"));
    assert!(content.contains("Copy Discord markdown"));
    assert!(content.contains("Background color"));
}

#[test]
fn test_render_toast_replaces_status_bar() {
    let mut model = Model::new("x");
    model.show_toast(ToastLevel::Info, "Copied to clipboard!");
    let content = render_to_string(&model);
    assert!(content.contains("[info] Copied to clipboard!"));
    assert!(!content.contains("?:help"));
}

#[test]
fn test_printable_markdown_replaces_escape() {
    assert_eq!(printable_markdown("\u{1b}[0m"), "\u{241b}[0m");
}

fn tall_model() -> Model {
    let mut text: String = (0..60).map(|i| format!("line{i}\n")).collect();
    text.push_str("LASTLINE");
    let mut model = Model::new(&text);
    model.input.move_to_start();
    model
}

#[test]
fn test_preview_scrolls_to_caret_on_last_line() {
    let mut model = tall_model();
    model.focus = Focus::Preview;
    model.preview_cursor = model.preview_text().chars().count();
    let content = render_to_string(&model);
    assert!(content.contains("LASTLINE"));
}

#[test]
fn test_preview_stays_at_top_with_caret_at_start() {
    let mut model = tall_model();
    model.focus = Focus::Preview;
    let content = render_to_string(&model);
    assert!(!content.contains("LASTLINE"));
}

#[test]
fn test_preview_scrolls_horizontally_to_caret() {
    let mut text = "x".repeat(200);
    text.push_str("END");
    let mut model = Model::new(&text);
    model.input.move_to_start();
    model.markdown_visible = false;
    model.focus = Focus::Preview;
    model.preview_cursor = text.chars().count();
    assert!(render_to_string(&model).contains("END"));
}

#[test]
fn test_markdown_pane_uses_scroll_offset() {
    let mut model = tall_model();
    model.markdown_scroll = 60;
    let content = render_to_string(&model);
    assert!(content.contains("LASTLINE"));
}

#[test]
fn test_preview_caret_position_counts_lines_and_width() {
    let mut model = Model::new("ab\n\u{4f60}\u{597d}x");
    model.preview_cursor = 5;
    assert_eq!(preview_caret_position(&model), (1, 4));
    model.preview_cursor = 0;
    assert_eq!(preview_caret_position(&model), (0, 0));
}
