use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::{Focus, Model, palette_key};
use crate::markup::{PALETTE, PaletteGroup, StyleCode, styled_segments};

use super::style::{ACCENT, PREVIEW_BG, PREVIEW_FG, style_for_codes};
use super::{INPUT_MAX_ROWS, PALETTE_HEIGHT, overlays, status};

/// Vertical layout: input, palette, preview, markdown (optional), status.
pub fn split_rows(area: Rect, model: &Model) -> std::rc::Rc<[Rect]> {
    let input_rows = u16::try_from(model.input.line_count())
        .unwrap_or(u16::MAX)
        .clamp(1, INPUT_MAX_ROWS);
    let mut constraints = vec![
        Constraint::Length(input_rows + 2),
        Constraint::Length(PALETTE_HEIGHT),
        Constraint::Fill(1),
    ];
    if model.markdown_visible {
        constraints.push(Constraint::Fill(1));
    }
    constraints.push(Constraint::Length(1));
    Layout::vertical(constraints).split(area)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let rows = split_rows(area, model);

    render_input(model, frame, rows[0]);
    render_palette(model, frame, rows[1]);
    render_preview(model, frame, rows[2]);
    if model.markdown_visible {
        render_markdown(model, frame, rows[3]);
    }
    let bottom = rows[rows.len() - 1];
    if model.active_toast().is_some() {
        status::render_toast_bar(model, frame, bottom);
    } else {
        status::render_status_bar(model, frame, bottom);
    }

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default()
        })
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn render_input(model: &Model, frame: &mut Frame, area: Rect) {
    let focused = model.focus == Focus::Input;
    let inner_height = area.height.saturating_sub(2).max(1) as usize;
    let inner_width = area.width.saturating_sub(2).max(1) as usize;

    let (line, _) = model.input.cursor_line_col();
    let col = model.input.cursor_display_col();
    let v_scroll = line.saturating_sub(inner_height - 1);
    let h_scroll = col.saturating_sub(inner_width - 1);

    let text = if model.input.is_empty() && !focused {
        Text::styled("Enter text here", Style::default().fg(Color::DarkGray))
    } else {
        Text::raw(model.input.text())
    };
    let input = Paragraph::new(text)
        .block(pane_block("Text", focused))
        .scroll((to_u16(v_scroll), to_u16(h_scroll)));
    frame.render_widget(input, area);

    if focused && !model.help_visible {
        frame.set_cursor_position((
            area.x + 1 + to_u16(col - h_scroll),
            area.y + 1 + to_u16(line - v_scroll),
        ));
    }
}

fn render_palette(model: &Model, frame: &mut Frame, area: Rect) {
    let groups = [
        PaletteGroup::TextColor,
        PaletteGroup::BackgroundColor,
        PaletteGroup::Formatting,
    ];
    let lines: Vec<Line> = groups
        .iter()
        .map(|&group| {
            let mut spans = vec![Span::styled(
                format!("{:<20}", format!("{}:", group.title())),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            for entry in PALETTE.iter().filter(|entry| entry.group == group) {
                if let Some(key) = palette_key(entry.code) {
                    spans.push(Span::styled(
                        format!("{key}"),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(
                    entry.label,
                    swatch_style(entry.code, model),
                ));
                spans.push(Span::raw("  "));
            }
            Line::from(spans)
        })
        .collect();

    let palette = Paragraph::new(lines).block(pane_block("Styles", false));
    frame.render_widget(palette, area);
}

fn swatch_style(code: StyleCode, model: &Model) -> Style {
    if code == StyleCode::RESET {
        return Style::default().fg(Color::Red);
    }
    style_for_codes(&[code], model.palette_mode)
}

fn render_preview(model: &Model, frame: &mut Frame, area: Rect) {
    let inner_height = area.height.saturating_sub(2).max(1) as usize;
    let inner_width = area.width.saturating_sub(2).max(1) as usize;

    let (line, col) = preview_caret_position(model);
    let v_scroll = line.saturating_sub(inner_height - 1);
    let h_scroll = col.saturating_sub(inner_width - 1);

    let preview = Paragraph::new(preview_lines(model))
        .block(pane_block("Preview", model.focus == Focus::Preview))
        .style(Style::default().bg(PREVIEW_BG).fg(PREVIEW_FG))
        .scroll((to_u16(v_scroll), to_u16(h_scroll)));
    frame.render_widget(preview, area);
}

/// Line and display column of the preview caret.
pub fn preview_caret_position(model: &Model) -> (usize, usize) {
    let before: String = model
        .preview_text()
        .chars()
        .take(model.preview_cursor)
        .collect();
    let line = before.matches('\n').count();
    let col = before.rsplit('\n').next().map_or(0, UnicodeWidthStr::width);
    (line, col)
}

/// Styled lines for the preview pane, with selection and caret highlighted.
pub fn preview_lines(model: &Model) -> Vec<Line<'static>> {
    let caret = (model.focus == Focus::Preview).then_some(model.preview_cursor);
    let selection = model.selection_range();
    let highlight = |style: Style, idx: usize| {
        let selected = selection.is_some_and(|(start, end)| idx >= start && idx < end);
        let at_caret = selection.is_none() && caret == Some(idx);
        if selected || at_caret {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    };

    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style: Option<Style> = None;
    let mut idx = 0;

    for segment in styled_segments(model.session.buffer()) {
        let base = style_for_codes(&segment.styles, model.palette_mode);
        for ch in segment.text.chars() {
            let style = highlight(base, idx);
            if ch == '\n' {
                flush_run(&mut run, &mut run_style, &mut spans);
                if style != base {
                    spans.push(Span::styled(" ", style));
                }
                lines.push(Line::from(std::mem::take(&mut spans)));
            } else {
                if run_style != Some(style) {
                    flush_run(&mut run, &mut run_style, &mut spans);
                    run_style = Some(style);
                }
                run.push(ch);
            }
            idx += 1;
        }
    }
    flush_run(&mut run, &mut run_style, &mut spans);
    if selection.is_none() && caret.is_some_and(|c| c >= idx) {
        spans.push(Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)));
    }
    lines.push(Line::from(spans));
    lines
}

fn flush_run(run: &mut String, style: &mut Option<Style>, spans: &mut Vec<Span<'static>>) {
    if run.is_empty() {
        return;
    }
    spans.push(Span::styled(std::mem::take(run), style.take().unwrap_or_default()));
}

fn render_markdown(model: &Model, frame: &mut Frame, area: Rect) {
    let markdown = printable_markdown(&model.session.discord_markdown());
    let max_scroll = markdown.lines().count().saturating_sub(1);
    let markdown = Paragraph::new(markdown)
        .block(pane_block("Discord Markdown", false))
        .wrap(Wrap { trim: false })
        .scroll((to_u16(model.markdown_scroll.min(max_scroll)), 0));
    frame.render_widget(markdown, area);
}

/// Make escape characters visible so they do not reach the terminal raw.
pub fn printable_markdown(markdown: &str) -> String {
    markdown.replace('\u{1b}', "\u{241b}")
}
