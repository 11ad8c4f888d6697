use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Focus, Model, ToastLevel};
use crate::config::PaletteMode;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let focus = match model.focus {
        Focus::Input => "TEXT",
        Focus::Preview => "PREVIEW",
    };
    let selection = model
        .selection_range()
        .map(|(start, end)| format!("  [{} selected]", end - start))
        .unwrap_or_default();
    let palette = match model.palette_mode {
        PaletteMode::Discord => "",
        PaletteMode::Terminal => "  [terminal colors]",
    };

    let status = format!(
        " {}  history {}{}{}  Tab:focus  ?:help",
        focus,
        model.session.history_len(),
        selection,
        palette
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
