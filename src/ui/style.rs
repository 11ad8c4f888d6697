//! Colors for styled preview text.
//!
//! [`PaletteMode::Discord`] uses the RGB values Discord renders its ANSI
//! code blocks with; [`PaletteMode::Terminal`] maps onto the terminal's own
//! 16 colors so the preview follows the user's theme.

use ratatui::style::{Color, Modifier, Style};

use crate::config::PaletteMode;
use crate::markup::{StyleCode, StyleEffect};

fn discord_color(code: u32) -> Option<Color> {
    let rgb = match code {
        30 => (0x4f, 0x54, 0x5c),
        31 => (0xdc, 0x32, 0x2f),
        32 => (0x85, 0x99, 0x00),
        33 => (0xb5, 0x89, 0x00),
        34 => (0x26, 0x8b, 0xd2),
        35 => (0xd3, 0x36, 0x82),
        36 => (0x2a, 0xa1, 0x98),
        37 => (0xff, 0xff, 0xff),
        40 => (0x00, 0x2b, 0x36),
        41 => (0xcb, 0x4b, 0x16),
        42 => (0x58, 0x6e, 0x75),
        43 => (0x65, 0x7b, 0x83),
        44 => (0x83, 0x94, 0x96),
        47 => (0xfd, 0xf6, 0xe3),
        _ => return None,
    };
    Some(Color::Rgb(rgb.0, rgb.1, rgb.2))
}

fn terminal_color(code: u32) -> Option<Color> {
    // Foreground and background codes share the same last digit.
    let color = match code % 10 {
        0 => Color::Black,
        1 => Color::Red,
        2 => Color::Green,
        3 => Color::Yellow,
        4 => Color::Blue,
        5 => Color::Magenta,
        6 => Color::Cyan,
        7 => Color::White,
        _ => return None,
    };
    Some(color)
}

/// Color a foreground or background code resolves to.
pub fn code_color(code: StyleCode, mode: PaletteMode) -> Option<Color> {
    match code.effect() {
        StyleEffect::Foreground | StyleEffect::Background => match mode {
            PaletteMode::Discord => discord_color(code.value()),
            PaletteMode::Terminal => terminal_color(code.value()),
        },
        _ => None,
    }
}

/// Fold the active markers of a run into one style, outermost first.
///
/// Reset drops everything the outer markers contributed.
pub fn style_for_codes(codes: &[StyleCode], mode: PaletteMode) -> Style {
    codes.iter().fold(Style::default(), |style, &code| match code.effect() {
        StyleEffect::Foreground => code_color(code, mode).map_or(style, |c| style.fg(c)),
        StyleEffect::Background => code_color(code, mode).map_or(style, |c| style.bg(c)),
        StyleEffect::Bold => style.add_modifier(Modifier::BOLD),
        StyleEffect::Underline => style.add_modifier(Modifier::UNDERLINED),
        StyleEffect::Reset => Style::default(),
        StyleEffect::Unrecognized => style,
    })
}

/// Background of the preview pane (Discord's dark message background).
pub const PREVIEW_BG: Color = Color::Rgb(0x2f, 0x31, 0x36);
/// Default preview text color.
pub const PREVIEW_FG: Color = Color::Rgb(0xb9, 0xbb, 0xbe);
/// Discord blurple, used for focused borders.
pub const ACCENT: Color = Color::Rgb(0x58, 0x65, 0xf2);
