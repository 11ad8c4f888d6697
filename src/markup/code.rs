use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Numeric style code carried by a marker, modeled after ANSI SGR codes.
///
/// Any `u32` can be stored; only the codes in [`PALETTE`] have a visible
/// effect. Everything else classifies as [`StyleEffect::Unrecognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleCode(u32);

impl StyleCode {
    pub const RESET: Self = Self(0);
    pub const BOLD: Self = Self(1);
    pub const UNDERLINE: Self = Self(4);

    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// What this code does when rendered or converted.
    pub const fn effect(self) -> StyleEffect {
        match self.0 {
            0 => StyleEffect::Reset,
            1 => StyleEffect::Bold,
            4 => StyleEffect::Underline,
            30..=37 => StyleEffect::Foreground,
            40..=44 | 47 => StyleEffect::Background,
            _ => StyleEffect::Unrecognized,
        }
    }

    pub const fn is_recognized(self) -> bool {
        !matches!(self.effect(), StyleEffect::Unrecognized)
    }

    /// The palette entry for this code, if it is one of the offered styles.
    pub fn palette_entry(self) -> Option<&'static PaletteEntry> {
        PALETTE.iter().find(|entry| entry.code == self)
    }
}

impl fmt::Display for StyleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StyleCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

/// Effect class of a [`StyleCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleEffect {
    Foreground,
    Background,
    Bold,
    Underline,
    Reset,
    Unrecognized,
}

/// Grouping used when presenting the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteGroup {
    TextColor,
    BackgroundColor,
    Formatting,
}

impl PaletteGroup {
    pub const fn title(self) -> &'static str {
        match self {
            Self::TextColor => "Text Colors",
            Self::BackgroundColor => "Background Colors",
            Self::Formatting => "Text Formatting",
        }
    }
}

/// One selectable style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub code: StyleCode,
    pub group: PaletteGroup,
    /// Short button label ("Red").
    pub label: &'static str,
    /// Longer description ("Red Foreground").
    pub description: &'static str,
    /// Name accepted by [`StyleCode::from_str`].
    pub name: &'static str,
}

const fn entry(
    code: u32,
    group: PaletteGroup,
    label: &'static str,
    description: &'static str,
    name: &'static str,
) -> PaletteEntry {
    PaletteEntry {
        code: StyleCode(code),
        group,
        label,
        description,
        name,
    }
}

/// Every style offered to the user, in presentation order.
pub const PALETTE: [PaletteEntry; 17] = [
    entry(30, PaletteGroup::TextColor, "Black", "Black Foreground", "black"),
    entry(31, PaletteGroup::TextColor, "Red", "Red Foreground", "red"),
    entry(32, PaletteGroup::TextColor, "Green", "Green Foreground", "green"),
    entry(33, PaletteGroup::TextColor, "Yellow", "Yellow Foreground", "yellow"),
    entry(34, PaletteGroup::TextColor, "Blue", "Blue Foreground", "blue"),
    entry(35, PaletteGroup::TextColor, "Magenta", "Magenta Foreground", "magenta"),
    entry(36, PaletteGroup::TextColor, "Cyan", "Cyan Foreground", "cyan"),
    entry(37, PaletteGroup::TextColor, "White", "White Foreground", "white"),
    entry(40, PaletteGroup::BackgroundColor, "Black", "Black Background", "bg-black"),
    entry(41, PaletteGroup::BackgroundColor, "Red", "Red Background", "bg-red"),
    entry(42, PaletteGroup::BackgroundColor, "Green", "Green Background", "bg-green"),
    entry(43, PaletteGroup::BackgroundColor, "Yellow", "Yellow Background", "bg-yellow"),
    entry(44, PaletteGroup::BackgroundColor, "Blue", "Blue Background", "bg-blue"),
    entry(47, PaletteGroup::BackgroundColor, "White", "White Background", "bg-white"),
    entry(1, PaletteGroup::Formatting, "Bold", "Bold Text", "bold"),
    entry(4, PaletteGroup::Formatting, "Underline", "Underline Text", "underline"),
    entry(0, PaletteGroup::Formatting, "Reset", "Reset Formatting", "reset"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStyleError {
    #[error("empty style")]
    Empty,
    #[error("unknown style `{0}` (use a number or a name like red, bg-blue, bold)")]
    Unknown(String),
}

impl FromStr for StyleCode {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseStyleError::Empty);
        }
        if let Ok(code) = s.parse::<u32>() {
            return Ok(Self(code));
        }
        let lower = s.to_ascii_lowercase();
        PALETTE
            .iter()
            .find(|entry| entry.name == lower)
            .map(|entry| entry.code)
            .ok_or_else(|| ParseStyleError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_classifies_enumerated_codes() {
        for code in 30..=37 {
            assert_eq!(StyleCode::new(code).effect(), StyleEffect::Foreground);
        }
        for code in [40, 41, 42, 43, 44, 47] {
            assert_eq!(StyleCode::new(code).effect(), StyleEffect::Background);
        }
        assert_eq!(StyleCode::BOLD.effect(), StyleEffect::Bold);
        assert_eq!(StyleCode::UNDERLINE.effect(), StyleEffect::Underline);
        assert_eq!(StyleCode::RESET.effect(), StyleEffect::Reset);
    }

    #[test]
    fn test_codes_outside_palette_are_unrecognized() {
        for code in [2, 3, 29, 38, 39, 45, 46, 48, 100, u32::MAX] {
            assert!(!StyleCode::new(code).is_recognized(), "code {code}");
        }
    }

    #[test]
    fn test_every_palette_code_is_recognized() {
        for entry in &PALETTE {
            assert!(entry.code.is_recognized(), "{}", entry.description);
            assert_eq!(entry.code.palette_entry(), Some(entry));
        }
    }

    #[test]
    fn test_parse_accepts_numbers_and_names() {
        assert_eq!("31".parse::<StyleCode>(), Ok(StyleCode::new(31)));
        assert_eq!("031".parse::<StyleCode>(), Ok(StyleCode::new(31)));
        assert_eq!("99".parse::<StyleCode>(), Ok(StyleCode::new(99)));
        assert_eq!("Red".parse::<StyleCode>(), Ok(StyleCode::new(31)));
        assert_eq!("bg-white".parse::<StyleCode>(), Ok(StyleCode::new(47)));
        assert_eq!(" bold ".parse::<StyleCode>(), Ok(StyleCode::BOLD));
        assert_eq!("reset".parse::<StyleCode>(), Ok(StyleCode::RESET));
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!("".parse::<StyleCode>(), Err(ParseStyleError::Empty));
        assert_eq!(
            "bg-magenta".parse::<StyleCode>(),
            Err(ParseStyleError::Unknown("bg-magenta".to_string()))
        );
    }
}
