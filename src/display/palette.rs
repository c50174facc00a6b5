use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    #[default]
    None,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// ANSI SGR foreground code
    fn code(self) -> Option<u8> {
        match self {
            Color::None => None,
            Color::Black => Some(30),
            Color::Red => Some(31),
            Color::Green => Some(32),
            Color::Yellow => Some(33),
            Color::Blue => Some(34),
            Color::Magenta => Some(35),
            Color::Cyan => Some(36),
            Color::White => Some(37),
            Color::BrightBlack => Some(90),
            Color::BrightRed => Some(91),
            Color::BrightGreen => Some(92),
            Color::BrightYellow => Some(93),
            Color::BrightBlue => Some(94),
            Color::BrightMagenta => Some(95),
            Color::BrightCyan => Some(96),
            Color::BrightWhite => Some(97),
        }
    }
}

/// Colors for each part of the output, plus a master switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub enabled: bool,
    pub input: Color,
    pub result: Color,
    pub unit: Color,
    pub header: Color,
    pub accent: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            enabled: true,
            input: Color::Cyan,
            result: Color::Green,
            unit: Color::None,
            header: Color::BrightWhite,
            accent: Color::BrightYellow,
        }
    }
}

impl Palette {
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn paint(&self, color: Color, text: &str) -> String {
        match color.code() {
            Some(code) if self.enabled => format!("\x1b[{}m{}\x1b[0m", code, text),
            _ => text.to_string(),
        }
    }

    pub fn error_tag(&self) -> String {
        self.paint(Color::Red, "Error:")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint() {
        let palette = Palette::default();
        assert_eq!(palette.paint(Color::Green, "1.5"), "\x1b[32m1.5\x1b[0m");
        assert_eq!(palette.paint(Color::None, "ft"), "ft");
        assert_eq!(Palette::plain().paint(Color::Green, "1.5"), "1.5");
    }

    #[test]
    fn test_color_names() {
        let color: Color = serde_json::from_str("\"bright-yellow\"").unwrap();
        assert_eq!(color, Color::BrightYellow);
        let color: Color = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(color, Color::None);
    }
}
