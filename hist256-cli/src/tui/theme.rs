use ratatui::style::Color;

pub const THEME_NAMES: [&str; 5] = ["dark", "light", "nord", "catppuccin", "colorblind"];

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub highlight: Color,
    pub bar: Color,
    pub cursor: Color,
    pub muted: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            highlight: Color::Yellow,
            bar: Color::Cyan,
            cursor: Color::LightGreen,
            muted: Color::DarkGray,
        }
    }
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            highlight: Color::Blue,
            bar: Color::DarkGray,
            cursor: Color::Green,
            muted: Color::Gray,
        }
    }
    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(216, 222, 233),
            highlight: Color::Rgb(136, 192, 208),
            bar: Color::Rgb(129, 161, 193),
            cursor: Color::Rgb(163, 190, 140),
            muted: Color::Rgb(76, 86, 106),
        }
    }
    pub fn catppuccin() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 46),
            fg: Color::Rgb(205, 214, 244),
            highlight: Color::Rgb(137, 180, 250),
            bar: Color::Rgb(137, 220, 235),
            cursor: Color::Rgb(166, 227, 161),
            muted: Color::Rgb(88, 91, 112),
        }
    }
    pub fn colorblind() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            highlight: Color::Yellow,
            bar: Color::Rgb(0x00, 0x80, 0xFF),
            cursor: Color::Rgb(0xFF, 0x8C, 0x00), // orange instead of green
            muted: Color::DarkGray,
        }
    }
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "nord" => Self::nord(),
            "catppuccin" => Self::catppuccin(),
            "colorblind" => Self::colorblind(),
            _ => Self::dark(),
        }
    }
}

/// Name after `current` in `THEME_NAMES`; unknown names restart at the first.
pub fn next_theme_name(current: &str) -> &'static str {
    let pos = THEME_NAMES.iter().position(|n| *n == current);
    match pos {
        Some(i) => THEME_NAMES[(i + 1) % THEME_NAMES.len()],
        None => THEME_NAMES[0],
    }
}
