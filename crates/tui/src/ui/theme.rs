use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub error: Color,
    pub border: Color,
    pub header_bg: Color,
    pub highlight_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39),
            foreground: Color::White,
            muted: Color::Rgb(156, 163, 175),
            accent: Color::Rgb(234, 179, 8),
            on_accent: Color::Black,
            error: Color::Rgb(239, 68, 68),
            border: Color::Rgb(75, 85, 99),
            header_bg: Color::Rgb(55, 65, 81),
            highlight_bg: Color::Rgb(55, 65, 81),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(243, 244, 246),
            foreground: Color::Rgb(17, 24, 39),
            muted: Color::Rgb(107, 114, 128),
            accent: Color::Rgb(234, 179, 8),
            on_accent: Color::Black,
            error: Color::Rgb(220, 38, 38),
            border: Color::Rgb(156, 163, 175),
            header_bg: Color::Rgb(209, 213, 219),
            highlight_bg: Color::Rgb(229, 231, 235),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Label of the toggle: it shows the mode you switch *to*.
    pub fn toggle_label(dark_mode: bool) -> &'static str {
        if dark_mode {
            " ☀ Light "
        } else {
            " ☾ Dark "
        }
    }
}
