//! Terminal colors

use std::str::FromStr;

use ratatui::style::Color;

/// Colors used by the directory view
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    /// Default active-marker color when no highlight is configured
    pub accent_color: Color,
    pub header_bg_color: Color,
    pub header_fg_color: Color,
    pub scrollbar_bg_color: Color,
    pub status_bar_bg_color: Color,
    /// Configured highlight and its parsed color
    highlight: Option<(String, Color)>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_color: Color::Reset,
            text_color: Color::Reset,
            dim_color: Color::DarkGray,
            border_color: Color::Rgb(88, 91, 112),
            title_color: Color::Rgb(250, 179, 135),
            accent_color: Color::Rgb(238, 10, 36),
            header_bg_color: Color::Rgb(49, 50, 68),
            header_fg_color: Color::Rgb(205, 214, 244),
            scrollbar_bg_color: Color::Rgb(49, 50, 68),
            status_bar_bg_color: Color::Rgb(30, 30, 46),
            highlight: None,
        }
    }
}

impl Theme {
    /// Parse the configured highlight once. Values the terminal cannot show
    /// are logged and left to the accent.
    pub fn set_highlight(&mut self, value: Option<&str>) {
        self.highlight = value.and_then(|value| match Color::from_str(value) {
            Ok(color) => Some((value.to_string(), color)),
            Err(_) => {
                tracing::warn!(color = %value, "Unrecognized highlight color, using theme accent");
                None
            }
        });
    }

    /// Active-marker color: the configured highlight when it parses,
    /// otherwise the theme accent
    pub fn marker_color(&self, highlight: Option<&str>) -> Color {
        let Some(value) = highlight else {
            return self.accent_color;
        };
        match &self.highlight {
            Some((cached, color)) if cached == value => *color,
            _ => Color::from_str(value).unwrap_or(self.accent_color),
        }
    }
}
