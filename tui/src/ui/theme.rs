use habits::HealthStatus;
use ratatui::style::{Color, Modifier, Style};

/// Blue/indigo theme.
///
/// Base aesthetic:
/// - light foreground on a dark navy background
/// - indigo accents for titles and focus
/// - green / blue / red reserved for prediction labels
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(10, 14, 30);
    pub const FG: Color = Color::Rgb(226, 232, 240);
    pub const FG_DIM: Color = Color::Rgb(148, 163, 184);
    pub const FG_MUTED: Color = Color::Rgb(71, 85, 105);

    pub const ACCENT_BLUE: Color = Color::Rgb(37, 99, 235);
    pub const ACCENT_INDIGO: Color = Color::Rgb(99, 102, 241);
    pub const ACCENT_PURPLE: Color = Color::Rgb(168, 85, 247);

    // Prediction labels
    pub const GOOD: Color = Color::Rgb(22, 163, 74);
    pub const AVERAGE: Color = Color::Rgb(59, 130, 246);
    pub const POOR: Color = Color::Rgb(220, 38, 38);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::ACCENT_INDIGO)
    }

    /// Border of the focused input.
    pub fn border_focus() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    /// Titles.
    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    /// Secondary text.
    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Placeholders and hints.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::POOR).add_modifier(Modifier::BOLD)
    }

    pub fn warn() -> Style {
        Style::default()
            .fg(Color::Rgb(234, 179, 8))
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT_INDIGO)
            .add_modifier(Modifier::BOLD)
    }

    /// Gauge colour per metrics card.
    pub fn gauge(index: usize) -> Style {
        let fg = if index == 0 {
            Self::ACCENT_BLUE
        } else {
            Self::ACCENT_PURPLE
        };
        Style::default().fg(fg).bg(Self::FG_MUTED)
    }

    /// Colour of a predicted label.
    pub fn prediction(status: HealthStatus) -> Style {
        let fg = match status {
            HealthStatus::Good => Self::GOOD,
            HealthStatus::Average => Self::AVERAGE,
            HealthStatus::Poor => Self::POOR,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }
}
