use ratatui::style::{Color, Modifier, Style};

// Color palette - night stage theme
pub const BG_PRIMARY: Color = Color::Rgb(26, 26, 46);
pub const BG_SECONDARY: Color = Color::Rgb(22, 33, 62);
pub const ACCENT_PRIMARY: Color = Color::Rgb(102, 126, 234); // Indigo
pub const ACCENT_SECONDARY: Color = Color::Rgb(118, 75, 162); // Violet
pub const TEXT_ACTIVE: Color = Color::Rgb(255, 255, 255);
pub const TEXT_UPCOMING: Color = Color::Rgb(160, 160, 175);
pub const TEXT_PAST: Color = Color::Rgb(90, 90, 110);
pub const SUCCESS: Color = Color::Rgb(100, 255, 150);
pub const ERROR: Color = Color::Rgb(255, 100, 100);

pub fn title_style() -> Style {
    Style::default()
        .fg(ACCENT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// The line currently being sung
pub fn active_line_style() -> Style {
    Style::default()
        .fg(TEXT_ACTIVE)
        .bg(ACCENT_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

pub fn past_line_style() -> Style {
    Style::default().fg(TEXT_PAST)
}

pub fn upcoming_line_style() -> Style {
    Style::default().fg(TEXT_UPCOMING)
}

pub fn muted_style() -> Style {
    Style::default().fg(TEXT_PAST)
}

pub fn key_style() -> Style {
    Style::default()
        .fg(ACCENT_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

pub fn success_style() -> Style {
    Style::default().fg(SUCCESS)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR)
}

pub fn border_style() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

pub fn progress_style() -> Style {
    Style::default().fg(ACCENT_PRIMARY).bg(BG_SECONDARY)
}

pub fn background_style() -> Style {
    Style::default().bg(BG_PRIMARY)
}
