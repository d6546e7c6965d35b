use ratatui::{
    layout::{Alignment, Constraint, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{centered_rect, style};
use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let center = centered_rect(60, 40, area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Length(2), // Spacer
        Constraint::Length(2), // Spinner
        Constraint::Length(2), // Locator
        Constraint::Min(1),    // Spacer
        Constraint::Length(2), // Help
    ])
    .split(center);

    let title = Paragraph::new(vec![Line::from(vec![
        Span::styled("╔═══", style::border_style()),
        Span::styled(" SYNC LYRICS ", style::title_style()),
        Span::styled("═══╗", style::border_style()),
    ])])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Spinner animation driven by wall time
    let spinner_chars = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let spinner_idx = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| (d.as_millis() / 100) as usize)
        .unwrap_or(0)
        % spinner_chars.len();

    let spinner = Paragraph::new(vec![Line::from(vec![
        Span::styled(spinner_chars[spinner_idx], style::key_style()),
        Span::styled(" Loading lyrics... ", style::muted_style()),
    ])])
    .alignment(Alignment::Center);
    frame.render_widget(spinner, chunks[2]);

    let locator = Paragraph::new(vec![Line::from(vec![Span::styled(
        app.locator.as_str(),
        style::upcoming_line_style(),
    )])])
    .alignment(Alignment::Center);
    frame.render_widget(locator, chunks[3]);

    let help = Paragraph::new(vec![Line::from(vec![
        Span::styled("Press ", style::muted_style()),
        Span::styled("q", style::key_style()),
        Span::styled(" to quit", style::muted_style()),
    ])])
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}
