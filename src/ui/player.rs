use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{
        Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Scrollbar,
        ScrollbarOrientation, ScrollbarState,
    },
    Frame,
};
use std::time::Instant;

use super::{centered_offset, style};
use crate::app::App;
use crate::lyrics::timecode::format_clock;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(style::background_style()), area);

    let chunks = Layout::vertical([
        Constraint::Length(2), // Title
        Constraint::Min(5),    // Lyrics
        Constraint::Length(3), // Position
        Constraint::Length(2), // Help
    ])
    .split(area);

    draw_title(frame, app, chunks[0]);
    draw_lyrics(frame, app, chunks[1]);
    draw_position(frame, app, chunks[2]);
    draw_help(frame, app, chunks[3]);
}

fn draw_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(vec![Line::from(vec![
        Span::styled(" SYNC LYRICS ", style::title_style()),
        Span::styled("│ ", style::muted_style()),
        Span::styled(app.locator.as_str(), style::upcoming_line_style()),
    ])]);
    frame.render_widget(title, area);
}

fn draw_lyrics(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Lyrics ")
        .title_style(style::title_style())
        .borders(Borders::ALL)
        .border_style(style::border_style());

    if app.lyrics.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No lyrics available", style::muted_style())),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let active = app.active_index();
    let items: Vec<ListItem> = app
        .lyrics
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let line_style = match active {
                Some(current) if i == current => style::active_line_style(),
                Some(current) if i < current => style::past_line_style(),
                _ => style::upcoming_line_style(),
            };
            ListItem::new(Line::from(Span::styled(line.text.as_str(), line_style)).centered())
        })
        .collect();

    let visible_rows = area.height.saturating_sub(2) as usize;
    let offset = centered_offset(app.scroll_anchor, visible_rows, app.lyrics.len());
    let mut list_state = ListState::default().with_offset(offset);

    frame.render_stateful_widget(List::new(items).block(block), area, &mut list_state);

    let mut scrollbar_state = ScrollbarState::new(app.lyrics.len()).position(active.unwrap_or(0));
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("▲"))
        .end_symbol(Some("▼"));
    frame.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            horizontal: 0,
            vertical: 1,
        }),
        &mut scrollbar_state,
    );
}

fn draw_position(frame: &mut Frame, app: &App, area: Rect) {
    let now = Instant::now();
    let position = app.clock.position_at(now);
    let ratio = app.clock.progress_at(now).clamp(0.0, 1.0);
    let state = if app.clock.is_playing() { "▶" } else { "⏸" };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style::border_style()),
        )
        .gauge_style(style::progress_style())
        .ratio(ratio)
        .label(format!(
            "{} {} / {}",
            state,
            format_clock(position),
            format_clock(app.clock.duration())
        ));
    frame.render_widget(gauge, area);
}

fn draw_help(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("  space ", style::key_style()),
        Span::styled("play/pause  ", style::muted_style()),
        Span::styled("←/h →/l ", style::key_style()),
        Span::styled("seek  ", style::muted_style()),
        Span::styled("0 ", style::key_style()),
        Span::styled("restart  ", style::muted_style()),
        Span::styled("r ", style::key_style()),
        Span::styled("reload  ", style::muted_style()),
        Span::styled("q ", style::key_style()),
        Span::styled("quit", style::muted_style()),
    ];

    if !app.status_message.is_empty() {
        let message_style = if app.lyrics.is_empty() {
            style::error_style()
        } else {
            style::success_style()
        };
        spans.push(Span::styled("  │ ", style::muted_style()));
        spans.push(Span::styled(app.status_message.as_str(), message_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
