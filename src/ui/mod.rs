pub mod loading;
pub mod player;
pub mod style;

use ratatui::layout::{Constraint, Layout, Rect};

/// Create a centered rect
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// First visible row so that `anchor` sits in the middle of `height` rows.
pub(crate) fn centered_offset(anchor: Option<usize>, height: usize, total: usize) -> usize {
    let Some(anchor) = anchor else {
        return 0;
    };
    let max_offset = total.saturating_sub(height);
    anchor.saturating_sub(height / 2).min(max_offset)
}
