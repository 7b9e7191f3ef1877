use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the catch-all page for unknown routes.
///
pub fn not_found(frame: &mut Frame, size: Rect, state: &State, path: &str) {
    let theme = state.theme();
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("404", styling::heading_style(theme))),
        Line::from(Span::styled(
            format!("No page lives at '{}'.", path),
            styling::normal_text_style(theme),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to return home.",
            styling::muted_text_style(theme),
        )),
    ];
    let block = Block::default()
        .title("Page not found")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, size);
}
