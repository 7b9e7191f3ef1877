use super::Frame;
use crate::pages::AUDIENCES;
use crate::session::UserType;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

fn describe(user_type: UserType) -> (&'static str, &'static str) {
    match user_type {
        UserType::Client => (
            "Join as a Client",
            "Post a job, describe your budget and find freelancers with the right skills.",
        ),
        _ => (
            "Join as a Freelancer",
            "Build your profile, showcase your work and offer services to clients.",
        ),
    }
}

/// Render the audience choice.
///
pub fn onboarding(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(8), Constraint::Min(0)])
        .margin(1)
        .split(size);

    let heading = Paragraph::new(Line::from(Span::styled(
        "How do you want to use Freeness?",
        styling::heading_style(theme),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    for (i, user_type) in AUDIENCES.iter().enumerate() {
        let (title, description) = describe(*user_type);
        let focused = i == state.focus();
        let border_style = if focused {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);
        let card = Paragraph::new(description)
            .style(styling::normal_text_style(theme))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(card, columns[i]);
    }

    let hint = Paragraph::new("Use ←/→ or Tab to choose, Enter to continue.")
        .style(styling::muted_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(hint, rows[2]);
}
