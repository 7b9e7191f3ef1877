use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

pub const BANNER: &str = r"
  __
 / _|_ __ ___  ___ _ __   ___  ___ ___
| |_| '__/ _ \/ _ \ '_ \ / _ \/ __/ __|
|  _| | |  __/  __/ | | |  __/\__ \__ \
|_| |_|  \___|\___|_| |_|\___||___/___/
";

pub const CONTENT: &str = "
Tunisia's marketplace for freelance talent.

Freelancers build a profile with skills, portfolio projects and service
packages. Clients post jobs and find the right person for them.

Press Enter to get started.
";

/// Render the landing page.
///
pub fn landing(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Welcome")
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .margin(2)
        .split(size);

    let banner = Paragraph::new(BANNER)
        .style(styling::banner_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(banner, rows[0]);

    let content = Paragraph::new(CONTENT)
        .style(styling::normal_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(content, rows[1]);
}
