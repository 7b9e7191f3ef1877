use super::Frame;
use crate::pages::Page;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Hotkey hints for the page on screen.
///
fn hotkeys_for_page(state: &State) -> &'static str {
    match state.page() {
        Page::Landing => " Enter: start, Ctrl+L: log, q: quit",
        Page::Onboarding => " ←/→: choose, Enter: continue, Esc: back, q: quit",
        Page::Auth(_) => " Tab: next field, ←/→: toggle, Enter: submit, Esc: back",
        Page::Wizard(_) if state.is_typing() => {
            " Type to edit, Tab: next field, Enter: add/save, Ctrl+N: next, Ctrl+B: back, Ctrl+S: save draft"
        }
        Page::Wizard(_) => {
            " Tab: next field, ↑/↓: move, Enter: select, Del: remove, Ctrl+N: next, Ctrl+B: back, Ctrl+S: save draft"
        }
        Page::PostJob(_) => " Tab: next field, ←/→: choose, Enter: add/post, Del: remove, Esc: back",
        Page::FreelancerDashboard => " Enter: edit profile, Ctrl+R: start over, q: quit",
        Page::ClientDashboard => " Enter: post another job, Ctrl+R: start over, q: quit",
        Page::NotFound(_) => " Enter: home, Esc: back, q: quit",
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let (mode, mode_color) = if state.is_busy() {
        ("BUSY", theme.footer_busy)
    } else if state.is_typing() {
        ("TYPING", theme.footer_typing)
    } else {
        ("NORMAL", theme.footer_normal)
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(48)])
        .split(size);

    let controls = Line::from(vec![
        Span::styled(
            format!(" {} ", mode),
            Style::default()
                .fg(theme.text.to_color())
                .bg(mode_color.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(hotkeys_for_page(state), styling::muted_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(controls), columns[0]);

    if let Some(notice) = state.notice() {
        let notice_widget = Paragraph::new(Line::from(Span::styled(
            format!("{} ", notice.message),
            styling::notice_style(theme, notice.kind),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(notice_widget, columns[1]);
    }
}
