use super::{auth, dashboard, footer, landing, log, not_found, onboarding, post_job, wizard, Frame};
use crate::pages::Page;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the whole screen: header, page, optional log panel and footer.
///
pub fn all(frame: &mut Frame, state: &State) {
    let mut constraints = vec![Constraint::Length(1), Constraint::Min(0)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(10));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    header(frame, rows[0], state);
    page(frame, rows[1], state);
    if state.is_log_visible() {
        log(frame, rows[2], state);
    }
    footer(frame, rows[rows.len() - 1], state);
}

fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let session = state.session();
    let account = if session.is_authenticated() {
        format!("signed in as {}", session.user_type())
    } else {
        "guest".to_string()
    };
    let line = Line::from(vec![
        Span::styled(" freeness ", styling::banner_style(theme)),
        Span::styled(
            format!("· {} ", state.route().title()),
            styling::normal_text_style(theme),
        ),
        Span::styled(format!("({})", account), styling::muted_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}

fn page(frame: &mut Frame, size: Rect, state: &State) {
    match state.page() {
        Page::Landing => landing::landing(frame, size, state),
        Page::Onboarding => onboarding::onboarding(frame, size, state),
        Page::Auth(form) => auth::auth(frame, size, state, form),
        Page::Wizard(editor) => wizard::wizard(frame, size, state, editor),
        Page::FreelancerDashboard => dashboard::freelancer(frame, size, state),
        Page::PostJob(form) => post_job::post_job(frame, size, state, form),
        Page::ClientDashboard => dashboard::client(frame, size, state),
        Page::NotFound(path) => not_found::not_found(frame, size, state, path),
    }
}
