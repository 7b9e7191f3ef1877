use super::Frame;
use crate::state::State;
use crate::ui::widgets::form_view::FormView;
use crate::ui::widgets::styling;
use crate::wizard::review::{checklist, is_complete};
use ratatui::layout::Rect;

/// Render the freelancer dashboard: profile summary and checklist.
///
pub fn freelancer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let session = state.session();
    let draft = session.freelancer_draft();
    let mut view = FormView::new(theme);

    if session.is_profile_published() {
        view.heading("Your profile is live");
    } else {
        view.heading("Your profile is a draft");
    }
    let title = if draft.title().is_empty() {
        "(no title yet)"
    } else {
        draft.title()
    };
    view.text(title.to_string());
    if let Some(city) = draft.city {
        view.muted(format!("Based in {}", city));
    }
    view.blank()
        .text(format!("Skills: {}", draft.skills().join(", ")))
        .text(format!("Tools: {}", draft.tools().join(", ")))
        .text(format!("Portfolio projects: {}", draft.projects().len()))
        .text(format!("Services: {}", draft.services().len()))
        .blank()
        .heading("Profile checklist");
    for item in checklist(draft) {
        let mark = if item.satisfied { "✓" } else { "✗" };
        view.styled(
            format!("  {} {} ({})", mark, item.criterion.label(), item.severity),
            styling::satisfied_style(theme, item.satisfied),
        );
    }
    if !is_complete(draft) {
        view.blank().muted("Press Enter to keep editing your profile.");
    }
    view.render(frame, size, "Freelancer dashboard");
}

/// Render the client dashboard: summary of the posted job.
///
pub fn client(frame: &mut Frame, size: Rect, state: &State) {
    let job = state.session().client_job_draft();
    let mut view = FormView::new(state.theme());
    view.heading(job.title.clone().unwrap_or_else(|| "(untitled job)".to_string()))
        .text(job.description.clone().unwrap_or_default())
        .blank()
        .text(format!(
            "Category: {}",
            job.category.map(|category| category.label()).unwrap_or("-")
        ))
        .text(format!("Budget: {}", job.budget_label()))
        .text(format!(
            "Experience: {}",
            job.experience_level.unwrap_or_default().label()
        ))
        .text(format!(
            "Timeframe: {}",
            job.timeframe.as_deref().unwrap_or("-")
        ))
        .text(format!("Skills: {}", job.skills().join(", ")))
        .text(format!("Attachments: {}", job.attachments().join(", ")))
        .blank()
        .muted("Press Enter to post another job.");
    view.render(frame, size, "Client dashboard");
}
