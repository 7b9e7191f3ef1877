use super::Frame;
use crate::pages::post_job::{JobField, PostJobForm};
use crate::profile::BudgetRange;
use crate::state::State;
use crate::ui::widgets::form_view::{FieldValue, FormView};
use ratatui::layout::Rect;

/// Render the job posting form.
///
pub fn post_job(frame: &mut Frame, size: Rect, state: &State, form: &PostJobForm) {
    let custom = form.budget_range() == BudgetRange::Custom;
    let mut view = FormView::new(state.theme());
    view.heading("Tell freelancers about your project")
        .muted("Title, description, category and at least one skill are required.")
        .blank()
        .form(form, state.focus(), |field| match field {
            JobField::Title
            | JobField::Description
            | JobField::Timeframe
            | JobField::Attachment => FieldValue::text(form.input(field)),
            JobField::BudgetMin | JobField::BudgetMax if custom => {
                FieldValue::text(form.input(field))
            }
            JobField::BudgetMin | JobField::BudgetMax => {
                FieldValue::hinted(form.input(field), "only used with Custom Range")
            }
            JobField::Category => FieldValue::choice(
                form.category()
                    .map(|category| category.label())
                    .unwrap_or("Choose a category"),
            ),
            JobField::Budget => FieldValue::choice(form.budget_range().label()),
            JobField::Experience => FieldValue::choice(form.experience().label()),
            JobField::SkillSearch => FieldValue::Search {
                query: form.input(field).to_string(),
                matches: form.filtered_skills().iter().map(|s| s.to_string()).collect(),
                cursor: form.cursor(field),
            },
            JobField::Skills => FieldValue::list(form.skills().iter().cloned(), form.cursor(field)),
            JobField::Attachments => {
                FieldValue::list(form.attachments().iter().cloned(), form.cursor(field))
            }
            JobField::Submit => FieldValue::Action,
        });
    view.render(frame, size, "Post a job");
}
