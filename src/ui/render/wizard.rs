use super::Frame;
use crate::profile::catalog::{skill_catalog, TOOLS};
use crate::profile::{City, Cyclic, FreelancerDraft, TierKind};
use crate::state::State;
use crate::ui::widgets::form_view::{FieldValue, FormView};
use crate::ui::widgets::styling;
use crate::wizard::location::{LocationField, LocationStep};
use crate::wizard::portfolio::{PortfolioStep, ProjectField, MAX_PROJECT_IMAGES};
use crate::wizard::profile::{ProfileField, ProfileStep, BIO_MAX_CHARS, BIO_MIN_CHARS};
use crate::wizard::review::checklist;
use crate::wizard::services::{ServiceField, ServicesStep};
use crate::wizard::skills::{SkillsField, SkillsStep};
use crate::wizard::{EditorMode, StepEditor, Wizard};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Gauge},
};

/// Render the wizard: progress gauge above the current step editor.
///
pub fn wizard(frame: &mut Frame, size: Rect, state: &State, editor: &StepEditor) {
    let theme = state.theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(size);

    let index = editor.step().index();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        )
        .gauge_style(
            Style::default()
                .fg(theme.primary.to_color())
                .bg(theme.border_normal.to_color()),
        )
        .percent(Wizard::progress(index))
        .label(format!(
            "{} · {} ({}%)",
            Wizard::label(index),
            editor.step().name(),
            Wizard::progress(index)
        ));
    frame.render_widget(gauge, rows[0]);

    let mut view = FormView::new(theme);
    view.heading(editor.step().heading()).blank();
    let focus = state.focus();
    match editor {
        StepEditor::Location(step) => location(&mut view, step, focus),
        StepEditor::Skills(step) => skills(&mut view, step, focus),
        StepEditor::Profile(step) => profile(&mut view, step, focus),
        StepEditor::Portfolio(step) => portfolio(&mut view, step, focus),
        StepEditor::Services(step) => services(&mut view, step, focus),
        StepEditor::Review => review(&mut view, state.session().freelancer_draft()),
    }
    view.render(frame, rows[1], editor.step().name());
}

fn location(view: &mut FormView, step: &LocationStep, focus: usize) {
    view.form(step, focus, |field| match field {
        LocationField::City => FieldValue::list(
            City::ALL.iter().map(|city| {
                let mark = if step.city() == Some(*city) { "●" } else { "○" };
                format!("{} {}", mark, city)
            }),
            step.highlighted(),
        ),
    });
}

fn checked(selected: &[String], item: &str) -> String {
    let mark = if selected.iter().any(|s| s == item) {
        "[x]"
    } else {
        "[ ]"
    };
    format!("{} {}", mark, item)
}

fn skills(view: &mut FormView, step: &SkillsStep, focus: usize) {
    view.form(step, focus, |field| match field {
        SkillsField::Catalog => FieldValue::list(
            skill_catalog().map(|(group, skill)| {
                format!("{} · {}", checked(step.skills(), skill), group)
            }),
            step.cursor(field),
        ),
        SkillsField::Tools => FieldValue::list(
            TOOLS.iter().map(|tool| checked(step.tools(), tool)),
            step.cursor(field),
        ),
        SkillsField::CustomSkill => FieldValue::text(step.custom_skill()),
        SkillsField::CustomTool => FieldValue::text(step.custom_tool()),
        SkillsField::SelectedSkills => {
            FieldValue::list(step.skills().iter().cloned(), step.cursor(field))
        }
        SkillsField::SelectedTools => {
            FieldValue::list(step.tools().iter().cloned(), step.cursor(field))
        }
    });
}

fn profile(view: &mut FormView, step: &ProfileStep, focus: usize) {
    view.form(step, focus, |field| match field {
        ProfileField::Title => FieldValue::text(step.title()),
        ProfileField::Bio => FieldValue::hinted(
            step.bio(),
            format!(
                "{}/{} characters, at least {}",
                step.bio().chars().count(),
                BIO_MAX_CHARS,
                BIO_MIN_CHARS
            ),
        ),
        ProfileField::Experience => FieldValue::choice(step.experience().label()),
        ProfileField::HourlyRate => {
            FieldValue::choice(format!("{} TND/hour", step.hourly_rate().value()))
        }
        ProfileField::Language => FieldValue::text(step.language_input()),
        ProfileField::Proficiency => FieldValue::choice(step.proficiency().label()),
        ProfileField::Languages => FieldValue::list(
            step.languages()
                .iter()
                .map(|l| format!("{} ({})", l.language, l.proficiency.label())),
            step.languages_cursor(),
        ),
    });
}

fn mode_line(mode: EditorMode, record: &str) -> String {
    match mode {
        EditorMode::Create => format!("Adding a new {}", record),
        EditorMode::Edit(index) => format!("Editing {} #{}", record, index + 1),
    }
}

fn portfolio(view: &mut FormView, step: &PortfolioStep, focus: usize) {
    let scratch = step.scratch();
    view.muted(mode_line(step.mode(), "project"));
    view.form(step, focus, |field| match field {
        ProjectField::Images => FieldValue::list(
            scratch.images.iter().map(|image| image.name.clone()),
            step.cursor(field),
        ),
        ProjectField::Image => FieldValue::hinted(
            step.input(field),
            format!("{}/{} images", scratch.images.len(), MAX_PROJECT_IMAGES),
        ),
        ProjectField::Links => FieldValue::list(
            scratch
                .links
                .iter()
                .map(|link| format!("{} ({})", link.title, link.url)),
            step.cursor(field),
        ),
        ProjectField::Technologies => {
            FieldValue::list(scratch.technologies.iter().cloned(), step.cursor(field))
        }
        ProjectField::TestimonialText => match &scratch.testimonial {
            Some(testimonial) => {
                FieldValue::hinted(step.input(field), format!("from {}", testimonial.client))
            }
            None => FieldValue::text(step.input(field)),
        },
        ProjectField::Save | ProjectField::Cancel => FieldValue::Action,
        ProjectField::Projects => FieldValue::list(
            step.projects().iter().map(|project| project.title.clone()),
            step.cursor(field),
        ),
        _ => FieldValue::text(step.input(field)),
    });
}

fn services(view: &mut FormView, step: &ServicesStep, focus: usize) {
    let scratch = step.scratch();
    let tier = step.tier();
    view.muted(mode_line(step.mode(), "service"));
    view.form(step, focus, |field| match field {
        ServiceField::Category => FieldValue::choice(
            scratch
                .category
                .map(|category| category.to_string())
                .unwrap_or_else(|| "Choose a category".to_string()),
        ),
        ServiceField::Subcategory => {
            FieldValue::choice(scratch.subcategory.clone().unwrap_or_else(|| "-".to_string()))
        }
        ServiceField::Thumbnail => match &scratch.thumbnail {
            Some(image) => FieldValue::hinted(step.input(field), format!("current: {}", image.name)),
            None => FieldValue::text(step.input(field)),
        },
        ServiceField::Tier => FieldValue::choice(
            TierKind::ALL
                .iter()
                .map(|kind| {
                    if *kind == step.active_tier() {
                        format!("[{}]", kind.label())
                    } else {
                        kind.label().to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" | "),
        ),
        ServiceField::TierPrice => FieldValue::choice(format!("{} TND", tier.price)),
        ServiceField::TierDelivery => FieldValue::choice(format!("{} days", tier.delivery_days)),
        ServiceField::TierRevisions => FieldValue::choice(tier.revisions.to_string()),
        ServiceField::Features => {
            FieldValue::list(tier.features.iter().cloned(), step.cursor(field))
        }
        ServiceField::Save | ServiceField::Cancel => FieldValue::Action,
        ServiceField::Services => FieldValue::list(
            step.services().iter().map(|service| match service.category {
                Some(category) => format!("{} ({})", service.title, category),
                None => service.title.clone(),
            }),
            step.cursor(field),
        ),
        _ => FieldValue::text(step.input(field)),
    });
}

fn review(view: &mut FormView, draft: &FreelancerDraft) {
    view.text("Check what clients will see before publishing.")
        .blank();
    for item in checklist(draft) {
        let mark = if item.satisfied { "✓" } else { "✗" };
        view.styled(
            format!("  {} {} ({})", mark, item.criterion.label(), item.severity),
            styling::satisfied_style(view.theme(), item.satisfied),
        );
    }
    view.blank()
        .text(format!(
            "Location: {}",
            draft.city.map(|city| city.to_string()).unwrap_or_else(|| "-".to_string())
        ))
        .text(format!("Title: {}", draft.title()))
        .text(format!("Bio: {} characters", draft.bio().chars().count()))
        .text(format!("Skills: {}", draft.skills().join(", ")))
        .text(format!(
            "Languages: {}",
            draft
                .languages()
                .iter()
                .map(|l| l.language.clone())
                .collect::<Vec<_>>()
                .join(", ")
        ))
        .text(format!("Projects: {}", draft.projects().len()))
        .text(format!("Services: {}", draft.services().len()))
        .blank()
        .muted("Press Enter or Ctrl+N to publish, Ctrl+S to save a draft.");
}
