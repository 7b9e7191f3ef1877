//! Freelancer onboarding wizard.
//!
//! This module contains:
//! - `Wizard`, which moves the session's step index and decides when the
//!   last step publishes
//! - `StepEditor`, the editor for whichever step is current
//! - The per-step editors and the review checklist

pub mod editor;
mod error;
pub mod location;
pub mod portfolio;
pub mod profile;
pub mod review;
pub mod services;
pub mod skills;

pub use editor::{EditorMode, Record, ScratchEditor};
pub use error::EditorError;

use crate::form::{self, Effect, FieldKind, Form, FormInput};
use crate::profile::{FreelancerDraft, FreelancerPatch, IdGenerator};
use crate::session::SessionStore;
use location::LocationStep;
use log::*;
use portfolio::PortfolioStep;
use profile::ProfileStep;
use services::ServicesStep;
use skills::SkillsStep;

/// Specifying the wizard steps in order.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Location,
    Skills,
    Profile,
    Portfolio,
    Services,
    Review,
}

impl WizardStep {
    /// Step for a 1-based index.
    ///
    pub fn from_index(index: usize) -> Option<WizardStep> {
        index
            .checked_sub(1)
            .and_then(|i| Wizard::STEPS.get(i))
            .copied()
    }

    /// 1-based position of the step.
    ///
    pub fn index(&self) -> usize {
        Wizard::STEPS
            .iter()
            .position(|step| step == self)
            .map_or(1, |i| i + 1)
    }

    pub fn name(&self) -> &'static str {
        match self {
            WizardStep::Location => "Location",
            WizardStep::Skills => "Skills",
            WizardStep::Profile => "Profile",
            WizardStep::Portfolio => "Portfolio Projects",
            WizardStep::Services => "Service Offerings",
            WizardStep::Review => "Review",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            WizardStep::Location => "Where are you based?",
            WizardStep::Skills => "What are your skills?",
            WizardStep::Profile => "Tell clients about yourself",
            WizardStep::Portfolio => "Showcase your work",
            WizardStep::Services => "What services do you offer?",
            WizardStep::Review => "Review your profile",
        }
    }
}

/// Outcome of pressing Next.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Step(WizardStep),
    Publish,
}

/// Outcome of pressing Back.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    Step(WizardStep),
    LeaveWizard,
}

/// Moves the session through the fixed step sequence.
///
/// The wizard holds no state of its own; the step index lives in the
/// session so every page sees the same position.
///
pub struct Wizard;

impl Wizard {
    pub const STEPS: [WizardStep; 6] = [
        WizardStep::Location,
        WizardStep::Skills,
        WizardStep::Profile,
        WizardStep::Portfolio,
        WizardStep::Services,
        WizardStep::Review,
    ];

    pub fn step_count() -> usize {
        Wizard::STEPS.len()
    }

    /// The current step, with an out-of-range index pulled back inside.
    ///
    pub fn current_step(session: &SessionStore) -> WizardStep {
        let index = session.wizard_step_index().clamp(1, Wizard::step_count());
        WizardStep::from_index(index).unwrap_or(WizardStep::Location)
    }

    /// Advance one step, or ask for publication on the last one. The index
    /// never moves past the last step.
    ///
    pub fn go_next(session: &mut SessionStore) -> Advance {
        let index = session.wizard_step_index();
        if index < Wizard::step_count() {
            session.set_wizard_step_index(index + 1);
            let step = Wizard::current_step(session);
            debug!("Wizard advanced to step {} ({})...", step.index(), step.name());
            Advance::Step(step)
        } else {
            debug!("Wizard reached the last step, requesting publish...");
            Advance::Publish
        }
    }

    /// Go back one step, or leave the wizard from the first one.
    ///
    pub fn go_back(session: &mut SessionStore) -> Retreat {
        let index = session.wizard_step_index();
        if index > 1 {
            session.set_wizard_step_index(index - 1);
            let step = Wizard::current_step(session);
            debug!("Wizard went back to step {} ({})...", step.index(), step.name());
            Retreat::Step(step)
        } else {
            debug!("Leaving wizard from the first step...");
            Retreat::LeaveWizard
        }
    }

    /// Completion percentage for a 1-based index, rounded to the nearest
    /// integer.
    ///
    pub fn progress(index: usize) -> u16 {
        let count = Wizard::step_count();
        let index = index.min(count);
        ((100 * index + count / 2) / count) as u16
    }

    pub fn label(index: usize) -> String {
        format!(
            "Step {} of {}",
            index.clamp(1, Wizard::step_count()),
            Wizard::step_count()
        )
    }
}

/// The editor for the current step.
///
#[derive(Debug, Clone, PartialEq)]
pub enum StepEditor {
    Location(LocationStep),
    Skills(SkillsStep),
    Profile(ProfileStep),
    Portfolio(PortfolioStep),
    Services(ServicesStep),
    Review,
}

impl StepEditor {
    /// Build the editor for `step`, seeded from the committed draft.
    ///
    pub fn for_step(step: WizardStep, draft: &FreelancerDraft) -> Self {
        match step {
            WizardStep::Location => StepEditor::Location(LocationStep::from_draft(draft)),
            WizardStep::Skills => StepEditor::Skills(SkillsStep::from_draft(draft)),
            WizardStep::Profile => StepEditor::Profile(ProfileStep::from_draft(draft)),
            WizardStep::Portfolio => StepEditor::Portfolio(PortfolioStep::from_draft(draft)),
            WizardStep::Services => StepEditor::Services(ServicesStep::from_draft(draft)),
            WizardStep::Review => StepEditor::Review,
        }
    }

    pub fn step(&self) -> WizardStep {
        match self {
            StepEditor::Location(_) => WizardStep::Location,
            StepEditor::Skills(_) => WizardStep::Skills,
            StepEditor::Profile(_) => WizardStep::Profile,
            StepEditor::Portfolio(_) => WizardStep::Portfolio,
            StepEditor::Services(_) => WizardStep::Services,
            StepEditor::Review => WizardStep::Review,
        }
    }

    pub fn field_count(&self) -> usize {
        match self {
            StepEditor::Location(editor) => editor.fields().len(),
            StepEditor::Skills(editor) => editor.fields().len(),
            StepEditor::Profile(editor) => editor.fields().len(),
            StepEditor::Portfolio(editor) => editor.fields().len(),
            StepEditor::Services(editor) => editor.fields().len(),
            StepEditor::Review => 0,
        }
    }

    pub fn focused_kind(&self, focus: usize) -> Option<FieldKind> {
        match self {
            StepEditor::Location(editor) => form::focused_kind(editor, focus),
            StepEditor::Skills(editor) => form::focused_kind(editor, focus),
            StepEditor::Profile(editor) => form::focused_kind(editor, focus),
            StepEditor::Portfolio(editor) => form::focused_kind(editor, focus),
            StepEditor::Services(editor) => form::focused_kind(editor, focus),
            StepEditor::Review => None,
        }
    }

    /// Route input to the focused field and return the patch to merge, if
    /// the edit produced one.
    ///
    pub fn handle(
        &mut self,
        focus: usize,
        input: FormInput,
        ids: &mut IdGenerator,
    ) -> Result<Option<FreelancerPatch>, EditorError> {
        let effect = match self {
            StepEditor::Location(editor) => form::handle_input(editor, focus, input, ids)?,
            StepEditor::Skills(editor) => form::handle_input(editor, focus, input, ids)?,
            StepEditor::Profile(editor) => form::handle_input(editor, focus, input, ids)?,
            StepEditor::Portfolio(editor) => form::handle_input(editor, focus, input, ids)?,
            StepEditor::Services(editor) => form::handle_input(editor, focus, input, ids)?,
            StepEditor::Review => Effect::None,
        };
        match effect {
            Effect::Patch(patch) => Ok(Some(patch)),
            Effect::None | Effect::Submit => Ok(None),
        }
    }
}
