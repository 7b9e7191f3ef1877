//! Screens addressed by routes.
//!
//! Each page owns only its transient editing state. Anything that must
//! survive navigation lives in the session store.

pub mod auth;
pub mod post_job;

use crate::form::{self, FieldKind, Form};
use crate::session::{SessionStore, UserType};
use crate::state::Route;
use crate::wizard::{StepEditor, Wizard};
use auth::AuthForm;
use post_job::PostJobForm;

/// Choices offered on the onboarding page, in focus order.
pub const AUDIENCES: [UserType; 2] = [UserType::Freelancer, UserType::Client];

/// Specifying the page currently on screen.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Landing,
    Onboarding,
    Auth(AuthForm),
    Wizard(StepEditor),
    FreelancerDashboard,
    PostJob(PostJobForm),
    ClientDashboard,
    NotFound(String),
}

impl Page {
    /// Build the page for `route`, seeding editors from the session.
    ///
    pub fn for_route(route: &Route, session: &SessionStore) -> Page {
        match route {
            Route::Home => Page::Landing,
            Route::Onboarding => Page::Onboarding,
            Route::Auth(audience) => Page::Auth(AuthForm::new(audience)),
            Route::FreelancerPortfolio => Page::Wizard(StepEditor::for_step(
                Wizard::current_step(session),
                session.freelancer_draft(),
            )),
            Route::FreelancerDashboard => Page::FreelancerDashboard,
            Route::ClientPostJob => {
                Page::PostJob(PostJobForm::from_draft(session.client_job_draft()))
            }
            Route::ClientDashboard => Page::ClientDashboard,
            Route::NotFound(path) => Page::NotFound(path.clone()),
        }
    }

    /// Number of focusable fields.
    ///
    pub fn field_count(&self) -> usize {
        match self {
            Page::Onboarding => AUDIENCES.len(),
            Page::Auth(form) => form.fields().len(),
            Page::Wizard(editor) => editor.field_count(),
            Page::PostJob(form) => form.fields().len(),
            Page::Landing
            | Page::FreelancerDashboard
            | Page::ClientDashboard
            | Page::NotFound(_) => 1,
        }
    }

    pub fn focused_kind(&self, focus: usize) -> Option<FieldKind> {
        match self {
            Page::Auth(auth) => form::focused_kind(auth, focus),
            Page::Wizard(editor) => editor.focused_kind(focus),
            Page::PostJob(job) => form::focused_kind(job, focus),
            _ if focus < self.field_count() => Some(FieldKind::Action),
            _ => None,
        }
    }

    /// Whether typed characters go into a text field.
    ///
    pub fn is_typing(&self, focus: usize) -> bool {
        self.focused_kind(focus) == Some(FieldKind::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{City, FreelancerPatch};
    use crate::wizard::WizardStep;

    #[test]
    fn test_page_for_route() {
        let session = SessionStore::new();
        assert_eq!(Page::for_route(&Route::Home, &session), Page::Landing);
        assert_eq!(
            Page::for_route(&Route::NotFound("/x".to_string()), &session),
            Page::NotFound("/x".to_string())
        );
        match Page::for_route(&Route::Auth("client".to_string()), &session) {
            Page::Auth(form) => assert_eq!(form.audience(), "client"),
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn test_wizard_page_opens_current_step() {
        let mut session = SessionStore::new();
        session
            .merge_freelancer_draft(FreelancerPatch::city(City::Bizerte))
            .set_wizard_step_index(3);
        match Page::for_route(&Route::FreelancerPortfolio, &session) {
            Page::Wizard(editor) => assert_eq!(editor.step(), WizardStep::Profile),
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn test_focus_kinds() {
        let session = SessionStore::new();
        let page = Page::for_route(&Route::Onboarding, &session);
        assert_eq!(page.field_count(), 2);
        assert_eq!(page.focused_kind(1), Some(FieldKind::Action));
        assert_eq!(page.focused_kind(2), None);
        let page = Page::for_route(&Route::Auth("freelancer".to_string()), &session);
        assert!(page.is_typing(0));
        assert!(!page.is_typing(2));
    }
}
