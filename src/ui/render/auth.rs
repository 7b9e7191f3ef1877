use super::Frame;
use crate::pages::auth::{AuthField, AuthForm};
use crate::state::State;
use crate::ui::widgets::form_view::{FieldValue, FormView};
use ratatui::layout::Rect;

/// Render the sign-up / sign-in form.
///
pub fn auth(frame: &mut Frame, size: Rect, state: &State, form: &AuthForm) {
    let mut view = FormView::new(state.theme());
    view.heading(form.heading())
        .muted(form.subheading())
        .blank()
        .form(form, state.focus(), |field| match field {
            AuthField::Email => FieldValue::text(form.email()),
            AuthField::Password => FieldValue::text(form.masked_password()),
            AuthField::RememberMe => FieldValue::Toggle(form.remember_me()),
            AuthField::Mode => FieldValue::choice(if form.is_sign_up() {
                "Create an account"
            } else {
                "Sign in with an existing account"
            }),
            AuthField::Social => FieldValue::choice(format!("Continue with {}", form.provider())),
            AuthField::Submit => FieldValue::Action,
        });
    let title = if form.is_sign_up() { "Sign up" } else { "Sign in" };
    view.render(frame, size, title);
}
