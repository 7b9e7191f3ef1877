//! Sign-up / sign-in form.
//!
//! Authentication is simulated: a well-formed submission always succeeds
//! after a short delay. Nothing is sent anywhere.

use crate::form::{Effect, Field, FieldKind, Form};
use crate::profile::{IdGenerator, SubmitError};
use crate::state::Route;
use crate::wizard::EditorError;
use log::*;
use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Social providers offered next to the email form.
pub const SOCIAL_PROVIDERS: [&str; 3] = ["Google", "GitHub", "Facebook"];

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Failed to compile email pattern '{}': {}", EMAIL_PATTERN, e);
                None
            }
        })
        .as_ref()
}

pub fn is_valid_email(email: &str) -> bool {
    match email_regex() {
        Some(re) => re.is_match(email),
        None => email.contains('@'),
    }
}

/// Where a successful sign-in lands, by audience.
///
pub fn redirect_for(audience: &str) -> Route {
    match audience {
        "freelancer" => Route::FreelancerPortfolio,
        "client" => Route::ClientPostJob,
        _ => Route::Home,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignUp,
    SignIn,
}

impl AuthMode {
    pub fn success_message(self) -> &'static str {
        match self {
            AuthMode::SignUp => "Account created successfully!",
            AuthMode::SignIn => "Logged in successfully!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Password,
    RememberMe,
    Mode,
    Social,
    Submit,
}

impl Field for AuthField {
    fn label(&self) -> &'static str {
        match self {
            AuthField::Email => "Email",
            AuthField::Password => "Password",
            AuthField::RememberMe => "Remember me",
            AuthField::Mode => "Mode",
            AuthField::Social => "Continue with",
            AuthField::Submit => "Submit",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            AuthField::Email | AuthField::Password => FieldKind::Text,
            AuthField::RememberMe | AuthField::Mode | AuthField::Social => FieldKind::Choice,
            AuthField::Submit => FieldKind::Action,
        }
    }
}

/// Actions the auth form hands back to the page besides submitting.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    SocialLogin(&'static str),
}

/// State of the auth form for one audience.
///
#[derive(Debug, Clone, PartialEq)]
pub struct AuthForm {
    audience: String,
    email: String,
    password: String,
    remember_me: bool,
    mode: AuthMode,
    provider: usize,
}

impl AuthForm {
    pub fn new(audience: &str) -> Self {
        AuthForm {
            audience: audience.to_string(),
            email: String::new(),
            password: String::new(),
            remember_me: false,
            mode: AuthMode::SignUp,
            provider: 0,
        }
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The password as it is drawn on screen.
    ///
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn is_sign_up(&self) -> bool {
        self.mode == AuthMode::SignUp
    }

    pub fn provider(&self) -> &'static str {
        SOCIAL_PROVIDERS[self.provider % SOCIAL_PROVIDERS.len()]
    }

    pub fn heading(&self) -> String {
        match self.mode {
            AuthMode::SignUp => "Create your account".to_string(),
            AuthMode::SignIn => "Welcome back".to_string(),
        }
    }

    pub fn subheading(&self) -> String {
        match self.mode {
            AuthMode::SignUp => format!(
                "Join as a {} and start your journey with Freeness",
                self.audience
            ),
            AuthMode::SignIn => format!("Sign in to continue to your {} account", self.audience),
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignUp => AuthMode::SignIn,
            AuthMode::SignIn => AuthMode::SignUp,
        };
    }

    /// Check the form before the simulated request is made.
    ///
    pub fn validate(&self) -> Result<(), SubmitError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(SubmitError::MissingCredentials);
        }
        if !is_valid_email(email) {
            return Err(SubmitError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}

impl Form for AuthForm {
    type Field = AuthField;
    type Patch = AuthAction;

    fn fields(&self) -> &'static [AuthField] {
        &[
            AuthField::Email,
            AuthField::Password,
            AuthField::RememberMe,
            AuthField::Mode,
            AuthField::Social,
            AuthField::Submit,
        ]
    }

    fn text_mut(&mut self, field: AuthField) -> Option<&mut String> {
        match field {
            AuthField::Email => Some(&mut self.email),
            AuthField::Password => Some(&mut self.password),
            _ => None,
        }
    }

    fn step(&mut self, field: AuthField, forward: bool) -> Option<AuthAction> {
        match field {
            AuthField::RememberMe => self.remember_me = !self.remember_me,
            AuthField::Mode => self.toggle_mode(),
            AuthField::Social => {
                let len = SOCIAL_PROVIDERS.len();
                self.provider = if forward {
                    (self.provider + 1) % len
                } else {
                    (self.provider + len - 1) % len
                };
            }
            _ => {}
        }
        None
    }

    fn activate(
        &mut self,
        field: AuthField,
        _ids: &mut IdGenerator,
    ) -> Result<Effect<AuthAction>, EditorError> {
        match field {
            AuthField::RememberMe => self.remember_me = !self.remember_me,
            AuthField::Mode => self.toggle_mode(),
            AuthField::Social => return Ok(Effect::Patch(AuthAction::SocialLogin(self.provider()))),
            AuthField::Email | AuthField::Password | AuthField::Submit => {
                return Ok(Effect::Submit)
            }
        }
        Ok(Effect::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{handle_input, FormInput};
    use fake::faker::internet::en::{FreeEmail, Password};
    use fake::Fake;

    fn filled(email: &str, password: &str) -> AuthForm {
        let mut form = AuthForm::new("freelancer");
        *form.text_mut(AuthField::Email).unwrap() = email.to_string();
        *form.text_mut(AuthField::Password).unwrap() = password.to_string();
        form
    }

    #[test]
    fn empty_fields_are_rejected() {
        let form = filled("", "secret");
        assert_eq!(form.validate(), Err(SubmitError::MissingCredentials));
        let form = filled("me@freeness.tn", "");
        assert_eq!(form.validate(), Err(SubmitError::MissingCredentials));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form = filled("not-an-email", "secret");
        assert_eq!(
            form.validate(),
            Err(SubmitError::InvalidEmail("not-an-email".to_string()))
        );
    }

    #[test]
    fn generated_credentials_validate() {
        let email: String = FreeEmail().fake();
        let password: String = Password(8..16).fake();
        assert_eq!(filled(&email, &password).validate(), Ok(()));
    }

    #[test]
    fn redirect_depends_on_audience() {
        assert_eq!(redirect_for("freelancer"), Route::FreelancerPortfolio);
        assert_eq!(redirect_for("client"), Route::ClientPostJob);
        assert_eq!(redirect_for("agency"), Route::Home);
    }

    #[test]
    fn mode_toggle_changes_message() {
        let mut form = AuthForm::new("client");
        assert_eq!(form.mode().success_message(), "Account created successfully!");
        let mut ids = IdGenerator::new();
        handle_input(&mut form, 3, FormInput::Next, &mut ids).unwrap();
        assert_eq!(form.mode(), AuthMode::SignIn);
        assert_eq!(form.mode().success_message(), "Logged in successfully!");
        assert_eq!(form.heading(), "Welcome back");
    }

    #[test]
    fn enter_on_password_submits() {
        let mut form = AuthForm::new("client");
        let mut ids = IdGenerator::new();
        let effect = handle_input(&mut form, 1, FormInput::Activate, &mut ids).unwrap();
        assert_eq!(effect, Effect::Submit);
    }

    #[test]
    fn social_login_reports_selected_provider() {
        let mut form = AuthForm::new("client");
        let mut ids = IdGenerator::new();
        handle_input(&mut form, 4, FormInput::Next, &mut ids).unwrap();
        let effect = handle_input(&mut form, 4, FormInput::Activate, &mut ids).unwrap();
        assert_eq!(effect, Effect::Patch(AuthAction::SocialLogin("GitHub")));
    }

    #[test]
    fn password_is_masked() {
        let form = filled("me@freeness.tn", "abc");
        assert_eq!(form.masked_password(), "•••");
    }
}
