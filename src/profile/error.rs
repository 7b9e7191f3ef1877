//! Submission error types.

/// Errors that abort a form submission without touching stored state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// A required job-posting field is blank
    #[error("Please fill in all required fields")]
    MissingRequiredFields { fields: Vec<&'static str> },

    /// Email or password left blank on the auth form
    #[error("Please fill in all fields")]
    MissingCredentials,

    /// Email does not look like an address
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}
