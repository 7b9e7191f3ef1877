//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The shared state could not be locked
    #[error("Session state is unavailable: {0}")]
    SessionUnavailable(String),

    /// A timer could not be handed to the timer thread
    #[error("Failed to schedule timer: {0}")]
    TimerDispatchFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::SessionUnavailable("lock poisoned".to_string());
        assert!(error.to_string().contains("Session state is unavailable"));
        assert!(error.to_string().contains("lock poisoned"));

        let error = StateError::TimerDispatchFailed("channel closed".to_string());
        assert!(error.to_string().contains("Failed to schedule timer"));
    }
}
