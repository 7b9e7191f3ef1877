//! Editor-specific error types.

/// Errors raised while editing a scratch record. The scratch record is left
/// unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// Required fields of a record are blank
    #[error("{record} is missing: {}", fields.join(", "))]
    MissingFields {
        record: &'static str,
        fields: Vec<&'static str>,
    },

    /// Index does not point at a committed record
    #[error("No {record} at position {index}")]
    IndexOutOfRange { record: &'static str, index: usize },

    /// A nested entry needs every one of its parts
    #[error("Both {0} are required")]
    Incomplete(&'static str),

    /// Value left blank
    #[error("{0} cannot be empty")]
    EmptyValue(&'static str),

    /// Soft cap on attached images reached
    #[error("A project can show at most {0} images")]
    ImageLimitReached(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_error_display() {
        let error = EditorError::MissingFields {
            record: "Project",
            fields: vec!["title", "description"],
        };
        assert_eq!(error.to_string(), "Project is missing: title, description");

        let error = EditorError::IndexOutOfRange {
            record: "service",
            index: 3,
        };
        assert_eq!(error.to_string(), "No service at position 3");

        let error = EditorError::Incomplete("link url and title");
        assert!(error.to_string().contains("link url and title"));

        let error = EditorError::EmptyValue("Feature");
        assert_eq!(error.to_string(), "Feature cannot be empty");

        let error = EditorError::ImageLimitReached(5);
        assert!(error.to_string().contains('5'));
    }
}
