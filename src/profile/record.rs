//! Record identifiers and local image references.

use fake::Dummy;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Identifier of a committed portfolio project or service offering.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Scratch records carry an empty id until they are committed.
    ///
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hands out session-unique record ids.
///
/// Ids combine the creation timestamp with a sequence number, so two records
/// created within the same millisecond still differ.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdGenerator {
    sequence: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator::default()
    }

    pub fn next_id(&mut self) -> RecordId {
        self.sequence += 1;
        RecordId(format!(
            "{}-{}",
            chrono::Utc::now().timestamp_millis(),
            self.sequence
        ))
    }
}

/// A locally picked image, shown by name and referenced by blob url.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub name: String,
    pub url: String,
}

impl ImageRef {
    /// Build a reference from a path typed into the attachment picker.
    /// Returns `None` for blank input.
    ///
    pub fn from_path(path: &str) -> Option<ImageRef> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let name = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());
        Some(ImageRef {
            name,
            url: format!("blob:{}", path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn next_id_is_unique() {
        let mut ids = IdGenerator::new();
        let generated: HashSet<RecordId> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 100);
    }

    #[test]
    fn default_record_id_is_empty() {
        assert!(RecordId::default().is_empty());
        assert!(!IdGenerator::new().next_id().is_empty());
    }

    #[test]
    fn image_ref_from_path() {
        let image = ImageRef::from_path("  ~/shots/landing-page.png ").unwrap();
        assert_eq!(image.name, "landing-page.png");
        assert_eq!(image.url, "blob:~/shots/landing-page.png");
    }

    #[test]
    fn image_ref_from_blank_path() {
        assert_eq!(ImageRef::from_path("   "), None);
    }
}
