//! Scratch-then-commit editing of repeatable records.
//!
//! A `ScratchEditor` owns one transient record and a mode tag saying whether
//! saving it appends a new record or replaces an existing one. Committing
//! never mutates the caller's list; it returns the full replacement list the
//! caller merges into the draft.

use super::error::EditorError;
use crate::profile::{IdGenerator, PortfolioProject, RecordId, ServiceOffering};

/// Records that can be edited through a `ScratchEditor`.
///
pub trait Record: Clone + Default {
    const KIND: &'static str;

    fn id(&self) -> &RecordId;
    fn set_id(&mut self, id: RecordId);

    /// Names of required fields that are still blank.
    fn missing_fields(&self) -> Vec<&'static str>;
}

impl Record for PortfolioProject {
    const KIND: &'static str = "project";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = vec![];
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.description.is_empty() {
            missing.push("description");
        }
        missing
    }
}

impl Record for ServiceOffering {
    const KIND: &'static str = "service";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = vec![];
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.description.is_empty() {
            missing.push("description");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        missing
    }
}

/// Specifying what saving the scratch record does.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(usize),
}

/// Two-phase editor: changes accumulate in the scratch record and reach the
/// committed list only through `commit`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ScratchEditor<T> {
    mode: EditorMode,
    scratch: T,
}

impl<T: Record> Default for ScratchEditor<T> {
    fn default() -> Self {
        ScratchEditor {
            mode: EditorMode::Create,
            scratch: T::default(),
        }
    }
}

impl<T: Record> ScratchEditor<T> {
    pub fn new() -> Self {
        ScratchEditor::default()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Edit(_))
    }

    pub fn scratch(&self) -> &T {
        &self.scratch
    }

    pub fn scratch_mut(&mut self) -> &mut T {
        &mut self.scratch
    }

    /// Load a committed record into the scratch slot for editing.
    ///
    pub fn begin_edit(&mut self, records: &[T], index: usize) -> Result<&T, EditorError> {
        let record = records.get(index).ok_or(EditorError::IndexOutOfRange {
            record: T::KIND,
            index,
        })?;
        self.scratch = record.clone();
        self.mode = EditorMode::Edit(index);
        Ok(&self.scratch)
    }

    /// Drop the scratch record and return to create mode.
    ///
    pub fn cancel(&mut self) {
        self.scratch = T::default();
        self.mode = EditorMode::Create;
    }

    /// Validate the scratch record and fold it into a copy of `records`.
    ///
    /// In create mode the record is appended with a fresh id; in edit mode it
    /// replaces the record at the edited index and keeps that record's id.
    /// On success the editor returns to create mode with an empty scratch.
    ///
    pub fn commit(&mut self, records: &[T], ids: &mut IdGenerator) -> Result<Vec<T>, EditorError> {
        let missing = self.scratch.missing_fields();
        if !missing.is_empty() {
            return Err(EditorError::MissingFields {
                record: capitalized(T::KIND),
                fields: missing,
            });
        }
        let mut updated = records.to_vec();
        match self.mode {
            EditorMode::Create => {
                let mut record = std::mem::take(&mut self.scratch);
                record.set_id(ids.next_id());
                updated.push(record);
            }
            EditorMode::Edit(index) => {
                let slot = updated.get_mut(index).ok_or(EditorError::IndexOutOfRange {
                    record: T::KIND,
                    index,
                })?;
                let mut record = std::mem::take(&mut self.scratch);
                record.set_id(slot.id().clone());
                *slot = record;
            }
        }
        self.mode = EditorMode::Create;
        Ok(updated)
    }

    /// Remove the committed record at `index`, returning the new list.
    ///
    /// An edit of the removed record is cancelled; an edit of a later record
    /// follows it down one position.
    ///
    pub fn delete(&mut self, records: &[T], index: usize) -> Result<Vec<T>, EditorError> {
        if index >= records.len() {
            return Err(EditorError::IndexOutOfRange {
                record: T::KIND,
                index,
            });
        }
        let mut updated = records.to_vec();
        updated.remove(index);
        match self.mode {
            EditorMode::Edit(editing) if editing == index => self.cancel(),
            EditorMode::Edit(editing) if editing > index => {
                self.mode = EditorMode::Edit(editing - 1);
            }
            _ => {}
        }
        Ok(updated)
    }
}

fn capitalized(kind: &'static str) -> &'static str {
    match kind {
        "project" => "Project",
        "service" => "Service",
        other => other,
    }
}
