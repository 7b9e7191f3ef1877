//! Keyboard-driven form plumbing shared by every page editor.
//!
//! A form exposes an ordered list of focusable fields. Terminal input is
//! translated into a `FormInput` and routed to whichever field has focus;
//! the form answers with an `Effect` describing what the page should do with
//! the result.

use crate::profile::IdGenerator;
use crate::wizard::EditorError;
use std::fmt::Debug;

/// How a focusable field reacts to input.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Choice,
    List,
    Action,
}

/// Input routed to the focused field.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    Char(char),
    Backspace,
    Next,
    Previous,
    Activate,
    Remove,
}

/// What the owning page should do after a form handled input.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<P> {
    None,
    Patch(P),
    Submit,
}

impl<P> From<Option<P>> for Effect<P> {
    fn from(patch: Option<P>) -> Self {
        match patch {
            Some(patch) => Effect::Patch(patch),
            None => Effect::None,
        }
    }
}

/// A focusable field of a form.
///
pub trait Field: Copy + Eq + Debug + 'static {
    fn label(&self) -> &'static str;
    fn kind(&self) -> FieldKind;
}

/// A page editor driven by `FormInput`.
///
/// Only `fields` and `text_mut` are mandatory; the remaining hooks default to
/// doing nothing.
///
pub trait Form {
    type Field: Field;
    type Patch;

    fn fields(&self) -> &'static [Self::Field];

    /// Buffer backing a text field.
    fn text_mut(&mut self, field: Self::Field) -> Option<&mut String>;

    /// Called after a text field changed.
    fn edited(&mut self, _field: Self::Field) -> Option<Self::Patch> {
        None
    }

    /// Arrow keys on a choice or list field.
    fn step(&mut self, _field: Self::Field, _forward: bool) -> Option<Self::Patch> {
        None
    }

    /// Enter on any field.
    fn activate(
        &mut self,
        _field: Self::Field,
        _ids: &mut IdGenerator,
    ) -> Result<Effect<Self::Patch>, EditorError> {
        Ok(Effect::None)
    }

    /// Delete on a list field.
    fn remove(&mut self, _field: Self::Field) -> Option<Self::Patch> {
        None
    }
}

/// Route input to the field at `focus`.
///
pub fn handle_input<F: Form>(
    form: &mut F,
    focus: usize,
    input: FormInput,
    ids: &mut IdGenerator,
) -> Result<Effect<F::Patch>, EditorError> {
    let field = match form.fields().get(focus) {
        Some(field) => *field,
        None => return Ok(Effect::None),
    };
    match input {
        FormInput::Char(c) => match form.text_mut(field) {
            Some(text) => {
                text.push(c);
                Ok(form.edited(field).into())
            }
            None => Ok(Effect::None),
        },
        FormInput::Backspace => match form.text_mut(field) {
            Some(text) => {
                if text.pop().is_some() {
                    Ok(form.edited(field).into())
                } else {
                    Ok(Effect::None)
                }
            }
            None => Ok(Effect::None),
        },
        FormInput::Next => Ok(form.step(field, true).into()),
        FormInput::Previous => Ok(form.step(field, false).into()),
        FormInput::Activate => form.activate(field, ids),
        FormInput::Remove => Ok(form.remove(field).into()),
    }
}

/// Kind of the field at `focus`, if any.
///
pub fn focused_kind<F: Form>(form: &F, focus: usize) -> Option<FieldKind> {
    form.fields().get(focus).map(|field| field.kind())
}

/// Selection within a list field.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    index: usize,
}

impl ListCursor {
    pub fn at(index: usize) -> Self {
        ListCursor { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move within `[0, len)`, wrapping at both ends.
    ///
    pub fn step(&mut self, len: usize, forward: bool) {
        if len == 0 {
            self.index = 0;
        } else if forward {
            self.index = (self.index + 1) % len;
        } else {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Pull the cursor back inside a list that may have shrunk.
    ///
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// The selected index when the list is non-empty.
    ///
    pub fn selected(&self, len: usize) -> Option<usize> {
        if self.index < len {
            Some(self.index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum NoteField {
        Body,
        Count,
        Save,
    }

    impl Field for NoteField {
        fn label(&self) -> &'static str {
            match self {
                NoteField::Body => "Body",
                NoteField::Count => "Count",
                NoteField::Save => "Save",
            }
        }

        fn kind(&self) -> FieldKind {
            match self {
                NoteField::Body => FieldKind::Text,
                NoteField::Count => FieldKind::Choice,
                NoteField::Save => FieldKind::Action,
            }
        }
    }

    #[derive(Default)]
    struct Note {
        body: String,
        count: u8,
    }

    impl Form for Note {
        type Field = NoteField;
        type Patch = String;

        fn fields(&self) -> &'static [NoteField] {
            &[NoteField::Body, NoteField::Count, NoteField::Save]
        }

        fn text_mut(&mut self, field: NoteField) -> Option<&mut String> {
            match field {
                NoteField::Body => Some(&mut self.body),
                _ => None,
            }
        }

        fn edited(&mut self, _field: NoteField) -> Option<String> {
            Some(self.body.clone())
        }

        fn step(&mut self, _field: NoteField, forward: bool) -> Option<String> {
            if forward {
                self.count += 1;
            }
            None
        }

        fn activate(
            &mut self,
            field: NoteField,
            _ids: &mut IdGenerator,
        ) -> Result<Effect<String>, EditorError> {
            match field {
                NoteField::Save => Ok(Effect::Submit),
                _ => Ok(Effect::None),
            }
        }
    }

    #[test]
    fn typing_reaches_text_fields_only() {
        let mut note = Note::default();
        let mut ids = IdGenerator::new();
        let effect = handle_input(&mut note, 0, FormInput::Char('h'), &mut ids).unwrap();
        assert_eq!(effect, Effect::Patch("h".to_string()));
        let effect = handle_input(&mut note, 1, FormInput::Char('x'), &mut ids).unwrap();
        assert_eq!(effect, Effect::None);
        assert_eq!(note.body, "h");
    }

    #[test]
    fn backspace_on_empty_text_is_silent() {
        let mut note = Note::default();
        let mut ids = IdGenerator::new();
        let effect = handle_input(&mut note, 0, FormInput::Backspace, &mut ids).unwrap();
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn step_and_activate_route_to_focus() {
        let mut note = Note::default();
        let mut ids = IdGenerator::new();
        handle_input(&mut note, 1, FormInput::Next, &mut ids).unwrap();
        assert_eq!(note.count, 1);
        let effect = handle_input(&mut note, 2, FormInput::Activate, &mut ids).unwrap();
        assert_eq!(effect, Effect::Submit);
    }

    #[test]
    fn out_of_range_focus_is_ignored() {
        let mut note = Note::default();
        let mut ids = IdGenerator::new();
        let effect = handle_input(&mut note, 9, FormInput::Activate, &mut ids).unwrap();
        assert_eq!(effect, Effect::None);
        assert_eq!(focused_kind(&note, 9), None);
        assert_eq!(focused_kind(&note, 0), Some(FieldKind::Text));
    }

    #[test]
    fn list_cursor_wraps_and_clamps() {
        let mut cursor = ListCursor::default();
        cursor.step(3, false);
        assert_eq!(cursor.index(), 2);
        cursor.step(3, true);
        assert_eq!(cursor.index(), 0);
        let mut cursor = ListCursor::at(4);
        cursor.clamp(2);
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.selected(0), None);
        assert_eq!(cursor.selected(2), Some(1));
    }
}
