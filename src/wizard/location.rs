use super::error::EditorError;
use crate::form::{Effect, Field, FieldKind, Form, ListCursor};
use crate::profile::{City, Cyclic, FreelancerDraft, FreelancerPatch, IdGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationField {
    City,
}

impl Field for LocationField {
    fn label(&self) -> &'static str {
        "City"
    }

    fn kind(&self) -> FieldKind {
        FieldKind::List
    }
}

/// Editor for the "where are you based" step.
///
#[derive(Debug, Clone, PartialEq)]
pub struct LocationStep {
    city: Option<City>,
    cursor: ListCursor,
}

impl LocationStep {
    pub fn from_draft(draft: &FreelancerDraft) -> Self {
        let position = draft
            .city
            .and_then(|city| City::ALL.iter().position(|c| *c == city))
            .unwrap_or(0);
        LocationStep {
            city: draft.city,
            cursor: ListCursor::at(position),
        }
    }

    pub fn city(&self) -> Option<City> {
        self.city
    }

    pub fn highlighted(&self) -> usize {
        self.cursor.index()
    }

    pub fn select_city(&mut self, city: City) -> FreelancerPatch {
        self.city = Some(city);
        FreelancerPatch::city(city)
    }
}

impl Form for LocationStep {
    type Field = LocationField;
    type Patch = FreelancerPatch;

    fn fields(&self) -> &'static [LocationField] {
        &[LocationField::City]
    }

    fn text_mut(&mut self, _field: LocationField) -> Option<&mut String> {
        None
    }

    fn step(&mut self, _field: LocationField, forward: bool) -> Option<FreelancerPatch> {
        self.cursor.step(City::ALL.len(), forward);
        None
    }

    fn activate(
        &mut self,
        _field: LocationField,
        _ids: &mut IdGenerator,
    ) -> Result<Effect<FreelancerPatch>, EditorError> {
        let city = City::ALL[self.cursor.index()];
        Ok(Effect::Patch(self.select_city(city)))
    }
}
