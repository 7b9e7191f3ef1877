use super::error::EditorError;
use crate::form::{Effect, Field, FieldKind, Form, ListCursor};
use crate::profile::{
    Cyclic, Experience, FreelancerDraft, FreelancerPatch, HourlyRate, IdGenerator, Language,
    Proficiency,
};

/// Bio length below which the editor shows a hint.
pub const BIO_MIN_CHARS: usize = 100;
/// Displayed bio limit. Longer text is still accepted.
pub const BIO_MAX_CHARS: usize = 500;

pub fn bio_meets_minimum(bio: &str) -> bool {
    bio.chars().count() >= BIO_MIN_CHARS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Title,
    Bio,
    Experience,
    HourlyRate,
    Language,
    Proficiency,
    Languages,
}

impl Field for ProfileField {
    fn label(&self) -> &'static str {
        match self {
            ProfileField::Title => "Professional title",
            ProfileField::Bio => "Bio",
            ProfileField::Experience => "Experience level",
            ProfileField::HourlyRate => "Hourly rate (TND)",
            ProfileField::Language => "Language",
            ProfileField::Proficiency => "Proficiency",
            ProfileField::Languages => "Languages",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            ProfileField::Title | ProfileField::Bio | ProfileField::Language => FieldKind::Text,
            ProfileField::Experience | ProfileField::HourlyRate | ProfileField::Proficiency => {
                FieldKind::Choice
            }
            ProfileField::Languages => FieldKind::List,
        }
    }
}

/// Editor for title, bio, experience, rate and languages.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStep {
    title: String,
    bio: String,
    experience: Experience,
    hourly_rate: HourlyRate,
    languages: Vec<Language>,
    language_input: String,
    proficiency: Proficiency,
    languages_cursor: ListCursor,
}

impl ProfileStep {
    pub fn from_draft(draft: &FreelancerDraft) -> Self {
        ProfileStep {
            title: draft.title().to_string(),
            bio: draft.bio().to_string(),
            experience: draft.experience.unwrap_or_default(),
            hourly_rate: draft.hourly_rate.unwrap_or_default(),
            languages: draft.languages().to_vec(),
            language_input: String::new(),
            proficiency: Proficiency::default(),
            languages_cursor: ListCursor::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn experience(&self) -> Experience {
        self.experience
    }

    pub fn hourly_rate(&self) -> HourlyRate {
        self.hourly_rate
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn language_input(&self) -> &str {
        &self.language_input
    }

    pub fn proficiency(&self) -> Proficiency {
        self.proficiency
    }

    pub fn languages_cursor(&self) -> usize {
        self.languages_cursor.index()
    }

    pub fn add_language(
        &mut self,
        language: &str,
        proficiency: Proficiency,
    ) -> Result<FreelancerPatch, EditorError> {
        let language = language.trim();
        if language.is_empty() {
            return Err(EditorError::EmptyValue("Language"));
        }
        self.languages.push(Language {
            language: language.to_string(),
            proficiency,
        });
        Ok(FreelancerPatch::languages(self.languages.clone()))
    }

    pub fn remove_language(&mut self, index: usize) -> Result<FreelancerPatch, EditorError> {
        if index >= self.languages.len() {
            return Err(EditorError::IndexOutOfRange {
                record: "language",
                index,
            });
        }
        self.languages.remove(index);
        self.languages_cursor.clamp(self.languages.len());
        Ok(FreelancerPatch::languages(self.languages.clone()))
    }
}

impl Form for ProfileStep {
    type Field = ProfileField;
    type Patch = FreelancerPatch;

    fn fields(&self) -> &'static [ProfileField] {
        &[
            ProfileField::Title,
            ProfileField::Bio,
            ProfileField::Experience,
            ProfileField::HourlyRate,
            ProfileField::Language,
            ProfileField::Proficiency,
            ProfileField::Languages,
        ]
    }

    fn text_mut(&mut self, field: ProfileField) -> Option<&mut String> {
        match field {
            ProfileField::Title => Some(&mut self.title),
            ProfileField::Bio => Some(&mut self.bio),
            ProfileField::Language => Some(&mut self.language_input),
            _ => None,
        }
    }

    fn edited(&mut self, field: ProfileField) -> Option<FreelancerPatch> {
        match field {
            ProfileField::Title => Some(FreelancerPatch::title(self.title.clone())),
            ProfileField::Bio => Some(FreelancerPatch::bio(self.bio.clone())),
            _ => None,
        }
    }

    fn step(&mut self, field: ProfileField, forward: bool) -> Option<FreelancerPatch> {
        match field {
            ProfileField::Experience => {
                self.experience = self.experience.cycle(forward);
                Some(FreelancerPatch::experience(self.experience))
            }
            ProfileField::HourlyRate => {
                self.hourly_rate = self.hourly_rate.step(forward);
                Some(FreelancerPatch::hourly_rate(self.hourly_rate))
            }
            ProfileField::Proficiency => {
                self.proficiency = self.proficiency.cycle(forward);
                None
            }
            ProfileField::Languages => {
                self.languages_cursor.step(self.languages.len(), forward);
                None
            }
            _ => None,
        }
    }

    fn activate(
        &mut self,
        field: ProfileField,
        _ids: &mut IdGenerator,
    ) -> Result<Effect<FreelancerPatch>, EditorError> {
        match field {
            ProfileField::Language | ProfileField::Proficiency => {
                let input = self.language_input.clone();
                let patch = self.add_language(&input, self.proficiency)?;
                self.language_input.clear();
                self.proficiency = Proficiency::default();
                Ok(Effect::Patch(patch))
            }
            ProfileField::Languages => Ok(self.remove(field).into()),
            _ => Ok(Effect::None),
        }
    }

    fn remove(&mut self, field: ProfileField) -> Option<FreelancerPatch> {
        match field {
            ProfileField::Languages => {
                let index = self.languages_cursor.selected(self.languages.len())?;
                self.remove_language(index).ok()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{handle_input, FormInput};
    use fake::faker::lorem::en::Word;
    use fake::Fake;

    fn step() -> ProfileStep {
        ProfileStep::from_draft(&FreelancerDraft::default())
    }

    #[test]
    fn title_emits_on_every_keystroke() {
        let mut step = step();
        let mut ids = IdGenerator::new();
        handle_input(&mut step, 0, FormInput::Char('U'), &mut ids).unwrap();
        let effect = handle_input(&mut step, 0, FormInput::Char('X'), &mut ids).unwrap();
        assert_eq!(effect, Effect::Patch(FreelancerPatch::title("UX".to_string())));
        let effect = handle_input(&mut step, 0, FormInput::Backspace, &mut ids).unwrap();
        assert_eq!(effect, Effect::Patch(FreelancerPatch::title("U".to_string())));
    }

    #[test]
    fn hourly_rate_steps_within_bounds() {
        let draft = FreelancerDraft {
            hourly_rate: Some(HourlyRate::new(HourlyRate::MAX)),
            ..FreelancerDraft::default()
        };
        let mut step = ProfileStep::from_draft(&draft);
        let mut ids = IdGenerator::new();
        handle_input(&mut step, 3, FormInput::Next, &mut ids).unwrap();
        assert_eq!(step.hourly_rate().value(), HourlyRate::MAX);
        let effect = handle_input(&mut step, 3, FormInput::Previous, &mut ids).unwrap();
        assert_eq!(
            effect,
            Effect::Patch(FreelancerPatch::hourly_rate(HourlyRate::new(495)))
        );
    }

    #[test]
    fn experience_cycles_and_emits() {
        let mut step = step();
        let mut ids = IdGenerator::new();
        let effect = handle_input(&mut step, 2, FormInput::Next, &mut ids).unwrap();
        assert_eq!(
            effect,
            Effect::Patch(FreelancerPatch::experience(Experience::Intermediate))
        );
    }

    #[test]
    fn add_language_requires_a_name() {
        let mut step = step();
        assert_eq!(
            step.add_language("   ", Proficiency::Native),
            Err(EditorError::EmptyValue("Language"))
        );
        let name: String = Word().fake();
        let patch = step.add_language(&name, Proficiency::Native).unwrap();
        assert_eq!(
            patch.languages,
            Some(vec![Language {
                language: name,
                proficiency: Proficiency::Native
            }])
        );
    }

    #[test]
    fn enter_on_language_uses_selected_proficiency_then_resets() {
        let mut step = step();
        let mut ids = IdGenerator::new();
        for c in "Arabic".chars() {
            handle_input(&mut step, 4, FormInput::Char(c), &mut ids).unwrap();
        }
        handle_input(&mut step, 5, FormInput::Next, &mut ids).unwrap();
        let effect = handle_input(&mut step, 4, FormInput::Activate, &mut ids).unwrap();
        assert!(matches!(effect, Effect::Patch(_)));
        assert_eq!(step.languages()[0].proficiency, Proficiency::Native);
        assert_eq!(step.language_input(), "");
        assert_eq!(step.proficiency(), Proficiency::Fluent);
    }

    #[test]
    fn remove_language_drops_highlighted_entry() {
        let mut step = step();
        step.add_language("Arabic", Proficiency::Native).unwrap();
        step.add_language("French", Proficiency::Fluent).unwrap();
        let mut ids = IdGenerator::new();
        handle_input(&mut step, 6, FormInput::Next, &mut ids).unwrap();
        handle_input(&mut step, 6, FormInput::Remove, &mut ids).unwrap();
        assert_eq!(step.languages().len(), 1);
        assert_eq!(step.languages()[0].language, "Arabic");
        assert!(step.remove_language(4).is_err());
    }

    #[test]
    fn bio_minimum_counts_characters() {
        assert!(!bio_meets_minimum("short"));
        assert!(bio_meets_minimum(&"é".repeat(BIO_MIN_CHARS)));
    }
}
