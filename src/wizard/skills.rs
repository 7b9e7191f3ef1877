use super::error::EditorError;
use crate::form::{Effect, Field, FieldKind, Form, ListCursor};
use crate::profile::catalog::{skill_catalog, TOOLS};
use crate::profile::{FreelancerDraft, FreelancerPatch, IdGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillsField {
    Catalog,
    CustomSkill,
    SelectedSkills,
    Tools,
    CustomTool,
    SelectedTools,
}

impl Field for SkillsField {
    fn label(&self) -> &'static str {
        match self {
            SkillsField::Catalog => "Skills",
            SkillsField::CustomSkill => "Add a custom skill",
            SkillsField::SelectedSkills => "Your skills",
            SkillsField::Tools => "Tools & Software",
            SkillsField::CustomTool => "Add a custom tool",
            SkillsField::SelectedTools => "Your tools",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            SkillsField::CustomSkill | SkillsField::CustomTool => FieldKind::Text,
            _ => FieldKind::List,
        }
    }
}

/// Editor for the skills and tools step.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsStep {
    skills: Vec<String>,
    tools: Vec<String>,
    custom_skill: String,
    custom_tool: String,
    catalog_cursor: ListCursor,
    selected_skill_cursor: ListCursor,
    tools_cursor: ListCursor,
    selected_tool_cursor: ListCursor,
}

impl SkillsStep {
    pub fn from_draft(draft: &FreelancerDraft) -> Self {
        SkillsStep {
            skills: draft.skills().to_vec(),
            tools: draft.tools().to_vec(),
            custom_skill: String::new(),
            custom_tool: String::new(),
            catalog_cursor: ListCursor::default(),
            selected_skill_cursor: ListCursor::default(),
            tools_cursor: ListCursor::default(),
            selected_tool_cursor: ListCursor::default(),
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    pub fn custom_skill(&self) -> &str {
        &self.custom_skill
    }

    pub fn custom_tool(&self) -> &str {
        &self.custom_tool
    }

    /// Cursor position for a list field.
    ///
    pub fn cursor(&self, field: SkillsField) -> usize {
        match field {
            SkillsField::Catalog => self.catalog_cursor.index(),
            SkillsField::SelectedSkills => self.selected_skill_cursor.index(),
            SkillsField::Tools => self.tools_cursor.index(),
            SkillsField::SelectedTools => self.selected_tool_cursor.index(),
            _ => 0,
        }
    }

    pub fn toggle_skill(&mut self, skill: &str) -> FreelancerPatch {
        toggle(&mut self.skills, skill);
        self.selected_skill_cursor.clamp(self.skills.len());
        FreelancerPatch::skills(self.skills.clone())
    }

    pub fn toggle_tool(&mut self, tool: &str) -> FreelancerPatch {
        toggle(&mut self.tools, tool);
        self.selected_tool_cursor.clamp(self.tools.len());
        FreelancerPatch::tools(self.tools.clone())
    }

    /// Add a skill that is not in the catalog. Blank or already selected
    /// names are ignored.
    ///
    pub fn add_custom_skill(&mut self, skill: &str) -> Option<FreelancerPatch> {
        if !insert_unique(&mut self.skills, skill) {
            return None;
        }
        Some(FreelancerPatch::skills(self.skills.clone()))
    }

    pub fn add_custom_tool(&mut self, tool: &str) -> Option<FreelancerPatch> {
        if !insert_unique(&mut self.tools, tool) {
            return None;
        }
        Some(FreelancerPatch::tools(self.tools.clone()))
    }
}

fn toggle(list: &mut Vec<String>, value: &str) {
    match list.iter().position(|item| item == value) {
        Some(position) => {
            list.remove(position);
        }
        None => list.push(value.to_string()),
    }
}

fn insert_unique(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|item| item == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

impl Form for SkillsStep {
    type Field = SkillsField;
    type Patch = FreelancerPatch;

    fn fields(&self) -> &'static [SkillsField] {
        &[
            SkillsField::Catalog,
            SkillsField::CustomSkill,
            SkillsField::SelectedSkills,
            SkillsField::Tools,
            SkillsField::CustomTool,
            SkillsField::SelectedTools,
        ]
    }

    fn text_mut(&mut self, field: SkillsField) -> Option<&mut String> {
        match field {
            SkillsField::CustomSkill => Some(&mut self.custom_skill),
            SkillsField::CustomTool => Some(&mut self.custom_tool),
            _ => None,
        }
    }

    fn step(&mut self, field: SkillsField, forward: bool) -> Option<FreelancerPatch> {
        match field {
            SkillsField::Catalog => self.catalog_cursor.step(skill_catalog().count(), forward),
            SkillsField::SelectedSkills => self.selected_skill_cursor.step(self.skills.len(), forward),
            SkillsField::Tools => self.tools_cursor.step(TOOLS.len(), forward),
            SkillsField::SelectedTools => self.selected_tool_cursor.step(self.tools.len(), forward),
            _ => {}
        }
        None
    }

    fn activate(
        &mut self,
        field: SkillsField,
        _ids: &mut IdGenerator,
    ) -> Result<Effect<FreelancerPatch>, EditorError> {
        let patch = match field {
            SkillsField::Catalog => skill_catalog()
                .nth(self.catalog_cursor.index())
                .map(|(_, skill)| self.toggle_skill(skill)),
            SkillsField::Tools => TOOLS
                .get(self.tools_cursor.index())
                .map(|tool| self.toggle_tool(tool)),
            SkillsField::CustomSkill => {
                let skill = std::mem::take(&mut self.custom_skill);
                let patch = self.add_custom_skill(&skill);
                if patch.is_none() {
                    self.custom_skill = skill;
                }
                patch
            }
            SkillsField::CustomTool => {
                let tool = std::mem::take(&mut self.custom_tool);
                let patch = self.add_custom_tool(&tool);
                if patch.is_none() {
                    self.custom_tool = tool;
                }
                patch
            }
            SkillsField::SelectedSkills | SkillsField::SelectedTools => self.remove(field),
        };
        Ok(patch.into())
    }

    fn remove(&mut self, field: SkillsField) -> Option<FreelancerPatch> {
        match field {
            SkillsField::SelectedSkills => {
                let index = self.selected_skill_cursor.selected(self.skills.len())?;
                let skill = self.skills[index].clone();
                Some(self.toggle_skill(&skill))
            }
            SkillsField::SelectedTools => {
                let index = self.selected_tool_cursor.selected(self.tools.len())?;
                let tool = self.tools[index].clone();
                Some(self.toggle_tool(&tool))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{handle_input, FormInput};

    #[test]
    fn toggling_a_skill_twice_removes_it() {
        let mut step = SkillsStep::from_draft(&FreelancerDraft::default());
        let patch = step.toggle_skill("SEO");
        assert_eq!(patch, FreelancerPatch::skills(vec!["SEO".to_string()]));
        let patch = step.toggle_skill("SEO");
        assert_eq!(patch, FreelancerPatch::skills(vec![]));
    }

    #[test]
    fn selection_keeps_insertion_order() {
        let mut step = SkillsStep::from_draft(&FreelancerDraft::default());
        step.toggle_skill("PPC");
        step.toggle_skill("Backend");
        step.toggle_skill("Animation");
        assert_eq!(step.skills(), ["PPC", "Backend", "Animation"]);
    }

    #[test]
    fn custom_skill_rejects_blank_and_duplicates() {
        let mut step = SkillsStep::from_draft(&FreelancerDraft::default());
        assert!(step.add_custom_skill("  ").is_none());
        assert!(step.add_custom_skill("Rust").is_some());
        assert!(step.add_custom_skill("Rust").is_none());
        assert_eq!(step.skills(), ["Rust"]);
    }

    #[test]
    fn typing_and_enter_adds_custom_tool() {
        let mut step = SkillsStep::from_draft(&FreelancerDraft::default());
        let mut ids = IdGenerator::new();
        for c in "Blender".chars() {
            handle_input(&mut step, 4, FormInput::Char(c), &mut ids).unwrap();
        }
        let effect = handle_input(&mut step, 4, FormInput::Activate, &mut ids).unwrap();
        assert_eq!(
            effect,
            Effect::Patch(FreelancerPatch::tools(vec!["Blender".to_string()]))
        );
        assert_eq!(step.custom_tool(), "");
    }

    #[test]
    fn rejected_custom_input_is_kept_for_correction() {
        let draft = FreelancerDraft {
            skills: Some(vec!["SEO".to_string()]),
            ..FreelancerDraft::default()
        };
        let mut step = SkillsStep::from_draft(&draft);
        let mut ids = IdGenerator::new();
        for c in "SEO".chars() {
            handle_input(&mut step, 1, FormInput::Char(c), &mut ids).unwrap();
        }
        let effect = handle_input(&mut step, 1, FormInput::Activate, &mut ids).unwrap();
        assert_eq!(effect, Effect::None);
        assert_eq!(step.custom_skill(), "SEO");
    }

    #[test]
    fn enter_on_catalog_toggles_highlighted_skill() {
        let mut step = SkillsStep::from_draft(&FreelancerDraft::default());
        let mut ids = IdGenerator::new();
        handle_input(&mut step, 0, FormInput::Next, &mut ids).unwrap();
        handle_input(&mut step, 0, FormInput::Activate, &mut ids).unwrap();
        assert_eq!(step.skills(), ["Graphic Design"]);
    }

    #[test]
    fn delete_on_selected_tools_removes_highlighted() {
        let draft = FreelancerDraft {
            tools: Some(vec!["Figma".to_string(), "Canva".to_string()]),
            ..FreelancerDraft::default()
        };
        let mut step = SkillsStep::from_draft(&draft);
        let mut ids = IdGenerator::new();
        handle_input(&mut step, 5, FormInput::Next, &mut ids).unwrap();
        let effect = handle_input(&mut step, 5, FormInput::Remove, &mut ids).unwrap();
        assert_eq!(
            effect,
            Effect::Patch(FreelancerPatch::tools(vec!["Figma".to_string()]))
        );
        assert_eq!(step.cursor(SkillsField::SelectedTools), 0);
    }
}
