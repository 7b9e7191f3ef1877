//! Client job-posting form.
//!
//! Every change is merged into the session's job draft as it happens, so the
//! hiring dashboard always shows the latest values. Submission validates the
//! draft and then posts it after a simulated delay.

use crate::form::{Effect, Field, FieldKind, Form, ListCursor};
use crate::profile::catalog::JOB_SKILL_OPTIONS;
use crate::profile::{
    validate_job, BudgetRange, ClientJobDraft, Cyclic, IdGenerator, JobCategory, JobExperience,
    JobPatch, SubmitError,
};
use crate::wizard::EditorError;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    Title,
    Description,
    Category,
    Budget,
    BudgetMin,
    BudgetMax,
    Experience,
    Timeframe,
    SkillSearch,
    Skills,
    Attachment,
    Attachments,
    Submit,
}

impl Field for JobField {
    fn label(&self) -> &'static str {
        match self {
            JobField::Title => "Job title",
            JobField::Description => "Description",
            JobField::Category => "Category",
            JobField::Budget => "Budget range",
            JobField::BudgetMin => "Min (TND)",
            JobField::BudgetMax => "Max (TND)",
            JobField::Experience => "Experience level",
            JobField::Timeframe => "Timeframe",
            JobField::SkillSearch => "Search skills",
            JobField::Skills => "Required skills",
            JobField::Attachment => "Attach file",
            JobField::Attachments => "Attachments",
            JobField::Submit => "Post job",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            JobField::Category | JobField::Budget | JobField::Experience => FieldKind::Choice,
            JobField::Skills | JobField::Attachments => FieldKind::List,
            JobField::Submit => FieldKind::Action,
            _ => FieldKind::Text,
        }
    }
}

/// Editable copy of the client job draft.
///
#[derive(Debug, Clone, PartialEq)]
pub struct PostJobForm {
    title: String,
    description: String,
    category: Option<JobCategory>,
    budget_range: BudgetRange,
    budget_min: String,
    budget_max: String,
    experience: JobExperience,
    timeframe: String,
    skill_search: String,
    skills: Vec<String>,
    attachment: String,
    attachments: Vec<String>,
    search_cursor: ListCursor,
    skills_cursor: ListCursor,
    attachments_cursor: ListCursor,
}

fn bound_text(bound: Option<Option<u32>>) -> String {
    bound.flatten().map(|v| v.to_string()).unwrap_or_default()
}

fn parse_bound(text: &str) -> Option<u32> {
    text.parse().ok()
}

/// Keep only digits, dropping trailing keystrokes that would overflow.
///
fn clean_bound(text: &mut String) {
    text.retain(|c| c.is_ascii_digit());
    while !text.is_empty() && parse_bound(text).is_none() {
        text.pop();
    }
}

impl PostJobForm {
    pub fn from_draft(draft: &ClientJobDraft) -> Self {
        PostJobForm {
            title: draft.title.clone().unwrap_or_default(),
            description: draft.description.clone().unwrap_or_default(),
            category: draft.category,
            budget_range: draft.budget_range.unwrap_or_default(),
            budget_min: bound_text(draft.custom_budget_min),
            budget_max: bound_text(draft.custom_budget_max),
            experience: draft.experience_level.unwrap_or_default(),
            timeframe: draft.timeframe.clone().unwrap_or_default(),
            skill_search: String::new(),
            skills: draft.skills().to_vec(),
            attachment: String::new(),
            attachments: draft.attachments().to_vec(),
            search_cursor: ListCursor::default(),
            skills_cursor: ListCursor::default(),
            attachments_cursor: ListCursor::default(),
        }
    }

    pub fn input(&self, field: JobField) -> &str {
        match field {
            JobField::Title => &self.title,
            JobField::Description => &self.description,
            JobField::BudgetMin => &self.budget_min,
            JobField::BudgetMax => &self.budget_max,
            JobField::Timeframe => &self.timeframe,
            JobField::SkillSearch => &self.skill_search,
            JobField::Attachment => &self.attachment,
            _ => "",
        }
    }

    pub fn category(&self) -> Option<JobCategory> {
        self.category
    }

    pub fn budget_range(&self) -> BudgetRange {
        self.budget_range
    }

    pub fn experience(&self) -> JobExperience {
        self.experience
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }

    pub fn cursor(&self, field: JobField) -> usize {
        match field {
            JobField::SkillSearch => self.search_cursor.index(),
            JobField::Skills => self.skills_cursor.index(),
            JobField::Attachments => self.attachments_cursor.index(),
            _ => 0,
        }
    }

    /// Skill options matching the search text, case-insensitively.
    ///
    pub fn filtered_skills(&self) -> Vec<&'static str> {
        let needle = self.skill_search.to_lowercase();
        JOB_SKILL_OPTIONS
            .iter()
            .filter(|skill| skill.to_lowercase().contains(&needle))
            .copied()
            .collect()
    }

    /// Add a skill and clear the search. Already selected skills only clear
    /// the search.
    ///
    pub fn add_skill(&mut self, skill: &str) -> Option<JobPatch> {
        self.skill_search.clear();
        self.search_cursor = ListCursor::default();
        if self.skills.iter().any(|s| s == skill) {
            return None;
        }
        self.skills.push(skill.to_string());
        Some(self.skills_patch())
    }

    pub fn remove_skill(&mut self, index: usize) -> Option<JobPatch> {
        if index >= self.skills.len() {
            return None;
        }
        self.skills.remove(index);
        self.skills_cursor.clamp(self.skills.len());
        Some(self.skills_patch())
    }

    /// Attach a file by path. Only its display name is kept.
    ///
    pub fn add_attachment(&mut self, path: &str) -> Option<JobPatch> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let name = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());
        self.attachments.push(name);
        Some(self.attachments_patch())
    }

    pub fn remove_attachment(&mut self, index: usize) -> Option<JobPatch> {
        if index >= self.attachments.len() {
            return None;
        }
        self.attachments.remove(index);
        self.attachments_cursor.clamp(self.attachments.len());
        Some(self.attachments_patch())
    }

    pub fn validate(&self) -> Result<(), SubmitError> {
        validate_job(&self.title, &self.description, self.category, &self.skills)
    }

    /// The full draft written on submission. Custom budget bounds are kept
    /// only when the custom range is selected.
    ///
    pub fn submission_patch(&self) -> JobPatch {
        let custom = self.budget_range == BudgetRange::Custom;
        JobPatch {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            category: self.category,
            budget_range: Some(self.budget_range),
            custom_budget_min: Some(if custom { parse_bound(&self.budget_min) } else { None }),
            custom_budget_max: Some(if custom { parse_bound(&self.budget_max) } else { None }),
            experience_level: Some(self.experience),
            timeframe: Some(self.timeframe.clone()),
            skills: Some(self.skills.clone()),
            attachments: Some(self.attachments.clone()),
        }
    }

    fn skills_patch(&self) -> JobPatch {
        JobPatch {
            skills: Some(self.skills.clone()),
            ..JobPatch::default()
        }
    }

    fn attachments_patch(&self) -> JobPatch {
        JobPatch {
            attachments: Some(self.attachments.clone()),
            ..JobPatch::default()
        }
    }
}

impl Form for PostJobForm {
    type Field = JobField;
    type Patch = JobPatch;

    fn fields(&self) -> &'static [JobField] {
        &[
            JobField::Title,
            JobField::Description,
            JobField::Category,
            JobField::Budget,
            JobField::BudgetMin,
            JobField::BudgetMax,
            JobField::Experience,
            JobField::Timeframe,
            JobField::SkillSearch,
            JobField::Skills,
            JobField::Attachment,
            JobField::Attachments,
            JobField::Submit,
        ]
    }

    fn text_mut(&mut self, field: JobField) -> Option<&mut String> {
        match field {
            JobField::Title => Some(&mut self.title),
            JobField::Description => Some(&mut self.description),
            JobField::BudgetMin => Some(&mut self.budget_min),
            JobField::BudgetMax => Some(&mut self.budget_max),
            JobField::Timeframe => Some(&mut self.timeframe),
            JobField::SkillSearch => Some(&mut self.skill_search),
            JobField::Attachment => Some(&mut self.attachment),
            _ => None,
        }
    }

    fn edited(&mut self, field: JobField) -> Option<JobPatch> {
        match field {
            JobField::Title => Some(JobPatch {
                title: Some(self.title.clone()),
                ..JobPatch::default()
            }),
            JobField::Description => Some(JobPatch {
                description: Some(self.description.clone()),
                ..JobPatch::default()
            }),
            JobField::Timeframe => Some(JobPatch {
                timeframe: Some(self.timeframe.clone()),
                ..JobPatch::default()
            }),
            JobField::BudgetMin => {
                clean_bound(&mut self.budget_min);
                Some(JobPatch {
                    custom_budget_min: Some(parse_bound(&self.budget_min)),
                    ..JobPatch::default()
                })
            }
            JobField::BudgetMax => {
                clean_bound(&mut self.budget_max);
                Some(JobPatch {
                    custom_budget_max: Some(parse_bound(&self.budget_max)),
                    ..JobPatch::default()
                })
            }
            JobField::SkillSearch => {
                self.search_cursor = ListCursor::default();
                None
            }
            _ => None,
        }
    }

    fn step(&mut self, field: JobField, forward: bool) -> Option<JobPatch> {
        match field {
            JobField::Category => {
                self.category = Some(JobCategory::cycle_option(self.category, forward));
                Some(JobPatch {
                    category: self.category,
                    ..JobPatch::default()
                })
            }
            JobField::Budget => {
                self.budget_range = self.budget_range.cycle(forward);
                Some(JobPatch {
                    budget_range: Some(self.budget_range),
                    ..JobPatch::default()
                })
            }
            JobField::Experience => {
                self.experience = self.experience.cycle(forward);
                Some(JobPatch {
                    experience_level: Some(self.experience),
                    ..JobPatch::default()
                })
            }
            JobField::SkillSearch => {
                let len = self.filtered_skills().len();
                self.search_cursor.step(len, forward);
                None
            }
            JobField::Skills => {
                self.skills_cursor.step(self.skills.len(), forward);
                None
            }
            JobField::Attachments => {
                self.attachments_cursor.step(self.attachments.len(), forward);
                None
            }
            _ => None,
        }
    }

    fn activate(
        &mut self,
        field: JobField,
        _ids: &mut IdGenerator,
    ) -> Result<Effect<JobPatch>, EditorError> {
        let patch = match field {
            JobField::SkillSearch => {
                let options = self.filtered_skills();
                match self.search_cursor.selected(options.len()) {
                    Some(index) => self.add_skill(options[index]),
                    None => None,
                }
            }
            JobField::Attachment => {
                let path = std::mem::take(&mut self.attachment);
                self.add_attachment(&path)
            }
            JobField::Skills | JobField::Attachments => self.remove(field),
            JobField::Submit => return Ok(Effect::Submit),
            _ => None,
        };
        Ok(patch.into())
    }

    fn remove(&mut self, field: JobField) -> Option<JobPatch> {
        match field {
            JobField::Skills => {
                let index = self.skills_cursor.selected(self.skills.len())?;
                self.remove_skill(index)
            }
            JobField::Attachments => {
                let index = self.attachments_cursor.selected(self.attachments.len())?;
                self.remove_attachment(index)
            }
            _ => None,
        }
    }
}
