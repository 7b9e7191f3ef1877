//! The client job-posting draft.

use super::catalog::{BudgetRange, JobCategory, JobExperience};
use super::error::SubmitError;
use serde::Serialize;

/// Accumulated job posting. Lives independently of the freelancer draft.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientJobDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<JobCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<BudgetRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_budget_min: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_budget_max: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<JobExperience>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,
}

/// A partial update to the job draft, merged the same way as the
/// freelancer patch.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<JobCategory>,
    pub budget_range: Option<BudgetRange>,
    pub custom_budget_min: Option<Option<u32>>,
    pub custom_budget_max: Option<Option<u32>>,
    pub experience_level: Option<JobExperience>,
    pub timeframe: Option<String>,
    pub skills: Option<Vec<String>>,
    pub attachments: Option<Vec<String>>,
}

impl ClientJobDraft {
    /// Shallow-merge a patch into the draft.
    ///
    pub fn merge(&mut self, patch: JobPatch) {
        let JobPatch {
            title,
            description,
            category,
            budget_range,
            custom_budget_min,
            custom_budget_max,
            experience_level,
            timeframe,
            skills,
            attachments,
        } = patch;
        if title.is_some() {
            self.title = title;
        }
        if description.is_some() {
            self.description = description;
        }
        if category.is_some() {
            self.category = category;
        }
        if budget_range.is_some() {
            self.budget_range = budget_range;
        }
        if custom_budget_min.is_some() {
            self.custom_budget_min = custom_budget_min;
        }
        if custom_budget_max.is_some() {
            self.custom_budget_max = custom_budget_max;
        }
        if experience_level.is_some() {
            self.experience_level = experience_level;
        }
        if timeframe.is_some() {
            self.timeframe = timeframe;
        }
        if skills.is_some() {
            self.skills = skills;
        }
        if attachments.is_some() {
            self.attachments = attachments;
        }
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or(&[])
    }

    pub fn attachments(&self) -> &[String] {
        self.attachments.as_deref().unwrap_or(&[])
    }

    /// Human readable budget, honouring custom bounds.
    ///
    pub fn budget_label(&self) -> String {
        match self.budget_range.unwrap_or_default() {
            BudgetRange::Custom => {
                let min = self.custom_budget_min.flatten();
                let max = self.custom_budget_max.flatten();
                match (min, max) {
                    (Some(min), Some(max)) => format!("{}-{} TND", min, max),
                    (Some(min), None) => format!("{}+ TND", min),
                    (None, Some(max)) => format!("up to {} TND", max),
                    (None, None) => "Custom Range".to_string(),
                }
            }
            range => range.label().to_string(),
        }
    }
}

/// Check the fields a job posting cannot be published without.
///
pub fn validate_job(
    title: &str,
    description: &str,
    category: Option<JobCategory>,
    skills: &[String],
) -> Result<(), SubmitError> {
    let mut fields = vec![];
    if title.trim().is_empty() {
        fields.push("title");
    }
    if description.trim().is_empty() {
        fields.push("description");
    }
    if category.is_none() {
        fields.push("category");
    }
    if skills.is_empty() {
        fields.push("skills");
    }
    if fields.is_empty() {
        Ok(())
    } else {
        Err(SubmitError::MissingRequiredFields { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_absent_fields() {
        let mut draft = ClientJobDraft::default();
        draft.merge(JobPatch {
            title: Some("Logo for a startup".to_string()),
            ..JobPatch::default()
        });
        draft.merge(JobPatch {
            category: Some(JobCategory::Design),
            ..JobPatch::default()
        });
        assert_eq!(draft.title.as_deref(), Some("Logo for a startup"));
        assert_eq!(draft.category, Some(JobCategory::Design));
    }

    #[test]
    fn merge_can_clear_custom_budget() {
        let mut draft = ClientJobDraft::default();
        draft.merge(JobPatch {
            custom_budget_min: Some(Some(300)),
            ..JobPatch::default()
        });
        draft.merge(JobPatch {
            custom_budget_min: Some(None),
            ..JobPatch::default()
        });
        assert_eq!(draft.custom_budget_min, Some(None));
    }

    #[test]
    fn budget_label_for_ranges() {
        let mut draft = ClientJobDraft::default();
        assert_eq!(draft.budget_label(), "200-500 TND");
        draft.budget_range = Some(BudgetRange::Custom);
        draft.custom_budget_min = Some(Some(150));
        draft.custom_budget_max = Some(Some(900));
        assert_eq!(draft.budget_label(), "150-900 TND");
        draft.custom_budget_max = Some(None);
        assert_eq!(draft.budget_label(), "150+ TND");
    }

    #[test]
    fn validate_job_lists_missing_fields() {
        let result = validate_job("", "Needs a logo", None, &[]);
        assert_eq!(
            result,
            Err(SubmitError::MissingRequiredFields {
                fields: vec!["title", "category", "skills"]
            })
        );
    }

    #[test]
    fn validate_job_accepts_complete_posting() {
        let skills = vec!["Logo Design".to_string()];
        assert!(validate_job("Logo", "Needs a logo", Some(JobCategory::Design), &skills).is_ok());
    }
}
