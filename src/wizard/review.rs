//! Completion checklist shown on the review step and the dashboard.

use crate::profile::FreelancerDraft;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Location,
    Skills,
    ProfileInfo,
    Portfolio,
    Services,
}

impl Criterion {
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Location => "Location",
            Criterion::Skills => "Skills",
            Criterion::ProfileInfo => "Profile info",
            Criterion::Portfolio => "Portfolio",
            Criterion::Services => "Services",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Required,
    Recommended,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Required => write!(f, "required"),
            Severity::Recommended => write!(f, "recommended"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    pub criterion: Criterion,
    pub satisfied: bool,
    pub severity: Severity,
}

fn filled(value: Option<&String>) -> bool {
    value.map_or(false, |v| !v.is_empty())
}

/// Evaluate every completion criterion against `draft`, in display order.
///
pub fn checklist(draft: &FreelancerDraft) -> Vec<ChecklistItem> {
    let item = |criterion, satisfied, severity| ChecklistItem {
        criterion,
        satisfied,
        severity,
    };
    vec![
        item(Criterion::Location, draft.city.is_some(), Severity::Required),
        item(Criterion::Skills, !draft.skills().is_empty(), Severity::Required),
        item(
            Criterion::ProfileInfo,
            filled(draft.title.as_ref()) && filled(draft.bio.as_ref()),
            Severity::Required,
        ),
        item(
            Criterion::Portfolio,
            !draft.projects().is_empty(),
            Severity::Recommended,
        ),
        item(
            Criterion::Services,
            !draft.services().is_empty(),
            Severity::Recommended,
        ),
    ]
}

/// Required criteria the draft does not meet yet.
///
pub fn missing_required(draft: &FreelancerDraft) -> Vec<Criterion> {
    checklist(draft)
        .into_iter()
        .filter(|item| item.severity == Severity::Required && !item.satisfied)
        .map(|item| item.criterion)
        .collect()
}

pub fn is_complete(draft: &FreelancerDraft) -> bool {
    missing_required(draft).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{City, FreelancerPatch, PortfolioProject};
    use fake::faker::lorem::en::{Paragraph, Word};
    use fake::Fake;

    #[test]
    fn empty_draft_misses_every_required_item() {
        let draft = FreelancerDraft::default();
        assert_eq!(
            missing_required(&draft),
            vec![Criterion::Location, Criterion::Skills, Criterion::ProfileInfo]
        );
        assert!(!is_complete(&draft));
    }

    #[test]
    fn city_only_draft_has_two_required_misses() {
        let mut draft = FreelancerDraft::default();
        draft.merge(FreelancerPatch::city(City::Gafsa));
        let items = checklist(&draft);
        assert!(items[0].satisfied);
        assert!(!items[1].satisfied);
        assert!(!items[2].satisfied);
        assert_eq!(missing_required(&draft).len(), 2);
    }

    #[test]
    fn whitespace_title_counts_as_filled() {
        let mut draft = FreelancerDraft::default();
        draft.merge(FreelancerPatch::title(" ".to_string()));
        draft.merge(FreelancerPatch::bio("x".to_string()));
        assert!(checklist(&draft)[2].satisfied);

        draft.merge(FreelancerPatch::title(String::new()));
        assert!(!checklist(&draft)[2].satisfied);
    }

    #[test]
    fn recommended_items_do_not_block_completion() {
        let mut draft = FreelancerDraft::default();
        draft.merge(FreelancerPatch::city(City::Tunis));
        draft.merge(FreelancerPatch::skills(vec![Word().fake()]));
        draft.merge(FreelancerPatch::title(Word().fake()));
        draft.merge(FreelancerPatch::bio(Paragraph(2..3).fake()));
        assert!(is_complete(&draft));
        let items = checklist(&draft);
        assert!(!items[3].satisfied);
        assert_eq!(items[3].severity, Severity::Recommended);

        draft.merge(FreelancerPatch::projects(vec![PortfolioProject::default()]));
        assert!(checklist(&draft)[3].satisfied);
    }
}
