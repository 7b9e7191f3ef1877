use super::record::{ImageRef, RecordId};
use fake::Dummy;
use serde::Serialize;

/// Defines an external link attached to a portfolio project.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize)]
pub struct ProjectLink {
    pub url: String,
    pub title: String,
}

impl ProjectLink {
    pub fn is_complete(&self) -> bool {
        !self.url.trim().is_empty() && !self.title.trim().is_empty()
    }
}

/// Defines a client testimonial attached to a portfolio project.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub client: String,
    pub text: String,
}

impl Testimonial {
    pub fn is_complete(&self) -> bool {
        !self.client.trim().is_empty() && !self.text.trim().is_empty()
    }
}

/// Defines portfolio project data structure.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PortfolioProject {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub images: Vec<ImageRef>,
    pub links: Vec<ProjectLink>,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<Testimonial>,
}
