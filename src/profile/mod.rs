//! Marketplace domain types.
//!
//! This module holds the records the onboarding flows collect:
//! - Freelancer profile draft and its patches
//! - Portfolio projects and service offerings
//! - Client job-posting draft
//! - Fixed catalogs (cities, skills, categories)

pub mod catalog;
mod draft;
mod error;
mod job;
mod project;
mod record;
mod service;

pub use catalog::{BudgetRange, City, Cyclic, JobCategory, JobExperience, ServiceCategory};
pub use draft::{Experience, FreelancerDraft, FreelancerPatch, HourlyRate, Language, Proficiency};
pub use error::SubmitError;
pub use job::{validate_job, ClientJobDraft, JobPatch};
pub use project::{PortfolioProject, ProjectLink, Testimonial};
pub use record::{IdGenerator, ImageRef, RecordId};
pub use service::{ServiceOffering, ServiceTier, ServiceTiers, TierKind};
