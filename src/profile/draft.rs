//! The freelancer profile draft and the patches merged into it.

use super::catalog::{City, Cyclic};
use super::project::PortfolioProject;
use super::service::ServiceOffering;
use serde::Serialize;

/// Years of experience a freelancer claims.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    #[default]
    Entry,
    Intermediate,
    Expert,
    Master,
}

impl Experience {
    pub fn label(&self) -> &'static str {
        match self {
            Experience::Entry => "Entry Level (0-2 years)",
            Experience::Intermediate => "Intermediate (2-5 years)",
            Experience::Expert => "Expert (5-10 years)",
            Experience::Master => "Master (10+ years)",
        }
    }
}

impl Cyclic for Experience {
    const ALL: &'static [Experience] = &[
        Experience::Entry,
        Experience::Intermediate,
        Experience::Expert,
        Experience::Master,
    ];
}

/// How well a freelancer speaks a language.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Basic,
    Conversational,
    #[default]
    Fluent,
    Native,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Basic => "basic",
            Proficiency::Conversational => "conversational",
            Proficiency::Fluent => "fluent",
            Proficiency::Native => "native",
        }
    }
}

impl Cyclic for Proficiency {
    const ALL: &'static [Proficiency] = &[
        Proficiency::Basic,
        Proficiency::Conversational,
        Proficiency::Fluent,
        Proficiency::Native,
    ];
}

/// Defines a spoken language entry.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub language: String,
    pub proficiency: Proficiency,
}

/// Hourly rate in TND, kept within bounds and on the slider step.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct HourlyRate(u16);

impl HourlyRate {
    pub const MIN: u16 = 10;
    pub const MAX: u16 = 500;
    pub const STEP: u16 = 5;

    /// Clamp into `[MIN, MAX]` and snap to the nearest step.
    ///
    pub fn new(value: u16) -> Self {
        let clamped = value.clamp(Self::MIN, Self::MAX);
        let snapped = (clamped + Self::STEP / 2) / Self::STEP * Self::STEP;
        HourlyRate(snapped.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    /// Move one slider step up or down, saturating at the bounds.
    ///
    pub fn step(self, up: bool) -> Self {
        if up {
            HourlyRate::new(self.0.saturating_add(Self::STEP))
        } else {
            HourlyRate::new(self.0.saturating_sub(Self::STEP))
        }
    }
}

impl Default for HourlyRate {
    fn default() -> Self {
        HourlyRate(50)
    }
}

/// Accumulated freelancer profile. Every field stays optional until the
/// review step checks completeness.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FreelancerDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Experience>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<HourlyRate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<PortfolioProject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceOffering>>,
}

/// A partial update to the freelancer draft. Present fields replace the
/// draft's value wholesale; absent fields leave it alone.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FreelancerPatch {
    pub city: Option<City>,
    pub skills: Option<Vec<String>>,
    pub tools: Option<Vec<String>>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub experience: Option<Experience>,
    pub hourly_rate: Option<HourlyRate>,
    pub languages: Option<Vec<Language>>,
    pub projects: Option<Vec<PortfolioProject>>,
    pub services: Option<Vec<ServiceOffering>>,
}

impl FreelancerPatch {
    pub fn city(city: City) -> Self {
        FreelancerPatch {
            city: Some(city),
            ..FreelancerPatch::default()
        }
    }

    pub fn skills(skills: Vec<String>) -> Self {
        FreelancerPatch {
            skills: Some(skills),
            ..FreelancerPatch::default()
        }
    }

    pub fn tools(tools: Vec<String>) -> Self {
        FreelancerPatch {
            tools: Some(tools),
            ..FreelancerPatch::default()
        }
    }

    pub fn title(title: String) -> Self {
        FreelancerPatch {
            title: Some(title),
            ..FreelancerPatch::default()
        }
    }

    pub fn bio(bio: String) -> Self {
        FreelancerPatch {
            bio: Some(bio),
            ..FreelancerPatch::default()
        }
    }

    pub fn experience(experience: Experience) -> Self {
        FreelancerPatch {
            experience: Some(experience),
            ..FreelancerPatch::default()
        }
    }

    pub fn hourly_rate(rate: HourlyRate) -> Self {
        FreelancerPatch {
            hourly_rate: Some(rate),
            ..FreelancerPatch::default()
        }
    }

    pub fn languages(languages: Vec<Language>) -> Self {
        FreelancerPatch {
            languages: Some(languages),
            ..FreelancerPatch::default()
        }
    }

    pub fn projects(projects: Vec<PortfolioProject>) -> Self {
        FreelancerPatch {
            projects: Some(projects),
            ..FreelancerPatch::default()
        }
    }

    pub fn services(services: Vec<ServiceOffering>) -> Self {
        FreelancerPatch {
            services: Some(services),
            ..FreelancerPatch::default()
        }
    }
}

impl FreelancerDraft {
    /// Shallow-merge a patch into the draft.
    ///
    pub fn merge(&mut self, patch: FreelancerPatch) {
        let FreelancerPatch {
            city,
            skills,
            tools,
            title,
            bio,
            experience,
            hourly_rate,
            languages,
            projects,
            services,
        } = patch;
        if city.is_some() {
            self.city = city;
        }
        if skills.is_some() {
            self.skills = skills;
        }
        if tools.is_some() {
            self.tools = tools;
        }
        if title.is_some() {
            self.title = title;
        }
        if bio.is_some() {
            self.bio = bio;
        }
        if experience.is_some() {
            self.experience = experience;
        }
        if hourly_rate.is_some() {
            self.hourly_rate = hourly_rate;
        }
        if languages.is_some() {
            self.languages = languages;
        }
        if projects.is_some() {
            self.projects = projects;
        }
        if services.is_some() {
            self.services = services;
        }
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or(&[])
    }

    pub fn tools(&self) -> &[String] {
        self.tools.as_deref().unwrap_or(&[])
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn bio(&self) -> &str {
        self.bio.as_deref().unwrap_or("")
    }

    pub fn languages(&self) -> &[Language] {
        self.languages.as_deref().unwrap_or(&[])
    }

    pub fn projects(&self) -> &[PortfolioProject] {
        self.projects.as_deref().unwrap_or(&[])
    }

    pub fn services(&self) -> &[ServiceOffering] {
        self.services.as_deref().unwrap_or(&[])
    }
}
