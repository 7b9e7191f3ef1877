//! Fixed enumerations offered by the onboarding forms.
//!
//! Cities, skill and tool catalogs, service categories and the job-posting
//! option sets all live here so every editor picks from the same lists.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Enumerations that a form can step through with the arrow keys.
///
pub trait Cyclic: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    /// Return the neighbouring value, wrapping at both ends.
    ///
    fn cycle(self, forward: bool) -> Self {
        let len = Self::ALL.len();
        let position = Self::ALL.iter().position(|v| *v == self).unwrap_or(0);
        let next = if forward {
            (position + 1) % len
        } else {
            (position + len - 1) % len
        };
        Self::ALL[next]
    }

    /// Step an optional value; an unset value starts at the first option.
    ///
    fn cycle_option(value: Option<Self>, forward: bool) -> Self {
        match value {
            Some(value) => value.cycle(forward),
            None if forward => Self::ALL[0],
            None => Self::ALL[Self::ALL.len() - 1],
        }
    }
}

/// Cities a freelancer can be based in.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum City {
    Tunis,
    Sfax,
    Sousse,
    Kairouan,
    Bizerte,
    Gabes,
    Ariana,
    Gafsa,
    Monastir,
    BenArous,
    Kasserine,
    Medenine,
    Nabeul,
    Tataouine,
    Beja,
    Jendouba,
    ElKef,
    Mahdia,
    SidiBouzid,
    Tozeur,
    Siliana,
    Zaghouan,
    Kebili,
}

impl City {
    pub fn name(&self) -> &'static str {
        match self {
            City::Tunis => "Tunis",
            City::Sfax => "Sfax",
            City::Sousse => "Sousse",
            City::Kairouan => "Kairouan",
            City::Bizerte => "Bizerte",
            City::Gabes => "Gabès",
            City::Ariana => "Ariana",
            City::Gafsa => "Gafsa",
            City::Monastir => "Monastir",
            City::BenArous => "Ben Arous",
            City::Kasserine => "Kasserine",
            City::Medenine => "Médenine",
            City::Nabeul => "Nabeul",
            City::Tataouine => "Tataouine",
            City::Beja => "Béja",
            City::Jendouba => "Jendouba",
            City::ElKef => "El Kef",
            City::Mahdia => "Mahdia",
            City::SidiBouzid => "Sidi Bouzid",
            City::Tozeur => "Tozeur",
            City::Siliana => "Siliana",
            City::Zaghouan => "Zaghouan",
            City::Kebili => "Kébili",
        }
    }
}

impl Cyclic for City {
    const ALL: &'static [City] = &[
        City::Tunis,
        City::Sfax,
        City::Sousse,
        City::Kairouan,
        City::Bizerte,
        City::Gabes,
        City::Ariana,
        City::Gafsa,
        City::Monastir,
        City::BenArous,
        City::Kasserine,
        City::Medenine,
        City::Nabeul,
        City::Tataouine,
        City::Beja,
        City::Jendouba,
        City::ElKef,
        City::Mahdia,
        City::SidiBouzid,
        City::Tozeur,
        City::Siliana,
        City::Zaghouan,
        City::Kebili,
    ];
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .iter()
            .find(|city| city.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown city '{}'", s))
    }
}

/// Skill groups shown on the skills step.
///
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Design",
        &[
            "UI/UX Design",
            "Graphic Design",
            "Logo Design",
            "Illustration",
            "Animation",
            "3D Modeling",
        ],
    ),
    (
        "Development",
        &[
            "Web Development",
            "Mobile Development",
            "Frontend",
            "Backend",
            "Full Stack",
            "Game Development",
        ],
    ),
    (
        "Marketing",
        &[
            "Social Media",
            "SEO",
            "Content Marketing",
            "Email Marketing",
            "PPC",
            "Analytics",
        ],
    ),
    (
        "Writing",
        &[
            "Copywriting",
            "Content Writing",
            "Technical Writing",
            "Translation",
            "Editing",
            "Proofreading",
        ],
    ),
    (
        "Video & Audio",
        &[
            "Video Editing",
            "Video Production",
            "Voice Over",
            "Sound Design",
            "Music Production",
            "Podcasting",
        ],
    ),
];

/// Tools and software a freelancer can list.
///
pub const TOOLS: &[&str] = &[
    "Figma",
    "Photoshop",
    "Illustrator",
    "After Effects",
    "Sketch",
    "InVision",
    "VS Code",
    "React",
    "Angular",
    "Vue.js",
    "Node.js",
    "WordPress",
    "Google Analytics",
    "Mailchimp",
    "HubSpot",
    "Ahrefs",
    "SEMrush",
    "Final Cut Pro",
    "Adobe Premiere",
    "Audacity",
    "Adobe XD",
    "Canva",
];

/// Every catalog skill paired with its group, in display order.
///
pub fn skill_catalog() -> impl Iterator<Item = (&'static str, &'static str)> {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|(group, skills)| skills.iter().map(move |skill| (*group, *skill)))
}

/// Top-level categories for service offerings.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    Design,
    WebDevelopment,
    Writing,
    Video,
    Marketing,
    Business,
}

impl ServiceCategory {
    pub fn slug(&self) -> &'static str {
        match self {
            ServiceCategory::Design => "design",
            ServiceCategory::WebDevelopment => "web-development",
            ServiceCategory::Writing => "writing",
            ServiceCategory::Video => "video",
            ServiceCategory::Marketing => "marketing",
            ServiceCategory::Business => "business",
        }
    }

    /// Subcategories allowed under this category.
    ///
    pub fn subcategories(&self) -> &'static [&'static str] {
        match self {
            ServiceCategory::Design => &[
                "Graphic Design",
                "UI/UX Design",
                "Logo Design",
                "Web Design",
                "Illustration",
            ],
            ServiceCategory::WebDevelopment => &[
                "Frontend",
                "Backend",
                "Full Stack",
                "WordPress",
                "E-commerce",
            ],
            ServiceCategory::Writing => &[
                "Content Writing",
                "Copywriting",
                "Translation",
                "Proofreading",
                "Technical Writing",
            ],
            ServiceCategory::Video => &[
                "Video Editing",
                "Animation",
                "Motion Graphics",
                "Video Production",
            ],
            ServiceCategory::Marketing => &[
                "Social Media",
                "SEO",
                "Email Marketing",
                "Content Marketing",
                "PPC",
            ],
            ServiceCategory::Business => &[
                "Consulting",
                "Virtual Assistant",
                "Data Entry",
                "Customer Service",
            ],
        }
    }
}

impl Cyclic for ServiceCategory {
    const ALL: &'static [ServiceCategory] = &[
        ServiceCategory::Design,
        ServiceCategory::WebDevelopment,
        ServiceCategory::Writing,
        ServiceCategory::Video,
        ServiceCategory::Marketing,
        ServiceCategory::Business,
    ];
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Categories a client can file a job under.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobCategory {
    Design,
    WebDev,
    MobileDev,
    Writing,
    Marketing,
    Video,
    Business,
}

impl JobCategory {
    pub fn label(&self) -> &'static str {
        match self {
            JobCategory::Design => "Design & Creative",
            JobCategory::WebDev => "Web Development",
            JobCategory::MobileDev => "Mobile Development",
            JobCategory::Writing => "Writing & Translation",
            JobCategory::Marketing => "Digital Marketing",
            JobCategory::Video => "Video & Animation",
            JobCategory::Business => "Business",
        }
    }
}

impl Cyclic for JobCategory {
    const ALL: &'static [JobCategory] = &[
        JobCategory::Design,
        JobCategory::WebDev,
        JobCategory::MobileDev,
        JobCategory::Writing,
        JobCategory::Marketing,
        JobCategory::Video,
        JobCategory::Business,
    ];
}

/// Budget brackets for a job posting, in TND.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetRange {
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
    Custom,
}

impl BudgetRange {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::Low => "50-200 TND",
            BudgetRange::Medium => "200-500 TND",
            BudgetRange::High => "500-1000 TND",
            BudgetRange::VeryHigh => "1000+ TND",
            BudgetRange::Custom => "Custom Range",
        }
    }
}

impl Cyclic for BudgetRange {
    const ALL: &'static [BudgetRange] = &[
        BudgetRange::Low,
        BudgetRange::Medium,
        BudgetRange::High,
        BudgetRange::VeryHigh,
        BudgetRange::Custom,
    ];
}

/// Experience a client asks for on a job posting.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobExperience {
    Entry,
    #[default]
    Intermediate,
    Expert,
}

impl JobExperience {
    pub fn label(&self) -> &'static str {
        match self {
            JobExperience::Entry => "Entry Level",
            JobExperience::Intermediate => "Intermediate",
            JobExperience::Expert => "Expert",
        }
    }
}

impl Cyclic for JobExperience {
    const ALL: &'static [JobExperience] = &[
        JobExperience::Entry,
        JobExperience::Intermediate,
        JobExperience::Expert,
    ];
}

/// Skills a client can require on a job posting.
///
pub const JOB_SKILL_OPTIONS: &[&str] = &[
    "UI/UX Design",
    "Graphic Design",
    "Web Development",
    "Mobile Development",
    "Content Writing",
    "SEO",
    "Video Editing",
    "Digital Marketing",
    "Translation",
    "3D Modeling",
    "Animation",
    "Photography",
    "Voice Over",
    "Logo Design",
    "Illustration",
    "Copywriting",
    "Data Entry",
    "Virtual Assistant",
    "Social Media Management",
];
