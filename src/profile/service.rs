use super::catalog::ServiceCategory;
use super::record::{ImageRef, RecordId};
use serde::Serialize;

/// Names the three packages every service offering carries.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TierKind {
    Basic,
    Standard,
    Premium,
}

impl TierKind {
    pub const ALL: [TierKind; 3] = [TierKind::Basic, TierKind::Standard, TierKind::Premium];

    pub fn label(&self) -> &'static str {
        match self {
            TierKind::Basic => "Basic",
            TierKind::Standard => "Standard",
            TierKind::Premium => "Premium",
        }
    }
}

/// Defines a single service package.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceTier {
    pub name: String,
    pub price: u32,
    pub description: String,
    pub delivery_days: u32,
    pub revisions: u32,
    pub features: Vec<String>,
}

impl ServiceTier {
    fn preset(name: &str, price: u32, delivery_days: u32, revisions: u32, features: u8) -> Self {
        ServiceTier {
            name: name.to_string(),
            price,
            description: String::new(),
            delivery_days,
            revisions,
            features: (1..=features).map(|n| format!("feature {}", n)).collect(),
        }
    }
}

/// All three packages of an offering. None of them can be omitted.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceTiers {
    pub basic: ServiceTier,
    pub standard: ServiceTier,
    pub premium: ServiceTier,
}

impl ServiceTiers {
    pub fn get(&self, kind: TierKind) -> &ServiceTier {
        match kind {
            TierKind::Basic => &self.basic,
            TierKind::Standard => &self.standard,
            TierKind::Premium => &self.premium,
        }
    }

    pub fn get_mut(&mut self, kind: TierKind) -> &mut ServiceTier {
        match kind {
            TierKind::Basic => &mut self.basic,
            TierKind::Standard => &mut self.standard,
            TierKind::Premium => &mut self.premium,
        }
    }
}

impl Default for ServiceTiers {
    fn default() -> Self {
        ServiceTiers {
            basic: ServiceTier::preset("Basic", 100, 3, 1, 1),
            standard: ServiceTier::preset("Standard", 200, 5, 2, 2),
            premium: ServiceTier::preset("Premium", 300, 7, 5, 3),
        }
    }
}

/// Defines service offering data structure.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub category: Option<ServiceCategory>,
    pub subcategory: Option<String>,
    pub thumbnail: Option<ImageRef>,
    pub tiers: ServiceTiers,
}

impl ServiceOffering {
    /// Switch category, clearing the subcategory picked under the old one.
    ///
    pub fn set_category(&mut self, category: ServiceCategory) {
        if self.category != Some(category) {
            self.category = Some(category);
            self.subcategory = None;
        }
    }

    /// Pick a subcategory. Returns false when it does not belong to the
    /// current category.
    ///
    pub fn set_subcategory(&mut self, subcategory: &str) -> bool {
        match self.category {
            Some(category) if category.subcategories().contains(&subcategory) => {
                self.subcategory = Some(subcategory.to_string());
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tiers_match_presets() {
        let tiers = ServiceTiers::default();
        assert_eq!(tiers.basic.price, 100);
        assert_eq!(tiers.standard.delivery_days, 5);
        assert_eq!(tiers.premium.revisions, 5);
        assert_eq!(
            tiers.premium.features,
            vec!["feature 1", "feature 2", "feature 3"]
        );
    }

    #[test]
    fn changing_category_clears_subcategory() {
        let mut service = ServiceOffering::default();
        service.set_category(ServiceCategory::Design);
        assert!(service.set_subcategory("Logo Design"));
        service.set_category(ServiceCategory::Writing);
        assert_eq!(service.subcategory, None);
    }

    #[test]
    fn reselecting_same_category_keeps_subcategory() {
        let mut service = ServiceOffering::default();
        service.set_category(ServiceCategory::Video);
        assert!(service.set_subcategory("Animation"));
        service.set_category(ServiceCategory::Video);
        assert_eq!(service.subcategory.as_deref(), Some("Animation"));
    }

    #[test]
    fn subcategory_must_belong_to_category() {
        let mut service = ServiceOffering::default();
        assert!(!service.set_subcategory("SEO"));
        service.set_category(ServiceCategory::Business);
        assert!(!service.set_subcategory("SEO"));
        assert_eq!(service.subcategory, None);
    }

    #[test]
    fn tier_accessors() {
        let mut tiers = ServiceTiers::default();
        tiers.get_mut(TierKind::Standard).price = 250;
        assert_eq!(tiers.get(TierKind::Standard).price, 250);
        assert_eq!(tiers.get(TierKind::Basic).price, 100);
    }
}
