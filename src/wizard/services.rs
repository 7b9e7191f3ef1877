//! Service offerings step.
//!
//! Works like the portfolio step, with a tier tab selecting which of the
//! three packages the tier fields edit. Switching tabs never discards the
//! other packages.

use super::editor::{EditorMode, ScratchEditor};
use super::error::EditorError;
use crate::form::{Effect, Field, FieldKind, Form, ListCursor};
use crate::profile::{
    Cyclic, FreelancerDraft, FreelancerPatch, IdGenerator, ImageRef, ServiceCategory,
    ServiceOffering, ServiceTier, TierKind,
};

/// Price adjustment per arrow key, in TND.
pub const PRICE_STEP: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceField {
    Title,
    Description,
    Category,
    Subcategory,
    Thumbnail,
    Tier,
    TierName,
    TierDescription,
    TierPrice,
    TierDelivery,
    TierRevisions,
    Feature,
    Features,
    Save,
    Cancel,
    Services,
}

impl Field for ServiceField {
    fn label(&self) -> &'static str {
        match self {
            ServiceField::Title => "Service title",
            ServiceField::Description => "Description",
            ServiceField::Category => "Category",
            ServiceField::Subcategory => "Subcategory",
            ServiceField::Thumbnail => "Thumbnail path",
            ServiceField::Tier => "Package",
            ServiceField::TierName => "Package name",
            ServiceField::TierDescription => "Package description",
            ServiceField::TierPrice => "Price (TND)",
            ServiceField::TierDelivery => "Delivery (days)",
            ServiceField::TierRevisions => "Revisions",
            ServiceField::Feature => "Feature",
            ServiceField::Features => "Features",
            ServiceField::Save => "Save service",
            ServiceField::Cancel => "Cancel edit",
            ServiceField::Services => "Your services",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            ServiceField::Title
            | ServiceField::Description
            | ServiceField::Thumbnail
            | ServiceField::TierName
            | ServiceField::TierDescription
            | ServiceField::Feature => FieldKind::Text,
            ServiceField::Features | ServiceField::Services => FieldKind::List,
            ServiceField::Save | ServiceField::Cancel => FieldKind::Action,
            _ => FieldKind::Choice,
        }
    }
}

/// Editor for the service offerings step.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ServicesStep {
    services: Vec<ServiceOffering>,
    editor: ScratchEditor<ServiceOffering>,
    active_tier: TierKind,
    thumbnail_path: String,
    feature: String,
    features_cursor: ListCursor,
    services_cursor: ListCursor,
}

impl ServicesStep {
    pub fn from_draft(draft: &FreelancerDraft) -> Self {
        ServicesStep {
            services: draft.services().to_vec(),
            editor: ScratchEditor::new(),
            active_tier: TierKind::Basic,
            thumbnail_path: String::new(),
            feature: String::new(),
            features_cursor: ListCursor::default(),
            services_cursor: ListCursor::default(),
        }
    }

    pub fn services(&self) -> &[ServiceOffering] {
        &self.services
    }

    pub fn scratch(&self) -> &ServiceOffering {
        self.editor.scratch()
    }

    pub fn mode(&self) -> EditorMode {
        self.editor.mode()
    }

    pub fn active_tier(&self) -> TierKind {
        self.active_tier
    }

    pub fn tier(&self) -> &ServiceTier {
        self.editor.scratch().tiers.get(self.active_tier)
    }

    pub fn input(&self, field: ServiceField) -> &str {
        match field {
            ServiceField::Title => &self.editor.scratch().title,
            ServiceField::Description => &self.editor.scratch().description,
            ServiceField::Thumbnail => &self.thumbnail_path,
            ServiceField::TierName => &self.tier().name,
            ServiceField::TierDescription => &self.tier().description,
            ServiceField::Feature => &self.feature,
            _ => "",
        }
    }

    pub fn cursor(&self, field: ServiceField) -> usize {
        match field {
            ServiceField::Features => self.features_cursor.index(),
            ServiceField::Services => self.services_cursor.index(),
            _ => 0,
        }
    }

    pub fn select_tier(&mut self, tier: TierKind) {
        self.active_tier = tier;
        self.features_cursor = ListCursor::default();
    }

    pub fn set_category(&mut self, category: ServiceCategory) {
        self.editor.scratch_mut().set_category(category);
    }

    /// Returns false when `subcategory` is not listed under the current
    /// category.
    ///
    pub fn set_subcategory(&mut self, subcategory: &str) -> bool {
        self.editor.scratch_mut().set_subcategory(subcategory)
    }

    fn cycle_subcategory(&mut self, forward: bool) {
        let scratch = self.editor.scratch();
        let options = match scratch.category {
            Some(category) => category.subcategories(),
            None => return,
        };
        if options.is_empty() {
            return;
        }
        let position = scratch
            .subcategory
            .as_deref()
            .and_then(|current| options.iter().position(|o| *o == current));
        let next = match (position, forward) {
            (Some(p), true) => (p + 1) % options.len(),
            (Some(p), false) => (p + options.len() - 1) % options.len(),
            (None, true) => 0,
            (None, false) => options.len() - 1,
        };
        self.set_subcategory(options[next]);
    }

    pub fn set_thumbnail(&mut self, image: ImageRef) {
        self.editor.scratch_mut().thumbnail = Some(image);
    }

    pub fn clear_thumbnail(&mut self) {
        self.editor.scratch_mut().thumbnail = None;
    }

    pub fn adjust_price(&mut self, up: bool) {
        let tier = self.tier_mut();
        tier.price = if up {
            tier.price.saturating_add(PRICE_STEP)
        } else {
            tier.price.saturating_sub(PRICE_STEP)
        };
    }

    pub fn adjust_delivery(&mut self, up: bool) {
        let tier = self.tier_mut();
        tier.delivery_days = if up {
            tier.delivery_days.saturating_add(1)
        } else {
            tier.delivery_days.saturating_sub(1).max(1)
        };
    }

    pub fn adjust_revisions(&mut self, up: bool) {
        let tier = self.tier_mut();
        tier.revisions = if up {
            tier.revisions.saturating_add(1)
        } else {
            tier.revisions.saturating_sub(1)
        };
    }

    pub fn add_feature(&mut self, feature: &str) -> Result<(), EditorError> {
        let feature = feature.trim();
        if feature.is_empty() {
            return Err(EditorError::EmptyValue("Feature"));
        }
        self.tier_mut().features.push(feature.to_string());
        Ok(())
    }

    pub fn remove_feature(&mut self, index: usize) -> Result<(), EditorError> {
        let features = &mut self.tier_mut().features;
        if index >= features.len() {
            return Err(EditorError::IndexOutOfRange {
                record: "feature",
                index,
            });
        }
        features.remove(index);
        let len = features.len();
        self.features_cursor.clamp(len);
        Ok(())
    }

    pub fn save_service(&mut self, ids: &mut IdGenerator) -> Result<FreelancerPatch, EditorError> {
        self.services = self.editor.commit(&self.services, ids)?;
        self.reset_inputs();
        Ok(FreelancerPatch::services(self.services.clone()))
    }

    /// Load a committed service for editing, starting on the Basic tab.
    ///
    pub fn edit_service(&mut self, index: usize) -> Result<(), EditorError> {
        self.editor.begin_edit(&self.services, index)?;
        self.reset_inputs();
        Ok(())
    }

    pub fn delete_service(&mut self, index: usize) -> Result<FreelancerPatch, EditorError> {
        let was_editing = self.editor.mode() == EditorMode::Edit(index);
        self.services = self.editor.delete(&self.services, index)?;
        if was_editing {
            self.reset_inputs();
        }
        self.services_cursor.clamp(self.services.len());
        Ok(FreelancerPatch::services(self.services.clone()))
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
        self.reset_inputs();
    }

    fn tier_mut(&mut self) -> &mut ServiceTier {
        let tier = self.active_tier;
        self.editor.scratch_mut().tiers.get_mut(tier)
    }

    fn reset_inputs(&mut self) {
        self.active_tier = TierKind::Basic;
        self.thumbnail_path.clear();
        self.feature.clear();
        self.features_cursor = ListCursor::default();
    }
}

impl Form for ServicesStep {
    type Field = ServiceField;
    type Patch = FreelancerPatch;

    fn fields(&self) -> &'static [ServiceField] {
        &[
            ServiceField::Title,
            ServiceField::Description,
            ServiceField::Category,
            ServiceField::Subcategory,
            ServiceField::Thumbnail,
            ServiceField::Tier,
            ServiceField::TierName,
            ServiceField::TierDescription,
            ServiceField::TierPrice,
            ServiceField::TierDelivery,
            ServiceField::TierRevisions,
            ServiceField::Feature,
            ServiceField::Features,
            ServiceField::Save,
            ServiceField::Cancel,
            ServiceField::Services,
        ]
    }

    fn text_mut(&mut self, field: ServiceField) -> Option<&mut String> {
        match field {
            ServiceField::Title => Some(&mut self.editor.scratch_mut().title),
            ServiceField::Description => Some(&mut self.editor.scratch_mut().description),
            ServiceField::Thumbnail => Some(&mut self.thumbnail_path),
            ServiceField::TierName => Some(&mut self.tier_mut().name),
            ServiceField::TierDescription => Some(&mut self.tier_mut().description),
            ServiceField::Feature => Some(&mut self.feature),
            _ => None,
        }
    }

    fn step(&mut self, field: ServiceField, forward: bool) -> Option<FreelancerPatch> {
        match field {
            ServiceField::Category => {
                let category = ServiceCategory::cycle_option(self.scratch().category, forward);
                self.set_category(category);
            }
            ServiceField::Subcategory => self.cycle_subcategory(forward),
            ServiceField::Tier => {
                let position = TierKind::ALL
                    .iter()
                    .position(|t| *t == self.active_tier)
                    .unwrap_or(0);
                let len = TierKind::ALL.len();
                let next = if forward {
                    (position + 1) % len
                } else {
                    (position + len - 1) % len
                };
                self.select_tier(TierKind::ALL[next]);
            }
            ServiceField::TierPrice => self.adjust_price(forward),
            ServiceField::TierDelivery => self.adjust_delivery(forward),
            ServiceField::TierRevisions => self.adjust_revisions(forward),
            ServiceField::Features => {
                let len = self.tier().features.len();
                self.features_cursor.step(len, forward);
            }
            ServiceField::Services => self.services_cursor.step(self.services.len(), forward),
            _ => {}
        }
        None
    }

    fn activate(
        &mut self,
        field: ServiceField,
        ids: &mut IdGenerator,
    ) -> Result<Effect<FreelancerPatch>, EditorError> {
        match field {
            ServiceField::Thumbnail => {
                let image = ImageRef::from_path(&self.thumbnail_path)
                    .ok_or(EditorError::EmptyValue("Thumbnail path"))?;
                self.set_thumbnail(image);
                self.thumbnail_path.clear();
            }
            ServiceField::Feature => {
                let feature = self.feature.clone();
                self.add_feature(&feature)?;
                self.feature.clear();
            }
            ServiceField::Features => return Ok(self.remove(field).into()),
            ServiceField::Save => return self.save_service(ids).map(Effect::Patch),
            ServiceField::Cancel => self.cancel_edit(),
            ServiceField::Services => {
                if let Some(index) = self.services_cursor.selected(self.services.len()) {
                    self.edit_service(index)?;
                }
            }
            _ => {}
        }
        Ok(Effect::None)
    }

    fn remove(&mut self, field: ServiceField) -> Option<FreelancerPatch> {
        match field {
            ServiceField::Thumbnail => {
                self.clear_thumbnail();
                None
            }
            ServiceField::Features => {
                let index = self.features_cursor.selected(self.tier().features.len())?;
                self.remove_feature(index).ok()?;
                None
            }
            ServiceField::Services => {
                let index = self.services_cursor.selected(self.services.len())?;
                self.delete_service(index).ok()
            }
            _ => None,
        }
    }
}
