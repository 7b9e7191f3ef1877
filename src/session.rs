//! Shared session state.
//!
//! The `SessionStore` is created once when the application starts and handed
//! by reference to every page. All mutation goes through the named
//! operations below; nothing here can fail.

use crate::profile::{ClientJobDraft, FreelancerDraft, FreelancerPatch, IdGenerator, JobPatch};
use log::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Specifying which side of the marketplace the user joins as.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    None,
    Freelancer,
    Client,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::None => "none",
            UserType::Freelancer => "freelancer",
            UserType::Client => "client",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "freelancer" => Ok(UserType::Freelancer),
            "client" => Ok(UserType::Client),
            other => Err(format!("Unknown user type '{}'", other)),
        }
    }
}

/// Houses the onboarding data every page reads and mutates.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    user_type: UserType,
    is_authenticated: bool,
    wizard_step_index: usize,
    freelancer_draft: FreelancerDraft,
    client_job_draft: ClientJobDraft,
    profile_published: bool,
    ids: IdGenerator,
}

impl Default for SessionStore {
    fn default() -> Self {
        SessionStore {
            user_type: UserType::None,
            is_authenticated: false,
            wizard_step_index: 1,
            freelancer_draft: FreelancerDraft::default(),
            client_job_draft: ClientJobDraft::default(),
            profile_published: false,
            ids: IdGenerator::new(),
        }
    }
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    pub fn set_user_type(&mut self, user_type: UserType) -> &mut Self {
        debug!("Setting user type to '{}'...", user_type);
        self.user_type = user_type;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn set_is_authenticated(&mut self, authenticated: bool) -> &mut Self {
        self.is_authenticated = authenticated;
        self
    }

    pub fn wizard_step_index(&self) -> usize {
        self.wizard_step_index
    }

    /// Set the wizard position. Bounds are the caller's responsibility.
    ///
    pub fn set_wizard_step_index(&mut self, index: usize) -> &mut Self {
        self.wizard_step_index = index;
        self
    }

    pub fn freelancer_draft(&self) -> &FreelancerDraft {
        &self.freelancer_draft
    }

    pub fn merge_freelancer_draft(&mut self, patch: FreelancerPatch) -> &mut Self {
        self.freelancer_draft.merge(patch);
        self
    }

    pub fn client_job_draft(&self) -> &ClientJobDraft {
        &self.client_job_draft
    }

    pub fn merge_client_job_draft(&mut self, patch: JobPatch) -> &mut Self {
        self.client_job_draft.merge(patch);
        self
    }

    pub fn is_profile_published(&self) -> bool {
        self.profile_published
    }

    pub fn mark_profile_published(&mut self) -> &mut Self {
        self.profile_published = true;
        self
    }

    /// Id generator shared by every record editor, so ids stay unique for
    /// the whole session.
    ///
    pub fn id_generator(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    /// Restore every field to its initial value. The id generator keeps
    /// counting so ids never repeat within a session.
    ///
    pub fn reset(&mut self) -> &mut Self {
        info!("Resetting onboarding session...");
        let ids = std::mem::take(&mut self.ids);
        *self = SessionStore {
            ids,
            ..SessionStore::default()
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::City;

    #[test]
    fn new_store_is_empty() {
        let store = SessionStore::new();
        assert_eq!(store.user_type(), UserType::None);
        assert!(!store.is_authenticated());
        assert_eq!(store.wizard_step_index(), 1);
        assert_eq!(*store.freelancer_draft(), FreelancerDraft::default());
        assert_eq!(*store.client_job_draft(), ClientJobDraft::default());
    }

    #[test]
    fn set_user_type_touches_nothing_else() {
        let mut store = SessionStore::new();
        store.merge_freelancer_draft(FreelancerPatch::city(City::Sousse));
        store.set_user_type(UserType::Freelancer);
        assert_eq!(store.user_type(), UserType::Freelancer);
        assert_eq!(store.freelancer_draft().city, Some(City::Sousse));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn store_does_not_clamp_step_index() {
        let mut store = SessionStore::new();
        store.set_wizard_step_index(42);
        assert_eq!(store.wizard_step_index(), 42);
    }

    #[test]
    fn drafts_are_independent() {
        let mut store = SessionStore::new();
        store.merge_client_job_draft(JobPatch {
            title: Some("Landing page".to_string()),
            ..JobPatch::default()
        });
        store.merge_freelancer_draft(FreelancerPatch::title("Designer".to_string()));
        assert_eq!(store.client_job_draft().title.as_deref(), Some("Landing page"));
        assert_eq!(store.freelancer_draft().title(), "Designer");
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut store = SessionStore::new();
        store
            .set_user_type(UserType::Client)
            .set_is_authenticated(true)
            .set_wizard_step_index(4)
            .mark_profile_published()
            .merge_freelancer_draft(FreelancerPatch::city(City::Bizerte));
        store.reset();
        assert_eq!(store.user_type(), UserType::None);
        assert!(!store.is_authenticated());
        assert_eq!(store.wizard_step_index(), 1);
        assert!(!store.is_profile_published());
        assert_eq!(*store.freelancer_draft(), FreelancerDraft::default());
    }

    #[test]
    fn ids_stay_unique_across_reset() {
        let mut store = SessionStore::new();
        let first = store.id_generator().next_id();
        store.reset();
        let second = store.id_generator().next_id();
        assert_ne!(first, second);
    }

    #[test]
    fn user_type_round_trips_through_path_segment() {
        assert_eq!("freelancer".parse::<UserType>(), Ok(UserType::Freelancer));
        assert_eq!(UserType::Client.to_string(), "client");
        assert!("admin".parse::<UserType>().is_err());
    }
}
