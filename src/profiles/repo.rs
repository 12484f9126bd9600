use std::sync::{Arc, PoisonError, RwLock};

use uuid::Uuid;

use super::repo_types::UserProfile;

/// The in-memory profile list, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profiles: Arc<RwLock<Vec<UserProfile>>>,
}

impl ProfileStore {
    pub fn list(&self) -> Vec<UserProfile> {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn insert(&self, profile: UserProfile) {
        self.profiles
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(profile);
    }

    /// Returns the removed profile, if it existed.
    pub fn remove(&self, id: Uuid) -> Option<UserProfile> {
        let mut profiles = self.profiles.write().unwrap_or_else(PoisonError::into_inner);
        let idx = profiles.iter().position(|p| p.id == id)?;
        Some(profiles.remove(idx))
    }

    pub fn get(&self, id: Uuid) -> Option<UserProfile> {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub fn first(&self) -> Option<UserProfile> {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .first()
            .cloned()
    }
}
