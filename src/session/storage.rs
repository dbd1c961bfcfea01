//! Durable storage backing the demo session
//!
//! A single named entry holds the serialized profile. The trait exists so the
//! backing can be swapped for a real identity provider without touching the
//! session consumers.

use crate::types::UserProfile;

/// Local-storage key holding the serialized demo profile.
pub const SESSION_KEY: &str = "demo-user";

/// Durable client-side store for the demo session record.
pub trait SessionStore {
    /// Read the stored profile, if any.
    fn load(&self) -> Option<UserProfile>;
    /// Persist the profile verbatim.
    fn save(&self, profile: &UserProfile);
    /// Remove the stored record.
    fn clear(&self);
}

/// Browser local storage, used in `web` builds.
#[cfg(feature = "web")]
pub struct BrowserStore;

#[cfg(feature = "web")]
impl SessionStore for BrowserStore {
    fn load(&self) -> Option<UserProfile> {
        use gloo_storage::Storage;
        gloo_storage::LocalStorage::get(SESSION_KEY).ok()
    }

    fn save(&self, profile: &UserProfile) {
        use gloo_storage::Storage;
        if let Err(err) = gloo_storage::LocalStorage::set(SESSION_KEY, profile) {
            tracing::warn!("failed to persist demo session: {err}");
        }
    }

    fn clear(&self) {
        use gloo_storage::Storage;
        gloo_storage::LocalStorage::delete(SESSION_KEY);
    }
}

/// In-memory store used by tests and non-web builds.
#[derive(Default)]
pub struct MemoryStore {
    entry: std::cell::RefCell<Option<UserProfile>>,
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<UserProfile> {
        self.entry.borrow().clone()
    }

    fn save(&self, profile: &UserProfile) {
        *self.entry.borrow_mut() = Some(profile.clone());
    }

    fn clear(&self) {
        *self.entry.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_the_profile() {
        let store = MemoryStore::default();
        assert!(store.load().is_none());

        let profile = UserProfile::demo();
        store.save(&profile);
        assert_eq!(store.load(), Some(profile));

        store.clear();
        assert!(store.load().is_none());
    }
}
