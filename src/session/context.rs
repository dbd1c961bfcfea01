//! Demo session context provider
//!
//! A stand-in for real authentication: sign-in fabricates a fixed profile
//! and persists it to the session store, sign-out removes it. Not a security
//! boundary. The context object is injected at the top of the component tree
//! and read through the `use_session` hook.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::types::{SessionStatus, UserProfile};

use super::storage::SessionStore;
#[cfg(not(feature = "web"))]
use super::storage::MemoryStore;
#[cfg(feature = "web")]
use super::storage::BrowserStore;

/// Session context that provides the demo user state to the entire app.
#[derive(Clone)]
pub struct SessionContext {
    /// Current demo user (if signed in).
    pub user: Signal<Option<UserProfile>>,
    /// Current authentication status.
    pub status: Signal<SessionStatus>,
    store: Rc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self {
            user: Signal::new(None),
            status: Signal::new(SessionStatus::Loading),
            store,
        }
    }

    /// Check if the user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn status(&self) -> SessionStatus {
        *self.status.read()
    }

    pub fn credits(&self) -> i64 {
        self.user.read().as_ref().map(|u| u.credits).unwrap_or(0)
    }

    /// Read the store once and restore a previously signed-in session.
    pub fn restore(&self) {
        let mut user = self.user;
        let mut status = self.status;
        match self.store.load() {
            Some(profile) => {
                user.set(Some(profile));
                status.set(SessionStatus::Authenticated);
            }
            None => {
                user.set(None);
                status.set(SessionStatus::Unauthenticated);
            }
        }
    }

    /// Sign in with the fixed fabricated profile and persist it.
    pub fn sign_in(&self) {
        let profile = UserProfile::demo();
        self.store.save(&profile);

        let mut user = self.user;
        let mut status = self.status;
        user.set(Some(profile));
        status.set(SessionStatus::Authenticated);
    }

    /// Sign out and remove the durable record.
    pub fn sign_out(&self) {
        self.store.clear();

        let mut user = self.user;
        let mut status = self.status;
        user.set(None);
        status.set(SessionStatus::Unauthenticated);
    }
}

#[cfg(feature = "web")]
fn default_store() -> Rc<dyn SessionStore> {
    Rc::new(BrowserStore)
}

#[cfg(not(feature = "web"))]
fn default_store() -> Rc<dyn SessionStore> {
    Rc::new(MemoryStore::default())
}

/// Session provider component that wraps the app.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_hook(|| SessionContext::new(default_store()));

    use_context_provider(|| session.clone());

    // Restore any persisted session once on mount.
    use_effect(move || {
        session.restore();
    });

    children
}

/// Hook to access the session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::MemoryStore;
    use crate::types::Tier;

    #[test]
    fn sign_in_persists_and_a_fresh_load_restores_the_profile() {
        let store = Rc::new(MemoryStore::default());

        // Simulate the sign-in action writing through the store.
        store.save(&UserProfile::demo());

        // A fresh page load reads the same record back without re-prompting.
        let restored = store.load().expect("profile survives reload");
        assert_eq!(restored.id, "demo-user");
        assert_eq!(restored.name, "Demo User");
        assert_eq!(restored.email, "demo@hi-api.com");
        assert_eq!(restored.credits, 1_250);
        assert_eq!(restored.tier, Tier::Pro);
    }

    #[test]
    fn sign_out_clears_the_durable_record() {
        let store = Rc::new(MemoryStore::default());
        store.save(&UserProfile::demo());
        store.clear();
        assert!(store.load().is_none());
    }
}
