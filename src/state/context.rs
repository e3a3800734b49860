//! Explicit container for every persisted slice.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

use crate::state::models::{Breadcrumb, NavMenu, SessionUser};
use crate::state::slice::Slice;
use crate::storage::Storage;

/// Identifier of each persisted slice.
///
/// The `as_str()` value is the storage key; once published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceName {
    Breadcrumb,
    NavData,
    Session,
}

impl SliceName {
    /// Stable storage key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breadcrumb => "breadcrumb",
            Self::NavData => "nav-data",
            Self::Session => "session",
        }
    }

    /// All variants for iteration.
    pub fn all() -> &'static [SliceName] {
        &[Self::Breadcrumb, Self::NavData, Self::Session]
    }

    /// Parse from storage key. Unknown keys return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|name| name.as_str() == s)
    }
}

impl fmt::Display for SliceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the application's slices over one injected storage.
///
/// Cheap to clone; clones share the same slices.
#[derive(Clone)]
pub struct StateContext {
    storage: Arc<dyn Storage>,
    breadcrumb: Slice<Breadcrumb>,
    nav: Slice<NavMenu>,
    session: Slice<SessionUser>,
}

impl StateContext {
    /// Rehydrate every slice from `storage`.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        Self {
            breadcrumb: Slice::load(SliceName::Breadcrumb.as_str(), storage.clone()),
            nav: Slice::load(SliceName::NavData.as_str(), storage.clone()),
            session: Slice::load(SliceName::Session.as_str(), storage.clone()),
            storage,
        }
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub fn breadcrumb(&self) -> &Slice<Breadcrumb> {
        &self.breadcrumb
    }

    pub fn nav(&self) -> &Slice<NavMenu> {
        &self.nav
    }

    pub fn session(&self) -> &Slice<SessionUser> {
        &self.session
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.session.get().into_iter().next()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.session.get().is_empty()
    }

    pub fn sign_in(&self, user: SessionUser) {
        self.session.set(vec![user]);
    }

    pub fn sign_out(&self) {
        self.session.clear();
    }

    /// Receiver that fires whenever the session slice changes.
    pub fn session_changes(&self) -> watch::Receiver<Vec<SessionUser>> {
        self.session.subscribe()
    }

    /// Current value of `name` as JSON.
    pub fn snapshot(&self, name: SliceName) -> serde_json::Value {
        let value = match name {
            SliceName::Breadcrumb => serde_json::to_value(self.breadcrumb.get()),
            SliceName::NavData => serde_json::to_value(self.nav.get()),
            SliceName::Session => serde_json::to_value(self.session.get()),
        };
        value.unwrap_or(serde_json::Value::Null)
    }

    pub fn clear(&self, name: SliceName) {
        match name {
            SliceName::Breadcrumb => self.breadcrumb.clear(),
            SliceName::NavData => self.nav.clear(),
            SliceName::Session => self.session.clear(),
        }
    }
}
