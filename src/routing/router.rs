//! Active route table selection and navigation.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::composer::RouteComposer;
use super::entry::Props;
use super::generation::{Generation, Ticket};
use super::table::{RouteMatch, RouteTable};
use super::RouteError;

/// A committed navigation.
pub struct Navigation<V> {
    pub location: String,
    pub matched: RouteMatch<V>,
    /// Loader output; `None` without a loader or when it failed.
    pub props: Option<Props>,
}

impl<V> Clone for Navigation<V> {
    fn clone(&self) -> Self {
        Self {
            location: self.location.clone(),
            matched: self.matched.clone(),
            props: self.props.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Navigation<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigation")
            .field("location", &self.location)
            .field("matched", &self.matched)
            .field("props", &self.props)
            .finish()
    }
}

#[derive(Debug)]
pub enum NavigateOutcome<V> {
    Committed(Navigation<V>),
    /// Nothing in the active table matched; navigation state was cleared.
    NotFound { location: String },
    /// A later navigation or an auth switch superseded this one.
    Stale,
}

struct RouterState<V> {
    authenticated: bool,
    current: Option<Navigation<V>>,
}

/// Holds the public and full tables and the current navigation.
pub struct Router<V> {
    public: Arc<RouteTable<V>>,
    full: Arc<RouteTable<V>>,
    state: Mutex<RouterState<V>>,
    generation: Generation,
}

impl<V: Clone> Router<V> {
    /// Compose both tables up front so a later auth switch cannot fail.
    pub fn new(composer: &RouteComposer<V>, authenticated: bool) -> Result<Self, RouteError> {
        let public = Arc::new(composer.compose(false)?);
        let full = Arc::new(composer.compose(true)?);
        Ok(Self {
            public,
            full,
            state: Mutex::new(RouterState {
                authenticated,
                current: None,
            }),
            generation: Generation::new(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.lock().authenticated
    }

    /// Table for the current authentication state.
    pub fn active_table(&self) -> Arc<RouteTable<V>> {
        let state = self.state.lock();
        self.table_for(state.authenticated)
    }

    pub fn table_for(&self, authenticated: bool) -> Arc<RouteTable<V>> {
        if authenticated {
            Arc::clone(&self.full)
        } else {
            Arc::clone(&self.public)
        }
    }

    /// Apply a new authentication flag.
    ///
    /// A change switches the active table, drops the current navigation and
    /// stales every navigation still loading. Returns whether it changed.
    pub fn set_authenticated(&self, authenticated: bool) -> bool {
        let mut state = self.state.lock();
        if state.authenticated == authenticated {
            return false;
        }
        self.generation.invalidate();
        state.authenticated = authenticated;
        state.current = None;
        tracing::info!(
            authenticated,
            routes = self.table_for(authenticated).len(),
            "Route table switched"
        );
        true
    }

    pub fn current(&self) -> Option<Navigation<V>> {
        self.state.lock().current.clone()
    }

    /// Match without loading or committing.
    pub fn resolve(&self, location: &str) -> Option<RouteMatch<V>> {
        self.active_table().resolve(location)
    }

    /// Match `location`, run its loader, and commit the result unless a
    /// newer navigation or an auth switch happened meanwhile.
    pub async fn navigate(&self, location: &str) -> NavigateOutcome<V> {
        self.navigate_then(location, |_| {}).await
    }

    /// Like [`Router::navigate`], running `on_commit` inside the commit.
    ///
    /// `on_commit` runs under the router lock, so an auth switch either
    /// happens before it (and the navigation is stale) or after it.
    pub async fn navigate_then<F>(&self, location: &str, on_commit: F) -> NavigateOutcome<V>
    where
        F: FnOnce(&Navigation<V>),
    {
        let (ticket, table) = self.begin();

        let Some(matched) = table.resolve(location) else {
            let mut state = self.state.lock();
            if !self.generation.is_current(ticket) {
                return NavigateOutcome::Stale;
            }
            state.current = None;
            return NavigateOutcome::NotFound {
                location: location.to_string(),
            };
        };

        let props = match matched.loader() {
            Some(loader) => match loader(matched.params().clone()).await {
                Ok(props) => Some(props),
                Err(e) => {
                    tracing::warn!(location, "Route loader failed: {}", e);
                    None
                }
            },
            None => None,
        };

        let mut state = self.state.lock();
        if !self.generation.is_current(ticket) {
            tracing::debug!(location, "Discarding stale navigation");
            return NavigateOutcome::Stale;
        }
        let navigation = Navigation {
            location: location.to_string(),
            matched,
            props,
        };
        on_commit(&navigation);
        state.current = Some(navigation.clone());
        NavigateOutcome::Committed(navigation)
    }

    fn begin(&self) -> (Ticket, Arc<RouteTable<V>>) {
        let state = self.state.lock();
        (self.generation.next(), self.table_for(state.authenticated))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::routing::{Access, Params, RouteEntry};

    fn composer() -> RouteComposer<&'static str> {
        RouteComposer::new()
            .feature("home", Access::Public, [RouteEntry::new("/", "landing")])
            .feature(
                "slow",
                Access::Authenticated,
                [RouteEntry::new("/slow", "slow").loader(|_: Params| async {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    Ok(serde_json::json!({ "loaded": true }))
                })],
            )
    }

    #[tokio::test]
    async fn commit_hook_runs_once_on_commit() {
        let router = Router::new(&composer(), true).unwrap();
        let calls = AtomicUsize::new(0);
        let outcome = router
            .navigate_then("/", |nav| {
                assert_eq!(nav.location, "/");
                calls.fetch_add(1, Ordering::SeqCst);
            })
            .await;
        assert!(matches!(outcome, NavigateOutcome::Committed(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn commit_hook_skipped_when_stale() {
        let router = Router::new(&composer(), true).unwrap();
        let calls = AtomicUsize::new(0);
        let (outcome, _) = tokio::join!(
            router.navigate_then("/slow", |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            }),
            async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                router.set_authenticated(false);
            }
        );
        assert!(matches!(outcome, NavigateOutcome::Stale));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(router.current().is_none());
    }
}
