//! Assembles independently declared feature routes into route tables.

use super::entry::RouteEntry;
use super::table::RouteTable;
use super::RouteError;

/// Who may reach a feature's routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Reachable signed out and signed in.
    Public,
    /// Reachable only when signed in.
    Authenticated,
}

/// The routes of one feature area.
pub struct Feature<V> {
    pub name: &'static str,
    pub access: Access,
    pub routes: Vec<RouteEntry<V>>,
}

/// Ordered list of features. Declaration order is match order.
pub struct RouteComposer<V> {
    features: Vec<Feature<V>>,
}

impl<V> Default for RouteComposer<V> {
    fn default() -> Self {
        Self {
            features: Vec::new(),
        }
    }
}

impl<V: Clone> RouteComposer<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feature(
        mut self,
        name: &'static str,
        access: Access,
        routes: impl IntoIterator<Item = RouteEntry<V>>,
    ) -> Self {
        self.features.push(Feature {
            name,
            access,
            routes: routes.into_iter().collect(),
        });
        self
    }

    pub fn features(&self) -> &[Feature<V>] {
        &self.features
    }

    /// The table for the given authentication state.
    ///
    /// Signed in, every feature is included; signed out, only public ones.
    /// Relative order is preserved either way, so the public table is an
    /// ordered subsequence of the full one.
    pub fn compose(&self, authenticated: bool) -> Result<RouteTable<V>, RouteError> {
        RouteTable::build(
            self.features
                .iter()
                .filter(|feature| authenticated || feature.access == Access::Public)
                .map(|feature| (feature.name, feature.routes.as_slice())),
        )
    }
}
