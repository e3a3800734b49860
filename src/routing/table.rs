//! An ordered, flattened route table. First match wins.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::entry::{Loader, RouteEntry};
use super::pattern::{Params, PathPattern};
use super::RouteError;

/// A route with its full path resolved.
pub struct CompiledRoute<V> {
    pattern: PathPattern,
    view: V,
    layouts: Vec<V>,
    feature: &'static str,
    loader: Option<Loader>,
}

impl<V> CompiledRoute<V> {
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Views of the enclosing entries, outermost first.
    pub fn layouts(&self) -> &[V] {
        &self.layouts
    }

    pub fn feature(&self) -> &'static str {
        self.feature
    }

    pub fn has_loader(&self) -> bool {
        self.loader.is_some()
    }
}

/// A matched route and its captured parameters.
pub struct RouteMatch<V> {
    route: Arc<CompiledRoute<V>>,
    params: Params,
}

impl<V> Clone for RouteMatch<V> {
    fn clone(&self) -> Self {
        Self {
            route: Arc::clone(&self.route),
            params: self.params.clone(),
        }
    }
}

impl<V> RouteMatch<V> {
    pub fn route(&self) -> &CompiledRoute<V> {
        &self.route
    }

    pub fn view(&self) -> &V {
        &self.route.view
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub(crate) fn loader(&self) -> Option<&Loader> {
        self.route.loader.as_ref()
    }
}

impl<V: fmt::Debug> fmt::Debug for RouteMatch<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("pattern", &self.route.pattern.to_string())
            .field("view", &self.route.view)
            .field("params", &self.params)
            .finish()
    }
}

pub struct RouteTable<V> {
    routes: Vec<Arc<CompiledRoute<V>>>,
}

impl<V: Clone> RouteTable<V> {
    /// Flatten feature route trees in declaration order, parents before
    /// children.
    ///
    /// Fails on an invalid pattern or when two routes have the same shape.
    pub(crate) fn build<'a, I>(features: I) -> Result<Self, RouteError>
    where
        V: 'a,
        I: IntoIterator<Item = (&'static str, &'a [RouteEntry<V>])>,
    {
        let mut routes = Vec::new();
        for (feature, entries) in features {
            for entry in entries {
                let pattern = PathPattern::parse(&entry.path)?;
                flatten(feature, entry, pattern, Vec::new(), &mut routes)?;
            }
        }

        let mut seen: HashMap<String, (&'static str, String)> = HashMap::new();
        for route in &routes {
            let shape = route.pattern.shape();
            if let Some((first_feature, first_pattern)) = seen.get(&shape) {
                return Err(RouteError::Collision {
                    first: first_pattern.clone(),
                    first_feature: *first_feature,
                    second: route.pattern.to_string(),
                    second_feature: route.feature,
                });
            }
            seen.insert(shape, (route.feature, route.pattern.to_string()));
        }

        Ok(Self { routes })
    }
}

impl<V> RouteTable<V> {
    /// First route matching `path`. Query and fragment are ignored.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<V>> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        self.routes.iter().find_map(|route| {
            route.pattern.matches(path).map(|params| RouteMatch {
                route: Arc::clone(route),
                params,
            })
        })
    }

    pub fn routes(&self) -> impl Iterator<Item = &CompiledRoute<V>> {
        self.routes.iter().map(|route| route.as_ref())
    }

    /// Full patterns in match order.
    pub fn patterns(&self) -> Vec<String> {
        self.routes.iter().map(|r| r.pattern.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn flatten<V: Clone>(
    feature: &'static str,
    entry: &RouteEntry<V>,
    pattern: PathPattern,
    layouts: Vec<V>,
    out: &mut Vec<Arc<CompiledRoute<V>>>,
) -> Result<(), RouteError> {
    let mut child_layouts = layouts.clone();
    child_layouts.push(entry.view.clone());

    out.push(Arc::new(CompiledRoute {
        pattern: pattern.clone(),
        view: entry.view.clone(),
        layouts,
        feature,
        loader: entry.loader.clone(),
    }));

    for child in &entry.children {
        let child_pattern = pattern.join(&child.path)?;
        flatten(feature, child, child_pattern, child_layouts.clone(), out)?;
    }
    Ok(())
}
