use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

use super::pattern::Params;

/// Data a loader hands to its view.
pub type Props = serde_json::Value;

pub type LoaderFuture = Pin<Box<dyn Future<Output = Result<Props, LoaderError>> + Send>>;

/// Produces props from the matched parameters before a view renders.
pub type Loader = Arc<dyn Fn(Params) -> LoaderFuture + Send + Sync>;

/// Why a loader produced nothing. Never fails navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct LoaderError(pub String);

impl LoaderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// One node of a declared route tree.
pub struct RouteEntry<V> {
    pub(crate) path: String,
    pub(crate) view: V,
    pub(crate) children: Vec<RouteEntry<V>>,
    pub(crate) loader: Option<Loader>,
}

impl<V> RouteEntry<V> {
    pub fn new(path: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            view,
            children: Vec::new(),
            loader: None,
        }
    }

    /// Nest `child` under this entry; its path is relative to ours.
    pub fn child(mut self, child: RouteEntry<V>) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = RouteEntry<V>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn loader<F, Fut>(mut self, loader: F) -> Self
    where
        F: Fn(Params) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Props, LoaderError>> + Send + 'static,
    {
        self.loader = Some(Arc::new(move |params| Box::pin(loader(params)) as LoaderFuture));
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<V: fmt::Debug> fmt::Debug for RouteEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("view", &self.view)
            .field("children", &self.children)
            .field("loader", &self.loader.is_some())
            .finish()
    }
}
