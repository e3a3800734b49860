//! Declarative route tables.
//!
//! Feature areas declare route trees independently; [`RouteComposer`]
//! concatenates them in order and [`Router`] picks the public or full
//! table from the authentication flag.

mod composer;
mod entry;
mod generation;
mod pattern;
mod router;
mod table;

use thiserror::Error;

pub use composer::{Access, Feature, RouteComposer};
pub use entry::{Loader, LoaderError, LoaderFuture, Props, RouteEntry};
pub use generation::{Generation, Ticket};
pub use pattern::{Params, PathPattern, SPLAT};
pub use router::{NavigateOutcome, Navigation, Router};
pub use table::{CompiledRoute, RouteMatch, RouteTable};

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error(
        "Route '{second}' ({second_feature}) collides with '{first}' ({first_feature})"
    )]
    Collision {
        first: String,
        first_feature: &'static str,
        second: String,
        second_feature: &'static str,
    },
}
