//! Client core for a code-hosting web front end: persisted UI state,
//! declarative route tables and typed REST wrappers.

pub mod api;
pub mod app;
pub mod config;
pub mod logging;
pub mod routes;
pub mod routing;
pub mod state;
pub mod storage;

pub use app::{App, AppError};
