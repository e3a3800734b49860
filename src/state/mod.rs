//! Persisted reactive UI state.

mod context;
mod models;
pub mod mvi;
mod reducer;
mod slice;

pub use context::{SliceName, StateContext};
pub use models::{Breadcrumb, NavMenu, SessionUser};
pub use reducer::{Record, SliceIntent, SliceReducer};
pub use slice::Slice;
