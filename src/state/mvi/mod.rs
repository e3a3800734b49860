//! Model-View-Intent primitives for persisted UI state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Slice::set ──→ subscribers + storage
//! ```
//!
//! - **State**: plain value held by a slice
//! - **Intent**: a requested mutation (append, remove, ...)
//! - **Reducer**: pure function producing the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
