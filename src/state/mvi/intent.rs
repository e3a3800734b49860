//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent UI event handlers asking for a state change.
/// They are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
