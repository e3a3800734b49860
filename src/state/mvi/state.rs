//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting no-op intents)
/// - Defaultable (the empty state a slice falls back to)
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
