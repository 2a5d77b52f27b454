//! Base trait for UI state in MVI architecture.

/// Marker trait for view state values.
///
/// A state is replaced, never mutated behind the view's back: reducers take
/// it by value and hand back the next one. `Default` is the state before the
/// first intent, and `PartialEq` lets a display surface skip redraws.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
