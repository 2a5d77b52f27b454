//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (toggling the form, choosing a category)
/// - Completions of remote calls (items loaded, item created)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
