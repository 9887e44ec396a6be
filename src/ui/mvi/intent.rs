//! Base trait for intents in the panel's MVI loop.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Key presses (edit, toggle, save)
/// - API results (settings fetched, save failed)
/// - Timers (notice expiry)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
