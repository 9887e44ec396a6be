//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are cloned to produce the next state, compared to detect changes
/// (e.g. a new notice), and hold everything the view needs to draw.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
