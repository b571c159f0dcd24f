//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// An intent is anything that may change view state:
/// - user input (typing a field, picking a category, pressing submit)
/// - collaborator callbacks (lookup hint, captured photo, persistence result)
///
/// Intents are applied strictly in arrival order by a reducer.
pub trait Intent: Send + 'static {}
