//! Base trait for view state in the MVI layer.

/// Marker trait for view state snapshots.
///
/// A snapshot is replaced, never shared mutably: reducers take the old
/// value by move and return the next one. `Default` is the state a freshly
/// opened surface starts from.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
