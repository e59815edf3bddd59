//! Base trait for UI state in the MVI layer.

/// Marker trait for UI state objects.
///
/// `Default` lets callers move a state out of its owner with
/// `std::mem::take` before handing it to a reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
