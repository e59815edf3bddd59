//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// An intent is either a key press routed to a feature (typing into the
/// contact form) or a system event (a rotator timer firing, an HTTP
/// submission completing).
pub trait Intent: Send + 'static {}
