//! Contact form feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Field contents, focus and submission status
//! - `intent.rs` - Key edits and delivery events
//! - `reducer.rs` - State transitions (pure, no side effects)
//!
//! The HTTP call and mail client handoff run outside the reducer; their
//! outcome comes back as `Fallback` / `Delivered` intents.

mod intent;
mod reducer;
mod state;

pub use intent::ContactIntent;
pub use reducer::ContactReducer;
pub use state::{ContactFormState, FormField, SubmitStatus};
