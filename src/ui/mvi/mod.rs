//! Model-View-Intent (MVI) primitives.
//!
//! Every stateful piece of the UI (the title rotator, the contact form)
//! is a plain state value plus a reducer that maps `(state, intent)` to the
//! next state. Side effects (timers, HTTP, redraw requests) live around the
//! dispatch call, never inside a reducer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
