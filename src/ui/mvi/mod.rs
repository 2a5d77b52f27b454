//! Model-View-Intent (MVI) primitives for the list view.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or remote-call completions
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! Side effects (remote calls) live outside the reducer; their results come
//! back in as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
