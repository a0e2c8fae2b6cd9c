//! The to-do list feature module.
//!
//! Holds the canonical item list, the load phase, the active status
//! tab, and the selection. Per-status views are derived by selectors
//! on the state, never stored.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Canonical list + derived selectors
//! - `intent.rs` - User actions and load results
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::TodoListIntent;
pub use reducer::TodoListReducer;
pub use state::{LoadPhase, StatusFilter, TodoListState};
