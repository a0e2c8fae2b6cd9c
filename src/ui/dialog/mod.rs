//! The add/edit dialog feature module.
//!
//! A centered overlay with a title field and a multi-line description
//! field. Submission is not a reducer concern: the `App` validates the
//! form, dispatches to the list store, and closes the dialog.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Hidden/Visible form state with focus and dirty tracking
//! - `intent.rs` - Keystrokes and open/close events
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `dialog.rs` - Overlay rendering

#[allow(clippy::module_inception)]
mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_dialog;
pub use intent::TodoDialogIntent;
pub use reducer::TodoDialogReducer;
pub use state::{DialogField, DialogMode, TodoDialogState};
