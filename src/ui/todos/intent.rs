use crate::model::Todo;
use crate::ui::mvi::Intent;

/// Actions handled by the to-do list store.
///
/// `Reload`/`Loaded`/`LoadFailed` come from the sync worker round trip;
/// the rest are user actions applied optimistically before they are
/// mirrored to the remote service.
#[derive(Debug, Clone)]
pub enum TodoListIntent {
    /// Enter the loading phase, clearing any previous error.
    Reload,
    /// Load finished: replace the canonical list wholesale.
    Loaded { todos: Vec<Todo> },
    /// Load failed: keep whatever list was shown, carry the message.
    LoadFailed { error: String },
    /// Append a freshly created item.
    Added { todo: Todo },
    /// Rewrite title and description of the item at a canonical index.
    Edited {
        index: usize,
        title: String,
        description: String,
    },
    /// Flip the completed flag of the item at a canonical index.
    Toggled { index: usize },
    /// Remove the item at a canonical index.
    Removed { index: usize },
    /// Move the selection within the visible list.
    SelectNext,
    SelectPrevious,
    /// Switch the active tab and reset the selection.
    SwitchFilter,
}

impl Intent for TodoListIntent {}
