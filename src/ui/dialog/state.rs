use crate::ui::mvi::UiState;

/// Which item the dialog writes to on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    /// Canonical index of the item being edited.
    Edit { index: usize },
}

/// The text field that receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    Title,
    Description,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TodoDialogState {
    #[default]
    Hidden,
    Visible {
        mode: DialogMode,
        title: String,
        description: String,
        focus: DialogField,
        dirty: bool,
        /// When true, next Escape will discard changes. Set on first Escape when dirty.
        confirm_discard: bool,
    },
}

impl UiState for TodoDialogState {}

impl TodoDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
