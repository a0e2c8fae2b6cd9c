use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TodoDialogIntent {
    /// Open a blank form for a new item.
    OpenCreate,
    /// Open a prefilled form for the item at a canonical index.
    OpenEdit {
        index: usize,
        title: String,
        description: String,
    },
    /// Append a character to the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Append a newline to the description. The title stays single-line.
    NewLine,
    /// Move focus to the other field.
    FocusNext,
    /// User pressed Escape. If dirty and not yet confirming, sets confirm_discard flag.
    /// If clean or already confirming, transitions to Hidden.
    RequestClose,
    /// Unconditionally hide (after a successful save).
    Close,
}

impl Intent for TodoDialogIntent {}
