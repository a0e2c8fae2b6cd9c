use crate::ui::dialog::intent::TodoDialogIntent;
use crate::ui::dialog::state::{DialogField, DialogMode, TodoDialogState};
use crate::ui::mvi::Reducer;

pub struct TodoDialogReducer;

impl Reducer for TodoDialogReducer {
    type State = TodoDialogState;
    type Intent = TodoDialogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TodoDialogIntent::OpenCreate => TodoDialogState::Visible {
                mode: DialogMode::Create,
                title: String::new(),
                description: String::new(),
                focus: DialogField::Title,
                dirty: false,
                confirm_discard: false,
            },
            TodoDialogIntent::OpenEdit {
                index,
                title,
                description,
            } => TodoDialogState::Visible {
                mode: DialogMode::Edit { index },
                title,
                description,
                focus: DialogField::Title,
                dirty: false,
                confirm_discard: false,
            },
            TodoDialogIntent::Input(ch) => edit(state, |title, description, focus| {
                match focus {
                    DialogField::Title => title.push(ch),
                    DialogField::Description => description.push(ch),
                }
            }),
            TodoDialogIntent::Backspace => edit(state, |title, description, focus| {
                match focus {
                    DialogField::Title => {
                        title.pop();
                    }
                    DialogField::Description => {
                        description.pop();
                    }
                }
            }),
            TodoDialogIntent::NewLine => edit(state, |_, description, focus| {
                if focus == DialogField::Description {
                    description.push('\n');
                }
            }),
            TodoDialogIntent::FocusNext => match state {
                TodoDialogState::Visible {
                    mode,
                    title,
                    description,
                    focus,
                    dirty,
                    ..
                } => TodoDialogState::Visible {
                    mode,
                    title,
                    description,
                    focus: match focus {
                        DialogField::Title => DialogField::Description,
                        DialogField::Description => DialogField::Title,
                    },
                    dirty,
                    confirm_discard: false,
                },
                hidden => hidden,
            },
            TodoDialogIntent::RequestClose => match state {
                TodoDialogState::Visible {
                    dirty: true,
                    confirm_discard: false,
                    mode,
                    title,
                    description,
                    focus,
                } => {
                    // First Escape with unsaved changes: ask for confirmation
                    TodoDialogState::Visible {
                        mode,
                        title,
                        description,
                        focus,
                        dirty: true,
                        confirm_discard: true,
                    }
                }
                _ => {
                    // Clean state or already confirming: close
                    TodoDialogState::Hidden
                }
            },
            TodoDialogIntent::Close => TodoDialogState::Hidden,
        }
    }
}

/// Apply a field mutation; any edit marks the form dirty and disarms a
/// pending discard confirmation.
fn edit(
    state: TodoDialogState,
    apply: impl FnOnce(&mut String, &mut String, DialogField),
) -> TodoDialogState {
    match state {
        TodoDialogState::Visible {
            mode,
            mut title,
            mut description,
            focus,
            ..
        } => {
            apply(&mut title, &mut description, focus);
            TodoDialogState::Visible {
                mode,
                title,
                description,
                focus,
                dirty: true,
                confirm_discard: false,
            }
        }
        hidden => hidden,
    }
}
