use crate::ui::mvi::Reducer;
use crate::ui::todos::intent::TodoListIntent;
use crate::ui::todos::state::{LoadPhase, TodoListState};

pub struct TodoListReducer;

impl Reducer for TodoListReducer {
    type State = TodoListState;
    type Intent = TodoListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TodoListIntent::Reload => TodoListState {
                phase: LoadPhase::Loading,
                ..state
            },
            TodoListIntent::Loaded { todos } => clamped(TodoListState {
                todos,
                phase: LoadPhase::Loaded,
                ..state
            }),
            TodoListIntent::LoadFailed { error } => TodoListState {
                phase: LoadPhase::Failed { error },
                ..state
            },
            TodoListIntent::Added { todo } => {
                let mut state = state;
                state.todos.push(todo);
                clamped(state)
            }
            TodoListIntent::Edited {
                index,
                title,
                description,
            } => {
                let mut state = state;
                if let Some(todo) = state.todos.get_mut(index) {
                    todo.title = title;
                    todo.description = description;
                }
                state
            }
            TodoListIntent::Toggled { index } => {
                let mut state = state;
                if let Some(todo) = state.todos.get_mut(index) {
                    todo.completed = !todo.completed;
                }
                clamped(state)
            }
            TodoListIntent::Removed { index } => {
                let mut state = state;
                if index < state.todos.len() {
                    state.todos.remove(index);
                }
                clamped(state)
            }
            TodoListIntent::SelectNext => {
                let mut state = state;
                let len = state.visible().len();
                if len > 0 && state.selected + 1 < len {
                    state.selected += 1;
                }
                state
            }
            TodoListIntent::SelectPrevious => {
                let mut state = state;
                state.selected = state.selected.saturating_sub(1);
                state
            }
            TodoListIntent::SwitchFilter => {
                let mut state = state;
                state.filter = state.filter.toggled();
                state.selected = 0;
                state
            }
        }
    }
}

/// Clamp the selection to the visible list after a mutation.
fn clamped(mut state: TodoListState) -> TodoListState {
    let len = state.visible().len();
    state.selected = state.selected.min(len.saturating_sub(1));
    state
}
