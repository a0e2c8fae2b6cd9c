//! State for the to-do list store.

use crate::model::Todo;
use crate::ui::mvi::UiState;

/// Load lifecycle of the canonical list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    /// Initial load or reload in flight.
    #[default]
    Loading,
    Loaded,
    Failed {
        error: String,
    },
}

/// The active tab: which completion status is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Incomplete,
    Completed,
}

impl StatusFilter {
    pub fn toggled(self) -> Self {
        match self {
            Self::Incomplete => Self::Completed,
            Self::Completed => Self::Incomplete,
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::Incomplete => !todo.completed,
            Self::Completed => todo.completed,
        }
    }
}

/// The to-do list store.
///
/// `todos` is the single canonical list; the per-status views are
/// derived by the selectors below and never stored. `selected` indexes
/// into the visible (filtered) list and is clamped after every mutation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoListState {
    pub todos: Vec<Todo>,
    pub phase: LoadPhase,
    pub filter: StatusFilter,
    pub selected: usize,
}

impl UiState for TodoListState {}

impl TodoListState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Items still to do, in canonical order.
    pub fn incomplete(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|t| !t.completed).collect()
    }

    /// Finished items, in canonical order.
    pub fn completed(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|t| t.completed).collect()
    }

    /// The view for the active tab.
    pub fn visible(&self) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect()
    }

    /// (incomplete, completed) counts for the tab bar.
    pub fn counts(&self) -> (usize, usize) {
        let incomplete = self.todos.iter().filter(|t| !t.completed).count();
        (incomplete, self.todos.len() - incomplete)
    }

    /// Map the visible selection back to an index into the canonical
    /// list. `None` when the visible list is empty.
    pub fn selected_canonical_index(&self) -> Option<usize> {
        self.todos
            .iter()
            .enumerate()
            .filter(|(_, t)| self.filter.matches(t))
            .nth(self.selected)
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TodoListState {
        TodoListState {
            todos: vec![
                Todo::new("Grocery shopping", "1. A pack of carrots\n2. Eggs"),
                Todo::new("Integration Test", "10 tests"),
                Todo {
                    completed: true,
                    ..Todo::new("Pick up kid from school", "")
                },
            ],
            phase: LoadPhase::Loaded,
            filter: StatusFilter::Incomplete,
            selected: 0,
        }
    }

    #[test]
    fn views_partition_the_canonical_list() {
        let state = sample();
        assert_eq!(state.incomplete().len(), 2);
        assert_eq!(state.completed().len(), 1);
        assert_eq!(
            state.incomplete().len() + state.completed().len(),
            state.todos.len()
        );
    }

    #[test]
    fn visible_follows_the_active_filter() {
        let mut state = sample();
        assert_eq!(state.visible()[0].title, "Grocery shopping");
        state.filter = StatusFilter::Completed;
        assert_eq!(state.visible()[0].title, "Pick up kid from school");
    }

    #[test]
    fn counts_for_tab_bar() {
        assert_eq!(sample().counts(), (2, 1));
    }

    #[test]
    fn selected_canonical_index_skips_other_status() {
        let mut state = sample();
        state.filter = StatusFilter::Completed;
        state.selected = 0;
        // The only completed item sits at canonical index 2.
        assert_eq!(state.selected_canonical_index(), Some(2));
    }

    #[test]
    fn selected_canonical_index_none_when_view_empty() {
        let state = TodoListState::default();
        assert_eq!(state.selected_canonical_index(), None);
    }
}
