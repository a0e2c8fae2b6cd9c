mod common;

use common::sample_todos;
use taskdeck::model::Todo;
use taskdeck::ui::mvi::Reducer;
use taskdeck::ui::todos::{
    LoadPhase, StatusFilter, TodoListIntent, TodoListReducer, TodoListState,
};

fn loaded_state() -> TodoListState {
    TodoListReducer::reduce(
        TodoListState::default(),
        TodoListIntent::Loaded {
            todos: sample_todos(),
        },
    )
}

#[test]
fn default_state_is_loading() {
    let state = TodoListState::default();
    assert!(state.is_loading());
    assert!(state.todos.is_empty());
    assert_eq!(state.filter, StatusFilter::Incomplete);
}

#[test]
fn loaded_replaces_list_and_leaves_loading() {
    let state = loaded_state();
    assert_eq!(state.phase, LoadPhase::Loaded);
    assert_eq!(state.todos.len(), 3);
}

#[test]
fn loaded_replaces_wholesale_on_reload() {
    let state = loaded_state();
    let state = TodoListReducer::reduce(state, TodoListIntent::Reload);
    assert!(state.is_loading());
    // Remote wins: the previous list is swapped out entirely.
    let state = TodoListReducer::reduce(
        state,
        TodoListIntent::Loaded {
            todos: vec![Todo::new("Only one", "")],
        },
    );
    assert_eq!(state.todos.len(), 1);
    assert_eq!(state.todos[0].title, "Only one");
}

#[test]
fn load_failed_keeps_shown_list_and_carries_message() {
    let state = loaded_state();
    let state = TodoListReducer::reduce(
        state,
        TodoListIntent::LoadFailed {
            error: "connection refused".to_string(),
        },
    );
    assert_eq!(state.todos.len(), 3);
    assert_eq!(state.load_error(), Some("connection refused"));
}

#[test]
fn toggle_flips_completed_flag() {
    let state = loaded_state();
    let state = TodoListReducer::reduce(state, TodoListIntent::Toggled { index: 0 });
    assert!(state.todos[0].completed);
    let state = TodoListReducer::reduce(state, TodoListIntent::Toggled { index: 0 });
    assert!(!state.todos[0].completed);
}

#[test]
fn toggle_out_of_range_is_noop() {
    let before = loaded_state();
    let after = TodoListReducer::reduce(before.clone(), TodoListIntent::Toggled { index: 99 });
    assert_eq!(before, after);
}

#[test]
fn removed_deletes_the_addressed_item() {
    let state = loaded_state();
    let state = TodoListReducer::reduce(state, TodoListIntent::Removed { index: 1 });
    assert_eq!(state.todos.len(), 2);
    assert!(state.todos.iter().all(|t| t.title != "Integration Test"));
}

#[test]
fn removed_out_of_range_is_noop() {
    let before = loaded_state();
    let after = TodoListReducer::reduce(before.clone(), TodoListIntent::Removed { index: 99 });
    assert_eq!(before, after);
}

#[test]
fn added_appends_to_canonical_list() {
    let state = loaded_state();
    let state = TodoListReducer::reduce(
        state,
        TodoListIntent::Added {
            todo: Todo::new("New item", ""),
        },
    );
    assert_eq!(state.todos.last().unwrap().title, "New item");
}

#[test]
fn edited_rewrites_fields_in_place() {
    let state = loaded_state();
    let state = TodoListReducer::reduce(
        state,
        TodoListIntent::Edited {
            index: 0,
            title: "Market run".to_string(),
            description: "Just eggs".to_string(),
        },
    );
    assert_eq!(state.todos[0].title, "Market run");
    assert_eq!(state.todos[0].description, "Just eggs");
    // Completion status and id are untouched by an edit.
    assert!(!state.todos[0].completed);
    assert_eq!(state.todos[0].id, Some(1));
}

#[test]
fn selection_moves_within_visible_list_without_wrapping() {
    let state = loaded_state();
    // Two incomplete items visible.
    let state = TodoListReducer::reduce(state, TodoListIntent::SelectNext);
    assert_eq!(state.selected, 1);
    let state = TodoListReducer::reduce(state, TodoListIntent::SelectNext);
    assert_eq!(state.selected, 1);
    let state = TodoListReducer::reduce(state, TodoListIntent::SelectPrevious);
    assert_eq!(state.selected, 0);
    let state = TodoListReducer::reduce(state, TodoListIntent::SelectPrevious);
    assert_eq!(state.selected, 0);
}

#[test]
fn selection_clamps_after_removal() {
    let state = loaded_state();
    let state = TodoListReducer::reduce(state, TodoListIntent::SelectNext);
    assert_eq!(state.selected, 1);
    // Removing the second incomplete item shrinks the view to one entry.
    let state = TodoListReducer::reduce(state, TodoListIntent::Removed { index: 1 });
    assert_eq!(state.selected, 0);
}

#[test]
fn selection_clamps_after_toggle_moves_item_across_views() {
    let state = loaded_state();
    let state = TodoListReducer::reduce(state, TodoListIntent::SelectNext);
    // Completing the second incomplete item leaves only one visible.
    let state = TodoListReducer::reduce(state, TodoListIntent::Toggled { index: 1 });
    assert_eq!(state.selected, 0);
}

#[test]
fn switch_filter_toggles_tab_and_resets_selection() {
    let state = loaded_state();
    let state = TodoListReducer::reduce(state, TodoListIntent::SelectNext);
    let state = TodoListReducer::reduce(state, TodoListIntent::SwitchFilter);
    assert_eq!(state.filter, StatusFilter::Completed);
    assert_eq!(state.selected, 0);
    let state = TodoListReducer::reduce(state, TodoListIntent::SwitchFilter);
    assert_eq!(state.filter, StatusFilter::Incomplete);
}

#[test]
fn selection_on_empty_list_stays_at_zero() {
    let state = TodoListReducer::reduce(TodoListState::default(), TodoListIntent::SelectNext);
    assert_eq!(state.selected, 0);
    let state = TodoListReducer::reduce(state, TodoListIntent::SelectPrevious);
    assert_eq!(state.selected, 0);
}
