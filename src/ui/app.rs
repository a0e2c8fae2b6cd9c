use crate::config::Config;
use crate::model::Todo;
use crate::sync::{SyncCommand, SyncSender};
use crate::ui::dialog::{
    DialogMode, TodoDialogIntent, TodoDialogReducer, TodoDialogState,
};
use crate::ui::mvi::Reducer;
use crate::ui::todos::{TodoListIntent, TodoListReducer, TodoListState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The application container.
///
/// Owns both stores and the sending half of the sync channel. Reducer
/// dispatch is synchronous; mirrored operations additionally enqueue a
/// [`SyncCommand`] for the worker.
pub struct App {
    config: Config,
    should_quit: bool,
    /// To-do list store (MVI pattern).
    todos: TodoListState,
    /// Add/edit dialog store (MVI pattern).
    dialog: TodoDialogState,
    sync_sender: Option<SyncSender>,
    last_sync_error: Option<String>,
    animation_tick: u8,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            should_quit: false,
            todos: TodoListState::default(),
            dialog: TodoDialogState::default(),
            sync_sender: None,
            last_sync_error: None,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn base_url(&self) -> &str {
        &self.config.service.base_url
    }

    pub fn todos(&self) -> &TodoListState {
        &self.todos
    }

    pub fn dialog(&self) -> &TodoDialogState {
        &self.dialog
    }

    pub fn dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    pub fn last_sync_error(&self) -> Option<&str> {
        self.last_sync_error.as_deref()
    }

    /// Frame counter for the header spinner.
    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    pub fn set_sync_sender(&mut self, sender: SyncSender) {
        self.sync_sender = Some(sender);
    }

    /// Dispatch an intent to the list reducer.
    pub fn dispatch_todos(&mut self, intent: TodoListIntent) {
        dispatch_mvi!(self, todos, TodoListReducer, intent);
    }

    /// Dispatch an intent to the dialog reducer.
    pub fn dispatch_dialog(&mut self, intent: TodoDialogIntent) {
        dispatch_mvi!(self, dialog, TodoDialogReducer, intent);
    }

    // ========================================================================
    // Store + sync flows
    // ========================================================================

    /// Enter the loading phase and ask the worker for the server's list.
    pub fn request_reload(&mut self) {
        self.dispatch_todos(TodoListIntent::Reload);
        self.enqueue(SyncCommand::LoadTodos);
    }

    pub fn on_todos_loaded(&mut self, todos: Vec<Todo>) {
        self.dispatch_todos(TodoListIntent::Loaded { todos });
    }

    pub fn on_todos_load_failed(&mut self, error: String) {
        self.dispatch_todos(TodoListIntent::LoadFailed { error });
    }

    /// Flip the selected item and mirror it as an update.
    pub fn toggle_selected(&mut self) {
        let Some(index) = self.todos.selected_canonical_index() else {
            return;
        };
        self.dispatch_todos(TodoListIntent::Toggled { index });
        let Some(todo) = self.todos.todos.get(index).cloned() else {
            return;
        };
        if todo.id.is_some() {
            self.enqueue(SyncCommand::UpdateTodo(todo));
        } else {
            tracing::warn!(title = %todo.title, "toggle of unsynced item not mirrored");
        }
    }

    /// Remove the selected item. Items the backend never assigned an id
    /// to are removed locally only.
    pub fn delete_selected(&mut self) {
        let Some(index) = self.todos.selected_canonical_index() else {
            return;
        };
        let Some(todo) = self.todos.todos.get(index).cloned() else {
            return;
        };
        self.dispatch_todos(TodoListIntent::Removed { index });
        match todo.id {
            Some(id) => {
                self.enqueue(SyncCommand::DeleteTodo { id });
            }
            None => {
                tracing::debug!(title = %todo.title, "unsynced item removed locally only");
            }
        }
    }

    pub fn open_create_dialog(&mut self) {
        self.dispatch_dialog(TodoDialogIntent::OpenCreate);
    }

    /// Open the dialog prefilled with the selected item.
    pub fn open_edit_dialog(&mut self) {
        let Some(index) = self.todos.selected_canonical_index() else {
            return;
        };
        let Some(todo) = self.todos.todos.get(index) else {
            return;
        };
        self.dispatch_dialog(TodoDialogIntent::OpenEdit {
            index,
            title: todo.title.clone(),
            description: todo.description.clone(),
        });
    }

    /// Validate and save the dialog form.
    ///
    /// An empty (whitespace-only) title is rejected and the dialog stays
    /// open. On success the store is updated optimistically, the matching
    /// sync command is enqueued, and the dialog closes.
    pub fn submit_dialog(&mut self) {
        let TodoDialogState::Visible {
            mode,
            title,
            description,
            ..
        } = self.dialog.clone()
        else {
            return;
        };

        if title.trim().is_empty() {
            tracing::debug!("submit rejected: empty title");
            return;
        }

        match mode {
            DialogMode::Create => {
                let todo = Todo::new(title, description);
                self.dispatch_todos(TodoListIntent::Added { todo: todo.clone() });
                self.enqueue(SyncCommand::AddTodo(todo));
            }
            DialogMode::Edit { index } => {
                self.dispatch_todos(TodoListIntent::Edited {
                    index,
                    title,
                    description,
                });
                if let Some(todo) = self.todos.todos.get(index).cloned() {
                    if todo.id.is_some() {
                        self.enqueue(SyncCommand::UpdateTodo(todo));
                    } else {
                        tracing::warn!(title = %todo.title, "edit of unsynced item not mirrored");
                    }
                }
            }
        }

        self.dispatch_dialog(TodoDialogIntent::Close);
    }

    fn enqueue(&mut self, command: SyncCommand) -> bool {
        let Some(sender) = &self.sync_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_sync_error = None;
                true
            }
            Err(err) => {
                self.last_sync_error = Some(format!("Sync send failed: {}", err));
                false
            }
        }
    }
}
