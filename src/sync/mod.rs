//! The side-effect adapter between the store and the remote service.
//!
//! Store mutations that must be mirrored remotely are enqueued as
//! [`SyncCommand`]s on a bounded channel. A single worker consumes them
//! in FIFO order, so at most one service call is in flight at a time.
//! Only loads dispatch follow-up events; add/update/delete are
//! fire-and-forget and merely log their failures.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc;

use crate::model::Todo;
use crate::service::TodoService;
use crate::ui::events::AppEvent;

/// Capacity of the command channel. `try_send` on a full channel fails
/// and is surfaced to the user as a sync error.
pub const SYNC_BUFFER: usize = 16;

/// A store mutation to mirror to the remote service.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncCommand {
    LoadTodos,
    AddTodo(Todo),
    UpdateTodo(Todo),
    DeleteTodo { id: i64 },
}

pub type SyncSender = mpsc::Sender<SyncCommand>;

/// Create the command channel for the sync worker.
pub fn channel() -> (SyncSender, mpsc::Receiver<SyncCommand>) {
    mpsc::channel(SYNC_BUFFER)
}

/// Worker loop: execute commands in order until the channel closes.
///
/// Load results are posted back into the UI event channel; the event
/// loop turns them into store intents. Failures of mirrored mutations
/// produce no follow-up event.
pub async fn run(
    mut commands: mpsc::Receiver<SyncCommand>,
    service: TodoService,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            SyncCommand::LoadTodos => match service.get_todos().await {
                Ok(todos) => {
                    tracing::debug!(count = todos.len(), "loaded todos");
                    if events.send(AppEvent::TodosLoaded { todos }).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "load failed");
                    let event = AppEvent::TodosLoadFailed {
                        error: err.to_string(),
                    };
                    if events.send(event).is_err() {
                        break;
                    }
                }
            },
            SyncCommand::AddTodo(todo) => {
                if let Err(err) = service.add_todo(&todo).await {
                    tracing::warn!(title = %todo.title, error = %err, "add not mirrored");
                }
            }
            SyncCommand::UpdateTodo(todo) => {
                if let Err(err) = service.update_todo(&todo).await {
                    tracing::warn!(title = %todo.title, error = %err, "update not mirrored");
                }
            }
            SyncCommand::DeleteTodo { id } => {
                if let Err(err) = service.delete_todo(id).await {
                    tracing::warn!(id, error = %err, "delete not mirrored");
                }
            }
        }
    }
    tracing::debug!("sync worker stopped");
}
