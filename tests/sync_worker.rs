//! Behavior of the effects worker: follow-ups for loads only, FIFO order.

mod common;

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use common::mock_service::{MockResponse, MockService};
use common::service_config;
use taskdeck::model::Todo;
use taskdeck::service::TodoService;
use taskdeck::sync::{self, SyncCommand, SyncSender};
use taskdeck::ui::events::AppEvent;

struct Worker {
    commands: SyncSender,
    events: Option<Receiver<AppEvent>>,
    handle: tokio::task::JoinHandle<()>,
}

fn spawn_worker(mock: &MockService) -> Worker {
    let service = TodoService::new(&service_config(&mock.base_url())).expect("client");
    let (events_tx, events_rx) = std::sync::mpsc::channel();
    let (commands_tx, commands_rx) = sync::channel();
    let handle = tokio::spawn(sync::run(commands_rx, service, events_tx));
    Worker {
        commands: commands_tx,
        events: Some(events_rx),
        handle,
    }
}

impl Worker {
    /// Block on the UI event channel off the async runtime.
    async fn next_event(&mut self) -> Result<AppEvent, RecvTimeoutError> {
        let events = self.events.take().expect("event receiver");
        let (event, events) = tokio::task::spawn_blocking(move || {
            let event = events.recv_timeout(Duration::from_secs(2));
            (event, events)
        })
        .await
        .expect("recv task");
        self.events = Some(events);
        event
    }

    async fn shutdown(self) {
        drop(self.commands);
        let _ = self.handle.await;
    }
}

#[tokio::test]
async fn load_success_posts_todos_loaded() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[{"id": 1, "title": "Grocery shopping", "completed": false}]"#,
    ))
    .await;
    let mut worker = spawn_worker(&mock);

    worker.commands.send(SyncCommand::LoadTodos).await.unwrap();

    let event = worker.next_event().await.unwrap();
    match event {
        AppEvent::TodosLoaded { todos } => {
            assert_eq!(todos.len(), 1);
            assert_eq!(todos[0].title, "Grocery shopping");
        }
        _ => panic!("expected TodosLoaded"),
    }
    worker.shutdown().await;
}

#[tokio::test]
async fn load_failure_posts_todos_load_failed() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::error(500, "boom")).await;
    let mut worker = spawn_worker(&mock);

    worker.commands.send(SyncCommand::LoadTodos).await.unwrap();

    let event = worker.next_event().await.unwrap();
    match event {
        AppEvent::TodosLoadFailed { error } => {
            assert!(error.contains("500"), "unexpected message: {}", error);
        }
        _ => panic!("expected TodosLoadFailed"),
    }
    worker.shutdown().await;
}

#[tokio::test]
async fn mutations_are_fire_and_forget_even_when_they_fail() {
    let mock = MockService::start().await;
    // Every mutation fails; the trailing load succeeds.
    mock.enqueue_response(MockResponse::error(500, "add")).await;
    mock.enqueue_response(MockResponse::error(500, "update")).await;
    mock.enqueue_response(MockResponse::error(500, "delete")).await;
    mock.enqueue_response(MockResponse::json("[]")).await;
    let mut worker = spawn_worker(&mock);

    let synced = Todo {
        id: Some(5),
        ..Todo::new("Synced", "")
    };
    worker
        .commands
        .send(SyncCommand::AddTodo(Todo::new("New", "")))
        .await
        .unwrap();
    worker
        .commands
        .send(SyncCommand::UpdateTodo(synced))
        .await
        .unwrap();
    worker
        .commands
        .send(SyncCommand::DeleteTodo { id: 5 })
        .await
        .unwrap();
    worker.commands.send(SyncCommand::LoadTodos).await.unwrap();

    // The first event out is the load result: the failed mutations
    // dispatched no follow-up.
    let event = worker.next_event().await.unwrap();
    assert!(matches!(event, AppEvent::TodosLoaded { .. }));

    // Commands executed in enqueue order.
    let methods: Vec<String> = mock
        .captured_requests()
        .await
        .into_iter()
        .map(|r| r.method)
        .collect();
    assert_eq!(methods, ["POST", "PUT", "DELETE", "GET"]);

    worker.shutdown().await;
}
