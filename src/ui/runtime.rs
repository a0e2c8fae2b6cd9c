use crate::config::Config;
use crate::service::TodoService;
use crate::sync;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::time::Duration;

/// Drive the draw/event loop until quit.
///
/// The draw loop stays synchronous on this thread; the tokio runtime
/// built here only hosts the sync worker.
pub fn run(config: Config) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_ms);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build async runtime")?;
    let service = TodoService::new(&config.service)?;

    let events = EventHandler::new(tick_rate);
    let (sync_tx, sync_rx) = sync::channel();
    runtime.spawn(sync::run(sync_rx, service, events.sender()));

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config);
    app.set_sync_sender(sync_tx);
    // Kick off the initial load.
    app.request_reload();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // ratatui re-measures the terminal on the next draw.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::TodosLoaded { todos }) => app.on_todos_loaded(todos),
            Ok(AppEvent::TodosLoadFailed { error }) => app.on_todos_load_failed(error),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app closes the command channel, which stops the worker.
    drop(app);
    runtime.shutdown_background();
    drop(guard);
    Ok(())
}
