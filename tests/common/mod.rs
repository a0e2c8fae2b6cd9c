//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use taskdeck::config::{Config, ServiceConfig};
use taskdeck::model::Todo;
use taskdeck::ui::app::App;

/// The fixture list used across rendering and store tests.
pub fn sample_todos() -> Vec<Todo> {
    vec![
        Todo {
            id: Some(1),
            ..Todo::new("Grocery shopping", "1. A pack of carrots\n2. Eggs")
        },
        Todo {
            id: Some(2),
            ..Todo::new("Integration Test", "10 tests")
        },
        Todo {
            id: Some(3),
            completed: true,
            ..Todo::new("Pick up kid from school", "")
        },
    ]
}

/// Service config pointed at a test server.
pub fn service_config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    }
}

/// An `App` with the fixture list already loaded.
pub fn make_loaded_app() -> App {
    let mut app = App::new(Config::default());
    app.on_todos_loaded(sample_todos());
    app
}
