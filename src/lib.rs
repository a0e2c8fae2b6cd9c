pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod sync;
pub mod ui;
