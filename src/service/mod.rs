//! Remote data-access layer for the to-do service.

mod client;
mod error;

pub use client::TodoService;
pub use error::ServiceError;
