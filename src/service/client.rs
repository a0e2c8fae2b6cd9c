use std::time::Duration;

use reqwest::{Client, Response};
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::model::Todo;
use crate::service::error::ServiceError;

/// HTTP client for the remote to-do service.
///
/// The contract is a plain JSON REST surface:
/// `GET /todos`, `POST /todos`, `PUT /todos/{id}`, `DELETE /todos/{id}`.
pub struct TodoService {
    client: Client,
    base_url: String,
}

impl TodoService {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()
            .map_err(|e| ServiceError::BuildClient { source: e })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full list of to-do items.
    pub async fn get_todos(&self) -> Result<Vec<Todo>, ServiceError> {
        let url = format!("{}/todos", self.base_url);
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %url, "GET todos");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        let response = check_status(&url, response)?;

        response
            .json::<Vec<Todo>>()
            .await
            .map_err(|e| ServiceError::Decode {
                url,
                source: e,
            })
    }

    /// Create a new item. The backend assigns the id; the response body
    /// is not consumed beyond the status check.
    pub async fn add_todo(&self, todo: &Todo) -> Result<(), ServiceError> {
        let url = format!("{}/todos", self.base_url);
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %url, title = %todo.title, "POST todo");

        let response = self
            .client
            .post(&url)
            .json(todo)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        check_status(&url, response)?;
        Ok(())
    }

    /// Replace the item with the given id. Toggling the completed flag
    /// goes through here as well.
    pub async fn update_todo(&self, todo: &Todo) -> Result<(), ServiceError> {
        let id = todo.id.ok_or_else(|| ServiceError::MissingId {
            title: todo.title.clone(),
        })?;
        let url = format!("{}/todos/{}", self.base_url, id);
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %url, "PUT todo");

        let response = self
            .client
            .put(&url)
            .json(todo)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        check_status(&url, response)?;
        Ok(())
    }

    /// Remove the item with the given id.
    pub async fn delete_todo(&self, id: i64) -> Result<(), ServiceError> {
        let url = format!("{}/todos/{}", self.base_url, id);
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %url, "DELETE todo");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        check_status(&url, response)?;
        Ok(())
    }
}

fn transport(url: &str, source: reqwest::Error) -> ServiceError {
    ServiceError::Transport {
        url: url.to_string(),
        source,
    }
}

fn check_status(url: &str, response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ServiceError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response)
}
