//! ClickUp API interactions.
//!
//! A thin blocking client over the v2 REST endpoints the report needs:
//! - `fetch_all_lists`: lists inside folders plus folderless lists for a space
//! - `fetch_list_tasks`: all tasks for one list, subtasks and closed included

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::models::Task;

/// ClickUp API base URL.
const CLICKUP_API_BASE: &str = "https://api.clickup.com/api/v2";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur talking to ClickUp.
#[derive(Debug, Error)]
pub enum ApiError {
    /// API key is invalid or expired (401 Unauthorized)
    #[error("invalid or expired API key: ClickUp returned 401 Unauthorized")]
    Unauthorized,

    /// API key lacks access to the resource (403 Forbidden)
    #[error("API key lacks access: ClickUp returned 403 Forbidden")]
    Forbidden,

    /// Any other non-success status
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },

    /// Network or other transport failure
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Response body did not match the expected shape
    #[error("failed to parse ClickUp response: {0}")]
    Parse(String),
}

/// A list as returned by the folder and list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskList {
    /// List identifier, used to fetch its tasks
    pub id: String,
    /// Display name
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct FolderResponse {
    folders: Vec<Folder>,
}

#[derive(Debug, Deserialize)]
struct Folder {
    #[serde(default)]
    lists: Vec<TaskList>,
}

#[derive(Debug, Deserialize)]
struct ListsResponse {
    lists: Vec<TaskList>,
}

#[derive(Debug, Deserialize)]
struct TasksResponse {
    tasks: Vec<TaskDto>,
}

/// Task payload as the API ships it, nested objects and all.
#[derive(Debug, Deserialize)]
struct TaskDto {
    id: String,
    name: String,
    #[serde(default)]
    priority: Option<PriorityDto>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    status: StatusDto,
    #[serde(default)]
    list: ListRefDto,
    #[serde(default)]
    date_closed: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PriorityDto {
    #[serde(default)]
    priority: String,
}

#[derive(Debug, Default, Deserialize)]
struct StatusDto {
    #[serde(default)]
    status: String,
}

#[derive(Debug, Default, Deserialize)]
struct ListRefDto {
    #[serde(default)]
    name: String,
}

impl From<TaskDto> for Task {
    fn from(dto: TaskDto) -> Self {
        Task {
            id: dto.id,
            name: dto.name,
            priority: dto.priority.map(|p| p.priority).filter(|p| !p.is_empty()),
            due_date: dto.due_date.filter(|d| !d.is_empty()),
            status: dto.status.status,
            list_name: dto.list.name,
            date_closed: dto.date_closed.filter(|d| !d.is_empty()),
        }
    }
}

/// Blocking client for the ClickUp v2 API.
#[derive(Debug, Clone)]
pub struct Client {
    api_key: String,
    base_url: String,
}

impl Client {
    /// Create a client authenticating with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: CLICKUP_API_BASE.to_string(),
        }
    }

    fn get(&self, path: &str) -> Result<ureq::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let response = ureq::get(&url)
            .timeout(REQUEST_TIMEOUT)
            .set("Authorization", &self.api_key)
            .set("Content-Type", "application/json")
            .call();

        match response {
            Ok(resp) => Ok(resp),
            Err(ureq::Error::Status(401, _)) => Err(ApiError::Unauthorized),
            Err(ureq::Error::Status(403, _)) => Err(ApiError::Forbidden),
            Err(ureq::Error::Status(code, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(ApiError::Status { code, body })
            }
            Err(e) => Err(ApiError::Transport(e.to_string())),
        }
    }

    /// Fetch every list in a space.
    ///
    /// Lists living inside folders come first, folderless lists after, in
    /// the order the API returns them. Any failure here is fatal to the
    /// run: without the list inventory there is nothing to report on.
    pub fn fetch_all_lists(&self, space_id: &str) -> Result<Vec<TaskList>, ApiError> {
        let mut all_lists = Vec::new();

        let folders: FolderResponse = self
            .get(&format!("/space/{space_id}/folder"))?
            .into_json()
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        for folder in folders.folders {
            all_lists.extend(folder.lists);
        }

        let folderless: ListsResponse = self
            .get(&format!("/space/{space_id}/list?archived=false"))?
            .into_json()
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        all_lists.extend(folderless.lists);

        Ok(all_lists)
    }

    /// Fetch all tasks for one list, including subtasks and closed tasks.
    pub fn fetch_list_tasks(&self, list_id: &str) -> Result<Vec<Task>, ApiError> {
        let response: TasksResponse = self
            .get(&format!("/list/{list_id}/task?subtasks=true&include_closed=true"))?
            .into_json()
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(response.tasks.into_iter().map(Task::from).collect())
    }
}
