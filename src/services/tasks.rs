//! Task Endpoints

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::{Task, TaskPage, TaskPayload, TaskPriority, TaskStatus};

/// Characters left bare in query values (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// Filters for `/api/tasks/search`; unset fields are left off the query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskSearch {
    pub keyword: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee_id: Option<u64>,
    pub project_id: Option<u64>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<SortDir>,
}

impl TaskSearch {
    pub fn query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(keyword) = self.keyword.as_deref().filter(|k| !k.is_empty()) {
            params.push(("keyword", keyword.to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(priority) = self.priority {
            params.push(("priority", priority.as_str().to_string()));
        }
        if let Some(id) = self.assignee_id {
            params.push(("assigneeId", id.to_string()));
        }
        if let Some(id) = self.project_id {
            params.push(("projectId", id.to_string()));
        }
        // page 0 is meaningful, so only absence drops it
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(size) = self.size.filter(|s| *s > 0) {
            params.push(("size", size.to_string()));
        }
        if let Some(sort_by) = self.sort_by.as_deref().filter(|s| !s.is_empty()) {
            params.push(("sortBy", sort_by.to_string()));
        }
        if let Some(dir) = self.sort_dir {
            params.push(("sortDir", dir.as_str().to_string()));
        }

        params
            .iter()
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// ========================
// Commands
// ========================

pub async fn list_project_tasks(api: &ApiClient, project_id: u64) -> ClientResult<Vec<Task>> {
    api.get(&format!("/api/projects/{}/tasks", project_id)).await
}

pub async fn my_tasks(api: &ApiClient) -> ClientResult<Vec<Task>> {
    api.get("/api/tasks/my-tasks").await
}

pub async fn get_task(api: &ApiClient, task_id: u64) -> ClientResult<Task> {
    api.get(&format!("/api/tasks/{}", task_id)).await
}

pub async fn create_task(api: &ApiClient, project_id: u64, payload: &TaskPayload) -> ClientResult<Task> {
    api.post(&format!("/api/projects/{}/tasks", project_id), payload).await
}

pub async fn update_task(api: &ApiClient, task_id: u64, payload: &TaskPayload) -> ClientResult<Task> {
    api.put(&format!("/api/tasks/{}", task_id), payload).await
}

pub async fn delete_task(api: &ApiClient, task_id: u64) -> ClientResult<()> {
    api.delete(&format!("/api/tasks/{}", task_id)).await
}

pub async fn assign_task(api: &ApiClient, task_id: u64, assignee_id: u64) -> ClientResult<Task> {
    api.put_empty(&format!("/api/tasks/{}/assign/{}", task_id, assignee_id)).await
}

pub async fn search_tasks(api: &ApiClient, search: &TaskSearch) -> ClientResult<TaskPage> {
    api.get(&format!("/api/tasks/search?{}", search.query_string())).await
}
