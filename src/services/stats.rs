//! Stats Endpoints

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::{DashboardStats, ProjectStats, UserStats};

pub async fn dashboard_stats(api: &ApiClient) -> ClientResult<DashboardStats> {
    api.get("/api/stats/dashboard").await
}

pub async fn all_project_stats(api: &ApiClient) -> ClientResult<Vec<ProjectStats>> {
    api.get("/api/stats/projects").await
}

pub async fn project_stats(api: &ApiClient, project_id: u64) -> ClientResult<ProjectStats> {
    api.get(&format!("/api/stats/projects/{}", project_id)).await
}

pub async fn user_stats(api: &ApiClient, user_id: u64) -> ClientResult<UserStats> {
    api.get(&format!("/api/stats/users/{}", user_id)).await
}
