//! Project Endpoints

use serde::Serialize;

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::{Project, ProjectMember, ProjectPayload};

#[derive(Serialize)]
struct AddMemberArgs {
    #[serde(rename = "userId")]
    user_id: u64,
}

pub async fn list_projects(api: &ApiClient) -> ClientResult<Vec<Project>> {
    api.get("/api/projects").await
}

pub async fn get_project(api: &ApiClient, project_id: u64) -> ClientResult<Project> {
    api.get(&format!("/api/projects/{}", project_id)).await
}

pub async fn create_project(api: &ApiClient, payload: &ProjectPayload) -> ClientResult<Project> {
    api.post("/api/projects", payload).await
}

pub async fn update_project(api: &ApiClient, project_id: u64, payload: &ProjectPayload) -> ClientResult<Project> {
    api.put(&format!("/api/projects/{}", project_id), payload).await
}

pub async fn delete_project(api: &ApiClient, project_id: u64) -> ClientResult<()> {
    api.delete(&format!("/api/projects/{}", project_id)).await
}

pub async fn list_members(api: &ApiClient, project_id: u64) -> ClientResult<Vec<ProjectMember>> {
    api.get(&format!("/api/projects/{}/members", project_id)).await
}

/// Callers re-fetch the member list afterwards, so the response body is dropped
pub async fn add_member(api: &ApiClient, project_id: u64, user_id: u64) -> ClientResult<()> {
    api.post_discard(&format!("/api/projects/{}/members", project_id), &AddMemberArgs { user_id })
        .await
}

pub async fn remove_member(api: &ApiClient, project_id: u64, user_id: u64) -> ClientResult<()> {
    api.delete(&format!("/api/projects/{}/members/{}", project_id, user_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use crate::api::Method;
    use crate::storage::MemoryStorage;
    use futures::executor::block_on;
    use std::rc::Rc;

    fn setup() -> (Rc<MockTransport>, ApiClient) {
        let transport = Rc::new(MockTransport::new());
        let api = ApiClient::new("http://api.test", transport.clone(), Rc::new(MemoryStorage::new()));
        (transport, api)
    }

    #[test]
    fn test_list_projects() {
        let (transport, api) = setup();
        transport.respond(
            Method::Get,
            "/api/projects",
            200,
            r#"[{"id":1,"name":"Apollo","description":null,"owner":{"id":2,"fullName":"Ann","email":"a@x"},"memberCount":3,"createdAt":"2025-01-02T09:00:00"}]"#,
        );
        let projects = block_on(list_projects(&api)).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].member_count, 3);
        assert_eq!(projects[0].owner.full_name, "Ann");
    }

    #[test]
    fn test_add_member_body() {
        let (transport, api) = setup();
        transport.respond(Method::Post, "/api/projects/5/members", 200, r#"{"id":5}"#);
        block_on(add_member(&api, 5, 42)).unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.body.as_deref(), Some(r#"{"userId":42}"#));
    }

    #[test]
    fn test_remove_member_path() {
        let (transport, api) = setup();
        transport.respond(Method::Delete, "/api/projects/5/members/42", 204, "");
        block_on(remove_member(&api, 5, 42)).unwrap();
        assert_eq!(transport.last_request().unwrap().url, "http://api.test/api/projects/5/members/42");
    }

    #[test]
    fn test_update_project_uses_put() {
        let (transport, api) = setup();
        transport.respond(
            Method::Put,
            "/api/projects/5",
            200,
            r#"{"id":5,"name":"Renamed","owner":{"id":1},"memberCount":1}"#,
        );
        let payload = ProjectPayload { name: "Renamed".into(), description: None };
        let project = block_on(update_project(&api, 5, &payload)).unwrap();
        assert_eq!(project.name, "Renamed");
        assert_eq!(transport.last_request().unwrap().method, Method::Put);
    }
}
