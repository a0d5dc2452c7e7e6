//! Auth Endpoints

use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::error::ClientResult;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
    #[serde(rename = "fullName")]
    pub full_name: &'a str,
}

/// Body returned by both `/auth/login` and `/auth/register`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, alias = "userId")]
    pub id: Option<u64>,
}

// ========================
// Commands
// ========================

pub async fn register(api: &ApiClient, args: &RegisterArgs<'_>) -> ClientResult<AuthResponse> {
    api.post("/auth/register", args).await
}

pub async fn login(api: &ApiClient, args: &LoginArgs<'_>) -> ClientResult<AuthResponse> {
    api.post("/auth/login", args).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use crate::api::Method;
    use crate::storage::MemoryStorage;
    use futures::executor::block_on;
    use std::rc::Rc;

    #[test]
    fn test_register_posts_full_name() {
        let transport = Rc::new(MockTransport::new());
        transport.respond(
            Method::Post,
            "/auth/register",
            201,
            r#"{"token":"t9","email":"c@d.io","fullName":"Cy","role":"USER","userId":12}"#,
        );
        let api = ApiClient::new("http://api.test", transport.clone(), Rc::new(MemoryStorage::new()));

        let args = RegisterArgs { email: "c@d.io", password: "pw", full_name: "Cy" };
        let resp = block_on(register(&api, &args)).unwrap();

        assert_eq!(resp.id, Some(12));
        assert_eq!(resp.full_name, "Cy");
        let body: serde_json::Value =
            serde_json::from_str(transport.last_request().unwrap().body.as_deref().unwrap()).unwrap();
        assert_eq!(body["fullName"], "Cy");
        assert_eq!(body["password"], "pw");
    }
}
