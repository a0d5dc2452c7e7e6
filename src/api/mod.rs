//! API Gateway Client
//!
//! Single HTTP entry point for the REST API. Attaches the bearer token from
//! device storage to every request and turns non-2xx responses into
//! [`ClientError`]s carrying the server's message when it sent one.
//! No retries and no timeouts beyond the transport's own.

mod http;
#[cfg(test)]
pub(crate) mod mock;

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ClientError, ClientResult};
use crate::storage::{KeyValueStore, TOKEN_KEY};

pub use http::ReqwestTransport;

// ========================
// Transport Types
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one HTTP exchange. `Err` means no response was received.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

// ========================
// Gateway Client
// ========================

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn Transport>,
    storage: Rc<dyn KeyValueStore>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn Transport>,
        storage: Rc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            storage,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let body = self.dispatch(Method::Get, path, None).await?;
        decode(&body)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, payload: &B) -> ClientResult<T> {
        let body = self.dispatch(Method::Post, path, Some(encode(payload)?)).await?;
        decode(&body)
    }

    /// POST whose response body the caller has no use for
    pub async fn post_discard<B: Serialize>(&self, path: &str, payload: &B) -> ClientResult<()> {
        self.dispatch(Method::Post, path, Some(encode(payload)?)).await?;
        Ok(())
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, payload: &B) -> ClientResult<T> {
        let body = self.dispatch(Method::Put, path, Some(encode(payload)?)).await?;
        decode(&body)
    }

    /// PUT with an empty request body (e.g. task reassignment)
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let body = self.dispatch(Method::Put, path, None).await?;
        decode(&body)
    }

    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        self.dispatch(Method::Delete, path, None).await?;
        Ok(())
    }

    async fn dispatch(&self, method: Method, path: &str, body: Option<String>) -> ClientResult<String> {
        let request = self.build_request(method, path, body);
        log::debug!("{} {}", method, path);

        let response = self.transport.execute(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, path, e);
            ClientError::Network(e)
        })?;

        if response.is_success() {
            return Ok(response.body);
        }

        let error = error_from_response(&response);
        log::warn!("{} {} -> {}: {}", method, path, response.status, error);
        Err(error)
    }

    fn build_request(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty()) {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        }
    }
}

fn encode<B: Serialize>(payload: &B) -> ClientResult<String> {
    serde_json::to_string(payload).map_err(|e| ClientError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> ClientResult<T> {
    serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Server error text from a JSON body: `error` first, then `message`
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_string)
}

fn error_from_response(response: &HttpResponse) -> ClientError {
    let message = server_message(&response.body);
    match response.status {
        401 => ClientError::Auth { message },
        status => ClientError::Request { status, message },
    }
}
