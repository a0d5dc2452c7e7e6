//! Test transport: canned responses keyed by method + path, every request recorded.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use super::{HttpRequest, HttpResponse, Method, Transport};

#[derive(Default)]
pub(crate) struct MockTransport {
    routes: RefCell<HashMap<(Method, String), Result<HttpResponse, String>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.routes.borrow_mut().insert(
            (method, path.to_string()),
            Ok(HttpResponse { status, body: body.to_string() }),
        );
    }

    pub(crate) fn fail(&self, method: Method, path: &str, reason: &str) {
        self.routes
            .borrow_mut()
            .insert((method, path.to_string()), Err(reason.to_string()));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

/// Path portion of an absolute URL, query string dropped
fn route_path(url: &str) -> &str {
    let after_scheme = url.find("://").map(|i| &url[i + 3..]).unwrap_or(url);
    let path = after_scheme.find('/').map(|i| &after_scheme[i..]).unwrap_or("/");
    path.split('?').next().unwrap_or(path)
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let key = (request.method, route_path(&request.url).to_string());
        self.requests.borrow_mut().push(request);
        self.routes
            .borrow()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(HttpResponse { status: 404, body: r#"{"error":"Not found"}"#.to_string() }))
    }
}
