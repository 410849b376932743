//! In-memory transport for unit tests: scripted replies per method and URL.

use super::{ApiRequest, ApiResponse, Transport, TransportError};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::collections::VecDeque;
use std::sync::Mutex;

pub(crate) type Reply = Result<ApiResponse, TransportError>;

pub(crate) fn json_reply(body: serde_json::Value) -> Reply {
    Ok(ApiResponse {
        status: StatusCode::OK,
        body: body.to_string(),
    })
}

pub(crate) fn status_reply(status: u16, body: &str) -> Reply {
    Ok(ApiResponse {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
    })
}

pub(crate) fn offline() -> Reply {
    Err(TransportError::new("connection refused"))
}

struct Stub {
    method: Method,
    url: String,
    replies: VecDeque<Reply>,
    last: Reply,
}

/// Replies are consumed in order; the final one repeats. Unmatched requests get a 404.
#[derive(Default)]
pub(crate) struct StubTransport {
    stubs: Mutex<Vec<Stub>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on(self, method: Method, url: &str, replies: Vec<Reply>) -> Self {
        let mut replies: VecDeque<Reply> = replies.into();
        let last = replies.pop_back().unwrap_or_else(|| status_reply(404, ""));
        self.stubs.lock().unwrap().push(Stub {
            method,
            url: url.to_string(),
            replies,
            last,
        });
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn hits(&self, method: &Method, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| &r.method == method && r.url == url)
            .count()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut stubs = self.stubs.lock().unwrap();
        let Some(stub) = stubs
            .iter_mut()
            .find(|s| s.method == request.method && s.url == request.url)
        else {
            return status_reply(404, "no stub");
        };
        stub.replies.pop_front().unwrap_or_else(|| stub.last.clone())
    }
}
