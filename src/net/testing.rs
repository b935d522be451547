//! Scripted transport for service tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::transport::{ApiRequest, ApiResponse, HttpTransport, TransportError};

/// Replays queued outcomes in order and records every request it was given.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())))
    }
}
