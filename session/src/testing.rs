//! Test doubles shared by the unit tests in this crate.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::{Map, Value};

use crate::error::GraphqlError;
use crate::graphql::{Transport, parse_response};
use crate::types::{Role, User};

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub query: String,
    pub variables: Map<String, Value>,
    pub token: Option<String>,
}

/// Transport that replays queued response bodies and records every call.
///
/// Queued bodies go through [`parse_response`] exactly as a network transport
/// would, so `errors` handling is exercised end to end.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<Value, GraphqlError>>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a full response body (`{"data": ..., "errors": ...}`).
    pub fn respond(self, body: Value) -> Self {
        self.responses.borrow_mut().push_back(Ok(body));
        self
    }

    /// Queue a failure raised before any body is read.
    pub fn fail(self, error: GraphqlError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl Transport for MockTransport {
    async fn send(
        &self,
        query: &str,
        variables: Map<String, Value>,
        token: Option<&str>,
    ) -> Result<Value, GraphqlError> {
        self.calls.borrow_mut().push(RecordedCall {
            query: query.to_owned(),
            variables,
            token: token.map(str::to_owned),
        });
        let next = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(GraphqlError::Transport("no response queued".to_owned())));
        parse_response(next?)
    }
}

pub fn alice() -> User {
    User {
        id: "1".to_owned(),
        username: "alice".to_owned(),
        email: "a@x.com".to_owned(),
        confirmed: true,
        blocked: false,
        role: None,
        document_id: None,
    }
}

pub fn member_role() -> Role {
    Role {
        id: "2".to_owned(),
        name: "Authenticated".to_owned(),
        description: Some("Default role given to authenticated user.".to_owned()),
        kind: "authenticated".to_owned(),
    }
}

/// Response body for a successful `login` as the backend sends it.
pub fn login_body(token: &str) -> Value {
    serde_json::json!({
        "data": {
            "login": {
                "jwt": token,
                "user": {
                    "id": "1",
                    "username": "alice",
                    "email": "a@x.com",
                    "confirmed": true,
                    "blocked": false,
                    "role": null
                }
            }
        }
    })
}

pub fn error_body(message: &str) -> Value {
    serde_json::json!({ "data": null, "errors": [{ "message": message }] })
}
