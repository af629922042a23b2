//! GraphQL request boundary: documents, transport contract, response parsing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call goes through [`Transport::send`], which performs exactly
//! one HTTP attempt. Typed operations ([`login`], [`register`], [`users`])
//! decode `data` into concrete types here so nothing untyped crosses into the
//! session store.
//!
//! ERROR HANDLING
//! ==============
//! A non-empty `errors` array wins over any `data` in the same body. Only the
//! first message is surfaced; the rest are counted in a debug event.

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::GraphqlError;
use crate::types::{AuthPayload, UserSummary};

/// Backend endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api-qa.seamasterai.com/graphql";

pub const LOGIN_MUTATION: &str = r#"
  mutation Login($identifier: String!, $password: String!) {
    login(input: {
      identifier: $identifier
      password: $password
      provider: "local"
    }) {
      jwt
      user {
        id
        username
        email
        confirmed
        blocked
        role {
          description
          id
          name
          type
        }
      }
    }
  }
"#;

pub const REGISTER_MUTATION: &str = r"
  mutation Register($email: String!, $password: String!, $username: String!) {
    register(input: {
      email: $email
      password: $password
      username: $username
    }) {
      jwt
      user {
        id
        username
        email
        documentId
        confirmed
        blocked
        role {
          description
          id
          name
          type
        }
      }
    }
  }
";

pub const USERS_QUERY: &str = r"
  query GetUsers {
    users {
      id
      name
      email
      role
      confirmed
      createdAt
    }
  }
";

/// JSON body of a GraphQL POST.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: &'a Map<String, Value>,
}

/// One request/response cycle against the GraphQL endpoint.
///
/// Implementations POST [`GraphqlRequest`] as JSON with
/// `Content-Type: application/json`, add `Authorization: Bearer <token>` when
/// `token` is given, and hand the parsed body to [`parse_response`]. No retry.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send `query` with `variables` and return the response's `data`.
    ///
    /// # Errors
    ///
    /// [`GraphqlError::Transport`] when no response arrives,
    /// [`GraphqlError::Remote`] when the body carries GraphQL errors.
    async fn send(&self, query: &str, variables: Map<String, Value>, token: Option<&str>)
    -> Result<Value, GraphqlError>;
}

/// Extract `data` from a parsed GraphQL response body.
///
/// # Errors
///
/// Returns [`GraphqlError::Remote`] with the first error's message when `errors`
/// is a non-empty array.
pub fn parse_response(mut body: Value) -> Result<Value, GraphqlError> {
    if let Some(errors) = body.get("errors").and_then(Value::as_array)
        && let Some(first) = errors.first()
    {
        if errors.len() > 1 {
            tracing::debug!(discarded = errors.len() - 1, "graphql response carried additional errors");
        }
        let message = first
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| first.to_string(), str::to_owned);
        return Err(GraphqlError::Remote(message));
    }
    Ok(body.get_mut("data").map(Value::take).unwrap_or(Value::Null))
}

/// Parse a raw response body; non-JSON bodies are reported with the HTTP status.
///
/// # Errors
///
/// Returns [`GraphqlError::InvalidResponse`] when `text` is not JSON, otherwise
/// whatever [`parse_response`] returns.
pub fn parse_response_text(status: u16, text: &str) -> Result<Value, GraphqlError> {
    let body: Value = serde_json::from_str(text)
        .map_err(|e| GraphqlError::InvalidResponse(format!("status {status}: {e}")))?;
    parse_response(body)
}

/// Log in with an email/username and password.
///
/// # Errors
///
/// Propagates transport and remote errors; [`GraphqlError::InvalidResponse`]
/// when `data.login` is not a `{jwt, user}` object or the `jwt` is empty.
pub async fn login<T: Transport>(transport: &T, identifier: &str, password: &str) -> Result<AuthPayload, GraphqlError> {
    let mut variables = Map::new();
    variables.insert("identifier".to_owned(), Value::from(identifier));
    variables.insert("password".to_owned(), Value::from(password));
    let data = transport.send(LOGIN_MUTATION, variables, None).await?;
    decode_auth(data, "login")
}

/// Register a new account.
///
/// # Errors
///
/// Propagates transport and remote errors; [`GraphqlError::InvalidResponse`]
/// when `data.register` is not a `{jwt, user}` object or the `jwt` is empty.
pub async fn register<T: Transport>(
    transport: &T,
    email: &str,
    password: &str,
    username: &str,
) -> Result<AuthPayload, GraphqlError> {
    let mut variables = Map::new();
    variables.insert("email".to_owned(), Value::from(email));
    variables.insert("password".to_owned(), Value::from(password));
    variables.insert("username".to_owned(), Value::from(username));
    let data = transport.send(REGISTER_MUTATION, variables, None).await?;
    decode_auth(data, "register")
}

/// List users visible to the bearer of `token`.
///
/// # Errors
///
/// Propagates transport and remote errors; [`GraphqlError::InvalidResponse`]
/// when `data.users` is not a list of users.
pub async fn users<T: Transport>(transport: &T, token: &str) -> Result<Vec<UserSummary>, GraphqlError> {
    let data = transport.send(USERS_QUERY, Map::new(), Some(token)).await?;
    decode_field(data, "users")
}

/// A `{jwt, user}` payload with a usable token.
fn decode_auth(data: Value, field: &str) -> Result<AuthPayload, GraphqlError> {
    let payload: AuthPayload = decode_field(data, field)?;
    if payload.token.is_empty() {
        return Err(GraphqlError::InvalidResponse(format!("`{field}`: empty jwt")));
    }
    Ok(payload)
}

fn decode_field<D: DeserializeOwned>(mut data: Value, field: &str) -> Result<D, GraphqlError> {
    let value = data
        .get_mut(field)
        .map(Value::take)
        .filter(|v| !v.is_null())
        .ok_or_else(|| GraphqlError::InvalidResponse(format!("missing `{field}` in response data")))?;
    serde_json::from_value(value).map_err(|e| GraphqlError::InvalidResponse(format!("`{field}`: {e}")))
}
