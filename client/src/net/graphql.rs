//! Browser GraphQL transport over `fetch`.
//!
//! Client-side (`csr`): one POST per call via `gloo-net`.
//! Native builds: every call fails with a transport error, since there is no
//! browser to send from.

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use serde_json::{Map, Value};
use session::GraphqlError;
use session::graphql::{DEFAULT_ENDPOINT, Transport};

/// Endpoint baked in at build time via `PORTAL_GRAPHQL_ENDPOINT`.
pub fn endpoint() -> &'static str {
    resolve_endpoint(option_env!("PORTAL_GRAPHQL_ENDPOINT"))
}

fn resolve_endpoint(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_ENDPOINT)
}

#[derive(Clone, Copy, Debug)]
pub struct FetchTransport {
    endpoint: &'static str,
}

impl FetchTransport {
    pub fn new() -> Self {
        Self { endpoint: endpoint() }
    }
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for FetchTransport {
    async fn send(
        &self,
        query: &str,
        variables: Map<String, Value>,
        token: Option<&str>,
    ) -> Result<Value, GraphqlError> {
        #[cfg(feature = "csr")]
        {
            let body = session::graphql::GraphqlRequest { query, variables: &variables };
            let mut builder = gloo_net::http::Request::post(self.endpoint).header("Content-Type", "application/json");
            if let Some(token) = token {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let resp = builder
                .json(&body)
                .map_err(|e| GraphqlError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| GraphqlError::Transport(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| GraphqlError::Transport(e.to_string()))?;
            session::graphql::parse_response_text(status, &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (query, variables, token, self.endpoint);
            Err(GraphqlError::Transport("not available outside the browser".to_owned()))
        }
    }
}
