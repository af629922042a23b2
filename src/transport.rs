//! reqwest-backed GraphQL transport for the terminal client.
//!
//! One POST per call. Timeouts bound a hung request; there is no retry.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde_json::{Map, Value};
use session::GraphqlError;
use session::graphql::{GraphqlRequest, Transport, parse_response_text};

use crate::config::ClientConfig;

pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Build a transport for `config.endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, GraphqlError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| GraphqlError::Transport(format!("HTTP client build failed: {e}")))?;
        Ok(Self { http, endpoint: config.endpoint.clone() })
    }
}

impl Transport for HttpTransport {
    async fn send(
        &self,
        query: &str,
        variables: Map<String, Value>,
        token: Option<&str>,
    ) -> Result<Value, GraphqlError> {
        let body = GraphqlRequest { query, variables: &variables };
        let mut request = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::debug!(error = %e, endpoint = %self.endpoint, "graphql request failed");
            GraphqlError::Transport(e.to_string())
        })?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GraphqlError::Transport(e.to_string()))?;
        tracing::debug!(status, bytes = text.len(), "graphql response received");
        parse_response_text(status, &text)
    }
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod tests;
