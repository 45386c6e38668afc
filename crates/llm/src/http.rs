//! HTTP transport for the chat completions endpoint.

use crate::{Request, Response};
use anyhow::Result;
use ocore::{Completion, Message};
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderValue},
};

/// Default chat completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI-compatible chat completions client.
///
/// Holds a `reqwest::Client`, pre-built headers (auth + content-type),
/// and the target endpoint URL.
#[derive(Clone)]
pub struct OpenAI {
    client: Client,
    headers: HeaderMap,
    endpoint: String,
}

impl OpenAI {
    /// Create a client with Bearer token authentication.
    pub fn new(client: Client, key: &str) -> Result<Self> {
        Self::with_endpoint(client, key, DEFAULT_ENDPOINT)
    }

    /// Create a client against a custom OpenAI-compatible endpoint.
    pub fn with_endpoint(client: Client, key: &str, endpoint: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::AUTHORIZATION, format!("Bearer {key}").parse()?);
        Ok(Self {
            client,
            headers,
            endpoint: endpoint.to_owned(),
        })
    }
}

impl Completion for OpenAI {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<Option<String>> {
        let body = Request::new(model, messages);
        tracing::trace!("request: {}", serde_json::to_string(&body)?);
        let text = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: Response = serde_json::from_str(&text)?;
        Ok(response.reply())
    }
}
