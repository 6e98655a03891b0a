//! HTTP client for an Ollama-style language-model endpoint.
//!
//! The endpoint's API style is explicit configuration, never sniffed from
//! URLs or response shapes at runtime: completion-style backends take
//! `{model, prompt, stream}` on `/api/generate` and answer in `response`,
//! chat-style backends take `{model, messages, stream}` on `/api/chat` and
//! answer in `message.content` (or the OpenAI-compatible
//! `choices[0].message.content`).

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use trilex::{LlmClient, QueryError};

use crate::connection::ConnectionState;
use crate::error::ClientError;

/// Prompt sent by the probe; the reply is discarded.
const PROBE_PROMPT: &str = "Hello";

/// The two request/response contracts a backend can speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStyle {
    /// `{model, prompt, stream}` on `/api/generate`, text in `response`.
    #[default]
    Completion,
    /// `{model, messages, stream}` on `/api/chat`, text in `message.content`.
    Chat,
}

impl ApiStyle {
    /// Endpoint path for this style, relative to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            ApiStyle::Completion => "/api/generate",
            ApiStyle::Chat => "/api/chat",
        }
    }

    /// Request body for this style.
    pub fn request_body(self, model: &str, prompt: &str) -> Value {
        match self {
            ApiStyle::Completion => json!({
                "model": model,
                "prompt": prompt,
                "stream": false,
            }),
            ApiStyle::Chat => json!({
                "model": model,
                "messages": [{"role": "user", "content": prompt}],
                "stream": false,
            }),
        }
    }

    /// Pulls the answer text out of a parsed response body.
    pub fn extract(self, value: &Value) -> Option<String> {
        let text = match self {
            ApiStyle::Completion => value.get("response")?.as_str()?,
            ApiStyle::Chat => value
                .pointer("/message/content")
                .or_else(|| value.pointer("/choices/0/message/content"))?
                .as_str()?,
        };
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

/// Connection settings for [`HttpLlmClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service, without a trailing slash.
    pub base_url: String,
    pub model: String,
    pub api_style: ApiStyle,
    /// Timeout for the two probe requests.
    pub probe_timeout: Duration,
    /// Timeout for a full generation request.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "qwen3:8b".to_string(),
            api_style: ApiStyle::Completion,
            probe_timeout: Duration::from_secs(8),
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// Language-model client over HTTP, carrying its own connection state.
///
/// A query on a not-[`Connected`](ConnectionState::Connected) client probes
/// first; a failed query invalidates the state so the next query re-probes.
#[derive(Debug)]
pub struct HttpLlmClient {
    config: ClientConfig,
    http: reqwest::Client,
    state: Mutex<ConnectionState>,
}

impl HttpLlmClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            config,
            http,
            state: Mutex::new(ConnectionState::Untested),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replaces the connection settings.
    ///
    /// The connection state invalidates back to untested, so the next query
    /// re-probes against the new endpoint and model.
    pub fn update_config(&mut self, config: ClientConfig) -> Result<(), ClientError> {
        self.http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        self.config = config;
        let state = self.state().invalidate();
        *self.state_lock() = state;
        Ok(())
    }

    /// Current connection state.
    pub fn state(&self) -> ConnectionState {
        *self.state_lock()
    }

    /// Probes the service and records the outcome.
    ///
    /// Two steps: a GET against the base URL to confirm the service is up,
    /// then a one-word generation to confirm the model answers.
    pub async fn probe(&self) -> Result<(), ClientError> {
        let outcome = self.run_probe().await;
        let state = ConnectionState::after_probe(outcome.is_ok());
        *self.state_lock() = state;
        match &outcome {
            Ok(()) => info!(model = %self.config.model, "connection probe succeeded"),
            Err(err) => warn!(error = %err, "connection probe failed"),
        }
        outcome
    }

    async fn run_probe(&self) -> Result<(), ClientError> {
        let base = self
            .http
            .get(&self.config.base_url)
            .timeout(self.config.probe_timeout)
            .send()
            .await?;
        if !base.status().is_success() {
            return Err(ClientError::Unreachable(format!(
                "base service answered status {}",
                base.status()
            )));
        }

        let body = self
            .config
            .api_style
            .request_body(&self.config.model, PROBE_PROMPT);
        let response = self
            .http
            .post(self.endpoint())
            .json(&body)
            .timeout(self.config.probe_timeout)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::Unreachable(format!(
                "model endpoint answered status {}",
                response.status()
            )))
        }
    }

    async fn raw_query(&self, prompt: &str) -> Result<String, ClientError> {
        let body = self.config.api_style.request_body(&self.config.model, prompt);
        debug!(endpoint = %self.endpoint(), "sending generation request");

        let response = self.http.post(self.endpoint()).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response.json().await?;
        self.config
            .api_style
            .extract(&value)
            .ok_or(ClientError::EmptyResponse)
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url, self.config.api_style.path())
    }

    fn state_lock(&self) -> MutexGuard<'_, ConnectionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl LlmClient for HttpLlmClient {
    async fn query(&self, prompt: &str) -> Result<String, QueryError> {
        if self.state().needs_probe() {
            self.probe().await.map_err(QueryError::from)?;
        }
        match self.raw_query(prompt).await {
            Ok(text) => Ok(text),
            Err(err) => {
                *self.state_lock() = ConnectionState::Failed;
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_config_matches_local_ollama() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.model, "qwen3:8b");
        assert_eq!(config.api_style, ApiStyle::Completion);
        assert_eq!(config.probe_timeout, Duration::from_secs(8));
        assert_eq!(config.request_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_completion_request_shape() {
        let body = ApiStyle::Completion.request_body("m", "p");
        assert_eq!(body, json!({"model": "m", "prompt": "p", "stream": false}));
    }

    #[test]
    fn test_chat_request_shape() {
        let body = ApiStyle::Chat.request_body("m", "p");
        assert_eq!(
            body,
            json!({
                "model": "m",
                "messages": [{"role": "user", "content": "p"}],
                "stream": false,
            })
        );
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(ApiStyle::Completion.path(), "/api/generate");
        assert_eq!(ApiStyle::Chat.path(), "/api/chat");
    }

    #[test]
    fn test_completion_extracts_response_field() {
        let value = json!({"response": " text ", "done": true});
        assert_eq!(ApiStyle::Completion.extract(&value), Some("text".into()));
        assert_eq!(ApiStyle::Completion.extract(&json!({"response": ""})), None);
        assert_eq!(ApiStyle::Completion.extract(&json!({})), None);
    }

    #[test]
    fn test_chat_extracts_message_content() {
        let native = json!({"message": {"role": "assistant", "content": "hi"}});
        assert_eq!(ApiStyle::Chat.extract(&native), Some("hi".into()));

        let openai = json!({"choices": [{"message": {"content": "hello"}}]});
        assert_eq!(ApiStyle::Chat.extract(&openai), Some("hello".into()));

        assert_eq!(ApiStyle::Chat.extract(&json!({"response": "x"})), None);
    }

    #[test]
    fn test_new_client_starts_untested() {
        let client = HttpLlmClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.state(), ConnectionState::Untested);
    }

    #[test]
    fn test_update_config_invalidates_state() {
        let mut client = HttpLlmClient::new(ClientConfig::default()).unwrap();
        *client.state.lock().unwrap() = ConnectionState::Connected;

        let config = ClientConfig {
            model: "llama3:8b".to_string(),
            ..ClientConfig::default()
        };
        client.update_config(config).unwrap();

        assert_eq!(client.config().model, "llama3:8b");
        assert_eq!(client.state(), ConnectionState::Untested);
    }
}
