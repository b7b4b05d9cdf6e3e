//! Client for an OpenAI-compatible chat-completions endpoint.
//!
//! The gateway makes exactly one request per call with a fixed timeout and no
//! retries; callers see the raw failure. The API key comes from
//! [`GatewayConfig`] and is checked at call time, so a server without a key
//! still serves every non-model operation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::config::GatewayConfig;
use crate::{Error, Result};

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that frame the conversation
    System,
    /// The caller's request
    User,
    /// A model reply
    Assistant,
}

/// One message of a chat-completions request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who is speaking
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// A system-role message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// A user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Something that can answer a chat conversation with text.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Send `messages` and return the model's reply text.
    async fn ask(&self, messages: &[ChatMessage]) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// [`ModelGateway`] backed by a chat-completions HTTP API.
pub struct ChatCompletionsGateway {
    client: Client,
    config: GatewayConfig,
}

impl ChatCompletionsGateway {
    /// Build a gateway with the configured request timeout.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("docsift/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client, config })
    }

    /// Settings this gateway was built with.
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn timeout_error(&self) -> Error {
        Error::Timeout(format!(
            "model API did not answer within {}s",
            self.config.timeout_secs
        ))
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(Error::CredentialMissing)
    }
}

#[async_trait]
impl ModelGateway for ChatCompletionsGateway {
    #[instrument(skip(self, messages), fields(model = %self.config.model, messages = messages.len()))]
    async fn ask(&self, messages: &[ChatMessage]) -> Result<String> {
        let api_key = self.api_key()?;

        let body = ChatRequest {
            model: &self.config.model,
            messages,
            stream: false,
            temperature: self.config.temperature,
        };

        debug!(url = %self.config.api_url, "sending chat completion request");

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "chat completion request failed");
                if e.is_timeout() {
                    self.timeout_error()
                } else {
                    Error::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(%status, body = %detail, "model API returned an error status");
            return Err(Error::Gateway(describe_status(status, &detail)));
        }

        // The client timeout also covers reading the body.
        let parsed: ChatResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                error!(error = %e, "model API response body timed out");
                self.timeout_error()
            } else {
                error!(error = %e, "model API response was not valid JSON");
                Error::Gateway(format!("malformed response body: {e}"))
            }
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::Gateway("response contained no message content".to_string()))
    }
}

fn describe_status(status: StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        format!("model API returned status {status}")
    } else {
        format!("model API returned status {status}: {}", body.trim())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer, api_key: Option<&str>) -> GatewayConfig {
        GatewayConfig {
            api_url: format!("{}/chat/completions", server.uri()),
            api_key: api_key.map(str::to_string),
            timeout_secs: 5,
            ..GatewayConfig::default()
        }
    }

    fn messages() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("be brief"),
            ChatMessage::user("summarize"),
        ]
    }

    #[tokio::test]
    async fn test_successful_completion() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "deepseek-chat",
                "stream": false,
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "summarize"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "Done."}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = ChatCompletionsGateway::new(config_for(&server, Some("sk-test"))).unwrap();
        let reply = gateway.ask(&messages()).await.unwrap();

        assert_eq!(reply, "Done.");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        for key in [None, Some("   ")] {
            let gateway = ChatCompletionsGateway::new(config_for(&server, key)).unwrap();
            let err = gateway.ask(&messages()).await.unwrap_err();
            assert!(matches!(err, Error::CredentialMissing), "got {err:?}");
        }
    }

    #[tokio::test]
    async fn test_error_status_is_gateway_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let gateway = ChatCompletionsGateway::new(config_for(&server, Some("bad"))).unwrap();
        let err = gateway.ask(&messages()).await.unwrap_err();

        match err {
            Error::Gateway(msg) => {
                assert!(msg.contains("401"));
                assert!(msg.contains("invalid api key"));
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_gateway_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let gateway = ChatCompletionsGateway::new(config_for(&server, Some("k"))).unwrap();
        let err = gateway.ask(&messages()).await.unwrap_err();

        assert!(matches!(err, Error::Gateway(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_empty_choices_is_gateway_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let gateway = ChatCompletionsGateway::new(config_for(&server, Some("k"))).unwrap();
        let err = gateway.ask(&messages()).await.unwrap_err();

        assert!(matches!(err, Error::Gateway(msg) if msg.contains("no message content")));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(3))
                    .set_body_json(json!({
                        "choices": [{"message": {"content": "late"}}]
                    })),
            )
            .mount(&server)
            .await;

        let config = GatewayConfig {
            timeout_secs: 1,
            ..config_for(&server, Some("k"))
        };
        let gateway = ChatCompletionsGateway::new(config).unwrap();
        let err = gateway.ask(&messages()).await.unwrap_err();

        assert!(matches!(err, Error::Timeout(_)), "got {err:?}");
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_stalled_body_times_out() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // Headers arrive promptly, then the body stalls mid-document.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 16 * 1024];
            let _ = socket.read(&mut buf).await;
            socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
                      content-length: 64\r\n\r\n{\"choices\":",
                )
                .await
                .unwrap();
            socket.flush().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let config = GatewayConfig {
            api_url: format!("http://{addr}/chat/completions"),
            api_key: Some("k".to_string()),
            timeout_secs: 1,
            ..GatewayConfig::default()
        };
        let gateway = ChatCompletionsGateway::new(config).unwrap();
        let err = gateway.ask(&messages()).await.unwrap_err();

        assert!(matches!(err, Error::Timeout(_)), "got {err:?}");
    }

    #[test]
    fn test_message_serialization() {
        let value = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(value, json!({"role": "user", "content": "hi"}));
    }
}
