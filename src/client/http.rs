use crate::client::ChatBackend;
use crate::config::ChatConfig;
use crate::error::{ChatError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatReply {
    message: String,
}

pub struct HttpChatBackend {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpChatBackend {
    pub fn new(config: &ChatConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| ChatError::HttpClientBuild(err.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send_message(&self, text: &str) -> Result<String> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&ChatRequest { message: text })
            .send()
            .await
            .map_err(|err| ChatError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ChatError::Transport(err.to_string()))?;
        if !status.is_success() {
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_reply(&body)
    }
}

pub(crate) fn parse_reply(body: &str) -> Result<String> {
    serde_json::from_str::<ChatReply>(body)
        .map(|reply| reply.message)
        .map_err(|err| ChatError::MalformedReply(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_reply, HttpChatBackend};
    use crate::client::ChatBackend;
    use crate::config::ChatConfig;
    use crate::error::ChatError;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::time::Duration;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("test listener should bind");
        let addr = listener.local_addr().expect("listener should have an address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}/api/chat")
    }

    fn backend_for(endpoint: String) -> HttpChatBackend {
        let config = ChatConfig {
            endpoint,
            request_timeout: Some(Duration::from_secs(5)),
            ..ChatConfig::default()
        };
        HttpChatBackend::new(&config).expect("http backend should build")
    }

    #[test]
    fn parse_reply_reads_message_and_ignores_extra_fields() {
        let reply = parse_reply(r#"{"message":"Hi there","timestamp":"2024-01-01T00:00:00"}"#)
            .expect("reply should parse");
        assert_eq!(reply, "Hi there");
    }

    #[test]
    fn parse_reply_rejects_missing_or_non_string_message() {
        for body in [r#"{"reply":"Hi"}"#, r#"{"message":42}"#, "not json", ""] {
            let error = parse_reply(body).expect_err("body should be rejected");
            assert!(matches!(error, ChatError::MalformedReply(_)), "{body}: {error}");
        }
    }

    #[tokio::test]
    async fn posts_message_field_and_returns_reply() {
        let app = Router::new().route(
            "/api/chat",
            post(|Json(body): Json<Value>| async move {
                let echoed = body["message"].as_str().unwrap_or_default().to_uppercase();
                Json(json!({ "message": echoed, "timestamp": "now" }))
            }),
        );
        let backend = backend_for(serve(app).await);

        let reply = backend.send_message("hello").await.expect("send should succeed");
        assert_eq!(reply, "HELLO");
    }

    #[tokio::test]
    async fn non_success_status_is_a_failure() {
        let app = Router::new().route(
            "/api/chat",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let backend = backend_for(serve(app).await);

        let error = backend.send_message("hello").await.expect_err("500 should fail");
        assert_eq!(
            error,
            ChatError::Status {
                status: 500,
                body: "boom".to_string()
            }
        );
    }

    #[tokio::test]
    async fn unexpected_reply_shape_is_a_failure() {
        let app = Router::new().route(
            "/api/chat",
            post(|| async { Json(json!({ "text": "wrong field" })) }),
        );
        let backend = backend_for(serve(app).await);

        let error = backend.send_message("hello").await.expect_err("shape should fail");
        assert!(matches!(error, ChatError::MalformedReply(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("test listener should bind");
        let addr = listener.local_addr().expect("listener should have an address");
        drop(listener);

        let backend = backend_for(format!("http://{addr}/api/chat"));
        let error = backend.send_message("hello").await.expect_err("nothing is listening");
        assert!(matches!(error, ChatError::Transport(_)));
    }
}
