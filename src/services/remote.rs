//! 远程助手客户端
//!
//! 请求体 `{ "message", "session_id" }`，成功应答为带 `response` 字段的 JSON。
//! 不重试，不缓存。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::AssistantConfig;

/// 远程调用失败原因
#[derive(Debug, Error)]
pub enum RemoteError {
    /// 未配置远程地址
    #[error("remote assistant is not configured")]
    Disabled,

    /// 超时
    #[error("remote assistant timed out after {0:?}")]
    Timeout(Duration),

    /// 网络传输错误
    #[error("transport error: {0}")]
    Transport(String),

    /// 非 2xx 状态码
    #[error("remote assistant returned status {0}")]
    Status(u16),

    /// 应答格式不符合约定
    #[error("malformed remote payload: {0}")]
    Malformed(String),
}

/// 远程助手 trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteAssistant: Send + Sync {
    /// 将问题转发给远程助手
    async fn ask(&self, message: &str, session_id: &str) -> Result<String, RemoteError>;
}

#[derive(Debug, Serialize)]
struct RemoteRequest<'a> {
    message: &'a str,
    session_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct RemoteResponse {
    response: String,
}

/// HTTP 远程助手
pub struct HttpRemoteAssistant {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpRemoteAssistant {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            timeout,
        })
    }

    fn classify(&self, error: reqwest::Error) -> RemoteError {
        if error.is_timeout() {
            RemoteError::Timeout(self.timeout)
        } else if error.is_decode() {
            RemoteError::Malformed(error.to_string())
        } else {
            RemoteError::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl RemoteAssistant for HttpRemoteAssistant {
    async fn ask(&self, message: &str, session_id: &str) -> Result<String, RemoteError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RemoteRequest {
                message,
                session_id,
            })
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        let payload: RemoteResponse = serde_json::from_slice(&body)
            .map_err(|e| RemoteError::Malformed(e.to_string()))?;

        Ok(payload.response)
    }
}

/// 未配置远程地址时使用，总是返回 [`RemoteError::Disabled`]
pub struct DisabledRemote;

#[async_trait]
impl RemoteAssistant for DisabledRemote {
    async fn ask(&self, _message: &str, _session_id: &str) -> Result<String, RemoteError> {
        Err(RemoteError::Disabled)
    }
}

/// 根据配置创建远程助手
pub fn create_remote_assistant(
    config: &AssistantConfig,
) -> Result<Box<dyn RemoteAssistant>, RemoteError> {
    match config.remote_url.as_deref() {
        Some(url) if !url.trim().is_empty() => {
            let timeout = Duration::from_secs(config.remote_timeout_secs);
            Ok(Box::new(HttpRemoteAssistant::new(url, timeout)?))
        }
        _ => Ok(Box::new(DisabledRemote)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer, timeout: Duration) -> HttpRemoteAssistant {
        HttpRemoteAssistant::new(&format!("{}/api/chat", server.uri()), timeout).unwrap()
    }

    #[tokio::test]
    async fn test_ask_returns_response_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_json(json!({ "message": "skills?", "session_id": "s1" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "Rust and Python",
                "sources": [],
                "session_id": "s1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let remote = client_for(&server, Duration::from_secs(2)).await;
        let answer = remote.ask("skills?", "s1").await.unwrap();
        assert_eq!(answer, "Rust and Python");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let remote = client_for(&server, Duration::from_secs(2)).await;
        let err = remote.ask("hi", "s1").await.unwrap_err();
        assert!(matches!(err, RemoteError::Status(503)));
    }

    #[tokio::test]
    async fn test_missing_response_field_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "nope" })))
            .mount(&server)
            .await;

        let remote = client_for(&server, Duration::from_secs(2)).await;
        let err = remote.ask("hi", "s1").await.unwrap_err();
        assert!(matches!(err, RemoteError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_slow_remote_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "response": "late" }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let remote = client_for(&server, Duration::from_millis(100)).await;
        let err = remote.ask("hi", "s1").await.unwrap_err();
        assert!(matches!(err, RemoteError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let remote =
            HttpRemoteAssistant::new("http://127.0.0.1:1/api/chat", Duration::from_secs(1)).unwrap();
        let err = remote.ask("hi", "s1").await.unwrap_err();
        assert!(matches!(err, RemoteError::Transport(_) | RemoteError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_disabled_when_unconfigured() {
        let config = AssistantConfig {
            remote_url: None,
            remote_timeout_secs: 5,
            ..Default::default()
        };
        let remote = create_remote_assistant(&config).unwrap();
        assert!(matches!(
            remote.ask("hi", "s1").await,
            Err(RemoteError::Disabled)
        ));
    }
}
