//! 联系表单转发

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::contact::ContactMessage;

#[async_trait]
pub trait ContactService: Send + Sync {
    async fn submit(&self, message: ContactMessage) -> Result<()>;
}

#[derive(Debug, Deserialize, Default)]
struct RelayError {
    #[serde(default)]
    message: Option<String>,
}

/// 将表单 POST 到外部联系接口
pub struct HttpContactRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactRelay {
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl ContactService for HttpContactRelay {
    async fn submit(&self, message: ContactMessage) -> Result<()> {
        let body = message.relay_body();
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<RelayError>(&text)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("contact relay returned {}", status));
            return Err(AppError::Connection(detail));
        }

        info!(subject = %body.subject, "Contact message relayed");
        Ok(())
    }
}

/// 未配置转发地址时只记录日志
#[derive(Debug, Default)]
pub struct LogContactSink;

#[async_trait]
impl ContactService for LogContactSink {
    async fn submit(&self, message: ContactMessage) -> Result<()> {
        let body = message.relay_body();
        info!(
            name = %body.name,
            email = %body.email,
            subject = %body.subject,
            "Contact message received"
        );
        Ok(())
    }
}

pub fn create_contact_service(
    endpoint: Option<&str>,
    timeout_secs: u64,
) -> Result<Box<dyn ContactService>> {
    match endpoint {
        Some(url) if !url.trim().is_empty() => {
            Ok(Box::new(HttpContactRelay::new(url, timeout_secs)?))
        }
        _ => Ok(Box::new(LogContactSink)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_relay_posts_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contact"))
            .and(body_partial_json(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "New message from Ada - No project type"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let relay = HttpContactRelay::new(&format!("{}/api/contact", server.uri()), 5).unwrap();
        relay.submit(message()).await.unwrap();
    }

    #[tokio::test]
    async fn test_relay_surfaces_remote_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"message": "Mailbox full"})),
            )
            .mount(&server)
            .await;

        let relay = HttpContactRelay::new(&server.uri(), 5).unwrap();
        let err = relay.submit(message()).await.unwrap_err();
        assert!(matches!(err, AppError::Connection(ref m) if m == "Mailbox full"));
    }

    #[tokio::test]
    async fn test_relay_without_message_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let relay = HttpContactRelay::new(&server.uri(), 5).unwrap();
        let err = relay.submit(message()).await.unwrap_err();
        assert!(matches!(err, AppError::Connection(ref m) if m.contains("503")));
    }

    #[tokio::test]
    async fn test_log_sink_accepts() {
        let sink = create_contact_service(None, 5).unwrap();
        assert!(sink.submit(message()).await.is_ok());
    }
}
