// src/client/mod.rs
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::analysis::{AnalysisDocument, AnalysisRequest};
use crate::error::{AnalysisError, Result};

pub mod dispatcher;

pub use dispatcher::{Completion, Dispatcher};

/// The remote analysis service, as seen by the client.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisDocument>;
}

/// Error body returned with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub struct HttpAnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalysisClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/analyze", self.base_url)
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisDocument> {
        tracing::debug!(url = %request.url, period = %request.period, "POST /analyze");

        let resp = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(AnalysisError::Service {
                status: status.as_u16(),
                message: service_message(&body),
            });
        }

        let document = AnalysisDocument::from_json(&body)?;
        Ok(document)
    }
}

/// The `error` field of an error body, if it has a non-blank one.
fn service_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Period;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = HttpAnalysisClient::new("http://127.0.0.1:5000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:5000/analyze");
    }

    #[test]
    fn service_message_reads_error_field() {
        assert_eq!(service_message(r#"{"error": "No reviews found"}"#).as_deref(), Some("No reviews found"));
        assert_eq!(service_message(r#"{"error": "  "}"#), None);
        assert_eq!(service_message(r#"{"detail": "x"}"#), None);
        assert_eq!(service_message("<html>502</html>"), None);
    }

    #[test]
    fn request_body_matches_wire_format() {
        let request = AnalysisRequest::new("https://play.google.com/store/apps/details?id=x", Period::OneYear);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({
            "url": "https://play.google.com/store/apps/details?id=x",
            "period": "1y"
        }));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        // Bind then release a port so nothing is listening on it.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = HttpAnalysisClient::new(&format!("http://127.0.0.1:{port}"), Duration::from_secs(5)).unwrap();
        let err = client
            .analyze(&AnalysisRequest::new("https://play.google.com/store/apps/details?id=x", Period::OneWeek))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Transport(_)));
    }
}
