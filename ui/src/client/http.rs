//! HTTP Data Client
//!
//! Talks to the management backend's REST API with `gloo-net`.

use gloo_net::http::Request;
use siges_shared::FieldEntry;

use super::{ClientError, DataClient};

/// REST client for the management backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Backend API base URL
    base_url: String,
}

impl HttpClient {
    /// Create a new client
    pub fn new(url: &str) -> Self {
        // Normalize URL (remove trailing slash)
        let base_url = url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Get the health endpoint URL
    fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// Get the data-header endpoint URL
    fn header_url(&self) -> String {
        format!("{}/cabecera", self.base_url)
    }
}

#[async_trait::async_trait(?Send)]
impl DataClient for HttpClient {
    async fn health(&self) -> Result<(), ClientError> {
        let response = Request::get(&self.health_url())
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(ClientError::ConnectionFailed(format!(
                "Health check failed: HTTP {}",
                response.status()
            )))
        }
    }

    async fn fetch_header(&self) -> Result<Vec<FieldEntry>, ClientError> {
        let response = Request::get(&self.header_url())
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(ClientError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let client = HttpClient::new("http://localhost:8080/");

        assert_eq!(client.health_url(), "http://localhost:8080/health");
        assert_eq!(client.header_url(), "http://localhost:8080/cabecera");
    }

    #[test]
    fn test_header_payload_shape() {
        let payload = r#"[{"label":"Actividad","value":"Inmunizaciones"},{"label":"Prioridad"}]"#;

        let fields: Vec<FieldEntry> = serde_json::from_str(payload).unwrap();
        assert_eq!(fields[0].value, "Inmunizaciones");
        assert!(fields[1].value.is_empty());
    }
}
