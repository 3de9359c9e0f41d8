//! Backend Data Client
//!
//! The header values live in the management backend; this module provides
//! the narrow client the UI uses to fetch them. The trait exists so the
//! shell can later target a different backend without touching the
//! components.

mod http;

pub use http::HttpClient;

use async_trait::async_trait;
use siges_shared::FieldEntry;

/// Error types for backend requests
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for backend client implementations
#[async_trait(?Send)]
pub trait DataClient {
    /// Check if the backend is reachable
    async fn health(&self) -> Result<(), ClientError>;

    /// Fetch the populated data-header fields
    async fn fetch_header(&self) -> Result<Vec<FieldEntry>, ClientError>;
}
