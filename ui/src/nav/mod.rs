//! Navigation Core
//!
//! Every module button delegates its click to this module instead of
//! talking to the router directly:
//!
//! - [`Navigator`]: the routing collaborator trait
//! - [`RouterNavigator`]: production implementation over the leptos router
//! - [`NavigationTrigger`]: activation handling, outcome diagnostics, and
//!   the activation listener list
//! - [`DiagnosticSink`]: the logging collaborator
//!
//! Keeping the router and the log sink behind traits lets tests script
//! every settlement of a navigation request.

mod router;
mod sink;
mod trigger;

pub use router::RouterNavigator;
pub use sink::{DiagnosticSink, TracingSink};
pub use trigger::{ClickListener, NavigationOutcome, NavigationTrigger};

use async_trait::async_trait;

/// Error types for navigation requests
#[derive(Debug, thiserror::Error)]
pub enum NavigatorError {
    #[error("Router unavailable: {0}")]
    RouterUnavailable(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),
}

/// Trait for routing collaborators
///
/// `Ok(true)` means the route changed, `Ok(false)` a recognized refusal,
/// and `Err` an unexpected failure.
#[async_trait(?Send)]
pub trait Navigator {
    /// Request a route change to `target`
    async fn navigate(&self, target: &str) -> Result<bool, NavigatorError>;
}
