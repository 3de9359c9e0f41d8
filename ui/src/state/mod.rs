//! Global State Management
//!
//! This module manages the global application state:
//! - Active configuration
//! - Data-header fields
//! - Last selected module
//! - Last backend error
//!
//! The last selected module is persisted to localStorage so the home
//! screen can highlight it on the next visit.

use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use serde::{Deserialize, Serialize};
use siges_shared::{header_fields, FieldEntry, UiConfig};

use crate::client::{ClientError, DataClient, HttpClient};

const PREFS_KEY: &str = "siges-ui-prefs";

/// UI preferences persisted across visits
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiPrefs {
    /// Name of the module selected most recently
    pub last_module: Option<String>,
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Active configuration
    pub config: RwSignal<UiConfig>,

    /// Data-header fields, empty values until the backend answers
    pub header: RwSignal<Vec<FieldEntry>>,

    /// Name of the module selected most recently
    pub last_module: RwSignal<Option<String>>,

    /// Last backend error message
    pub error: RwSignal<Option<String>>,
}

impl AppState {
    /// Create app state with empty header fields and restored preferences
    pub fn new() -> Self {
        let prefs: UiPrefs = LocalStorage::get(PREFS_KEY).unwrap_or_default();

        Self {
            config: create_rw_signal(UiConfig::default()),
            header: create_rw_signal(header_fields()),
            last_module: create_rw_signal(prefs.last_module),
            error: create_rw_signal(None),
        }
    }

    /// Load the data-header fields from the backend
    ///
    /// Best effort: on failure the header keeps its empty values.
    pub async fn load_header(&self) -> Result<(), ClientError> {
        let client = HttpClient::new(&self.config.get_untracked().api_url);

        client.health().await?;
        let fields = client.fetch_header().await?;

        self.header.set(fields);
        self.error.set(None);

        Ok(())
    }

    /// Record a module selection and persist it
    pub fn select_module(&self, name: &str) {
        self.last_module.set(Some(name.to_string()));
        self.save_prefs();
    }

    /// Save UI preferences to localStorage
    pub fn save_prefs(&self) {
        let prefs = UiPrefs {
            last_module: self.last_module.get_untracked(),
        };

        if let Err(e) = LocalStorage::set(PREFS_KEY, &prefs) {
            tracing::warn!("No se pudieron guardar las preferencias: {e}");
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
