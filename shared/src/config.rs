//! UI configuration types
//!
//! Deployment-tunable settings for the UI: the backend base URL and the
//! module list shown on the home screen. Serializable to TOML so an
//! override file can ship next to the static bundle.

use serde::{Deserialize, Serialize};

use crate::modules::Module;

/// A configured home-screen module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Display title shown on the button
    pub title: String,

    /// Route the button navigates to
    pub route: String,
}

impl ModuleConfig {
    pub fn new(title: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            route: route.into(),
        }
    }
}

impl From<Module> for ModuleConfig {
    fn from(module: Module) -> Self {
        Self::new(module.title(), module.route())
    }
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Backend base URL for header data
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Modules shown on the home screen, in order
    #[serde(default = "default_modules")]
    pub modules: Vec<ModuleConfig>,
}

impl UiConfig {
    /// Create a configuration with the built-in module set
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert to TOML for an override file
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse from TOML
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            modules: default_modules(),
        }
    }
}

fn default_api_url() -> String {
    "/api".to_string()
}

fn default_modules() -> Vec<ModuleConfig> {
    Module::ALL.iter().copied().map(Into::into).collect()
}
