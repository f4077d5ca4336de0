//! Configuration of the message resources.
//!
//! A [`MessageConfig`] is usually read from TOML:
//!
//! ```
//! use principal_core::message::{keys, MessageFormatter};
//! use principal_core::utils::MessageConfig;
//!
//! let config = MessageConfig::from_toml_str(r#"
//!     locale = "de"
//!
//!     [messages]
//!     "NTUserPrincipal.name" = "NT-Benutzer: {0}"
//! "#).unwrap();
//!
//! let bundle = config.bundle();
//! assert_eq!(bundle.locale(), "de");
//! assert_eq!(bundle.format(keys::NT_USER_NAME, &["alice"]), "NT-Benutzer: alice");
//! ```

use crate::error::Result;
use crate::log_event;
use crate::message::ResourceBundle;
use crate::utils::LogLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_locale() -> String {
    "en".to_string()
}

fn default_log_level() -> LogLevel {
    LogLevel::Warning
}

/// Message resource settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageConfig {
    /// Locale tag of the resulting bundle.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Most verbose level the application should let through for this crate.
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    /// Templates that replace or extend the built-in auth bundle.
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            log_level: default_log_level(),
            messages: HashMap::new(),
        }
    }
}

impl MessageConfig {
    /// Parse a configuration from TOML.
    ///
    /// # Errors
    ///
    /// `Error::Config` on malformed TOML, unknown fields or an unknown log
    /// level.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Build a bundle: the built-in auth templates under this locale, with
    /// the configured messages layered on top.
    pub fn bundle(&self) -> ResourceBundle {
        let mut bundle = ResourceBundle::new(self.locale.clone());
        for (key, template) in ResourceBundle::auth().templates() {
            bundle.insert(key, template);
        }
        for (key, template) in &self.messages {
            bundle.insert(key.clone(), template.clone());
        }

        log_event!(LogLevel::Debug, "Built message bundle",
            locale => self.locale,
            templates => bundle.len(),
            overrides => self.messages.len(),
        );
        bundle
    }

    /// The configured level as a `log` filter.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.to_level_filter()
    }
}
