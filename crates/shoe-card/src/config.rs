//! Card configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CardError, Result};
use crate::format::DEFAULT_RECENCY_DAYS;
use crate::money::Currency;

/// Card rendering configuration.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Prefix joined with the product slug to build the card link.
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,

    /// Currency prices are formatted in.
    #[serde(default)]
    pub currency: Currency,

    /// How long after release a shoe counts as new.
    #[serde(default = "default_recency_window_days")]
    pub recency_window_days: u32,

    /// Noun used in the color count ("Color" -> "3 Colors").
    #[serde(default = "default_color_label")]
    pub color_label: String,
}

fn default_path_prefix() -> String {
    "/shoe/".to_string()
}

fn default_recency_window_days() -> u32 {
    DEFAULT_RECENCY_DAYS
}

fn default_color_label() -> String {
    "Color".to_string()
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            path_prefix: default_path_prefix(),
            currency: Currency::default(),
            recency_window_days: default_recency_window_days(),
            color_label: default_color_label(),
        }
    }
}

impl CardConfig {
    /// Load config from a file. JSON when the path ends in `.json`, TOML otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CardError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        debug!(
            path = %path.display(),
            path_prefix = %config.path_prefix,
            currency = %config.currency,
            recency_window_days = config.recency_window_days,
            "loaded card config"
        );
        Ok(config)
    }

    /// Parse and validate a TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field constraints.
    pub fn validate(&self) -> Result<()> {
        let problem = if !self.path_prefix.starts_with('/') {
            Some(format!(
                "path_prefix must start with '/', got {:?}",
                self.path_prefix
            ))
        } else if self.recency_window_days == 0 {
            Some("recency_window_days must be greater than zero".to_string())
        } else if self.color_label.trim().is_empty() {
            Some("color_label must not be empty".to_string())
        } else {
            None
        };

        match problem {
            Some(message) => {
                warn!(%message, "rejected card config");
                Err(CardError::InvalidConfig(message))
            }
            None => Ok(()),
        }
    }
}
