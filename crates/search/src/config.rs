//! Phrase splitting configuration
//!
//! Selects the field whose phrases are split. Can be read from a TOML
//! fragment or from rank properties.
//!
//! # Example
//!
//! ```toml
//! # Field whose phrase terms are split into single terms
//! field = "title"
//! # Set to false to pass every term through unchanged
//! enabled = true
//! ```

use serde::{Deserialize, Serialize};
use strata_core::{FefError, Properties, Result};

/// Property key naming the field to split phrases in
pub const FIELD_PROPERTY: &str = "phrasesplit.field";

/// Property key toggling phrase splitting (`"true"` / `"false"`)
pub const ENABLED_PROPERTY: &str = "phrasesplit.enabled";

/// Which field's phrases to split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseSplitConfig {
    /// Name of the field whose phrase terms are split
    pub field: String,
    /// When false, every term passes through unchanged
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl PhraseSplitConfig {
    /// Enabled config for `field`
    pub fn new(field: impl Into<String>) -> Self {
        PhraseSplitConfig {
            field: field.into(),
            enabled: true,
        }
    }

    /// Config that splits nothing
    pub fn disabled() -> Self {
        PhraseSplitConfig {
            field: String::new(),
            enabled: false,
        }
    }

    /// Parse a TOML fragment
    ///
    /// # Errors
    ///
    /// Returns `Serialization` on malformed TOML and `InvalidConfig` if the
    /// parsed config fails [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PhraseSplitConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read from rank properties
    ///
    /// A missing field property yields a disabled config.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the enabled flag is not a boolean or the
    /// result fails [`validate`](Self::validate).
    pub fn from_properties(props: &Properties) -> Result<Self> {
        let field = props.lookup(FIELD_PROPERTY).get().unwrap_or("");
        let enabled = match props.lookup(ENABLED_PROPERTY).get() {
            None => !field.is_empty(),
            Some(raw) => raw.trim().parse::<bool>().map_err(|_| {
                FefError::InvalidConfig(format!(
                    "'{}' must be \"true\" or \"false\", got '{}'",
                    ENABLED_PROPERTY, raw
                ))
            })?,
        };
        let config = PhraseSplitConfig {
            field: field.to_string(),
            enabled,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that an enabled config names a field
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when enabled with an empty field name.
    pub fn validate(&self) -> Result<()> {
        if self.enabled && self.field.trim().is_empty() {
            return Err(FefError::InvalidConfig(
                "phrase splitting is enabled but no field is named".to_string(),
            ));
        }
        Ok(())
    }
}
