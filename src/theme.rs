use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::Result;

/// Name of the bundled style profile.
pub const DEFAULT_PROFILE: &str = "default";

static DEFAULT_THEME_TOML: &str = include_str!("default_theme.toml");

static DEFAULT_THEME: LazyLock<Theme> = LazyLock::new(|| {
    // Syntax and rule presence are checked by build.rs
    toml::from_str(DEFAULT_THEME_TOML).expect("bundled default_theme.toml is valid")
});

/// A style profile: container class, ordered style-injection rules and zebra striping.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    pub container_class: String,
    pub stripe: StripeConfig,
    pub rules: Vec<StyleRule>,
}

/// Positional background applied to every even body row of a table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StripeConfig {
    /// Selector for tables whose rows are striped.
    pub table: String,
    /// Selector for the rows counted inside each striped table.
    pub row: String,
    pub declarations: String,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            table: "table".to_string(),
            row: "tbody tr".to_string(),
            declarations: "background-color:#f8f8f8;".to_string(),
        }
    }
}

/// Declarations appended to every element matching any of `selectors`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StyleRule {
    pub selectors: Vec<String>,
    pub declarations: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            container_class: "markdown-body".to_string(),
            stripe: StripeConfig::default(),
            rules: Vec::new(),
        }
    }
}

impl Theme {
    /// The bundled "default" profile.
    pub fn compiled_default() -> Self {
        DEFAULT_THEME.clone()
    }

    /// Resolve a built-in profile by name.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            DEFAULT_PROFILE => Some(Self::compiled_default()),
            _ => None,
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a theme from a TOML file, surfacing read and parse errors.
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a theme from a TOML file, or return the bundled default if it
    /// is missing or malformed.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Falling back to default theme");
                Self::compiled_default()
            }
        }
    }
}
