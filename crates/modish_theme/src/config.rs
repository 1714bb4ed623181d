//! Theme configuration file handling (modish.toml)
//!
//! ```toml
//! scheme = "dark"
//! use_platform_colors = false
//!
//! [colors]
//! grey10 = "#20303C"
//!
//! [typography.text15]
//! fontSize = 58
//! lineHeight = 81
//!
//! [spacings]
//! gapS1 = 6
//!
//! [components.Text]
//! default = { h6 = true }
//! forced = { selectable = false }
//! ```

use crate::error::ThemeError;
use crate::platform::Platform;
use crate::scheme::SchemeMode;
use crate::tokens::TextStyle;
use indexmap::IndexMap;
use modish_core::Props;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up when a directory is given
pub const CONFIG_FILE: &str = "modish.toml";

/// Top-level theme configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub scheme: SchemeMode,
    /// Hand out platform color handles for scheme tokens
    #[serde(default)]
    pub use_platform_colors: bool,
    /// Naming convention for platform colors; defaults to the build target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub colors: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub typography: IndexMap<String, TextStyle>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub spacings: IndexMap<String, f32>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub border_radii: IndexMap<String, f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemes: Option<SchemesConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_tokens: Option<DesignTokensConfig>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub components: IndexMap<String, ComponentThemeConfig>,
}

/// Replacement light/dark scheme pair
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SchemesConfig {
    #[serde(default)]
    pub light: IndexMap<String, String>,
    #[serde(default)]
    pub dark: IndexMap<String, String>,
}

/// Schemes generated from one seed color
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DesignTokensConfig {
    pub primary_color: String,
}

/// Static overrides for one component
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ComponentThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Props>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced: Option<Props>,
}

impl ThemeConfig {
    /// Load from a file, or from `modish.toml` inside a directory
    pub fn load_from_path(path: &Path) -> Result<Self, ThemeError> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        tracing::debug!("Loading theme config from {}", config_path.display());
        let content = fs::read_to_string(&config_path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modish_core::PropValue;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r##"
scheme = "dark"

[colors]
grey10 = "#20303C"

[typography.text15]
fontSize = 58
fontWeight = "100"
lineHeight = 81

[spacings]
gapS1 = 6

[border_radii]
br60 = 60

[components.Text]
default = { h6 = true, color = "grey10" }
forced = { selectable = false }
"##;

    #[test]
    fn parses_every_section() {
        let config = ThemeConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.scheme, SchemeMode::Dark);
        assert!(!config.use_platform_colors);
        assert_eq!(config.colors["grey10"], "#20303C");
        assert_eq!(config.typography["text15"].font_size, Some(58.0));
        assert_eq!(config.spacings["gapS1"], 6.0);
        assert_eq!(config.border_radii["br60"], 60.0);

        let text = &config.components["Text"];
        let defaults = text.default.as_ref().unwrap();
        assert_eq!(defaults["h6"], PropValue::Bool(true));
        assert_eq!(defaults["color"], PropValue::from("grey10"));
        assert_eq!(text.forced.as_ref().unwrap()["selectable"], PropValue::Bool(false));
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(ThemeConfig::from_toml_str("").unwrap(), ThemeConfig::default());
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        let err = ThemeConfig::from_toml_str("scheme = \"sepia\"").unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }

    #[test]
    fn toml_survives_a_round_trip() {
        let config = ThemeConfig::from_toml_str(SAMPLE).unwrap();
        let reparsed = ThemeConfig::from_toml_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(reparsed, config);
    }
}
