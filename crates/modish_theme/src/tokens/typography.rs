//! Typography tokens for theming

use super::TokenStore;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// A text style fragment; unset fields leave the underlying style alone
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, alias = "font_family", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, alias = "font_size", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, alias = "line_height", skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(default, alias = "font_weight", skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

impl TextStyle {
    fn preset(font_size: f32, line_height: f32, font_weight: &str) -> Self {
        Self {
            font_family: Some("System".to_string()),
            font_size: Some(font_size),
            line_height: Some(line_height),
            font_weight: Some(font_weight.to_string()),
        }
    }

    /// Overlay `other` onto `self`, field by field
    pub fn merge(&mut self, other: &TextStyle) {
        if other.font_family.is_some() {
            self.font_family.clone_from(&other.font_family);
        }
        if other.font_size.is_some() {
            self.font_size = other.font_size;
        }
        if other.line_height.is_some() {
            self.line_height = other.line_height;
        }
        if other.font_weight.is_some() {
            self.font_weight.clone_from(&other.font_weight);
        }
    }
}

/// Built-in typography presets
pub fn typography_presets() -> Vec<(&'static str, TextStyle)> {
    vec![
        ("h1", TextStyle::preset(48.0, 60.0, "bold")),
        ("h2", TextStyle::preset(40.0, 48.0, "bold")),
        ("h3", TextStyle::preset(32.0, 40.0, "bold")),
        ("h4", TextStyle::preset(24.0, 32.0, "bold")),
        ("h5", TextStyle::preset(20.0, 28.0, "bold")),
        ("h6", TextStyle::preset(16.0, 24.0, "bold")),
        ("regular", TextStyle::preset(16.0, 24.0, "500")),
        ("small", TextStyle::preset(14.0, 22.0, "500")),
        ("tiny", TextStyle::preset(12.0, 18.0, "500")),
        ("button", TextStyle::preset(14.0, 19.0, "bold")),
        ("overline", TextStyle::preset(12.0, 16.0, "500")),
    ]
}

/// Registry of named text styles
#[derive(Debug)]
pub struct TypographyRegistry {
    store: RwLock<TokenStore<TextStyle>>,
}

impl Default for TypographyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypographyRegistry {
    /// Create a registry seeded with the built-in presets
    pub fn new() -> Self {
        Self {
            store: RwLock::new(TokenStore::with_entries(typography_presets())),
        }
    }

    /// Merge custom typographies (e.g. `text15`) into the registry
    pub fn load_typographies<K, I>(&self, typographies: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TextStyle)>,
    {
        let mut store = self.store.write().unwrap();
        store.load(typographies);
        tracing::debug!("TypographyRegistry: {} typographies loaded", store.len());
    }

    pub fn get(&self, name: &str) -> Option<TextStyle> {
        self.store.read().unwrap().get(name).cloned()
    }

    /// Whether `name` is exactly one of the loaded typography names
    pub fn matches(&self, name: &str) -> bool {
        self.store.read().unwrap().match_pattern().is_match(name)
    }

    pub fn match_pattern(&self) -> Regex {
        self.store.read().unwrap().match_pattern().clone()
    }

    pub fn names(&self) -> Vec<String> {
        let store = self.store.read().unwrap();
        store.names().into_iter().map(str::to_string).collect()
    }
}
