//! Color registry
//!
//! Resolves color token names against the active scheme first and the
//! static palette second, and provides the alpha-blending helpers.
//!
//! ```rust,ignore
//! let colors = ThemeState::get().colors();
//! colors.load_colors([("brand", "#FF5500")]);
//! colors.get("$textDefault"); // scheme token, follows light/dark
//! colors.rgba_hex("#FF5500", 0.5)?; // "rgba(255, 85, 0, 0.5)"
//! ```

use crate::design_tokens::{DesignTokenGenerator, PrimaryTintGenerator};
use crate::error::ThemeError;
use crate::platform::Platform;
use crate::scheme::{check_scheme_keys, ColorScheme, SchemeManager, SchemeMode};
use crate::tokens::{TokenStore, DESIGN_TOKENS_DARK, DESIGN_TOKENS_LIGHT, PALETTE};
use indexmap::IndexMap;
use modish_core::{rgba_from_channels, rgba_from_hex, PropValue};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::sync::{Arc, OnceLock, RwLock};

/// Generated (light, dark) scheme token maps
pub type SchemeTokens = (IndexMap<String, String>, IndexMap<String, String>);

/// Native color reference handed to the platform layer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlatformColor {
    pub name: String,
}

impl PlatformColor {
    /// Resource name for a scheme token on `platform`.
    ///
    /// Android resources cannot start with `$`, so it is dropped and the
    /// name is prefixed with `@color/`.
    pub fn for_token(platform: Platform, token: &str) -> Self {
        let name = match platform {
            Platform::Android => format!("@color/{}", token.strip_prefix('$').unwrap_or(token)),
            Platform::Ios | Platform::Desktop => token.to_string(),
        };
        Self { name }
    }
}

/// A resolved color.
///
/// `literal` is always the plain value of the token in the scheme that was
/// active at lookup time; `platform` is set when platform colors are enabled.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorValue {
    pub literal: String,
    pub platform: Option<PlatformColor>,
}

impl ColorValue {
    pub fn plain(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            platform: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.literal
    }
}

impl Display for ColorValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.literal)
    }
}

impl AsRef<str> for ColorValue {
    fn as_ref(&self) -> &str {
        &self.literal
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.literal)
    }
}

/// How scheme colors are handed out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlatformColors {
    /// Attach a [`PlatformColor`] handle to scheme tokens
    pub enabled: bool,
    pub platform: Platform,
}

fn background_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(bg-|background-)").expect("static pattern is valid"))
}

/// Palette + scheme color lookup
pub struct ColorRegistry {
    palette: RwLock<TokenStore<String>>,
    schemes: Arc<SchemeManager>,
    platform_colors: PlatformColors,
    generator: Box<dyn DesignTokenGenerator>,
}

impl std::fmt::Debug for ColorRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorRegistry")
            .field("palette", &self.palette.read().unwrap().len())
            .field("schemes", &self.schemes)
            .field("platform_colors", &self.platform_colors)
            .finish()
    }
}

impl ColorRegistry {
    /// Seed the palette and load the built-in light/dark design tokens
    pub fn new(schemes: Arc<SchemeManager>, platform_colors: PlatformColors) -> Self {
        let palette = TokenStore::with_entries(
            PALETTE
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        );

        let registry = Self {
            palette: RwLock::new(palette),
            schemes,
            platform_colors,
            generator: Box::new(PrimaryTintGenerator),
        };

        if let Err(e) = registry.load_schemes(
            DESIGN_TOKENS_LIGHT.iter().map(|(k, v)| (*k, v.to_string())),
            DESIGN_TOKENS_DARK.iter().map(|(k, v)| (*k, v.to_string())),
        ) {
            tracing::error!("Built-in design tokens rejected: {}", e);
        }

        registry
    }

    /// Replace the generator used by [`ColorRegistry::load_design_tokens`]
    pub fn with_generator(mut self, generator: impl DesignTokenGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    pub fn schemes(&self) -> &Arc<SchemeManager> {
        &self.schemes
    }

    // ========== Loading ==========

    /// Load custom static colors, e.g. `{grey10: "#20303C"}`; valid in both schemes
    pub fn load_colors<K, V, I>(&self, colors: I)
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut palette = self.palette.write().unwrap();
        palette.load(colors.into_iter().map(|(k, v)| (k, v.into())));
        tracing::debug!("ColorRegistry::load_colors - palette has {} colors", palette.len());
    }

    /// Load a light/dark scheme pair; see [`SchemeManager::load_schemes`]
    pub fn load_schemes<K, V, L, D>(&self, light: L, dark: D) -> Result<(), ThemeError>
    where
        K: Into<String>,
        V: Into<String>,
        L: IntoIterator<Item = (K, V)>,
        D: IntoIterator<Item = (K, V)>,
    {
        self.schemes.load_schemes(
            light.into_iter().map(|(k, v)| (k, v.into())),
            dark.into_iter().map(|(k, v)| (k, v.into())),
        )
    }

    /// Derive and load light/dark schemes from a single primary color
    pub fn load_design_tokens(&self, primary_color: &str) -> Result<(), ThemeError> {
        let (light, dark) = self.generate_design_tokens(primary_color)?;
        self.load_schemes(light, dark)
    }

    /// The light/dark pair [`ColorRegistry::load_design_tokens`] would load
    pub fn generate_design_tokens(&self, primary_color: &str) -> Result<SchemeTokens, ThemeError> {
        let light = self.generator.generate(primary_color, false)?;
        let dark = self.generator.generate(primary_color, true)?;
        check_scheme_keys(
            light.keys().map(String::as_str),
            dark.keys().map(String::as_str),
        )?;
        Ok((light, dark))
    }

    // ========== Lookup ==========

    /// Resolve a color token; scheme tokens shadow palette entries
    pub fn get(&self, name: &str) -> Option<ColorValue> {
        if let Some(literal) = self.schemes.get(name) {
            let platform = self
                .platform_colors
                .enabled
                .then(|| PlatformColor::for_token(self.platform_colors.platform, name));
            return Some(ColorValue { literal, platform });
        }

        self.palette
            .read()
            .unwrap()
            .get(name)
            .map(|literal| ColorValue::plain(literal.clone()))
    }

    /// Every resolvable color name with its current literal, sorted by name
    pub fn snapshot(&self) -> Vec<(String, String)> {
        let palette = self.palette.read().unwrap();
        let mut colors: Vec<(String, String)> = palette
            .iter()
            .filter(|(name, _)| !self.schemes.contains(name))
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        colors.extend(self.schemes.active_tokens());
        colors.sort_by(|a, b| a.0.cmp(&b.0));
        colors
    }

    /// Pattern recognising a background-color modifier prefix
    pub fn background_key_pattern(&self) -> &'static Regex {
        background_pattern()
    }

    // ========== Scheme ==========

    /// The app's effective color scheme
    pub fn scheme(&self) -> ColorScheme {
        self.schemes.effective_scheme()
    }

    pub fn set_scheme(&self, mode: SchemeMode) {
        self.schemes.set_mode(mode);
    }

    // ========== Alpha ==========

    /// Add alpha to a `#RGB` / `#RRGGBB` color
    pub fn rgba_hex(&self, hex: impl AsRef<str>, opacity: f64) -> Result<String, ThemeError> {
        Ok(rgba_from_hex(hex.as_ref(), opacity)?)
    }

    /// Add alpha to numeric RGB channels
    pub fn rgba(&self, r: f64, g: f64, b: f64, opacity: f64) -> Result<String, ThemeError> {
        Ok(rgba_from_channels(r, g, b, opacity)?)
    }

    /// Dynamic form: `[hex, opacity]` or `[r, g, b, opacity]`.
    ///
    /// Any other argument shape logs an error and yields `Ok(None)`. A bad
    /// hex or channel is logged too, then returned.
    pub fn resolve_alpha(&self, args: &[PropValue]) -> Result<Option<String>, ThemeError> {
        let resolved = match args {
            [PropValue::Text(hex), PropValue::Number(opacity)] => self.rgba_hex(hex, *opacity),
            [PropValue::Number(r), PropValue::Number(g), PropValue::Number(b), PropValue::Number(opacity)] => {
                self.rgba(*r, *g, *b, *opacity)
            }
            _ => {
                tracing::error!("Colors.rgba fail due to invalid arguments: {:?}", args);
                return Ok(None);
            }
        };
        resolved.map(Some).map_err(|e| {
            tracing::error!("Colors.rgba fail for {:?}: {}", args, e);
            e
        })
    }
}
