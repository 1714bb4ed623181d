//! Theme state
//!
//! [`ThemeState`] bundles every registry the modifier engine reads. Apps
//! normally use the process-wide instance from [`ThemeState::get`]; tests
//! and embedders can build isolated instances with [`ThemeState::new`].

use crate::colors::{ColorRegistry, PlatformColors};
use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::overrides::{ThemeContext, ThemeManager, COMPONENTS_KEY};
use crate::platform::detect_system_color_scheme;
use crate::scheme::{check_scheme_keys, ColorScheme, SchemeManager, SchemeMode};
use crate::tokens::{MetricRegistry, TextStyle, TypographyRegistry};
use modish_core::{PropValue, Props};
use std::sync::{Arc, OnceLock, RwLock};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// All token registries plus the component override manager
#[derive(Debug)]
pub struct ThemeState {
    schemes: Arc<SchemeManager>,
    colors: ColorRegistry,
    typography: TypographyRegistry,
    spacings: MetricRegistry,
    border_radii: MetricRegistry,
    components: ThemeManager,
    /// Host-supplied values passed to override resolvers
    context_values: RwLock<Props>,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Built-in tokens, mode `Default`, no host appearance
    pub fn new() -> Self {
        Self::with_options(SchemeMode::Default, None, PlatformColors::default())
    }

    pub fn with_options(
        mode: SchemeMode,
        host: Option<ColorScheme>,
        platform_colors: PlatformColors,
    ) -> Self {
        let schemes = Arc::new(SchemeManager::new(mode, host));
        Self {
            colors: ColorRegistry::new(Arc::clone(&schemes), platform_colors),
            schemes,
            typography: TypographyRegistry::new(),
            spacings: MetricRegistry::spacings(),
            border_radii: MetricRegistry::border_radii(),
            components: ThemeManager::new(),
            context_values: RwLock::new(Props::new()),
        }
    }

    /// Built-in tokens following the detected system appearance
    pub fn detect() -> Self {
        Self::with_options(
            SchemeMode::Default,
            detect_system_color_scheme(),
            PlatformColors::default(),
        )
    }

    /// Build a state and apply `config` to it
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let platform_colors = PlatformColors {
            enabled: config.use_platform_colors,
            platform: config.platform.unwrap_or_default(),
        };
        let state = Self::with_options(
            SchemeMode::Default,
            detect_system_color_scheme(),
            platform_colors,
        );
        state.apply_config(config)?;
        Ok(state)
    }

    /// Apply every section of `config` on top of the current tokens.
    ///
    /// Reserved component names, the scheme pair and the design-token seed
    /// are checked first, so an error leaves the state untouched. Then:
    /// colors, typography, spacings, radii, schemes, design tokens,
    /// component overrides, mode.
    pub fn apply_config(&self, config: &ThemeConfig) -> Result<(), ThemeError> {
        if let Some(component) = config.components.keys().find(|name| *name == COMPONENTS_KEY) {
            return Err(ThemeError::ReservedName(component.clone()));
        }
        if let Some(schemes) = &config.schemes {
            check_scheme_keys(
                schemes.light.keys().map(String::as_str),
                schemes.dark.keys().map(String::as_str),
            )?;
        }
        let design_tokens = config
            .design_tokens
            .as_ref()
            .map(|tokens| self.colors.generate_design_tokens(&tokens.primary_color))
            .transpose()?;

        self.colors
            .load_colors(config.colors.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        self.typography.load_typographies(
            config
                .typography
                .iter()
                .map(|(k, v)| (k.as_str(), v.clone())),
        );
        self.spacings
            .load(config.spacings.iter().map(|(k, v)| (k.as_str(), *v)));
        self.border_radii
            .load(config.border_radii.iter().map(|(k, v)| (k.as_str(), *v)));

        if let Some(schemes) = &config.schemes {
            self.colors.load_schemes(
                schemes.light.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                schemes.dark.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            )?;
        }
        if let Some((light, dark)) = design_tokens {
            self.colors.load_schemes(light, dark)?;
        }

        for (component, theme) in &config.components {
            if let Some(defaults) = &theme.default {
                self.components
                    .set_component_theme(component, defaults.clone())?;
            }
            if let Some(forced) = &theme.forced {
                self.components
                    .set_component_forced_theme(component, forced.clone())?;
            }
        }

        self.schemes.set_mode(config.scheme);
        tracing::debug!(
            "ThemeState::apply_config - scheme {} ({})",
            config.scheme,
            self.scheme()
        );
        Ok(())
    }

    // ========== Global instance ==========

    /// Install `state` as the global instance.
    ///
    /// Returns false if a global state already exists; it is left untouched.
    pub fn init(state: ThemeState) -> bool {
        THEME_STATE.set(state).is_ok()
    }

    /// Install a state following the system appearance
    pub fn init_default() -> bool {
        Self::init(Self::detect())
    }

    /// Get the global theme state, creating a detected default on first use
    pub fn get() -> &'static ThemeState {
        THEME_STATE.get_or_init(Self::detect)
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    // ========== Registries ==========

    pub fn schemes(&self) -> &Arc<SchemeManager> {
        &self.schemes
    }

    pub fn colors(&self) -> &ColorRegistry {
        &self.colors
    }

    pub fn typography(&self) -> &TypographyRegistry {
        &self.typography
    }

    pub fn spacings(&self) -> &MetricRegistry {
        &self.spacings
    }

    pub fn border_radii(&self) -> &MetricRegistry {
        &self.border_radii
    }

    pub fn components(&self) -> &ThemeManager {
        &self.components
    }

    pub fn load_typographies<K, I>(&self, typographies: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TextStyle)>,
    {
        self.typography.load_typographies(typographies);
    }

    pub fn load_spacings<K, I>(&self, spacings: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f32)>,
    {
        self.spacings.load(spacings);
    }

    pub fn load_border_radii<K, I>(&self, radii: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f32)>,
    {
        self.border_radii.load(radii);
    }

    // ========== Color Scheme ==========

    /// Effective color scheme
    pub fn scheme(&self) -> ColorScheme {
        self.schemes.effective_scheme()
    }

    pub fn set_scheme(&self, mode: SchemeMode) {
        self.schemes.set_mode(mode);
    }

    pub fn is_dark_mode(&self) -> bool {
        self.schemes.is_dark_mode()
    }

    // ========== Override context ==========

    pub fn set_context_value(&self, key: &str, value: PropValue) {
        self.context_values
            .write()
            .unwrap()
            .insert(key.to_string(), value);
    }

    /// Context handed to override resolvers right now
    pub fn context(&self) -> ThemeContext {
        ThemeContext {
            color_scheme: self.scheme(),
            values: self.context_values.read().unwrap().clone(),
        }
    }

    /// Effective props for `component` under an explicit context
    pub fn theme_props(&self, component: &str, props: &Props, context: &ThemeContext) -> Props {
        self.components.resolve(component, props, context)
    }

    /// [`ThemeState::theme_props`] with the current [`ThemeState::context`]
    pub fn resolve_component(&self, component: &str, props: &Props) -> Props {
        self.theme_props(component, props, &self.context())
    }
}
