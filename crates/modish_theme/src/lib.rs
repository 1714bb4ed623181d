//! Modish Theme System
//!
//! Named design tokens with light/dark schemes and per-component overrides.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Token stores**: Colors, typography, spacings, border radii, each with a
//!   name pattern rebuilt on every load
//! - **Schemes**: Parallel light/dark color sets, a selectable mode, and
//!   change listeners
//! - **Component overrides**: Default and forced props per component name
//! - **Configuration**: `modish.toml` files applied in one call
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use modish_theme::{SchemeMode, ThemeState};
//!
//! let theme = ThemeState::get();
//! theme.colors().load_colors([("brand", "#FF5500")]);
//! theme.load_spacings([("gapS1", 6.0)]);
//! theme.set_scheme(SchemeMode::Dark);
//!
//! let text = theme.colors().get("$textDefault");
//! ```
//!
//! # Component Overrides
//!
//! ```rust,ignore
//! let theme = ThemeState::get();
//! theme.components().set_component_theme("Text", props! { "h6" => true })?;
//! theme.components().set_component_forced_theme(
//!     "Button",
//!     Override::resolver(|props, ctx| { /* ... */ }),
//! )?;
//! ```

pub mod colors;
pub mod config;
pub mod design_tokens;
mod error;
pub mod overrides;
pub mod platform;
pub mod scheme;
pub mod state;
pub mod tokens;

// Re-export commonly used types
pub use colors::{ColorRegistry, ColorValue, PlatformColor, PlatformColors};
pub use config::{ComponentThemeConfig, DesignTokensConfig, SchemesConfig, ThemeConfig};
pub use design_tokens::{DesignTokenGenerator, PrimaryTintGenerator};
pub use error::ThemeError;
pub use overrides::{Override, OverrideResolver, ThemeContext, ThemeManager, COMPONENTS_KEY};
pub use platform::{detect_system_color_scheme, Platform};
pub use scheme::{ColorScheme, ListenerId, SchemeListener, SchemeManager, SchemeMode};
pub use state::ThemeState;
pub use tokens::{MetricRegistry, TextStyle, TokenStore, TypographyRegistry};
