//! Host platform and system appearance detection

use crate::scheme::ColorScheme;
use serde::{Deserialize, Serialize};

/// Environment variable that pins the reported host appearance (`light`/`dark`)
pub const APPEARANCE_ENV: &str = "MODISH_APPEARANCE";

/// Target platform, used to name platform color handles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Desktop,
}

impl Platform {
    /// Platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Desktop
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// Appearance reported by the host, if it reports one.
///
/// Checks [`APPEARANCE_ENV`] first, then the GTK theme name on Linux.
pub fn detect_system_color_scheme() -> Option<ColorScheme> {
    if let Ok(value) = std::env::var(APPEARANCE_ENV) {
        return parse_appearance(&value);
    }

    gtk_appearance()
}

#[cfg(target_os = "linux")]
fn gtk_appearance() -> Option<ColorScheme> {
    let theme = std::env::var("GTK_THEME").ok()?.to_ascii_lowercase();
    Some(if theme.contains("dark") {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    })
}

#[cfg(not(target_os = "linux"))]
fn gtk_appearance() -> Option<ColorScheme> {
    None
}

fn parse_appearance(value: &str) -> Option<ColorScheme> {
    match value.trim().to_ascii_lowercase().as_str() {
        "light" => Some(ColorScheme::Light),
        "dark" => Some(ColorScheme::Dark),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appearance_values() {
        assert_eq!(parse_appearance("Dark"), Some(ColorScheme::Dark));
        assert_eq!(parse_appearance(" light "), Some(ColorScheme::Light));
        assert_eq!(parse_appearance("no-preference"), None);
    }
}
