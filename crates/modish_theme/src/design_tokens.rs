//! Scheme generation from a single seed color

use crate::error::ThemeError;
use crate::tokens::{DESIGN_TOKENS_DARK, DESIGN_TOKENS_LIGHT};
use indexmap::IndexMap;
use modish_core::Color;

/// Derives a full scheme token set from a primary color
pub trait DesignTokenGenerator: Send + Sync {
    fn generate(&self, primary_color: &str, dark: bool) -> Result<IndexMap<String, String>, ThemeError>;
}

/// Default generator: the built-in design tokens with the primary family
/// re-derived from the seed by shifting its lightness.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrimaryTintGenerator;

/// (token, light-scheme lightness, dark-scheme lightness); `None` keeps the seed
const PRIMARY_FAMILY: &[(&str, Option<f32>, Option<f32>)] = &[
    ("$backgroundPrimaryHeavy", None, Some(0.58)),
    ("$backgroundPrimaryMedium", Some(0.82), Some(0.28)),
    ("$backgroundPrimaryLight", Some(0.97), Some(0.12)),
    ("$textPrimary", None, Some(0.7)),
    ("$iconPrimary", None, Some(0.7)),
    ("$iconPrimaryLight", Some(0.7), Some(0.38)),
    ("$outlinePrimary", None, Some(0.7)),
    ("$outlinePrimaryMedium", Some(0.82), Some(0.28)),
];

impl DesignTokenGenerator for PrimaryTintGenerator {
    fn generate(&self, primary_color: &str, dark: bool) -> Result<IndexMap<String, String>, ThemeError> {
        let seed = Color::parse_hex(primary_color)?;
        let base = if dark {
            DESIGN_TOKENS_DARK
        } else {
            DESIGN_TOKENS_LIGHT
        };

        let mut tokens: IndexMap<String, String> = base
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        for (name, light, dark_lightness) in PRIMARY_FAMILY {
            let lightness = if dark { *dark_lightness } else { *light };
            let value = match lightness {
                Some(l) => seed.with_lightness(l),
                None => seed,
            };
            tokens.insert(name.to_string(), value.to_hex_string());
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_and_dark_share_keys() {
        let light = PrimaryTintGenerator.generate("#3F51B5", false).unwrap();
        let dark = PrimaryTintGenerator.generate("#3F51B5", true).unwrap();
        assert_eq!(
            light.keys().collect::<Vec<_>>(),
            dark.keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn seed_becomes_primary() {
        let light = PrimaryTintGenerator.generate("#3F51B5", false).unwrap();
        assert_eq!(light["$backgroundPrimaryHeavy"], "#3F51B5");
        assert_eq!(light["$textDefault"], "#1B1F22");
        assert_ne!(light["$backgroundPrimaryLight"], "#3F51B5");
    }

    #[test]
    fn invalid_seed_is_rejected() {
        let err = PrimaryTintGenerator.generate("indigo", false).unwrap_err();
        assert!(err.is_invalid_hex());
    }
}
