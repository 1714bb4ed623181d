//! Subcommand implementations; each returns the JSON it prints

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use modish_core::{PropValue, Props};
use modish_modifiers::{generate_modifiers_style, resolve_component_style, ModifierOptions};
use modish_theme::{SchemeMode, ThemeConfig, ThemeState};
use serde_json::{json, Value};
use std::path::Path;

/// Modifier category presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OptionsPreset {
    /// Everything except gap
    Default,
    View,
    Text,
    All,
}

impl From<OptionsPreset> for ModifierOptions {
    fn from(preset: OptionsPreset) -> Self {
        match preset {
            OptionsPreset::Default => ModifierOptions::default(),
            OptionsPreset::View => ModifierOptions::view(),
            OptionsPreset::Text => ModifierOptions::text(),
            OptionsPreset::All => ModifierOptions::all(),
        }
    }
}

pub struct ResolveArgs {
    pub component: Option<String>,
    pub options: OptionsPreset,
    pub props: Vec<String>,
}

/// Build the theme from an optional config and scheme override
pub fn load_theme(config: Option<&Path>, scheme: Option<&str>) -> Result<ThemeState> {
    let theme = match config {
        Some(path) => {
            let config = ThemeConfig::load_from_path(path)
                .with_context(|| format!("Failed to load theme config from {}", path.display()))?;
            ThemeState::from_config(&config)
                .with_context(|| format!("Failed to apply theme config from {}", path.display()))?
        }
        None => ThemeState::detect(),
    };

    if let Some(scheme) = scheme {
        let mode: SchemeMode = scheme.parse()?;
        theme.set_scheme(mode);
    }

    Ok(theme)
}

/// `key` is a flag, `key=value` carries a literal value
pub fn parse_props(raw: &[String]) -> Props {
    raw.iter()
        .map(|arg| match arg.split_once('=') {
            Some((key, value)) => (key.to_string(), PropValue::parse_literal(value)),
            None => (arg.clone(), PropValue::Bool(true)),
        })
        .collect()
}

pub fn resolve(theme: &ThemeState, args: &ResolveArgs) -> Result<Value> {
    let props = parse_props(&args.props);
    let options = ModifierOptions::from(args.options);
    tracing::debug!("Resolving {} props with {:?}", props.len(), args.options);

    let style = match &args.component {
        Some(component) => {
            resolve_component_style(theme, component, &props, &theme.context(), &options)
        }
        None => generate_modifiers_style(theme, &options, &props),
    };

    serde_json::to_value(style).context("Failed to serialize style")
}

pub fn rgba(theme: &ThemeState, args: &[String]) -> Result<Value> {
    let values: Vec<PropValue> = args.iter().map(|arg| PropValue::parse_literal(arg)).collect();
    match theme.colors().resolve_alpha(&values)? {
        Some(color) => Ok(Value::String(color)),
        None => bail!("Expected `HEX OPACITY` or `R G B OPACITY`, got {:?}", args),
    }
}

pub fn tokens(theme: &ThemeState) -> Value {
    let colors: serde_json::Map<String, Value> = theme
        .colors()
        .snapshot()
        .into_iter()
        .map(|(name, value)| (name, Value::String(value)))
        .collect();

    let typography: serde_json::Map<String, Value> = theme
        .typography()
        .names()
        .into_iter()
        .filter_map(|name| {
            let style = theme.typography().get(&name)?;
            Some((name, serde_json::to_value(style).ok()?))
        })
        .collect();

    let metrics = |entries: Vec<(String, f32)>| -> serde_json::Map<String, Value> {
        entries
            .into_iter()
            .map(|(name, value)| (name, json!(value)))
            .collect()
    };

    json!({
        "scheme": theme.scheme(),
        "colors": colors,
        "typography": typography,
        "spacings": metrics(theme.spacings().entries()),
        "borderRadii": metrics(theme.border_radii().entries()),
    })
}
