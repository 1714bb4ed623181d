//! Prop merging and whole-component style resolution

use crate::extract::generate_modifiers_style;
use crate::matchers::classify;
use crate::options::ModifierOptions;
use crate::style::ExtractedStyle;
use modish_core::{PropValue, Props};
use modish_theme::{ThemeContext, ThemeManager, ThemeState};

/// Alignment flag names; they carry meaning only together
const ALIGNMENT_FLAGS: &[&str] = &[
    "row", "center", "left", "top", "right", "bottom", "centerH", "centerV", "spread",
];

/// `{...defaults, ...props, ...forced}` for `component`
pub fn theme_props(
    manager: &ThemeManager,
    component: &str,
    props: &Props,
    context: &ThemeContext,
) -> Props {
    manager.resolve(component, props, context)
}

/// Merge theme overrides into `props`, then extract modifiers from the result.
///
/// Alignment flags are read from the merged props, so theme layers can set
/// them like any other modifier.
pub fn resolve_component_style(
    theme: &ThemeState,
    component: &str,
    props: &Props,
    context: &ThemeContext,
    options: &ModifierOptions,
) -> ExtractedStyle {
    let merged = theme.theme_props(component, props, context);
    generate_modifiers_style(theme, options, &merged)
}

/// The subset of `props` that extraction would act on under `options`
pub fn extract_modifier_props(theme: &ThemeState, options: &ModifierOptions, props: &Props) -> Props {
    props
        .iter()
        .filter(|(key, value)| {
            (options.alignments && ALIGNMENT_FLAGS.contains(&key.as_str()))
                || classify(theme, options, key, value).is_some()
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Accessibility props (`accessible`, `accessibilityLabel`, ...) to forward untouched.
///
/// Keys set to `Null` are left out.
pub fn extract_accessibility_props(props: &Props) -> Props {
    props
        .iter()
        .filter(|(key, value)| key.contains("ccessib") && !matches!(value, PropValue::Null))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
