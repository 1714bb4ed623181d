//! Modifier key classification
//!
//! Every prop key is tested against the enabled categories in
//! [`CATEGORY_ORDER`]; the first category whose shape matches claims the
//! key, even when its value then fails to resolve.

use crate::options::ModifierOptions;
use crate::style::FlexStyle;
use modish_core::PropValue;
use modish_theme::{ColorValue, TextStyle, ThemeState};
use regex::Regex;
use std::sync::OnceLock;

/// Modifier families a key can belong to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Color,
    Typography,
    BackgroundColor,
    BorderRadius,
    Padding,
    Margin,
    Flex,
    Position,
    Gap,
}

/// Classification precedence
pub const CATEGORY_ORDER: [Category; 9] = [
    Category::Color,
    Category::Typography,
    Category::BackgroundColor,
    Category::BorderRadius,
    Category::Padding,
    Category::Margin,
    Category::Flex,
    Category::Position,
    Category::Gap,
];

/// A classified key with its resolved value
#[derive(Clone, Debug, PartialEq)]
pub enum Modifier<'a> {
    Color(ColorValue),
    Typography(TextStyle),
    /// `None` when the color name did not resolve
    BackgroundColor(Option<ColorValue>),
    BorderRadius(f32),
    Padding { direction: &'a str, value: Option<f32> },
    Margin { direction: &'a str, value: Option<f32> },
    Flex(FlexStyle),
    Position(Option<&'a str>),
    Gap(Option<f32>),
}

fn edge_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(padding|margin)([LTRBHV])?(?:-(.*))?$").expect("static pattern is valid")
    })
}

fn flex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^flex([GS])?(?:-([0-9.]*))?$").expect("static pattern is valid"))
}

fn position_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^abs([FLRTBVH])?$").expect("static pattern is valid"))
}

fn gap_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^gap(?:-(.*))?$").expect("static pattern is valid"))
}

/// Parse a plain decimal literal (`10`, `2.5`, `.5`); signs and exponents are not accepted
pub fn parse_decimal(raw: &str) -> Option<f32> {
    let digits = raw.chars().filter(char::is_ascii_digit).count();
    let dots = raw.chars().filter(|c| *c == '.').count();
    if digits == 0 || dots > 1 || digits + dots != raw.len() {
        return None;
    }
    raw.parse().ok()
}

/// Numeric key suffix; an empty suffix (`flexS-`) counts as zero
fn parse_suffix(raw: &str) -> Option<f32> {
    if raw.is_empty() {
        return Some(0.0);
    }
    parse_decimal(raw)
}

/// Metric value from a key suffix: decimal literal first, then spacing token
fn resolve_metric(theme: &ThemeState, raw: &str) -> Option<f32> {
    parse_suffix(raw).or_else(|| theme.spacings().get(raw))
}

/// Metric value carried by the prop value of a bare key (`paddingL = 10`)
fn resolve_metric_value(theme: &ThemeState, value: &PropValue) -> Option<Option<f32>> {
    match value {
        PropValue::Number(n) => Some(Some(*n as f32)),
        PropValue::Text(raw) => Some(resolve_metric(theme, raw)),
        _ => None,
    }
}

impl Category {
    pub fn enabled(self, options: &ModifierOptions) -> bool {
        match self {
            Category::Color => options.color,
            Category::Typography => options.typography,
            Category::BackgroundColor => options.background_color,
            Category::BorderRadius => options.border_radius,
            Category::Padding => options.paddings,
            Category::Margin => options.margins,
            Category::Flex => options.flex,
            Category::Position => options.position,
            Category::Gap => options.gap,
        }
    }

    /// Claim `key` for this category, or `None` if its shape does not match
    pub fn match_key<'a>(
        self,
        theme: &ThemeState,
        key: &'a str,
        value: &PropValue,
    ) -> Option<Modifier<'a>> {
        match self {
            Category::Color => theme.colors().get(key).map(Modifier::Color),
            Category::Typography => theme.typography().get(key).map(Modifier::Typography),
            Category::BackgroundColor => {
                let pattern = theme.colors().background_key_pattern();
                let prefix = pattern.find(key)?;
                let name = &key[prefix.end()..];
                Some(Modifier::BackgroundColor(theme.colors().get(name)))
            }
            Category::BorderRadius => {
                if !theme.border_radii().matches(key) {
                    return None;
                }
                theme.border_radii().get(key).map(Modifier::BorderRadius)
            }
            Category::Padding | Category::Margin => {
                let caps = edge_pattern().captures(key)?;
                let family = caps.get(1)?.as_str();
                let wanted = if self == Category::Padding { "padding" } else { "margin" };
                if family != wanted {
                    return None;
                }
                let direction = caps.get(2).map_or("", |m| m.as_str());
                let value = match caps.get(3) {
                    Some(raw) => resolve_metric(theme, raw.as_str()),
                    None => resolve_metric_value(theme, value)?,
                };
                Some(if self == Category::Padding {
                    Modifier::Padding { direction, value }
                } else {
                    Modifier::Margin { direction, value }
                })
            }
            Category::Flex => {
                let caps = flex_pattern().captures(key)?;
                let amount = caps
                    .get(2)
                    .and_then(|raw| parse_suffix(raw.as_str()))
                    .unwrap_or(1.0);
                FlexStyle::from_suffix(caps.get(1).map(|m| m.as_str()), amount).map(Modifier::Flex)
            }
            Category::Position => {
                let caps = position_pattern().captures(key)?;
                Some(Modifier::Position(caps.get(1).map(|m| m.as_str())))
            }
            Category::Gap => {
                let caps = gap_pattern().captures(key)?;
                let value = match caps.get(1) {
                    Some(raw) => resolve_metric(theme, raw.as_str()),
                    None => resolve_metric_value(theme, value)?,
                };
                Some(Modifier::Gap(value))
            }
        }
    }
}

/// First enabled category claiming `key`
pub fn classify<'a>(
    theme: &ThemeState,
    options: &ModifierOptions,
    key: &'a str,
    value: &PropValue,
) -> Option<Modifier<'a>> {
    CATEGORY_ORDER
        .iter()
        .filter(|category| category.enabled(options))
        .find_map(|category| category.match_key(theme, key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn flag() -> PropValue {
        PropValue::Bool(true)
    }

    #[test]
    fn decimal_literals() {
        assert_eq!(parse_decimal("10"), Some(10.0));
        assert_eq!(parse_decimal("2.5"), Some(2.5));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("1.2.3"), None);
        assert_eq!(parse_decimal("-4"), None);
        assert_eq!(parse_decimal("1e3"), None);
        assert_eq!(parse_decimal("s4"), None);
    }

    #[test]
    fn padding_suffixes() {
        let theme = ThemeState::new();
        assert_eq!(
            classify(&theme, &ModifierOptions::all(), "paddingL-10", &flag()),
            Some(Modifier::Padding { direction: "L", value: Some(10.0) })
        );
        assert_eq!(
            classify(&theme, &ModifierOptions::all(), "margin-s4", &flag()),
            Some(Modifier::Margin { direction: "", value: Some(16.0) })
        );
        // claimed but unresolvable
        assert_eq!(
            classify(&theme, &ModifierOptions::all(), "paddingT-huge", &flag()),
            Some(Modifier::Padding { direction: "T", value: None })
        );
    }

    #[test]
    fn bare_edge_keys_take_their_value() {
        let theme = ThemeState::new();
        let options = ModifierOptions::all();
        assert_eq!(
            classify(&theme, &options, "paddingL", &PropValue::from("10")),
            Some(Modifier::Padding { direction: "L", value: Some(10.0) })
        );
        assert_eq!(
            classify(&theme, &options, "marginV", &PropValue::Number(3.0)),
            Some(Modifier::Margin { direction: "V", value: Some(3.0) })
        );
        assert_eq!(classify(&theme, &options, "padding", &flag()), None);
    }

    #[test]
    fn empty_suffix_is_zero() {
        let theme = ThemeState::new();
        let options = ModifierOptions::all();
        assert_eq!(
            classify(&theme, &options, "paddingL-", &flag()),
            Some(Modifier::Padding { direction: "L", value: Some(0.0) })
        );
        assert_eq!(
            classify(&theme, &options, "margin-", &flag()),
            Some(Modifier::Margin { direction: "", value: Some(0.0) })
        );
        assert_eq!(
            classify(&theme, &options, "gap-", &flag()),
            Some(Modifier::Gap(Some(0.0)))
        );
    }

    #[test]
    fn bare_flex_is_one_and_empty_suffix_is_zero() {
        let theme = ThemeState::new();
        let options = ModifierOptions::all();
        assert_eq!(
            classify(&theme, &options, "flex", &flag()),
            Some(Modifier::Flex(FlexStyle::Flex(1.0)))
        );
        assert_eq!(
            classify(&theme, &options, "flexG-2", &flag()),
            Some(Modifier::Flex(FlexStyle::FlexGrow(2.0)))
        );
        assert_eq!(
            classify(&theme, &options, "flexS-", &flag()),
            Some(Modifier::Flex(FlexStyle::FlexShrink(0.0)))
        );
        assert_eq!(classify(&theme, &options, "flexX", &flag()), None);
        assert_eq!(classify(&theme, &options, "flex-abc", &flag()), None);
    }

    #[test]
    fn category_order_breaks_ties() {
        let theme = ThemeState::new();
        theme.colors().load_colors([("abs", "#123456")]);

        let options = ModifierOptions::all();
        assert!(matches!(
            classify(&theme, &options, "abs", &flag()),
            Some(Modifier::Color(_))
        ));

        let options = ModifierOptions {
            color: false,
            ..ModifierOptions::all()
        };
        assert_eq!(
            classify(&theme, &options, "abs", &flag()),
            Some(Modifier::Position(None))
        );
    }

    #[test]
    fn disabled_categories_are_skipped() {
        let theme = ThemeState::new();
        assert_eq!(
            classify(&theme, &ModifierOptions::default(), "gap-4", &flag()),
            None
        );
        assert_eq!(
            classify(&theme, &ModifierOptions::all(), "gap-4", &flag()),
            Some(Modifier::Gap(Some(4.0)))
        );
    }

    #[test]
    fn background_prefix_is_stripped() {
        let theme = ThemeState::new();
        let options = ModifierOptions::all();
        match classify(&theme, &options, "bg-grey10", &flag()) {
            Some(Modifier::BackgroundColor(Some(color))) => assert_eq!(color.literal, "#3F4750"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            classify(&theme, &options, "background-nope", &flag()),
            Some(Modifier::BackgroundColor(None))
        );
    }

    #[test]
    fn radius_needs_whole_key() {
        let theme = ThemeState::new();
        let options = ModifierOptions::all();
        assert_eq!(
            classify(&theme, &options, "br20", &flag()),
            None
        );
        assert_eq!(
            classify(&theme, &options, "br2", &flag()),
            Some(Modifier::BorderRadius(8.0))
        );
    }
}
