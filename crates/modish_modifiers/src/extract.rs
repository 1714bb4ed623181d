//! Modifier extraction

use crate::alignment::extract_alignments;
use crate::matchers::{classify, Modifier};
use crate::options::ModifierOptions;
use crate::style::{ExtractedStyle, MarginStyle, PaddingStyle, PositionStyle};
use modish_core::Props;
use modish_theme::ThemeState;
use tracing::trace;

/// Resolve every modifier key in `props` into one style payload.
///
/// Keys are visited in prop order. Keys that match no enabled category, or
/// whose value does not resolve, are dropped; extraction never fails.
pub fn generate_modifiers_style(
    theme: &ThemeState,
    options: &ModifierOptions,
    props: &Props,
) -> ExtractedStyle {
    let mut style = ExtractedStyle::default();

    for (key, value) in props {
        let Some(modifier) = classify(theme, options, key, value) else {
            continue;
        };
        trace!("modifier {} -> {:?}", key, modifier);

        match modifier {
            Modifier::Color(color) => style.color = Some(color),
            Modifier::Typography(fragment) => {
                style
                    .typography
                    .get_or_insert_with(Default::default)
                    .merge(&fragment);
            }
            Modifier::BackgroundColor(color) => {
                if color.is_some() {
                    style.background_color = color;
                }
            }
            Modifier::BorderRadius(radius) => style.border_radius = Some(radius),
            Modifier::Padding { direction, value } => {
                if let Some(value) = value {
                    style
                        .paddings
                        .get_or_insert_with(PaddingStyle::default)
                        .set(direction, value);
                }
            }
            Modifier::Margin { direction, value } => {
                if let Some(value) = value {
                    style
                        .margins
                        .get_or_insert_with(MarginStyle::default)
                        .set(direction, value);
                }
            }
            Modifier::Flex(flex) => style.flex_style = Some(flex),
            Modifier::Position(suffix) => {
                style
                    .position_style
                    .get_or_insert_with(PositionStyle::default)
                    .anchor(suffix);
            }
            Modifier::Gap(gap) => {
                if gap.is_some() {
                    style.gap = gap;
                }
            }
        }
    }

    if options.alignments {
        let alignments = extract_alignments(props);
        if !alignments.is_empty() {
            style.alignments = Some(alignments);
        }
    }

    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FlexStyle;
    use modish_core::props;
    use pretty_assertions::assert_eq;

    #[test]
    fn unrelated_props_produce_nothing() {
        let theme = ThemeState::new();
        let style = generate_modifiers_style(
            &theme,
            &ModifierOptions::all(),
            &props! { "testID" => "x", "onPress" => true, "children" => "hi" },
        );
        assert!(style.is_empty());
    }

    #[test]
    fn later_flex_replaces_earlier() {
        let theme = ThemeState::new();
        let style = generate_modifiers_style(
            &theme,
            &ModifierOptions::default(),
            &props! { "flex" => true, "flexS-0" => true },
        );
        assert_eq!(style.flex_style, Some(FlexStyle::FlexShrink(0.0)));
    }

    #[test]
    fn unresolved_background_keeps_earlier_value() {
        let theme = ThemeState::new();
        let style = generate_modifiers_style(
            &theme,
            &ModifierOptions::default(),
            &props! { "bg-grey10" => true, "bg-nope" => true },
        );
        assert_eq!(style.background_color.unwrap().literal, "#3F4750");
    }

    #[test]
    fn typography_fragments_merge() {
        let theme = ThemeState::new();
        theme.load_typographies([(
            "heavy",
            modish_theme::TextStyle {
                font_weight: Some("900".into()),
                ..Default::default()
            },
        )]);
        let style = generate_modifiers_style(
            &theme,
            &ModifierOptions::text(),
            &props! { "h1" => true, "heavy" => true },
        );
        let typography = style.typography.unwrap();
        assert_eq!(typography.font_size, Some(48.0));
        assert_eq!(typography.font_weight.as_deref(), Some("900"));
    }
}
