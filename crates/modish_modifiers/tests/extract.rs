use modish_core::{props, Props};
use modish_modifiers::{
    generate_modifiers_style, resolve_component_style, Alignment, FlexStyle, ModifierOptions,
};
use modish_theme::{
    ColorScheme, Platform, PlatformColors, SchemeMode, ThemeContext, ThemeState,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn theme() -> ThemeState {
    let theme = ThemeState::new();
    theme.set_scheme(SchemeMode::Light);
    theme
}

fn extract(theme: &ThemeState, props: &Props) -> serde_json::Value {
    serde_json::to_value(generate_modifiers_style(theme, &ModifierOptions::all(), props)).unwrap()
}

#[test]
fn numeric_and_token_paddings_combine() {
    let theme = theme();
    theme.load_spacings([("gapS1", 6.0)]);

    assert_eq!(
        extract(&theme, &props! { "paddingL-10" => true, "paddingT-gapS1" => true }),
        json!({"paddings": {"paddingLeft": 10.0, "paddingTop": 6.0}})
    );
    assert_eq!(
        extract(&theme, &props! { "paddingL" => "10", "paddingT" => "gapS1" }),
        json!({"paddings": {"paddingLeft": 10.0, "paddingTop": 6.0}})
    );
}

#[test]
fn unknown_spacing_token_is_dropped() {
    let theme = theme();
    assert_eq!(
        extract(&theme, &props! { "marginB-s4" => true, "marginT-nope" => true }),
        json!({"margins": {"marginBottom": 16.0}})
    );
}

#[test]
fn row_alignment() {
    let theme = theme();
    assert_eq!(
        extract(&theme, &props! { "row" => true, "right" => true, "centerV" => true }),
        json!({"alignments": {"flexDirection": "row", "justifyContent": "flex-end", "alignItems": "center"}})
    );
}

#[test]
fn center_beats_directional_flags() {
    let theme = theme();
    let style = generate_modifiers_style(
        &theme,
        &ModifierOptions::default(),
        &props! { "center" => true, "left" => true },
    );
    let alignments = style.alignments.unwrap();
    assert_eq!(alignments.justify_content, Some(Alignment::Center));
    assert_eq!(alignments.align_items, Some(Alignment::Center));
}

#[test]
fn position_anchors_merge() {
    let theme = theme();
    assert_eq!(
        extract(&theme, &props! { "absR" => true, "absB" => true }),
        json!({"positionStyle": {"position": "absolute", "right": 0.0, "bottom": 0.0}})
    );
    assert_eq!(
        extract(&theme, &props! { "abs" => true }),
        json!({"positionStyle": {"position": "absolute", "top": 0.0, "bottom": 0.0, "left": 0.0, "right": 0.0}})
    );
    assert_eq!(
        extract(&theme, &props! { "absH" => true }),
        json!({"positionStyle": {"position": "absolute", "left": 0.0, "right": 0.0}})
    );
}

#[test]
fn flex_variants() {
    let theme = theme();
    let options = ModifierOptions::default();
    let flex = |props: Props| generate_modifiers_style(&theme, &options, &props).flex_style;
    assert_eq!(flex(props! { "flex" => true }), Some(FlexStyle::Flex(1.0)));
    assert_eq!(flex(props! { "flexG" => true }), Some(FlexStyle::FlexGrow(1.0)));
    assert_eq!(flex(props! { "flexS-2" => true }), Some(FlexStyle::FlexShrink(2.0)));
    assert_eq!(flex(props! { "flexS-" => true }), Some(FlexStyle::FlexShrink(0.0)));
}

#[test]
fn gap_is_opt_in() {
    let theme = theme();
    let props = props! { "gap-s2" => true };
    assert_eq!(
        generate_modifiers_style(&theme, &ModifierOptions::default(), &props).gap,
        None
    );
    assert_eq!(
        generate_modifiers_style(&theme, &ModifierOptions::view(), &props).gap,
        Some(8.0)
    );
}

#[test]
fn colors_follow_the_scheme() {
    let theme = theme();
    let props = props! { "$textDefault" => true, "bg-grey10" => true, "br2" => true };

    assert_eq!(
        extract(&theme, &props),
        json!({"color": "#1B1F22", "backgroundColor": "#3F4750", "borderRadius": 8.0})
    );
    theme.set_scheme(SchemeMode::Dark);
    assert_eq!(extract(&theme, &props)["color"], json!("#F6F7F8"));
}

#[test]
fn text_preset_ignores_layout_keys() {
    let theme = theme();
    let style = generate_modifiers_style(
        &theme,
        &ModifierOptions::text(),
        &props! { "h1" => true, "paddingL-10" => true, "row" => true, "marginT-4" => true },
    );
    assert_eq!(style.typography.unwrap().font_size, Some(48.0));
    assert_eq!(style.paddings, None);
    assert_eq!(style.alignments, None);
    assert_eq!(style.margins.unwrap().margin_top, Some(4.0));
}

#[test]
fn platform_colors_keep_scheme_literal() {
    let theme = ThemeState::with_options(
        SchemeMode::Dark,
        None,
        PlatformColors {
            enabled: true,
            platform: Platform::Android,
        },
    );
    let style = generate_modifiers_style(
        &theme,
        &ModifierOptions::default(),
        &props! { "bg-$backgroundElevated" => true },
    );
    let background = style.background_color.unwrap();
    assert_eq!(
        Some(background.literal.clone()),
        theme.schemes().get_in(ColorScheme::Dark, "$backgroundElevated")
    );
    assert_eq!(background.platform.unwrap().name, "@color/backgroundElevated");
}

#[test]
fn forced_overrides_win_in_full_resolution() {
    let theme = theme();
    theme
        .components()
        .set_component_theme("Text", props! { "grey30" => true })
        .unwrap();
    theme
        .components()
        .set_component_forced_theme("Text", props! { "margin-0" => true })
        .unwrap();

    let style = resolve_component_style(
        &theme,
        "Text",
        &props! { "margin-8" => true, "red30" => true },
        &ThemeContext::default(),
        &ModifierOptions::text(),
    );
    assert_eq!(style.margins.unwrap().margin, Some(0.0));
    // both color keys survive the merge; the later one wins
    assert_eq!(style.color.unwrap().literal, theme.colors().get("red30").unwrap().literal);
}
