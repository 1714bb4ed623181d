//! Color tokens for theming
//!
//! Two built-in sets:
//! - the static palette (`grey10`, `blue30`, ...), identical in both schemes
//! - the semantic design tokens (`$textDefault`, `$backgroundElevated`, ...),
//!   one set per scheme with identical key sets

/// Built-in palette, available under both schemes
pub const PALETTE: &[(&str, &str)] = &[
    ("white", "#FFFFFF"),
    ("black", "#000000"),
    ("transparent", "transparent"),
    // Grey
    ("grey1", "#1B1F22"),
    ("grey5", "#2D3339"),
    ("grey10", "#3F4750"),
    ("grey20", "#55616D"),
    ("grey30", "#6C7A89"),
    ("grey40", "#8794A1"),
    ("grey50", "#A9B2BC"),
    ("grey60", "#CCD1D7"),
    ("grey70", "#E8EBED"),
    ("grey80", "#F6F7F8"),
    // Blue
    ("blue1", "#051B39"),
    ("blue5", "#082D5E"),
    ("blue10", "#0B3F84"),
    ("blue20", "#0F56B3"),
    ("blue30", "#126DE2"),
    ("blue40", "#3988EF"),
    ("blue50", "#71AAF4"),
    ("blue60", "#AACCF8"),
    ("blue70", "#D9E8FC"),
    ("blue80", "#F1F6FE"),
    // Cyan
    ("cyan1", "#062F37"),
    ("cyan5", "#0A4E5C"),
    ("cyan10", "#0E6D81"),
    ("cyan20", "#1395AE"),
    ("cyan30", "#18BCDC"),
    ("cyan40", "#3ECDEA"),
    ("cyan50", "#75DBF0"),
    ("cyan60", "#ACEAF6"),
    ("cyan70", "#DAF5FB"),
    ("cyan80", "#F1FBFD"),
    // Green
    ("green1", "#0C3118"),
    ("green5", "#145229"),
    ("green10", "#1D7239"),
    ("green20", "#279B4E"),
    ("green30", "#31C462"),
    ("green40", "#54D47E"),
    ("green50", "#85E0A3"),
    ("green60", "#B6EDC8"),
    ("green70", "#DEF7E7"),
    ("green80", "#F3FCF6"),
    // Yellow
    ("yellow1", "#3C2D02"),
    ("yellow5", "#634B03"),
    ("yellow10", "#8B6904"),
    ("yellow20", "#BD8F05"),
    ("yellow30", "#EFB506"),
    ("yellow40", "#FAC72E"),
    ("yellow50", "#FBD76A"),
    ("yellow60", "#FDE7A5"),
    ("yellow70", "#FEF4D7"),
    ("yellow80", "#FFFBF0"),
    // Orange
    ("orange1", "#3A1A03"),
    ("orange5", "#612B05"),
    ("orange10", "#883D07"),
    ("orange20", "#B8520A"),
    ("orange30", "#E9680C"),
    ("orange40", "#F48434"),
    ("orange50", "#F7A76E"),
    ("orange60", "#FACAA8"),
    ("orange70", "#FDE8D8"),
    ("orange80", "#FEF6F0"),
    // Red
    ("red1", "#37060A"),
    ("red5", "#5C0A11"),
    ("red10", "#810E18"),
    ("red20", "#AE1320"),
    ("red30", "#DC1829"),
    ("red40", "#EA3E4C"),
    ("red50", "#F0757F"),
    ("red60", "#F6ACB2"),
    ("red70", "#FBDADD"),
    ("red80", "#FDF1F2"),
    // Purple
    ("purple1", "#1F0C31"),
    ("purple5", "#331452"),
    ("purple10", "#471D72"),
    ("purple20", "#61279B"),
    ("purple30", "#7A31C4"),
    ("purple40", "#9454D4"),
    ("purple50", "#B285E0"),
    ("purple60", "#D1B6ED"),
    ("purple70", "#EBDEF7"),
    ("purple80", "#F7F3FC"),
    // Violet
    ("violet1", "#100934"),
    ("violet5", "#1B0F57"),
    ("violet10", "#261579"),
    ("violet20", "#341DA5"),
    ("violet30", "#4125D0"),
    ("violet40", "#6249DF"),
    ("violet50", "#8F7DE8"),
    ("violet60", "#BCB1F1"),
    ("violet70", "#E1DCF9"),
    ("violet80", "#F4F2FD"),
];

/// Semantic tokens for the light scheme
pub const DESIGN_TOKENS_LIGHT: &[(&str, &str)] = &[
    // Backgrounds
    ("$backgroundDefault", "#FFFFFF"),
    ("$backgroundElevated", "#FFFFFF"),
    ("$backgroundNeutral", "#F6F7F8"),
    ("$backgroundNeutralMedium", "#E8EBED"),
    ("$backgroundPrimaryHeavy", "#126DE2"),
    ("$backgroundPrimaryMedium", "#AACCF8"),
    ("$backgroundPrimaryLight", "#F1F6FE"),
    ("$backgroundDangerHeavy", "#DC1829"),
    ("$backgroundSuccessHeavy", "#279B4E"),
    ("$backgroundWarningHeavy", "#EFB506"),
    ("$backgroundDisabled", "#E8EBED"),
    // Text
    ("$textDefault", "#1B1F22"),
    ("$textNeutral", "#55616D"),
    ("$textNeutralLight", "#8794A1"),
    ("$textDefaultLight", "#FFFFFF"),
    ("$textPrimary", "#126DE2"),
    ("$textDanger", "#DC1829"),
    ("$textSuccess", "#279B4E"),
    ("$textDisabled", "#A9B2BC"),
    // Icons
    ("$iconDefault", "#1B1F22"),
    ("$iconNeutral", "#55616D"),
    ("$iconPrimary", "#126DE2"),
    ("$iconPrimaryLight", "#71AAF4"),
    ("$iconDisabled", "#A9B2BC"),
    // Outlines
    ("$outlineDefault", "#CCD1D7"),
    ("$outlineNeutral", "#A9B2BC"),
    ("$outlinePrimary", "#126DE2"),
    ("$outlinePrimaryMedium", "#AACCF8"),
    ("$outlineDanger", "#DC1829"),
    ("$outlineDisabled", "#E8EBED"),
];

/// Semantic tokens for the dark scheme
pub const DESIGN_TOKENS_DARK: &[(&str, &str)] = &[
    // Backgrounds
    ("$backgroundDefault", "#1B1F22"),
    ("$backgroundElevated", "#2D3339"),
    ("$backgroundNeutral", "#2D3339"),
    ("$backgroundNeutralMedium", "#3F4750"),
    ("$backgroundPrimaryHeavy", "#3988EF"),
    ("$backgroundPrimaryMedium", "#0B3F84"),
    ("$backgroundPrimaryLight", "#051B39"),
    ("$backgroundDangerHeavy", "#EA3E4C"),
    ("$backgroundSuccessHeavy", "#54D47E"),
    ("$backgroundWarningHeavy", "#FAC72E"),
    ("$backgroundDisabled", "#3F4750"),
    // Text
    ("$textDefault", "#F6F7F8"),
    ("$textNeutral", "#A9B2BC"),
    ("$textNeutralLight", "#6C7A89"),
    ("$textDefaultLight", "#1B1F22"),
    ("$textPrimary", "#71AAF4"),
    ("$textDanger", "#F0757F"),
    ("$textSuccess", "#85E0A3"),
    ("$textDisabled", "#55616D"),
    // Icons
    ("$iconDefault", "#F6F7F8"),
    ("$iconNeutral", "#A9B2BC"),
    ("$iconPrimary", "#71AAF4"),
    ("$iconPrimaryLight", "#0F56B3"),
    ("$iconDisabled", "#55616D"),
    // Outlines
    ("$outlineDefault", "#3F4750"),
    ("$outlineNeutral", "#55616D"),
    ("$outlinePrimary", "#71AAF4"),
    ("$outlinePrimaryMedium", "#0B3F84"),
    ("$outlineDanger", "#F0757F"),
    ("$outlineDisabled", "#3F4750"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn design_token_sets_share_keys() {
        let light: FxHashSet<_> = DESIGN_TOKENS_LIGHT.iter().map(|(k, _)| *k).collect();
        let dark: FxHashSet<_> = DESIGN_TOKENS_DARK.iter().map(|(k, _)| *k).collect();
        assert_eq!(light, dark);
        assert_eq!(light.len(), DESIGN_TOKENS_LIGHT.len());
    }

    #[test]
    fn palette_names_are_unique() {
        let names: FxHashSet<_> = PALETTE.iter().map(|(k, _)| *k).collect();
        assert_eq!(names.len(), PALETTE.len());
    }
}
