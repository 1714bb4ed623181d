//! Extracted style fragments
//!
//! Field names serialize in camelCase so the payload can be handed to a
//! style consumer as-is.

use modish_theme::{ColorValue, TextStyle};
use serde::Serialize;

/// Declares a spacing fragment with one optional field per edge variant
macro_rules! edge_style {
    ($(#[$meta:meta])* $name:ident {
        $($field:ident => $suffix:literal),+ $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<f32>,
            )+
        }

        impl $name {
            /// Set the field selected by a direction suffix (`""`, `"L"`, `"T"`, ...)
            pub fn set(&mut self, suffix: &str, value: f32) -> bool {
                match suffix {
                    $($suffix => self.$field = Some(value),)+
                    _ => return false,
                }
                true
            }

            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())+
            }
        }
    };
}

edge_style!(
    /// `padding*` fields
    PaddingStyle {
        padding => "",
        padding_left => "L",
        padding_top => "T",
        padding_right => "R",
        padding_bottom => "B",
        padding_horizontal => "H",
        padding_vertical => "V",
    }
);

edge_style!(
    /// `margin*` fields
    MarginStyle {
        margin => "",
        margin_left => "L",
        margin_top => "T",
        margin_right => "R",
        margin_bottom => "B",
        margin_horizontal => "H",
        margin_vertical => "V",
    }
);

/// Flex fragment; a single field is ever set
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FlexStyle {
    Flex(f32),
    FlexGrow(f32),
    FlexShrink(f32),
}

impl FlexStyle {
    pub(crate) fn from_suffix(suffix: Option<&str>, value: f32) -> Option<Self> {
        match suffix {
            None => Some(FlexStyle::Flex(value)),
            Some("G") => Some(FlexStyle::FlexGrow(value)),
            Some("S") => Some(FlexStyle::FlexShrink(value)),
            Some(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Absolute,
}

/// Absolute positioning with the anchored edges
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PositionStyle {
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
}

impl PositionStyle {
    /// Anchor the edges named by an `abs` suffix; `None` and `F` fill
    pub(crate) fn anchor(&mut self, suffix: Option<&str>) {
        let (top, bottom, left, right) = match suffix {
            None | Some("F") => (true, true, true, true),
            Some("T") => (true, false, false, false),
            Some("B") => (false, true, false, false),
            Some("L") => (false, false, true, false),
            Some("R") => (false, false, false, true),
            Some("V") => (true, true, false, false),
            Some("H") => (false, false, true, true),
            Some(_) => (false, false, false, false),
        };
        for (anchored, edge) in [
            (top, &mut self.top),
            (bottom, &mut self.bottom),
            (left, &mut self.left),
            (right, &mut self.right),
        ] {
            if anchored {
                *edge = Some(0.0);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
}

/// Flexbox alignment derived from the `row`/`center`/directional flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alignments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Alignment>,
}

impl Alignments {
    pub fn is_empty(&self) -> bool {
        self.flex_direction.is_none() && self.justify_content.is_none() && self.align_items.is_none()
    }
}

/// Result of a modifier extraction; at most one entry per category
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paddings: Option<PaddingStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margins: Option<MarginStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignments: Option<Alignments>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_style: Option<FlexStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_style: Option<PositionStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
}

impl ExtractedStyle {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn edge_suffixes_select_fields() {
        let mut paddings = PaddingStyle::default();
        assert!(paddings.is_empty());
        assert!(paddings.set("L", 10.0));
        assert!(paddings.set("V", 4.0));
        assert!(!paddings.set("X", 1.0));
        assert_eq!(
            serde_json::to_value(paddings).unwrap(),
            json!({"paddingLeft": 10.0, "paddingVertical": 4.0})
        );
    }

    #[test]
    fn anchors_accumulate() {
        let mut position = PositionStyle::default();
        position.anchor(Some("R"));
        position.anchor(Some("B"));
        assert_eq!(
            serde_json::to_value(position).unwrap(),
            json!({"position": "absolute", "bottom": 0.0, "right": 0.0})
        );
    }

    #[test]
    fn flex_serializes_as_single_field() {
        assert_eq!(
            serde_json::to_value(FlexStyle::FlexGrow(2.0)).unwrap(),
            json!({"flexGrow": 2.0})
        );
    }

    #[test]
    fn alignment_values_use_css_names() {
        let alignments = Alignments {
            flex_direction: Some(FlexDirection::Row),
            justify_content: Some(Alignment::SpaceBetween),
            align_items: Some(Alignment::FlexStart),
        };
        assert_eq!(
            serde_json::to_value(alignments).unwrap(),
            json!({"flexDirection": "row", "justifyContent": "space-between", "alignItems": "flex-start"})
        );
    }
}
