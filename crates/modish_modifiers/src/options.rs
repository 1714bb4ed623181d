//! Which modifier categories an extraction looks at

use serde::{Deserialize, Serialize};

/// Enabled extraction categories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModifierOptions {
    pub color: bool,
    pub typography: bool,
    pub background_color: bool,
    pub border_radius: bool,
    pub paddings: bool,
    pub margins: bool,
    pub alignments: bool,
    pub flex: bool,
    pub position: bool,
    pub gap: bool,
}

/// Everything except `gap`
impl Default for ModifierOptions {
    fn default() -> Self {
        Self {
            gap: false,
            ..Self::all()
        }
    }
}

impl ModifierOptions {
    pub const fn all() -> Self {
        Self {
            color: true,
            typography: true,
            background_color: true,
            border_radius: true,
            paddings: true,
            margins: true,
            alignments: true,
            flex: true,
            position: true,
            gap: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            color: false,
            typography: false,
            background_color: false,
            border_radius: false,
            paddings: false,
            margins: false,
            alignments: false,
            flex: false,
            position: false,
            gap: false,
        }
    }

    /// Container preset: layout and background modifiers, no text styling
    pub const fn view() -> Self {
        Self {
            color: false,
            typography: false,
            ..Self::all()
        }
    }

    /// Text preset
    pub const fn text() -> Self {
        Self {
            color: true,
            typography: true,
            background_color: true,
            margins: true,
            flex: true,
            ..Self::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let default = ModifierOptions::default();
        assert!(default.color && default.position && !default.gap);

        let view = ModifierOptions::view();
        assert!(view.gap && view.paddings && !view.color && !view.typography);

        let text = ModifierOptions::text();
        assert!(text.typography && text.margins && !text.paddings && !text.alignments);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let options: ModifierOptions = serde_json::from_str(r#"{"gap": true, "color": false}"#).unwrap();
        assert!(options.gap);
        assert!(!options.color);
        assert!(options.background_color);
    }
}
