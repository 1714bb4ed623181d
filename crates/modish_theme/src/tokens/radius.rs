//! Border radius tokens for theming

use super::MetricRegistry;

/// Built-in border radii
pub const BORDER_RADII: &[(&str, f32)] = &[
    ("br0", 0.0),
    ("br1", 4.0),
    ("br2", 8.0),
    ("br3", 12.0),
    ("br4", 16.0),
    ("br5", 20.0),
    ("br6", 24.0),
    ("br7", 28.0),
    ("br8", 32.0),
    ("br9", 36.0),
    ("br10", 40.0),
    ("br100", 1000.0),
];

impl MetricRegistry {
    /// Border radius registry seeded with [`BORDER_RADII`]
    pub fn border_radii() -> Self {
        Self::with_entries(BORDER_RADII.iter().copied())
    }
}
