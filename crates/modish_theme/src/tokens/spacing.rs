//! Spacing tokens for theming

use super::MetricRegistry;

/// Built-in spacing scale (4px steps)
pub const SPACINGS: &[(&str, f32)] = &[
    ("s1", 4.0),
    ("s2", 8.0),
    ("s3", 12.0),
    ("s4", 16.0),
    ("s5", 20.0),
    ("s6", 24.0),
    ("s7", 28.0),
    ("s8", 32.0),
    ("s9", 36.0),
    ("s10", 40.0),
];

impl MetricRegistry {
    /// Spacing registry seeded with [`SPACINGS`]
    pub fn spacings() -> Self {
        Self::with_entries(SPACINGS.iter().copied())
    }
}
