//! Design tokens for theming
//!
//! - Colors (static palette and per-scheme design tokens)
//! - Typography presets
//! - Spacing scale
//! - Border radii

mod color;
mod radius;
mod spacing;
mod store;
mod typography;

pub use color::*;
pub use radius::*;
pub use spacing::*;
pub use store::*;
pub use typography::*;
