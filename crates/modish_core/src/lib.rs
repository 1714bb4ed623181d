//! Modish core types
//!
//! Shared building blocks for the token registry and the modifier engine:
//!
//! - [`Color`] and the `rgba(...)` helpers used for alpha blending
//! - [`PropValue`] / [`Props`], the ordered prop bag components pass around

pub mod color;
pub mod props;

pub use color::{
    parse_hex_channels, rgba_from_channels, rgba_from_hex, Color, ColorError,
};
pub use props::{PropValue, Props};
