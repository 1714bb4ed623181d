//! Modish Modifiers
//!
//! Turns compact modifier props (`paddingL-10`, `bg-grey10`, `row`, `absR`,
//! `h1`, ...) into one declarative style payload, reading token values from
//! a [`ThemeState`](modish_theme::ThemeState).
//!
//! ```rust,ignore
//! use modish_core::props;
//! use modish_modifiers::{generate_modifiers_style, ModifierOptions};
//! use modish_theme::ThemeState;
//!
//! let style = generate_modifiers_style(
//!     ThemeState::get(),
//!     &ModifierOptions::view(),
//!     &props! { "paddingH-s4" => true, "row" => true, "centerV" => true },
//! );
//! ```

pub mod alignment;
pub mod extract;
pub mod matchers;
pub mod options;
pub mod style;
pub mod theme_props;

pub use alignment::extract_alignments;
pub use extract::generate_modifiers_style;
pub use matchers::{classify, parse_decimal, Category, Modifier, CATEGORY_ORDER};
pub use options::ModifierOptions;
pub use style::{
    Alignment, Alignments, ExtractedStyle, FlexDirection, FlexStyle, MarginStyle, PaddingStyle,
    Position, PositionStyle,
};
pub use theme_props::{
    extract_accessibility_props, extract_modifier_props, resolve_component_style, theme_props,
};
