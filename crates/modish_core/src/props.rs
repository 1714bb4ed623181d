//! Prop values passed to components
//!
//! A component receives an ordered bag of named values. Most keys are
//! unrelated to styling; modifier keys are usually boolean flags whose
//! name carries the whole meaning (`paddingL-10`, `bg-grey50`, `row`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered prop set. Insertion order is the order keys are visited in.
pub type Props = IndexMap<String, PropValue>;

/// A single prop value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<PropValue>),
    Map(Props),
    Null,
}

impl PropValue {
    /// Truthiness used for flag-style props (`row`, `center`, ...)
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Text(s) => !s.is_empty(),
            PropValue::List(_) | PropValue::Map(_) => true,
            PropValue::Null => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Parse a command-line style literal: `true`/`false`, a number, or text
    pub fn parse_literal(raw: &str) -> Self {
        match raw {
            "true" => PropValue::Bool(true),
            "false" => PropValue::Bool(false),
            "null" => PropValue::Null,
            _ => match raw.parse::<f64>() {
                Ok(n) if n.is_finite() => PropValue::Number(n),
                _ => PropValue::Text(raw.to_string()),
            },
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

/// Build a [`Props`] map inline.
///
/// ```
/// use modish_core::props;
///
/// let p = props! { "row" => true, "paddingL-10" => true, "color" => "red" };
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::Props::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut p = $crate::Props::new();
        $(
            p.insert(($key).to_string(), $crate::PropValue::from($value));
        )+
        p
    }};
}
