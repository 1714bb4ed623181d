//! Per-component theme overrides
//!
//! Each component name can carry two override layers:
//! - **default** overrides, which explicit call-site props beat
//! - **forced** overrides, which beat everything
//!
//! An override is either a static prop map or a resolver computed from the
//! incoming props and the ambient [`ThemeContext`].

use crate::error::ThemeError;
use crate::scheme::ColorScheme;
use modish_core::{PropValue, Props};
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, RwLock};

/// Name of the override table itself; cannot be used as an item or component key
pub const COMPONENTS_KEY: &str = "components";

/// Ambient values handed to override resolvers
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeContext {
    pub color_scheme: ColorScheme,
    /// Free-form values supplied by the host
    pub values: Props,
}

impl ThemeContext {
    pub fn new(color_scheme: ColorScheme) -> Self {
        Self {
            color_scheme,
            values: Props::new(),
        }
    }
}

pub type OverrideResolver = Arc<dyn Fn(&Props, &ThemeContext) -> Props + Send + Sync>;

/// Static mapping or resolver function
#[derive(Clone)]
pub enum Override {
    Static(Props),
    Resolver(OverrideResolver),
}

impl Override {
    pub fn resolver<F>(f: F) -> Self
    where
        F: Fn(&Props, &ThemeContext) -> Props + Send + Sync + 'static,
    {
        Override::Resolver(Arc::new(f))
    }

    /// Produce the override props for one resolution
    pub fn apply(&self, props: &Props, context: &ThemeContext) -> Props {
        match self {
            Override::Static(overrides) => overrides.clone(),
            Override::Resolver(resolve) => resolve(props, context),
        }
    }
}

impl Debug for Override {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Override::Static(props) => f.debug_tuple("Static").field(props).finish(),
            Override::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl From<Props> for Override {
    fn from(props: Props) -> Self {
        Override::Static(props)
    }
}

/// Theme-wide items and per-component override tables
#[derive(Debug, Default)]
pub struct ThemeManager {
    items: RwLock<FxHashMap<String, PropValue>>,
    defaults: RwLock<FxHashMap<String, Override>>,
    forced: RwLock<FxHashMap<String, Override>>,
}

fn check_reserved(name: &str) -> Result<(), ThemeError> {
    if name == COMPONENTS_KEY {
        return Err(ThemeError::ReservedName(name.to_string()));
    }
    Ok(())
}

impl ThemeManager {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Items ==========

    pub fn set_item(&self, key: &str, value: PropValue) -> Result<(), ThemeError> {
        check_reserved(key)?;
        self.items.write().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    pub fn get_item(&self, key: &str) -> Option<PropValue> {
        self.items.read().unwrap().get(key).cloned()
    }

    // ========== Component overrides ==========

    /// Set low-precedence overrides for a component
    pub fn set_component_theme(
        &self,
        component: &str,
        overrides: impl Into<Override>,
    ) -> Result<(), ThemeError> {
        check_reserved(component)?;
        tracing::debug!("ThemeManager: default theme set for {}", component);
        self.defaults
            .write()
            .unwrap()
            .insert(component.to_string(), overrides.into());
        Ok(())
    }

    /// Set overrides that beat explicit props for a component
    pub fn set_component_forced_theme(
        &self,
        component: &str,
        overrides: impl Into<Override>,
    ) -> Result<(), ThemeError> {
        check_reserved(component)?;
        tracing::debug!("ThemeManager: forced theme set for {}", component);
        self.forced
            .write()
            .unwrap()
            .insert(component.to_string(), overrides.into());
        Ok(())
    }

    pub fn component_theme(&self, component: &str) -> Option<Override> {
        self.defaults.read().unwrap().get(component).cloned()
    }

    pub fn component_forced_theme(&self, component: &str) -> Option<Override> {
        self.forced.read().unwrap().get(component).cloned()
    }

    /// `{...defaults, ...props, ...forced}` for `component`.
    ///
    /// Resolvers see the unmerged incoming props and run outside the table
    /// locks, so they may read the manager themselves.
    pub fn resolve(&self, component: &str, props: &Props, context: &ThemeContext) -> Props {
        let defaults = self.component_theme(component);
        let forced = self.component_forced_theme(component);

        let mut merged = match &defaults {
            Some(overrides) => overrides.apply(props, context),
            None => Props::with_capacity(props.len()),
        };
        merged.extend(props.iter().map(|(k, v)| (k.clone(), v.clone())));
        if let Some(overrides) = &forced {
            merged.extend(overrides.apply(props, context));
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modish_core::props;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_props_beat_defaults() {
        let manager = ThemeManager::new();
        manager
            .set_component_theme("Text", props! { "color" => "grey" })
            .unwrap();

        let resolved = manager.resolve("Text", &props! { "color" => "red" }, &ThemeContext::default());
        assert_eq!(resolved["color"], PropValue::from("red"));
    }

    #[test]
    fn forced_beats_explicit_props() {
        let manager = ThemeManager::new();
        manager
            .set_component_theme("Text", props! { "color" => "grey" })
            .unwrap();
        manager
            .set_component_forced_theme("Text", props! { "color" => "blue" })
            .unwrap();

        let resolved = manager.resolve("Text", &props! { "color" => "red" }, &ThemeContext::default());
        assert_eq!(resolved["color"], PropValue::from("blue"));
    }

    #[test]
    fn resolver_sees_props_and_context() {
        let manager = ThemeManager::new();
        manager
            .set_component_theme(
                "View",
                Override::resolver(|props, ctx| {
                    let mut out = Props::new();
                    if props.contains_key("card") {
                        out.insert("br2".into(), true.into());
                    }
                    out.insert("scheme".into(), ctx.color_scheme.as_str().into());
                    out
                }),
            )
            .unwrap();

        let ctx = ThemeContext::new(ColorScheme::Dark);
        let resolved = manager.resolve("View", &props! { "card" => true }, &ctx);
        assert_eq!(resolved["br2"], PropValue::Bool(true));
        assert_eq!(resolved["scheme"], PropValue::from("dark"));

        let resolved = manager.resolve("View", &Props::new(), &ctx);
        assert!(!resolved.contains_key("br2"));
    }

    #[test]
    fn unknown_component_passes_props_through() {
        let manager = ThemeManager::new();
        let props = props! { "a" => 1, "b" => true };
        assert_eq!(manager.resolve("Button", &props, &ThemeContext::default()), props);
    }

    #[test]
    fn reserved_name_is_rejected() {
        let manager = ThemeManager::new();
        assert!(matches!(
            manager.set_component_theme(COMPONENTS_KEY, Props::new()),
            Err(ThemeError::ReservedName(_))
        ));
        assert!(manager.set_item(COMPONENTS_KEY, PropValue::Null).is_err());
        manager.set_item("accent", "violet30".into()).unwrap();
        assert_eq!(manager.get_item("accent"), Some(PropValue::from("violet30")));
    }
}
