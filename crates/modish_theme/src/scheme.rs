//! Light/dark scheme management
//!
//! [`SchemeManager`] holds the two parallel color token sets, the selected
//! [`SchemeMode`], and the listeners that are told when the effective
//! scheme flips.
//!
//! ```rust,ignore
//! let schemes = SchemeManager::new(SchemeMode::Default, None);
//! schemes.load_schemes([("screenBg", "#FFF")], [("screenBg", "#000")])?;
//! let id = schemes.add_listener(|scheme| println!("now {scheme}"));
//! schemes.set_mode(SchemeMode::Dark); // prints "now dark"
//! schemes.remove_listener(id);
//! ```

use crate::error::ThemeError;
use crate::tokens::TokenStore;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Concrete color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selected scheme mode; `Default` follows the host appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeMode {
    #[default]
    Default,
    Light,
    Dark,
}

impl SchemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SchemeMode::Default => "default",
            SchemeMode::Light => "light",
            SchemeMode::Dark => "dark",
        }
    }
}

impl FromStr for SchemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SchemeMode::Default),
            "light" => Ok(SchemeMode::Light),
            "dark" => Ok(SchemeMode::Dark),
            other => Err(ThemeError::InvalidMode(other.to_string())),
        }
    }
}

impl Display for SchemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ColorScheme> for SchemeMode {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => SchemeMode::Light,
            ColorScheme::Dark => SchemeMode::Dark,
        }
    }
}

/// Callback invoked with the new effective scheme
pub type SchemeListener = Arc<dyn Fn(ColorScheme) + Send + Sync>;

/// Handle returned by [`SchemeManager::add_listener`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct SchemePair {
    light: TokenStore<String>,
    dark: TokenStore<String>,
}

impl SchemePair {
    fn for_scheme(&self, scheme: ColorScheme) -> &TokenStore<String> {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

/// Fail with [`ThemeError::SchemeMismatch`] unless both schemes define the same names.
///
/// The error lists every name defined on one side only, sorted.
pub fn check_scheme_keys<'a, L, D>(light: L, dark: D) -> Result<(), ThemeError>
where
    L: IntoIterator<Item = &'a str>,
    D: IntoIterator<Item = &'a str>,
{
    let light_names: FxHashSet<&str> = light.into_iter().collect();
    let dark_names: FxHashSet<&str> = dark.into_iter().collect();
    let mut missing: Vec<String> = light_names
        .symmetric_difference(&dark_names)
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }
    missing.sort_unstable();
    Err(ThemeError::SchemeMismatch { keys: missing })
}

/// Light/dark token sets plus mode and change listeners
pub struct SchemeManager {
    mode: RwLock<SchemeMode>,
    /// Appearance last reported by the host (`None` = no preference)
    host: RwLock<Option<ColorScheme>>,
    schemes: RwLock<SchemePair>,
    listeners: RwLock<Vec<(ListenerId, SchemeListener)>>,
    next_listener: AtomicU64,
}

impl std::fmt::Debug for SchemeManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemeManager")
            .field("mode", &self.mode())
            .field("effective", &self.effective_scheme())
            .field("listeners", &self.listeners.read().unwrap().len())
            .finish()
    }
}

impl SchemeManager {
    /// Create a manager with empty schemes
    pub fn new(mode: SchemeMode, host: Option<ColorScheme>) -> Self {
        Self {
            mode: RwLock::new(mode),
            host: RwLock::new(host),
            schemes: RwLock::new(SchemePair::default()),
            listeners: RwLock::new(Vec::new()),
            next_listener: AtomicU64::new(0),
        }
    }

    // ========== Schemes ==========

    /// Replace both scheme token sets.
    ///
    /// Fails without touching the current sets if a name is defined in only
    /// one of them. The mode is left unchanged.
    pub fn load_schemes<K, L, D>(&self, light: L, dark: D) -> Result<(), ThemeError>
    where
        K: Into<String>,
        L: IntoIterator<Item = (K, String)>,
        D: IntoIterator<Item = (K, String)>,
    {
        let light = TokenStore::with_entries(light);
        let dark = TokenStore::with_entries(dark);
        check_scheme_keys(light.names(), dark.names())?;

        debug!("SchemeManager::load_schemes - {} tokens per scheme", light.len());
        *self.schemes.write().unwrap() = SchemePair { light, dark };
        Ok(())
    }

    /// Token value in the effective scheme
    pub fn get(&self, name: &str) -> Option<String> {
        let scheme = self.effective_scheme();
        self.get_in(scheme, name)
    }

    /// Token value in a specific scheme
    pub fn get_in(&self, scheme: ColorScheme, name: &str) -> Option<String> {
        self.schemes
            .read()
            .unwrap()
            .for_scheme(scheme)
            .get(name)
            .cloned()
    }

    /// Whether `name` is defined by the schemes (both define the same names)
    pub fn contains(&self, name: &str) -> bool {
        self.schemes.read().unwrap().light.contains(name)
    }

    /// Snapshot of the effective scheme's tokens, sorted by name
    pub fn active_tokens(&self) -> Vec<(String, String)> {
        let scheme = self.effective_scheme();
        let schemes = self.schemes.read().unwrap();
        let store = schemes.for_scheme(scheme);
        store
            .names()
            .into_iter()
            .filter_map(|name| store.get(name).map(|v| (name.to_string(), v.clone())))
            .collect()
    }

    // ========== Mode ==========

    pub fn mode(&self) -> SchemeMode {
        *self.mode.read().unwrap()
    }

    /// Resolve the mode against the host appearance; never `Default`
    pub fn effective_scheme(&self) -> ColorScheme {
        match self.mode() {
            SchemeMode::Light => ColorScheme::Light,
            SchemeMode::Dark => ColorScheme::Dark,
            SchemeMode::Default => self.host.read().unwrap().unwrap_or(ColorScheme::Light),
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.effective_scheme() == ColorScheme::Dark
    }

    /// Select a mode; listeners hear about it only if the effective scheme changed
    pub fn set_mode(&self, mode: SchemeMode) {
        let previous = self.effective_scheme();
        *self.mode.write().unwrap() = mode;
        let current = self.effective_scheme();

        if previous != current {
            debug!(
                "SchemeManager::set_mode - {} switches {} -> {}",
                mode, previous, current
            );
            self.broadcast(current);
        }
    }

    /// Select a mode by name (`default`, `light` or `dark`)
    pub fn set_mode_named(&self, mode: &str) -> Result<(), ThemeError> {
        self.set_mode(mode.parse()?);
        Ok(())
    }

    /// Host appearance-change notification.
    ///
    /// Only broadcasts while the mode is `Default`; explicit light/dark
    /// selections ignore the host.
    pub fn set_host_appearance(&self, appearance: Option<ColorScheme>) {
        *self.host.write().unwrap() = appearance;
        if self.mode() == SchemeMode::Default {
            let current = self.effective_scheme();
            debug!("SchemeManager: host appearance changed, effective {}", current);
            self.broadcast(current);
        }
    }

    pub fn host_appearance(&self) -> Option<ColorScheme> {
        *self.host.read().unwrap()
    }

    // ========== Listeners ==========

    pub fn add_listener<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(ColorScheme) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap()
            .push((id, Arc::new(listener)));
        id
    }

    /// Returns false if the listener was not registered
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write().unwrap();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Call every listener in registration order.
    ///
    /// The listener list is copied first so listeners may re-enter the manager.
    fn broadcast(&self, scheme: ColorScheme) {
        let listeners: Vec<SchemeListener> = self
            .listeners
            .read()
            .unwrap()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(scheme);
        }
    }
}
