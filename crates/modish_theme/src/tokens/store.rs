//! Named token storage
//!
//! A [`TokenStore`] maps token names to values with last-write-wins
//! semantics and keeps an anchored regex over the loaded names so callers
//! can test "is this string one of our tokens" without a lookup.

use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::{OnceLock, RwLock};

/// Pattern used while a store has no entries (or its pattern failed to build)
fn never_matches() -> &'static Regex {
    static NEVER: OnceLock<Regex> = OnceLock::new();
    NEVER.get_or_init(|| Regex::new(r"\z.").expect("static pattern is valid"))
}

/// Name -> value registry for one kind of token
#[derive(Clone, Debug)]
pub struct TokenStore<V> {
    entries: FxHashMap<String, V>,
    pattern: Regex,
}

impl<V> Default for TokenStore<V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
            pattern: never_matches().clone(),
        }
    }
}

impl<V> TokenStore<V> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `entries`
    pub fn with_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut store = Self::new();
        store.load(entries);
        store
    }

    /// Merge entries into the store, overwriting existing names.
    ///
    /// The name pattern is rebuilt afterwards.
    pub fn load<K, I>(&mut self, entries: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in entries {
            self.entries.insert(name.into(), value);
        }
        self.pattern = self.build_pattern();
    }

    /// Look up a token; `None` means "not a token of this kind"
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Regex matching exactly the loaded names
    pub fn match_pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Loaded names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn build_pattern(&self) -> Regex {
        if self.entries.is_empty() {
            return never_matches().clone();
        }

        let alternation = self
            .names()
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");

        match Regex::new(&format!("^(?:{})$", alternation)) {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::warn!("Failed to build token pattern ({} names): {}", self.len(), e);
                never_matches().clone()
            }
        }
    }
}

/// Shared, lockable store of numeric tokens (spacings, radii)
#[derive(Debug, Default)]
pub struct MetricRegistry {
    store: RwLock<TokenStore<f32>>,
}

impl MetricRegistry {
    /// Create a registry seeded with `entries`
    pub fn with_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f32)>,
    {
        Self {
            store: RwLock::new(TokenStore::with_entries(entries)),
        }
    }

    /// Merge entries, overwriting existing names
    pub fn load<K, I>(&self, entries: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f32)>,
    {
        self.store.write().unwrap().load(entries);
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.store.read().unwrap().get(name).copied()
    }

    /// Whether `name` is exactly one of the loaded names
    pub fn matches(&self, name: &str) -> bool {
        self.store.read().unwrap().match_pattern().is_match(name)
    }

    /// Anchored alternation of the loaded names, as of this call
    pub fn match_pattern(&self) -> Regex {
        self.store.read().unwrap().match_pattern().clone()
    }

    /// Snapshot of all entries, sorted by name
    pub fn entries(&self) -> Vec<(String, f32)> {
        let store = self.store.read().unwrap();
        let mut entries: Vec<(String, f32)> =
            store.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
