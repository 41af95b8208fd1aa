//! The palette map: role key -> canonical HSL triplet

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::role::{ColorMode, Role};

/// Returned for a role that is absent from a palette
pub const DEFAULT_ROLE_COLOR: &str = "0 0% 0%";

/// A palette snapshot
///
/// Keys are free-form (`"primary"`, `"secondary-dark"`, `"muted-foreground"`)
/// and values are canonical triplets. Iteration is in key order so snapshots
/// serialize deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorConfig {
    values: BTreeMap<String, String>,
}

impl ColorConfig {
    /// Create an empty palette
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Get a value by key, or a caller-supplied default when absent or empty
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.get(key) {
            Some(value) if !value.is_empty() => value,
            _ => default,
        }
    }

    /// Insert or replace a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the palette has no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Light value of a role, or [`DEFAULT_ROLE_COLOR`]
    pub fn light(&self, role: Role) -> &str {
        self.get_or(role.key(), DEFAULT_ROLE_COLOR)
    }

    /// Dark value of a role
    ///
    /// Falls back to the light value, then to [`DEFAULT_ROLE_COLOR`]. Roles
    /// shared by both modes (destructive) always read the light key.
    pub fn dark(&self, role: Role) -> &str {
        if role.is_mode_independent() {
            return self.light(role);
        }
        match self.get(&role.dark_key()) {
            Some(value) if !value.is_empty() => value,
            _ => self.light(role),
        }
    }

    /// Value of a role for the given mode
    pub fn role_value(&self, role: Role, mode: ColorMode) -> &str {
        match mode {
            ColorMode::Light => self.light(role),
            ColorMode::Dark => self.dark(role),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ColorConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
