/*
    dumpctx

    Copyright 2024-2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/

//! Key/value settings consumed when building an execution context from defaults.
//!
//! Backends read their tuning values through the typed getters of [SettingsStore]. Every getter
//! takes the default to use when the key is missing, empty, or holds a value that cannot be
//! parsed as the requested type.

use indexmap::IndexMap;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::ContextError;

/// A read-only key/value settings lookup.
pub trait SettingsStore {
    /// Return the raw string stored for `key`, if any.
    fn get_raw(&self, key: &str) -> Option<&str>;

    /// Return `key` as a boolean. Accepts `true`/`false` in any letter case.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get_raw(key).map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "true" => true,
            Some(v) if v == "false" => false,
            Some(v) => {
                log::debug!("SettingsStore::get_bool(): '{}' for {} is not a boolean", v, key);
                default
            }
            None => default,
        }
    }

    /// Return `key` as a signed 32-bit integer.
    fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.get_raw(key) {
            Some(v) => v.trim().parse::<i32>().unwrap_or_else(|_| {
                log::debug!("SettingsStore::get_int(): '{}' for {} is not an integer", v, key);
                default
            }),
            None => default,
        }
    }

    /// Return `key` as a string. An empty stored value yields the default.
    fn get_string(&self, key: &str, default: &str) -> String {
        match self.get_raw(key) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => default.to_string(),
        }
    }
}

/// An insertion-ordered settings map. A key may be present with no value, which behaves the same
/// as a missing key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettingsMap {
    values: IndexMap<String, Option<String>>,
}

impl SettingsMap {
    pub fn new() -> Self {
        Default::default()
    }

    /// Set `key` to `value`, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), Some(value.into()));
    }

    /// Builder-style variant of [SettingsMap::set].
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value.to_string());
        self
    }

    /// Record `key` as present but without a value.
    pub fn set_none(&mut self, key: impl Into<String>) {
        self.values.insert(key.into(), None);
    }

    pub fn remove(&mut self, key: &str) -> Option<Option<String>> {
        self.values.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Parse a single `KEY=VALUE` assignment into the map. A bare `KEY=` records the key with no
    /// value.
    pub fn set_assignment(&mut self, assignment: &str) -> Result<(), ContextError> {
        let Some((key, value)) = assignment.split_once('=') else {
            return Err(ContextError::SettingsError(format!(
                "expected KEY=VALUE, found '{}'",
                assignment
            )));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(ContextError::SettingsError(format!("empty key in '{}'", assignment)));
        }

        let value = value.trim();
        if value.is_empty() {
            self.set_none(key);
        }
        else {
            self.set(key, value);
        }
        Ok(())
    }
}

impl SettingsStore for SettingsMap {
    fn get_raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_deref())
    }
}

impl SettingsStore for std::collections::HashMap<String, String> {
    fn get_raw(&self, key: &str) -> Option<&str> {
        self.get(key).map(|v| v.as_str())
    }
}

impl SettingsStore for std::collections::HashMap<String, Option<String>> {
    fn get_raw(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_deref())
    }
}

/// Parses settings text made of `KEY=VALUE` lines. Blank lines and lines starting with `#` are
/// skipped.
impl FromStr for SettingsMap {
    type Err = ContextError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut map = SettingsMap::new();
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            map.set_assignment(line)?;
        }
        Ok(map)
    }
}

impl Display for SettingsMap {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{}={}", key, value.unwrap_or_default())?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SettingsMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SettingsMap::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let settings = SettingsMap::new()
            .with("Verbose", "TRUE")
            .with("Debug", "nope")
            .with("Count", " 12 ")
            .with("Bad", "twelve")
            .with("Method", "BE");

        assert!(settings.get_bool("Verbose", false));
        assert!(settings.get_bool("Debug", true));
        assert!(!settings.get_bool("Missing", false));
        assert_eq!(settings.get_int("Count", 0), 12);
        assert_eq!(settings.get_int("Bad", 7), 7);
        assert_eq!(settings.get_int("Missing", 20), 20);
        assert_eq!(settings.get_string("Method", "NONE"), "BE");
        assert_eq!(settings.get_string("Missing", "NONE"), "NONE");
    }

    #[test]
    fn test_present_without_value() {
        let mut settings = SettingsMap::new();
        settings.set_none("Count");
        assert_eq!(settings.get_int("Count", 4), 4);
        assert_eq!(settings.get_string("Count", "x"), "x");
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn test_from_str() {
        let text = "# comment\nRedumperEnableDebug=true\n\nRedumperRereadCount = 5\nRedumperReadMethod=\n";
        let settings: SettingsMap = text.parse().unwrap();
        assert_eq!(settings.len(), 3);
        assert!(settings.get_bool("RedumperEnableDebug", false));
        assert_eq!(settings.get_int("RedumperRereadCount", 20), 5);
        assert_eq!(settings.get_raw("RedumperReadMethod"), None);

        assert!(matches!(
            "no equals sign".parse::<SettingsMap>(),
            Err(ContextError::SettingsError(_))
        ));
        assert!("=value".parse::<SettingsMap>().is_err());
    }

    #[test]
    fn test_hash_map_store() {
        let mut map = std::collections::HashMap::new();
        map.insert("Key".to_string(), "3".to_string());
        assert_eq!(map.get_int("Key", 0), 3);
    }
}
