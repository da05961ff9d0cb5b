//! # Declared Properties
//!
//! The flat key/value table a build declares (the equivalent of a
//! `gradle.properties` file merged with inline definitions). Values are
//! strings or `null`, kept in declaration order.
//!
//! Attributes are namespaced by prefix: `manifest.` for the attributes of the
//! primary manifest and `patched.manifest.` for the set used to patch built
//! archives. [`DeclaredProperties::prefixed`] extracts such a namespace with
//! the prefix stripped.

use ini::{Ini, ParseOption};

use crate::error::Result;

/// Prefix of declared properties feeding the primary manifest.
pub const PREFIX_DEFAULT: &str = "manifest.";
/// Prefix of declared properties feeding the patched manifest.
pub const PREFIX_PATCHED: &str = "patched.manifest.";

/// Property naming a differently named extension to use.
pub const KEY_EXTENSION: &str = "plugins.manifest.properties.differentExtension";
/// Property enabling the patched attribute set.
pub const KEY_PATCH: &str = "plugins.manifest.properties.patchArchives";
/// Property enabling the version patch policy.
pub const KEY_VERSION: &str = "plugins.manifest.properties.patchVersion";

/// The three states a source can report for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue<'a> {
    /// The source does not define the key.
    Absent,
    /// The source defines the key but its trimmed value is empty (or null).
    Blank,
    /// The source defines the key with real content.
    Present(&'a str),
}

impl<'a> RawValue<'a> {
    /// Classify an optional value already known to be defined.
    pub fn of_defined(value: Option<&'a str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => RawValue::Present(v),
            _ => RawValue::Blank,
        }
    }

    /// The value, when the key is present and not blank
    pub fn present(&self) -> Option<&'a str> {
        match self {
            RawValue::Present(v) => Some(v),
            _ => None,
        }
    }
}

/// Interpret a property value as a flag: only `true` (any case) is true.
/// Surrounding whitespace is not ignored.
pub fn is_true(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Resolve backslash escapes the way `java.util.Properties` does: `\t`,
/// `\n`, `\r`, `\f` and `\uXXXX` are decoded, any other escaped character
/// stands for itself.
pub fn unescape_java(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.clone().take(4).collect();
                let decoded = Some(&hex)
                    .filter(|h| h.len() == 4 && h.chars().all(|c| c.is_ascii_hexdigit()))
                    .and_then(|h| u32::from_str_radix(h, 16).ok())
                    .and_then(char::from_u32);
                match decoded {
                    Some(decoded) => {
                        out.push(decoded);
                        chars.nth(3);
                    }
                    None => out.push('u'),
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Ordered table of declared properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredProperties {
    entries: Vec<(String, Option<String>)>,
}

impl DeclaredProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a property. Redeclaring keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Look up a key as a [`RawValue`].
    pub fn raw(&self, key: &str) -> RawValue<'_> {
        match self.entries.iter().find(|(k, _)| k == key) {
            Some((_, value)) => RawValue::of_defined(value.as_deref()),
            None => RawValue::Absent,
        }
    }

    /// Remove a key so it cannot be applied again later in the pass.
    pub fn remove(&mut self, key: &str) -> Option<Option<String>> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether the key is declared and set to `true`.
    pub fn flag(&self, key: &str) -> bool {
        self.raw(key).present().is_some_and(is_true)
    }

    /// All entries whose key starts with `prefix`, with the prefix stripped.
    pub fn prefixed(&self, prefix: &str) -> DeclaredProperties {
        let entries = self
            .entries
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(prefix)
                    .map(|stripped| (stripped.to_string(), value.clone()))
            })
            .collect();
        DeclaredProperties { entries }
    }

    /// Remaining entries with a non-blank value, in declaration order.
    pub fn non_blank(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(key, value)| match value {
            Some(v) if !v.trim().is_empty() => Some((key.as_str(), v.as_str())),
            _ => None,
        })
    }

    /// All entries, null values included, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Layer `other` on top of this table. Keys declared in both take the
    /// value from `other`.
    pub fn overlay(&mut self, other: &DeclaredProperties) {
        for (key, value) in other.iter() {
            self.insert(key, value.map(str::to_string));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge a Java-style properties file (section-less `key=value` lines)
    /// into this table. Entries from the file replace existing ones.
    ///
    /// Values keep their quotes; backslash escapes follow the Java rules
    /// (see [`unescape_java`]).
    pub fn merge_properties_str(&mut self, content: &str) -> Result<()> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..Default::default()
        };
        let parsed = Ini::load_from_str_opt(content, options)?;
        for (key, value) in parsed.general_section().iter() {
            self.insert(unescape_java(key), Some(unescape_java(value)));
        }
        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for DeclaredProperties {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let mut properties = DeclaredProperties::new();
        for (key, value) in iter {
            properties.insert(key, value);
        }
        properties
    }
}
