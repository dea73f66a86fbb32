//! Allow List
//!
//! Immutable set of recognized attribute names sharing one prefix marker.

use super::aria_properties::{ARIA_PREFIX, ARIA_PROPERTIES};
use crate::error::{AllowListError, Result};
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Built-in ARIA allow-list, built once per process
static ARIA_ALLOW_LIST: Lazy<Arc<AllowList>> = Lazy::new(|| {
    let names = ARIA_PROPERTIES
        .keys()
        .map(|name| name.to_string())
        .collect::<IndexSet<_>>();
    tracing::debug!(count = names.len(), "built ARIA allow-list");
    Arc::new(AllowList {
        prefix: ARIA_PREFIX.to_string(),
        names,
    })
});

/// Set of recognized attribute names.
///
/// Every entry is lower-case, unique and starts with [`prefix`](Self::prefix).
/// Entries keep the order of the table they were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    prefix: String,
    names: IndexSet<String>,
}

impl AllowList {
    /// Shared handle to the built-in ARIA allow-list
    pub fn aria() -> Arc<AllowList> {
        Arc::clone(&ARIA_ALLOW_LIST)
    }

    /// Build an allow-list from a prefix and a list of names
    pub fn new<P, I, S>(prefix: P, names: I) -> Result<Self>
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;

        let mut list = AllowList {
            prefix,
            names: IndexSet::new(),
        };
        for name in names {
            let name = name.into();
            list.check_entry(&name)?;
            if !list.names.insert(name.clone()) {
                return Err(AllowListError::Duplicate(name));
            }
        }

        tracing::debug!(prefix = %list.prefix, count = list.names.len(), "built allow-list");
        Ok(list)
    }

    /// Parse an allow-list data file.
    ///
    /// The data is a JSON object whose keys are the recognized names; the
    /// values are metadata and are ignored.
    pub fn from_json_str(prefix: &str, text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        match value {
            serde_json::Value::Object(entries) => AllowList::new(prefix, entries.keys().cloned()),
            _ => Err(AllowListError::NotAnObject),
        }
    }

    /// Read an allow-list data file from disk
    pub fn from_path(prefix: &str, path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| AllowListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        AllowList::from_json_str(prefix, &text)
    }

    /// Copy of this list extended with `extra` names.
    ///
    /// Names already present are skipped; new names are checked like any
    /// other entry.
    pub fn with_names<I, S>(&self, extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = self.clone();
        for name in extra {
            let name = name.into();
            list.check_entry(&name)?;
            if list.names.contains(&name) {
                tracing::debug!(name = %name, "allow-list already contains name");
                continue;
            }
            list.names.insert(name);
        }
        Ok(list)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Recognized names in table order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    fn check_entry(&self, name: &str) -> Result<()> {
        if !name.starts_with(&self.prefix) {
            return Err(AllowListError::MissingPrefix {
                name: name.to_string(),
                prefix: self.prefix.clone(),
            });
        }
        if name != name.to_lowercase() {
            return Err(AllowListError::NotLowercase(name.to_string()));
        }
        Ok(())
    }
}

fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(AllowListError::EmptyPrefix);
    }
    if prefix != prefix.to_lowercase() {
        return Err(AllowListError::InvalidPrefix(prefix.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aria_list_matches_table() {
        let list = AllowList::aria();
        assert_eq!(list.prefix(), "aria-");
        assert_eq!(list.len(), ARIA_PROPERTIES.len());
        assert!(list.contains("aria-label"));
        assert!(list.contains("aria-rowindextext"));
        assert!(!list.contains("aria-badprop"));
    }

    #[test]
    fn test_aria_list_is_shared() {
        let a = AllowList::aria();
        let b = AllowList::aria();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_new_preserves_order() {
        let list = AllowList::new("data-", ["data-b", "data-a"]).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["data-b", "data-a"]);
    }

    #[test]
    fn test_new_rejects_uppercase_prefix() {
        let err = AllowList::new("Aria-", ["aria-label"]).unwrap_err();
        assert!(matches!(err, AllowListError::InvalidPrefix(p) if p == "Aria-"));
    }

    #[test]
    fn test_with_names_skips_existing() {
        let list = AllowList::new("aria-", ["aria-label"]).unwrap();
        let extended = list.with_names(["aria-label", "aria-foo"]).unwrap();
        assert_eq!(extended.len(), 2);
        assert_eq!(list.len(), 1);
    }
}
