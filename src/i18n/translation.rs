//! Translation tables and the payload capability the validator relies on.

use crate::i18n::LocaleCode;
use std::collections::btree_map::{self, BTreeMap};

/// Result of a payload inspecting its own content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    /// The payload carries usable content.
    Complete,
    /// The payload is absent.
    Null,
    /// A scalar payload that is empty or whitespace-only.
    Blank,
    /// A structured payload that does not check its own fields.
    Unchecked,
}

/// A value that can be stored as a translation.
///
/// Scalar strings and `Option` wrappers come with built-in checks. Structured
/// payloads implement this with an empty body, which reports them as
/// `Unchecked`; override `completeness` to validate their fields.
///
/// ```ignore
/// #[derive(Clone)]
/// struct AuthStrings { welcome: String, sign_in: String }
///
/// impl Translation for AuthStrings {
///     fn completeness(&self) -> Completeness {
///         if self.welcome.trim().is_empty() || self.sign_in.trim().is_empty() {
///             Completeness::Blank
///         } else {
///             Completeness::Complete
///         }
///     }
/// }
/// ```
pub trait Translation: Send + Sync + 'static {
    fn completeness(&self) -> Completeness {
        Completeness::Unchecked
    }
}

fn text_completeness(text: &str) -> Completeness {
    if text.trim().is_empty() {
        Completeness::Blank
    } else {
        Completeness::Complete
    }
}

impl Translation for String {
    fn completeness(&self) -> Completeness {
        text_completeness(self)
    }
}

impl Translation for &'static str {
    fn completeness(&self) -> Completeness {
        text_completeness(self)
    }
}

impl<T: Translation> Translation for Option<T> {
    fn completeness(&self) -> Completeness {
        match self {
            Some(value) => value.completeness(),
            None => Completeness::Null,
        }
    }
}

/// Type-erased view over a translation table, handed to validators.
pub trait TranslationTable {
    /// Every locale present in the table, in code order.
    fn locales(&self) -> Vec<&LocaleCode>;

    /// `(locale, completeness)` for every entry, in code order.
    fn entry_completeness(&self) -> Vec<(&LocaleCode, Completeness)>;
}

/// Locale → payload table for one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationMap<T> {
    entries: BTreeMap<LocaleCode, T>,
}

impl<T> TranslationMap<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, locale: LocaleCode, value: T) -> Self {
        self.entries.insert(locale, value);
        self
    }

    /// Insert or replace a translation, returning the previous value.
    pub fn insert(&mut self, locale: LocaleCode, value: T) -> Option<T> {
        self.entries.insert(locale, value)
    }

    /// Get the translation for exactly `locale`, without fallback.
    ///
    /// # Arguments
    /// * `locale` - The locale to look up
    ///
    /// # Returns
    /// * `Some(&T)` if the table has a value for `locale`
    /// * `None` otherwise
    pub fn get(&self, locale: &LocaleCode) -> Option<&T> {
        self.entries.get(locale)
    }

    /// Check whether the table has a value for `locale`.
    pub fn contains(&self, locale: &LocaleCode) -> bool {
        self.entries.contains_key(locale)
    }

    /// Number of locales with a translation.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(locale, translation)` pairs in locale code order.
    pub fn iter(&self) -> btree_map::Iter<'_, LocaleCode, T> {
        self.entries.iter()
    }
}

impl<T> Default for TranslationMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(LocaleCode, T)> for TranslationMap<T> {
    fn from_iter<I: IntoIterator<Item = (LocaleCode, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T, const N: usize> From<[(LocaleCode, T); N]> for TranslationMap<T> {
    fn from(entries: [(LocaleCode, T); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a TranslationMap<T> {
    type Item = (&'a LocaleCode, &'a T);
    type IntoIter = btree_map::Iter<'a, LocaleCode, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T: Translation> TranslationTable for TranslationMap<T> {
    fn locales(&self) -> Vec<&LocaleCode> {
        self.entries.keys().collect()
    }

    fn entry_completeness(&self) -> Vec<(&LocaleCode, Completeness)> {
        self.entries
            .iter()
            .map(|(locale, value)| (locale, value.completeness()))
            .collect()
    }
}
