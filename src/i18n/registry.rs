//! Resource registry: one translation table per resource key.
//!
//! Entries are type-erased so a single registry can hold plain strings next to
//! structured payloads. Lookups recover the payload type by downcast.

use crate::i18n::{I18nError, LocaleCode, Translation, TranslationMap, TranslationValidator};
use std::any::{type_name, Any};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::debug;

/// Validation settings applied at registration time.
///
/// Passing `None` to `ResourceRegistry::register` skips validation entirely,
/// which is what a disabled enforcement flag means.
#[derive(Clone, Copy)]
pub struct Validation<'a> {
    pub validator: &'a dyn TranslationValidator,
    pub required_locales: &'a BTreeSet<LocaleCode>,
}

/// A single resource's translations plus the locale to fall back to.
#[derive(Debug, Clone)]
pub struct RegistryEntry<T> {
    key: String,
    translations: TranslationMap<T>,
    default_locale: LocaleCode,
}

impl<T> RegistryEntry<T> {
    /// Build an entry.
    ///
    /// # Errors
    /// `MissingDefaultLocale` if `translations` has no value for `default_locale`.
    pub fn new(
        key: impl Into<String>,
        translations: TranslationMap<T>,
        default_locale: LocaleCode,
    ) -> Result<Self, I18nError> {
        let key = key.into();
        if !translations.contains(&default_locale) {
            return Err(I18nError::MissingDefaultLocale {
                key,
                locale: default_locale.code().to_string(),
            });
        }

        Ok(Self {
            key,
            translations,
            default_locale,
        })
    }

    /// The resource key this entry was registered under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The locale `resolve` falls back to.
    pub fn default_locale(&self) -> &LocaleCode {
        &self.default_locale
    }

    /// Every translation in the entry, keyed by locale.
    pub fn translations(&self) -> &TranslationMap<T> {
        &self.translations
    }

    /// The translation for `locale`, or the default locale's when absent.
    pub fn resolve(&self, locale: &LocaleCode) -> Result<&T, I18nError> {
        self.translations
            .get(locale)
            .or_else(|| self.translations.get(&self.default_locale))
            // Unreachable through `new`, kept so a lookup never panics.
            .ok_or_else(|| I18nError::MissingDefaultLocale {
                key: self.key.clone(),
                locale: self.default_locale.code().to_string(),
            })
    }
}

/// Key → entry store. Not internally synchronized; see `LocaleManager`.
#[derive(Default)]
pub struct ResourceRegistry {
    entries: BTreeMap<String, Box<dyn Any + Send + Sync>>,
}

impl ResourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a translation table under `key`.
    ///
    /// The duplicate check runs first, then validation (if any), then entry
    /// construction. Nothing is stored unless every step succeeds.
    ///
    /// # Errors
    /// - `DuplicateKey` if `key` is already registered; the existing entry is kept
    /// - any error returned by the validator, unchanged
    /// - `MissingDefaultLocale` if the table lacks `default_locale`
    pub fn register<T: Translation>(
        &mut self,
        key: &str,
        translations: TranslationMap<T>,
        default_locale: &LocaleCode,
        validation: Option<Validation<'_>>,
    ) -> Result<(), I18nError> {
        if self.entries.contains_key(key) {
            return Err(I18nError::DuplicateKey {
                key: key.to_string(),
            });
        }

        if let Some(validation) = validation {
            validation
                .validator
                .validate(&translations, validation.required_locales, key)?;
        }

        let entry = RegistryEntry::new(key, translations, default_locale.clone())?;
        debug!(
            "Registered resource '{}' with {} translations",
            key,
            entry.translations().len()
        );
        self.entries.insert(key.to_string(), Box::new(entry));
        Ok(())
    }

    /// Resolve `key` for `locale` with fallback to the entry's default locale.
    ///
    /// # Arguments
    /// * `key` - The resource key passed to `register`
    /// * `locale` - The locale to resolve for
    ///
    /// # Returns
    /// The exact translation for `locale` if present, else the default locale's.
    ///
    /// # Errors
    /// - `UnregisteredResource` if `key` is unknown
    /// - `ResourceTypeMismatch` if the entry was registered with another payload type
    pub fn lookup<T: Translation>(&self, key: &str, locale: &LocaleCode) -> Result<&T, I18nError> {
        self.entry::<T>(key)?.resolve(locale)
    }

    /// The typed entry registered under `key`.
    pub fn entry<T: Translation>(&self, key: &str) -> Result<&RegistryEntry<T>, I18nError> {
        let erased = self
            .entries
            .get(key)
            .ok_or_else(|| I18nError::UnregisteredResource {
                key: key.to_string(),
            })?;

        erased
            .downcast_ref::<RegistryEntry<T>>()
            .ok_or_else(|| I18nError::ResourceTypeMismatch {
                key: key.to_string(),
                expected: type_name::<T>(),
            })
    }

    /// Check whether `key` has been registered.
    ///
    /// # Arguments
    /// * `key` - The resource key, e.g. "app.strings"
    ///
    /// # Returns
    /// `true` if an entry of any payload type exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` until the first successful registration.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ResourceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRegistry")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
