//! `StringResource`: a declared, not-yet-registered translation table.
//!
//! Declare resources as public statics in a file that invokes
//! `glossarist::generate_strings!()`. The codegen scanner picks them up and the
//! generated `register_all()` forces each one exactly once, in a fixed order.

use crate::i18n::{I18nError, LocaleManager, Strings, Translation, TranslationMap};
use std::fmt;
use tracing::debug;

/// A named translation table declared as a `static`, registered on demand.
pub struct StringResource<T> {
    key: &'static str,
    translations: fn() -> TranslationMap<T>,
}

impl<T: Translation> StringResource<T> {
    /// Declare a resource. Nothing is registered until `force` or `register_into`.
    ///
    /// # Example
    /// ```ignore
    /// pub static GREETING: StringResource<&str> = StringResource::new("greeting", || {
    ///     TranslationMap::from([(LocaleCode::EN, "Hello"), (LocaleCode::SW, "Habari")])
    /// });
    /// ```
    pub const fn new(key: &'static str, translations: fn() -> TranslationMap<T>) -> Self {
        Self { key, translations }
    }

    /// The registry key this resource uses.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// A fresh copy of the declared translations.
    pub fn translations(&self) -> TranslationMap<T> {
        (self.translations)()
    }

    /// Register into the global `Strings` facade.
    ///
    /// Forcing twice fails with `DuplicateKey`, which is what keeps registration
    /// exactly-once per key.
    pub fn force(&self) -> Result<(), I18nError> {
        debug!("Forcing string resource '{}'", self.key);
        Strings::register(self.key, self.translations())
    }

    /// Register into an explicitly owned manager.
    pub fn register_into(&self, manager: &mut LocaleManager) -> Result<(), I18nError> {
        manager.register(self.key, self.translations())
    }

    /// Resolve against `manager`'s current locale.
    pub fn get_from<'m>(&self, manager: &'m LocaleManager) -> Result<&'m T, I18nError> {
        manager.get_strings(self.key)
    }
}

impl<T: Translation + Clone> StringResource<T> {
    /// Resolve against the global facade's current locale.
    pub fn get(&self) -> Result<T, I18nError> {
        Strings::get(self.key)
    }
}

impl<T> fmt::Debug for StringResource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringResource")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
