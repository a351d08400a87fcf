//! Process-wide convenience facade over a single `LocaleManager`.
//!
//! Generated manifests and `StringResource::force` register through this
//! facade. Code that can pass a `LocaleManager` around should do so instead.

use crate::i18n::{
    I18nConfiguration, I18nError, LocaleCode, LocaleManager, LocaleSupport, SubscriptionId,
    Translation, TranslationMap,
};
use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

static MANAGER: RwLock<Option<LocaleManager>> = RwLock::new(None);

/// Global entry point. Every call before `Strings::initialize` fails with
/// `I18nError::UninitializedManager`.
pub struct Strings;

impl Strings {
    /// Create the global manager, replacing any previous one and all of its
    /// registrations.
    pub fn initialize(config: I18nConfiguration) -> Result<(), I18nError> {
        let mut slot = write();
        match slot.as_mut() {
            Some(manager) => manager.initialize(config),
            None => {
                *slot = Some(LocaleManager::new(config)?);
                Ok(())
            }
        }
    }

    /// `true` once `initialize` has succeeded.
    pub fn is_initialized() -> bool {
        read().is_some()
    }

    /// Register a resource with the global manager.
    ///
    /// # Errors
    /// `UninitializedManager`, or whatever `LocaleManager::register` returns.
    pub fn register<T: Translation>(
        key: &str,
        translations: TranslationMap<T>,
    ) -> Result<(), I18nError> {
        Self::with_manager_mut(|manager| manager.register(key, translations))?
    }

    /// Value of `key` for the current locale, cloned out of the registry.
    pub fn get<T: Translation + Clone>(key: &str) -> Result<T, I18nError> {
        Self::with_manager(|manager| manager.get_strings::<T>(key).cloned())?
    }

    /// Value of `key` for an explicit locale, ignoring the current one.
    pub fn get_for_locale<T: Translation + Clone>(
        key: &str,
        locale: &LocaleCode,
    ) -> Result<T, I18nError> {
        Self::with_manager(|manager| manager.get_strings_for_locale::<T>(key, locale).cloned())?
    }

    /// Make `locale` current, then notify subscribers outside the lock.
    pub fn set_locale(locale: LocaleCode) -> Result<LocaleSupport, I18nError> {
        let (support, notification) =
            Self::with_manager_mut(|manager| manager.stage_locale(locale))?;
        notification.dispatch();
        Ok(support)
    }

    /// `set_locale` for a raw code string.
    pub fn set_locale_code(code: &str) -> Result<LocaleSupport, I18nError> {
        let (support, notification) =
            Self::with_manager_mut(|manager| manager.stage_locale_code(code))??;
        notification.dispatch();
        Ok(support)
    }

    /// Re-query the locale provider and make its locale current.
    pub fn reset_to_system_locale() -> Result<LocaleSupport, I18nError> {
        let (support, notification) =
            Self::with_manager_mut(LocaleManager::stage_system_locale)??;
        notification.dispatch();
        Ok(support)
    }

    /// The locale lookups currently resolve against.
    pub fn current_locale() -> Result<LocaleCode, I18nError> {
        Self::with_manager(|manager| manager.current_locale().clone())
    }

    /// The configured supported locales.
    pub fn supported_locales() -> Result<BTreeSet<LocaleCode>, I18nError> {
        Self::with_manager(|manager| manager.supported_locales().clone())
    }

    /// Observe locale changes.
    ///
    /// The callback runs after the facade's lock is released, so it may call
    /// back into `Strings`, e.g. to re-run `Strings::get` for the new locale.
    pub fn subscribe(
        callback: impl Fn(&LocaleCode) + Send + Sync + 'static,
    ) -> Result<SubscriptionId, I18nError> {
        Self::with_manager_mut(|manager| manager.subscribe(callback))
    }

    /// Stop notifying `id`.
    ///
    /// # Returns
    /// `Ok(false)` if `id` was not subscribed.
    pub fn unsubscribe(id: SubscriptionId) -> Result<bool, I18nError> {
        Self::with_manager_mut(|manager| manager.unsubscribe(id))
    }

    /// Run `f` against the global manager under a read lock.
    pub fn with_manager<R>(f: impl FnOnce(&LocaleManager) -> R) -> Result<R, I18nError> {
        let slot = read();
        let manager = slot.as_ref().ok_or(I18nError::UninitializedManager)?;
        Ok(f(manager))
    }

    /// Run `f` against the global manager under a write lock.
    pub fn with_manager_mut<R>(f: impl FnOnce(&mut LocaleManager) -> R) -> Result<R, I18nError> {
        let mut slot = write();
        let manager = slot.as_mut().ok_or(I18nError::UninitializedManager)?;
        Ok(f(manager))
    }
}

// A panic inside a caller's closure must not brick the facade for the rest of the process.
fn read() -> RwLockReadGuard<'static, Option<LocaleManager>> {
    MANAGER.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Option<LocaleManager>> {
    MANAGER.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
pub(crate) fn clear() {
    *write() = None;
}
