//! The locale manager: owns configuration, the registry and the current locale.
//!
//! A `LocaleManager` is an ordinary value. Hosts that want a process-wide
//! instance can use the `Strings` facade, but nothing here depends on it.
//!
//! Registrations are expected to happen during a single-threaded startup phase.
//! After that the manager can be shared for reads; wrapping it in a lock is the
//! caller's job if registrations or locale changes can race with lookups.

use crate::i18n::{
    I18nConfiguration, I18nError, LocaleCode, Notification, Observable, ResourceRegistry,
    SubscriptionId, Translation, TranslationMap, Validation,
};
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Whether a newly selected locale is one the configuration supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSupport {
    Supported,
    Unsupported,
}

#[derive(Debug)]
pub struct LocaleManager {
    config: I18nConfiguration,
    registry: ResourceRegistry,
    current_locale: Observable<LocaleCode>,
}

impl LocaleManager {
    /// Create a manager with an empty registry.
    ///
    /// The current locale comes from the configured locale provider, mapped to a
    /// standard locale when it matches one exactly and to a custom locale otherwise.
    ///
    /// # Errors
    /// `InvalidLocaleCode` if the provider reports a code that is neither standard
    /// nor a valid custom code.
    pub fn new(config: I18nConfiguration) -> Result<Self, I18nError> {
        let current = LocaleCode::resolve(&config.locale_provider.current_locale())?;
        info!(
            "Initialized locale manager: current={}, default={}, supported={}",
            current,
            config.default_locale,
            config.supported_locales.len()
        );

        Ok(Self {
            config,
            registry: ResourceRegistry::new(),
            current_locale: Observable::new(current),
        })
    }

    /// Replace all state: configuration, registrations and current locale.
    ///
    /// Subscribers to the current locale are dropped along with the old state.
    /// On error the existing state is left untouched.
    pub fn initialize(&mut self, config: I18nConfiguration) -> Result<(), I18nError> {
        let fresh = Self::new(config)?;
        if !self.registry.is_empty() {
            warn!(
                "Re-initializing locale manager discards {} registered resources",
                self.registry.len()
            );
        }
        *self = fresh;
        Ok(())
    }

    /// The configuration this manager was created with.
    pub fn config(&self) -> &I18nConfiguration {
        &self.config
    }

    /// Read-only view of every registered resource.
    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Shorthand for `config().supported_locales`.
    pub fn supported_locales(&self) -> &BTreeSet<LocaleCode> {
        &self.config.supported_locales
    }

    /// Register a resource, validating it first when enforcement is enabled.
    ///
    /// # Errors
    /// `DuplicateKey`, any validation error, or `MissingDefaultLocale`.
    pub fn register<T: Translation>(
        &mut self,
        key: &str,
        translations: TranslationMap<T>,
    ) -> Result<(), I18nError> {
        let validation = self.config.enforce_translations.then(|| Validation {
            validator: self.config.validator.as_ref(),
            required_locales: &self.config.supported_locales,
        });

        self.registry
            .register(key, translations, &self.config.default_locale, validation)
    }

    /// Resolve `key` for the current locale.
    ///
    /// Holds no cache of its own: calling it again after a locale change gives the
    /// new locale's value. Pair with `subscribe` to know when to call again.
    pub fn get_strings<T: Translation>(&self, key: &str) -> Result<&T, I18nError> {
        self.registry.lookup(key, self.current_locale.get())
    }

    /// Resolve `key` for an explicit locale, ignoring the current one.
    pub fn get_strings_for_locale<T: Translation>(
        &self,
        key: &str,
        locale: &LocaleCode,
    ) -> Result<&T, I18nError> {
        self.registry.lookup(key, locale)
    }

    /// Make `locale` current.
    ///
    /// Unsupported locales are still applied (custom variants are a legitimate
    /// use); they produce a warning and `LocaleSupport::Unsupported`.
    /// Subscribers run before this returns.
    pub fn set_locale(&mut self, locale: LocaleCode) -> LocaleSupport {
        let (support, notification) = self.stage_locale(locale);
        notification.dispatch();
        support
    }

    /// Map `code` through the standard-else-custom rule, then `set_locale`.
    pub fn set_locale_code(&mut self, code: &str) -> Result<LocaleSupport, I18nError> {
        let (support, notification) = self.stage_locale_code(code)?;
        notification.dispatch();
        Ok(support)
    }

    /// Re-query the locale provider and make its locale current.
    pub fn reset_to_system_locale(&mut self) -> Result<LocaleSupport, I18nError> {
        let (support, notification) = self.stage_system_locale()?;
        notification.dispatch();
        Ok(support)
    }

    /// Like `set_locale`, but leaves running the subscribers to the caller.
    ///
    /// For hosts that keep the manager behind a lock: stage under the lock,
    /// release it, then `dispatch` the notification so subscribers can read
    /// the manager again.
    pub fn stage_locale(&mut self, locale: LocaleCode) -> (LocaleSupport, Notification<LocaleCode>) {
        let support = if self.config.is_supported(&locale) {
            LocaleSupport::Supported
        } else {
            warn!("Locale '{}' is not in supported locales", locale);
            LocaleSupport::Unsupported
        };

        (support, self.current_locale.replace(locale))
    }

    /// `stage_locale` for a raw code string.
    pub fn stage_locale_code(
        &mut self,
        code: &str,
    ) -> Result<(LocaleSupport, Notification<LocaleCode>), I18nError> {
        let locale = LocaleCode::resolve(code)?;
        Ok(self.stage_locale(locale))
    }

    /// `stage_locale` for the locale provider's current code.
    pub fn stage_system_locale(
        &mut self,
    ) -> Result<(LocaleSupport, Notification<LocaleCode>), I18nError> {
        let code = self.config.locale_provider.current_locale();
        self.stage_locale_code(&code)
    }

    /// The locale lookups currently resolve against.
    pub fn current_locale(&self) -> &LocaleCode {
        self.current_locale.get()
    }

    /// Call `callback` with the new locale on every `set_locale`.
    pub fn subscribe(
        &mut self,
        callback: impl Fn(&LocaleCode) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.current_locale.subscribe(callback)
    }

    /// Stop notifying `id`. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.current_locale.unsubscribe(id)
    }
}
