use crate::i18n::{
    DefaultTranslationValidator, LocaleCode, LocaleProvider, PlatformLocaleProvider,
    TranslationValidator,
};
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Configuration for a `LocaleManager`.
///
/// `supported_locales` is mandatory; every other option has a default:
/// the platform locale provider, `en` as default locale, the built-in
/// validator, and enforcement switched on.
#[derive(Clone)]
pub struct I18nConfiguration {
    pub locale_provider: Arc<dyn LocaleProvider>,
    pub default_locale: LocaleCode,
    pub supported_locales: BTreeSet<LocaleCode>,
    pub validator: Arc<dyn TranslationValidator>,
    pub enforce_translations: bool,
}

impl I18nConfiguration {
    /// Create a configuration with the platform locale provider, `en` as the
    /// default locale, the default validator and enforcement on.
    ///
    /// # Arguments
    /// * `supported_locales` - Locales every enforced registration must cover
    pub fn new(supported_locales: impl IntoIterator<Item = LocaleCode>) -> Self {
        Self {
            locale_provider: Arc::new(PlatformLocaleProvider),
            default_locale: LocaleCode::EN,
            supported_locales: supported_locales.into_iter().collect(),
            validator: Arc::new(DefaultTranslationValidator),
            enforce_translations: true,
        }
    }

    /// Replace the source of the system locale.
    pub fn with_locale_provider(mut self, provider: impl LocaleProvider + 'static) -> Self {
        self.locale_provider = Arc::new(provider);
        self
    }

    /// Locale every resource must provide and lookups fall back to.
    pub fn with_default_locale(mut self, locale: LocaleCode) -> Self {
        self.default_locale = locale;
        self
    }

    /// Replace the validator run by enforced registrations.
    pub fn with_validator(mut self, validator: impl TranslationValidator + 'static) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    /// Turn registration-time validation on or off.
    pub fn with_enforce_translations(mut self, enforce: bool) -> Self {
        self.enforce_translations = enforce;
        self
    }

    /// Check whether `locale` is one of the supported locales.
    pub fn is_supported(&self, locale: &LocaleCode) -> bool {
        self.supported_locales.contains(locale)
    }

    /// Load configuration from environment variables.
    ///
    /// - `GLOSSARIST_SUPPORTED_LOCALES` (required): comma-separated codes, e.g. `en,sw`
    /// - `GLOSSARIST_DEFAULT_LOCALE`: defaults to `en`
    /// - `GLOSSARIST_ENFORCE_TRANSLATIONS`: defaults to `true`
    pub fn from_env() -> Result<Self> {
        let supported = std::env::var("GLOSSARIST_SUPPORTED_LOCALES")
            .context("GLOSSARIST_SUPPORTED_LOCALES not set")?;
        let supported_locales = parse_locale_list(&supported)
            .context("GLOSSARIST_SUPPORTED_LOCALES is not a valid locale list")?;

        let default_locale = match std::env::var("GLOSSARIST_DEFAULT_LOCALE") {
            Ok(code) => LocaleCode::resolve(code.trim())
                .context("GLOSSARIST_DEFAULT_LOCALE is not a valid locale")?,
            Err(_) => LocaleCode::EN,
        };

        let enforce_translations = std::env::var("GLOSSARIST_ENFORCE_TRANSLATIONS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(true);

        Ok(Self::new(supported_locales)
            .with_default_locale(default_locale)
            .with_enforce_translations(enforce_translations))
    }
}

fn parse_locale_list(raw: &str) -> Result<Vec<LocaleCode>> {
    raw.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(|code| LocaleCode::resolve(code).map_err(anyhow::Error::from))
        .collect()
}

impl fmt::Debug for I18nConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18nConfiguration")
            .field("default_locale", &self.default_locale)
            .field("supported_locales", &self.supported_locales)
            .field("enforce_translations", &self.enforce_translations)
            .finish_non_exhaustive()
    }
}
