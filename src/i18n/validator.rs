//! Translation completeness validation.
//!
//! Runs at registration time when enforcement is enabled. Incorrect translation
//! content is a defect, so the first problem found is returned as an error.

use crate::i18n::{Completeness, I18nError, LocaleCode, TranslationTable};
use std::collections::BTreeSet;
use tracing::debug;

/// Checks a translation table against the locales an application requires.
pub trait TranslationValidator: Send + Sync {
    /// Validate `translations` for the resource named `resource_key`.
    ///
    /// # Errors
    /// Implementations return the `I18nError` describing the first defect found.
    fn validate(
        &self,
        translations: &dyn TranslationTable,
        required_locales: &BTreeSet<LocaleCode>,
        resource_key: &str,
    ) -> Result<(), I18nError>;
}

/// Built-in validator.
///
/// Checks that:
/// - every required locale has a translation
/// - no translation is null
/// - scalar string translations are not blank
///
/// Structured payloads that report `Completeness::Unchecked` are passed through;
/// their field completeness is the payload type's own responsibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTranslationValidator;

impl TranslationValidator for DefaultTranslationValidator {
    fn validate(
        &self,
        translations: &dyn TranslationTable,
        required_locales: &BTreeSet<LocaleCode>,
        resource_key: &str,
    ) -> Result<(), I18nError> {
        let present: BTreeSet<&LocaleCode> = translations.locales().into_iter().collect();
        let missing: Vec<String> = required_locales
            .iter()
            .filter(|locale| !present.contains(locale))
            .map(|locale| locale.code().to_string())
            .collect();

        if !missing.is_empty() {
            return Err(I18nError::MissingLocales {
                key: resource_key.to_string(),
                missing,
            });
        }

        for (locale, completeness) in translations.entry_completeness() {
            match completeness {
                Completeness::Complete => {}
                Completeness::Null => {
                    return Err(I18nError::NullTranslation {
                        key: resource_key.to_string(),
                        locale: locale.code().to_string(),
                    })
                }
                Completeness::Blank => {
                    return Err(I18nError::BlankTranslation {
                        key: resource_key.to_string(),
                        locale: locale.code().to_string(),
                    })
                }
                Completeness::Unchecked => debug!(
                    "Skipping deep validation for '{}' in locale '{}'",
                    resource_key, locale
                ),
            }
        }

        Ok(())
    }
}
