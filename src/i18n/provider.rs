//! Where the system locale comes from.

use regex::Regex;
use std::sync::OnceLock;

/// Supplies the platform's current language code (e.g., "en", "sw").
pub trait LocaleProvider: Send + Sync {
    fn current_locale(&self) -> String;
}

/// Language code used when the platform reports nothing usable.
const FALLBACK_LANGUAGE: &str = "en";

// Leading language subtag of a BCP 47 or POSIX locale ("en-US", "sw_KE.UTF-8", "fr@euro")
static LANGUAGE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Reads the locale from the operating system.
///
/// Region, encoding and modifier parts are dropped, so `en-US` and
/// `en_US.UTF-8` both yield `"en"`. Falls back to `"en"` if detection fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformLocaleProvider;

impl PlatformLocaleProvider {
    /// Reduce a platform locale string to its lowercase language code.
    pub fn language_code(raw: &str) -> Option<String> {
        let regex = LANGUAGE_REGEX.get_or_init(|| {
            Regex::new(r"^([A-Za-z]{2,8})(?:[-_.@].*)?$").expect("language regex is valid")
        });

        regex
            .captures(raw.trim())
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_lowercase())
    }
}

impl LocaleProvider for PlatformLocaleProvider {
    fn current_locale(&self) -> String {
        sys_locale::get_locale()
            .as_deref()
            .and_then(Self::language_code)
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
    }
}

/// Always reports the same code. Useful for headless hosts and tests.
#[derive(Debug, Clone)]
pub struct FixedLocaleProvider {
    code: String,
}

impl FixedLocaleProvider {
    /// Always report `code` as the system locale.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl LocaleProvider for FixedLocaleProvider {
    fn current_locale(&self) -> String {
        self.code.clone()
    }
}
