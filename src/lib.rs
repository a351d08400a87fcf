//! Locale-aware string resources.
//!
//! Two halves live in this crate:
//!
//! - [`i18n`]: the runtime side. A [`LocaleManager`] owns validated translation
//!   tables and resolves lookups against the active locale with fallback to the
//!   configured default locale. [`Strings`] is an optional process-wide facade
//!   over a single manager.
//! - [`codegen`]: the build-time side. It scans a source tree for files marked
//!   with [`generate_strings!`] and emits a manifest module whose
//!   `register_all()` forces every discovered [`StringResource`].
//!
//! # Example
//!
//! ```rust,ignore
//! use glossarist::{I18nConfiguration, LocaleCode, LocaleManager, StringResource, TranslationMap};
//!
//! glossarist::generate_strings!();
//!
//! pub static GREETING: StringResource<String> = StringResource::new("greeting", || {
//!     TranslationMap::from([
//!         (LocaleCode::EN, "Hello".to_string()),
//!         (LocaleCode::SW, "Habari".to_string()),
//!     ])
//! });
//!
//! let mut manager = LocaleManager::new(I18nConfiguration::new([LocaleCode::EN, LocaleCode::SW]))?;
//! GREETING.register_into(&mut manager)?;
//! assert_eq!(GREETING.get_from(&manager)?, "Hello");
//! ```

pub mod codegen;
pub mod config;
pub mod i18n;

pub use codegen::{CodegenError, DiscoveredDeclaration, GenerationOutcome};
pub use i18n::{
    Completeness, CustomLocale, DefaultTranslationValidator, FixedLocaleProvider, I18nConfiguration,
    I18nError, LocaleCode, LocaleManager, LocaleProvider, LocaleSupport, Notification,
    PlatformLocaleProvider, StandardLocale, StringResource, Strings, SubscriptionId, Translation,
    TranslationMap, TranslationValidator,
};

/// Marks a source file as declaring string resources.
///
/// The macro expands to nothing. The build-time scanner only collects
/// `StringResource` statics from files that invoke it at the top level.
#[macro_export]
macro_rules! generate_strings {
    () => {};
}
