//! Internationalization (i18n) runtime.
//!
//! This module owns everything needed to declare, validate and resolve
//! translated content at runtime.
//!
//! # Architecture
//!
//! - `locale`: `LocaleCode`, the identity of a language variant (standard or custom)
//! - `translation`: `TranslationMap` tables and the `Translation` payload capability
//! - `validator`: translation completeness checks run at registration time
//! - `provider`: where the system locale comes from
//! - `config`: `I18nConfiguration`, the sole input to manager initialization
//! - `registry`: the key → translation table store with fallback resolution
//! - `observable`: the subscribable current-locale cell
//! - `manager`: `LocaleManager`, the explicitly owned i18n context
//! - `strings`: `Strings`, an optional process-wide facade over one manager
//! - `resource`: `StringResource`, the declaration type the codegen scanner looks for
//! - `remote`: the async seam for fetching translations from elsewhere
//!
//! # Example
//!
//! ```rust,ignore
//! use glossarist::i18n::{I18nConfiguration, LocaleCode, LocaleManager, TranslationMap};
//!
//! let mut manager = LocaleManager::new(I18nConfiguration::new([LocaleCode::EN, LocaleCode::SW]))?;
//! manager.register(
//!     "greeting",
//!     TranslationMap::from([(LocaleCode::EN, "Hello"), (LocaleCode::SW, "Habari")]),
//! )?;
//!
//! // French is not in the table, so the default locale answers.
//! assert_eq!(*manager.get_strings_for_locale::<&str>("greeting", &LocaleCode::FR)?, "Hello");
//! ```

mod config;
mod error;
mod locale;
mod manager;
mod observable;
mod provider;
mod registry;
mod remote;
mod resource;
mod strings;
mod translation;
mod validator;

pub use config::I18nConfiguration;
pub use error::I18nError;
pub use locale::{CustomLocale, LocaleCode, StandardLocale};
pub use manager::{LocaleManager, LocaleSupport};
pub use observable::{Notification, Observable, SubscriptionId};
pub use provider::{FixedLocaleProvider, LocaleProvider, PlatformLocaleProvider};
pub use registry::{RegistryEntry, ResourceRegistry, Validation};
pub use remote::{parse_remote_bundle, MockRemoteTranslationsProvider, RemoteTranslationsProvider};
pub use resource::StringResource;
pub use strings::Strings;
pub use translation::{Completeness, Translation, TranslationMap, TranslationTable};
pub use validator::{DefaultTranslationValidator, TranslationValidator};
