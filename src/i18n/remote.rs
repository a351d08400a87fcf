//! Seam for fetching translation bundles from outside the binary.
//!
//! Nothing in the registry or lookup path awaits a remote provider. Hosts that
//! want remote content fetch a bundle, decode it, and register from the result
//! during their own startup.

use crate::i18n::{I18nError, LocaleCode};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{info, warn};

#[async_trait]
pub trait RemoteTranslationsProvider: Send + Sync {
    /// Fetch the bundle for `locale` as a JSON document, or `None` if unavailable.
    async fn fetch(&self, locale: &LocaleCode) -> Option<String>;
}

/// Decode a bundle: a JSON object mapping resource key to payload.
pub fn parse_remote_bundle(text: &str) -> Result<BTreeMap<String, Value>, I18nError> {
    Ok(serde_json::from_str(text)?)
}

/// Simulated provider for development and tests. Only French has a bundle.
#[derive(Debug, Clone)]
pub struct MockRemoteTranslationsProvider {
    latency: Duration,
}

impl MockRemoteTranslationsProvider {
    /// Create a mock that waits `latency` before every response.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for MockRemoteTranslationsProvider {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl RemoteTranslationsProvider for MockRemoteTranslationsProvider {
    async fn fetch(&self, locale: &LocaleCode) -> Option<String> {
        info!("Fetching translations for {}...", locale);
        tokio::time::sleep(self.latency).await;

        if locale.code().starts_with("fr") {
            Some(FR_BUNDLE_JSON.to_string())
        } else {
            warn!("No mock bundle for locale: {}", locale);
            None
        }
    }
}

const FR_BUNDLE_JSON: &str = r#"{
  "advanced.string.example": {
    "hello": "Bonjour",
    "welcome": "Bienvenue à ",
    "subtitle": "Vérifions votre identité"
  },
  "simple.string.translation": "Bienvenue sur Glossarist !"
}"#;
