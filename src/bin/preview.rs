//! Preview binary - registers the demo resources and prints them in every locale
//!
//! Usage:
//!   cargo run --bin preview
//!   cargo run --bin preview -- de     # also show the fallback for an extra locale
//!
//! Optional environment variables:
//! - GLOSSARIST_SUPPORTED_LOCALES (defaults to en,sw)
//! - GLOSSARIST_DEFAULT_LOCALE (defaults to en)
//! - GLOSSARIST_ENFORCE_TRANSLATIONS (defaults to true)

use anyhow::{Context, Result};
use glossarist::{
    I18nConfiguration, LocaleCode, LocaleManager, StringResource, Translation, TranslationMap,
};
use tracing::info;

#[derive(Debug, Clone)]
struct AppStrings {
    welcome: &'static str,
    action: &'static str,
}

impl Translation for AppStrings {}

static GREETING: StringResource<&'static str> = StringResource::new("simple.string.translation", || {
    TranslationMap::from([
        (LocaleCode::EN, "Welcome to Glossarist!"),
        (LocaleCode::SW, "Karibu Glossarist!"),
    ])
});

static APP_STRINGS: StringResource<AppStrings> = StringResource::new("app.strings", || {
    TranslationMap::from([
        (
            LocaleCode::EN,
            AppStrings {
                welcome: "Welcome",
                action: "Try",
            },
        ),
        (
            LocaleCode::SW,
            AppStrings {
                welcome: "Karibu",
                action: "Jaribu",
            },
        ),
    ])
});

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("glossarist=info".parse()?),
        )
        .init();

    let config = match std::env::var("GLOSSARIST_SUPPORTED_LOCALES") {
        Ok(_) => I18nConfiguration::from_env()?,
        Err(_) => I18nConfiguration::new([LocaleCode::EN, LocaleCode::SW]),
    };

    let mut manager = LocaleManager::new(config)?;
    GREETING
        .register_into(&mut manager)
        .context("Failed to register greeting")?;
    APP_STRINGS
        .register_into(&mut manager)
        .context("Failed to register app strings")?;

    manager.subscribe(|locale| info!("Locale changed to {}", locale));
    info!("System locale: {}", manager.current_locale());

    let mut locales: Vec<LocaleCode> = manager.supported_locales().iter().cloned().collect();
    for arg in std::env::args().skip(1) {
        locales.push(LocaleCode::resolve(&arg)?);
    }

    println!("\n{}", "=".repeat(60));
    for locale in locales {
        manager.set_locale(locale.clone());
        let greeting = GREETING.get_from(&manager)?;
        let app = APP_STRINGS.get_from(&manager)?;
        println!("[{}] {} | {} / {}", locale, greeting, app.welcome, app.action);
    }
    println!("{}\n", "=".repeat(60));

    manager.reset_to_system_locale()?;
    Ok(())
}
