//! Integration tests for glossarist
//!
//! These tests drive the public API end to end: configuration, registration,
//! lookups with fallback, locale switching, and the scan + generate pass over
//! a scratch source tree.

use glossarist::codegen::{self, GenerationOutcome, ManifestGenerator, SymbolScanner};
use glossarist::config::CodegenConfig;
use glossarist::{
    FixedLocaleProvider, I18nConfiguration, I18nError, LocaleCode, LocaleManager, LocaleSupport,
    TranslationMap,
};
use proptest::prelude::*;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

// ==================== Test Helpers ====================

fn config() -> I18nConfiguration {
    I18nConfiguration::new([LocaleCode::EN, LocaleCode::SW])
        .with_locale_provider(FixedLocaleProvider::new("en"))
}

fn greeting() -> TranslationMap<String> {
    TranslationMap::from([
        (LocaleCode::EN, "Hello".to_string()),
        (LocaleCode::SW, "Habari".to_string()),
    ])
}

/// In-memory sink for `tracing` output.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

const MARKED_STRINGS: &str = r#"
glossarist::generate_strings!();

use glossarist::{LocaleCode, StringResource, TranslationMap};

pub static GREETING: StringResource<&str> = StringResource::new("greeting", || {
    TranslationMap::from([(LocaleCode::EN, "Hello"), (LocaleCode::SW, "Habari")])
});

pub static FAREWELL: StringResource<&str> = StringResource::new("farewell", || {
    TranslationMap::from([(LocaleCode::EN, "Goodbye"), (LocaleCode::SW, "Kwaheri")])
});
"#;

const UNMARKED_SOURCE: &str = r#"
pub fn helper() -> u32 {
    42
}
"#;

const CRATE_ROOT: &str = "pub mod strings;\nmod util;\n";

fn write_tree(root: &Path) {
    fs::write(root.join("lib.rs"), CRATE_ROOT).unwrap();
    fs::write(root.join("strings.rs"), MARKED_STRINGS).unwrap();
    fs::write(root.join("util.rs"), UNMARKED_SOURCE).unwrap();
}

// ==================== Registry Scenarios ====================

#[test]
fn test_lookup_falls_back_to_default_locale() {
    let mut manager = LocaleManager::new(config()).unwrap();
    manager.register("greeting", greeting()).unwrap();

    let value = manager
        .get_strings_for_locale::<String>("greeting", &LocaleCode::FR)
        .unwrap();
    assert_eq!(value, "Hello");
}

#[test]
fn test_duplicate_registration_keeps_first() {
    let mut manager = LocaleManager::new(config()).unwrap();
    manager.register("greeting", greeting()).unwrap();

    let second = TranslationMap::from([
        (LocaleCode::EN, "Hi".to_string()),
        (LocaleCode::SW, "Mambo".to_string()),
    ]);
    let err = manager.register("greeting", second).unwrap_err();

    assert!(matches!(err, I18nError::DuplicateKey { .. }));
    assert_eq!(manager.get_strings::<String>("greeting").unwrap(), "Hello");
}

#[test]
fn test_enforced_registration_names_missing_locale() {
    let mut manager = LocaleManager::new(config()).unwrap();
    let err = manager
        .register("x", TranslationMap::from([(LocaleCode::EN, "Hi")]))
        .unwrap_err();

    match err {
        I18nError::MissingLocales { key, missing } => {
            assert_eq!(key, "x");
            assert_eq!(missing, vec!["sw".to_string()]);
        }
        other => panic!("Expected MissingLocales, got {:?}", other),
    }
}

#[test]
fn test_unenforced_registration_accepts_incomplete_table() {
    let mut manager = LocaleManager::new(config().with_enforce_translations(false)).unwrap();
    manager
        .register("x", TranslationMap::from([(LocaleCode::EN, "Hi")]))
        .expect("Should register");
    manager.set_locale(LocaleCode::SW);
    assert_eq!(*manager.get_strings::<&str>("x").unwrap(), "Hi");
}

#[test]
fn test_missing_default_locale_fails_before_lookup() {
    let mut manager = LocaleManager::new(
        config()
            .with_default_locale(LocaleCode::FR)
            .with_enforce_translations(false),
    )
    .unwrap();

    let err = manager.register("greeting", greeting()).unwrap_err();
    assert!(matches!(err, I18nError::MissingDefaultLocale { .. }));
    assert!(matches!(
        manager.get_strings::<String>("greeting"),
        Err(I18nError::UnregisteredResource { .. })
    ));
}

// ==================== Locale Switching Scenarios ====================

#[test]
fn test_set_unsupported_locale_warns_and_applies() {
    let mut manager = LocaleManager::new(config()).unwrap();

    let (support, logs) = capture_logs(|| manager.set_locale_code("de"));

    assert_eq!(support.unwrap(), LocaleSupport::Unsupported);
    assert_eq!(manager.current_locale(), &LocaleCode::custom("de").unwrap());
    assert!(!manager.current_locale().is_standard());
    assert!(logs.contains("WARN"));
    assert!(logs.contains("'de' is not in supported locales"));
}

#[test]
fn test_set_supported_locale_does_not_warn() {
    let mut manager = LocaleManager::new(config()).unwrap();
    let (support, logs) = capture_logs(|| manager.set_locale(LocaleCode::SW));

    assert_eq!(support, LocaleSupport::Supported);
    assert!(!logs.contains("WARN"));
}

#[test]
fn test_reset_to_system_locale_uses_provider() {
    let mut manager = LocaleManager::new(
        config().with_locale_provider(FixedLocaleProvider::new("en-slang")),
    )
    .unwrap();
    manager.set_locale(LocaleCode::SW);

    let (support, logs) = capture_logs(|| manager.reset_to_system_locale());

    assert_eq!(support.unwrap(), LocaleSupport::Unsupported);
    assert_eq!(manager.current_locale().code(), "en-slang");
    assert!(logs.contains("'en-slang' is not in supported locales"));
}

#[test]
fn test_observer_recomputes_after_locale_change() {
    let mut manager = LocaleManager::new(config()).unwrap();
    manager.register("greeting", greeting()).unwrap();

    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = changes.clone();
    manager.subscribe(move |locale| sink.lock().unwrap().push(locale.clone()));

    manager.set_locale(LocaleCode::SW);
    let observed = changes.lock().unwrap().last().cloned().unwrap();
    let rendered = manager
        .get_strings_for_locale::<String>("greeting", &observed)
        .unwrap();
    assert_eq!(rendered, "Habari");
    assert_eq!(manager.get_strings::<String>("greeting").unwrap(), "Habari");
}

// ==================== Codegen Scenarios ====================

#[test]
fn test_scan_two_files_then_generate() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_tree(temp_dir.path());

    let found = SymbolScanner::new().scan_dir(temp_dir.path()).unwrap();
    let identifiers: Vec<_> = found.iter().map(|d| d.identifier.as_str()).collect();
    assert_eq!(
        identifiers,
        vec!["crate::strings::GREETING", "crate::strings::FAREWELL"]
    );

    let manifest = temp_dir.path().join("generated_strings.rs");
    let outcome = ManifestGenerator::new().write(&found, &manifest).unwrap();
    assert!(matches!(outcome, GenerationOutcome::Written { resources: 2, .. }));

    let source = fs::read_to_string(&manifest).unwrap();
    assert!(source.contains("crate::strings::GREETING.force()?;"));
    assert!(source.contains("crate::strings::FAREWELL.force()?;"));
    assert_eq!(source.matches("pub fn register_all()").count(), 1);
}

#[test]
fn test_tree_without_markers_generates_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let src = temp_dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("lib.rs"), UNMARKED_SOURCE).unwrap();

    let manifest = temp_dir.path().join("out/generated_strings.rs");
    let outcome = codegen::run(&CodegenConfig::new(&src, &manifest)).unwrap();

    assert_eq!(outcome, GenerationOutcome::Skipped);
    assert!(!manifest.exists());
}

#[test]
fn test_binaries_and_orphans_stay_out_of_manifest() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let src = temp_dir.path().join("src");
    fs::create_dir_all(src.join("bin")).unwrap();
    write_tree(&src);
    fs::write(src.join("bin/tool.rs"), MARKED_STRINGS).unwrap();
    fs::write(src.join("orphan.rs"), MARKED_STRINGS).unwrap();

    let manifest = temp_dir.path().join("generated_strings.rs");
    let (outcome, logs) = capture_logs(|| codegen::run(&CodegenConfig::new(&src, &manifest)));

    assert!(matches!(outcome.unwrap(), GenerationOutcome::Written { resources: 2, .. }));
    let source = fs::read_to_string(&manifest).unwrap();
    assert!(source.contains("crate::strings::GREETING.force()?;"));
    assert!(!source.contains("crate::bin::"));
    assert!(!source.contains("crate::orphan::"));
    assert!(logs.contains("orphan.rs invokes generate_strings!()"));
}

#[test]
fn test_removing_last_resource_deletes_manifest() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let src = temp_dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    write_tree(&src);

    let manifest = temp_dir.path().join("out/generated_strings.rs");
    let config = CodegenConfig::new(&src, &manifest);
    codegen::run(&config).unwrap();
    assert!(manifest.exists());

    fs::write(src.join("strings.rs"), UNMARKED_SOURCE).unwrap();
    let outcome = codegen::run(&config).unwrap();

    assert_eq!(
        outcome,
        GenerationOutcome::Removed {
            path: manifest.clone()
        }
    );
    assert!(!manifest.exists());
}

#[test]
fn test_rescan_is_reproducible() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let src = temp_dir.path().join("src");
    fs::create_dir_all(src.join("screens")).unwrap();
    write_tree(&src);
    fs::write(src.join("lib.rs"), format!("{}pub mod screens;\n", CRATE_ROOT)).unwrap();
    fs::write(src.join("screens/mod.rs"), format!("{}\npub mod home;\n", MARKED_STRINGS)).unwrap();
    fs::write(src.join("screens/home.rs"), MARKED_STRINGS).unwrap();

    let first_scan = SymbolScanner::new().scan_dir(&src).unwrap();
    let second_scan = SymbolScanner::new().scan_dir(&src).unwrap();
    assert_eq!(first_scan, second_scan);

    let first = ManifestGenerator::new().render(&first_scan).unwrap();
    let second = ManifestGenerator::new().render(&second_scan).unwrap();
    assert_eq!(first, second);

    let manifest = temp_dir.path().join("generated_strings.rs");
    let config = CodegenConfig::new(&src, &manifest);
    assert!(matches!(
        codegen::run(&config).unwrap(),
        GenerationOutcome::Written { resources: 6, .. }
    ));
    assert!(matches!(
        codegen::run(&config).unwrap(),
        GenerationOutcome::Unchanged { resources: 6, .. }
    ));
}

#[test]
fn test_parse_failure_keeps_previous_manifest() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let src = temp_dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    write_tree(&src);

    let manifest = temp_dir.path().join("generated_strings.rs");
    let config = CodegenConfig::new(&src, &manifest);
    codegen::run(&config).unwrap();
    let before = fs::read_to_string(&manifest).unwrap();

    fs::write(src.join("lib.rs"), format!("{}mod broken;\n", CRATE_ROOT)).unwrap();
    fs::write(src.join("broken.rs"), "glossarist::generate_strings!(); pub static = ;").unwrap();
    let err = codegen::run(&config).unwrap_err();

    assert!(matches!(err, glossarist::CodegenError::Parse { .. }));
    assert_eq!(fs::read_to_string(&manifest).unwrap(), before);
}

// ==================== Property Tests ====================

fn locale_pool() -> Vec<LocaleCode> {
    ["en", "sw", "fr", "de", "pt", "en-slang"]
        .into_iter()
        .map(|code| LocaleCode::resolve(code).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn prop_lookup_is_exact_or_default(
        present in prop::sample::subsequence(locale_pool(), 0..=6),
        requested in prop::sample::select(locale_pool()),
    ) {
        let mut translations: TranslationMap<String> = present
            .iter()
            .map(|locale| (locale.clone(), format!("text-{}", locale)))
            .collect();
        translations.insert(LocaleCode::EN, "text-en".to_string());

        let mut manager = LocaleManager::new(config().with_enforce_translations(false)).unwrap();
        manager.register("k", translations.clone()).unwrap();

        let value = manager.get_strings_for_locale::<String>("k", &requested).unwrap();
        let expected = translations
            .get(&requested)
            .or_else(|| translations.get(&LocaleCode::EN))
            .unwrap();
        prop_assert_eq!(value, expected);
    }

    #[test]
    fn prop_custom_codes_respect_length_bounds(code in "[a-z-]{0,14}") {
        let result = LocaleCode::custom(code.clone());
        let len = code.chars().count();
        prop_assert_eq!(result.is_ok(), (2..=10).contains(&len) && !code.trim().is_empty());
    }
}
