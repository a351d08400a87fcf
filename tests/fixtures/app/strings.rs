glossarist::generate_strings!();

use glossarist::{LocaleCode, StringResource, Translation, TranslationMap};

#[derive(Debug, Clone, PartialEq)]
pub struct AppStrings {
    pub welcome: &'static str,
    pub action: &'static str,
}

impl Translation for AppStrings {}

pub static GREETING: StringResource<String> = StringResource::new("simple.string.translation", || {
    TranslationMap::from([
        (LocaleCode::EN, "Welcome to Glossarist!".to_string()),
        (LocaleCode::SW, "Karibu Glossarist!".to_string()),
    ])
});

pub static APP_STRINGS: StringResource<AppStrings> = StringResource::new("app.strings", || {
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
