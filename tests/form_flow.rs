//! End-to-end flow: configure locales, build tabs, prefill a form from a
//! record's translations, and read attributes through the resolver.

use std::sync::Arc;

use serde_json::{json, Value};
use translatable_forms::components::{Select, TextInput};
use translatable_forms::form::{FormData, FormField, PrefillAdapter, TranslatableTabs};
use translatable_forms::locale::LocaleProvider;
use translatable_forms::model::{AttributeResolver, TranslatedModel, TranslationRow};
use translatable_forms::settings::Settings;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .try_init();
}

fn post_fields() -> Vec<Box<dyn FormField>> {
    vec![
        Box::new(TextInput::make("name").label("Name")),
        Box::new(TextInput::make("body").label("Body").multiline()),
        Box::new(Select::make("category").option("news", "News")),
    ]
}

#[test]
fn test_build_prefill_and_resolve_flow() {
    init_tracing();

    let settings = Settings {
        locales: vec!["en".to_string(), "de".to_string()],
        default_locale: Some("de".to_string()),
    };
    let provider = LocaleProvider::from_settings(&settings).expect("provider from settings");

    // Build one tab per configured locale.
    let tabs = TranslatableTabs::new().fields(post_fields()).build(&provider);
    assert_eq!(tabs.len(), 2);
    assert_eq!(tabs[0].label(), "En");
    assert_eq!(tabs[1].label(), "De");

    let de_paths: Vec<&str> = tabs[1].fields().iter().map(|f| f.state_path()).collect();
    assert_eq!(de_paths, vec!["de.name", "de.body", "de.category"]);

    // A record with an English row only.
    let resolver = Arc::new(AttributeResolver::new(["name", "body"]));
    let mut record = TranslatedModel::new(Arc::clone(&resolver))
        .with_attribute("id", 42)
        .with_attribute("name", "Untranslated name")
        .with_translation(
            "en",
            TranslationRow::new()
                .with("name", "Hello post")
                .with("body", "Hello body"),
        );

    // Prefill: English values filled in, German slots null, base keys kept.
    let mut base = FormData::new();
    base.insert("category".to_string(), json!("news"));
    let data = PrefillAdapter::from_provider(&provider).prefill(base, &record);

    assert_eq!(data["category"], json!("news"));
    assert_eq!(data["en"]["name"], json!("Hello post"));
    assert_eq!(data["de"]["name"], Value::Null);
    assert_eq!(data["de"]["body"], Value::Null);

    // Resolver: current locale is the configured default ("de"), which has
    // no row, so the base value comes back; "en" resolves the translation.
    assert_eq!(
        record.get("name", provider.current()),
        Some(json!("Untranslated name"))
    );
    assert_eq!(
        record.get("name:en", provider.current()),
        Some(json!("Hello post"))
    );
    assert_eq!(record.get("id", provider.current()), Some(json!(42)));

    // Rebuilding from the same configuration never compounds prefixes.
    let rebuilt = TranslatableTabs::new().fields(post_fields()).build(&provider);
    let names: Vec<&str> = rebuilt[0].fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["en.name", "en.body", "en.category"]);
}
