//! Translation rows and the record/attribute protocols.

use ahash::AHashMap;
use serde_json::Value;

use crate::locale::Locale;

/// Per-(record, locale) bag of translated attribute values
///
/// Owned and persisted by the host's translation layer; this crate only
/// reads it. Values pass through as stored, without coercion.
#[derive(Debug, Clone, Default)]
pub struct TranslationRow {
    values: AHashMap<String, Value>,
}

impl TranslationRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute value (fluent, for row construction)
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(attribute, value);
        self
    }

    /// Set an attribute value
    pub fn set(&mut self, attribute: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(attribute.into(), value.into());
    }

    /// Get an attribute value
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.values.get(attribute)
    }
}

/// Read access to a record's per-locale translations
pub trait TranslatableRecord {
    /// Names of the attributes that vary by locale
    fn translated_attributes(&self) -> Vec<String>;

    /// The translation row for a locale, if any
    fn translate(&self, locale: &Locale) -> Option<&TranslationRow>;
}

/// The base attribute machinery of a model
///
/// `compute_attribute` is the host's value-computation path: it applies any
/// cast or mutator registered for the key before returning. `stage_attribute`
/// writes into the in-memory attribute storage only; persisted state is
/// never touched by this crate.
pub trait AttributeStore {
    /// Stage a value into the in-memory attribute storage
    fn stage_attribute(&mut self, key: &str, value: Value);

    /// Compute the value for a key through the cast/mutator pipeline
    fn compute_attribute(&self, key: &str) -> Option<Value>;

    /// Whether a mutator is registered for the key
    fn has_mutator(&self, key: &str) -> bool;
}
