//! Translated Attribute Resolver
//!
//! Intercepts attribute reads so translatable attributes resolve through
//! the active locale's translation, falling back to the base value. All
//! other keys go to the store's base resolution path untouched.

use std::sync::Arc;

use ahash::AHashMap;
use serde_json::Value;

use crate::helpers::split_attribute_locale;
use crate::locale::Locale;
use crate::model::{AttributeStore, TranslatableRecord, TranslationRow};

/// Resolves attribute reads for one model type
///
/// Holds the static set of translatable attribute names; dispatch is a set
/// lookup, not runtime reflection.
#[derive(Debug, Clone, Default)]
pub struct AttributeResolver {
    translatable: Vec<String>,
}

impl AttributeResolver {
    /// Create a resolver for a set of translatable attribute names
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            translatable: attributes.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether an attribute resolves through translations
    pub fn is_translatable(&self, attribute: &str) -> bool {
        self.translatable.iter().any(|a| a == attribute)
    }

    /// The translatable attribute names, in registration order
    pub fn attributes(&self) -> &[String] {
        &self.translatable
    }

    /// Resolve an attribute read
    ///
    /// `key` may carry an explicit locale suffix ("title:fr"); otherwise
    /// `current` applies. A translatable attribute without a translation for
    /// the effective locale falls back to the plain stored value. When the
    /// store has a mutator for the attribute, the translated raw value is
    /// staged into base storage first and the base computation path produces
    /// the result, so host casts and mutators apply to translated values
    /// exactly as to native ones.
    pub fn resolve<M>(&self, store: &mut M, key: &str, current: &Locale) -> Option<Value>
    where
        M: AttributeStore + TranslatableRecord + ?Sized,
    {
        if key.is_empty() {
            return store.compute_attribute(key);
        }

        let (attribute, explicit) = split_attribute_locale(key);

        if !self.is_translatable(attribute) {
            return store.compute_attribute(key);
        }

        let locale = explicit.map(Locale::from).unwrap_or_else(|| current.clone());

        let translated = store
            .translate(&locale)
            .and_then(|row| row.get(attribute))
            .cloned();

        let Some(translated) = translated else {
            tracing::trace!(attribute, locale = %locale, "no translation, using base value");
            return store.compute_attribute(attribute);
        };

        if store.has_mutator(attribute) {
            // Stage first so the mutator pipeline sees the translated value.
            store.stage_attribute(attribute, translated);
            return store.compute_attribute(attribute);
        }

        Some(translated)
    }
}

/// Value transform applied by the base computation path
pub type Mutator = Box<dyn Fn(&Value) -> Value + Send + Sync>;

/// In-memory model with per-locale translations
///
/// Reference implementation of [`TranslatableRecord`] and
/// [`AttributeStore`], with the resolver injected at construction. Hosts
/// with their own ORM implement the two traits instead.
pub struct TranslatedModel {
    attributes: AHashMap<String, Value>,
    translations: AHashMap<String, TranslationRow>,
    mutators: AHashMap<String, Mutator>,
    resolver: Arc<AttributeResolver>,
}

impl TranslatedModel {
    /// Create an empty model resolving through `resolver`
    pub fn new(resolver: Arc<AttributeResolver>) -> Self {
        Self {
            attributes: AHashMap::new(),
            translations: AHashMap::new(),
            mutators: AHashMap::new(),
            resolver,
        }
    }

    /// Set a base attribute value (fluent)
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set a locale's translation row (fluent)
    pub fn with_translation(mut self, locale: impl Into<Locale>, row: TranslationRow) -> Self {
        self.translations.insert(locale.into().code().to_string(), row);
        self
    }

    /// Register a mutator for an attribute (fluent)
    pub fn with_mutator(
        mut self,
        key: impl Into<String>,
        mutator: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.mutators.insert(key.into(), Box::new(mutator));
        self
    }

    /// Read an attribute through the resolver
    pub fn get(&mut self, key: &str, current: &Locale) -> Option<Value> {
        let resolver = Arc::clone(&self.resolver);
        resolver.resolve(self, key, current)
    }
}

impl TranslatableRecord for TranslatedModel {
    fn translated_attributes(&self) -> Vec<String> {
        self.resolver.attributes().to_vec()
    }

    fn translate(&self, locale: &Locale) -> Option<&TranslationRow> {
        self.translations.get(locale.code())
    }
}

impl AttributeStore for TranslatedModel {
    fn stage_attribute(&mut self, key: &str, value: Value) {
        self.attributes.insert(key.to_string(), value);
    }

    fn compute_attribute(&self, key: &str) -> Option<Value> {
        let raw = self.attributes.get(key)?;
        match self.mutators.get(key) {
            Some(mutator) => Some(mutator(raw)),
            None => Some(raw.clone()),
        }
    }

    fn has_mutator(&self, key: &str) -> bool {
        self.mutators.contains_key(key)
    }
}

impl std::fmt::Debug for TranslatedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatedModel")
            .field("attributes", &self.attributes)
            .field("translations", &self.translations)
            .field("mutators", &self.mutators.len())
            .finish()
    }
}
