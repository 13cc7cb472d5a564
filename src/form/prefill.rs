//! Form Prefill Adapter
//!
//! Seeds form data with a record's per-locale translations before a form
//! is opened for editing.

use serde_json::{Map, Value};

use crate::locale::{Locale, LocaleProvider};
use crate::model::TranslatableRecord;

/// Form data keyed by state path
pub type FormData = Map<String, Value>;

/// Merges a record's translated values into initial form data
#[derive(Debug, Clone)]
pub struct PrefillAdapter {
    locales: Vec<Locale>,
}

impl PrefillAdapter {
    /// Create an adapter for an explicit locale list
    pub fn new<I, L>(locales: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Locale>,
    {
        Self {
            locales: locales.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an adapter for the provider's configured locales
    pub fn from_provider(provider: &LocaleProvider) -> Self {
        Self {
            locales: provider.all().to_vec(),
        }
    }

    /// Merge the record's translated values into `data`
    ///
    /// Adds one `{ locale: { attribute: value } }` entry per locale, in
    /// locale order. A missing translation row yields null slots for that
    /// locale. Keys other than the locale entries are left untouched; a
    /// pre-existing locale key is replaced.
    pub fn prefill<R>(&self, mut data: FormData, record: &R) -> FormData
    where
        R: TranslatableRecord + ?Sized,
    {
        let attributes = record.translated_attributes();

        for locale in &self.locales {
            let row = record.translate(locale);
            let mut values = Map::new();
            for attribute in &attributes {
                let value = row
                    .and_then(|row| row.get(attribute))
                    .cloned()
                    .unwrap_or(Value::Null);
                values.insert(attribute.clone(), value);
            }
            data.insert(locale.code().to_string(), Value::Object(values));
        }

        tracing::debug!(
            locales = self.locales.len(),
            attributes = attributes.len(),
            "prefilled translated form data"
        );

        data
    }
}
