//! Translatable Tabs - Locale Tab Builder
//!
//! Produces one tab per locale, each holding a renamed clone of the
//! configured field set. Tabs are built fresh on every call; the builder
//! holds only the original configuration, so rebuilding never compounds
//! locale prefixes.

use crate::form::field::{Deferred, FormField};
use crate::locale::{Locale, LocaleProvider};

/// A labeled container grouping form fields for one locale
#[derive(Clone, Default)]
pub struct Tab {
    label: String,
    schema: Vec<Box<dyn FormField>>,
}

impl Tab {
    /// Create an empty tab with a caption
    pub fn make(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            schema: Vec::new(),
        }
    }

    /// Set the tab's field schema
    pub fn schema(mut self, fields: Vec<Box<dyn FormField>>) -> Self {
        self.schema = fields;
        self
    }

    /// Get the caption
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the fields
    pub fn fields(&self) -> &[Box<dyn FormField>] {
        &self.schema
    }
}

impl std::fmt::Debug for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tab")
            .field("label", &self.label)
            .field("fields", &self.schema.len())
            .finish()
    }
}

/// Builder for per-locale form tabs
///
/// Fields and locales may be fixed values or deferred evaluators resolved
/// at build time. Without an explicit locale list the provider's configured
/// locales are used, read fresh on every build.
#[derive(Debug, Default)]
pub struct TranslatableTabs {
    fields: Option<Deferred<Vec<Box<dyn FormField>>>>,
    locales: Option<Deferred<Vec<Locale>>>,
}

impl TranslatableTabs {
    /// Create an unconfigured builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field definitions to localize
    pub fn fields(mut self, fields: Vec<Box<dyn FormField>>) -> Self {
        self.fields = Some(Deferred::Value(fields));
        self
    }

    /// Set a field evaluator invoked on every build
    pub fn fields_with(
        mut self,
        fields: impl Fn() -> Vec<Box<dyn FormField>> + Send + Sync + 'static,
    ) -> Self {
        self.fields = Some(Deferred::lazy(fields));
        self
    }

    /// Set an explicit locale list, overriding the provider
    pub fn locales<I, L>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Locale>,
    {
        let locales: Vec<Locale> = locales.into_iter().map(Into::into).collect();
        self.locales = Some(Deferred::Value(locales));
        self
    }

    /// Set a locale evaluator invoked on every build
    pub fn locales_with(
        mut self,
        locales: impl Fn() -> Vec<Locale> + Send + Sync + 'static,
    ) -> Self {
        self.locales = Some(Deferred::lazy(locales));
        self
    }

    /// Build one tab per locale, in locale-list order
    ///
    /// Every field is cloned from the original set before renaming, and the
    /// clone's name and state path both become `"{locale}.{original_name}"`.
    /// An unset or empty field list yields tabs with empty schemas.
    pub fn build(&self, provider: &LocaleProvider) -> Vec<Tab> {
        let locales = match &self.locales {
            Some(locales) => locales.evaluate(),
            None => provider.all().to_vec(),
        };

        let tabs: Vec<Tab> = locales.iter().map(|locale| self.make_tab(locale)).collect();

        tracing::debug!(tabs = tabs.len(), "built translatable tabs");

        tabs
    }

    fn make_tab(&self, locale: &Locale) -> Tab {
        Tab::make(locale.label()).schema(self.make_fields(locale))
    }

    fn make_fields(&self, locale: &Locale) -> Vec<Box<dyn FormField>> {
        let Some(fields) = &self.fields else {
            return Vec::new();
        };

        fields
            .evaluate()
            .into_iter()
            .map(|mut field| {
                let scoped = format!("{}.{}", locale.code(), field.name());
                field.set_name(scoped.clone());
                field.set_state_path(scoped);
                field
            })
            .collect()
    }
}
