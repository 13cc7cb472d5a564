//! Locale - Locale Codes and the Locale Provider
//!
//! The provider is the process-wide registry of configured locales. It is
//! injected by reference wherever a locale list is needed, so callers can
//! swap it out per request or per test.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::helpers::ucfirst;
use crate::settings::Settings;

/// Locale code used when neither configuration nor the system reports one
pub const DEFAULT_LOCALE: &str = "en";

/// A language/region identifier under which a translatable attribute may
/// have a distinct value (e.g. "en", "de")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from a code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the locale code
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Get the tab caption for this locale ("en" -> "En")
    pub fn label(&self) -> String {
        ucfirst(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered registry of configured locales plus the current (active) locale
#[derive(Debug, Clone)]
pub struct LocaleProvider {
    /// Configured locales, in configuration order
    locales: Vec<Locale>,
    /// Currently active locale
    current: Locale,
}

impl LocaleProvider {
    /// Create a provider from an explicit, ordered locale list
    ///
    /// The first locale becomes the current one. An empty list is a
    /// configuration error.
    pub fn new<I, L>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<Locale>,
    {
        let locales: Vec<Locale> = codes.into_iter().map(Into::into).collect();
        let Some(first) = locales.first() else {
            return Err(Error::Invalid {
                message: "no locales configured".to_string(),
            });
        };
        let current = first.clone();
        Ok(Self { locales, current })
    }

    /// Create a provider from plugin settings
    ///
    /// Falls back to system detection when no locales are configured. A
    /// configured default locale becomes the current one when it is in the
    /// list.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        if settings.locales.is_empty() {
            return Ok(Self::detect());
        }

        let mut provider = Self::new(settings.locales.iter().cloned())?;
        if let Some(default) = &settings.default_locale {
            provider.set_current(Locale::new(default.clone()))?;
        }
        Ok(provider)
    }

    /// Create a single-locale provider from the system locale
    ///
    /// Uses the primary language subtag of the user's locale, falling back
    /// to [`DEFAULT_LOCALE`] when nothing is reported.
    pub fn detect() -> Self {
        let system = locale_config::Locale::current().to_string();
        // The system locale may be a comma-separated range list ("en-US,de").
        let code = system
            .split(',')
            .next()
            .and_then(|tag| tag.split('-').next())
            .filter(|code| !code.is_empty())
            .unwrap_or(DEFAULT_LOCALE)
            .to_string();

        tracing::debug!(locale = %code, "detected system locale");

        let current = Locale::new(code);
        Self {
            locales: vec![current.clone()],
            current,
        }
    }

    /// Get the ordered list of configured locales
    pub fn all(&self) -> &[Locale] {
        &self.locales
    }

    /// Get the currently active locale
    pub fn current(&self) -> &Locale {
        &self.current
    }

    /// Set the currently active locale
    ///
    /// The locale must be one of the configured locales.
    pub fn set_current(&mut self, locale: Locale) -> Result<()> {
        if !self.locales.contains(&locale) {
            return Err(Error::Invalid {
                message: format!("locale '{locale}' is not configured"),
            });
        }
        self.current = locale;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_label() {
        assert_eq!(Locale::new("en").label(), "En");
        assert_eq!(Locale::new("de").label(), "De");
    }

    #[test]
    fn test_provider_preserves_order() {
        let provider = LocaleProvider::new(["en", "de", "fr"]).expect("provider");
        let codes: Vec<&str> = provider.all().iter().map(Locale::code).collect();
        assert_eq!(codes, vec!["en", "de", "fr"]);
        assert_eq!(provider.current().code(), "en");
    }

    #[test]
    fn test_provider_rejects_empty_list() {
        let result = LocaleProvider::new(Vec::<String>::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_set_current_unknown_locale() {
        let mut provider = LocaleProvider::new(["en", "de"]).expect("provider");
        assert!(provider.set_current(Locale::new("fr")).is_err());
        assert_eq!(provider.current().code(), "en");
    }

    #[test]
    fn test_from_settings_with_default_locale() {
        let settings = Settings {
            locales: vec!["en".to_string(), "de".to_string()],
            default_locale: Some("de".to_string()),
        };
        let provider = LocaleProvider::from_settings(&settings).expect("provider");
        assert_eq!(provider.current().code(), "de");
    }

    #[test]
    fn test_from_settings_empty_falls_back_to_detection() {
        let provider =
            LocaleProvider::from_settings(&Settings::default()).expect("provider");
        assert_eq!(provider.all().len(), 1);
        assert!(!provider.current().code().is_empty());
    }
}
