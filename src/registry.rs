//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of every locale supported by
//! the application, plus the default used when no preference is available.
//! It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access; the table is immutable after construction.

use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

use crate::error::LocaleError;

/// Metadata for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleEntry {
    /// ISO 639-1 locale code (e.g., "en", "es", "pt")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the locale (e.g., "English", "Español")
    pub native_name: &'static str,
}

/// The supported-locale table and its default.
///
/// Entries keep their declaration order, which consumers (e.g., a locale
/// switcher) use as display order. Membership is the only hard invariant.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    default_locale: &'static str,
    entries: Vec<LocaleEntry>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    ///
    /// This method initializes the registry with the built-in table on
    /// first call and returns a reference to the singleton instance on
    /// subsequent calls.
    ///
    /// # Panics
    /// Panics if the built-in table fails validation (this indicates a
    /// programming error in this crate, not a caller error).
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| {
            let registry = LocaleRegistry::new("en", builtin_locales())
                .expect("built-in locale table should always be valid");
            debug!(
                default_locale = registry.default_locale,
                count = registry.entries.len(),
                "locale registry initialized"
            );
            registry
        })
    }

    /// Build a registry from an explicit default and entry table.
    ///
    /// Components that should not depend on the global table can be handed
    /// their own registry built through this constructor; all query methods
    /// take `&self` and work the same on either.
    ///
    /// # Arguments
    /// * `default_locale` - The code to fall back to; must be in `entries`
    /// * `entries` - The supported locales, in display order
    ///
    /// # Errors
    /// * `LocaleError::DuplicateCode` if a code appears more than once
    /// * `LocaleError::DefaultNotSupported` if `default_locale` is not an
    ///   entry code
    pub fn new(
        default_locale: &'static str,
        entries: Vec<LocaleEntry>,
    ) -> Result<Self, LocaleError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|seen| seen.code == entry.code) {
                return Err(LocaleError::DuplicateCode(entry.code.to_string()));
            }
        }

        if !entries.iter().any(|entry| entry.code == default_locale) {
            return Err(LocaleError::DefaultNotSupported(default_locale.to_string()));
        }

        Ok(Self {
            default_locale,
            entries,
        })
    }

    /// Get a locale entry by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 locale code (e.g., "en", "es")
    ///
    /// # Returns
    /// * `Some(&LocaleEntry)` if the locale is supported
    /// * `None` if it is not
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// Get the default locale entry.
    ///
    /// The default is the locale used when no explicit or detected
    /// preference is available. `new` guarantees it is a member of the
    /// table, so this accessor cannot fail.
    pub fn default_locale(&self) -> &LocaleEntry {
        self.get_by_code(self.default_locale)
            .expect("default locale is validated at construction")
    }

    /// All supported locale codes, in declaration order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.code).collect()
    }

    /// All locale entries, in declaration order.
    pub fn entries(&self) -> &[LocaleEntry] {
        &self.entries
    }

    /// Check whether a code is a member of the supported set.
    ///
    /// An unsupported code is a normal `false` result, not an error;
    /// callers decide how to react (typically by falling back to the
    /// default locale).
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Built-in locale table.
///
/// Entry order is display order. Add new locales here.
fn builtin_locales() -> Vec<LocaleEntry> {
    vec![
        LocaleEntry {
            code: "en",
            name: "English",
            native_name: "English",
        },
        LocaleEntry {
            code: "es",
            name: "Spanish",
            native_name: "Español",
        },
        LocaleEntry {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
        },
    ]
}
