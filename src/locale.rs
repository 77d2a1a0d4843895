//! Locale type: Validated, closed-set locale representation.
//!
//! This module provides the `Locale` type, a value that can only hold codes
//! the registry supports. Any code path that accepts a `Locale` is therefore
//! known to be dealing with a supported locale; arbitrary strings must pass
//! through `from_code` (or deserialization) first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LocaleError;
use crate::registry::{LocaleEntry, LocaleRegistry};

/// A validated locale.
///
/// This type represents a locale that has been validated against the
/// registry. It ensures that only supported locales can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 locale code (e.g., "en", "es")
    code: &'static str,
}

impl Locale {
    /// English.
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Spanish.
    pub const SPANISH: Locale = Locale { code: "es" };

    /// Portuguese.
    pub const PORTUGUESE: Locale = Locale { code: "pt" };

    /// Create a `Locale` from a locale code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 locale code (e.g., "en", "es")
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is in the supported set
    /// * `Err(LocaleError::UnknownCode)` otherwise
    ///
    /// # Example
    /// ```
    /// use i18n_config::Locale;
    ///
    /// let spanish = Locale::from_code("es").unwrap();
    /// assert_eq!(spanish.code(), "es");
    /// ```
    pub fn from_code(code: &str) -> Result<Locale, LocaleError> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(entry) => Ok(Locale {
                code: entry.code, // Use the static str from the registry
            }),
            None => Err(LocaleError::UnknownCode(code.to_string())),
        }
    }

    /// Get the fallback locale.
    ///
    /// This is the registry's default, used when no explicit or detected
    /// preference is available.
    pub fn fallback() -> Locale {
        let entry = LocaleRegistry::get().default_locale();
        Locale { code: entry.code }
    }

    /// Get the ISO 639-1 locale code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full registry entry for this locale.
    ///
    /// # Panics
    /// Panics if the locale code is not found in the registry. This should
    /// never happen if the Locale was constructed properly (via `from_code`
    /// or constants).
    pub fn entry(&self) -> &'static LocaleEntry {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Get the English name of the locale (e.g., "Spanish").
    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    /// Get the native name of the locale (e.g., "Español").
    pub fn native_name(&self) -> &'static str {
        self.entry().native_name
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        self.code == LocaleRegistry::get().default_locale().code
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::fallback()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code)
    }
}

// Deserialization validates against the registry, so an unsupported code in
// incoming data surfaces as a deserialization error rather than an invalid
// Locale value.
impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Locale::from_code(&code).map_err(serde::de::Error::custom)
    }
}
