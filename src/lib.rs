//! Locale configuration for multi-language support.
//!
//! This crate provides a centralized, authoritative table of the locales
//! the surrounding system is prepared to serve: a default locale, the
//! ordered set of supported locale codes, and a validated `Locale` type
//! restricted to members of that set.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe Locale type that can only hold supported codes
//! - `error`: Validation and registry-definition errors
//!
//! # Example
//!
//! ```rust
//! use i18n_config::{Locale, LocaleRegistry};
//!
//! // Get the fallback locale (English)
//! let fallback = Locale::fallback();
//! assert_eq!(fallback.code(), "en");
//!
//! // Create a locale from a code
//! let spanish = Locale::from_code("es").unwrap();
//! assert_eq!(spanish.native_name(), "Español");
//!
//! // List all supported codes, in display order
//! let codes = LocaleRegistry::get().codes();
//! assert_eq!(codes, vec!["en", "es", "pt"]);
//! ```

mod error;
mod locale;
mod registry;

pub use error::LocaleError;
pub use locale::Locale;
pub use registry::{LocaleEntry, LocaleRegistry};
