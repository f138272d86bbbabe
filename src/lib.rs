// SPDX-License-Identifier: PMPL-1.0-or-later

//! iso639-registry: an immutable ISO 639 language code registry.
//!
//! The crate embeds the ISO 639-3 code table and answers three kinds of
//! query against it:
//!
//! 1. **Code lookup** by ISO 639-1 (two letters), ISO 639-2 (terminological
//!    or bibliographic) or ISO 639-3 (the identity code).
//! 2. **Category filters** by [`LanguageType`] and [`LanguageScope`].
//! 3. **Name search** by literal substring, case-sensitive or not.
//!
//! ```
//! use iso639_registry::{LanguageType, Registry};
//!
//! let registry = Registry::builtin();
//! let english = registry.lookup_by_part1("en").unwrap();
//! assert_eq!(english.part3(), "eng");
//! assert_eq!(english.language_type(), LanguageType::Living);
//!
//! // Wrong-length codes are not errors, they just match nothing.
//! assert!(registry.lookup_by_part1("eng").is_none());
//!
//! assert!(registry
//!     .filter_by_type(LanguageType::Constructed)
//!     .any(|l| l.name() == "Esperanto"));
//! ```
//!
//! The registry is built once, on first access, and is read-only afterwards;
//! it can be shared across threads freely.

mod data;

pub mod codegen;
pub mod error;
pub mod i18n;
pub mod language;
pub mod logging;
pub mod registry;
pub mod report;
pub mod tab;
pub mod types;

pub use error::{Error, Result};
pub use i18n::{BuiltinLocales, Locale, LocaleCatalog};
pub use language::Language;
pub use registry::{lookup_by_part1, lookup_by_part2, lookup_by_part3, search_by_name, Registry};
pub use types::{LanguageScope, LanguageType};
