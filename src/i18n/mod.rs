// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale association for language records.
//!
//! A language can be paired with a platform locale descriptor by matching its
//! ISO 639-1 code (or its ISO 639-2/T code) against a [`LocaleCatalog`]. The
//! association is best-effort: many valid languages have no locale, and
//! regional variants mean the first catalog hit wins.
//!
//! The built-in catalog is embedded at compile time as static data, so there
//! is no file I/O behind a lookup.

mod catalog;

pub use catalog::{BuiltinLocales, Locale, LocaleCatalog};
