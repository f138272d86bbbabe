// SPDX-License-Identifier: PMPL-1.0-or-later

//! The language record.
//!
//! A [`Language`] holds the ISO 639 codes and metadata of one language.
//! Identity is the ISO 639-3 code alone: equality and hashing ignore every
//! other field.

use crate::error::{Error, Result};
use crate::i18n::{BuiltinLocales, Locale, LocaleCatalog};
use crate::types::{LanguageScope, LanguageType};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// One entry of the ISO 639 registry.
#[derive(Debug, Clone, Serialize)]
pub struct Language {
    name: String,
    part3: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    part2b: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    part2t: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    part1: Option<String>,
    #[serde(rename = "type")]
    language_type: LanguageType,
    scope: LanguageScope,
    #[serde(skip)]
    locale: OnceLock<Locale>,
}

impl Language {
    /// Build a record.
    ///
    /// `name` and `part3` must be non-empty. The optional codes are stored as
    /// given; length checks happen when a [`Registry`](crate::Registry) is
    /// assembled.
    pub fn new(
        name: impl Into<String>,
        part3: impl Into<String>,
        part2b: Option<String>,
        part2t: Option<String>,
        part1: Option<String>,
        language_type: LanguageType,
        scope: LanguageScope,
    ) -> Result<Self> {
        let name = name.into();
        let part3 = part3.into();
        if name.is_empty() {
            return Err(Error::invalid_argument("name", "must not be empty"));
        }
        if part3.is_empty() {
            return Err(Error::invalid_argument("part3", "must not be empty"));
        }
        Ok(Self {
            name,
            part3,
            part2b,
            part2t,
            part1,
            language_type,
            scope,
            locale: OnceLock::new(),
        })
    }

    /// Record from a trusted embedded table row; skips argument checks.
    pub(crate) fn from_static(entry: &crate::data::Entry) -> Self {
        let &(name, part3, part2b, part2t, part1, language_type, scope) = entry;
        Self {
            name: name.to_string(),
            part3: part3.to_string(),
            part2b: part2b.map(str::to_string),
            part2t: part2t.map(str::to_string),
            part1: part1.map(str::to_string),
            language_type,
            scope,
            locale: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO 639-3 identifier; the record's identity.
    pub fn part3(&self) -> &str {
        &self.part3
    }

    /// ISO 639-2 bibliographic code.
    pub fn part2b(&self) -> Option<&str> {
        self.part2b.as_deref()
    }

    /// ISO 639-2 terminological code.
    pub fn part2t(&self) -> Option<&str> {
        self.part2t.as_deref()
    }

    /// ISO 639-1 two-letter code.
    pub fn part1(&self) -> Option<&str> {
        self.part1.as_deref()
    }

    pub fn language_type(&self) -> LanguageType {
        self.language_type
    }

    pub fn scope(&self) -> LanguageScope {
        self.scope
    }

    /// Best-effort locale for this language from the built-in catalog.
    ///
    /// Resolved on first call and cached on the record. Returns
    /// [`Locale::invariant`] when nothing in the catalog matches.
    pub fn locale(&self) -> &Locale {
        self.locale
            .get_or_init(|| self.locale_in(&BuiltinLocales).clone())
    }

    /// Scan `catalog` for the first locale whose two-letter code equals
    /// `part1` or whose three-letter code equals `part2t`. Empty catalog
    /// codes never match. Not cached.
    pub fn locale_in<'c>(&self, catalog: &'c dyn LocaleCatalog) -> &'c Locale {
        let found = catalog.locales().iter().find(|locale| {
            let by_part1 = !locale.two_letter.is_empty()
                && self.part1.as_deref() == Some(locale.two_letter.as_str());
            let by_part2t = !locale.three_letter.is_empty()
                && self.part2t.as_deref() == Some(locale.three_letter.as_str());
            by_part1 || by_part2t
        });
        match found {
            Some(locale) => {
                tracing::trace!(part3 = %self.part3, locale = %locale.tag, "resolved locale");
                locale
            }
            None => {
                tracing::trace!(part3 = %self.part3, "no locale match, using invariant");
                Locale::invariant()
            }
        }
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.part3 == other.part3
    }
}

impl Eq for Language {}

impl Hash for Language {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.part3.hash(state);
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.part3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of(language: &Language) -> u64 {
        let mut hasher = DefaultHasher::new();
        language.hash(&mut hasher);
        hasher.finish()
    }

    fn french() -> Language {
        Language::new(
            "French",
            "fra",
            Some("fre".into()),
            Some("fra".into()),
            Some("fr".into()),
            LanguageType::Living,
            LanguageScope::Individual,
        )
        .unwrap()
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Language::new(
            "",
            "abc",
            None,
            None,
            None,
            LanguageType::Living,
            LanguageScope::Individual,
        )
        .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn empty_part3_is_rejected() {
        let err = Language::new(
            "Something",
            "",
            None,
            None,
            None,
            LanguageType::Living,
            LanguageScope::Individual,
        )
        .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn identity_is_part3_only() {
        let a = french();
        let b = Language::new(
            "Not French",
            "fra",
            None,
            None,
            None,
            LanguageType::Extinct,
            LanguageScope::Special,
        )
        .unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn part3_comparison_is_case_sensitive() {
        let lower = french();
        let upper = Language::new(
            "French",
            "FRA",
            None,
            None,
            None,
            LanguageType::Living,
            LanguageScope::Individual,
        )
        .unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn lengths_are_not_checked_by_the_record() {
        let odd = Language::new(
            "Odd",
            "odd",
            None,
            None,
            Some("toolong".into()),
            LanguageType::Living,
            LanguageScope::Individual,
        );
        assert!(odd.is_ok());
    }

    #[test]
    fn locale_is_cached() {
        let fr = french();
        let first = fr.locale() as *const Locale;
        let second = fr.locale() as *const Locale;
        assert_eq!(first, second);
        assert_eq!(fr.locale().two_letter, "fr");
    }

    #[test]
    fn empty_codes_do_not_match_blank_catalog_entries() {
        let blank = Language::new(
            "Blank",
            "zzb",
            None,
            Some(String::new()),
            Some(String::new()),
            LanguageType::Special,
            LanguageScope::Special,
        )
        .unwrap();
        let catalog = vec![
            Locale::new("fil-PH", "", "fil", "Filipino (Philippines)"),
            Locale::new("x-none", "xx", "", "No three-letter code"),
        ];
        assert!(blank.locale_in(&catalog).is_invariant());
        assert!(blank.locale().is_invariant());
    }

    #[test]
    fn serializes_without_absent_codes() {
        let lang = Language::new(
            "Ghotuo",
            "aaa",
            None,
            None,
            None,
            LanguageType::Living,
            LanguageScope::Individual,
        )
        .unwrap();
        let json = serde_json::to_value(&lang).unwrap();
        assert_eq!(json["part3"], "aaa");
        assert_eq!(json["type"], "living");
        assert!(json.get("part1").is_none());
        assert!(json.get("locale").is_none());
    }
}
