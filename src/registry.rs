// SPDX-License-Identifier: PMPL-1.0-or-later

//! The language registry.
//!
//! A [`Registry`] is an ordered, immutable collection of [`Language`]
//! records with hash indexes over each code space. The built-in registry is
//! assembled from the embedded ISO 639-3 table on first access and lives for
//! the rest of the process.
//!
//! Code lookups are ASCII case-insensitive. A code of the wrong length is not
//! an error: it simply matches nothing.

use crate::data;
use crate::error::{Error, Result};
use crate::language::Language;
use crate::types::{LanguageScope, LanguageType};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// Immutable collection of language records.
#[derive(Debug, Clone)]
pub struct Registry {
    languages: Vec<Language>,
    /// Unicode-lowercased names, parallel to `languages`.
    folded_names: Vec<String>,
    by_part3: HashMap<String, usize>,
    by_part2t: HashMap<String, usize>,
    by_part2b: HashMap<String, usize>,
    by_part1: HashMap<String, usize>,
}

impl Registry {
    /// The registry built from the embedded ISO 639-3 table.
    pub fn builtin() -> &'static Registry {
        BUILTIN.get_or_init(|| {
            let registry = Registry::from_trusted(
                data::LANGUAGES.iter().map(Language::from_static).collect(),
            );
            tracing::debug!(languages = registry.len(), "built-in registry initialised");
            registry
        })
    }

    /// Build a registry from caller-supplied records.
    ///
    /// Every code must have its fixed length (3 characters for Part 3 and
    /// Part 2, 2 for Part 1) and Part 3 codes must be unique.
    pub fn new(languages: Vec<Language>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(languages.len());
        for language in &languages {
            validate_codes(language)?;
            if !seen.insert(language.part3()) {
                return Err(Error::DuplicatePart3(language.part3().to_string()));
            }
        }
        Ok(Self::from_trusted(languages))
    }

    /// Read, parse and validate an upstream `iso-639-3.tab` file.
    pub fn from_table(path: &Path) -> Result<Self> {
        Self::new(crate::tab::read_table(path)?)
    }

    fn from_trusted(languages: Vec<Language>) -> Self {
        let folded_names = languages.iter().map(|l| fold_case(l.name())).collect();
        let mut registry = Self {
            by_part3: HashMap::with_capacity(languages.len()),
            by_part2t: HashMap::new(),
            by_part2b: HashMap::new(),
            by_part1: HashMap::new(),
            folded_names,
            languages,
        };
        for (index, language) in registry.languages.iter().enumerate() {
            index_code(&mut registry.by_part3, Some(language.part3()), index);
            index_code(&mut registry.by_part2t, language.part2t(), index);
            index_code(&mut registry.by_part2b, language.part2b(), index);
            index_code(&mut registry.by_part1, language.part1(), index);
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// All records in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Language> {
        self.languages.iter()
    }

    /// Look up by ISO 639-1 code. `code` must be 2 characters.
    pub fn lookup_by_part1(&self, code: &str) -> Option<&Language> {
        self.find(&self.by_part1, code, 2)
    }

    /// Look up by ISO 639-2 terminological code. `code` must be 3 characters.
    pub fn lookup_by_part2(&self, code: &str) -> Option<&Language> {
        self.find(&self.by_part2t, code, 3)
    }

    /// Look up by ISO 639-2 bibliographic code. `code` must be 3 characters.
    pub fn lookup_by_part2b(&self, code: &str) -> Option<&Language> {
        self.find(&self.by_part2b, code, 3)
    }

    /// Look up by ISO 639-3 identifier. `code` must be 3 characters.
    pub fn lookup_by_part3(&self, code: &str) -> Option<&Language> {
        self.find(&self.by_part3, code, 3)
    }

    /// Resolve a code of any kind: 2 characters are tried as Part 1, 3
    /// characters as Part 3, then Part 2/T, then Part 2/B.
    pub fn lookup(&self, code: &str) -> Option<&Language> {
        match code.chars().count() {
            2 => self.lookup_by_part1(code),
            3 => self
                .lookup_by_part3(code)
                .or_else(|| self.lookup_by_part2(code))
                .or_else(|| self.lookup_by_part2b(code)),
            _ => None,
        }
    }

    /// Records of the given type, in registry order.
    ///
    /// The iterator is lazy and `Clone`; every call re-scans the registry.
    pub fn filter_by_type(
        &self,
        language_type: LanguageType,
    ) -> impl Iterator<Item = &Language> + Clone + '_ {
        self.languages
            .iter()
            .filter(move |language| language.language_type() == language_type)
    }

    /// Records with the given scope, in registry order.
    pub fn filter_by_scope(
        &self,
        scope: LanguageScope,
    ) -> impl Iterator<Item = &Language> + Clone + '_ {
        self.languages
            .iter()
            .filter(move |language| language.scope() == scope)
    }

    /// Records whose name contains `text` literally, in registry order.
    ///
    /// With `ignore_case` both sides are compared after per-character Unicode
    /// lowercasing. Empty or whitespace-only `text` is rejected with
    /// [`Error::InvalidArgument`].
    pub fn search_by_name(&self, text: &str, ignore_case: bool) -> Result<Vec<&Language>> {
        if text.trim().is_empty() {
            return Err(Error::invalid_argument(
                "text",
                "must not be empty or whitespace",
            ));
        }

        let matches = if ignore_case {
            let needle = fold_case(text);
            self.languages
                .iter()
                .zip(&self.folded_names)
                .filter(|(_, folded)| folded.contains(&needle))
                .map(|(language, _)| language)
                .collect()
        } else {
            self.languages
                .iter()
                .filter(|language| language.name().contains(text))
                .collect()
        };
        Ok(matches)
    }

    fn find(&self, index: &HashMap<String, usize>, code: &str, len: usize) -> Option<&Language> {
        if code.chars().count() != len {
            return None;
        }
        index
            .get(&code.to_ascii_lowercase())
            .map(|&i| &self.languages[i])
    }
}

// Per-character, so a fold of a substring is always a substring of the fold.
// `str::to_lowercase` applies the final-sigma rule and breaks that.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Language;
    type IntoIter = std::slice::Iter<'a, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// First record wins when two share a code.
fn index_code(index: &mut HashMap<String, usize>, code: Option<&str>, position: usize) {
    if let Some(code) = code {
        index.entry(code.to_ascii_lowercase()).or_insert(position);
    }
}

fn validate_codes(language: &Language) -> Result<()> {
    let checks = [
        ("part3", Some(language.part3()), 3),
        ("part2b", language.part2b(), 3),
        ("part2t", language.part2t(), 3),
        ("part1", language.part1(), 2),
    ];
    for (field, code, expected) in checks {
        if let Some(code) = code {
            if code.chars().count() != expected {
                return Err(Error::InvalidCode {
                    part3: language.part3().to_string(),
                    field,
                    code: code.to_string(),
                    expected,
                });
            }
        }
    }
    Ok(())
}

// ─── Built-in shortcuts ─────────────────────────────────────────────

/// [`Registry::lookup_by_part1`] on the built-in registry.
pub fn lookup_by_part1(code: &str) -> Option<&'static Language> {
    Registry::builtin().lookup_by_part1(code)
}

/// [`Registry::lookup_by_part2`] on the built-in registry.
pub fn lookup_by_part2(code: &str) -> Option<&'static Language> {
    Registry::builtin().lookup_by_part2(code)
}

/// [`Registry::lookup_by_part3`] on the built-in registry.
pub fn lookup_by_part3(code: &str) -> Option<&'static Language> {
    Registry::builtin().lookup_by_part3(code)
}

/// [`Registry::search_by_name`] on the built-in registry.
pub fn search_by_name(text: &str, ignore_case: bool) -> Result<Vec<&'static Language>> {
    Registry::builtin().search_by_name(text, ignore_case)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(name: &str, part3: &str, part1: Option<&str>) -> Language {
        Language::new(
            name,
            part3,
            None,
            None,
            part1.map(str::to_string),
            LanguageType::Living,
            LanguageScope::Individual,
        )
        .unwrap()
    }

    #[test]
    fn duplicate_part3_is_rejected() {
        let err = Registry::new(vec![lang("One", "aaa", None), lang("Two", "aaa", None)])
            .unwrap_err();
        assert!(matches!(err, Error::DuplicatePart3(code) if code == "aaa"));
    }

    #[test]
    fn wrong_length_codes_are_rejected_at_construction() {
        let err = Registry::new(vec![lang("One", "aaa", Some("abc"))]).unwrap_err();
        assert!(matches!(err, Error::InvalidCode { field: "part1", .. }));

        let err = Registry::new(vec![lang("One", "aaaa", None)]).unwrap_err();
        assert!(matches!(err, Error::InvalidCode { field: "part3", .. }));
    }

    #[test]
    fn first_part1_match_wins() {
        let registry = Registry::new(vec![
            lang("First", "aaa", Some("xx")),
            lang("Second", "bbb", Some("xx")),
        ])
        .unwrap();
        assert_eq!(registry.lookup_by_part1("xx").unwrap().name(), "First");
        assert_eq!(registry.lookup_by_part1("XX").unwrap().name(), "First");
    }

    #[test]
    fn wrong_length_lookup_is_none() {
        let registry = Registry::new(vec![lang("First", "aaa", Some("xx"))]).unwrap();
        assert!(registry.lookup_by_part1("xxx").is_none());
        assert!(registry.lookup_by_part1("").is_none());
        assert!(registry.lookup_by_part3("aa").is_none());
        assert!(registry.lookup_by_part3("aaaa").is_none());
    }

    #[test]
    fn blank_search_is_invalid_argument() {
        let registry = Registry::new(vec![lang("First", "aaa", None)]).unwrap();
        for text in ["", " ", "\t\n", "\u{3000}"] {
            let err = registry.search_by_name(text, true).unwrap_err();
            assert!(err.is_invalid_argument(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn search_respects_case_flag() {
        let registry = Registry::new(vec![
            lang("Yue Chinese", "yue", None),
            lang("chinese pidgin", "cpi", None),
        ])
        .unwrap();
        assert_eq!(registry.search_by_name("Chinese", false).unwrap().len(), 1);
        assert_eq!(registry.search_by_name("Chinese", true).unwrap().len(), 2);
    }

    #[test]
    fn ignore_case_finds_greek_sigma() {
        let registry = Registry::new(vec![lang("ΟΔΟΣ", "aaa", None)]).unwrap();
        assert_eq!(registry.search_by_name("Σ", false).unwrap().len(), 1);
        assert_eq!(registry.search_by_name("Σ", true).unwrap().len(), 1);
        assert_eq!(registry.search_by_name("δοσ", true).unwrap().len(), 1);
    }

    #[test]
    fn empty_registry_filters_are_empty() {
        let registry = Registry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.filter_by_type(LanguageType::Living).count(), 0);
        assert_eq!(registry.filter_by_scope(LanguageScope::Local).count(), 0);
    }

    #[test]
    fn filter_iterator_is_repeatable() {
        let registry = Registry::new(vec![
            lang("First", "aaa", None),
            lang("Second", "bbb", None),
        ])
        .unwrap();
        let living = registry.filter_by_type(LanguageType::Living);
        let first_pass: Vec<_> = living.clone().map(Language::part3).collect();
        let second_pass: Vec<_> = living.map(Language::part3).collect();
        assert_eq!(first_pass, vec!["aaa", "bbb"]);
        assert_eq!(first_pass, second_pass);
    }
}
