// SPDX-License-Identifier: PMPL-1.0-or-later

//! Query tests against the embedded ISO 639-3 registry

use iso639_registry::{LanguageScope, LanguageType, Registry};
use std::collections::HashSet;

#[test]
fn test_lookup_english_by_part1() {
    let english = Registry::builtin()
        .lookup_by_part1("en")
        .expect("en should resolve");
    assert_eq!(english.part3(), "eng");
    assert_eq!(english.name(), "English");
    assert_eq!(english.language_type(), LanguageType::Living);
    assert_eq!(english.scope(), LanguageScope::Individual);
}

#[test]
fn test_part1_lookup_ignores_case() {
    let registry = Registry::builtin();
    assert_eq!(registry.lookup_by_part1("EN").unwrap().part3(), "eng");
    assert_eq!(registry.lookup_by_part1("eN").unwrap().part3(), "eng");
}

#[test]
fn test_french_code_split() {
    let registry = Registry::builtin();
    let by_part3 = registry.lookup_by_part3("fra").expect("fra is an ISO 639-3 code");
    let by_part2t = registry.lookup_by_part2("fra").expect("fra is the 639-2/T code");
    let by_part2b = registry.lookup_by_part2b("fre").expect("fre is the 639-2/B code");

    assert_eq!(by_part3, by_part2t);
    assert_eq!(by_part3, by_part2b);
    assert_eq!(by_part3.part2b(), Some("fre"));
    assert_eq!(by_part3.part2t(), Some("fra"));
    assert_eq!(by_part3.part1(), Some("fr"));

    // The bibliographic code is not a terminological one.
    assert!(registry.lookup_by_part2("fre").is_none());
    // The generic lookup falls through to the bibliographic space.
    assert_eq!(registry.lookup("fre").unwrap().part3(), "fra");
}

#[test]
fn test_other_bibliographic_codes() {
    let registry = Registry::builtin();
    for (bibliographic, part3) in [("ger", "deu"), ("chi", "zho"), ("wel", "cym"), ("cze", "ces")] {
        let language = registry
            .lookup_by_part2b(bibliographic)
            .unwrap_or_else(|| panic!("{bibliographic} should resolve"));
        assert_eq!(language.part3(), part3);
    }
}

#[test]
fn test_wrong_length_codes_are_not_errors() {
    let registry = Registry::builtin();
    assert!(registry.lookup_by_part1("eng").is_none());
    assert!(registry.lookup_by_part1("e").is_none());
    assert!(registry.lookup_by_part1("").is_none());
    assert!(registry.lookup_by_part2("en").is_none());
    assert!(registry.lookup_by_part2b("fren").is_none());
    assert!(registry.lookup_by_part3("english").is_none());
    assert!(registry.lookup("").is_none());
}

#[test]
fn test_unknown_codes_are_absent() {
    let registry = Registry::builtin();
    assert!(registry.lookup_by_part1("xx").is_none());
    assert!(registry.lookup_by_part3("qqq").is_none());
}

#[test]
fn test_every_record_resolves_by_part3() {
    let registry = Registry::builtin();
    let mut seen = HashSet::new();
    for language in registry {
        let found = registry.lookup_by_part3(language.part3()).unwrap();
        assert!(std::ptr::eq(found, language), "{} resolved elsewhere", language);
        assert!(seen.insert(language.part3()), "duplicate {}", language.part3());
    }
    assert_eq!(seen.len(), registry.len());
}

#[test]
fn test_part1_lookups_match_their_records() {
    let registry = Registry::builtin();
    for language in registry.iter().filter(|l| l.part1().is_some()) {
        let code = language.part1().unwrap();
        let found = registry.lookup_by_part1(code).unwrap();
        assert!(found.part1().unwrap().eq_ignore_ascii_case(code));
    }
}

#[test]
fn test_type_filters_partition_registry() {
    let registry = Registry::builtin();
    let mut seen = HashSet::new();
    for ty in LanguageType::ALL {
        for language in registry.filter_by_type(ty) {
            assert_eq!(language.language_type(), ty);
            assert!(seen.insert(language.part3()), "{} in two types", language);
        }
    }
    assert_eq!(seen.len(), registry.len());
}

#[test]
fn test_scope_filters_partition_registry() {
    let registry = Registry::builtin();
    let total: usize = LanguageScope::ALL
        .into_iter()
        .map(|scope| registry.filter_by_scope(scope).count())
        .sum();
    assert_eq!(total, registry.len());
    assert_eq!(registry.filter_by_scope(LanguageScope::Collective).count(), 0);
    assert!(registry
        .filter_by_scope(LanguageScope::MacroLanguage)
        .any(|l| l.part3() == "zho"));
}

#[test]
fn test_filters_preserve_registry_order() {
    let registry = Registry::builtin();
    let positions: Vec<usize> = registry
        .filter_by_type(LanguageType::Constructed)
        .map(|l| registry.iter().position(|other| other == l).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_constructed_includes_esperanto() {
    let constructed: Vec<_> = Registry::builtin()
        .filter_by_type(LanguageType::Constructed)
        .map(|l| l.name())
        .collect();
    assert!(constructed.contains(&"Esperanto"));
    assert!(constructed.contains(&"Klingon"));
}

#[test]
fn test_search_chinese_ignoring_case() {
    let results = Registry::builtin().search_by_name("Chinese", true).unwrap();
    assert!(results.len() > 1);
    let names: Vec<_> = results.iter().map(|l| l.name()).collect();
    assert!(names.contains(&"Mandarin Chinese"));
    assert!(names.contains(&"Yue Chinese"));
}

#[test]
fn test_search_case_insensitive_is_superset() {
    let registry = Registry::builtin();
    let sensitive = registry.search_by_name("chinese", false).unwrap();
    let insensitive = registry.search_by_name("chinese", true).unwrap();
    assert!(insensitive.len() > sensitive.len());
    for language in &sensitive {
        assert!(insensitive.contains(language));
    }
}

#[test]
fn test_search_handles_accented_names() {
    let registry = Registry::builtin();
    let lower = registry.search_by_name("arbëreshë", true).unwrap();
    let upper = registry.search_by_name("ARBËRESHË", true).unwrap();
    assert!(!lower.is_empty());
    assert_eq!(lower, upper);
    assert!(registry.search_by_name("ARBËRESHË", false).unwrap().is_empty());
}

#[test]
fn test_search_is_literal() {
    let registry = Registry::builtin();
    assert!(registry.search_by_name(".*", true).unwrap().is_empty());
    assert!(registry.search_by_name("Eng?ish", true).unwrap().is_empty());
}

#[test]
fn test_blank_search_is_invalid_argument() {
    let registry = Registry::builtin();
    for text in ["", " ", "   \t"] {
        for ignore_case in [true, false] {
            let err = registry.search_by_name(text, ignore_case).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }
}

#[test]
fn test_free_functions_use_builtin_registry() {
    assert_eq!(iso639_registry::lookup_by_part1("de").unwrap().part3(), "deu");
    assert_eq!(iso639_registry::lookup_by_part2("deu").unwrap().part1(), Some("de"));
    assert_eq!(iso639_registry::lookup_by_part3("deu").unwrap().name(), "German");
    assert!(iso639_registry::search_by_name("German", false).unwrap().len() > 1);
}

#[test]
fn test_builtin_is_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let registry = Registry::builtin();
                (registry as *const Registry as usize, registry.len())
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_special_codes_present() {
    let registry = Registry::builtin();
    for code in ["mis", "mul", "und", "zxx"] {
        let language = registry.lookup_by_part3(code).unwrap();
        assert_eq!(language.scope(), LanguageScope::Special);
        assert_eq!(language.language_type(), LanguageType::Special);
    }
}
