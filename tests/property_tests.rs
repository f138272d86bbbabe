// SPDX-License-Identifier: PMPL-1.0-or-later

//! Property tests for registry lookups and name search

use iso639_registry::{Language, LanguageScope, LanguageType, Registry};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn registry() -> &'static Registry {
    Registry::builtin()
}

fn hash_of(language: &Language) -> u64 {
    let mut hasher = DefaultHasher::new();
    language.hash(&mut hasher);
    hasher.finish()
}

fn any_type() -> impl Strategy<Value = LanguageType> {
    prop::sample::select(LanguageType::ALL.to_vec())
}

fn any_scope() -> impl Strategy<Value = LanguageScope> {
    prop::sample::select(LanguageScope::ALL.to_vec())
}

proptest! {
    #[test]
    fn part3_lookup_roundtrips(index in 0usize..7910) {
        let registry = registry();
        let language = registry.iter().nth(index % registry.len()).unwrap();
        let upper = language.part3().to_ascii_uppercase();
        prop_assert_eq!(registry.lookup_by_part3(&upper), Some(language));
    }

    #[test]
    fn part1_result_matches_code(code in "[a-zA-Z]{2}") {
        if let Some(language) = registry().lookup_by_part1(&code) {
            prop_assert!(language.part1().unwrap().eq_ignore_ascii_case(&code));
        }
    }

    #[test]
    fn wrong_length_never_matches(code in "[a-z]{0,1}|[a-z]{4,8}") {
        let registry = registry();
        prop_assert!(registry.lookup_by_part1(&code).is_none());
        prop_assert!(registry.lookup_by_part2(&code).is_none());
        prop_assert!(registry.lookup_by_part3(&code).is_none());
    }

    #[test]
    fn three_letters_never_match_part1(code in "[a-z]{3}") {
        prop_assert!(registry().lookup_by_part1(&code).is_none());
    }

    #[test]
    fn ignore_case_is_superset(text in "[A-Za-z]{2,5}") {
        let registry = registry();
        let sensitive = registry.search_by_name(&text, false).unwrap();
        let insensitive = registry.search_by_name(&text, true).unwrap();
        for language in &sensitive {
            prop_assert!(insensitive.contains(language));
        }
    }

    #[test]
    fn ignore_case_is_superset_for_greek_names(
        name in "[ΑΔΟΣσςαδο]{1,8}",
        text in "[ΑΔΟΣσςαδο]{1,3}",
    ) {
        let language = Language::new(
            name,
            "ell",
            None,
            None,
            None,
            LanguageType::Living,
            LanguageScope::Individual,
        )
        .unwrap();
        let registry = Registry::new(vec![language]).unwrap();
        let sensitive = registry.search_by_name(&text, false).unwrap().len();
        let insensitive = registry.search_by_name(&text, true).unwrap().len();
        prop_assert!(insensitive >= sensitive);
    }

    #[test]
    fn whitespace_search_is_rejected(text in "[ \t\n]{0,6}") {
        prop_assert!(registry().search_by_name(&text, true).is_err());
        prop_assert!(registry().search_by_name(&text, false).is_err());
    }

    #[test]
    fn identity_ignores_everything_but_part3(
        name_a in "[A-Z][a-z]{1,10}",
        name_b in "[A-Z][a-z]{1,10}",
        type_a in any_type(),
        type_b in any_type(),
        scope_a in any_scope(),
        scope_b in any_scope(),
    ) {
        let a = Language::new(name_a, "xyz", None, None, None, type_a, scope_a).unwrap();
        let b = Language::new(name_b, "xyz", Some("xyy".into()), None, Some("xy".into()), type_b, scope_b).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn filters_are_stable(ty in any_type(), scope in any_scope()) {
        let registry = registry();
        let first: Vec<_> = registry.filter_by_type(ty).collect();
        let second: Vec<_> = registry.filter_by_type(ty).collect();
        prop_assert_eq!(first, second);
        let by_scope = registry.filter_by_scope(scope);
        prop_assert_eq!(by_scope.clone().count(), by_scope.count());
    }
}
