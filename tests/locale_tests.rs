// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for best-effort locale association

use iso639_registry::{BuiltinLocales, Locale, LocaleCatalog, Registry};

#[test]
fn test_first_regional_variant_wins() {
    let registry = Registry::builtin();
    assert_eq!(registry.lookup_by_part1("fr").unwrap().locale().tag, "fr-FR");
    assert_eq!(registry.lookup_by_part1("en").unwrap().locale().tag, "en-US");
    assert_eq!(registry.lookup_by_part1("zh").unwrap().locale().tag, "zh-CN");
}

#[test]
fn test_match_by_three_letter_code() {
    // Filipino has no ISO 639-1 code; its 639-2/T code matches fil-PH.
    let filipino = Registry::builtin().lookup_by_part3("fil").unwrap();
    assert_eq!(filipino.part1(), None);
    assert_eq!(filipino.locale().tag, "fil-PH");
}

#[test]
fn test_no_match_falls_back_to_invariant() {
    let registry = Registry::builtin();
    let ghotuo = registry.lookup_by_part3("aaa").unwrap();
    assert!(ghotuo.locale().is_invariant());
    assert_eq!(ghotuo.locale(), Locale::invariant());

    // Cusco Quechua has neither a 639-1 nor a 639-2/T code, so the quz-PE
    // locale is not found even though it exists.
    let quechua = registry.lookup_by_part3("quz").unwrap();
    assert!(BuiltinLocales.locales().iter().any(|l| l.three_letter == "quz"));
    assert!(quechua.locale().is_invariant());
}

#[test]
fn test_custom_catalog() {
    let catalog = vec![
        Locale::new("fr-CA", "fr", "fra", "French (Canada)"),
        Locale::new("fr-FR", "fr", "fra", "French (France)"),
    ];
    let french = Registry::builtin().lookup_by_part3("fra").unwrap();
    assert_eq!(french.locale_in(&catalog).tag, "fr-CA");

    let empty: Vec<Locale> = Vec::new();
    assert!(french.locale_in(&empty).is_invariant());
}

#[test]
fn test_concurrent_first_access_agrees() {
    let german = Registry::builtin().lookup_by_part1("de").unwrap();
    let tags: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| german.locale().tag.clone()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(tags.iter().all(|tag| tag == "de-DE"));
}
