// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rust source emitter for the embedded code table (`src/data.rs`).

use crate::language::Language;
use crate::types::{LanguageScope, LanguageType};
use std::fmt::Write;

const PRELUDE: &str = "\
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Embedded ISO 639-3 code table.
//!
//! Generated by `iso639 generate` from the SIL `iso-639-3.tab` file.
//! Do not edit by hand.

use crate::types::{LanguageScope as S, LanguageType as T};

/// `(name, part3, part2b, part2t, part1, type, scope)` in upstream order.
pub(crate) type Entry = (
    &'static str,
    &'static str,
    Option<&'static str>,
    Option<&'static str>,
    Option<&'static str>,
    T,
    S,
);

pub(crate) static LANGUAGES: &[Entry] = &[
";

/// Render `languages` as the source of the embedded table module.
pub fn render_table(languages: &[Language]) -> String {
    let mut out = String::with_capacity(PRELUDE.len() + languages.len() * 80);
    out.push_str(PRELUDE);
    for language in languages {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "    ({}, {}, {}, {}, {}, T::{}, S::{}),",
            quote(language.name()),
            quote(language.part3()),
            quote_opt(language.part2b()),
            quote_opt(language.part2t()),
            quote_opt(language.part1()),
            type_variant(language.language_type()),
            scope_variant(language.scope()),
        );
    }
    out.push_str("];\n");
    out
}

/// Quote as a Rust string literal, escaping only `\` and `"` so accented
/// names stay readable.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn quote_opt(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("Some({})", quote(value)),
        None => "None".to_string(),
    }
}

fn type_variant(language_type: LanguageType) -> &'static str {
    match language_type {
        LanguageType::Ancient => "Ancient",
        LanguageType::Constructed => "Constructed",
        LanguageType::Extinct => "Extinct",
        LanguageType::Historical => "Historical",
        LanguageType::Living => "Living",
        LanguageType::Special => "Special",
    }
}

fn scope_variant(scope: LanguageScope) -> &'static str {
    match scope {
        LanguageScope::Collective => "Collective",
        LanguageScope::Individual => "Individual",
        LanguageScope::Local => "Local",
        LanguageScope::MacroLanguage => "MacroLanguage",
        LanguageScope::Special => "Special",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows() {
        let french = Language::new(
            "French",
            "fra",
            Some("fre".into()),
            Some("fra".into()),
            Some("fr".into()),
            LanguageType::Living,
            LanguageScope::Individual,
        )
        .unwrap();
        let source = render_table(&[french]);
        assert!(source.starts_with("// SPDX-License-Identifier"));
        assert!(source.contains(
            "    (\"French\", \"fra\", Some(\"fre\"), Some(\"fra\"), Some(\"fr\"), T::Living, S::Individual),\n"
        ));
        assert!(source.ends_with("];\n"));
    }

    #[test]
    fn quote_escapes_backslash_and_quote() {
        assert_eq!(quote(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(quote("Arbëreshë"), "\"Arbëreshë\"");
    }

    #[test]
    fn embedded_table_matches_renderer() {
        let table = include_str!("../data/iso-639-3.tab");
        let languages = crate::tab::parse_table(table).unwrap();
        assert_eq!(render_table(&languages), include_str!("data.rs"));
    }
}
