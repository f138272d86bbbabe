// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for loading registries from upstream iso-639-3.tab files

use iso639_registry::{codegen, tab, Error, LanguageType, Registry};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "Id\tPart2B\tPart2T\tPart1\tScope\tLanguage_Type\tRef_Name\tComment\n";

fn write_table(dir: &Path, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.join("iso-639-3.tab");
    let mut content = HEADER.to_string();
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_bundled_table_matches_builtin_registry() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/iso-639-3.tab");
    let loaded = Registry::from_table(&path).expect("bundled table should load");
    let builtin = Registry::builtin();

    assert_eq!(loaded.len(), builtin.len());
    for (a, b) in loaded.iter().zip(builtin.iter()) {
        assert_eq!(a, b);
        assert_eq!(a.name(), b.name());
        assert_eq!(a.part1(), b.part1());
        assert_eq!(a.part2b(), b.part2b());
        assert_eq!(a.part2t(), b.part2t());
        assert_eq!(a.language_type(), b.language_type());
        assert_eq!(a.scope(), b.scope());
    }
}

#[test]
fn test_custom_table_serves_queries() {
    let dir = TempDir::new().unwrap();
    let path = write_table(
        dir.path(),
        &[
            "qaa\t\t\t\tL\tL\tLocal Test Language\t",
            "qab\t\t\tqb\tI\tC\tTest Conlang\tmade up",
        ],
    );

    let registry = Registry::from_table(&path).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.lookup_by_part1("QB").unwrap().part3(), "qab");
    assert_eq!(
        registry.filter_by_type(LanguageType::Constructed).count(),
        1
    );
    assert_eq!(registry.search_by_name("test", true).unwrap().len(), 2);
}

#[test]
fn test_duplicate_identifier_in_table_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_table(
        dir.path(),
        &["aaa\t\t\t\tI\tL\tGhotuo\t", "aaa\t\t\t\tI\tL\tGhotuo again\t"],
    );
    let err = Registry::from_table(&path).unwrap_err();
    assert!(matches!(err, Error::DuplicatePart3(code) if code == "aaa"));
}

#[test]
fn test_bad_code_length_in_table_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_table(dir.path(), &["aaa\t\t\teng\tI\tL\tGhotuo\t"]);
    let err = Registry::from_table(&path).unwrap_err();
    assert!(err.to_string().contains("part1"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Registry::from_table(&dir.path().join("absent.tab")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_generated_source_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_table(dir.path(), &["fra\tfre\tfra\tfr\tI\tL\tFrench\t"]);
    let languages = tab::read_table(&path).unwrap();
    let source = codegen::render_table(&languages);
    assert!(source.contains("(\"French\", \"fra\", Some(\"fre\"), Some(\"fra\"), Some(\"fr\"), T::Living, S::Individual),"));
}
