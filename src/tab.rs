// SPDX-License-Identifier: PMPL-1.0-or-later

//! Parser for the SIL `iso-639-3.tab` code table.
//!
//! Each data line has the shape
//! `Id \t Part2B \t Part2T \t Part1 \t Scope \t Language_Type \t Ref_Name \t Comment`.
//! Blank code fields mean the code is absent. The first line is a header.

use crate::error::{Error, Result};
use crate::language::Language;
use crate::types::{LanguageScope, LanguageType};
use std::fs;
use std::path::Path;

const HEADER_PREFIX: &str = "Id\t";
const MIN_FIELDS: usize = 7;

/// Read and parse a table file.
pub fn read_table(path: &Path) -> Result<Vec<Language>> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let languages = parse_table(&content)?;
    tracing::debug!(
        path = %path.display(),
        languages = languages.len(),
        "parsed ISO 639-3 table"
    );
    Ok(languages)
}

/// Parse table text into records, in file order.
///
/// Tolerates a leading UTF-8 BOM, CRLF line endings and blank lines. Record
/// construction checks apply (non-empty name and identifier); code lengths
/// are left to [`Registry::new`](crate::Registry::new).
pub fn parse_table(content: &str) -> Result<Vec<Language>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut languages = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() || (line_no == 1 && line.starts_with(HEADER_PREFIX)) {
            continue;
        }
        languages.push(parse_line(line, line_no)?);
    }

    Ok(languages)
}

fn parse_line(line: &str, line_no: usize) -> Result<Language> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Err(parse_error(
            line_no,
            format!("expected at least {MIN_FIELDS} fields, found {}", fields.len()),
        ));
    }

    let scope = single_letter(fields[4])
        .and_then(LanguageScope::from_code)
        .ok_or_else(|| parse_error(line_no, format!("unknown scope `{}`", fields[4])))?;
    let language_type = single_letter(fields[5])
        .and_then(LanguageType::from_code)
        .ok_or_else(|| parse_error(line_no, format!("unknown language type `{}`", fields[5])))?;

    Language::new(
        fields[6].trim(),
        fields[0].trim(),
        optional(fields[1]),
        optional(fields[2]),
        optional(fields[3]),
        language_type,
        scope,
    )
    .map_err(|err| parse_error(line_no, err.to_string()))
}

fn single_letter(field: &str) -> Option<char> {
    let mut chars = field.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn optional(field: &str) -> Option<String> {
    let field = field.trim();
    (!field.is_empty()).then(|| field.to_string())
}

fn parse_error(line: usize, reason: String) -> Error {
    Error::Parse { line, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Id\tPart2B\tPart2T\tPart1\tScope\tLanguage_Type\tRef_Name\tComment\r\n\
aaa\t\t\t\tI\tL\tGhotuo\t\r\n\
fra\tfre\tfra\tfr\tI\tL\tFrench\t\r\n\
epo\tepo\tepo\teo\tI\tC\tEsperanto\t\r\n";

    #[test]
    fn parses_sample_rows() {
        let languages = parse_table(SAMPLE).unwrap();
        assert_eq!(languages.len(), 3);

        let ghotuo = &languages[0];
        assert_eq!(ghotuo.part3(), "aaa");
        assert_eq!(ghotuo.part1(), None);
        assert_eq!(ghotuo.part2t(), None);

        let french = &languages[1];
        assert_eq!(french.part2b(), Some("fre"));
        assert_eq!(french.part2t(), Some("fra"));
        assert_eq!(french.part1(), Some("fr"));
        assert_eq!(french.language_type(), LanguageType::Living);
        assert_eq!(french.scope(), LanguageScope::Individual);

        assert_eq!(languages[2].language_type(), LanguageType::Constructed);
    }

    #[test]
    fn tolerates_bom_and_blank_lines() {
        let text = format!("\u{feff}{SAMPLE}\n\n");
        assert_eq!(parse_table(&text).unwrap().len(), 3);
    }

    #[test]
    fn header_is_optional() {
        let text = "zxx\tzxx\tzxx\t\tS\tS\tNo linguistic content\t\n";
        let languages = parse_table(text).unwrap();
        assert_eq!(languages[0].scope(), LanguageScope::Special);
        assert_eq!(languages[0].language_type(), LanguageType::Special);
    }

    #[test]
    fn short_row_reports_line_number() {
        let text = "Id\tPart2B\tPart2T\tPart1\tScope\tLanguage_Type\tRef_Name\tComment\naaa\t\t\t\tI\n";
        match parse_table(text).unwrap_err() {
            Error::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_letters_are_rejected() {
        let err = parse_table("aaa\t\t\t\tX\tL\tGhotuo\t\n").unwrap_err();
        assert!(err.to_string().contains("unknown scope"));
        let err = parse_table("aaa\t\t\t\tI\tQ\tGhotuo\t\n").unwrap_err();
        assert!(err.to_string().contains("unknown language type"));
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = parse_table("aaa\t\t\t\tI\tL\t\t\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }
}
