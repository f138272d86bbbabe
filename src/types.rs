// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language classification enums.
//!
//! Both enums carry the single-letter codes used by the upstream ISO 639-3
//! table (`Language_Type` and `Scope` columns).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Historical/developmental classification of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageType {
    Ancient,
    Constructed,
    Extinct,
    Historical,
    Living,
    Special,
}

impl LanguageType {
    pub const ALL: [LanguageType; 6] = [
        LanguageType::Ancient,
        LanguageType::Constructed,
        LanguageType::Extinct,
        LanguageType::Historical,
        LanguageType::Living,
        LanguageType::Special,
    ];

    /// Parse the upstream `Language_Type` letter.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(LanguageType::Ancient),
            'C' => Some(LanguageType::Constructed),
            'E' => Some(LanguageType::Extinct),
            'H' => Some(LanguageType::Historical),
            'L' => Some(LanguageType::Living),
            'S' => Some(LanguageType::Special),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            LanguageType::Ancient => 'A',
            LanguageType::Constructed => 'C',
            LanguageType::Extinct => 'E',
            LanguageType::Historical => 'H',
            LanguageType::Living => 'L',
            LanguageType::Special => 'S',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LanguageType::Ancient => "ancient",
            LanguageType::Constructed => "constructed",
            LanguageType::Extinct => "extinct",
            LanguageType::Historical => "historical",
            LanguageType::Living => "living",
            LanguageType::Special => "special",
        }
    }
}

impl fmt::Display for LanguageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a code denotes an individual language, a grouping, or a
/// reserved/special code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageScope {
    Collective,
    Individual,
    Local,
    MacroLanguage,
    Special,
}

impl LanguageScope {
    pub const ALL: [LanguageScope; 5] = [
        LanguageScope::Collective,
        LanguageScope::Individual,
        LanguageScope::Local,
        LanguageScope::MacroLanguage,
        LanguageScope::Special,
    ];

    /// Parse the upstream `Scope` letter.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'C' => Some(LanguageScope::Collective),
            'I' => Some(LanguageScope::Individual),
            'L' => Some(LanguageScope::Local),
            'M' => Some(LanguageScope::MacroLanguage),
            'S' => Some(LanguageScope::Special),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            LanguageScope::Collective => 'C',
            LanguageScope::Individual => 'I',
            LanguageScope::Local => 'L',
            LanguageScope::MacroLanguage => 'M',
            LanguageScope::Special => 'S',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LanguageScope::Collective => "collective",
            LanguageScope::Individual => "individual",
            LanguageScope::Local => "local",
            LanguageScope::MacroLanguage => "macrolanguage",
            LanguageScope::Special => "special",
        }
    }
}

impl fmt::Display for LanguageScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_roundtrip() {
        for ty in LanguageType::ALL {
            assert_eq!(LanguageType::from_code(ty.code()), Some(ty));
        }
        assert_eq!(LanguageType::from_code('X'), None);
        assert_eq!(LanguageType::from_code('l'), None);
    }

    #[test]
    fn scope_codes_roundtrip() {
        for scope in LanguageScope::ALL {
            assert_eq!(LanguageScope::from_code(scope.code()), Some(scope));
        }
        assert_eq!(LanguageScope::from_code('Z'), None);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&LanguageScope::MacroLanguage).unwrap();
        assert_eq!(json, "\"macro_language\"");
        let ty: LanguageType = serde_json::from_str("\"constructed\"").unwrap();
        assert_eq!(ty, LanguageType::Constructed);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(LanguageType::Living.to_string(), "living");
        assert_eq!(LanguageScope::MacroLanguage.to_string(), "macrolanguage");
    }
}
