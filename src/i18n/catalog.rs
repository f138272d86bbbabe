// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale descriptors and the built-in locale catalog.
//!
//! The catalog is embedded at compile time as a static table, one row per
//! locale tag. Regional variants share their language codes, so a scan by
//! language code returns whichever variant comes first in the table.
//!
//! ## Adding a locale
//!
//! Append a `(tag, two_letter, three_letter, english_name)` row to `LOCALES`.
//! The three-letter code is the ISO 639-2 terminological code.

use serde::Serialize;
use std::sync::OnceLock;

/// A locale descriptor exposing its ISO 639 language codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Locale {
    /// BCP 47 style tag, e.g. `fr-FR`. Empty for the invariant locale.
    pub tag: String,
    pub two_letter: String,
    pub three_letter: String,
    pub english_name: String,
}

impl Locale {
    pub fn new(
        tag: impl Into<String>,
        two_letter: impl Into<String>,
        three_letter: impl Into<String>,
        english_name: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            two_letter: two_letter.into(),
            three_letter: three_letter.into(),
            english_name: english_name.into(),
        }
    }

    /// The "no specific locale" sentinel.
    pub fn invariant() -> &'static Locale {
        static INVARIANT: OnceLock<Locale> = OnceLock::new();
        INVARIANT.get_or_init(|| Locale::new("", "iv", "ivl", "Invariant Language"))
    }

    pub fn is_invariant(&self) -> bool {
        self.tag.is_empty()
    }
}

/// Something that can enumerate locale descriptors.
pub trait LocaleCatalog {
    fn locales(&self) -> &[Locale];
}

impl LocaleCatalog for Vec<Locale> {
    fn locales(&self) -> &[Locale] {
        self
    }
}

/// The locale catalog compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocales;

impl LocaleCatalog for BuiltinLocales {
    fn locales(&self) -> &[Locale] {
        static CATALOG: OnceLock<Vec<Locale>> = OnceLock::new();
        CATALOG.get_or_init(|| {
            LOCALES
                .iter()
                .map(|&(tag, two, three, name)| Locale::new(tag, two, three, name))
                .collect()
        })
    }
}

const LOCALES: &[(&str, &str, &str, &str)] = &[
    ("af-ZA", "af", "afr", "Afrikaans (South Africa)"),
    ("am-ET", "am", "amh", "Amharic (Ethiopia)"),
    ("ar-SA", "ar", "ara", "Arabic (Saudi Arabia)"),
    ("ar-EG", "ar", "ara", "Arabic (Egypt)"),
    ("az-Latn-AZ", "az", "aze", "Azerbaijani (Latin, Azerbaijan)"),
    ("be-BY", "be", "bel", "Belarusian (Belarus)"),
    ("bg-BG", "bg", "bul", "Bulgarian (Bulgaria)"),
    ("bn-BD", "bn", "ben", "Bangla (Bangladesh)"),
    ("bo-CN", "bo", "bod", "Tibetan (China)"),
    ("br-FR", "br", "bre", "Breton (France)"),
    ("bs-Latn-BA", "bs", "bos", "Bosnian (Latin, Bosnia & Herzegovina)"),
    ("ca-ES", "ca", "cat", "Catalan (Spain)"),
    ("cs-CZ", "cs", "ces", "Czech (Czechia)"),
    ("cy-GB", "cy", "cym", "Welsh (United Kingdom)"),
    ("da-DK", "da", "dan", "Danish (Denmark)"),
    ("de-DE", "de", "deu", "German (Germany)"),
    ("de-AT", "de", "deu", "German (Austria)"),
    ("de-CH", "de", "deu", "German (Switzerland)"),
    ("el-GR", "el", "ell", "Greek (Greece)"),
    ("en-US", "en", "eng", "English (United States)"),
    ("en-GB", "en", "eng", "English (United Kingdom)"),
    ("en-AU", "en", "eng", "English (Australia)"),
    ("en-CA", "en", "eng", "English (Canada)"),
    ("eo-001", "eo", "epo", "Esperanto (World)"),
    ("es-ES", "es", "spa", "Spanish (Spain)"),
    ("es-MX", "es", "spa", "Spanish (Mexico)"),
    ("et-EE", "et", "est", "Estonian (Estonia)"),
    ("eu-ES", "eu", "eus", "Basque (Spain)"),
    ("fa-IR", "fa", "fas", "Persian (Iran)"),
    ("fi-FI", "fi", "fin", "Finnish (Finland)"),
    ("fil-PH", "", "fil", "Filipino (Philippines)"),
    ("fo-FO", "fo", "fao", "Faroese (Faroe Islands)"),
    ("fr-FR", "fr", "fra", "French (France)"),
    ("fr-BE", "fr", "fra", "French (Belgium)"),
    ("fr-CA", "fr", "fra", "French (Canada)"),
    ("fr-CH", "fr", "fra", "French (Switzerland)"),
    ("fy-NL", "fy", "fry", "Western Frisian (Netherlands)"),
    ("ga-IE", "ga", "gle", "Irish (Ireland)"),
    ("gd-GB", "gd", "gla", "Scottish Gaelic (United Kingdom)"),
    ("gl-ES", "gl", "glg", "Galician (Spain)"),
    ("gu-IN", "gu", "guj", "Gujarati (India)"),
    ("ha-Latn-NG", "ha", "hau", "Hausa (Latin, Nigeria)"),
    ("haw-US", "", "haw", "Hawaiian (United States)"),
    ("he-IL", "he", "heb", "Hebrew (Israel)"),
    ("hi-IN", "hi", "hin", "Hindi (India)"),
    ("hr-HR", "hr", "hrv", "Croatian (Croatia)"),
    ("hu-HU", "hu", "hun", "Hungarian (Hungary)"),
    ("hy-AM", "hy", "hye", "Armenian (Armenia)"),
    ("id-ID", "id", "ind", "Indonesian (Indonesia)"),
    ("ig-NG", "ig", "ibo", "Igbo (Nigeria)"),
    ("is-IS", "is", "isl", "Icelandic (Iceland)"),
    ("it-IT", "it", "ita", "Italian (Italy)"),
    ("ja-JP", "ja", "jpn", "Japanese (Japan)"),
    ("ka-GE", "ka", "kat", "Georgian (Georgia)"),
    ("kk-KZ", "kk", "kaz", "Kazakh (Kazakhstan)"),
    ("km-KH", "km", "khm", "Khmer (Cambodia)"),
    ("kn-IN", "kn", "kan", "Kannada (India)"),
    ("ko-KR", "ko", "kor", "Korean (Korea)"),
    ("ky-KG", "ky", "kir", "Kyrgyz (Kyrgyzstan)"),
    ("lb-LU", "lb", "ltz", "Luxembourgish (Luxembourg)"),
    ("lo-LA", "lo", "lao", "Lao (Laos)"),
    ("lt-LT", "lt", "lit", "Lithuanian (Lithuania)"),
    ("lv-LV", "lv", "lav", "Latvian (Latvia)"),
    ("mi-NZ", "mi", "mri", "Maori (New Zealand)"),
    ("mk-MK", "mk", "mkd", "Macedonian (North Macedonia)"),
    ("ml-IN", "ml", "mal", "Malayalam (India)"),
    ("mn-MN", "mn", "mon", "Mongolian (Mongolia)"),
    ("mr-IN", "mr", "mar", "Marathi (India)"),
    ("ms-MY", "ms", "msa", "Malay (Malaysia)"),
    ("mt-MT", "mt", "mlt", "Maltese (Malta)"),
    ("my-MM", "my", "mya", "Burmese (Myanmar)"),
    ("nb-NO", "nb", "nob", "Norwegian Bokmål (Norway)"),
    ("ne-NP", "ne", "nep", "Nepali (Nepal)"),
    ("nl-NL", "nl", "nld", "Dutch (Netherlands)"),
    ("nl-BE", "nl", "nld", "Dutch (Belgium)"),
    ("nn-NO", "nn", "nno", "Norwegian Nynorsk (Norway)"),
    ("pa-IN", "pa", "pan", "Punjabi (India)"),
    ("pl-PL", "pl", "pol", "Polish (Poland)"),
    ("ps-AF", "ps", "pus", "Pashto (Afghanistan)"),
    ("pt-BR", "pt", "por", "Portuguese (Brazil)"),
    ("pt-PT", "pt", "por", "Portuguese (Portugal)"),
    ("quz-PE", "", "quz", "Quechua (Peru)"),
    ("rm-CH", "rm", "roh", "Romansh (Switzerland)"),
    ("ro-RO", "ro", "ron", "Romanian (Romania)"),
    ("ru-RU", "ru", "rus", "Russian (Russia)"),
    ("rw-RW", "rw", "kin", "Kinyarwanda (Rwanda)"),
    ("sa-IN", "sa", "san", "Sanskrit (India)"),
    ("se-NO", "se", "sme", "Northern Sami (Norway)"),
    ("si-LK", "si", "sin", "Sinhala (Sri Lanka)"),
    ("sk-SK", "sk", "slk", "Slovak (Slovakia)"),
    ("sl-SI", "sl", "slv", "Slovenian (Slovenia)"),
    ("sq-AL", "sq", "sqi", "Albanian (Albania)"),
    ("sr-Cyrl-RS", "sr", "srp", "Serbian (Cyrillic, Serbia)"),
    ("sv-SE", "sv", "swe", "Swedish (Sweden)"),
    ("sw-KE", "sw", "swa", "Kiswahili (Kenya)"),
    ("ta-IN", "ta", "tam", "Tamil (India)"),
    ("te-IN", "te", "tel", "Telugu (India)"),
    ("tg-Cyrl-TJ", "tg", "tgk", "Tajik (Cyrillic, Tajikistan)"),
    ("th-TH", "th", "tha", "Thai (Thailand)"),
    ("tk-TM", "tk", "tuk", "Turkmen (Turkmenistan)"),
    ("tr-TR", "tr", "tur", "Turkish (Turkey)"),
    ("tt-RU", "tt", "tat", "Tatar (Russia)"),
    ("ug-CN", "ug", "uig", "Uyghur (China)"),
    ("uk-UA", "uk", "ukr", "Ukrainian (Ukraine)"),
    ("ur-PK", "ur", "urd", "Urdu (Pakistan)"),
    ("uz-Latn-UZ", "uz", "uzb", "Uzbek (Latin, Uzbekistan)"),
    ("vi-VN", "vi", "vie", "Vietnamese (Vietnam)"),
    ("wo-SN", "wo", "wol", "Wolof (Senegal)"),
    ("xh-ZA", "xh", "xho", "isiXhosa (South Africa)"),
    ("yo-NG", "yo", "yor", "Yoruba (Nigeria)"),
    ("zh-CN", "zh", "zho", "Chinese (Simplified, China)"),
    ("zh-TW", "zh", "zho", "Chinese (Traditional, Taiwan)"),
    ("zu-ZA", "zu", "zul", "isiZulu (South Africa)"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_tags_are_unique() {
        let mut seen = HashSet::new();
        for locale in BuiltinLocales.locales() {
            assert!(seen.insert(&locale.tag), "duplicate tag {}", locale.tag);
        }
    }

    #[test]
    fn builtin_codes_have_fixed_lengths() {
        for locale in BuiltinLocales.locales() {
            assert!(
                locale.two_letter.is_empty() || locale.two_letter.len() == 2,
                "{} has bad two-letter code",
                locale.tag
            );
            assert_eq!(locale.three_letter.len(), 3, "{}", locale.tag);
        }
    }

    #[test]
    fn invariant_sentinel() {
        let invariant = Locale::invariant();
        assert!(invariant.is_invariant());
        assert!(!BuiltinLocales.locales().contains(invariant));
    }

    #[test]
    fn vec_is_a_catalog() {
        let catalog = vec![Locale::new("x-test", "xt", "xts", "Test")];
        assert_eq!(catalog.locales().len(), 1);
    }
}
