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
    ("Ghotuo", "aaa", None, None, None, T::Living, S::Individual),
    ("Alumu-Tesu", "aab", None, None, None, T::Living, S::Individual),
    ("Ari", "aac", None, None, None, T::Living, S::Individual),
    ("Amal", "aad", None, None, None, T::Living, S::Individual),
    ("Arbëreshë Albanian", "aae", None, None, None, T::Living, S::Individual),
    ("Aranadan", "aaf", None, None, None, T::Living, S::Individual),
    ("Ambrak", "aag", None, None, None, T::Living, S::Individual),
    ("Abu' Arapesh", "aah", None, None, None, T::Living, S::Individual),
    ("Arifama-Miniafia", "aai", None, None, None, T::Living, S::Individual),
    ("Ankave", "aak", None, None, None, T::Living, S::Individual),
    ("Afade", "aal", None, None, None, T::Living, S::Individual),
    ("Anambé", "aan", None, None, None, T::Living, S::Individual),
    ("Algerian Saharan Arabic", "aao", None, None, None, T::Living, S::Individual),
    ("Pará Arára", "aap", None, None, None, T::Living, S::Individual),
    ("Eastern Abnaki", "aaq", None, None, None, T::Extinct, S::Individual),
    ("Afar", "aar", Some("aar"), Some("aar"), Some("aa"), T::Living, S::Individual),
    ("Aasáx", "aas", None, None, None, T::Living, S::Individual),
    ("Arvanitika Albanian", "aat", None, None, None, T::Living, S::Individual),
    ("Abau", "aau", None, None, None, T::Living, S::Individual),
    ("Solong", "aaw", None, None, None, T::Living, S::Individual),
    ("Mandobo Atas", "aax", None, None, None, T::Living, S::Individual),
    ("Amarasi", "aaz", None, None, None, T::Living, S::Individual),
    ("Abé", "aba", None, None, None, T::Living, S::Individual),
    ("Bankon", "abb", None, None, None, T::Living, S::Individual),
    ("Ambala Ayta", "abc", None, None, None, T::Living, S::Individual),
    ("Manide", "abd", None, None, None, T::Living, S::Individual),
    ("Western Abnaki", "abe", None, None, None, T::Living, S::Individual),
    ("Abai Sungai", "abf", None, None, None, T::Living, S::Individual),
    ("Abaga", "abg", None, None, None, T::Living, S::Individual),
    ("Tajiki Arabic", "abh", None, None, None, T::Living, S::Individual),
    ("Abidji", "abi", None, None, None, T::Living, S::Individual),
    ("Aka-Bea", "abj", None, None, None, T::Extinct, S::Individual),
    ("Abkhazian", "abk", Some("abk"), Some("abk"), Some("ab"), T::Living, S::Individual),
    ("Lampung Nyo", "abl", None, None, None, T::Living, S::Individual),
    ("Abanyom", "abm", None, None, None, T::Living, S::Individual),
    ("Abua", "abn", None, None, None, T::Living, S::Individual),
    ("Abon", "abo", None, None, None, T::Living, S::Individual),
    ("Abellen Ayta", "abp", None, None, None, T::Living, S::Individual),
    ("Abaza", "abq", None, None, None, T::Living, S::Individual),
    ("Abron", "abr", None, None, None, T::Living, S::Individual),
    ("Ambonese Malay", "abs", None, None, None, T::Living, S::Individual),
    ("Ambulas", "abt", None, None, None, T::Living, S::Individual),
    ("Abure", "abu", None, None, None, T::Living, S::Individual),
    ("Baharna Arabic", "abv", None, None, None, T::Living, S::Individual),
    ("Pal", "abw", None, None, None, T::Living, S::Individual),
    ("Inabaknon", "abx", None, None, None, T::Living, S::Individual),
    ("Aneme Wake", "aby", None, None, None, T::Living, S::Individual),
    ("Abui", "abz", None, None, None, T::Living, S::Individual),
    ("Achagua", "aca", None, None, None, T::Living, S::Individual),
    ("Áncá", "acb", None, None, None, T::Living, S::Individual),
    ("Gikyode", "acd", None, None, None, T::Living, S::Individual),
    ("Achinese", "ace", Some("ace"), Some("ace"), None, T::Living, S::Individual),
    ("Saint Lucian Creole French", "acf", None, None, None, T::Living, S::Individual),
    ("Acoli", "ach", Some("ach"), Some("ach"), None, T::Living, S::Individual),
    ("Aka-Cari", "aci", None, None, None, T::Extinct, S::Individual),
    ("Aka-Kora", "ack", None, None, None, T::Extinct, S::Individual),
    ("Akar-Bale", "acl", None, None, None, T::Extinct, S::Individual),
    ("Mesopotamian Arabic", "acm", None, None, None, T::Living, S::Individual),
    ("Achang", "acn", None, None, None, T::Living, S::Individual),
    ("Eastern Acipa", "acp", None, None, None, T::Living, S::Individual),
    ("Ta'izzi-Adeni Arabic", "acq", None, None, None, T::Living, S::Individual),
    ("Achi", "acr", None, None, None, T::Living, S::Individual),
    ("Acroá", "acs", None, None, None, T::Extinct, S::Individual),
    ("Achterhoeks", "act", None, None, None, T::Living, S::Individual),
    ("Achuar-Shiwiar", "acu", None, None, None, T::Living, S::Individual),
    ("Achumawi", "acv", None, None, None, T::Living, S::Individual),
    ("Hijazi Arabic", "acw", None, None, None, T::Living, S::Individual),
    ("Omani Arabic", "acx", None, None, None, T::Living, S::Individual),
    ("Cypriot Arabic", "acy", None, None, None, T::Living, S::Individual),
    ("Acheron", "acz", None, None, None, T::Living, S::Individual),
    ("Adangme", "ada", Some("ada"), Some("ada"), None, T::Living, S::Individual),
    ("Atauran", "adb", None, None, None, T::Living, S::Individual),
    ("Lidzonka", "add", None, None, None, T::Living, S::Individual),
    ("Adele", "ade", None, None, None, T::Living, S::Individual),
    ("Dhofari Arabic", "adf", None, None, None, T::Living, S::Individual),
    ("Andegerebinha", "adg", None, None, None, T::Living, S::Individual),
    ("Adhola", "adh", None, None, None, T::Living, S::Individual),
    ("Adi", "adi", None, None, None, T::Living, S::Individual),
    ("Adioukrou", "adj", None, None, None, T::Living, S::Individual),
    ("Galo", "adl", None, None, None, T::Living, S::Individual),
    ("Adang", "adn", None, None, None, T::Living, S::Individual),
    ("Abu", "ado", None, None, None, T::Living, S::Individual),
    ("Adangbe", "adq", None, None, None, T::Living, S::Individual),
    ("Adonara", "adr", None, None, None, T::Living, S::Individual),
    ("Adamorobe Sign Language", "ads", None, None, None, T::Living, S::Individual),
    ("Adnyamathanha", "adt", None, None, None, T::Living, S::Individual),
    ("Aduge", "adu", None, None, None, T::Living, S::Individual),
    ("Amundava", "adw", None, None, None, T::Living, S::Individual),
    ("Amdo Tibetan", "adx", None, None, None, T::Living, S::Individual),
    ("Adyghe", "ady", Some("ady"), Some("ady"), None, T::Living, S::Individual),
    ("Adzera", "adz", None, None, None, T::Living, S::Individual),
    ("Areba", "aea", None, None, None, T::Extinct, S::Individual),
    ("Tunisian Arabic", "aeb", None, None, None, T::Living, S::Individual),
    ("Saidi Arabic", "aec", None, None, None, T::Living, S::Individual),
    ("Argentine Sign Language", "aed", None, None, None, T::Living, S::Individual),
    ("Northeast Pashai", "aee", None, None, None, T::Living, S::Individual),
    ("Haeke", "aek", None, None, None, T::Living, S::Individual),
    ("Ambele", "ael", None, None, None, T::Living, S::Individual),
    ("Arem", "aem", None, None, None, T::Living, S::Individual),
    ("Armenian Sign Language", "aen", None, None, None, T::Living, S::Individual),
    ("Aer", "aeq", None, None, None, T::Living, S::Individual),
    ("Eastern Arrernte", "aer", None, None, None, T::Living, S::Individual),
    ("Alsea", "aes", None, None, None, T::Extinct, S::Individual),
    ("Akeu", "aeu", None, None, None, T::Living, S::Individual),
    ("Ambakich", "aew", None, None, None, T::Living, S::Individual),
    ("Amele", "aey", None, None, None, T::Living, S::Individual),
    ("Aeka", "aez", None, None, None, T::Living, S::Individual),
    ("Gulf Arabic", "afb", None, None, None, T::Living, S::Individual),
    ("Andai", "afd", None, None, None, T::Living, S::Individual),
    ("Putukwam", "afe", None, None, None, T::Living, S::Individual),
    ("Afghan Sign Language", "afg", None, None, None, T::Living, S::Individual),
    ("Afrihili", "afh", Some("afh"), Some("afh"), None, T::Constructed, S::Individual),
    ("Akrukay", "afi", None, None, None, T::Living, S::Individual),
    ("Nanubae", "afk", None, None, None, T::Living, S::Individual),
    ("Defaka", "afn", None, None, None, T::Living, S::Individual),
    ("Eloyi", "afo", None, None, None, T::Living, S::Individual),
    ("Tapei", "afp", None, None, None, T::Living, S::Individual),
    ("Afrikaans", "afr", Some("afr"), Some("afr"), Some("af"), T::Living, S::Individual),
    ("Afro-Seminole Creole", "afs", None, None, None, T::Living, S::Individual),
    ("Afitti", "aft", None, None, None, T::Living, S::Individual),
    ("Awutu", "afu", None, None, None, T::Living, S::Individual),
    ("Obokuitai", "afz", None, None, None, T::Living, S::Individual),
    ("Aguano", "aga", None, None, None, T::Extinct, S::Individual),
    ("Legbo", "agb", None, None, None, T::Living, S::Individual),
    ("Agatu", "agc", None, None, None, T::Living, S::Individual),
    ("Agarabi", "agd", None, None, None, T::Living, S::Individual),
    ("Angal", "age", None, None, None, T::Living, S::Individual),
    ("Arguni", "agf", None, None, None, T::Living, S::Individual),
    ("Angor", "agg", None, None, None, T::Living, S::Individual),
    ("Ngelima", "agh", None, None, None, T::Living, S::Individual),
    ("Agariya", "agi", None, None, None, T::Living, S::Individual),
    ("Argobba", "agj", None, None, None, T::Living, S::Individual),
    ("Isarog Agta", "agk", None, None, None, T::Living, S::Individual),
    ("Fembe", "agl", None, None, None, T::Living, S::Individual),
    ("Angaataha", "agm", None, None, None, T::Living, S::Individual),
    ("Agutaynen", "agn", None, None, None, T::Living, S::Individual),
    ("Tainae", "ago", None, None, None, T::Living, S::Individual),
    ("Aghem", "agq", None, None, None, T::Living, S::Individual),
    ("Aguaruna", "agr", None, None, None, T::Living, S::Individual),
    ("Esimbi", "ags", None, None, None, T::Living, S::Individual),
    ("Central Cagayan Agta", "agt", None, None, None, T::Living, S::Individual),
    ("Aguacateco", "agu", None, None, None, T::Living, S::Individual),
    ("Remontado Dumagat", "agv", None, None, None, T::Living, S::Individual),
    ("Kahua", "agw", None, None, None, T::Living, S::Individual),
    ("Aghul", "agx", None, None, None, T::Living, S::Individual),
    ("Southern Alta", "agy", None, None, None, T::Living, S::Individual),
    ("Mt. Iriga Agta", "agz", None, None, None, T::Living, S::Individual),
    ("Ahanta", "aha", None, None, None, T::Living, S::Individual),
    ("Axamb", "ahb", None, None, None, T::Living, S::Individual),
    ("Qimant", "ahg", None, None, None, T::Living, S::Individual),
    ("Aghu", "ahh", None, None, None, T::Living, S::Individual),
    ("Tiagbamrin Aizi", "ahi", None, None, None, T::Living, S::Individual),
    ("Akha", "ahk", None, None, None, T::Living, S::Individual),
    ("Igo", "ahl", None, None, None, T::Living, S::Individual),
    ("Mobumrin Aizi", "ahm", None, None, None, T::Living, S::Individual),
    ("Àhàn", "ahn", None, None, None, T::Living, S::Individual),
    ("Ahom", "aho", None, None, None, T::Extinct, S::Individual),
    ("Aproumu Aizi", "ahp", None, None, None, T::Living, S::Individual),
    ("Ahirani", "ahr", None, None, None, T::Living, S::Individual),
    ("Ashe", "ahs", None, None, None, T::Living, S::Individual),
    ("Ahtena", "aht", None, None, None, T::Living, S::Individual),
    ("Arosi", "aia", None, None, None, T::Living, S::Individual),
    ("Ainu (China)", "aib", None, None, None, T::Living, S::Individual),
    ("Ainbai", "aic", None, None, None, T::Living, S::Individual),
    ("Alngith", "aid", None, None, None, T::Extinct, S::Individual),
    ("Amara", "aie", None, None, None, T::Living, S::Individual),
    ("Agi", "aif", None, None, None, T::Living, S::Individual),
    ("Antigua and Barbuda Creole English", "aig", None, None, None, T::Living, S::Individual),
    ("Ai-Cham", "aih", None, None, None, T::Living, S::Individual),
    ("Assyrian Neo-Aramaic", "aii", None, None, None, T::Living, S::Individual),
    ("Lishanid Noshan", "aij", None, None, None, T::Living, S::Individual),
    ("Ake", "aik", None, None, None, T::Living, S::Individual),
    ("Aimele", "ail", None, None, None, T::Living, S::Individual),
    ("Aimol", "aim", None, None, None, T::Living, S::Individual),
    ("Ainu (Japan)", "ain", Some("ain"), Some("ain"), None, T::Living, S::Individual),
    ("Aiton", "aio", None, None, None, T::Living, S::Individual),
    ("Burumakok", "aip", None, None, None, T::Living, S::Individual),
    ("Aimaq", "aiq", None, None, None, T::Living, S::Individual),
    ("Airoran", "air", None, None, None, T::Living, S::Individual),
    ("Arikem", "ait", None, None, None, T::Extinct, S::Individual),
    ("Aari", "aiw", None, None, None, T::Living, S::Individual),
    ("Aighon", "aix", None, None, None, T::Living, S::Individual),
    ("Ali", "aiy", None, None, None, T::Living, S::Individual),
    ("Aja (South Sudan)", "aja", None, None, None, T::Living, S::Individual),
    ("Aja (Benin)", "ajg", None, None, None, T::Living, S::Individual),
    ("Ajië", "aji", None, None, None, T::Living, S::Individual),
    ("Andajin", "ajn", None, None, None, T::Living, S::Individual),
    ("South Levantine Arabic", "ajp", None, None, None, T::Living, S::Individual),
    ("Algerian Jewish Sign Language", "ajs", None, None, None, T::Living, S::Individual),
    ("Judeo-Moroccan Arabic", "aju", None, None, None, T::Living, S::Individual),
    ("Ajawa", "ajw", None, None, None, T::Extinct, S::Individual),
    ("Amri Karbi", "ajz", None, None, None, T::Living, S::Individual),
    ("Akan", "aka", Some("aka"), Some("aka"), Some("ak"), T::Living, S::MacroLanguage),
    ("Batak Angkola", "akb", None, None, None, T::Living, S::Individual),
    ("Mpur", "akc", None, None, None, T::Living, S::Individual),
    ("Ukpet-Ehom", "akd", None, None, None, T::Living, S::Individual),
    ("Akawaio", "ake", None, None, None, T::Living, S::Individual),
    ("Akpa", "akf", None, None, None, T::Living, S::Individual),
    ("Anakalangu", "akg", None, None, None, T::Living, S::Individual),
    ("Angal Heneng", "akh", None, None, None, T::Living, S::Individual),
    ("Aiome", "aki", None, None, None, T::Living, S::Individual),
    ("Aka-Jeru", "akj", None, None, None, T::Extinct, S::Individual),
    ("Akkadian", "akk", Some("akk"), Some("akk"), None, T::Ancient, S::Individual),
    ("Aklanon", "akl", None, None, None, T::Living, S::Individual),
    ("Aka-Bo", "akm", None, None, None, T::Extinct, S::Individual),
    ("Akurio", "ako", None, None, None, T::Living, S::Individual),
    ("Siwu", "akp", None, None, None, T::Living, S::Individual),
    ("Ak", "akq", None, None, None, T::Living, S::Individual),
    ("Araki", "akr", None, None, None, T::Living, S::Individual),
    ("Akaselem", "aks", None, None, None, T::Living, S::Individual),
    ("Akolet", "akt", None, None, None, T::Living, S::Individual),
    ("Akum", "aku", None, None, None, T::Living, S::Individual),
    ("Akhvakh", "akv", None, None, None, T::Living, S::Individual),
    ("Akwa", "akw", None, None, None, T::Living, S::Individual),
    ("Aka-Kede", "akx", None, None, None, T::Extinct, S::Individual),
    ("Aka-Kol", "aky", None, None, None, T::Extinct, S::Individual),
    ("Alabama", "akz", None, None, None, T::Living, S::Individual),
    ("Alago", "ala", None, None, None, T::Living, S::Individual),
    ("Qawasqar", "alc", None, None, None, T::Living, S::Individual),
    ("Alladian", "ald", None, None, None, T::Living, S::Individual),
    ("Aleut", "ale", Some("ale"), Some("ale"), None, T::Living, S::Individual),
    ("Alege", "alf", None, None, None, T::Living, S::Individual),
    ("Alawa", "alh", None, None, None, T::Living, S::Individual),
    ("Amaimon", "ali", None, None, None, T::Living, S::Individual),
    ("Alangan", "alj", None, None, None, T::Living, S::Individual),
    ("Alak", "alk", None, None, None, T::Living, S::Individual),
    ("Allar", "all", None, None, None, T::Living, S::Individual),
    ("Amblong", "alm", None, None, None, T::Living, S::Individual),
    ("Gheg Albanian", "aln", None, None, None, T::Living, S::Individual),
    ("Larike-Wakasihu", "alo", None, None, None, T::Living, S::Individual),
    ("Alune", "alp", None, None, None, T::Living, S::Individual),
    ("Algonquin", "alq", None, None, None, T::Living, S::Individual),
    ("Alutor", "alr", None, None, None, T::Living, S::Individual),
    ("Tosk Albanian", "als", None, None, None, T::Living, S::Individual),
    ("Southern Altai", "alt", Some("alt"), Some("alt"), None, T::Living, S::Individual),
    ("'Are'are", "alu", None, None, None, T::Living, S::Individual),
    ("Alaba-K’abeena", "alw", None, None, None, T::Living, S::Individual),
    ("Amol", "alx", None, None, None, T::Living, S::Individual),
    ("Alyawarr", "aly", None, None, None, T::Living, S::Individual),
    ("Alur", "alz", None, None, None, T::Living, S::Individual),
    ("Amanayé", "ama", None, None, None, T::Extinct, S::Individual),
    ("Ambo", "amb", None, None, None, T::Living, S::Individual),
    ("Amahuaca", "amc", None, None, None, T::Living, S::Individual),
    ("Yanesha'", "ame", None, None, None, T::Living, S::Individual),
    ("Hamer-Banna", "amf", None, None, None, T::Living, S::Individual),
    ("Amurdak", "amg", None, None, None, T::Living, S::Individual),
    ("Amharic", "amh", Some("amh"), Some("amh"), Some("am"), T::Living, S::Individual),
    ("Amis", "ami", None, None, None, T::Living, S::Individual),
    ("Amdang", "amj", None, None, None, T::Living, S::Individual),
    ("Ambai", "amk", None, None, None, T::Living, S::Individual),
    ("War-Jaintia", "aml", None, None, None, T::Living, S::Individual),
    ("Ama (Papua New Guinea)", "amm", None, None, None, T::Living, S::Individual),
    ("Amanab", "amn", None, None, None, T::Living, S::Individual),
    ("Amo", "amo", None, None, None, T::Living, S::Individual),
    ("Alamblak", "amp", None, None, None, T::Living, S::Individual),
    ("Amahai", "amq", None, None, None, T::Living, S::Individual),
    ("Amarakaeri", "amr", None, None, None, T::Living, S::Individual),
    ("Southern Amami-Oshima", "ams", None, None, None, T::Living, S::Individual),
    ("Amto", "amt", None, None, None, T::Living, S::Individual),
    ("Guerrero Amuzgo", "amu", None, None, None, T::Living, S::Individual),
    ("Ambelau", "amv", None, None, None, T::Living, S::Individual),
    ("Western Neo-Aramaic", "amw", None, None, None, T::Living, S::Individual),
    ("Anmatyerre", "amx", None, None, None, T::Living, S::Individual),
    ("Ami", "amy", None, None, None, T::Living, S::Individual),
    ("Atampaya", "amz", None, None, None, T::Extinct, S::Individual),
    ("Andaqui", "ana", None, None, None, T::Extinct, S::Individual),
    ("Andoa", "anb", None, None, None, T::Extinct, S::Individual),
    ("Ngas", "anc", None, None, None, T::Living, S::Individual),
    ("Ansus", "and", None, None, None, T::Living, S::Individual),
    ("Xârâcùù", "ane", None, None, None, T::Living, S::Individual),
    ("Animere", "anf", None, None, None, T::Living, S::Individual),
    ("Old English (ca. 450-1100)", "ang", Some("ang"), Some("ang"), None, T::Historical, S::Individual),
    ("Nend", "anh", None, None, None, T::Living, S::Individual),
    ("Andi", "ani", None, None, None, T::Living, S::Individual),
    ("Anor", "anj", None, None, None, T::Living, S::Individual),
    ("Goemai", "ank", None, None, None, T::Living, S::Individual),
    ("Anu-Hkongso Chin", "anl", None, None, None, T::Living, S::Individual),
    ("Anal", "anm", None, None, None, T::Living, S::Individual),
    ("Obolo", "ann", None, None, None, T::Living, S::Individual),
    ("Andoque", "ano", None, None, None, T::Living, S::Individual),
    ("Angika", "anp", Some("anp"), Some("anp"), None, T::Living, S::Individual),
    ("Jarawa (India)", "anq", None, None, None, T::Living, S::Individual),
    ("Andh", "anr", None, None, None, T::Living, S::Individual),
    ("Anserma", "ans", None, None, None, T::Extinct, S::Individual),
    ("Antakarinya", "ant", None, None, None, T::Living, S::Individual),
    ("Anuak", "anu", None, None, None, T::Living, S::Individual),
    ("Denya", "anv", None, None, None, T::Living, S::Individual),
    ("Anaang", "anw", None, None, None, T::Living, S::Individual),
    ("Andra-Hus", "anx", None, None, None, T::Living, S::Individual),
    ("Anyin", "any", None, None, None, T::Living, S::Individual),
    ("Anem", "anz", None, None, None, T::Living, S::Individual),
    ("Angolar", "aoa", None, None, None, T::Living, S::Individual),
    ("Abom", "aob", None, None, None, T::Living, S::Individual),
    ("Pemon", "aoc", None, None, None, T::Living, S::Individual),
    ("Andarum", "aod", None, None, None, T::Living, S::Individual),
    ("Angal Enen", "aoe", None, None, None, T::Living, S::Individual),
    ("Bragat", "aof", None, None, None, T::Living, S::Individual),
    ("Angoram", "aog", None, None, None, T::Living, S::Individual),
    ("Anindilyakwa", "aoi", None, None, None, T::Living, S::Individual),
    ("Mufian", "aoj", None, None, None, T::Living, S::Individual),
    ("Arhö", "aok", None, None, None, T::Living, S::Individual),
    ("Alor", "aol", None, None, None, T::Living, S::Individual),
    ("Ömie", "aom", None, None, None, T::Living, S::Individual),
    ("Bumbita Arapesh", "aon", None, None, None, T::Living, S::Individual),
    ("Aore", "aor", None, None, None, T::Extinct, S::Individual),
    ("Taikat", "aos", None, None, None, T::Living, S::Individual),
    ("Atong (India)", "aot", None, None, None, T::Living, S::Individual),
    ("A'ou", "aou", None, None, None, T::Living, S::Individual),
    ("Atorada", "aox", None, None, None, T::Living, S::Individual),
    ("Uab Meto", "aoz", None, None, None, T::Living, S::Individual),
    ("Sa'a", "apb", None, None, None, T::Living, S::Individual),
    ("North Levantine Arabic", "apc", None, None, None, T::Living, S::Individual),
    ("Sudanese Arabic", "apd", None, None, None, T::Living, S::Individual),
    ("Bukiyip", "ape", None, None, None, T::Living, S::Individual),
    ("Pahanan Agta", "apf", None, None, None, T::Living, S::Individual),
    ("Ampanang", "apg", None, None, None, T::Living, S::Individual),
    ("Athpariya", "aph", None, None, None, T::Living, S::Individual),
    ("Apiaká", "api", None, None, None, T::Living, S::Individual),
    ("Jicarilla Apache", "apj", None, None, None, T::Living, S::Individual),
    ("Kiowa Apache", "apk", None, None, None, T::Living, S::Individual),
    ("Lipan Apache", "apl", None, None, None, T::Living, S::Individual),
    ("Mescalero-Chiricahua Apache", "apm", None, None, None, T::Living, S::Individual),
    ("Apinayé", "apn", None, None, None, T::Living, S::Individual),
    ("Ambul", "apo", None, None, None, T::Living, S::Individual),
    ("Apma", "app", None, None, None, T::Living, S::Individual),
    ("A-Pucikwar", "apq", None, None, None, T::Living, S::Individual),
    ("Arop-Lokep", "apr", None, None, None, T::Living, S::Individual),
    ("Arop-Sissano", "aps", None, None, None, T::Living, S::Individual),
    ("Apatani", "apt", None, None, None, T::Living, S::Individual),
    ("Apurinã", "apu", None, None, None, T::Living, S::Individual),
    ("Alapmunte", "apv", None, None, None, T::Extinct, S::Individual),
    ("Western Apache", "apw", None, None, None, T::Living, S::Individual),
    ("Aputai", "apx", None, None, None, T::Living, S::Individual),
    ("Apalaí", "apy", None, None, None, T::Living, S::Individual),
    ("Safeyoka", "apz", None, None, None, T::Living, S::Individual),
    ("Archi", "aqc", None, None, None, T::Living, S::Individual),
    ("Ampari Dogon", "aqd", None, None, None, T::Living, S::Individual),
    ("Arigidi", "aqg", None, None, None, T::Living, S::Individual),
    ("Aninka", "aqk", None, None, None, T::Living, S::Individual),
    ("Atohwaim", "aqm", None, None, None, T::Living, S::Individual),
    ("Northern Alta", "aqn", None, None, None, T::Living, S::Individual),
    ("Atakapa", "aqp", None, None, None, T::Extinct, S::Individual),
    ("Arhâ", "aqr", None, None, None, T::Living, S::Individual),
    ("Angaité", "aqt", None, None, None, T::Living, S::Individual),
    ("Akuntsu", "aqz", None, None, None, T::Living, S::Individual),
    ("Arabic", "ara", Some("ara"), Some("ara"), Some("ar"), T::Living, S::MacroLanguage),
    ("Standard Arabic", "arb", None, None, None, T::Living, S::Individual),
    ("Official Aramaic (700-300 BCE)", "arc", Some("arc"), Some("arc"), None, T::Ancient, S::Individual),
    ("Arabana", "ard", None, None, None, T::Extinct, S::Individual),
    ("Western Arrarnta", "are", None, None, None, T::Living, S::Individual),
    ("Aragonese", "arg", Some("arg"), Some("arg"), Some("an"), T::Living, S::Individual),
    ("Arhuaco", "arh", None, None, None, T::Living, S::Individual),
    ("Arikara", "ari", None, None, None, T::Living, S::Individual),
    ("Arapaso", "arj", None, None, None, T::Extinct, S::Individual),
    ("Arikapú", "ark", None, None, None, T::Living, S::Individual),
    ("Arabela", "arl", None, None, None, T::Living, S::Individual),
    ("Mapudungun", "arn", Some("arn"), Some("arn"), None, T::Living, S::Individual),
    ("Araona", "aro", None, None, None, T::Living, S::Individual),
    ("Arapaho", "arp", Some("arp"), Some("arp"), None, T::Living, S::Individual),
    ("Algerian Arabic", "arq", None, None, None, T::Living, S::Individual),
    ("Karo (Brazil)", "arr", None, None, None, T::Living, S::Individual),
    ("Najdi Arabic", "ars", None, None, None, T::Living, S::Individual),
    ("Aruá (Amazonas State)", "aru", None, None, None, T::Extinct, S::Individual),
    ("Arbore", "arv", None, None, None, T::Living, S::Individual),
    ("Arawak", "arw", Some("arw"), Some("arw"), None, T::Living, S::Individual),
    ("Aruá (Rodonia State)", "arx", None, None, None, T::Living, S::Individual),
    ("Moroccan Arabic", "ary", None, None, None, T::Living, S::Individual),
    ("Egyptian Arabic", "arz", None, None, None, T::Living, S::Individual),
    ("Asu (Tanzania)", "asa", None, None, None, T::Living, S::Individual),
    ("Assiniboine", "asb", None, None, None, T::Living, S::Individual),
    ("Casuarina Coast Asmat", "asc", None, None, None, T::Living, S::Individual),
    ("American Sign Language", "ase", None, None, None, T::Living, S::Individual),
    ("Auslan", "asf", None, None, None, T::Living, S::Individual),
    ("Cishingini", "asg", None, None, None, T::Living, S::Individual),
    ("Abishira", "ash", None, None, None, T::Extinct, S::Individual),
    ("Buruwai", "asi", None, None, None, T::Living, S::Individual),
    ("Sari", "asj", None, None, None, T::Living, S::Individual),
    ("Ashkun", "ask", None, None, None, T::Living, S::Individual),
    ("Asilulu", "asl", None, None, None, T::Living, S::Individual),
    ("Assamese", "asm", Some("asm"), Some("asm"), Some("as"), T::Living, S::Individual),
    ("Xingú Asuriní", "asn", None, None, None, T::Living, S::Individual),
    ("Dano", "aso", None, None, None, T::Living, S::Individual),
    ("Algerian Sign Language", "asp", None, None, None, T::Living, S::Individual),
    ("Austrian Sign Language", "asq", None, None, None, T::Living, S::Individual),
    ("Asuri", "asr", None, None, None, T::Living, S::Individual),
    ("Ipulo", "ass", None, None, None, T::Living, S::Individual),
    ("Asturian", "ast", Some("ast"), Some("ast"), None, T::Living, S::Individual),
    ("Tocantins Asurini", "asu", None, None, None, T::Living, S::Individual),
    ("Asoa", "asv", None, None, None, T::Living, S::Individual),
    ("Australian Aborigines Sign Language", "asw", None, None, None, T::Living, S::Individual),
    ("Muratayak", "asx", None, None, None, T::Living, S::Individual),
    ("Yaosakor Asmat", "asy", None, None, None, T::Living, S::Individual),
    ("As", "asz", None, None, None, T::Living, S::Individual),
    ("Pele-Ata", "ata", None, None, None, T::Living, S::Individual),
    ("Zaiwa", "atb", None, None, None, T::Living, S::Individual),
    ("Atsahuaca", "atc", None, None, None, T::Extinct, S::Individual),
    ("Ata Manobo", "atd", None, None, None, T::Living, S::Individual),
    ("Atemble", "ate", None, None, None, T::Living, S::Individual),
    ("Ivbie North-Okpela-Arhe", "atg", None, None, None, T::Living, S::Individual),
    ("Attié", "ati", None, None, None, T::Living, S::Individual),
    ("Atikamekw", "atj", None, None, None, T::Living, S::Individual),
    ("Ati", "atk", None, None, None, T::Living, S::Individual),
    ("Mt. Iraya Agta", "atl", None, None, None, T::Living, S::Individual),
    ("Ata", "atm", None, None, None, T::Living, S::Individual),
    ("Ashtiani", "atn", None, None, None, T::Living, S::Individual),
    ("Atong (Cameroon)", "ato", None, None, None, T::Living, S::Individual),
    ("Pudtol Atta", "atp", None, None, None, T::Living, S::Individual),
    ("Aralle-Tabulahan", "atq", None, None, None, T::Living, S::Individual),
    ("Waimiri-Atroari", "atr", None, None, None, T::Living, S::Individual),
    ("Gros Ventre", "ats", None, None, None, T::Living, S::Individual),
    ("Pamplona Atta", "att", None, None, None, T::Living, S::Individual),
    ("Reel", "atu", None, None, None, T::Living, S::Individual),
    ("Northern Altai", "atv", None, None, None, T::Living, S::Individual),
    ("Atsugewi", "atw", None, None, None, T::Living, S::Individual),
    ("Arutani", "atx", None, None, None, T::Living, S::Individual),
    ("Aneityum", "aty", None, None, None, T::Living, S::Individual),
    ("Arta", "atz", None, None, None, T::Living, S::Individual),
    ("Asumboa", "aua", None, None, None, T::Living, S::Individual),
    ("Alugu", "aub", None, None, None, T::Living, S::Individual),
    ("Waorani", "auc", None, None, None, T::Living, S::Individual),
    ("Anuta", "aud", None, None, None, T::Living, S::Individual),
    ("Aguna", "aug", None, None, None, T::Living, S::Individual),
    ("Aushi", "auh", None, None, None, T::Living, S::Individual),
    ("Anuki", "aui", None, None, None, T::Living, S::Individual),
    ("Awjilah", "auj", None, None, None, T::Living, S::Individual),
    ("Heyo", "auk", None, None, None, T::Living, S::Individual),
    ("Aulua", "aul", None, None, None, T::Living, S::Individual),
    ("Asu (Nigeria)", "aum", None, None, None, T::Living, S::Individual),
    ("Molmo One", "aun", None, None, None, T::Living, S::Individual),
    ("Auyokawa", "auo", None, None, None, T::Extinct, S::Individual),
    ("Makayam", "aup", None, None, None, T::Living, S::Individual),
    ("Anus", "auq", None, None, None, T::Living, S::Individual),
    ("Aruek", "aur", None, None, None, T::Living, S::Individual),
    ("Austral", "aut", None, None, None, T::Living, S::Individual),
    ("Auye", "auu", None, None, None, T::Living, S::Individual),
    ("Awyi", "auw", None, None, None, T::Living, S::Individual),
    ("Aurá", "aux", None, None, None, T::Extinct, S::Individual),
    ("Awiyaana", "auy", None, None, None, T::Living, S::Individual),
    ("Uzbeki Arabic", "auz", None, None, None, T::Living, S::Individual),
    ("Avaric", "ava", Some("ava"), Some("ava"), Some("av"), T::Living, S::Individual),
    ("Avau", "avb", None, None, None, T::Living, S::Individual),
    ("Alviri-Vidari", "avd", None, None, None, T::Living, S::Individual),
    ("Avestan", "ave", Some("ave"), Some("ave"), Some("ae"), T::Ancient, S::Individual),
    ("Avikam", "avi", None, None, None, T::Living, S::Individual),
    ("Kotava", "avk", None, None, None, T::Constructed, S::Individual),
    ("Eastern Egyptian Bedawi Arabic", "avl", None, None, None, T::Living, S::Individual),
    ("Angkamuthi", "avm", None, None, None, T::Extinct, S::Individual),
    ("Avatime", "avn", None, None, None, T::Living, S::Individual),
    ("Agavotaguerra", "avo", None, None, None, T::Extinct, S::Individual),
    ("Aushiri", "avs", None, None, None, T::Extinct, S::Individual),
    ("Au", "avt", None, None, None, T::Living, S::Individual),
    ("Avokaya", "avu", None, None, None, T::Living, S::Individual),
    ("Avá-Canoeiro", "avv", None, None, None, T::Living, S::Individual),
    ("Awadhi", "awa", Some("awa"), Some("awa"), None, T::Living, S::Individual),
    ("Awa (Papua New Guinea)", "awb", None, None, None, T::Living, S::Individual),
    ("Cicipu", "awc", None, None, None, T::Living, S::Individual),
    ("Awetí", "awe", None, None, None, T::Living, S::Individual),
    ("Anguthimri", "awg", None, None, None, T::Extinct, S::Individual),
    ("Awbono", "awh", None, None, None, T::Living, S::Individual),
    ("Aekyom", "awi", None, None, None, T::Living, S::Individual),
    ("Awabakal", "awk", None, None, None, T::Extinct, S::Individual),
    ("Arawum", "awm", None, None, None, T::Living, S::Individual),
    ("Awngi", "awn", None, None, None, T::Living, S::Individual),
    ("Awak", "awo", None, None, None, T::Living, S::Individual),
    ("Awera", "awr", None, None, None, T::Living, S::Individual),
    ("South Awyu", "aws", None, None, None, T::Living, S::Individual),
    ("Araweté", "awt", None, None, None, T::Living, S::Individual),
    ("Central Awyu", "awu", None, None, None, T::Living, S::Individual),
    ("Jair Awyu", "awv", None, None, None, T::Living, S::Individual),
    ("Awun", "aww", None, None, None, T::Living, S::Individual),
    ("Awara", "awx", None, None, None, T::Living, S::Individual),
    ("Edera Awyu", "awy", None, None, None, T::Living, S::Individual),
    ("Abipon", "axb", None, None, None, T::Extinct, S::Individual),
    ("Ayerrerenge", "axe", None, None, None, T::Extinct, S::Individual),
    ("Mato Grosso Arára", "axg", None, None, None, T::Extinct, S::Individual),
    ("Yaka (Central African Republic)", "axk", None, None, None, T::Living, S::Individual),
    ("Lower Southern Aranda", "axl", None, None, None, T::Extinct, S::Individual),
    ("Middle Armenian", "axm", None, None, None, T::Historical, S::Individual),
    ("Xârâgurè", "axx", None, None, None, T::Living, S::Individual),
    ("Awar", "aya", None, None, None, T::Living, S::Individual),
    ("Ayizo Gbe", "ayb", None, None, None, T::Living, S::Individual),
    ("Southern Aymara", "ayc", None, None, None, T::Living, S::Individual),
    ("Ayabadhu", "ayd", None, None, None, T::Extinct, S::Individual),
    ("Ayere", "aye", None, None, None, T::Living, S::Individual),
    ("Ginyanga", "ayg", None, None, None, T::Living, S::Individual),
    ("Hadrami Arabic", "ayh", None, None, None, T::Living, S::Individual),
    ("Leyigha", "ayi", None, None, None, T::Living, S::Individual),
    ("Akuku", "ayk", None, None, None, T::Living, S::Individual),
    ("Libyan Arabic", "ayl", None, None, None, T::Living, S::Individual),
    ("Aymara", "aym", Some("aym"), Some("aym"), Some("ay"), T::Living, S::MacroLanguage),
    ("Sanaani Arabic", "ayn", None, None, None, T::Living, S::Individual),
    ("Ayoreo", "ayo", None, None, None, T::Living, S::Individual),
    ("North Mesopotamian Arabic", "ayp", None, None, None, T::Living, S::Individual),
    ("Ayi (Papua New Guinea)", "ayq", None, None, None, T::Living, S::Individual),
    ("Central Aymara", "ayr", None, None, None, T::Living, S::Individual),
    ("Sorsogon Ayta", "ays", None, None, None, T::Living, S::Individual),
    ("Magbukun Ayta", "ayt", None, None, None, T::Living, S::Individual),
    ("Ayu", "ayu", None, None, None, T::Living, S::Individual),
    ("Mai Brat", "ayz", None, None, None, T::Living, S::Individual),
    ("Azha", "aza", None, None, None, T::Living, S::Individual),
    ("South Azerbaijani", "azb", None, None, None, T::Living, S::Individual),
    ("Eastern Durango Nahuatl", "azd", None, None, None, T::Living, S::Individual),
    ("Azerbaijani", "aze", Some("aze"), Some("aze"), Some("az"), T::Living, S::MacroLanguage),
    ("San Pedro Amuzgos Amuzgo", "azg", None, None, None, T::Living, S::Individual),
    ("North Azerbaijani", "azj", None, None, None, T::Living, S::Individual),
    ("Ipalapa Amuzgo", "azm", None, None, None, T::Living, S::Individual),
    ("Western Durango Nahuatl", "azn", None, None, None, T::Living, S::Individual),
    ("Awing", "azo", None, None, None, T::Living, S::Individual),
    ("Faire Atta", "azt", None, None, None, T::Living, S::Individual),
    ("Highland Puebla Nahuatl", "azz", None, None, None, T::Living, S::Individual),
    ("Babatana", "baa", None, None, None, T::Living, S::Individual),
    ("Bainouk-Gunyuño", "bab", None, None, None, T::Living, S::Individual),
    ("Badui", "bac", None, None, None, T::Living, S::Individual),
    ("Baré", "bae", None, None, None, T::Extinct, S::Individual),
    ("Nubaca", "baf", None, None, None, T::Living, S::Individual),
    ("Tuki", "bag", None, None, None, T::Living, S::Individual),
    ("Bahamas Creole English", "bah", None, None, None, T::Living, S::Individual),
    ("Barakai", "baj", None, None, None, T::Living, S::Individual),
    ("Bashkir", "bak", Some("bak"), Some("bak"), Some("ba"), T::Living, S::Individual),
    ("Baluchi", "bal", Some("bal"), Some("bal"), None, T::Living, S::MacroLanguage),
    ("Bambara", "bam", Some("bam"), Some("bam"), Some("bm"), T::Living, S::Individual),
    ("Balinese", "ban", Some("ban"), Some("ban"), None, T::Living, S::Individual),
    ("Waimaha", "bao", None, None, None, T::Living, S::Individual),
    ("Bantawa", "bap", None, None, None, T::Living, S::Individual),
    ("Bavarian", "bar", None, None, None, T::Living, S::Individual),
    ("Basa (Cameroon)", "bas", Some("bas"), Some("bas"), None, T::Living, S::Individual),
    ("Bada (Nigeria)", "bau", None, None, None, T::Living, S::Individual),
    ("Vengo", "bav", None, None, None, T::Living, S::Individual),
    ("Bambili-Bambui", "baw", None, None, None, T::Living, S::Individual),
    ("Bamun", "bax", None, None, None, T::Living, S::Individual),
    ("Batuley", "bay", None, None, None, T::Living, S::Individual),
    ("Baatonum", "bba", None, None, None, T::Living, S::Individual),
    ("Barai", "bbb", None, None, None, T::Living, S::Individual),
    ("Batak Toba", "bbc", None, None, None, T::Living, S::Individual),
    ("Bau", "bbd", None, None, None, T::Living, S::Individual),
    ("Bangba", "bbe", None, None, None, T::Living, S::Individual),
    ("Baibai", "bbf", None, None, None, T::Living, S::Individual),
    ("Barama", "bbg", None, None, None, T::Living, S::Individual),
    ("Bugan", "bbh", None, None, None, T::Living, S::Individual),
    ("Barombi", "bbi", None, None, None, T::Living, S::Individual),
    ("Ghomálá'", "bbj", None, None, None, T::Living, S::Individual),
    ("Babanki", "bbk", None, None, None, T::Living, S::Individual),
    ("Bats", "bbl", None, None, None, T::Living, S::Individual),
    ("Babango", "bbm", None, None, None, T::Living, S::Individual),
    ("Uneapa", "bbn", None, None, None, T::Living, S::Individual),
    ("Northern Bobo Madaré", "bbo", None, None, None, T::Living, S::Individual),
    ("West Central Banda", "bbp", None, None, None, T::Living, S::Individual),
    ("Bamali", "bbq", None, None, None, T::Living, S::Individual),
    ("Girawa", "bbr", None, None, None, T::Living, S::Individual),
    ("Bakpinka", "bbs", None, None, None, T::Living, S::Individual),
    ("Mburku", "bbt", None, None, None, T::Living, S::Individual),
    ("Kulung (Nigeria)", "bbu", None, None, None, T::Living, S::Individual),
    ("Karnai", "bbv", None, None, None, T::Living, S::Individual),
    ("Baba", "bbw", None, None, None, T::Living, S::Individual),
    ("Bubia", "bbx", None, None, None, T::Living, S::Individual),
    ("Befang", "bby", None, None, None, T::Living, S::Individual),
    ("Central Bai", "bca", None, None, None, T::Living, S::Individual),
    ("Bainouk-Samik", "bcb", None, None, None, T::Living, S::Individual),
    ("Southern Balochi", "bcc", None, None, None, T::Living, S::Individual),
    ("North Babar", "bcd", None, None, None, T::Living, S::Individual),
    ("Bamenyam", "bce", None, None, None, T::Living, S::Individual),
    ("Bamu", "bcf", None, None, None, T::Living, S::Individual),
    ("Baga Pokur", "bcg", None, None, None, T::Living, S::Individual),
    ("Bariai", "bch", None, None, None, T::Living, S::Individual),
    ("Baoulé", "bci", None, None, None, T::Living, S::Individual),
    ("Bardi", "bcj", None, None, None, T::Living, S::Individual),
    ("Bunuba", "bck", None, None, None, T::Living, S::Individual),
    ("Central Bikol", "bcl", None, None, None, T::Living, S::Individual),
    ("Bannoni", "bcm", None, None, None, T::Living, S::Individual),
    ("Bali (Nigeria)", "bcn", None, None, None, T::Living, S::Individual),
    ("Kaluli", "bco", None, None, None, T::Living, S::Individual),
    ("Bali (Democratic Republic of Congo)", "bcp", None, None, None, T::Living, S::Individual),
    ("Bench", "bcq", None, None, None, T::Living, S::Individual),
    ("Babine", "bcr", None, None, None, T::Living, S::Individual),
    ("Kohumono", "bcs", None, None, None, T::Living, S::Individual),
    ("Bendi", "bct", None, None, None, T::Living, S::Individual),
    ("Awad Bing", "bcu", None, None, None, T::Living, S::Individual),
    ("Shoo-Minda-Nye", "bcv", None, None, None, T::Living, S::Individual),
    ("Bana", "bcw", None, None, None, T::Living, S::Individual),
    ("Bacama", "bcy", None, None, None, T::Living, S::Individual),
    ("Bainouk-Gunyaamolo", "bcz", None, None, None, T::Living, S::Individual),
    ("Bayot", "bda", None, None, None, T::Living, S::Individual),
    ("Basap", "bdb", None, None, None, T::Living, S::Individual),
    ("Emberá-Baudó", "bdc", None, None, None, T::Living, S::Individual),
    ("Bunama", "bdd", None, None, None, T::Living, S::Individual),
    ("Bade", "bde", None, None, None, T::Living, S::Individual),
    ("Biage", "bdf", None, None, None, T::Living, S::Individual),
    ("Bonggi", "bdg", None, None, None, T::Living, S::Individual),
    ("Baka (South Sudan)", "bdh", None, None, None, T::Living, S::Individual),
    ("Burun", "bdi", None, None, None, T::Living, S::Individual),
    ("Bai (South Sudan)", "bdj", None, None, None, T::Living, S::Individual),
    ("Budukh", "bdk", None, None, None, T::Living, S::Individual),
    ("Indonesian Bajau", "bdl", None, None, None, T::Living, S::Individual),
    ("Buduma", "bdm", None, None, None, T::Living, S::Individual),
    ("Baldemu", "bdn", None, None, None, T::Living, S::Individual),
    ("Morom", "bdo", None, None, None, T::Living, S::Individual),
    ("Bende", "bdp", None, None, None, T::Living, S::Individual),
    ("Bahnar", "bdq", None, None, None, T::Living, S::Individual),
    ("West Coast Bajau", "bdr", None, None, None, T::Living, S::Individual),
    ("Burunge", "bds", None, None, None, T::Living, S::Individual),
    ("Bokoto", "bdt", None, None, None, T::Living, S::Individual),
    ("Oroko", "bdu", None, None, None, T::Living, S::Individual),
    ("Bodo Parja", "bdv", None, None, None, T::Living, S::Individual),
    ("Baham", "bdw", None, None, None, T::Living, S::Individual),
    ("Budong-Budong", "bdx", None, None, None, T::Living, S::Individual),
    ("Bandjalang", "bdy", None, None, None, T::Living, S::Individual),
    ("Badeshi", "bdz", None, None, None, T::Living, S::Individual),
    ("Beaver", "bea", None, None, None, T::Living, S::Individual),
    ("Bebele", "beb", None, None, None, T::Living, S::Individual),
    ("Iceve-Maci", "bec", None, None, None, T::Living, S::Individual),
    ("Bedoanas", "bed", None, None, None, T::Living, S::Individual),
    ("Byangsi", "bee", None, None, None, T::Living, S::Individual),
    ("Benabena", "bef", None, None, None, T::Living, S::Individual),
    ("Belait", "beg", None, None, None, T::Living, S::Individual),
    ("Biali", "beh", None, None, None, T::Living, S::Individual),
    ("Bekati'", "bei", None, None, None, T::Living, S::Individual),
    ("Beja", "bej", Some("bej"), Some("bej"), None, T::Living, S::Individual),
    ("Bebeli", "bek", None, None, None, T::Living, S::Individual),
    ("Belarusian", "bel", Some("bel"), Some("bel"), Some("be"), T::Living, S::Individual),
    ("Bemba (Zambia)", "bem", Some("bem"), Some("bem"), None, T::Living, S::Individual),
    ("Bengali", "ben", Some("ben"), Some("ben"), Some("bn"), T::Living, S::Individual),
    ("Beami", "beo", None, None, None, T::Living, S::Individual),
    ("Besoa", "bep", None, None, None, T::Living, S::Individual),
    ("Beembe", "beq", None, None, None, T::Living, S::Individual),
    ("Besme", "bes", None, None, None, T::Living, S::Individual),
    ("Guiberoua Béte", "bet", None, None, None, T::Living, S::Individual),
    ("Blagar", "beu", None, None, None, T::Living, S::Individual),
    ("Daloa Bété", "bev", None, None, None, T::Living, S::Individual),
    ("Betawi", "bew", None, None, None, T::Living, S::Individual),
    ("Jur Modo", "bex", None, None, None, T::Living, S::Individual),
    ("Beli (Papua New Guinea)", "bey", None, None, None, T::Living, S::Individual),
    ("Bena (Tanzania)", "bez", None, None, None, T::Living, S::Individual),
    ("Bari", "bfa", None, None, None, T::Living, S::Individual),
    ("Pauri Bareli", "bfb", None, None, None, T::Living, S::Individual),
    ("Panyi Bai", "bfc", None, None, None, T::Living, S::Individual),
    ("Bafut", "bfd", None, None, None, T::Living, S::Individual),
    ("Betaf", "bfe", None, None, None, T::Living, S::Individual),
    ("Bofi", "bff", None, None, None, T::Living, S::Individual),
    ("Busang Kayan", "bfg", None, None, None, T::Living, S::Individual),
    ("Blafe", "bfh", None, None, None, T::Living, S::Individual),
    ("British Sign Language", "bfi", None, None, None, T::Living, S::Individual),
    ("Bafanji", "bfj", None, None, None, T::Living, S::Individual),
    ("Ban Khor Sign Language", "bfk", None, None, None, T::Living, S::Individual),
    ("Banda-Ndélé", "bfl", None, None, None, T::Living, S::Individual),
    ("Mmen", "bfm", None, None, None, T::Living, S::Individual),
    ("Bunak", "bfn", None, None, None, T::Living, S::Individual),
    ("Malba Birifor", "bfo", None, None, None, T::Living, S::Individual),
    ("Beba", "bfp", None, None, None, T::Living, S::Individual),
    ("Badaga", "bfq", None, None, None, T::Living, S::Individual),
    ("Bazigar", "bfr", None, None, None, T::Living, S::Individual),
    ("Southern Bai", "bfs", None, None, None, T::Living, S::Individual),
    ("Balti", "bft", None, None, None, T::Living, S::Individual),
    ("Gahri", "bfu", None, None, None, T::Living, S::Individual),
    ("Bondo", "bfw", None, None, None, T::Living, S::Individual),
    ("Bantayanon", "bfx", None, None, None, T::Living, S::Individual),
    ("Bagheli", "bfy", None, None, None, T::Living, S::Individual),
    ("Mahasu Pahari", "bfz", None, None, None, T::Living, S::Individual),
    ("Gwamhi-Wuri", "bga", None, None, None, T::Living, S::Individual),
    ("Bobongko", "bgb", None, None, None, T::Living, S::Individual),
    ("Haryanvi", "bgc", None, None, None, T::Living, S::Individual),
    ("Rathwi Bareli", "bgd", None, None, None, T::Living, S::Individual),
    ("Bauria", "bge", None, None, None, T::Living, S::Individual),
    ("Bangandu", "bgf", None, None, None, T::Living, S::Individual),
    ("Bugun", "bgg", None, None, None, T::Living, S::Individual),
    ("Giangan", "bgi", None, None, None, T::Living, S::Individual),
    ("Bangolan", "bgj", None, None, None, T::Living, S::Individual),
    ("Bit", "bgk", None, None, None, T::Living, S::Individual),
    ("Bo (Laos)", "bgl", None, None, None, T::Living, S::Individual),
    ("Western Balochi", "bgn", None, None, None, T::Living, S::Individual),
    ("Baga Koga", "bgo", None, None, None, T::Living, S::Individual),
    ("Eastern Balochi", "bgp", None, None, None, T::Living, S::Individual),
    ("Bagri", "bgq", None, None, None, T::Living, S::Individual),
    ("Bawm Chin", "bgr", None, None, None, T::Living, S::Individual),
    ("Tagabawa", "bgs", None, None, None, T::Living, S::Individual),
    ("Bughotu", "bgt", None, None, None, T::Living, S::Individual),
    ("Mbongno", "bgu", None, None, None, T::Living, S::Individual),
    ("Warkay-Bipim", "bgv", None, None, None, T::Living, S::Individual),
    ("Bhatri", "bgw", None, None, None, T::Living, S::Individual),
    ("Balkan Gagauz Turkish", "bgx", None, None, None, T::Living, S::Individual),
    ("Benggoi", "bgy", None, None, None, T::Living, S::Individual),
    ("Banggai", "bgz", None, None, None, T::Living, S::Individual),
    ("Bharia", "bha", None, None, None, T::Living, S::Individual),
    ("Bhili", "bhb", None, None, None, T::Living, S::Individual),
    ("Biga", "bhc", None, None, None, T::Living, S::Individual),
    ("Bhadrawahi", "bhd", None, None, None, T::Living, S::Individual),
    ("Bhaya", "bhe", None, None, None, T::Living, S::Individual),
    ("Odiai", "bhf", None, None, None, T::Living, S::Individual),
    ("Binandere", "bhg", None, None, None, T::Living, S::Individual),
    ("Bukharic", "bhh", None, None, None, T::Living, S::Individual),
    ("Bhilali", "bhi", None, None, None, T::Living, S::Individual),
    ("Bahing", "bhj", None, None, None, T::Living, S::Individual),
    ("Bimin", "bhl", None, None, None, T::Living, S::Individual),
    ("Bathari", "bhm", None, None, None, T::Living, S::Individual),
    ("Bohtan Neo-Aramaic", "bhn", None, None, None, T::Living, S::Individual),
    ("Bhojpuri", "bho", Some("bho"), Some("bho"), None, T::Living, S::Individual),
    ("Bima", "bhp", None, None, None, T::Living, S::Individual),
    ("Tukang Besi South", "bhq", None, None, None, T::Living, S::Individual),
    ("Bara Malagasy", "bhr", None, None, None, T::Living, S::Individual),
    ("Buwal", "bhs", None, None, None, T::Living, S::Individual),
    ("Bhattiyali", "bht", None, None, None, T::Living, S::Individual),
    ("Bhunjia", "bhu", None, None, None, T::Living, S::Individual),
    ("Bahau", "bhv", None, None, None, T::Living, S::Individual),
    ("Biak", "bhw", None, None, None, T::Living, S::Individual),
    ("Bhalay", "bhx", None, None, None, T::Living, S::Individual),
    ("Bhele", "bhy", None, None, None, T::Living, S::Individual),
    ("Bada (Indonesia)", "bhz", None, None, None, T::Living, S::Individual),
    ("Badimaya", "bia", None, None, None, T::Living, S::Individual),
    ("Bissa", "bib", None, None, None, T::Living, S::Individual),
    ("Bidiyo", "bid", None, None, None, T::Living, S::Individual),
    ("Bepour", "bie", None, None, None, T::Living, S::Individual),
    ("Biafada", "bif", None, None, None, T::Living, S::Individual),
    ("Biangai", "big", None, None, None, T::Living, S::Individual),
    ("Bikol", "bik", Some("bik"), Some("bik"), None, T::Living, S::MacroLanguage),
    ("Bile", "bil", None, None, None, T::Living, S::Individual),
    ("Bimoba", "bim", None, None, None, T::Living, S::Individual),
    ("Bini", "bin", Some("bin"), Some("bin"), None, T::Living, S::Individual),
    ("Nai", "bio", None, None, None, T::Living, S::Individual),
    ("Bila", "bip", None, None, None, T::Living, S::Individual),
    ("Bipi", "biq", None, None, None, T::Living, S::Individual),
    ("Bisorio", "bir", None, None, None, T::Living, S::Individual),
    ("Bislama", "bis", Some("bis"), Some("bis"), Some("bi"), T::Living, S::Individual),
    ("Berinomo", "bit", None, None, None, T::Living, S::Individual),
    ("Biete", "biu", None, None, None, T::Living, S::Individual),
    ("Southern Birifor", "biv", None, None, None, T::Living, S::Individual),
    ("Kol (Cameroon)", "biw", None, None, None, T::Living, S::Individual),
    ("Bijori", "bix", None, None, None, T::Living, S::Individual),
    ("Birhor", "biy", None, None, None, T::Living, S::Individual),
    ("Baloi", "biz", None, None, None, T::Living, S::Individual),
    ("Budza", "bja", None, None, None, T::Living, S::Individual),
    ("Banggarla", "bjb", None, None, None, T::Extinct, S::Individual),
    ("Bariji", "bjc", None, None, None, T::Living, S::Individual),
    ("Biao-Jiao Mien", "bje", None, None, None, T::Living, S::Individual),
    ("Barzani Jewish Neo-Aramaic", "bjf", None, None, None, T::Living, S::Individual),
    ("Bidyogo", "bjg", None, None, None, T::Living, S::Individual),
    ("Bahinemo", "bjh", None, None, None, T::Living, S::Individual),
    ("Burji", "bji", None, None, None, T::Living, S::Individual),
    ("Kanauji", "bjj", None, None, None, T::Living, S::Individual),
    ("Barok", "bjk", None, None, None, T::Living, S::Individual),
    ("Bulu (Papua New Guinea)", "bjl", None, None, None, T::Living, S::Individual),
    ("Bajelani", "bjm", None, None, None, T::Living, S::Individual),
    ("Banjar", "bjn", None, None, None, T::Living, S::Individual),
    ("Mid-Southern Banda", "bjo", None, None, None, T::Living, S::Individual),
    ("Fanamaket", "bjp", None, None, None, T::Living, S::Individual),
    ("Binumarien", "bjr", None, None, None, T::Living, S::Individual),
    ("Bajan", "bjs", None, None, None, T::Living, S::Individual),
    ("Balanta-Ganja", "bjt", None, None, None, T::Living, S::Individual),
    ("Busuu", "bju", None, None, None, T::Living, S::Individual),
    ("Bedjond", "bjv", None, None, None, T::Living, S::Individual),
    ("Bakwé", "bjw", None, None, None, T::Living, S::Individual),
    ("Banao Itneg", "bjx", None, None, None, T::Living, S::Individual),
    ("Bayali", "bjy", None, None, None, T::Extinct, S::Individual),
    ("Baruga", "bjz", None, None, None, T::Living, S::Individual),
    ("Kyak", "bka", None, None, None, T::Living, S::Individual),
    ("Baka (Cameroon)", "bkc", None, None, None, T::Living, S::Individual),
    ("Binukid", "bkd", None, None, None, T::Living, S::Individual),
    ("Beeke", "bkf", None, None, None, T::Living, S::Individual),
    ("Buraka", "bkg", None, None, None, T::Living, S::Individual),
    ("Bakoko", "bkh", None, None, None, T::Living, S::Individual),
    ("Baki", "bki", None, None, None, T::Living, S::Individual),
    ("Pande", "bkj", None, None, None, T::Living, S::Individual),
    ("Brokskat", "bkk", None, None, None, T::Living, S::Individual),
    ("Berik", "bkl", None, None, None, T::Living, S::Individual),
    ("Kom (Cameroon)", "bkm", None, None, None, T::Living, S::Individual),
    ("Bukitan", "bkn", None, None, None, T::Living, S::Individual),
    ("Kwa'", "bko", None, None, None, T::Living, S::Individual),
    ("Boko (Democratic Republic of Congo)", "bkp", None, None, None, T::Living, S::Individual),
    ("Bakairí", "bkq", None, None, None, T::Living, S::Individual),
    ("Bakumpai", "bkr", None, None, None, T::Living, S::Individual),
    ("Northern Sorsoganon", "bks", None, None, None, T::Living, S::Individual),
    ("Boloki", "bkt", None, None, None, T::Living, S::Individual),
    ("Buhid", "bku", None, None, None, T::Living, S::Individual),
    ("Bekwarra", "bkv", None, None, None, T::Living, S::Individual),
    ("Bekwel", "bkw", None, None, None, T::Living, S::Individual),
    ("Baikeno", "bkx", None, None, None, T::Living, S::Individual),
    ("Bokyi", "bky", None, None, None, T::Living, S::Individual),
    ("Bungku", "bkz", None, None, None, T::Living, S::Individual),
    ("Siksika", "bla", Some("bla"), Some("bla"), None, T::Living, S::Individual),
    ("Bilua", "blb", None, None, None, T::Living, S::Individual),
    ("Bella Coola", "blc", None, None, None, T::Living, S::Individual),
    ("Bolango", "bld", None, None, None, T::Living, S::Individual),
    ("Balanta-Kentohe", "ble", None, None, None, T::Living, S::Individual),
    ("Buol", "blf", None, None, None, T::Living, S::Individual),
    ("Kuwaa", "blh", None, None, None, T::Living, S::Individual),
    ("Bolia", "bli", None, None, None, T::Living, S::Individual),
    ("Bolongan", "blj", None, None, None, T::Living, S::Individual),
    ("Pa'o Karen", "blk", None, None, None, T::Living, S::Individual),
    ("Biloxi", "bll", None, None, None, T::Extinct, S::Individual),
    ("Beli (South Sudan)", "blm", None, None, None, T::Living, S::Individual),
    ("Southern Catanduanes Bikol", "bln", None, None, None, T::Living, S::Individual),
    ("Anii", "blo", None, None, None, T::Living, S::Individual),
    ("Blablanga", "blp", None, None, None, T::Living, S::Individual),
    ("Baluan-Pam", "blq", None, None, None, T::Living, S::Individual),
    ("Blang", "blr", None, None, None, T::Living, S::Individual),
    ("Balaesang", "bls", None, None, None, T::Living, S::Individual),
    ("Tai Dam", "blt", None, None, None, T::Living, S::Individual),
    ("Kibala", "blv", None, None, None, T::Living, S::Individual),
    ("Balangao", "blw", None, None, None, T::Living, S::Individual),
    ("Mag-Indi Ayta", "blx", None, None, None, T::Living, S::Individual),
    ("Notre", "bly", None, None, None, T::Living, S::Individual),
    ("Balantak", "blz", None, None, None, T::Living, S::Individual),
    ("Lame", "bma", None, None, None, T::Living, S::Individual),
    ("Bembe", "bmb", None, None, None, T::Living, S::Individual),
    ("Biem", "bmc", None, None, None, T::Living, S::Individual),
    ("Baga Manduri", "bmd", None, None, None, T::Living, S::Individual),
    ("Limassa", "bme", None, None, None, T::Living, S::Individual),
    ("Bom-Kim", "bmf", None, None, None, T::Living, S::Individual),
    ("Bamwe", "bmg", None, None, None, T::Living, S::Individual),
    ("Kein", "bmh", None, None, None, T::Living, S::Individual),
    ("Bagirmi", "bmi", None, None, None, T::Living, S::Individual),
    ("Bote-Majhi", "bmj", None, None, None, T::Living, S::Individual),
    ("Ghayavi", "bmk", None, None, None, T::Living, S::Individual),
    ("Bomboli", "bml", None, None, None, T::Living, S::Individual),
    ("Northern Betsimisaraka Malagasy", "bmm", None, None, None, T::Living, S::Individual),
    ("Bina (Papua New Guinea)", "bmn", None, None, None, T::Extinct, S::Individual),
    ("Bambalang", "bmo", None, None, None, T::Living, S::Individual),
    ("Bulgebi", "bmp", None, None, None, T::Living, S::Individual),
    ("Bomu", "bmq", None, None, None, T::Living, S::Individual),
    ("Muinane", "bmr", None, None, None, T::Living, S::Individual),
    ("Bilma Kanuri", "bms", None, None, None, T::Living, S::Individual),
    ("Biao Mon", "bmt", None, None, None, T::Living, S::Individual),
    ("Somba-Siawari", "bmu", None, None, None, T::Living, S::Individual),
    ("Bum", "bmv", None, None, None, T::Living, S::Individual),
    ("Bomwali", "bmw", None, None, None, T::Living, S::Individual),
    ("Baimak", "bmx", None, None, None, T::Living, S::Individual),
    ("Baramu", "bmz", None, None, None, T::Living, S::Individual),
    ("Bonerate", "bna", None, None, None, T::Living, S::Individual),
    ("Bookan", "bnb", None, None, None, T::Living, S::Individual),
    ("Bontok", "bnc", None, None, None, T::Living, S::MacroLanguage),
    ("Banda (Indonesia)", "bnd", None, None, None, T::Living, S::Individual),
    ("Bintauna", "bne", None, None, None, T::Living, S::Individual),
    ("Masiwang", "bnf", None, None, None, T::Living, S::Individual),
    ("Benga", "bng", None, None, None, T::Living, S::Individual),
    ("Bangi", "bni", None, None, None, T::Living, S::Individual),
    ("Eastern Tawbuid", "bnj", None, None, None, T::Living, S::Individual),
    ("Bierebo", "bnk", None, None, None, T::Living, S::Individual),
    ("Boon", "bnl", None, None, None, T::Living, S::Individual),
    ("Batanga", "bnm", None, None, None, T::Living, S::Individual),
    ("Bunun", "bnn", None, None, None, T::Living, S::Individual),
    ("Bantoanon", "bno", None, None, None, T::Living, S::Individual),
    ("Bola", "bnp", None, None, None, T::Living, S::Individual),
    ("Bantik", "bnq", None, None, None, T::Living, S::Individual),
    ("Butmas-Tur", "bnr", None, None, None, T::Living, S::Individual),
    ("Bundeli", "bns", None, None, None, T::Living, S::Individual),
    ("Bentong", "bnu", None, None, None, T::Living, S::Individual),
    ("Bonerif", "bnv", None, None, None, T::Living, S::Individual),
    ("Bisis", "bnw", None, None, None, T::Living, S::Individual),
    ("Bangubangu", "bnx", None, None, None, T::Living, S::Individual),
    ("Bintulu", "bny", None, None, None, T::Living, S::Individual),
    ("Beezen", "bnz", None, None, None, T::Living, S::Individual),
    ("Bora", "boa", None, None, None, T::Living, S::Individual),
    ("Aweer", "bob", None, None, None, T::Living, S::Individual),
    ("Tibetan", "bod", Some("tib"), Some("bod"), Some("bo"), T::Living, S::Individual),
    ("Mundabli", "boe", None, None, None, T::Living, S::Individual),
    ("Bolon", "bof", None, None, None, T::Living, S::Individual),
    ("Bamako Sign Language", "bog", None, None, None, T::Living, S::Individual),
    ("Boma", "boh", None, None, None, T::Living, S::Individual),
    ("Barbareño", "boi", None, None, None, T::Extinct, S::Individual),
    ("Anjam", "boj", None, None, None, T::Living, S::Individual),
    ("Bonjo", "bok", None, None, None, T::Living, S::Individual),
    ("Bole", "bol", None, None, None, T::Living, S::Individual),
    ("Berom", "bom", None, None, None, T::Living, S::Individual),
    ("Bine", "bon", None, None, None, T::Living, S::Individual),
    ("Tiemacèwè Bozo", "boo", None, None, None, T::Living, S::Individual),
    ("Bonkiman", "bop", None, None, None, T::Living, S::Individual),
    ("Bogaya", "boq", None, None, None, T::Living, S::Individual),
    ("Borôro", "bor", None, None, None, T::Living, S::Individual),
    ("Bosnian", "bos", Some("bos"), Some("bos"), Some("bs"), T::Living, S::Individual),
    ("Bongo", "bot", None, None, None, T::Living, S::Individual),
    ("Bondei", "bou", None, None, None, T::Living, S::Individual),
    ("Tuwuli", "bov", None, None, None, T::Living, S::Individual),
    ("Rema", "bow", None, None, None, T::Extinct, S::Individual),
    ("Buamu", "box", None, None, None, T::Living, S::Individual),
    ("Bodo (Central African Republic)", "boy", None, None, None, T::Living, S::Individual),
    ("Tiéyaxo Bozo", "boz", None, None, None, T::Living, S::Individual),
    ("Daakaka", "bpa", None, None, None, T::Living, S::Individual),
    ("Mbuk", "bpc", None, None, None, T::Living, S::Individual),
    ("Banda-Banda", "bpd", None, None, None, T::Living, S::Individual),
    ("Bauni", "bpe", None, None, None, T::Living, S::Individual),
    ("Bonggo", "bpg", None, None, None, T::Living, S::Individual),
    ("Botlikh", "bph", None, None, None, T::Living, S::Individual),
    ("Bagupi", "bpi", None, None, None, T::Living, S::Individual),
    ("Binji", "bpj", None, None, None, T::Living, S::Individual),
    ("Orowe", "bpk", None, None, None, T::Living, S::Individual),
    ("Broome Pearling Lugger Pidgin", "bpl", None, None, None, T::Living, S::Individual),
    ("Biyom", "bpm", None, None, None, T::Living, S::Individual),
    ("Dzao Min", "bpn", None, None, None, T::Living, S::Individual),
    ("Anasi", "bpo", None, None, None, T::Living, S::Individual),
    ("Kaure", "bpp", None, None, None, T::Living, S::Individual),
    ("Banda Malay", "bpq", None, None, None, T::Living, S::Individual),
    ("Koronadal Blaan", "bpr", None, None, None, T::Living, S::Individual),
    ("Sarangani Blaan", "bps", None, None, None, T::Living, S::Individual),
    ("Barrow Point", "bpt", None, None, None, T::Extinct, S::Individual),
    ("Bongu", "bpu", None, None, None, T::Living, S::Individual),
    ("Bian Marind", "bpv", None, None, None, T::Living, S::Individual),
    ("Bo (Papua New Guinea)", "bpw", None, None, None, T::Living, S::Individual),
    ("Palya Bareli", "bpx", None, None, None, T::Living, S::Individual),
    ("Bishnupriya", "bpy", None, None, None, T::Living, S::Individual),
    ("Bilba", "bpz", None, None, None, T::Living, S::Individual),
    ("Tchumbuli", "bqa", None, None, None, T::Living, S::Individual),
    ("Bagusa", "bqb", None, None, None, T::Living, S::Individual),
    ("Boko (Benin)", "bqc", None, None, None, T::Living, S::Individual),
    ("Bung", "bqd", None, None, None, T::Living, S::Individual),
    ("Baga Kaloum", "bqf", None, None, None, T::Extinct, S::Individual),
    ("Bago-Kusuntu", "bqg", None, None, None, T::Living, S::Individual),
    ("Baima", "bqh", None, None, None, T::Living, S::Individual),
    ("Bakhtiari", "bqi", None, None, None, T::Living, S::Individual),
    ("Bandial", "bqj", None, None, None, T::Living, S::Individual),
    ("Banda-Mbrès", "bqk", None, None, None, T::Living, S::Individual),
    ("Bilakura", "bql", None, None, None, T::Living, S::Individual),
    ("Wumboko", "bqm", None, None, None, T::Living, S::Individual),
    ("Bulgarian Sign Language", "bqn", None, None, None, T::Living, S::Individual),
    ("Balo", "bqo", None, None, None, T::Living, S::Individual),
    ("Busa", "bqp", None, None, None, T::Living, S::Individual),
    ("Biritai", "bqq", None, None, None, T::Living, S::Individual),
    ("Burusu", "bqr", None, None, None, T::Living, S::Individual),
    ("Bosngun", "bqs", None, None, None, T::Living, S::Individual),
    ("Bamukumbit", "bqt", None, None, None, T::Living, S::Individual),
    ("Boguru", "bqu", None, None, None, T::Living, S::Individual),
    ("Koro Wachi", "bqv", None, None, None, T::Living, S::Individual),
    ("Buru (Nigeria)", "bqw", None, None, None, T::Living, S::Individual),
    ("Baangi", "bqx", None, None, None, T::Living, S::Individual),
    ("Bengkala Sign Language", "bqy", None, None, None, T::Living, S::Individual),
    ("Bakaka", "bqz", None, None, None, T::Living, S::Individual),
    ("Braj", "bra", Some("bra"), Some("bra"), None, T::Living, S::Individual),
    ("Brao", "brb", None, None, None, T::Living, S::Individual),
    ("Berbice Creole Dutch", "brc", None, None, None, T::Extinct, S::Individual),
    ("Baraamu", "brd", None, None, None, T::Living, S::Individual),
    ("Breton", "bre", Some("bre"), Some("bre"), Some("br"), T::Living, S::Individual),
    ("Bira", "brf", None, None, None, T::Living, S::Individual),
    ("Baure", "brg", None, None, None, T::Living, S::Individual),
    ("Brahui", "brh", None, None, None, T::Living, S::Individual),
    ("Mokpwe", "bri", None, None, None, T::Living, S::Individual),
    ("Bieria", "brj", None, None, None, T::Living, S::Individual),
    ("Birked", "brk", None, None, None, T::Extinct, S::Individual),
    ("Birwa", "brl", None, None, None, T::Living, S::Individual),
    ("Barambu", "brm", None, None, None, T::Living, S::Individual),
    ("Boruca", "brn", None, None, None, T::Living, S::Individual),
    ("Brokkat", "bro", None, None, None, T::Living, S::Individual),
    ("Barapasi", "brp", None, None, None, T::Living, S::Individual),
    ("Breri", "brq", None, None, None, T::Living, S::Individual),
    ("Birao", "brr", None, None, None, T::Living, S::Individual),
    ("Baras", "brs", None, None, None, T::Living, S::Individual),
    ("Bitare", "brt", None, None, None, T::Living, S::Individual),
    ("Eastern Bru", "bru", None, None, None, T::Living, S::Individual),
    ("Western Bru", "brv", None, None, None, T::Living, S::Individual),
    ("Bellari", "brw", None, None, None, T::Living, S::Individual),
    ("Bodo (India)", "brx", None, None, None, T::Living, S::Individual),
    ("Burui", "bry", None, None, None, T::Living, S::Individual),
    ("Bilbil", "brz", None, None, None, T::Living, S::Individual),
    ("Abinomn", "bsa", None, None, None, T::Living, S::Individual),
    ("Brunei Bisaya", "bsb", None, None, None, T::Living, S::Individual),
    ("Bassari", "bsc", None, None, None, T::Living, S::Individual),
    ("Wushi", "bse", None, None, None, T::Living, S::Individual),
    ("Bauchi", "bsf", None, None, None, T::Living, S::Individual),
    ("Bashkardi", "bsg", None, None, None, T::Living, S::Individual),
    ("Kati", "bsh", None, None, None, T::Living, S::Individual),
    ("Bassossi", "bsi", None, None, None, T::Living, S::Individual),
    ("Bangwinji", "bsj", None, None, None, T::Living, S::Individual),
    ("Burushaski", "bsk", None, None, None, T::Living, S::Individual),
    ("Basa-Gumna", "bsl", None, None, None, T::Extinct, S::Individual),
    ("Busami", "bsm", None, None, None, T::Living, S::Individual),
    ("Barasana-Eduria", "bsn", None, None, None, T::Living, S::Individual),
    ("Buso", "bso", None, None, None, T::Living, S::Individual),
    ("Baga Sitemu", "bsp", None, None, None, T::Living, S::Individual),
    ("Bassa", "bsq", None, None, None, T::Living, S::Individual),
    ("Bassa-Kontagora", "bsr", None, None, None, T::Living, S::Individual),
    ("Akoose", "bss", None, None, None, T::Living, S::Individual),
    ("Basketo", "bst", None, None, None, T::Living, S::Individual),
    ("Bahonsuai", "bsu", None, None, None, T::Living, S::Individual),
    ("Baga Sobané", "bsv", None, None, None, T::Extinct, S::Individual),
    ("Baiso", "bsw", None, None, None, T::Living, S::Individual),
    ("Yangkam", "bsx", None, None, None, T::Living, S::Individual),
    ("Sabah Bisaya", "bsy", None, None, None, T::Living, S::Individual),
    ("Bata", "bta", None, None, None, T::Living, S::Individual),
    ("Bati (Cameroon)", "btc", None, None, None, T::Living, S::Individual),
    ("Batak Dairi", "btd", None, None, None, T::Living, S::Individual),
    ("Gamo-Ningi", "bte", None, None, None, T::Extinct, S::Individual),
    ("Birgit", "btf", None, None, None, T::Living, S::Individual),
    ("Gagnoa Bété", "btg", None, None, None, T::Living, S::Individual),
    ("Biatah Bidayuh", "bth", None, None, None, T::Living, S::Individual),
    ("Burate", "bti", None, None, None, T::Living, S::Individual),
    ("Bacanese Malay", "btj", None, None, None, T::Living, S::Individual),
    ("Batak Mandailing", "btm", None, None, None, T::Living, S::Individual),
    ("Ratagnon", "btn", None, None, None, T::Living, S::Individual),
    ("Rinconada Bikol", "bto", None, None, None, T::Living, S::Individual),
    ("Budibud", "btp", None, None, None, T::Living, S::Individual),
    ("Batek", "btq", None, None, None, T::Living, S::Individual),
    ("Baetora", "btr", None, None, None, T::Living, S::Individual),
    ("Batak Simalungun", "bts", None, None, None, T::Living, S::Individual),
    ("Bete-Bendi", "btt", None, None, None, T::Living, S::Individual),
    ("Batu", "btu", None, None, None, T::Living, S::Individual),
    ("Bateri", "btv", None, None, None, T::Living, S::Individual),
    ("Butuanon", "btw", None, None, None, T::Living, S::Individual),
    ("Batak Karo", "btx", None, None, None, T::Living, S::Individual),
    ("Bobot", "bty", None, None, None, T::Living, S::Individual),
    ("Batak Alas-Kluet", "btz", None, None, None, T::Living, S::Individual),
    ("Buriat", "bua", Some("bua"), Some("bua"), None, T::Living, S::MacroLanguage),
    ("Bua", "bub", None, None, None, T::Living, S::Individual),
    ("Bushi", "buc", None, None, None, T::Living, S::Individual),
    ("Ntcham", "bud", None, None, None, T::Living, S::Individual),
    ("Beothuk", "bue", None, None, None, T::Extinct, S::Individual),
    ("Bushoong", "buf", None, None, None, T::Living, S::Individual),
    ("Buginese", "bug", Some("bug"), Some("bug"), None, T::Living, S::Individual),
    ("Younuo Bunu", "buh", None, None, None, T::Living, S::Individual),
    ("Bongili", "bui", None, None, None, T::Living, S::Individual),
    ("Basa-Gurmana", "buj", None, None, None, T::Living, S::Individual),
    ("Bugawac", "buk", None, None, None, T::Living, S::Individual),
    ("Bulgarian", "bul", Some("bul"), Some("bul"), Some("bg"), T::Living, S::Individual),
    ("Bulu (Cameroon)", "bum", None, None, None, T::Living, S::Individual),
    ("Sherbro", "bun", None, None, None, T::Living, S::Individual),
    ("Terei", "buo", None, None, None, T::Living, S::Individual),
    ("Busoa", "bup", None, None, None, T::Living, S::Individual),
    ("Brem", "buq", None, None, None, T::Living, S::Individual),
    ("Bokobaru", "bus", None, None, None, T::Living, S::Individual),
    ("Bungain", "but", None, None, None, T::Living, S::Individual),
    ("Budu", "buu", None, None, None, T::Living, S::Individual),
    ("Bun", "buv", None, None, None, T::Living, S::Individual),
    ("Bubi", "buw", None, None, None, T::Living, S::Individual),
    ("Boghom", "bux", None, None, None, T::Living, S::Individual),
    ("Bullom So", "buy", None, None, None, T::Living, S::Individual),
    ("Bukwen", "buz", None, None, None, T::Living, S::Individual),
    ("Barein", "bva", None, None, None, T::Living, S::Individual),
    ("Bube", "bvb", None, None, None, T::Living, S::Individual),
    ("Baelelea", "bvc", None, None, None, T::Living, S::Individual),
    ("Baeggu", "bvd", None, None, None, T::Living, S::Individual),
    ("Berau Malay", "bve", None, None, None, T::Living, S::Individual),
    ("Boor", "bvf", None, None, None, T::Living, S::Individual),
    ("Bonkeng", "bvg", None, None, None, T::Living, S::Individual),
    ("Bure", "bvh", None, None, None, T::Living, S::Individual),
    ("Belanda Viri", "bvi", None, None, None, T::Living, S::Individual),
    ("Baan", "bvj", None, None, None, T::Living, S::Individual),
    ("Bukat", "bvk", None, None, None, T::Living, S::Individual),
    ("Bolivian Sign Language", "bvl", None, None, None, T::Living, S::Individual),
    ("Bamunka", "bvm", None, None, None, T::Living, S::Individual),
    ("Buna", "bvn", None, None, None, T::Living, S::Individual),
    ("Bolgo", "bvo", None, None, None, T::Living, S::Individual),
    ("Bumang", "bvp", None, None, None, T::Living, S::Individual),
    ("Birri", "bvq", None, None, None, T::Living, S::Individual),
    ("Burarra", "bvr", None, None, None, T::Living, S::Individual),
    ("Bati (Indonesia)", "bvt", None, None, None, T::Living, S::Individual),
    ("Bukit Malay", "bvu", None, None, None, T::Living, S::Individual),
    ("Baniva", "bvv", None, None, None, T::Extinct, S::Individual),
    ("Boga", "bvw", None, None, None, T::Living, S::Individual),
    ("Dibole", "bvx", None, None, None, T::Living, S::Individual),
    ("Baybayanon", "bvy", None, None, None, T::Living, S::Individual),
    ("Bauzi", "bvz", None, None, None, T::Living, S::Individual),
    ("Bwatoo", "bwa", None, None, None, T::Living, S::Individual),
    ("Namosi-Naitasiri-Serua", "bwb", None, None, None, T::Living, S::Individual),
    ("Bwile", "bwc", None, None, None, T::Living, S::Individual),
    ("Bwaidoka", "bwd", None, None, None, T::Living, S::Individual),
    ("Bwe Karen", "bwe", None, None, None, T::Living, S::Individual),
    ("Boselewa", "bwf", None, None, None, T::Living, S::Individual),
    ("Barwe", "bwg", None, None, None, T::Living, S::Individual),
    ("Bishuo", "bwh", None, None, None, T::Living, S::Individual),
    ("Baniwa", "bwi", None, None, None, T::Living, S::Individual),
    ("Láá Láá Bwamu", "bwj", None, None, None, T::Living, S::Individual),
    ("Bauwaki", "bwk", None, None, None, T::Living, S::Individual),
    ("Bwela", "bwl", None, None, None, T::Living, S::Individual),
    ("Biwat", "bwm", None, None, None, T::Living, S::Individual),
    ("Wunai Bunu", "bwn", None, None, None, T::Living, S::Individual),
    ("Boro (Ethiopia)", "bwo", None, None, None, T::Living, S::Individual),
    ("Mandobo Bawah", "bwp", None, None, None, T::Living, S::Individual),
    ("Southern Bobo Madaré", "bwq", None, None, None, T::Living, S::Individual),
    ("Bura-Pabir", "bwr", None, None, None, T::Living, S::Individual),
    ("Bomboma", "bws", None, None, None, T::Living, S::Individual),
    ("Bafaw-Balong", "bwt", None, None, None, T::Living, S::Individual),
    ("Buli (Ghana)", "bwu", None, None, None, T::Living, S::Individual),
    ("Bwa", "bww", None, None, None, T::Living, S::Individual),
    ("Bu-Nao Bunu", "bwx", None, None, None, T::Living, S::Individual),
    ("Cwi Bwamu", "bwy", None, None, None, T::Living, S::Individual),
    ("Bwisi", "bwz", None, None, None, T::Living, S::Individual),
    ("Tairaha", "bxa", None, None, None, T::Living, S::Individual),
    ("Belanda Bor", "bxb", None, None, None, T::Living, S::Individual),
    ("Molengue", "bxc", None, None, None, T::Living, S::Individual),
    ("Pela", "bxd", None, None, None, T::Living, S::Individual),
    ("Birale", "bxe", None, None, None, T::Living, S::Individual),
    ("Bilur", "bxf", None, None, None, T::Living, S::Individual),
    ("Bangala", "bxg", None, None, None, T::Living, S::Individual),
    ("Buhutu", "bxh", None, None, None, T::Living, S::Individual),
    ("Pirlatapa", "bxi", None, None, None, T::Extinct, S::Individual),
    ("Bayungu", "bxj", None, None, None, T::Living, S::Individual),
    ("Bukusu", "bxk", None, None, None, T::Living, S::Individual),
    ("Jalkunan", "bxl", None, None, None, T::Living, S::Individual),
    ("Mongolia Buriat", "bxm", None, None, None, T::Living, S::Individual),
    ("Burduna", "bxn", None, None, None, T::Living, S::Individual),
    ("Barikanchi", "bxo", None, None, None, T::Living, S::Individual),
    ("Bebil", "bxp", None, None, None, T::Living, S::Individual),
    ("Beele", "bxq", None, None, None, T::Living, S::Individual),
    ("Russia Buriat", "bxr", None, None, None, T::Living, S::Individual),
    ("Busam", "bxs", None, None, None, T::Living, S::Individual),
    ("China Buriat", "bxu", None, None, None, T::Living, S::Individual),
    ("Berakou", "bxv", None, None, None, T::Living, S::Individual),
    ("Bankagooma", "bxw", None, None, None, T::Living, S::Individual),
    ("Binahari", "bxz", None, None, None, T::Living, S::Individual),
    ("Batak", "bya", None, None, None, T::Living, S::Individual),
    ("Bikya", "byb", None, None, None, T::Living, S::Individual),
    ("Ubaghara", "byc", None, None, None, T::Living, S::Individual),
    ("Benyadu'", "byd", None, None, None, T::Living, S::Individual),
    ("Pouye", "bye", None, None, None, T::Living, S::Individual),
    ("Bete", "byf", None, None, None, T::Living, S::Individual),
    ("Baygo", "byg", None, None, None, T::Extinct, S::Individual),
    ("Bhujel", "byh", None, None, None, T::Living, S::Individual),
    ("Buyu", "byi", None, None, None, T::Living, S::Individual),
    ("Bina (Nigeria)", "byj", None, None, None, T::Living, S::Individual),
    ("Biao", "byk", None, None, None, T::Living, S::Individual),
    ("Bayono", "byl", None, None, None, T::Living, S::Individual),
    ("Bidjara", "bym", None, None, None, T::Living, S::Individual),
    ("Bilin", "byn", Some("byn"), Some("byn"), None, T::Living, S::Individual),
    ("Biyo", "byo", None, None, None, T::Living, S::Individual),
    ("Bumaji", "byp", None, None, None, T::Living, S::Individual),
    ("Basay", "byq", None, None, None, T::Extinct, S::Individual),
    ("Baruya", "byr", None, None, None, T::Living, S::Individual),
    ("Burak", "bys", None, None, None, T::Living, S::Individual),
    ("Berti", "byt", None, None, None, T::Extinct, S::Individual),
    ("Medumba", "byv", None, None, None, T::Living, S::Individual),
    ("Belhariya", "byw", None, None, None, T::Living, S::Individual),
    ("Qaqet", "byx", None, None, None, T::Living, S::Individual),
    ("Banaro", "byz", None, None, None, T::Living, S::Individual),
    ("Bandi", "bza", None, None, None, T::Living, S::Individual),
    ("Andio", "bzb", None, None, None, T::Living, S::Individual),
    ("Southern Betsimisaraka Malagasy", "bzc", None, None, None, T::Living, S::Individual),
    ("Bribri", "bzd", None, None, None, T::Living, S::Individual),
    ("Jenaama Bozo", "bze", None, None, None, T::Living, S::Individual),
    ("Boikin", "bzf", None, None, None, T::Living, S::Individual),
    ("Babuza", "bzg", None, None, None, T::Living, S::Individual),
    ("Mapos Buang", "bzh", None, None, None, T::Living, S::Individual),
    ("Bisu", "bzi", None, None, None, T::Living, S::Individual),
    ("Belize Kriol English", "bzj", None, None, None, T::Living, S::Individual),
    ("Nicaragua Creole English", "bzk", None, None, None, T::Living, S::Individual),
    ("Boano (Sulawesi)", "bzl", None, None, None, T::Living, S::Individual),
    ("Bolondo", "bzm", None, None, None, T::Living, S::Individual),
    ("Boano (Maluku)", "bzn", None, None, None, T::Living, S::Individual),
    ("Bozaba", "bzo", None, None, None, T::Living, S::Individual),
    ("Kemberano", "bzp", None, None, None, T::Living, S::Individual),
    ("Buli (Indonesia)", "bzq", None, None, None, T::Living, S::Individual),
    ("Biri", "bzr", None, None, None, T::Extinct, S::Individual),
    ("Brazilian Sign Language", "bzs", None, None, None, T::Living, S::Individual),
    ("Brithenig", "bzt", None, None, None, T::Constructed, S::Individual),
    ("Burmeso", "bzu", None, None, None, T::Living, S::Individual),
    ("Naami", "bzv", None, None, None, T::Living, S::Individual),
    ("Basa (Nigeria)", "bzw", None, None, None, T::Living, S::Individual),
    ("Kɛlɛngaxo Bozo", "bzx", None, None, None, T::Living, S::Individual),
    ("Obanliku", "bzy", None, None, None, T::Living, S::Individual),
    ("Evant", "bzz", None, None, None, T::Living, S::Individual),
    ("Chortí", "caa", None, None, None, T::Living, S::Individual),
    ("Garifuna", "cab", None, None, None, T::Living, S::Individual),
    ("Chuj", "cac", None, None, None, T::Living, S::Individual),
    ("Caddo", "cad", Some("cad"), Some("cad"), None, T::Living, S::Individual),
    ("Lehar", "cae", None, None, None, T::Living, S::Individual),
    ("Southern Carrier", "caf", None, None, None, T::Living, S::Individual),
    ("Nivaclé", "cag", None, None, None, T::Living, S::Individual),
    ("Cahuarano", "cah", None, None, None, T::Living, S::Individual),
    ("Chané", "caj", None, None, None, T::Extinct, S::Individual),
    ("Kaqchikel", "cak", None, None, None, T::Living, S::Individual),
    ("Carolinian", "cal", None, None, None, T::Living, S::Individual),
    ("Cemuhî", "cam", None, None, None, T::Living, S::Individual),
    ("Chambri", "can", None, None, None, T::Living, S::Individual),
    ("Chácobo", "cao", None, None, None, T::Living, S::Individual),
    ("Chipaya", "cap", None, None, None, T::Living, S::Individual),
    ("Car Nicobarese", "caq", None, None, None, T::Living, S::Individual),
    ("Galibi Carib", "car", Some("car"), Some("car"), None, T::Living, S::Individual),
    ("Tsimané", "cas", None, None, None, T::Living, S::Individual),
    ("Catalan", "cat", Some("cat"), Some("cat"), Some("ca"), T::Living, S::Individual),
    ("Cavineña", "cav", None, None, None, T::Living, S::Individual),
    ("Callawalla", "caw", None, None, None, T::Living, S::Individual),
    ("Chiquitano", "cax", None, None, None, T::Living, S::Individual),
    ("Cayuga", "cay", None, None, None, T::Living, S::Individual),
    ("Canichana", "caz", None, None, None, T::Extinct, S::Individual),
    ("Cabiyarí", "cbb", None, None, None, T::Living, S::Individual),
    ("Carapana", "cbc", None, None, None, T::Living, S::Individual),
    ("Carijona", "cbd", None, None, None, T::Living, S::Individual),
    ("Chimila", "cbg", None, None, None, T::Living, S::Individual),
    ("Chachi", "cbi", None, None, None, T::Living, S::Individual),
    ("Ede Cabe", "cbj", None, None, None, T::Living, S::Individual),
    ("Chavacano", "cbk", None, None, None, T::Living, S::Individual),
    ("Bualkhaw Chin", "cbl", None, None, None, T::Living, S::Individual),
    ("Nyahkur", "cbn", None, None, None, T::Living, S::Individual),
    ("Izora", "cbo", None, None, None, T::Living, S::Individual),
    ("Tsucuba", "cbq", None, None, None, T::Living, S::Individual),
    ("Cashibo-Cacataibo", "cbr", None, None, None, T::Living, S::Individual),
    ("Cashinahua", "cbs", None, None, None, T::Living, S::Individual),
    ("Chayahuita", "cbt", None, None, None, T::Living, S::Individual),
    ("Candoshi-Shapra", "cbu", None, None, None, T::Living, S::Individual),
    ("Cacua", "cbv", None, None, None, T::Living, S::Individual),
    ("Kinabalian", "cbw", None, None, None, T::Living, S::Individual),
    ("Carabayo", "cby", None, None, None, T::Living, S::Individual),
    ("Chamicuro", "ccc", None, None, None, T::Living, S::Individual),
    ("Cafundo Creole", "ccd", None, None, None, T::Living, S::Individual),
    ("Chopi", "cce", None, None, None, T::Living, S::Individual),
    ("Samba Daka", "ccg", None, None, None, T::Living, S::Individual),
    ("Atsam", "cch", None, None, None, T::Living, S::Individual),
    ("Kasanga", "ccj", None, None, None, T::Living, S::Individual),
    ("Cutchi-Swahili", "ccl", None, None, None, T::Living, S::Individual),
    ("Malaccan Creole Malay", "ccm", None, None, None, T::Living, S::Individual),
    ("Comaltepec Chinantec", "cco", None, None, None, T::Living, S::Individual),
    ("Chakma", "ccp", None, None, None, T::Living, S::Individual),
    ("Cacaopera", "ccr", None, None, None, T::Extinct, S::Individual),
    ("Choni", "cda", None, None, None, T::Living, S::Individual),
    ("Chenchu", "cde", None, None, None, T::Living, S::Individual),
    ("Chiru", "cdf", None, None, None, T::Living, S::Individual),
    ("Chambeali", "cdh", None, None, None, T::Living, S::Individual),
    ("Chodri", "cdi", None, None, None, T::Living, S::Individual),
    ("Churahi", "cdj", None, None, None, T::Living, S::Individual),
    ("Chepang", "cdm", None, None, None, T::Living, S::Individual),
    ("Chaudangsi", "cdn", None, None, None, T::Living, S::Individual),
    ("Min Dong Chinese", "cdo", None, None, None, T::Living, S::Individual),
    ("Cinda-Regi-Tiyal", "cdr", None, None, None, T::Living, S::Individual),
    ("Chadian Sign Language", "cds", None, None, None, T::Living, S::Individual),
    ("Chadong", "cdy", None, None, None, T::Living, S::Individual),
    ("Koda", "cdz", None, None, None, T::Living, S::Individual),
    ("Lower Chehalis", "cea", None, None, None, T::Extinct, S::Individual),
    ("Cebuano", "ceb", Some("ceb"), Some("ceb"), None, T::Living, S::Individual),
    ("Chamacoco", "ceg", None, None, None, T::Living, S::Individual),
    ("Eastern Khumi Chin", "cek", None, None, None, T::Living, S::Individual),
    ("Cen", "cen", None, None, None, T::Living, S::Individual),
    ("Czech", "ces", Some("cze"), Some("ces"), Some("cs"), T::Living, S::Individual),
    ("Centúúm", "cet", None, None, None, T::Living, S::Individual),
    ("Ekai Chin", "cey", None, None, None, T::Living, S::Individual),
    ("Dijim-Bwilim", "cfa", None, None, None, T::Living, S::Individual),
    ("Cara", "cfd", None, None, None, T::Living, S::Individual),
    ("Como Karim", "cfg", None, None, None, T::Living, S::Individual),
    ("Falam Chin", "cfm", None, None, None, T::Living, S::Individual),
    ("Changriwa", "cga", None, None, None, T::Living, S::Individual),
    ("Kagayanen", "cgc", None, None, None, T::Living, S::Individual),
    ("Chiga", "cgg", None, None, None, T::Living, S::Individual),
    ("Chocangacakha", "cgk", None, None, None, T::Living, S::Individual),
    ("Chamorro", "cha", Some("cha"), Some("cha"), Some("ch"), T::Living, S::Individual),
    ("Chibcha", "chb", Some("chb"), Some("chb"), None, T::Extinct, S::Individual),
    ("Catawba", "chc", None, None, None, T::Extinct, S::Individual),
    ("Highland Oaxaca Chontal", "chd", None, None, None, T::Living, S::Individual),
    ("Chechen", "che", Some("che"), Some("che"), Some("ce"), T::Living, S::Individual),
    ("Tabasco Chontal", "chf", None, None, None, T::Living, S::Individual),
    ("Chagatai", "chg", Some("chg"), Some("chg"), None, T::Extinct, S::Individual),
    ("Chinook", "chh", None, None, None, T::Extinct, S::Individual),
    ("Ojitlán Chinantec", "chj", None, None, None, T::Living, S::Individual),
    ("Chuukese", "chk", Some("chk"), Some("chk"), None, T::Living, S::Individual),
    ("Cahuilla", "chl", None, None, None, T::Living, S::Individual),
    ("Mari (Russia)", "chm", Some("chm"), Some("chm"), None, T::Living, S::MacroLanguage),
    ("Chinook jargon", "chn", Some("chn"), Some("chn"), None, T::Living, S::Individual),
    ("Choctaw", "cho", Some("cho"), Some("cho"), None, T::Living, S::Individual),
    ("Chipewyan", "chp", Some("chp"), Some("chp"), None, T::Living, S::Individual),
    ("Quiotepec Chinantec", "chq", None, None, None, T::Living, S::Individual),
    ("Cherokee", "chr", Some("chr"), Some("chr"), None, T::Living, S::Individual),
    ("Cholón", "cht", None, None, None, T::Extinct, S::Individual),
    ("Church Slavic", "chu", Some("chu"), Some("chu"), Some("cu"), T::Ancient, S::Individual),
    ("Chuvash", "chv", Some("chv"), Some("chv"), Some("cv"), T::Living, S::Individual),
    ("Chuwabu", "chw", None, None, None, T::Living, S::Individual),
    ("Chantyal", "chx", None, None, None, T::Living, S::Individual),
    ("Cheyenne", "chy", Some("chy"), Some("chy"), None, T::Living, S::Individual),
    ("Ozumacín Chinantec", "chz", None, None, None, T::Living, S::Individual),
    ("Cia-Cia", "cia", None, None, None, T::Living, S::Individual),
    ("Ci Gbe", "cib", None, None, None, T::Living, S::Individual),
    ("Chickasaw", "cic", None, None, None, T::Living, S::Individual),
    ("Chimariko", "cid", None, None, None, T::Extinct, S::Individual),
    ("Cineni", "cie", None, None, None, T::Living, S::Individual),
    ("Chinali", "cih", None, None, None, T::Living, S::Individual),
    ("Chitkuli Kinnauri", "cik", None, None, None, T::Living, S::Individual),
    ("Cimbrian", "cim", None, None, None, T::Living, S::Individual),
    ("Cinta Larga", "cin", None, None, None, T::Living, S::Individual),
    ("Chiapanec", "cip", None, None, None, T::Living, S::Individual),
    ("Tiri", "cir", None, None, None, T::Living, S::Individual),
    ("Chippewa", "ciw", None, None, None, T::Living, S::Individual),
    ("Chaima", "ciy", None, None, None, T::Living, S::Individual),
    ("Western Cham", "cja", None, None, None, T::Living, S::Individual),
    ("Chru", "cje", None, None, None, T::Living, S::Individual),
    ("Upper Chehalis", "cjh", None, None, None, T::Extinct, S::Individual),
    ("Chamalal", "cji", None, None, None, T::Living, S::Individual),
    ("Chokwe", "cjk", None, None, None, T::Living, S::Individual),
    ("Eastern Cham", "cjm", None, None, None, T::Living, S::Individual),
    ("Chenapian", "cjn", None, None, None, T::Living, S::Individual),
    ("Ashéninka Pajonal", "cjo", None, None, None, T::Living, S::Individual),
    ("Cabécar", "cjp", None, None, None, T::Living, S::Individual),
    ("Shor", "cjs", None, None, None, T::Living, S::Individual),
    ("Chuave", "cjv", None, None, None, T::Living, S::Individual),
    ("Jinyu Chinese", "cjy", None, None, None, T::Living, S::Individual),
    ("Central Kurdish", "ckb", None, None, None, T::Living, S::Individual),
    ("Chak", "ckh", None, None, None, T::Living, S::Individual),
    ("Cibak", "ckl", None, None, None, T::Living, S::Individual),
    ("Chakavian", "ckm", None, None, None, T::Living, S::Individual),
    ("Kaang Chin", "ckn", None, None, None, T::Living, S::Individual),
    ("Anufo", "cko", None, None, None, T::Living, S::Individual),
    ("Kajakse", "ckq", None, None, None, T::Living, S::Individual),
    ("Kairak", "ckr", None, None, None, T::Living, S::Individual),
    ("Tayo", "cks", None, None, None, T::Living, S::Individual),
    ("Chukot", "ckt", None, None, None, T::Living, S::Individual),
    ("Koasati", "cku", None, None, None, T::Living, S::Individual),
    ("Kavalan", "ckv", None, None, None, T::Living, S::Individual),
    ("Caka", "ckx", None, None, None, T::Living, S::Individual),
    ("Cakfem-Mushere", "cky", None, None, None, T::Living, S::Individual),
    ("Cakchiquel-Quiché Mixed Language", "ckz", None, None, None, T::Living, S::Individual),
    ("Ron", "cla", None, None, None, T::Living, S::Individual),
    ("Chilcotin", "clc", None, None, None, T::Living, S::Individual),
    ("Chaldean Neo-Aramaic", "cld", None, None, None, T::Living, S::Individual),
    ("Lealao Chinantec", "cle", None, None, None, T::Living, S::Individual),
    ("Chilisso", "clh", None, None, None, T::Living, S::Individual),
    ("Chakali", "cli", None, None, None, T::Living, S::Individual),
    ("Laitu Chin", "clj", None, None, None, T::Living, S::Individual),
    ("Idu-Mishmi", "clk", None, None, None, T::Living, S::Individual),
    ("Chala", "cll", None, None, None, T::Living, S::Individual),
    ("Clallam", "clm", None, None, None, T::Living, S::Individual),
    ("Lowland Oaxaca Chontal", "clo", None, None, None, T::Living, S::Individual),
    ("Lautu Chin", "clt", None, None, None, T::Living, S::Individual),
    ("Caluyanun", "clu", None, None, None, T::Living, S::Individual),
    ("Chulym", "clw", None, None, None, T::Living, S::Individual),
    ("Eastern Highland Chatino", "cly", None, None, None, T::Living, S::Individual),
    ("Maa", "cma", None, None, None, T::Living, S::Individual),
    ("Cerma", "cme", None, None, None, T::Living, S::Individual),
    ("Classical Mongolian", "cmg", None, None, None, T::Historical, S::Individual),
    ("Emberá-Chamí", "cmi", None, None, None, T::Living, S::Individual),
    ("Campalagian", "cml", None, None, None, T::Living, S::Individual),
    ("Michigamea", "cmm", None, None, None, T::Extinct, S::Individual),
    ("Mandarin Chinese", "cmn", None, None, None, T::Living, S::Individual),
    ("Central Mnong", "cmo", None, None, None, T::Living, S::Individual),
    ("Mro-Khimi Chin", "cmr", None, None, None, T::Living, S::Individual),
    ("Messapic", "cms", None, None, None, T::Ancient, S::Individual),
    ("Camtho", "cmt", None, None, None, T::Living, S::Individual),
    ("Changthang", "cna", None, None, None, T::Living, S::Individual),
    ("Chinbon Chin", "cnb", None, None, None, T::Living, S::Individual),
    ("Côông", "cnc", None, None, None, T::Living, S::Individual),
    ("Northern Qiang", "cng", None, None, None, T::Living, S::Individual),
    ("Hakha Chin", "cnh", None, None, None, T::Living, S::Individual),
    ("Asháninka", "cni", None, None, None, T::Living, S::Individual),
    ("Khumi Chin", "cnk", None, None, None, T::Living, S::Individual),
    ("Lalana Chinantec", "cnl", None, None, None, T::Living, S::Individual),
    ("Con", "cno", None, None, None, T::Living, S::Individual),
    ("Northern Ping Chinese", "cnp", None, None, None, T::Living, S::Individual),
    ("Chung", "cnq", None, None, None, T::Living, S::Individual),
    ("Montenegrin", "cnr", Some("cnr"), Some("cnr"), None, T::Living, S::Individual),
    ("Central Asmat", "cns", None, None, None, T::Living, S::Individual),
    ("Tepetotutla Chinantec", "cnt", None, None, None, T::Living, S::Individual),
    ("Chenoua", "cnu", None, None, None, T::Living, S::Individual),
    ("Ngawn Chin", "cnw", None, None, None, T::Living, S::Individual),
    ("Middle Cornish", "cnx", None, None, None, T::Historical, S::Individual),
    ("Cocos Islands Malay", "coa", None, None, None, T::Living, S::Individual),
    ("Chicomuceltec", "cob", None, None, None, T::Extinct, S::Individual),
    ("Cocopa", "coc", None, None, None, T::Living, S::Individual),
    ("Cocama-Cocamilla", "cod", None, None, None, T::Living, S::Individual),
    ("Koreguaje", "coe", None, None, None, T::Living, S::Individual),
    ("Colorado", "cof", None, None, None, T::Living, S::Individual),
    ("Chong", "cog", None, None, None, T::Living, S::Individual),
    ("Chonyi-Dzihana-Kauma", "coh", None, None, None, T::Living, S::Individual),
    ("Cochimi", "coj", None, None, None, T::Extinct, S::Individual),
    ("Santa Teresa Cora", "cok", None, None, None, T::Living, S::Individual),
    ("Columbia-Wenatchi", "col", None, None, None, T::Living, S::Individual),
    ("Comanche", "com", None, None, None, T::Living, S::Individual),
    ("Cofán", "con", None, None, None, T::Living, S::Individual),
    ("Comox", "coo", None, None, None, T::Living, S::Individual),
    ("Coptic", "cop", Some("cop"), Some("cop"), None, T::Extinct, S::Individual),
    ("Coquille", "coq", None, None, None, T::Extinct, S::Individual),
    ("Cornish", "cor", Some("cor"), Some("cor"), Some("kw"), T::Living, S::Individual),
    ("Corsican", "cos", Some("cos"), Some("cos"), Some("co"), T::Living, S::Individual),
    ("Caquinte", "cot", None, None, None, T::Living, S::Individual),
    ("Wamey", "cou", None, None, None, T::Living, S::Individual),
    ("Cao Miao", "cov", None, None, None, T::Living, S::Individual),
    ("Cowlitz", "cow", None, None, None, T::Extinct, S::Individual),
    ("Nanti", "cox", None, None, None, T::Living, S::Individual),
    ("Chochotec", "coz", None, None, None, T::Living, S::Individual),
    ("Palantla Chinantec", "cpa", None, None, None, T::Living, S::Individual),
    ("Ucayali-Yurúa Ashéninka", "cpb", None, None, None, T::Living, S::Individual),
    ("Ajyíninka Apurucayali", "cpc", None, None, None, T::Living, S::Individual),
    ("Cappadocian Greek", "cpg", None, None, None, T::Extinct, S::Individual),
    ("Chinese Pidgin English", "cpi", None, None, None, T::Living, S::Individual),
    ("Cherepon", "cpn", None, None, None, T::Living, S::Individual),
    ("Kpeego", "cpo", None, None, None, T::Living, S::Individual),
    ("Capiznon", "cps", None, None, None, T::Living, S::Individual),
    ("Pichis Ashéninka", "cpu", None, None, None, T::Living, S::Individual),
    ("Pu-Xian Chinese", "cpx", None, None, None, T::Living, S::Individual),
    ("South Ucayali Ashéninka", "cpy", None, None, None, T::Living, S::Individual),
    ("Chuanqiandian Cluster Miao", "cqd", None, None, None, T::Living, S::Individual),
    ("Chara", "cra", None, None, None, T::Living, S::Individual),
    ("Island Carib", "crb", None, None, None, T::Extinct, S::Individual),
    ("Lonwolwol", "crc", None, None, None, T::Living, S::Individual),
    ("Coeur d'Alene", "crd", None, None, None, T::Living, S::Individual),
    ("Cree", "cre", Some("cre"), Some("cre"), Some("cr"), T::Living, S::MacroLanguage),
    ("Caramanta", "crf", None, None, None, T::Extinct, S::Individual),
    ("Michif", "crg", None, None, None, T::Living, S::Individual),
    ("Crimean Tatar", "crh", Some("crh"), Some("crh"), None, T::Living, S::Individual),
    ("Sãotomense", "cri", None, None, None, T::Living, S::Individual),
    ("Southern East Cree", "crj", None, None, None, T::Living, S::Individual),
    ("Plains Cree", "crk", None, None, None, T::Living, S::Individual),
    ("Northern East Cree", "crl", None, None, None, T::Living, S::Individual),
    ("Moose Cree", "crm", None, None, None, T::Living, S::Individual),
    ("El Nayar Cora", "crn", None, None, None, T::Living, S::Individual),
    ("Crow", "cro", None, None, None, T::Living, S::Individual),
    ("Iyo'wujwa Chorote", "crq", None, None, None, T::Living, S::Individual),
    ("Carolina Algonquian", "crr", None, None, None, T::Extinct, S::Individual),
    ("Seselwa Creole French", "crs", None, None, None, T::Living, S::Individual),
    ("Iyojwa'ja Chorote", "crt", None, None, None, T::Living, S::Individual),
    ("Chaura", "crv", None, None, None, T::Living, S::Individual),
    ("Chrau", "crw", None, None, None, T::Living, S::Individual),
    ("Carrier", "crx", None, None, None, T::Living, S::Individual),
    ("Cori", "cry", None, None, None, T::Living, S::Individual),
    ("Cruzeño", "crz", None, None, None, T::Extinct, S::Individual),
    ("Chiltepec Chinantec", "csa", None, None, None, T::Living, S::Individual),
    ("Kashubian", "csb", Some("csb"), Some("csb"), None, T::Living, S::Individual),
    ("Catalan Sign Language", "csc", None, None, None, T::Living, S::Individual),
    ("Chiangmai Sign Language", "csd", None, None, None, T::Living, S::Individual),
    ("Czech Sign Language", "cse", None, None, None, T::Living, S::Individual),
    ("Cuba Sign Language", "csf", None, None, None, T::Living, S::Individual),
    ("Chilean Sign Language", "csg", None, None, None, T::Living, S::Individual),
    ("Asho Chin", "csh", None, None, None, T::Living, S::Individual),
    ("Coast Miwok", "csi", None, None, None, T::Extinct, S::Individual),
    ("Songlai Chin", "csj", None, None, None, T::Living, S::Individual),
    ("Jola-Kasa", "csk", None, None, None, T::Living, S::Individual),
    ("Chinese Sign Language", "csl", None, None, None, T::Living, S::Individual),
    ("Central Sierra Miwok", "csm", None, None, None, T::Living, S::Individual),
    ("Colombian Sign Language", "csn", None, None, None, T::Living, S::Individual),
    ("Sochiapam Chinantec", "cso", None, None, None, T::Living, S::Individual),
    ("Southern Ping Chinese", "csp", None, None, None, T::Living, S::Individual),
    ("Croatia Sign Language", "csq", None, None, None, T::Living, S::Individual),
    ("Costa Rican Sign Language", "csr", None, None, None, T::Living, S::Individual),
    ("Southern Ohlone", "css", None, None, None, T::Extinct, S::Individual),
    ("Northern Ohlone", "cst", None, None, None, T::Living, S::Individual),
    ("Sumtu Chin", "csv", None, None, None, T::Living, S::Individual),
    ("Swampy Cree", "csw", None, None, None, T::Living, S::Individual),
    ("Cambodian Sign Language", "csx", None, None, None, T::Living, S::Individual),
    ("Siyin Chin", "csy", None, None, None, T::Living, S::Individual),
    ("Coos", "csz", None, None, None, T::Living, S::Individual),
    ("Tataltepec Chatino", "cta", None, None, None, T::Living, S::Individual),
    ("Chetco", "ctc", None, None, None, T::Extinct, S::Individual),
    ("Tedim Chin", "ctd", None, None, None, T::Living, S::Individual),
    ("Tepinapa Chinantec", "cte", None, None, None, T::Living, S::Individual),
    ("Chittagonian", "ctg", None, None, None, T::Living, S::Individual),
    ("Thaiphum Chin", "cth", None, None, None, T::Living, S::Individual),
    ("Tlacoatzintepec Chinantec", "ctl", None, None, None, T::Living, S::Individual),
    ("Chitimacha", "ctm", None, None, None, T::Extinct, S::Individual),
    ("Chhintange", "ctn", None, None, None, T::Living, S::Individual),
    ("Emberá-Catío", "cto", None, None, None, T::Living, S::Individual),
    ("Western Highland Chatino", "ctp", None, None, None, T::Living, S::Individual),
    ("Northern Catanduanes Bikol", "cts", None, None, None, T::Living, S::Individual),
    ("Wayanad Chetti", "ctt", None, None, None, T::Living, S::Individual),
    ("Chol", "ctu", None, None, None, T::Living, S::Individual),
    ("Moundadan Chetty", "cty", None, None, None, T::Living, S::Individual),
    ("Zacatepec Chatino", "ctz", None, None, None, T::Living, S::Individual),
    ("Cua", "cua", None, None, None, T::Living, S::Individual),
    ("Cubeo", "cub", None, None, None, T::Living, S::Individual),
    ("Usila Chinantec", "cuc", None, None, None, T::Living, S::Individual),
    ("Chuka", "cuh", None, None, None, T::Living, S::Individual),
    ("Cuiba", "cui", None, None, None, T::Living, S::Individual),
    ("Mashco Piro", "cuj", None, None, None, T::Living, S::Individual),
    ("San Blas Kuna", "cuk", None, None, None, T::Living, S::Individual),
    ("Culina", "cul", None, None, None, T::Living, S::Individual),
    ("Cumanagoto", "cuo", None, None, None, T::Extinct, S::Individual),
    ("Cupeño", "cup", None, None, None, T::Extinct, S::Individual),
    ("Cun", "cuq", None, None, None, T::Living, S::Individual),
    ("Chhulung", "cur", None, None, None, T::Living, S::Individual),
    ("Teutila Cuicatec", "cut", None, None, None, T::Living, S::Individual),
    ("Tai Ya", "cuu", None, None, None, T::Living, S::Individual),
    ("Cuvok", "cuv", None, None, None, T::Living, S::Individual),
    ("Chukwa", "cuw", None, None, None, T::Living, S::Individual),
    ("Tepeuxila Cuicatec", "cux", None, None, None, T::Living, S::Individual),
    ("Cuitlatec", "cuy", None, None, None, T::Living, S::Individual),
    ("Chug", "cvg", None, None, None, T::Living, S::Individual),
    ("Valle Nacional Chinantec", "cvn", None, None, None, T::Living, S::Individual),
    ("Kabwa", "cwa", None, None, None, T::Living, S::Individual),
    ("Maindo", "cwb", None, None, None, T::Living, S::Individual),
    ("Woods Cree", "cwd", None, None, None, T::Living, S::Individual),
    ("Kwere", "cwe", None, None, None, T::Living, S::Individual),
    ("Chewong", "cwg", None, None, None, T::Living, S::Individual),
    ("Kuwaataay", "cwt", None, None, None, T::Living, S::Individual),
    ("Nopala Chatino", "cya", None, None, None, T::Living, S::Individual),
    ("Cayubaba", "cyb", None, None, None, T::Extinct, S::Individual),
    ("Welsh", "cym", Some("wel"), Some("cym"), Some("cy"), T::Living, S::Individual),
    ("Cuyonon", "cyo", None, None, None, T::Living, S::Individual),
    ("Huizhou Chinese", "czh", None, None, None, T::Living, S::Individual),
    ("Knaanic", "czk", None, None, None, T::Extinct, S::Individual),
    ("Zenzontepec Chatino", "czn", None, None, None, T::Living, S::Individual),
    ("Min Zhong Chinese", "czo", None, None, None, T::Living, S::Individual),
    ("Zotung Chin", "czt", None, None, None, T::Living, S::Individual),
    ("Dangaléat", "daa", None, None, None, T::Living, S::Individual),
    ("Dambi", "dac", None, None, None, T::Living, S::Individual),
    ("Marik", "dad", None, None, None, T::Living, S::Individual),
    ("Duupa", "dae", None, None, None, T::Living, S::Individual),
    ("Dagbani", "dag", None, None, None, T::Living, S::Individual),
    ("Gwahatike", "dah", None, None, None, T::Living, S::Individual),
    ("Day", "dai", None, None, None, T::Living, S::Individual),
    ("Dar Fur Daju", "daj", None, None, None, T::Living, S::Individual),
    ("Dakota", "dak", Some("dak"), Some("dak"), None, T::Living, S::Individual),
    ("Dahalo", "dal", None, None, None, T::Living, S::Individual),
    ("Damakawa", "dam", None, None, None, T::Living, S::Individual),
    ("Danish", "dan", Some("dan"), Some("dan"), Some("da"), T::Living, S::Individual),
    ("Daai Chin", "dao", None, None, None, T::Living, S::Individual),
    ("Dandami Maria", "daq", None, None, None, T::Living, S::Individual),
    ("Dargwa", "dar", Some("dar"), Some("dar"), None, T::Living, S::Individual),
    ("Daho-Doo", "das", None, None, None, T::Living, S::Individual),
    ("Dar Sila Daju", "dau", None, None, None, T::Living, S::Individual),
    ("Taita", "dav", None, None, None, T::Living, S::Individual),
    ("Davawenyo", "daw", None, None, None, T::Living, S::Individual),
    ("Dayi", "dax", None, None, None, T::Living, S::Individual),
    ("Dao", "daz", None, None, None, T::Living, S::Individual),
    ("Bangime", "dba", None, None, None, T::Living, S::Individual),
    ("Deno", "dbb", None, None, None, T::Living, S::Individual),
    ("Dadiya", "dbd", None, None, None, T::Living, S::Individual),
    ("Dabe", "dbe", None, None, None, T::Living, S::Individual),
    ("Edopi", "dbf", None, None, None, T::Living, S::Individual),
    ("Dogul Dom Dogon", "dbg", None, None, None, T::Living, S::Individual),
    ("Doka", "dbi", None, None, None, T::Living, S::Individual),
    ("Ida'an", "dbj", None, None, None, T::Living, S::Individual),
    ("Dyirbal", "dbl", None, None, None, T::Living, S::Individual),
    ("Duguri", "dbm", None, None, None, T::Living, S::Individual),
    ("Duriankere", "dbn", None, None, None, T::Living, S::Individual),
    ("Dulbu", "dbo", None, None, None, T::Living, S::Individual),
    ("Duwai", "dbp", None, None, None, T::Living, S::Individual),
    ("Daba", "dbq", None, None, None, T::Living, S::Individual),
    ("Dabarre", "dbr", None, None, None, T::Living, S::Individual),
    ("Ben Tey Dogon", "dbt", None, None, None, T::Living, S::Individual),
    ("Bondum Dom Dogon", "dbu", None, None, None, T::Living, S::Individual),
    ("Dungu", "dbv", None, None, None, T::Living, S::Individual),
    ("Bankan Tey Dogon", "dbw", None, None, None, T::Living, S::Individual),
    ("Dibiyaso", "dby", None, None, None, T::Living, S::Individual),
    ("Deccan", "dcc", None, None, None, T::Living, S::Individual),
    ("Negerhollands", "dcr", None, None, None, T::Extinct, S::Individual),
    ("Dadi Dadi", "dda", None, None, None, T::Extinct, S::Individual),
    ("Dongotono", "ddd", None, None, None, T::Living, S::Individual),
    ("Doondo", "dde", None, None, None, T::Living, S::Individual),
    ("Fataluku", "ddg", None, None, None, T::Living, S::Individual),
    ("West Goodenough", "ddi", None, None, None, T::Living, S::Individual),
    ("Jaru", "ddj", None, None, None, T::Living, S::Individual),
    ("Dendi (Benin)", "ddn", None, None, None, T::Living, S::Individual),
    ("Dido", "ddo", None, None, None, T::Living, S::Individual),
    ("Dhudhuroa", "ddr", None, None, None, T::Extinct, S::Individual),
    ("Donno So Dogon", "dds", None, None, None, T::Living, S::Individual),
    ("Dawera-Daweloor", "ddw", None, None, None, T::Living, S::Individual),
    ("Dagik", "dec", None, None, None, T::Living, S::Individual),
    ("Dedua", "ded", None, None, None, T::Living, S::Individual),
    ("Dewoin", "dee", None, None, None, T::Living, S::Individual),
    ("Dezfuli", "def", None, None, None, T::Living, S::Individual),
    ("Degema", "deg", None, None, None, T::Living, S::Individual),
    ("Dehwari", "deh", None, None, None, T::Living, S::Individual),
    ("Demisa", "dei", None, None, None, T::Living, S::Individual),
    ("Dek", "dek", None, None, None, T::Living, S::Individual),
    ("Delaware", "del", Some("del"), Some("del"), None, T::Living, S::MacroLanguage),
    ("Dem", "dem", None, None, None, T::Living, S::Individual),
    ("Slave (Athapascan)", "den", Some("den"), Some("den"), None, T::Living, S::MacroLanguage),
    ("Pidgin Delaware", "dep", None, None, None, T::Extinct, S::Individual),
    ("Dendi (Central African Republic)", "deq", None, None, None, T::Living, S::Individual),
    ("Deori", "der", None, None, None, T::Living, S::Individual),
    ("Desano", "des", None, None, None, T::Living, S::Individual),
    ("German", "deu", Some("ger"), Some("deu"), Some("de"), T::Living, S::Individual),
    ("Domung", "dev", None, None, None, T::Living, S::Individual),
    ("Dengese", "dez", None, None, None, T::Living, S::Individual),
    ("Southern Dagaare", "dga", None, None, None, T::Living, S::Individual),
    ("Bunoge Dogon", "dgb", None, None, None, T::Living, S::Individual),
    ("Casiguran Dumagat Agta", "dgc", None, None, None, T::Living, S::Individual),
    ("Dagaari Dioula", "dgd", None, None, None, T::Living, S::Individual),
    ("Degenan", "dge", None, None, None, T::Living, S::Individual),
    ("Doga", "dgg", None, None, None, T::Living, S::Individual),
    ("Dghwede", "dgh", None, None, None, T::Living, S::Individual),
    ("Northern Dagara", "dgi", None, None, None, T::Living, S::Individual),
    ("Dagba", "dgk", None, None, None, T::Living, S::Individual),
    ("Andaandi", "dgl", None, None, None, T::Living, S::Individual),
    ("Dagoman", "dgn", None, None, None, T::Extinct, S::Individual),
    ("Dogri (individual language)", "dgo", None, None, None, T::Living, S::Individual),
    ("Dogrib", "dgr", Some("dgr"), Some("dgr"), None, T::Living, S::Individual),
    ("Dogoso", "dgs", None, None, None, T::Living, S::Individual),
    ("Ndra'ngith", "dgt", None, None, None, T::Extinct, S::Individual),
    ("Daungwurrung", "dgw", None, None, None, T::Extinct, S::Individual),
    ("Doghoro", "dgx", None, None, None, T::Living, S::Individual),
    ("Daga", "dgz", None, None, None, T::Living, S::Individual),
    ("Dhundari", "dhd", None, None, None, T::Living, S::Individual),
    ("Dhangu-Djangu", "dhg", None, None, None, T::Living, S::Individual),
    ("Dhimal", "dhi", None, None, None, T::Living, S::Individual),
    ("Dhalandji", "dhl", None, None, None, T::Living, S::Individual),
    ("Zemba", "dhm", None, None, None, T::Living, S::Individual),
    ("Dhanki", "dhn", None, None, None, T::Living, S::Individual),
    ("Dhodia", "dho", None, None, None, T::Living, S::Individual),
    ("Dhargari", "dhr", None, None, None, T::Living, S::Individual),
    ("Dhaiso", "dhs", None, None, None, T::Living, S::Individual),
    ("Dhurga", "dhu", None, None, None, T::Extinct, S::Individual),
    ("Dehu", "dhv", None, None, None, T::Living, S::Individual),
    ("Dhanwar (Nepal)", "dhw", None, None, None, T::Living, S::Individual),
    ("Dhungaloo", "dhx", None, None, None, T::Living, S::Individual),
    ("Dia", "dia", None, None, None, T::Living, S::Individual),
    ("South Central Dinka", "dib", None, None, None, T::Living, S::Individual),
    ("Lakota Dida", "dic", None, None, None, T::Living, S::Individual),
    ("Didinga", "did", None, None, None, T::Living, S::Individual),
    ("Dieri", "dif", None, None, None, T::Extinct, S::Individual),
    ("Digo", "dig", None, None, None, T::Living, S::Individual),
    ("Kumiai", "dih", None, None, None, T::Living, S::Individual),
    ("Dimbong", "dii", None, None, None, T::Living, S::Individual),
    ("Dai", "dij", None, None, None, T::Living, S::Individual),
    ("Southwestern Dinka", "dik", None, None, None, T::Living, S::Individual),
    ("Dilling", "dil", None, None, None, T::Living, S::Individual),
    ("Dime", "dim", None, None, None, T::Living, S::Individual),
    ("Dinka", "din", Some("din"), Some("din"), None, T::Living, S::MacroLanguage),
    ("Dibo", "dio", None, None, None, T::Living, S::Individual),
    ("Northeastern Dinka", "dip", None, None, None, T::Living, S::Individual),
    ("Dimli (individual language)", "diq", None, None, None, T::Living, S::Individual),
    ("Dirim", "dir", None, None, None, T::Living, S::Individual),
    ("Dimasa", "dis", None, None, None, T::Living, S::Individual),
    ("Diriku", "diu", None, None, None, T::Living, S::Individual),
    ("Dhivehi", "div", Some("div"), Some("div"), Some("dv"), T::Living, S::Individual),
    ("Northwestern Dinka", "diw", None, None, None, T::Living, S::Individual),
    ("Dixon Reef", "dix", None, None, None, T::Living, S::Individual),
    ("Diuwe", "diy", None, None, None, T::Living, S::Individual),
    ("Ding", "diz", None, None, None, T::Living, S::Individual),
    ("Djadjawurrung", "dja", None, None, None, T::Extinct, S::Individual),
    ("Djinba", "djb", None, None, None, T::Living, S::Individual),
    ("Dar Daju Daju", "djc", None, None, None, T::Living, S::Individual),
    ("Djamindjung", "djd", None, None, None, T::Living, S::Individual),
    ("Zarma", "dje", None, None, None, T::Living, S::Individual),
    ("Djangun", "djf", None, None, None, T::Extinct, S::Individual),
    ("Djinang", "dji", None, None, None, T::Living, S::Individual),
    ("Djeebbana", "djj", None, None, None, T::Living, S::Individual),
    ("Eastern Maroon Creole", "djk", None, None, None, T::Living, S::Individual),
    ("Jamsay Dogon", "djm", None, None, None, T::Living, S::Individual),
    ("Jawoyn", "djn", None, None, None, T::Living, S::Individual),
    ("Jangkang", "djo", None, None, None, T::Living, S::Individual),
    ("Djambarrpuyngu", "djr", None, None, None, T::Living, S::Individual),
    ("Kapriman", "dju", None, None, None, T::Living, S::Individual),
    ("Djawi", "djw", None, None, None, T::Extinct, S::Individual),
    ("Dakpakha", "dka", None, None, None, T::Living, S::Individual),
    ("Kadung", "dkg", None, None, None, T::Living, S::Individual),
    ("Dakka", "dkk", None, None, None, T::Living, S::Individual),
    ("Kuijau", "dkr", None, None, None, T::Living, S::Individual),
    ("Southeastern Dinka", "dks", None, None, None, T::Living, S::Individual),
    ("Mazagway", "dkx", None, None, None, T::Living, S::Individual),
    ("Dolgan", "dlg", None, None, None, T::Living, S::Individual),
    ("Dahalik", "dlk", None, None, None, T::Living, S::Individual),
    ("Dalmatian", "dlm", None, None, None, T::Extinct, S::Individual),
    ("Darlong", "dln", None, None, None, T::Living, S::Individual),
    ("Duma", "dma", None, None, None, T::Living, S::Individual),
    ("Mombo Dogon", "dmb", None, None, None, T::Living, S::Individual),
    ("Gavak", "dmc", None, None, None, T::Living, S::Individual),
    ("Madhi Madhi", "dmd", None, None, None, T::Extinct, S::Individual),
    ("Dugwor", "dme", None, None, None, T::Living, S::Individual),
    ("Medefaidrin", "dmf", None, None, None, T::Extinct, S::Individual),
    ("Upper Kinabatangan", "dmg", None, None, None, T::Living, S::Individual),
    ("Domaaki", "dmk", None, None, None, T::Living, S::Individual),
    ("Dameli", "dml", None, None, None, T::Living, S::Individual),
    ("Dama", "dmm", None, None, None, T::Living, S::Individual),
    ("Kemedzung", "dmo", None, None, None, T::Living, S::Individual),
    ("East Damar", "dmr", None, None, None, T::Living, S::Individual),
    ("Dampelas", "dms", None, None, None, T::Living, S::Individual),
    ("Dubu", "dmu", None, None, None, T::Living, S::Individual),
    ("Dumpas", "dmv", None, None, None, T::Living, S::Individual),
    ("Mudburra", "dmw", None, None, None, T::Living, S::Individual),
    ("Dema", "dmx", None, None, None, T::Living, S::Individual),
    ("Demta", "dmy", None, None, None, T::Living, S::Individual),
    ("Upper Grand Valley Dani", "dna", None, None, None, T::Living, S::Individual),
    ("Daonda", "dnd", None, None, None, T::Living, S::Individual),
    ("Ndendeule", "dne", None, None, None, T::Living, S::Individual),
    ("Dungan", "dng", None, None, None, T::Living, S::Individual),
    ("Lower Grand Valley Dani", "dni", None, None, None, T::Living, S::Individual),
    ("Dan", "dnj", None, None, None, T::Living, S::Individual),
    ("Dengka", "dnk", None, None, None, T::Living, S::Individual),
    ("Dzùùngoo", "dnn", None, None, None, T::Living, S::Individual),
    ("Ndrulo", "dno", None, None, None, T::Living, S::Individual),
    ("Danaru", "dnr", None, None, None, T::Living, S::Individual),
    ("Mid Grand Valley Dani", "dnt", None, None, None, T::Living, S::Individual),
    ("Danau", "dnu", None, None, None, T::Living, S::Individual),
    ("Danu", "dnv", None, None, None, T::Living, S::Individual),
    ("Western Dani", "dnw", None, None, None, T::Living, S::Individual),
    ("Dení", "dny", None, None, None, T::Living, S::Individual),
    ("Dom", "doa", None, None, None, T::Living, S::Individual),
    ("Dobu", "dob", None, None, None, T::Living, S::Individual),
    ("Northern Dong", "doc", None, None, None, T::Living, S::Individual),
    ("Doe", "doe", None, None, None, T::Living, S::Individual),
    ("Domu", "dof", None, None, None, T::Living, S::Individual),
    ("Dong", "doh", None, None, None, T::Living, S::Individual),
    ("Dogri (macrolanguage)", "doi", Some("doi"), Some("doi"), None, T::Living, S::MacroLanguage),
    ("Dondo", "dok", None, None, None, T::Living, S::Individual),
    ("Doso", "dol", None, None, None, T::Living, S::Individual),
    ("Toura (Papua New Guinea)", "don", None, None, None, T::Living, S::Individual),
    ("Dongo", "doo", None, None, None, T::Living, S::Individual),
    ("Lukpa", "dop", None, None, None, T::Living, S::Individual),
    ("Dominican Sign Language", "doq", None, None, None, T::Living, S::Individual),
    ("Dori'o", "dor", None, None, None, T::Living, S::Individual),
    ("Dogosé", "dos", None, None, None, T::Living, S::Individual),
    ("Dass", "dot", None, None, None, T::Living, S::Individual),
    ("Dombe", "dov", None, None, None, T::Living, S::Individual),
    ("Doyayo", "dow", None, None, None, T::Living, S::Individual),
    ("Bussa", "dox", None, None, None, T::Living, S::Individual),
    ("Dompo", "doy", None, None, None, T::Living, S::Individual),
    ("Dorze", "doz", None, None, None, T::Living, S::Individual),
    ("Papar", "dpp", None, None, None, T::Living, S::Individual),
    ("Dair", "drb", None, None, None, T::Living, S::Individual),
    ("Minderico", "drc", None, None, None, T::Living, S::Individual),
    ("Darmiya", "drd", None, None, None, T::Living, S::Individual),
    ("Dolpo", "dre", None, None, None, T::Living, S::Individual),
    ("Rungus", "drg", None, None, None, T::Living, S::Individual),
    ("C'Lela", "dri", None, None, None, T::Living, S::Individual),
    ("Paakantyi", "drl", None, None, None, T::Living, S::Individual),
    ("West Damar", "drn", None, None, None, T::Living, S::Individual),
    ("Daro-Matu Melanau", "dro", None, None, None, T::Living, S::Individual),
    ("Dura", "drq", None, None, None, T::Extinct, S::Individual),
    ("Gedeo", "drs", None, None, None, T::Living, S::Individual),
    ("Drents", "drt", None, None, None, T::Living, S::Individual),
    ("Rukai", "dru", None, None, None, T::Living, S::Individual),
    ("Darai", "dry", None, None, None, T::Living, S::Individual),
    ("Lower Sorbian", "dsb", Some("dsb"), Some("dsb"), None, T::Living, S::Individual),
    ("Dutch Sign Language", "dse", None, None, None, T::Living, S::Individual),
    ("Daasanach", "dsh", None, None, None, T::Living, S::Individual),
    ("Disa", "dsi", None, None, None, T::Living, S::Individual),
    ("Danish Sign Language", "dsl", None, None, None, T::Living, S::Individual),
    ("Dusner", "dsn", None, None, None, T::Extinct, S::Individual),
    ("Desiya", "dso", None, None, None, T::Living, S::Individual),
    ("Tadaksahak", "dsq", None, None, None, T::Living, S::Individual),
    ("Mardin Sign Language", "dsz", None, None, None, T::Living, S::Individual),
    ("Daur", "dta", None, None, None, T::Living, S::Individual),
    ("Labuk-Kinabatangan Kadazan", "dtb", None, None, None, T::Living, S::Individual),
    ("Ditidaht", "dtd", None, None, None, T::Living, S::Individual),
    ("Adithinngithigh", "dth", None, None, None, T::Extinct, S::Individual),
    ("Ana Tinga Dogon", "dti", None, None, None, T::Living, S::Individual),
    ("Tene Kan Dogon", "dtk", None, None, None, T::Living, S::Individual),
    ("Tomo Kan Dogon", "dtm", None, None, None, T::Living, S::Individual),
    ("Daatsʼíin", "dtn", None, None, None, T::Living, S::Individual),
    ("Tommo So Dogon", "dto", None, None, None, T::Living, S::Individual),
    ("Kadazan Dusun", "dtp", None, None, None, T::Living, S::Individual),
    ("Lotud", "dtr", None, None, None, T::Living, S::Individual),
    ("Toro So Dogon", "dts", None, None, None, T::Living, S::Individual),
    ("Toro Tegu Dogon", "dtt", None, None, None, T::Living, S::Individual),
    ("Tebul Ure Dogon", "dtu", None, None, None, T::Living, S::Individual),
    ("Dotyali", "dty", None, None, None, T::Living, S::Individual),
    ("Duala", "dua", Some("dua"), Some("dua"), None, T::Living, S::Individual),
    ("Dubli", "dub", None, None, None, T::Living, S::Individual),
    ("Duna", "duc", None, None, None, T::Living, S::Individual),
    ("Umiray Dumaget Agta", "due", None, None, None, T::Living, S::Individual),
    ("Dumbea", "duf", None, None, None, T::Living, S::Individual),
    ("Duruma", "dug", None, None, None, T::Living, S::Individual),
    ("Dungra Bhil", "duh", None, None, None, T::Living, S::Individual),
    ("Dumun", "dui", None, None, None, T::Living, S::Individual),
    ("Uyajitaya", "duk", None, None, None, T::Living, S::Individual),
    ("Alabat Island Agta", "dul", None, None, None, T::Living, S::Individual),
    ("Middle Dutch (ca. 1050-1350)", "dum", Some("dum"), Some("dum"), None, T::Historical, S::Individual),
    ("Dusun Deyah", "dun", None, None, None, T::Living, S::Individual),
    ("Dupaninan Agta", "duo", None, None, None, T::Living, S::Individual),
    ("Duano", "dup", None, None, None, T::Living, S::Individual),
    ("Dusun Malang", "duq", None, None, None, T::Living, S::Individual),
    ("Dii", "dur", None, None, None, T::Living, S::Individual),
    ("Dumi", "dus", None, None, None, T::Living, S::Individual),
    ("Drung", "duu", None, None, None, T::Living, S::Individual),
    ("Duvle", "duv", None, None, None, T::Living, S::Individual),
    ("Dusun Witu", "duw", None, None, None, T::Living, S::Individual),
    ("Duungooma", "dux", None, None, None, T::Living, S::Individual),
    ("Dicamay Agta", "duy", None, None, None, T::Extinct, S::Individual),
    ("Duli-Gey", "duz", None, None, None, T::Extinct, S::Individual),
    ("Duau", "dva", None, None, None, T::Living, S::Individual),
    ("Diri", "dwa", None, None, None, T::Living, S::Individual),
    ("Dawik Kui", "dwk", None, None, None, T::Living, S::Individual),
    ("Dawro", "dwr", None, None, None, T::Living, S::Individual),
    ("Dutton World Speedwords", "dws", None, None, None, T::Constructed, S::Individual),
    ("Dhuwal", "dwu", None, None, None, T::Living, S::Individual),
    ("Dawawa", "dww", None, None, None, T::Living, S::Individual),
    ("Dhuwaya", "dwy", None, None, None, T::Living, S::Individual),
    ("Dewas Rai", "dwz", None, None, None, T::Living, S::Individual),
    ("Dyan", "dya", None, None, None, T::Living, S::Individual),
    ("Dyaberdyaber", "dyb", None, None, None, T::Extinct, S::Individual),
    ("Dyugun", "dyd", None, None, None, T::Extinct, S::Individual),
    ("Villa Viciosa Agta", "dyg", None, None, None, T::Extinct, S::Individual),
    ("Djimini Senoufo", "dyi", None, None, None, T::Living, S::Individual),
    ("Yanda Dom Dogon", "dym", None, None, None, T::Living, S::Individual),
    ("Dyangadi", "dyn", None, None, None, T::Living, S::Individual),
    ("Jola-Fonyi", "dyo", None, None, None, T::Living, S::Individual),
    ("Dyula", "dyu", Some("dyu"), Some("dyu"), None, T::Living, S::Individual),
    ("Djabugay", "dyy", None, None, None, T::Living, S::Individual),
    ("Tunzu", "dza", None, None, None, T::Living, S::Individual),
    ("Djiwarli", "dze", None, None, None, T::Extinct, S::Individual),
    ("Dazaga", "dzg", None, None, None, T::Living, S::Individual),
    ("Dzalakha", "dzl", None, None, None, T::Living, S::Individual),
    ("Dzando", "dzn", None, None, None, T::Living, S::Individual),
    ("Dzongkha", "dzo", Some("dzo"), Some("dzo"), Some("dz"), T::Living, S::Individual),
    ("Karenggapa", "eaa", None, None, None, T::Extinct, S::Individual),
    ("Beginci", "ebc", None, None, None, T::Living, S::Individual),
    ("Ebughu", "ebg", None, None, None, T::Living, S::Individual),
    ("Eastern Bontok", "ebk", None, None, None, T::Living, S::Individual),
    ("Teke-Ebo", "ebo", None, None, None, T::Living, S::Individual),
    ("Ebrié", "ebr", None, None, None, T::Living, S::Individual),
    ("Embu", "ebu", None, None, None, T::Living, S::Individual),
    ("Eteocretan", "ecr", None, None, None, T::Ancient, S::Individual),
    ("Ecuadorian Sign Language", "ecs", None, None, None, T::Living, S::Individual),
    ("Eteocypriot", "ecy", None, None, None, T::Ancient, S::Individual),
    ("E", "eee", None, None, None, T::Living, S::Individual),
    ("Efai", "efa", None, None, None, T::Living, S::Individual),
    ("Efe", "efe", None, None, None, T::Living, S::Individual),
    ("Efik", "efi", Some("efi"), Some("efi"), None, T::Living, S::Individual),
    ("Ega", "ega", None, None, None, T::Living, S::Individual),
    ("Emilian", "egl", None, None, None, T::Living, S::Individual),
    ("Benamanga", "egm", None, None, None, T::Living, S::Individual),
    ("Eggon", "ego", None, None, None, T::Living, S::Individual),
    ("Egyptian (Ancient)", "egy", Some("egy"), Some("egy"), None, T::Ancient, S::Individual),
    ("Miyakubo Sign Language", "ehs", None, None, None, T::Living, S::Individual),
    ("Ehueun", "ehu", None, None, None, T::Living, S::Individual),
    ("Eipomek", "eip", None, None, None, T::Living, S::Individual),
    ("Eitiep", "eit", None, None, None, T::Living, S::Individual),
    ("Askopan", "eiv", None, None, None, T::Living, S::Individual),
    ("Ejamat", "eja", None, None, None, T::Living, S::Individual),
    ("Ekajuk", "eka", Some("eka"), Some("eka"), None, T::Living, S::Individual),
    ("Ekit", "eke", None, None, None, T::Living, S::Individual),
    ("Ekari", "ekg", None, None, None, T::Living, S::Individual),
    ("Eki", "eki", None, None, None, T::Living, S::Individual),
    ("Standard Estonian", "ekk", None, None, None, T::Living, S::Individual),
    ("Kol (Bangladesh)", "ekl", None, None, None, T::Living, S::Individual),
    ("Elip", "ekm", None, None, None, T::Living, S::Individual),
    ("Koti", "eko", None, None, None, T::Living, S::Individual),
    ("Ekpeye", "ekp", None, None, None, T::Living, S::Individual),
    ("Yace", "ekr", None, None, None, T::Living, S::Individual),
    ("Eastern Kayah", "eky", None, None, None, T::Living, S::Individual),
    ("Elepi", "ele", None, None, None, T::Living, S::Individual),
    ("El Hugeirat", "elh", None, None, None, T::Living, S::Individual),
    ("Nding", "eli", None, None, None, T::Extinct, S::Individual),
    ("Elkei", "elk", None, None, None, T::Living, S::Individual),
    ("Modern Greek (1453-)", "ell", Some("gre"), Some("ell"), Some("el"), T::Living, S::Individual),
    ("Eleme", "elm", None, None, None, T::Living, S::Individual),
    ("El Molo", "elo", None, None, None, T::Living, S::Individual),
    ("Elu", "elu", None, None, None, T::Living, S::Individual),
    ("Elamite", "elx", Some("elx"), Some("elx"), None, T::Ancient, S::Individual),
    ("Emai-Iuleha-Ora", "ema", None, None, None, T::Living, S::Individual),
    ("Embaloh", "emb", None, None, None, T::Living, S::Individual),
    ("Emerillon", "eme", None, None, None, T::Living, S::Individual),
    ("Eastern Meohang", "emg", None, None, None, T::Living, S::Individual),
    ("Mussau-Emira", "emi", None, None, None, T::Living, S::Individual),
    ("Eastern Maninkakan", "emk", None, None, None, T::Living, S::Individual),
    ("Mamulique", "emm", None, None, None, T::Extinct, S::Individual),
    ("Eman", "emn", None, None, None, T::Living, S::Individual),
    ("Northern Emberá", "emp", None, None, None, T::Living, S::Individual),
    ("Eastern Minyag", "emq", None, None, None, T::Living, S::Individual),
    ("Pacific Gulf Yupik", "ems", None, None, None, T::Living, S::Individual),
    ("Eastern Muria", "emu", None, None, None, T::Living, S::Individual),
    ("Emplawas", "emw", None, None, None, T::Living, S::Individual),
    ("Erromintxela", "emx", None, None, None, T::Living, S::Individual),
    ("Epigraphic Mayan", "emy", None, None, None, T::Ancient, S::Individual),
    ("Mbessa", "emz", None, None, None, T::Living, S::Individual),
    ("Apali", "ena", None, None, None, T::Living, S::Individual),
    ("Markweeta", "enb", None, None, None, T::Living, S::Individual),
    ("En", "enc", None, None, None, T::Living, S::Individual),
    ("Ende", "end", None, None, None, T::Living, S::Individual),
    ("Forest Enets", "enf", None, None, None, T::Living, S::Individual),
    ("English", "eng", Some("eng"), Some("eng"), Some("en"), T::Living, S::Individual),
    ("Tundra Enets", "enh", None, None, None, T::Living, S::Individual),
    ("Enlhet", "enl", None, None, None, T::Living, S::Individual),
    ("Middle English (1100-1500)", "enm", Some("enm"), Some("enm"), None, T::Historical, S::Individual),
    ("Engenni", "enn", None, None, None, T::Living, S::Individual),
    ("Enggano", "eno", None, None, None, T::Living, S::Individual),
    ("Enga", "enq", None, None, None, T::Living, S::Individual),
    ("Emumu", "enr", None, None, None, T::Living, S::Individual),
    ("Enu", "enu", None, None, None, T::Living, S::Individual),
    ("Enwan (Edo State)", "env", None, None, None, T::Living, S::Individual),
    ("Enwan (Akwa Ibom State)", "enw", None, None, None, T::Living, S::Individual),
    ("Enxet", "enx", None, None, None, T::Living, S::Individual),
    ("Beti (Côte d'Ivoire)", "eot", None, None, None, T::Living, S::Individual),
    ("Epie", "epi", None, None, None, T::Living, S::Individual),
    ("Esperanto", "epo", Some("epo"), Some("epo"), Some("eo"), T::Constructed, S::Individual),
    ("Eravallan", "era", None, None, None, T::Living, S::Individual),
    ("Sie", "erg", None, None, None, T::Living, S::Individual),
    ("Eruwa", "erh", None, None, None, T::Living, S::Individual),
    ("Ogea", "eri", None, None, None, T::Living, S::Individual),
    ("South Efate", "erk", None, None, None, T::Living, S::Individual),
    ("Horpa", "ero", None, None, None, T::Living, S::Individual),
    ("Erre", "err", None, None, None, T::Extinct, S::Individual),
    ("Ersu", "ers", None, None, None, T::Living, S::Individual),
    ("Eritai", "ert", None, None, None, T::Living, S::Individual),
    ("Erokwanas", "erw", None, None, None, T::Living, S::Individual),
    ("Ese Ejja", "ese", None, None, None, T::Living, S::Individual),
    ("Aheri Gondi", "esg", None, None, None, T::Living, S::Individual),
    ("Eshtehardi", "esh", None, None, None, T::Living, S::Individual),
    ("North Alaskan Inupiatun", "esi", None, None, None, T::Living, S::Individual),
    ("Northwest Alaska Inupiatun", "esk", None, None, None, T::Living, S::Individual),
    ("Egypt Sign Language", "esl", None, None, None, T::Living, S::Individual),
    ("Esuma", "esm", None, None, None, T::Extinct, S::Individual),
    ("Salvadoran Sign Language", "esn", None, None, None, T::Living, S::Individual),
    ("Estonian Sign Language", "eso", None, None, None, T::Living, S::Individual),
    ("Esselen", "esq", None, None, None, T::Extinct, S::Individual),
    ("Central Siberian Yupik", "ess", None, None, None, T::Living, S::Individual),
    ("Estonian", "est", Some("est"), Some("est"), Some("et"), T::Living, S::MacroLanguage),
    ("Central Yupik", "esu", None, None, None, T::Living, S::Individual),
    ("Eskayan", "esy", None, None, None, T::Living, S::Individual),
    ("Etebi", "etb", None, None, None, T::Living, S::Individual),
    ("Etchemin", "etc", None, None, None, T::Extinct, S::Individual),
    ("Ethiopian Sign Language", "eth", None, None, None, T::Living, S::Individual),
    ("Eton (Vanuatu)", "etn", None, None, None, T::Living, S::Individual),
    ("Eton (Cameroon)", "eto", None, None, None, T::Living, S::Individual),
    ("Edolo", "etr", None, None, None, T::Living, S::Individual),
    ("Yekhee", "ets", None, None, None, T::Living, S::Individual),
    ("Etruscan", "ett", None, None, None, T::Ancient, S::Individual),
    ("Ejagham", "etu", None, None, None, T::Living, S::Individual),
    ("Eten", "etx", None, None, None, T::Living, S::Individual),
    ("Semimi", "etz", None, None, None, T::Living, S::Individual),
    ("Basque", "eus", Some("baq"), Some("eus"), Some("eu"), T::Living, S::Individual),
    ("Even", "eve", None, None, None, T::Living, S::Individual),
    ("Uvbie", "evh", None, None, None, T::Living, S::Individual),
    ("Evenki", "evn", None, None, None, T::Living, S::Individual),
    ("Ewe", "ewe", Some("ewe"), Some("ewe"), Some("ee"), T::Living, S::Individual),
    ("Ewondo", "ewo", Some("ewo"), Some("ewo"), None, T::Living, S::Individual),
    ("Extremaduran", "ext", None, None, None, T::Living, S::Individual),
    ("Eyak", "eya", None, None, None, T::Extinct, S::Individual),
    ("Keiyo", "eyo", None, None, None, T::Living, S::Individual),
    ("Ezaa", "eza", None, None, None, T::Living, S::Individual),
    ("Uzekwe", "eze", None, None, None, T::Living, S::Individual),
    ("Fasu", "faa", None, None, None, T::Living, S::Individual),
    ("Fa d'Ambu", "fab", None, None, None, T::Living, S::Individual),
    ("Wagi", "fad", None, None, None, T::Living, S::Individual),
    ("Fagani", "faf", None, None, None, T::Living, S::Individual),
    ("Finongan", "fag", None, None, None, T::Living, S::Individual),
    ("Baissa Fali", "fah", None, None, None, T::Living, S::Individual),
    ("Faiwol", "fai", None, None, None, T::Living, S::Individual),
    ("Faita", "faj", None, None, None, T::Living, S::Individual),
    ("Fang (Cameroon)", "fak", None, None, None, T::Living, S::Individual),
    ("South Fali", "fal", None, None, None, T::Living, S::Individual),
    ("Fam", "fam", None, None, None, T::Living, S::Individual),
    ("Fang (Equatorial Guinea)", "fan", Some("fan"), Some("fan"), None, T::Living, S::Individual),
    ("Faroese", "fao", Some("fao"), Some("fao"), Some("fo"), T::Living, S::Individual),
    ("Paloor", "fap", None, None, None, T::Living, S::Individual),
    ("Fataleka", "far", None, None, None, T::Living, S::Individual),
    ("Persian", "fas", Some("per"), Some("fas"), Some("fa"), T::Living, S::MacroLanguage),
    ("Fanti", "fat", Some("fat"), Some("fat"), None, T::Living, S::Individual),
    ("Fayu", "fau", None, None, None, T::Living, S::Individual),
    ("Fala", "fax", None, None, None, T::Living, S::Individual),
    ("Southwestern Fars", "fay", None, None, None, T::Living, S::Individual),
    ("Northwestern Fars", "faz", None, None, None, T::Living, S::Individual),
    ("West Albay Bikol", "fbl", None, None, None, T::Living, S::Individual),
    ("Quebec Sign Language", "fcs", None, None, None, T::Living, S::Individual),
    ("Feroge", "fer", None, None, None, T::Living, S::Individual),
    ("Foia Foia", "ffi", None, None, None, T::Living, S::Individual),
    ("Maasina Fulfulde", "ffm", None, None, None, T::Living, S::Individual),
    ("Fongoro", "fgr", None, None, None, T::Living, S::Individual),
    ("Nobiin", "fia", None, None, None, T::Living, S::Individual),
    ("Fyer", "fie", None, None, None, T::Living, S::Individual),
    ("Faifi", "fif", None, None, None, T::Living, S::Individual),
    ("Fijian", "fij", Some("fij"), Some("fij"), Some("fj"), T::Living, S::Individual),
    ("Filipino", "fil", Some("fil"), Some("fil"), None, T::Living, S::Individual),
    ("Finnish", "fin", Some("fin"), Some("fin"), Some("fi"), T::Living, S::Individual),
    ("Fipa", "fip", None, None, None, T::Living, S::Individual),
    ("Firan", "fir", None, None, None, T::Living, S::Individual),
    ("Tornedalen Finnish", "fit", None, None, None, T::Living, S::Individual),
    ("Fiwaga", "fiw", None, None, None, T::Living, S::Individual),
    ("Kirya-Konzəl", "fkk", None, None, None, T::Living, S::Individual),
    ("Kven Finnish", "fkv", None, None, None, T::Living, S::Individual),
    ("Kalispel-Pend d'Oreille", "fla", None, None, None, T::Living, S::Individual),
    ("Foau", "flh", None, None, None, T::Living, S::Individual),
    ("Fali", "fli", None, None, None, T::Living, S::Individual),
    ("North Fali", "fll", None, None, None, T::Living, S::Individual),
    ("Flinders Island", "fln", None, None, None, T::Extinct, S::Individual),
    ("Fuliiru", "flr", None, None, None, T::Living, S::Individual),
    ("Flaaitaal", "fly", None, None, None, T::Living, S::Individual),
    ("Fe'fe'", "fmp", None, None, None, T::Living, S::Individual),
    ("Far Western Muria", "fmu", None, None, None, T::Living, S::Individual),
    ("Fanbak", "fnb", None, None, None, T::Living, S::Individual),
    ("Fanagalo", "fng", None, None, None, T::Living, S::Individual),
    ("Fania", "fni", None, None, None, T::Living, S::Individual),
    ("Foodo", "fod", None, None, None, T::Living, S::Individual),
    ("Foi", "foi", None, None, None, T::Living, S::Individual),
    ("Foma", "fom", None, None, None, T::Living, S::Individual),
    ("Fon", "fon", Some("fon"), Some("fon"), None, T::Living, S::Individual),
    ("Fore", "for", None, None, None, T::Living, S::Individual),
    ("Siraya", "fos", None, None, None, T::Extinct, S::Individual),
    ("Fernando Po Creole English", "fpe", None, None, None, T::Living, S::Individual),
    ("Fas", "fqs", None, None, None, T::Living, S::Individual),
    ("French", "fra", Some("fre"), Some("fra"), Some("fr"), T::Living, S::Individual),
    ("Cajun French", "frc", None, None, None, T::Living, S::Individual),
    ("Fordata", "frd", None, None, None, T::Living, S::Individual),
    ("Frankish", "frk", None, None, None, T::Historical, S::Individual),
    ("Middle French (ca. 1400-1600)", "frm", Some("frm"), Some("frm"), None, T::Historical, S::Individual),
    ("Old French (842-ca. 1400)", "fro", Some("fro"), Some("fro"), None, T::Historical, S::Individual),
    ("Arpitan", "frp", None, None, None, T::Living, S::Individual),
    ("Forak", "frq", None, None, None, T::Living, S::Individual),
    ("Northern Frisian", "frr", Some("frr"), Some("frr"), None, T::Living, S::Individual),
    ("Eastern Frisian", "frs", Some("frs"), Some("frs"), None, T::Living, S::Individual),
    ("Fortsenal", "frt", None, None, None, T::Living, S::Individual),
    ("Western Frisian", "fry", Some("fry"), Some("fry"), Some("fy"), T::Living, S::Individual),
    ("Finnish Sign Language", "fse", None, None, None, T::Living, S::Individual),
    ("French Sign Language", "fsl", None, None, None, T::Living, S::Individual),
    ("Finland-Swedish Sign Language", "fss", None, None, None, T::Living, S::Individual),
    ("Adamawa Fulfulde", "fub", None, None, None, T::Living, S::Individual),
    ("Pulaar", "fuc", None, None, None, T::Living, S::Individual),
    ("East Futuna", "fud", None, None, None, T::Living, S::Individual),
    ("Borgu Fulfulde", "fue", None, None, None, T::Living, S::Individual),
    ("Pular", "fuf", None, None, None, T::Living, S::Individual),
    ("Western Niger Fulfulde", "fuh", None, None, None, T::Living, S::Individual),
    ("Bagirmi Fulfulde", "fui", None, None, None, T::Living, S::Individual),
    ("Ko", "fuj", None, None, None, T::Living, S::Individual),
    ("Fulah", "ful", Some("ful"), Some("ful"), Some("ff"), T::Living, S::MacroLanguage),
    ("Fum", "fum", None, None, None, T::Living, S::Individual),
    ("Fulniô", "fun", None, None, None, T::Living, S::Individual),
    ("Central-Eastern Niger Fulfulde", "fuq", None, None, None, T::Living, S::Individual),
    ("Friulian", "fur", Some("fur"), Some("fur"), None, T::Living, S::Individual),
    ("Futuna-Aniwa", "fut", None, None, None, T::Living, S::Individual),
    ("Furu", "fuu", None, None, None, T::Living, S::Individual),
    ("Nigerian Fulfulde", "fuv", None, None, None, T::Living, S::Individual),
    ("Fuyug", "fuy", None, None, None, T::Living, S::Individual),
    ("Fur", "fvr", None, None, None, T::Living, S::Individual),
    ("Fwâi", "fwa", None, None, None, T::Living, S::Individual),
    ("Fwe", "fwe", None, None, None, T::Living, S::Individual),
    ("Ga", "gaa", Some("gaa"), Some("gaa"), None, T::Living, S::Individual),
    ("Gabri", "gab", None, None, None, T::Living, S::Individual),
    ("Mixed Great Andamanese", "gac", None, None, None, T::Living, S::Individual),
    ("Gaddang", "gad", None, None, None, T::Living, S::Individual),
    ("Guarequena", "gae", None, None, None, T::Living, S::Individual),
    ("Gende", "gaf", None, None, None, T::Living, S::Individual),
    ("Gagauz", "gag", None, None, None, T::Living, S::Individual),
    ("Alekano", "gah", None, None, None, T::Living, S::Individual),
    ("Borei", "gai", None, None, None, T::Living, S::Individual),
    ("Gadsup", "gaj", None, None, None, T::Living, S::Individual),
    ("Gamkonora", "gak", None, None, None, T::Living, S::Individual),
    ("Galolen", "gal", None, None, None, T::Living, S::Individual),
    ("Kandawo", "gam", None, None, None, T::Living, S::Individual),
    ("Gan Chinese", "gan", None, None, None, T::Living, S::Individual),
    ("Gants", "gao", None, None, None, T::Living, S::Individual),
    ("Gal", "gap", None, None, None, T::Living, S::Individual),
    ("Gata'", "gaq", None, None, None, T::Living, S::Individual),
    ("Galeya", "gar", None, None, None, T::Living, S::Individual),
    ("Adiwasi Garasia", "gas", None, None, None, T::Living, S::Individual),
    ("Kenati", "gat", None, None, None, T::Living, S::Individual),
    ("Mudhili Gadaba", "gau", None, None, None, T::Living, S::Individual),
    ("Nobonob", "gaw", None, None, None, T::Living, S::Individual),
    ("Borana-Arsi-Guji Oromo", "gax", None, None, None, T::Living, S::Individual),
    ("Gayo", "gay", Some("gay"), Some("gay"), None, T::Living, S::Individual),
    ("West Central Oromo", "gaz", None, None, None, T::Living, S::Individual),
    ("Gbaya (Central African Republic)", "gba", Some("gba"), Some("gba"), None, T::Living, S::MacroLanguage),
    ("Kaytetye", "gbb", None, None, None, T::Living, S::Individual),
    ("Karajarri", "gbd", None, None, None, T::Living, S::Individual),
    ("Niksek", "gbe", None, None, None, T::Living, S::Individual),
    ("Gaikundi", "gbf", None, None, None, T::Living, S::Individual),
    ("Gbanziri", "gbg", None, None, None, T::Living, S::Individual),
    ("Defi Gbe", "gbh", None, None, None, T::Living, S::Individual),
    ("Galela", "gbi", None, None, None, T::Living, S::Individual),
    ("Bodo Gadaba", "gbj", None, None, None, T::Living, S::Individual),
    ("Gaddi", "gbk", None, None, None, T::Living, S::Individual),
    ("Gamit", "gbl", None, None, None, T::Living, S::Individual),
    ("Garhwali", "gbm", None, None, None, T::Living, S::Individual),
    ("Mo'da", "gbn", None, None, None, T::Living, S::Individual),
    ("Northern Grebo", "gbo", None, None, None, T::Living, S::Individual),
    ("Gbaya-Bossangoa", "gbp", None, None, None, T::Living, S::Individual),
    ("Gbaya-Bozoum", "gbq", None, None, None, T::Living, S::Individual),
    ("Gbagyi", "gbr", None, None, None, T::Living, S::Individual),
    ("Gbesi Gbe", "gbs", None, None, None, T::Living, S::Individual),
    ("Gagadu", "gbu", None, None, None, T::Living, S::Individual),
    ("Gbanu", "gbv", None, None, None, T::Living, S::Individual),
    ("Gabi-Gabi", "gbw", None, None, None, T::Living, S::Individual),
    ("Eastern Xwla Gbe", "gbx", None, None, None, T::Living, S::Individual),
    ("Gbari", "gby", None, None, None, T::Living, S::Individual),
    ("Zoroastrian Dari", "gbz", None, None, None, T::Living, S::Individual),
    ("Mali", "gcc", None, None, None, T::Living, S::Individual),
    ("Ganggalida", "gcd", None, None, None, T::Extinct, S::Individual),
    ("Galice", "gce", None, None, None, T::Extinct, S::Individual),
    ("Guadeloupean Creole French", "gcf", None, None, None, T::Living, S::Individual),
    ("Grenadian Creole English", "gcl", None, None, None, T::Living, S::Individual),
    ("Gaina", "gcn", None, None, None, T::Living, S::Individual),
    ("Guianese Creole French", "gcr", None, None, None, T::Living, S::Individual),
    ("Colonia Tovar German", "gct", None, None, None, T::Living, S::Individual),
    ("Gade Lohar", "gda", None, None, None, T::Living, S::Individual),
    ("Pottangi Ollar Gadaba", "gdb", None, None, None, T::Living, S::Individual),
    ("Gugu Badhun", "gdc", None, None, None, T::Extinct, S::Individual),
    ("Gedaged", "gdd", None, None, None, T::Living, S::Individual),
    ("Gude", "gde", None, None, None, T::Living, S::Individual),
    ("Guduf-Gava", "gdf", None, None, None, T::Living, S::Individual),
    ("Ga'dang", "gdg", None, None, None, T::Living, S::Individual),
    ("Gadjerawang", "gdh", None, None, None, T::Living, S::Individual),
    ("Gundi", "gdi", None, None, None, T::Living, S::Individual),
    ("Gurdjar", "gdj", None, None, None, T::Living, S::Individual),
    ("Gadang", "gdk", None, None, None, T::Living, S::Individual),
    ("Dirasha", "gdl", None, None, None, T::Living, S::Individual),
    ("Laal", "gdm", None, None, None, T::Living, S::Individual),
    ("Umanakaina", "gdn", None, None, None, T::Living, S::Individual),
    ("Ghodoberi", "gdo", None, None, None, T::Living, S::Individual),
    ("Mehri", "gdq", None, None, None, T::Living, S::Individual),
    ("Wipi", "gdr", None, None, None, T::Living, S::Individual),
    ("Ghandruk Sign Language", "gds", None, None, None, T::Living, S::Individual),
    ("Kungardutyi", "gdt", None, None, None, T::Extinct, S::Individual),
    ("Gudu", "gdu", None, None, None, T::Living, S::Individual),
    ("Godwari", "gdx", None, None, None, T::Living, S::Individual),
    ("Geruma", "gea", None, None, None, T::Living, S::Individual),
    ("Kire", "geb", None, None, None, T::Living, S::Individual),
    ("Gboloo Grebo", "gec", None, None, None, T::Living, S::Individual),
    ("Gade", "ged", None, None, None, T::Living, S::Individual),
    ("Gerai", "gef", None, None, None, T::Living, S::Individual),
    ("Gengle", "geg", None, None, None, T::Living, S::Individual),
    ("Hutterite German", "geh", None, None, None, T::Living, S::Individual),
    ("Gebe", "gei", None, None, None, T::Living, S::Individual),
    ("Gen", "gej", None, None, None, T::Living, S::Individual),
    ("Ywom", "gek", None, None, None, T::Living, S::Individual),
    ("ut-Ma'in", "gel", None, None, None, T::Living, S::Individual),
    ("Geme", "geq", None, None, None, T::Living, S::Individual),
    ("Geser-Gorom", "ges", None, None, None, T::Living, S::Individual),
    ("Eviya", "gev", None, None, None, T::Living, S::Individual),
    ("Gera", "gew", None, None, None, T::Living, S::Individual),
    ("Garre", "gex", None, None, None, T::Living, S::Individual),
    ("Enya", "gey", None, None, None, T::Living, S::Individual),
    ("Geez", "gez", Some("gez"), Some("gez"), None, T::Ancient, S::Individual),
    ("Patpatar", "gfk", None, None, None, T::Living, S::Individual),
    ("Gafat", "gft", None, None, None, T::Extinct, S::Individual),
    ("Gao", "gga", None, None, None, T::Living, S::Individual),
    ("Gbii", "ggb", None, None, None, T::Living, S::Individual),
    ("Gugadj", "ggd", None, None, None, T::Extinct, S::Individual),
    ("Gurr-goni", "gge", None, None, None, T::Living, S::Individual),
    ("Gurgula", "ggg", None, None, None, T::Living, S::Individual),
    ("Kungarakany", "ggk", None, None, None, T::Extinct, S::Individual),
    ("Ganglau", "ggl", None, None, None, T::Living, S::Individual),
    ("Gitua", "ggt", None, None, None, T::Living, S::Individual),
    ("Gagu", "ggu", None, None, None, T::Living, S::Individual),
    ("Gogodala", "ggw", None, None, None, T::Living, S::Individual),
    ("Ghadamès", "gha", None, None, None, T::Living, S::Individual),
    ("Hiberno-Scottish Gaelic", "ghc", None, None, None, T::Historical, S::Individual),
    ("Southern Ghale", "ghe", None, None, None, T::Living, S::Individual),
    ("Northern Ghale", "ghh", None, None, None, T::Living, S::Individual),
    ("Geko Karen", "ghk", None, None, None, T::Living, S::Individual),
    ("Ghulfan", "ghl", None, None, None, T::Living, S::Individual),
    ("Ghanongga", "ghn", None, None, None, T::Living, S::Individual),
    ("Ghomara", "gho", None, None, None, T::Extinct, S::Individual),
    ("Ghera", "ghr", None, None, None, T::Living, S::Individual),
    ("Guhu-Samane", "ghs", None, None, None, T::Living, S::Individual),
    ("Kuke", "ght", None, None, None, T::Living, S::Individual),
    ("Kija", "gia", None, None, None, T::Living, S::Individual),
    ("Gibanawa", "gib", None, None, None, T::Living, S::Individual),
    ("Gail", "gic", None, None, None, T::Living, S::Individual),
    ("Gidar", "gid", None, None, None, T::Living, S::Individual),
    ("Gaɓogbo", "gie", None, None, None, T::Living, S::Individual),
    ("Goaria", "gig", None, None, None, T::Living, S::Individual),
    ("Githabul", "gih", None, None, None, T::Living, S::Individual),
    ("Girirra", "gii", None, None, None, T::Living, S::Individual),
    ("Gilbertese", "gil", Some("gil"), Some("gil"), None, T::Living, S::Individual),
    ("Gimi (Eastern Highlands)", "gim", None, None, None, T::Living, S::Individual),
    ("Hinukh", "gin", None, None, None, T::Living, S::Individual),
    ("Gimi (West New Britain)", "gip", None, None, None, T::Living, S::Individual),
    ("Green Gelao", "giq", None, None, None, T::Living, S::Individual),
    ("Red Gelao", "gir", None, None, None, T::Living, S::Individual),
    ("North Giziga", "gis", None, None, None, T::Living, S::Individual),
    ("Gitxsan", "git", None, None, None, T::Living, S::Individual),
    ("Mulao", "giu", None, None, None, T::Living, S::Individual),
    ("White Gelao", "giw", None, None, None, T::Living, S::Individual),
    ("Gilima", "gix", None, None, None, T::Living, S::Individual),
    ("Giyug", "giy", None, None, None, T::Living, S::Individual),
    ("South Giziga", "giz", None, None, None, T::Living, S::Individual),
    ("Kachi Koli", "gjk", None, None, None, T::Living, S::Individual),
    ("Gunditjmara", "gjm", None, None, None, T::Extinct, S::Individual),
    ("Gonja", "gjn", None, None, None, T::Living, S::Individual),
    ("Gurindji Kriol", "gjr", None, None, None, T::Living, S::Individual),
    ("Gujari", "gju", None, None, None, T::Living, S::Individual),
    ("Guya", "gka", None, None, None, T::Living, S::Individual),
    ("Magɨ (Madang Province)", "gkd", None, None, None, T::Living, S::Individual),
    ("Ndai", "gke", None, None, None, T::Living, S::Individual),
    ("Gokana", "gkn", None, None, None, T::Living, S::Individual),
    ("Kok-Nar", "gko", None, None, None, T::Extinct, S::Individual),
    ("Guinea Kpelle", "gkp", None, None, None, T::Living, S::Individual),
    ("ǂUngkue", "gku", None, None, None, T::Extinct, S::Individual),
    ("Scottish Gaelic", "gla", Some("gla"), Some("gla"), Some("gd"), T::Living, S::Individual),
    ("Belning", "glb", None, None, None, T::Living, S::Individual),
    ("Bon Gula", "glc", None, None, None, T::Living, S::Individual),
    ("Nanai", "gld", None, None, None, T::Living, S::Individual),
    ("Irish", "gle", Some("gle"), Some("gle"), Some("ga"), T::Living, S::Individual),
    ("Galician", "glg", Some("glg"), Some("glg"), Some("gl"), T::Living, S::Individual),
    ("Northwest Pashai", "glh", None, None, None, T::Living, S::Individual),
    ("Gula Iro", "glj", None, None, None, T::Living, S::Individual),
    ("Gilaki", "glk", None, None, None, T::Living, S::Individual),
    ("Garlali", "gll", None, None, None, T::Extinct, S::Individual),
    ("Galambu", "glo", None, None, None, T::Living, S::Individual),
    ("Glaro-Twabo", "glr", None, None, None, T::Living, S::Individual),
    ("Gula (Chad)", "glu", None, None, None, T::Living, S::Individual),
    ("Manx", "glv", Some("glv"), Some("glv"), Some("gv"), T::Living, S::Individual),
    ("Glavda", "glw", None, None, None, T::Living, S::Individual),
    ("Gule", "gly", None, None, None, T::Extinct, S::Individual),
    ("Gambera", "gma", None, None, None, T::Extinct, S::Individual),
    ("Gula'alaa", "gmb", None, None, None, T::Living, S::Individual),
    ("Mághdì", "gmd", None, None, None, T::Living, S::Individual),
    ("Magɨyi", "gmg", None, None, None, T::Living, S::Individual),
    ("Middle High German (ca. 1050-1500)", "gmh", Some("gmh"), Some("gmh"), None, T::Historical, S::Individual),
    ("Middle Low German", "gml", None, None, None, T::Historical, S::Individual),
    ("Gbaya-Mbodomo", "gmm", None, None, None, T::Living, S::Individual),
    ("Gimnime", "gmn", None, None, None, T::Living, S::Individual),
    ("Mirning", "gmr", None, None, None, T::Living, S::Individual),
    ("Gumalu", "gmu", None, None, None, T::Living, S::Individual),
    ("Gamo", "gmv", None, None, None, T::Living, S::Individual),
    ("Magoma", "gmx", None, None, None, T::Living, S::Individual),
    ("Mycenaean Greek", "gmy", None, None, None, T::Ancient, S::Individual),
    ("Mgbolizhia", "gmz", None, None, None, T::Living, S::Individual),
    ("Kaansa", "gna", None, None, None, T::Living, S::Individual),
    ("Gangte", "gnb", None, None, None, T::Living, S::Individual),
    ("Guanche", "gnc", None, None, None, T::Extinct, S::Individual),
    ("Zulgo-Gemzek", "gnd", None, None, None, T::Living, S::Individual),
    ("Ganang", "gne", None, None, None, T::Living, S::Individual),
    ("Ngangam", "gng", None, None, None, T::Living, S::Individual),
    ("Lere", "gnh", None, None, None, T::Living, S::Individual),
    ("Gooniyandi", "gni", None, None, None, T::Living, S::Individual),
    ("Ngen", "gnj", None, None, None, T::Living, S::Individual),
    ("ǁGana", "gnk", None, None, None, T::Living, S::Individual),
    ("Gangulu", "gnl", None, None, None, T::Extinct, S::Individual),
    ("Ginuman", "gnm", None, None, None, T::Living, S::Individual),
    ("Gumatj", "gnn", None, None, None, T::Living, S::Individual),
    ("Northern Gondi", "gno", None, None, None, T::Living, S::Individual),
    ("Gana", "gnq", None, None, None, T::Living, S::Individual),
    ("Gureng Gureng", "gnr", None, None, None, T::Extinct, S::Individual),
    ("Guntai", "gnt", None, None, None, T::Living, S::Individual),
    ("Gnau", "gnu", None, None, None, T::Living, S::Individual),
    ("Western Bolivian Guaraní", "gnw", None, None, None, T::Living, S::Individual),
    ("Ganzi", "gnz", None, None, None, T::Living, S::Individual),
    ("Guro", "goa", None, None, None, T::Living, S::Individual),
    ("Playero", "gob", None, None, None, T::Living, S::Individual),
    ("Gorakor", "goc", None, None, None, T::Living, S::Individual),
    ("Godié", "god", None, None, None, T::Living, S::Individual),
    ("Gongduk", "goe", None, None, None, T::Living, S::Individual),
    ("Gofa", "gof", None, None, None, T::Living, S::Individual),
    ("Gogo", "gog", None, None, None, T::Living, S::Individual),
    ("Old High German (ca. 750-1050)", "goh", Some("goh"), Some("goh"), None, T::Historical, S::Individual),
    ("Gobasi", "goi", None, None, None, T::Living, S::Individual),
    ("Gowlan", "goj", None, None, None, T::Living, S::Individual),
    ("Gowli", "gok", None, None, None, T::Living, S::Individual),
    ("Gola", "gol", None, None, None, T::Living, S::Individual),
    ("Goan Konkani", "gom", None, None, None, T::Living, S::Individual),
    ("Gondi", "gon", Some("gon"), Some("gon"), None, T::Living, S::MacroLanguage),
    ("Gone Dau", "goo", None, None, None, T::Living, S::Individual),
    ("Yeretuar", "gop", None, None, None, T::Living, S::Individual),
    ("Gorap", "goq", None, None, None, T::Living, S::Individual),
    ("Gorontalo", "gor", Some("gor"), Some("gor"), None, T::Living, S::Individual),
    ("Gronings", "gos", None, None, None, T::Living, S::Individual),
    ("Gothic", "got", Some("got"), Some("got"), None, T::Ancient, S::Individual),
    ("Gavar", "gou", None, None, None, T::Living, S::Individual),
    ("Goo", "gov", None, None, None, T::Living, S::Individual),
    ("Gorowa", "gow", None, None, None, T::Living, S::Individual),
    ("Gobu", "gox", None, None, None, T::Living, S::Individual),
    ("Goundo", "goy", None, None, None, T::Living, S::Individual),
    ("Gozarkhani", "goz", None, None, None, T::Living, S::Individual),
    ("Gupa-Abawa", "gpa", None, None, None, T::Living, S::Individual),
    ("Ghanaian Pidgin English", "gpe", None, None, None, T::Living, S::Individual),
    ("Taiap", "gpn", None, None, None, T::Living, S::Individual),
    ("Ga'anda", "gqa", None, None, None, T::Living, S::Individual),
    ("Guiqiong", "gqi", None, None, None, T::Living, S::Individual),
    ("Guana (Brazil)", "gqn", None, None, None, T::Extinct, S::Individual),
    ("Gor", "gqr", None, None, None, T::Living, S::Individual),
    ("Qau", "gqu", None, None, None, T::Living, S::Individual),
    ("Rajput Garasia", "gra", None, None, None, T::Living, S::Individual),
    ("Grebo", "grb", Some("grb"), Some("grb"), None, T::Living, S::MacroLanguage),
    ("Ancient Greek (to 1453)", "grc", Some("grc"), Some("grc"), None, T::Historical, S::Individual),
    ("Guruntum-Mbaaru", "grd", None, None, None, T::Living, S::Individual),
    ("Madi", "grg", None, None, None, T::Living, S::Individual),
    ("Gbiri-Niragu", "grh", None, None, None, T::Living, S::Individual),
    ("Ghari", "gri", None, None, None, T::Living, S::Individual),
    ("Southern Grebo", "grj", None, None, None, T::Living, S::Individual),
    ("Kota Marudu Talantang", "grm", None, None, None, T::Living, S::Individual),
    ("Guarani", "grn", Some("grn"), Some("grn"), Some("gn"), T::Living, S::MacroLanguage),
    ("Groma", "gro", None, None, None, T::Living, S::Individual),
    ("Gorovu", "grq", None, None, None, T::Living, S::Individual),
    ("Taznatit", "grr", None, None, None, T::Living, S::Individual),
    ("Gresi", "grs", None, None, None, T::Living, S::Individual),
    ("Garo", "grt", None, None, None, T::Living, S::Individual),
    ("Kistane", "gru", None, None, None, T::Living, S::Individual),
    ("Central Grebo", "grv", None, None, None, T::Living, S::Individual),
    ("Gweda", "grw", None, None, None, T::Living, S::Individual),
    ("Guriaso", "grx", None, None, None, T::Living, S::Individual),
    ("Barclayville Grebo", "gry", None, None, None, T::Living, S::Individual),
    ("Guramalum", "grz", None, None, None, T::Living, S::Individual),
    ("Ghanaian Sign Language", "gse", None, None, None, T::Living, S::Individual),
    ("German Sign Language", "gsg", None, None, None, T::Living, S::Individual),
    ("Gusilay", "gsl", None, None, None, T::Living, S::Individual),
    ("Guatemalan Sign Language", "gsm", None, None, None, T::Living, S::Individual),
    ("Nema", "gsn", None, None, None, T::Living, S::Individual),
    ("Southwest Gbaya", "gso", None, None, None, T::Living, S::Individual),
    ("Wasembo", "gsp", None, None, None, T::Living, S::Individual),
    ("Greek Sign Language", "gss", None, None, None, T::Living, S::Individual),
    ("Swiss German", "gsw", Some("gsw"), Some("gsw"), None, T::Living, S::Individual),
    ("Guató", "gta", None, None, None, T::Living, S::Individual),
    ("Aghu-Tharnggala", "gtu", None, None, None, T::Extinct, S::Individual),
    ("Shiki", "gua", None, None, None, T::Living, S::Individual),
    ("Guajajára", "gub", None, None, None, T::Living, S::Individual),
    ("Wayuu", "guc", None, None, None, T::Living, S::Individual),
    ("Yocoboué Dida", "gud", None, None, None, T::Living, S::Individual),
    ("Gurindji", "gue", None, None, None, T::Living, S::Individual),
    ("Gupapuyngu", "guf", None, None, None, T::Living, S::Individual),
    ("Paraguayan Guaraní", "gug", None, None, None, T::Living, S::Individual),
    ("Guahibo", "guh", None, None, None, T::Living, S::Individual),
    ("Eastern Bolivian Guaraní", "gui", None, None, None, T::Living, S::Individual),
    ("Gujarati", "guj", Some("guj"), Some("guj"), Some("gu"), T::Living, S::Individual),
    ("Gumuz", "guk", None, None, None, T::Living, S::Individual),
    ("Sea Island Creole English", "gul", None, None, None, T::Living, S::Individual),
    ("Guambiano", "gum", None, None, None, T::Living, S::Individual),
    ("Mbyá Guaraní", "gun", None, None, None, T::Living, S::Individual),
    ("Guayabero", "guo", None, None, None, T::Living, S::Individual),
    ("Gunwinggu", "gup", None, None, None, T::Living, S::Individual),
    ("Aché", "guq", None, None, None, T::Living, S::Individual),
    ("Farefare", "gur", None, None, None, T::Living, S::Individual),
    ("Guinean Sign Language", "gus", None, None, None, T::Living, S::Individual),
    ("Maléku Jaíka", "gut", None, None, None, T::Living, S::Individual),
    ("Yanomamö", "guu", None, None, None, T::Living, S::Individual),
    ("Gun", "guw", None, None, None, T::Living, S::Individual),
    ("Gourmanchéma", "gux", None, None, None, T::Living, S::Individual),
    ("Gusii", "guz", None, None, None, T::Living, S::Individual),
    ("Guana (Paraguay)", "gva", None, None, None, T::Living, S::Individual),
    ("Guanano", "gvc", None, None, None, T::Living, S::Individual),
    ("Duwet", "gve", None, None, None, T::Living, S::Individual),
    ("Golin", "gvf", None, None, None, T::Living, S::Individual),
    ("Guajá", "gvj", None, None, None, T::Living, S::Individual),
    ("Gulay", "gvl", None, None, None, T::Living, S::Individual),
    ("Gurmana", "gvm", None, None, None, T::Living, S::Individual),
    ("Kuku-Yalanji", "gvn", None, None, None, T::Living, S::Individual),
    ("Gavião Do Jiparaná", "gvo", None, None, None, T::Living, S::Individual),
    ("Pará Gavião", "gvp", None, None, None, T::Living, S::Individual),
    ("Gurung", "gvr", None, None, None, T::Living, S::Individual),
    ("Gumawana", "gvs", None, None, None, T::Living, S::Individual),
    ("Guyani", "gvy", None, None, None, T::Extinct, S::Individual),
    ("Mbato", "gwa", None, None, None, T::Living, S::Individual),
    ("Gwa", "gwb", None, None, None, T::Living, S::Individual),
    ("Gawri", "gwc", None, None, None, T::Living, S::Individual),
    ("Gawwada", "gwd", None, None, None, T::Living, S::Individual),
    ("Gweno", "gwe", None, None, None, T::Living, S::Individual),
    ("Gowro", "gwf", None, None, None, T::Living, S::Individual),
    ("Moo", "gwg", None, None, None, T::Living, S::Individual),
    ("Gwichʼin", "gwi", Some("gwi"), Some("gwi"), None, T::Living, S::Individual),
    ("ǀGwi", "gwj", None, None, None, T::Living, S::Individual),
    ("Awngthim", "gwm", None, None, None, T::Extinct, S::Individual),
    ("Gwandara", "gwn", None, None, None, T::Living, S::Individual),
    ("Gwere", "gwr", None, None, None, T::Living, S::Individual),
    ("Gawar-Bati", "gwt", None, None, None, T::Living, S::Individual),
    ("Guwamu", "gwu", None, None, None, T::Extinct, S::Individual),
    ("Kwini", "gww", None, None, None, T::Living, S::Individual),
    ("Gua", "gwx", None, None, None, T::Living, S::Individual),
    ("Wè Southern", "gxx", None, None, None, T::Living, S::Individual),
    ("Northwest Gbaya", "gya", None, None, None, T::Living, S::Individual),
    ("Garus", "gyb", None, None, None, T::Living, S::Individual),
    ("Kayardild", "gyd", None, None, None, T::Living, S::Individual),
    ("Gyem", "gye", None, None, None, T::Living, S::Individual),
    ("Gungabula", "gyf", None, None, None, T::Extinct, S::Individual),
    ("Gbayi", "gyg", None, None, None, T::Living, S::Individual),
    ("Gyele", "gyi", None, None, None, T::Living, S::Individual),
    ("Gayil", "gyl", None, None, None, T::Living, S::Individual),
    ("Ngäbere", "gym", None, None, None, T::Living, S::Individual),
    ("Guyanese Creole English", "gyn", None, None, None, T::Living, S::Individual),
    ("Gyalsumdo", "gyo", None, None, None, T::Living, S::Individual),
    ("Guarayu", "gyr", None, None, None, T::Living, S::Individual),
    ("Gunya", "gyy", None, None, None, T::Extinct, S::Individual),
    ("Geji", "gyz", None, None, None, T::Living, S::Individual),
    ("Ganza", "gza", None, None, None, T::Living, S::Individual),
    ("Gazi", "gzi", None, None, None, T::Living, S::Individual),
    ("Gane", "gzn", None, None, None, T::Living, S::Individual),
    ("Han", "haa", None, None, None, T::Living, S::Individual),
    ("Hanoi Sign Language", "hab", None, None, None, T::Living, S::Individual),
    ("Gurani", "hac", None, None, None, T::Living, S::Individual),
    ("Hatam", "had", None, None, None, T::Living, S::Individual),
    ("Eastern Oromo", "hae", None, None, None, T::Living, S::Individual),
    ("Haiphong Sign Language", "haf", None, None, None, T::Living, S::Individual),
    ("Hanga", "hag", None, None, None, T::Living, S::Individual),
    ("Hahon", "hah", None, None, None, T::Living, S::Individual),
    ("Haida", "hai", Some("hai"), Some("hai"), None, T::Living, S::MacroLanguage),
    ("Hajong", "haj", None, None, None, T::Living, S::Individual),
    ("Hakka Chinese", "hak", None, None, None, T::Living, S::Individual),
    ("Halang", "hal", None, None, None, T::Living, S::Individual),
    ("Hewa", "ham", None, None, None, T::Living, S::Individual),
    ("Hangaza", "han", None, None, None, T::Living, S::Individual),
    ("Hakö", "hao", None, None, None, T::Living, S::Individual),
    ("Hupla", "hap", None, None, None, T::Living, S::Individual),
    ("Ha", "haq", None, None, None, T::Living, S::Individual),
    ("Harari", "har", None, None, None, T::Living, S::Individual),
    ("Haisla", "has", None, None, None, T::Living, S::Individual),
    ("Haitian", "hat", Some("hat"), Some("hat"), Some("ht"), T::Living, S::Individual),
    ("Hausa", "hau", Some("hau"), Some("hau"), Some("ha"), T::Living, S::Individual),
    ("Havu", "hav", None, None, None, T::Living, S::Individual),
    ("Hawaiian", "haw", Some("haw"), Some("haw"), None, T::Living, S::Individual),
    ("Southern Haida", "hax", None, None, None, T::Living, S::Individual),
    ("Haya", "hay", None, None, None, T::Living, S::Individual),
    ("Hazaragi", "haz", None, None, None, T::Living, S::Individual),
    ("Hamba", "hba", None, None, None, T::Living, S::Individual),
    ("Huba", "hbb", None, None, None, T::Living, S::Individual),
    ("Heiban", "hbn", None, None, None, T::Living, S::Individual),
    ("Ancient Hebrew", "hbo", None, None, None, T::Historical, S::Individual),
    ("Serbo-Croatian", "hbs", None, None, Some("sh"), T::Living, S::MacroLanguage),
    ("Habu", "hbu", None, None, None, T::Living, S::Individual),
    ("Andaman Creole Hindi", "hca", None, None, None, T::Living, S::Individual),
    ("Huichol", "hch", None, None, None, T::Living, S::Individual),
    ("Northern Haida", "hdn", None, None, None, T::Living, S::Individual),
    ("Honduras Sign Language", "hds", None, None, None, T::Living, S::Individual),
    ("Hadiyya", "hdy", None, None, None, T::Living, S::Individual),
    ("Northern Qiandong Miao", "hea", None, None, None, T::Living, S::Individual),
    ("Hebrew", "heb", Some("heb"), Some("heb"), Some("he"), T::Living, S::Individual),
    ("Herdé", "hed", None, None, None, T::Living, S::Individual),
    ("Helong", "heg", None, None, None, T::Living, S::Individual),
    ("Hehe", "heh", None, None, None, T::Living, S::Individual),
    ("Heiltsuk", "hei", None, None, None, T::Living, S::Individual),
    ("Hemba", "hem", None, None, None, T::Living, S::Individual),
    ("Herero", "her", Some("her"), Some("her"), Some("hz"), T::Living, S::Individual),
    ("Haiǁom", "hgm", None, None, None, T::Living, S::Individual),
    ("Haigwai", "hgw", None, None, None, T::Living, S::Individual),
    ("Hoia Hoia", "hhi", None, None, None, T::Living, S::Individual),
    ("Kerak", "hhr", None, None, None, T::Living, S::Individual),
    ("Hoyahoya", "hhy", None, None, None, T::Living, S::Individual),
    ("Lamang", "hia", None, None, None, T::Living, S::Individual),
    ("Hibito", "hib", None, None, None, T::Extinct, S::Individual),
    ("Hidatsa", "hid", None, None, None, T::Living, S::Individual),
    ("Fiji Hindi", "hif", None, None, None, T::Living, S::Individual),
    ("Kamwe", "hig", None, None, None, T::Living, S::Individual),
    ("Pamosu", "hih", None, None, None, T::Living, S::Individual),
    ("Hinduri", "hii", None, None, None, T::Living, S::Individual),
    ("Hijuk", "hij", None, None, None, T::Living, S::Individual),
    ("Seit-Kaitetu", "hik", None, None, None, T::Living, S::Individual),
    ("Hiligaynon", "hil", Some("hil"), Some("hil"), None, T::Living, S::Individual),
    ("Hindi", "hin", Some("hin"), Some("hin"), Some("hi"), T::Living, S::Individual),
    ("Tsoa", "hio", None, None, None, T::Living, S::Individual),
    ("Himarimã", "hir", None, None, None, T::Living, S::Individual),
    ("Hittite", "hit", Some("hit"), Some("hit"), None, T::Ancient, S::Individual),
    ("Hiw", "hiw", None, None, None, T::Living, S::Individual),
    ("Hixkaryána", "hix", None, None, None, T::Living, S::Individual),
    ("Haji", "hji", None, None, None, T::Living, S::Individual),
    ("Kahe", "hka", None, None, None, T::Living, S::Individual),
    ("Hunde", "hke", None, None, None, T::Living, S::Individual),
    ("Khah", "hkh", None, None, None, T::Living, S::Individual),
    ("Hunjara-Kaina Ke", "hkk", None, None, None, T::Living, S::Individual),
    ("Mel-Khaonh", "hkn", None, None, None, T::Living, S::Individual),
    ("Hong Kong Sign Language", "hks", None, None, None, T::Living, S::Individual),
    ("Halia", "hla", None, None, None, T::Living, S::Individual),
    ("Halbi", "hlb", None, None, None, T::Living, S::Individual),
    ("Halang Doan", "hld", None, None, None, T::Living, S::Individual),
    ("Hlersu", "hle", None, None, None, T::Living, S::Individual),
    ("Matu Chin", "hlt", None, None, None, T::Living, S::Individual),
    ("Hieroglyphic Luwian", "hlu", None, None, None, T::Ancient, S::Individual),
    ("Southern Mashan Hmong", "hma", None, None, None, T::Living, S::Individual),
    ("Humburi Senni Songhay", "hmb", None, None, None, T::Living, S::Individual),
    ("Central Huishui Hmong", "hmc", None, None, None, T::Living, S::Individual),
    ("Large Flowery Miao", "hmd", None, None, None, T::Living, S::Individual),
    ("Eastern Huishui Hmong", "hme", None, None, None, T::Living, S::Individual),
    ("Hmong Don", "hmf", None, None, None, T::Living, S::Individual),
    ("Southwestern Guiyang Hmong", "hmg", None, None, None, T::Living, S::Individual),
    ("Southwestern Huishui Hmong", "hmh", None, None, None, T::Living, S::Individual),
    ("Northern Huishui Hmong", "hmi", None, None, None, T::Living, S::Individual),
    ("Ge", "hmj", None, None, None, T::Living, S::Individual),
    ("Maek", "hmk", None, None, None, T::Ancient, S::Individual),
    ("Luopohe Hmong", "hml", None, None, None, T::Living, S::Individual),
    ("Central Mashan Hmong", "hmm", None, None, None, T::Living, S::Individual),
    ("Hmong", "hmn", Some("hmn"), Some("hmn"), None, T::Living, S::MacroLanguage),
    ("Hiri Motu", "hmo", Some("hmo"), Some("hmo"), Some("ho"), T::Living, S::Individual),
    ("Northern Mashan Hmong", "hmp", None, None, None, T::Living, S::Individual),
    ("Eastern Qiandong Miao", "hmq", None, None, None, T::Living, S::Individual),
    ("Hmar", "hmr", None, None, None, T::Living, S::Individual),
    ("Southern Qiandong Miao", "hms", None, None, None, T::Living, S::Individual),
    ("Hamtai", "hmt", None, None, None, T::Living, S::Individual),
    ("Hamap", "hmu", None, None, None, T::Living, S::Individual),
    ("Hmong Dô", "hmv", None, None, None, T::Living, S::Individual),
    ("Western Mashan Hmong", "hmw", None, None, None, T::Living, S::Individual),
    ("Southern Guiyang Hmong", "hmy", None, None, None, T::Living, S::Individual),
    ("Hmong Shua", "hmz", None, None, None, T::Living, S::Individual),
    ("Mina (Cameroon)", "hna", None, None, None, T::Living, S::Individual),
    ("Southern Hindko", "hnd", None, None, None, T::Living, S::Individual),
    ("Chhattisgarhi", "hne", None, None, None, T::Living, S::Individual),
    ("Hungu", "hng", None, None, None, T::Living, S::Individual),
    ("ǁAni", "hnh", None, None, None, T::Living, S::Individual),
    ("Hani", "hni", None, None, None, T::Living, S::Individual),
    ("Hmong Njua", "hnj", None, None, None, T::Living, S::Individual),
    ("Hanunoo", "hnn", None, None, None, T::Living, S::Individual),
    ("Northern Hindko", "hno", None, None, None, T::Living, S::Individual),
    ("Caribbean Hindustani", "hns", None, None, None, T::Living, S::Individual),
    ("Hung", "hnu", None, None, None, T::Living, S::Individual),
    ("Hoava", "hoa", None, None, None, T::Living, S::Individual),
    ("Mari (Madang Province)", "hob", None, None, None, T::Living, S::Individual),
    ("Ho", "hoc", None, None, None, T::Living, S::Individual),
    ("Holma", "hod", None, None, None, T::Extinct, S::Individual),
    ("Horom", "hoe", None, None, None, T::Living, S::Individual),
    ("Hobyót", "hoh", None, None, None, T::Living, S::Individual),
    ("Holikachuk", "hoi", None, None, None, T::Living, S::Individual),
    ("Hadothi", "hoj", None, None, None, T::Living, S::Individual),
    ("Holu", "hol", None, None, None, T::Living, S::Individual),
    ("Homa", "hom", None, None, None, T::Extinct, S::Individual),
    ("Holoholo", "hoo", None, None, None, T::Living, S::Individual),
    ("Hopi", "hop", None, None, None, T::Living, S::Individual),
    ("Horo", "hor", None, None, None, T::Extinct, S::Individual),
    ("Ho Chi Minh City Sign Language", "hos", None, None, None, T::Living, S::Individual),
    ("Hote", "hot", None, None, None, T::Living, S::Individual),
    ("Hovongan", "hov", None, None, None, T::Living, S::Individual),
    ("Honi", "how", None, None, None, T::Living, S::Individual),
    ("Holiya", "hoy", None, None, None, T::Living, S::Individual),
    ("Hozo", "hoz", None, None, None, T::Living, S::Individual),
    ("Hpon", "hpo", None, None, None, T::Extinct, S::Individual),
    ("Hawai'i Sign Language (HSL)", "hps", None, None, None, T::Living, S::Individual),
    ("Hrangkhol", "hra", None, None, None, T::Living, S::Individual),
    ("Niwer Mil", "hrc", None, None, None, T::Living, S::Individual),
    ("Hre", "hre", None, None, None, T::Living, S::Individual),
    ("Haruku", "hrk", None, None, None, T::Living, S::Individual),
    ("Horned Miao", "hrm", None, None, None, T::Living, S::Individual),
    ("Haroi", "hro", None, None, None, T::Living, S::Individual),
    ("Nhirrpi", "hrp", None, None, None, T::Extinct, S::Individual),
    ("Hértevin", "hrt", None, None, None, T::Living, S::Individual),
    ("Hruso", "hru", None, None, None, T::Living, S::Individual),
    ("Croatian", "hrv", Some("hrv"), Some("hrv"), Some("hr"), T::Living, S::Individual),
    ("Warwar Feni", "hrw", None, None, None, T::Living, S::Individual),
    ("Hunsrik", "hrx", None, None, None, T::Living, S::Individual),
    ("Harzani", "hrz", None, None, None, T::Living, S::Individual),
    ("Upper Sorbian", "hsb", Some("hsb"), Some("hsb"), None, T::Living, S::Individual),
    ("Hungarian Sign Language", "hsh", None, None, None, T::Living, S::Individual),
    ("Hausa Sign Language", "hsl", None, None, None, T::Living, S::Individual),
    ("Xiang Chinese", "hsn", None, None, None, T::Living, S::Individual),
    ("Harsusi", "hss", None, None, None, T::Living, S::Individual),
    ("Hoti", "hti", None, None, None, T::Extinct, S::Individual),
    ("Minica Huitoto", "hto", None, None, None, T::Living, S::Individual),
    ("Hadza", "hts", None, None, None, T::Living, S::Individual),
    ("Hitu", "htu", None, None, None, T::Living, S::Individual),
    ("Middle Hittite", "htx", None, None, None, T::Ancient, S::Individual),
    ("Huambisa", "hub", None, None, None, T::Living, S::Individual),
    ("ǂHua", "huc", None, None, None, T::Living, S::Individual),
    ("Huaulu", "hud", None, None, None, T::Living, S::Individual),
    ("San Francisco Del Mar Huave", "hue", None, None, None, T::Living, S::Individual),
    ("Humene", "huf", None, None, None, T::Living, S::Individual),
    ("Huachipaeri", "hug", None, None, None, T::Living, S::Individual),
    ("Huilliche", "huh", None, None, None, T::Living, S::Individual),
    ("Huli", "hui", None, None, None, T::Living, S::Individual),
    ("Northern Guiyang Hmong", "huj", None, None, None, T::Living, S::Individual),
    ("Hulung", "huk", None, None, None, T::Extinct, S::Individual),
    ("Hula", "hul", None, None, None, T::Living, S::Individual),
    ("Hungana", "hum", None, None, None, T::Living, S::Individual),
    ("Hungarian", "hun", Some("hun"), Some("hun"), Some("hu"), T::Living, S::Individual),
    ("Hu", "huo", None, None, None, T::Living, S::Individual),
    ("Hupa", "hup", Some("hup"), Some("hup"), None, T::Living, S::Individual),
    ("Tsat", "huq", None, None, None, T::Living, S::Individual),
    ("Halkomelem", "hur", None, None, None, T::Living, S::Individual),
    ("Huastec", "hus", None, None, None, T::Living, S::Individual),
    ("Humla", "hut", None, None, None, T::Living, S::Individual),
    ("Murui Huitoto", "huu", None, None, None, T::Living, S::Individual),
    ("San Mateo Del Mar Huave", "huv", None, None, None, T::Living, S::Individual),
    ("Hukumina", "huw", None, None, None, T::Extinct, S::Individual),
    ("Nüpode Huitoto", "hux", None, None, None, T::Living, S::Individual),
    ("Hulaulá", "huy", None, None, None, T::Living, S::Individual),
    ("Hunzib", "huz", None, None, None, T::Living, S::Individual),
    ("Haitian Vodoun Culture Language", "hvc", None, None, None, T::Living, S::Individual),
    ("San Dionisio Del Mar Huave", "hve", None, None, None, T::Living, S::Individual),
    ("Haveke", "hvk", None, None, None, T::Living, S::Individual),
    ("Sabu", "hvn", None, None, None, T::Living, S::Individual),
    ("Santa María Del Mar Huave", "hvv", None, None, None, T::Living, S::Individual),
    ("Wané", "hwa", None, None, None, T::Living, S::Individual),
    ("Hawai'i Creole English", "hwc", None, None, None, T::Living, S::Individual),
    ("Hwana", "hwo", None, None, None, T::Living, S::Individual),
    ("Hya", "hya", None, None, None, T::Living, S::Individual),
    ("Armenian", "hye", Some("arm"), Some("hye"), Some("hy"), T::Living, S::Individual),
    ("Western Armenian", "hyw", None, None, None, T::Living, S::Individual),
    ("Iaai", "iai", None, None, None, T::Living, S::Individual),
    ("Iatmul", "ian", None, None, None, T::Living, S::Individual),
    ("Purari", "iar", None, None, None, T::Living, S::Individual),
    ("Iban", "iba", Some("iba"), Some("iba"), None, T::Living, S::Individual),
    ("Ibibio", "ibb", None, None, None, T::Living, S::Individual),
    ("Iwaidja", "ibd", None, None, None, T::Living, S::Individual),
    ("Akpes", "ibe", None, None, None, T::Living, S::Individual),
    ("Ibanag", "ibg", None, None, None, T::Living, S::Individual),
    ("Bih", "ibh", None, None, None, T::Living, S::Individual),
    ("Ibaloi", "ibl", None, None, None, T::Living, S::Individual),
    ("Agoi", "ibm", None, None, None, T::Living, S::Individual),
    ("Ibino", "ibn", None, None, None, T::Living, S::Individual),
    ("Igbo", "ibo", Some("ibo"), Some("ibo"), Some("ig"), T::Living, S::Individual),
    ("Ibuoro", "ibr", None, None, None, T::Living, S::Individual),
    ("Ibu", "ibu", None, None, None, T::Living, S::Individual),
    ("Ibani", "iby", None, None, None, T::Living, S::Individual),
    ("Ede Ica", "ica", None, None, None, T::Living, S::Individual),
    ("Etkywan", "ich", None, None, None, T::Living, S::Individual),
    ("Icelandic Sign Language", "icl", None, None, None, T::Living, S::Individual),
    ("Islander Creole English", "icr", None, None, None, T::Living, S::Individual),
    ("Idakho-Isukha-Tiriki", "ida", None, None, None, T::Living, S::Individual),
    ("Indo-Portuguese", "idb", None, None, None, T::Living, S::Individual),
    ("Idon", "idc", None, None, None, T::Living, S::Individual),
    ("Ede Idaca", "idd", None, None, None, T::Living, S::Individual),
    ("Idere", "ide", None, None, None, T::Living, S::Individual),
    ("Idi", "idi", None, None, None, T::Living, S::Individual),
    ("Ido", "ido", Some("ido"), Some("ido"), Some("io"), T::Constructed, S::Individual),
    ("Indri", "idr", None, None, None, T::Living, S::Individual),
    ("Idesa", "ids", None, None, None, T::Living, S::Individual),
    ("Idaté", "idt", None, None, None, T::Living, S::Individual),
    ("Idoma", "idu", None, None, None, T::Living, S::Individual),
    ("Amganad Ifugao", "ifa", None, None, None, T::Living, S::Individual),
    ("Batad Ifugao", "ifb", None, None, None, T::Living, S::Individual),
    ("Ifè", "ife", None, None, None, T::Living, S::Individual),
    ("Ifo", "iff", None, None, None, T::Extinct, S::Individual),
    ("Tuwali Ifugao", "ifk", None, None, None, T::Living, S::Individual),
    ("Teke-Fuumu", "ifm", None, None, None, T::Living, S::Individual),
    ("Mayoyao Ifugao", "ifu", None, None, None, T::Living, S::Individual),
    ("Keley-I Kallahan", "ify", None, None, None, T::Living, S::Individual),
    ("Ebira", "igb", None, None, None, T::Living, S::Individual),
    ("Igede", "ige", None, None, None, T::Living, S::Individual),
    ("Igana", "igg", None, None, None, T::Living, S::Individual),
    ("Igala", "igl", None, None, None, T::Living, S::Individual),
    ("Kanggape", "igm", None, None, None, T::Living, S::Individual),
    ("Ignaciano", "ign", None, None, None, T::Living, S::Individual),
    ("Isebe", "igo", None, None, None, T::Living, S::Individual),
    ("Interglossa", "igs", None, None, None, T::Constructed, S::Individual),
    ("Igwe", "igw", None, None, None, T::Living, S::Individual),
    ("Iha Based Pidgin", "ihb", None, None, None, T::Living, S::Individual),
    ("Ihievbe", "ihi", None, None, None, T::Living, S::Individual),
    ("Iha", "ihp", None, None, None, T::Living, S::Individual),
    ("Bidhawal", "ihw", None, None, None, T::Extinct, S::Individual),
    ("Sichuan Yi", "iii", Some("iii"), Some("iii"), Some("ii"), T::Living, S::Individual),
    ("Thiin", "iin", None, None, None, T::Extinct, S::Individual),
    ("Izon", "ijc", None, None, None, T::Living, S::Individual),
    ("Biseni", "ije", None, None, None, T::Living, S::Individual),
    ("Ede Ije", "ijj", None, None, None, T::Living, S::Individual),
    ("Kalabari", "ijn", None, None, None, T::Living, S::Individual),
    ("Southeast Ijo", "ijs", None, None, None, T::Living, S::Individual),
    ("Eastern Canadian Inuktitut", "ike", None, None, None, T::Living, S::Individual),
    ("Iko", "iki", None, None, None, T::Living, S::Individual),
    ("Ika", "ikk", None, None, None, T::Living, S::Individual),
    ("Ikulu", "ikl", None, None, None, T::Living, S::Individual),
    ("Olulumo-Ikom", "iko", None, None, None, T::Living, S::Individual),
    ("Ikpeshi", "ikp", None, None, None, T::Living, S::Individual),
    ("Ikaranggal", "ikr", None, None, None, T::Extinct, S::Individual),
    ("Inuit Sign Language", "iks", None, None, None, T::Living, S::Individual),
    ("Inuinnaqtun", "ikt", None, None, None, T::Living, S::Individual),
    ("Inuktitut", "iku", Some("iku"), Some("iku"), Some("iu"), T::Living, S::MacroLanguage),
    ("Iku-Gora-Ankwa", "ikv", None, None, None, T::Living, S::Individual),
    ("Ikwere", "ikw", None, None, None, T::Living, S::Individual),
    ("Ik", "ikx", None, None, None, T::Living, S::Individual),
    ("Ikizu", "ikz", None, None, None, T::Living, S::Individual),
    ("Ile Ape", "ila", None, None, None, T::Living, S::Individual),
    ("Ila", "ilb", None, None, None, T::Living, S::Individual),
    ("Interlingue", "ile", Some("ile"), Some("ile"), Some("ie"), T::Constructed, S::Individual),
    ("Garig-Ilgar", "ilg", None, None, None, T::Extinct, S::Individual),
    ("Ili Turki", "ili", None, None, None, T::Living, S::Individual),
    ("Ilongot", "ilk", None, None, None, T::Living, S::Individual),
    ("Iranun (Malaysia)", "ilm", None, None, None, T::Living, S::Individual),
    ("Iloko", "ilo", Some("ilo"), Some("ilo"), None, T::Living, S::Individual),
    ("Iranun (Philippines)", "ilp", None, None, None, T::Living, S::Individual),
    ("International Sign", "ils", None, None, None, T::Living, S::Individual),
    ("Ili'uun", "ilu", None, None, None, T::Living, S::Individual),
    ("Ilue", "ilv", None, None, None, T::Living, S::Individual),
    ("Mala Malasar", "ima", None, None, None, T::Living, S::Individual),
    ("Anamgura", "imi", None, None, None, T::Living, S::Individual),
    ("Miluk", "iml", None, None, None, T::Extinct, S::Individual),
    ("Imonda", "imn", None, None, None, T::Living, S::Individual),
    ("Imbongu", "imo", None, None, None, T::Living, S::Individual),
    ("Imroing", "imr", None, None, None, T::Living, S::Individual),
    ("Marsian", "ims", None, None, None, T::Ancient, S::Individual),
    ("Imotong", "imt", None, None, None, T::Living, S::Individual),
    ("Milyan", "imy", None, None, None, T::Ancient, S::Individual),
    ("Interlingua (International Auxiliary Language Association)", "ina", Some("ina"), Some("ina"), Some("ia"), T::Constructed, S::Individual),
    ("Inga", "inb", None, None, None, T::Living, S::Individual),
    ("Indonesian", "ind", Some("ind"), Some("ind"), Some("id"), T::Living, S::Individual),
    ("Degexit'an", "ing", None, None, None, T::Living, S::Individual),
    ("Ingush", "inh", Some("inh"), Some("inh"), None, T::Living, S::Individual),
    ("Jungle Inga", "inj", None, None, None, T::Living, S::Individual),
    ("Indonesian Sign Language", "inl", None, None, None, T::Living, S::Individual),
    ("Minaean", "inm", None, None, None, T::Ancient, S::Individual),
    ("Isinai", "inn", None, None, None, T::Living, S::Individual),
    ("Inoke-Yate", "ino", None, None, None, T::Living, S::Individual),
    ("Iñapari", "inp", None, None, None, T::Living, S::Individual),
    ("Indian Sign Language", "ins", None, None, None, T::Living, S::Individual),
    ("Intha", "int", None, None, None, T::Living, S::Individual),
    ("Ineseño", "inz", None, None, None, T::Extinct, S::Individual),
    ("Inor", "ior", None, None, None, T::Living, S::Individual),
    ("Tuma-Irumu", "iou", None, None, None, T::Living, S::Individual),
    ("Iowa-Oto", "iow", None, None, None, T::Extinct, S::Individual),
    ("Ipili", "ipi", None, None, None, T::Living, S::Individual),
    ("Inupiaq", "ipk", Some("ipk"), Some("ipk"), Some("ik"), T::Living, S::MacroLanguage),
    ("Ipiko", "ipo", None, None, None, T::Living, S::Individual),
    ("Iquito", "iqu", None, None, None, T::Living, S::Individual),
    ("Ikwo", "iqw", None, None, None, T::Living, S::Individual),
    ("Iresim", "ire", None, None, None, T::Living, S::Individual),
    ("Irarutu", "irh", None, None, None, T::Living, S::Individual),
    ("Rigwe", "iri", None, None, None, T::Living, S::Individual),
    ("Iraqw", "irk", None, None, None, T::Living, S::Individual),
    ("Irántxe", "irn", None, None, None, T::Living, S::Individual),
    ("Ir", "irr", None, None, None, T::Living, S::Individual),
    ("Irula", "iru", None, None, None, T::Living, S::Individual),
    ("Kamberau", "irx", None, None, None, T::Living, S::Individual),
    ("Iraya", "iry", None, None, None, T::Living, S::Individual),
    ("Isabi", "isa", None, None, None, T::Living, S::Individual),
    ("Isconahua", "isc", None, None, None, T::Living, S::Individual),
    ("Isnag", "isd", None, None, None, T::Living, S::Individual),
    ("Italian Sign Language", "ise", None, None, None, T::Living, S::Individual),
    ("Irish Sign Language", "isg", None, None, None, T::Living, S::Individual),
    ("Esan", "ish", None, None, None, T::Living, S::Individual),
    ("Nkem-Nkum", "isi", None, None, None, T::Living, S::Individual),
    ("Ishkashimi", "isk", None, None, None, T::Living, S::Individual),
    ("Icelandic", "isl", Some("ice"), Some("isl"), Some("is"), T::Living, S::Individual),
    ("Masimasi", "ism", None, None, None, T::Living, S::Individual),
    ("Isanzu", "isn", None, None, None, T::Living, S::Individual),
    ("Isoko", "iso", None, None, None, T::Living, S::Individual),
    ("Israeli Sign Language", "isr", None, None, None, T::Living, S::Individual),
    ("Istriot", "ist", None, None, None, T::Living, S::Individual),
    ("Isu (Menchum Division)", "isu", None, None, None, T::Living, S::Individual),
    ("Italian", "ita", Some("ita"), Some("ita"), Some("it"), T::Living, S::Individual),
    ("Binongan Itneg", "itb", None, None, None, T::Living, S::Individual),
    ("Southern Tidung", "itd", None, None, None, T::Living, S::Individual),
    ("Itene", "ite", None, None, None, T::Extinct, S::Individual),
    ("Inlaod Itneg", "iti", None, None, None, T::Living, S::Individual),
    ("Judeo-Italian", "itk", None, None, None, T::Living, S::Individual),
    ("Itelmen", "itl", None, None, None, T::Living, S::Individual),
    ("Itu Mbon Uzo", "itm", None, None, None, T::Living, S::Individual),
    ("Itonama", "ito", None, None, None, T::Living, S::Individual),
    ("Iteri", "itr", None, None, None, T::Living, S::Individual),
    ("Isekiri", "its", None, None, None, T::Living, S::Individual),
    ("Maeng Itneg", "itt", None, None, None, T::Living, S::Individual),
    ("Itawit", "itv", None, None, None, T::Living, S::Individual),
    ("Ito", "itw", None, None, None, T::Living, S::Individual),
    ("Itik", "itx", None, None, None, T::Living, S::Individual),
    ("Moyadan Itneg", "ity", None, None, None, T::Living, S::Individual),
    ("Itzá", "itz", None, None, None, T::Living, S::Individual),
    ("Iu Mien", "ium", None, None, None, T::Living, S::Individual),
    ("Ibatan", "ivb", None, None, None, T::Living, S::Individual),
    ("Ivatan", "ivv", None, None, None, T::Living, S::Individual),
    ("I-Wak", "iwk", None, None, None, T::Living, S::Individual),
    ("Iwam", "iwm", None, None, None, T::Living, S::Individual),
    ("Iwur", "iwo", None, None, None, T::Living, S::Individual),
    ("Sepik Iwam", "iws", None, None, None, T::Living, S::Individual),
    ("Ixcatec", "ixc", None, None, None, T::Living, S::Individual),
    ("Ixil", "ixl", None, None, None, T::Living, S::Individual),
    ("Iyayu", "iya", None, None, None, T::Living, S::Individual),
    ("Mesaka", "iyo", None, None, None, T::Living, S::Individual),
    ("Yaka (Congo)", "iyx", None, None, None, T::Living, S::Individual),
    ("Ingrian", "izh", None, None, None, T::Living, S::Individual),
    ("Izere", "izr", None, None, None, T::Living, S::Individual),
    ("Izii", "izz", None, None, None, T::Living, S::Individual),
    ("Jamamadí", "jaa", None, None, None, T::Living, S::Individual),
    ("Hyam", "jab", None, None, None, T::Living, S::Individual),
    ("Popti'", "jac", None, None, None, T::Living, S::Individual),
    ("Jahanka", "jad", None, None, None, T::Living, S::Individual),
    ("Yabem", "jae", None, None, None, T::Living, S::Individual),
    ("Jara", "jaf", None, None, None, T::Living, S::Individual),
    ("Jah Hut", "jah", None, None, None, T::Living, S::Individual),
    ("Zazao", "jaj", None, None, None, T::Living, S::Individual),
    ("Jakun", "jak", None, None, None, T::Living, S::Individual),
    ("Yalahatan", "jal", None, None, None, T::Living, S::Individual),
    ("Jamaican Creole English", "jam", None, None, None, T::Living, S::Individual),
    ("Jandai", "jan", None, None, None, T::Extinct, S::Individual),
    ("Yanyuwa", "jao", None, None, None, T::Living, S::Individual),
    ("Yaqay", "jaq", None, None, None, T::Living, S::Individual),
    ("New Caledonian Javanese", "jas", None, None, None, T::Living, S::Individual),
    ("Jakati", "jat", None, None, None, T::Living, S::Individual),
    ("Yaur", "jau", None, None, None, T::Living, S::Individual),
    ("Javanese", "jav", Some("jav"), Some("jav"), Some("jv"), T::Living, S::Individual),
    ("Jambi Malay", "jax", None, None, None, T::Living, S::Individual),
    ("Yan-nhangu", "jay", None, None, None, T::Living, S::Individual),
    ("Jawe", "jaz", None, None, None, T::Living, S::Individual),
    ("Judeo-Berber", "jbe", None, None, None, T::Living, S::Individual),
    ("Badjiri", "jbi", None, None, None, T::Extinct, S::Individual),
    ("Arandai", "jbj", None, None, None, T::Living, S::Individual),
    ("Barikewa", "jbk", None, None, None, T::Living, S::Individual),
    ("Bijim", "jbm", None, None, None, T::Living, S::Individual),
    ("Nafusi", "jbn", None, None, None, T::Living, S::Individual),
    ("Lojban", "jbo", Some("jbo"), Some("jbo"), None, T::Constructed, S::Individual),
    ("Jofotek-Bromnya", "jbr", None, None, None, T::Living, S::Individual),
    ("Jabutí", "jbt", None, None, None, T::Living, S::Individual),
    ("Jukun Takum", "jbu", None, None, None, T::Living, S::Individual),
    ("Yawijibaya", "jbw", None, None, None, T::Extinct, S::Individual),
    ("Jamaican Country Sign Language", "jcs", None, None, None, T::Living, S::Individual),
    ("Krymchak", "jct", None, None, None, T::Living, S::Individual),
    ("Jad", "jda", None, None, None, T::Living, S::Individual),
    ("Jadgali", "jdg", None, None, None, T::Living, S::Individual),
    ("Judeo-Tat", "jdt", None, None, None, T::Living, S::Individual),
    ("Jebero", "jeb", None, None, None, T::Living, S::Individual),
    ("Jerung", "jee", None, None, None, T::Living, S::Individual),
    ("Jeh", "jeh", None, None, None, T::Living, S::Individual),
    ("Yei", "jei", None, None, None, T::Living, S::Individual),
    ("Jeri Kuo", "jek", None, None, None, T::Living, S::Individual),
    ("Yelmek", "jel", None, None, None, T::Living, S::Individual),
    ("Dza", "jen", None, None, None, T::Living, S::Individual),
    ("Jere", "jer", None, None, None, T::Living, S::Individual),
    ("Manem", "jet", None, None, None, T::Living, S::Individual),
    ("Jonkor Bourmataguil", "jeu", None, None, None, T::Living, S::Individual),
    ("Ngbee", "jgb", None, None, None, T::Extinct, S::Individual),
    ("Judeo-Georgian", "jge", None, None, None, T::Living, S::Individual),
    ("Gwak", "jgk", None, None, None, T::Living, S::Individual),
    ("Ngomba", "jgo", None, None, None, T::Living, S::Individual),
    ("Jehai", "jhi", None, None, None, T::Living, S::Individual),
    ("Jhankot Sign Language", "jhs", None, None, None, T::Living, S::Individual),
    ("Jina", "jia", None, None, None, T::Living, S::Individual),
    ("Jibu", "jib", None, None, None, T::Living, S::Individual),
    ("Tol", "jic", None, None, None, T::Living, S::Individual),
    ("Bu (Kaduna State)", "jid", None, None, None, T::Living, S::Individual),
    ("Jilbe", "jie", None, None, None, T::Living, S::Individual),
    ("Jingulu", "jig", None, None, None, T::Living, S::Individual),
    ("sTodsde", "jih", None, None, None, T::Living, S::Individual),
    ("Jiiddu", "jii", None, None, None, T::Living, S::Individual),
    ("Jilim", "jil", None, None, None, T::Living, S::Individual),
    ("Jimi (Cameroon)", "jim", None, None, None, T::Living, S::Individual),
    ("Jiamao", "jio", None, None, None, T::Living, S::Individual),
    ("Guanyinqiao", "jiq", None, None, None, T::Living, S::Individual),
    ("Jita", "jit", None, None, None, T::Living, S::Individual),
    ("Youle Jinuo", "jiu", None, None, None, T::Living, S::Individual),
    ("Shuar", "jiv", None, None, None, T::Living, S::Individual),
    ("Buyuan Jinuo", "jiy", None, None, None, T::Living, S::Individual),
    ("Jejueo", "jje", None, None, None, T::Living, S::Individual),
    ("Bankal", "jjr", None, None, None, T::Living, S::Individual),
    ("Kaera", "jka", None, None, None, T::Living, S::Individual),
    ("Mobwa Karen", "jkm", None, None, None, T::Living, S::Individual),
    ("Kubo", "jko", None, None, None, T::Living, S::Individual),
    ("Paku Karen", "jkp", None, None, None, T::Living, S::Individual),
    ("Koro (India)", "jkr", None, None, None, T::Living, S::Individual),
    ("Amami Koniya Sign Language", "jks", None, None, None, T::Living, S::Individual),
    ("Labir", "jku", None, None, None, T::Living, S::Individual),
    ("Ngile", "jle", None, None, None, T::Living, S::Individual),
    ("Jamaican Sign Language", "jls", None, None, None, T::Living, S::Individual),
    ("Dima", "jma", None, None, None, T::Living, S::Individual),
    ("Zumbun", "jmb", None, None, None, T::Living, S::Individual),
    ("Machame", "jmc", None, None, None, T::Living, S::Individual),
    ("Yamdena", "jmd", None, None, None, T::Living, S::Individual),
    ("Jimi (Nigeria)", "jmi", None, None, None, T::Living, S::Individual),
    ("Jumli", "jml", None, None, None, T::Living, S::Individual),
    ("Makuri Naga", "jmn", None, None, None, T::Living, S::Individual),
    ("Kamara", "jmr", None, None, None, T::Living, S::Individual),
    ("Mashi (Nigeria)", "jms", None, None, None, T::Living, S::Individual),
    ("Mouwase", "jmw", None, None, None, T::Living, S::Individual),
    ("Western Juxtlahuaca Mixtec", "jmx", None, None, None, T::Living, S::Individual),
    ("Jangshung", "jna", None, None, None, T::Living, S::Individual),
    ("Jandavra", "jnd", None, None, None, T::Living, S::Individual),
    ("Yangman", "jng", None, None, None, T::Extinct, S::Individual),
    ("Janji", "jni", None, None, None, T::Living, S::Individual),
    ("Yemsa", "jnj", None, None, None, T::Living, S::Individual),
    ("Rawat", "jnl", None, None, None, T::Living, S::Individual),
    ("Jaunsari", "jns", None, None, None, T::Living, S::Individual),
    ("Joba", "job", None, None, None, T::Living, S::Individual),
    ("Wojenaka", "jod", None, None, None, T::Living, S::Individual),
    ("Jogi", "jog", None, None, None, T::Living, S::Individual),
    ("Jorá", "jor", None, None, None, T::Extinct, S::Individual),
    ("Jordanian Sign Language", "jos", None, None, None, T::Living, S::Individual),
    ("Jowulu", "jow", None, None, None, T::Living, S::Individual),
    ("Jewish Palestinian Aramaic", "jpa", None, None, None, T::Historical, S::Individual),
    ("Japanese", "jpn", Some("jpn"), Some("jpn"), Some("ja"), T::Living, S::Individual),
    ("Judeo-Persian", "jpr", Some("jpr"), Some("jpr"), None, T::Living, S::Individual),
    ("Jaqaru", "jqr", None, None, None, T::Living, S::Individual),
    ("Jarai", "jra", None, None, None, T::Living, S::Individual),
    ("Judeo-Arabic", "jrb", Some("jrb"), Some("jrb"), None, T::Living, S::MacroLanguage),
    ("Jiru", "jrr", None, None, None, T::Living, S::Individual),
    ("Jakattoe", "jrt", None, None, None, T::Living, S::Individual),
    ("Japrería", "jru", None, None, None, T::Living, S::Individual),
    ("Japanese Sign Language", "jsl", None, None, None, T::Living, S::Individual),
    ("Júma", "jua", None, None, None, T::Living, S::Individual),
    ("Wannu", "jub", None, None, None, T::Living, S::Individual),
    ("Jurchen", "juc", None, None, None, T::Extinct, S::Individual),
    ("Worodougou", "jud", None, None, None, T::Living, S::Individual),
    ("Hõne", "juh", None, None, None, T::Living, S::Individual),
    ("Ngadjuri", "jui", None, None, None, T::Extinct, S::Individual),
    ("Wapan", "juk", None, None, None, T::Living, S::Individual),
    ("Jirel", "jul", None, None, None, T::Living, S::Individual),
    ("Jumjum", "jum", None, None, None, T::Living, S::Individual),
    ("Juang", "jun", None, None, None, T::Living, S::Individual),
    ("Jiba", "juo", None, None, None, T::Living, S::Individual),
    ("Hupdë", "jup", None, None, None, T::Living, S::Individual),
    ("Jurúna", "jur", None, None, None, T::Living, S::Individual),
    ("Jumla Sign Language", "jus", None, None, None, T::Living, S::Individual),
    ("Jutish", "jut", None, None, None, T::Historical, S::Individual),
    ("Ju", "juu", None, None, None, T::Living, S::Individual),
    ("Wãpha", "juw", None, None, None, T::Living, S::Individual),
    ("Juray", "juy", None, None, None, T::Living, S::Individual),
    ("Javindo", "jvd", None, None, None, T::Living, S::Individual),
    ("Caribbean Javanese", "jvn", None, None, None, T::Living, S::Individual),
    ("Jwira-Pepesa", "jwi", None, None, None, T::Living, S::Individual),
    ("Jiarong", "jya", None, None, None, T::Living, S::Individual),
    ("Judeo-Yemeni Arabic", "jye", None, None, None, T::Living, S::Individual),
    ("Jaya", "jyy", None, None, None, T::Living, S::Individual),
    ("Kara-Kalpak", "kaa", Some("kaa"), Some("kaa"), None, T::Living, S::Individual),
    ("Kabyle", "kab", Some("kab"), Some("kab"), None, T::Living, S::Individual),
    ("Kachin", "kac", Some("kac"), Some("kac"), None, T::Living, S::Individual),
    ("Adara", "kad", None, None, None, T::Living, S::Individual),
    ("Ketangalan", "kae", None, None, None, T::Extinct, S::Individual),
    ("Katso", "kaf", None, None, None, T::Living, S::Individual),
    ("Kajaman", "kag", None, None, None, T::Living, S::Individual),
    ("Kara (Central African Republic)", "kah", None, None, None, T::Living, S::Individual),
    ("Karekare", "kai", None, None, None, T::Living, S::Individual),
    ("Jju", "kaj", None, None, None, T::Living, S::Individual),
    ("Kalanguya", "kak", None, None, None, T::Living, S::Individual),
    ("Kalaallisut", "kal", Some("kal"), Some("kal"), Some("kl"), T::Living, S::Individual),
    ("Kamba (Kenya)", "kam", Some("kam"), Some("kam"), None, T::Living, S::Individual),
    ("Kannada", "kan", Some("kan"), Some("kan"), Some("kn"), T::Living, S::Individual),
    ("Xaasongaxango", "kao", None, None, None, T::Living, S::Individual),
    ("Bezhta", "kap", None, None, None, T::Living, S::Individual),
    ("Capanahua", "kaq", None, None, None, T::Living, S::Individual),
    ("Kashmiri", "kas", Some("kas"), Some("kas"), Some("ks"), T::Living, S::Individual),
    ("Georgian", "kat", Some("geo"), Some("kat"), Some("ka"), T::Living, S::Individual),
    ("Kanuri", "kau", Some("kau"), Some("kau"), Some("kr"), T::Living, S::MacroLanguage),
    ("Katukína", "kav", None, None, None, T::Living, S::Individual),
    ("Kawi", "kaw", Some("kaw"), Some("kaw"), None, T::Ancient, S::Individual),
    ("Kao", "kax", None, None, None, T::Living, S::Individual),
    ("Kamayurá", "kay", None, None, None, T::Living, S::Individual),
    ("Kazakh", "kaz", Some("kaz"), Some("kaz"), Some("kk"), T::Living, S::Individual),
    ("Kalarko", "kba", None, None, None, T::Extinct, S::Individual),
    ("Kaxuiâna", "kbb", None, None, None, T::Extinct, S::Individual),
    ("Kadiwéu", "kbc", None, None, None, T::Living, S::Individual),
    ("Kabardian", "kbd", Some("kbd"), Some("kbd"), None, T::Living, S::Individual),
    ("Kanju", "kbe", None, None, None, T::Living, S::Individual),
    ("Khamba", "kbg", None, None, None, T::Living, S::Individual),
    ("Camsá", "kbh", None, None, None, T::Living, S::Individual),
    ("Kaptiau", "kbi", None, None, None, T::Living, S::Individual),
    ("Kari", "kbj", None, None, None, T::Living, S::Individual),
    ("Grass Koiari", "kbk", None, None, None, T::Living, S::Individual),
    ("Kanembu", "kbl", None, None, None, T::Living, S::Individual),
    ("Iwal", "kbm", None, None, None, T::Living, S::Individual),
    ("Kare (Central African Republic)", "kbn", None, None, None, T::Living, S::Individual),
    ("Keliko", "kbo", None, None, None, T::Living, S::Individual),
    ("Kabiyè", "kbp", None, None, None, T::Living, S::Individual),
    ("Kamano", "kbq", None, None, None, T::Living, S::Individual),
    ("Kafa", "kbr", None, None, None, T::Living, S::Individual),
    ("Kande", "kbs", None, None, None, T::Living, S::Individual),
    ("Abadi", "kbt", None, None, None, T::Living, S::Individual),
    ("Kabutra", "kbu", None, None, None, T::Living, S::Individual),
    ("Dera (Indonesia)", "kbv", None, None, None, T::Living, S::Individual),
    ("Kaiep", "kbw", None, None, None, T::Living, S::Individual),
    ("Ap Ma", "kbx", None, None, None, T::Living, S::Individual),
    ("Manga Kanuri", "kby", None, None, None, T::Living, S::Individual),
    ("Duhwa", "kbz", None, None, None, T::Living, S::Individual),
    ("Khanty", "kca", None, None, None, T::Living, S::Individual),
    ("Kawacha", "kcb", None, None, None, T::Living, S::Individual),
    ("Lubila", "kcc", None, None, None, T::Living, S::Individual),
    ("Ngkâlmpw Kanum", "kcd", None, None, None, T::Living, S::Individual),
    ("Kaivi", "kce", None, None, None, T::Living, S::Individual),
    ("Ukaan", "kcf", None, None, None, T::Living, S::Individual),
    ("Tyap", "kcg", None, None, None, T::Living, S::Individual),
    ("Vono", "kch", None, None, None, T::Living, S::Individual),
    ("Kamantan", "kci", None, None, None, T::Living, S::Individual),
    ("Kobiana", "kcj", None, None, None, T::Living, S::Individual),
    ("Kalanga", "kck", None, None, None, T::Living, S::Individual),
    ("Kela (Papua New Guinea)", "kcl", None, None, None, T::Living, S::Individual),
    ("Gula (Central African Republic)", "kcm", None, None, None, T::Living, S::Individual),
    ("Nubi", "kcn", None, None, None, T::Living, S::Individual),
    ("Kinalakna", "kco", None, None, None, T::Living, S::Individual),
    ("Kanga", "kcp", None, None, None, T::Living, S::Individual),
    ("Kamo", "kcq", None, None, None, T::Living, S::Individual),
    ("Katla", "kcr", None, None, None, T::Living, S::Individual),
    ("Koenoem", "kcs", None, None, None, T::Living, S::Individual),
    ("Kaian", "kct", None, None, None, T::Living, S::Individual),
    ("Kami (Tanzania)", "kcu", None, None, None, T::Living, S::Individual),
    ("Kete", "kcv", None, None, None, T::Living, S::Individual),
    ("Kabwari", "kcw", None, None, None, T::Living, S::Individual),
    ("Kachama-Ganjule", "kcx", None, None, None, T::Living, S::Individual),
    ("Korandje", "kcy", None, None, None, T::Living, S::Individual),
    ("Konongo", "kcz", None, None, None, T::Living, S::Individual),
    ("Worimi", "kda", None, None, None, T::Extinct, S::Individual),
    ("Kutu", "kdc", None, None, None, T::Living, S::Individual),
    ("Yankunytjatjara", "kdd", None, None, None, T::Living, S::Individual),
    ("Makonde", "kde", None, None, None, T::Living, S::Individual),
    ("Mamusi", "kdf", None, None, None, T::Living, S::Individual),
    ("Seba", "kdg", None, None, None, T::Living, S::Individual),
    ("Tem", "kdh", None, None, None, T::Living, S::Individual),
    ("Kumam", "kdi", None, None, None, T::Living, S::Individual),
    ("Karamojong", "kdj", None, None, None, T::Living, S::Individual),
    ("Numèè", "kdk", None, None, None, T::Living, S::Individual),
    ("Tsikimba", "kdl", None, None, None, T::Living, S::Individual),
    ("Kagoma", "kdm", None, None, None, T::Living, S::Individual),
    ("Kunda", "kdn", None, None, None, T::Living, S::Individual),
    ("Kaningdon-Nindem", "kdp", None, None, None, T::Living, S::Individual),
    ("Koch", "kdq", None, None, None, T::Living, S::Individual),
    ("Karaim", "kdr", None, None, None, T::Living, S::Individual),
    ("Kuy", "kdt", None, None, None, T::Living, S::Individual),
    ("Kadaru", "kdu", None, None, None, T::Living, S::Individual),
    ("Koneraw", "kdw", None, None, None, T::Living, S::Individual),
    ("Kam", "kdx", None, None, None, T::Living, S::Individual),
    ("Keder", "kdy", None, None, None, T::Living, S::Individual),
    ("Kwaja", "kdz", None, None, None, T::Living, S::Individual),
    ("Kabuverdianu", "kea", None, None, None, T::Living, S::Individual),
    ("Kélé", "keb", None, None, None, T::Living, S::Individual),
    ("Keiga", "kec", None, None, None, T::Living, S::Individual),
    ("Kerewe", "ked", None, None, None, T::Living, S::Individual),
    ("Eastern Keres", "kee", None, None, None, T::Living, S::Individual),
    ("Kpessi", "kef", None, None, None, T::Living, S::Individual),
    ("Tese", "keg", None, None, None, T::Living, S::Individual),
    ("Keak", "keh", None, None, None, T::Living, S::Individual),
    ("Kei", "kei", None, None, None, T::Living, S::Individual),
    ("Kadar", "kej", None, None, None, T::Living, S::Individual),
    ("Kekchí", "kek", None, None, None, T::Living, S::Individual),
    ("Kela (Democratic Republic of Congo)", "kel", None, None, None, T::Living, S::Individual),
    ("Kemak", "kem", None, None, None, T::Living, S::Individual),
    ("Kenyang", "ken", None, None, None, T::Living, S::Individual),
    ("Kakwa", "keo", None, None, None, T::Living, S::Individual),
    ("Kaikadi", "kep", None, None, None, T::Living, S::Individual),
    ("Kamar", "keq", None, None, None, T::Living, S::Individual),
    ("Kera", "ker", None, None, None, T::Living, S::Individual),
    ("Kugbo", "kes", None, None, None, T::Living, S::Individual),
    ("Ket", "ket", None, None, None, T::Living, S::Individual),
    ("Akebu", "keu", None, None, None, T::Living, S::Individual),
    ("Kanikkaran", "kev", None, None, None, T::Living, S::Individual),
    ("West Kewa", "kew", None, None, None, T::Living, S::Individual),
    ("Kukna", "kex", None, None, None, T::Living, S::Individual),
    ("Kupia", "key", None, None, None, T::Living, S::Individual),
    ("Kukele", "kez", None, None, None, T::Living, S::Individual),
    ("Kodava", "kfa", None, None, None, T::Living, S::Individual),
    ("Northwestern Kolami", "kfb", None, None, None, T::Living, S::Individual),
    ("Konda-Dora", "kfc", None, None, None, T::Living, S::Individual),
    ("Korra Koraga", "kfd", None, None, None, T::Living, S::Individual),
    ("Kota (India)", "kfe", None, None, None, T::Living, S::Individual),
    ("Koya", "kff", None, None, None, T::Living, S::Individual),
    ("Kudiya", "kfg", None, None, None, T::Living, S::Individual),
    ("Kurichiya", "kfh", None, None, None, T::Living, S::Individual),
    ("Kannada Kurumba", "kfi", None, None, None, T::Living, S::Individual),
    ("Kemiehua", "kfj", None, None, None, T::Living, S::Individual),
    ("Kinnauri", "kfk", None, None, None, T::Living, S::Individual),
    ("Kung", "kfl", None, None, None, T::Living, S::Individual),
    ("Khunsari", "kfm", None, None, None, T::Living, S::Individual),
    ("Kuk", "kfn", None, None, None, T::Living, S::Individual),
    ("Koro (Côte d'Ivoire)", "kfo", None, None, None, T::Living, S::Individual),
    ("Korwa", "kfp", None, None, None, T::Living, S::Individual),
    ("Korku", "kfq", None, None, None, T::Living, S::Individual),
    ("Kachhi", "kfr", None, None, None, T::Living, S::Individual),
    ("Bilaspuri", "kfs", None, None, None, T::Living, S::Individual),
    ("Kanjari", "kft", None, None, None, T::Living, S::Individual),
    ("Katkari", "kfu", None, None, None, T::Living, S::Individual),
    ("Kurmukar", "kfv", None, None, None, T::Living, S::Individual),
    ("Kharam Naga", "kfw", None, None, None, T::Living, S::Individual),
    ("Kullu Pahari", "kfx", None, None, None, T::Living, S::Individual),
    ("Kumaoni", "kfy", None, None, None, T::Living, S::Individual),
    ("Koromfé", "kfz", None, None, None, T::Living, S::Individual),
    ("Koyaga", "kga", None, None, None, T::Living, S::Individual),
    ("Kawe", "kgb", None, None, None, T::Living, S::Individual),
    ("Komering", "kge", None, None, None, T::Living, S::Individual),
    ("Kube", "kgf", None, None, None, T::Living, S::Individual),
    ("Kusunda", "kgg", None, None, None, T::Living, S::Individual),
    ("Selangor Sign Language", "kgi", None, None, None, T::Living, S::Individual),
    ("Gamale Kham", "kgj", None, None, None, T::Living, S::Individual),
    ("Kaiwá", "kgk", None, None, None, T::Living, S::Individual),
    ("Kunggari", "kgl", None, None, None, T::Extinct, S::Individual),
    ("Karipúna", "kgm", None, None, None, T::Extinct, S::Individual),
    ("Karingani", "kgn", None, None, None, T::Living, S::Individual),
    ("Krongo", "kgo", None, None, None, T::Living, S::Individual),
    ("Kaingang", "kgp", None, None, None, T::Living, S::Individual),
    ("Kamoro", "kgq", None, None, None, T::Living, S::Individual),
    ("Abun", "kgr", None, None, None, T::Living, S::Individual),
    ("Kumbainggar", "kgs", None, None, None, T::Living, S::Individual),
    ("Somyev", "kgt", None, None, None, T::Living, S::Individual),
    ("Kobol", "kgu", None, None, None, T::Living, S::Individual),
    ("Karas", "kgv", None, None, None, T::Living, S::Individual),
    ("Karon Dori", "kgw", None, None, None, T::Living, S::Individual),
    ("Kamaru", "kgx", None, None, None, T::Living, S::Individual),
    ("Kyerung", "kgy", None, None, None, T::Living, S::Individual),
    ("Khasi", "kha", Some("kha"), Some("kha"), None, T::Living, S::Individual),
    ("Lü", "khb", None, None, None, T::Living, S::Individual),
    ("Tukang Besi North", "khc", None, None, None, T::Living, S::Individual),
    ("Bädi Kanum", "khd", None, None, None, T::Living, S::Individual),
    ("Korowai", "khe", None, None, None, T::Living, S::Individual),
    ("Khuen", "khf", None, None, None, T::Living, S::Individual),
    ("Khams Tibetan", "khg", None, None, None, T::Living, S::Individual),
    ("Kehu", "khh", None, None, None, T::Living, S::Individual),
    ("Kuturmi", "khj", None, None, None, T::Living, S::Individual),
    ("Halh Mongolian", "khk", None, None, None, T::Living, S::Individual),
    ("Lusi", "khl", None, None, None, T::Living, S::Individual),
    ("Khmer", "khm", Some("khm"), Some("khm"), Some("km"), T::Living, S::Individual),
    ("Khandesi", "khn", None, None, None, T::Living, S::Individual),
    ("Khotanese", "kho", Some("kho"), Some("kho"), None, T::Ancient, S::Individual),
    ("Kapori", "khp", None, None, None, T::Living, S::Individual),
    ("Koyra Chiini Songhay", "khq", None, None, None, T::Living, S::Individual),
    ("Kharia", "khr", None, None, None, T::Living, S::Individual),
    ("Kasua", "khs", None, None, None, T::Living, S::Individual),
    ("Khamti", "kht", None, None, None, T::Living, S::Individual),
    ("Nkhumbi", "khu", None, None, None, T::Living, S::Individual),
    ("Khvarshi", "khv", None, None, None, T::Living, S::Individual),
    ("Khowar", "khw", None, None, None, T::Living, S::Individual),
    ("Kanu", "khx", None, None, None, T::Living, S::Individual),
    ("Kele (Democratic Republic of Congo)", "khy", None, None, None, T::Living, S::Individual),
    ("Keapara", "khz", None, None, None, T::Living, S::Individual),
    ("Kim", "kia", None, None, None, T::Living, S::Individual),
    ("Koalib", "kib", None, None, None, T::Living, S::Individual),
    ("Kickapoo", "kic", None, None, None, T::Living, S::Individual),
    ("Koshin", "kid", None, None, None, T::Living, S::Individual),
    ("Kibet", "kie", None, None, None, T::Living, S::Individual),
    ("Eastern Parbate Kham", "kif", None, None, None, T::Living, S::Individual),
    ("Kimaama", "kig", None, None, None, T::Living, S::Individual),
    ("Kilmeri", "kih", None, None, None, T::Living, S::Individual),
    ("Kitsai", "kii", None, None, None, T::Extinct, S::Individual),
    ("Kilivila", "kij", None, None, None, T::Living, S::Individual),
    ("Kikuyu", "kik", Some("kik"), Some("kik"), Some("ki"), T::Living, S::Individual),
    ("Kariya", "kil", None, None, None, T::Living, S::Individual),
    ("Karagas", "kim", None, None, None, T::Living, S::Individual),
    ("Kinyarwanda", "kin", Some("kin"), Some("kin"), Some("rw"), T::Living, S::Individual),
    ("Kiowa", "kio", None, None, None, T::Living, S::Individual),
    ("Sheshi Kham", "kip", None, None, None, T::Living, S::Individual),
    ("Kosadle", "kiq", None, None, None, T::Living, S::Individual),
    ("Kirghiz", "kir", Some("kir"), Some("kir"), Some("ky"), T::Living, S::Individual),
    ("Kis", "kis", None, None, None, T::Living, S::Individual),
    ("Agob", "kit", None, None, None, T::Living, S::Individual),
    ("Kirmanjki (individual language)", "kiu", None, None, None, T::Living, S::Individual),
    ("Kimbu", "kiv", None, None, None, T::Living, S::Individual),
    ("Northeast Kiwai", "kiw", None, None, None, T::Living, S::Individual),
    ("Khiamniungan Naga", "kix", None, None, None, T::Living, S::Individual),
    ("Kirikiri", "kiy", None, None, None, T::Living, S::Individual),
    ("Kisi", "kiz", None, None, None, T::Living, S::Individual),
    ("Mlap", "kja", None, None, None, T::Living, S::Individual),
    ("Q'anjob'al", "kjb", None, None, None, T::Living, S::Individual),
    ("Coastal Konjo", "kjc", None, None, None, T::Living, S::Individual),
    ("Southern Kiwai", "kjd", None, None, None, T::Living, S::Individual),
    ("Kisar", "kje", None, None, None, T::Living, S::Individual),
    ("Khmu", "kjg", None, None, None, T::Living, S::Individual),
    ("Khakas", "kjh", None, None, None, T::Living, S::Individual),
    ("Zabana", "kji", None, None, None, T::Living, S::Individual),
    ("Khinalugh", "kjj", None, None, None, T::Living, S::Individual),
    ("Highland Konjo", "kjk", None, None, None, T::Living, S::Individual),
    ("Western Parbate Kham", "kjl", None, None, None, T::Living, S::Individual),
    ("Kháng", "kjm", None, None, None, T::Living, S::Individual),
    ("Kunjen", "kjn", None, None, None, T::Living, S::Individual),
    ("Harijan Kinnauri", "kjo", None, None, None, T::Living, S::Individual),
    ("Pwo Eastern Karen", "kjp", None, None, None, T::Living, S::Individual),
    ("Western Keres", "kjq", None, None, None, T::Living, S::Individual),
    ("Kurudu", "kjr", None, None, None, T::Living, S::Individual),
    ("East Kewa", "kjs", None, None, None, T::Living, S::Individual),
    ("Phrae Pwo Karen", "kjt", None, None, None, T::Living, S::Individual),
    ("Kashaya", "kju", None, None, None, T::Living, S::Individual),
    ("Kaikavian Literary Language", "kjv", None, None, None, T::Historical, S::Individual),
    ("Ramopa", "kjx", None, None, None, T::Living, S::Individual),
    ("Erave", "kjy", None, None, None, T::Living, S::Individual),
    ("Bumthangkha", "kjz", None, None, None, T::Living, S::Individual),
    ("Kakanda", "kka", None, None, None, T::Living, S::Individual),
    ("Kwerisa", "kkb", None, None, None, T::Living, S::Individual),
    ("Odoodee", "kkc", None, None, None, T::Living, S::Individual),
    ("Kinuku", "kkd", None, None, None, T::Living, S::Individual),
    ("Kakabe", "kke", None, None, None, T::Living, S::Individual),
    ("Kalaktang Monpa", "kkf", None, None, None, T::Living, S::Individual),
    ("Mabaka Valley Kalinga", "kkg", None, None, None, T::Living, S::Individual),
    ("Khün", "kkh", None, None, None, T::Living, S::Individual),
    ("Kagulu", "kki", None, None, None, T::Living, S::Individual),
    ("Kako", "kkj", None, None, None, T::Living, S::Individual),
    ("Kokota", "kkk", None, None, None, T::Living, S::Individual),
    ("Kosarek Yale", "kkl", None, None, None, T::Living, S::Individual),
    ("Kiong", "kkm", None, None, None, T::Living, S::Individual),
    ("Kon Keu", "kkn", None, None, None, T::Living, S::Individual),
    ("Karko", "kko", None, None, None, T::Living, S::Individual),
    ("Gugubera", "kkp", None, None, None, T::Living, S::Individual),
    ("Kaeku", "kkq", None, None, None, T::Living, S::Individual),
    ("Kir-Balar", "kkr", None, None, None, T::Living, S::Individual),
    ("Giiwo", "kks", None, None, None, T::Living, S::Individual),
    ("Koi", "kkt", None, None, None, T::Living, S::Individual),
    ("Tumi", "kku", None, None, None, T::Living, S::Individual),
    ("Kangean", "kkv", None, None, None, T::Living, S::Individual),
    ("Teke-Kukuya", "kkw", None, None, None, T::Living, S::Individual),
    ("Kohin", "kkx", None, None, None, T::Living, S::Individual),
    ("Guugu Yimidhirr", "kky", None, None, None, T::Living, S::Individual),
    ("Kaska", "kkz", None, None, None, T::Living, S::Individual),
    ("Klamath-Modoc", "kla", None, None, None, T::Extinct, S::Individual),
    ("Kiliwa", "klb", None, None, None, T::Living, S::Individual),
    ("Kolbila", "klc", None, None, None, T::Living, S::Individual),
    ("Gamilaraay", "kld", None, None, None, T::Living, S::Individual),
    ("Kulung (Nepal)", "kle", None, None, None, T::Living, S::Individual),
    ("Kendeje", "klf", None, None, None, T::Living, S::Individual),
    ("Tagakaulo", "klg", None, None, None, T::Living, S::Individual),
    ("Weliki", "klh", None, None, None, T::Living, S::Individual),
    ("Kalumpang", "kli", None, None, None, T::Living, S::Individual),
    ("Khalaj", "klj", None, None, None, T::Living, S::Individual),
    ("Kono (Nigeria)", "klk", None, None, None, T::Living, S::Individual),
    ("Kagan Kalagan", "kll", None, None, None, T::Living, S::Individual),
    ("Migum", "klm", None, None, None, T::Living, S::Individual),
    ("Kalenjin", "kln", None, None, None, T::Living, S::MacroLanguage),
    ("Kapya", "klo", None, None, None, T::Living, S::Individual),
    ("Kamasa", "klp", None, None, None, T::Living, S::Individual),
    ("Rumu", "klq", None, None, None, T::Living, S::Individual),
    ("Khaling", "klr", None, None, None, T::Living, S::Individual),
    ("Kalasha", "kls", None, None, None, T::Living, S::Individual),
    ("Nukna", "klt", None, None, None, T::Living, S::Individual),
    ("Klao", "klu", None, None, None, T::Living, S::Individual),
    ("Maskelynes", "klv", None, None, None, T::Living, S::Individual),
    ("Tado", "klw", None, None, None, T::Living, S::Individual),
    ("Koluwawa", "klx", None, None, None, T::Living, S::Individual),
    ("Kalao", "kly", None, None, None, T::Living, S::Individual),
    ("Kabola", "klz", None, None, None, T::Living, S::Individual),
    ("Konni", "kma", None, None, None, T::Living, S::Individual),
    ("Kimbundu", "kmb", Some("kmb"), Some("kmb"), None, T::Living, S::Individual),
    ("Southern Dong", "kmc", None, None, None, T::Living, S::Individual),
    ("Majukayang Kalinga", "kmd", None, None, None, T::Living, S::Individual),
    ("Bakole", "kme", None, None, None, T::Living, S::Individual),
    ("Kare (Papua New Guinea)", "kmf", None, None, None, T::Living, S::Individual),
    ("Kâte", "kmg", None, None, None, T::Living, S::Individual),
    ("Kalam", "kmh", None, None, None, T::Living, S::Individual),
    ("Kami (Nigeria)", "kmi", None, None, None, T::Living, S::Individual),
    ("Kumarbhag Paharia", "kmj", None, None, None, T::Living, S::Individual),
    ("Limos Kalinga", "kmk", None, None, None, T::Living, S::Individual),
    ("Tanudan Kalinga", "kml", None, None, None, T::Living, S::Individual),
    ("Kom (India)", "kmm", None, None, None, T::Living, S::Individual),
    ("Awtuw", "kmn", None, None, None, T::Living, S::Individual),
    ("Kwoma", "kmo", None, None, None, T::Living, S::Individual),
    ("Gimme", "kmp", None, None, None, T::Living, S::Individual),
    ("Kwama", "kmq", None, None, None, T::Living, S::Individual),
    ("Northern Kurdish", "kmr", None, None, None, T::Living, S::Individual),
    ("Kamasau", "kms", None, None, None, T::Living, S::Individual),
    ("Kemtuik", "kmt", None, None, None, T::Living, S::Individual),
    ("Kanite", "kmu", None, None, None, T::Living, S::Individual),
    ("Karipúna Creole French", "kmv", None, None, None, T::Living, S::Individual),
    ("Komo (Democratic Republic of Congo)", "kmw", None, None, None, T::Living, S::Individual),
    ("Waboda", "kmx", None, None, None, T::Living, S::Individual),
    ("Koma", "kmy", None, None, None, T::Living, S::Individual),
    ("Khorasani Turkish", "kmz", None, None, None, T::Living, S::Individual),
    ("Dera (Nigeria)", "kna", None, None, None, T::Living, S::Individual),
    ("Lubuagan Kalinga", "knb", None, None, None, T::Living, S::Individual),
    ("Central Kanuri", "knc", None, None, None, T::Living, S::Individual),
    ("Konda", "knd", None, None, None, T::Living, S::Individual),
    ("Kankanaey", "kne", None, None, None, T::Living, S::Individual),
    ("Mankanya", "knf", None, None, None, T::Living, S::Individual),
    ("Koongo", "kng", None, None, None, T::Living, S::Individual),
    ("Kanufi", "kni", None, None, None, T::Living, S::Individual),
    ("Western Kanjobal", "knj", None, None, None, T::Living, S::Individual),
    ("Kuranko", "knk", None, None, None, T::Living, S::Individual),
    ("Keninjal", "knl", None, None, None, T::Living, S::Individual),
    ("Kanamarí", "knm", None, None, None, T::Living, S::Individual),
    ("Konkani (individual language)", "knn", None, None, None, T::Living, S::Individual),
    ("Kono (Sierra Leone)", "kno", None, None, None, T::Living, S::Individual),
    ("Kwanja", "knp", None, None, None, T::Living, S::Individual),
    ("Kintaq", "knq", None, None, None, T::Living, S::Individual),
    ("Kaningra", "knr", None, None, None, T::Living, S::Individual),
    ("Kensiu", "kns", None, None, None, T::Living, S::Individual),
    ("Panoan Katukína", "knt", None, None, None, T::Living, S::Individual),
    ("Kono (Guinea)", "knu", None, None, None, T::Living, S::Individual),
    ("Tabo", "knv", None, None, None, T::Living, S::Individual),
    ("Kung-Ekoka", "knw", None, None, None, T::Living, S::Individual),
    ("Kendayan", "knx", None, None, None, T::Living, S::Individual),
    ("Kanyok", "kny", None, None, None, T::Living, S::Individual),
    ("Kalamsé", "knz", None, None, None, T::Living, S::Individual),
    ("Konomala", "koa", None, None, None, T::Living, S::Individual),
    ("Kpati", "koc", None, None, None, T::Extinct, S::Individual),
    ("Kodi", "kod", None, None, None, T::Living, S::Individual),
    ("Kacipo-Bale Suri", "koe", None, None, None, T::Living, S::Individual),
    ("Kubi", "kof", None, None, None, T::Extinct, S::Individual),
    ("Cogui", "kog", None, None, None, T::Living, S::Individual),
    ("Koyo", "koh", None, None, None, T::Living, S::Individual),
    ("Komi-Permyak", "koi", None, None, None, T::Living, S::Individual),
    ("Konkani (macrolanguage)", "kok", Some("kok"), Some("kok"), None, T::Living, S::MacroLanguage),
    ("Kol (Papua New Guinea)", "kol", None, None, None, T::Living, S::Individual),
    ("Komi", "kom", Some("kom"), Some("kom"), Some("kv"), T::Living, S::MacroLanguage),
    ("Kongo", "kon", Some("kon"), Some("kon"), Some("kg"), T::Living, S::MacroLanguage),
    ("Konzo", "koo", None, None, None, T::Living, S::Individual),
    ("Waube", "kop", None, None, None, T::Living, S::Individual),
    ("Kota (Gabon)", "koq", None, None, None, T::Living, S::Individual),
    ("Korean", "kor", Some("kor"), Some("kor"), Some("ko"), T::Living, S::Individual),
    ("Kosraean", "kos", Some("kos"), Some("kos"), None, T::Living, S::Individual),
    ("Lagwan", "kot", None, None, None, T::Living, S::Individual),
    ("Koke", "kou", None, None, None, T::Living, S::Individual),
    ("Kudu-Camo", "kov", None, None, None, T::Living, S::Individual),
    ("Kugama", "kow", None, None, None, T::Living, S::Individual),
    ("Koyukon", "koy", None, None, None, T::Living, S::Individual),
    ("Korak", "koz", None, None, None, T::Living, S::Individual),
    ("Kutto", "kpa", None, None, None, T::Living, S::Individual),
    ("Mullu Kurumba", "kpb", None, None, None, T::Living, S::Individual),
    ("Curripaco", "kpc", None, None, None, T::Living, S::Individual),
    ("Koba", "kpd", None, None, None, T::Living, S::Individual),
    ("Kpelle", "kpe", Some("kpe"), Some("kpe"), None, T::Living, S::MacroLanguage),
    ("Komba", "kpf", None, None, None, T::Living, S::Individual),
    ("Kapingamarangi", "kpg", None, None, None, T::Living, S::Individual),
    ("Kplang", "kph", None, None, None, T::Living, S::Individual),
    ("Kofei", "kpi", None, None, None, T::Living, S::Individual),
    ("Karajá", "kpj", None, None, None, T::Living, S::Individual),
    ("Kpan", "kpk", None, None, None, T::Living, S::Individual),
    ("Kpala", "kpl", None, None, None, T::Living, S::Individual),
    ("Koho", "kpm", None, None, None, T::Living, S::Individual),
    ("Kepkiriwát", "kpn", None, None, None, T::Extinct, S::Individual),
    ("Ikposo", "kpo", None, None, None, T::Living, S::Individual),
    ("Korupun-Sela", "kpq", None, None, None, T::Living, S::Individual),
    ("Korafe-Yegha", "kpr", None, None, None, T::Living, S::Individual),
    ("Tehit", "kps", None, None, None, T::Living, S::Individual),
    ("Karata", "kpt", None, None, None, T::Living, S::Individual),
    ("Kafoa", "kpu", None, None, None, T::Living, S::Individual),
    ("Komi-Zyrian", "kpv", None, None, None, T::Living, S::Individual),
    ("Kobon", "kpw", None, None, None, T::Living, S::Individual),
    ("Mountain Koiali", "kpx", None, None, None, T::Living, S::Individual),
    ("Koryak", "kpy", None, None, None, T::Living, S::Individual),
    ("Kupsabiny", "kpz", None, None, None, T::Living, S::Individual),
    ("Mum", "kqa", None, None, None, T::Living, S::Individual),
    ("Kovai", "kqb", None, None, None, T::Living, S::Individual),
    ("Doromu-Koki", "kqc", None, None, None, T::Living, S::Individual),
    ("Koy Sanjaq Surat", "kqd", None, None, None, T::Living, S::Individual),
    ("Kalagan", "kqe", None, None, None, T::Living, S::Individual),
    ("Kakabai", "kqf", None, None, None, T::Living, S::Individual),
    ("Khe", "kqg", None, None, None, T::Living, S::Individual),
    ("Kisankasa", "kqh", None, None, None, T::Living, S::Individual),
    ("Koitabu", "kqi", None, None, None, T::Living, S::Individual),
    ("Koromira", "kqj", None, None, None, T::Living, S::Individual),
    ("Kotafon Gbe", "kqk", None, None, None, T::Living, S::Individual),
    ("Kyenele", "kql", None, None, None, T::Living, S::Individual),
    ("Khisa", "kqm", None, None, None, T::Living, S::Individual),
    ("Kaonde", "kqn", None, None, None, T::Living, S::Individual),
    ("Eastern Krahn", "kqo", None, None, None, T::Living, S::Individual),
    ("Kimré", "kqp", None, None, None, T::Living, S::Individual),
    ("Krenak", "kqq", None, None, None, T::Living, S::Individual),
    ("Kimaragang", "kqr", None, None, None, T::Living, S::Individual),
    ("Northern Kissi", "kqs", None, None, None, T::Living, S::Individual),
    ("Klias River Kadazan", "kqt", None, None, None, T::Living, S::Individual),
    ("Seroa", "kqu", None, None, None, T::Extinct, S::Individual),
    ("Okolod", "kqv", None, None, None, T::Living, S::Individual),
    ("Kandas", "kqw", None, None, None, T::Living, S::Individual),
    ("Mser", "kqx", None, None, None, T::Living, S::Individual),
    ("Koorete", "kqy", None, None, None, T::Living, S::Individual),
    ("Korana", "kqz", None, None, None, T::Extinct, S::Individual),
    ("Kumhali", "kra", None, None, None, T::Living, S::Individual),
    ("Karkin", "krb", None, None, None, T::Extinct, S::Individual),
    ("Karachay-Balkar", "krc", Some("krc"), Some("krc"), None, T::Living, S::Individual),
    ("Kairui-Midiki", "krd", None, None, None, T::Living, S::Individual),
    ("Panará", "kre", None, None, None, T::Living, S::Individual),
    ("Koro (Vanuatu)", "krf", None, None, None, T::Living, S::Individual),
    ("Kurama", "krh", None, None, None, T::Living, S::Individual),
    ("Krio", "kri", None, None, None, T::Living, S::Individual),
    ("Kinaray-A", "krj", None, None, None, T::Living, S::Individual),
    ("Kerek", "krk", None, None, None, T::Extinct, S::Individual),
    ("Karelian", "krl", Some("krl"), Some("krl"), None, T::Living, S::Individual),
    ("Sapo", "krn", None, None, None, T::Living, S::Individual),
    ("Korop", "krp", None, None, None, T::Living, S::Individual),
    ("Krung", "krr", None, None, None, T::Living, S::Individual),
    ("Gbaya (Sudan)", "krs", None, None, None, T::Living, S::Individual),
    ("Tumari Kanuri", "krt", None, None, None, T::Living, S::Individual),
    ("Kurukh", "kru", Some("kru"), Some("kru"), None, T::Living, S::Individual),
    ("Kavet", "krv", None, None, None, T::Living, S::Individual),
    ("Western Krahn", "krw", None, None, None, T::Living, S::Individual),
    ("Karon", "krx", None, None, None, T::Living, S::Individual),
    ("Kryts", "kry", None, None, None, T::Living, S::Individual),
    ("Sota Kanum", "krz", None, None, None, T::Living, S::Individual),
    ("Shuwa-Zamani", "ksa", None, None, None, T::Living, S::Individual),
    ("Shambala", "ksb", None, None, None, T::Living, S::Individual),
    ("Southern Kalinga", "ksc", None, None, None, T::Living, S::Individual),
    ("Kuanua", "ksd", None, None, None, T::Living, S::Individual),
    ("Kuni", "kse", None, None, None, T::Living, S::Individual),
    ("Bafia", "ksf", None, None, None, T::Living, S::Individual),
    ("Kusaghe", "ksg", None, None, None, T::Living, S::Individual),
    ("Kölsch", "ksh", None, None, None, T::Living, S::Individual),
    ("Krisa", "ksi", None, None, None, T::Living, S::Individual),
    ("Uare", "ksj", None, None, None, T::Living, S::Individual),
    ("Kansa", "ksk", None, None, None, T::Living, S::Individual),
    ("Kumalu", "ksl", None, None, None, T::Living, S::Individual),
    ("Kumba", "ksm", None, None, None, T::Living, S::Individual),
    ("Kasiguranin", "ksn", None, None, None, T::Living, S::Individual),
    ("Kofa", "kso", None, None, None, T::Living, S::Individual),
    ("Kaba", "ksp", None, None, None, T::Living, S::Individual),
    ("Kwaami", "ksq", None, None, None, T::Living, S::Individual),
    ("Borong", "ksr", None, None, None, T::Living, S::Individual),
    ("Southern Kisi", "kss", None, None, None, T::Living, S::Individual),
    ("Winyé", "kst", None, None, None, T::Living, S::Individual),
    ("Khamyang", "ksu", None, None, None, T::Living, S::Individual),
    ("Kusu", "ksv", None, None, None, T::Living, S::Individual),
    ("S'gaw Karen", "ksw", None, None, None, T::Living, S::Individual),
    ("Kedang", "ksx", None, None, None, T::Living, S::Individual),
    ("Kharia Thar", "ksy", None, None, None, T::Living, S::Individual),
    ("Kodaku", "ksz", None, None, None, T::Living, S::Individual),
    ("Katua", "kta", None, None, None, T::Living, S::Individual),
    ("Kambaata", "ktb", None, None, None, T::Living, S::Individual),
    ("Kholok", "ktc", None, None, None, T::Living, S::Individual),
    ("Kokata", "ktd", None, None, None, T::Living, S::Individual),
    ("Nubri", "kte", None, None, None, T::Living, S::Individual),
    ("Kwami", "ktf", None, None, None, T::Living, S::Individual),
    ("Kalkutung", "ktg", None, None, None, T::Extinct, S::Individual),
    ("Karanga", "kth", None, None, None, T::Living, S::Individual),
    ("North Muyu", "kti", None, None, None, T::Living, S::Individual),
    ("Plapo Krumen", "ktj", None, None, None, T::Living, S::Individual),
    ("Kaniet", "ktk", None, None, None, T::Extinct, S::Individual),
    ("Koroshi", "ktl", None, None, None, T::Living, S::Individual),
    ("Kurti", "ktm", None, None, None, T::Living, S::Individual),
    ("Karitiâna", "ktn", None, None, None, T::Living, S::Individual),
    ("Kuot", "kto", None, None, None, T::Living, S::Individual),
    ("Kaduo", "ktp", None, None, None, T::Living, S::Individual),
    ("Katabaga", "ktq", None, None, None, T::Extinct, S::Individual),
    ("South Muyu", "kts", None, None, None, T::Living, S::Individual),
    ("Ketum", "ktt", None, None, None, T::Living, S::Individual),
    ("Kituba (Democratic Republic of Congo)", "ktu", None, None, None, T::Living, S::Individual),
    ("Eastern Katu", "ktv", None, None, None, T::Living, S::Individual),
    ("Kato", "ktw", None, None, None, T::Extinct, S::Individual),
    ("Kaxararí", "ktx", None, None, None, T::Living, S::Individual),
    ("Kango (Bas-Uélé District)", "kty", None, None, None, T::Living, S::Individual),
    ("Juǀʼhoan", "ktz", None, None, None, T::Living, S::Individual),
    ("Kuanyama", "kua", Some("kua"), Some("kua"), Some("kj"), T::Living, S::Individual),
    ("Kutep", "kub", None, None, None, T::Living, S::Individual),
    ("Kwinsu", "kuc", None, None, None, T::Living, S::Individual),
    ("'Auhelawa", "kud", None, None, None, T::Living, S::Individual),
    ("Kuman (Papua New Guinea)", "kue", None, None, None, T::Living, S::Individual),
    ("Western Katu", "kuf", None, None, None, T::Living, S::Individual),
    ("Kupa", "kug", None, None, None, T::Living, S::Individual),
    ("Kushi", "kuh", None, None, None, T::Living, S::Individual),
    ("Kuikúro-Kalapálo", "kui", None, None, None, T::Living, S::Individual),
    ("Kuria", "kuj", None, None, None, T::Living, S::Individual),
    ("Kepo'", "kuk", None, None, None, T::Living, S::Individual),
    ("Kulere", "kul", None, None, None, T::Living, S::Individual),
    ("Kumyk", "kum", Some("kum"), Some("kum"), None, T::Living, S::Individual),
    ("Kunama", "kun", None, None, None, T::Living, S::Individual),
    ("Kumukio", "kuo", None, None, None, T::Living, S::Individual),
    ("Kunimaipa", "kup", None, None, None, T::Living, S::Individual),
    ("Karipuna", "kuq", None, None, None, T::Living, S::Individual),
    ("Kurdish", "kur", Some("kur"), Some("kur"), Some("ku"), T::Living, S::MacroLanguage),
    ("Kusaal", "kus", None, None, None, T::Living, S::Individual),
    ("Kutenai", "kut", Some("kut"), Some("kut"), None, T::Living, S::Individual),
    ("Upper Kuskokwim", "kuu", None, None, None, T::Living, S::Individual),
    ("Kur", "kuv", None, None, None, T::Living, S::Individual),
    ("Kpagua", "kuw", None, None, None, T::Living, S::Individual),
    ("Kukatja", "kux", None, None, None, T::Living, S::Individual),
    ("Kuuku-Ya'u", "kuy", None, None, None, T::Living, S::Individual),
    ("Kunza", "kuz", None, None, None, T::Extinct, S::Individual),
    ("Bagvalal", "kva", None, None, None, T::Living, S::Individual),
    ("Kubu", "kvb", None, None, None, T::Living, S::Individual),
    ("Kove", "kvc", None, None, None, T::Living, S::Individual),
    ("Kui (Indonesia)", "kvd", None, None, None, T::Living, S::Individual),
    ("Kalabakan", "kve", None, None, None, T::Living, S::Individual),
    ("Kabalai", "kvf", None, None, None, T::Living, S::Individual),
    ("Kuni-Boazi", "kvg", None, None, None, T::Living, S::Individual),
    ("Komodo", "kvh", None, None, None, T::Living, S::Individual),
    ("Kwang", "kvi", None, None, None, T::Living, S::Individual),
    ("Psikye", "kvj", None, None, None, T::Living, S::Individual),
    ("Korean Sign Language", "kvk", None, None, None, T::Living, S::Individual),
    ("Kayaw", "kvl", None, None, None, T::Living, S::Individual),
    ("Kendem", "kvm", None, None, None, T::Living, S::Individual),
    ("Border Kuna", "kvn", None, None, None, T::Living, S::Individual),
    ("Dobel", "kvo", None, None, None, T::Living, S::Individual),
    ("Kompane", "kvp", None, None, None, T::Living, S::Individual),
    ("Geba Karen", "kvq", None, None, None, T::Living, S::Individual),
    ("Kerinci", "kvr", None, None, None, T::Living, S::Individual),
    ("Lahta Karen", "kvt", None, None, None, T::Living, S::Individual),
    ("Yinbaw Karen", "kvu", None, None, None, T::Living, S::Individual),
    ("Kola", "kvv", None, None, None, T::Living, S::Individual),
    ("Wersing", "kvw", None, None, None, T::Living, S::Individual),
    ("Parkari Koli", "kvx", None, None, None, T::Living, S::Individual),
    ("Yintale Karen", "kvy", None, None, None, T::Living, S::Individual),
    ("Tsakwambo", "kvz", None, None, None, T::Living, S::Individual),
    ("Dâw", "kwa", None, None, None, T::Living, S::Individual),
    ("Kwa", "kwb", None, None, None, T::Living, S::Individual),
    ("Likwala", "kwc", None, None, None, T::Living, S::Individual),
    ("Kwaio", "kwd", None, None, None, T::Living, S::Individual),
    ("Kwerba", "kwe", None, None, None, T::Living, S::Individual),
    ("Kwara'ae", "kwf", None, None, None, T::Living, S::Individual),
    ("Sara Kaba Deme", "kwg", None, None, None, T::Living, S::Individual),
    ("Kowiai", "kwh", None, None, None, T::Living, S::Individual),
    ("Awa-Cuaiquer", "kwi", None, None, None, T::Living, S::Individual),
    ("Kwanga", "kwj", None, None, None, T::Living, S::Individual),
    ("Kwakiutl", "kwk", None, None, None, T::Living, S::Individual),
    ("Kofyar", "kwl", None, None, None, T::Living, S::Individual),
    ("Kwambi", "kwm", None, None, None, T::Living, S::Individual),
    ("Kwangali", "kwn", None, None, None, T::Living, S::Individual),
    ("Kwomtari", "kwo", None, None, None, T::Living, S::Individual),
    ("Kodia", "kwp", None, None, None, T::Living, S::Individual),
    ("Kwer", "kwr", None, None, None, T::Living, S::Individual),
    ("Kwese", "kws", None, None, None, T::Living, S::Individual),
    ("Kwesten", "kwt", None, None, None, T::Living, S::Individual),
    ("Kwakum", "kwu", None, None, None, T::Living, S::Individual),
    ("Sara Kaba Náà", "kwv", None, None, None, T::Living, S::Individual),
    ("Kwinti", "kww", None, None, None, T::Living, S::Individual),
    ("Khirwar", "kwx", None, None, None, T::Living, S::Individual),
    ("San Salvador Kongo", "kwy", None, None, None, T::Living, S::Individual),
    ("Kwadi", "kwz", None, None, None, T::Extinct, S::Individual),
    ("Kairiru", "kxa", None, None, None, T::Living, S::Individual),
    ("Krobu", "kxb", None, None, None, T::Living, S::Individual),
    ("Konso", "kxc", None, None, None, T::Living, S::Individual),
    ("Brunei", "kxd", None, None, None, T::Living, S::Individual),
    ("Manumanaw Karen", "kxf", None, None, None, T::Living, S::Individual),
    ("Karo (Ethiopia)", "kxh", None, None, None, T::Living, S::Individual),
    ("Keningau Murut", "kxi", None, None, None, T::Living, S::Individual),
    ("Kulfa", "kxj", None, None, None, T::Living, S::Individual),
    ("Zayein Karen", "kxk", None, None, None, T::Living, S::Individual),
    ("Northern Khmer", "kxm", None, None, None, T::Living, S::Individual),
    ("Kanowit-Tanjong Melanau", "kxn", None, None, None, T::Living, S::Individual),
    ("Kanoé", "kxo", None, None, None, T::Extinct, S::Individual),
    ("Wadiyara Koli", "kxp", None, None, None, T::Living, S::Individual),
    ("Smärky Kanum", "kxq", None, None, None, T::Living, S::Individual),
    ("Koro (Papua New Guinea)", "kxr", None, None, None, T::Living, S::Individual),
    ("Kangjia", "kxs", None, None, None, T::Living, S::Individual),
    ("Koiwat", "kxt", None, None, None, T::Living, S::Individual),
    ("Kuvi", "kxv", None, None, None, T::Living, S::Individual),
    ("Konai", "kxw", None, None, None, T::Living, S::Individual),
    ("Likuba", "kxx", None, None, None, T::Living, S::Individual),
    ("Kayong", "kxy", None, None, None, T::Living, S::Individual),
    ("Kerewo", "kxz", None, None, None, T::Living, S::Individual),
    ("Kwaya", "kya", None, None, None, T::Living, S::Individual),
    ("Butbut Kalinga", "kyb", None, None, None, T::Living, S::Individual),
    ("Kyaka", "kyc", None, None, None, T::Living, S::Individual),
    ("Karey", "kyd", None, None, None, T::Living, S::Individual),
    ("Krache", "kye", None, None, None, T::Living, S::Individual),
    ("Kouya", "kyf", None, None, None, T::Living, S::Individual),
    ("Keyagana", "kyg", None, None, None, T::Living, S::Individual),
    ("Karok", "kyh", None, None, None, T::Living, S::Individual),
    ("Kiput", "kyi", None, None, None, T::Living, S::Individual),
    ("Karao", "kyj", None, None, None, T::Living, S::Individual),
    ("Kamayo", "kyk", None, None, None, T::Living, S::Individual),
    ("Kalapuya", "kyl", None, None, None, T::Living, S::Individual),
    ("Kpatili", "kym", None, None, None, T::Living, S::Individual),
    ("Northern Binukidnon", "kyn", None, None, None, T::Living, S::Individual),
    ("Kelon", "kyo", None, None, None, T::Living, S::Individual),
    ("Kang", "kyp", None, None, None, T::Living, S::Individual),
    ("Kenga", "kyq", None, None, None, T::Living, S::Individual),
    ("Kuruáya", "kyr", None, None, None, T::Living, S::Individual),
    ("Baram Kayan", "kys", None, None, None, T::Living, S::Individual),
    ("Kayagar", "kyt", None, None, None, T::Living, S::Individual),
    ("Western Kayah", "kyu", None, None, None, T::Living, S::Individual),
    ("Kayort", "kyv", None, None, None, T::Living, S::Individual),
    ("Kudmali", "kyw", None, None, None, T::Living, S::Individual),
    ("Rapoisi", "kyx", None, None, None, T::Living, S::Individual),
    ("Kambaira", "kyy", None, None, None, T::Living, S::Individual),
    ("Kayabí", "kyz", None, None, None, T::Living, S::Individual),
    ("Western Karaboro", "kza", None, None, None, T::Living, S::Individual),
    ("Kaibobo", "kzb", None, None, None, T::Living, S::Individual),
    ("Bondoukou Kulango", "kzc", None, None, None, T::Living, S::Individual),
    ("Kadai", "kzd", None, None, None, T::Living, S::Individual),
    ("Kosena", "kze", None, None, None, T::Living, S::Individual),
    ("Da'a Kaili", "kzf", None, None, None, T::Living, S::Individual),
    ("Kikai", "kzg", None, None, None, T::Living, S::Individual),
    ("Kelabit", "kzi", None, None, None, T::Living, S::Individual),
    ("Kazukuru", "kzk", None, None, None, T::Extinct, S::Individual),
    ("Kayeli", "kzl", None, None, None, T::Living, S::Individual),
    ("Kais", "kzm", None, None, None, T::Living, S::Individual),
    ("Kokola", "kzn", None, None, None, T::Living, S::Individual),
    ("Kaningi", "kzo", None, None, None, T::Living, S::Individual),
    ("Kaidipang", "kzp", None, None, None, T::Living, S::Individual),
    ("Kaike", "kzq", None, None, None, T::Living, S::Individual),
    ("Karang", "kzr", None, None, None, T::Living, S::Individual),
    ("Sugut Dusun", "kzs", None, None, None, T::Living, S::Individual),
    ("Kayupulau", "kzu", None, None, None, T::Living, S::Individual),
    ("Komyandaret", "kzv", None, None, None, T::Living, S::Individual),
    ("Karirí-Xocó", "kzw", None, None, None, T::Extinct, S::Individual),
    ("Kamarian", "kzx", None, None, None, T::Extinct, S::Individual),
    ("Kango (Tshopo District)", "kzy", None, None, None, T::Living, S::Individual),
    ("Kalabra", "kzz", None, None, None, T::Living, S::Individual),
    ("Southern Subanen", "laa", None, None, None, T::Living, S::Individual),
    ("Linear A", "lab", None, None, None, T::Ancient, S::Individual),
    ("Lacandon", "lac", None, None, None, T::Living, S::Individual),
    ("Ladino", "lad", Some("lad"), Some("lad"), None, T::Living, S::Individual),
    ("Pattani", "lae", None, None, None, T::Living, S::Individual),
    ("Lafofa", "laf", None, None, None, T::Living, S::Individual),
    ("Langi", "lag", None, None, None, T::Living, S::Individual),
    ("Lahnda", "lah", Some("lah"), Some("lah"), None, T::Living, S::MacroLanguage),
    ("Lambya", "lai", None, None, None, T::Living, S::Individual),
    ("Lango (Uganda)", "laj", None, None, None, T::Living, S::Individual),
    ("Lalia", "lal", None, None, None, T::Living, S::Individual),
    ("Lamba", "lam", Some("lam"), Some("lam"), None, T::Living, S::Individual),
    ("Laru", "lan", None, None, None, T::Living, S::Individual),
    ("Lao", "lao", Some("lao"), Some("lao"), Some("lo"), T::Living, S::Individual),
    ("Laka (Chad)", "lap", None, None, None, T::Living, S::Individual),
    ("Qabiao", "laq", None, None, None, T::Living, S::Individual),
    ("Larteh", "lar", None, None, None, T::Living, S::Individual),
    ("Lama (Togo)", "las", None, None, None, T::Living, S::Individual),
    ("Latin", "lat", Some("lat"), Some("lat"), Some("la"), T::Ancient, S::Individual),
    ("Laba", "lau", None, None, None, T::Living, S::Individual),
    ("Latvian", "lav", Some("lav"), Some("lav"), Some("lv"), T::Living, S::MacroLanguage),
    ("Lauje", "law", None, None, None, T::Living, S::Individual),
    ("Tiwa", "lax", None, None, None, T::Living, S::Individual),
    ("Lama Bai", "lay", None, None, None, T::Living, S::Individual),
    ("Aribwatsa", "laz", None, None, None, T::Extinct, S::Individual),
    ("Label", "lbb", None, None, None, T::Living, S::Individual),
    ("Lakkia", "lbc", None, None, None, T::Living, S::Individual),
    ("Lak", "lbe", None, None, None, T::Living, S::Individual),
    ("Tinani", "lbf", None, None, None, T::Living, S::Individual),
    ("Laopang", "lbg", None, None, None, T::Living, S::Individual),
    ("La'bi", "lbi", None, None, None, T::Living, S::Individual),
    ("Ladakhi", "lbj", None, None, None, T::Living, S::Individual),
    ("Central Bontok", "lbk", None, None, None, T::Living, S::Individual),
    ("Libon Bikol", "lbl", None, None, None, T::Living, S::Individual),
    ("Lodhi", "lbm", None, None, None, T::Living, S::Individual),
    ("Rmeet", "lbn", None, None, None, T::Living, S::Individual),
    ("Laven", "lbo", None, None, None, T::Living, S::Individual),
    ("Wampar", "lbq", None, None, None, T::Living, S::Individual),
    ("Lohorung", "lbr", None, None, None, T::Living, S::Individual),
    ("Libyan Sign Language", "lbs", None, None, None, T::Living, S::Individual),
    ("Lachi", "lbt", None, None, None, T::Living, S::Individual),
    ("Labu", "lbu", None, None, None, T::Living, S::Individual),
    ("Lavatbura-Lamusong", "lbv", None, None, None, T::Living, S::Individual),
    ("Tolaki", "lbw", None, None, None, T::Living, S::Individual),
    ("Lawangan", "lbx", None, None, None, T::Living, S::Individual),
    ("Lamalama", "lby", None, None, None, T::Extinct, S::Individual),
    ("Lardil", "lbz", None, None, None, T::Living, S::Individual),
    ("Legenyem", "lcc", None, None, None, T::Living, S::Individual),
    ("Lola", "lcd", None, None, None, T::Living, S::Individual),
    ("Loncong", "lce", None, None, None, T::Living, S::Individual),
    ("Lubu", "lcf", None, None, None, T::Living, S::Individual),
    ("Luchazi", "lch", None, None, None, T::Living, S::Individual),
    ("Lisela", "lcl", None, None, None, T::Living, S::Individual),
    ("Tungag", "lcm", None, None, None, T::Living, S::Individual),
    ("Western Lawa", "lcp", None, None, None, T::Living, S::Individual),
    ("Luhu", "lcq", None, None, None, T::Living, S::Individual),
    ("Lisabata-Nuniali", "lcs", None, None, None, T::Living, S::Individual),
    ("Kla-Dan", "lda", None, None, None, T::Living, S::Individual),
    ("Dũya", "ldb", None, None, None, T::Living, S::Individual),
    ("Luri", "ldd", None, None, None, T::Living, S::Individual),
    ("Lenyima", "ldg", None, None, None, T::Living, S::Individual),
    ("Lamja-Dengsa-Tola", "ldh", None, None, None, T::Living, S::Individual),
    ("Laari", "ldi", None, None, None, T::Living, S::Individual),
    ("Lemoro", "ldj", None, None, None, T::Living, S::Individual),
    ("Leelau", "ldk", None, None, None, T::Living, S::Individual),
    ("Kaan", "ldl", None, None, None, T::Living, S::Individual),
    ("Landoma", "ldm", None, None, None, T::Living, S::Individual),
    ("Láadan", "ldn", None, None, None, T::Constructed, S::Individual),
    ("Loo", "ldo", None, None, None, T::Living, S::Individual),
    ("Tso", "ldp", None, None, None, T::Living, S::Individual),
    ("Lufu", "ldq", None, None, None, T::Living, S::Individual),
    ("Lega-Shabunda", "lea", None, None, None, T::Living, S::Individual),
    ("Lala-Bisa", "leb", None, None, None, T::Living, S::Individual),
    ("Leco", "lec", None, None, None, T::Living, S::Individual),
    ("Lendu", "led", None, None, None, T::Living, S::Individual),
    ("Lyélé", "lee", None, None, None, T::Living, S::Individual),
    ("Lelemi", "lef", None, None, None, T::Living, S::Individual),
    ("Lenje", "leh", None, None, None, T::Living, S::Individual),
    ("Lemio", "lei", None, None, None, T::Living, S::Individual),
    ("Lengola", "lej", None, None, None, T::Living, S::Individual),
    ("Leipon", "lek", None, None, None, T::Living, S::Individual),
    ("Lele (Democratic Republic of Congo)", "lel", None, None, None, T::Living, S::Individual),
    ("Nomaande", "lem", None, None, None, T::Living, S::Individual),
    ("Lenca", "len", None, None, None, T::Extinct, S::Individual),
    ("Leti (Cameroon)", "leo", None, None, None, T::Living, S::Individual),
    ("Lepcha", "lep", None, None, None, T::Living, S::Individual),
    ("Lembena", "leq", None, None, None, T::Living, S::Individual),
    ("Lenkau", "ler", None, None, None, T::Living, S::Individual),
    ("Lese", "les", None, None, None, T::Living, S::Individual),
    ("Lesing-Gelimi", "let", None, None, None, T::Living, S::Individual),
    ("Kara (Papua New Guinea)", "leu", None, None, None, T::Living, S::Individual),
    ("Lamma", "lev", None, None, None, T::Living, S::Individual),
    ("Ledo Kaili", "lew", None, None, None, T::Living, S::Individual),
    ("Luang", "lex", None, None, None, T::Living, S::Individual),
    ("Lemolang", "ley", None, None, None, T::Living, S::Individual),
    ("Lezghian", "lez", Some("lez"), Some("lez"), None, T::Living, S::Individual),
    ("Lefa", "lfa", None, None, None, T::Living, S::Individual),
    ("Lingua Franca Nova", "lfn", None, None, None, T::Constructed, S::Individual),
    ("Lungga", "lga", None, None, None, T::Living, S::Individual),
    ("Laghu", "lgb", None, None, None, T::Living, S::Individual),
    ("Lugbara", "lgg", None, None, None, T::Living, S::Individual),
    ("Laghuu", "lgh", None, None, None, T::Living, S::Individual),
    ("Lengilu", "lgi", None, None, None, T::Living, S::Individual),
    ("Lingarak", "lgk", None, None, None, T::Living, S::Individual),
    ("Wala", "lgl", None, None, None, T::Living, S::Individual),
    ("Lega-Mwenga", "lgm", None, None, None, T::Living, S::Individual),
    ("T'apo", "lgn", None, None, None, T::Living, S::Individual),
    ("Lango (South Sudan)", "lgo", None, None, None, T::Living, S::Individual),
    ("Logba", "lgq", None, None, None, T::Living, S::Individual),
    ("Lengo", "lgr", None, None, None, T::Living, S::Individual),
    ("Pahi", "lgt", None, None, None, T::Living, S::Individual),
    ("Longgu", "lgu", None, None, None, T::Living, S::Individual),
    ("Ligenza", "lgz", None, None, None, T::Living, S::Individual),
    ("Laha (Viet Nam)", "lha", None, None, None, T::Living, S::Individual),
    ("Laha (Indonesia)", "lhh", None, None, None, T::Living, S::Individual),
    ("Lahu Shi", "lhi", None, None, None, T::Living, S::Individual),
    ("Lahul Lohar", "lhl", None, None, None, T::Living, S::Individual),
    ("Lhomi", "lhm", None, None, None, T::Living, S::Individual),
    ("Lahanan", "lhn", None, None, None, T::Living, S::Individual),
    ("Lhokpu", "lhp", None, None, None, T::Living, S::Individual),
    ("Mlahsö", "lhs", None, None, None, T::Extinct, S::Individual),
    ("Lo-Toga", "lht", None, None, None, T::Living, S::Individual),
    ("Lahu", "lhu", None, None, None, T::Living, S::Individual),
    ("West-Central Limba", "lia", None, None, None, T::Living, S::Individual),
    ("Likum", "lib", None, None, None, T::Living, S::Individual),
    ("Hlai", "lic", None, None, None, T::Living, S::Individual),
    ("Nyindrou", "lid", None, None, None, T::Living, S::Individual),
    ("Likila", "lie", None, None, None, T::Living, S::Individual),
    ("Limbu", "lif", None, None, None, T::Living, S::Individual),
    ("Ligbi", "lig", None, None, None, T::Living, S::Individual),
    ("Lihir", "lih", None, None, None, T::Living, S::Individual),
    ("Ligurian", "lij", None, None, None, T::Living, S::Individual),
    ("Lika", "lik", None, None, None, T::Living, S::Individual),
    ("Lillooet", "lil", None, None, None, T::Living, S::Individual),
    ("Limburgan", "lim", Some("lim"), Some("lim"), Some("li"), T::Living, S::Individual),
    ("Lingala", "lin", Some("lin"), Some("lin"), Some("ln"), T::Living, S::Individual),
    ("Liki", "lio", None, None, None, T::Living, S::Individual),
    ("Sekpele", "lip", None, None, None, T::Living, S::Individual),
    ("Libido", "liq", None, None, None, T::Living, S::Individual),
    ("Liberian English", "lir", None, None, None, T::Living, S::Individual),
    ("Lisu", "lis", None, None, None, T::Living, S::Individual),
    ("Lithuanian", "lit", Some("lit"), Some("lit"), Some("lt"), T::Living, S::Individual),
    ("Logorik", "liu", None, None, None, T::Living, S::Individual),
    ("Liv", "liv", None, None, None, T::Living, S::Individual),
    ("Col", "liw", None, None, None, T::Living, S::Individual),
    ("Liabuku", "lix", None, None, None, T::Living, S::Individual),
    ("Banda-Bambari", "liy", None, None, None, T::Living, S::Individual),
    ("Libinza", "liz", None, None, None, T::Living, S::Individual),
    ("Golpa", "lja", None, None, None, T::Extinct, S::Individual),
    ("Rampi", "lje", None, None, None, T::Living, S::Individual),
    ("Laiyolo", "lji", None, None, None, T::Living, S::Individual),
    ("Li'o", "ljl", None, None, None, T::Living, S::Individual),
    ("Lampung Api", "ljp", None, None, None, T::Living, S::Individual),
    ("Yirandali", "ljw", None, None, None, T::Living, S::Individual),
    ("Yuru", "ljx", None, None, None, T::Extinct, S::Individual),
    ("Lakalei", "lka", None, None, None, T::Living, S::Individual),
    ("Kabras", "lkb", None, None, None, T::Living, S::Individual),
    ("Kucong", "lkc", None, None, None, T::Living, S::Individual),
    ("Lakondê", "lkd", None, None, None, T::Living, S::Individual),
    ("Kenyi", "lke", None, None, None, T::Living, S::Individual),
    ("Lakha", "lkh", None, None, None, T::Living, S::Individual),
    ("Laki", "lki", None, None, None, T::Living, S::Individual),
    ("Remun", "lkj", None, None, None, T::Living, S::Individual),
    ("Laeko-Libuat", "lkl", None, None, None, T::Living, S::Individual),
    ("Kalaamaya", "lkm", None, None, None, T::Extinct, S::Individual),
    ("Lakon", "lkn", None, None, None, T::Living, S::Individual),
    ("Khayo", "lko", None, None, None, T::Living, S::Individual),
    ("Päri", "lkr", None, None, None, T::Living, S::Individual),
    ("Kisa", "lks", None, None, None, T::Living, S::Individual),
    ("Lakota", "lkt", None, None, None, T::Living, S::Individual),
    ("Kungkari", "lku", None, None, None, T::Extinct, S::Individual),
    ("Lokoya", "lky", None, None, None, T::Living, S::Individual),
    ("Lala-Roba", "lla", None, None, None, T::Living, S::Individual),
    ("Lolo", "llb", None, None, None, T::Living, S::Individual),
    ("Lele (Guinea)", "llc", None, None, None, T::Living, S::Individual),
    ("Ladin", "lld", None, None, None, T::Living, S::Individual),
    ("Lele (Papua New Guinea)", "lle", None, None, None, T::Living, S::Individual),
    ("Hermit", "llf", None, None, None, T::Extinct, S::Individual),
    ("Lole", "llg", None, None, None, T::Living, S::Individual),
    ("Lamu", "llh", None, None, None, T::Living, S::Individual),
    ("Teke-Laali", "lli", None, None, None, T::Living, S::Individual),
    ("Ladji Ladji", "llj", None, None, None, T::Extinct, S::Individual),
    ("Lelak", "llk", None, None, None, T::Extinct, S::Individual),
    ("Lilau", "lll", None, None, None, T::Living, S::Individual),
    ("Lasalimu", "llm", None, None, None, T::Living, S::Individual),
    ("Lele (Chad)", "lln", None, None, None, T::Living, S::Individual),
    ("North Efate", "llp", None, None, None, T::Living, S::Individual),
    ("Lolak", "llq", None, None, None, T::Living, S::Individual),
    ("Lithuanian Sign Language", "lls", None, None, None, T::Living, S::Individual),
    ("Lau", "llu", None, None, None, T::Living, S::Individual),
    ("Lauan", "llx", None, None, None, T::Living, S::Individual),
    ("East Limba", "lma", None, None, None, T::Living, S::Individual),
    ("Merei", "lmb", None, None, None, T::Living, S::Individual),
    ("Limilngan", "lmc", None, None, None, T::Extinct, S::Individual),
    ("Lumun", "lmd", None, None, None, T::Living, S::Individual),
    ("Pévé", "lme", None, None, None, T::Living, S::Individual),
    ("South Lembata", "lmf", None, None, None, T::Living, S::Individual),
    ("Lamogai", "lmg", None, None, None, T::Living, S::Individual),
    ("Lambichhong", "lmh", None, None, None, T::Living, S::Individual),
    ("Lombi", "lmi", None, None, None, T::Living, S::Individual),
    ("West Lembata", "lmj", None, None, None, T::Living, S::Individual),
    ("Lamkang", "lmk", None, None, None, T::Living, S::Individual),
    ("Hano", "lml", None, None, None, T::Living, S::Individual),
    ("Lambadi", "lmn", None, None, None, T::Living, S::Individual),
    ("Lombard", "lmo", None, None, None, T::Living, S::Individual),
    ("Limbum", "lmp", None, None, None, T::Living, S::Individual),
    ("Lamatuka", "lmq", None, None, None, T::Living, S::Individual),
    ("Lamalera", "lmr", None, None, None, T::Living, S::Individual),
    ("Lamenu", "lmu", None, None, None, T::Living, S::Individual),
    ("Lomaiviti", "lmv", None, None, None, T::Living, S::Individual),
    ("Lake Miwok", "lmw", None, None, None, T::Living, S::Individual),
    ("Laimbue", "lmx", None, None, None, T::Living, S::Individual),
    ("Lamboya", "lmy", None, None, None, T::Living, S::Individual),
    ("Langbashe", "lna", None, None, None, T::Living, S::Individual),
    ("Mbalanhu", "lnb", None, None, None, T::Living, S::Individual),
    ("Lundayeh", "lnd", None, None, None, T::Living, S::Individual),
    ("Langobardic", "lng", None, None, None, T::Ancient, S::Individual),
    ("Lanoh", "lnh", None, None, None, T::Living, S::Individual),
    ("Daantanai'", "lni", None, None, None, T::Living, S::Individual),
    ("Leningitij", "lnj", None, None, None, T::Extinct, S::Individual),
    ("South Central Banda", "lnl", None, None, None, T::Living, S::Individual),
    ("Langam", "lnm", None, None, None, T::Living, S::Individual),
    ("Lorediakarkar", "lnn", None, None, None, T::Living, S::Individual),
    ("Lamnso'", "lns", None, None, None, T::Living, S::Individual),
    ("Longuda", "lnu", None, None, None, T::Living, S::Individual),
    ("Lanima", "lnw", None, None, None, T::Extinct, S::Individual),
    ("Lonzo", "lnz", None, None, None, T::Living, S::Individual),
    ("Loloda", "loa", None, None, None, T::Living, S::Individual),
    ("Lobi", "lob", None, None, None, T::Living, S::Individual),
    ("Inonhan", "loc", None, None, None, T::Living, S::Individual),
    ("Saluan", "loe", None, None, None, T::Living, S::Individual),
    ("Logol", "lof", None, None, None, T::Living, S::Individual),
    ("Logo", "log", None, None, None, T::Living, S::Individual),
    ("Narim", "loh", None, None, None, T::Living, S::Individual),
    ("Loma (Côte d'Ivoire)", "loi", None, None, None, T::Living, S::Individual),
    ("Lou", "loj", None, None, None, T::Living, S::Individual),
    ("Loko", "lok", None, None, None, T::Living, S::Individual),
    ("Mongo", "lol", Some("lol"), Some("lol"), None, T::Living, S::Individual),
    ("Loma (Liberia)", "lom", None, None, None, T::Living, S::Individual),
    ("Malawi Lomwe", "lon", None, None, None, T::Living, S::Individual),
    ("Lombo", "loo", None, None, None, T::Living, S::Individual),
    ("Lopa", "lop", None, None, None, T::Living, S::Individual),
    ("Lobala", "loq", None, None, None, T::Living, S::Individual),
    ("Téén", "lor", None, None, None, T::Living, S::Individual),
    ("Loniu", "los", None, None, None, T::Living, S::Individual),
    ("Otuho", "lot", None, None, None, T::Living, S::Individual),
    ("Louisiana Creole", "lou", None, None, None, T::Living, S::Individual),
    ("Lopi", "lov", None, None, None, T::Living, S::Individual),
    ("Tampias Lobu", "low", None, None, None, T::Living, S::Individual),
    ("Loun", "lox", None, None, None, T::Living, S::Individual),
    ("Loke", "loy", None, None, None, T::Living, S::Individual),
    ("Lozi", "loz", Some("loz"), Some("loz"), None, T::Living, S::Individual),
    ("Lelepa", "lpa", None, None, None, T::Living, S::Individual),
    ("Lepki", "lpe", None, None, None, T::Living, S::Individual),
    ("Long Phuri Naga", "lpn", None, None, None, T::Living, S::Individual),
    ("Lipo", "lpo", None, None, None, T::Living, S::Individual),
    ("Lopit", "lpx", None, None, None, T::Living, S::Individual),
    ("Logir", "lqr", None, None, None, T::Living, S::Individual),
    ("Rara Bakati'", "lra", None, None, None, T::Living, S::Individual),
    ("Northern Luri", "lrc", None, None, None, T::Living, S::Individual),
    ("Laurentian", "lre", None, None, None, T::Extinct, S::Individual),
    ("Laragia", "lrg", None, None, None, T::Extinct, S::Individual),
    ("Marachi", "lri", None, None, None, T::Living, S::Individual),
    ("Loarki", "lrk", None, None, None, T::Living, S::Individual),
    ("Lari", "lrl", None, None, None, T::Living, S::Individual),
    ("Marama", "lrm", None, None, None, T::Living, S::Individual),
    ("Lorang", "lrn", None, None, None, T::Living, S::Individual),
    ("Laro", "lro", None, None, None, T::Living, S::Individual),
    ("Southern Yamphu", "lrr", None, None, None, T::Living, S::Individual),
    ("Larantuka Malay", "lrt", None, None, None, T::Living, S::Individual),
    ("Larevat", "lrv", None, None, None, T::Living, S::Individual),
    ("Lemerig", "lrz", None, None, None, T::Living, S::Individual),
    ("Lasgerdi", "lsa", None, None, None, T::Living, S::Individual),
    ("Burundian Sign Language", "lsb", None, None, None, T::Living, S::Individual),
    ("Albarradas Sign Language", "lsc", None, None, None, T::Living, S::Individual),
    ("Lishana Deni", "lsd", None, None, None, T::Living, S::Individual),
    ("Lusengo", "lse", None, None, None, T::Living, S::Individual),
    ("Lish", "lsh", None, None, None, T::Living, S::Individual),
    ("Lashi", "lsi", None, None, None, T::Living, S::Individual),
    ("Latvian Sign Language", "lsl", None, None, None, T::Living, S::Individual),
    ("Saamia", "lsm", None, None, None, T::Living, S::Individual),
    ("Tibetan Sign Language", "lsn", None, None, None, T::Living, S::Individual),
    ("Laos Sign Language", "lso", None, None, None, T::Living, S::Individual),
    ("Panamanian Sign Language", "lsp", None, None, None, T::Living, S::Individual),
    ("Aruop", "lsr", None, None, None, T::Living, S::Individual),
    ("Lasi", "lss", None, None, None, T::Living, S::Individual),
    ("Trinidad and Tobago Sign Language", "lst", None, None, None, T::Living, S::Individual),
    ("Sivia Sign Language", "lsv", None, None, None, T::Living, S::Individual),
    ("Seychelles Sign Language", "lsw", None, None, None, T::Living, S::Individual),
    ("Mauritian Sign Language", "lsy", None, None, None, T::Living, S::Individual),
    ("Late Middle Chinese", "ltc", None, None, None, T::Historical, S::Individual),
    ("Latgalian", "ltg", None, None, None, T::Living, S::Individual),
    ("Thur", "lth", None, None, None, T::Living, S::Individual),
    ("Leti (Indonesia)", "lti", None, None, None, T::Living, S::Individual),
    ("Latundê", "ltn", None, None, None, T::Living, S::Individual),
    ("Tsotso", "lto", None, None, None, T::Living, S::Individual),
    ("Tachoni", "lts", None, None, None, T::Living, S::Individual),
    ("Latu", "ltu", None, None, None, T::Living, S::Individual),
    ("Luxembourgish", "ltz", Some("ltz"), Some("ltz"), Some("lb"), T::Living, S::Individual),
    ("Luba-Lulua", "lua", Some("lua"), Some("lua"), None, T::Living, S::Individual),
    ("Luba-Katanga", "lub", Some("lub"), Some("lub"), Some("lu"), T::Living, S::Individual),
    ("Aringa", "luc", None, None, None, T::Living, S::Individual),
    ("Ludian", "lud", None, None, None, T::Living, S::Individual),
    ("Luvale", "lue", None, None, None, T::Living, S::Individual),
    ("Laua", "luf", None, None, None, T::Living, S::Individual),
    ("Ganda", "lug", Some("lug"), Some("lug"), Some("lg"), T::Living, S::Individual),
    ("Luiseno", "lui", Some("lui"), Some("lui"), None, T::Extinct, S::Individual),
    ("Luna", "luj", None, None, None, T::Living, S::Individual),
    ("Lunanakha", "luk", None, None, None, T::Living, S::Individual),
    ("Olu'bo", "lul", None, None, None, T::Living, S::Individual),
    ("Luimbi", "lum", None, None, None, T::Living, S::Individual),
    ("Lunda", "lun", Some("lun"), Some("lun"), None, T::Living, S::Individual),
    ("Luo (Kenya and Tanzania)", "luo", Some("luo"), Some("luo"), None, T::Living, S::Individual),
    ("Lumbu", "lup", None, None, None, T::Living, S::Individual),
    ("Lucumi", "luq", None, None, None, T::Living, S::Individual),
    ("Laura", "lur", None, None, None, T::Living, S::Individual),
    ("Lushai", "lus", Some("lus"), Some("lus"), None, T::Living, S::Individual),
    ("Lushootseed", "lut", None, None, None, T::Living, S::Individual),
    ("Lumba-Yakkha", "luu", None, None, None, T::Living, S::Individual),
    ("Luwati", "luv", None, None, None, T::Living, S::Individual),
    ("Luo (Cameroon)", "luw", None, None, None, T::Living, S::Individual),
    ("Luyia", "luy", None, None, None, T::Living, S::MacroLanguage),
    ("Southern Luri", "luz", None, None, None, T::Living, S::Individual),
    ("Maku'a", "lva", None, None, None, T::Living, S::Individual),
    ("Lavi", "lvi", None, None, None, T::Living, S::Individual),
    ("Lavukaleve", "lvk", None, None, None, T::Living, S::Individual),
    ("Standard Latvian", "lvs", None, None, None, T::Living, S::Individual),
    ("Levuka", "lvu", None, None, None, T::Living, S::Individual),
    ("Lwalu", "lwa", None, None, None, T::Living, S::Individual),
    ("Lewo Eleng", "lwe", None, None, None, T::Living, S::Individual),
    ("Wanga", "lwg", None, None, None, T::Living, S::Individual),
    ("White Lachi", "lwh", None, None, None, T::Living, S::Individual),
    ("Eastern Lawa", "lwl", None, None, None, T::Living, S::Individual),
    ("Laomian", "lwm", None, None, None, T::Living, S::Individual),
    ("Luwo", "lwo", None, None, None, T::Living, S::Individual),
    ("Malawian Sign Language", "lws", None, None, None, T::Living, S::Individual),
    ("Lewotobi", "lwt", None, None, None, T::Living, S::Individual),
    ("Lawu", "lwu", None, None, None, T::Living, S::Individual),
    ("Lewo", "lww", None, None, None, T::Living, S::Individual),
    ("Lakurumau", "lxm", None, None, None, T::Living, S::Individual),
    ("Layakha", "lya", None, None, None, T::Living, S::Individual),
    ("Lyngngam", "lyg", None, None, None, T::Living, S::Individual),
    ("Luyana", "lyn", None, None, None, T::Living, S::Individual),
    ("Literary Chinese", "lzh", None, None, None, T::Historical, S::Individual),
    ("Litzlitz", "lzl", None, None, None, T::Living, S::Individual),
    ("Leinong Naga", "lzn", None, None, None, T::Living, S::Individual),
    ("Laz", "lzz", None, None, None, T::Living, S::Individual),
    ("San Jerónimo Tecóatl Mazatec", "maa", None, None, None, T::Living, S::Individual),
    ("Yutanduchi Mixtec", "mab", None, None, None, T::Living, S::Individual),
    ("Madurese", "mad", Some("mad"), Some("mad"), None, T::Living, S::Individual),
    ("Bo-Rukul", "mae", None, None, None, T::Living, S::Individual),
    ("Mafa", "maf", None, None, None, T::Living, S::Individual),
    ("Magahi", "mag", Some("mag"), Some("mag"), None, T::Living, S::Individual),
    ("Marshallese", "mah", Some("mah"), Some("mah"), Some("mh"), T::Living, S::Individual),
    ("Maithili", "mai", Some("mai"), Some("mai"), None, T::Living, S::Individual),
    ("Jalapa De Díaz Mazatec", "maj", None, None, None, T::Living, S::Individual),
    ("Makasar", "mak", Some("mak"), Some("mak"), None, T::Living, S::Individual),
    ("Malayalam", "mal", Some("mal"), Some("mal"), Some("ml"), T::Living, S::Individual),
    ("Mam", "mam", None, None, None, T::Living, S::Individual),
    ("Mandingo", "man", Some("man"), Some("man"), None, T::Living, S::MacroLanguage),
    ("Chiquihuitlán Mazatec", "maq", None, None, None, T::Living, S::Individual),
    ("Marathi", "mar", Some("mar"), Some("mar"), Some("mr"), T::Living, S::Individual),
    ("Masai", "mas", Some("mas"), Some("mas"), None, T::Living, S::Individual),
    ("San Francisco Matlatzinca", "mat", None, None, None, T::Living, S::Individual),
    ("Huautla Mazatec", "mau", None, None, None, T::Living, S::Individual),
    ("Sateré-Mawé", "mav", None, None, None, T::Living, S::Individual),
    ("Mampruli", "maw", None, None, None, T::Living, S::Individual),
    ("North Moluccan Malay", "max", None, None, None, T::Living, S::Individual),
    ("Central Mazahua", "maz", None, None, None, T::Living, S::Individual),
    ("Higaonon", "mba", None, None, None, T::Living, S::Individual),
    ("Western Bukidnon Manobo", "mbb", None, None, None, T::Living, S::Individual),
    ("Macushi", "mbc", None, None, None, T::Living, S::Individual),
    ("Dibabawon Manobo", "mbd", None, None, None, T::Living, S::Individual),
    ("Molale", "mbe", None, None, None, T::Extinct, S::Individual),
    ("Baba Malay", "mbf", None, None, None, T::Living, S::Individual),
    ("Mangseng", "mbh", None, None, None, T::Living, S::Individual),
    ("Ilianen Manobo", "mbi", None, None, None, T::Living, S::Individual),
    ("Nadëb", "mbj", None, None, None, T::Living, S::Individual),
    ("Malol", "mbk", None, None, None, T::Living, S::Individual),
    ("Maxakalí", "mbl", None, None, None, T::Living, S::Individual),
    ("Ombamba", "mbm", None, None, None, T::Living, S::Individual),
    ("Macaguán", "mbn", None, None, None, T::Living, S::Individual),
    ("Mbo (Cameroon)", "mbo", None, None, None, T::Living, S::Individual),
    ("Malayo", "mbp", None, None, None, T::Living, S::Individual),
    ("Maisin", "mbq", None, None, None, T::Living, S::Individual),
    ("Nukak Makú", "mbr", None, None, None, T::Living, S::Individual),
    ("Sarangani Manobo", "mbs", None, None, None, T::Living, S::Individual),
    ("Matigsalug Manobo", "mbt", None, None, None, T::Living, S::Individual),
    ("Mbula-Bwazza", "mbu", None, None, None, T::Living, S::Individual),
    ("Mbulungish", "mbv", None, None, None, T::Living, S::Individual),
    ("Maring", "mbw", None, None, None, T::Living, S::Individual),
    ("Mari (East Sepik Province)", "mbx", None, None, None, T::Living, S::Individual),
    ("Memoni", "mby", None, None, None, T::Living, S::Individual),
    ("Amoltepec Mixtec", "mbz", None, None, None, T::Living, S::Individual),
    ("Maca", "mca", None, None, None, T::Living, S::Individual),
    ("Machiguenga", "mcb", None, None, None, T::Living, S::Individual),
    ("Bitur", "mcc", None, None, None, T::Living, S::Individual),
    ("Sharanahua", "mcd", None, None, None, T::Living, S::Individual),
    ("Itundujia Mixtec", "mce", None, None, None, T::Living, S::Individual),
    ("Matsés", "mcf", None, None, None, T::Living, S::Individual),
    ("Mapoyo", "mcg", None, None, None, T::Living, S::Individual),
    ("Maquiritari", "mch", None, None, None, T::Living, S::Individual),
    ("Mese", "mci", None, None, None, T::Living, S::Individual),
    ("Mvanip", "mcj", None, None, None, T::Living, S::Individual),
    ("Mbunda", "mck", None, None, None, T::Living, S::Individual),
    ("Macaguaje", "mcl", None, None, None, T::Extinct, S::Individual),
    ("Malaccan Creole Portuguese", "mcm", None, None, None, T::Living, S::Individual),
    ("Masana", "mcn", None, None, None, T::Living, S::Individual),
    ("Coatlán Mixe", "mco", None, None, None, T::Living, S::Individual),
    ("Makaa", "mcp", None, None, None, T::Living, S::Individual),
    ("Ese", "mcq", None, None, None, T::Living, S::Individual),
    ("Menya", "mcr", None, None, None, T::Living, S::Individual),
    ("Mambai", "mcs", None, None, None, T::Living, S::Individual),
    ("Mengisa", "mct", None, None, None, T::Living, S::Individual),
    ("Cameroon Mambila", "mcu", None, None, None, T::Living, S::Individual),
    ("Minanibai", "mcv", None, None, None, T::Living, S::Individual),
    ("Mawa (Chad)", "mcw", None, None, None, T::Living, S::Individual),
    ("Mpiemo", "mcx", None, None, None, T::Living, S::Individual),
    ("South Watut", "mcy", None, None, None, T::Living, S::Individual),
    ("Mawan", "mcz", None, None, None, T::Living, S::Individual),
    ("Mada (Nigeria)", "mda", None, None, None, T::Living, S::Individual),
    ("Morigi", "mdb", None, None, None, T::Living, S::Individual),
    ("Male (Papua New Guinea)", "mdc", None, None, None, T::Living, S::Individual),
    ("Mbum", "mdd", None, None, None, T::Living, S::Individual),
    ("Maba (Chad)", "mde", None, None, None, T::Living, S::Individual),
    ("Moksha", "mdf", Some("mdf"), Some("mdf"), None, T::Living, S::Individual),
    ("Massalat", "mdg", None, None, None, T::Living, S::Individual),
    ("Maguindanaon", "mdh", None, None, None, T::Living, S::Individual),
    ("Mamvu", "mdi", None, None, None, T::Living, S::Individual),
    ("Mangbetu", "mdj", None, None, None, T::Living, S::Individual),
    ("Mangbutu", "mdk", None, None, None, T::Living, S::Individual),
    ("Maltese Sign Language", "mdl", None, None, None, T::Living, S::Individual),
    ("Mayogo", "mdm", None, None, None, T::Living, S::Individual),
    ("Mbati", "mdn", None, None, None, T::Living, S::Individual),
    ("Mbala", "mdp", None, None, None, T::Living, S::Individual),
    ("Mbole", "mdq", None, None, None, T::Living, S::Individual),
    ("Mandar", "mdr", Some("mdr"), Some("mdr"), None, T::Living, S::Individual),
    ("Maria (Papua New Guinea)", "mds", None, None, None, T::Living, S::Individual),
    ("Mbere", "mdt", None, None, None, T::Living, S::Individual),
    ("Mboko", "mdu", None, None, None, T::Living, S::Individual),
    ("Santa Lucía Monteverde Mixtec", "mdv", None, None, None, T::Living, S::Individual),
    ("Mbosi", "mdw", None, None, None, T::Living, S::Individual),
    ("Dizin", "mdx", None, None, None, T::Living, S::Individual),
    ("Male (Ethiopia)", "mdy", None, None, None, T::Living, S::Individual),
    ("Suruí Do Pará", "mdz", None, None, None, T::Living, S::Individual),
    ("Menka", "mea", None, None, None, T::Living, S::Individual),
    ("Ikobi", "meb", None, None, None, T::Living, S::Individual),
    ("Marra", "mec", None, None, None, T::Living, S::Individual),
    ("Melpa", "med", None, None, None, T::Living, S::Individual),
    ("Mengen", "mee", None, None, None, T::Living, S::Individual),
    ("Megam", "mef", None, None, None, T::Living, S::Individual),
    ("Southwestern Tlaxiaco Mixtec", "meh", None, None, None, T::Living, S::Individual),
    ("Midob", "mei", None, None, None, T::Living, S::Individual),
    ("Meyah", "mej", None, None, None, T::Living, S::Individual),
    ("Mekeo", "mek", None, None, None, T::Living, S::Individual),
    ("Central Melanau", "mel", None, None, None, T::Living, S::Individual),
    ("Mangala", "mem", None, None, None, T::Extinct, S::Individual),
    ("Mende (Sierra Leone)", "men", Some("men"), Some("men"), None, T::Living, S::Individual),
    ("Kedah Malay", "meo", None, None, None, T::Living, S::Individual),
    ("Miriwoong", "mep", None, None, None, T::Living, S::Individual),
    ("Merey", "meq", None, None, None, T::Living, S::Individual),
    ("Meru", "mer", None, None, None, T::Living, S::Individual),
    ("Masmaje", "mes", None, None, None, T::Living, S::Individual),
    ("Mato", "met", None, None, None, T::Living, S::Individual),
    ("Motu", "meu", None, None, None, T::Living, S::Individual),
    ("Mano", "mev", None, None, None, T::Living, S::Individual),
    ("Maaka", "mew", None, None, None, T::Living, S::Individual),
    ("Hassaniyya", "mey", None, None, None, T::Living, S::Individual),
    ("Menominee", "mez", None, None, None, T::Living, S::Individual),
    ("Pattani Malay", "mfa", None, None, None, T::Living, S::Individual),
    ("Bangka", "mfb", None, None, None, T::Living, S::Individual),
    ("Mba", "mfc", None, None, None, T::Living, S::Individual),
    ("Mendankwe-Nkwen", "mfd", None, None, None, T::Living, S::Individual),
    ("Morisyen", "mfe", None, None, None, T::Living, S::Individual),
    ("Naki", "mff", None, None, None, T::Living, S::Individual),
    ("Mogofin", "mfg", None, None, None, T::Living, S::Individual),
    ("Matal", "mfh", None, None, None, T::Living, S::Individual),
    ("Wandala", "mfi", None, None, None, T::Living, S::Individual),
    ("Mefele", "mfj", None, None, None, T::Living, S::Individual),
    ("North Mofu", "mfk", None, None, None, T::Living, S::Individual),
    ("Putai", "mfl", None, None, None, T::Living, S::Individual),
    ("Marghi South", "mfm", None, None, None, T::Living, S::Individual),
    ("Cross River Mbembe", "mfn", None, None, None, T::Living, S::Individual),
    ("Mbe", "mfo", None, None, None, T::Living, S::Individual),
    ("Makassar Malay", "mfp", None, None, None, T::Living, S::Individual),
    ("Moba", "mfq", None, None, None, T::Living, S::Individual),
    ("Marrithiyel", "mfr", None, None, None, T::Living, S::Individual),
    ("Mexican Sign Language", "mfs", None, None, None, T::Living, S::Individual),
    ("Mokerang", "mft", None, None, None, T::Living, S::Individual),
    ("Mbwela", "mfu", None, None, None, T::Living, S::Individual),
    ("Mandjak", "mfv", None, None, None, T::Living, S::Individual),
    ("Mulaha", "mfw", None, None, None, T::Extinct, S::Individual),
    ("Melo", "mfx", None, None, None, T::Living, S::Individual),
    ("Mayo", "mfy", None, None, None, T::Living, S::Individual),
    ("Mabaan", "mfz", None, None, None, T::Living, S::Individual),
    ("Middle Irish (900-1200)", "mga", Some("mga"), Some("mga"), None, T::Historical, S::Individual),
    ("Mararit", "mgb", None, None, None, T::Living, S::Individual),
    ("Morokodo", "mgc", None, None, None, T::Living, S::Individual),
    ("Moru", "mgd", None, None, None, T::Living, S::Individual),
    ("Mango", "mge", None, None, None, T::Living, S::Individual),
    ("Maklew", "mgf", None, None, None, T::Living, S::Individual),
    ("Mpumpong", "mgg", None, None, None, T::Living, S::Individual),
    ("Makhuwa-Meetto", "mgh", None, None, None, T::Living, S::Individual),
    ("Lijili", "mgi", None, None, None, T::Living, S::Individual),
    ("Abureni", "mgj", None, None, None, T::Living, S::Individual),
    ("Mawes", "mgk", None, None, None, T::Living, S::Individual),
    ("Maleu-Kilenge", "mgl", None, None, None, T::Living, S::Individual),
    ("Mambae", "mgm", None, None, None, T::Living, S::Individual),
    ("Mbangi", "mgn", None, None, None, T::Living, S::Individual),
    ("Meta'", "mgo", None, None, None, T::Living, S::Individual),
    ("Eastern Magar", "mgp", None, None, None, T::Living, S::Individual),
    ("Malila", "mgq", None, None, None, T::Living, S::Individual),
    ("Mambwe-Lungu", "mgr", None, None, None, T::Living, S::Individual),
    ("Manda (Tanzania)", "mgs", None, None, None, T::Living, S::Individual),
    ("Mongol", "mgt", None, None, None, T::Living, S::Individual),
    ("Mailu", "mgu", None, None, None, T::Living, S::Individual),
    ("Matengo", "mgv", None, None, None, T::Living, S::Individual),
    ("Matumbi", "mgw", None, None, None, T::Living, S::Individual),
    ("Mbunga", "mgy", None, None, None, T::Living, S::Individual),
    ("Mbugwe", "mgz", None, None, None, T::Living, S::Individual),
    ("Manda (India)", "mha", None, None, None, T::Living, S::Individual),
    ("Mahongwe", "mhb", None, None, None, T::Living, S::Individual),
    ("Mocho", "mhc", None, None, None, T::Living, S::Individual),
    ("Mbugu", "mhd", None, None, None, T::Living, S::Individual),
    ("Besisi", "mhe", None, None, None, T::Living, S::Individual),
    ("Mamaa", "mhf", None, None, None, T::Living, S::Individual),
    ("Margu", "mhg", None, None, None, T::Living, S::Individual),
    ("Ma'di", "mhi", None, None, None, T::Living, S::Individual),
    ("Mogholi", "mhj", None, None, None, T::Living, S::Individual),
    ("Mungaka", "mhk", None, None, None, T::Living, S::Individual),
    ("Mauwake", "mhl", None, None, None, T::Living, S::Individual),
    ("Makhuwa-Moniga", "mhm", None, None, None, T::Living, S::Individual),
    ("Mócheno", "mhn", None, None, None, T::Living, S::Individual),
    ("Mashi (Zambia)", "mho", None, None, None, T::Living, S::Individual),
    ("Balinese Malay", "mhp", None, None, None, T::Living, S::Individual),
    ("Mandan", "mhq", None, None, None, T::Living, S::Individual),
    ("Eastern Mari", "mhr", None, None, None, T::Living, S::Individual),
    ("Buru (Indonesia)", "mhs", None, None, None, T::Living, S::Individual),
    ("Mandahuaca", "mht", None, None, None, T::Living, S::Individual),
    ("Digaro-Mishmi", "mhu", None, None, None, T::Living, S::Individual),
    ("Mbukushu", "mhw", None, None, None, T::Living, S::Individual),
    ("Maru", "mhx", None, None, None, T::Living, S::Individual),
    ("Ma'anyan", "mhy", None, None, None, T::Living, S::Individual),
    ("Mor (Mor Islands)", "mhz", None, None, None, T::Living, S::Individual),
    ("Miami", "mia", None, None, None, T::Living, S::Individual),
    ("Atatláhuca Mixtec", "mib", None, None, None, T::Living, S::Individual),
    ("Mi'kmaq", "mic", Some("mic"), Some("mic"), None, T::Living, S::Individual),
    ("Mandaic", "mid", None, None, None, T::Living, S::Individual),
    ("Ocotepec Mixtec", "mie", None, None, None, T::Living, S::Individual),
    ("Mofu-Gudur", "mif", None, None, None, T::Living, S::Individual),
    ("San Miguel El Grande Mixtec", "mig", None, None, None, T::Living, S::Individual),
    ("Chayuco Mixtec", "mih", None, None, None, T::Living, S::Individual),
    ("Chigmecatitlán Mixtec", "mii", None, None, None, T::Living, S::Individual),
    ("Abar", "mij", None, None, None, T::Living, S::Individual),
    ("Mikasuki", "mik", None, None, None, T::Living, S::Individual),
    ("Peñoles Mixtec", "mil", None, None, None, T::Living, S::Individual),
    ("Alacatlatzala Mixtec", "mim", None, None, None, T::Living, S::Individual),
    ("Minangkabau", "min", Some("min"), Some("min"), None, T::Living, S::Individual),
    ("Pinotepa Nacional Mixtec", "mio", None, None, None, T::Living, S::Individual),
    ("Apasco-Apoala Mixtec", "mip", None, None, None, T::Living, S::Individual),
    ("Mískito", "miq", None, None, None, T::Living, S::Individual),
    ("Isthmus Mixe", "mir", None, None, None, T::Living, S::Individual),
    ("Uncoded languages", "mis", Some("mis"), Some("mis"), None, T::Special, S::Special),
    ("Southern Puebla Mixtec", "mit", None, None, None, T::Living, S::Individual),
    ("Cacaloxtepec Mixtec", "miu", None, None, None, T::Living, S::Individual),
    ("Akoye", "miw", None, None, None, T::Living, S::Individual),
    ("Mixtepec Mixtec", "mix", None, None, None, T::Living, S::Individual),
    ("Ayutla Mixtec", "miy", None, None, None, T::Living, S::Individual),
    ("Coatzospan Mixtec", "miz", None, None, None, T::Living, S::Individual),
    ("Makalero", "mjb", None, None, None, T::Living, S::Individual),
    ("San Juan Colorado Mixtec", "mjc", None, None, None, T::Living, S::Individual),
    ("Northwest Maidu", "mjd", None, None, None, T::Living, S::Individual),
    ("Muskum", "mje", None, None, None, T::Extinct, S::Individual),
    ("Tu", "mjg", None, None, None, T::Living, S::Individual),
    ("Mwera (Nyasa)", "mjh", None, None, None, T::Living, S::Individual),
    ("Kim Mun", "mji", None, None, None, T::Living, S::Individual),
    ("Mawak", "mjj", None, None, None, T::Living, S::Individual),
    ("Matukar", "mjk", None, None, None, T::Living, S::Individual),
    ("Mandeali", "mjl", None, None, None, T::Living, S::Individual),
    ("Medebur", "mjm", None, None, None, T::Living, S::Individual),
    ("Ma (Papua New Guinea)", "mjn", None, None, None, T::Living, S::Individual),
    ("Malankuravan", "mjo", None, None, None, T::Living, S::Individual),
    ("Malapandaram", "mjp", None, None, None, T::Living, S::Individual),
    ("Malaryan", "mjq", None, None, None, T::Extinct, S::Individual),
    ("Malavedan", "mjr", None, None, None, T::Living, S::Individual),
    ("Miship", "mjs", None, None, None, T::Living, S::Individual),
    ("Sauria Paharia", "mjt", None, None, None, T::Living, S::Individual),
    ("Manna-Dora", "mju", None, None, None, T::Living, S::Individual),
    ("Mannan", "mjv", None, None, None, T::Living, S::Individual),
    ("Karbi", "mjw", None, None, None, T::Living, S::Individual),
    ("Mahali", "mjx", None, None, None, T::Living, S::Individual),
    ("Mahican", "mjy", None, None, None, T::Extinct, S::Individual),
    ("Majhi", "mjz", None, None, None, T::Living, S::Individual),
    ("Mbre", "mka", None, None, None, T::Living, S::Individual),
    ("Mal Paharia", "mkb", None, None, None, T::Living, S::Individual),
    ("Siliput", "mkc", None, None, None, T::Living, S::Individual),
    ("Macedonian", "mkd", Some("mac"), Some("mkd"), Some("mk"), T::Living, S::Individual),
    ("Mawchi", "mke", None, None, None, T::Living, S::Individual),
    ("Miya", "mkf", None, None, None, T::Living, S::Individual),
    ("Mak (China)", "mkg", None, None, None, T::Living, S::Individual),
    ("Dhatki", "mki", None, None, None, T::Living, S::Individual),
    ("Mokilese", "mkj", None, None, None, T::Living, S::Individual),
    ("Byep", "mkk", None, None, None, T::Living, S::Individual),
    ("Mokole", "mkl", None, None, None, T::Living, S::Individual),
    ("Moklen", "mkm", None, None, None, T::Living, S::Individual),
    ("Kupang Malay", "mkn", None, None, None, T::Living, S::Individual),
    ("Mingang Doso", "mko", None, None, None, T::Living, S::Individual),
    ("Moikodi", "mkp", None, None, None, T::Living, S::Individual),
    ("Bay Miwok", "mkq", None, None, None, T::Extinct, S::Individual),
    ("Malas", "mkr", None, None, None, T::Living, S::Individual),
    ("Silacayoapan Mixtec", "mks", None, None, None, T::Living, S::Individual),
    ("Vamale", "mkt", None, None, None, T::Living, S::Individual),
    ("Konyanka Maninka", "mku", None, None, None, T::Living, S::Individual),
    ("Mafea", "mkv", None, None, None, T::Living, S::Individual),
    ("Kituba (Congo)", "mkw", None, None, None, T::Living, S::Individual),
    ("Kinamiging Manobo", "mkx", None, None, None, T::Living, S::Individual),
    ("East Makian", "mky", None, None, None, T::Living, S::Individual),
    ("Makasae", "mkz", None, None, None, T::Living, S::Individual),
    ("Malo", "mla", None, None, None, T::Living, S::Individual),
    ("Mbule", "mlb", None, None, None, T::Living, S::Individual),
    ("Cao Lan", "mlc", None, None, None, T::Living, S::Individual),
    ("Manambu", "mle", None, None, None, T::Living, S::Individual),
    ("Mal", "mlf", None, None, None, T::Living, S::Individual),
    ("Malagasy", "mlg", Some("mlg"), Some("mlg"), Some("mg"), T::Living, S::MacroLanguage),
    ("Mape", "mlh", None, None, None, T::Living, S::Individual),
    ("Malimpung", "mli", None, None, None, T::Living, S::Individual),
    ("Miltu", "mlj", None, None, None, T::Living, S::Individual),
    ("Ilwana", "mlk", None, None, None, T::Living, S::Individual),
    ("Malua Bay", "mll", None, None, None, T::Living, S::Individual),
    ("Mulam", "mlm", None, None, None, T::Living, S::Individual),
    ("Malango", "mln", None, None, None, T::Living, S::Individual),
    ("Mlomp", "mlo", None, None, None, T::Living, S::Individual),
    ("Bargam", "mlp", None, None, None, T::Living, S::Individual),
    ("Western Maninkakan", "mlq", None, None, None, T::Living, S::Individual),
    ("Vame", "mlr", None, None, None, T::Living, S::Individual),
    ("Masalit", "mls", None, None, None, T::Living, S::Individual),
    ("Maltese", "mlt", Some("mlt"), Some("mlt"), Some("mt"), T::Living, S::Individual),
    ("To'abaita", "mlu", None, None, None, T::Living, S::Individual),
    ("Motlav", "mlv", None, None, None, T::Living, S::Individual),
    ("Moloko", "mlw", None, None, None, T::Living, S::Individual),
    ("Malfaxal", "mlx", None, None, None, T::Living, S::Individual),
    ("Malaynon", "mlz", None, None, None, T::Living, S::Individual),
    ("Mama", "mma", None, None, None, T::Living, S::Individual),
    ("Momina", "mmb", None, None, None, T::Living, S::Individual),
    ("Michoacán Mazahua", "mmc", None, None, None, T::Living, S::Individual),
    ("Maonan", "mmd", None, None, None, T::Living, S::Individual),
    ("Mae", "mme", None, None, None, T::Living, S::Individual),
    ("Mundat", "mmf", None, None, None, T::Living, S::Individual),
    ("North Ambrym", "mmg", None, None, None, T::Living, S::Individual),
    ("Mehináku", "mmh", None, None, None, T::Living, S::Individual),
    ("Musar", "mmi", None, None, None, T::Living, S::Individual),
    ("Majhwar", "mmj", None, None, None, T::Living, S::Individual),
    ("Mukha-Dora", "mmk", None, None, None, T::Living, S::Individual),
    ("Man Met", "mml", None, None, None, T::Living, S::Individual),
    ("Maii", "mmm", None, None, None, T::Living, S::Individual),
    ("Mamanwa", "mmn", None, None, None, T::Living, S::Individual),
    ("Mangga Buang", "mmo", None, None, None, T::Living, S::Individual),
    ("Siawi", "mmp", None, None, None, T::Living, S::Individual),
    ("Musak", "mmq", None, None, None, T::Living, S::Individual),
    ("Western Xiangxi Miao", "mmr", None, None, None, T::Living, S::Individual),
    ("Malalamai", "mmt", None, None, None, T::Living, S::Individual),
    ("Mmaala", "mmu", None, None, None, T::Living, S::Individual),
    ("Miriti", "mmv", None, None, None, T::Extinct, S::Individual),
    ("Emae", "mmw", None, None, None, T::Living, S::Individual),
    ("Madak", "mmx", None, None, None, T::Living, S::Individual),
    ("Migaama", "mmy", None, None, None, T::Living, S::Individual),
    ("Mabaale", "mmz", None, None, None, T::Living, S::Individual),
    ("Mbula", "mna", None, None, None, T::Living, S::Individual),
    ("Muna", "mnb", None, None, None, T::Living, S::Individual),
    ("Manchu", "mnc", Some("mnc"), Some("mnc"), None, T::Living, S::Individual),
    ("Mondé", "mnd", None, None, None, T::Living, S::Individual),
    ("Naba", "mne", None, None, None, T::Living, S::Individual),
    ("Mundani", "mnf", None, None, None, T::Living, S::Individual),
    ("Eastern Mnong", "mng", None, None, None, T::Living, S::Individual),
    ("Mono (Democratic Republic of Congo)", "mnh", None, None, None, T::Living, S::Individual),
    ("Manipuri", "mni", Some("mni"), Some("mni"), None, T::Living, S::Individual),
    ("Munji", "mnj", None, None, None, T::Living, S::Individual),
    ("Mandinka", "mnk", None, None, None, T::Living, S::Individual),
    ("Tiale", "mnl", None, None, None, T::Living, S::Individual),
    ("Mapena", "mnm", None, None, None, T::Living, S::Individual),
    ("Southern Mnong", "mnn", None, None, None, T::Living, S::Individual),
    ("Min Bei Chinese", "mnp", None, None, None, T::Living, S::Individual),
    ("Minriq", "mnq", None, None, None, T::Living, S::Individual),
    ("Mono (USA)", "mnr", None, None, None, T::Living, S::Individual),
    ("Mansi", "mns", None, None, None, T::Living, S::Individual),
    ("Mer", "mnu", None, None, None, T::Living, S::Individual),
    ("Rennell-Bellona", "mnv", None, None, None, T::Living, S::Individual),
    ("Mon", "mnw", None, None, None, T::Living, S::Individual),
    ("Manikion", "mnx", None, None, None, T::Living, S::Individual),
    ("Manyawa", "mny", None, None, None, T::Living, S::Individual),
    ("Moni", "mnz", None, None, None, T::Living, S::Individual),
    ("Mwan", "moa", None, None, None, T::Living, S::Individual),
    ("Mocoví", "moc", None, None, None, T::Living, S::Individual),
    ("Mobilian", "mod", None, None, None, T::Extinct, S::Individual),
    ("Innu", "moe", None, None, None, T::Living, S::Individual),
    ("Mongondow", "mog", None, None, None, T::Living, S::Individual),
    ("Mohawk", "moh", Some("moh"), Some("moh"), None, T::Living, S::Individual),
    ("Mboi", "moi", None, None, None, T::Living, S::Individual),
    ("Monzombo", "moj", None, None, None, T::Living, S::Individual),
    ("Morori", "mok", None, None, None, T::Living, S::Individual),
    ("Mangue", "mom", None, None, None, T::Extinct, S::Individual),
    ("Mongolian", "mon", Some("mon"), Some("mon"), Some("mn"), T::Living, S::MacroLanguage),
    ("Monom", "moo", None, None, None, T::Living, S::Individual),
    ("Mopán Maya", "mop", None, None, None, T::Living, S::Individual),
    ("Mor (Bomberai Peninsula)", "moq", None, None, None, T::Living, S::Individual),
    ("Moro", "mor", None, None, None, T::Living, S::Individual),
    ("Mossi", "mos", Some("mos"), Some("mos"), None, T::Living, S::Individual),
    ("Barí", "mot", None, None, None, T::Living, S::Individual),
    ("Mogum", "mou", None, None, None, T::Living, S::Individual),
    ("Mohave", "mov", None, None, None, T::Living, S::Individual),
    ("Moi (Congo)", "mow", None, None, None, T::Living, S::Individual),
    ("Molima", "mox", None, None, None, T::Living, S::Individual),
    ("Shekkacho", "moy", None, None, None, T::Living, S::Individual),
    ("Mukulu", "moz", None, None, None, T::Living, S::Individual),
    ("Mpoto", "mpa", None, None, None, T::Living, S::Individual),
    ("Malak Malak", "mpb", None, None, None, T::Living, S::Individual),
    ("Mangarrayi", "mpc", None, None, None, T::Living, S::Individual),
    ("Machinere", "mpd", None, None, None, T::Living, S::Individual),
    ("Majang", "mpe", None, None, None, T::Living, S::Individual),
    ("Marba", "mpg", None, None, None, T::Living, S::Individual),
    ("Maung", "mph", None, None, None, T::Living, S::Individual),
    ("Mpade", "mpi", None, None, None, T::Living, S::Individual),
    ("Martu Wangka", "mpj", None, None, None, T::Living, S::Individual),
    ("Mbara (Chad)", "mpk", None, None, None, T::Living, S::Individual),
    ("Middle Watut", "mpl", None, None, None, T::Living, S::Individual),
    ("Yosondúa Mixtec", "mpm", None, None, None, T::Living, S::Individual),
    ("Mindiri", "mpn", None, None, None, T::Living, S::Individual),
    ("Miu", "mpo", None, None, None, T::Living, S::Individual),
    ("Migabac", "mpp", None, None, None, T::Living, S::Individual),
    ("Matís", "mpq", None, None, None, T::Living, S::Individual),
    ("Vangunu", "mpr", None, None, None, T::Living, S::Individual),
    ("Dadibi", "mps", None, None, None, T::Living, S::Individual),
    ("Mian", "mpt", None, None, None, T::Living, S::Individual),
    ("Makuráp", "mpu", None, None, None, T::Living, S::Individual),
    ("Mungkip", "mpv", None, None, None, T::Living, S::Individual),
    ("Mapidian", "mpw", None, None, None, T::Living, S::Individual),
    ("Misima-Panaeati", "mpx", None, None, None, T::Living, S::Individual),
    ("Mapia", "mpy", None, None, None, T::Living, S::Individual),
    ("Mpi", "mpz", None, None, None, T::Living, S::Individual),
    ("Maba (Indonesia)", "mqa", None, None, None, T::Living, S::Individual),
    ("Mbuko", "mqb", None, None, None, T::Living, S::Individual),
    ("Mangole", "mqc", None, None, None, T::Living, S::Individual),
    ("Matepi", "mqe", None, None, None, T::Living, S::Individual),
    ("Momuna", "mqf", None, None, None, T::Living, S::Individual),
    ("Kota Bangun Kutai Malay", "mqg", None, None, None, T::Living, S::Individual),
    ("Tlazoyaltepec Mixtec", "mqh", None, None, None, T::Living, S::Individual),
    ("Mariri", "mqi", None, None, None, T::Living, S::Individual),
    ("Mamasa", "mqj", None, None, None, T::Living, S::Individual),
    ("Rajah Kabunsuwan Manobo", "mqk", None, None, None, T::Living, S::Individual),
    ("Mbelime", "mql", None, None, None, T::Living, S::Individual),
    ("South Marquesan", "mqm", None, None, None, T::Living, S::Individual),
    ("Moronene", "mqn", None, None, None, T::Living, S::Individual),
    ("Modole", "mqo", None, None, None, T::Living, S::Individual),
    ("Manipa", "mqp", None, None, None, T::Living, S::Individual),
    ("Minokok", "mqq", None, None, None, T::Living, S::Individual),
    ("Mander", "mqr", None, None, None, T::Living, S::Individual),
    ("West Makian", "mqs", None, None, None, T::Living, S::Individual),
    ("Mok", "mqt", None, None, None, T::Living, S::Individual),
    ("Mandari", "mqu", None, None, None, T::Living, S::Individual),
    ("Mosimo", "mqv", None, None, None, T::Living, S::Individual),
    ("Murupi", "mqw", None, None, None, T::Living, S::Individual),
    ("Mamuju", "mqx", None, None, None, T::Living, S::Individual),
    ("Manggarai", "mqy", None, None, None, T::Living, S::Individual),
    ("Pano", "mqz", None, None, None, T::Living, S::Individual),
    ("Mlabri", "mra", None, None, None, T::Living, S::Individual),
    ("Marino", "mrb", None, None, None, T::Living, S::Individual),
    ("Maricopa", "mrc", None, None, None, T::Living, S::Individual),
    ("Western Magar", "mrd", None, None, None, T::Living, S::Individual),
    ("Martha's Vineyard Sign Language", "mre", None, None, None, T::Extinct, S::Individual),
    ("Elseng", "mrf", None, None, None, T::Living, S::Individual),
    ("Mising", "mrg", None, None, None, T::Living, S::Individual),
    ("Mara Chin", "mrh", None, None, None, T::Living, S::Individual),
    ("Maori", "mri", Some("mao"), Some("mri"), Some("mi"), T::Living, S::Individual),
    ("Western Mari", "mrj", None, None, None, T::Living, S::Individual),
    ("Hmwaveke", "mrk", None, None, None, T::Living, S::Individual),
    ("Mortlockese", "mrl", None, None, None, T::Living, S::Individual),
    ("Merlav", "mrm", None, None, None, T::Living, S::Individual),
    ("Cheke Holo", "mrn", None, None, None, T::Living, S::Individual),
    ("Mru", "mro", None, None, None, T::Living, S::Individual),
    ("Morouas", "mrp", None, None, None, T::Living, S::Individual),
    ("North Marquesan", "mrq", None, None, None, T::Living, S::Individual),
    ("Maria (India)", "mrr", None, None, None, T::Living, S::Individual),
    ("Maragus", "mrs", None, None, None, T::Living, S::Individual),
    ("Marghi Central", "mrt", None, None, None, T::Living, S::Individual),
    ("Mono (Cameroon)", "mru", None, None, None, T::Living, S::Individual),
    ("Mangareva", "mrv", None, None, None, T::Living, S::Individual),
    ("Maranao", "mrw", None, None, None, T::Living, S::Individual),
    ("Maremgi", "mrx", None, None, None, T::Living, S::Individual),
    ("Mandaya", "mry", None, None, None, T::Living, S::Individual),
    ("Marind", "mrz", None, None, None, T::Living, S::Individual),
    ("Malay (macrolanguage)", "msa", Some("may"), Some("msa"), Some("ms"), T::Living, S::MacroLanguage),
    ("Masbatenyo", "msb", None, None, None, T::Living, S::Individual),
    ("Sankaran Maninka", "msc", None, None, None, T::Living, S::Individual),
    ("Yucatec Maya Sign Language", "msd", None, None, None, T::Living, S::Individual),
    ("Musey", "mse", None, None, None, T::Living, S::Individual),
    ("Mekwei", "msf", None, None, None, T::Living, S::Individual),
    ("Moraid", "msg", None, None, None, T::Living, S::Individual),
    ("Masikoro Malagasy", "msh", None, None, None, T::Living, S::Individual),
    ("Sabah Malay", "msi", None, None, None, T::Living, S::Individual),
    ("Ma (Democratic Republic of Congo)", "msj", None, None, None, T::Living, S::Individual),
    ("Mansaka", "msk", None, None, None, T::Living, S::Individual),
    ("Molof", "msl", None, None, None, T::Living, S::Individual),
    ("Agusan Manobo", "msm", None, None, None, T::Living, S::Individual),
    ("Vurës", "msn", None, None, None, T::Living, S::Individual),
    ("Mombum", "mso", None, None, None, T::Living, S::Individual),
    ("Maritsauá", "msp", None, None, None, T::Extinct, S::Individual),
    ("Caac", "msq", None, None, None, T::Living, S::Individual),
    ("Mongolian Sign Language", "msr", None, None, None, T::Living, S::Individual),
    ("West Masela", "mss", None, None, None, T::Living, S::Individual),
    ("Musom", "msu", None, None, None, T::Living, S::Individual),
    ("Maslam", "msv", None, None, None, T::Living, S::Individual),
    ("Mansoanka", "msw", None, None, None, T::Living, S::Individual),
    ("Moresada", "msx", None, None, None, T::Living, S::Individual),
    ("Aruamu", "msy", None, None, None, T::Living, S::Individual),
    ("Momare", "msz", None, None, None, T::Living, S::Individual),
    ("Cotabato Manobo", "mta", None, None, None, T::Living, S::Individual),
    ("Anyin Morofo", "mtb", None, None, None, T::Living, S::Individual),
    ("Munit", "mtc", None, None, None, T::Living, S::Individual),
    ("Mualang", "mtd", None, None, None, T::Living, S::Individual),
    ("Mono (Solomon Islands)", "mte", None, None, None, T::Living, S::Individual),
    ("Murik (Papua New Guinea)", "mtf", None, None, None, T::Living, S::Individual),
    ("Una", "mtg", None, None, None, T::Living, S::Individual),
    ("Munggui", "mth", None, None, None, T::Living, S::Individual),
    ("Maiwa (Papua New Guinea)", "mti", None, None, None, T::Living, S::Individual),
    ("Moskona", "mtj", None, None, None, T::Living, S::Individual),
    ("Mbe'", "mtk", None, None, None, T::Living, S::Individual),
    ("Montol", "mtl", None, None, None, T::Living, S::Individual),
    ("Mator", "mtm", None, None, None, T::Extinct, S::Individual),
    ("Matagalpa", "mtn", None, None, None, T::Extinct, S::Individual),
    ("Totontepec Mixe", "mto", None, None, None, T::Living, S::Individual),
    ("Wichí Lhamtés Nocten", "mtp", None, None, None, T::Living, S::Individual),
    ("Muong", "mtq", None, None, None, T::Living, S::Individual),
    ("Mewari", "mtr", None, None, None, T::Living, S::Individual),
    ("Yora", "mts", None, None, None, T::Living, S::Individual),
    ("Mota", "mtt", None, None, None, T::Living, S::Individual),
    ("Tututepec Mixtec", "mtu", None, None, None, T::Living, S::Individual),
    ("Asaro'o", "mtv", None, None, None, T::Living, S::Individual),
    ("Southern Binukidnon", "mtw", None, None, None, T::Living, S::Individual),
    ("Tidaá Mixtec", "mtx", None, None, None, T::Living, S::Individual),
    ("Nabi", "mty", None, None, None, T::Living, S::Individual),
    ("Mundang", "mua", None, None, None, T::Living, S::Individual),
    ("Mubi", "mub", None, None, None, T::Living, S::Individual),
    ("Ajumbu", "muc", None, None, None, T::Living, S::Individual),
    ("Mednyj Aleut", "mud", None, None, None, T::Living, S::Individual),
    ("Media Lengua", "mue", None, None, None, T::Living, S::Individual),
    ("Musgu", "mug", None, None, None, T::Living, S::Individual),
    ("Mündü", "muh", None, None, None, T::Living, S::Individual),
    ("Musi", "mui", None, None, None, T::Living, S::Individual),
    ("Mabire", "muj", None, None, None, T::Living, S::Individual),
    ("Mugom", "muk", None, None, None, T::Living, S::Individual),
    ("Multiple languages", "mul", Some("mul"), Some("mul"), None, T::Special, S::Special),
    ("Maiwala", "mum", None, None, None, T::Living, S::Individual),
    ("Nyong", "muo", None, None, None, T::Living, S::Individual),
    ("Malvi", "mup", None, None, None, T::Living, S::Individual),
    ("Eastern Xiangxi Miao", "muq", None, None, None, T::Living, S::Individual),
    ("Murle", "mur", None, None, None, T::Living, S::Individual),
    ("Creek", "mus", Some("mus"), Some("mus"), None, T::Living, S::Individual),
    ("Western Muria", "mut", None, None, None, T::Living, S::Individual),
    ("Yaaku", "muu", None, None, None, T::Living, S::Individual),
    ("Muthuvan", "muv", None, None, None, T::Living, S::Individual),
    ("Bo-Ung", "mux", None, None, None, T::Living, S::Individual),
    ("Muyang", "muy", None, None, None, T::Living, S::Individual),
    ("Mursi", "muz", None, None, None, T::Living, S::Individual),
    ("Manam", "mva", None, None, None, T::Living, S::Individual),
    ("Mattole", "mvb", None, None, None, T::Extinct, S::Individual),
    ("Mamboru", "mvd", None, None, None, T::Living, S::Individual),
    ("Marwari (Pakistan)", "mve", None, None, None, T::Living, S::Individual),
    ("Peripheral Mongolian", "mvf", None, None, None, T::Living, S::Individual),
    ("Yucuañe Mixtec", "mvg", None, None, None, T::Living, S::Individual),
    ("Mulgi", "mvh", None, None, None, T::Living, S::Individual),
    ("Miyako", "mvi", None, None, None, T::Living, S::Individual),
    ("Mekmek", "mvk", None, None, None, T::Living, S::Individual),
    ("Mbara (Australia)", "mvl", None, None, None, T::Extinct, S::Individual),
    ("Minaveha", "mvn", None, None, None, T::Living, S::Individual),
    ("Marovo", "mvo", None, None, None, T::Living, S::Individual),
    ("Duri", "mvp", None, None, None, T::Living, S::Individual),
    ("Moere", "mvq", None, None, None, T::Living, S::Individual),
    ("Marau", "mvr", None, None, None, T::Living, S::Individual),
    ("Massep", "mvs", None, None, None, T::Living, S::Individual),
    ("Mpotovoro", "mvt", None, None, None, T::Living, S::Individual),
    ("Marfa", "mvu", None, None, None, T::Living, S::Individual),
    ("Tagal Murut", "mvv", None, None, None, T::Living, S::Individual),
    ("Machinga", "mvw", None, None, None, T::Living, S::Individual),
    ("Meoswar", "mvx", None, None, None, T::Living, S::Individual),
    ("Indus Kohistani", "mvy", None, None, None, T::Living, S::Individual),
    ("Mesqan", "mvz", None, None, None, T::Living, S::Individual),
    ("Mwatebu", "mwa", None, None, None, T::Living, S::Individual),
    ("Juwal", "mwb", None, None, None, T::Living, S::Individual),
    ("Are", "mwc", None, None, None, T::Living, S::Individual),
    ("Mwera (Chimwera)", "mwe", None, None, None, T::Living, S::Individual),
    ("Murrinh-Patha", "mwf", None, None, None, T::Living, S::Individual),
    ("Aiklep", "mwg", None, None, None, T::Living, S::Individual),
    ("Mouk-Aria", "mwh", None, None, None, T::Living, S::Individual),
    ("Labo", "mwi", None, None, None, T::Living, S::Individual),
    ("Kita Maninkakan", "mwk", None, None, None, T::Living, S::Individual),
    ("Mirandese", "mwl", Some("mwl"), Some("mwl"), None, T::Living, S::Individual),
    ("Sar", "mwm", None, None, None, T::Living, S::Individual),
    ("Nyamwanga", "mwn", None, None, None, T::Living, S::Individual),
    ("Central Maewo", "mwo", None, None, None, T::Living, S::Individual),
    ("Kala Lagaw Ya", "mwp", None, None, None, T::Living, S::Individual),
    ("Mün Chin", "mwq", None, None, None, T::Living, S::Individual),
    ("Marwari", "mwr", Some("mwr"), Some("mwr"), None, T::Living, S::MacroLanguage),
    ("Mwimbi-Muthambi", "mws", None, None, None, T::Living, S::Individual),
    ("Moken", "mwt", None, None, None, T::Living, S::Individual),
    ("Mittu", "mwu", None, None, None, T::Extinct, S::Individual),
    ("Mentawai", "mwv", None, None, None, T::Living, S::Individual),
    ("Hmong Daw", "mww", None, None, None, T::Living, S::Individual),
    ("Moingi", "mwz", None, None, None, T::Living, S::Individual),
    ("Northwest Oaxaca Mixtec", "mxa", None, None, None, T::Living, S::Individual),
    ("Tezoatlán Mixtec", "mxb", None, None, None, T::Living, S::Individual),
    ("Manyika", "mxc", None, None, None, T::Living, S::Individual),
    ("Modang", "mxd", None, None, None, T::Living, S::Individual),
    ("Mele-Fila", "mxe", None, None, None, T::Living, S::Individual),
    ("Malgbe", "mxf", None, None, None, T::Living, S::Individual),
    ("Mbangala", "mxg", None, None, None, T::Living, S::Individual),
    ("Mvuba", "mxh", None, None, None, T::Living, S::Individual),
    ("Mozarabic", "mxi", None, None, None, T::Historical, S::Individual),
    ("Miju-Mishmi", "mxj", None, None, None, T::Living, S::Individual),
    ("Monumbo", "mxk", None, None, None, T::Living, S::Individual),
    ("Maxi Gbe", "mxl", None, None, None, T::Living, S::Individual),
    ("Meramera", "mxm", None, None, None, T::Living, S::Individual),
    ("Moi (Indonesia)", "mxn", None, None, None, T::Living, S::Individual),
    ("Mbowe", "mxo", None, None, None, T::Living, S::Individual),
    ("Tlahuitoltepec Mixe", "mxp", None, None, None, T::Living, S::Individual),
    ("Juquila Mixe", "mxq", None, None, None, T::Living, S::Individual),
    ("Murik (Malaysia)", "mxr", None, None, None, T::Living, S::Individual),
    ("Huitepec Mixtec", "mxs", None, None, None, T::Living, S::Individual),
    ("Jamiltepec Mixtec", "mxt", None, None, None, T::Living, S::Individual),
    ("Mada (Cameroon)", "mxu", None, None, None, T::Living, S::Individual),
    ("Metlatónoc Mixtec", "mxv", None, None, None, T::Living, S::Individual),
    ("Namo", "mxw", None, None, None, T::Living, S::Individual),
    ("Mahou", "mxx", None, None, None, T::Living, S::Individual),
    ("Southeastern Nochixtlán Mixtec", "mxy", None, None, None, T::Living, S::Individual),
    ("Central Masela", "mxz", None, None, None, T::Living, S::Individual),
    ("Burmese", "mya", Some("bur"), Some("mya"), Some("my"), T::Living, S::Individual),
    ("Mbay", "myb", None, None, None, T::Living, S::Individual),
    ("Mayeka", "myc", None, None, None, T::Living, S::Individual),
    ("Myene", "mye", None, None, None, T::Living, S::Individual),
    ("Bambassi", "myf", None, None, None, T::Living, S::Individual),
    ("Manta", "myg", None, None, None, T::Living, S::Individual),
    ("Makah", "myh", None, None, None, T::Living, S::Individual),
    ("Mangayat", "myj", None, None, None, T::Living, S::Individual),
    ("Mamara Senoufo", "myk", None, None, None, T::Living, S::Individual),
    ("Moma", "myl", None, None, None, T::Living, S::Individual),
    ("Me'en", "mym", None, None, None, T::Living, S::Individual),
    ("Anfillo", "myo", None, None, None, T::Living, S::Individual),
    ("Pirahã", "myp", None, None, None, T::Living, S::Individual),
    ("Muniche", "myr", None, None, None, T::Living, S::Individual),
    ("Mesmes", "mys", None, None, None, T::Extinct, S::Individual),
    ("Mundurukú", "myu", None, None, None, T::Living, S::Individual),
    ("Erzya", "myv", Some("myv"), Some("myv"), None, T::Living, S::Individual),
    ("Muyuw", "myw", None, None, None, T::Living, S::Individual),
    ("Masaaba", "myx", None, None, None, T::Living, S::Individual),
    ("Macuna", "myy", None, None, None, T::Living, S::Individual),
    ("Classical Mandaic", "myz", None, None, None, T::Historical, S::Individual),
    ("Santa María Zacatepec Mixtec", "mza", None, None, None, T::Living, S::Individual),
    ("Tumzabt", "mzb", None, None, None, T::Living, S::Individual),
    ("Madagascar Sign Language", "mzc", None, None, None, T::Living, S::Individual),
    ("Malimba", "mzd", None, None, None, T::Living, S::Individual),
    ("Morawa", "mze", None, None, None, T::Living, S::Individual),
    ("Monastic Sign Language", "mzg", None, None, None, T::Living, S::Individual),
    ("Wichí Lhamtés Güisnay", "mzh", None, None, None, T::Living, S::Individual),
    ("Ixcatlán Mazatec", "mzi", None, None, None, T::Living, S::Individual),
    ("Manya", "mzj", None, None, None, T::Living, S::Individual),
    ("Nigeria Mambila", "mzk", None, None, None, T::Living, S::Individual),
    ("Mazatlán Mixe", "mzl", None, None, None, T::Living, S::Individual),
    ("Mumuye", "mzm", None, None, None, T::Living, S::Individual),
    ("Mazanderani", "mzn", None, None, None, T::Living, S::Individual),
    ("Matipuhy", "mzo", None, None, None, T::Extinct, S::Individual),
    ("Movima", "mzp", None, None, None, T::Living, S::Individual),
    ("Mori Atas", "mzq", None, None, None, T::Living, S::Individual),
    ("Marúbo", "mzr", None, None, None, T::Living, S::Individual),
    ("Macanese", "mzs", None, None, None, T::Living, S::Individual),
    ("Mintil", "mzt", None, None, None, T::Living, S::Individual),
    ("Inapang", "mzu", None, None, None, T::Living, S::Individual),
    ("Manza", "mzv", None, None, None, T::Living, S::Individual),
    ("Deg", "mzw", None, None, None, T::Living, S::Individual),
    ("Mawayana", "mzx", None, None, None, T::Living, S::Individual),
    ("Mozambican Sign Language", "mzy", None, None, None, T::Living, S::Individual),
    ("Maiadomu", "mzz", None, None, None, T::Living, S::Individual),
    ("Namla", "naa", None, None, None, T::Living, S::Individual),
    ("Southern Nambikuára", "nab", None, None, None, T::Living, S::Individual),
    ("Narak", "nac", None, None, None, T::Living, S::Individual),
    ("Naka'ela", "nae", None, None, None, T::Extinct, S::Individual),
    ("Nabak", "naf", None, None, None, T::Living, S::Individual),
    ("Naga Pidgin", "nag", None, None, None, T::Living, S::Individual),
    ("Nalu", "naj", None, None, None, T::Living, S::Individual),
    ("Nakanai", "nak", None, None, None, T::Living, S::Individual),
    ("Nalik", "nal", None, None, None, T::Living, S::Individual),
    ("Ngan'gityemerri", "nam", None, None, None, T::Living, S::Individual),
    ("Min Nan Chinese", "nan", None, None, None, T::Living, S::Individual),
    ("Naaba", "nao", None, None, None, T::Living, S::Individual),
    ("Neapolitan", "nap", Some("nap"), Some("nap"), None, T::Living, S::Individual),
    ("Khoekhoe", "naq", None, None, None, T::Living, S::Individual),
    ("Iguta", "nar", None, None, None, T::Living, S::Individual),
    ("Naasioi", "nas", None, None, None, T::Living, S::Individual),
    ("Ca̱hungwa̱rya̱", "nat", None, None, None, T::Living, S::Individual),
    ("Nauru", "nau", Some("nau"), Some("nau"), Some("na"), T::Living, S::Individual),
    ("Navajo", "nav", Some("nav"), Some("nav"), Some("nv"), T::Living, S::Individual),
    ("Nawuri", "naw", None, None, None, T::Living, S::Individual),
    ("Nakwi", "nax", None, None, None, T::Living, S::Individual),
    ("Ngarrindjeri", "nay", None, None, None, T::Extinct, S::Individual),
    ("Coatepec Nahuatl", "naz", None, None, None, T::Living, S::Individual),
    ("Nyemba", "nba", None, None, None, T::Living, S::Individual),
    ("Ndoe", "nbb", None, None, None, T::Living, S::Individual),
    ("Chang Naga", "nbc", None, None, None, T::Living, S::Individual),
    ("Ngbinda", "nbd", None, None, None, T::Living, S::Individual),
    ("Konyak Naga", "nbe", None, None, None, T::Living, S::Individual),
    ("Nagarchal", "nbg", None, None, None, T::Living, S::Individual),
    ("Ngamo", "nbh", None, None, None, T::Living, S::Individual),
    ("Mao Naga", "nbi", None, None, None, T::Living, S::Individual),
    ("Ngarinyman", "nbj", None, None, None, T::Living, S::Individual),
    ("Nake", "nbk", None, None, None, T::Living, S::Individual),
    ("South Ndebele", "nbl", Some("nbl"), Some("nbl"), Some("nr"), T::Living, S::Individual),
    ("Ngbaka Ma'bo", "nbm", None, None, None, T::Living, S::Individual),
    ("Kuri", "nbn", None, None, None, T::Living, S::Individual),
    ("Nkukoli", "nbo", None, None, None, T::Living, S::Individual),
    ("Nnam", "nbp", None, None, None, T::Living, S::Individual),
    ("Nggem", "nbq", None, None, None, T::Living, S::Individual),
    ("Numana", "nbr", None, None, None, T::Living, S::Individual),
    ("Namibian Sign Language", "nbs", None, None, None, T::Living, S::Individual),
    ("Na", "nbt", None, None, None, T::Living, S::Individual),
    ("Rongmei Naga", "nbu", None, None, None, T::Living, S::Individual),
    ("Ngamambo", "nbv", None, None, None, T::Living, S::Individual),
    ("Southern Ngbandi", "nbw", None, None, None, T::Living, S::Individual),
    ("Ningera", "nby", None, None, None, T::Living, S::Individual),
    ("Iyo", "nca", None, None, None, T::Living, S::Individual),
    ("Central Nicobarese", "ncb", None, None, None, T::Living, S::Individual),
    ("Ponam", "ncc", None, None, None, T::Living, S::Individual),
    ("Nachering", "ncd", None, None, None, T::Living, S::Individual),
    ("Yale", "nce", None, None, None, T::Living, S::Individual),
    ("Notsi", "ncf", None, None, None, T::Living, S::Individual),
    ("Nisga'a", "ncg", None, None, None, T::Living, S::Individual),
    ("Central Huasteca Nahuatl", "nch", None, None, None, T::Living, S::Individual),
    ("Classical Nahuatl", "nci", None, None, None, T::Historical, S::Individual),
    ("Northern Puebla Nahuatl", "ncj", None, None, None, T::Living, S::Individual),
    ("Na-kara", "nck", None, None, None, T::Living, S::Individual),
    ("Michoacán Nahuatl", "ncl", None, None, None, T::Living, S::Individual),
    ("Nambo", "ncm", None, None, None, T::Living, S::Individual),
    ("Nauna", "ncn", None, None, None, T::Living, S::Individual),
    ("Sibe", "nco", None, None, None, T::Living, S::Individual),
    ("Northern Katang", "ncq", None, None, None, T::Living, S::Individual),
    ("Ncane", "ncr", None, None, None, T::Living, S::Individual),
    ("Nicaraguan Sign Language", "ncs", None, None, None, T::Living, S::Individual),
    ("Chothe Naga", "nct", None, None, None, T::Living, S::Individual),
    ("Chumburung", "ncu", None, None, None, T::Living, S::Individual),
    ("Central Puebla Nahuatl", "ncx", None, None, None, T::Living, S::Individual),
    ("Natchez", "ncz", None, None, None, T::Extinct, S::Individual),
    ("Ndasa", "nda", None, None, None, T::Living, S::Individual),
    ("Kenswei Nsei", "ndb", None, None, None, T::Living, S::Individual),
    ("Ndau", "ndc", None, None, None, T::Living, S::Individual),
    ("Nde-Nsele-Nta", "ndd", None, None, None, T::Living, S::Individual),
    ("North Ndebele", "nde", Some("nde"), Some("nde"), Some("nd"), T::Living, S::Individual),
    ("Nadruvian", "ndf", None, None, None, T::Historical, S::Individual),
    ("Ndengereko", "ndg", None, None, None, T::Living, S::Individual),
    ("Ndali", "ndh", None, None, None, T::Living, S::Individual),
    ("Samba Leko", "ndi", None, None, None, T::Living, S::Individual),
    ("Ndamba", "ndj", None, None, None, T::Living, S::Individual),
    ("Ndaka", "ndk", None, None, None, T::Living, S::Individual),
    ("Ndolo", "ndl", None, None, None, T::Living, S::Individual),
    ("Ndam", "ndm", None, None, None, T::Living, S::Individual),
    ("Ngundi", "ndn", None, None, None, T::Living, S::Individual),
    ("Ndonga", "ndo", Some("ndo"), Some("ndo"), Some("ng"), T::Living, S::Individual),
    ("Ndo", "ndp", None, None, None, T::Living, S::Individual),
    ("Ndombe", "ndq", None, None, None, T::Living, S::Individual),
    ("Ndoola", "ndr", None, None, None, T::Living, S::Individual),
    ("Low German", "nds", Some("nds"), Some("nds"), None, T::Living, S::Individual),
    ("Ndunga", "ndt", None, None, None, T::Living, S::Individual),
    ("Dugun", "ndu", None, None, None, T::Living, S::Individual),
    ("Ndut", "ndv", None, None, None, T::Living, S::Individual),
    ("Ndobo", "ndw", None, None, None, T::Living, S::Individual),
    ("Nduga", "ndx", None, None, None, T::Living, S::Individual),
    ("Lutos", "ndy", None, None, None, T::Living, S::Individual),
    ("Ndogo", "ndz", None, None, None, T::Living, S::Individual),
    ("Eastern Ngad'a", "nea", None, None, None, T::Living, S::Individual),
    ("Toura (Côte d'Ivoire)", "neb", None, None, None, T::Living, S::Individual),
    ("Nedebang", "nec", None, None, None, T::Living, S::Individual),
    ("Nde-Gbite", "ned", None, None, None, T::Living, S::Individual),
    ("Nêlêmwa-Nixumwak", "nee", None, None, None, T::Living, S::Individual),
    ("Nefamese", "nef", None, None, None, T::Living, S::Individual),
    ("Negidal", "neg", None, None, None, T::Living, S::Individual),
    ("Nyenkha", "neh", None, None, None, T::Living, S::Individual),
    ("Neo-Hittite", "nei", None, None, None, T::Ancient, S::Individual),
    ("Neko", "nej", None, None, None, T::Living, S::Individual),
    ("Neku", "nek", None, None, None, T::Living, S::Individual),
    ("Nemi", "nem", None, None, None, T::Living, S::Individual),
    ("Nengone", "nen", None, None, None, T::Living, S::Individual),
    ("Ná-Meo", "neo", None, None, None, T::Living, S::Individual),
    ("Nepali (macrolanguage)", "nep", Some("nep"), Some("nep"), Some("ne"), T::Living, S::MacroLanguage),
    ("North Central Mixe", "neq", None, None, None, T::Living, S::Individual),
    ("Yahadian", "ner", None, None, None, T::Living, S::Individual),
    ("Bhoti Kinnauri", "nes", None, None, None, T::Living, S::Individual),
    ("Nete", "net", None, None, None, T::Living, S::Individual),
    ("Neo", "neu", None, None, None, T::Constructed, S::Individual),
    ("Nyaheun", "nev", None, None, None, T::Living, S::Individual),
    ("Newari", "new", Some("new"), Some("new"), None, T::Living, S::Individual),
    ("Neme", "nex", None, None, None, T::Living, S::Individual),
    ("Neyo", "ney", None, None, None, T::Living, S::Individual),
    ("Nez Perce", "nez", None, None, None, T::Living, S::Individual),
    ("Dhao", "nfa", None, None, None, T::Living, S::Individual),
    ("Ahwai", "nfd", None, None, None, T::Living, S::Individual),
    ("Ayiwo", "nfl", None, None, None, T::Living, S::Individual),
    ("Nafaanra", "nfr", None, None, None, T::Living, S::Individual),
    ("Mfumte", "nfu", None, None, None, T::Living, S::Individual),
    ("Ngbaka", "nga", None, None, None, T::Living, S::Individual),
    ("Northern Ngbandi", "ngb", None, None, None, T::Living, S::Individual),
    ("Ngombe (Democratic Republic of Congo)", "ngc", None, None, None, T::Living, S::Individual),
    ("Ngando (Central African Republic)", "ngd", None, None, None, T::Living, S::Individual),
    ("Ngemba", "nge", None, None, None, T::Living, S::Individual),
    ("Ngbaka Manza", "ngg", None, None, None, T::Living, S::Individual),
    ("Nǁng", "ngh", None, None, None, T::Living, S::Individual),
    ("Ngizim", "ngi", None, None, None, T::Living, S::Individual),
    ("Ngie", "ngj", None, None, None, T::Living, S::Individual),
    ("Dalabon", "ngk", None, None, None, T::Living, S::Individual),
    ("Lomwe", "ngl", None, None, None, T::Living, S::Individual),
    ("Ngatik Men's Creole", "ngm", None, None, None, T::Living, S::Individual),
    ("Ngwo", "ngn", None, None, None, T::Living, S::Individual),
    ("Ngulu", "ngp", None, None, None, T::Living, S::Individual),
    ("Ngurimi", "ngq", None, None, None, T::Living, S::Individual),
    ("Engdewu", "ngr", None, None, None, T::Living, S::Individual),
    ("Gvoko", "ngs", None, None, None, T::Living, S::Individual),
    ("Kriang", "ngt", None, None, None, T::Living, S::Individual),
    ("Guerrero Nahuatl", "ngu", None, None, None, T::Living, S::Individual),
    ("Nagumi", "ngv", None, None, None, T::Extinct, S::Individual),
    ("Ngwaba", "ngw", None, None, None, T::Living, S::Individual),
    ("Nggwahyi", "ngx", None, None, None, T::Living, S::Individual),
    ("Tibea", "ngy", None, None, None, T::Living, S::Individual),
    ("Ngungwel", "ngz", None, None, None, T::Living, S::Individual),
    ("Nhanda", "nha", None, None, None, T::Living, S::Individual),
    ("Beng", "nhb", None, None, None, T::Living, S::Individual),
    ("Tabasco Nahuatl", "nhc", None, None, None, T::Extinct, S::Individual),
    ("Chiripá", "nhd", None, None, None, T::Living, S::Individual),
    ("Eastern Huasteca Nahuatl", "nhe", None, None, None, T::Living, S::Individual),
    ("Nhuwala", "nhf", None, None, None, T::Living, S::Individual),
    ("Tetelcingo Nahuatl", "nhg", None, None, None, T::Living, S::Individual),
    ("Nahari", "nhh", None, None, None, T::Living, S::Individual),
    ("Zacatlán-Ahuacatlán-Tepetzintla Nahuatl", "nhi", None, None, None, T::Living, S::Individual),
    ("Isthmus-Cosoleacaque Nahuatl", "nhk", None, None, None, T::Living, S::Individual),
    ("Morelos Nahuatl", "nhm", None, None, None, T::Living, S::Individual),
    ("Central Nahuatl", "nhn", None, None, None, T::Living, S::Individual),
    ("Takuu", "nho", None, None, None, T::Living, S::Individual),
    ("Isthmus-Pajapan Nahuatl", "nhp", None, None, None, T::Living, S::Individual),
    ("Huaxcaleca Nahuatl", "nhq", None, None, None, T::Living, S::Individual),
    ("Naro", "nhr", None, None, None, T::Living, S::Individual),
    ("Ometepec Nahuatl", "nht", None, None, None, T::Living, S::Individual),
    ("Noone", "nhu", None, None, None, T::Living, S::Individual),
    ("Temascaltepec Nahuatl", "nhv", None, None, None, T::Living, S::Individual),
    ("Western Huasteca Nahuatl", "nhw", None, None, None, T::Living, S::Individual),
    ("Isthmus-Mecayapan Nahuatl", "nhx", None, None, None, T::Living, S::Individual),
    ("Northern Oaxaca Nahuatl", "nhy", None, None, None, T::Living, S::Individual),
    ("Santa María La Alta Nahuatl", "nhz", None, None, None, T::Living, S::Individual),
    ("Nias", "nia", Some("nia"), Some("nia"), None, T::Living, S::Individual),
    ("Nakame", "nib", None, None, None, T::Living, S::Individual),
    ("Ngandi", "nid", None, None, None, T::Extinct, S::Individual),
    ("Niellim", "nie", None, None, None, T::Living, S::Individual),
    ("Nek", "nif", None, None, None, T::Living, S::Individual),
    ("Ngalakgan", "nig", None, None, None, T::Extinct, S::Individual),
    ("Nyiha (Tanzania)", "nih", None, None, None, T::Living, S::Individual),
    ("Nii", "nii", None, None, None, T::Living, S::Individual),
    ("Ngaju", "nij", None, None, None, T::Living, S::Individual),
    ("Southern Nicobarese", "nik", None, None, None, T::Living, S::Individual),
    ("Nila", "nil", None, None, None, T::Living, S::Individual),
    ("Nilamba", "nim", None, None, None, T::Living, S::Individual),
    ("Ninzo", "nin", None, None, None, T::Living, S::Individual),
    ("Nganasan", "nio", None, None, None, T::Living, S::Individual),
    ("Nandi", "niq", None, None, None, T::Living, S::Individual),
    ("Nimboran", "nir", None, None, None, T::Living, S::Individual),
    ("Nimi", "nis", None, None, None, T::Living, S::Individual),
    ("Southeastern Kolami", "nit", None, None, None, T::Living, S::Individual),
    ("Niuean", "niu", Some("niu"), Some("niu"), None, T::Living, S::Individual),
    ("Gilyak", "niv", None, None, None, T::Living, S::Individual),
    ("Nimo", "niw", None, None, None, T::Living, S::Individual),
    ("Hema", "nix", None, None, None, T::Living, S::Individual),
    ("Ngiti", "niy", None, None, None, T::Living, S::Individual),
    ("Ningil", "niz", None, None, None, T::Living, S::Individual),
    ("Nzanyi", "nja", None, None, None, T::Living, S::Individual),
    ("Nocte Naga", "njb", None, None, None, T::Living, S::Individual),
    ("Ndonde Hamba", "njd", None, None, None, T::Living, S::Individual),
    ("Lotha Naga", "njh", None, None, None, T::Living, S::Individual),
    ("Gudanji", "nji", None, None, None, T::Living, S::Individual),
    ("Njen", "njj", None, None, None, T::Living, S::Individual),
    ("Njalgulgule", "njl", None, None, None, T::Living, S::Individual),
    ("Angami Naga", "njm", None, None, None, T::Living, S::Individual),
    ("Liangmai Naga", "njn", None, None, None, T::Living, S::Individual),
    ("Ao Naga", "njo", None, None, None, T::Living, S::Individual),
    ("Njerep", "njr", None, None, None, T::Living, S::Individual),
    ("Nisa", "njs", None, None, None, T::Living, S::Individual),
    ("Ndyuka-Trio Pidgin", "njt", None, None, None, T::Living, S::Individual),
    ("Ngadjunmaya", "nju", None, None, None, T::Living, S::Individual),
    ("Kunyi", "njx", None, None, None, T::Living, S::Individual),
    ("Njyem", "njy", None, None, None, T::Living, S::Individual),
    ("Nyishi", "njz", None, None, None, T::Living, S::Individual),
    ("Nkoya", "nka", None, None, None, T::Living, S::Individual),
    ("Khoibu Naga", "nkb", None, None, None, T::Living, S::Individual),
    ("Nkongho", "nkc", None, None, None, T::Living, S::Individual),
    ("Koireng", "nkd", None, None, None, T::Living, S::Individual),
    ("Duke", "nke", None, None, None, T::Living, S::Individual),
    ("Inpui Naga", "nkf", None, None, None, T::Living, S::Individual),
    ("Nekgini", "nkg", None, None, None, T::Living, S::Individual),
    ("Khezha Naga", "nkh", None, None, None, T::Living, S::Individual),
    ("Thangal Naga", "nki", None, None, None, T::Living, S::Individual),
    ("Nakai", "nkj", None, None, None, T::Living, S::Individual),
    ("Nokuku", "nkk", None, None, None, T::Living, S::Individual),
    ("Namat", "nkm", None, None, None, T::Living, S::Individual),
    ("Nkangala", "nkn", None, None, None, T::Living, S::Individual),
    ("Nkonya", "nko", None, None, None, T::Living, S::Individual),
    ("Niuatoputapu", "nkp", None, None, None, T::Extinct, S::Individual),
    ("Nkami", "nkq", None, None, None, T::Living, S::Individual),
    ("Nukuoro", "nkr", None, None, None, T::Living, S::Individual),
    ("North Asmat", "nks", None, None, None, T::Living, S::Individual),
    ("Nyika (Tanzania)", "nkt", None, None, None, T::Living, S::Individual),
    ("Bouna Kulango", "nku", None, None, None, T::Living, S::Individual),
    ("Nyika (Malawi and Zambia)", "nkv", None, None, None, T::Living, S::Individual),
    ("Nkutu", "nkw", None, None, None, T::Living, S::Individual),
    ("Nkoroo", "nkx", None, None, None, T::Living, S::Individual),
    ("Nkari", "nkz", None, None, None, T::Living, S::Individual),
    ("Ngombale", "nla", None, None, None, T::Living, S::Individual),
    ("Nalca", "nlc", None, None, None, T::Living, S::Individual),
    ("Dutch", "nld", Some("dut"), Some("nld"), Some("nl"), T::Living, S::Individual),
    ("East Nyala", "nle", None, None, None, T::Living, S::Individual),
    ("Gela", "nlg", None, None, None, T::Living, S::Individual),
    ("Grangali", "nli", None, None, None, T::Living, S::Individual),
    ("Nyali", "nlj", None, None, None, T::Living, S::Individual),
    ("Ninia Yali", "nlk", None, None, None, T::Living, S::Individual),
    ("Nihali", "nll", None, None, None, T::Living, S::Individual),
    ("Mankiyali", "nlm", None, None, None, T::Living, S::Individual),
    ("Ngul", "nlo", None, None, None, T::Living, S::Individual),
    ("Lao Naga", "nlq", None, None, None, T::Living, S::Individual),
    ("Nchumbulu", "nlu", None, None, None, T::Living, S::Individual),
    ("Orizaba Nahuatl", "nlv", None, None, None, T::Living, S::Individual),
    ("Walangama", "nlw", None, None, None, T::Extinct, S::Individual),
    ("Nahali", "nlx", None, None, None, T::Living, S::Individual),
    ("Nyamal", "nly", None, None, None, T::Living, S::Individual),
    ("Nalögo", "nlz", None, None, None, T::Living, S::Individual),
    ("Maram Naga", "nma", None, None, None, T::Living, S::Individual),
    ("Big Nambas", "nmb", None, None, None, T::Living, S::Individual),
    ("Ngam", "nmc", None, None, None, T::Living, S::Individual),
    ("Ndumu", "nmd", None, None, None, T::Living, S::Individual),
    ("Mzieme Naga", "nme", None, None, None, T::Living, S::Individual),
    ("Tangkhul Naga (India)", "nmf", None, None, None, T::Living, S::Individual),
    ("Kwasio", "nmg", None, None, None, T::Living, S::Individual),
    ("Monsang Naga", "nmh", None, None, None, T::Living, S::Individual),
    ("Nyam", "nmi", None, None, None, T::Living, S::Individual),
    ("Ngombe (Central African Republic)", "nmj", None, None, None, T::Living, S::Individual),
    ("Namakura", "nmk", None, None, None, T::Living, S::Individual),
    ("Ndemli", "nml", None, None, None, T::Living, S::Individual),
    ("Manangba", "nmm", None, None, None, T::Living, S::Individual),
    ("ǃXóõ", "nmn", None, None, None, T::Living, S::Individual),
    ("Moyon Naga", "nmo", None, None, None, T::Living, S::Individual),
    ("Nimanbur", "nmp", None, None, None, T::Extinct, S::Individual),
    ("Nambya", "nmq", None, None, None, T::Living, S::Individual),
    ("Nimbari", "nmr", None, None, None, T::Extinct, S::Individual),
    ("Letemboi", "nms", None, None, None, T::Living, S::Individual),
    ("Namonuito", "nmt", None, None, None, T::Living, S::Individual),
    ("Northeast Maidu", "nmu", None, None, None, T::Living, S::Individual),
    ("Ngamini", "nmv", None, None, None, T::Extinct, S::Individual),
    ("Nimoa", "nmw", None, None, None, T::Living, S::Individual),
    ("Nama (Papua New Guinea)", "nmx", None, None, None, T::Living, S::Individual),
    ("Namuyi", "nmy", None, None, None, T::Living, S::Individual),
    ("Nawdm", "nmz", None, None, None, T::Living, S::Individual),
    ("Nyangumarta", "nna", None, None, None, T::Living, S::Individual),
    ("Nande", "nnb", None, None, None, T::Living, S::Individual),
    ("Nancere", "nnc", None, None, None, T::Living, S::Individual),
    ("West Ambae", "nnd", None, None, None, T::Living, S::Individual),
    ("Ngandyera", "nne", None, None, None, T::Living, S::Individual),
    ("Ngaing", "nnf", None, None, None, T::Living, S::Individual),
    ("Maring Naga", "nng", None, None, None, T::Living, S::Individual),
    ("Ngiemboon", "nnh", None, None, None, T::Living, S::Individual),
    ("North Nuaulu", "nni", None, None, None, T::Living, S::Individual),
    ("Nyangatom", "nnj", None, None, None, T::Living, S::Individual),
    ("Nankina", "nnk", None, None, None, T::Living, S::Individual),
    ("Northern Rengma Naga", "nnl", None, None, None, T::Living, S::Individual),
    ("Namia", "nnm", None, None, None, T::Living, S::Individual),
    ("Ngete", "nnn", None, None, None, T::Living, S::Individual),
    ("Norwegian Nynorsk", "nno", Some("nno"), Some("nno"), Some("nn"), T::Living, S::Individual),
    ("Wancho Naga", "nnp", None, None, None, T::Living, S::Individual),
    ("Ngindo", "nnq", None, None, None, T::Living, S::Individual),
    ("Narungga", "nnr", None, None, None, T::Extinct, S::Individual),
    ("Nanticoke", "nnt", None, None, None, T::Extinct, S::Individual),
    ("Dwang", "nnu", None, None, None, T::Living, S::Individual),
    ("Nugunu (Australia)", "nnv", None, None, None, T::Extinct, S::Individual),
    ("Southern Nuni", "nnw", None, None, None, T::Living, S::Individual),
    ("Nyangga", "nny", None, None, None, T::Extinct, S::Individual),
    ("Nda'nda'", "nnz", None, None, None, T::Living, S::Individual),
    ("Woun Meu", "noa", None, None, None, T::Living, S::Individual),
    ("Norwegian Bokmål", "nob", Some("nob"), Some("nob"), Some("nb"), T::Living, S::Individual),
    ("Nuk", "noc", None, None, None, T::Living, S::Individual),
    ("Northern Thai", "nod", None, None, None, T::Living, S::Individual),
    ("Nimadi", "noe", None, None, None, T::Living, S::Individual),
    ("Nomane", "nof", None, None, None, T::Living, S::Individual),
    ("Nogai", "nog", Some("nog"), Some("nog"), None, T::Living, S::Individual),
    ("Nomu", "noh", None, None, None, T::Living, S::Individual),
    ("Noiri", "noi", None, None, None, T::Living, S::Individual),
    ("Nonuya", "noj", None, None, None, T::Living, S::Individual),
    ("Nooksack", "nok", None, None, None, T::Extinct, S::Individual),
    ("Nomlaki", "nol", None, None, None, T::Extinct, S::Individual),
    ("Nocamán", "nom", None, None, None, T::Extinct, S::Individual),
    ("Old Norse", "non", Some("non"), Some("non"), None, T::Historical, S::Individual),
    ("Numanggang", "nop", None, None, None, T::Living, S::Individual),
    ("Ngongo", "noq", None, None, None, T::Living, S::Individual),
    ("Norwegian", "nor", Some("nor"), Some("nor"), Some("no"), T::Living, S::MacroLanguage),
    ("Eastern Nisu", "nos", None, None, None, T::Living, S::Individual),
    ("Nomatsiguenga", "not", None, None, None, T::Living, S::Individual),
    ("Ewage-Notu", "nou", None, None, None, T::Living, S::Individual),
    ("Novial", "nov", None, None, None, T::Constructed, S::Individual),
    ("Nyambo", "now", None, None, None, T::Living, S::Individual),
    ("Noy", "noy", None, None, None, T::Living, S::Individual),
    ("Nayi", "noz", None, None, None, T::Living, S::Individual),
    ("Nar Phu", "npa", None, None, None, T::Living, S::Individual),
    ("Nupbikha", "npb", None, None, None, T::Living, S::Individual),
    ("Ponyo-Gongwang Naga", "npg", None, None, None, T::Living, S::Individual),
    ("Phom Naga", "nph", None, None, None, T::Living, S::Individual),
    ("Nepali (individual language)", "npi", None, None, None, T::Living, S::Individual),
    ("Southeastern Puebla Nahuatl", "npl", None, None, None, T::Living, S::Individual),
    ("Mondropolon", "npn", None, None, None, T::Living, S::Individual),
    ("Pochuri Naga", "npo", None, None, None, T::Living, S::Individual),
    ("Nipsan", "nps", None, None, None, T::Living, S::Individual),
    ("Puimei Naga", "npu", None, None, None, T::Living, S::Individual),
    ("Noipx", "npx", None, None, None, T::Living, S::Individual),
    ("Napu", "npy", None, None, None, T::Living, S::Individual),
    ("Southern Nago", "nqg", None, None, None, T::Living, S::Individual),
    ("Kura Ede Nago", "nqk", None, None, None, T::Living, S::Individual),
    ("Ngendelengo", "nql", None, None, None, T::Living, S::Individual),
    ("Ndom", "nqm", None, None, None, T::Living, S::Individual),
    ("Nen", "nqn", None, None, None, T::Living, S::Individual),
    ("N'Ko", "nqo", Some("nqo"), Some("nqo"), None, T::Living, S::Individual),
    ("Kyan-Karyaw Naga", "nqq", None, None, None, T::Living, S::Individual),
    ("Nteng", "nqt", None, None, None, T::Living, S::Individual),
    ("Akyaung Ari Naga", "nqy", None, None, None, T::Living, S::Individual),
    ("Ngom", "nra", None, None, None, T::Living, S::Individual),
    ("Nara", "nrb", None, None, None, T::Living, S::Individual),
    ("Noric", "nrc", None, None, None, T::Ancient, S::Individual),
    ("Southern Rengma Naga", "nre", None, None, None, T::Living, S::Individual),
    ("Jèrriais", "nrf", None, None, None, T::Living, S::Individual),
    ("Narango", "nrg", None, None, None, T::Living, S::Individual),
    ("Chokri Naga", "nri", None, None, None, T::Living, S::Individual),
    ("Ngarla", "nrk", None, None, None, T::Living, S::Individual),
    ("Ngarluma", "nrl", None, None, None, T::Living, S::Individual),
    ("Narom", "nrm", None, None, None, T::Living, S::Individual),
    ("Norn", "nrn", None, None, None, T::Extinct, S::Individual),
    ("North Picene", "nrp", None, None, None, T::Ancient, S::Individual),
    ("Norra", "nrr", None, None, None, T::Extinct, S::Individual),
    ("Northern Kalapuya", "nrt", None, None, None, T::Extinct, S::Individual),
    ("Narua", "nru", None, None, None, T::Living, S::Individual),
    ("Ngurmbur", "nrx", None, None, None, T::Extinct, S::Individual),
    ("Lala", "nrz", None, None, None, T::Living, S::Individual),
    ("Sangtam Naga", "nsa", None, None, None, T::Living, S::Individual),
    ("Lower Nossob", "nsb", None, None, None, T::Extinct, S::Individual),
    ("Nshi", "nsc", None, None, None, T::Living, S::Individual),
    ("Southern Nisu", "nsd", None, None, None, T::Living, S::Individual),
    ("Nsenga", "nse", None, None, None, T::Living, S::Individual),
    ("Northwestern Nisu", "nsf", None, None, None, T::Living, S::Individual),
    ("Ngasa", "nsg", None, None, None, T::Living, S::Individual),
    ("Ngoshie", "nsh", None, None, None, T::Living, S::Individual),
    ("Nigerian Sign Language", "nsi", None, None, None, T::Living, S::Individual),
    ("Naskapi", "nsk", None, None, None, T::Living, S::Individual),
    ("Norwegian Sign Language", "nsl", None, None, None, T::Living, S::Individual),
    ("Sumi Naga", "nsm", None, None, None, T::Living, S::Individual),
    ("Nehan", "nsn", None, None, None, T::Living, S::Individual),
    ("Pedi", "nso", Some("nso"), Some("nso"), None, T::Living, S::Individual),
    ("Nepalese Sign Language", "nsp", None, None, None, T::Living, S::Individual),
    ("Northern Sierra Miwok", "nsq", None, None, None, T::Living, S::Individual),
    ("Maritime Sign Language", "nsr", None, None, None, T::Living, S::Individual),
    ("Nali", "nss", None, None, None, T::Living, S::Individual),
    ("Tase Naga", "nst", None, None, None, T::Living, S::Individual),
    ("Sierra Negra Nahuatl", "nsu", None, None, None, T::Living, S::Individual),
    ("Southwestern Nisu", "nsv", None, None, None, T::Living, S::Individual),
    ("Navut", "nsw", None, None, None, T::Living, S::Individual),
    ("Nsongo", "nsx", None, None, None, T::Living, S::Individual),
    ("Nasal", "nsy", None, None, None, T::Living, S::Individual),
    ("Nisenan", "nsz", None, None, None, T::Living, S::Individual),
    ("Northern Tidung", "ntd", None, None, None, T::Living, S::Individual),
    ("Nathembo", "nte", None, None, None, T::Living, S::Individual),
    ("Ngantangarra", "ntg", None, None, None, T::Extinct, S::Individual),
    ("Natioro", "nti", None, None, None, T::Living, S::Individual),
    ("Ngaanyatjarra", "ntj", None, None, None, T::Living, S::Individual),
    ("Ikoma-Nata-Isenye", "ntk", None, None, None, T::Living, S::Individual),
    ("Nateni", "ntm", None, None, None, T::Living, S::Individual),
    ("Ntomba", "nto", None, None, None, T::Living, S::Individual),
    ("Northern Tepehuan", "ntp", None, None, None, T::Living, S::Individual),
    ("Delo", "ntr", None, None, None, T::Living, S::Individual),
    ("Natügu", "ntu", None, None, None, T::Living, S::Individual),
    ("Nottoway", "ntw", None, None, None, T::Extinct, S::Individual),
    ("Tangkhul Naga (Myanmar)", "ntx", None, None, None, T::Living, S::Individual),
    ("Mantsi", "nty", None, None, None, T::Living, S::Individual),
    ("Natanzi", "ntz", None, None, None, T::Living, S::Individual),
    ("Yuanga", "nua", None, None, None, T::Living, S::Individual),
    ("Nukuini", "nuc", None, None, None, T::Extinct, S::Individual),
    ("Ngala", "nud", None, None, None, T::Living, S::Individual),
    ("Ngundu", "nue", None, None, None, T::Living, S::Individual),
    ("Nusu", "nuf", None, None, None, T::Living, S::Individual),
    ("Nungali", "nug", None, None, None, T::Extinct, S::Individual),
    ("Ndunda", "nuh", None, None, None, T::Living, S::Individual),
    ("Ngumbi", "nui", None, None, None, T::Living, S::Individual),
    ("Nyole", "nuj", None, None, None, T::Living, S::Individual),
    ("Nuu-chah-nulth", "nuk", None, None, None, T::Living, S::Individual),
    ("Nusa Laut", "nul", None, None, None, T::Extinct, S::Individual),
    ("Niuafo'ou", "num", None, None, None, T::Living, S::Individual),
    ("Anong", "nun", None, None, None, T::Living, S::Individual),
    ("Nguôn", "nuo", None, None, None, T::Living, S::Individual),
    ("Nupe-Nupe-Tako", "nup", None, None, None, T::Living, S::Individual),
    ("Nukumanu", "nuq", None, None, None, T::Living, S::Individual),
    ("Nukuria", "nur", None, None, None, T::Living, S::Individual),
    ("Nuer", "nus", None, None, None, T::Living, S::Individual),
    ("Nung (Viet Nam)", "nut", None, None, None, T::Living, S::Individual),
    ("Ngbundu", "nuu", None, None, None, T::Living, S::Individual),
    ("Northern Nuni", "nuv", None, None, None, T::Living, S::Individual),
    ("Nguluwan", "nuw", None, None, None, T::Living, S::Individual),
    ("Mehek", "nux", None, None, None, T::Living, S::Individual),
    ("Nunggubuyu", "nuy", None, None, None, T::Living, S::Individual),
    ("Tlamacazapa Nahuatl", "nuz", None, None, None, T::Living, S::Individual),
    ("Nasarian", "nvh", None, None, None, T::Living, S::Individual),
    ("Namiae", "nvm", None, None, None, T::Living, S::Individual),
    ("Nyokon", "nvo", None, None, None, T::Living, S::Individual),
    ("Nawathinehena", "nwa", None, None, None, T::Extinct, S::Individual),
    ("Nyabwa", "nwb", None, None, None, T::Living, S::Individual),
    ("Classical Newari", "nwc", Some("nwc"), Some("nwc"), None, T::Historical, S::Individual),
    ("Ngwe", "nwe", None, None, None, T::Living, S::Individual),
    ("Ngayawung", "nwg", None, None, None, T::Extinct, S::Individual),
    ("Southwest Tanna", "nwi", None, None, None, T::Living, S::Individual),
    ("Nyamusa-Molo", "nwm", None, None, None, T::Living, S::Individual),
    ("Nauo", "nwo", None, None, None, T::Extinct, S::Individual),
    ("Nawaru", "nwr", None, None, None, T::Living, S::Individual),
    ("Ndwewe", "nww", None, None, None, T::Living, S::Individual),
    ("Middle Newar", "nwx", None, None, None, T::Historical, S::Individual),
    ("Nottoway-Meherrin", "nwy", None, None, None, T::Extinct, S::Individual),
    ("Nauete", "nxa", None, None, None, T::Living, S::Individual),
    ("Ngando (Democratic Republic of Congo)", "nxd", None, None, None, T::Living, S::Individual),
    ("Nage", "nxe", None, None, None, T::Living, S::Individual),
    ("Ngad'a", "nxg", None, None, None, T::Living, S::Individual),
    ("Nindi", "nxi", None, None, None, T::Living, S::Individual),
    ("Koki Naga", "nxk", None, None, None, T::Living, S::Individual),
    ("South Nuaulu", "nxl", None, None, None, T::Living, S::Individual),
    ("Numidian", "nxm", None, None, None, T::Ancient, S::Individual),
    ("Ngawun", "nxn", None, None, None, T::Extinct, S::Individual),
    ("Ndambomo", "nxo", None, None, None, T::Living, S::Individual),
    ("Naxi", "nxq", None, None, None, T::Living, S::Individual),
    ("Ninggerum", "nxr", None, None, None, T::Living, S::Individual),
    ("Nafri", "nxx", None, None, None, T::Living, S::Individual),
    ("Nyanja", "nya", Some("nya"), Some("nya"), Some("ny"), T::Living, S::Individual),
    ("Nyangbo", "nyb", None, None, None, T::Living, S::Individual),
    ("Nyanga-li", "nyc", None, None, None, T::Living, S::Individual),
    ("Nyore", "nyd", None, None, None, T::Living, S::Individual),
    ("Nyengo", "nye", None, None, None, T::Living, S::Individual),
    ("Giryama", "nyf", None, None, None, T::Living, S::Individual),
    ("Nyindu", "nyg", None, None, None, T::Living, S::Individual),
    ("Nyikina", "nyh", None, None, None, T::Living, S::Individual),
    ("Ama (Sudan)", "nyi", None, None, None, T::Living, S::Individual),
    ("Nyanga", "nyj", None, None, None, T::Living, S::Individual),
    ("Nyaneka", "nyk", None, None, None, T::Living, S::Individual),
    ("Nyeu", "nyl", None, None, None, T::Living, S::Individual),
    ("Nyamwezi", "nym", Some("nym"), Some("nym"), None, T::Living, S::Individual),
    ("Nyankole", "nyn", Some("nyn"), Some("nyn"), None, T::Living, S::Individual),
    ("Nyoro", "nyo", Some("nyo"), Some("nyo"), None, T::Living, S::Individual),
    ("Nyang'i", "nyp", None, None, None, T::Extinct, S::Individual),
    ("Nayini", "nyq", None, None, None, T::Living, S::Individual),
    ("Nyiha (Malawi)", "nyr", None, None, None, T::Living, S::Individual),
    ("Nyungar", "nys", None, None, None, T::Living, S::Individual),
    ("Nyawaygi", "nyt", None, None, None, T::Extinct, S::Individual),
    ("Nyungwe", "nyu", None, None, None, T::Living, S::Individual),
    ("Nyulnyul", "nyv", None, None, None, T::Extinct, S::Individual),
    ("Nyaw", "nyw", None, None, None, T::Living, S::Individual),
    ("Nganyaywana", "nyx", None, None, None, T::Extinct, S::Individual),
    ("Nyakyusa-Ngonde", "nyy", None, None, None, T::Living, S::Individual),
    ("Tigon Mbembe", "nza", None, None, None, T::Living, S::Individual),
    ("Njebi", "nzb", None, None, None, T::Living, S::Individual),
    ("Nzadi", "nzd", None, None, None, T::Living, S::Individual),
    ("Nzima", "nzi", Some("nzi"), Some("nzi"), None, T::Living, S::Individual),
    ("Nzakara", "nzk", None, None, None, T::Living, S::Individual),
    ("Zeme Naga", "nzm", None, None, None, T::Living, S::Individual),
    ("New Zealand Sign Language", "nzs", None, None, None, T::Living, S::Individual),
    ("Teke-Nzikou", "nzu", None, None, None, T::Living, S::Individual),
    ("Nzakambay", "nzy", None, None, None, T::Living, S::Individual),
    ("Nanga Dama Dogon", "nzz", None, None, None, T::Living, S::Individual),
    ("Orok", "oaa", None, None, None, T::Living, S::Individual),
    ("Oroch", "oac", None, None, None, T::Living, S::Individual),
    ("Old Aramaic (up to 700 BCE)", "oar", None, None, None, T::Ancient, S::Individual),
    ("Old Avar", "oav", None, None, None, T::Historical, S::Individual),
    ("Obispeño", "obi", None, None, None, T::Extinct, S::Individual),
    ("Southern Bontok", "obk", None, None, None, T::Living, S::Individual),
    ("Oblo", "obl", None, None, None, T::Living, S::Individual),
    ("Moabite", "obm", None, None, None, T::Ancient, S::Individual),
    ("Obo Manobo", "obo", None, None, None, T::Living, S::Individual),
    ("Old Burmese", "obr", None, None, None, T::Historical, S::Individual),
    ("Old Breton", "obt", None, None, None, T::Historical, S::Individual),
    ("Obulom", "obu", None, None, None, T::Living, S::Individual),
    ("Ocaina", "oca", None, None, None, T::Living, S::Individual),
    ("Old Chinese", "och", None, None, None, T::Ancient, S::Individual),
    ("Occitan (post 1500)", "oci", Some("oci"), Some("oci"), Some("oc"), T::Living, S::Individual),
    ("Old Cham", "ocm", None, None, None, T::Historical, S::Individual),
    ("Old Cornish", "oco", None, None, None, T::Historical, S::Individual),
    ("Atzingo Matlatzinca", "ocu", None, None, None, T::Living, S::Individual),
    ("Odut", "oda", None, None, None, T::Living, S::Individual),
    ("Od", "odk", None, None, None, T::Living, S::Individual),
    ("Old Dutch", "odt", None, None, None, T::Historical, S::Individual),
    ("Odual", "odu", None, None, None, T::Living, S::Individual),
    ("Ofo", "ofo", None, None, None, T::Extinct, S::Individual),
    ("Old Frisian", "ofs", None, None, None, T::Historical, S::Individual),
    ("Efutop", "ofu", None, None, None, T::Living, S::Individual),
    ("Ogbia", "ogb", None, None, None, T::Living, S::Individual),
    ("Ogbah", "ogc", None, None, None, T::Living, S::Individual),
    ("Old Georgian", "oge", None, None, None, T::Historical, S::Individual),
    ("Ogbogolo", "ogg", None, None, None, T::Living, S::Individual),
    ("Khana", "ogo", None, None, None, T::Living, S::Individual),
    ("Ogbronuagum", "ogu", None, None, None, T::Living, S::Individual),
    ("Old Hittite", "oht", None, None, None, T::Ancient, S::Individual),
    ("Old Hungarian", "ohu", None, None, None, T::Historical, S::Individual),
    ("Oirata", "oia", None, None, None, T::Living, S::Individual),
    ("Okolie", "oie", None, None, None, T::Living, S::Individual),
    ("Inebu One", "oin", None, None, None, T::Living, S::Individual),
    ("Northwestern Ojibwa", "ojb", None, None, None, T::Living, S::Individual),
    ("Central Ojibwa", "ojc", None, None, None, T::Living, S::Individual),
    ("Eastern Ojibwa", "ojg", None, None, None, T::Living, S::Individual),
    ("Ojibwa", "oji", Some("oji"), Some("oji"), Some("oj"), T::Living, S::MacroLanguage),
    ("Old Japanese", "ojp", None, None, None, T::Historical, S::Individual),
    ("Severn Ojibwa", "ojs", None, None, None, T::Living, S::Individual),
    ("Ontong Java", "ojv", None, None, None, T::Living, S::Individual),
    ("Western Ojibwa", "ojw", None, None, None, T::Living, S::Individual),
    ("Okanagan", "oka", None, None, None, T::Living, S::Individual),
    ("Okobo", "okb", None, None, None, T::Living, S::Individual),
    ("Kobo", "okc", None, None, None, T::Living, S::Individual),
    ("Okodia", "okd", None, None, None, T::Living, S::Individual),
    ("Okpe (Southwestern Edo)", "oke", None, None, None, T::Living, S::Individual),
    ("Koko Babangk", "okg", None, None, None, T::Extinct, S::Individual),
    ("Koresh-e Rostam", "okh", None, None, None, T::Living, S::Individual),
    ("Okiek", "oki", None, None, None, T::Living, S::Individual),
    ("Oko-Juwoi", "okj", None, None, None, T::Extinct, S::Individual),
    ("Kwamtim One", "okk", None, None, None, T::Living, S::Individual),
    ("Old Kentish Sign Language", "okl", None, None, None, T::Extinct, S::Individual),
    ("Middle Korean (10th-16th cent.)", "okm", None, None, None, T::Historical, S::Individual),
    ("Oki-No-Erabu", "okn", None, None, None, T::Living, S::Individual),
    ("Old Korean (3rd-9th cent.)", "oko", None, None, None, T::Historical, S::Individual),
    ("Kirike", "okr", None, None, None, T::Living, S::Individual),
    ("Oko-Eni-Osayen", "oks", None, None, None, T::Living, S::Individual),
    ("Oku", "oku", None, None, None, T::Living, S::Individual),
    ("Orokaiva", "okv", None, None, None, T::Living, S::Individual),
    ("Okpe (Northwestern Edo)", "okx", None, None, None, T::Living, S::Individual),
    ("Old Khmer", "okz", None, None, None, T::Historical, S::Individual),
    ("Walungge", "ola", None, None, None, T::Living, S::Individual),
    ("Mochi", "old", None, None, None, T::Living, S::Individual),
    ("Olekha", "ole", None, None, None, T::Living, S::Individual),
    ("Olkol", "olk", None, None, None, T::Extinct, S::Individual),
    ("Oloma", "olm", None, None, None, T::Living, S::Individual),
    ("Livvi", "olo", None, None, None, T::Living, S::Individual),
    ("Olrat", "olr", None, None, None, T::Living, S::Individual),
    ("Old Lithuanian", "olt", None, None, None, T::Historical, S::Individual),
    ("Kuvale", "olu", None, None, None, T::Living, S::Individual),
    ("Omaha-Ponca", "oma", None, None, None, T::Living, S::Individual),
    ("East Ambae", "omb", None, None, None, T::Living, S::Individual),
    ("Mochica", "omc", None, None, None, T::Extinct, S::Individual),
    ("Omagua", "omg", None, None, None, T::Living, S::Individual),
    ("Omi", "omi", None, None, None, T::Living, S::Individual),
    ("Omok", "omk", None, None, None, T::Extinct, S::Individual),
    ("Ombo", "oml", None, None, None, T::Living, S::Individual),
    ("Minoan", "omn", None, None, None, T::Ancient, S::Individual),
    ("Utarmbung", "omo", None, None, None, T::Living, S::Individual),
    ("Old Manipuri", "omp", None, None, None, T::Historical, S::Individual),
    ("Old Marathi", "omr", None, None, None, T::Historical, S::Individual),
    ("Omotik", "omt", None, None, None, T::Living, S::Individual),
    ("Omurano", "omu", None, None, None, T::Extinct, S::Individual),
    ("South Tairora", "omw", None, None, None, T::Living, S::Individual),
    ("Old Mon", "omx", None, None, None, T::Historical, S::Individual),
    ("Old Malay", "omy", None, None, None, T::Historical, S::Individual),
    ("Ona", "ona", None, None, None, T::Living, S::Individual),
    ("Lingao", "onb", None, None, None, T::Living, S::Individual),
    ("Oneida", "one", None, None, None, T::Living, S::Individual),
    ("Olo", "ong", None, None, None, T::Living, S::Individual),
    ("Onin", "oni", None, None, None, T::Living, S::Individual),
    ("Onjob", "onj", None, None, None, T::Living, S::Individual),
    ("Kabore One", "onk", None, None, None, T::Living, S::Individual),
    ("Onobasulu", "onn", None, None, None, T::Living, S::Individual),
    ("Onondaga", "ono", None, None, None, T::Living, S::Individual),
    ("Sartang", "onp", None, None, None, T::Living, S::Individual),
    ("Northern One", "onr", None, None, None, T::Living, S::Individual),
    ("Ono", "ons", None, None, None, T::Living, S::Individual),
    ("Ontenu", "ont", None, None, None, T::Living, S::Individual),
    ("Unua", "onu", None, None, None, T::Living, S::Individual),
    ("Old Nubian", "onw", None, None, None, T::Historical, S::Individual),
    ("Onin Based Pidgin", "onx", None, None, None, T::Living, S::Individual),
    ("Tohono O'odham", "ood", None, None, None, T::Living, S::Individual),
    ("Ong", "oog", None, None, None, T::Living, S::Individual),
    ("Önge", "oon", None, None, None, T::Living, S::Individual),
    ("Oorlams", "oor", None, None, None, T::Living, S::Individual),
    ("Old Ossetic", "oos", None, None, None, T::Ancient, S::Individual),
    ("Okpamheri", "opa", None, None, None, T::Living, S::Individual),
    ("Kopkaka", "opk", None, None, None, T::Living, S::Individual),
    ("Oksapmin", "opm", None, None, None, T::Living, S::Individual),
    ("Opao", "opo", None, None, None, T::Living, S::Individual),
    ("Opata", "opt", None, None, None, T::Extinct, S::Individual),
    ("Ofayé", "opy", None, None, None, T::Living, S::Individual),
    ("Oroha", "ora", None, None, None, T::Living, S::Individual),
    ("Orma", "orc", None, None, None, T::Living, S::Individual),
    ("Orejón", "ore", None, None, None, T::Living, S::Individual),
    ("Oring", "org", None, None, None, T::Living, S::Individual),
    ("Oroqen", "orh", None, None, None, T::Living, S::Individual),
    ("Oriya (macrolanguage)", "ori", Some("ori"), Some("ori"), Some("or"), T::Living, S::MacroLanguage),
    ("Oromo", "orm", Some("orm"), Some("orm"), Some("om"), T::Living, S::MacroLanguage),
    ("Orang Kanaq", "orn", None, None, None, T::Living, S::Individual),
    ("Orokolo", "oro", None, None, None, T::Living, S::Individual),
    ("Oruma", "orr", None, None, None, T::Living, S::Individual),
    ("Orang Seletar", "ors", None, None, None, T::Living, S::Individual),
    ("Adivasi Oriya", "ort", None, None, None, T::Living, S::Individual),
    ("Ormuri", "oru", None, None, None, T::Living, S::Individual),
    ("Old Russian", "orv", None, None, None, T::Historical, S::Individual),
    ("Oro Win", "orw", None, None, None, T::Living, S::Individual),
    ("Oro", "orx", None, None, None, T::Living, S::Individual),
    ("Odia", "ory", None, None, None, T::Living, S::Individual),
    ("Ormu", "orz", None, None, None, T::Living, S::Individual),
    ("Osage", "osa", Some("osa"), Some("osa"), None, T::Living, S::Individual),
    ("Oscan", "osc", None, None, None, T::Ancient, S::Individual),
    ("Osing", "osi", None, None, None, T::Living, S::Individual),
    ("Old Sundanese", "osn", None, None, None, T::Historical, S::Individual),
    ("Ososo", "oso", None, None, None, T::Living, S::Individual),
    ("Old Spanish", "osp", None, None, None, T::Historical, S::Individual),
    ("Ossetian", "oss", Some("oss"), Some("oss"), Some("os"), T::Living, S::Individual),
    ("Osatu", "ost", None, None, None, T::Living, S::Individual),
    ("Southern One", "osu", None, None, None, T::Living, S::Individual),
    ("Old Saxon", "osx", None, None, None, T::Historical, S::Individual),
    ("Ottoman Turkish (1500-1928)", "ota", Some("ota"), Some("ota"), None, T::Historical, S::Individual),
    ("Old Tibetan", "otb", None, None, None, T::Historical, S::Individual),
    ("Ot Danum", "otd", None, None, None, T::Living, S::Individual),
    ("Mezquital Otomi", "ote", None, None, None, T::Living, S::Individual),
    ("Oti", "oti", None, None, None, T::Extinct, S::Individual),
    ("Old Turkish", "otk", None, None, None, T::Historical, S::Individual),
    ("Tilapa Otomi", "otl", None, None, None, T::Living, S::Individual),
    ("Eastern Highland Otomi", "otm", None, None, None, T::Living, S::Individual),
    ("Tenango Otomi", "otn", None, None, None, T::Living, S::Individual),
    ("Querétaro Otomi", "otq", None, None, None, T::Living, S::Individual),
    ("Otoro", "otr", None, None, None, T::Living, S::Individual),
    ("Estado de México Otomi", "ots", None, None, None, T::Living, S::Individual),
    ("Temoaya Otomi", "ott", None, None, None, T::Living, S::Individual),
    ("Otuke", "otu", None, None, None, T::Extinct, S::Individual),
    ("Ottawa", "otw", None, None, None, T::Living, S::Individual),
    ("Texcatepec Otomi", "otx", None, None, None, T::Living, S::Individual),
    ("Old Tamil", "oty", None, None, None, T::Ancient, S::Individual),
    ("Ixtenco Otomi", "otz", None, None, None, T::Living, S::Individual),
    ("Tagargrent", "oua", None, None, None, T::Living, S::Individual),
    ("Glio-Oubi", "oub", None, None, None, T::Living, S::Individual),
    ("Oune", "oue", None, None, None, T::Living, S::Individual),
    ("Old Uighur", "oui", None, None, None, T::Historical, S::Individual),
    ("Ouma", "oum", None, None, None, T::Extinct, S::Individual),
    ("Elfdalian", "ovd", None, None, None, T::Living, S::Individual),
    ("Owiniga", "owi", None, None, None, T::Living, S::Individual),
    ("Old Welsh", "owl", None, None, None, T::Historical, S::Individual),
    ("Oy", "oyb", None, None, None, T::Living, S::Individual),
    ("Oyda", "oyd", None, None, None, T::Living, S::Individual),
    ("Wayampi", "oym", None, None, None, T::Living, S::Individual),
    ("Oya'oya", "oyy", None, None, None, T::Living, S::Individual),
    ("Koonzime", "ozm", None, None, None, T::Living, S::Individual),
    ("Parecís", "pab", None, None, None, T::Living, S::Individual),
    ("Pacoh", "pac", None, None, None, T::Living, S::Individual),
    ("Paumarí", "pad", None, None, None, T::Living, S::Individual),
    ("Pagibete", "pae", None, None, None, T::Living, S::Individual),
    ("Paranawát", "paf", None, None, None, T::Extinct, S::Individual),
    ("Pangasinan", "pag", Some("pag"), Some("pag"), None, T::Living, S::Individual),
    ("Tenharim", "pah", None, None, None, T::Living, S::Individual),
    ("Pe", "pai", None, None, None, T::Living, S::Individual),
    ("Parakanã", "pak", None, None, None, T::Living, S::Individual),
    ("Pahlavi", "pal", Some("pal"), Some("pal"), None, T::Ancient, S::Individual),
    ("Pampanga", "pam", Some("pam"), Some("pam"), None, T::Living, S::Individual),
    ("Panjabi", "pan", Some("pan"), Some("pan"), Some("pa"), T::Living, S::Individual),
    ("Northern Paiute", "pao", None, None, None, T::Living, S::Individual),
    ("Papiamento", "pap", Some("pap"), Some("pap"), None, T::Living, S::Individual),
    ("Parya", "paq", None, None, None, T::Living, S::Individual),
    ("Panamint", "par", None, None, None, T::Living, S::Individual),
    ("Papasena", "pas", None, None, None, T::Living, S::Individual),
    ("Palauan", "pau", Some("pau"), Some("pau"), None, T::Living, S::Individual),
    ("Pakaásnovos", "pav", None, None, None, T::Living, S::Individual),
    ("Pawnee", "paw", None, None, None, T::Living, S::Individual),
    ("Pankararé", "pax", None, None, None, T::Extinct, S::Individual),
    ("Pech", "pay", None, None, None, T::Living, S::Individual),
    ("Pankararú", "paz", None, None, None, T::Extinct, S::Individual),
    ("Páez", "pbb", None, None, None, T::Living, S::Individual),
    ("Patamona", "pbc", None, None, None, T::Living, S::Individual),
    ("Mezontla Popoloca", "pbe", None, None, None, T::Living, S::Individual),
    ("Coyotepec Popoloca", "pbf", None, None, None, T::Living, S::Individual),
    ("Paraujano", "pbg", None, None, None, T::Extinct, S::Individual),
    ("E'ñapa Woromaipu", "pbh", None, None, None, T::Living, S::Individual),
    ("Parkwa", "pbi", None, None, None, T::Living, S::Individual),
    ("Mak (Nigeria)", "pbl", None, None, None, T::Living, S::Individual),
    ("Puebla Mazatec", "pbm", None, None, None, T::Living, S::Individual),
    ("Kpasam", "pbn", None, None, None, T::Living, S::Individual),
    ("Papel", "pbo", None, None, None, T::Living, S::Individual),
    ("Badyara", "pbp", None, None, None, T::Living, S::Individual),
    ("Pangwa", "pbr", None, None, None, T::Living, S::Individual),
    ("Central Pame", "pbs", None, None, None, T::Living, S::Individual),
    ("Southern Pashto", "pbt", None, None, None, T::Living, S::Individual),
    ("Northern Pashto", "pbu", None, None, None, T::Living, S::Individual),
    ("Pnar", "pbv", None, None, None, T::Living, S::Individual),
    ("Pyu (Papua New Guinea)", "pby", None, None, None, T::Living, S::Individual),
    ("Santa Inés Ahuatempan Popoloca", "pca", None, None, None, T::Living, S::Individual),
    ("Pear", "pcb", None, None, None, T::Living, S::Individual),
    ("Bouyei", "pcc", None, None, None, T::Living, S::Individual),
    ("Picard", "pcd", None, None, None, T::Living, S::Individual),
    ("Ruching Palaung", "pce", None, None, None, T::Living, S::Individual),
    ("Paliyan", "pcf", None, None, None, T::Living, S::Individual),
    ("Paniya", "pcg", None, None, None, T::Living, S::Individual),
    ("Pardhan", "pch", None, None, None, T::Living, S::Individual),
    ("Duruwa", "pci", None, None, None, T::Living, S::Individual),
    ("Parenga", "pcj", None, None, None, T::Living, S::Individual),
    ("Paite Chin", "pck", None, None, None, T::Living, S::Individual),
    ("Pardhi", "pcl", None, None, None, T::Living, S::Individual),
    ("Nigerian Pidgin", "pcm", None, None, None, T::Living, S::Individual),
    ("Piti", "pcn", None, None, None, T::Living, S::Individual),
    ("Pacahuara", "pcp", None, None, None, T::Living, S::Individual),
    ("Pyapun", "pcw", None, None, None, T::Living, S::Individual),
    ("Anam", "pda", None, None, None, T::Living, S::Individual),
    ("Pennsylvania German", "pdc", None, None, None, T::Living, S::Individual),
    ("Pa Di", "pdi", None, None, None, T::Living, S::Individual),
    ("Podena", "pdn", None, None, None, T::Living, S::Individual),
    ("Padoe", "pdo", None, None, None, T::Living, S::Individual),
    ("Plautdietsch", "pdt", None, None, None, T::Living, S::Individual),
    ("Kayan", "pdu", None, None, None, T::Living, S::Individual),
    ("Peranakan Indonesian", "pea", None, None, None, T::Living, S::Individual),
    ("Eastern Pomo", "peb", None, None, None, T::Extinct, S::Individual),
    ("Mala (Papua New Guinea)", "ped", None, None, None, T::Living, S::Individual),
    ("Taje", "pee", None, None, None, T::Living, S::Individual),
    ("Northeastern Pomo", "pef", None, None, None, T::Extinct, S::Individual),
    ("Pengo", "peg", None, None, None, T::Living, S::Individual),
    ("Bonan", "peh", None, None, None, T::Living, S::Individual),
    ("Chichimeca-Jonaz", "pei", None, None, None, T::Living, S::Individual),
    ("Northern Pomo", "pej", None, None, None, T::Extinct, S::Individual),
    ("Penchal", "pek", None, None, None, T::Living, S::Individual),
    ("Pekal", "pel", None, None, None, T::Living, S::Individual),
    ("Phende", "pem", None, None, None, T::Living, S::Individual),
    ("Old Persian (ca. 600-400 B.C.)", "peo", Some("peo"), Some("peo"), None, T::Historical, S::Individual),
    ("Kunja", "pep", None, None, None, T::Living, S::Individual),
    ("Southern Pomo", "peq", None, None, None, T::Living, S::Individual),
    ("Iranian Persian", "pes", None, None, None, T::Living, S::Individual),
    ("Pémono", "pev", None, None, None, T::Living, S::Individual),
    ("Petats", "pex", None, None, None, T::Living, S::Individual),
    ("Petjo", "pey", None, None, None, T::Living, S::Individual),
    ("Eastern Penan", "pez", None, None, None, T::Living, S::Individual),
    ("Pááfang", "pfa", None, None, None, T::Living, S::Individual),
    ("Pere", "pfe", None, None, None, T::Living, S::Individual),
    ("Pfaelzisch", "pfl", None, None, None, T::Living, S::Individual),
    ("Sudanese Creole Arabic", "pga", None, None, None, T::Living, S::Individual),
    ("Gāndhārī", "pgd", None, None, None, T::Historical, S::Individual),
    ("Pangwali", "pgg", None, None, None, T::Living, S::Individual),
    ("Pagi", "pgi", None, None, None, T::Living, S::Individual),
    ("Rerep", "pgk", None, None, None, T::Living, S::Individual),
    ("Primitive Irish", "pgl", None, None, None, T::Ancient, S::Individual),
    ("Paelignian", "pgn", None, None, None, T::Ancient, S::Individual),
    ("Pangseng", "pgs", None, None, None, T::Living, S::Individual),
    ("Pagu", "pgu", None, None, None, T::Living, S::Individual),
    ("Papua New Guinean Sign Language", "pgz", None, None, None, T::Living, S::Individual),
    ("Pa-Hng", "pha", None, None, None, T::Living, S::Individual),
    ("Phudagi", "phd", None, None, None, T::Living, S::Individual),
    ("Phuong", "phg", None, None, None, T::Living, S::Individual),
    ("Phukha", "phh", None, None, None, T::Living, S::Individual),
    ("Pahari", "phj", None, None, None, T::Living, S::Individual),
    ("Phake", "phk", None, None, None, T::Living, S::Individual),
    ("Phalura", "phl", None, None, None, T::Living, S::Individual),
    ("Phimbi", "phm", None, None, None, T::Living, S::Individual),
    ("Phoenician", "phn", Some("phn"), Some("phn"), None, T::Ancient, S::Individual),
    ("Phunoi", "pho", None, None, None, T::Living, S::Individual),
    ("Phana'", "phq", None, None, None, T::Living, S::Individual),
    ("Pahari-Potwari", "phr", None, None, None, T::Living, S::Individual),
    ("Phu Thai", "pht", None, None, None, T::Living, S::Individual),
    ("Phuan", "phu", None, None, None, T::Living, S::Individual),
    ("Pahlavani", "phv", None, None, None, T::Living, S::Individual),
    ("Phangduwali", "phw", None, None, None, T::Living, S::Individual),
    ("Pima Bajo", "pia", None, None, None, T::Living, S::Individual),
    ("Yine", "pib", None, None, None, T::Living, S::Individual),
    ("Pinji", "pic", None, None, None, T::Living, S::Individual),
    ("Piaroa", "pid", None, None, None, T::Living, S::Individual),
    ("Piro", "pie", None, None, None, T::Extinct, S::Individual),
    ("Pingelapese", "pif", None, None, None, T::Living, S::Individual),
    ("Pisabo", "pig", None, None, None, T::Living, S::Individual),
    ("Pitcairn-Norfolk", "pih", None, None, None, T::Living, S::Individual),
    ("Pijao", "pij", None, None, None, T::Extinct, S::Individual),
    ("Yom", "pil", None, None, None, T::Living, S::Individual),
    ("Powhatan", "pim", None, None, None, T::Extinct, S::Individual),
    ("Piame", "pin", None, None, None, T::Living, S::Individual),
    ("Piapoco", "pio", None, None, None, T::Living, S::Individual),
    ("Pero", "pip", None, None, None, T::Living, S::Individual),
    ("Piratapuyo", "pir", None, None, None, T::Living, S::Individual),
    ("Pijin", "pis", None, None, None, T::Living, S::Individual),
    ("Pitta Pitta", "pit", None, None, None, T::Extinct, S::Individual),
    ("Pintupi-Luritja", "piu", None, None, None, T::Living, S::Individual),
    ("Pileni", "piv", None, None, None, T::Living, S::Individual),
    ("Pimbwe", "piw", None, None, None, T::Living, S::Individual),
    ("Piu", "pix", None, None, None, T::Living, S::Individual),
    ("Piya-Kwonci", "piy", None, None, None, T::Living, S::Individual),
    ("Pije", "piz", None, None, None, T::Living, S::Individual),
    ("Pitjantjatjara", "pjt", None, None, None, T::Living, S::Individual),
    ("Ardhamāgadhī Prākrit", "pka", None, None, None, T::Historical, S::Individual),
    ("Pokomo", "pkb", None, None, None, T::Living, S::Individual),
    ("Paekche", "pkc", None, None, None, T::Ancient, S::Individual),
    ("Pak-Tong", "pkg", None, None, None, T::Living, S::Individual),
    ("Pankhu", "pkh", None, None, None, T::Living, S::Individual),
    ("Pakanha", "pkn", None, None, None, T::Living, S::Individual),
    ("Pökoot", "pko", None, None, None, T::Living, S::Individual),
    ("Pukapuka", "pkp", None, None, None, T::Living, S::Individual),
    ("Attapady Kurumba", "pkr", None, None, None, T::Living, S::Individual),
    ("Pakistan Sign Language", "pks", None, None, None, T::Living, S::Individual),
    ("Maleng", "pkt", None, None, None, T::Living, S::Individual),
    ("Paku", "pku", None, None, None, T::Living, S::Individual),
    ("Miani", "pla", None, None, None, T::Living, S::Individual),
    ("Polonombauk", "plb", None, None, None, T::Living, S::Individual),
    ("Central Palawano", "plc", None, None, None, T::Living, S::Individual),
    ("Polari", "pld", None, None, None, T::Living, S::Individual),
    ("Palu'e", "ple", None, None, None, T::Living, S::Individual),
    ("Pilagá", "plg", None, None, None, T::Living, S::Individual),
    ("Paulohi", "plh", None, None, None, T::Living, S::Individual),
    ("Pali", "pli", Some("pli"), Some("pli"), Some("pi"), T::Ancient, S::Individual),
    ("Polci", "plj", None, None, None, T::Living, S::Individual),
    ("Kohistani Shina", "plk", None, None, None, T::Living, S::Individual),
    ("Shwe Palaung", "pll", None, None, None, T::Living, S::Individual),
    ("Palenquero", "pln", None, None, None, T::Living, S::Individual),
    ("Oluta Popoluca", "plo", None, None, None, T::Living, S::Individual),
    ("Palaic", "plq", None, None, None, T::Ancient, S::Individual),
    ("Palaka Senoufo", "plr", None, None, None, T::Living, S::Individual),
    ("San Marcos Tlacoyalco Popoloca", "pls", None, None, None, T::Living, S::Individual),
    ("Plateau Malagasy", "plt", None, None, None, T::Living, S::Individual),
    ("Palikúr", "plu", None, None, None, T::Living, S::Individual),
    ("Southwest Palawano", "plv", None, None, None, T::Living, S::Individual),
    ("Brooke's Point Palawano", "plw", None, None, None, T::Living, S::Individual),
    ("Bolyu", "ply", None, None, None, T::Living, S::Individual),
    ("Paluan", "plz", None, None, None, T::Living, S::Individual),
    ("Paama", "pma", None, None, None, T::Living, S::Individual),
    ("Pambia", "pmb", None, None, None, T::Living, S::Individual),
    ("Pallanganmiddang", "pmd", None, None, None, T::Extinct, S::Individual),
    ("Pwaamei", "pme", None, None, None, T::Living, S::Individual),
    ("Pamona", "pmf", None, None, None, T::Living, S::Individual),
    ("Māhārāṣṭri Prākrit", "pmh", None, None, None, T::Historical, S::Individual),
    ("Northern Pumi", "pmi", None, None, None, T::Living, S::Individual),
    ("Southern Pumi", "pmj", None, None, None, T::Living, S::Individual),
    ("Pamlico", "pmk", None, None, None, T::Extinct, S::Individual),
    ("Lingua Franca", "pml", None, None, None, T::Extinct, S::Individual),
    ("Pomo", "pmm", None, None, None, T::Living, S::Individual),
    ("Pam", "pmn", None, None, None, T::Living, S::Individual),
    ("Pom", "pmo", None, None, None, T::Living, S::Individual),
    ("Northern Pame", "pmq", None, None, None, T::Living, S::Individual),
    ("Paynamar", "pmr", None, None, None, T::Living, S::Individual),
    ("Piemontese", "pms", None, None, None, T::Living, S::Individual),
    ("Tuamotuan", "pmt", None, None, None, T::Living, S::Individual),
    ("Plains Miwok", "pmw", None, None, None, T::Living, S::Individual),
    ("Poumei Naga", "pmx", None, None, None, T::Living, S::Individual),
    ("Papuan Malay", "pmy", None, None, None, T::Living, S::Individual),
    ("Southern Pame", "pmz", None, None, None, T::Extinct, S::Individual),
    ("Punan Bah-Biau", "pna", None, None, None, T::Living, S::Individual),
    ("Western Panjabi", "pnb", None, None, None, T::Living, S::Individual),
    ("Pannei", "pnc", None, None, None, T::Living, S::Individual),
    ("Mpinda", "pnd", None, None, None, T::Living, S::Individual),
    ("Western Penan", "pne", None, None, None, T::Living, S::Individual),
    ("Pangu", "png", None, None, None, T::Living, S::Individual),
    ("Penrhyn", "pnh", None, None, None, T::Living, S::Individual),
    ("Aoheng", "pni", None, None, None, T::Living, S::Individual),
    ("Pinjarup", "pnj", None, None, None, T::Extinct, S::Individual),
    ("Paunaka", "pnk", None, None, None, T::Living, S::Individual),
    ("Paleni", "pnl", None, None, None, T::Living, S::Individual),
    ("Punan Batu 1", "pnm", None, None, None, T::Living, S::Individual),
    ("Pinai-Hagahai", "pnn", None, None, None, T::Living, S::Individual),
    ("Panobo", "pno", None, None, None, T::Extinct, S::Individual),
    ("Pancana", "pnp", None, None, None, T::Living, S::Individual),
    ("Pana (Burkina Faso)", "pnq", None, None, None, T::Living, S::Individual),
    ("Panim", "pnr", None, None, None, T::Living, S::Individual),
    ("Ponosakan", "pns", None, None, None, T::Living, S::Individual),
    ("Pontic", "pnt", None, None, None, T::Living, S::Individual),
    ("Jiongnai Bunu", "pnu", None, None, None, T::Living, S::Individual),
    ("Pinigura", "pnv", None, None, None, T::Living, S::Individual),
    ("Banyjima", "pnw", None, None, None, T::Living, S::Individual),
    ("Phong-Kniang", "pnx", None, None, None, T::Living, S::Individual),
    ("Pinyin", "pny", None, None, None, T::Living, S::Individual),
    ("Pana (Central African Republic)", "pnz", None, None, None, T::Living, S::Individual),
    ("Poqomam", "poc", None, None, None, T::Living, S::Individual),
    ("San Juan Atzingo Popoloca", "poe", None, None, None, T::Living, S::Individual),
    ("Poke", "pof", None, None, None, T::Living, S::Individual),
    ("Potiguára", "pog", None, None, None, T::Extinct, S::Individual),
    ("Poqomchi'", "poh", None, None, None, T::Living, S::Individual),
    ("Highland Popoluca", "poi", None, None, None, T::Living, S::Individual),
    ("Pokangá", "pok", None, None, None, T::Living, S::Individual),
    ("Polish", "pol", Some("pol"), Some("pol"), Some("pl"), T::Living, S::Individual),
    ("Southeastern Pomo", "pom", None, None, None, T::Living, S::Individual),
    ("Pohnpeian", "pon", Some("pon"), Some("pon"), None, T::Living, S::Individual),
    ("Central Pomo", "poo", None, None, None, T::Extinct, S::Individual),
    ("Pwapwâ", "pop", None, None, None, T::Living, S::Individual),
    ("Texistepec Popoluca", "poq", None, None, None, T::Living, S::Individual),
    ("Portuguese", "por", Some("por"), Some("por"), Some("pt"), T::Living, S::Individual),
    ("Sayula Popoluca", "pos", None, None, None, T::Living, S::Individual),
    ("Potawatomi", "pot", None, None, None, T::Living, S::Individual),
    ("Upper Guinea Crioulo", "pov", None, None, None, T::Living, S::Individual),
    ("San Felipe Otlaltepec Popoloca", "pow", None, None, None, T::Living, S::Individual),
    ("Polabian", "pox", None, None, None, T::Extinct, S::Individual),
    ("Pogolo", "poy", None, None, None, T::Living, S::Individual),
    ("Papi", "ppe", None, None, None, T::Living, S::Individual),
    ("Paipai", "ppi", None, None, None, T::Living, S::Individual),
    ("Uma", "ppk", None, None, None, T::Living, S::Individual),
    ("Pipil", "ppl", None, None, None, T::Living, S::Individual),
    ("Papuma", "ppm", None, None, None, T::Living, S::Individual),
    ("Papapana", "ppn", None, None, None, T::Living, S::Individual),
    ("Folopa", "ppo", None, None, None, T::Living, S::Individual),
    ("Pelende", "ppp", None, None, None, T::Living, S::Individual),
    ("Pei", "ppq", None, None, None, T::Living, S::Individual),
    ("San Luís Temalacayuca Popoloca", "pps", None, None, None, T::Living, S::Individual),
    ("Pare", "ppt", None, None, None, T::Living, S::Individual),
    ("Papora", "ppu", None, None, None, T::Extinct, S::Individual),
    ("Pa'a", "pqa", None, None, None, T::Living, S::Individual),
    ("Malecite-Passamaquoddy", "pqm", None, None, None, T::Living, S::Individual),
    ("Parachi", "prc", None, None, None, T::Living, S::Individual),
    ("Parsi-Dari", "prd", None, None, None, T::Living, S::Individual),
    ("Principense", "pre", None, None, None, T::Living, S::Individual),
    ("Paranan", "prf", None, None, None, T::Living, S::Individual),
    ("Prussian", "prg", None, None, None, T::Living, S::Individual),
    ("Porohanon", "prh", None, None, None, T::Living, S::Individual),
    ("Paicî", "pri", None, None, None, T::Living, S::Individual),
    ("Parauk", "prk", None, None, None, T::Living, S::Individual),
    ("Peruvian Sign Language", "prl", None, None, None, T::Living, S::Individual),
    ("Kibiri", "prm", None, None, None, T::Living, S::Individual),
    ("Prasuni", "prn", None, None, None, T::Living, S::Individual),
    ("Old Provençal (to 1500)", "pro", Some("pro"), Some("pro"), None, T::Historical, S::Individual),
    ("Parsi", "prp", None, None, None, T::Living, S::Individual),
    ("Ashéninka Perené", "prq", None, None, None, T::Living, S::Individual),
    ("Puri", "prr", None, None, None, T::Extinct, S::Individual),
    ("Dari", "prs", None, None, None, T::Living, S::Individual),
    ("Phai", "prt", None, None, None, T::Living, S::Individual),
    ("Puragi", "pru", None, None, None, T::Living, S::Individual),
    ("Parawen", "prw", None, None, None, T::Living, S::Individual),
    ("Purik", "prx", None, None, None, T::Living, S::Individual),
    ("Providencia Sign Language", "prz", None, None, None, T::Living, S::Individual),
    ("Asue Awyu", "psa", None, None, None, T::Living, S::Individual),
    ("Iranian Sign Language", "psc", None, None, None, T::Living, S::Individual),
    ("Plains Indian Sign Language", "psd", None, None, None, T::Living, S::Individual),
    ("Central Malay", "pse", None, None, None, T::Living, S::Individual),
    ("Penang Sign Language", "psg", None, None, None, T::Living, S::Individual),
    ("Southwest Pashai", "psh", None, None, None, T::Living, S::Individual),
    ("Southeast Pashai", "psi", None, None, None, T::Living, S::Individual),
    ("Puerto Rican Sign Language", "psl", None, None, None, T::Living, S::Individual),
    ("Pauserna", "psm", None, None, None, T::Extinct, S::Individual),
    ("Panasuan", "psn", None, None, None, T::Living, S::Individual),
    ("Polish Sign Language", "pso", None, None, None, T::Living, S::Individual),
    ("Philippine Sign Language", "psp", None, None, None, T::Living, S::Individual),
    ("Pasi", "psq", None, None, None, T::Living, S::Individual),
    ("Portuguese Sign Language", "psr", None, None, None, T::Living, S::Individual),
    ("Kaulong", "pss", None, None, None, T::Living, S::Individual),
    ("Central Pashto", "pst", None, None, None, T::Living, S::Individual),
    ("Sauraseni Prākrit", "psu", None, None, None, T::Historical, S::Individual),
    ("Port Sandwich", "psw", None, None, None, T::Living, S::Individual),
    ("Piscataway", "psy", None, None, None, T::Extinct, S::Individual),
    ("Pai Tavytera", "pta", None, None, None, T::Living, S::Individual),
    ("Pataxó Hã-Ha-Hãe", "pth", None, None, None, T::Extinct, S::Individual),
    ("Pindiini", "pti", None, None, None, T::Living, S::Individual),
    ("Patani", "ptn", None, None, None, T::Living, S::Individual),
    ("Zo'é", "pto", None, None, None, T::Living, S::Individual),
    ("Patep", "ptp", None, None, None, T::Living, S::Individual),
    ("Pattapu", "ptq", None, None, None, T::Living, S::Individual),
    ("Piamatsina", "ptr", None, None, None, T::Living, S::Individual),
    ("Enrekang", "ptt", None, None, None, T::Living, S::Individual),
    ("Bambam", "ptu", None, None, None, T::Living, S::Individual),
    ("Port Vato", "ptv", None, None, None, T::Living, S::Individual),
    ("Pentlatch", "ptw", None, None, None, T::Extinct, S::Individual),
    ("Pathiya", "pty", None, None, None, T::Living, S::Individual),
    ("Western Highland Purepecha", "pua", None, None, None, T::Living, S::Individual),
    ("Purum", "pub", None, None, None, T::Living, S::Individual),
    ("Punan Merap", "puc", None, None, None, T::Living, S::Individual),
    ("Punan Aput", "pud", None, None, None, T::Living, S::Individual),
    ("Puelche", "pue", None, None, None, T::Extinct, S::Individual),
    ("Punan Merah", "puf", None, None, None, T::Living, S::Individual),
    ("Phuie", "pug", None, None, None, T::Living, S::Individual),
    ("Puinave", "pui", None, None, None, T::Living, S::Individual),
    ("Punan Tubu", "puj", None, None, None, T::Living, S::Individual),
    ("Puma", "pum", None, None, None, T::Living, S::Individual),
    ("Puoc", "puo", None, None, None, T::Living, S::Individual),
    ("Pulabu", "pup", None, None, None, T::Living, S::Individual),
    ("Puquina", "puq", None, None, None, T::Extinct, S::Individual),
    ("Puruborá", "pur", None, None, None, T::Living, S::Individual),
    ("Pushto", "pus", Some("pus"), Some("pus"), Some("ps"), T::Living, S::MacroLanguage),
    ("Putoh", "put", None, None, None, T::Living, S::Individual),
    ("Punu", "puu", None, None, None, T::Living, S::Individual),
    ("Puluwatese", "puw", None, None, None, T::Living, S::Individual),
    ("Puare", "pux", None, None, None, T::Living, S::Individual),
    ("Purisimeño", "puy", None, None, None, T::Extinct, S::Individual),
    ("Pawaia", "pwa", None, None, None, T::Living, S::Individual),
    ("Panawa", "pwb", None, None, None, T::Living, S::Individual),
    ("Gapapaiwa", "pwg", None, None, None, T::Living, S::Individual),
    ("Patwin", "pwi", None, None, None, T::Extinct, S::Individual),
    ("Molbog", "pwm", None, None, None, T::Living, S::Individual),
    ("Paiwan", "pwn", None, None, None, T::Living, S::Individual),
    ("Pwo Western Karen", "pwo", None, None, None, T::Living, S::Individual),
    ("Powari", "pwr", None, None, None, T::Living, S::Individual),
    ("Pwo Northern Karen", "pww", None, None, None, T::Living, S::Individual),
    ("Quetzaltepec Mixe", "pxm", None, None, None, T::Living, S::Individual),
    ("Pye Krumen", "pye", None, None, None, T::Living, S::Individual),
    ("Fyam", "pym", None, None, None, T::Living, S::Individual),
    ("Poyanáwa", "pyn", None, None, None, T::Living, S::Individual),
    ("Paraguayan Sign Language", "pys", None, None, None, T::Living, S::Individual),
    ("Puyuma", "pyu", None, None, None, T::Living, S::Individual),
    ("Pyu (Myanmar)", "pyx", None, None, None, T::Ancient, S::Individual),
    ("Pyen", "pyy", None, None, None, T::Living, S::Individual),
    ("Pazeh", "pzh", None, None, None, T::Living, S::Individual),
    ("Jejara Naga", "pzn", None, None, None, T::Living, S::Individual),
    ("Quapaw", "qua", None, None, None, T::Living, S::Individual),
    ("Huallaga Huánuco Quechua", "qub", None, None, None, T::Living, S::Individual),
    ("K'iche'", "quc", None, None, None, T::Living, S::Individual),
    ("Calderón Highland Quichua", "qud", None, None, None, T::Living, S::Individual),
    ("Quechua", "que", Some("que"), Some("que"), Some("qu"), T::Living, S::MacroLanguage),
    ("Lambayeque Quechua", "quf", None, None, None, T::Living, S::Individual),
    ("Chimborazo Highland Quichua", "qug", None, None, None, T::Living, S::Individual),
    ("South Bolivian Quechua", "quh", None, None, None, T::Living, S::Individual),
    ("Quileute", "qui", None, None, None, T::Living, S::Individual),
    ("Chachapoyas Quechua", "quk", None, None, None, T::Living, S::Individual),
    ("North Bolivian Quechua", "qul", None, None, None, T::Living, S::Individual),
    ("Sipacapense", "qum", None, None, None, T::Living, S::Individual),
    ("Quinault", "qun", None, None, None, T::Extinct, S::Individual),
    ("Southern Pastaza Quechua", "qup", None, None, None, T::Living, S::Individual),
    ("Quinqui", "quq", None, None, None, T::Living, S::Individual),
    ("Yanahuanca Pasco Quechua", "qur", None, None, None, T::Living, S::Individual),
    ("Santiago del Estero Quichua", "qus", None, None, None, T::Living, S::Individual),
    ("Sacapulteco", "quv", None, None, None, T::Living, S::Individual),
    ("Tena Lowland Quichua", "quw", None, None, None, T::Living, S::Individual),
    ("Yauyos Quechua", "qux", None, None, None, T::Living, S::Individual),
    ("Ayacucho Quechua", "quy", None, None, None, T::Living, S::Individual),
    ("Cusco Quechua", "quz", None, None, None, T::Living, S::Individual),
    ("Ambo-Pasco Quechua", "qva", None, None, None, T::Living, S::Individual),
    ("Cajamarca Quechua", "qvc", None, None, None, T::Living, S::Individual),
    ("Eastern Apurímac Quechua", "qve", None, None, None, T::Living, S::Individual),
    ("Huamalíes-Dos de Mayo Huánuco Quechua", "qvh", None, None, None, T::Living, S::Individual),
    ("Imbabura Highland Quichua", "qvi", None, None, None, T::Living, S::Individual),
    ("Loja Highland Quichua", "qvj", None, None, None, T::Living, S::Individual),
    ("Cajatambo North Lima Quechua", "qvl", None, None, None, T::Living, S::Individual),
    ("Margos-Yarowilca-Lauricocha Quechua", "qvm", None, None, None, T::Living, S::Individual),
    ("North Junín Quechua", "qvn", None, None, None, T::Living, S::Individual),
    ("Napo Lowland Quechua", "qvo", None, None, None, T::Living, S::Individual),
    ("Pacaraos Quechua", "qvp", None, None, None, T::Living, S::Individual),
    ("San Martín Quechua", "qvs", None, None, None, T::Living, S::Individual),
    ("Huaylla Wanca Quechua", "qvw", None, None, None, T::Living, S::Individual),
    ("Queyu", "qvy", None, None, None, T::Living, S::Individual),
    ("Northern Pastaza Quichua", "qvz", None, None, None, T::Living, S::Individual),
    ("Corongo Ancash Quechua", "qwa", None, None, None, T::Living, S::Individual),
    ("Classical Quechua", "qwc", None, None, None, T::Historical, S::Individual),
    ("Huaylas Ancash Quechua", "qwh", None, None, None, T::Living, S::Individual),
    ("Kuman (Russia)", "qwm", None, None, None, T::Extinct, S::Individual),
    ("Sihuas Ancash Quechua", "qws", None, None, None, T::Living, S::Individual),
    ("Kwalhioqua-Tlatskanai", "qwt", None, None, None, T::Extinct, S::Individual),
    ("Chiquián Ancash Quechua", "qxa", None, None, None, T::Living, S::Individual),
    ("Chincha Quechua", "qxc", None, None, None, T::Living, S::Individual),
    ("Panao Huánuco Quechua", "qxh", None, None, None, T::Living, S::Individual),
    ("Salasaca Highland Quichua", "qxl", None, None, None, T::Living, S::Individual),
    ("Northern Conchucos Ancash Quechua", "qxn", None, None, None, T::Living, S::Individual),
    ("Southern Conchucos Ancash Quechua", "qxo", None, None, None, T::Living, S::Individual),
    ("Puno Quechua", "qxp", None, None, None, T::Living, S::Individual),
    ("Qashqa'i", "qxq", None, None, None, T::Living, S::Individual),
    ("Cañar Highland Quichua", "qxr", None, None, None, T::Living, S::Individual),
    ("Southern Qiang", "qxs", None, None, None, T::Living, S::Individual),
    ("Santa Ana de Tusi Pasco Quechua", "qxt", None, None, None, T::Living, S::Individual),
    ("Arequipa-La Unión Quechua", "qxu", None, None, None, T::Living, S::Individual),
    ("Jauja Wanca Quechua", "qxw", None, None, None, T::Living, S::Individual),
    ("Quenya", "qya", None, None, None, T::Constructed, S::Individual),
    ("Quiripi", "qyp", None, None, None, T::Extinct, S::Individual),
    ("Dungmali", "raa", None, None, None, T::Living, S::Individual),
    ("Camling", "rab", None, None, None, T::Living, S::Individual),
    ("Rasawa", "rac", None, None, None, T::Living, S::Individual),
    ("Rade", "rad", None, None, None, T::Living, S::Individual),
    ("Western Meohang", "raf", None, None, None, T::Living, S::Individual),
    ("Logooli", "rag", None, None, None, T::Living, S::Individual),
    ("Rabha", "rah", None, None, None, T::Living, S::Individual),
    ("Ramoaaina", "rai", None, None, None, T::Living, S::Individual),
    ("Rajasthani", "raj", Some("raj"), Some("raj"), None, T::Living, S::MacroLanguage),
    ("Tulu-Bohuai", "rak", None, None, None, T::Living, S::Individual),
    ("Ralte", "ral", None, None, None, T::Living, S::Individual),
    ("Canela", "ram", None, None, None, T::Living, S::Individual),
    ("Riantana", "ran", None, None, None, T::Living, S::Individual),
    ("Rao", "rao", None, None, None, T::Living, S::Individual),
    ("Rapanui", "rap", Some("rap"), Some("rap"), None, T::Living, S::Individual),
    ("Saam", "raq", None, None, None, T::Living, S::Individual),
    ("Rarotongan", "rar", Some("rar"), Some("rar"), None, T::Living, S::Individual),
    ("Tegali", "ras", None, None, None, T::Living, S::Individual),
    ("Razajerdi", "rat", None, None, None, T::Living, S::Individual),
    ("Raute", "rau", None, None, None, T::Living, S::Individual),
    ("Sampang", "rav", None, None, None, T::Living, S::Individual),
    ("Rawang", "raw", None, None, None, T::Living, S::Individual),
    ("Rang", "rax", None, None, None, T::Living, S::Individual),
    ("Rapa", "ray", None, None, None, T::Living, S::Individual),
    ("Rahambuu", "raz", None, None, None, T::Living, S::Individual),
    ("Rumai Palaung", "rbb", None, None, None, T::Living, S::Individual),
    ("Northern Bontok", "rbk", None, None, None, T::Living, S::Individual),
    ("Miraya Bikol", "rbl", None, None, None, T::Living, S::Individual),
    ("Barababaraba", "rbp", None, None, None, T::Extinct, S::Individual),
    ("Réunion Creole French", "rcf", None, None, None, T::Living, S::Individual),
    ("Rudbari", "rdb", None, None, None, T::Living, S::Individual),
    ("Rerau", "rea", None, None, None, T::Living, S::Individual),
    ("Rembong", "reb", None, None, None, T::Living, S::Individual),
    ("Rejang Kayan", "ree", None, None, None, T::Living, S::Individual),
    ("Kara (Tanzania)", "reg", None, None, None, T::Living, S::Individual),
    ("Reli", "rei", None, None, None, T::Living, S::Individual),
    ("Rejang", "rej", None, None, None, T::Living, S::Individual),
    ("Rendille", "rel", None, None, None, T::Living, S::Individual),
    ("Remo", "rem", None, None, None, T::Extinct, S::Individual),
    ("Rengao", "ren", None, None, None, T::Living, S::Individual),
    ("Rer Bare", "rer", None, None, None, T::Extinct, S::Individual),
    ("Reshe", "res", None, None, None, T::Living, S::Individual),
    ("Retta", "ret", None, None, None, T::Living, S::Individual),
    ("Reyesano", "rey", None, None, None, T::Living, S::Individual),
    ("Roria", "rga", None, None, None, T::Living, S::Individual),
    ("Romano-Greek", "rge", None, None, None, T::Living, S::Individual),
    ("Rangkas", "rgk", None, None, None, T::Extinct, S::Individual),
    ("Romagnol", "rgn", None, None, None, T::Living, S::Individual),
    ("Resígaro", "rgr", None, None, None, T::Living, S::Individual),
    ("Southern Roglai", "rgs", None, None, None, T::Living, S::Individual),
    ("Ringgou", "rgu", None, None, None, T::Living, S::Individual),
    ("Rohingya", "rhg", None, None, None, T::Living, S::Individual),
    ("Yahang", "rhp", None, None, None, T::Living, S::Individual),
    ("Riang (India)", "ria", None, None, None, T::Living, S::Individual),
    ("Bribri Sign Language", "rib", None, None, None, T::Living, S::Individual),
    ("Tarifit", "rif", None, None, None, T::Living, S::Individual),
    ("Riang Lang", "ril", None, None, None, T::Living, S::Individual),
    ("Nyaturu", "rim", None, None, None, T::Living, S::Individual),
    ("Nungu", "rin", None, None, None, T::Living, S::Individual),
    ("Ribun", "rir", None, None, None, T::Living, S::Individual),
    ("Ritharrngu", "rit", None, None, None, T::Living, S::Individual),
    ("Riung", "riu", None, None, None, T::Living, S::Individual),
    ("Rajong", "rjg", None, None, None, T::Living, S::Individual),
    ("Raji", "rji", None, None, None, T::Living, S::Individual),
    ("Rajbanshi", "rjs", None, None, None, T::Living, S::Individual),
    ("Kraol", "rka", None, None, None, T::Living, S::Individual),
    ("Rikbaktsa", "rkb", None, None, None, T::Living, S::Individual),
    ("Rakahanga-Manihiki", "rkh", None, None, None, T::Living, S::Individual),
    ("Rakhine", "rki", None, None, None, T::Living, S::Individual),
    ("Marka", "rkm", None, None, None, T::Living, S::Individual),
    ("Rangpuri", "rkt", None, None, None, T::Living, S::Individual),
    ("Arakwal", "rkw", None, None, None, T::Extinct, S::Individual),
    ("Rama", "rma", None, None, None, T::Living, S::Individual),
    ("Rembarrnga", "rmb", None, None, None, T::Living, S::Individual),
    ("Carpathian Romani", "rmc", None, None, None, T::Living, S::Individual),
    ("Traveller Danish", "rmd", None, None, None, T::Extinct, S::Individual),
    ("Angloromani", "rme", None, None, None, T::Living, S::Individual),
    ("Kalo Finnish Romani", "rmf", None, None, None, T::Living, S::Individual),
    ("Traveller Norwegian", "rmg", None, None, None, T::Living, S::Individual),
    ("Murkim", "rmh", None, None, None, T::Living, S::Individual),
    ("Lomavren", "rmi", None, None, None, T::Living, S::Individual),
    ("Romkun", "rmk", None, None, None, T::Living, S::Individual),
    ("Baltic Romani", "rml", None, None, None, T::Living, S::Individual),
    ("Roma", "rmm", None, None, None, T::Living, S::Individual),
    ("Balkan Romani", "rmn", None, None, None, T::Living, S::Individual),
    ("Sinte Romani", "rmo", None, None, None, T::Living, S::Individual),
    ("Rempi", "rmp", None, None, None, T::Living, S::Individual),
    ("Caló", "rmq", None, None, None, T::Living, S::Individual),
    ("Romanian Sign Language", "rms", None, None, None, T::Living, S::Individual),
    ("Domari", "rmt", None, None, None, T::Living, S::Individual),
    ("Tavringer Romani", "rmu", None, None, None, T::Living, S::Individual),
    ("Romanova", "rmv", None, None, None, T::Constructed, S::Individual),
    ("Welsh Romani", "rmw", None, None, None, T::Living, S::Individual),
    ("Romam", "rmx", None, None, None, T::Living, S::Individual),
    ("Vlax Romani", "rmy", None, None, None, T::Living, S::Individual),
    ("Marma", "rmz", None, None, None, T::Living, S::Individual),
    ("Brunca Sign Language", "rnb", None, None, None, T::Living, S::Individual),
    ("Ruund", "rnd", None, None, None, T::Living, S::Individual),
    ("Ronga", "rng", None, None, None, T::Living, S::Individual),
    ("Ranglong", "rnl", None, None, None, T::Living, S::Individual),
    ("Roon", "rnn", None, None, None, T::Living, S::Individual),
    ("Rongpo", "rnp", None, None, None, T::Living, S::Individual),
    ("Nari Nari", "rnr", None, None, None, T::Extinct, S::Individual),
    ("Rungwa", "rnw", None, None, None, T::Living, S::Individual),
    ("Tae'", "rob", None, None, None, T::Living, S::Individual),
    ("Cacgia Roglai", "roc", None, None, None, T::Living, S::Individual),
    ("Rogo", "rod", None, None, None, T::Living, S::Individual),
    ("Ronji", "roe", None, None, None, T::Living, S::Individual),
    ("Rombo", "rof", None, None, None, T::Living, S::Individual),
    ("Northern Roglai", "rog", None, None, None, T::Living, S::Individual),
    ("Romansh", "roh", Some("roh"), Some("roh"), Some("rm"), T::Living, S::Individual),
    ("Romblomanon", "rol", None, None, None, T::Living, S::Individual),
    ("Romany", "rom", Some("rom"), Some("rom"), None, T::Living, S::MacroLanguage),
    ("Romanian", "ron", Some("rum"), Some("ron"), Some("ro"), T::Living, S::Individual),
    ("Rotokas", "roo", None, None, None, T::Living, S::Individual),
    ("Kriol", "rop", None, None, None, T::Living, S::Individual),
    ("Rongga", "ror", None, None, None, T::Living, S::Individual),
    ("Runga", "rou", None, None, None, T::Living, S::Individual),
    ("Dela-Oenale", "row", None, None, None, T::Living, S::Individual),
    ("Repanbitip", "rpn", None, None, None, T::Living, S::Individual),
    ("Rapting", "rpt", None, None, None, T::Living, S::Individual),
    ("Ririo", "rri", None, None, None, T::Living, S::Individual),
    ("Waima", "rro", None, None, None, T::Living, S::Individual),
    ("Arritinngithigh", "rrt", None, None, None, T::Extinct, S::Individual),
    ("Romano-Serbian", "rsb", None, None, None, T::Living, S::Individual),
    ("Ruthenian", "rsk", None, None, None, T::Living, S::Individual),
    ("Russian Sign Language", "rsl", None, None, None, T::Living, S::Individual),
    ("Miriwoong Sign Language", "rsm", None, None, None, T::Living, S::Individual),
    ("Rwandan Sign Language", "rsn", None, None, None, T::Living, S::Individual),
    ("Rungtu Chin", "rtc", None, None, None, T::Living, S::Individual),
    ("Ratahan", "rth", None, None, None, T::Living, S::Individual),
    ("Rotuman", "rtm", None, None, None, T::Living, S::Individual),
    ("Yurats", "rts", None, None, None, T::Extinct, S::Individual),
    ("Rathawi", "rtw", None, None, None, T::Living, S::Individual),
    ("Gungu", "rub", None, None, None, T::Living, S::Individual),
    ("Ruuli", "ruc", None, None, None, T::Living, S::Individual),
    ("Rusyn", "rue", None, None, None, T::Living, S::Individual),
    ("Luguru", "ruf", None, None, None, T::Living, S::Individual),
    ("Roviana", "rug", None, None, None, T::Living, S::Individual),
    ("Ruga", "ruh", None, None, None, T::Living, S::Individual),
    ("Rufiji", "rui", None, None, None, T::Living, S::Individual),
    ("Che", "ruk", None, None, None, T::Living, S::Individual),
    ("Rundi", "run", Some("run"), Some("run"), Some("rn"), T::Living, S::Individual),
    ("Istro Romanian", "ruo", None, None, None, T::Living, S::Individual),
    ("Macedo-Romanian", "rup", Some("rup"), Some("rup"), None, T::Living, S::Individual),
    ("Megleno Romanian", "ruq", None, None, None, T::Living, S::Individual),
    ("Russian", "rus", Some("rus"), Some("rus"), Some("ru"), T::Living, S::Individual),
    ("Rutul", "rut", None, None, None, T::Living, S::Individual),
    ("Lanas Lobu", "ruu", None, None, None, T::Living, S::Individual),
    ("Mala (Nigeria)", "ruy", None, None, None, T::Living, S::Individual),
    ("Ruma", "ruz", None, None, None, T::Living, S::Individual),
    ("Rawo", "rwa", None, None, None, T::Living, S::Individual),
    ("Rwa", "rwk", None, None, None, T::Living, S::Individual),
    ("Ruwila", "rwl", None, None, None, T::Living, S::Individual),
    ("Amba (Uganda)", "rwm", None, None, None, T::Living, S::Individual),
    ("Rawa", "rwo", None, None, None, T::Living, S::Individual),
    ("Marwari (India)", "rwr", None, None, None, T::Living, S::Individual),
    ("Ngardi", "rxd", None, None, None, T::Living, S::Individual),
    ("Karuwali", "rxw", None, None, None, T::Extinct, S::Individual),
    ("Northern Amami-Oshima", "ryn", None, None, None, T::Living, S::Individual),
    ("Yaeyama", "rys", None, None, None, T::Living, S::Individual),
    ("Central Okinawan", "ryu", None, None, None, T::Living, S::Individual),
    ("Rāziḥī", "rzh", None, None, None, T::Living, S::Individual),
    ("Saba", "saa", None, None, None, T::Living, S::Individual),
    ("Buglere", "sab", None, None, None, T::Living, S::Individual),
    ("Meskwaki", "sac", None, None, None, T::Living, S::Individual),
    ("Sandawe", "sad", Some("sad"), Some("sad"), None, T::Living, S::Individual),
    ("Sabanê", "sae", None, None, None, T::Living, S::Individual),
    ("Safaliba", "saf", None, None, None, T::Living, S::Individual),
    ("Sango", "sag", Some("sag"), Some("sag"), Some("sg"), T::Living, S::Individual),
    ("Yakut", "sah", Some("sah"), Some("sah"), None, T::Living, S::Individual),
    ("Sahu", "saj", None, None, None, T::Living, S::Individual),
    ("Sake", "sak", None, None, None, T::Living, S::Individual),
    ("Samaritan Aramaic", "sam", Some("sam"), Some("sam"), None, T::Extinct, S::Individual),
    ("Sanskrit", "san", Some("san"), Some("san"), Some("sa"), T::Ancient, S::Individual),
    ("Sause", "sao", None, None, None, T::Living, S::Individual),
    ("Samburu", "saq", None, None, None, T::Living, S::Individual),
    ("Saraveca", "sar", None, None, None, T::Extinct, S::Individual),
    ("Sasak", "sas", Some("sas"), Some("sas"), None, T::Living, S::Individual),
    ("Santali", "sat", Some("sat"), Some("sat"), None, T::Living, S::Individual),
    ("Saleman", "sau", None, None, None, T::Living, S::Individual),
    ("Saafi-Saafi", "sav", None, None, None, T::Living, S::Individual),
    ("Sawi", "saw", None, None, None, T::Living, S::Individual),
    ("Sa", "sax", None, None, None, T::Living, S::Individual),
    ("Saya", "say", None, None, None, T::Living, S::Individual),
    ("Saurashtra", "saz", None, None, None, T::Living, S::Individual),
    ("Ngambay", "sba", None, None, None, T::Living, S::Individual),
    ("Simbo", "sbb", None, None, None, T::Living, S::Individual),
    ("Kele (Papua New Guinea)", "sbc", None, None, None, T::Living, S::Individual),
    ("Southern Samo", "sbd", None, None, None, T::Living, S::Individual),
    ("Saliba", "sbe", None, None, None, T::Living, S::Individual),
    ("Chabu", "sbf", None, None, None, T::Living, S::Individual),
    ("Seget", "sbg", None, None, None, T::Living, S::Individual),
    ("Sori-Harengan", "sbh", None, None, None, T::Living, S::Individual),
    ("Seti", "sbi", None, None, None, T::Living, S::Individual),
    ("Surbakhal", "sbj", None, None, None, T::Living, S::Individual),
    ("Safwa", "sbk", None, None, None, T::Living, S::Individual),
    ("Botolan Sambal", "sbl", None, None, None, T::Living, S::Individual),
    ("Sagala", "sbm", None, None, None, T::Living, S::Individual),
    ("Sindhi Bhil", "sbn", None, None, None, T::Living, S::Individual),
    ("Sabüm", "sbo", None, None, None, T::Living, S::Individual),
    ("Sangu (Tanzania)", "sbp", None, None, None, T::Living, S::Individual),
    ("Sileibi", "sbq", None, None, None, T::Living, S::Individual),
    ("Sembakung Murut", "sbr", None, None, None, T::Living, S::Individual),
    ("Subiya", "sbs", None, None, None, T::Living, S::Individual),
    ("Kimki", "sbt", None, None, None, T::Living, S::Individual),
    ("Stod Bhoti", "sbu", None, None, None, T::Living, S::Individual),
    ("Sabine", "sbv", None, None, None, T::Ancient, S::Individual),
    ("Simba", "sbw", None, None, None, T::Living, S::Individual),
    ("Seberuang", "sbx", None, None, None, T::Living, S::Individual),
    ("Soli", "sby", None, None, None, T::Living, S::Individual),
    ("Sara Kaba", "sbz", None, None, None, T::Living, S::Individual),
    ("Chut", "scb", None, None, None, T::Living, S::Individual),
    ("Dongxiang", "sce", None, None, None, T::Living, S::Individual),
    ("San Miguel Creole French", "scf", None, None, None, T::Living, S::Individual),
    ("Sanggau", "scg", None, None, None, T::Living, S::Individual),
    ("Sakachep", "sch", None, None, None, T::Living, S::Individual),
    ("Sri Lankan Creole Malay", "sci", None, None, None, T::Living, S::Individual),
    ("Sadri", "sck", None, None, None, T::Living, S::Individual),
    ("Shina", "scl", None, None, None, T::Living, S::Individual),
    ("Sicilian", "scn", Some("scn"), Some("scn"), None, T::Living, S::Individual),
    ("Scots", "sco", Some("sco"), Some("sco"), None, T::Living, S::Individual),
    ("Hyolmo", "scp", None, None, None, T::Living, S::Individual),
    ("Sa'och", "scq", None, None, None, T::Living, S::Individual),
    ("North Slavey", "scs", None, None, None, T::Living, S::Individual),
    ("Southern Katang", "sct", None, None, None, T::Living, S::Individual),
    ("Shumcho", "scu", None, None, None, T::Living, S::Individual),
    ("Sheni", "scv", None, None, None, T::Living, S::Individual),
    ("Sha", "scw", None, None, None, T::Living, S::Individual),
    ("Sicel", "scx", None, None, None, T::Ancient, S::Individual),
    ("Toraja-Sa'dan", "sda", None, None, None, T::Living, S::Individual),
    ("Shabak", "sdb", None, None, None, T::Living, S::Individual),
    ("Sassarese Sardinian", "sdc", None, None, None, T::Living, S::Individual),
    ("Surubu", "sde", None, None, None, T::Living, S::Individual),
    ("Sarli", "sdf", None, None, None, T::Living, S::Individual),
    ("Savi", "sdg", None, None, None, T::Living, S::Individual),
    ("Southern Kurdish", "sdh", None, None, None, T::Living, S::Individual),
    ("Suundi", "sdj", None, None, None, T::Living, S::Individual),
    ("Sos Kundi", "sdk", None, None, None, T::Living, S::Individual),
    ("Saudi Arabian Sign Language", "sdl", None, None, None, T::Living, S::Individual),
    ("Gallurese Sardinian", "sdn", None, None, None, T::Living, S::Individual),
    ("Bukar-Sadung Bidayuh", "sdo", None, None, None, T::Living, S::Individual),
    ("Sherdukpen", "sdp", None, None, None, T::Living, S::Individual),
    ("Semandang", "sdq", None, None, None, T::Living, S::Individual),
    ("Oraon Sadri", "sdr", None, None, None, T::Living, S::Individual),
    ("Sened", "sds", None, None, None, T::Extinct, S::Individual),
    ("Shuadit", "sdt", None, None, None, T::Extinct, S::Individual),
    ("Sarudu", "sdu", None, None, None, T::Living, S::Individual),
    ("Sibu Melanau", "sdx", None, None, None, T::Living, S::Individual),
    ("Sallands", "sdz", None, None, None, T::Living, S::Individual),
    ("Semai", "sea", None, None, None, T::Living, S::Individual),
    ("Shempire Senoufo", "seb", None, None, None, T::Living, S::Individual),
    ("Sechelt", "sec", None, None, None, T::Living, S::Individual),
    ("Sedang", "sed", None, None, None, T::Living, S::Individual),
    ("Seneca", "see", None, None, None, T::Living, S::Individual),
    ("Cebaara Senoufo", "sef", None, None, None, T::Living, S::Individual),
    ("Segeju", "seg", None, None, None, T::Living, S::Individual),
    ("Sena", "seh", None, None, None, T::Living, S::Individual),
    ("Seri", "sei", None, None, None, T::Living, S::Individual),
    ("Sene", "sej", None, None, None, T::Living, S::Individual),
    ("Sekani", "sek", None, None, None, T::Living, S::Individual),
    ("Selkup", "sel", Some("sel"), Some("sel"), None, T::Living, S::Individual),
    ("Nanerigé Sénoufo", "sen", None, None, None, T::Living, S::Individual),
    ("Suarmin", "seo", None, None, None, T::Living, S::Individual),
    ("Sìcìté Sénoufo", "sep", None, None, None, T::Living, S::Individual),
    ("Senara Sénoufo", "seq", None, None, None, T::Living, S::Individual),
    ("Serrano", "ser", None, None, None, T::Living, S::Individual),
    ("Koyraboro Senni Songhai", "ses", None, None, None, T::Living, S::Individual),
    ("Sentani", "set", None, None, None, T::Living, S::Individual),
    ("Serui-Laut", "seu", None, None, None, T::Living, S::Individual),
    ("Nyarafolo Senoufo", "sev", None, None, None, T::Living, S::Individual),
    ("Sewa Bay", "sew", None, None, None, T::Living, S::Individual),
    ("Secoya", "sey", None, None, None, T::Living, S::Individual),
    ("Senthang Chin", "sez", None, None, None, T::Living, S::Individual),
    ("Langue des signes de Belgique Francophone", "sfb", None, None, None, T::Living, S::Individual),
    ("Eastern Subanen", "sfe", None, None, None, T::Living, S::Individual),
    ("Small Flowery Miao", "sfm", None, None, None, T::Living, S::Individual),
    ("South African Sign Language", "sfs", None, None, None, T::Living, S::Individual),
    ("Sehwi", "sfw", None, None, None, T::Living, S::Individual),
    ("Old Irish (to 900)", "sga", Some("sga"), Some("sga"), None, T::Historical, S::Individual),
    ("Mag-antsi Ayta", "sgb", None, None, None, T::Living, S::Individual),
    ("Kipsigis", "sgc", None, None, None, T::Living, S::Individual),
    ("Surigaonon", "sgd", None, None, None, T::Living, S::Individual),
    ("Segai", "sge", None, None, None, T::Living, S::Individual),
    ("Swiss-German Sign Language", "sgg", None, None, None, T::Living, S::Individual),
    ("Shughni", "sgh", None, None, None, T::Living, S::Individual),
    ("Suga", "sgi", None, None, None, T::Living, S::Individual),
    ("Surgujia", "sgj", None, None, None, T::Living, S::Individual),
    ("Sangkong", "sgk", None, None, None, T::Living, S::Individual),
    ("Singa", "sgm", None, None, None, T::Extinct, S::Individual),
    ("Singpho", "sgp", None, None, None, T::Living, S::Individual),
    ("Sangisari", "sgr", None, None, None, T::Living, S::Individual),
    ("Samogitian", "sgs", None, None, None, T::Living, S::Individual),
    ("Brokpake", "sgt", None, None, None, T::Living, S::Individual),
    ("Salas", "sgu", None, None, None, T::Living, S::Individual),
    ("Sebat Bet Gurage", "sgw", None, None, None, T::Living, S::Individual),
    ("Sierra Leone Sign Language", "sgx", None, None, None, T::Living, S::Individual),
    ("Sanglechi", "sgy", None, None, None, T::Living, S::Individual),
    ("Sursurunga", "sgz", None, None, None, T::Living, S::Individual),
    ("Shall-Zwall", "sha", None, None, None, T::Living, S::Individual),
    ("Ninam", "shb", None, None, None, T::Living, S::Individual),
    ("Sonde", "shc", None, None, None, T::Living, S::Individual),
    ("Kundal Shahi", "shd", None, None, None, T::Living, S::Individual),
    ("Sheko", "she", None, None, None, T::Living, S::Individual),
    ("Shua", "shg", None, None, None, T::Living, S::Individual),
    ("Shoshoni", "shh", None, None, None, T::Living, S::Individual),
    ("Tachelhit", "shi", None, None, None, T::Living, S::Individual),
    ("Shatt", "shj", None, None, None, T::Living, S::Individual),
    ("Shilluk", "shk", None, None, None, T::Living, S::Individual),
    ("Shendu", "shl", None, None, None, T::Living, S::Individual),
    ("Shahrudi", "shm", None, None, None, T::Living, S::Individual),
    ("Shan", "shn", Some("shn"), Some("shn"), None, T::Living, S::Individual),
    ("Shanga", "sho", None, None, None, T::Living, S::Individual),
    ("Shipibo-Conibo", "shp", None, None, None, T::Living, S::Individual),
    ("Sala", "shq", None, None, None, T::Living, S::Individual),
    ("Shi", "shr", None, None, None, T::Living, S::Individual),
    ("Shuswap", "shs", None, None, None, T::Living, S::Individual),
    ("Shasta", "sht", None, None, None, T::Extinct, S::Individual),
    ("Chadian Arabic", "shu", None, None, None, T::Living, S::Individual),
    ("Shehri", "shv", None, None, None, T::Living, S::Individual),
    ("Shwai", "shw", None, None, None, T::Living, S::Individual),
    ("She", "shx", None, None, None, T::Living, S::Individual),
    ("Tachawit", "shy", None, None, None, T::Living, S::Individual),
    ("Syenara Senoufo", "shz", None, None, None, T::Living, S::Individual),
    ("Akkala Sami", "sia", None, None, None, T::Extinct, S::Individual),
    ("Sebop", "sib", None, None, None, T::Living, S::Individual),
    ("Sidamo", "sid", Some("sid"), Some("sid"), None, T::Living, S::Individual),
    ("Simaa", "sie", None, None, None, T::Living, S::Individual),
    ("Siamou", "sif", None, None, None, T::Living, S::Individual),
    ("Paasaal", "sig", None, None, None, T::Living, S::Individual),
    ("Zire", "sih", None, None, None, T::Living, S::Individual),
    ("Shom Peng", "sii", None, None, None, T::Living, S::Individual),
    ("Numbami", "sij", None, None, None, T::Living, S::Individual),
    ("Sikiana", "sik", None, None, None, T::Living, S::Individual),
    ("Tumulung Sisaala", "sil", None, None, None, T::Living, S::Individual),
    ("Mende (Papua New Guinea)", "sim", None, None, None, T::Living, S::Individual),
    ("Sinhala", "sin", Some("sin"), Some("sin"), Some("si"), T::Living, S::Individual),
    ("Sikkimese", "sip", None, None, None, T::Living, S::Individual),
    ("Sonia", "siq", None, None, None, T::Living, S::Individual),
    ("Siri", "sir", None, None, None, T::Living, S::Individual),
    ("Siuslaw", "sis", None, None, None, T::Extinct, S::Individual),
    ("Sinagen", "siu", None, None, None, T::Living, S::Individual),
    ("Sumariup", "siv", None, None, None, T::Living, S::Individual),
    ("Siwai", "siw", None, None, None, T::Living, S::Individual),
    ("Sumau", "six", None, None, None, T::Living, S::Individual),
    ("Sivandi", "siy", None, None, None, T::Living, S::Individual),
    ("Siwi", "siz", None, None, None, T::Living, S::Individual),
    ("Epena", "sja", None, None, None, T::Living, S::Individual),
    ("Sajau Basap", "sjb", None, None, None, T::Living, S::Individual),
    ("Kildin Sami", "sjd", None, None, None, T::Living, S::Individual),
    ("Pite Sami", "sje", None, None, None, T::Living, S::Individual),
    ("Assangori", "sjg", None, None, None, T::Living, S::Individual),
    ("Kemi Sami", "sjk", None, None, None, T::Extinct, S::Individual),
    ("Sajalong", "sjl", None, None, None, T::Living, S::Individual),
    ("Mapun", "sjm", None, None, None, T::Living, S::Individual),
    ("Sindarin", "sjn", None, None, None, T::Constructed, S::Individual),
    ("Xibe", "sjo", None, None, None, T::Living, S::Individual),
    ("Surjapuri", "sjp", None, None, None, T::Living, S::Individual),
    ("Siar-Lak", "sjr", None, None, None, T::Living, S::Individual),
    ("Senhaja De Srair", "sjs", None, None, None, T::Extinct, S::Individual),
    ("Ter Sami", "sjt", None, None, None, T::Living, S::Individual),
    ("Ume Sami", "sju", None, None, None, T::Living, S::Individual),
    ("Shawnee", "sjw", None, None, None, T::Living, S::Individual),
    ("Skagit", "ska", None, None, None, T::Living, S::Individual),
    ("Saek", "skb", None, None, None, T::Living, S::Individual),
    ("Ma Manda", "skc", None, None, None, T::Living, S::Individual),
    ("Southern Sierra Miwok", "skd", None, None, None, T::Living, S::Individual),
    ("Seke (Vanuatu)", "ske", None, None, None, T::Living, S::Individual),
    ("Sakirabiá", "skf", None, None, None, T::Living, S::Individual),
    ("Sakalava Malagasy", "skg", None, None, None, T::Living, S::Individual),
    ("Sikule", "skh", None, None, None, T::Living, S::Individual),
    ("Sika", "ski", None, None, None, T::Living, S::Individual),
    ("Seke (Nepal)", "skj", None, None, None, T::Living, S::Individual),
    ("Kutong", "skm", None, None, None, T::Living, S::Individual),
    ("Kolibugan Subanon", "skn", None, None, None, T::Living, S::Individual),
    ("Seko Tengah", "sko", None, None, None, T::Living, S::Individual),
    ("Sekapan", "skp", None, None, None, T::Living, S::Individual),
    ("Sininkere", "skq", None, None, None, T::Living, S::Individual),
    ("Saraiki", "skr", None, None, None, T::Living, S::Individual),
    ("Maia", "sks", None, None, None, T::Living, S::Individual),
    ("Sakata", "skt", None, None, None, T::Living, S::Individual),
    ("Sakao", "sku", None, None, None, T::Living, S::Individual),
    ("Skou", "skv", None, None, None, T::Living, S::Individual),
    ("Skepi Creole Dutch", "skw", None, None, None, T::Extinct, S::Individual),
    ("Seko Padang", "skx", None, None, None, T::Living, S::Individual),
    ("Sikaiana", "sky", None, None, None, T::Living, S::Individual),
    ("Sekar", "skz", None, None, None, T::Living, S::Individual),
    ("Sáliba", "slc", None, None, None, T::Living, S::Individual),
    ("Sissala", "sld", None, None, None, T::Living, S::Individual),
    ("Sholaga", "sle", None, None, None, T::Living, S::Individual),
    ("Swiss-Italian Sign Language", "slf", None, None, None, T::Living, S::Individual),
    ("Selungai Murut", "slg", None, None, None, T::Living, S::Individual),
    ("Southern Puget Sound Salish", "slh", None, None, None, T::Living, S::Individual),
    ("Lower Silesian", "sli", None, None, None, T::Living, S::Individual),
    ("Salumá", "slj", None, None, None, T::Living, S::Individual),
    ("Slovak", "slk", Some("slo"), Some("slk"), Some("sk"), T::Living, S::Individual),
    ("Salt-Yui", "sll", None, None, None, T::Living, S::Individual),
    ("Pangutaran Sama", "slm", None, None, None, T::Living, S::Individual),
    ("Salinan", "sln", None, None, None, T::Extinct, S::Individual),
    ("Lamaholot", "slp", None, None, None, T::Living, S::Individual),
    ("Salchuq", "slq", None, None, None, T::Extinct, S::Individual),
    ("Salar", "slr", None, None, None, T::Living, S::Individual),
    ("Singapore Sign Language", "sls", None, None, None, T::Living, S::Individual),
    ("Sila", "slt", None, None, None, T::Living, S::Individual),
    ("Selaru", "slu", None, None, None, T::Living, S::Individual),
    ("Slovenian", "slv", Some("slv"), Some("slv"), Some("sl"), T::Living, S::Individual),
    ("Sialum", "slw", None, None, None, T::Living, S::Individual),
    ("Salampasu", "slx", None, None, None, T::Living, S::Individual),
    ("Selayar", "sly", None, None, None, T::Living, S::Individual),
    ("Ma'ya", "slz", None, None, None, T::Living, S::Individual),
    ("Southern Sami", "sma", Some("sma"), Some("sma"), None, T::Living, S::Individual),
    ("Simbari", "smb", None, None, None, T::Living, S::Individual),
    ("Som", "smc", None, None, None, T::Extinct, S::Individual),
    ("Northern Sami", "sme", Some("sme"), Some("sme"), Some("se"), T::Living, S::Individual),
    ("Auwe", "smf", None, None, None, T::Living, S::Individual),
    ("Simbali", "smg", None, None, None, T::Living, S::Individual),
    ("Samei", "smh", None, None, None, T::Living, S::Individual),
    ("Lule Sami", "smj", Some("smj"), Some("smj"), None, T::Living, S::Individual),
    ("Bolinao", "smk", None, None, None, T::Living, S::Individual),
    ("Central Sama", "sml", None, None, None, T::Living, S::Individual),
    ("Musasa", "smm", None, None, None, T::Living, S::Individual),
    ("Inari Sami", "smn", Some("smn"), Some("smn"), None, T::Living, S::Individual),
    ("Samoan", "smo", Some("smo"), Some("smo"), Some("sm"), T::Living, S::Individual),
    ("Samaritan", "smp", None, None, None, T::Extinct, S::Individual),
    ("Samo", "smq", None, None, None, T::Living, S::Individual),
    ("Simeulue", "smr", None, None, None, T::Living, S::Individual),
    ("Skolt Sami", "sms", Some("sms"), Some("sms"), None, T::Living, S::Individual),
    ("Simte", "smt", None, None, None, T::Living, S::Individual),
    ("Somray", "smu", None, None, None, T::Extinct, S::Individual),
    ("Samvedi", "smv", None, None, None, T::Living, S::Individual),
    ("Sumbawa", "smw", None, None, None, T::Living, S::Individual),
    ("Samba", "smx", None, None, None, T::Living, S::Individual),
    ("Semnani", "smy", None, None, None, T::Living, S::Individual),
    ("Simeku", "smz", None, None, None, T::Living, S::Individual),
    ("Shona", "sna", Some("sna"), Some("sna"), Some("sn"), T::Living, S::Individual),
    ("Sinaugoro", "snc", None, None, None, T::Living, S::Individual),
    ("Sindhi", "snd", Some("snd"), Some("snd"), Some("sd"), T::Living, S::Individual),
    ("Bau Bidayuh", "sne", None, None, None, T::Living, S::Individual),
    ("Noon", "snf", None, None, None, T::Living, S::Individual),
    ("Sanga (Democratic Republic of Congo)", "sng", None, None, None, T::Living, S::Individual),
    ("Sensi", "sni", None, None, None, T::Extinct, S::Individual),
    ("Riverain Sango", "snj", None, None, None, T::Living, S::Individual),
    ("Soninke", "snk", Some("snk"), Some("snk"), None, T::Living, S::Individual),
    ("Sangil", "snl", None, None, None, T::Living, S::Individual),
    ("Southern Ma'di", "snm", None, None, None, T::Living, S::Individual),
    ("Siona", "snn", None, None, None, T::Living, S::Individual),
    ("Snohomish", "sno", None, None, None, T::Living, S::Individual),
    ("Siane", "snp", None, None, None, T::Living, S::Individual),
    ("Sangu (Gabon)", "snq", None, None, None, T::Living, S::Individual),
    ("Sihan", "snr", None, None, None, T::Living, S::Individual),
    ("South West Bay", "sns", None, None, None, T::Living, S::Individual),
    ("Senggi", "snu", None, None, None, T::Living, S::Individual),
    ("Sa'ban", "snv", None, None, None, T::Living, S::Individual),
    ("Selee", "snw", None, None, None, T::Living, S::Individual),
    ("Sam", "snx", None, None, None, T::Living, S::Individual),
    ("Saniyo-Hiyewe", "sny", None, None, None, T::Living, S::Individual),
    ("Kou", "snz", None, None, None, T::Living, S::Individual),
    ("Thai Song", "soa", None, None, None, T::Living, S::Individual),
    ("Sobei", "sob", None, None, None, T::Living, S::Individual),
    ("So (Democratic Republic of Congo)", "soc", None, None, None, T::Living, S::Individual),
    ("Songoora", "sod", None, None, None, T::Living, S::Individual),
    ("Songomeno", "soe", None, None, None, T::Living, S::Individual),
    ("Sogdian", "sog", Some("sog"), Some("sog"), None, T::Ancient, S::Individual),
    ("Aka", "soh", None, None, None, T::Living, S::Individual),
    ("Sonha", "soi", None, None, None, T::Living, S::Individual),
    ("Soi", "soj", None, None, None, T::Living, S::Individual),
    ("Sokoro", "sok", None, None, None, T::Living, S::Individual),
    ("Solos", "sol", None, None, None, T::Living, S::Individual),
    ("Somali", "som", Some("som"), Some("som"), Some("so"), T::Living, S::Individual),
    ("Songo", "soo", None, None, None, T::Living, S::Individual),
    ("Songe", "sop", None, None, None, T::Living, S::Individual),
    ("Kanasi", "soq", None, None, None, T::Living, S::Individual),
    ("Somrai", "sor", None, None, None, T::Living, S::Individual),
    ("Seeku", "sos", None, None, None, T::Living, S::Individual),
    ("Southern Sotho", "sot", Some("sot"), Some("sot"), Some("st"), T::Living, S::Individual),
    ("Southern Thai", "sou", None, None, None, T::Living, S::Individual),
    ("Sonsorol", "sov", None, None, None, T::Living, S::Individual),
    ("Sowanda", "sow", None, None, None, T::Living, S::Individual),
    ("Swo", "sox", None, None, None, T::Living, S::Individual),
    ("Miyobe", "soy", None, None, None, T::Living, S::Individual),
    ("Temi", "soz", None, None, None, T::Living, S::Individual),
    ("Spanish", "spa", Some("spa"), Some("spa"), Some("es"), T::Living, S::Individual),
    ("Sepa (Indonesia)", "spb", None, None, None, T::Living, S::Individual),
    ("Sapé", "spc", None, None, None, T::Living, S::Individual),
    ("Saep", "spd", None, None, None, T::Living, S::Individual),
    ("Sepa (Papua New Guinea)", "spe", None, None, None, T::Living, S::Individual),
    ("Sian", "spg", None, None, None, T::Living, S::Individual),
    ("Saponi", "spi", None, None, None, T::Living, S::Individual),
    ("Sengo", "spk", None, None, None, T::Living, S::Individual),
    ("Selepet", "spl", None, None, None, T::Living, S::Individual),
    ("Akukem", "spm", None, None, None, T::Living, S::Individual),
    ("Sanapaná", "spn", None, None, None, T::Living, S::Individual),
    ("Spokane", "spo", None, None, None, T::Living, S::Individual),
    ("Supyire Senoufo", "spp", None, None, None, T::Living, S::Individual),
    ("Loreto-Ucayali Spanish", "spq", None, None, None, T::Living, S::Individual),
    ("Saparua", "spr", None, None, None, T::Living, S::Individual),
    ("Saposa", "sps", None, None, None, T::Living, S::Individual),
    ("Spiti Bhoti", "spt", None, None, None, T::Living, S::Individual),
    ("Sapuan", "spu", None, None, None, T::Living, S::Individual),
    ("Sambalpuri", "spv", None, None, None, T::Living, S::Individual),
    ("South Picene", "spx", None, None, None, T::Ancient, S::Individual),
    ("Sabaot", "spy", None, None, None, T::Living, S::Individual),
    ("Shama-Sambuga", "sqa", None, None, None, T::Living, S::Individual),
    ("Shau", "sqh", None, None, None, T::Living, S::Individual),
    ("Albanian", "sqi", Some("alb"), Some("sqi"), Some("sq"), T::Living, S::MacroLanguage),
    ("Albanian Sign Language", "sqk", None, None, None, T::Living, S::Individual),
    ("Suma", "sqm", None, None, None, T::Living, S::Individual),
    ("Susquehannock", "sqn", None, None, None, T::Extinct, S::Individual),
    ("Sorkhei", "sqo", None, None, None, T::Living, S::Individual),
    ("Sou", "sqq", None, None, None, T::Living, S::Individual),
    ("Siculo Arabic", "sqr", None, None, None, T::Historical, S::Individual),
    ("Sri Lankan Sign Language", "sqs", None, None, None, T::Living, S::Individual),
    ("Soqotri", "sqt", None, None, None, T::Living, S::Individual),
    ("Squamish", "squ", None, None, None, T::Living, S::Individual),
    ("Kufr Qassem Sign Language (KQSL)", "sqx", None, None, None, T::Living, S::Individual),
    ("Saruga", "sra", None, None, None, T::Living, S::Individual),
    ("Sora", "srb", None, None, None, T::Living, S::Individual),
    ("Logudorese Sardinian", "src", None, None, None, T::Living, S::Individual),
    ("Sardinian", "srd", Some("srd"), Some("srd"), Some("sc"), T::Living, S::MacroLanguage),
    ("Sara", "sre", None, None, None, T::Living, S::Individual),
    ("Nafi", "srf", None, None, None, T::Living, S::Individual),
    ("Sulod", "srg", None, None, None, T::Living, S::Individual),
    ("Sarikoli", "srh", None, None, None, T::Living, S::Individual),
    ("Siriano", "sri", None, None, None, T::Living, S::Individual),
    ("Serudung Murut", "srk", None, None, None, T::Living, S::Individual),
    ("Isirawa", "srl", None, None, None, T::Living, S::Individual),
    ("Saramaccan", "srm", None, None, None, T::Living, S::Individual),
    ("Sranan Tongo", "srn", Some("srn"), Some("srn"), None, T::Living, S::Individual),
    ("Campidanese Sardinian", "sro", None, None, None, T::Living, S::Individual),
    ("Serbian", "srp", Some("srp"), Some("srp"), Some("sr"), T::Living, S::Individual),
    ("Sirionó", "srq", None, None, None, T::Living, S::Individual),
    ("Serer", "srr", Some("srr"), Some("srr"), None, T::Living, S::Individual),
    ("Sarsi", "srs", None, None, None, T::Living, S::Individual),
    ("Sauri", "srt", None, None, None, T::Living, S::Individual),
    ("Suruí", "sru", None, None, None, T::Living, S::Individual),
    ("Southern Sorsoganon", "srv", None, None, None, T::Living, S::Individual),
    ("Serua", "srw", None, None, None, T::Living, S::Individual),
    ("Sirmauri", "srx", None, None, None, T::Living, S::Individual),
    ("Sera", "sry", None, None, None, T::Living, S::Individual),
    ("Shahmirzadi", "srz", None, None, None, T::Living, S::Individual),
    ("Southern Sama", "ssb", None, None, None, T::Living, S::Individual),
    ("Suba-Simbiti", "ssc", None, None, None, T::Living, S::Individual),
    ("Siroi", "ssd", None, None, None, T::Living, S::Individual),
    ("Balangingi", "sse", None, None, None, T::Living, S::Individual),
    ("Thao", "ssf", None, None, None, T::Living, S::Individual),
    ("Seimat", "ssg", None, None, None, T::Living, S::Individual),
    ("Shihhi Arabic", "ssh", None, None, None, T::Living, S::Individual),
    ("Sansi", "ssi", None, None, None, T::Living, S::Individual),
    ("Sausi", "ssj", None, None, None, T::Living, S::Individual),
    ("Sunam", "ssk", None, None, None, T::Living, S::Individual),
    ("Western Sisaala", "ssl", None, None, None, T::Living, S::Individual),
    ("Semnam", "ssm", None, None, None, T::Living, S::Individual),
    ("Waata", "ssn", None, None, None, T::Living, S::Individual),
    ("Sissano", "sso", None, None, None, T::Living, S::Individual),
    ("Spanish Sign Language", "ssp", None, None, None, T::Living, S::Individual),
    ("So'a", "ssq", None, None, None, T::Living, S::Individual),
    ("Swiss-French Sign Language", "ssr", None, None, None, T::Living, S::Individual),
    ("Sô", "sss", None, None, None, T::Living, S::Individual),
    ("Sinasina", "sst", None, None, None, T::Living, S::Individual),
    ("Susuami", "ssu", None, None, None, T::Living, S::Individual),
    ("Shark Bay", "ssv", None, None, None, T::Living, S::Individual),
    ("Swati", "ssw", Some("ssw"), Some("ssw"), Some("ss"), T::Living, S::Individual),
    ("Samberigi", "ssx", None, None, None, T::Living, S::Individual),
    ("Saho", "ssy", None, None, None, T::Living, S::Individual),
    ("Sengseng", "ssz", None, None, None, T::Living, S::Individual),
    ("Settla", "sta", None, None, None, T::Living, S::Individual),
    ("Northern Subanen", "stb", None, None, None, T::Living, S::Individual),
    ("Sentinel", "std", None, None, None, T::Living, S::Individual),
    ("Liana-Seti", "ste", None, None, None, T::Living, S::Individual),
    ("Seta", "stf", None, None, None, T::Living, S::Individual),
    ("Trieng", "stg", None, None, None, T::Living, S::Individual),
    ("Shelta", "sth", None, None, None, T::Living, S::Individual),
    ("Bulo Stieng", "sti", None, None, None, T::Living, S::Individual),
    ("Matya Samo", "stj", None, None, None, T::Living, S::Individual),
    ("Arammba", "stk", None, None, None, T::Living, S::Individual),
    ("Stellingwerfs", "stl", None, None, None, T::Living, S::Individual),
    ("Setaman", "stm", None, None, None, T::Living, S::Individual),
    ("Owa", "stn", None, None, None, T::Living, S::Individual),
    ("Stoney", "sto", None, None, None, T::Living, S::Individual),
    ("Southeastern Tepehuan", "stp", None, None, None, T::Living, S::Individual),
    ("Saterfriesisch", "stq", None, None, None, T::Living, S::Individual),
    ("Straits Salish", "str", None, None, None, T::Living, S::Individual),
    ("Shumashti", "sts", None, None, None, T::Living, S::Individual),
    ("Budeh Stieng", "stt", None, None, None, T::Living, S::Individual),
    ("Samtao", "stu", None, None, None, T::Living, S::Individual),
    ("Silt'e", "stv", None, None, None, T::Living, S::Individual),
    ("Satawalese", "stw", None, None, None, T::Living, S::Individual),
    ("Siberian Tatar", "sty", None, None, None, T::Living, S::Individual),
    ("Sulka", "sua", None, None, None, T::Living, S::Individual),
    ("Suku", "sub", None, None, None, T::Living, S::Individual),
    ("Western Subanon", "suc", None, None, None, T::Living, S::Individual),
    ("Suena", "sue", None, None, None, T::Living, S::Individual),
    ("Suganga", "sug", None, None, None, T::Living, S::Individual),
    ("Suki", "sui", None, None, None, T::Living, S::Individual),
    ("Shubi", "suj", None, None, None, T::Living, S::Individual),
    ("Sukuma", "suk", Some("suk"), Some("suk"), None, T::Living, S::Individual),
    ("Sundanese", "sun", Some("sun"), Some("sun"), Some("su"), T::Living, S::Individual),
    ("Bouni", "suo", None, None, None, T::Living, S::Individual),
    ("Tirmaga-Chai Suri", "suq", None, None, None, T::Living, S::Individual),
    ("Mwaghavul", "sur", None, None, None, T::Living, S::Individual),
    ("Susu", "sus", Some("sus"), Some("sus"), None, T::Living, S::Individual),
    ("Subtiaba", "sut", None, None, None, T::Extinct, S::Individual),
    ("Puroik", "suv", None, None, None, T::Living, S::Individual),
    ("Sumbwa", "suw", None, None, None, T::Living, S::Individual),
    ("Sumerian", "sux", Some("sux"), Some("sux"), None, T::Ancient, S::Individual),
    ("Suyá", "suy", None, None, None, T::Living, S::Individual),
    ("Sunwar", "suz", None, None, None, T::Living, S::Individual),
    ("Svan", "sva", None, None, None, T::Living, S::Individual),
    ("Ulau-Suain", "svb", None, None, None, T::Living, S::Individual),
    ("Vincentian Creole English", "svc", None, None, None, T::Living, S::Individual),
    ("Serili", "sve", None, None, None, T::Living, S::Individual),
    ("Slovakian Sign Language", "svk", None, None, None, T::Living, S::Individual),
    ("Slavomolisano", "svm", None, None, None, T::Living, S::Individual),
    ("Savosavo", "svs", None, None, None, T::Living, S::Individual),
    ("Skalvian", "svx", None, None, None, T::Historical, S::Individual),
    ("Swahili (macrolanguage)", "swa", Some("swa"), Some("swa"), Some("sw"), T::Living, S::MacroLanguage),
    ("Maore Comorian", "swb", None, None, None, T::Living, S::Individual),
    ("Congo Swahili", "swc", None, None, None, T::Living, S::Individual),
    ("Swedish", "swe", Some("swe"), Some("swe"), Some("sv"), T::Living, S::Individual),
    ("Sere", "swf", None, None, None, T::Living, S::Individual),
    ("Swabian", "swg", None, None, None, T::Living, S::Individual),
    ("Swahili (individual language)", "swh", None, None, None, T::Living, S::Individual),
    ("Sui", "swi", None, None, None, T::Living, S::Individual),
    ("Sira", "swj", None, None, None, T::Living, S::Individual),
    ("Malawi Sena", "swk", None, None, None, T::Living, S::Individual),
    ("Swedish Sign Language", "swl", None, None, None, T::Living, S::Individual),
    ("Samosa", "swm", None, None, None, T::Living, S::Individual),
    ("Sawknah", "swn", None, None, None, T::Living, S::Individual),
    ("Shanenawa", "swo", None, None, None, T::Living, S::Individual),
    ("Suau", "swp", None, None, None, T::Living, S::Individual),
    ("Sharwa", "swq", None, None, None, T::Living, S::Individual),
    ("Saweru", "swr", None, None, None, T::Living, S::Individual),
    ("Seluwasan", "sws", None, None, None, T::Living, S::Individual),
    ("Sawila", "swt", None, None, None, T::Living, S::Individual),
    ("Suwawa", "swu", None, None, None, T::Living, S::Individual),
    ("Shekhawati", "swv", None, None, None, T::Living, S::Individual),
    ("Sowa", "sww", None, None, None, T::Extinct, S::Individual),
    ("Suruahá", "swx", None, None, None, T::Living, S::Individual),
    ("Sarua", "swy", None, None, None, T::Living, S::Individual),
    ("Suba", "sxb", None, None, None, T::Living, S::Individual),
    ("Sicanian", "sxc", None, None, None, T::Ancient, S::Individual),
    ("Sighu", "sxe", None, None, None, T::Living, S::Individual),
    ("Shuhi", "sxg", None, None, None, T::Living, S::Individual),
    ("Southern Kalapuya", "sxk", None, None, None, T::Extinct, S::Individual),
    ("Selian", "sxl", None, None, None, T::Extinct, S::Individual),
    ("Samre", "sxm", None, None, None, T::Living, S::Individual),
    ("Sangir", "sxn", None, None, None, T::Living, S::Individual),
    ("Sorothaptic", "sxo", None, None, None, T::Ancient, S::Individual),
    ("Saaroa", "sxr", None, None, None, T::Living, S::Individual),
    ("Sasaru", "sxs", None, None, None, T::Living, S::Individual),
    ("Upper Saxon", "sxu", None, None, None, T::Living, S::Individual),
    ("Saxwe Gbe", "sxw", None, None, None, T::Living, S::Individual),
    ("Siang", "sya", None, None, None, T::Living, S::Individual),
    ("Central Subanen", "syb", None, None, None, T::Living, S::Individual),
    ("Classical Syriac", "syc", Some("syc"), Some("syc"), None, T::Historical, S::Individual),
    ("Seki", "syi", None, None, None, T::Living, S::Individual),
    ("Sukur", "syk", None, None, None, T::Living, S::Individual),
    ("Sylheti", "syl", None, None, None, T::Living, S::Individual),
    ("Maya Samo", "sym", None, None, None, T::Living, S::Individual),
    ("Senaya", "syn", None, None, None, T::Living, S::Individual),
    ("Suoy", "syo", None, None, None, T::Living, S::Individual),
    ("Syriac", "syr", Some("syr"), Some("syr"), None, T::Living, S::MacroLanguage),
    ("Sinyar", "sys", None, None, None, T::Living, S::Individual),
    ("Kagate", "syw", None, None, None, T::Living, S::Individual),
    ("Samay", "syx", None, None, None, T::Living, S::Individual),
    ("Al-Sayyid Bedouin Sign Language", "syy", None, None, None, T::Living, S::Individual),
    ("Semelai", "sza", None, None, None, T::Living, S::Individual),
    ("Ngalum", "szb", None, None, None, T::Living, S::Individual),
    ("Semaq Beri", "szc", None, None, None, T::Living, S::Individual),
    ("Seru", "szd", None, None, None, T::Extinct, S::Individual),
    ("Seze", "sze", None, None, None, T::Living, S::Individual),
    ("Sengele", "szg", None, None, None, T::Living, S::Individual),
    ("Silesian", "szl", None, None, None, T::Living, S::Individual),
    ("Sula", "szn", None, None, None, T::Living, S::Individual),
    ("Suabo", "szp", None, None, None, T::Living, S::Individual),
    ("Solomon Islands Sign Language", "szs", None, None, None, T::Living, S::Individual),
    ("Isu (Fako Division)", "szv", None, None, None, T::Living, S::Individual),
    ("Sawai", "szw", None, None, None, T::Living, S::Individual),
    ("Sakizaya", "szy", None, None, None, T::Living, S::Individual),
    ("Lower Tanana", "taa", None, None, None, T::Living, S::Individual),
    ("Tabassaran", "tab", None, None, None, T::Living, S::Individual),
    ("Lowland Tarahumara", "tac", None, None, None, T::Living, S::Individual),
    ("Tause", "tad", None, None, None, T::Living, S::Individual),
    ("Tariana", "tae", None, None, None, T::Living, S::Individual),
    ("Tapirapé", "taf", None, None, None, T::Living, S::Individual),
    ("Tagoi", "tag", None, None, None, T::Living, S::Individual),
    ("Tahitian", "tah", Some("tah"), Some("tah"), Some("ty"), T::Living, S::Individual),
    ("Eastern Tamang", "taj", None, None, None, T::Living, S::Individual),
    ("Tala", "tak", None, None, None, T::Living, S::Individual),
    ("Tal", "tal", None, None, None, T::Living, S::Individual),
    ("Tamil", "tam", Some("tam"), Some("tam"), Some("ta"), T::Living, S::Individual),
    ("Tangale", "tan", None, None, None, T::Living, S::Individual),
    ("Yami", "tao", None, None, None, T::Living, S::Individual),
    ("Taabwa", "tap", None, None, None, T::Living, S::Individual),
    ("Tamasheq", "taq", None, None, None, T::Living, S::Individual),
    ("Central Tarahumara", "tar", None, None, None, T::Living, S::Individual),
    ("Tay Boi", "tas", None, None, None, T::Extinct, S::Individual),
    ("Tatar", "tat", Some("tat"), Some("tat"), Some("tt"), T::Living, S::Individual),
    ("Upper Tanana", "tau", None, None, None, T::Living, S::Individual),
    ("Tatuyo", "tav", None, None, None, T::Living, S::Individual),
    ("Tai", "taw", None, None, None, T::Living, S::Individual),
    ("Tamki", "tax", None, None, None, T::Living, S::Individual),
    ("Atayal", "tay", None, None, None, T::Living, S::Individual),
    ("Tocho", "taz", None, None, None, T::Living, S::Individual),
    ("Aikanã", "tba", None, None, None, T::Living, S::Individual),
    ("Takia", "tbc", None, None, None, T::Living, S::Individual),
    ("Kaki Ae", "tbd", None, None, None, T::Living, S::Individual),
    ("Tanimbili", "tbe", None, None, None, T::Living, S::Individual),
    ("Mandara", "tbf", None, None, None, T::Living, S::Individual),
    ("North Tairora", "tbg", None, None, None, T::Living, S::Individual),
    ("Dharawal", "tbh", None, None, None, T::Extinct, S::Individual),
    ("Gaam", "tbi", None, None, None, T::Living, S::Individual),
    ("Tiang", "tbj", None, None, None, T::Living, S::Individual),
    ("Calamian Tagbanwa", "tbk", None, None, None, T::Living, S::Individual),
    ("Tboli", "tbl", None, None, None, T::Living, S::Individual),
    ("Tagbu", "tbm", None, None, None, T::Living, S::Individual),
    ("Barro Negro Tunebo", "tbn", None, None, None, T::Living, S::Individual),
    ("Tawala", "tbo", None, None, None, T::Living, S::Individual),
    ("Taworta", "tbp", None, None, None, T::Living, S::Individual),
    ("Tumtum", "tbr", None, None, None, T::Living, S::Individual),
    ("Tanguat", "tbs", None, None, None, T::Living, S::Individual),
    ("Tembo (Kitembo)", "tbt", None, None, None, T::Living, S::Individual),
    ("Tubar", "tbu", None, None, None, T::Extinct, S::Individual),
    ("Tobo", "tbv", None, None, None, T::Living, S::Individual),
    ("Tagbanwa", "tbw", None, None, None, T::Living, S::Individual),
    ("Kapin", "tbx", None, None, None, T::Living, S::Individual),
    ("Tabaru", "tby", None, None, None, T::Living, S::Individual),
    ("Ditammari", "tbz", None, None, None, T::Living, S::Individual),
    ("Ticuna", "tca", None, None, None, T::Living, S::Individual),
    ("Tanacross", "tcb", None, None, None, T::Living, S::Individual),
    ("Datooga", "tcc", None, None, None, T::Living, S::Individual),
    ("Tafi", "tcd", None, None, None, T::Living, S::Individual),
    ("Southern Tutchone", "tce", None, None, None, T::Living, S::Individual),
    ("Malinaltepec Me'phaa", "tcf", None, None, None, T::Living, S::Individual),
    ("Tamagario", "tcg", None, None, None, T::Living, S::Individual),
    ("Turks And Caicos Creole English", "tch", None, None, None, T::Living, S::Individual),
    ("Wára", "tci", None, None, None, T::Living, S::Individual),
    ("Tchitchege", "tck", None, None, None, T::Living, S::Individual),
    ("Taman (Myanmar)", "tcl", None, None, None, T::Extinct, S::Individual),
    ("Tanahmerah", "tcm", None, None, None, T::Living, S::Individual),
    ("Tichurong", "tcn", None, None, None, T::Living, S::Individual),
    ("Taungyo", "tco", None, None, None, T::Living, S::Individual),
    ("Tawr Chin", "tcp", None, None, None, T::Living, S::Individual),
    ("Kaiy", "tcq", None, None, None, T::Living, S::Individual),
    ("Torres Strait Creole", "tcs", None, None, None, T::Living, S::Individual),
    ("T'en", "tct", None, None, None, T::Living, S::Individual),
    ("Southeastern Tarahumara", "tcu", None, None, None, T::Living, S::Individual),
    ("Tecpatlán Totonac", "tcw", None, None, None, T::Living, S::Individual),
    ("Toda", "tcx", None, None, None, T::Living, S::Individual),
    ("Tulu", "tcy", None, None, None, T::Living, S::Individual),
    ("Thado Chin", "tcz", None, None, None, T::Living, S::Individual),
    ("Tagdal", "tda", None, None, None, T::Living, S::Individual),
    ("Panchpargania", "tdb", None, None, None, T::Living, S::Individual),
    ("Emberá-Tadó", "tdc", None, None, None, T::Living, S::Individual),
    ("Tai Nüa", "tdd", None, None, None, T::Living, S::Individual),
    ("Tiranige Diga Dogon", "tde", None, None, None, T::Living, S::Individual),
    ("Talieng", "tdf", None, None, None, T::Living, S::Individual),
    ("Western Tamang", "tdg", None, None, None, T::Living, S::Individual),
    ("Thulung", "tdh", None, None, None, T::Living, S::Individual),
    ("Tomadino", "tdi", None, None, None, T::Living, S::Individual),
    ("Tajio", "tdj", None, None, None, T::Living, S::Individual),
    ("Tambas", "tdk", None, None, None, T::Living, S::Individual),
    ("Sur", "tdl", None, None, None, T::Living, S::Individual),
    ("Taruma", "tdm", None, None, None, T::Living, S::Individual),
    ("Tondano", "tdn", None, None, None, T::Living, S::Individual),
    ("Teme", "tdo", None, None, None, T::Living, S::Individual),
    ("Tita", "tdq", None, None, None, T::Living, S::Individual),
    ("Todrah", "tdr", None, None, None, T::Living, S::Individual),
    ("Doutai", "tds", None, None, None, T::Living, S::Individual),
    ("Tetun Dili", "tdt", None, None, None, T::Living, S::Individual),
    ("Toro", "tdv", None, None, None, T::Living, S::Individual),
    ("Tandroy-Mahafaly Malagasy", "tdx", None, None, None, T::Living, S::Individual),
    ("Tadyawan", "tdy", None, None, None, T::Living, S::Individual),
    ("Temiar", "tea", None, None, None, T::Living, S::Individual),
    ("Tetete", "teb", None, None, None, T::Extinct, S::Individual),
    ("Terik", "tec", None, None, None, T::Living, S::Individual),
    ("Tepo Krumen", "ted", None, None, None, T::Living, S::Individual),
    ("Huehuetla Tepehua", "tee", None, None, None, T::Living, S::Individual),
    ("Teressa", "tef", None, None, None, T::Living, S::Individual),
    ("Teke-Tege", "teg", None, None, None, T::Living, S::Individual),
    ("Tehuelche", "teh", None, None, None, T::Living, S::Individual),
    ("Torricelli", "tei", None, None, None, T::Living, S::Individual),
    ("Ibali Teke", "tek", None, None, None, T::Living, S::Individual),
    ("Telugu", "tel", Some("tel"), Some("tel"), Some("te"), T::Living, S::Individual),
    ("Timne", "tem", Some("tem"), Some("tem"), None, T::Living, S::Individual),
    ("Tama (Colombia)", "ten", None, None, None, T::Extinct, S::Individual),
    ("Teso", "teo", None, None, None, T::Living, S::Individual),
    ("Tepecano", "tep", None, None, None, T::Extinct, S::Individual),
    ("Temein", "teq", None, None, None, T::Living, S::Individual),
    ("Tereno", "ter", Some("ter"), Some("ter"), None, T::Living, S::Individual),
    ("Tengger", "tes", None, None, None, T::Living, S::Individual),
    ("Tetum", "tet", Some("tet"), Some("tet"), None, T::Living, S::Individual),
    ("Soo", "teu", None, None, None, T::Living, S::Individual),
    ("Teor", "tev", None, None, None, T::Living, S::Individual),
    ("Tewa (USA)", "tew", None, None, None, T::Living, S::Individual),
    ("Tennet", "tex", None, None, None, T::Living, S::Individual),
    ("Tulishi", "tey", None, None, None, T::Living, S::Individual),
    ("Tetserret", "tez", None, None, None, T::Living, S::Individual),
    ("Tofin Gbe", "tfi", None, None, None, T::Living, S::Individual),
    ("Tanaina", "tfn", None, None, None, T::Living, S::Individual),
    ("Tefaro", "tfo", None, None, None, T::Living, S::Individual),
    ("Teribe", "tfr", None, None, None, T::Living, S::Individual),
    ("Ternate", "tft", None, None, None, T::Living, S::Individual),
    ("Sagalla", "tga", None, None, None, T::Living, S::Individual),
    ("Tobilung", "tgb", None, None, None, T::Living, S::Individual),
    ("Tigak", "tgc", None, None, None, T::Living, S::Individual),
    ("Ciwogai", "tgd", None, None, None, T::Living, S::Individual),
    ("Eastern Gorkha Tamang", "tge", None, None, None, T::Living, S::Individual),
    ("Chalikha", "tgf", None, None, None, T::Living, S::Individual),
    ("Tobagonian Creole English", "tgh", None, None, None, T::Living, S::Individual),
    ("Lawunuia", "tgi", None, None, None, T::Living, S::Individual),
    ("Tagin", "tgj", None, None, None, T::Living, S::Individual),
    ("Tajik", "tgk", Some("tgk"), Some("tgk"), Some("tg"), T::Living, S::Individual),
    ("Tagalog", "tgl", Some("tgl"), Some("tgl"), Some("tl"), T::Living, S::Individual),
    ("Tandaganon", "tgn", None, None, None, T::Living, S::Individual),
    ("Sudest", "tgo", None, None, None, T::Living, S::Individual),
    ("Tangoa", "tgp", None, None, None, T::Living, S::Individual),
    ("Tring", "tgq", None, None, None, T::Living, S::Individual),
    ("Tareng", "tgr", None, None, None, T::Living, S::Individual),
    ("Nume", "tgs", None, None, None, T::Living, S::Individual),
    ("Central Tagbanwa", "tgt", None, None, None, T::Living, S::Individual),
    ("Tanggu", "tgu", None, None, None, T::Living, S::Individual),
    ("Tingui-Boto", "tgv", None, None, None, T::Extinct, S::Individual),
    ("Tagwana Senoufo", "tgw", None, None, None, T::Living, S::Individual),
    ("Tagish", "tgx", None, None, None, T::Living, S::Individual),
    ("Togoyo", "tgy", None, None, None, T::Extinct, S::Individual),
    ("Tagalaka", "tgz", None, None, None, T::Extinct, S::Individual),
    ("Thai", "tha", Some("tha"), Some("tha"), Some("th"), T::Living, S::Individual),
    ("Kuuk Thaayorre", "thd", None, None, None, T::Living, S::Individual),
    ("Chitwania Tharu", "the", None, None, None, T::Living, S::Individual),
    ("Thangmi", "thf", None, None, None, T::Living, S::Individual),
    ("Northern Tarahumara", "thh", None, None, None, T::Living, S::Individual),
    ("Tai Long", "thi", None, None, None, T::Living, S::Individual),
    ("Tharaka", "thk", None, None, None, T::Living, S::Individual),
    ("Dangaura Tharu", "thl", None, None, None, T::Living, S::Individual),
    ("Aheu", "thm", None, None, None, T::Living, S::Individual),
    ("Thachanadan", "thn", None, None, None, T::Living, S::Individual),
    ("Thompson", "thp", None, None, None, T::Living, S::Individual),
    ("Kochila Tharu", "thq", None, None, None, T::Living, S::Individual),
    ("Rana Tharu", "thr", None, None, None, T::Living, S::Individual),
    ("Thakali", "ths", None, None, None, T::Living, S::Individual),
    ("Tahltan", "tht", None, None, None, T::Living, S::Individual),
    ("Thuri", "thu", None, None, None, T::Living, S::Individual),
    ("Tahaggart Tamahaq", "thv", None, None, None, T::Living, S::Individual),
    ("Tha", "thy", None, None, None, T::Living, S::Individual),
    ("Tayart Tamajeq", "thz", None, None, None, T::Living, S::Individual),
    ("Tidikelt Tamazight", "tia", None, None, None, T::Living, S::Individual),
    ("Tira", "tic", None, None, None, T::Living, S::Individual),
    ("Tifal", "tif", None, None, None, T::Living, S::Individual),
    ("Tigre", "tig", Some("tig"), Some("tig"), None, T::Living, S::Individual),
    ("Timugon Murut", "tih", None, None, None, T::Living, S::Individual),
    ("Tiene", "tii", None, None, None, T::Living, S::Individual),
    ("Tilung", "tij", None, None, None, T::Living, S::Individual),
    ("Tikar", "tik", None, None, None, T::Living, S::Individual),
    ("Tillamook", "til", None, None, None, T::Extinct, S::Individual),
    ("Timbe", "tim", None, None, None, T::Living, S::Individual),
    ("Tindi", "tin", None, None, None, T::Living, S::Individual),
    ("Teop", "tio", None, None, None, T::Living, S::Individual),
    ("Trimuris", "tip", None, None, None, T::Living, S::Individual),
    ("Tiéfo", "tiq", None, None, None, T::Living, S::Individual),
    ("Tigrinya", "tir", Some("tir"), Some("tir"), Some("ti"), T::Living, S::Individual),
    ("Masadiit Itneg", "tis", None, None, None, T::Living, S::Individual),
    ("Tinigua", "tit", None, None, None, T::Living, S::Individual),
    ("Adasen", "tiu", None, None, None, T::Living, S::Individual),
    ("Tiv", "tiv", Some("tiv"), Some("tiv"), None, T::Living, S::Individual),
    ("Tiwi", "tiw", None, None, None, T::Living, S::Individual),
    ("Southern Tiwa", "tix", None, None, None, T::Living, S::Individual),
    ("Tiruray", "tiy", None, None, None, T::Living, S::Individual),
    ("Tai Hongjin", "tiz", None, None, None, T::Living, S::Individual),
    ("Tajuasohn", "tja", None, None, None, T::Living, S::Individual),
    ("Tunjung", "tjg", None, None, None, T::Living, S::Individual),
    ("Northern Tujia", "tji", None, None, None, T::Living, S::Individual),
    ("Tjungundji", "tjj", None, None, None, T::Living, S::Individual),
    ("Tai Laing", "tjl", None, None, None, T::Living, S::Individual),
    ("Timucua", "tjm", None, None, None, T::Extinct, S::Individual),
    ("Tonjon", "tjn", None, None, None, T::Extinct, S::Individual),
    ("Temacine Tamazight", "tjo", None, None, None, T::Living, S::Individual),
    ("Tjupany", "tjp", None, None, None, T::Living, S::Individual),
    ("Southern Tujia", "tjs", None, None, None, T::Living, S::Individual),
    ("Tjurruru", "tju", None, None, None, T::Extinct, S::Individual),
    ("Djabwurrung", "tjw", None, None, None, T::Living, S::Individual),
    ("Truká", "tka", None, None, None, T::Extinct, S::Individual),
    ("Buksa", "tkb", None, None, None, T::Living, S::Individual),
    ("Tukudede", "tkd", None, None, None, T::Living, S::Individual),
    ("Takwane", "tke", None, None, None, T::Living, S::Individual),
    ("Tukumanféd", "tkf", None, None, None, T::Extinct, S::Individual),
    ("Tesaka Malagasy", "tkg", None, None, None, T::Living, S::Individual),
    ("Tokelau", "tkl", Some("tkl"), Some("tkl"), None, T::Living, S::Individual),
    ("Takelma", "tkm", None, None, None, T::Extinct, S::Individual),
    ("Toku-No-Shima", "tkn", None, None, None, T::Living, S::Individual),
    ("Tikopia", "tkp", None, None, None, T::Living, S::Individual),
    ("Tee", "tkq", None, None, None, T::Living, S::Individual),
    ("Tsakhur", "tkr", None, None, None, T::Living, S::Individual),
    ("Takestani", "tks", None, None, None, T::Living, S::Individual),
    ("Kathoriya Tharu", "tkt", None, None, None, T::Living, S::Individual),
    ("Upper Necaxa Totonac", "tku", None, None, None, T::Living, S::Individual),
    ("Mur Pano", "tkv", None, None, None, T::Living, S::Individual),
    ("Teanu", "tkw", None, None, None, T::Living, S::Individual),
    ("Tangko", "tkx", None, None, None, T::Living, S::Individual),
    ("Takua", "tkz", None, None, None, T::Living, S::Individual),
    ("Southwestern Tepehuan", "tla", None, None, None, T::Living, S::Individual),
    ("Tobelo", "tlb", None, None, None, T::Living, S::Individual),
    ("Yecuatla Totonac", "tlc", None, None, None, T::Living, S::Individual),
    ("Talaud", "tld", None, None, None, T::Living, S::Individual),
    ("Telefol", "tlf", None, None, None, T::Living, S::Individual),
    ("Tofanma", "tlg", None, None, None, T::Living, S::Individual),
    ("Klingon", "tlh", Some("tlh"), Some("tlh"), None, T::Constructed, S::Individual),
    ("Tlingit", "tli", Some("tli"), Some("tli"), None, T::Living, S::Individual),
    ("Talinga-Bwisi", "tlj", None, None, None, T::Living, S::Individual),
    ("Taloki", "tlk", None, None, None, T::Living, S::Individual),
    ("Tetela", "tll", None, None, None, T::Living, S::Individual),
    ("Tolomako", "tlm", None, None, None, T::Living, S::Individual),
    ("Talondo'", "tln", None, None, None, T::Living, S::Individual),
    ("Talodi", "tlo", None, None, None, T::Living, S::Individual),
    ("Filomena Mata-Coahuitlán Totonac", "tlp", None, None, None, T::Living, S::Individual),
    ("Tai Loi", "tlq", None, None, None, T::Living, S::Individual),
    ("Talise", "tlr", None, None, None, T::Living, S::Individual),
    ("Tambotalo", "tls", None, None, None, T::Living, S::Individual),
    ("Sou Nama", "tlt", None, None, None, T::Living, S::Individual),
    ("Tulehu", "tlu", None, None, None, T::Living, S::Individual),
    ("Taliabu", "tlv", None, None, None, T::Living, S::Individual),
    ("Khehek", "tlx", None, None, None, T::Living, S::Individual),
    ("Talysh", "tly", None, None, None, T::Living, S::Individual),
    ("Tama (Chad)", "tma", None, None, None, T::Living, S::Individual),
    ("Katbol", "tmb", None, None, None, T::Living, S::Individual),
    ("Tumak", "tmc", None, None, None, T::Living, S::Individual),
    ("Haruai", "tmd", None, None, None, T::Living, S::Individual),
    ("Tremembé", "tme", None, None, None, T::Extinct, S::Individual),
    ("Toba-Maskoy", "tmf", None, None, None, T::Living, S::Individual),
    ("Ternateño", "tmg", None, None, None, T::Extinct, S::Individual),
    ("Tamashek", "tmh", Some("tmh"), Some("tmh"), None, T::Living, S::MacroLanguage),
    ("Tutuba", "tmi", None, None, None, T::Living, S::Individual),
    ("Samarokena", "tmj", None, None, None, T::Living, S::Individual),
    ("Northwestern Tamang", "tmk", None, None, None, T::Living, S::Individual),
    ("Tamnim Citak", "tml", None, None, None, T::Living, S::Individual),
    ("Tai Thanh", "tmm", None, None, None, T::Living, S::Individual),
    ("Taman (Indonesia)", "tmn", None, None, None, T::Living, S::Individual),
    ("Temoq", "tmo", None, None, None, T::Living, S::Individual),
    ("Tumleo", "tmq", None, None, None, T::Living, S::Individual),
    ("Jewish Babylonian Aramaic (ca. 200-1200 CE)", "tmr", None, None, None, T::Extinct, S::Individual),
    ("Tima", "tms", None, None, None, T::Living, S::Individual),
    ("Tasmate", "tmt", None, None, None, T::Living, S::Individual),
    ("Iau", "tmu", None, None, None, T::Living, S::Individual),
    ("Tembo (Motembo)", "tmv", None, None, None, T::Living, S::Individual),
    ("Temuan", "tmw", None, None, None, T::Living, S::Individual),
    ("Tami", "tmy", None, None, None, T::Living, S::Individual),
    ("Tamanaku", "tmz", None, None, None, T::Extinct, S::Individual),
    ("Tacana", "tna", None, None, None, T::Living, S::Individual),
    ("Western Tunebo", "tnb", None, None, None, T::Living, S::Individual),
    ("Tanimuca-Retuarã", "tnc", None, None, None, T::Living, S::Individual),
    ("Angosturas Tunebo", "tnd", None, None, None, T::Living, S::Individual),
    ("Tobanga", "tng", None, None, None, T::Living, S::Individual),
    ("Maiani", "tnh", None, None, None, T::Living, S::Individual),
    ("Tandia", "tni", None, None, None, T::Living, S::Individual),
    ("Kwamera", "tnk", None, None, None, T::Living, S::Individual),
    ("Lenakel", "tnl", None, None, None, T::Living, S::Individual),
    ("Tabla", "tnm", None, None, None, T::Living, S::Individual),
    ("North Tanna", "tnn", None, None, None, T::Living, S::Individual),
    ("Toromono", "tno", None, None, None, T::Living, S::Individual),
    ("Whitesands", "tnp", None, None, None, T::Living, S::Individual),
    ("Taino", "tnq", None, None, None, T::Extinct, S::Individual),
    ("Ménik", "tnr", None, None, None, T::Living, S::Individual),
    ("Tenis", "tns", None, None, None, T::Living, S::Individual),
    ("Tontemboan", "tnt", None, None, None, T::Living, S::Individual),
    ("Tay Khang", "tnu", None, None, None, T::Living, S::Individual),
    ("Tangchangya", "tnv", None, None, None, T::Living, S::Individual),
    ("Tonsawang", "tnw", None, None, None, T::Living, S::Individual),
    ("Tanema", "tnx", None, None, None, T::Living, S::Individual),
    ("Tongwe", "tny", None, None, None, T::Living, S::Individual),
    ("Ten'edn", "tnz", None, None, None, T::Living, S::Individual),
    ("Toba", "tob", None, None, None, T::Living, S::Individual),
    ("Coyutla Totonac", "toc", None, None, None, T::Living, S::Individual),
    ("Toma", "tod", None, None, None, T::Living, S::Individual),
    ("Gizrra", "tof", None, None, None, T::Living, S::Individual),
    ("Tonga (Nyasa)", "tog", Some("tog"), Some("tog"), None, T::Living, S::Individual),
    ("Gitonga", "toh", None, None, None, T::Living, S::Individual),
    ("Tonga (Zambia)", "toi", None, None, None, T::Living, S::Individual),
    ("Tojolabal", "toj", None, None, None, T::Living, S::Individual),
    ("Toki Pona", "tok", None, None, None, T::Constructed, S::Individual),
    ("Tolowa", "tol", None, None, None, T::Extinct, S::Individual),
    ("Tombulu", "tom", None, None, None, T::Living, S::Individual),
    ("Tonga (Tonga Islands)", "ton", Some("ton"), Some("ton"), Some("to"), T::Living, S::Individual),
    ("Xicotepec De Juárez Totonac", "too", None, None, None, T::Living, S::Individual),
    ("Papantla Totonac", "top", None, None, None, T::Living, S::Individual),
    ("Toposa", "toq", None, None, None, T::Living, S::Individual),
    ("Togbo-Vara Banda", "tor", None, None, None, T::Living, S::Individual),
    ("Highland Totonac", "tos", None, None, None, T::Living, S::Individual),
    ("Tho", "tou", None, None, None, T::Living, S::Individual),
    ("Upper Taromi", "tov", None, None, None, T::Living, S::Individual),
    ("Jemez", "tow", None, None, None, T::Living, S::Individual),
    ("Tobian", "tox", None, None, None, T::Living, S::Individual),
    ("Topoiyo", "toy", None, None, None, T::Living, S::Individual),
    ("To", "toz", None, None, None, T::Living, S::Individual),
    ("Taupota", "tpa", None, None, None, T::Living, S::Individual),
    ("Azoyú Me'phaa", "tpc", None, None, None, T::Living, S::Individual),
    ("Tippera", "tpe", None, None, None, T::Living, S::Individual),
    ("Tarpia", "tpf", None, None, None, T::Living, S::Individual),
    ("Kula", "tpg", None, None, None, T::Living, S::Individual),
    ("Tok Pisin", "tpi", Some("tpi"), Some("tpi"), None, T::Living, S::Individual),
    ("Tapieté", "tpj", None, None, None, T::Living, S::Individual),
    ("Tupinikin", "tpk", None, None, None, T::Extinct, S::Individual),
    ("Tlacoapa Me'phaa", "tpl", None, None, None, T::Living, S::Individual),
    ("Tampulma", "tpm", None, None, None, T::Living, S::Individual),
    ("Tupinambá", "tpn", None, None, None, T::Extinct, S::Individual),
    ("Tai Pao", "tpo", None, None, None, T::Living, S::Individual),
    ("Pisaflores Tepehua", "tpp", None, None, None, T::Living, S::Individual),
    ("Tukpa", "tpq", None, None, None, T::Living, S::Individual),
    ("Tuparí", "tpr", None, None, None, T::Living, S::Individual),
    ("Tlachichilco Tepehua", "tpt", None, None, None, T::Living, S::Individual),
    ("Tampuan", "tpu", None, None, None, T::Living, S::Individual),
    ("Tanapag", "tpv", None, None, None, T::Living, S::Individual),
    ("Tupí", "tpw", None, None, None, T::Extinct, S::Individual),
    ("Acatepec Me'phaa", "tpx", None, None, None, T::Living, S::Individual),
    ("Trumai", "tpy", None, None, None, T::Living, S::Individual),
    ("Tinputz", "tpz", None, None, None, T::Living, S::Individual),
    ("Tembé", "tqb", None, None, None, T::Living, S::Individual),
    ("Lehali", "tql", None, None, None, T::Living, S::Individual),
    ("Turumsa", "tqm", None, None, None, T::Living, S::Individual),
    ("Tenino", "tqn", None, None, None, T::Living, S::Individual),
    ("Toaripi", "tqo", None, None, None, T::Living, S::Individual),
    ("Tomoip", "tqp", None, None, None, T::Living, S::Individual),
    ("Tunni", "tqq", None, None, None, T::Living, S::Individual),
    ("Torona", "tqr", None, None, None, T::Extinct, S::Individual),
    ("Western Totonac", "tqt", None, None, None, T::Living, S::Individual),
    ("Touo", "tqu", None, None, None, T::Living, S::Individual),
    ("Tonkawa", "tqw", None, None, None, T::Extinct, S::Individual),
    ("Tirahi", "tra", None, None, None, T::Living, S::Individual),
    ("Terebu", "trb", None, None, None, T::Living, S::Individual),
    ("Copala Triqui", "trc", None, None, None, T::Living, S::Individual),
    ("Turi", "trd", None, None, None, T::Living, S::Individual),
    ("East Tarangan", "tre", None, None, None, T::Living, S::Individual),
    ("Trinidadian Creole English", "trf", None, None, None, T::Living, S::Individual),
    ("Lishán Didán", "trg", None, None, None, T::Living, S::Individual),
    ("Turaka", "trh", None, None, None, T::Living, S::Individual),
    ("Trió", "tri", None, None, None, T::Living, S::Individual),
    ("Toram", "trj", None, None, None, T::Living, S::Individual),
    ("Traveller Scottish", "trl", None, None, None, T::Living, S::Individual),
    ("Tregami", "trm", None, None, None, T::Living, S::Individual),
    ("Trinitario", "trn", None, None, None, T::Living, S::Individual),
    ("Tarao Naga", "tro", None, None, None, T::Living, S::Individual),
    ("Kok Borok", "trp", None, None, None, T::Living, S::Individual),
    ("San Martín Itunyoso Triqui", "trq", None, None, None, T::Living, S::Individual),
    ("Taushiro", "trr", None, None, None, T::Living, S::Individual),
    ("Chicahuaxtla Triqui", "trs", None, None, None, T::Living, S::Individual),
    ("Tunggare", "trt", None, None, None, T::Living, S::Individual),
    ("Turoyo", "tru", None, None, None, T::Living, S::Individual),
    ("Sediq", "trv", None, None, None, T::Living, S::Individual),
    ("Torwali", "trw", None, None, None, T::Living, S::Individual),
    ("Tringgus-Sembaan Bidayuh", "trx", None, None, None, T::Living, S::Individual),
    ("Turung", "try", None, None, None, T::Extinct, S::Individual),
    ("Torá", "trz", None, None, None, T::Extinct, S::Individual),
    ("Tsaangi", "tsa", None, None, None, T::Living, S::Individual),
    ("Tsamai", "tsb", None, None, None, T::Living, S::Individual),
    ("Tswa", "tsc", None, None, None, T::Living, S::Individual),
    ("Tsakonian", "tsd", None, None, None, T::Living, S::Individual),
    ("Tunisian Sign Language", "tse", None, None, None, T::Living, S::Individual),
    ("Tausug", "tsg", None, None, None, T::Living, S::Individual),
    ("Tsuvan", "tsh", None, None, None, T::Living, S::Individual),
    ("Tsimshian", "tsi", Some("tsi"), Some("tsi"), None, T::Living, S::Individual),
    ("Tshangla", "tsj", None, None, None, T::Living, S::Individual),
    ("Tseku", "tsk", None, None, None, T::Living, S::Individual),
    ("Ts'ün-Lao", "tsl", None, None, None, T::Living, S::Individual),
    ("Turkish Sign Language", "tsm", None, None, None, T::Living, S::Individual),
    ("Tswana", "tsn", Some("tsn"), Some("tsn"), Some("tn"), T::Living, S::Individual),
    ("Tsonga", "tso", Some("tso"), Some("tso"), Some("ts"), T::Living, S::Individual),
    ("Northern Toussian", "tsp", None, None, None, T::Living, S::Individual),
    ("Thai Sign Language", "tsq", None, None, None, T::Living, S::Individual),
    ("Akei", "tsr", None, None, None, T::Living, S::Individual),
    ("Taiwan Sign Language", "tss", None, None, None, T::Living, S::Individual),
    ("Tondi Songway Kiini", "tst", None, None, None, T::Living, S::Individual),
    ("Tsou", "tsu", None, None, None, T::Living, S::Individual),
    ("Tsogo", "tsv", None, None, None, T::Living, S::Individual),
    ("Tsishingini", "tsw", None, None, None, T::Living, S::Individual),
    ("Mubami", "tsx", None, None, None, T::Living, S::Individual),
    ("Tebul Sign Language", "tsy", None, None, None, T::Living, S::Individual),
    ("Purepecha", "tsz", None, None, None, T::Living, S::Individual),
    ("Tutelo", "tta", None, None, None, T::Extinct, S::Individual),
    ("Gaa", "ttb", None, None, None, T::Living, S::Individual),
    ("Tektiteko", "ttc", None, None, None, T::Living, S::Individual),
    ("Tauade", "ttd", None, None, None, T::Living, S::Individual),
    ("Bwanabwana", "tte", None, None, None, T::Living, S::Individual),
    ("Tuotomb", "ttf", None, None, None, T::Living, S::Individual),
    ("Tutong", "ttg", None, None, None, T::Living, S::Individual),
    ("Upper Ta'oih", "tth", None, None, None, T::Living, S::Individual),
    ("Tobati", "tti", None, None, None, T::Living, S::Individual),
    ("Tooro", "ttj", None, None, None, T::Living, S::Individual),
    ("Totoro", "ttk", None, None, None, T::Living, S::Individual),
    ("Totela", "ttl", None, None, None, T::Living, S::Individual),
    ("Northern Tutchone", "ttm", None, None, None, T::Living, S::Individual),
    ("Towei", "ttn", None, None, None, T::Living, S::Individual),
    ("Lower Ta'oih", "tto", None, None, None, T::Living, S::Individual),
    ("Tombelala", "ttp", None, None, None, T::Living, S::Individual),
    ("Tawallammat Tamajaq", "ttq", None, None, None, T::Living, S::Individual),
    ("Tera", "ttr", None, None, None, T::Living, S::Individual),
    ("Northeastern Thai", "tts", None, None, None, T::Living, S::Individual),
    ("Muslim Tat", "ttt", None, None, None, T::Living, S::Individual),
    ("Torau", "ttu", None, None, None, T::Living, S::Individual),
    ("Titan", "ttv", None, None, None, T::Living, S::Individual),
    ("Long Wat", "ttw", None, None, None, T::Living, S::Individual),
    ("Sikaritai", "tty", None, None, None, T::Living, S::Individual),
    ("Tsum", "ttz", None, None, None, T::Living, S::Individual),
    ("Wiarumus", "tua", None, None, None, T::Living, S::Individual),
    ("Tübatulabal", "tub", None, None, None, T::Extinct, S::Individual),
    ("Mutu", "tuc", None, None, None, T::Living, S::Individual),
    ("Tuxá", "tud", None, None, None, T::Extinct, S::Individual),
    ("Tuyuca", "tue", None, None, None, T::Living, S::Individual),
    ("Central Tunebo", "tuf", None, None, None, T::Living, S::Individual),
    ("Tunia", "tug", None, None, None, T::Living, S::Individual),
    ("Taulil", "tuh", None, None, None, T::Living, S::Individual),
    ("Tupuri", "tui", None, None, None, T::Living, S::Individual),
    ("Tugutil", "tuj", None, None, None, T::Living, S::Individual),
    ("Turkmen", "tuk", Some("tuk"), Some("tuk"), Some("tk"), T::Living, S::Individual),
    ("Tula", "tul", None, None, None, T::Living, S::Individual),
    ("Tumbuka", "tum", Some("tum"), Some("tum"), None, T::Living, S::Individual),
    ("Tunica", "tun", None, None, None, T::Living, S::Individual),
    ("Tucano", "tuo", None, None, None, T::Living, S::Individual),
    ("Tedaga", "tuq", None, None, None, T::Living, S::Individual),
    ("Turkish", "tur", Some("tur"), Some("tur"), Some("tr"), T::Living, S::Individual),
    ("Tuscarora", "tus", None, None, None, T::Living, S::Individual),
    ("Tututni", "tuu", None, None, None, T::Living, S::Individual),
    ("Turkana", "tuv", None, None, None, T::Living, S::Individual),
    ("Tuxináwa", "tux", None, None, None, T::Extinct, S::Individual),
    ("Tugen", "tuy", None, None, None, T::Living, S::Individual),
    ("Turka", "tuz", None, None, None, T::Living, S::Individual),
    ("Vaghua", "tva", None, None, None, T::Living, S::Individual),
    ("Tsuvadi", "tvd", None, None, None, T::Living, S::Individual),
    ("Te'un", "tve", None, None, None, T::Living, S::Individual),
    ("Southeast Ambrym", "tvk", None, None, None, T::Living, S::Individual),
    ("Tuvalu", "tvl", Some("tvl"), Some("tvl"), None, T::Living, S::Individual),
    ("Tela-Masbuar", "tvm", None, None, None, T::Living, S::Individual),
    ("Tavoyan", "tvn", None, None, None, T::Living, S::Individual),
    ("Tidore", "tvo", None, None, None, T::Living, S::Individual),
    ("Taveta", "tvs", None, None, None, T::Living, S::Individual),
    ("Tutsa Naga", "tvt", None, None, None, T::Living, S::Individual),
    ("Tunen", "tvu", None, None, None, T::Living, S::Individual),
    ("Sedoa", "tvw", None, None, None, T::Living, S::Individual),
    ("Taivoan", "tvx", None, None, None, T::Extinct, S::Individual),
    ("Timor Pidgin", "tvy", None, None, None, T::Extinct, S::Individual),
    ("Twana", "twa", None, None, None, T::Extinct, S::Individual),
    ("Western Tawbuid", "twb", None, None, None, T::Living, S::Individual),
    ("Teshenawa", "twc", None, None, None, T::Extinct, S::Individual),
    ("Twents", "twd", None, None, None, T::Living, S::Individual),
    ("Tewa (Indonesia)", "twe", None, None, None, T::Living, S::Individual),
    ("Northern Tiwa", "twf", None, None, None, T::Living, S::Individual),
    ("Tereweng", "twg", None, None, None, T::Living, S::Individual),
    ("Tai Dón", "twh", None, None, None, T::Living, S::Individual),
    ("Twi", "twi", Some("twi"), Some("twi"), Some("tw"), T::Living, S::Individual),
    ("Tawara", "twl", None, None, None, T::Living, S::Individual),
    ("Tawang Monpa", "twm", None, None, None, T::Living, S::Individual),
    ("Twendi", "twn", None, None, None, T::Living, S::Individual),
    ("Tswapong", "two", None, None, None, T::Living, S::Individual),
    ("Ere", "twp", None, None, None, T::Living, S::Individual),
    ("Tasawaq", "twq", None, None, None, T::Living, S::Individual),
    ("Southwestern Tarahumara", "twr", None, None, None, T::Living, S::Individual),
    ("Turiwára", "twt", None, None, None, T::Extinct, S::Individual),
    ("Termanu", "twu", None, None, None, T::Living, S::Individual),
    ("Tuwari", "tww", None, None, None, T::Living, S::Individual),
    ("Tewe", "twx", None, None, None, T::Living, S::Individual),
    ("Tawoyan", "twy", None, None, None, T::Living, S::Individual),
    ("Tombonuo", "txa", None, None, None, T::Living, S::Individual),
    ("Tokharian B", "txb", None, None, None, T::Ancient, S::Individual),
    ("Tsetsaut", "txc", None, None, None, T::Extinct, S::Individual),
    ("Totoli", "txe", None, None, None, T::Living, S::Individual),
    ("Tangut", "txg", None, None, None, T::Ancient, S::Individual),
    ("Thracian", "txh", None, None, None, T::Ancient, S::Individual),
    ("Ikpeng", "txi", None, None, None, T::Living, S::Individual),
    ("Tarjumo", "txj", None, None, None, T::Living, S::Individual),
    ("Tomini", "txm", None, None, None, T::Living, S::Individual),
    ("West Tarangan", "txn", None, None, None, T::Living, S::Individual),
    ("Toto", "txo", None, None, None, T::Living, S::Individual),
    ("Tii", "txq", None, None, None, T::Living, S::Individual),
    ("Tartessian", "txr", None, None, None, T::Ancient, S::Individual),
    ("Tonsea", "txs", None, None, None, T::Living, S::Individual),
    ("Citak", "txt", None, None, None, T::Living, S::Individual),
    ("Kayapó", "txu", None, None, None, T::Living, S::Individual),
    ("Tatana", "txx", None, None, None, T::Living, S::Individual),
    ("Tanosy Malagasy", "txy", None, None, None, T::Living, S::Individual),
    ("Tauya", "tya", None, None, None, T::Living, S::Individual),
    ("Kyanga", "tye", None, None, None, T::Living, S::Individual),
    ("O'du", "tyh", None, None, None, T::Living, S::Individual),
    ("Teke-Tsaayi", "tyi", None, None, None, T::Living, S::Individual),
    ("Tai Do", "tyj", None, None, None, T::Living, S::Individual),
    ("Thu Lao", "tyl", None, None, None, T::Living, S::Individual),
    ("Kombai", "tyn", None, None, None, T::Living, S::Individual),
    ("Thaypan", "typ", None, None, None, T::Extinct, S::Individual),
    ("Tai Daeng", "tyr", None, None, None, T::Living, S::Individual),
    ("Tày Sa Pa", "tys", None, None, None, T::Living, S::Individual),
    ("Tày Tac", "tyt", None, None, None, T::Living, S::Individual),
    ("Kua", "tyu", None, None, None, T::Living, S::Individual),
    ("Tuvinian", "tyv", Some("tyv"), Some("tyv"), None, T::Living, S::Individual),
    ("Teke-Tyee", "tyx", None, None, None, T::Living, S::Individual),
    ("Tiyaa", "tyy", None, None, None, T::Living, S::Individual),
    ("Tày", "tyz", None, None, None, T::Living, S::Individual),
    ("Tanzanian Sign Language", "tza", None, None, None, T::Living, S::Individual),
    ("Tzeltal", "tzh", None, None, None, T::Living, S::Individual),
    ("Tz'utujil", "tzj", None, None, None, T::Living, S::Individual),
    ("Talossan", "tzl", None, None, None, T::Constructed, S::Individual),
    ("Central Atlas Tamazight", "tzm", None, None, None, T::Living, S::Individual),
    ("Tugun", "tzn", None, None, None, T::Living, S::Individual),
    ("Tzotzil", "tzo", None, None, None, T::Living, S::Individual),
    ("Tabriak", "tzx", None, None, None, T::Living, S::Individual),
    ("Uamué", "uam", None, None, None, T::Extinct, S::Individual),
    ("Kuan", "uan", None, None, None, T::Living, S::Individual),
    ("Tairuma", "uar", None, None, None, T::Living, S::Individual),
    ("Ubang", "uba", None, None, None, T::Living, S::Individual),
    ("Ubi", "ubi", None, None, None, T::Living, S::Individual),
    ("Buhi'non Bikol", "ubl", None, None, None, T::Living, S::Individual),
    ("Ubir", "ubr", None, None, None, T::Living, S::Individual),
    ("Umbu-Ungu", "ubu", None, None, None, T::Living, S::Individual),
    ("Ubykh", "uby", None, None, None, T::Extinct, S::Individual),
    ("Uda", "uda", None, None, None, T::Living, S::Individual),
    ("Udihe", "ude", None, None, None, T::Living, S::Individual),
    ("Muduga", "udg", None, None, None, T::Living, S::Individual),
    ("Udi", "udi", None, None, None, T::Living, S::Individual),
    ("Ujir", "udj", None, None, None, T::Living, S::Individual),
    ("Wuzlam", "udl", None, None, None, T::Living, S::Individual),
    ("Udmurt", "udm", Some("udm"), Some("udm"), None, T::Living, S::Individual),
    ("Uduk", "udu", None, None, None, T::Living, S::Individual),
    ("Kioko", "ues", None, None, None, T::Living, S::Individual),
    ("Ufim", "ufi", None, None, None, T::Living, S::Individual),
    ("Ugaritic", "uga", Some("uga"), Some("uga"), None, T::Ancient, S::Individual),
    ("Kuku-Ugbanh", "ugb", None, None, None, T::Extinct, S::Individual),
    ("Ughele", "uge", None, None, None, T::Living, S::Individual),
    ("Kubachi", "ugh", None, None, None, T::Living, S::Individual),
    ("Ugandan Sign Language", "ugn", None, None, None, T::Living, S::Individual),
    ("Ugong", "ugo", None, None, None, T::Living, S::Individual),
    ("Uruguayan Sign Language", "ugy", None, None, None, T::Living, S::Individual),
    ("Uhami", "uha", None, None, None, T::Living, S::Individual),
    ("Damal", "uhn", None, None, None, T::Living, S::Individual),
    ("Uighur", "uig", Some("uig"), Some("uig"), Some("ug"), T::Living, S::Individual),
    ("Uisai", "uis", None, None, None, T::Living, S::Individual),
    ("Iyive", "uiv", None, None, None, T::Living, S::Individual),
    ("Tanjijili", "uji", None, None, None, T::Living, S::Individual),
    ("Kaburi", "uka", None, None, None, T::Living, S::Individual),
    ("Ukuriguma", "ukg", None, None, None, T::Living, S::Individual),
    ("Ukhwejo", "ukh", None, None, None, T::Living, S::Individual),
    ("Kui (India)", "uki", None, None, None, T::Living, S::Individual),
    ("Muak Sa-aak", "ukk", None, None, None, T::Living, S::Individual),
    ("Ukrainian Sign Language", "ukl", None, None, None, T::Living, S::Individual),
    ("Ukpe-Bayobiri", "ukp", None, None, None, T::Living, S::Individual),
    ("Ukwa", "ukq", None, None, None, T::Living, S::Individual),
    ("Ukrainian", "ukr", Some("ukr"), Some("ukr"), Some("uk"), T::Living, S::Individual),
    ("Urubú-Kaapor Sign Language", "uks", None, None, None, T::Living, S::Individual),
    ("Ukue", "uku", None, None, None, T::Living, S::Individual),
    ("Kuku", "ukv", None, None, None, T::Living, S::Individual),
    ("Ukwuani-Aboh-Ndoni", "ukw", None, None, None, T::Living, S::Individual),
    ("Kuuk-Yak", "uky", None, None, None, T::Extinct, S::Individual),
    ("Fungwa", "ula", None, None, None, T::Living, S::Individual),
    ("Ulukwumi", "ulb", None, None, None, T::Living, S::Individual),
    ("Ulch", "ulc", None, None, None, T::Living, S::Individual),
    ("Lule", "ule", None, None, None, T::Extinct, S::Individual),
    ("Usku", "ulf", None, None, None, T::Living, S::Individual),
    ("Ulithian", "uli", None, None, None, T::Living, S::Individual),
    ("Meriam Mir", "ulk", None, None, None, T::Living, S::Individual),
    ("Ullatan", "ull", None, None, None, T::Living, S::Individual),
    ("Ulumanda'", "ulm", None, None, None, T::Living, S::Individual),
    ("Unserdeutsch", "uln", None, None, None, T::Living, S::Individual),
    ("Uma' Lung", "ulu", None, None, None, T::Living, S::Individual),
    ("Ulwa", "ulw", None, None, None, T::Living, S::Individual),
    ("Umatilla", "uma", None, None, None, T::Living, S::Individual),
    ("Umbundu", "umb", Some("umb"), Some("umb"), None, T::Living, S::Individual),
    ("Marrucinian", "umc", None, None, None, T::Ancient, S::Individual),
    ("Umbindhamu", "umd", None, None, None, T::Extinct, S::Individual),
    ("Morrobalama", "umg", None, None, None, T::Extinct, S::Individual),
    ("Ukit", "umi", None, None, None, T::Living, S::Individual),
    ("Umon", "umm", None, None, None, T::Living, S::Individual),
    ("Makyan Naga", "umn", None, None, None, T::Living, S::Individual),
    ("Umotína", "umo", None, None, None, T::Extinct, S::Individual),
    ("Umpila", "ump", None, None, None, T::Living, S::Individual),
    ("Umbugarla", "umr", None, None, None, T::Extinct, S::Individual),
    ("Pendau", "ums", None, None, None, T::Living, S::Individual),
    ("Munsee", "umu", None, None, None, T::Living, S::Individual),
    ("North Watut", "una", None, None, None, T::Living, S::Individual),
    ("Undetermined", "und", Some("und"), Some("und"), None, T::Special, S::Special),
    ("Uneme", "une", None, None, None, T::Living, S::Individual),
    ("Ngarinyin", "ung", None, None, None, T::Living, S::Individual),
    ("Uni", "uni", None, None, None, T::Living, S::Individual),
    ("Enawené-Nawé", "unk", None, None, None, T::Living, S::Individual),
    ("Unami", "unm", None, None, None, T::Extinct, S::Individual),
    ("Kurnai", "unn", None, None, None, T::Living, S::Individual),
    ("Mundari", "unr", None, None, None, T::Living, S::Individual),
    ("Unubahe", "unu", None, None, None, T::Living, S::Individual),
    ("Munda", "unx", None, None, None, T::Living, S::Individual),
    ("Unde Kaili", "unz", None, None, None, T::Living, S::Individual),
    ("Kulon", "uon", None, None, None, T::Extinct, S::Individual),
    ("Umeda", "upi", None, None, None, T::Living, S::Individual),
    ("Uripiv-Wala-Rano-Atchin", "upv", None, None, None, T::Living, S::Individual),
    ("Urarina", "ura", None, None, None, T::Living, S::Individual),
    ("Urubú-Kaapor", "urb", None, None, None, T::Living, S::Individual),
    ("Urningangg", "urc", None, None, None, T::Extinct, S::Individual),
    ("Urdu", "urd", Some("urd"), Some("urd"), Some("ur"), T::Living, S::Individual),
    ("Uru", "ure", None, None, None, T::Living, S::Individual),
    ("Uradhi", "urf", None, None, None, T::Extinct, S::Individual),
    ("Urigina", "urg", None, None, None, T::Living, S::Individual),
    ("Urhobo", "urh", None, None, None, T::Living, S::Individual),
    ("Urim", "uri", None, None, None, T::Living, S::Individual),
    ("Urak Lawoi'", "urk", None, None, None, T::Living, S::Individual),
    ("Urali", "url", None, None, None, T::Living, S::Individual),
    ("Urapmin", "urm", None, None, None, T::Living, S::Individual),
    ("Uruangnirin", "urn", None, None, None, T::Living, S::Individual),
    ("Ura (Papua New Guinea)", "uro", None, None, None, T::Living, S::Individual),
    ("Uru-Pa-In", "urp", None, None, None, T::Living, S::Individual),
    ("Lehalurup", "urr", None, None, None, T::Living, S::Individual),
    ("Urat", "urt", None, None, None, T::Living, S::Individual),
    ("Urumi", "uru", None, None, None, T::Extinct, S::Individual),
    ("Uruava", "urv", None, None, None, T::Extinct, S::Individual),
    ("Sop", "urw", None, None, None, T::Living, S::Individual),
    ("Urimo", "urx", None, None, None, T::Living, S::Individual),
    ("Orya", "ury", None, None, None, T::Living, S::Individual),
    ("Uru-Eu-Wau-Wau", "urz", None, None, None, T::Living, S::Individual),
    ("Usarufa", "usa", None, None, None, T::Living, S::Individual),
    ("Ushojo", "ush", None, None, None, T::Living, S::Individual),
    ("Usui", "usi", None, None, None, T::Living, S::Individual),
    ("Usaghade", "usk", None, None, None, T::Living, S::Individual),
    ("Uspanteco", "usp", None, None, None, T::Living, S::Individual),
    ("us-Saare", "uss", None, None, None, T::Living, S::Individual),
    ("Uya", "usu", None, None, None, T::Living, S::Individual),
    ("Otank", "uta", None, None, None, T::Living, S::Individual),
    ("Ute-Southern Paiute", "ute", None, None, None, T::Living, S::Individual),
    ("ut-Hun", "uth", None, None, None, T::Living, S::Individual),
    ("Amba (Solomon Islands)", "utp", None, None, None, T::Living, S::Individual),
    ("Etulo", "utr", None, None, None, T::Living, S::Individual),
    ("Utu", "utu", None, None, None, T::Living, S::Individual),
    ("Urum", "uum", None, None, None, T::Living, S::Individual),
    ("Ura (Vanuatu)", "uur", None, None, None, T::Living, S::Individual),
    ("U", "uuu", None, None, None, T::Living, S::Individual),
    ("West Uvean", "uve", None, None, None, T::Living, S::Individual),
    ("Uri", "uvh", None, None, None, T::Living, S::Individual),
    ("Lote", "uvl", None, None, None, T::Living, S::Individual),
    ("Kuku-Uwanh", "uwa", None, None, None, T::Living, S::Individual),
    ("Doko-Uyanga", "uya", None, None, None, T::Living, S::Individual),
    ("Uzbek", "uzb", Some("uzb"), Some("uzb"), Some("uz"), T::Living, S::MacroLanguage),
    ("Northern Uzbek", "uzn", None, None, None, T::Living, S::Individual),
    ("Southern Uzbek", "uzs", None, None, None, T::Living, S::Individual),
    ("Vaagri Booli", "vaa", None, None, None, T::Living, S::Individual),
    ("Vale", "vae", None, None, None, T::Living, S::Individual),
    ("Vafsi", "vaf", None, None, None, T::Living, S::Individual),
    ("Vagla", "vag", None, None, None, T::Living, S::Individual),
    ("Varhadi-Nagpuri", "vah", None, None, None, T::Living, S::Individual),
    ("Vai", "vai", Some("vai"), Some("vai"), None, T::Living, S::Individual),
    ("Sekele", "vaj", None, None, None, T::Living, S::Individual),
    ("Vehes", "val", None, None, None, T::Living, S::Individual),
    ("Vanimo", "vam", None, None, None, T::Living, S::Individual),
    ("Valman", "van", None, None, None, T::Living, S::Individual),
    ("Vao", "vao", None, None, None, T::Living, S::Individual),
    ("Vaiphei", "vap", None, None, None, T::Living, S::Individual),
    ("Huarijio", "var", None, None, None, T::Living, S::Individual),
    ("Vasavi", "vas", None, None, None, T::Living, S::Individual),
    ("Vanuma", "vau", None, None, None, T::Living, S::Individual),
    ("Varli", "vav", None, None, None, T::Living, S::Individual),
    ("Wayu", "vay", None, None, None, T::Living, S::Individual),
    ("Southeast Babar", "vbb", None, None, None, T::Living, S::Individual),
    ("Southwestern Bontok", "vbk", None, None, None, T::Living, S::Individual),
    ("Venetian", "vec", None, None, None, T::Living, S::Individual),
    ("Veddah", "ved", None, None, None, T::Living, S::Individual),
    ("Veluws", "vel", None, None, None, T::Living, S::Individual),
    ("Vemgo-Mabas", "vem", None, None, None, T::Living, S::Individual),
    ("Venda", "ven", Some("ven"), Some("ven"), Some("ve"), T::Living, S::Individual),
    ("Ventureño", "veo", None, None, None, T::Extinct, S::Individual),
    ("Veps", "vep", None, None, None, T::Living, S::Individual),
    ("Mom Jango", "ver", None, None, None, T::Living, S::Individual),
    ("Vaghri", "vgr", None, None, None, T::Living, S::Individual),
    ("Vlaamse Gebarentaal", "vgt", None, None, None, T::Living, S::Individual),
    ("Virgin Islands Creole English", "vic", None, None, None, T::Living, S::Individual),
    ("Vidunda", "vid", None, None, None, T::Living, S::Individual),
    ("Vietnamese", "vie", Some("vie"), Some("vie"), Some("vi"), T::Living, S::Individual),
    ("Vili", "vif", None, None, None, T::Living, S::Individual),
    ("Viemo", "vig", None, None, None, T::Living, S::Individual),
    ("Vilela", "vil", None, None, None, T::Living, S::Individual),
    ("Vinza", "vin", None, None, None, T::Living, S::Individual),
    ("Vishavan", "vis", None, None, None, T::Living, S::Individual),
    ("Viti", "vit", None, None, None, T::Living, S::Individual),
    ("Iduna", "viv", None, None, None, T::Living, S::Individual),
    ("Kariyarra", "vka", None, None, None, T::Extinct, S::Individual),
    ("Kujarge", "vkj", None, None, None, T::Living, S::Individual),
    ("Kaur", "vkk", None, None, None, T::Living, S::Individual),
    ("Kulisusu", "vkl", None, None, None, T::Living, S::Individual),
    ("Kamakan", "vkm", None, None, None, T::Extinct, S::Individual),
    ("Koro Nulu", "vkn", None, None, None, T::Living, S::Individual),
    ("Kodeoha", "vko", None, None, None, T::Living, S::Individual),
    ("Korlai Creole Portuguese", "vkp", None, None, None, T::Living, S::Individual),
    ("Tenggarong Kutai Malay", "vkt", None, None, None, T::Living, S::Individual),
    ("Kurrama", "vku", None, None, None, T::Living, S::Individual),
    ("Koro Zuba", "vkz", None, None, None, T::Living, S::Individual),
    ("Valpei", "vlp", None, None, None, T::Living, S::Individual),
    ("Vlaams", "vls", None, None, None, T::Living, S::Individual),
    ("Martuyhunira", "vma", None, None, None, T::Living, S::Individual),
    ("Barbaram", "vmb", None, None, None, T::Extinct, S::Individual),
    ("Juxtlahuaca Mixtec", "vmc", None, None, None, T::Living, S::Individual),
    ("Mudu Koraga", "vmd", None, None, None, T::Living, S::Individual),
    ("East Masela", "vme", None, None, None, T::Living, S::Individual),
    ("Mainfränkisch", "vmf", None, None, None, T::Living, S::Individual),
    ("Lungalunga", "vmg", None, None, None, T::Living, S::Individual),
    ("Maraghei", "vmh", None, None, None, T::Living, S::Individual),
    ("Miwa", "vmi", None, None, None, T::Extinct, S::Individual),
    ("Ixtayutla Mixtec", "vmj", None, None, None, T::Living, S::Individual),
    ("Makhuwa-Shirima", "vmk", None, None, None, T::Living, S::Individual),
    ("Malgana", "vml", None, None, None, T::Extinct, S::Individual),
    ("Mitlatongo Mixtec", "vmm", None, None, None, T::Living, S::Individual),
    ("Soyaltepec Mazatec", "vmp", None, None, None, T::Living, S::Individual),
    ("Soyaltepec Mixtec", "vmq", None, None, None, T::Living, S::Individual),
    ("Marenje", "vmr", None, None, None, T::Living, S::Individual),
    ("Moksela", "vms", None, None, None, T::Extinct, S::Individual),
    ("Muluridyi", "vmu", None, None, None, T::Extinct, S::Individual),
    ("Valley Maidu", "vmv", None, None, None, T::Extinct, S::Individual),
    ("Makhuwa", "vmw", None, None, None, T::Living, S::Individual),
    ("Tamazola Mixtec", "vmx", None, None, None, T::Living, S::Individual),
    ("Ayautla Mazatec", "vmy", None, None, None, T::Living, S::Individual),
    ("Mazatlán Mazatec", "vmz", None, None, None, T::Living, S::Individual),
    ("Vano", "vnk", None, None, None, T::Living, S::Individual),
    ("Vinmavis", "vnm", None, None, None, T::Living, S::Individual),
    ("Vunapu", "vnp", None, None, None, T::Living, S::Individual),
    ("Volapük", "vol", Some("vol"), Some("vol"), Some("vo"), T::Constructed, S::Individual),
    ("Voro", "vor", None, None, None, T::Living, S::Individual),
    ("Votic", "vot", Some("vot"), Some("vot"), None, T::Living, S::Individual),
    ("Vera'a", "vra", None, None, None, T::Living, S::Individual),
    ("Võro", "vro", None, None, None, T::Living, S::Individual),
    ("Varisi", "vrs", None, None, None, T::Living, S::Individual),
    ("Burmbar", "vrt", None, None, None, T::Living, S::Individual),
    ("Moldova Sign Language", "vsi", None, None, None, T::Living, S::Individual),
    ("Venezuelan Sign Language", "vsl", None, None, None, T::Living, S::Individual),
    ("Valencian Sign Language", "vsv", None, None, None, T::Living, S::Individual),
    ("Vitou", "vto", None, None, None, T::Living, S::Individual),
    ("Vumbu", "vum", None, None, None, T::Living, S::Individual),
    ("Vunjo", "vun", None, None, None, T::Living, S::Individual),
    ("Vute", "vut", None, None, None, T::Living, S::Individual),
    ("Awa (China)", "vwa", None, None, None, T::Living, S::Individual),
    ("Walla Walla", "waa", None, None, None, T::Living, S::Individual),
    ("Wab", "wab", None, None, None, T::Living, S::Individual),
    ("Wasco-Wishram", "wac", None, None, None, T::Extinct, S::Individual),
    ("Wamesa", "wad", None, None, None, T::Living, S::Individual),
    ("Walser", "wae", None, None, None, T::Living, S::Individual),
    ("Wakoná", "waf", None, None, None, T::Extinct, S::Individual),
    ("Wa'ema", "wag", None, None, None, T::Living, S::Individual),
    ("Watubela", "wah", None, None, None, T::Living, S::Individual),
    ("Wares", "wai", None, None, None, T::Living, S::Individual),
    ("Waffa", "waj", None, None, None, T::Living, S::Individual),
    ("Wolaytta", "wal", Some("wal"), Some("wal"), None, T::Living, S::Individual),
    ("Wampanoag", "wam", None, None, None, T::Extinct, S::Individual),
    ("Wan", "wan", None, None, None, T::Living, S::Individual),
    ("Wappo", "wao", None, None, None, T::Extinct, S::Individual),
    ("Wapishana", "wap", None, None, None, T::Living, S::Individual),
    ("Wagiman", "waq", None, None, None, T::Living, S::Individual),
    ("Waray (Philippines)", "war", Some("war"), Some("war"), None, T::Living, S::Individual),
    ("Washo", "was", Some("was"), Some("was"), None, T::Living, S::Individual),
    ("Kaninuwa", "wat", None, None, None, T::Living, S::Individual),
    ("Waurá", "wau", None, None, None, T::Living, S::Individual),
    ("Waka", "wav", None, None, None, T::Living, S::Individual),
    ("Waiwai", "waw", None, None, None, T::Living, S::Individual),
    ("Watam", "wax", None, None, None, T::Living, S::Individual),
    ("Wayana", "way", None, None, None, T::Living, S::Individual),
    ("Wampur", "waz", None, None, None, T::Living, S::Individual),
    ("Warao", "wba", None, None, None, T::Living, S::Individual),
    ("Wabo", "wbb", None, None, None, T::Living, S::Individual),
    ("Waritai", "wbe", None, None, None, T::Living, S::Individual),
    ("Wara", "wbf", None, None, None, T::Living, S::Individual),
    ("Wanda", "wbh", None, None, None, T::Living, S::Individual),
    ("Vwanji", "wbi", None, None, None, T::Living, S::Individual),
    ("Alagwa", "wbj", None, None, None, T::Living, S::Individual),
    ("Waigali", "wbk", None, None, None, T::Living, S::Individual),
    ("Wakhi", "wbl", None, None, None, T::Living, S::Individual),
    ("Wa", "wbm", None, None, None, T::Living, S::Individual),
    ("Warlpiri", "wbp", None, None, None, T::Living, S::Individual),
    ("Waddar", "wbq", None, None, None, T::Living, S::Individual),
    ("Wagdi", "wbr", None, None, None, T::Living, S::Individual),
    ("West Bengal Sign Language", "wbs", None, None, None, T::Living, S::Individual),
    ("Warnman", "wbt", None, None, None, T::Living, S::Individual),
    ("Wajarri", "wbv", None, None, None, T::Living, S::Individual),
    ("Woi", "wbw", None, None, None, T::Living, S::Individual),
    ("Yanomámi", "wca", None, None, None, T::Living, S::Individual),
    ("Waci Gbe", "wci", None, None, None, T::Living, S::Individual),
    ("Wandji", "wdd", None, None, None, T::Living, S::Individual),
    ("Wadaginam", "wdg", None, None, None, T::Living, S::Individual),
    ("Wadjiginy", "wdj", None, None, None, T::Living, S::Individual),
    ("Wadikali", "wdk", None, None, None, T::Extinct, S::Individual),
    ("Wendat", "wdt", None, None, None, T::Living, S::Individual),
    ("Wadjigu", "wdu", None, None, None, T::Extinct, S::Individual),
    ("Wadjabangayi", "wdy", None, None, None, T::Extinct, S::Individual),
    ("Wewaw", "wea", None, None, None, T::Extinct, S::Individual),
    ("Wè Western", "wec", None, None, None, T::Living, S::Individual),
    ("Wedau", "wed", None, None, None, T::Living, S::Individual),
    ("Wergaia", "weg", None, None, None, T::Living, S::Individual),
    ("Weh", "weh", None, None, None, T::Living, S::Individual),
    ("Kiunum", "wei", None, None, None, T::Living, S::Individual),
    ("Weme Gbe", "wem", None, None, None, T::Living, S::Individual),
    ("Wemale", "weo", None, None, None, T::Living, S::Individual),
    ("Westphalien", "wep", None, None, None, T::Living, S::Individual),
    ("Weri", "wer", None, None, None, T::Living, S::Individual),
    ("Cameroon Pidgin", "wes", None, None, None, T::Living, S::Individual),
    ("Perai", "wet", None, None, None, T::Living, S::Individual),
    ("Rawngtu Chin", "weu", None, None, None, T::Living, S::Individual),
    ("Wejewa", "wew", None, None, None, T::Living, S::Individual),
    ("Yafi", "wfg", None, None, None, T::Living, S::Individual),
    ("Wagaya", "wga", None, None, None, T::Extinct, S::Individual),
    ("Wagawaga", "wgb", None, None, None, T::Living, S::Individual),
    ("Wangkangurru", "wgg", None, None, None, T::Extinct, S::Individual),
    ("Wahgi", "wgi", None, None, None, T::Living, S::Individual),
    ("Waigeo", "wgo", None, None, None, T::Living, S::Individual),
    ("Wirangu", "wgu", None, None, None, T::Extinct, S::Individual),
    ("Warrgamay", "wgy", None, None, None, T::Living, S::Individual),
    ("Sou Upaa", "wha", None, None, None, T::Living, S::Individual),
    ("North Wahgi", "whg", None, None, None, T::Living, S::Individual),
    ("Wahau Kenyah", "whk", None, None, None, T::Living, S::Individual),
    ("Wahau Kayan", "whu", None, None, None, T::Living, S::Individual),
    ("Southern Toussian", "wib", None, None, None, T::Living, S::Individual),
    ("Wichita", "wic", None, None, None, T::Extinct, S::Individual),
    ("Wik-Epa", "wie", None, None, None, T::Extinct, S::Individual),
    ("Wik-Keyangan", "wif", None, None, None, T::Extinct, S::Individual),
    ("Wik Ngathan", "wig", None, None, None, T::Living, S::Individual),
    ("Wik-Me'anha", "wih", None, None, None, T::Living, S::Individual),
    ("Minidien", "wii", None, None, None, T::Living, S::Individual),
    ("Wik-Iiyanh", "wij", None, None, None, T::Living, S::Individual),
    ("Wikalkan", "wik", None, None, None, T::Living, S::Individual),
    ("Wilawila", "wil", None, None, None, T::Extinct, S::Individual),
    ("Wik-Mungkan", "wim", None, None, None, T::Living, S::Individual),
    ("Ho-Chunk", "win", None, None, None, T::Living, S::Individual),
    ("Wiraféd", "wir", None, None, None, T::Extinct, S::Individual),
    ("Wiru", "wiu", None, None, None, T::Living, S::Individual),
    ("Vitu", "wiv", None, None, None, T::Living, S::Individual),
    ("Wiyot", "wiy", None, None, None, T::Extinct, S::Individual),
    ("Waja", "wja", None, None, None, T::Living, S::Individual),
    ("Warji", "wji", None, None, None, T::Living, S::Individual),
    ("Kw'adza", "wka", None, None, None, T::Extinct, S::Individual),
    ("Kumbaran", "wkb", None, None, None, T::Living, S::Individual),
    ("Wakde", "wkd", None, None, None, T::Living, S::Individual),
    ("Kalanadi", "wkl", None, None, None, T::Living, S::Individual),
    ("Keerray-Woorroong", "wkr", None, None, None, T::Living, S::Individual),
    ("Kunduvadi", "wku", None, None, None, T::Living, S::Individual),
    ("Wakawaka", "wkw", None, None, None, T::Extinct, S::Individual),
    ("Wangkayutyuru", "wky", None, None, None, T::Extinct, S::Individual),
    ("Walio", "wla", None, None, None, T::Living, S::Individual),
    ("Mwali Comorian", "wlc", None, None, None, T::Living, S::Individual),
    ("Wolane", "wle", None, None, None, T::Living, S::Individual),
    ("Kunbarlang", "wlg", None, None, None, T::Living, S::Individual),
    ("Welaun", "wlh", None, None, None, T::Living, S::Individual),
    ("Waioli", "wli", None, None, None, T::Living, S::Individual),
    ("Wailaki", "wlk", None, None, None, T::Extinct, S::Individual),
    ("Wali (Sudan)", "wll", None, None, None, T::Living, S::Individual),
    ("Middle Welsh", "wlm", None, None, None, T::Historical, S::Individual),
    ("Walloon", "wln", Some("wln"), Some("wln"), Some("wa"), T::Living, S::Individual),
    ("Wolio", "wlo", None, None, None, T::Living, S::Individual),
    ("Wailapa", "wlr", None, None, None, T::Living, S::Individual),
    ("Wallisian", "wls", None, None, None, T::Living, S::Individual),
    ("Wuliwuli", "wlu", None, None, None, T::Extinct, S::Individual),
    ("Wichí Lhamtés Vejoz", "wlv", None, None, None, T::Living, S::Individual),
    ("Walak", "wlw", None, None, None, T::Living, S::Individual),
    ("Wali (Ghana)", "wlx", None, None, None, T::Living, S::Individual),
    ("Waling", "wly", None, None, None, T::Extinct, S::Individual),
    ("Mawa (Nigeria)", "wma", None, None, None, T::Extinct, S::Individual),
    ("Wambaya", "wmb", None, None, None, T::Living, S::Individual),
    ("Wamas", "wmc", None, None, None, T::Living, S::Individual),
    ("Mamaindé", "wmd", None, None, None, T::Living, S::Individual),
    ("Wambule", "wme", None, None, None, T::Living, S::Individual),
    ("Western Minyag", "wmg", None, None, None, T::Living, S::Individual),
    ("Waima'a", "wmh", None, None, None, T::Living, S::Individual),
    ("Wamin", "wmi", None, None, None, T::Extinct, S::Individual),
    ("Maiwa (Indonesia)", "wmm", None, None, None, T::Living, S::Individual),
    ("Waamwang", "wmn", None, None, None, T::Extinct, S::Individual),
    ("Wom (Papua New Guinea)", "wmo", None, None, None, T::Living, S::Individual),
    ("Wambon", "wms", None, None, None, T::Living, S::Individual),
    ("Walmajarri", "wmt", None, None, None, T::Living, S::Individual),
    ("Mwani", "wmw", None, None, None, T::Living, S::Individual),
    ("Womo", "wmx", None, None, None, T::Living, S::Individual),
    ("Wanambre", "wnb", None, None, None, T::Living, S::Individual),
    ("Wantoat", "wnc", None, None, None, T::Living, S::Individual),
    ("Wandarang", "wnd", None, None, None, T::Extinct, S::Individual),
    ("Waneci", "wne", None, None, None, T::Living, S::Individual),
    ("Wanggom", "wng", None, None, None, T::Living, S::Individual),
    ("Ndzwani Comorian", "wni", None, None, None, T::Living, S::Individual),
    ("Wanukaka", "wnk", None, None, None, T::Living, S::Individual),
    ("Wanggamala", "wnm", None, None, None, T::Extinct, S::Individual),
    ("Wunumara", "wnn", None, None, None, T::Extinct, S::Individual),
    ("Wano", "wno", None, None, None, T::Living, S::Individual),
    ("Wanap", "wnp", None, None, None, T::Living, S::Individual),
    ("Usan", "wnu", None, None, None, T::Living, S::Individual),
    ("Wintu", "wnw", None, None, None, T::Living, S::Individual),
    ("Wanyi", "wny", None, None, None, T::Living, S::Individual),
    ("Kuwema", "woa", None, None, None, T::Living, S::Individual),
    ("Wè Northern", "wob", None, None, None, T::Living, S::Individual),
    ("Wogeo", "woc", None, None, None, T::Living, S::Individual),
    ("Wolani", "wod", None, None, None, T::Living, S::Individual),
    ("Woleaian", "woe", None, None, None, T::Living, S::Individual),
    ("Gambian Wolof", "wof", None, None, None, T::Living, S::Individual),
    ("Wogamusin", "wog", None, None, None, T::Living, S::Individual),
    ("Kamang", "woi", None, None, None, T::Living, S::Individual),
    ("Longto", "wok", None, None, None, T::Living, S::Individual),
    ("Wolof", "wol", Some("wol"), Some("wol"), Some("wo"), T::Living, S::Individual),
    ("Wom (Nigeria)", "wom", None, None, None, T::Living, S::Individual),
    ("Wongo", "won", None, None, None, T::Living, S::Individual),
    ("Manombai", "woo", None, None, None, T::Living, S::Individual),
    ("Woria", "wor", None, None, None, T::Living, S::Individual),
    ("Hanga Hundi", "wos", None, None, None, T::Living, S::Individual),
    ("Wawonii", "wow", None, None, None, T::Living, S::Individual),
    ("Weyto", "woy", None, None, None, T::Extinct, S::Individual),
    ("Maco", "wpc", None, None, None, T::Living, S::Individual),
    ("Waluwarra", "wrb", None, None, None, T::Extinct, S::Individual),
    ("Warungu", "wrg", None, None, None, T::Extinct, S::Individual),
    ("Wiradjuri", "wrh", None, None, None, T::Extinct, S::Individual),
    ("Wariyangga", "wri", None, None, None, T::Extinct, S::Individual),
    ("Garrwa", "wrk", None, None, None, T::Living, S::Individual),
    ("Warlmanpa", "wrl", None, None, None, T::Living, S::Individual),
    ("Warumungu", "wrm", None, None, None, T::Living, S::Individual),
    ("Warnang", "wrn", None, None, None, T::Living, S::Individual),
    ("Worrorra", "wro", None, None, None, T::Extinct, S::Individual),
    ("Waropen", "wrp", None, None, None, T::Living, S::Individual),
    ("Wardaman", "wrr", None, None, None, T::Living, S::Individual),
    ("Waris", "wrs", None, None, None, T::Living, S::Individual),
    ("Waru", "wru", None, None, None, T::Living, S::Individual),
    ("Waruna", "wrv", None, None, None, T::Living, S::Individual),
    ("Gugu Warra", "wrw", None, None, None, T::Extinct, S::Individual),
    ("Wae Rana", "wrx", None, None, None, T::Living, S::Individual),
    ("Merwari", "wry", None, None, None, T::Living, S::Individual),
    ("Waray (Australia)", "wrz", None, None, None, T::Extinct, S::Individual),
    ("Warembori", "wsa", None, None, None, T::Living, S::Individual),
    ("Adilabad Gondi", "wsg", None, None, None, T::Living, S::Individual),
    ("Wusi", "wsi", None, None, None, T::Living, S::Individual),
    ("Waskia", "wsk", None, None, None, T::Living, S::Individual),
    ("Owenia", "wsr", None, None, None, T::Living, S::Individual),
    ("Wasa", "wss", None, None, None, T::Living, S::Individual),
    ("Wasu", "wsu", None, None, None, T::Extinct, S::Individual),
    ("Wotapuri-Katarqalai", "wsv", None, None, None, T::Extinct, S::Individual),
    ("Watiwa", "wtf", None, None, None, T::Living, S::Individual),
    ("Wathawurrung", "wth", None, None, None, T::Extinct, S::Individual),
    ("Berta", "wti", None, None, None, T::Living, S::Individual),
    ("Watakataui", "wtk", None, None, None, T::Living, S::Individual),
    ("Mewati", "wtm", None, None, None, T::Living, S::Individual),
    ("Wotu", "wtw", None, None, None, T::Living, S::Individual),
    ("Wikngenchera", "wua", None, None, None, T::Living, S::Individual),
    ("Wunambal", "wub", None, None, None, T::Living, S::Individual),
    ("Wudu", "wud", None, None, None, T::Living, S::Individual),
    ("Wutunhua", "wuh", None, None, None, T::Living, S::Individual),
    ("Silimo", "wul", None, None, None, T::Living, S::Individual),
    ("Wumbvu", "wum", None, None, None, T::Living, S::Individual),
    ("Bungu", "wun", None, None, None, T::Living, S::Individual),
    ("Wurrugu", "wur", None, None, None, T::Extinct, S::Individual),
    ("Wutung", "wut", None, None, None, T::Living, S::Individual),
    ("Wu Chinese", "wuu", None, None, None, T::Living, S::Individual),
    ("Wuvulu-Aua", "wuv", None, None, None, T::Living, S::Individual),
    ("Wulna", "wux", None, None, None, T::Living, S::Individual),
    ("Wauyai", "wuy", None, None, None, T::Living, S::Individual),
    ("Waama", "wwa", None, None, None, T::Living, S::Individual),
    ("Wakabunga", "wwb", None, None, None, T::Extinct, S::Individual),
    ("Wetamut", "wwo", None, None, None, T::Living, S::Individual),
    ("Warrwa", "wwr", None, None, None, T::Extinct, S::Individual),
    ("Wawa", "www", None, None, None, T::Living, S::Individual),
    ("Waxianghua", "wxa", None, None, None, T::Living, S::Individual),
    ("Wardandi", "wxw", None, None, None, T::Extinct, S::Individual),
    ("Wangaaybuwan-Ngiyambaa", "wyb", None, None, None, T::Living, S::Individual),
    ("Woiwurrung", "wyi", None, None, None, T::Extinct, S::Individual),
    ("Wymysorys", "wym", None, None, None, T::Living, S::Individual),
    ("Wyandot", "wyn", None, None, None, T::Living, S::Individual),
    ("Wayoró", "wyr", None, None, None, T::Living, S::Individual),
    ("Western Fijian", "wyy", None, None, None, T::Living, S::Individual),
    ("Andalusian Arabic", "xaa", None, None, None, T::Historical, S::Individual),
    ("Sambe", "xab", None, None, None, T::Living, S::Individual),
    ("Kachari", "xac", None, None, None, T::Living, S::Individual),
    ("Adai", "xad", None, None, None, T::Extinct, S::Individual),
    ("Aequian", "xae", None, None, None, T::Ancient, S::Individual),
    ("Aghwan", "xag", None, None, None, T::Ancient, S::Individual),
    ("Kaimbé", "xai", None, None, None, T::Extinct, S::Individual),
    ("Ararandewára", "xaj", None, None, None, T::Extinct, S::Individual),
    ("Máku", "xak", None, None, None, T::Extinct, S::Individual),
    ("Kalmyk", "xal", Some("xal"), Some("xal"), None, T::Living, S::Individual),
    ("ǀXam", "xam", None, None, None, T::Extinct, S::Individual),
    ("Xamtanga", "xan", None, None, None, T::Living, S::Individual),
    ("Khao", "xao", None, None, None, T::Living, S::Individual),
    ("Apalachee", "xap", None, None, None, T::Extinct, S::Individual),
    ("Aquitanian", "xaq", None, None, None, T::Ancient, S::Individual),
    ("Karami", "xar", None, None, None, T::Extinct, S::Individual),
    ("Kamas", "xas", None, None, None, T::Extinct, S::Individual),
    ("Katawixi", "xat", None, None, None, T::Living, S::Individual),
    ("Kauwera", "xau", None, None, None, T::Living, S::Individual),
    ("Xavánte", "xav", None, None, None, T::Living, S::Individual),
    ("Kawaiisu", "xaw", None, None, None, T::Living, S::Individual),
    ("Kayan Mahakam", "xay", None, None, None, T::Living, S::Individual),
    ("Lower Burdekin", "xbb", None, None, None, T::Extinct, S::Individual),
    ("Bactrian", "xbc", None, None, None, T::Ancient, S::Individual),
    ("Bindal", "xbd", None, None, None, T::Extinct, S::Individual),
    ("Bigambal", "xbe", None, None, None, T::Extinct, S::Individual),
    ("Bunganditj", "xbg", None, None, None, T::Extinct, S::Individual),
    ("Kombio", "xbi", None, None, None, T::Living, S::Individual),
    ("Birrpayi", "xbj", None, None, None, T::Extinct, S::Individual),
    ("Middle Breton", "xbm", None, None, None, T::Historical, S::Individual),
    ("Kenaboi", "xbn", None, None, None, T::Extinct, S::Individual),
    ("Bolgarian", "xbo", None, None, None, T::Historical, S::Individual),
    ("Bibbulman", "xbp", None, None, None, T::Extinct, S::Individual),
    ("Kambera", "xbr", None, None, None, T::Living, S::Individual),
    ("Kambiwá", "xbw", None, None, None, T::Extinct, S::Individual),
    ("Batjala", "xby", None, None, None, T::Living, S::Individual),
    ("Cumbric", "xcb", None, None, None, T::Historical, S::Individual),
    ("Camunic", "xcc", None, None, None, T::Ancient, S::Individual),
    ("Celtiberian", "xce", None, None, None, T::Ancient, S::Individual),
    ("Cisalpine Gaulish", "xcg", None, None, None, T::Ancient, S::Individual),
    ("Chemakum", "xch", None, None, None, T::Extinct, S::Individual),
    ("Classical Armenian", "xcl", None, None, None, T::Historical, S::Individual),
    ("Comecrudo", "xcm", None, None, None, T::Extinct, S::Individual),
    ("Cotoname", "xcn", None, None, None, T::Extinct, S::Individual),
    ("Chorasmian", "xco", None, None, None, T::Ancient, S::Individual),
    ("Carian", "xcr", None, None, None, T::Ancient, S::Individual),
    ("Classical Tibetan", "xct", None, None, None, T::Historical, S::Individual),
    ("Curonian", "xcu", None, None, None, T::Historical, S::Individual),
    ("Chuvantsy", "xcv", None, None, None, T::Extinct, S::Individual),
    ("Coahuilteco", "xcw", None, None, None, T::Extinct, S::Individual),
    ("Cayuse", "xcy", None, None, None, T::Extinct, S::Individual),
    ("Darkinyung", "xda", None, None, None, T::Living, S::Individual),
    ("Dacian", "xdc", None, None, None, T::Ancient, S::Individual),
    ("Dharuk", "xdk", None, None, None, T::Extinct, S::Individual),
    ("Edomite", "xdm", None, None, None, T::Ancient, S::Individual),
    ("Kwandu", "xdo", None, None, None, T::Living, S::Individual),
    ("Kaitag", "xdq", None, None, None, T::Living, S::Individual),
    ("Malayic Dayak", "xdy", None, None, None, T::Living, S::Individual),
    ("Eblan", "xeb", None, None, None, T::Ancient, S::Individual),
    ("Hdi", "xed", None, None, None, T::Living, S::Individual),
    ("ǁXegwi", "xeg", None, None, None, T::Extinct, S::Individual),
    ("Kelo", "xel", None, None, None, T::Living, S::Individual),
    ("Kembayan", "xem", None, None, None, T::Living, S::Individual),
    ("Epi-Olmec", "xep", None, None, None, T::Ancient, S::Individual),
    ("Xerénte", "xer", None, None, None, T::Living, S::Individual),
    ("Kesawai", "xes", None, None, None, T::Living, S::Individual),
    ("Xetá", "xet", None, None, None, T::Living, S::Individual),
    ("Keoru-Ahia", "xeu", None, None, None, T::Living, S::Individual),
    ("Faliscan", "xfa", None, None, None, T::Ancient, S::Individual),
    ("Galatian", "xga", None, None, None, T::Ancient, S::Individual),
    ("Gbin", "xgb", None, None, None, T::Extinct, S::Individual),
    ("Gudang", "xgd", None, None, None, T::Extinct, S::Individual),
    ("Gabrielino-Fernandeño", "xgf", None, None, None, T::Extinct, S::Individual),
    ("Goreng", "xgg", None, None, None, T::Extinct, S::Individual),
    ("Garingbal", "xgi", None, None, None, T::Extinct, S::Individual),
    ("Galindan", "xgl", None, None, None, T::Historical, S::Individual),
    ("Dharumbal", "xgm", None, None, None, T::Extinct, S::Individual),
    ("Garza", "xgr", None, None, None, T::Extinct, S::Individual),
    ("Unggumi", "xgu", None, None, None, T::Living, S::Individual),
    ("Guwa", "xgw", None, None, None, T::Extinct, S::Individual),
    ("Harami", "xha", None, None, None, T::Ancient, S::Individual),
    ("Hunnic", "xhc", None, None, None, T::Ancient, S::Individual),
    ("Hadrami", "xhd", None, None, None, T::Ancient, S::Individual),
    ("Khetrani", "xhe", None, None, None, T::Living, S::Individual),
    ("Middle Khmer (1400 to 1850 CE)", "xhm", None, None, None, T::Historical, S::Individual),
    ("Xhosa", "xho", Some("xho"), Some("xho"), Some("xh"), T::Living, S::Individual),
    ("Hernican", "xhr", None, None, None, T::Ancient, S::Individual),
    ("Hattic", "xht", None, None, None, T::Ancient, S::Individual),
    ("Hurrian", "xhu", None, None, None, T::Ancient, S::Individual),
    ("Khua", "xhv", None, None, None, T::Living, S::Individual),
    ("Iberian", "xib", None, None, None, T::Ancient, S::Individual),
    ("Xiri", "xii", None, None, None, T::Living, S::Individual),
    ("Illyrian", "xil", None, None, None, T::Ancient, S::Individual),
    ("Xinca", "xin", None, None, None, T::Extinct, S::Individual),
    ("Xiriâna", "xir", None, None, None, T::Extinct, S::Individual),
    ("Kisan", "xis", None, None, None, T::Living, S::Individual),
    ("Indus Valley Language", "xiv", None, None, None, T::Ancient, S::Individual),
    ("Xipaya", "xiy", None, None, None, T::Living, S::Individual),
    ("Minjungbal", "xjb", None, None, None, T::Extinct, S::Individual),
    ("Jaitmatang", "xjt", None, None, None, T::Extinct, S::Individual),
    ("Kalkoti", "xka", None, None, None, T::Living, S::Individual),
    ("Northern Nago", "xkb", None, None, None, T::Living, S::Individual),
    ("Kho'ini", "xkc", None, None, None, T::Living, S::Individual),
    ("Mendalam Kayan", "xkd", None, None, None, T::Living, S::Individual),
    ("Kereho", "xke", None, None, None, T::Living, S::Individual),
    ("Khengkha", "xkf", None, None, None, T::Living, S::Individual),
    ("Kagoro", "xkg", None, None, None, T::Living, S::Individual),
    ("Kenyan Sign Language", "xki", None, None, None, T::Living, S::Individual),
    ("Kajali", "xkj", None, None, None, T::Living, S::Individual),
    ("Kachok", "xkk", None, None, None, T::Living, S::Individual),
    ("Mainstream Kenyah", "xkl", None, None, None, T::Living, S::Individual),
    ("Kayan River Kayan", "xkn", None, None, None, T::Living, S::Individual),
    ("Kiorr", "xko", None, None, None, T::Living, S::Individual),
    ("Kabatei", "xkp", None, None, None, T::Living, S::Individual),
    ("Koroni", "xkq", None, None, None, T::Living, S::Individual),
    ("Xakriabá", "xkr", None, None, None, T::Extinct, S::Individual),
    ("Kumbewaha", "xks", None, None, None, T::Living, S::Individual),
    ("Kantosi", "xkt", None, None, None, T::Living, S::Individual),
    ("Kaamba", "xku", None, None, None, T::Living, S::Individual),
    ("Kgalagadi", "xkv", None, None, None, T::Living, S::Individual),
    ("Kembra", "xkw", None, None, None, T::Living, S::Individual),
    ("Karore", "xkx", None, None, None, T::Living, S::Individual),
    ("Uma' Lasan", "xky", None, None, None, T::Living, S::Individual),
    ("Kurtokha", "xkz", None, None, None, T::Living, S::Individual),
    ("Kamula", "xla", None, None, None, T::Living, S::Individual),
    ("Loup B", "xlb", None, None, None, T::Extinct, S::Individual),
    ("Lycian", "xlc", None, None, None, T::Ancient, S::Individual),
    ("Lydian", "xld", None, None, None, T::Ancient, S::Individual),
    ("Lemnian", "xle", None, None, None, T::Ancient, S::Individual),
    ("Ligurian (Ancient)", "xlg", None, None, None, T::Ancient, S::Individual),
    ("Liburnian", "xli", None, None, None, T::Ancient, S::Individual),
    ("Alanic", "xln", None, None, None, T::Ancient, S::Individual),
    ("Loup A", "xlo", None, None, None, T::Extinct, S::Individual),
    ("Lepontic", "xlp", None, None, None, T::Ancient, S::Individual),
    ("Lusitanian", "xls", None, None, None, T::Ancient, S::Individual),
    ("Cuneiform Luwian", "xlu", None, None, None, T::Ancient, S::Individual),
    ("Elymian", "xly", None, None, None, T::Ancient, S::Individual),
    ("Mushungulu", "xma", None, None, None, T::Living, S::Individual),
    ("Mbonga", "xmb", None, None, None, T::Living, S::Individual),
    ("Makhuwa-Marrevone", "xmc", None, None, None, T::Living, S::Individual),
    ("Mbudum", "xmd", None, None, None, T::Living, S::Individual),
    ("Median", "xme", None, None, None, T::Ancient, S::Individual),
    ("Mingrelian", "xmf", None, None, None, T::Living, S::Individual),
    ("Mengaka", "xmg", None, None, None, T::Living, S::Individual),
    ("Kugu-Muminh", "xmh", None, None, None, T::Living, S::Individual),
    ("Majera", "xmj", None, None, None, T::Living, S::Individual),
    ("Ancient Macedonian", "xmk", None, None, None, T::Ancient, S::Individual),
    ("Malaysian Sign Language", "xml", None, None, None, T::Living, S::Individual),
    ("Manado Malay", "xmm", None, None, None, T::Living, S::Individual),
    ("Manichaean Middle Persian", "xmn", None, None, None, T::Historical, S::Individual),
    ("Morerebi", "xmo", None, None, None, T::Living, S::Individual),
    ("Kuku-Mu'inh", "xmp", None, None, None, T::Extinct, S::Individual),
    ("Kuku-Mangk", "xmq", None, None, None, T::Extinct, S::Individual),
    ("Meroitic", "xmr", None, None, None, T::Ancient, S::Individual),
    ("Moroccan Sign Language", "xms", None, None, None, T::Living, S::Individual),
    ("Matbat", "xmt", None, None, None, T::Living, S::Individual),
    ("Kamu", "xmu", None, None, None, T::Extinct, S::Individual),
    ("Antankarana Malagasy", "xmv", None, None, None, T::Living, S::Individual),
    ("Tsimihety Malagasy", "xmw", None, None, None, T::Living, S::Individual),
    ("Salawati", "xmx", None, None, None, T::Living, S::Individual),
    ("Mayaguduna", "xmy", None, None, None, T::Living, S::Individual),
    ("Mori Bawah", "xmz", None, None, None, T::Living, S::Individual),
    ("Ancient North Arabian", "xna", None, None, None, T::Ancient, S::Individual),
    ("Kanakanabu", "xnb", None, None, None, T::Living, S::Individual),
    ("Middle Mongolian", "xng", None, None, None, T::Historical, S::Individual),
    ("Kuanhua", "xnh", None, None, None, T::Living, S::Individual),
    ("Ngarigu", "xni", None, None, None, T::Extinct, S::Individual),
    ("Ngoni (Tanzania)", "xnj", None, None, None, T::Living, S::Individual),
    ("Nganakarti", "xnk", None, None, None, T::Extinct, S::Individual),
    ("Ngumbarl", "xnm", None, None, None, T::Extinct, S::Individual),
    ("Northern Kankanay", "xnn", None, None, None, T::Living, S::Individual),
    ("Anglo-Norman", "xno", None, None, None, T::Historical, S::Individual),
    ("Ngoni (Mozambique)", "xnq", None, None, None, T::Living, S::Individual),
    ("Kangri", "xnr", None, None, None, T::Living, S::Individual),
    ("Kanashi", "xns", None, None, None, T::Living, S::Individual),
    ("Narragansett", "xnt", None, None, None, T::Extinct, S::Individual),
    ("Nukunul", "xnu", None, None, None, T::Extinct, S::Individual),
    ("Nyiyaparli", "xny", None, None, None, T::Living, S::Individual),
    ("Kenzi", "xnz", None, None, None, T::Living, S::Individual),
    ("O'chi'chi'", "xoc", None, None, None, T::Extinct, S::Individual),
    ("Kokoda", "xod", None, None, None, T::Living, S::Individual),
    ("Soga", "xog", None, None, None, T::Living, S::Individual),
    ("Kominimung", "xoi", None, None, None, T::Living, S::Individual),
    ("Xokleng", "xok", None, None, None, T::Living, S::Individual),
    ("Komo (Sudan)", "xom", None, None, None, T::Living, S::Individual),
    ("Konkomba", "xon", None, None, None, T::Living, S::Individual),
    ("Xukurú", "xoo", None, None, None, T::Extinct, S::Individual),
    ("Kopar", "xop", None, None, None, T::Living, S::Individual),
    ("Korubo", "xor", None, None, None, T::Living, S::Individual),
    ("Kowaki", "xow", None, None, None, T::Living, S::Individual),
    ("Pirriya", "xpa", None, None, None, T::Extinct, S::Individual),
    ("Northeastern Tasmanian", "xpb", None, None, None, T::Extinct, S::Individual),
    ("Pecheneg", "xpc", None, None, None, T::Historical, S::Individual),
    ("Oyster Bay Tasmanian", "xpd", None, None, None, T::Extinct, S::Individual),
    ("Liberia Kpelle", "xpe", None, None, None, T::Living, S::Individual),
    ("Southeast Tasmanian", "xpf", None, None, None, T::Extinct, S::Individual),
    ("Phrygian", "xpg", None, None, None, T::Ancient, S::Individual),
    ("North Midlands Tasmanian", "xph", None, None, None, T::Extinct, S::Individual),
    ("Pictish", "xpi", None, None, None, T::Historical, S::Individual),
    ("Mpalitjanh", "xpj", None, None, None, T::Extinct, S::Individual),
    ("Kulina Pano", "xpk", None, None, None, T::Living, S::Individual),
    ("Port Sorell Tasmanian", "xpl", None, None, None, T::Extinct, S::Individual),
    ("Pumpokol", "xpm", None, None, None, T::Extinct, S::Individual),
    ("Kapinawá", "xpn", None, None, None, T::Extinct, S::Individual),
    ("Pochutec", "xpo", None, None, None, T::Extinct, S::Individual),
    ("Puyo-Paekche", "xpp", None, None, None, T::Ancient, S::Individual),
    ("Mohegan-Pequot", "xpq", None, None, None, T::Extinct, S::Individual),
    ("Parthian", "xpr", None, None, None, T::Ancient, S::Individual),
    ("Pisidian", "xps", None, None, None, T::Ancient, S::Individual),
    ("Punthamara", "xpt", None, None, None, T::Extinct, S::Individual),
    ("Punic", "xpu", None, None, None, T::Ancient, S::Individual),
    ("Northern Tasmanian", "xpv", None, None, None, T::Extinct, S::Individual),
    ("Northwestern Tasmanian", "xpw", None, None, None, T::Extinct, S::Individual),
    ("Southwestern Tasmanian", "xpx", None, None, None, T::Extinct, S::Individual),
    ("Puyo", "xpy", None, None, None, T::Ancient, S::Individual),
    ("Bruny Island Tasmanian", "xpz", None, None, None, T::Extinct, S::Individual),
    ("Karakhanid", "xqa", None, None, None, T::Historical, S::Individual),
    ("Qatabanian", "xqt", None, None, None, T::Ancient, S::Individual),
    ("Krahô", "xra", None, None, None, T::Living, S::Individual),
    ("Eastern Karaboro", "xrb", None, None, None, T::Living, S::Individual),
    ("Gundungurra", "xrd", None, None, None, T::Extinct, S::Individual),
    ("Kreye", "xre", None, None, None, T::Living, S::Individual),
    ("Minang", "xrg", None, None, None, T::Extinct, S::Individual),
    ("Krikati-Timbira", "xri", None, None, None, T::Living, S::Individual),
    ("Armazic", "xrm", None, None, None, T::Ancient, S::Individual),
    ("Arin", "xrn", None, None, None, T::Extinct, S::Individual),
    ("Raetic", "xrr", None, None, None, T::Ancient, S::Individual),
    ("Aranama-Tamique", "xrt", None, None, None, T::Extinct, S::Individual),
    ("Marriammu", "xru", None, None, None, T::Living, S::Individual),
    ("Karawa", "xrw", None, None, None, T::Living, S::Individual),
    ("Sabaean", "xsa", None, None, None, T::Ancient, S::Individual),
    ("Sambal", "xsb", None, None, None, T::Living, S::Individual),
    ("Scythian", "xsc", None, None, None, T::Ancient, S::Individual),
    ("Sidetic", "xsd", None, None, None, T::Ancient, S::Individual),
    ("Sempan", "xse", None, None, None, T::Living, S::Individual),
    ("Shamang", "xsh", None, None, None, T::Living, S::Individual),
    ("Sio", "xsi", None, None, None, T::Living, S::Individual),
    ("Subi", "xsj", None, None, None, T::Living, S::Individual),
    ("South Slavey", "xsl", None, None, None, T::Living, S::Individual),
    ("Kasem", "xsm", None, None, None, T::Living, S::Individual),
    ("Sanga (Nigeria)", "xsn", None, None, None, T::Living, S::Individual),
    ("Solano", "xso", None, None, None, T::Extinct, S::Individual),
    ("Silopi", "xsp", None, None, None, T::Living, S::Individual),
    ("Makhuwa-Saka", "xsq", None, None, None, T::Living, S::Individual),
    ("Sherpa", "xsr", None, None, None, T::Living, S::Individual),
    ("Assan", "xss", None, None, None, T::Extinct, S::Individual),
    ("Sanumá", "xsu", None, None, None, T::Living, S::Individual),
    ("Sudovian", "xsv", None, None, None, T::Extinct, S::Individual),
    ("Saisiyat", "xsy", None, None, None, T::Living, S::Individual),
    ("Alcozauca Mixtec", "xta", None, None, None, T::Living, S::Individual),
    ("Chazumba Mixtec", "xtb", None, None, None, T::Living, S::Individual),
    ("Katcha-Kadugli-Miri", "xtc", None, None, None, T::Living, S::Individual),
    ("Diuxi-Tilantongo Mixtec", "xtd", None, None, None, T::Living, S::Individual),
    ("Ketengban", "xte", None, None, None, T::Living, S::Individual),
    ("Transalpine Gaulish", "xtg", None, None, None, T::Ancient, S::Individual),
    ("Yitha Yitha", "xth", None, None, None, T::Extinct, S::Individual),
    ("Sinicahua Mixtec", "xti", None, None, None, T::Living, S::Individual),
    ("San Juan Teita Mixtec", "xtj", None, None, None, T::Living, S::Individual),
    ("Tijaltepec Mixtec", "xtl", None, None, None, T::Living, S::Individual),
    ("Magdalena Peñasco Mixtec", "xtm", None, None, None, T::Living, S::Individual),
    ("Northern Tlaxiaco Mixtec", "xtn", None, None, None, T::Living, S::Individual),
    ("Tokharian A", "xto", None, None, None, T::Ancient, S::Individual),
    ("San Miguel Piedras Mixtec", "xtp", None, None, None, T::Living, S::Individual),
    ("Tumshuqese", "xtq", None, None, None, T::Historical, S::Individual),
    ("Early Tripuri", "xtr", None, None, None, T::Ancient, S::Individual),
    ("Sindihui Mixtec", "xts", None, None, None, T::Living, S::Individual),
    ("Tacahua Mixtec", "xtt", None, None, None, T::Living, S::Individual),
    ("Cuyamecalco Mixtec", "xtu", None, None, None, T::Living, S::Individual),
    ("Thawa", "xtv", None, None, None, T::Extinct, S::Individual),
    ("Tawandê", "xtw", None, None, None, T::Living, S::Individual),
    ("Yoloxochitl Mixtec", "xty", None, None, None, T::Living, S::Individual),
    ("Alu Kurumba", "xua", None, None, None, T::Living, S::Individual),
    ("Betta Kurumba", "xub", None, None, None, T::Living, S::Individual),
    ("Umiida", "xud", None, None, None, T::Extinct, S::Individual),
    ("Kunigami", "xug", None, None, None, T::Living, S::Individual),
    ("Jennu Kurumba", "xuj", None, None, None, T::Living, S::Individual),
    ("Ngunawal", "xul", None, None, None, T::Extinct, S::Individual),
    ("Umbrian", "xum", None, None, None, T::Ancient, S::Individual),
    ("Unggaranggu", "xun", None, None, None, T::Extinct, S::Individual),
    ("Kuo", "xuo", None, None, None, T::Living, S::Individual),
    ("Upper Umpqua", "xup", None, None, None, T::Extinct, S::Individual),
    ("Urartian", "xur", None, None, None, T::Ancient, S::Individual),
    ("Kuthant", "xut", None, None, None, T::Extinct, S::Individual),
    ("Kxoe", "xuu", None, None, None, T::Living, S::Individual),
    ("Venetic", "xve", None, None, None, T::Ancient, S::Individual),
    ("Kamviri", "xvi", None, None, None, T::Living, S::Individual),
    ("Vandalic", "xvn", None, None, None, T::Ancient, S::Individual),
    ("Volscian", "xvo", None, None, None, T::Ancient, S::Individual),
    ("Vestinian", "xvs", None, None, None, T::Ancient, S::Individual),
    ("Kwaza", "xwa", None, None, None, T::Living, S::Individual),
    ("Woccon", "xwc", None, None, None, T::Extinct, S::Individual),
    ("Wadi Wadi", "xwd", None, None, None, T::Extinct, S::Individual),
    ("Xwela Gbe", "xwe", None, None, None, T::Living, S::Individual),
    ("Kwegu", "xwg", None, None, None, T::Living, S::Individual),
    ("Wajuk", "xwj", None, None, None, T::Extinct, S::Individual),
    ("Wangkumara", "xwk", None, None, None, T::Extinct, S::Individual),
    ("Western Xwla Gbe", "xwl", None, None, None, T::Living, S::Individual),
    ("Written Oirat", "xwo", None, None, None, T::Extinct, S::Individual),
    ("Kwerba Mamberamo", "xwr", None, None, None, T::Living, S::Individual),
    ("Wotjobaluk", "xwt", None, None, None, T::Extinct, S::Individual),
    ("Wemba Wemba", "xww", None, None, None, T::Extinct, S::Individual),
    ("Boro (Ghana)", "xxb", None, None, None, T::Extinct, S::Individual),
    ("Ke'o", "xxk", None, None, None, T::Living, S::Individual),
    ("Minkin", "xxm", None, None, None, T::Extinct, S::Individual),
    ("Koropó", "xxr", None, None, None, T::Extinct, S::Individual),
    ("Tambora", "xxt", None, None, None, T::Extinct, S::Individual),
    ("Yaygir", "xya", None, None, None, T::Extinct, S::Individual),
    ("Yandjibara", "xyb", None, None, None, T::Extinct, S::Individual),
    ("Mayi-Yapi", "xyj", None, None, None, T::Extinct, S::Individual),
    ("Mayi-Kulan", "xyk", None, None, None, T::Extinct, S::Individual),
    ("Yalakalore", "xyl", None, None, None, T::Extinct, S::Individual),
    ("Mayi-Thakurti", "xyt", None, None, None, T::Extinct, S::Individual),
    ("Yorta Yorta", "xyy", None, None, None, T::Living, S::Individual),
    ("Zhang-Zhung", "xzh", None, None, None, T::Ancient, S::Individual),
    ("Zemgalian", "xzm", None, None, None, T::Extinct, S::Individual),
    ("Ancient Zapotec", "xzp", None, None, None, T::Historical, S::Individual),
    ("Yaminahua", "yaa", None, None, None, T::Living, S::Individual),
    ("Yuhup", "yab", None, None, None, T::Living, S::Individual),
    ("Pass Valley Yali", "yac", None, None, None, T::Living, S::Individual),
    ("Yagua", "yad", None, None, None, T::Living, S::Individual),
    ("Pumé", "yae", None, None, None, T::Living, S::Individual),
    ("Yaka (Democratic Republic of Congo)", "yaf", None, None, None, T::Living, S::Individual),
    ("Yámana", "yag", None, None, None, T::Living, S::Individual),
    ("Yazgulyam", "yah", None, None, None, T::Living, S::Individual),
    ("Yagnobi", "yai", None, None, None, T::Living, S::Individual),
    ("Banda-Yangere", "yaj", None, None, None, T::Living, S::Individual),
    ("Yakama", "yak", None, None, None, T::Living, S::Individual),
    ("Yalunka", "yal", None, None, None, T::Living, S::Individual),
    ("Yamba", "yam", None, None, None, T::Living, S::Individual),
    ("Mayangna", "yan", None, None, None, T::Living, S::Individual),
    ("Yao", "yao", Some("yao"), Some("yao"), None, T::Living, S::Individual),
    ("Yapese", "yap", Some("yap"), Some("yap"), None, T::Living, S::Individual),
    ("Yaqui", "yaq", None, None, None, T::Living, S::Individual),
    ("Yabarana", "yar", None, None, None, T::Living, S::Individual),
    ("Nugunu (Cameroon)", "yas", None, None, None, T::Living, S::Individual),
    ("Yambeta", "yat", None, None, None, T::Living, S::Individual),
    ("Yuwana", "yau", None, None, None, T::Living, S::Individual),
    ("Yangben", "yav", None, None, None, T::Living, S::Individual),
    ("Yawalapití", "yaw", None, None, None, T::Living, S::Individual),
    ("Yauma", "yax", None, None, None, T::Living, S::Individual),
    ("Agwagwune", "yay", None, None, None, T::Living, S::Individual),
    ("Lokaa", "yaz", None, None, None, T::Living, S::Individual),
    ("Yala", "yba", None, None, None, T::Living, S::Individual),
    ("Yemba", "ybb", None, None, None, T::Living, S::Individual),
    ("West Yugur", "ybe", None, None, None, T::Living, S::Individual),
    ("Yakha", "ybh", None, None, None, T::Living, S::Individual),
    ("Yamphu", "ybi", None, None, None, T::Living, S::Individual),
    ("Hasha", "ybj", None, None, None, T::Living, S::Individual),
    ("Bokha", "ybk", None, None, None, T::Living, S::Individual),
    ("Yukuben", "ybl", None, None, None, T::Living, S::Individual),
    ("Yaben", "ybm", None, None, None, T::Living, S::Individual),
    ("Yabaâna", "ybn", None, None, None, T::Extinct, S::Individual),
    ("Yabong", "ybo", None, None, None, T::Living, S::Individual),
    ("Yawiyo", "ybx", None, None, None, T::Living, S::Individual),
    ("Yaweyuha", "yby", None, None, None, T::Living, S::Individual),
    ("Chesu", "ych", None, None, None, T::Living, S::Individual),
    ("Lolopo", "ycl", None, None, None, T::Living, S::Individual),
    ("Yucuna", "ycn", None, None, None, T::Living, S::Individual),
    ("Chepya", "ycp", None, None, None, T::Living, S::Individual),
    ("Yanda", "yda", None, None, None, T::Extinct, S::Individual),
    ("Eastern Yiddish", "ydd", None, None, None, T::Living, S::Individual),
    ("Yangum Dey", "yde", None, None, None, T::Living, S::Individual),
    ("Yidgha", "ydg", None, None, None, T::Living, S::Individual),
    ("Yoidik", "ydk", None, None, None, T::Living, S::Individual),
    ("Ravula", "yea", None, None, None, T::Living, S::Individual),
    ("Yeniche", "yec", None, None, None, T::Living, S::Individual),
    ("Yimas", "yee", None, None, None, T::Living, S::Individual),
    ("Yeni", "yei", None, None, None, T::Extinct, S::Individual),
    ("Yevanic", "yej", None, None, None, T::Living, S::Individual),
    ("Yela", "yel", None, None, None, T::Living, S::Individual),
    ("Tarok", "yer", None, None, None, T::Living, S::Individual),
    ("Nyankpa", "yes", None, None, None, T::Living, S::Individual),
    ("Yetfa", "yet", None, None, None, T::Living, S::Individual),
    ("Yerukula", "yeu", None, None, None, T::Living, S::Individual),
    ("Yapunda", "yev", None, None, None, T::Living, S::Individual),
    ("Yeyi", "yey", None, None, None, T::Living, S::Individual),
    ("Malyangapa", "yga", None, None, None, T::Extinct, S::Individual),
    ("Yiningayi", "ygi", None, None, None, T::Extinct, S::Individual),
    ("Yangum Gel", "ygl", None, None, None, T::Living, S::Individual),
    ("Yagomi", "ygm", None, None, None, T::Living, S::Individual),
    ("Gepo", "ygp", None, None, None, T::Living, S::Individual),
    ("Yagaria", "ygr", None, None, None, T::Living, S::Individual),
    ("Yolŋu Sign Language", "ygs", None, None, None, T::Living, S::Individual),
    ("Yugul", "ygu", None, None, None, T::Living, S::Individual),
    ("Yagwoia", "ygw", None, None, None, T::Living, S::Individual),
    ("Baha Buyang", "yha", None, None, None, T::Living, S::Individual),
    ("Judeo-Iraqi Arabic", "yhd", None, None, None, T::Living, S::Individual),
    ("Hlepho Phowa", "yhl", None, None, None, T::Living, S::Individual),
    ("Yan-nhaŋu Sign Language", "yhs", None, None, None, T::Living, S::Individual),
    ("Yinggarda", "yia", None, None, None, T::Living, S::Individual),
    ("Yiddish", "yid", Some("yid"), Some("yid"), Some("yi"), T::Living, S::MacroLanguage),
    ("Ache", "yif", None, None, None, T::Living, S::Individual),
    ("Wusa Nasu", "yig", None, None, None, T::Living, S::Individual),
    ("Western Yiddish", "yih", None, None, None, T::Extinct, S::Individual),
    ("Yidiny", "yii", None, None, None, T::Living, S::Individual),
    ("Yindjibarndi", "yij", None, None, None, T::Living, S::Individual),
    ("Dongshanba Lalo", "yik", None, None, None, T::Living, S::Individual),
    ("Yindjilandji", "yil", None, None, None, T::Extinct, S::Individual),
    ("Yimchungru Naga", "yim", None, None, None, T::Living, S::Individual),
    ("Riang Lai", "yin", None, None, None, T::Living, S::Individual),
    ("Pholo", "yip", None, None, None, T::Living, S::Individual),
    ("Miqie", "yiq", None, None, None, T::Living, S::Individual),
    ("North Awyu", "yir", None, None, None, T::Living, S::Individual),
    ("Yis", "yis", None, None, None, T::Living, S::Individual),
    ("Eastern Lalu", "yit", None, None, None, T::Living, S::Individual),
    ("Awu", "yiu", None, None, None, T::Living, S::Individual),
    ("Northern Nisu", "yiv", None, None, None, T::Living, S::Individual),
    ("Axi Yi", "yix", None, None, None, T::Living, S::Individual),
    ("Azhe", "yiz", None, None, None, T::Living, S::Individual),
    ("Yakan", "yka", None, None, None, T::Living, S::Individual),
    ("Northern Yukaghir", "ykg", None, None, None, T::Living, S::Individual),
    ("Yoke", "yki", None, None, None, T::Living, S::Individual),
    ("Yakaikeke", "ykk", None, None, None, T::Living, S::Individual),
    ("Khlula", "ykl", None, None, None, T::Living, S::Individual),
    ("Kap", "ykm", None, None, None, T::Living, S::Individual),
    ("Kua-nsi", "ykn", None, None, None, T::Living, S::Individual),
    ("Yasa", "yko", None, None, None, T::Living, S::Individual),
    ("Yekora", "ykr", None, None, None, T::Living, S::Individual),
    ("Kathu", "ykt", None, None, None, T::Living, S::Individual),
    ("Kuamasi", "yku", None, None, None, T::Living, S::Individual),
    ("Yakoma", "yky", None, None, None, T::Living, S::Individual),
    ("Yaul", "yla", None, None, None, T::Living, S::Individual),
    ("Yaleba", "ylb", None, None, None, T::Living, S::Individual),
    ("Yele", "yle", None, None, None, T::Living, S::Individual),
    ("Yelogu", "ylg", None, None, None, T::Living, S::Individual),
    ("Angguruk Yali", "yli", None, None, None, T::Living, S::Individual),
    ("Yil", "yll", None, None, None, T::Living, S::Individual),
    ("Limi", "ylm", None, None, None, T::Living, S::Individual),
    ("Langnian Buyang", "yln", None, None, None, T::Living, S::Individual),
    ("Naluo Yi", "ylo", None, None, None, T::Living, S::Individual),
    ("Yalarnnga", "ylr", None, None, None, T::Extinct, S::Individual),
    ("Aribwaung", "ylu", None, None, None, T::Living, S::Individual),
    ("Nyâlayu", "yly", None, None, None, T::Living, S::Individual),
    ("Yambes", "ymb", None, None, None, T::Living, S::Individual),
    ("Southern Muji", "ymc", None, None, None, T::Living, S::Individual),
    ("Muda", "ymd", None, None, None, T::Living, S::Individual),
    ("Yameo", "yme", None, None, None, T::Extinct, S::Individual),
    ("Yamongeri", "ymg", None, None, None, T::Living, S::Individual),
    ("Mili", "ymh", None, None, None, T::Living, S::Individual),
    ("Moji", "ymi", None, None, None, T::Living, S::Individual),
    ("Makwe", "ymk", None, None, None, T::Living, S::Individual),
    ("Iamalele", "yml", None, None, None, T::Living, S::Individual),
    ("Maay", "ymm", None, None, None, T::Living, S::Individual),
    ("Yamna", "ymn", None, None, None, T::Living, S::Individual),
    ("Yangum Mon", "ymo", None, None, None, T::Living, S::Individual),
    ("Yamap", "ymp", None, None, None, T::Living, S::Individual),
    ("Qila Muji", "ymq", None, None, None, T::Living, S::Individual),
    ("Malasar", "ymr", None, None, None, T::Living, S::Individual),
    ("Mysian", "yms", None, None, None, T::Ancient, S::Individual),
    ("Northern Muji", "ymx", None, None, None, T::Living, S::Individual),
    ("Muzi", "ymz", None, None, None, T::Living, S::Individual),
    ("Aluo", "yna", None, None, None, T::Living, S::Individual),
    ("Yandruwandha", "ynd", None, None, None, T::Extinct, S::Individual),
    ("Lang'e", "yne", None, None, None, T::Living, S::Individual),
    ("Yango", "yng", None, None, None, T::Living, S::Individual),
    ("Naukan Yupik", "ynk", None, None, None, T::Living, S::Individual),
    ("Yangulam", "ynl", None, None, None, T::Living, S::Individual),
    ("Yana", "ynn", None, None, None, T::Extinct, S::Individual),
    ("Yong", "yno", None, None, None, T::Living, S::Individual),
    ("Yendang", "ynq", None, None, None, T::Living, S::Individual),
    ("Yansi", "yns", None, None, None, T::Living, S::Individual),
    ("Yahuna", "ynu", None, None, None, T::Extinct, S::Individual),
    ("Yoba", "yob", None, None, None, T::Extinct, S::Individual),
    ("Yogad", "yog", None, None, None, T::Living, S::Individual),
    ("Yonaguni", "yoi", None, None, None, T::Living, S::Individual),
    ("Yokuts", "yok", None, None, None, T::Living, S::Individual),
    ("Yola", "yol", None, None, None, T::Extinct, S::Individual),
    ("Yombe", "yom", None, None, None, T::Living, S::Individual),
    ("Yongkom", "yon", None, None, None, T::Living, S::Individual),
    ("Yoruba", "yor", Some("yor"), Some("yor"), Some("yo"), T::Living, S::Individual),
    ("Yotti", "yot", None, None, None, T::Living, S::Individual),
    ("Yoron", "yox", None, None, None, T::Living, S::Individual),
    ("Yoy", "yoy", None, None, None, T::Living, S::Individual),
    ("Phala", "ypa", None, None, None, T::Living, S::Individual),
    ("Labo Phowa", "ypb", None, None, None, T::Living, S::Individual),
    ("Phola", "ypg", None, None, None, T::Living, S::Individual),
    ("Phupha", "yph", None, None, None, T::Living, S::Individual),
    ("Phuma", "ypm", None, None, None, T::Living, S::Individual),
    ("Ani Phowa", "ypn", None, None, None, T::Living, S::Individual),
    ("Alo Phola", "ypo", None, None, None, T::Living, S::Individual),
    ("Phupa", "ypp", None, None, None, T::Living, S::Individual),
    ("Phuza", "ypz", None, None, None, T::Living, S::Individual),
    ("Yerakai", "yra", None, None, None, T::Living, S::Individual),
    ("Yareba", "yrb", None, None, None, T::Living, S::Individual),
    ("Yaouré", "yre", None, None, None, T::Living, S::Individual),
    ("Nenets", "yrk", None, None, None, T::Living, S::Individual),
    ("Nhengatu", "yrl", None, None, None, T::Living, S::Individual),
    ("Yirrk-Mel", "yrm", None, None, None, T::Living, S::Individual),
    ("Yerong", "yrn", None, None, None, T::Living, S::Individual),
    ("Yaroamë", "yro", None, None, None, T::Living, S::Individual),
    ("Yarsun", "yrs", None, None, None, T::Living, S::Individual),
    ("Yarawata", "yrw", None, None, None, T::Living, S::Individual),
    ("Yarluyandi", "yry", None, None, None, T::Living, S::Individual),
    ("Yassic", "ysc", None, None, None, T::Extinct, S::Individual),
    ("Samatao", "ysd", None, None, None, T::Living, S::Individual),
    ("Sonaga", "ysg", None, None, None, T::Living, S::Individual),
    ("Yugoslavian Sign Language", "ysl", None, None, None, T::Living, S::Individual),
    ("Myanmar Sign Language", "ysm", None, None, None, T::Living, S::Individual),
    ("Sani", "ysn", None, None, None, T::Living, S::Individual),
    ("Nisi (China)", "yso", None, None, None, T::Living, S::Individual),
    ("Southern Lolopo", "ysp", None, None, None, T::Living, S::Individual),
    ("Sirenik Yupik", "ysr", None, None, None, T::Extinct, S::Individual),
    ("Yessan-Mayo", "yss", None, None, None, T::Living, S::Individual),
    ("Sanie", "ysy", None, None, None, T::Living, S::Individual),
    ("Talu", "yta", None, None, None, T::Living, S::Individual),
    ("Tanglang", "ytl", None, None, None, T::Living, S::Individual),
    ("Thopho", "ytp", None, None, None, T::Living, S::Individual),
    ("Yout Wam", "ytw", None, None, None, T::Living, S::Individual),
    ("Yatay", "yty", None, None, None, T::Extinct, S::Individual),
    ("Yucateco", "yua", None, None, None, T::Living, S::Individual),
    ("Yugambal", "yub", None, None, None, T::Extinct, S::Individual),
    ("Yuchi", "yuc", None, None, None, T::Living, S::Individual),
    ("Judeo-Tripolitanian Arabic", "yud", None, None, None, T::Living, S::Individual),
    ("Yue Chinese", "yue", None, None, None, T::Living, S::Individual),
    ("Havasupai-Walapai-Yavapai", "yuf", None, None, None, T::Living, S::Individual),
    ("Yug", "yug", None, None, None, T::Extinct, S::Individual),
    ("Yurutí", "yui", None, None, None, T::Living, S::Individual),
    ("Karkar-Yuri", "yuj", None, None, None, T::Living, S::Individual),
    ("Yuki", "yuk", None, None, None, T::Extinct, S::Individual),
    ("Yulu", "yul", None, None, None, T::Living, S::Individual),
    ("Quechan", "yum", None, None, None, T::Living, S::Individual),
    ("Bena (Nigeria)", "yun", None, None, None, T::Living, S::Individual),
    ("Yukpa", "yup", None, None, None, T::Living, S::Individual),
    ("Yuqui", "yuq", None, None, None, T::Living, S::Individual),
    ("Yurok", "yur", None, None, None, T::Extinct, S::Individual),
    ("Yopno", "yut", None, None, None, T::Living, S::Individual),
    ("Yau (Morobe Province)", "yuw", None, None, None, T::Living, S::Individual),
    ("Southern Yukaghir", "yux", None, None, None, T::Living, S::Individual),
    ("East Yugur", "yuy", None, None, None, T::Living, S::Individual),
    ("Yuracare", "yuz", None, None, None, T::Living, S::Individual),
    ("Yawa", "yva", None, None, None, T::Living, S::Individual),
    ("Yavitero", "yvt", None, None, None, T::Extinct, S::Individual),
    ("Kalou", "ywa", None, None, None, T::Living, S::Individual),
    ("Yinhawangka", "ywg", None, None, None, T::Living, S::Individual),
    ("Western Lalu", "ywl", None, None, None, T::Living, S::Individual),
    ("Yawanawa", "ywn", None, None, None, T::Living, S::Individual),
    ("Wuding-Luquan Yi", "ywq", None, None, None, T::Living, S::Individual),
    ("Yawuru", "ywr", None, None, None, T::Living, S::Individual),
    ("Xishanba Lalo", "ywt", None, None, None, T::Living, S::Individual),
    ("Wumeng Nasu", "ywu", None, None, None, T::Living, S::Individual),
    ("Yawarawarga", "yww", None, None, None, T::Extinct, S::Individual),
    ("Mayawali", "yxa", None, None, None, T::Extinct, S::Individual),
    ("Yagara", "yxg", None, None, None, T::Extinct, S::Individual),
    ("Yardliyawarra", "yxl", None, None, None, T::Extinct, S::Individual),
    ("Yinwum", "yxm", None, None, None, T::Extinct, S::Individual),
    ("Yuyu", "yxu", None, None, None, T::Extinct, S::Individual),
    ("Yabula Yabula", "yxy", None, None, None, T::Extinct, S::Individual),
    ("Yir Yoront", "yyr", None, None, None, T::Extinct, S::Individual),
    ("Yau (Sandaun Province)", "yyu", None, None, None, T::Living, S::Individual),
    ("Ayizi", "yyz", None, None, None, T::Living, S::Individual),
    ("E'ma Buyang", "yzg", None, None, None, T::Living, S::Individual),
    ("Zokhuo", "yzk", None, None, None, T::Living, S::Individual),
    ("Sierra de Juárez Zapotec", "zaa", None, None, None, T::Living, S::Individual),
    ("Western Tlacolula Valley Zapotec", "zab", None, None, None, T::Living, S::Individual),
    ("Ocotlán Zapotec", "zac", None, None, None, T::Living, S::Individual),
    ("Cajonos Zapotec", "zad", None, None, None, T::Living, S::Individual),
    ("Yareni Zapotec", "zae", None, None, None, T::Living, S::Individual),
    ("Ayoquesco Zapotec", "zaf", None, None, None, T::Living, S::Individual),
    ("Zaghawa", "zag", None, None, None, T::Living, S::Individual),
    ("Zangwal", "zah", None, None, None, T::Living, S::Individual),
    ("Isthmus Zapotec", "zai", None, None, None, T::Living, S::Individual),
    ("Zaramo", "zaj", None, None, None, T::Living, S::Individual),
    ("Zanaki", "zak", None, None, None, T::Living, S::Individual),
    ("Zauzou", "zal", None, None, None, T::Living, S::Individual),
    ("Miahuatlán Zapotec", "zam", None, None, None, T::Living, S::Individual),
    ("Ozolotepec Zapotec", "zao", None, None, None, T::Living, S::Individual),
    ("Zapotec", "zap", Some("zap"), Some("zap"), None, T::Living, S::MacroLanguage),
    ("Aloápam Zapotec", "zaq", None, None, None, T::Living, S::Individual),
    ("Rincón Zapotec", "zar", None, None, None, T::Living, S::Individual),
    ("Santo Domingo Albarradas Zapotec", "zas", None, None, None, T::Living, S::Individual),
    ("Tabaa Zapotec", "zat", None, None, None, T::Living, S::Individual),
    ("Zangskari", "zau", None, None, None, T::Living, S::Individual),
    ("Yatzachi Zapotec", "zav", None, None, None, T::Living, S::Individual),
    ("Mitla Zapotec", "zaw", None, None, None, T::Living, S::Individual),
    ("Xadani Zapotec", "zax", None, None, None, T::Living, S::Individual),
    ("Zayse-Zergulla", "zay", None, None, None, T::Living, S::Individual),
    ("Zari", "zaz", None, None, None, T::Living, S::Individual),
    ("Balaibalan", "zba", None, None, None, T::Constructed, S::Individual),
    ("Central Berawan", "zbc", None, None, None, T::Living, S::Individual),
    ("East Berawan", "zbe", None, None, None, T::Living, S::Individual),
    ("Blissymbols", "zbl", Some("zbl"), Some("zbl"), None, T::Constructed, S::Individual),
    ("Batui", "zbt", None, None, None, T::Living, S::Individual),
    ("Bu (Bauchi State)", "zbu", None, None, None, T::Living, S::Individual),
    ("West Berawan", "zbw", None, None, None, T::Living, S::Individual),
    ("Coatecas Altas Zapotec", "zca", None, None, None, T::Living, S::Individual),
    ("Las Delicias Zapotec", "zcd", None, None, None, T::Living, S::Individual),
    ("Central Hongshuihe Zhuang", "zch", None, None, None, T::Living, S::Individual),
    ("Ngazidja Comorian", "zdj", None, None, None, T::Living, S::Individual),
    ("Zeeuws", "zea", None, None, None, T::Living, S::Individual),
    ("Zenag", "zeg", None, None, None, T::Living, S::Individual),
    ("Eastern Hongshuihe Zhuang", "zeh", None, None, None, T::Living, S::Individual),
    ("Zenaga", "zen", Some("zen"), Some("zen"), None, T::Living, S::Individual),
    ("Kinga", "zga", None, None, None, T::Living, S::Individual),
    ("Guibei Zhuang", "zgb", None, None, None, T::Living, S::Individual),
    ("Standard Moroccan Tamazight", "zgh", Some("zgh"), Some("zgh"), None, T::Living, S::Individual),
    ("Minz Zhuang", "zgm", None, None, None, T::Living, S::Individual),
    ("Guibian Zhuang", "zgn", None, None, None, T::Living, S::Individual),
    ("Magori", "zgr", None, None, None, T::Living, S::Individual),
    ("Zhuang", "zha", Some("zha"), Some("zha"), Some("za"), T::Living, S::MacroLanguage),
    ("Zhaba", "zhb", None, None, None, T::Living, S::Individual),
    ("Dai Zhuang", "zhd", None, None, None, T::Living, S::Individual),
    ("Zhire", "zhi", None, None, None, T::Living, S::Individual),
    ("Nong Zhuang", "zhn", None, None, None, T::Living, S::Individual),
    ("Chinese", "zho", Some("chi"), Some("zho"), Some("zh"), T::Living, S::MacroLanguage),
    ("Zhoa", "zhw", None, None, None, T::Living, S::Individual),
    ("Zia", "zia", None, None, None, T::Living, S::Individual),
    ("Zimbabwe Sign Language", "zib", None, None, None, T::Living, S::Individual),
    ("Zimakani", "zik", None, None, None, T::Living, S::Individual),
    ("Zialo", "zil", None, None, None, T::Living, S::Individual),
    ("Mesme", "zim", None, None, None, T::Living, S::Individual),
    ("Zinza", "zin", None, None, None, T::Living, S::Individual),
    ("Zigula", "ziw", None, None, None, T::Living, S::Individual),
    ("Zizilivakan", "ziz", None, None, None, T::Living, S::Individual),
    ("Kaimbulawa", "zka", None, None, None, T::Living, S::Individual),
    ("Koibal", "zkb", None, None, None, T::Extinct, S::Individual),
    ("Kadu", "zkd", None, None, None, T::Living, S::Individual),
    ("Koguryo", "zkg", None, None, None, T::Ancient, S::Individual),
    ("Khorezmian", "zkh", None, None, None, T::Historical, S::Individual),
    ("Karankawa", "zkk", None, None, None, T::Extinct, S::Individual),
    ("Kanan", "zkn", None, None, None, T::Living, S::Individual),
    ("Kott", "zko", None, None, None, T::Extinct, S::Individual),
    ("São Paulo Kaingáng", "zkp", None, None, None, T::Extinct, S::Individual),
    ("Zakhring", "zkr", None, None, None, T::Living, S::Individual),
    ("Kitan", "zkt", None, None, None, T::Historical, S::Individual),
    ("Kaurna", "zku", None, None, None, T::Living, S::Individual),
    ("Krevinian", "zkv", None, None, None, T::Extinct, S::Individual),
    ("Khazar", "zkz", None, None, None, T::Historical, S::Individual),
    ("Zula", "zla", None, None, None, T::Living, S::Individual),
    ("Liujiang Zhuang", "zlj", None, None, None, T::Living, S::Individual),
    ("Malay (individual language)", "zlm", None, None, None, T::Living, S::Individual),
    ("Lianshan Zhuang", "zln", None, None, None, T::Living, S::Individual),
    ("Liuqian Zhuang", "zlq", None, None, None, T::Living, S::Individual),
    ("Manda (Australia)", "zma", None, None, None, T::Living, S::Individual),
    ("Zimba", "zmb", None, None, None, T::Living, S::Individual),
    ("Margany", "zmc", None, None, None, T::Extinct, S::Individual),
    ("Maridan", "zmd", None, None, None, T::Living, S::Individual),
    ("Mangerr", "zme", None, None, None, T::Extinct, S::Individual),
    ("Mfinu", "zmf", None, None, None, T::Living, S::Individual),
    ("Marti Ke", "zmg", None, None, None, T::Living, S::Individual),
    ("Makolkol", "zmh", None, None, None, T::Extinct, S::Individual),
    ("Negeri Sembilan Malay", "zmi", None, None, None, T::Living, S::Individual),
    ("Maridjabin", "zmj", None, None, None, T::Living, S::Individual),
    ("Mandandanyi", "zmk", None, None, None, T::Extinct, S::Individual),
    ("Matngala", "zml", None, None, None, T::Extinct, S::Individual),
    ("Marimanindji", "zmm", None, None, None, T::Living, S::Individual),
    ("Mbangwe", "zmn", None, None, None, T::Living, S::Individual),
    ("Molo", "zmo", None, None, None, T::Living, S::Individual),
    ("Mpuono", "zmp", None, None, None, T::Living, S::Individual),
    ("Mituku", "zmq", None, None, None, T::Living, S::Individual),
    ("Maranunggu", "zmr", None, None, None, T::Living, S::Individual),
    ("Mbesa", "zms", None, None, None, T::Living, S::Individual),
    ("Maringarr", "zmt", None, None, None, T::Living, S::Individual),
    ("Muruwari", "zmu", None, None, None, T::Extinct, S::Individual),
    ("Mbariman-Gudhinma", "zmv", None, None, None, T::Extinct, S::Individual),
    ("Mbo (Democratic Republic of Congo)", "zmw", None, None, None, T::Living, S::Individual),
    ("Bomitaba", "zmx", None, None, None, T::Living, S::Individual),
    ("Mariyedi", "zmy", None, None, None, T::Living, S::Individual),
    ("Mbandja", "zmz", None, None, None, T::Living, S::Individual),
    ("Zan Gula", "zna", None, None, None, T::Living, S::Individual),
    ("Zande (individual language)", "zne", None, None, None, T::Living, S::Individual),
    ("Mang", "zng", None, None, None, T::Living, S::Individual),
    ("Manangkari", "znk", None, None, None, T::Extinct, S::Individual),
    ("Mangas", "zns", None, None, None, T::Living, S::Individual),
    ("Copainalá Zoque", "zoc", None, None, None, T::Living, S::Individual),
    ("Chimalapa Zoque", "zoh", None, None, None, T::Living, S::Individual),
    ("Zou", "zom", None, None, None, T::Living, S::Individual),
    ("Asunción Mixtepec Zapotec", "zoo", None, None, None, T::Living, S::Individual),
    ("Tabasco Zoque", "zoq", None, None, None, T::Living, S::Individual),
    ("Rayón Zoque", "zor", None, None, None, T::Living, S::Individual),
    ("Francisco León Zoque", "zos", None, None, None, T::Living, S::Individual),
    ("Lachiguiri Zapotec", "zpa", None, None, None, T::Living, S::Individual),
    ("Yautepec Zapotec", "zpb", None, None, None, T::Living, S::Individual),
    ("Choapan Zapotec", "zpc", None, None, None, T::Living, S::Individual),
    ("Southeastern Ixtlán Zapotec", "zpd", None, None, None, T::Living, S::Individual),
    ("Petapa Zapotec", "zpe", None, None, None, T::Living, S::Individual),
    ("San Pedro Quiatoni Zapotec", "zpf", None, None, None, T::Living, S::Individual),
    ("Guevea De Humboldt Zapotec", "zpg", None, None, None, T::Living, S::Individual),
    ("Totomachapan Zapotec", "zph", None, None, None, T::Living, S::Individual),
    ("Santa María Quiegolani Zapotec", "zpi", None, None, None, T::Living, S::Individual),
    ("Quiavicuzas Zapotec", "zpj", None, None, None, T::Living, S::Individual),
    ("Tlacolulita Zapotec", "zpk", None, None, None, T::Living, S::Individual),
    ("Lachixío Zapotec", "zpl", None, None, None, T::Living, S::Individual),
    ("Mixtepec Zapotec", "zpm", None, None, None, T::Living, S::Individual),
    ("Santa Inés Yatzechi Zapotec", "zpn", None, None, None, T::Living, S::Individual),
    ("Amatlán Zapotec", "zpo", None, None, None, T::Living, S::Individual),
    ("El Alto Zapotec", "zpp", None, None, None, T::Living, S::Individual),
    ("Zoogocho Zapotec", "zpq", None, None, None, T::Living, S::Individual),
    ("Santiago Xanica Zapotec", "zpr", None, None, None, T::Living, S::Individual),
    ("Coatlán Zapotec", "zps", None, None, None, T::Living, S::Individual),
    ("San Vicente Coatlán Zapotec", "zpt", None, None, None, T::Living, S::Individual),
    ("Yalálag Zapotec", "zpu", None, None, None, T::Living, S::Individual),
    ("Chichicapan Zapotec", "zpv", None, None, None, T::Living, S::Individual),
    ("Zaniza Zapotec", "zpw", None, None, None, T::Living, S::Individual),
    ("San Baltazar Loxicha Zapotec", "zpx", None, None, None, T::Living, S::Individual),
    ("Mazaltepec Zapotec", "zpy", None, None, None, T::Living, S::Individual),
    ("Texmelucan Zapotec", "zpz", None, None, None, T::Living, S::Individual),
    ("Qiubei Zhuang", "zqe", None, None, None, T::Living, S::Individual),
    ("Kara (Korea)", "zra", None, None, None, T::Ancient, S::Individual),
    ("Mirgan", "zrg", None, None, None, T::Living, S::Individual),
    ("Zerenkel", "zrn", None, None, None, T::Living, S::Individual),
    ("Záparo", "zro", None, None, None, T::Living, S::Individual),
    ("Zarphatic", "zrp", None, None, None, T::Extinct, S::Individual),
    ("Mairasi", "zrs", None, None, None, T::Living, S::Individual),
    ("Sarasira", "zsa", None, None, None, T::Living, S::Individual),
    ("Kaskean", "zsk", None, None, None, T::Ancient, S::Individual),
    ("Zambian Sign Language", "zsl", None, None, None, T::Living, S::Individual),
    ("Standard Malay", "zsm", None, None, None, T::Living, S::Individual),
    ("Southern Rincon Zapotec", "zsr", None, None, None, T::Living, S::Individual),
    ("Sukurum", "zsu", None, None, None, T::Living, S::Individual),
    ("Elotepec Zapotec", "zte", None, None, None, T::Living, S::Individual),
    ("Xanaguía Zapotec", "ztg", None, None, None, T::Living, S::Individual),
    ("Lapaguía-Guivini Zapotec", "ztl", None, None, None, T::Living, S::Individual),
    ("San Agustín Mixtepec Zapotec", "ztm", None, None, None, T::Living, S::Individual),
    ("Santa Catarina Albarradas Zapotec", "ztn", None, None, None, T::Living, S::Individual),
    ("Loxicha Zapotec", "ztp", None, None, None, T::Living, S::Individual),
    ("Quioquitani-Quierí Zapotec", "ztq", None, None, None, T::Living, S::Individual),
    ("Tilquiapan Zapotec", "zts", None, None, None, T::Living, S::Individual),
    ("Tejalapan Zapotec", "ztt", None, None, None, T::Living, S::Individual),
    ("Güilá Zapotec", "ztu", None, None, None, T::Living, S::Individual),
    ("Zaachila Zapotec", "ztx", None, None, None, T::Living, S::Individual),
    ("Yatee Zapotec", "zty", None, None, None, T::Living, S::Individual),
    ("Zeem", "zua", None, None, None, T::Living, S::Individual),
    ("Tokano", "zuh", None, None, None, T::Living, S::Individual),
    ("Zulu", "zul", Some("zul"), Some("zul"), Some("zu"), T::Living, S::Individual),
    ("Kumzari", "zum", None, None, None, T::Living, S::Individual),
    ("Zuni", "zun", Some("zun"), Some("zun"), None, T::Living, S::Individual),
    ("Zumaya", "zuy", None, None, None, T::Living, S::Individual),
    ("Zay", "zwa", None, None, None, T::Living, S::Individual),
    ("No linguistic content", "zxx", Some("zxx"), Some("zxx"), None, T::Special, S::Special),
    ("Yongbei Zhuang", "zyb", None, None, None, T::Living, S::Individual),
    ("Yang Zhuang", "zyg", None, None, None, T::Living, S::Individual),
    ("Youjiang Zhuang", "zyj", None, None, None, T::Living, S::Individual),
    ("Yongnan Zhuang", "zyn", None, None, None, T::Living, S::Individual),
    ("Zyphe Chin", "zyp", None, None, None, T::Living, S::Individual),
    ("Zaza", "zza", Some("zza"), Some("zza"), None, T::Living, S::MacroLanguage),
    ("Zuojiang Zhuang", "zzj", None, None, None, T::Living, S::Individual),
];
