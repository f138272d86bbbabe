// SPDX-License-Identifier: PMPL-1.0-or-later

//! Text rendering of query results

use crate::i18n::Locale;
use crate::language::Language;
use crate::report::RegistryStats;
use colored::*;

pub struct LanguageFormatter;

impl LanguageFormatter {
    pub fn new() -> Self {
        Self
    }

    /// One line per record: codes, name, type and scope.
    pub fn render_list(&self, languages: &[&Language]) -> String {
        let mut lines = Vec::with_capacity(languages.len() + 2);
        lines.push(format!(
            "{}",
            format!(
                "{:<5} {:<6} {:<6} {:<5} {:<12} {:<14} {}",
                "part3", "part2b", "part2t", "part1", "type", "scope", "name"
            )
            .bold()
        ));
        for language in languages {
            lines.push(format!(
                "{:<5} {:<6} {:<6} {:<5} {:<12} {:<14} {}",
                language.part3(),
                language.part2b().unwrap_or("-"),
                language.part2t().unwrap_or("-"),
                language.part1().unwrap_or("-"),
                language.language_type().label(),
                language.scope().label(),
                language.name()
            ));
        }
        lines.push(format!("{} language(s)", languages.len()).dimmed().to_string());
        lines.join("\n")
    }

    /// Detailed view of a single record.
    pub fn render_detail(&self, language: &Language) -> String {
        let mut lines = Vec::new();
        lines.push(format!("{}", language.name().bold().cyan()));
        lines.push(format!("  ISO 639-3:   {}", language.part3()));
        lines.push(format!("  ISO 639-2/B: {}", language.part2b().unwrap_or("-")));
        lines.push(format!("  ISO 639-2/T: {}", language.part2t().unwrap_or("-")));
        lines.push(format!("  ISO 639-1:   {}", language.part1().unwrap_or("-")));
        lines.push(format!("  Type:        {}", language.language_type()));
        lines.push(format!("  Scope:       {}", language.scope()));
        lines.join("\n")
    }

    pub fn render_locale(&self, language: &Language, locale: &Locale) -> String {
        if locale.is_invariant() {
            format!(
                "{}: {}",
                language,
                "no specific locale (invariant)".yellow()
            )
        } else {
            format!(
                "{}: {} {}",
                language,
                locale.tag.green(),
                format!("({})", locale.english_name).dimmed()
            )
        }
    }

    pub fn render_stats(&self, stats: &RegistryStats) -> String {
        let mut lines = Vec::new();
        lines.push(format!("{}", "ISO 639 REGISTRY".bold().yellow()));
        lines.push(format!("  Languages: {}", stats.total));
        lines.push(String::new());
        lines.push(format!("  {}", "By type".bold()));
        for (language_type, count) in &stats.by_type {
            lines.push(format!("    {:<14} {:>6}", language_type.label(), count));
        }
        lines.push(format!("  {}", "By scope".bold()));
        for (scope, count) in &stats.by_scope {
            lines.push(format!("    {:<14} {:>6}", scope.label(), count));
        }
        lines.join("\n")
    }
}

impl Default for LanguageFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Registry;

    #[test]
    fn list_includes_codes_and_count() {
        colored::control::set_override(false);
        let registry = Registry::builtin();
        let french = registry.lookup_by_part3("fra").unwrap();
        let text = LanguageFormatter::new().render_list(&[french]);
        assert!(text.contains("fra   fre    fra    fr    living"));
        assert!(text.ends_with("1 language(s)"));
    }

    #[test]
    fn detail_marks_absent_codes() {
        colored::control::set_override(false);
        let ghotuo = Registry::builtin().lookup_by_part3("aaa").unwrap();
        let text = LanguageFormatter::new().render_detail(ghotuo);
        assert!(text.contains("ISO 639-1:   -"));
        assert!(text.contains("Scope:       individual"));
    }

    #[test]
    fn stats_lists_every_category() {
        colored::control::set_override(false);
        let stats = RegistryStats::collect(Registry::builtin());
        let text = LanguageFormatter::new().render_stats(&stats);
        assert!(text.contains("constructed"));
        assert!(text.contains("macrolanguage"));
    }
}
