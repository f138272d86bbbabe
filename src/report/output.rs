// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed query results

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored table
    #[default]
    #[value(alias = "txt")]
    Text,
    Json,
    #[value(alias = "yml")]
    Yaml,
}

impl OutputFormat {
    /// Serialize `value` for the structured formats.
    ///
    /// Returns `None` for [`OutputFormat::Text`], which is rendered by the
    /// formatter instead.
    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<Option<String>> {
        match self {
            OutputFormat::Text => Ok(None),
            OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
            OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Registry;

    #[test]
    fn format_flag_accepts_aliases() {
        let parse = |value: &str| OutputFormat::from_str(value, true);
        assert_eq!(parse("YML"), Ok(OutputFormat::Yaml));
        assert_eq!(parse("txt"), Ok(OutputFormat::Text));
        assert_eq!(parse("json"), Ok(OutputFormat::Json));
        assert!(parse("nickel").is_err());
    }

    #[test]
    fn json_output_contains_codes() {
        let english = Registry::builtin().lookup_by_part1("en").unwrap();
        let json = OutputFormat::Json.serialize(english).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["part3"], "eng");
        assert_eq!(value["name"], "English");
    }

    #[test]
    fn yaml_output_lists_records() {
        let found = Registry::builtin().search_by_name("Esperanto", false).unwrap();
        let yaml = OutputFormat::Yaml.serialize(&found).unwrap().unwrap();
        assert!(yaml.contains("part3: epo"));
        assert!(yaml.contains("type: constructed"));
    }

    #[test]
    fn text_is_not_serialized() {
        assert!(OutputFormat::Text.serialize(&1u8).unwrap().is_none());
    }
}
