// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering of registry query results

pub mod formatter;
pub mod output;

use crate::registry::Registry;
use crate::types::{LanguageScope, LanguageType};
use serde::Serialize;
use std::collections::BTreeMap;

pub use formatter::LanguageFormatter;
pub use output::OutputFormat;

/// Record counts per type and per scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub total: usize,
    pub by_type: BTreeMap<LanguageType, usize>,
    pub by_scope: BTreeMap<LanguageScope, usize>,
}

impl RegistryStats {
    /// Count through the category filters; every variant gets an entry, even
    /// when its count is zero.
    pub fn collect(registry: &Registry) -> Self {
        let by_type = LanguageType::ALL
            .into_iter()
            .map(|ty| (ty, registry.filter_by_type(ty).count()))
            .collect();
        let by_scope = LanguageScope::ALL
            .into_iter()
            .map(|scope| (scope, registry.filter_by_scope(scope).count()))
            .collect();
        Self {
            total: registry.len(),
            by_type,
            by_scope,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_partition_the_registry() {
        let registry = Registry::builtin();
        let stats = RegistryStats::collect(registry);
        assert_eq!(stats.by_type.values().sum::<usize>(), stats.total);
        assert_eq!(stats.by_scope.values().sum::<usize>(), stats.total);
        assert_eq!(stats.by_type.len(), LanguageType::ALL.len());
        assert_eq!(stats.by_scope[&LanguageScope::Collective], 0);
    }

    #[test]
    fn stats_serialize_with_string_keys() {
        let stats = RegistryStats::collect(Registry::builtin());
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json["by_type"]["living"].as_u64().unwrap() > 7000);
        assert_eq!(json["by_scope"]["macro_language"], 62);
    }
}
