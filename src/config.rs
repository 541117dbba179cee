//! Per-instance configuration overrides: exact-string maps
//! consulted before a parse is submitted to the harness, for known-bad
//! strings and curator-verified cases.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::jobs::ParsedAuthorship;
use crate::model::ParsedName;

/// Mutable, concurrent override maps. Reads and writes are atomic — a
/// concurrent reader during a write sees either the old or the new value,
/// never a torn one, because each map is guarded by its own
/// [`parking_lot::RwLock`].
#[derive(Default)]
pub struct ParserConfigs {
    names: RwLock<HashMap<String, ParsedName>>,
    authorships: RwLock<HashMap<String, ParsedAuthorship>>,
}

impl ParserConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match lookup consulted by the harness before submitting a
    /// parsing job.
    pub fn for_name(&self, name: &str) -> Option<ParsedName> {
        self.names.read().get(name).cloned()
    }

    pub fn set_name(&self, name: impl Into<String>, parsed: ParsedName) {
        self.names.write().insert(name.into(), parsed);
    }

    pub fn remove_name(&self, name: &str) -> Option<ParsedName> {
        self.names.write().remove(name)
    }

    pub fn for_authorship(&self, text: &str) -> Option<ParsedAuthorship> {
        self.authorships.read().get(text).cloned()
    }

    pub fn set_authorship(&self, text: impl Into<String>, parsed: ParsedAuthorship) {
        self.authorships.write().insert(text.into(), parsed);
    }

    pub fn remove_authorship(&self, text: &str) -> Option<ParsedAuthorship> {
        self.authorships.write().remove(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NameType;

    #[test]
    fn override_round_trips() {
        let configs = ParserConfigs::new();
        let parsed = ParsedName::empty(NameType::Scientific);
        configs.set_name("weird string", parsed.clone());
        assert_eq!(configs.for_name("weird string"), Some(parsed));
        assert_eq!(configs.for_name("other string"), None);
    }

    #[test]
    fn remove_clears_override() {
        let configs = ParserConfigs::new();
        configs.set_name("x", ParsedName::empty(NameType::Scientific));
        assert!(configs.remove_name("x").is_some());
        assert_eq!(configs.for_name("x"), None);
    }
}
