//! # sciname-parser
//!
//! Bounded-time parser for Linnaean scientific names and authorships.
//!
//! ## Module structure (dependency order)
//!
//! ```text
//! harness    → bounded worker pool, wall-clock deadline
//!   ↓
//! config     → per-string/per-authorship overrides consulted first
//!   ↓
//! jobs       → name-parsing job, authorship-parsing job, classifier
//!   ↓
//! normalize  → the fixed normalisation pipeline
//!   ↓
//! regexes    → named atoms + compiled top-level patterns
//!   ↓
//! vocab      → frozen vocabulary tables
//!   ↓
//! model/error → ParsedName, Authorship, Rank, NameType, warnings, errors
//! ```
//!
//! ## Invariants
//!
//! Every [`ParsedName`] returned by [`NameParser::parse`] satisfies:
//! 1. If `name_type` is `Scientific`, at least one of `uninomial`, `genus`
//!    is set.
//! 2. If `specific_epithet` is set, `genus` is set.
//! 3. If `infraspecific_epithet` is set, both `genus` and `specific_epithet`
//!    are set, or the name carries the `Indetermined` warning.
//! 4. If `notho` is set, the corresponding epithet slot is non-null.
//! 5. `state == Complete` iff `unparsed` is empty.
//! 6. `rank` is consistent with populated epithet slots; mismatches produce
//!    the `RankMismatch` warning but never fail the parse.
//! 7. Epithet strings are lower-case except generic-level names.
//!
//! See [`ParsedName::check_invariants`] for the machine-checkable subset.

pub mod config;
pub mod error;
pub mod harness;
pub mod jobs;
pub mod model;
pub mod normalize;
pub mod regexes;
pub mod vocab;

pub use config::ParserConfigs;
pub use error::{ParserError, UnparsableAuthorship, UnparsableName, Warning};
pub use harness::HarnessConfig;
pub use jobs::ParsedAuthorship;
pub use model::{Authorship, NameType, NomCode, Notho, ParseState, ParsedName, Rank};

use std::sync::Arc;

use harness::Harness;

/// The library's facade: submits overridden or freshly-parsed names and
/// authorships through the bounded execution harness.
///
/// Cheap to clone — internally an `Arc` handle over the harness and the
/// override maps, so multiple call sites can share one pool: workers are
/// shared across all cloned parser instances, not spun up per clone.
#[derive(Clone)]
pub struct NameParser {
    harness: Harness,
    configs: Arc<ParserConfigs>,
}

impl NameParser {
    /// Builds a parser with the given harness configuration. Fails only for
    /// programmer errors (non-positive timeout, zero max pool size).
    pub fn new(config: HarnessConfig) -> Result<Self, ParserError> {
        Ok(NameParser {
            harness: Harness::new(config)?,
            configs: Arc::new(ParserConfigs::new()),
        })
    }

    /// Parses `name` into a [`ParsedName`], or returns the classifier's
    /// best-guess [`UnparsableName`]. `rank` and `code` are hints: `rank`
    /// biases ambiguous binomial/infrageneric readings, `code` biases
    /// rank-marker resolution.
    pub fn parse(&self, name: &str, rank: Rank, code: Option<NomCode>) -> Result<ParsedName, UnparsableName> {
        if let Some(overridden) = self.configs.for_name(name) {
            return Ok(overridden);
        }

        let owned = name.to_string();
        match self.harness.execute(move || jobs::parse_name(&owned, rank, code)) {
            Some(result) => result,
            None => Err(UnparsableName {
                name_type: NameType::NoName,
                input: name.to_string(),
            }),
        }
    }

    /// Parses a free-standing authorship string, or returns
    /// [`UnparsableAuthorship`].
    pub fn parse_authorship(&self, text: &str) -> Result<ParsedAuthorship, UnparsableAuthorship> {
        if let Some(overridden) = self.configs.for_authorship(text) {
            return Ok(overridden);
        }

        let owned = text.to_string();
        match self.harness.execute(move || jobs::parse_authorship(&owned)) {
            Some(result) => result,
            None => Err(UnparsableAuthorship {
                input: text.to_string(),
            }),
        }
    }

    /// The mutable overrides handle.
    pub fn configs(&self) -> &ParserConfigs {
        &self.configs
    }

    /// Releases worker threads. Idempotent; also run on `Drop`.
    pub fn close(&self) {
        self.harness.close();
    }
}

impl Default for NameParser {
    fn default() -> Self {
        NameParser::new(HarnessConfig::default()).expect("default harness config is always valid")
    }
}

impl Drop for NameParser {
    fn drop(&mut self) {
        self.harness.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_simple_binomial() {
        let parser = NameParser::default();
        let parsed = parser.parse("Abies alba Mill.", Rank::Unranked, None).unwrap();
        assert_eq!(parsed.genus.as_deref(), Some("Abies"));
        assert_eq!(parsed.specific_epithet.as_deref(), Some("alba"));
    }

    #[test]
    fn override_bypasses_normalisation() {
        let parser = NameParser::default();
        let mut expected = ParsedName::empty(NameType::Scientific);
        expected.genus = Some("Overridden".into());
        parser.configs().set_name("garbled $$$ input", expected.clone());
        let parsed = parser.parse("garbled $$$ input", Rank::Unranked, None).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn authorship_override_round_trips() {
        let parser = NameParser::default();
        let expected = ParsedAuthorship {
            combination: Some(Authorship {
                authors: vec!["Mill.".into()],
                ex_authors: vec![],
                year: None,
            }),
            ..Default::default()
        };
        parser.configs().set_authorship("???", expected.clone());
        let parsed = parser.parse_authorship("???").unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn close_is_idempotent_and_parses_fail_afterwards() {
        let parser = NameParser::default();
        parser.close();
        parser.close();
        let err = parser.parse("Abies alba Mill.", Rank::Unranked, None).unwrap_err();
        assert_eq!(err.name_type, NameType::NoName);
    }

    #[test]
    fn rejects_otu_identifiers() {
        let parser = NameParser::default();
        let err = parser.parse("BOLD:AAX3687", Rank::Unranked, None).unwrap_err();
        assert_eq!(err.name_type, NameType::Otu);
    }
}
