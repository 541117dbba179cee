//! Error taxonomy and the closed warning set.
//!
//! The pipeline threads an internal `Outcome<T> = Result<T, Unparsable>`
//! (see [`crate::jobs`]) through every normalisation/extraction step so that
//! "this input cannot be a scientific name" is ordinary control flow, not a
//! panic or a stringly-typed error. [`UnparsableName`] and
//! [`UnparsableAuthorship`] are the two public shapes that escape the crate;
//! [`ParserError::IllegalArgument`] is reserved for programmer mistakes made
//! while constructing a [`crate::NameParser`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::NameType;

/// The classifier's best guess at why a string is not a parseable name,
/// threaded internally before being surfaced as [`UnparsableName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Unparsable {
    pub name_type: NameType,
    pub input: String,
}

impl Unparsable {
    pub fn new(name_type: NameType, input: impl Into<String>) -> Self {
        Unparsable {
            name_type,
            input: input.into(),
        }
    }
}

/// The sum type threaded through the normalisation pipeline and parsing
/// jobs: either the pipeline's current text/value, or the reason parsing
/// must stop (Design Note §9, "exception-as-control-flow → typed errors").
pub(crate) type Outcome<T> = Result<T, Unparsable>;

/// Result of parsing a full scientific name: either a structured record or
/// the reason it could not be decomposed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unparsable name ({name_type:?}): {input:?}")]
pub struct UnparsableName {
    pub name_type: NameType,
    pub input: String,
}

impl From<Unparsable> for UnparsableName {
    fn from(u: Unparsable) -> Self {
        UnparsableName {
            name_type: u.name_type,
            input: u.input,
        }
    }
}

/// Result of parsing an authorship string that did not match the
/// authorship grammar.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unparsable authorship: {input:?}")]
pub struct UnparsableAuthorship {
    pub input: String,
}

/// Programmer-error cases raised only from constructors, never from
/// `parse`/`parse_authorship` — those two operations only ever raise the
/// unparsable kinds above.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("illegal argument: {0}")]
    IllegalArgument(String),
}

/// Closed set of warning codes a [`crate::ParsedName`] may carry.
///
/// Exact wire text reproduced in `as_str`/`Display` below so
/// that a caller matching on warning text by name still compiles against
/// the same literals if they compare against `to_string()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Warning {
    NullEpithet,
    UnusualCharacters,
    SubspeciesAssigned,
    LcMonomial,
    Indetermined,
    HigherRankBinomial,
    QuestionMarksRemoved,
    ReplEnclosingQuote,
    MissingGenus,
    RankMismatch,
    HtmlEntities,
    XmlTags,
    BlacklistedEpithet,
    NomenclaturalReference,
}

impl Warning {
    pub fn as_str(self) -> &'static str {
        match self {
            Warning::NullEpithet => "NULL_EPITHET",
            Warning::UnusualCharacters => "UNUSUAL_CHARACTERS",
            Warning::SubspeciesAssigned => "SUBSPECIES_ASSIGNED",
            Warning::LcMonomial => "LC_MONOMIAL",
            Warning::Indetermined => "INDETERMINED",
            Warning::HigherRankBinomial => "HIGHER_RANK_BINOMIAL",
            Warning::QuestionMarksRemoved => "QUESTION_MARKS_REMOVED",
            Warning::ReplEnclosingQuote => "REPL_ENCLOSING_QUOTE",
            Warning::MissingGenus => "MISSING_GENUS",
            Warning::RankMismatch => "RANK_MISMATCH",
            Warning::HtmlEntities => "HTML_ENTITIES",
            Warning::XmlTags => "XML_TAGS",
            Warning::BlacklistedEpithet => "BLACKLISTED_EPITHET",
            Warning::NomenclaturalReference => "NOMENCLATURAL_REFERENCE",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
