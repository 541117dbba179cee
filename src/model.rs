//! The structured output of a parse: [`ParsedName`] and its supporting enums.
//!
//! Mirrors the data model of a Linnaean scientific name as decomposed by the
//! parsing pipeline: genus/uninomial, infrageneric and specific epithets,
//! rank, hybrid markers, authorship, and the bookkeeping fields that record
//! how much of the input was actually consumed.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Warning;
use crate::vocab;

/// Which taxonomic rank a parsed name belongs to.
///
/// Ordered domain…form, plus `Unranked` and `Other` as escape hatches for
/// names whose rank marker does not map onto the closed set below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Rank {
    Domain,
    Kingdom,
    Subkingdom,
    Phylum,
    Subphylum,
    Class,
    Subclass,
    Order,
    Suborder,
    Family,
    Subfamily,
    Tribe,
    Subtribe,
    Genus,
    Subgenus,
    Section,
    Subsection,
    Series,
    Subseries,
    SpeciesAggregate,
    Species,
    Subspecies,
    Variety,
    Subvariety,
    Form,
    Subform,
    Cultivar,
    CultivarGroup,
    Grex,
    Strain,
    Unranked,
    Other,
}

impl Default for Rank {
    fn default() -> Self {
        Rank::Unranked
    }
}

impl Rank {
    /// True for ranks at or below species (species, subspecies, variety, …).
    pub fn is_infraspecific(self) -> bool {
        matches!(
            self,
            Rank::Subspecies | Rank::Variety | Rank::Subvariety | Rank::Form | Rank::Subform
        )
    }

    /// True for ranks below genus but above species (section, series, …).
    pub fn is_infrageneric(self) -> bool {
        matches!(
            self,
            Rank::Subgenus | Rank::Section | Rank::Subsection | Rank::Series | Rank::Subseries
        )
    }

    pub fn is_species_or_below(self) -> bool {
        self == Rank::Species || self.is_infraspecific()
    }
}

/// Which part of a name the hybrid marker (`×`) attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notho {
    Generic,
    Infrageneric,
    Specific,
    Infraspecific,
}

/// Nomenclatural code governing a name, when it can be inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NomCode {
    Bacterial,
    Botanical,
    Cultivars,
    Virus,
    Zoological,
}

/// Classification of the input, whether or not it was decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NameType {
    Scientific,
    Virus,
    HybridFormula,
    Informal,
    Otu,
    Placeholder,
    NoName,
}

impl Default for NameType {
    fn default() -> Self {
        NameType::NoName
    }
}

/// How much of the input the regex consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseState {
    Complete,
    Partial,
    None,
}

impl Default for ParseState {
    fn default() -> Self {
        ParseState::None
    }
}

/// One author block: `{authors, exAuthors, year}`.
///
/// Author strings are preserved verbatim post-normalisation; the pipeline
/// never changes their capitalisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Authorship {
    pub authors: Vec<String>,
    pub ex_authors: Vec<String>,
    pub year: Option<String>,
}

impl Authorship {
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.ex_authors.is_empty() && self.year.is_none()
    }
}

impl fmt::Display for Authorship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.ex_authors.is_empty() {
            write!(f, "{} ex ", self.ex_authors.join(" & "))?;
        }
        write!(f, "{}", self.authors.join(" & "))?;
        if let Some(year) = &self.year {
            write!(f, ", {year}")?;
        }
        Ok(())
    }
}

/// The fully structured decomposition of a scientific name.
///
/// See the crate-level invariants documented in [`crate`]; every value
/// returned from [`crate::NameParser::parse`] satisfies them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedName {
    pub uninomial: Option<String>,
    pub genus: Option<String>,
    pub infrageneric_epithet: Option<String>,
    pub specific_epithet: Option<String>,
    pub infraspecific_epithet: Option<String>,
    pub cultivar_epithet: Option<String>,
    pub strain: Option<String>,
    pub phrase: Option<String>,

    pub notho: Option<Notho>,
    pub rank: Rank,
    pub code: Option<NomCode>,

    pub combination_authorship: Option<Authorship>,
    pub basionym_authorship: Option<Authorship>,
    pub sanctioning_author: Option<String>,

    pub taxonomic_note: Option<String>,
    pub nomenclatural_note: Option<String>,
    pub published_in: Option<String>,
    pub remarks: Option<String>,

    pub name_type: NameType,
    pub candidatus: bool,
    pub doubtful: bool,
    pub manuscript: bool,

    pub state: ParseState,
    pub unparsed: Vec<String>,
    pub warnings: Vec<Warning>,
}

impl ParsedName {
    /// A bare name classified as the given type, with nothing else set.
    pub fn empty(name_type: NameType) -> Self {
        ParsedName {
            name_type,
            rank: Rank::Unranked,
            ..Default::default()
        }
    }

    pub fn add_warning(&mut self, warning: Warning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// Checks the §3 invariants. Used by tests and debug assertions at the
    /// end of the name-parsing job; never called on the hot path in release
    /// builds beyond the cheap checks already enforced by construction.
    pub fn check_invariants(&self) -> Result<(), &'static str> {
        if self.name_type == NameType::Scientific
            && self.uninomial.is_none()
            && self.genus.is_none()
        {
            return Err("scientific name without uninomial or genus");
        }
        if self.specific_epithet.is_some() && self.genus.is_none() {
            return Err("specific epithet without genus");
        }
        if self.infraspecific_epithet.is_some()
            && (self.genus.is_none() || self.specific_epithet.is_none())
            && !self.warnings.contains(&Warning::Indetermined)
        {
            return Err("infraspecific epithet without genus+species, not flagged INDETERMINED");
        }
        if let Some(notho) = self.notho {
            let slot_set = match notho {
                Notho::Generic => self.uninomial.is_some() || self.genus.is_some(),
                Notho::Infrageneric => self.infrageneric_epithet.is_some(),
                Notho::Specific => self.specific_epithet.is_some(),
                Notho::Infraspecific => self.infraspecific_epithet.is_some(),
            };
            if !slot_set {
                return Err("notho set without corresponding epithet slot");
            }
        }
        if (self.state == ParseState::Complete) != self.unparsed.is_empty() {
            return Err("state COMPLETE must coincide with empty unparsed");
        }
        Ok(())
    }

    /// Rebuilds a canonical name string from the structured fields — the
    /// reverse direction of the name-parsing job. Used to exercise spec.md
    /// §8's idempotence-under-round-trip property: for a `state=Complete`
    /// result, `parse(p.to_canonical_string())` should equal `p`.
    ///
    /// Returns `None` for anything that isn't anchored on a uninomial or
    /// genus (non-`Scientific` classifications have nothing to rebuild).
    pub fn to_canonical_string(&self) -> Option<String> {
        let mut out = String::new();

        if self.candidatus {
            out.push_str("Candidatus ");
        }

        if let Some(uninomial) = &self.uninomial {
            if self.notho == Some(Notho::Generic) {
                out.push('×');
            }
            out.push_str(uninomial);
        } else if let Some(genus) = &self.genus {
            out.push_str(genus);
            if let Some(infrageneric) = &self.infrageneric_epithet {
                out.push_str(&format!(" ({infrageneric})"));
            }
            if let Some(specific) = &self.specific_epithet {
                out.push(' ');
                if self.notho == Some(Notho::Specific) {
                    out.push('×');
                }
                out.push_str(specific);
            }
            if let Some(cultivar) = &self.cultivar_epithet {
                out.push_str(&format!(" '{cultivar}'"));
                return Some(out);
            }
            if let Some(strain) = &self.strain {
                out.push_str(" str. ");
                out.push_str(strain);
                return Some(out);
            }
            if let Some(infraspecific) = &self.infraspecific_epithet {
                out.push(' ');
                if let Some(marker) = vocab::marker_for_rank(self.rank) {
                    out.push_str(marker);
                    out.push(' ');
                }
                if self.notho == Some(Notho::Infraspecific) {
                    out.push('×');
                }
                out.push_str(infraspecific);
            }
        } else {
            return None;
        }

        if let Some(basionym) = &self.basionym_authorship {
            out.push_str(" (");
            out.push_str(&render_authorship(basionym, None));
            out.push(')');
        }
        if let Some(combination) = &self.combination_authorship {
            out.push(' ');
            out.push_str(&render_authorship(combination, self.sanctioning_author.as_deref()));
        }

        Some(out)
    }
}

/// Renders one [`Authorship`] block in the order
/// [`crate::regexes::atoms::authorship_fragment`] expects it back:
/// `[ex-team ex ]team[ : sanctioning][, year]`. The sanctioning author is
/// attached to whichever block the caller passes it for — in practice
/// always the combination block, since that is the authorship a sanctioning
/// mark is conventionally placed after.
fn render_authorship(authorship: &Authorship, sanctioning_author: Option<&str>) -> String {
    let mut s = String::new();
    if !authorship.ex_authors.is_empty() {
        s.push_str(&authorship.ex_authors.join(" & "));
        s.push_str(" ex ");
    }
    s.push_str(&authorship.authors.join(" & "));
    if let Some(sanctioning) = sanctioning_author {
        s.push_str(" : ");
        s.push_str(sanctioning);
    }
    if let Some(year) = &authorship.year {
        s.push_str(", ");
        s.push_str(year);
    }
    s
}
