//! Classifies input that matched none of the top-level name patterns into
//! the closed [`NameType`] taxonomy.
//!
//! By the time this runs, the pipeline has already ruled out virus names,
//! hybrid formulas, OTU identifiers and placeholder tokens (those are
//! detected earlier, in [`crate::normalize`]) — so this only has to choose
//! between [`NameType::Informal`] (recognisably name-shaped but with
//! unusual content, e.g. a blacklisted epithet in a position no pattern
//! accepts) and [`NameType::NoName`] (nothing name-like survives). This
//! INFORMAL/PLACEHOLDER boundary has no single obviously-correct answer; we resolve
//! it by keying purely on whether a capitalised leading token is present —
//! see DESIGN.md.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::NameType;
use crate::vocab::AUTHOR_ABBREVIATIONS;

static LOOKS_NAME_SHAPED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-ZÀ-Þ][\p{L}\-]+").unwrap());

pub(crate) fn classify_unmatched(text: &str) -> NameType {
    let trimmed = text.trim();
    if LOOKS_NAME_SHAPED_RE.is_match(trimmed) {
        return NameType::Informal;
    }
    // A recognised author abbreviation anywhere in the remainder is a
    // second, weaker signal that this is name-shaped debris (e.g. a bare
    // authorship fragment left after the genus/epithet failed to match)
    // rather than outright garbage.
    if trimmed.split_whitespace().any(|tok| AUTHOR_ABBREVIATIONS.contains(tok)) {
        return NameType::Informal;
    }
    NameType::NoName
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalised_remainder_is_informal() {
        assert_eq!(classify_unmatched("Abies 123 !!"), NameType::Informal);
    }

    #[test]
    fn lower_case_garbage_is_no_name() {
        assert_eq!(classify_unmatched("a a a a a a"), NameType::NoName);
    }

    #[test]
    fn lower_case_remainder_with_author_abbreviation_is_informal() {
        assert_eq!(classify_unmatched("a a a a L."), NameType::Informal);
    }
}
