//! Step 4: scan for inputs that are never decomposed into a `ParsedName` —
//! virus names, hybrid formulas (two full names joined by `×`), and OTU
//! identifiers (`BOLD:…`, `SH123456.08FU`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Outcome, Unparsable};
use crate::model::{NameType, ParsedName};

static VIRUS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:virus|viroid|phage|npv|satellite rna)\b").unwrap());

static HYBRID_FORMULA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^
        [A-ZÀ-Þ][a-zà-öø-ÿ\-]+ \s+ [a-zà-öø-ÿ\-]{2,}
        (?:\s+[\p{L}.]+)*
        \s+ (?:×|[xX]\s) \s*
        [A-ZÀ-Þ][a-zà-öø-ÿ\-]+ \s+ [a-zà-öø-ÿ\-]{2,}
        ",
    )
    .unwrap()
});

static OTU_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:BOLD:[A-Z0-9]+|SH\d+\.\d+FU)$").unwrap());

pub fn detect_further_unparsable_names(input: &str, _out: &mut ParsedName) -> Outcome<String> {
    let trimmed = input.trim();

    if OTU_RE.is_match(trimmed) {
        return Err(Unparsable::new(NameType::Otu, input.to_string()));
    }
    if HYBRID_FORMULA_RE.is_match(trimmed) {
        return Err(Unparsable::new(NameType::HybridFormula, input.to_string()));
    }
    if VIRUS_RE.is_match(trimmed) {
        return Err(Unparsable::new(NameType::Virus, input.to_string()));
    }

    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_otu() {
        let mut out = ParsedName::default();
        let err = detect_further_unparsable_names("BOLD:AAX3687", &mut out).unwrap_err();
        assert_eq!(err.name_type, NameType::Otu);
    }

    #[test]
    fn detects_hybrid_formula() {
        let mut out = ParsedName::default();
        let err =
            detect_further_unparsable_names("Pinus alba × Abies picea Mill.", &mut out).unwrap_err();
        assert_eq!(err.name_type, NameType::HybridFormula);
    }

    #[test]
    fn detects_virus() {
        let mut out = ParsedName::default();
        let err =
            detect_further_unparsable_names("Tobacco mosaic virus", &mut out).unwrap_err();
        assert_eq!(err.name_type, NameType::Virus);
    }

    #[test]
    fn passes_through_ordinary_names() {
        let mut out = ParsedName::default();
        let res = detect_further_unparsable_names("Abies alba Mill.", &mut out).unwrap();
        assert_eq!(res, "Abies alba Mill.");
    }
}
