//! Steps 7–8: `sensu …` / `sec. …` taxonomic references, and residual
//! bibliographic-citation forms that survive step 2.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Outcome;
use crate::model::ParsedName;

static SEC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+(?:sensu|sec\.?)\s+(?P<ref>.+)$").unwrap());

static RESIDUAL_CITATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?x) \s+ (?P<ref> [A-ZÀ-Þ][\w.,&'’\-\s]* \d{4} \.? ) \s*$").unwrap());

pub fn extract_sec_reference(input: &str, out: &mut ParsedName) -> Outcome<String> {
    if let Some(caps) = SEC_RE.captures(input) {
        out.taxonomic_note = Some(caps.name("ref").unwrap().as_str().trim().to_string());
        let whole = caps.get(0).unwrap();
        return Ok(input[..whole.start()].trim().to_string());
    }
    Ok(input.to_string())
}

/// Residual citation forms not already excised by `preparse_nom_ref`
/// (which only matches the `in …` preposition form).
pub fn extract_published_in(input: &str, out: &mut ParsedName) -> Outcome<String> {
    if out.published_in.is_some() {
        return Ok(input.to_string());
    }
    if let Some(caps) = RESIDUAL_CITATION_RE.captures(input) {
        // Don't swallow a trailing authorship+year (e.g. "Mill. 1768") —
        // only treat it as a citation when it carries more than one token
        // before the year, i.e. looks like "Author, Journal 12:3. 1880".
        let reference = caps.name("ref").unwrap().as_str();
        if reference.matches(' ').count() >= 2 || reference.contains(':') {
            out.published_in = Some(reference.trim().to_string());
            let whole = caps.get(0).unwrap();
            return Ok(input[..whole.start()].trim().to_string());
        }
    }
    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_sensu_reference() {
        let mut out = ParsedName::default();
        let res = extract_sec_reference("Abies alba sensu Jones 1880", &mut out).unwrap();
        assert_eq!(res, "Abies alba");
        assert_eq!(out.taxonomic_note.as_deref(), Some("Jones 1880"));
    }

    #[test]
    fn leaves_plain_names() {
        let mut out = ParsedName::default();
        let res = extract_sec_reference("Abies alba Mill.", &mut out).unwrap();
        assert_eq!(res, "Abies alba Mill.");
    }
}
