//! Step 6: match and remove a known nomenclatural status phrase
//! (`nom. nud.`, `comb. nov.`, …) into `nomenclatural_note`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Outcome;
use crate::model::ParsedName;
use crate::vocab::NOM_STATUS_PHRASES;

static NOM_STATUS_RE: Lazy<Regex> = Lazy::new(|| {
    let mut phrases: Vec<&str> = NOM_STATUS_PHRASES.iter().copied().collect();
    phrases.sort_by_key(|p| std::cmp::Reverse(p.len()));
    let alternation = phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i),?\s*\b(?P<status>{alternation})\b\.?")).unwrap()
});

pub fn extract_nom_status(input: &str, out: &mut ParsedName) -> Outcome<String> {
    if let Some(caps) = NOM_STATUS_RE.captures(input) {
        let status = caps.name("status").unwrap().as_str().to_string();
        if status.eq_ignore_ascii_case("ined.") || status.eq_ignore_ascii_case("in ed.") {
            out.manuscript = true;
        }
        out.nomenclatural_note = Some(status);
        let whole = caps.get(0).unwrap();
        let mut text = input.to_string();
        text.replace_range(whole.start()..whole.end(), "");
        return Ok(text.trim().to_string());
    }
    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_nom_nud() {
        let mut out = ParsedName::default();
        let res = extract_nom_status("Abies alba Mill., nom. nud.", &mut out).unwrap();
        assert_eq!(res, "Abies alba Mill.");
        assert_eq!(out.nomenclatural_note.as_deref(), Some("nom. nud."));
    }

    #[test]
    fn leaves_names_without_status() {
        let mut out = ParsedName::default();
        let res = extract_nom_status("Abies alba Mill.", &mut out).unwrap();
        assert_eq!(res, "Abies alba Mill.");
        assert!(out.nomenclatural_note.is_none());
    }

    #[test]
    fn ined_sets_manuscript_flag() {
        let mut out = ParsedName::default();
        extract_nom_status("Abies alba Mill., ined.", &mut out).unwrap();
        assert!(out.manuscript);
    }
}
