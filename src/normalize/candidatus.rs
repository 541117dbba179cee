//! Step 1b: strip a leading `Candidatus`/`Ca.` marker used for provisionally
//! described bacterial taxa (`Candidatus Phytoplasma asteris`), recording it
//! on `candidatus` and biasing `code` towards `Bacterial`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Outcome;
use crate::model::{NomCode, ParsedName};

static CANDIDATUS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:candidatus|ca\.)\s+").unwrap());

pub fn strip_candidatus(input: &str, out: &mut ParsedName) -> Outcome<String> {
    if let Some(m) = CANDIDATUS_RE.find(input) {
        out.candidatus = true;
        out.code.get_or_insert(NomCode::Bacterial);
        return Ok(input[m.end()..].to_string());
    }
    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_candidatus_prefix() {
        let mut out = ParsedName::default();
        let res = strip_candidatus("Candidatus Phytoplasma asteris", &mut out).unwrap();
        assert_eq!(res, "Phytoplasma asteris");
        assert!(out.candidatus);
        assert_eq!(out.code, Some(NomCode::Bacterial));
    }

    #[test]
    fn leaves_ordinary_names_untouched() {
        let mut out = ParsedName::default();
        let res = strip_candidatus("Abies alba Mill.", &mut out).unwrap();
        assert_eq!(res, "Abies alba Mill.");
        assert!(!out.candidatus);
    }
}
