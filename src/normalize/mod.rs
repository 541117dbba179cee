//! The normalisation pipeline: a fixed, strictly sequential
//! chain of pure text→text passes run once per `parse` call before the
//! top-level name regex is attempted. Several passes also extract side
//! fields (`published_in`, `nomenclatural_note`, `taxonomic_note`) directly
//! onto the [`ParsedName`] under construction, and any pass may abort the
//! whole parse early with an [`Unparsable`] classification.

mod candidatus;
mod nom_ref;
mod nom_status;
mod placeholder_author;
mod preclean;
mod punctuation;
mod sec_reference;
mod unparsable_scan;

use crate::error::Outcome;
use crate::model::ParsedName;

/// Runs the full pipeline over `raw`, returning the canonicalised remainder
/// or the [`Unparsable`] classification that stopped it early.
pub(crate) fn run(raw: &str, out: &mut ParsedName) -> Outcome<String> {
    let text = preclean::pre_clean(raw, out)?;
    let text = candidatus::strip_candidatus(&text, out)?;
    let text = nom_ref::preparse_nom_ref(&text, out)?;
    let text = placeholder_author::remove_placeholder_author(&text, out)?;
    let text = unparsable_scan::detect_further_unparsable_names(&text, out)?;
    let text = punctuation::normalize(&text, out)?;
    let text = nom_status::extract_nom_status(&text, out)?;
    let text = sec_reference::extract_sec_reference(&text, out)?;
    let text = sec_reference::extract_published_in(&text, out)?;
    let text = punctuation::normalize_hort(&text, out)?;
    let text = punctuation::no_question_marks(&text, out)?;
    let text = punctuation::normalize_brackets(&text, out)?;
    let text = punctuation::normalize_whitespace_punctuation(&text, out)?;

    if text.trim().is_empty() {
        return Err(crate::error::Unparsable::new(
            out_name_type_or_no_name(out),
            raw.to_string(),
        ));
    }

    Ok(text)
}

fn out_name_type_or_no_name(out: &ParsedName) -> crate::model::NameType {
    if out.name_type == crate::model::NameType::Scientific {
        crate::model::NameType::NoName
    } else {
        out.name_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_full_pipeline_on_a_simple_name() {
        let mut out = ParsedName::default();
        let res = run("Abies alba Mill.", &mut out).unwrap();
        assert_eq!(res, "Abies alba Mill.");
    }

    #[test]
    fn empty_remainder_is_unparsable() {
        let mut out = ParsedName::default();
        let err = run("   ", &mut out).unwrap_err();
        assert_eq!(err.name_type, crate::model::NameType::NoName);
    }
}
