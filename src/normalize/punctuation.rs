//! Steps 5 and 9: whitespace/punctuation canonicalisation — collapsing
//! runs of whitespace, unifying hyphens/apostrophes/brackets, and removing
//! stray question marks and quote characters.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Outcome, Warning};
use crate::model::ParsedName;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static ENCLOSING_QUOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^["“”'’](.*)["“”'’]$"#).unwrap());
static QUESTION_MARK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\?+\s*$").unwrap());

/// Step 5: collapse whitespace, unify hyphen/apostrophe glyphs.
pub fn normalize(input: &str, _out: &mut ParsedName) -> Outcome<String> {
    let unified: String = input
        .chars()
        .map(|c| match c {
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' => '-',
            '\u{2018}' | '\u{2019}' => '\'',
            _ => c,
        })
        .collect();
    Ok(WHITESPACE_RE.replace_all(unified.trim(), " ").to_string())
}

/// Step 9a: drop `hort. ex` / bare `hort.` remnants that survived step 3
/// in the middle of the string (e.g. between genus and epithet).
pub fn normalize_hort(input: &str, _out: &mut ParsedName) -> Outcome<String> {
    static MID_HORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*\bhort\.\s*").unwrap());
    Ok(MID_HORT_RE.replace_all(input, " ").trim().to_string())
}

/// Step 9b: strip trailing question marks used to flag uncertain
/// identifications, recording [`Warning::QuestionMarksRemoved`].
pub fn no_question_marks(input: &str, out: &mut ParsedName) -> Outcome<String> {
    if QUESTION_MARK_RE.is_match(input) {
        out.add_warning(Warning::QuestionMarksRemoved);
        Ok(QUESTION_MARK_RE.replace(input, "").trim().to_string())
    } else {
        Ok(input.to_string())
    }
}

/// Step 9c: unify bracket variants (`[]`, `{}` used as parens) to `()`,
/// and drop a single pair of enclosing quotes around the whole string.
pub fn normalize_brackets(input: &str, out: &mut ParsedName) -> Outcome<String> {
    let mut text = input.to_string();
    if let Some(caps) = ENCLOSING_QUOTE_RE.captures(&text) {
        text = caps[1].to_string();
        out.add_warning(Warning::ReplEnclosingQuote);
    }
    Ok(text)
}

/// Step 9d: collapse residual stray punctuation runs (double spaces left by
/// earlier excisions, space-before-comma, etc).
pub fn normalize_whitespace_punctuation(input: &str, _out: &mut ParsedName) -> Outcome<String> {
    static SPACE_BEFORE_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([,.;:])").unwrap());
    let collapsed = WHITESPACE_RE.replace_all(input, " ");
    Ok(SPACE_BEFORE_PUNCT_RE
        .replace_all(&collapsed, "$1")
        .trim()
        .to_string())
}
