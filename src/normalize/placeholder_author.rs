//! Step 3: strip placeholder-author clauses (`auct. non …`, `hort.`); if
//! nothing is left afterwards, or the whole input is a known placeholder
//! token, classify as [`NameType::Placeholder`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Outcome, Unparsable};
use crate::model::{NameType, ParsedName};
use crate::vocab::PLACEHOLDER_TOKENS;

static AUCT_NON_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*\bauct\.?\s+non\b.*$").unwrap());
static HORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*\bhort\.?(\s+ex\.?)?\b").unwrap());

pub fn remove_placeholder_author(input: &str, _out: &mut ParsedName) -> Outcome<String> {
    let trimmed_lower = input.trim().to_lowercase();
    if PLACEHOLDER_TOKENS.contains(trimmed_lower.as_str()) {
        return Err(Unparsable::new(NameType::Placeholder, input.to_string()));
    }

    let without_auct = AUCT_NON_RE.replace(input, "");
    let without_hort = HORT_RE.replace_all(&without_auct, "");
    let result = without_hort.trim().to_string();

    if result.is_empty() {
        return Err(Unparsable::new(NameType::Placeholder, input.to_string()));
    }
    Ok(result)
}
