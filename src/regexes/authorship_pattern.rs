//! The standalone authorship pattern used by [`crate::jobs::authorship_job`]
//! nine capture groups — basionym ex/author/sanctioning/year,
//! combination ex/author/sanctioning/year, and a tail remainder.

use once_cell::sync::Lazy;
use regex::Regex;

use super::atoms::authorship_fragment;

pub static AUTHORSHIP_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?x)
        ^
        (?:\s*\((?:{bas})\))?
        (?:\s*(?:{comb}))?
        \s*(?P<tail>.*)
        $
        ",
        bas = authorship_fragment("bas"),
        comb = authorship_fragment("comb"),
    );
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid authorship pattern: {e}\n{pattern}"))
});
