//! The top-level name patterns: one compiled [`regex::Regex`] per
//! alternative (uninomial, binomial, trinomial,
//! cultivar/strain/phrase forms), each anchored at the start of the
//! (already-normalised) input and each exposing the *same logical* set of
//! named capture groups to [`crate::jobs::name_job`] — just not packed into
//! a single alternation, because the `regex` crate rejects duplicate group
//! names within one pattern and several alternatives need an "authors"
//! group of their own. See DESIGN.md for the capture-group contract this
//! replaces.

use once_cell::sync::Lazy;
use regex::Regex;

use super::atoms::{EPITHET, HYBRID_MARK, MONOMIAL, authorship_fragment, rank_marker_alternation};

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid name pattern: {e}\n{pattern}"))
}

/// `(×)?UNINOMIAL (authorship)?`
pub static UNINOMIAL_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?x)
        ^
        (?P<notho>{hybrid})?
        (?P<uninomial>{mono})
        (?:\s*\((?:{bas})\))?
        (?:\s+(?:{comb}))?
        \s*(?P<tail>.*)
        $
        ",
        hybrid = HYBRID_MARK,
        mono = MONOMIAL,
        bas = authorship_fragment("bas"),
        comb = authorship_fragment("comb"),
    ))
});

/// `GENUS (Subgen)? (×)?epithet (authorship)?`
pub static BINOMIAL_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?x)
        ^
        (?P<genus>{mono})
        (?:\s*\((?P<infrageneric>{mono})\))?
        \s+
        (?P<notho>{hybrid})?
        (?P<specific>{epi})
        (?:\s*\((?:{bas})\))?
        (?:\s+(?:{comb}))?
        \s*(?P<tail>.*)
        $
        ",
        mono = MONOMIAL,
        hybrid = HYBRID_MARK,
        epi = EPITHET,
        bas = authorship_fragment("bas"),
        comb = authorship_fragment("comb"),
    ))
});

/// `GENUS epithet RANK_MARKER (×)?infra-epithet (authorship)?`
pub static TRINOMIAL_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?x)
        ^
        (?P<genus>{mono})
        (?:\s*\((?P<infrageneric>{mono})\))?
        \s+
        (?P<specific>{epi})
        \s+
        (?:(?P<rank_marker>{ranks})\s+)?
        (?P<infranotho>{hybrid})?
        (?P<infraspecific>{epi})
        (?:\s*\((?:{bas})\))?
        (?:\s+(?:{comb}))?
        \s*(?P<tail>.*)
        $
        ",
        mono = MONOMIAL,
        epi = EPITHET,
        ranks = rank_marker_alternation(),
        hybrid = HYBRID_MARK,
        bas = authorship_fragment("bas"),
        comb = authorship_fragment("comb"),
    ))
});

/// `GENUS epithet? 'Cultivar Name'` — botanical cultivar names.
pub static CULTIVAR_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?x)
        ^
        (?P<genus>{mono})
        (?:\s+(?P<specific>{epi}))?
        \s+
        '(?P<cultivar>[^']+)'
        \s*(?P<tail>.*)
        $
        ",
        mono = MONOMIAL,
        epi = EPITHET,
    ))
});

/// `GENUS epithet strain_token` — microbial/viral strain designations.
pub static STRAIN_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?x)
        ^
        (?P<genus>{mono})
        (?:\s+(?P<specific>{epi}))?
        \s+ str\.? \s+
        (?P<strain>[\w\-/.]+)
        \s*(?P<tail>.*)
        $
        ",
        mono = MONOMIAL,
        epi = EPITHET,
    ))
});

/// `GENUS sp. 'phrase name'` — informal phrase names (undescribed taxa).
pub static PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?x)
        ^
        (?P<genus>{mono})
        \s+ sp\.? \s*
        (?P<phrase>.+)
        $
        ",
        mono = MONOMIAL,
    ))
});

/// A bare lower-case token where a uninomial was expected — matches names
/// that were typed or OCR'd without their leading capital, e.g. `abies`.
/// Callers capitalise the match and attach [`crate::error::Warning::LcMonomial`].
pub static LC_MONOMIAL_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?x)
        ^
        (?P<word>{epi})
        \s*(?P<tail>.*)
        $
        ",
        epi = EPITHET,
    ))
});

/// `GENUS token ('phrase')?` where `token` is checked against the epithet
/// blacklist by the caller — matches indetermined names like `Abies sp.`
/// or `Abies cf. alba`.
pub static INDETERMINATE_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?x)
        ^
        (?P<genus>{mono})
        \s+
        (?P<token>[a-z]+\.?)
        \s*
        (?:'(?P<phrase>[^']+)')?
        \s*(?P<tail>.*)
        $
        ",
        mono = MONOMIAL,
    ))
});
