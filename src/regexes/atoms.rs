//! Named regex atoms assembled into the top-level name and authorship
//! patterns.
//!
//! These are plain string fragments, not compiled patterns — the compiled
//! top-level automata live in [`super::name_pattern`] and
//! [`super::authorship_pattern`], each built by `format!`-ing these atoms
//! together. The crate's regex backend (the `regex` crate) guarantees
//! linear-time matching (no backtracking, no lookaround, no backreferences),
//! which is why these fragments never rely on lookahead to exclude
//! blacklisted epithets — that exclusion happens in Rust code after a match,
//! in [`crate::jobs::classify`].

use once_cell::sync::Lazy;

/// A lower-case epithet morpheme: 2+ letters, hyphens allowed, a handful of
/// Latin-extended letters used in botanical epithets.
pub const EPITHET: &str = r"[a-zëïöüäåæœç][a-zëïöüäåæœç\-]+";

/// A capitalised genus-like or uninomial token, 2+ letters.
pub const MONOMIAL: &str = r"[A-ZÀ-Þ][a-zà-öø-ÿ\-]+";

/// Hybrid marker: the multiplication sign or a lone `x`/`X` followed by
/// whitespace, immediately before a name component.
pub const HYBRID_MARK: &str = r"(?:×\s?|[xX]\s)";

/// Four-digit year, optionally bracketed, ranged, or marked uncertain —
/// `1899`, `[1899]`, `1899?`, `1899-1901`, `publ. 1899`.
pub const YEAR_LOOSE: &str = r"(?:publ\.\s?)?\[?\d{4}\]?\??(?:-\d{2,4})?";

/// Alternation of the name-particle vocabulary table
/// ([`crate::vocab::NAME_PARTICLES`]), longest-first so `"van der"` is tried
/// before the shorter `"van"`/`"der"` it would otherwise prefix-match.
static PARTICLE_ALTERNATION: Lazy<String> = Lazy::new(|| {
    let mut particles: Vec<&str> = crate::vocab::NAME_PARTICLES.iter().copied().collect();
    particles.sort_by_key(|p| std::cmp::Reverse(p.len()));
    particles
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|")
});

fn author_token_fragment() -> String {
    format!(
        r"(?:[A-Z]\.\s?(?:[A-Z]\.\s?)*)?(?:(?:{particles})\s)?[A-ZÀ-Ý][\p{{L}}'’\-]*\.?",
        particles = *PARTICLE_ALTERNATION,
    )
}

/// One or more author tokens (initials, an optional
/// [`crate::vocab::NAME_PARTICLES`] particle, a surname) joined by `,`, `&`,
/// `and`, or `et`. Built fresh per call since the `regex` crate needs a new
/// pattern string per named-group prefix; the particle vocabulary itself is
/// computed once via [`PARTICLE_ALTERNATION`].
fn author_team_fragment() -> String {
    let token = author_token_fragment();
    format!(r"{token}(?:\s?(?:,|&|and|et)\s?{token})*")
}

/// Builds `AUTHORSHIP = (ex AUTHOR_TEAM )?(AUTHOR_TEAM)(: SANCTIONING_AUTHOR)?`
/// with the three capture groups named uniquely per call site so several of
/// these can coexist inside one compiled pattern (basionym vs combination).
pub fn authorship_fragment(prefix: &str) -> String {
    let team = author_team_fragment();
    format!(
        r"(?:(?P<{p}_ex>{team})\s+ex\s+)?(?P<{p}_authors>{team})(?:\s*:\s*(?P<{p}_sanct>{team}))?(?:,?\s*(?P<{p}_year>{year}))?",
        p = prefix,
        team = team,
        year = YEAR_LOOSE,
    )
}

/// Rank-marker disjunction built from the vocabulary table, longest literal
/// first so greedy alternation prefers `subsp.` over a prefix match.
pub fn rank_marker_alternation() -> String {
    let mut markers: Vec<&str> = crate::vocab::RANK_MARKERS.keys().copied().collect();
    markers.sort_by_key(|m| std::cmp::Reverse(m.len()));
    markers
        .iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|")
}
