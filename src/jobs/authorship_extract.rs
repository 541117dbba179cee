//! Shared helper for pulling an [`Authorship`] out of the `{prefix}_ex`,
//! `{prefix}_authors`, `{prefix}_sanct`, `{prefix}_year` capture groups
//! produced by [`crate::regexes::atoms::authorship_fragment`] — used both
//! for the basionym/combination groups embedded in the name patterns and
//! for the standalone authorship pattern, since both are built from the
//! same atom.

use regex::Captures;

use crate::model::Authorship;

fn split_team(team: &str) -> Vec<String> {
    static SPLIT_RE: once_cell::sync::Lazy<regex::Regex> =
        once_cell::sync::Lazy::new(|| regex::Regex::new(r"\s*(?:,|&|\bet\b|\band\b)\s*").unwrap());
    SPLIT_RE
        .split(team.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts an [`Authorship`] from the given group prefix, returning
/// `None` if the `{prefix}_authors` group did not participate in the match
/// (i.e. that authorship block is simply absent).
pub(crate) fn extract(caps: &Captures, prefix: &str) -> Option<Authorship> {
    let authors_group = caps.name(&format!("{prefix}_authors"))?;
    if authors_group.as_str().trim().is_empty() {
        return None;
    }

    let authors = split_team(authors_group.as_str());
    let ex_authors = caps
        .name(&format!("{prefix}_ex"))
        .map(|m| split_team(m.as_str()))
        .unwrap_or_default();
    let year = caps
        .name(&format!("{prefix}_year"))
        .map(|m| m.as_str().to_string());

    Some(Authorship {
        authors,
        ex_authors,
        year,
    })
}

/// Extracts the sanctioning author string, if any, from `{prefix}_sanct`.
pub(crate) fn extract_sanctioning(caps: &Captures, prefix: &str) -> Option<String> {
    caps.name(&format!("{prefix}_sanct"))
        .map(|m| m.as_str().to_string())
        .filter(|s| !s.is_empty())
}
