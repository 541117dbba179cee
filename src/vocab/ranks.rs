//! Rank markers (`subsp.`, `var.`, `f.`, …) mapped to canonical [`Rank`]s.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::model::Rank;

/// Ordered marker → rank map. Order matters: the regex atom built from this
/// table (see [`crate::regexes::atoms`]) alternates markers longest-first so
/// `"subsp."` is tried before the shorter `"sp."`-adjacent forms.
pub static RANK_MARKERS: Lazy<IndexMap<&'static str, Rank>> = Lazy::new(|| {
    let mut m = IndexMap::new();
    m.insert("subspecies", Rank::Subspecies);
    m.insert("subsp.", Rank::Subspecies);
    m.insert("subsp", Rank::Subspecies);
    m.insert("ssp.", Rank::Subspecies);
    m.insert("ssp", Rank::Subspecies);
    m.insert("convarietas", Rank::Variety);
    m.insert("convar.", Rank::Variety);
    m.insert("variety", Rank::Variety);
    m.insert("var.", Rank::Variety);
    m.insert("var", Rank::Variety);
    m.insert("subvarietas", Rank::Subvariety);
    m.insert("subvar.", Rank::Subvariety);
    m.insert("subvar", Rank::Subvariety);
    m.insert("forma", Rank::Form);
    m.insert("form.", Rank::Form);
    m.insert("fo.", Rank::Form);
    m.insert("f.", Rank::Form);
    m.insert("subforma", Rank::Subform);
    m.insert("subform.", Rank::Subform);
    m.insert("subf.", Rank::Subform);
    m.insert("cultivar.", Rank::Cultivar);
    m.insert("cv.", Rank::Cultivar);
    m.insert("grex", Rank::Grex);
    m.insert("gx", Rank::Grex);
    m.insert("subgenus", Rank::Subgenus);
    m.insert("subgen.", Rank::Subgenus);
    m.insert("subg.", Rank::Subgenus);
    m.insert("sectio", Rank::Section);
    m.insert("sect.", Rank::Section);
    m.insert("subsectio", Rank::Subsection);
    m.insert("subsect.", Rank::Subsection);
    m.insert("series", Rank::Series);
    m.insert("ser.", Rank::Series);
    m.insert("subseries", Rank::Subseries);
    m.insert("subser.", Rank::Subseries);
    m
});

/// Look up the canonical [`Rank`] for a rank-marker token (case-sensitive,
/// already-normalised text expected — callers should run the normalisation
/// pipeline first).
pub fn rank_marker_for(token: &str) -> Option<Rank> {
    RANK_MARKERS.get(token).copied()
}

/// The reverse direction of [`RANK_MARKERS`]: the canonical marker token for
/// a rank that carries one, used by [`crate::model::ParsedName::to_canonical_string`]
/// to rebuild a marker from a resolved rank. Picks the abbreviated form a
/// name is conventionally written with, not the spelled-out alternative also
/// accepted by [`rank_marker_for`].
pub fn marker_for_rank(rank: Rank) -> Option<&'static str> {
    match rank {
        Rank::Subspecies => Some("subsp."),
        Rank::Variety => Some("var."),
        Rank::Subvariety => Some("subvar."),
        Rank::Form => Some("f."),
        Rank::Subform => Some("subf."),
        Rank::Cultivar => Some("cv."),
        Rank::Grex => Some("grex"),
        Rank::Subgenus => Some("subgen."),
        Rank::Section => Some("sect."),
        Rank::Subsection => Some("subsect."),
        Rank::Series => Some("ser."),
        Rank::Subseries => Some("subser."),
        _ => None,
    }
}
