//! Nomenclatural code markers: which rank-marker tokens each code's own
//! rules actually recognise.
//!
//! [`crate::vocab::ranks::RANK_MARKERS`] maps a marker token to the [`Rank`]
//! it denotes regardless of code; this table is the code-dependent filter on
//! top of it spec.md §4.1 calls out separately ("nomenclatural code
//! markers") and §4.4 requires ("code biases rank-marker resolution"). The
//! zoological code (ICZN) does not regulate infrasubspecific ranks the
//! botanical code (ICN) does — `var.`/`f.` tokens are not code-sanctioned
//! there even though [`RANK_MARKERS`](super::ranks::RANK_MARKERS) maps them
//! to a `Rank` on text alone; bacteriology (ICNP) recognises only
//! `subsp.` below species.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

use crate::model::NomCode;

/// Per-code set of rank-marker tokens that code's own rules recognise.
/// A code with no entry here (`Virus`) recognises none — virus names are
/// never decomposed into ranked epithets in the first place.
pub static CODE_RANK_MARKERS: Lazy<rustc_hash::FxHashMap<NomCode, FxHashSet<&'static str>>> =
    Lazy::new(|| {
        let mut m = rustc_hash::FxHashMap::default();
        m.insert(
            NomCode::Botanical,
            [
                "subsp.", "subsp", "subspecies", "ssp.", "ssp",
                "var.", "var", "variety", "convar.", "convarietas",
                "subvar.", "subvar", "subvarietas",
                "f.", "fo.", "form.", "forma",
                "subf.", "subform.", "subforma",
                "subgen.", "subg.", "subgenus",
                "sect.", "sectio", "subsect.", "subsectio",
                "ser.", "series", "subser.", "subseries",
            ]
            .into_iter()
            .collect(),
        );
        m.insert(
            NomCode::Zoological,
            ["subsp.", "subsp", "subspecies", "ssp.", "ssp", "subgen.", "subg.", "subgenus"]
                .into_iter()
                .collect(),
        );
        m.insert(
            NomCode::Bacterial,
            ["subsp.", "subsp", "subspecies", "ssp.", "ssp"].into_iter().collect(),
        );
        m.insert(
            NomCode::Cultivars,
            ["cultivar.", "cv.", "grex", "gx"].into_iter().collect(),
        );
        m
    });

/// Whether `marker` (an already-normalised token, as matched by
/// [`crate::regexes::atoms::rank_marker_alternation`]) is recognised as a
/// valid rank marker under `code`.
pub fn is_valid_marker_for_code(marker: &str, code: NomCode) -> bool {
    CODE_RANK_MARKERS.get(&code).map(|set| set.contains(marker)).unwrap_or(false)
}
