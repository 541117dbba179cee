//! Regex atom library and the compiled top-level automata.
//!
//! Capture-group contract (Design Note §9): each compiled pattern in
//! [`name_pattern`] exposes named groups only — `genus`, `infrageneric`,
//! `specific`, `infraspecific`, `rank_marker`, `notho`/`infranotho`,
//! `cultivar`, `strain`, `phrase`, `bas_*`, `comb_*`, `tail` — and
//! [`crate::jobs::name_job`] reads them by name, never by index, so an
//! implementer can restructure any one pattern without touching the
//! extractor as long as the names stay the same.

pub mod atoms;
pub mod authorship_pattern;
pub mod name_pattern;

pub use authorship_pattern::AUTHORSHIP_RE;
pub use name_pattern::{
    BINOMIAL_RE, CULTIVAR_RE, INDETERMINATE_RE, LC_MONOMIAL_RE, PHRASE_RE, STRAIN_RE,
    TRINOMIAL_RE, UNINOMIAL_RE,
};
