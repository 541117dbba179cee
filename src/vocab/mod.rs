//! Frozen vocabulary tables.
//!
//! Every table here is a process-lifetime constant built once behind a
//! [`once_cell::sync::Lazy`] and never mutated afterwards — safe for
//! unsynchronised concurrent reads from any number of parser workers.

pub mod authors;
pub mod blacklist;
pub mod code;
pub mod nom_status;
pub mod placeholders;
pub mod ranks;

pub use authors::{AUTHOR_ABBREVIATIONS, NAME_PARTICLES};
pub use blacklist::EPITHET_BLACKLIST;
pub use code::{CODE_RANK_MARKERS, is_valid_marker_for_code};
pub use nom_status::NOM_STATUS_PHRASES;
pub use placeholders::PLACEHOLDER_TOKENS;
pub use ranks::{RANK_MARKERS, marker_for_rank, rank_marker_for};
