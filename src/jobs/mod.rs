//! The two parsing jobs and the classifier they share
//! for unmatched input.

mod authorship_extract;
mod authorship_job;
mod classify;
mod name_job;

pub use authorship_job::{ParsedAuthorship, parse as parse_authorship};
pub use name_job::parse as parse_name;
